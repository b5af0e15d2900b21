use std::collections::BTreeMap;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use serde::Deserialize;
use serde_json::json;

use jataka_core::{
    ALL_GRAHAS, ALL_VARGAS, Chart, ChartMeta, Graha, GrahaPosition, Kundali, Lagna, VargaChart,
    varga_chart,
};
use jataka_phala::{ChartHealth, chart_health, detect_doshas, detect_yogas};

#[derive(Parser)]
#[command(name = "jataka", about = "Jataka chart analysis CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Divisional (varga) charts from a cast chart
    Varga {
        /// Path to the chart JSON file
        #[arg(long)]
        chart: PathBuf,
        /// Divisor, e.g. 9 for the navamsha; omit for all named vargas
        #[arg(long)]
        division: Option<u16>,
        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// House table: every graha's rashi and bhava
    Bhava {
        /// Path to the chart JSON file
        #[arg(long)]
        chart: PathBuf,
        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Detect yogas (combinations)
    Yoga {
        /// Path to the chart JSON file
        #[arg(long)]
        chart: PathBuf,
        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Detect doshas (afflictions) and the health score
    Dosha {
        /// Path to the chart JSON file
        #[arg(long)]
        chart: PathBuf,
        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Chart health score only
    Score {
        /// Path to the chart JSON file
        #[arg(long)]
        chart: PathBuf,
        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

// ---------------------------------------------------------------------------
// Chart file input
// ---------------------------------------------------------------------------

#[derive(Deserialize)]
struct ChartFile {
    ascendant: AscendantInput,
    planets: BTreeMap<String, PositionInput>,
    #[serde(default)]
    meta: Option<MetaInput>,
}

#[derive(Deserialize)]
struct AscendantInput {
    longitude: f64,
}

#[derive(Deserialize)]
struct PositionInput {
    longitude: f64,
    #[serde(default)]
    latitude: f64,
    #[serde(default)]
    speed: f64,
}

#[derive(Deserialize)]
struct MetaInput {
    #[serde(default)]
    ayanamsa: String,
    #[serde(default)]
    house_system: String,
}

fn parse_graha_name(s: &str) -> Graha {
    match s.to_lowercase().as_str() {
        "sun" | "surya" => Graha::Surya,
        "moon" | "chandra" => Graha::Chandra,
        "mars" | "mangal" => Graha::Mangal,
        "mercury" | "buddh" => Graha::Buddh,
        "jupiter" | "guru" => Graha::Guru,
        "venus" | "shukra" => Graha::Shukra,
        "saturn" | "shani" => Graha::Shani,
        "rahu" => Graha::Rahu,
        "ketu" => Graha::Ketu,
        _ => {
            eprintln!("Invalid planet name: {s}");
            eprintln!("Valid: Sun, Moon, Mars, Mercury, Jupiter, Venus, Saturn, Rahu, Ketu");
            std::process::exit(1);
        }
    }
}

fn load_chart(path: &PathBuf) -> Chart {
    let text = std::fs::read_to_string(path).unwrap_or_else(|e| {
        eprintln!("Failed to read {}: {e}", path.display());
        std::process::exit(1);
    });
    let file: ChartFile = serde_json::from_str(&text).unwrap_or_else(|e| {
        eprintln!("Failed to parse {}: {e}", path.display());
        std::process::exit(1);
    });

    let entries: Vec<(Graha, GrahaPosition)> = file
        .planets
        .iter()
        .map(|(name, p)| {
            (
                parse_graha_name(name),
                GrahaPosition {
                    longitude: p.longitude,
                    latitude: p.latitude,
                    speed: p.speed,
                },
            )
        })
        .collect();
    let meta = match file.meta {
        Some(m) => ChartMeta {
            ayanamsa: m.ayanamsa,
            house_system: m.house_system,
        },
        None => ChartMeta::default(),
    };
    let lagna = Lagna {
        longitude: file.ascendant.longitude,
    };

    Chart::from_entries(entries, lagna, meta).unwrap_or_else(|e| {
        eprintln!("Invalid chart: {e}");
        std::process::exit(1);
    })
}

// ---------------------------------------------------------------------------
// Output
// ---------------------------------------------------------------------------

fn print_varga_text(v: &VargaChart) {
    let label = ALL_VARGAS
        .iter()
        .find(|named| named.divisions() == v.divisions)
        .map(|named| named.name())
        .unwrap_or("Varga");
    println!(
        "D{} {} - lagna {} ({})",
        v.divisions,
        label,
        v.lagna.name(),
        v.lagna.western_name()
    );
    for g in ALL_GRAHAS {
        println!(
            "  {:8} {:10} bhava {:>2}",
            g.name(),
            v.rashi(g).name(),
            v.bhava(g).number()
        );
    }
}

fn require_varga(chart: &Chart, divisions: u16) -> VargaChart {
    varga_chart(chart, divisions, None).unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        std::process::exit(1);
    })
}

fn print_health_text(health: &ChartHealth) {
    println!("Health: {}/100 ({})", health.score, health.level.name());
}

fn to_json<T: serde::Serialize>(value: &T) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|e| {
        eprintln!("Failed to serialize output: {e}");
        std::process::exit(1);
    })
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Varga {
            chart,
            division,
            json,
        } => {
            let chart = load_chart(&chart);
            let charts: Vec<VargaChart> = match division {
                Some(n) => vec![require_varga(&chart, n)],
                None => ALL_VARGAS
                    .iter()
                    .map(|v| require_varga(&chart, v.divisions()))
                    .collect(),
            };
            if json {
                println!("{}", to_json(&charts));
            } else {
                for v in &charts {
                    print_varga_text(v);
                }
            }
        }

        Commands::Bhava { chart, json } => {
            let chart = load_chart(&chart);
            let kundali = Kundali::cast(&chart);
            if json {
                let rows: Vec<_> = ALL_GRAHAS
                    .iter()
                    .map(|&g| {
                        json!({
                            "graha": g.name(),
                            "planet": g.english_name(),
                            "rashi": kundali.rashi(g).name(),
                            "bhava": kundali.bhava(g).number(),
                            "bhava_name": kundali.bhava(g).name(),
                        })
                    })
                    .collect();
                let out = json!({
                    "lagna": kundali.lagna_rashi().name(),
                    "grahas": rows,
                });
                println!("{}", to_json(&out));
            } else {
                println!(
                    "Lagna: {} ({})",
                    kundali.lagna_rashi().name(),
                    kundali.lagna_rashi().western_name()
                );
                for g in ALL_GRAHAS {
                    println!(
                        "  {:8} ({:8}) {:10} bhava {:>2} ({})",
                        g.name(),
                        g.english_name(),
                        kundali.rashi(g).name(),
                        kundali.bhava(g).number(),
                        kundali.bhava(g).name()
                    );
                }
            }
        }

        Commands::Yoga { chart, json } => {
            let chart = load_chart(&chart);
            let matches = detect_yogas(&Kundali::cast(&chart));
            if json {
                println!("{}", to_json(&matches));
            } else {
                println!("{} yoga(s) detected", matches.len());
                for m in &matches {
                    println!(
                        "  {:24} {:8} {:10}",
                        m.name,
                        m.strength.name(),
                        m.category.name()
                    );
                    println!("      {}", m.description);
                }
            }
        }

        Commands::Dosha { chart, json } => {
            let chart = load_chart(&chart);
            let matches = detect_doshas(&Kundali::cast(&chart));
            let health = chart_health(&matches);
            if json {
                let out = json!({
                    "doshas": matches,
                    "health": health,
                });
                println!("{}", to_json(&out));
            } else {
                println!("{} dosha(s) detected", matches.len());
                for m in &matches {
                    println!("  {:18} {}", m.name, m.severity.name());
                    println!("      {}", m.description);
                    for remedy in m.remedies {
                        println!("      - {remedy}");
                    }
                }
                print_health_text(&health);
            }
        }

        Commands::Score { chart, json } => {
            let chart = load_chart(&chart);
            let health = chart_health(&detect_doshas(&Kundali::cast(&chart)));
            if json {
                println!("{}", to_json(&health));
            } else {
                print_health_text(&health);
            }
        }
    }
}
