//! The dosha registry: seven classical afflictions in evaluation order.
//!
//! Six rules are placement patterns; the seventh, Vivaha Melapak, fires
//! for every chart as a standing reminder that marriage compatibility is
//! judged from two charts, never one. Severity comes from the predicate,
//! not the registry, since Mangal Dosha grades by bhava.

use jataka_core::{ALL_GRAHAS, Bhava, Graha, Kundali, SAPTA_GRAHAS, bhava_distance};

use crate::dosha::{DoshaRule, Severity};

// ---------------------------------------------------------------------------
// Predicates
// ---------------------------------------------------------------------------

fn mangal(k: &Kundali) -> Option<Severity> {
    match k.bhava(Graha::Mangal).number() {
        1 | 7 | 8 => Some(Severity::Severe),
        2 | 12 => Some(Severity::Moderate),
        4 => Some(Severity::Mild),
        _ => None,
    }
}

fn kala_sarpa(k: &Kundali) -> Option<Severity> {
    let rahu = k.bhava(Graha::Rahu).number();
    let ketu = k.bhava(Graha::Ketu).number();
    // All seven body grahas strictly inside the arc running from Rahu's
    // bhava forward to Ketu's. A graha sharing a node's bhava breaks it.
    let hemmed = SAPTA_GRAHAS.iter().all(|&g| {
        let h = k.bhava(g).number();
        if rahu < ketu {
            h > rahu && h < ketu
        } else {
            h < ketu || h > rahu
        }
    });
    if hemmed { Some(Severity::Severe) } else { None }
}

fn pitra(k: &Kundali) -> Option<Severity> {
    if k.bhava(Graha::Rahu) == Bhava::Dharma {
        Some(Severity::Severe)
    } else if k.bhava(Graha::Shani) == Bhava::Dharma {
        Some(Severity::Moderate)
    } else if k.bhava(Graha::Surya) == Bhava::Dharma {
        Some(Severity::Mild)
    } else {
        None
    }
}

fn grahan(k: &Kundali) -> Option<Severity> {
    let node_rashis = [k.rashi(Graha::Rahu), k.rashi(Graha::Ketu)];
    let eclipsed = |g: Graha| node_rashis.contains(&k.rashi(g));
    if eclipsed(Graha::Surya) || eclipsed(Graha::Chandra) {
        Some(Severity::Moderate)
    } else {
        None
    }
}

fn shrapit(k: &Kundali) -> Option<Severity> {
    if k.rashi(Graha::Shani) == k.rashi(Graha::Rahu) {
        Some(Severity::Severe)
    } else {
        None
    }
}

fn kemadruma(k: &Kundali) -> Option<Severity> {
    let moon = k.bhava(Graha::Chandra);
    let isolated = ALL_GRAHAS
        .iter()
        .filter(|&&g| g != Graha::Chandra)
        .all(|&g| bhava_distance(k.bhava(g), moon) != 1);
    if isolated { Some(Severity::Moderate) } else { None }
}

fn vivaha_melapak(_k: &Kundali) -> Option<Severity> {
    Some(Severity::Mild)
}

// ---------------------------------------------------------------------------
// Registry
// ---------------------------------------------------------------------------

/// Every dosha rule, in evaluation and output order.
pub static DOSHA_RULES: [DoshaRule; 7] = [
    DoshaRule {
        name: "Mangal Dosha",
        description: "Mangal in the 1st, 2nd, 4th, 7th, 8th or 12th bhava.",
        effects: "Friction and delay in partnership matters, graded by the bhava held.",
        remedies: &[
            "Recite the Hanuman Chalisa on Tuesdays.",
            "Observe a Tuesday fast.",
            "Donate red lentils and jaggery on Tuesdays.",
        ],
        detect: mangal,
    },
    DoshaRule {
        name: "Kala Sarpa Dosha",
        description: "All seven body grahas hemmed within the Rahu-Ketu axis.",
        effects: "Effort meets obstruction; progress arrives late and unevenly.",
        remedies: &[
            "Perform Rahu-Ketu shanti at a Shiva temple.",
            "Recite the Maha Mrityunjaya mantra daily.",
            "Offer worship on Nag Panchami.",
        ],
        detect: kala_sarpa,
    },
    DoshaRule {
        name: "Pitra Dosha",
        description: "Rahu, Shani or Surya occupying the 9th bhava.",
        effects: "Ancestral debts surfacing as recurring family difficulties.",
        remedies: &[
            "Offer tarpan to ancestors on Amavasya.",
            "Perform Shraddha rites in Pitru Paksha.",
            "Feed crows and the needy on Saturdays.",
        ],
        detect: pitra,
    },
    DoshaRule {
        name: "Grahan Dosha",
        description: "Surya or Chandra sharing a rashi with Rahu or Ketu.",
        effects: "Clouded vitality or mind in the eclipsed luminary's affairs.",
        remedies: &[
            "Recite the Aditya Hridaya when Surya is eclipsed.",
            "Recite the Chandra mantra on Mondays when Chandra is eclipsed.",
            "Donate white cloth and rice on eclipse days.",
        ],
        detect: grahan,
    },
    DoshaRule {
        name: "Shrapit Dosha",
        description: "Shani and Rahu sharing a rashi.",
        effects: "A karmic burden carried from earlier generations; slow unwinding.",
        remedies: &[
            "Perform Shani-Rahu shanti.",
            "Light a sesame oil lamp on Saturdays.",
            "Serve elders and ancestors without being asked.",
        ],
        detect: shrapit,
    },
    DoshaRule {
        name: "Kemadruma Dosha",
        description: "No graha in the bhavas flanking Chandra.",
        effects: "The mind unsupported; swings between drive and despondency.",
        remedies: &[
            "Recite the Chandra mantra on Mondays.",
            "Observe the Somvar vrat.",
            "Donate milk and white sweets on Mondays.",
        ],
        detect: kemadruma,
    },
    DoshaRule {
        name: "Vivaha Melapak",
        description: "Standing counsel: match both charts before marriage.",
        effects: "Compatibility cannot be read from a single chart.",
        remedies: &[
            "Compare the charts of both partners through guna milan.",
            "Weigh dosha cancellation between the two charts before deciding.",
        ],
        detect: vivaha_melapak,
    },
];
