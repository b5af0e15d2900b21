//! Dosha detection and the chart health score.
//!
//! Doshas are the affliction counterpart to yogas: a short, ordered
//! registry of placement patterns held to burden a chart. Each detected
//! dosha carries a severity, and the severities fold into a single
//! 0 to 100 health score with a coarse five-band reading.

use serde::Serialize;

use jataka_core::Kundali;

// ---------------------------------------------------------------------------
// Severity and match types
// ---------------------------------------------------------------------------

/// How heavily a detected dosha weighs on the chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Severity {
    Mild,
    Moderate,
    Severe,
}

impl Severity {
    /// Points deducted from the health score.
    pub const fn weight(self) -> u8 {
        match self {
            Severity::Mild => 10,
            Severity::Moderate => 20,
            Severity::Severe => 35,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Severity::Mild => "mild",
            Severity::Moderate => "moderate",
            Severity::Severe => "severe",
        }
    }
}

/// One detected dosha, with its registry text and remedial measures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DoshaMatch {
    pub name: &'static str,
    pub severity: Severity,
    pub description: &'static str,
    pub effects: &'static str,
    pub remedies: &'static [&'static str],
}

/// A dosha rule: identity text plus a predicate producing the severity.
///
/// Severity may depend on the placement (Mangal Dosha grades by bhava),
/// so the predicate returns it rather than the rule carrying a fixed one.
pub struct DoshaRule {
    pub name: &'static str,
    pub description: &'static str,
    pub effects: &'static str,
    pub remedies: &'static [&'static str],
    pub detect: fn(&Kundali) -> Option<Severity>,
}

// ---------------------------------------------------------------------------
// Detection
// ---------------------------------------------------------------------------

/// Run every dosha rule against the kundali, in registry order.
pub fn detect_doshas(kundali: &Kundali) -> Vec<DoshaMatch> {
    crate::dosha_data::DOSHA_RULES
        .iter()
        .filter_map(|rule| {
            (rule.detect)(kundali).map(|severity| DoshaMatch {
                name: rule.name,
                severity,
                description: rule.description,
                effects: rule.effects,
                remedies: rule.remedies,
            })
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Health score
// ---------------------------------------------------------------------------

/// Five-band reading of the numeric score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum HealthLevel {
    Excellent,
    Good,
    Moderate,
    Challenging,
    Severe,
}

impl HealthLevel {
    pub const fn from_score(score: u8) -> Self {
        match score {
            80.. => HealthLevel::Excellent,
            60..=79 => HealthLevel::Good,
            40..=59 => HealthLevel::Moderate,
            20..=39 => HealthLevel::Challenging,
            _ => HealthLevel::Severe,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            HealthLevel::Excellent => "excellent",
            HealthLevel::Good => "good",
            HealthLevel::Moderate => "moderate",
            HealthLevel::Challenging => "challenging",
            HealthLevel::Severe => "severe",
        }
    }
}

/// The aggregate affliction reading for a chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ChartHealth {
    pub score: u8,
    pub level: HealthLevel,
}

/// Fold detected doshas into a health score.
///
/// Starts from 100 and subtracts each severity weight, clamping at zero.
pub fn chart_health(matches: &[DoshaMatch]) -> ChartHealth {
    let penalty: u32 = matches.iter().map(|m| u32::from(m.severity.weight())).sum();
    let score = 100u32.saturating_sub(penalty) as u8;
    ChartHealth {
        score,
        level: HealthLevel::from_score(score),
    }
}
