//! Yoga (combination) detection engine.
//!
//! A yoga rule is static identity plus a predicate over a [`Kundali`].
//! The registry in [`crate::yoga_data`] is evaluated in order; each rule
//! contributes at most one match, rules never suppress one another, and
//! the output order is the registry order. Related rules firing together
//! (Sunapha alongside Durudhara, say) is intended behavior: downstream
//! presentation decides what to collapse.

use serde::Serialize;

use jataka_core::{Graha, Kundali, bhava_offset, debilitation_rashi, own_rashis};

/// Broad effect class of a yoga.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum YogaCategory {
    Beneficial,
    Malefic,
    Neutral,
}

impl YogaCategory {
    pub const fn name(self) -> &'static str {
        match self {
            YogaCategory::Beneficial => "beneficial",
            YogaCategory::Malefic => "malefic",
            YogaCategory::Neutral => "neutral",
        }
    }
}

/// How emphatically a detected yoga manifests in the given chart.
///
/// Most rules report a fixed strength; a handful elevate or lower it
/// based on placement quality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum YogaStrength {
    Weak,
    Moderate,
    Strong,
}

impl YogaStrength {
    pub const fn name(self) -> &'static str {
        match self {
            YogaStrength::Weak => "weak",
            YogaStrength::Moderate => "moderate",
            YogaStrength::Strong => "strong",
        }
    }
}

/// A yoga found in a chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct YogaMatch {
    pub name: &'static str,
    pub category: YogaCategory,
    pub strength: YogaStrength,
    pub description: &'static str,
    pub effects: &'static str,
}

/// A detection rule. `detect` returns the strength when the yoga is
/// present, `None` otherwise.
pub struct YogaRule {
    pub name: &'static str,
    pub category: YogaCategory,
    pub description: &'static str,
    pub effects: &'static str,
    pub detect: fn(&Kundali) -> Option<YogaStrength>,
}

/// Evaluate the whole registry against a kundali.
pub fn detect_yogas(kundali: &Kundali) -> Vec<YogaMatch> {
    crate::yoga_data::YOGA_RULES
        .iter()
        .filter_map(|rule| {
            (rule.detect)(kundali).map(|strength| YogaMatch {
                name: rule.name,
                category: rule.category,
                strength,
                description: rule.description,
                effects: rule.effects,
            })
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Shared predicate vocabulary
// ---------------------------------------------------------------------------

/// The three natural benefics used by house-quality rules.
pub const NATURAL_BENEFICS: [Graha; 3] = [Graha::Guru, Graha::Shukra, Graha::Buddh];

/// The three natural malefics used by house-quality rules.
pub const NATURAL_MALEFICS: [Graha; 3] = [Graha::Shani, Graha::Mangal, Graha::Surya];

/// The five non-luminary body grahas, the candidate set for rules that
/// count "planets other than the luminaries" around an anchor.
pub const TARA_GRAHAS: [Graha; 5] = [
    Graha::Mangal,
    Graha::Buddh,
    Graha::Guru,
    Graha::Shukra,
    Graha::Shani,
];

/// Two grahas in the same bhava.
pub fn co_placed(k: &Kundali, a: Graha, b: Graha) -> bool {
    k.bhava(a) == k.bhava(b)
}

/// 1-based counted offset from one graha's bhava to another's.
pub fn graha_offset(k: &Kundali, from: Graha, to: Graha) -> u8 {
    bhava_offset(k.bhava(from), k.bhava(to))
}

/// Graha sits in one of its own rashis.
pub fn in_own_rashi(k: &Kundali, graha: Graha) -> bool {
    own_rashis(graha).contains(&k.rashi(graha))
}

/// Graha sits in its debilitation rashi, with no cancellation applied.
///
/// Cancellation (neecha bhanga) is deliberately not evaluated here; rules
/// that want the raw debilitation condition call this and say so in their
/// descriptions.
pub fn in_debilitation_rashi_uncancelled(k: &Kundali, graha: Graha) -> bool {
    match debilitation_rashi(graha) {
        Some(rashi) => k.rashi(graha) == rashi,
        None => false,
    }
}

/// Any natural benefic in the bhava.
pub fn benefic_in(k: &Kundali, bhava: jataka_core::Bhava) -> bool {
    NATURAL_BENEFICS.iter().any(|&g| k.bhava(g) == bhava)
}

/// Any natural malefic in the bhava.
pub fn malefic_in(k: &Kundali, bhava: jataka_core::Bhava) -> bool {
    NATURAL_MALEFICS.iter().any(|&g| k.bhava(g) == bhava)
}
