//! Bhava (house) definitions and whole-sign house addressing.
//!
//! Houses are pure sign arithmetic here: the rashi holding the lagna is
//! bhava 1 and each subsequent rashi is the next bhava. No cusp degrees,
//! no unequal houses, no latitude dependence.

use serde::Serialize;

use crate::rashi::{ALL_RASHIS, Rashi};

/// The twelve bhavas in order, named after their classical significations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Bhava {
    /// 1st: self, body
    Tanu,
    /// 2nd: wealth, speech
    Dhana,
    /// 3rd: siblings, courage
    Sahaja,
    /// 4th: home, mother
    Bandhu,
    /// 5th: children, intellect
    Putra,
    /// 6th: obstacles, disease
    Ari,
    /// 7th: partnership, marriage
    Yuvati,
    /// 8th: longevity, upheaval
    Randhra,
    /// 9th: fortune, dharma
    Dharma,
    /// 10th: career, karma
    Karma,
    /// 11th: gains
    Labha,
    /// 12th: loss, liberation
    Vyaya,
}

/// All twelve bhavas in index order.
pub const ALL_BHAVAS: [Bhava; 12] = [
    Bhava::Tanu,
    Bhava::Dhana,
    Bhava::Sahaja,
    Bhava::Bandhu,
    Bhava::Putra,
    Bhava::Ari,
    Bhava::Yuvati,
    Bhava::Randhra,
    Bhava::Dharma,
    Bhava::Karma,
    Bhava::Labha,
    Bhava::Vyaya,
];

/// The four angular houses (1, 4, 7, 10).
pub const KENDRA_BHAVAS: [Bhava; 4] = [Bhava::Tanu, Bhava::Bandhu, Bhava::Yuvati, Bhava::Karma];

/// The three trine houses (1, 5, 9).
pub const TRIKONA_BHAVAS: [Bhava; 3] = [Bhava::Tanu, Bhava::Putra, Bhava::Dharma];

/// The three difficult houses (6, 8, 12).
pub const DUSTHANA_BHAVAS: [Bhava; 3] = [Bhava::Ari, Bhava::Randhra, Bhava::Vyaya];

/// The four growth houses (3, 6, 10, 11).
pub const UPACHAYA_BHAVAS: [Bhava; 4] = [Bhava::Sahaja, Bhava::Ari, Bhava::Karma, Bhava::Labha];

impl Bhava {
    /// Sanskrit name.
    pub const fn name(self) -> &'static str {
        match self {
            Bhava::Tanu => "Tanu",
            Bhava::Dhana => "Dhana",
            Bhava::Sahaja => "Sahaja",
            Bhava::Bandhu => "Bandhu",
            Bhava::Putra => "Putra",
            Bhava::Ari => "Ari",
            Bhava::Yuvati => "Yuvati",
            Bhava::Randhra => "Randhra",
            Bhava::Dharma => "Dharma",
            Bhava::Karma => "Karma",
            Bhava::Labha => "Labha",
            Bhava::Vyaya => "Vyaya",
        }
    }

    /// Primary signification, for display.
    pub const fn meaning(self) -> &'static str {
        match self {
            Bhava::Tanu => "self",
            Bhava::Dhana => "wealth",
            Bhava::Sahaja => "siblings",
            Bhava::Bandhu => "home",
            Bhava::Putra => "children",
            Bhava::Ari => "obstacles",
            Bhava::Yuvati => "partnership",
            Bhava::Randhra => "longevity",
            Bhava::Dharma => "fortune",
            Bhava::Karma => "career",
            Bhava::Labha => "gains",
            Bhava::Vyaya => "loss",
        }
    }

    /// Array index (0 = Tanu .. 11 = Vyaya).
    pub const fn index(self) -> u8 {
        match self {
            Bhava::Tanu => 0,
            Bhava::Dhana => 1,
            Bhava::Sahaja => 2,
            Bhava::Bandhu => 3,
            Bhava::Putra => 4,
            Bhava::Ari => 5,
            Bhava::Yuvati => 6,
            Bhava::Randhra => 7,
            Bhava::Dharma => 8,
            Bhava::Karma => 9,
            Bhava::Labha => 10,
            Bhava::Vyaya => 11,
        }
    }

    /// Traditional 1-based house number (1 = Tanu .. 12 = Vyaya).
    pub const fn number(self) -> u8 {
        self.index() + 1
    }

    /// Reverse of [`Bhava::number`].
    pub fn from_number(number: u8) -> Option<Bhava> {
        if number == 0 {
            return None;
        }
        ALL_BHAVAS.get(number as usize - 1).copied()
    }

    /// Angular house (1, 4, 7, 10).
    pub const fn is_kendra(self) -> bool {
        matches!(self.number(), 1 | 4 | 7 | 10)
    }

    /// Trine house (1, 5, 9).
    pub const fn is_trikona(self) -> bool {
        matches!(self.number(), 1 | 5 | 9)
    }

    /// Difficult house (6, 8, 12).
    pub const fn is_dusthana(self) -> bool {
        matches!(self.number(), 6 | 8 | 12)
    }

    /// Growth house (3, 6, 10, 11).
    pub const fn is_upachaya(self) -> bool {
        matches!(self.number(), 3 | 6 | 10 | 11)
    }
}

// ---------------------------------------------------------------------------
// Whole-sign addressing
// ---------------------------------------------------------------------------

/// Bhava occupied by `target` in a chart whose lagna falls in `lagna`.
///
/// The lagna's own rashi is always bhava 1, and the mapping is a bijection
/// over the twelve rashis for any fixed lagna.
pub const fn bhava_from_lagna(target: Rashi, lagna: Rashi) -> Bhava {
    ALL_BHAVAS[((target.index() + 12 - lagna.index()) % 12) as usize]
}

/// Rashi occupying a given bhava for a given lagna. Inverse of
/// [`bhava_from_lagna`].
pub const fn rashi_of_bhava(bhava: Bhava, lagna: Rashi) -> Rashi {
    ALL_RASHIS[((lagna.index() + bhava.index()) % 12) as usize]
}

/// 1-based counted offset from one bhava to another.
///
/// Counting is inclusive in the traditional manner: the offset from a bhava
/// to itself is 1, to the next bhava 2, and to the previous bhava 12.
pub const fn bhava_offset(from: Bhava, to: Bhava) -> u8 {
    (to.index() + 12 - from.index()) % 12 + 1
}

/// Minimal circular distance between two bhavas, in the range 0..=6.
pub const fn bhava_distance(a: Bhava, b: Bhava) -> u8 {
    let d = (b.index() + 12 - a.index()) % 12;
    if d > 6 { 12 - d } else { d }
}

/// True when a counted offset lands on an angle (1st, 4th, 7th or 10th).
pub const fn is_kendra_offset(offset: u8) -> bool {
    matches!(offset, 1 | 4 | 7 | 10)
}
