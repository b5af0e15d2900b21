//! Graha (planet) definitions and sign lordship.
//!
//! The nine grahas of Jyotish: seven classical bodies plus the two lunar
//! nodes Rahu and Ketu. Lordship, own-sign, and debilitation tables follow
//! Brihat Parashara Hora Shastra. Clean-room implementation from classical
//! conventions.

use serde::Serialize;

use crate::rashi::Rashi;

/// The nine grahas, in traditional order.
///
/// `index()` is the canonical array index used throughout the crate for
/// per-graha tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Graha {
    /// Sun
    Surya,
    /// Moon
    Chandra,
    /// Mars
    Mangal,
    /// Mercury
    Buddh,
    /// Jupiter
    Guru,
    /// Venus
    Shukra,
    /// Saturn
    Shani,
    /// North lunar node
    Rahu,
    /// South lunar node
    Ketu,
}

/// All nine grahas in index order.
pub const ALL_GRAHAS: [Graha; 9] = [
    Graha::Surya,
    Graha::Chandra,
    Graha::Mangal,
    Graha::Buddh,
    Graha::Guru,
    Graha::Shukra,
    Graha::Shani,
    Graha::Rahu,
    Graha::Ketu,
];

/// The seven body grahas (nodes excluded).
pub const SAPTA_GRAHAS: [Graha; 7] = [
    Graha::Surya,
    Graha::Chandra,
    Graha::Mangal,
    Graha::Buddh,
    Graha::Guru,
    Graha::Shukra,
    Graha::Shani,
];

impl Graha {
    /// Sanskrit name.
    pub const fn name(self) -> &'static str {
        match self {
            Graha::Surya => "Surya",
            Graha::Chandra => "Chandra",
            Graha::Mangal => "Mangal",
            Graha::Buddh => "Buddh",
            Graha::Guru => "Guru",
            Graha::Shukra => "Shukra",
            Graha::Shani => "Shani",
            Graha::Rahu => "Rahu",
            Graha::Ketu => "Ketu",
        }
    }

    /// Conventional English name.
    pub const fn english_name(self) -> &'static str {
        match self {
            Graha::Surya => "Sun",
            Graha::Chandra => "Moon",
            Graha::Mangal => "Mars",
            Graha::Buddh => "Mercury",
            Graha::Guru => "Jupiter",
            Graha::Shukra => "Venus",
            Graha::Shani => "Saturn",
            Graha::Rahu => "Rahu",
            Graha::Ketu => "Ketu",
        }
    }

    /// Array index (0 = Surya .. 8 = Ketu).
    pub const fn index(self) -> u8 {
        match self {
            Graha::Surya => 0,
            Graha::Chandra => 1,
            Graha::Mangal => 2,
            Graha::Buddh => 3,
            Graha::Guru => 4,
            Graha::Shukra => 5,
            Graha::Shani => 6,
            Graha::Rahu => 7,
            Graha::Ketu => 8,
        }
    }

    /// Reverse of [`Graha::index`].
    pub fn from_index(idx: u8) -> Option<Graha> {
        ALL_GRAHAS.get(idx as usize).copied()
    }
}

// ---------------------------------------------------------------------------
// Lordship and dignity tables
// ---------------------------------------------------------------------------

/// Lord (ruler) of a rashi.
///
/// Surya and Chandra rule one rashi each; the five tara grahas rule two.
/// Rahu and Ketu rule none.
pub const fn rashi_lord(rashi: Rashi) -> Graha {
    match rashi {
        Rashi::Mesha => Graha::Mangal,
        Rashi::Vrishabha => Graha::Shukra,
        Rashi::Mithuna => Graha::Buddh,
        Rashi::Karka => Graha::Chandra,
        Rashi::Simha => Graha::Surya,
        Rashi::Kanya => Graha::Buddh,
        Rashi::Tula => Graha::Shukra,
        Rashi::Vrischika => Graha::Mangal,
        Rashi::Dhanu => Graha::Guru,
        Rashi::Makara => Graha::Shani,
        Rashi::Kumbha => Graha::Shani,
        Rashi::Meena => Graha::Guru,
    }
}

/// Rashis owned by a graha. Empty for the nodes.
pub const fn own_rashis(graha: Graha) -> &'static [Rashi] {
    match graha {
        Graha::Surya => &[Rashi::Simha],
        Graha::Chandra => &[Rashi::Karka],
        Graha::Mangal => &[Rashi::Mesha, Rashi::Vrischika],
        Graha::Buddh => &[Rashi::Mithuna, Rashi::Kanya],
        Graha::Guru => &[Rashi::Dhanu, Rashi::Meena],
        Graha::Shukra => &[Rashi::Vrishabha, Rashi::Tula],
        Graha::Shani => &[Rashi::Makara, Rashi::Kumbha],
        Graha::Rahu | Graha::Ketu => &[],
    }
}

/// Debilitation (neecha) rashi of a graha. `None` for the nodes.
pub const fn debilitation_rashi(graha: Graha) -> Option<Rashi> {
    match graha {
        Graha::Surya => Some(Rashi::Tula),
        Graha::Chandra => Some(Rashi::Vrischika),
        Graha::Mangal => Some(Rashi::Karka),
        Graha::Buddh => Some(Rashi::Meena),
        Graha::Guru => Some(Rashi::Makara),
        Graha::Shukra => Some(Rashi::Kanya),
        Graha::Shani => Some(Rashi::Mesha),
        Graha::Rahu | Graha::Ketu => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rashi::ALL_RASHIS;

    #[test]
    fn all_grahas_count() {
        assert_eq!(ALL_GRAHAS.len(), 9);
        assert_eq!(SAPTA_GRAHAS.len(), 7);
    }

    #[test]
    fn graha_indices_sequential() {
        for (i, g) in ALL_GRAHAS.iter().enumerate() {
            assert_eq!(g.index() as usize, i);
            assert_eq!(Graha::from_index(i as u8), Some(*g));
        }
        assert_eq!(Graha::from_index(9), None);
    }

    #[test]
    fn rashi_lordship_dual_ruled() {
        // Mangal: Mesha and Vrischika
        assert_eq!(rashi_lord(Rashi::Mesha), Graha::Mangal);
        assert_eq!(rashi_lord(Rashi::Vrischika), Graha::Mangal);
        // Shukra: Vrishabha and Tula
        assert_eq!(rashi_lord(Rashi::Vrishabha), Graha::Shukra);
        assert_eq!(rashi_lord(Rashi::Tula), Graha::Shukra);
        // Buddh: Mithuna and Kanya
        assert_eq!(rashi_lord(Rashi::Mithuna), Graha::Buddh);
        assert_eq!(rashi_lord(Rashi::Kanya), Graha::Buddh);
        // Guru: Dhanu and Meena
        assert_eq!(rashi_lord(Rashi::Dhanu), Graha::Guru);
        assert_eq!(rashi_lord(Rashi::Meena), Graha::Guru);
        // Shani: Makara and Kumbha
        assert_eq!(rashi_lord(Rashi::Makara), Graha::Shani);
        assert_eq!(rashi_lord(Rashi::Kumbha), Graha::Shani);
    }

    #[test]
    fn luminaries_rule_one_rashi() {
        assert_eq!(rashi_lord(Rashi::Simha), Graha::Surya);
        assert_eq!(rashi_lord(Rashi::Karka), Graha::Chandra);
    }

    #[test]
    fn own_rashis_match_lordship() {
        for rashi in ALL_RASHIS {
            let lord = rashi_lord(rashi);
            assert!(
                own_rashis(lord).contains(&rashi),
                "{} should own {}",
                lord.name(),
                rashi.name()
            );
        }
    }

    #[test]
    fn nodes_own_nothing() {
        assert!(own_rashis(Graha::Rahu).is_empty());
        assert!(own_rashis(Graha::Ketu).is_empty());
        assert_eq!(debilitation_rashi(Graha::Rahu), None);
        assert_eq!(debilitation_rashi(Graha::Ketu), None);
    }

    #[test]
    fn debilitation_seven_entries() {
        let debilitated: Vec<_> = ALL_GRAHAS
            .iter()
            .filter_map(|&g| debilitation_rashi(g))
            .collect();
        assert_eq!(debilitated.len(), 7);
        // Exaltation opposite: Surya exalted in Mesha, debilitated in Tula.
        assert_eq!(debilitation_rashi(Graha::Surya), Some(Rashi::Tula));
        assert_eq!(debilitation_rashi(Graha::Shani), Some(Rashi::Mesha));
    }
}
