//! Rashi (sidereal zodiac sign) definitions and the longitude gate.
//!
//! Whole-sign logic everywhere downstream depends on longitudes being in
//! canonical range, so [`rashi_split`] validates rather than normalizes:
//! a longitude outside `[0, 360)` is upstream breakage and is rejected.

use serde::Serialize;

use crate::error::ChartError;

/// The twelve rashis in zodiacal order, Mesha first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Rashi {
    Mesha,
    Vrishabha,
    Mithuna,
    Karka,
    Simha,
    Kanya,
    Tula,
    Vrischika,
    Dhanu,
    Makara,
    Kumbha,
    Meena,
}

/// All twelve rashis in index order.
pub const ALL_RASHIS: [Rashi; 12] = [
    Rashi::Mesha,
    Rashi::Vrishabha,
    Rashi::Mithuna,
    Rashi::Karka,
    Rashi::Simha,
    Rashi::Kanya,
    Rashi::Tula,
    Rashi::Vrischika,
    Rashi::Dhanu,
    Rashi::Makara,
    Rashi::Kumbha,
    Rashi::Meena,
];

impl Rashi {
    /// Sanskrit name.
    pub const fn name(self) -> &'static str {
        match self {
            Rashi::Mesha => "Mesha",
            Rashi::Vrishabha => "Vrishabha",
            Rashi::Mithuna => "Mithuna",
            Rashi::Karka => "Karka",
            Rashi::Simha => "Simha",
            Rashi::Kanya => "Kanya",
            Rashi::Tula => "Tula",
            Rashi::Vrischika => "Vrischika",
            Rashi::Dhanu => "Dhanu",
            Rashi::Makara => "Makara",
            Rashi::Kumbha => "Kumbha",
            Rashi::Meena => "Meena",
        }
    }

    /// Western zodiac name.
    pub const fn western_name(self) -> &'static str {
        match self {
            Rashi::Mesha => "Aries",
            Rashi::Vrishabha => "Taurus",
            Rashi::Mithuna => "Gemini",
            Rashi::Karka => "Cancer",
            Rashi::Simha => "Leo",
            Rashi::Kanya => "Virgo",
            Rashi::Tula => "Libra",
            Rashi::Vrischika => "Scorpio",
            Rashi::Dhanu => "Sagittarius",
            Rashi::Makara => "Capricorn",
            Rashi::Kumbha => "Aquarius",
            Rashi::Meena => "Pisces",
        }
    }

    /// Array index (0 = Mesha .. 11 = Meena).
    pub const fn index(self) -> u8 {
        match self {
            Rashi::Mesha => 0,
            Rashi::Vrishabha => 1,
            Rashi::Mithuna => 2,
            Rashi::Karka => 3,
            Rashi::Simha => 4,
            Rashi::Kanya => 5,
            Rashi::Tula => 6,
            Rashi::Vrischika => 7,
            Rashi::Dhanu => 8,
            Rashi::Makara => 9,
            Rashi::Kumbha => 10,
            Rashi::Meena => 11,
        }
    }

    /// Traditional 1-based sign number (1 = Mesha .. 12 = Meena).
    pub const fn number(self) -> u8 {
        self.index() + 1
    }

    /// Reverse of [`Rashi::index`].
    pub fn from_index(idx: u8) -> Option<Rashi> {
        ALL_RASHIS.get(idx as usize).copied()
    }

    /// Reverse of [`Rashi::number`].
    pub fn from_number(number: u8) -> Option<Rashi> {
        if number == 0 {
            return None;
        }
        Rashi::from_index(number - 1)
    }
}

/// Modality (svabhava) of a rashi.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum RashiSvabhava {
    /// Movable: Mesha, Karka, Tula, Makara.
    Chara,
    /// Fixed: Vrishabha, Simha, Vrischika, Kumbha.
    Sthira,
    /// Dual: Mithuna, Kanya, Dhanu, Meena.
    Dvisvabhava,
}

/// Modality of a rashi. Repeats every three signs starting from Mesha.
pub const fn rashi_svabhava(rashi: Rashi) -> RashiSvabhava {
    match rashi.index() % 3 {
        0 => RashiSvabhava::Chara,
        1 => RashiSvabhava::Sthira,
        _ => RashiSvabhava::Dvisvabhava,
    }
}

/// Split a sidereal longitude into its rashi and the degree offset within it.
///
/// The longitude must already be in `[0, 360)`. Values outside that range,
/// and non-finite values, are rejected rather than wrapped: a longitude of
/// 360.0 or -0.5 means the upstream computation misbehaved, and silently
/// normalizing it would mask the fault.
pub fn rashi_split(longitude: f64) -> Result<(Rashi, f64), ChartError> {
    if !longitude.is_finite() || longitude < 0.0 || longitude >= 360.0 {
        return Err(ChartError::MalformedPosition { longitude });
    }
    // Clamp to 11 in case of floating point edge right below 360.
    let idx = ((longitude / 30.0).floor() as u8).min(11);
    Ok((ALL_RASHIS[idx as usize], longitude - idx as f64 * 30.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rashi_boundary_0() {
        let (rashi, deg) = rashi_split(0.0).unwrap();
        assert_eq!(rashi, Rashi::Mesha);
        assert_eq!(deg, 0.0);
    }

    #[test]
    fn rashi_boundary_30() {
        let (rashi, deg) = rashi_split(30.0).unwrap();
        assert_eq!(rashi, Rashi::Vrishabha);
        assert_eq!(deg, 0.0);
    }

    #[test]
    fn rashi_all_boundaries() {
        for i in 0..12u8 {
            let lon = i as f64 * 30.0;
            let (rashi, _) = rashi_split(lon).unwrap();
            assert_eq!(rashi.index(), i, "boundary at {lon} deg");
        }
    }

    #[test]
    fn rashi_just_below_360() {
        let (rashi, deg) = rashi_split(359.999_999).unwrap();
        assert_eq!(rashi, Rashi::Meena);
        assert!(deg < 30.0, "degree offset {deg} must stay below 30");
        assert!((deg - 29.999_999).abs() < 1e-6);
    }

    #[test]
    fn rashi_split_degree_offset() {
        // 123.456 / 30 = 4.1152 → index 4 (Simha, starts at 120), offset 3.456
        let (rashi, deg) = rashi_split(123.456).unwrap();
        assert_eq!(rashi, Rashi::Simha);
        assert!((deg - 3.456).abs() < 1e-10, "offset = {deg}");
    }

    #[test]
    fn rashi_split_rejects_out_of_range() {
        assert_eq!(
            rashi_split(360.0),
            Err(ChartError::MalformedPosition { longitude: 360.0 })
        );
        assert_eq!(
            rashi_split(-0.000_001),
            Err(ChartError::MalformedPosition {
                longitude: -0.000_001
            })
        );
        assert!(rashi_split(720.0).is_err());
    }

    #[test]
    fn rashi_split_rejects_non_finite() {
        assert!(rashi_split(f64::NAN).is_err());
        assert!(rashi_split(f64::INFINITY).is_err());
        assert!(rashi_split(f64::NEG_INFINITY).is_err());
    }

    #[test]
    fn rashi_numbers_round_trip() {
        for rashi in ALL_RASHIS {
            assert_eq!(Rashi::from_number(rashi.number()), Some(rashi));
            assert_eq!(Rashi::from_index(rashi.index()), Some(rashi));
        }
        assert_eq!(Rashi::from_number(0), None);
        assert_eq!(Rashi::from_number(13), None);
        assert_eq!(Rashi::from_index(12), None);
    }

    #[test]
    fn svabhava_cycle() {
        use RashiSvabhava::*;
        assert_eq!(rashi_svabhava(Rashi::Mesha), Chara);
        assert_eq!(rashi_svabhava(Rashi::Vrishabha), Sthira);
        assert_eq!(rashi_svabhava(Rashi::Mithuna), Dvisvabhava);
        assert_eq!(rashi_svabhava(Rashi::Makara), Chara);
        assert_eq!(rashi_svabhava(Rashi::Kumbha), Sthira);
        assert_eq!(rashi_svabhava(Rashi::Meena), Dvisvabhava);

        let chara_count = ALL_RASHIS
            .iter()
            .filter(|&&r| rashi_svabhava(r) == Chara)
            .count();
        assert_eq!(chara_count, 4);
    }
}
