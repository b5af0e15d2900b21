//! Chart records: validated positions first, house addressing second.
//!
//! Construction is two-stage. A [`Chart`] holds upstream positions that
//! have passed the longitude gate; it knows rashis but nothing about
//! houses. Casting a [`Kundali`] from it fixes the lagna as bhava 1 and
//! addresses every graha. The second stage cannot fail, so no half-built
//! house table ever exists.

use serde::Serialize;

use crate::bhava::{ALL_BHAVAS, Bhava, bhava_from_lagna, rashi_of_bhava};
use crate::error::ChartError;
use crate::graha::{ALL_GRAHAS, Graha, rashi_lord};
use crate::rashi::{Rashi, rashi_split};

/// Raw per-graha position as delivered by the upstream ephemeris service.
///
/// Only the longitude participates in sign and house logic; latitude and
/// speed are carried through for display.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GrahaPosition {
    /// Sidereal ecliptic longitude, degrees in `[0, 360)`.
    pub longitude: f64,
    /// Ecliptic latitude, degrees.
    pub latitude: f64,
    /// Longitudinal speed, degrees per day. Negative while retrograde.
    pub speed: f64,
}

impl GrahaPosition {
    /// True when the body is in retrograde motion.
    pub fn is_retrograde(&self) -> bool {
        self.speed < 0.0
    }
}

/// The ascendant point, computed upstream alongside the graha positions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Lagna {
    /// Sidereal ecliptic longitude, degrees in `[0, 360)`.
    pub longitude: f64,
}

/// Upstream computation labels, passed through untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ChartMeta {
    pub ayanamsa: String,
    pub house_system: String,
}

// ---------------------------------------------------------------------------
// Stage one: validated chart
// ---------------------------------------------------------------------------

/// A birth chart whose every longitude has passed validation.
///
/// Rashis and degree offsets are computed once here and reused by every
/// downstream transform.
#[derive(Debug, Clone, PartialEq)]
pub struct Chart {
    positions: [GrahaPosition; 9],
    rashis: [Rashi; 9],
    degrees: [f64; 9],
    lagna: Lagna,
    lagna_rashi: Rashi,
    lagna_degrees: f64,
    meta: ChartMeta,
}

impl Chart {
    /// Build a chart from positions in [`Graha::index`] order.
    ///
    /// Fails with [`ChartError::MalformedPosition`] on the first longitude
    /// outside `[0, 360)`, the lagna included.
    pub fn new(
        positions: [GrahaPosition; 9],
        lagna: Lagna,
        meta: ChartMeta,
    ) -> Result<Chart, ChartError> {
        let mut rashis = [Rashi::Mesha; 9];
        let mut degrees = [0.0f64; 9];
        for (i, position) in positions.iter().enumerate() {
            let (rashi, deg) = rashi_split(position.longitude)?;
            rashis[i] = rashi;
            degrees[i] = deg;
        }
        let (lagna_rashi, lagna_degrees) = rashi_split(lagna.longitude)?;
        Ok(Chart {
            positions,
            rashis,
            degrees,
            lagna,
            lagna_rashi,
            lagna_degrees,
            meta,
        })
    }

    /// Build a chart from `(Graha, position)` pairs in any order.
    ///
    /// Every graha must appear; the first absent one is reported as
    /// [`ChartError::IncompleteChart`] under its English name. A graha
    /// listed twice keeps its last position.
    pub fn from_entries<I>(entries: I, lagna: Lagna, meta: ChartMeta) -> Result<Chart, ChartError>
    where
        I: IntoIterator<Item = (Graha, GrahaPosition)>,
    {
        let mut slots: [Option<GrahaPosition>; 9] = [None; 9];
        for (graha, position) in entries {
            slots[graha.index() as usize] = Some(position);
        }
        let mut positions = [GrahaPosition {
            longitude: 0.0,
            latitude: 0.0,
            speed: 0.0,
        }; 9];
        for (i, slot) in slots.iter().enumerate() {
            match slot {
                Some(position) => positions[i] = *position,
                None => {
                    return Err(ChartError::IncompleteChart {
                        missing: ALL_GRAHAS[i].english_name(),
                    });
                }
            }
        }
        Chart::new(positions, lagna, meta)
    }

    /// Raw position of a graha.
    pub fn position(&self, graha: Graha) -> GrahaPosition {
        self.positions[graha.index() as usize]
    }

    /// Rashi occupied by a graha.
    pub fn rashi(&self, graha: Graha) -> Rashi {
        self.rashis[graha.index() as usize]
    }

    /// Degree offset of a graha within its rashi, in `[0, 30)`.
    pub fn degrees_in_rashi(&self, graha: Graha) -> f64 {
        self.degrees[graha.index() as usize]
    }

    /// The ascendant point.
    pub fn lagna(&self) -> Lagna {
        self.lagna
    }

    /// Rashi holding the lagna.
    pub fn lagna_rashi(&self) -> Rashi {
        self.lagna_rashi
    }

    /// Degree offset of the lagna within its rashi.
    pub fn lagna_degrees_in_rashi(&self) -> f64 {
        self.lagna_degrees
    }

    /// Upstream computation labels.
    pub fn meta(&self) -> &ChartMeta {
        &self.meta
    }
}

// ---------------------------------------------------------------------------
// Stage two: house-addressed kundali
// ---------------------------------------------------------------------------

/// A house-addressed chart: each graha's rashi and bhava, with the lagna's
/// rashi as bhava 1.
///
/// Casting is total. Whatever rashi assignment goes in, whole-sign
/// addressing produces a valid bhava for every graha.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Kundali {
    lagna_rashi: Rashi,
    rashis: [Rashi; 9],
    bhavas: [Bhava; 9],
}

impl Kundali {
    /// Address a validated chart.
    pub fn cast(chart: &Chart) -> Kundali {
        let mut rashis = [Rashi::Mesha; 9];
        for graha in ALL_GRAHAS {
            rashis[graha.index() as usize] = chart.rashi(graha);
        }
        Kundali::from_rashis(chart.lagna_rashi(), rashis)
    }

    /// Address an arbitrary rashi assignment, `grahas` in
    /// [`Graha::index`] order. Divisional charts are addressed this way.
    pub fn from_rashis(lagna_rashi: Rashi, grahas: [Rashi; 9]) -> Kundali {
        let mut bhavas = [Bhava::Tanu; 9];
        for (i, rashi) in grahas.iter().enumerate() {
            bhavas[i] = bhava_from_lagna(*rashi, lagna_rashi);
        }
        Kundali {
            lagna_rashi,
            rashis: grahas,
            bhavas,
        }
    }

    /// Rashi holding the lagna (and so bhava 1).
    pub fn lagna_rashi(&self) -> Rashi {
        self.lagna_rashi
    }

    /// Rashi occupied by a graha.
    pub fn rashi(&self, graha: Graha) -> Rashi {
        self.rashis[graha.index() as usize]
    }

    /// Bhava occupied by a graha.
    pub fn bhava(&self, graha: Graha) -> Bhava {
        self.bhavas[graha.index() as usize]
    }

    /// Rashi occupying a bhava.
    pub fn rashi_of(&self, bhava: Bhava) -> Rashi {
        rashi_of_bhava(bhava, self.lagna_rashi)
    }

    /// Lord of the rashi occupying a bhava.
    pub fn lord_of(&self, bhava: Bhava) -> Graha {
        rashi_lord(self.rashi_of(bhava))
    }

    /// True when any graha occupies the bhava.
    pub fn occupied(&self, bhava: Bhava) -> bool {
        ALL_GRAHAS.iter().any(|&g| self.bhava(g) == bhava)
    }

    /// All grahas in a bhava, in index order.
    pub fn grahas_in(&self, bhava: Bhava) -> Vec<Graha> {
        ALL_GRAHAS
            .iter()
            .copied()
            .filter(|&g| self.bhava(g) == bhava)
            .collect()
    }

    /// Per-bhava occupancy table, bhava 1 first.
    pub fn occupancy(&self) -> [Vec<Graha>; 12] {
        ALL_BHAVAS.map(|b| self.grahas_in(b))
    }
}
