//! Varga (divisional chart) transforms.
//!
//! Each rashi spans 30 degrees; a varga of factor `n` cuts it into `n`
//! equal parts and maps every part to a rashi. The uniform mapping chains
//! parts across the zodiac so consecutive parts land in consecutive rashis:
//!
//! ```text
//! part  = floor(degrees_in_rashi / (30 / n))       clamped to n - 1
//! varga = (rashi_index * n + part) mod 12
//! ```
//!
//! Two classical charts deviate from the chain. The hora (D2) keeps the
//! first half of a rashi in place and sends the second half to the seventh
//! rashi from it; the drekkana (D3) advances each 10-degree part by a trine.
//! All other factors, named or not, use the uniform rule. The transform is
//! defined for every `n >= 1`, with `n = 1` the identity.

use serde::Serialize;

use crate::bhava::{Bhava, bhava_from_lagna};
use crate::chart::{Chart, Kundali};
use crate::error::ChartError;
use crate::graha::{ALL_GRAHAS, Graha};
use crate::rashi::{ALL_RASHIS, Rashi, rashi_split};

/// The six named divisional charts this crate computes by default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Varga {
    /// D2: wealth
    Hora,
    /// D3: siblings
    Drekkana,
    /// D7: children
    Saptamsha,
    /// D9: marriage
    Navamsha,
    /// D10: career
    Dashamsha,
    /// D12: parents
    Dwadashamsha,
}

/// All named vargas in ascending division order.
pub const ALL_VARGAS: [Varga; 6] = [
    Varga::Hora,
    Varga::Drekkana,
    Varga::Saptamsha,
    Varga::Navamsha,
    Varga::Dashamsha,
    Varga::Dwadashamsha,
];

impl Varga {
    /// Division factor.
    pub const fn divisions(self) -> u16 {
        match self {
            Varga::Hora => 2,
            Varga::Drekkana => 3,
            Varga::Saptamsha => 7,
            Varga::Navamsha => 9,
            Varga::Dashamsha => 10,
            Varga::Dwadashamsha => 12,
        }
    }

    /// Sanskrit name.
    pub const fn name(self) -> &'static str {
        match self {
            Varga::Hora => "Hora",
            Varga::Drekkana => "Drekkana",
            Varga::Saptamsha => "Saptamsha",
            Varga::Navamsha => "Navamsha",
            Varga::Dashamsha => "Dashamsha",
            Varga::Dwadashamsha => "Dwadashamsha",
        }
    }

    /// Short D-code ("D9" for the navamsha).
    pub const fn code(self) -> &'static str {
        match self {
            Varga::Hora => "D2",
            Varga::Drekkana => "D3",
            Varga::Saptamsha => "D7",
            Varga::Navamsha => "D9",
            Varga::Dashamsha => "D10",
            Varga::Dwadashamsha => "D12",
        }
    }

    /// Life area the chart is traditionally read for.
    pub const fn focus(self) -> &'static str {
        match self {
            Varga::Hora => "wealth",
            Varga::Drekkana => "siblings",
            Varga::Saptamsha => "children",
            Varga::Navamsha => "marriage",
            Varga::Dashamsha => "career",
            Varga::Dwadashamsha => "parents",
        }
    }

    /// Named varga for a division factor, if one exists.
    pub fn from_divisions(divisions: u16) -> Option<Varga> {
        ALL_VARGAS.iter().copied().find(|v| v.divisions() == divisions)
    }
}

// ---------------------------------------------------------------------------
// Core transform
// ---------------------------------------------------------------------------

/// Rashi occupied in the varga of factor `divisions` by a body placed
/// `degrees_in_rashi` into `rashi`.
///
/// `degrees_in_rashi` must be in `[0, 30)`; `divisions` must be at least 1.
/// The part index is clamped to `divisions - 1` so a degree offset just
/// below 30 can never select a nonexistent part.
pub fn varga_rashi(rashi: Rashi, degrees_in_rashi: f64, divisions: u16) -> Result<Rashi, ChartError> {
    if divisions == 0 {
        return Err(ChartError::InvalidVarga { divisions });
    }
    if !degrees_in_rashi.is_finite() || degrees_in_rashi < 0.0 || degrees_in_rashi >= 30.0 {
        return Err(ChartError::MalformedDegree {
            degree: degrees_in_rashi,
        });
    }

    let idx = rashi.index() as u32;
    let target = match divisions {
        1 => idx,
        2 => {
            // Hora: first half stays put, second half moves to the 7th
            // rashi. Parity-independent form of the classical odd/even rule.
            let part = ((degrees_in_rashi / 15.0).floor() as u32).min(1);
            if part == 0 { idx } else { (idx + 6) % 12 }
        }
        3 => {
            // Drekkana: each 10-degree part advances by a trine.
            let part = ((degrees_in_rashi / 10.0).floor() as u32).min(2);
            (idx + part * 4) % 12
        }
        n => {
            let part_width = 30.0 / n as f64;
            let part = ((degrees_in_rashi / part_width).floor() as u32).min(n as u32 - 1);
            (idx * n as u32 + part) % 12
        }
    };
    Ok(ALL_RASHIS[target as usize])
}

// ---------------------------------------------------------------------------
// Whole-chart transform
// ---------------------------------------------------------------------------

/// A divisional chart: every graha and the lagna mapped into varga rashis.
///
/// `grahas` is indexed by [`Graha::index`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct VargaChart {
    pub divisions: u16,
    pub lagna: Rashi,
    pub grahas: [Rashi; 9],
}

impl VargaChart {
    /// Varga rashi of a graha.
    pub fn rashi(&self, graha: Graha) -> Rashi {
        self.grahas[graha.index() as usize]
    }

    /// Whole-sign bhava of a graha, counted from the varga lagna.
    pub fn bhava(&self, graha: Graha) -> Bhava {
        bhava_from_lagna(self.rashi(graha), self.lagna)
    }

    /// House-addressed view of this divisional chart.
    pub fn kundali(&self) -> Kundali {
        Kundali::from_rashis(self.lagna, self.grahas)
    }
}

/// Compute the varga chart of factor `divisions` for a base chart.
///
/// The lagna is handled like any graha unless the upstream service supplied
/// a divisional ascendant cusp of its own, in which case that longitude is
/// split directly and the transform is not applied to it.
pub fn varga_chart(
    chart: &Chart,
    divisions: u16,
    cusp_longitude: Option<f64>,
) -> Result<VargaChart, ChartError> {
    if divisions == 0 {
        return Err(ChartError::InvalidVarga { divisions });
    }
    let lagna = match cusp_longitude {
        Some(lon) => rashi_split(lon)?.0,
        None => varga_rashi(chart.lagna_rashi(), chart.lagna_degrees_in_rashi(), divisions)?,
    };
    let mut grahas = [Rashi::Mesha; 9];
    for graha in ALL_GRAHAS {
        grahas[graha.index() as usize] =
            varga_rashi(chart.rashi(graha), chart.degrees_in_rashi(graha), divisions)?;
    }
    Ok(VargaChart {
        divisions,
        lagna,
        grahas,
    })
}
