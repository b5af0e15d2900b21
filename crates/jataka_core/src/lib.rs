//! Core chart layer for Jyotish analysis.
//!
//! Takes validated sidereal positions from an upstream ephemeris service
//! and derives everything sign-shaped: rashi placement, whole-sign bhava
//! addressing, and varga (divisional) charts. No astronomy happens here;
//! longitudes come in computed and leave as typed placements.
//!
//! The layering is strict. [`Chart`] is the validation boundary: every
//! longitude is range-checked exactly once, on the way in. [`Kundali`] is
//! the house-addressed view rule engines consume. [`varga_chart`] maps a
//! chart into any division `n >= 1`.

pub mod bhava;
pub mod chakra;
pub mod chart;
pub mod error;
pub mod graha;
pub mod rashi;
pub mod varga;

pub use bhava::{
    ALL_BHAVAS, Bhava, DUSTHANA_BHAVAS, KENDRA_BHAVAS, TRIKONA_BHAVAS, UPACHAYA_BHAVAS,
    bhava_distance, bhava_from_lagna, bhava_offset, is_kendra_offset, rashi_of_bhava,
};
pub use chakra::{NORTH_CHAKRA_SLOTS, SOUTH_CHAKRA_CELLS, north_slot, south_cell};
pub use chart::{Chart, ChartMeta, GrahaPosition, Kundali, Lagna};
pub use error::ChartError;
pub use graha::{
    ALL_GRAHAS, Graha, SAPTA_GRAHAS, debilitation_rashi, own_rashis, rashi_lord,
};
pub use rashi::{ALL_RASHIS, Rashi, RashiSvabhava, rashi_split, rashi_svabhava};
pub use varga::{ALL_VARGAS, Varga, VargaChart, varga_chart, varga_rashi};
