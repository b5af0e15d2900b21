//! Yoga and dosha evaluation over cast kundalis.
//!
//! This crate layers interpretation on top of `jataka_core`. Both engines
//! follow the same shape: a static registry of rules (`yoga_data`,
//! `dosha_data`) walked in order by a small dispatcher (`yoga`, `dosha`),
//! with every predicate reading only rashi and bhava assignments. Yogas
//! report combinations; doshas report afflictions and fold into the
//! 0 to 100 chart health score.
//!
//! Rules are independent by construction: no rule consults another's
//! outcome, so output order is exactly registry order.

pub mod dosha;
pub mod dosha_data;
pub mod yoga;
pub mod yoga_data;

pub use dosha::{
    ChartHealth, DoshaMatch, DoshaRule, HealthLevel, Severity, chart_health, detect_doshas,
};
pub use dosha_data::DOSHA_RULES;
pub use yoga::{
    NATURAL_BENEFICS, NATURAL_MALEFICS, TARA_GRAHAS, YogaCategory, YogaMatch, YogaRule,
    YogaStrength, detect_yogas,
};
pub use yoga_data::YOGA_RULES;
