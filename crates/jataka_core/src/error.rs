//! Error types for chart validation and divisional transforms.
//!
//! Every rejection carries the offending value so callers can report the
//! exact input that failed, not just a category.

use std::error::Error;
use std::fmt;

/// Errors raised while building charts or computing varga placements.
///
/// Inputs are validated once at the boundary; downstream lookups never
/// repair or normalize bad values.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum ChartError {
    /// Ecliptic longitude outside `[0, 360)`, or not a finite number.
    MalformedPosition { longitude: f64 },
    /// Degree offset within a rashi outside `[0, 30)`, or not finite.
    MalformedDegree { degree: f64 },
    /// A required graha (or the lagna) is absent from keyed input.
    IncompleteChart { missing: &'static str },
    /// Division factor outside the supported range (`n >= 1`).
    InvalidVarga { divisions: u16 },
}

impl fmt::Display for ChartError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChartError::MalformedPosition { longitude } => {
                write!(f, "malformed position: longitude {longitude} not in [0, 360)")
            }
            ChartError::MalformedDegree { degree } => {
                write!(f, "malformed degree: {degree} not in [0, 30)")
            }
            ChartError::IncompleteChart { missing } => {
                write!(f, "incomplete chart: missing {missing}")
            }
            ChartError::InvalidVarga { divisions } => {
                write!(f, "invalid varga: {divisions} divisions (minimum is 1)")
            }
        }
    }
}

impl Error for ChartError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages_carry_values() {
        let e = ChartError::MalformedPosition { longitude: 400.5 };
        assert!(e.to_string().contains("400.5"));

        let e = ChartError::IncompleteChart { missing: "Moon" };
        assert!(e.to_string().contains("Moon"));

        let e = ChartError::InvalidVarga { divisions: 0 };
        assert!(e.to_string().contains('0'));
    }

    #[test]
    fn error_is_std_error() {
        fn assert_error<E: Error>(_e: &E) {}
        assert_error(&ChartError::MalformedDegree { degree: 31.0 });
    }
}
