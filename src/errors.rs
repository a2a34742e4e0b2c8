use std::fmt;

/// Why a line of blade configuration text was dropped.
///
/// None of these ever abort a parse; [`crate::config::parse`] folds them away
/// and [`crate::config::parse_with_diagnostics`] hands them back to the caller.
#[derive(Debug, Clone, PartialEq)]
pub enum LineParseError {
    Blank,
    Comment,
    TooFewFields(usize),
    UnknownKey(String),
    MissingField { key: &'static str, index: usize },
    InvalidNumber { key: &'static str, value: String },
}

impl std::error::Error for LineParseError {}

impl fmt::Display for LineParseError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            LineParseError::Blank => write!(f, "Blank line."),
            LineParseError::Comment => write!(f, "Comment line."),
            LineParseError::TooFewFields(found) => {
                write!(f, "Too few fields: expected at least 2, found {}", found)
            }
            LineParseError::UnknownKey(key) => write!(f, "Unrecognized key: {:?}", key),
            LineParseError::MissingField { key, index } => {
                write!(f, "Missing field {} for {}", index, key)
            }
            LineParseError::InvalidNumber { key, value } => {
                write!(f, "Invalid number {:?} for {}", value, key)
            }
        }
    }
}

/// Problems with a slot group that the core tolerates but a caller may want
/// to report. See [`crate::config::SlotGroup::diagnose`].
#[derive(Debug, Clone, PartialEq)]
pub enum GroupDiagnostic {
    /// Fewer than one whole repetition; lays out to nothing.
    DegenerateGroup { count: f64 },
    /// Ratio outside `[0, 1]`; slots overlap or vanish.
    RatioOutOfRange { ratio: f64 },
    /// `inner_radius >= outer_radius`; wedges are empty or inside out.
    InvertedBand { inner_radius: f64, outer_radius: f64 },
}

impl GroupDiagnostic {
    /// True for the two `InvalidGeometry` flavours, false for degenerate counts.
    pub fn is_invalid_geometry(&self) -> bool {
        !matches!(self, GroupDiagnostic::DegenerateGroup { .. })
    }
}

impl std::error::Error for GroupDiagnostic {}

impl fmt::Display for GroupDiagnostic {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            GroupDiagnostic::DegenerateGroup { count } => {
                write!(f, "Degenerate group: count {} has no whole repetition", count)
            }
            GroupDiagnostic::RatioOutOfRange { ratio } => {
                write!(f, "Invalid geometry: ratio {} outside [0, 1]", ratio)
            }
            GroupDiagnostic::InvertedBand {
                inner_radius,
                outer_radius,
            } => write!(
                f,
                "Invalid geometry: inner radius {} not below outer radius {}",
                inner_radius, outer_radius
            ),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_display_reasons() {
        let err = LineParseError::InvalidNumber {
            key: "sector",
            value: "abc".to_string(),
        };
        assert_eq!(err.to_string(), "Invalid number \"abc\" for sector");
        assert_eq!(
            LineParseError::TooFewFields(1).to_string(),
            "Too few fields: expected at least 2, found 1"
        );
    }

    #[test]
    fn test_invalid_geometry_flavours() {
        assert!(!GroupDiagnostic::DegenerateGroup { count: 0.5 }.is_invalid_geometry());
        assert!(GroupDiagnostic::RatioOutOfRange { ratio: 1.5 }.is_invalid_geometry());
        assert!(GroupDiagnostic::InvertedBand {
            inner_radius: 10.0,
            outer_radius: 5.0
        }
        .is_invalid_geometry());
    }
}
