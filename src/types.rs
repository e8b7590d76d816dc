//! Type-safe unit definitions for the length converter
//!
//! The set of supported units is closed. Every per-unit attribute (conversion
//! factor, symbol, full name) lives in a single exhaustive match so the
//! conversion formula and display formatting never branch on individual units.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// Length unit supported by the converter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[derive(Display, EnumString, EnumIter)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Unit {
    #[strum(serialize = "metre")]
    Metre,
    #[strum(serialize = "millimetre")]
    Millimetre,
    #[strum(serialize = "mile")]
    Mile,
    #[strum(serialize = "foot")]
    Foot,
}

/// Static attributes attached to each unit
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UnitInfo {
    /// Multiplier converting a quantity in metres into this unit
    pub factor: f64,
    /// Short symbol, e.g. "mm"
    pub symbol: &'static str,
    /// Full name, e.g. "Millimetre"
    pub name: &'static str,
}

impl Unit {
    /// Base unit used as the normalization step between any two units
    pub const BASE: Unit = Unit::Metre;

    /// Get the attribute record for this unit
    pub const fn info(self) -> UnitInfo {
        match self {
            Self::Metre => UnitInfo {
                factor: 1.0,
                symbol: "m",
                name: "Metre",
            },
            Self::Millimetre => UnitInfo {
                factor: 1000.0,
                symbol: "mm",
                name: "Millimetre",
            },
            Self::Mile => UnitInfo {
                factor: 0.000621371,
                symbol: "mi",
                name: "Mile",
            },
            Self::Foot => UnitInfo {
                factor: 3.28084,
                symbol: "ft",
                name: "Foot",
            },
        }
    }

    /// Conversion factor relative to one metre
    pub const fn factor(self) -> f64 {
        self.info().factor
    }

    /// Short symbol
    pub const fn symbol(self) -> &'static str {
        self.info().symbol
    }

    /// Full display name
    pub const fn name(self) -> &'static str {
        self.info().name
    }

    /// Display label pairing symbol and name, e.g. "mm (Millimetre)"
    pub fn label(self) -> String {
        let info = self.info();
        format!("{} ({})", info.symbol, info.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;
    use strum::IntoEnumIterator;

    #[test]
    fn test_unit_serialization() {
        assert_eq!(Unit::Metre.to_string(), "metre");
        assert_eq!(Unit::Millimetre.to_string(), "millimetre");
        assert_eq!(Unit::Mile.to_string(), "mile");
        assert_eq!(Unit::Foot.to_string(), "foot");
    }

    #[test]
    fn test_unit_parsing() {
        assert_eq!(Unit::from_str("metre").unwrap(), Unit::Metre);
        assert_eq!(Unit::from_str("foot").unwrap(), Unit::Foot);
        assert!(Unit::from_str("furlong").is_err());
    }

    #[test]
    fn test_unit_iteration_order() {
        let units: Vec<Unit> = Unit::iter().collect();
        assert_eq!(
            units,
            vec![Unit::Metre, Unit::Millimetre, Unit::Mile, Unit::Foot]
        );
    }

    #[test]
    fn test_every_unit_has_metadata() {
        for unit in Unit::iter() {
            let info = unit.info();
            assert!(info.factor > 0.0 && info.factor.is_finite());
            assert!(!info.symbol.is_empty());
            assert!(!info.name.is_empty());
        }
    }

    #[test]
    fn test_base_unit_factor_is_one() {
        assert_eq!(Unit::BASE.factor(), 1.0);
    }

    #[test]
    fn test_labels() {
        assert_eq!(Unit::Metre.label(), "m (Metre)");
        assert_eq!(Unit::Millimetre.label(), "mm (Millimetre)");
        assert_eq!(Unit::Mile.label(), "mi (Mile)");
        assert_eq!(Unit::Foot.label(), "ft (Foot)");
    }

    #[test]
    fn test_serde_roundtrip() {
        let json = serde_json::to_string(&Unit::Mile).unwrap();
        assert_eq!(json, "\"mile\"");
        let parsed: Unit = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, Unit::Mile);
    }
}
