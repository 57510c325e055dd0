//! Relay zone characteristics.
//!
//! Two independent families build a tripping polygon from relay settings:
//!
//! ```text
//! hexagonal.rs      — manufacturer A: closed-form hexagons (phase-phase,
//!                     phase-earth, start zone)
//! quadrilateral.rs  — manufacturer B: non-directional quadrilateral sliced
//!                     by blinders and reach lines
//! ```
//!
//! Every builder is a pure function of its settings.

pub mod hexagonal;
pub mod quadrilateral;

use std::fmt;
use std::str::FromStr;

use crate::error::{SettingError, ZoneError};

pub use hexagonal::{
    build_hexagonal_start_zone, build_hexagonal_zone, build_hexagonal_zone_earth,
    EarthHexagonalSettings, HexagonalSettings, StartZoneSettings,
};
pub use quadrilateral::{build_quadrilateral_zone, QuadrilateralSettings};

/// Direction in which a zone trips.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "String", into = "&'static str")
)]
pub enum DirMode {
    /// Faults in front of the relay (first quadrant side).
    #[default]
    Forward,
    /// Faults behind the relay: the forward shape rotated 180°.
    Reverse,
    /// Faults in either direction.
    NonDirectional,
}

impl DirMode {
    /// The name used in relay setting files.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Forward => "Forward",
            Self::Reverse => "Reverse",
            Self::NonDirectional => "Non-directional",
        }
    }
}

impl fmt::Display for DirMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DirMode {
    type Err = ZoneError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Forward" => Ok(Self::Forward),
            "Reverse" => Ok(Self::Reverse),
            "Non-directional" => Ok(Self::NonDirectional),
            other => Err(SettingError::UnknownDirMode(other.to_owned()).into()),
        }
    }
}

impl TryFrom<&str> for DirMode {
    type Error = ZoneError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl TryFrom<String> for DirMode {
    type Error = ZoneError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<DirMode> for &'static str {
    fn from(mode: DirMode) -> Self {
        mode.as_str()
    }
}

/// Checks that a reach value is a positive, finite number of ohms.
pub(crate) fn positive_reach(parameter: &'static str, value: f64) -> Result<(), SettingError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(SettingError::NotPositive { parameter, value })
    }
}

/// Checks that `value` lies in the closed range `[min, max]`.
pub(crate) fn in_range(
    parameter: &'static str,
    value: f64,
    min: f64,
    max: f64,
) -> Result<(), SettingError> {
    if (min..=max).contains(&value) {
        Ok(())
    } else {
        Err(SettingError::OutOfRange {
            parameter,
            value,
            min,
            max,
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn parses_setting_file_names() {
        assert_eq!("Forward".parse::<DirMode>().unwrap(), DirMode::Forward);
        assert_eq!("Reverse".parse::<DirMode>().unwrap(), DirMode::Reverse);
        assert_eq!(
            DirMode::try_from("Non-directional").unwrap(),
            DirMode::NonDirectional
        );
    }

    #[test]
    fn rejects_unknown_mode() {
        for bad in ["Sideways", "forward", "NonDirectional", ""] {
            let err = bad.parse::<DirMode>().unwrap_err();
            assert!(
                matches!(err, ZoneError::InvalidSetting(SettingError::UnknownDirMode(ref s)) if s == bad),
                "{bad:?} gave {err}"
            );
        }
    }

    #[test]
    fn display_round_trips() {
        for mode in [DirMode::Forward, DirMode::Reverse, DirMode::NonDirectional] {
            assert_eq!(mode.to_string().parse::<DirMode>().unwrap(), mode);
        }
    }

    #[test]
    fn range_checks() {
        assert!(in_range("angle", 30.0, 30.0, 90.0).is_ok());
        assert!(in_range("angle", 90.0, 30.0, 90.0).is_ok());
        assert!(in_range("angle", 29.9, 30.0, 90.0).is_err());
        assert!(in_range("angle", f64::NAN, 30.0, 90.0).is_err());
        assert!(positive_reach("x1", 0.1).is_ok());
        assert!(positive_reach("x1", 0.0).is_err());
        assert!(positive_reach("x1", f64::INFINITY).is_err());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_uses_setting_file_names() {
        let json = serde_json::to_string(&DirMode::NonDirectional).unwrap();
        assert_eq!(json, "\"Non-directional\"");
        let mode: DirMode = serde_json::from_str("\"Reverse\"").unwrap();
        assert_eq!(mode, DirMode::Reverse);
        assert!(serde_json::from_str::<DirMode>("\"Sideways\"").is_err());
    }
}
