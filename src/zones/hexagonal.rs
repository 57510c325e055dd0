//! Hexagonal zone characteristics (manufacturer A).
//!
//! The directional zone is traced clockwise from the origin:
//!
//! ```text
//!        C ─────────────── D          X
//!        │                /           ↑
//!        B               /            │
//!         ╲             /             └──→ R
//!          ╲           /
//!           A ────── E
//!                     \
//!                      F
//! ```
//!
//! `A` is the origin, `AB` follows the directional negative-resistance angle,
//! `CD` is the reactive reach, `EF` the directional angle below the R axis.
//! When the reactive reach lies below `B`, `B` is dropped and `C` slides onto
//! the negative-resistance line, leaving a pentagon.

use tracing::{debug, trace};

use super::{positive_reach, DirMode};
use crate::error::{Result, ZoneError};
use crate::geometry::Polygon;
use crate::math::trig::{tan_deg, tan_deg_nonzero};
use crate::math::Point2;
use crate::operations::HalfTurn;

/// Settings of a phase-phase hexagonal zone.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HexagonalSettings {
    /// Directional characteristic angle below the R axis, in degrees.
    pub angle_dir: f64,
    /// Directional negative-resistance angle from the +R axis, in degrees.
    pub angle_neg_res: f64,
    pub dir_mode: DirMode,
    /// Positive-sequence reactive reach, in ohms.
    pub x1: f64,
    /// Positive-sequence resistive reach, in ohms.
    pub r1: f64,
    /// Fault-resistance reach, in ohms.
    pub reach_fault: f64,
}

impl Default for HexagonalSettings {
    fn default() -> Self {
        Self {
            angle_dir: 15.0,
            angle_neg_res: 115.0,
            dir_mode: DirMode::Forward,
            x1: 40.0,
            r1: 5.0,
            reach_fault: 30.0,
        }
    }
}

/// The upper-left corner of the directional hexagon.
#[derive(Debug, Clone, Copy, PartialEq)]
enum UpperLeft {
    /// `B` on the negative-resistance line, `C` straight above it on the reach line.
    Full { b: Point2, c: Point2 },
    /// Reach line below `B`: `C` moved onto the negative-resistance line.
    Clipped { c: Point2 },
}

impl UpperLeft {
    fn vertices(self) -> impl Iterator<Item = Point2> {
        let (b, c) = match self {
            Self::Full { b, c } => (Some(b), c),
            Self::Clipped { c } => (None, c),
        };
        b.into_iter().chain(std::iter::once(c))
    }
}

impl HexagonalSettings {
    /// Checks every reach and the angles that enter a tangent.
    ///
    /// # Errors
    ///
    /// Returns `ZoneError::InvalidSetting` for a non-positive reach and
    /// `ZoneError::SingularInput` when an angle puts a tangent at a singularity
    /// (`angle_neg_res` a multiple of 90°, `angle_dir` an odd multiple of 90°).
    pub fn validate(&self) -> Result<()> {
        positive_reach("x1", self.x1)?;
        positive_reach("r1", self.r1)?;
        positive_reach("reach_fault", self.reach_fault)?;
        self.tan_neg_res()?;
        self.tan_dir()?;
        Ok(())
    }

    /// Builds the zone polygon.
    ///
    /// # Errors
    ///
    /// See [`HexagonalSettings::validate`].
    pub fn build(&self) -> Result<Polygon> {
        self.validate()?;
        match self.dir_mode {
            DirMode::Forward => self.directional(),
            DirMode::Reverse => Ok(HalfTurn::new(&self.directional()?).execute()),
            DirMode::NonDirectional => self.non_directional(),
        }
    }

    fn tan_neg_res(&self) -> Result<f64> {
        tan_deg_nonzero(self.angle_neg_res - 90.0).ok_or(ZoneError::SingularInput {
            parameter: "angle_neg_res",
            value: self.angle_neg_res,
        })
    }

    fn tan_dir(&self) -> Result<f64> {
        tan_deg(-self.angle_dir).ok_or(ZoneError::SingularInput {
            parameter: "angle_dir",
            value: self.angle_dir,
        })
    }

    fn upper_left(&self) -> Result<UpperLeft> {
        let half_rf = self.reach_fault / 2.0;
        let b = Point2::new(-half_rf, half_rf / self.tan_neg_res()?);
        if self.x1 < b.y {
            let tan_c = tan_deg_nonzero(180.0 - self.angle_neg_res).ok_or(
                ZoneError::SingularInput {
                    parameter: "angle_neg_res",
                    value: self.angle_neg_res,
                },
            )?;
            debug!(x1 = self.x1, b_y = b.y, "reach below B, dropping vertex B");
            Ok(UpperLeft::Clipped {
                c: Point2::new(-self.x1 / tan_c, self.x1),
            })
        } else {
            Ok(UpperLeft::Full {
                b,
                c: Point2::new(-half_rf, self.x1),
            })
        }
    }

    fn directional(&self) -> Result<Polygon> {
        let half_rf = self.reach_fault / 2.0;
        let d = Point2::new(self.r1 + half_rf, self.x1);
        let e = Point2::new(half_rf, 0.0);
        let f = Point2::new(half_rf, half_rf * self.tan_dir()?);

        let mut points = vec![Point2::origin()];
        points.extend(self.upper_left()?.vertices());
        points.extend([d, e, f]);
        trace!(?points, "directional hexagon");
        Polygon::new(points)
    }

    /// Symmetric envelope built from the reaches alone.
    fn non_directional(&self) -> Result<Polygon> {
        let half_rf = self.reach_fault / 2.0;
        let points = vec![
            Point2::new(-half_rf, 0.0),
            Point2::new(-half_rf, self.x1),
            Point2::new(self.r1 + half_rf, self.x1),
            Point2::new(half_rf, 0.0),
            Point2::new(half_rf, -self.x1),
            Point2::new(-self.r1 - half_rf, -self.x1),
        ];
        trace!(?points, "non-directional hexagon");
        Polygon::new(points)
    }
}

/// Settings of a phase-earth hexagonal zone.
///
/// Builds the phase-phase zone with the sequence reaches summed and the
/// fault-resistance reach doubled.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EarthHexagonalSettings {
    pub angle_dir: f64,
    pub angle_neg_res: f64,
    pub dir_mode: DirMode,
    pub x1: f64,
    pub r1: f64,
    /// Zero-sequence reactive reach, in ohms.
    pub x0: f64,
    /// Zero-sequence resistive reach, in ohms.
    pub r0: f64,
    /// Phase-earth fault-resistance reach, in ohms.
    pub reach_fault_pe: f64,
}

impl EarthHexagonalSettings {
    /// The equivalent phase-phase settings.
    #[must_use]
    pub fn phase_phase_equivalent(&self) -> HexagonalSettings {
        HexagonalSettings {
            angle_dir: self.angle_dir,
            angle_neg_res: self.angle_neg_res,
            dir_mode: self.dir_mode,
            x1: self.x1 + self.x0,
            r1: self.r1 + self.r0,
            reach_fault: self.reach_fault_pe * 2.0,
        }
    }

    /// # Errors
    ///
    /// Returns `ZoneError::InvalidSetting` for a non-positive reach, otherwise
    /// whatever the phase-phase equivalent reports.
    pub fn validate(&self) -> Result<()> {
        positive_reach("x0", self.x0)?;
        positive_reach("r0", self.r0)?;
        positive_reach("reach_fault_pe", self.reach_fault_pe)?;
        self.phase_phase_equivalent().validate()
    }

    /// Builds the zone polygon.
    ///
    /// # Errors
    ///
    /// See [`EarthHexagonalSettings::validate`].
    pub fn build(&self) -> Result<Polygon> {
        self.validate()?;
        self.phase_phase_equivalent().build()
    }
}

/// Settings of the phase-selection (start) zone.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StartZoneSettings {
    pub x1: f64,
    pub r1: f64,
    pub reach_fault: f64,
    /// Reverse resistive reach, in ohms.
    pub reach_reverse: f64,
}

impl StartZoneSettings {
    /// # Errors
    ///
    /// Returns `ZoneError::InvalidSetting` for a non-positive reach.
    pub fn validate(&self) -> Result<()> {
        positive_reach("x1", self.x1)?;
        positive_reach("r1", self.r1)?;
        positive_reach("reach_fault", self.reach_fault)?;
        positive_reach("reach_reverse", self.reach_reverse)?;
        Ok(())
    }

    /// Builds the start-zone polygon.
    ///
    /// # Errors
    ///
    /// See [`StartZoneSettings::validate`].
    pub fn build(&self) -> Result<Polygon> {
        self.validate()?;
        let half_rev = self.reach_reverse / 2.0;
        let half_rf = self.reach_fault / 2.0;
        Polygon::new(vec![
            Point2::new(-half_rev, 0.0),
            Point2::new(-half_rev, self.x1),
            Point2::new(self.r1 + half_rf, self.x1),
            Point2::new(half_rf, 0.0),
            Point2::new(half_rf, -self.x1),
            Point2::new(-self.r1, -self.x1),
        ])
    }
}

/// Builds a phase-phase hexagonal zone.
///
/// # Errors
///
/// See [`HexagonalSettings::validate`].
pub fn build_hexagonal_zone(
    angle_dir: f64,
    angle_neg_res: f64,
    dir_mode: DirMode,
    x1: f64,
    r1: f64,
    reach_fault: f64,
) -> Result<Polygon> {
    HexagonalSettings {
        angle_dir,
        angle_neg_res,
        dir_mode,
        x1,
        r1,
        reach_fault,
    }
    .build()
}

/// Builds a phase-earth hexagonal zone.
///
/// # Errors
///
/// See [`EarthHexagonalSettings::validate`].
#[allow(clippy::too_many_arguments)]
pub fn build_hexagonal_zone_earth(
    angle_dir: f64,
    angle_neg_res: f64,
    dir_mode: DirMode,
    x1: f64,
    r1: f64,
    x0: f64,
    r0: f64,
    reach_fault_pe: f64,
) -> Result<Polygon> {
    EarthHexagonalSettings {
        angle_dir,
        angle_neg_res,
        dir_mode,
        x1,
        r1,
        x0,
        r0,
        reach_fault_pe,
    }
    .build()
}

/// Builds the phase-selection (start) zone.
///
/// # Errors
///
/// See [`StartZoneSettings::validate`].
pub fn build_hexagonal_start_zone(
    x1: f64,
    r1: f64,
    reach_fault: f64,
    reach_reverse: f64,
) -> Result<Polygon> {
    StartZoneSettings {
        x1,
        r1,
        reach_fault,
        reach_reverse,
    }
    .build()
}
