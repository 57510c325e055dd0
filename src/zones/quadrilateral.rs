//! Quadrilateral zone characteristic (manufacturer B).
//!
//! The non-directional zone is a parallelogram whose sides lean at the
//! characteristic angle. The forward zone is cut out of it by slicing against
//! five construction lines in turn and keeping, after every slice, the piece
//! that contains a reference point just inside the first quadrant.

use tracing::debug;

use super::{in_range, DirMode};
use crate::error::{Result, ZoneError};
use crate::geometry::{Line, Polygon, Segment};
use crate::math::trig::cot_deg;
use crate::math::{Point2, FAR_DISTANCE};
use crate::operations::{HalfTurn, SelectContaining, SplitPolygon};

/// Second-quadrant directional blinder: 30° past the X axis, i.e. 120° from +R.
const BLINDER_SECOND_QUADRANT_DEG: f64 = 30.0;

/// Fourth-quadrant directional blinder: 22° below the R axis.
const BLINDER_FOURTH_QUADRANT_DEG: f64 = 22.0;

/// Point that lies inside every forward zone a valid setting produces.
const REFERENCE_POINT: [f64; 2] = [1e-5, 1e-5];

pub const ANGLE_RANGE: (f64, f64) = (30.0, 90.0);
pub const REACH_RANGE: (f64, f64) = (0.05, 600.0);
pub const INCLINATION_RANGE: (f64, f64) = (0.0, 45.0);

/// Settings of a quadrilateral zone.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct QuadrilateralSettings {
    /// Characteristic angle, 30° to 90°.
    pub angle: f64,
    /// Reactive reach, 0.05 Ω to 600 Ω.
    pub x_reach: f64,
    /// Resistive reach, 0.05 Ω to 600 Ω.
    pub r_reach: f64,
    /// Tilt of the reactive reach, 0° to 45°.
    pub inclination: f64,
    pub dir_mode: DirMode,
}

impl Default for QuadrilateralSettings {
    fn default() -> Self {
        Self {
            angle: 85.0,
            x_reach: 2.5,
            r_reach: 2.5,
            inclination: 0.0,
            dir_mode: DirMode::Forward,
        }
    }
}

impl QuadrilateralSettings {
    /// Checks every setting against the range the relay accepts.
    ///
    /// # Errors
    ///
    /// Returns `ZoneError::InvalidSetting` naming the first out-of-range value.
    pub fn validate(&self) -> Result<()> {
        in_range("angle", self.angle, ANGLE_RANGE.0, ANGLE_RANGE.1)?;
        in_range("x_reach", self.x_reach, REACH_RANGE.0, REACH_RANGE.1)?;
        in_range("r_reach", self.r_reach, REACH_RANGE.0, REACH_RANGE.1)?;
        in_range(
            "inclination",
            self.inclination,
            INCLINATION_RANGE.0,
            INCLINATION_RANGE.1,
        )?;
        Ok(())
    }

    /// Builds the zone polygon.
    ///
    /// # Errors
    ///
    /// Returns `ZoneError::InvalidSetting` for out-of-range settings, and
    /// `ZoneError::GeometricConfiguration` if a slice leaves no single piece
    /// around the reference point.
    pub fn build(&self) -> Result<Polygon> {
        self.validate()?;
        let non_directional = self.non_directional()?;
        match self.dir_mode {
            DirMode::NonDirectional => Ok(non_directional),
            DirMode::Forward => self.forward(&non_directional),
            DirMode::Reverse => Ok(HalfTurn::new(&self.forward(&non_directional)?).execute()),
        }
    }

    /// `X / tan(angle)`: horizontal lean of the parallelogram over its height.
    fn lean(&self) -> Result<f64> {
        let cot = cot_deg(self.angle).ok_or(ZoneError::SingularInput {
            parameter: "angle",
            value: self.angle,
        })?;
        Ok(self.x_reach * cot)
    }

    fn non_directional(&self) -> Result<Polygon> {
        let (x, r) = (self.x_reach, self.r_reach);
        let lean = self.lean()?;
        Polygon::new(vec![
            Point2::new(-r + lean, x),
            Point2::new(r + lean, x),
            Point2::new(r - lean, -x),
            Point2::new(-r - lean, -x),
        ])
    }

    /// The cutting segments, in slicing order.
    fn construction_lines(&self) -> Result<[(&'static str, Segment); 5]> {
        let (x, r) = (self.x_reach, self.r_reach);
        let lean = self.lean()?;

        let blinder_second = Line::from_slope_intercept(
            -1.0 / BLINDER_SECOND_QUADRANT_DEG.to_radians().tan(),
            0.0,
        )?;
        // Joins the second-quadrant blinder to the reactive reach.
        let angle_reach = Line::at_angle(Point2::new(-r, 0.0), self.angle);
        // Starts on the reactive reach and falls away to the right; only a
        // ray, so it must not extend left of its start.
        let inclination = Segment::new(
            Point2::new(lean, x),
            Point2::new(
                FAR_DISTANCE - lean,
                x + (-self.inclination).to_radians().sin() * FAR_DISTANCE,
            ),
        );
        let resistive_reach = Line::at_angle(Point2::new(r, 0.0), self.angle);
        let blinder_fourth =
            Line::from_slope_intercept(-BLINDER_FOURTH_QUADRANT_DEG.to_radians().tan(), 0.0)?;

        Ok([
            (
                "second-quadrant blinder",
                blinder_second.to_segment(FAR_DISTANCE),
            ),
            ("angle-reach line", angle_reach.to_segment(FAR_DISTANCE)),
            ("inclination line", inclination),
            (
                "resistive reach line",
                resistive_reach.to_segment(FAR_DISTANCE),
            ),
            (
                "fourth-quadrant blinder",
                blinder_fourth.to_segment(FAR_DISTANCE),
            ),
        ])
    }

    fn forward(&self, non_directional: &Polygon) -> Result<Polygon> {
        let reference = Point2::from(REFERENCE_POINT);
        let mut zone = non_directional.clone();
        for (step, cutter) in self.construction_lines()? {
            let components = SplitPolygon::new(&zone, cutter).execute()?;
            debug!(step, components = components.len(), "sliced zone");
            zone = SelectContaining::new(&components, reference, step).execute()?;
        }
        debug!(vertices = zone.vertex_count(), "forward zone");
        Ok(zone)
    }
}

/// Builds a quadrilateral zone.
///
/// # Errors
///
/// See [`QuadrilateralSettings::build`].
pub fn build_quadrilateral_zone(
    angle: f64,
    x_reach: f64,
    r_reach: f64,
    inclination: f64,
    dir_mode: DirMode,
) -> Result<Polygon> {
    QuadrilateralSettings {
        angle,
        x_reach,
        r_reach,
        inclination,
        dir_mode,
    }
    .build()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use approx::assert_abs_diff_eq;
    use proptest::prelude::*;

    use super::*;
    use crate::error::SettingError;

    fn p(x: f64, y: f64) -> Point2 {
        Point2::new(x, y)
    }

    fn forward_60() -> Polygon {
        build_quadrilateral_zone(60.0, 30.0, 52.0, 5.0, DirMode::Forward).unwrap()
    }

    #[test]
    fn forward_zone_shape() {
        let zone = forward_60();
        assert!((5..=7).contains(&zone.vertex_count()), "{zone:?}");
        assert!(zone.contains(&p(1.0, 1.0)));
        assert!(!zone.contains(&p(-100.0, -100.0)));
        assert!(zone.is_convex());
    }

    #[test]
    fn forward_zone_vertices() {
        let zone = forward_60().canonical();
        let v = zone.vertices();
        assert_eq!(v.len(), 5);
        let lean = 30.0 / 60f64.to_radians().tan();
        // Second-quadrant blinder meets the reactive reach.
        assert_abs_diff_eq!(v[0].x, -30.0 * 30f64.to_radians().tan(), epsilon = 1e-9);
        assert_abs_diff_eq!(v[0].y, 30.0, epsilon = 1e-9);
        // The origin is a corner, where the two blinders meet.
        assert!(v.iter().any(|q| q.coords.norm() < 1e-9));
        // The inclination line starts on the reactive reach.
        assert!(v
            .iter()
            .any(|q| (q.x - lean).abs() < 1e-9 && (q.y - 30.0).abs() < 1e-9));
    }

    #[test]
    fn zero_inclination_keeps_flat_reach() {
        let zone = build_quadrilateral_zone(60.0, 30.0, 52.0, 0.0, DirMode::Forward).unwrap();
        let top: Vec<_> = zone
            .vertices()
            .iter()
            .filter(|q| (q.y - 30.0).abs() < 1e-9)
            .collect();
        assert_eq!(top.len(), 2);
        assert_eq!(zone.vertex_count(), 4);
    }

    #[test]
    fn non_directional_parallelogram() {
        let zone =
            build_quadrilateral_zone(60.0, 30.0, 52.0, 5.0, DirMode::NonDirectional).unwrap();
        let lean = 30.0 / 60f64.to_radians().tan();
        let expected = [
            p(-52.0 + lean, 30.0),
            p(52.0 + lean, 30.0),
            p(52.0 - lean, -30.0),
            p(-52.0 - lean, -30.0),
        ];
        for (got, want) in zone.vertices().iter().zip(expected) {
            assert_abs_diff_eq!(got.x, want.x, epsilon = 1e-9);
            assert_abs_diff_eq!(got.y, want.y, epsilon = 1e-9);
        }
        assert_abs_diff_eq!(zone.area(), 2.0 * 52.0 * 60.0, epsilon = 1e-6);
    }

    #[test]
    fn vertical_characteristic_angle() {
        let zone = build_quadrilateral_zone(90.0, 10.0, 10.0, 0.0, DirMode::Forward).unwrap();
        assert!(zone.contains(&p(5.0, 5.0)));
        assert!(!zone.contains(&p(11.0, 5.0)));
        assert!(zone.vertices().iter().all(|q| q.x <= 10.0 + 1e-9));
    }

    #[test]
    fn reverse_is_half_turn_of_forward() {
        let fwd = forward_60();
        let rev = build_quadrilateral_zone(60.0, 30.0, 52.0, 5.0, DirMode::Reverse).unwrap();
        assert_eq!(HalfTurn::new(&fwd).execute().canonical(), rev.canonical());
        assert!(rev.contains(&p(-1.0, -1.0)));
        assert!(!rev.contains(&p(1.0, 1.0)));
    }

    #[test]
    fn out_of_range_settings_rejected() {
        let cases = [
            ("angle", 29.9, 30.0, 52.0, 5.0),
            ("angle", 90.1, 30.0, 52.0, 5.0),
            ("x_reach", 60.0, 0.01, 52.0, 5.0),
            ("x_reach", 60.0, 600.1, 52.0, 5.0),
            ("r_reach", 60.0, 30.0, 0.01, 5.0),
            ("r_reach", 60.0, 30.0, 600.1, 5.0),
            ("inclination", 60.0, 30.0, 52.0, -0.1),
            ("inclination", 60.0, 30.0, 52.0, 45.1),
        ];
        for (name, angle, x, r, incl) in cases {
            let err = build_quadrilateral_zone(angle, x, r, incl, DirMode::Forward).unwrap_err();
            assert!(
                matches!(
                    err,
                    ZoneError::InvalidSetting(SettingError::OutOfRange { parameter, .. })
                        if parameter == name
                ),
                "{name}: {err}"
            );
        }
    }

    #[test]
    fn unknown_mode_rejected() {
        let err = "Sideways".parse::<DirMode>().unwrap_err();
        assert!(matches!(
            err,
            ZoneError::InvalidSetting(SettingError::UnknownDirMode(_))
        ));
    }

    #[test]
    fn range_limits_accepted() {
        for mode in [DirMode::Forward, DirMode::Reverse, DirMode::NonDirectional] {
            assert!(build_quadrilateral_zone(30.0, 0.05, 600.0, 45.0, mode).is_ok());
            assert!(build_quadrilateral_zone(90.0, 600.0, 0.05, 0.0, mode).is_ok());
        }
        assert!(QuadrilateralSettings::default().build().is_ok());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn settings_from_json() {
        let json = r#"{"angle": 60.0, "x_reach": 30.0, "r_reach": 52.0,
                       "inclination": 5.0, "dir_mode": "Forward"}"#;
        let settings: QuadrilateralSettings = serde_json::from_str(json).unwrap();
        assert_eq!(settings.build().unwrap(), forward_60());

        let bad = json.replace("Forward", "Sideways");
        assert!(serde_json::from_str::<QuadrilateralSettings>(&bad).is_err());
    }

    fn mode() -> impl Strategy<Value = DirMode> {
        prop_oneof![
            Just(DirMode::Forward),
            Just(DirMode::Reverse),
            Just(DirMode::NonDirectional),
        ]
    }

    fn settings() -> impl Strategy<Value = QuadrilateralSettings> {
        (
            30.0f64..=90.0,
            0.05f64..=600.0,
            0.05f64..=600.0,
            0.0f64..=45.0,
            mode(),
        )
            .prop_map(|(angle, x_reach, r_reach, inclination, dir_mode)| {
                QuadrilateralSettings {
                    angle,
                    x_reach,
                    r_reach,
                    inclination,
                    dir_mode,
                }
            })
    }

    proptest! {
        #[test]
        fn forward_lies_within_non_directional(s in settings()) {
            let fwd = QuadrilateralSettings { dir_mode: DirMode::Forward, ..s }.build().unwrap();
            let nondir =
                QuadrilateralSettings { dir_mode: DirMode::NonDirectional, ..s }.build().unwrap();
            for v in fwd.vertices() {
                prop_assert!(nondir.covers(v), "{:?} outside {:?}", v, nondir);
            }
            prop_assert!(fwd.area() <= nondir.area() + 1e-6);
            prop_assert!(fwd.contains(&Point2::from(REFERENCE_POINT)));
        }

        #[test]
        fn reverse_is_congruent_to_rotated_forward(s in settings()) {
            let fwd = QuadrilateralSettings { dir_mode: DirMode::Forward, ..s }.build().unwrap();
            let rev = QuadrilateralSettings { dir_mode: DirMode::Reverse, ..s }.build().unwrap();
            prop_assert_eq!(HalfTurn::new(&fwd).execute().canonical(), rev.canonical());
        }

        #[test]
        fn non_directional_is_point_symmetric(s in settings(), sx in -1.0f64..1.0, sy in -1.0f64..1.0) {
            let zone =
                QuadrilateralSettings { dir_mode: DirMode::NonDirectional, ..s }.build().unwrap();
            let probe = p(sx * 2.0 * (s.r_reach + s.x_reach), sy * 1.2 * s.x_reach);
            let mirrored = p(-probe.x, -probe.y);
            if zone.boundary_distance(&probe) > 1e-6 {
                prop_assert_eq!(zone.contains(&probe), zone.contains(&mirrored));
            }
        }
    }
}
