//! Tripping-zone characteristics of distance-protection relays.
//!
//! Each builder turns a relay's reach, angle and directional settings into a
//! closed [`Polygon`] in the impedance plane (R on the x axis, X on the y
//! axis). A measured fault impedance inside the polygon trips the zone.

pub mod error;
pub mod geometry;
pub mod math;
pub mod operations;
pub mod zones;

pub use error::{GeometryError, Result, SettingError, ZoneError};
pub use geometry::Polygon;
pub use zones::{
    build_hexagonal_start_zone, build_hexagonal_zone, build_hexagonal_zone_earth,
    build_quadrilateral_zone, DirMode, EarthHexagonalSettings, HexagonalSettings,
    QuadrilateralSettings, StartZoneSettings,
};
