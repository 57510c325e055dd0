use thiserror::Error;

/// Top-level error type for zone construction.
#[derive(Debug, Error)]
pub enum ZoneError {
    #[error("invalid setting: {0}")]
    InvalidSetting(#[from] SettingError),

    #[error("geometric configuration error: {0}")]
    GeometricConfiguration(#[from] GeometryError),

    #[error("singular input: {parameter} = {value}° puts a tangent at its singularity")]
    SingularInput { parameter: &'static str, value: f64 },
}

/// Errors raised while validating relay settings, before any geometry exists.
#[derive(Debug, Error)]
pub enum SettingError {
    #[error("{parameter} = {value} is out of range [{min}, {max}]")]
    OutOfRange {
        parameter: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("{parameter} = {value} must be a positive, finite reach")]
    NotPositive { parameter: &'static str, value: f64 },

    #[error(
        "directional mode {0:?} must be either \"Forward\", \"Reverse\" or \"Non-directional\""
    )]
    UnknownDirMode(String),
}

/// Errors raised while slicing and selecting polygons.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("no component contains the reference point after slicing by the {step}")]
    NoContainingComponent { step: &'static str },

    #[error("{count} components contain the reference point after slicing by the {step}")]
    AmbiguousComponent { step: &'static str, count: usize },

    #[error("degenerate geometry: {0}")]
    Degenerate(String),
}

/// Convenience type alias for results using [`ZoneError`].
pub type Result<T> = std::result::Result<T, ZoneError>;
