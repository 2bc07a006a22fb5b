//! Error types for configuration loading and host (browser) setup
//!
//! The frame loop itself never fails; these only cover the edges around it

use thiserror::Error;

/// Rejected `FieldConfig` values
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The JSON document could not be parsed into a config
    #[error("invalid config json: {0}")]
    Json(#[from] serde_json::Error),

    /// The field would spawn no particles
    #[error("particle_count must be at least 1")]
    NoParticles,

    /// A numeric setting was NaN or infinite
    #[error("{name} must be finite, got {value}")]
    NotFinite { name: &'static str, value: f64 },

    /// A `[min, max)` range was empty or inverted
    #[error("{name} range is empty: [{min}, {max})")]
    EmptyRange {
        name: &'static str,
        min: f64,
        max: f64,
    },

    /// A value fell outside its allowed interval
    #[error("{name} out of range: {value} (expected {expected})")]
    OutOfRange {
        name: &'static str,
        value: f64,
        expected: &'static str,
    },
}

/// Failures while wiring the renderer into a host page
#[derive(Debug, Error)]
pub enum HostError {
    /// A global (`window`, `document`, `localStorage`) was not available
    #[error("missing global: {0}")]
    MissingGlobal(&'static str),

    /// An element looked up by id does not exist
    #[error("element not found: #{0}")]
    ElementNotFound(String),

    /// An element exists but has an unexpected type
    #[error("element #{id} is not a {expected}")]
    WrongElementType { id: String, expected: &'static str },

    /// `getContext("2d")` returned nothing
    #[error("2d canvas context unavailable")]
    NoContext,

    /// A JavaScript call threw
    #[error("javascript error: {0}")]
    Js(String),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_range_names_setting_and_bounds() {
        let err = ConfigError::EmptyRange {
            name: "radius",
            min: 4.0,
            max: 1.0,
        };
        let msg = err.to_string();
        assert!(msg.contains("radius"), "missing name in: {msg}");
        assert!(msg.contains('4') && msg.contains('1'), "missing bounds in: {msg}");
    }

    #[test]
    fn json_error_converts() {
        let err: ConfigError = serde_json::from_str::<u32>("nope").unwrap_err().into();
        assert!(matches!(err, ConfigError::Json(_)));
    }

    #[test]
    fn host_error_wraps_config_error() {
        let err: HostError = ConfigError::NoParticles.into();
        assert_eq!(err.to_string(), "particle_count must be at least 1");
    }

    #[test]
    fn errors_are_send_and_sync() {
        fn assert_send_sync<T: Send + Sync + std::error::Error>() {}
        assert_send_sync::<ConfigError>();
        assert_send_sync::<HostError>();
    }
}
