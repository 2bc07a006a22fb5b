//! Field tunables
//!
//! Every field has a default so a partial JSON object (or `{}`) is a valid
//! config. `validate` is called by `from_json`; constructing a config in code
//! skips it, so call it yourself when the values come from outside.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Highest accepted frame-rate cap
pub const MAX_FPS: f64 = 1000.0;

/// Particle field configuration
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldConfig {
    /// Number of particles generated per activation / resize
    pub particle_count: usize,
    /// Particle count used when the host prefers reduced motion
    pub reduced_motion_count: usize,
    /// Velocity components are drawn from [-max_speed, max_speed)
    pub max_speed: f64,
    pub radius_min: f64,
    pub radius_max: f64,
    pub opacity_min: f64,
    pub opacity_max: f64,
    /// Pairs closer than this are connected
    pub connection_distance: f64,
    /// Line alpha at zero distance
    pub max_line_opacity: f64,
    pub line_width: f64,
    /// Frame-rate cap (0 = run on every host frame)
    pub fps: f64,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            particle_count: 100,
            reduced_motion_count: 20,
            max_speed: 1.0,
            radius_min: 1.0,
            radius_max: 4.0,
            opacity_min: 0.2,
            opacity_max: 0.7,
            connection_distance: 150.0,
            max_line_opacity: 0.3,
            line_width: 1.0,
            fps: 60.0,
        }
    }
}

impl FieldConfig {
    /// Parse and validate a JSON config
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.particle_count == 0 {
            return Err(ConfigError::NoParticles);
        }

        let values = [
            ("max_speed", self.max_speed),
            ("radius_min", self.radius_min),
            ("radius_max", self.radius_max),
            ("opacity_min", self.opacity_min),
            ("opacity_max", self.opacity_max),
            ("connection_distance", self.connection_distance),
            ("max_line_opacity", self.max_line_opacity),
            ("line_width", self.line_width),
            ("fps", self.fps),
        ];
        for (name, value) in values {
            if !value.is_finite() {
                return Err(ConfigError::NotFinite { name, value });
            }
        }

        at_least("max_speed", self.max_speed, 0.0)?;
        at_least("radius_min", self.radius_min, 0.0)?;
        at_least("fps", self.fps, 0.0)?;
        if self.fps > MAX_FPS {
            return Err(ConfigError::OutOfRange {
                name: "fps",
                value: self.fps,
                expected: "<= 1000",
            });
        }
        non_empty("radius", self.radius_min, self.radius_max)?;
        non_empty("opacity", self.opacity_min, self.opacity_max)?;
        unit("opacity_min", self.opacity_min)?;
        unit("opacity_max", self.opacity_max)?;
        unit("max_line_opacity", self.max_line_opacity)?;
        positive("connection_distance", self.connection_distance)?;
        positive("line_width", self.line_width)?;

        Ok(())
    }

    /// Particle count for the given motion preference
    pub fn count_for(&self, reduced_motion: bool) -> usize {
        if reduced_motion {
            self.reduced_motion_count.max(1)
        } else {
            self.particle_count
        }
    }
}

fn non_empty(name: &'static str, min: f64, max: f64) -> Result<(), ConfigError> {
    if min < max {
        Ok(())
    } else {
        Err(ConfigError::EmptyRange { name, min, max })
    }
}

fn at_least(name: &'static str, value: f64, min: f64) -> Result<(), ConfigError> {
    if value >= min {
        Ok(())
    } else {
        Err(ConfigError::OutOfRange {
            name,
            value,
            expected: ">= 0",
        })
    }
}

fn positive(name: &'static str, value: f64) -> Result<(), ConfigError> {
    if value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::OutOfRange {
            name,
            value,
            expected: "> 0",
        })
    }
}

fn unit(name: &'static str, value: f64) -> Result<(), ConfigError> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::OutOfRange {
            name,
            value,
            expected: "[0, 1]",
        })
    }
}
