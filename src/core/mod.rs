//! Platform-agnostic core - shared between the browser build and the CLI

pub mod background;
pub mod config;
pub mod connection;
pub mod field;
pub mod pacer;
pub mod particle;
pub mod surface;

pub use background::HeroBackground;
pub use config::FieldConfig;
pub use connection::{connection_alpha, for_each_connection};
pub use field::{FrameStats, ParticleField, TickOutcome};
pub use pacer::FramePacer;
pub use particle::Particle;
pub use surface::{CountingSurface, Surface, SurfaceSize};
