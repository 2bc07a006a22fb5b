//! hero-fx - animated particle background for a portfolio hero section
//!
//! - `core`: particle field, pacing and the background toggle (no browser deps)
//! - `theme` / `prefs`: light/dark theme and persisted preferences
//! - `web` (feature `wasm`): canvas, `localStorage` and DOM event wiring

pub mod core;
pub mod error;
pub mod prefs;
pub mod theme;
pub mod time;

#[cfg(all(target_arch = "wasm32", feature = "wasm"))]
mod web;

pub use crate::core::{FieldConfig, HeroBackground, ParticleField, SurfaceSize, TickOutcome};
pub use crate::error::{ConfigError, HostError};
pub use crate::prefs::{BackgroundMode, MemoryStore, PreferenceStore};
pub use crate::theme::{SharedTheme, Theme, ThemeSource};
