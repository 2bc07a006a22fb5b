//! Key-value preference storage
//!
//! Browser builds back this with `localStorage`; tests and the CLI use
//! `MemoryStore`. Writes are best-effort and never fail the caller.

use std::collections::HashMap;

/// Preference key holding the last chosen hero background
pub const BACKGROUND_KEY: &str = "hero-background";

pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str);
}

/// In-memory store
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    values: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.values.insert(key.to_string(), value.to_string());
    }
}

/// Hero background style
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BackgroundMode {
    /// Static CSS gradient, no animation
    #[default]
    Gradient,
    /// Animated particle field
    Particles,
}

impl BackgroundMode {
    pub fn as_str(self) -> &'static str {
        match self {
            BackgroundMode::Gradient => "gradient",
            BackgroundMode::Particles => "particles",
        }
    }

    /// Strict parse of the persisted token
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "gradient" => Some(BackgroundMode::Gradient),
            "particles" => Some(BackgroundMode::Particles),
            _ => None,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            BackgroundMode::Gradient => BackgroundMode::Particles,
            BackgroundMode::Particles => BackgroundMode::Gradient,
        }
    }

    /// CSS class applied to the hero background container
    pub fn css_class(self) -> &'static str {
        match self {
            BackgroundMode::Gradient => "hero-background waves-background",
            BackgroundMode::Particles => "hero-background particles-background",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_store_overwrites() {
        let mut store = MemoryStore::new();
        assert_eq!(store.get(BACKGROUND_KEY), None);
        store.set(BACKGROUND_KEY, "gradient");
        store.set(BACKGROUND_KEY, "particles");
        assert_eq!(store.get(BACKGROUND_KEY).as_deref(), Some("particles"));
    }

    #[test]
    fn mode_tokens() {
        for mode in [BackgroundMode::Gradient, BackgroundMode::Particles] {
            assert_eq!(BackgroundMode::parse(mode.as_str()), Some(mode));
        }
        assert_eq!(BackgroundMode::parse("waves"), None);
        assert_eq!(BackgroundMode::parse(""), None);
    }

    #[test]
    fn toggled_flips() {
        assert_eq!(BackgroundMode::Gradient.toggled(), BackgroundMode::Particles);
        assert_eq!(BackgroundMode::Particles.toggled(), BackgroundMode::Gradient);
    }
}
