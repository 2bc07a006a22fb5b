//! Light / dark theme and the colours derived from it
//!
//! The field never caches the theme: it asks its `ThemeSource` on every
//! frame, so a toggle shows up on the next tick.

use std::cell::Cell;
use std::fmt;
use std::rc::Rc;

use tracing::debug;

use crate::prefs::PreferenceStore;

/// Preference key holding the last chosen theme
pub const THEME_KEY: &str = "theme";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Strict parse of the persisted token
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Icon shown on the toggle button (offers the opposite theme)
    pub fn toggle_icon(self) -> &'static str {
        match self {
            Theme::Dark => "☀️",
            Theme::Light => "🌙",
        }
    }
}

/// Stored theme if present and valid, otherwise the system preference
pub fn resolve_initial_theme<S: PreferenceStore + ?Sized>(
    store: &S,
    system_prefers_dark: bool,
) -> Theme {
    let stored = store.get(THEME_KEY);
    match stored.as_deref().and_then(Theme::parse) {
        Some(theme) => theme,
        None => {
            debug!(?stored, system_prefers_dark, "No usable stored theme, following system");
            if system_prefers_dark {
                Theme::Dark
            } else {
                Theme::Light
            }
        }
    }
}

// ============================================================================
// Theme accessors
// ============================================================================

/// Read-only view of the currently active theme
pub trait ThemeSource {
    fn theme(&self) -> Theme;
}

impl ThemeSource for Theme {
    fn theme(&self) -> Theme {
        *self
    }
}

impl<T: ThemeSource + ?Sized> ThemeSource for &T {
    fn theme(&self) -> Theme {
        (**self).theme()
    }
}

impl<T: ThemeSource + ?Sized> ThemeSource for Rc<T> {
    fn theme(&self) -> Theme {
        (**self).theme()
    }
}

/// Cloneable handle: the theme component writes, the field reads
#[derive(Clone, Debug, Default)]
pub struct SharedTheme(Rc<Cell<Theme>>);

impl SharedTheme {
    pub fn new(theme: Theme) -> Self {
        Self(Rc::new(Cell::new(theme)))
    }

    pub fn set(&self, theme: Theme) {
        self.0.set(theme);
    }

    pub fn toggle(&self) -> Theme {
        let next = self.0.get().toggled();
        self.0.set(next);
        next
    }
}

impl ThemeSource for SharedTheme {
    fn theme(&self) -> Theme {
        self.0.get()
    }
}

// ============================================================================
// Colours
// ============================================================================

/// RGB colour with a floating alpha, rendered as CSS `rgba(...)`
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f64,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: f64) -> Self {
        Self { r, g, b, a }
    }

    pub fn with_alpha(self, a: f64) -> Self {
        Self { a, ..self }
    }

    pub fn transparent(self) -> Self {
        self.with_alpha(0.0)
    }

    pub fn same_rgb(&self, other: &Rgba) -> bool {
        (self.r, self.g, self.b) == (other.r, other.g, other.b)
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "rgba({}, {}, {}, {:.3})",
            self.r,
            self.g,
            self.b,
            self.a.clamp(0.0, 1.0)
        )
    }
}

/// Particle and connection colour family per theme
pub struct ParticlePalette;

impl ParticlePalette {
    /// Cyan on light backgrounds
    pub const LIGHT: Rgba = Rgba::new(0, 245, 255, 1.0);
    /// Purple on dark backgrounds
    pub const DARK: Rgba = Rgba::new(168, 85, 247, 1.0);

    pub fn for_theme(theme: Theme) -> Rgba {
        match theme {
            Theme::Light => Self::LIGHT,
            Theme::Dark => Self::DARK,
        }
    }
}

/// Scroll offset past which the navbar turns nearly opaque
pub const NAVBAR_SCROLL_THRESHOLD: f64 = 100.0;

/// Navbar background for the current scroll offset
pub fn navbar_background(scroll_y: f64, theme: Theme) -> Rgba {
    let alpha = if scroll_y > NAVBAR_SCROLL_THRESHOLD {
        0.98
    } else {
        0.95
    };
    match theme {
        Theme::Dark => Rgba::new(26, 32, 44, alpha),
        Theme::Light => Rgba::new(255, 255, 255, alpha),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prefs::MemoryStore;

    #[test]
    fn token_round_trip_is_strict() {
        assert_eq!(Theme::parse("dark"), Some(Theme::Dark));
        assert_eq!(Theme::parse("light"), Some(Theme::Light));
        assert_eq!(Theme::parse("Dark"), None);
        assert_eq!(Theme::Dark.as_str(), "dark");
    }

    #[test]
    fn stored_theme_beats_system_preference() {
        let mut store = MemoryStore::new();
        store.set(THEME_KEY, "light");
        assert_eq!(resolve_initial_theme(&store, true), Theme::Light);
    }

    #[test]
    fn garbage_falls_back_to_system() {
        let mut store = MemoryStore::new();
        assert_eq!(resolve_initial_theme(&store, true), Theme::Dark);
        store.set(THEME_KEY, "sepia");
        assert_eq!(resolve_initial_theme(&store, false), Theme::Light);
    }

    #[test]
    fn shared_theme_is_visible_through_clones() {
        let writer = SharedTheme::new(Theme::Light);
        let reader = writer.clone();
        assert_eq!(writer.toggle(), Theme::Dark);
        assert_eq!(reader.theme(), Theme::Dark);
        writer.set(Theme::Light);
        assert_eq!(Rc::new(reader).theme(), Theme::Light);
    }

    #[test]
    fn palette_colours() {
        assert_eq!(ParticlePalette::for_theme(Theme::Light).to_string(), "rgba(0, 245, 255, 1.000)");
        assert_eq!(
            ParticlePalette::for_theme(Theme::Dark).with_alpha(0.3).to_string(),
            "rgba(168, 85, 247, 0.300)"
        );
        assert_eq!(ParticlePalette::DARK.transparent().a, 0.0);
    }

    #[test]
    fn navbar_thresholds() {
        assert_eq!(navbar_background(0.0, Theme::Light), Rgba::new(255, 255, 255, 0.95));
        assert_eq!(navbar_background(100.0, Theme::Light).a, 0.95);
        assert_eq!(navbar_background(101.0, Theme::Dark), Rgba::new(26, 32, 44, 0.98));
    }

    #[test]
    fn toggle_icon_offers_opposite() {
        assert_eq!(Theme::Dark.toggle_icon(), "☀️");
        assert_eq!(Theme::Light.toggle_icon(), "🌙");
    }
}
