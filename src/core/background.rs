//! Hero background toggle
//!
//! Binds the particle field to the persisted `gradient` / `particles`
//! choice: reads it once at startup, writes it on every toggle.

use rand::Rng;
use tracing::{info, warn};

use super::field::ParticleField;
use super::surface::SurfaceSize;
use crate::prefs::{BackgroundMode, PreferenceStore, BACKGROUND_KEY};
use crate::theme::ThemeSource;

pub struct HeroBackground<S, T, R> {
    field: ParticleField<T, R>,
    store: S,
    mode: BackgroundMode,
}

impl<S, T, R> HeroBackground<S, T, R>
where
    S: PreferenceStore,
    T: ThemeSource,
    R: Rng,
{
    pub fn new(field: ParticleField<T, R>, store: S) -> Self {
        Self {
            field,
            store,
            mode: BackgroundMode::Gradient,
        }
    }

    /// Restore the persisted mode, activating the field for `particles`
    pub fn start(&mut self, size: SurfaceSize, default_mode: BackgroundMode) -> BackgroundMode {
        let stored = self.store.get(BACKGROUND_KEY);
        self.mode = match stored.as_deref() {
            Some(token) => BackgroundMode::parse(token).unwrap_or_else(|| {
                warn!(token, "Unknown stored background mode, using default");
                default_mode
            }),
            None => default_mode,
        };

        self.field.resize(size);
        if self.mode == BackgroundMode::Particles {
            self.field.activate(size);
        }
        info!(mode = self.mode.as_str(), "Hero background started");
        self.mode
    }

    /// Flip between gradient and particles and persist the choice
    pub fn toggle(&mut self) -> BackgroundMode {
        self.mode = self.mode.toggled();
        match self.mode {
            BackgroundMode::Particles => {
                let size = self.field.size();
                self.field.activate(size);
            }
            BackgroundMode::Gradient => self.field.deactivate(),
        }
        self.store.set(BACKGROUND_KEY, self.mode.as_str());
        info!(mode = self.mode.as_str(), "Hero background toggled");
        self.mode
    }

    pub fn mode(&self) -> BackgroundMode {
        self.mode
    }

    pub fn field(&self) -> &ParticleField<T, R> {
        &self.field
    }

    pub fn field_mut(&mut self) -> &mut ParticleField<T, R> {
        &mut self.field
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::FieldConfig;
    use crate::core::field::TickOutcome;
    use crate::core::surface::CountingSurface;
    use crate::prefs::MemoryStore;
    use crate::theme::Theme;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    const SIZE: SurfaceSize = SurfaceSize::new(800.0, 600.0);

    fn background(stored: Option<&str>) -> HeroBackground<MemoryStore, Theme, StdRng> {
        let mut store = MemoryStore::new();
        if let Some(token) = stored {
            store.set(BACKGROUND_KEY, token);
        }
        let field =
            ParticleField::with_rng(FieldConfig::default(), Theme::Light, StdRng::seed_from_u64(9));
        HeroBackground::new(field, store)
    }

    #[test]
    fn stored_particles_auto_activates() {
        let mut bg = background(Some("particles"));
        assert_eq!(bg.start(SIZE, BackgroundMode::Gradient), BackgroundMode::Particles);
        assert!(bg.field().is_active());
        assert_eq!(bg.field().particles().len(), 100);
    }

    #[test]
    fn gradient_missing_or_garbage_stays_idle() {
        for stored in [Some("gradient"), None, Some("waves")] {
            let mut bg = background(stored);
            assert_eq!(bg.start(SIZE, BackgroundMode::Gradient), BackgroundMode::Gradient);
            assert!(!bg.field().is_active());
        }
    }

    #[test]
    fn default_mode_applies_without_stored_value() {
        let mut bg = background(None);
        assert_eq!(bg.start(SIZE, BackgroundMode::Particles), BackgroundMode::Particles);
        assert!(bg.field().is_active());
    }

    #[test]
    fn toggle_persists_and_switches_field() {
        let mut bg = background(None);
        bg.start(SIZE, BackgroundMode::Gradient);

        assert_eq!(bg.toggle(), BackgroundMode::Particles);
        assert_eq!(bg.store.get(BACKGROUND_KEY).as_deref(), Some("particles"));
        assert_eq!(bg.field().particles().len(), 100);
        assert_eq!(bg.field().size(), SIZE);

        assert_eq!(bg.toggle(), BackgroundMode::Gradient);
        assert_eq!(bg.store.get(BACKGROUND_KEY).as_deref(), Some("gradient"));
        assert!(bg.field().particles().is_empty());

        let mut surface = CountingSurface::new();
        assert_eq!(bg.field_mut().tick(&mut surface), TickOutcome::Idle);
        assert_eq!(surface.draw_calls(), 0);
    }
}
