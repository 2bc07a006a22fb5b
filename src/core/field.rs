//! Particle field renderer
//!
//! Owns the particle collection, advances it once per tick and draws it
//! through a [`Surface`]. All state lives in the `ParticleField` instance;
//! the theme is an injected accessor read on every frame.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info, trace};

use super::config::FieldConfig;
use super::connection::for_each_connection;
use super::particle::Particle;
use super::surface::{Surface, SurfaceSize};
use crate::theme::{ParticlePalette, ThemeSource};

/// Result of one tick
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    /// Field inactive, nothing updated or drawn
    Idle,
    /// One update + draw pass completed
    Drawn(FrameStats),
}

/// What a drawn frame contained
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FrameStats {
    pub particles: usize,
    pub connections: usize,
}

pub struct ParticleField<T, R = StdRng> {
    config: FieldConfig,
    theme: T,
    rng: R,
    particles: Vec<Particle>,
    size: SurfaceSize,
    /// Resize received since the last tick, applied before the next one
    pending_size: Option<SurfaceSize>,
    active: bool,
    reduced_motion: bool,
}

impl<T: ThemeSource> ParticleField<T, StdRng> {
    /// Field seeded from OS entropy
    pub fn new(config: FieldConfig, theme: T) -> Self {
        Self::with_rng(config, theme, StdRng::from_entropy())
    }
}

impl<T: ThemeSource, R: Rng> ParticleField<T, R> {
    pub fn with_rng(config: FieldConfig, theme: T, rng: R) -> Self {
        Self {
            config,
            theme,
            rng,
            particles: Vec::new(),
            size: SurfaceSize::default(),
            pending_size: None,
            active: false,
            reduced_motion: false,
        }
    }

    /// Generate a fresh field for `size` and start animating
    ///
    /// Callers are expected to `deactivate` first; activating an active field
    /// just regenerates it.
    pub fn activate(&mut self, size: SurfaceSize) {
        if self.active {
            debug!("activate on an active field, regenerating");
        }
        self.size = size;
        self.pending_size = None;
        self.active = true;
        self.regenerate();
        info!(
            particles = self.particles.len(),
            width = size.width,
            height = size.height,
            "Particle field activated"
        );
    }

    /// Stop animating and drop all particles
    ///
    /// A resize scheduled but not yet ticked still updates the size.
    pub fn deactivate(&mut self) {
        let dropped = self.particles.len();
        self.active = false;
        if let Some(size) = self.pending_size.take() {
            self.size = size;
        }
        self.particles = Vec::new();
        info!(dropped, "Particle field deactivated");
    }

    /// New surface dimensions; regenerates every particle while active
    ///
    /// Particles are not repositioned proportionally, so a resize visibly
    /// reshuffles the field. While inactive only the size is recorded.
    pub fn resize(&mut self, size: SurfaceSize) {
        self.size = size;
        self.pending_size = None;
        if self.active {
            self.regenerate();
        }
        debug!(
            width = size.width,
            height = size.height,
            active = self.active,
            "Particle field resized"
        );
    }

    /// Defer a resize until the start of the next tick
    ///
    /// An inactive field has no next tick, so the size is recorded at once.
    pub fn schedule_resize(&mut self, size: SurfaceSize) {
        if self.active {
            self.pending_size = Some(size);
        } else {
            self.size = size;
        }
    }

    /// Prefer the reduced-motion particle count from the next generation on
    pub fn set_reduced_motion(&mut self, reduced: bool) {
        self.reduced_motion = reduced;
    }

    /// One update + draw pass
    pub fn tick<S: Surface + ?Sized>(&mut self, surface: &mut S) -> TickOutcome {
        if !self.active {
            return TickOutcome::Idle;
        }
        if let Some(size) = self.pending_size.take() {
            self.resize(size);
        }

        self.update();
        let stats = self.render(surface);
        trace!(particles = stats.particles, connections = stats.connections, "Frame drawn");
        TickOutcome::Drawn(stats)
    }

    fn update(&mut self) {
        let size = self.size;
        for particle in &mut self.particles {
            particle.advance(size);
        }
    }

    fn render<S: Surface + ?Sized>(&self, surface: &mut S) -> FrameStats {
        let base = ParticlePalette::for_theme(self.theme.theme());
        let line_width = self.config.line_width;

        surface.clear(self.size);

        let connections = for_each_connection(
            &self.particles,
            self.config.connection_distance,
            self.config.max_line_opacity,
            |a, b, alpha| surface.line(a.position, b.position, base.with_alpha(alpha), line_width),
        );

        for particle in &self.particles {
            surface.glow(particle.position, particle.radius, base.with_alpha(particle.opacity));
        }

        FrameStats {
            particles: self.particles.len(),
            connections,
        }
    }

    fn regenerate(&mut self) {
        let count = self.target_count();
        let size = self.size;
        let config = &self.config;
        let rng = &mut self.rng;
        self.particles = (0..count).map(|_| Particle::spawn(rng, size, config)).collect();
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn size(&self) -> SurfaceSize {
        self.size
    }

    pub fn config(&self) -> &FieldConfig {
        &self.config
    }

    /// Particles generated per activation under the current motion preference
    pub fn target_count(&self) -> usize {
        self.config.count_for(self.reduced_motion)
    }
}
