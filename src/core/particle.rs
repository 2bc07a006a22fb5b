//! A single drifting point and its edge wraparound

use glam::DVec2;
use rand::Rng;

use super::config::FieldConfig;
use super::surface::SurfaceSize;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    /// Surface-space position
    pub position: DVec2,
    /// Displacement per tick, fixed for the particle's lifetime
    pub velocity: DVec2,
    pub radius: f64,
    /// Centre alpha of the particle's glow
    pub opacity: f64,
}

impl Particle {
    /// Random particle inside `[0, width) x [0, height)`
    ///
    /// Never panics on degenerate sizes or ranges; those collapse to their
    /// lower bound.
    pub fn spawn<R: Rng + ?Sized>(rng: &mut R, size: SurfaceSize, config: &FieldConfig) -> Self {
        let position = DVec2::new(
            wrap(rng.gen::<f64>() * size.width.max(0.0), size.width),
            wrap(rng.gen::<f64>() * size.height.max(0.0), size.height),
        );
        let velocity = DVec2::new(
            (rng.gen::<f64>() * 2.0 - 1.0) * config.max_speed,
            (rng.gen::<f64>() * 2.0 - 1.0) * config.max_speed,
        );

        Self {
            position,
            velocity,
            radius: lerp_range(rng, config.radius_min, config.radius_max),
            opacity: lerp_range(rng, config.opacity_min, config.opacity_max),
        }
    }

    /// Move by one tick of velocity, wrapping on each axis independently
    pub fn advance(&mut self, size: SurfaceSize) {
        let next = self.position + self.velocity;
        self.position = DVec2::new(wrap(next.x, size.width), wrap(next.y, size.height));
    }
}

/// Modular wrap of `value` into `[0, extent)`
///
/// Returns 0 for a degenerate extent.
pub fn wrap(value: f64, extent: f64) -> f64 {
    if !(extent > 0.0) || !value.is_finite() {
        return 0.0;
    }
    let wrapped = value.rem_euclid(extent);
    // rem_euclid can round up to `extent` for tiny negative inputs
    if wrapped >= extent {
        0.0
    } else {
        wrapped
    }
}

fn lerp_range<R: Rng + ?Sized>(rng: &mut R, min: f64, max: f64) -> f64 {
    min + rng.gen::<f64>() * (max - min).max(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn particle(x: f64, y: f64, vx: f64, vy: f64) -> Particle {
        Particle {
            position: DVec2::new(x, y),
            velocity: DVec2::new(vx, vy),
            radius: 2.0,
            opacity: 0.5,
        }
    }

    #[test]
    fn wraps_past_right_edge_instead_of_clamping() {
        let size = SurfaceSize::new(800.0, 600.0);
        let mut p = particle(799.5, 300.0, 1.0, 0.0);
        p.advance(size);
        assert!((p.position.x - 0.5).abs() < 1e-9, "x = {}", p.position.x);
        assert_eq!(p.position.y, 300.0);
        // velocity is untouched by wrapping
        assert_eq!(p.velocity, DVec2::new(1.0, 0.0));
    }

    #[test]
    fn wraps_past_left_and_top_edges() {
        let size = SurfaceSize::new(800.0, 600.0);
        let mut p = particle(0.25, 0.5, -1.0, -1.0);
        p.advance(size);
        assert!((p.position.x - 799.25).abs() < 1e-9);
        assert!((p.position.y - 599.5).abs() < 1e-9);
    }

    #[test]
    fn tiny_negative_never_lands_on_extent() {
        assert_eq!(wrap(-1e-20, 800.0), 0.0);
        assert!(wrap(-1e-20, 800.0) < 800.0);
    }

    #[test]
    fn degenerate_extent_collapses_to_origin() {
        assert_eq!(wrap(5.0, 0.0), 0.0);
        assert_eq!(wrap(5.0, -10.0), 0.0);
        assert_eq!(wrap(f64::NAN, 10.0), 0.0);
    }

    #[test]
    fn spawn_respects_config_ranges() {
        let mut rng = StdRng::seed_from_u64(7);
        let config = FieldConfig::default();
        let size = SurfaceSize::new(800.0, 600.0);
        for _ in 0..500 {
            let p = Particle::spawn(&mut rng, size, &config);
            assert!((0.0..800.0).contains(&p.position.x));
            assert!((0.0..600.0).contains(&p.position.y));
            assert!((-1.0..1.0).contains(&p.velocity.x));
            assert!((-1.0..1.0).contains(&p.velocity.y));
            assert!((1.0..4.0).contains(&p.radius));
            assert!((0.2..0.7).contains(&p.opacity));
        }
    }

    #[test]
    fn spawn_on_zero_area_does_not_panic() {
        let mut rng = StdRng::seed_from_u64(1);
        let p = Particle::spawn(&mut rng, SurfaceSize::new(0.0, -5.0), &FieldConfig::default());
        assert_eq!(p.position, DVec2::ZERO);
    }

    proptest! {
        #[test]
        fn advance_keeps_particle_in_bounds(
            x in -1e4f64..1e4,
            y in -1e4f64..1e4,
            vx in -50f64..50.0,
            vy in -50f64..50.0,
            w in 1f64..4000.0,
            h in 1f64..4000.0,
        ) {
            let size = SurfaceSize::new(w, h);
            let mut p = particle(x, y, vx, vy);
            p.advance(size);
            prop_assert!(p.position.x >= 0.0 && p.position.x < w);
            prop_assert!(p.position.y >= 0.0 && p.position.y < h);
        }
    }
}
