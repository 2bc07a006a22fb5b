//! Connection lines between nearby particles
//!
//! Exhaustive pairwise scan, O(N²) per frame. Fine for the tens to low
//! hundreds of particles a hero background uses; this is the first thing to
//! replace with a spatial grid if N grows.

use super::particle::Particle;

/// Line alpha for two particles `distance` apart
///
/// Linear from `max_alpha` at zero distance down to 0 at `threshold`, and 0
/// beyond it. A non-positive threshold connects nothing.
pub fn connection_alpha(distance: f64, threshold: f64, max_alpha: f64) -> f64 {
    if !(threshold > 0.0) || !(distance < threshold) {
        return 0.0;
    }
    max_alpha * (1.0 - distance.max(0.0) / threshold)
}

/// Visit every unordered pair closer than `threshold`
///
/// The callback receives both particles and the line alpha. Returns the number
/// of connections visited.
pub fn for_each_connection<F>(
    particles: &[Particle],
    threshold: f64,
    max_alpha: f64,
    mut visit: F,
) -> usize
where
    F: FnMut(&Particle, &Particle, f64),
{
    if !(threshold > 0.0) {
        return 0;
    }
    let threshold_sq = threshold * threshold;
    let mut count = 0;

    for (i, a) in particles.iter().enumerate() {
        for b in &particles[i + 1..] {
            let dist_sq = a.position.distance_squared(b.position);
            if dist_sq >= threshold_sq {
                continue;
            }
            let alpha = connection_alpha(dist_sq.sqrt(), threshold, max_alpha);
            visit(a, b, alpha);
            count += 1;
        }
    }

    count
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::DVec2;
    use proptest::prelude::*;

    fn at(x: f64, y: f64) -> Particle {
        Particle {
            position: DVec2::new(x, y),
            velocity: DVec2::ZERO,
            radius: 1.0,
            opacity: 0.5,
        }
    }

    #[test]
    fn zero_distance_gives_max_alpha() {
        assert_eq!(connection_alpha(0.0, 150.0, 0.3), 0.3);
    }

    #[test]
    fn threshold_and_beyond_give_zero() {
        assert_eq!(connection_alpha(150.0, 150.0, 0.3), 0.0);
        assert_eq!(connection_alpha(400.0, 150.0, 0.3), 0.0);
    }

    #[test]
    fn midpoint_is_half() {
        assert!((connection_alpha(75.0, 150.0, 0.3) - 0.15).abs() < 1e-12);
    }

    #[test]
    fn zero_threshold_is_guarded() {
        assert_eq!(connection_alpha(0.0, 0.0, 0.3), 0.0);
        assert_eq!(for_each_connection(&[at(0.0, 0.0), at(0.0, 0.0)], 0.0, 0.3, |_, _, _| {}), 0);
    }

    #[test]
    fn coincident_pair_connects_at_max() {
        let particles = [at(10.0, 10.0), at(10.0, 10.0)];
        let mut alphas = Vec::new();
        let n = for_each_connection(&particles, 150.0, 0.3, |_, _, a| alphas.push(a));
        assert_eq!(n, 1);
        assert_eq!(alphas, vec![0.3]);
    }

    #[test]
    fn far_pair_has_no_connection() {
        let particles = [at(0.0, 0.0), at(150.0, 0.0), at(0.0, 300.0)];
        let n = for_each_connection(&particles, 150.0, 0.3, |_, _, _| panic!("unexpected line"));
        assert_eq!(n, 0);
    }

    #[test]
    fn each_unordered_pair_once() {
        let particles = [at(0.0, 0.0), at(10.0, 0.0), at(0.0, 10.0)];
        let n = for_each_connection(&particles, 150.0, 0.3, |_, _, _| {});
        assert_eq!(n, 3);
    }

    proptest! {
        #[test]
        fn alpha_is_non_increasing_in_distance(
            d1 in 0f64..300.0,
            d2 in 0f64..300.0,
        ) {
            let (near, far) = if d1 <= d2 { (d1, d2) } else { (d2, d1) };
            let a_near = connection_alpha(near, 150.0, 0.3);
            let a_far = connection_alpha(far, 150.0, 0.3);
            prop_assert!(a_near >= a_far);
            prop_assert!((0.0..=0.3).contains(&a_near));
        }
    }
}
