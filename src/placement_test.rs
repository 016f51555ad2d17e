use crate::constants::SHELL_SCALE;
use crate::placement::{
    jitter_offset, place_on_shell, unit_direction, PartialPlacementOptions, PlacementOptions,
};
use crate::seed::hash_string_to_seed;
use glam::DVec3;

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLES: usize = 20_000;
    const BINS: usize = 10;

    fn shell_options() -> PlacementOptions {
        PlacementOptions::from_partial(PartialPlacementOptions {
            r_min: Some(24.0),
            r_max: Some(96.0),
            jitter: None,
        })
    }

    #[test]
    fn test_cubed_radii_fill_shell_evenly() {
        let opts = shell_options();
        let dir = DVec3::new(0.0, 0.0, 1.0);
        let (lo3, hi3) = (24.0_f64.powi(3), 96.0_f64.powi(3));

        let mut bins = [0usize; BINS];
        for i in 0..SAMPLES {
            let p = place_on_shell(dir, &format!("planet-{i}"), &opts);
            // jitter is perpendicular, so the component along dir is the shell radius
            let r = p.dot(dir) / SHELL_SCALE;
            assert!(r >= 24.0 - 1e-9 && r <= 96.0 + 1e-9, "radius {r} outside shell");
            let bin = (((r.powi(3) - lo3) / (hi3 - lo3)) * BINS as f64) as usize;
            bins[bin.min(BINS - 1)] += 1;
        }

        let expected = (SAMPLES / BINS) as f64;
        println!("r^3 histogram: {:?}", bins);
        for (i, count) in bins.iter().enumerate() {
            let deviation = (*count as f64 - expected).abs() / expected;
            assert!(deviation < 0.15, "bin {i} has {count}, expected ~{expected}");
        }
    }

    #[test]
    fn test_radius_is_not_uniform_in_r() {
        // volume-uniform sampling puts most bodies in the outer half of the shell
        let opts = shell_options();
        let outer = (0..5000)
            .map(|i| place_on_shell(DVec3::X, &format!("body-{i}"), &opts).x / SHELL_SCALE)
            .filter(|r| *r > 60.0)
            .count();
        assert!(outer > 3500, "only {outer} of 5000 in outer half");
    }

    #[test]
    fn test_jitter_does_not_change_radius() {
        let dir = DVec3::new(3.0, -1.0, 0.5);
        let n = unit_direction(dir);
        let calm = PlacementOptions::default().with_jitter(0.0);
        let default = PlacementOptions::default();
        let wild = PlacementOptions::default().with_jitter(2.0);

        for i in 0..200 {
            let key = format!("KOI-{i}");
            let a = place_on_shell(dir, &key, &calm);
            let b = place_on_shell(dir, &key, &default);
            let c = place_on_shell(dir, &key, &wild);
            assert!((a.dot(n) - b.dot(n)).abs() < 1e-9);
            assert!((a.dot(n) - c.dot(n)).abs() < 1e-9);
            // offsets scale with amplitude along the same perpendicular vector
            let off_b = b - a;
            let off_c = c - a;
            assert!((off_c - off_b * 5.0).length() < 1e-9);
        }
    }

    #[test]
    fn test_jitter_is_perpendicular_and_bounded() {
        let bound = 0.4 * 2.0_f64.sqrt() + 1e-12;
        for i in 0..500 {
            let dir = DVec3::new((i as f64).sin(), (i as f64 * 0.7).cos(), 0.3);
            let n = unit_direction(dir);
            let seed = hash_string_to_seed(&format!("star-{i}"));
            let offset = jitter_offset(n, seed, 0.4);
            assert!(offset.dot(n).abs() < 1e-12);
            assert!(offset.length() <= bound);
        }
    }

    #[test]
    fn test_different_keys_separate_same_direction() {
        let dir = DVec3::new(1.0, 1.0, 1.0);
        let opts = PlacementOptions::default();
        let a = place_on_shell(dir, "Kepler-62e", &opts);
        let b = place_on_shell(dir, "Kepler-62f", &opts);
        assert_ne!(a, b);
        assert!((a - b).length() > 1e-3);
    }

    #[test]
    fn test_placement_is_independent_of_call_order() {
        let opts = PlacementOptions::default();
        let keys: Vec<String> = (0..50).map(|i| format!("exo-{i}")).collect();
        let forward: Vec<DVec3> = keys
            .iter()
            .map(|k| place_on_shell(DVec3::Y, k, &opts))
            .collect();
        let mut backward: Vec<DVec3> = keys
            .iter()
            .rev()
            .map(|k| place_on_shell(DVec3::Y, k, &opts))
            .collect();
        backward.reverse();
        assert_eq!(forward, backward);
    }
}
