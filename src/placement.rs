use glam::DVec3;
use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_JITTER, DEFAULT_SHELL_MAX, DEFAULT_SHELL_MIN, FALLBACK_DIRECTION, JITTER_SEED_MASK,
    SHELL_SCALE,
};
use crate::seed::{hash_string_to_seed, Mulberry32};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct PlacementOptions {
    pub r_min: f64,
    pub r_max: f64,
    pub jitter: f64,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq)]
pub struct PartialPlacementOptions {
    pub r_min: Option<f64>,
    pub r_max: Option<f64>,
    pub jitter: Option<f64>,
}

impl Default for PlacementOptions {
    fn default() -> Self {
        Self {
            r_min: DEFAULT_SHELL_MIN,
            r_max: DEFAULT_SHELL_MAX,
            jitter: DEFAULT_JITTER,
        }
    }
}

fn usable(value: Option<f64>, fallback: f64) -> f64 {
    match value {
        Some(v) if v.is_finite() && v >= 0.0 => v,
        Some(v) => {
            log::warn!("ignoring placement option {v}; using {fallback}");
            fallback
        }
        None => fallback,
    }
}

impl PlacementOptions {
    /// Fills unset or unusable fields with defaults. Inverted bounds are swapped.
    pub fn from_partial(partial: PartialPlacementOptions) -> PlacementOptions {
        let r_min = usable(partial.r_min, DEFAULT_SHELL_MIN);
        let r_max = usable(partial.r_max, DEFAULT_SHELL_MAX);
        let (r_min, r_max) = if r_min > r_max { (r_max, r_min) } else { (r_min, r_max) };

        Self {
            r_min,
            r_max,
            jitter: usable(partial.jitter, DEFAULT_JITTER),
        }
    }

    pub fn with_jitter(mut self, jitter: f64) -> Self {
        self.jitter = usable(Some(jitter), DEFAULT_JITTER);
        self
    }
}

/// Unit vector along `direction`; zero or non-finite input points along +X.
pub fn unit_direction(direction: DVec3) -> DVec3 {
    let len = direction.length();
    if !len.is_finite() || len == 0.0 {
        return FALLBACK_DIRECTION;
    }
    direction / len
}

/// Radius inside [r_min, r_max] drawn so that points fill the shell
/// uniformly by volume. Unscaled.
pub fn radius_from_seed(seed: u32, r_min: f64, r_max: f64) -> f64 {
    let mut rng = Mulberry32::new(seed);
    let u = rng.next_unit();
    let r_min3 = r_min.powi(3);
    let r3 = (r_max.powi(3) - r_min3) * u + r_min3;
    r3.cbrt()
}

/// Two unit vectors spanning the plane perpendicular to unit vector `n`.
pub fn orthonormal_basis(n: DVec3) -> (DVec3, DVec3) {
    let helper = if n.x.abs() < 0.9 { DVec3::X } else { DVec3::Y };
    let u = n.cross(helper);
    let len = u.length();
    let u = if len == 0.0 { u } else { u / len };
    let v = n.cross(u);
    (u, v)
}

/// Small offset perpendicular to `n`, seeded independently of the radius draw.
pub fn jitter_offset(n: DVec3, seed: u32, amplitude: f64) -> DVec3 {
    let mut rng = Mulberry32::new(seed ^ JITTER_SEED_MASK);
    let j1 = rng.next_signed();
    let j2 = rng.next_signed();
    let (u, v) = orthonormal_basis(n);
    (u * j1 + v * j2) * amplitude
}

/// Places a body on the starfield shell. The result depends only on the
/// arguments: same direction, key and options give the same bits.
pub fn place_on_shell(direction: DVec3, seed_key: &str, options: &PlacementOptions) -> DVec3 {
    let n = unit_direction(direction);
    let seed = hash_string_to_seed(seed_key);

    let r = radius_from_seed(seed, options.r_min, options.r_max) * SHELL_SCALE;
    n * r + jitter_offset(n, seed, options.jitter)
}
