//! Temperature palette of the planet shader, evaluated on the CPU so renderers
//! and exports can show the same base color the GPU computes.

use glam::Vec3;

use crate::helpers::{clamp_range, fract, mix, smoothstep};

const COLD_HUE: f64 = 210.0 / 360.0;
const WARM_HUE: f64 = 330.0 / 360.0;
const HOT_HUE: f64 = 25.0 / 360.0;

const PALETTE_MIN_K: f64 = 100.0;
const PALETTE_MAX_K: f64 = 2000.0;
const WARM_PIVOT_K: f64 = 600.0;
const HOT_PIVOT_K: f64 = 1500.0;

/// Interpolates hue along the shorter arc of the color wheel.
pub fn hue_lerp(h1: f64, h2: f64, t: f64) -> f64 {
    let mut d = h2 - h1;
    d -= (d + 0.5).floor();
    fract(h1 + d * t)
}

/// HSL with every channel in [0, 1].
pub fn hsl_to_rgb(h: f64, s: f64, l: f64) -> Vec3 {
    let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
    let x = c * (1.0 - ((h * 6.0).rem_euclid(2.0) - 1.0).abs());
    let m = l - 0.5 * c;

    let (r, g, b) = if h < 1.0 / 6.0 {
        (c, x, 0.0)
    } else if h < 2.0 / 6.0 {
        (x, c, 0.0)
    } else if h < 3.0 / 6.0 {
        (0.0, c, x)
    } else if h < 4.0 / 6.0 {
        (0.0, x, c)
    } else if h < 5.0 / 6.0 {
        (x, 0.0, c)
    } else {
        (c, 0.0, x)
    };
    Vec3::new((r + m) as f32, (g + m) as f32, (b + m) as f32)
}

/// Base surface color for an equilibrium temperature: pale blue for cold
/// worlds through magenta to deep orange for the hottest.
pub fn palette_for_temperature(teq: f64) -> Vec3 {
    let t = clamp_range((teq - PALETTE_MIN_K) / (PALETTE_MAX_K - PALETTE_MIN_K), 0.0, 1.0);
    let hue = if teq < WARM_PIVOT_K {
        hue_lerp(COLD_HUE, WARM_HUE, smoothstep(PALETTE_MIN_K, WARM_PIVOT_K, teq))
    } else {
        hue_lerp(WARM_HUE, HOT_HUE, smoothstep(WARM_PIVOT_K, HOT_PIVOT_K, teq))
    };
    let saturation = mix(0.5, 0.7, t);
    let lightness = mix(0.65, 0.45, t);
    hsl_to_rgb(hue, saturation, lightness)
}

/// Parses `#rrggbb` into linear [0, 1] channels.
pub fn hex_to_rgb(hex: &str) -> Option<Vec3> {
    let digits = hex.strip_prefix('#').unwrap_or(hex);
    if digits.len() != 6 {
        return None;
    }
    let channel = |i: usize| {
        u8::from_str_radix(digits.get(i..i + 2)?, 16)
            .ok()
            .map(|v| v as f32 / 255.0)
    };
    Some(Vec3::new(channel(0)?, channel(2)?, channel(4)?))
}
