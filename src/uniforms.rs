use glam::{DVec3, Vec3};
use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_LIGHT_DIR;

/// Uniform block of the planet shader. Only `u_teq` and `u_light_dir` come
/// from data; everything else is a cosmetic default. Serializes with the
/// GLSL names (`uTeq`, `uLightDir`, ...).
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PlanetUniforms {
    pub u_teq: f32,
    pub u_light_dir: Vec3,
    pub u_band_freq: f32,
    pub u_band_contrast: f32,

    pub u_time: f32,
    pub u_shear_strength: f32,

    pub u_noise_scale: f32,
    pub u_noise_amp: f32,
    pub u_warp_amp: f32,
    pub u_noise_speed: f32,

    pub u_vortex_amt: f32,
    pub u_vortex_scale: f32,
    pub u_vortex_sharp: f32,
    pub u_vortex_tint: Vec3,

    // decorative, off unless enabled
    pub u_great_spot_amt: f32,
    pub u_great_spot_lat: f32,
    pub u_great_spot_lon: f32,
    pub u_great_spot_size: f32,
    pub u_great_spot_tint: Vec3,

    pub u_atm_strength: f32,
    pub u_atm_height: f32,
    pub u_atm_tint: Vec3,
    pub u_atm_anisotropy: f32,
}

impl PlanetUniforms {
    pub fn for_temperature(teq: f64) -> Self {
        Self {
            u_teq: teq as f32,
            u_light_dir: DEFAULT_LIGHT_DIR.as_vec3(),
            u_band_freq: 12.0,
            u_band_contrast: 0.45,

            u_time: 0.0,
            u_shear_strength: 0.18,

            u_noise_scale: 8.0,
            u_noise_amp: 0.6,
            u_warp_amp: 0.15,
            u_noise_speed: 0.20,

            u_vortex_amt: 0.55,
            u_vortex_scale: 3.5,
            u_vortex_sharp: 3.0,
            u_vortex_tint: Vec3::new(1.02, 0.98, 0.95),

            u_great_spot_amt: 0.0,
            u_great_spot_lat: -0.25,
            u_great_spot_lon: 1.20,
            u_great_spot_size: 0.22,
            u_great_spot_tint: Vec3::new(1.08, 0.88, 0.78),

            u_atm_strength: 0.35,
            u_atm_height: 1.2,
            u_atm_tint: Vec3::new(0.72, 0.82, 1.0),
            u_atm_anisotropy: 0.5,
        }
    }

    /// Zero-length directions keep the current light.
    pub fn with_light_dir(mut self, dir: DVec3) -> Self {
        if let Some(unit) = dir.try_normalize() {
            self.u_light_dir = unit.as_vec3();
        }
        self
    }

    /// Advances the animation clock by `dt` seconds.
    pub fn advance(&mut self, dt: f32) {
        self.u_time += dt;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let u = PlanetUniforms::for_temperature(255.0);
        assert_eq!(u.u_teq, 255.0);
        assert_eq!(u.u_great_spot_amt, 0.0);
        assert!((u.u_light_dir.length() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_light_dir_override() {
        let u = PlanetUniforms::for_temperature(900.0).with_light_dir(DVec3::new(-10.0, 0.0, 0.0));
        assert_eq!(u.u_light_dir, Vec3::new(-1.0, 0.0, 0.0));

        let kept = PlanetUniforms::for_temperature(900.0).with_light_dir(DVec3::ZERO);
        assert_eq!(kept.u_light_dir, DEFAULT_LIGHT_DIR.as_vec3());
    }

    #[test]
    fn test_advance_time() {
        let mut u = PlanetUniforms::for_temperature(300.0);
        u.advance(0.5);
        u.advance(0.25);
        assert!((u.u_time - 0.75).abs() < 1e-6);
    }

    #[test]
    fn test_serializes_with_shader_names() {
        let json = serde_json::to_value(PlanetUniforms::for_temperature(300.0)).unwrap();
        assert_eq!(json["uTeq"], 300.0);
        assert!(json.get("uGreatSpotTint").is_some());
        assert!(json.get("uAtmAnisotropy").is_some());
        assert!(json.get("uLightDir").is_some());
    }
}
