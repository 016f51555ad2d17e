use glam::{DVec3, Vec3};
use once_cell::sync::Lazy;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::catalog::CatalogEntry;
use crate::constants::{
    DEFAULT_LIGHT_DIR, EARTH_COLOR_HEX, EARTH_RADIUS_SCENE, EARTH_SCENE_POSITION,
    EARTH_SHADER_TEQ_K, SUN_COLOR_HEX, SUN_LIGHT_DIR, SUN_SCENE_RADIUS, SUN_SHADER_TEQ_K,
};
use crate::palette::{hex_to_rgb, palette_for_temperature};
use crate::placement::{place_on_shell, PlacementOptions};
use crate::planet::{compute_equilibrium_temperature, focus_distance, mass_to_visual_radius};
use crate::uniforms::PlanetUniforms;

/// Everything a renderer needs to draw one body.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct SceneBody {
    pub id: String,
    pub name: String,
    pub mass_label: String,
    pub position: DVec3,
    pub radius: f64,
    pub equilibrium_temp_k: f64,
    /// Unit vector from the body toward the star at the origin.
    pub light_dir: DVec3,
    pub base_color: Vec3,
    pub uniforms: PlanetUniforms,
}

impl SceneBody {
    /// `None` for entries without a numeric mass; the starfield only shows
    /// bodies it can size.
    pub fn from_entry(entry: &CatalogEntry, options: &PlacementOptions) -> Option<SceneBody> {
        entry.mass.mass_earth?;

        let position = place_on_shell(entry.direction, &entry.id, options);
        let radius = mass_to_visual_radius(entry.mass.mass_earth);
        let teq = compute_equilibrium_temperature(entry);
        let light_dir = (-position).try_normalize().unwrap_or(*DEFAULT_LIGHT_DIR);

        Some(SceneBody {
            id: entry.id.clone(),
            name: entry.name.clone(),
            mass_label: entry.mass.label.clone(),
            position,
            radius,
            equilibrium_temp_k: teq,
            light_dir,
            base_color: palette_for_temperature(teq),
            uniforms: PlanetUniforms::for_temperature(teq).with_light_dir(light_dir),
        })
    }

    pub fn focus_distance(&self) -> f64 {
        focus_distance(self.radius)
    }
}

fn reference_body(
    id: &str,
    name: &str,
    mass_label: &str,
    position: DVec3,
    radius: f64,
    teq: f64,
    light_dir: DVec3,
    color_hex: &str,
) -> SceneBody {
    SceneBody {
        id: id.to_string(),
        name: name.to_string(),
        mass_label: mass_label.to_string(),
        position,
        radius,
        equilibrium_temp_k: teq,
        light_dir,
        base_color: hex_to_rgb(color_hex).unwrap_or_else(|| palette_for_temperature(teq)),
        uniforms: PlanetUniforms::for_temperature(teq).with_light_dir(light_dir),
    }
}

/// The Sun at the origin and Earth on the +X axis, drawn for scale.
pub static REFERENCE_BODIES: Lazy<Vec<SceneBody>> = Lazy::new(|| {
    vec![
        reference_body(
            "sun",
            "Sun",
            "332946",
            DVec3::ZERO,
            SUN_SCENE_RADIUS,
            SUN_SHADER_TEQ_K,
            *SUN_LIGHT_DIR,
            SUN_COLOR_HEX,
        ),
        reference_body(
            "earth",
            "Earth",
            "1",
            EARTH_SCENE_POSITION,
            EARTH_RADIUS_SCENE,
            EARTH_SHADER_TEQ_K,
            -EARTH_SCENE_POSITION.normalize(),
            EARTH_COLOR_HEX,
        ),
    ]
});

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct Scene {
    pub reference_bodies: Vec<SceneBody>,
    pub bodies: Vec<SceneBody>,
    /// Entries left out for lack of a numeric mass.
    pub skipped: Vec<String>,
}

impl Scene {
    /// Assembles bodies in catalog order. Each body depends only on its own
    /// entry, so evaluation runs in parallel.
    pub fn build(entries: &[CatalogEntry], options: &PlacementOptions) -> Scene {
        let bodies: Vec<SceneBody> = entries
            .par_iter()
            .filter_map(|entry| SceneBody::from_entry(entry, options))
            .collect();

        let skipped: Vec<String> = entries
            .iter()
            .filter(|entry| entry.mass.mass_earth.is_none())
            .map(|entry| entry.id.clone())
            .collect();

        log::debug!(
            "scene assembled: {} bodies, {} skipped without mass",
            bodies.len(),
            skipped.len()
        );

        Scene {
            reference_bodies: REFERENCE_BODIES.clone(),
            bodies,
            skipped,
        }
    }

    pub fn find(&self, id: &str) -> Option<&SceneBody> {
        self.bodies
            .iter()
            .chain(self.reference_bodies.iter())
            .find(|body| body.id == id)
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }
}
