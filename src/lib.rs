pub mod constants;
mod helpers;
pub mod seed;
pub mod placement;
pub mod mass;
pub mod planet;
pub mod catalog;
pub mod palette;
pub mod uniforms;
pub mod scene;
pub mod exporter;
pub mod error;
pub mod logging;

#[cfg(test)]
mod placement_test;


pub use catalog::{Catalog, CatalogEntry, CatalogFilter, PlanetStatus};
pub use error::DataError;
pub use mass::{parse_mass, MassValue, ParsedMass};
pub use placement::{place_on_shell, PartialPlacementOptions, PlacementOptions};
pub use planet::{compute_equilibrium_temperature, mass_to_visual_radius};
pub use scene::{Scene, SceneBody};
