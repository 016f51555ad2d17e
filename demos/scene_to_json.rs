use exoplorer::exporter::SceneExporter;
use exoplorer::logging::setup_logging;
use exoplorer::{Catalog, PartialPlacementOptions, PlacementOptions, Scene};
use std::env;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let _logger = setup_logging("info")?;
    let args: Vec<String> = env::args().collect();

    let catalog_path = args
        .get(1)
        .cloned()
        .unwrap_or_else(|| "data/sample_catalog.json".to_string());
    let output_path = args
        .get(2)
        .cloned()
        .unwrap_or_else(|| "public/scene.json".to_string());
    let jitter = args.get(3).and_then(|s| s.parse::<f64>().ok());

    let catalog = Catalog::load(&catalog_path)?;
    let options = PlacementOptions::from_partial(PartialPlacementOptions {
        jitter,
        ..Default::default()
    });

    let scene = Scene::build(catalog.entries(), &options);
    for body in &scene.bodies {
        log::info!(
            "{:<24} mass {:>8}  teq {:>7.1} K  r {:.3}  at ({:.2}, {:.2}, {:.2})",
            body.name,
            body.mass_label,
            body.equilibrium_temp_k,
            body.radius,
            body.position.x,
            body.position.y,
            body.position.z,
        );
    }
    if !scene.skipped.is_empty() {
        log::warn!("{} entries without mass left out: {:?}", scene.skipped.len(), scene.skipped);
    }

    SceneExporter::new(true).save_to_json(&scene, &output_path)?;
    Ok(())
}
