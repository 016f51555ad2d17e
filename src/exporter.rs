use std::path::Path;

use crate::error::DataError;
use crate::scene::Scene;

/// Writes assembled scenes as JSON for the renderer.
pub struct SceneExporter {
    pretty: bool,
}

impl SceneExporter {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }

    pub fn to_json_string(&self, scene: &Scene) -> Result<String, DataError> {
        let json = if self.pretty {
            serde_json::to_string_pretty(scene)?
        } else {
            serde_json::to_string(scene)?
        };
        Ok(json)
    }

    /// Creates missing parent directories.
    pub fn save_to_json<P: AsRef<Path>>(&self, scene: &Scene, path: P) -> Result<(), DataError> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, self.to_json_string(scene)?)?;
        log::info!("exported {} bodies to {}", scene.len(), path.display());
        Ok(())
    }

    pub fn load_from_json<P: AsRef<Path>>(path: P) -> Result<Scene, DataError> {
        let json = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&json)?)
    }
}
