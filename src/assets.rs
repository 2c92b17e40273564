use serde::{Deserialize, Serialize};

use crate::error::StartupError;

/// Paths of the two images the game needs, relative to the working
/// directory. Loaded once at startup; both images must exist and load or
/// startup fails.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssetManifest {
    pub background: String,
    pub player: String,
}

impl AssetManifest {
    pub fn load_from_file(path: &str) -> Result<Self, StartupError> {
        let content = std::fs::read_to_string(path).map_err(|e| StartupError::Manifest {
            path: path.to_string(),
            message: e.to_string(),
        })?;
        Self::from_json(path, &content)
    }

    fn from_json(path: &str, content: &str) -> Result<Self, StartupError> {
        serde_json::from_str(content).map_err(|e| StartupError::Manifest {
            path: path.to_string(),
            message: e.to_string(),
        })
    }
}
