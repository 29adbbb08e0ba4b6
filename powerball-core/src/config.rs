use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PredictorConfig {
    pub title: String,
    pub top_k: usize,
}

impl Default for PredictorConfig {
    fn default() -> Self {
        Self {
            title: "South African PowerBall".to_string(),
            top_k: 5,
        }
    }
}

pub fn load_config(path: &Path) -> Result<PredictorConfig> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("Impossible de lire {:?}", path))?;
    let config: PredictorConfig = serde_json::from_str(&json)
        .with_context(|| format!("JSON invalide dans {:?}", path))?;
    log::info!("Configuration chargée depuis {:?} (top_k={})", path, config.top_k);
    Ok(config)
}

pub fn save_config(config: &PredictorConfig, path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(config)?;
    std::fs::write(path, json)
        .with_context(|| format!("Impossible d'écrire {:?}", path))?;
    log::info!("Configuration sauvegardée dans {:?}", path);
    Ok(())
}
