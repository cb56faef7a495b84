use crate::config::schema::{PipConfig, DEFAULT_CONFIG_FILE};
use crate::core::error::Result;
use crate::core::fs::ensure_parent_exists;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{info, warn};

pub struct ConfigManager {
    config_path: PathBuf,
}

impl ConfigManager {
    pub fn new(config_path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: config_path.into(),
        }
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    pub fn exists(&self) -> bool {
        self.config_path.exists()
    }

    /// Missing or unreadable JSON yields the default interpreter; other I/O errors propagate.
    pub async fn load(&self) -> Result<PipConfig> {
        let content = match fs::read_to_string(&self.config_path).await {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(PipConfig::default()),
            Err(e) => return Err(e.into()),
        };

        match serde_json::from_str::<PipConfig>(&content) {
            Ok(config) => Ok(config),
            Err(e) => {
                warn!(
                    "ignoring malformed config {}: {}",
                    self.config_path.display(),
                    e
                );
                Ok(PipConfig::default())
            }
        }
    }

    pub async fn save(&self, config: &PipConfig) -> Result<()> {
        ensure_parent_exists(&self.config_path).await?;
        let content = serde_json::to_string(config)?;
        fs::write(&self.config_path, content).await?;
        info!(
            "saved python_path {} to {}",
            config.python_path.display(),
            self.config_path.display()
        );
        Ok(())
    }
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self::new(DEFAULT_CONFIG_FILE)
    }
}
