use crate::config::ConfigManager;
use crate::core::error::Result;
use colored::Colorize;
use std::path::{Path, PathBuf};

pub struct ConfigStatus {
    pub config_path: PathBuf,
    pub saved: bool,
    pub python_path: PathBuf,
    pub python_exists: bool,
}

pub async fn inspect(config: &Path) -> Result<ConfigStatus> {
    let config_mgr = ConfigManager::new(config);
    let current = config_mgr.load().await?;

    Ok(ConfigStatus {
        config_path: config_mgr.config_path().to_path_buf(),
        saved: config_mgr.exists(),
        python_exists: current.python_path.exists(),
        python_path: current.python_path,
    })
}

pub async fn execute(config: &Path) -> Result<()> {
    let status = inspect(config).await?;

    let source = if status.saved {
        "saved".green()
    } else {
        "not saved, using default".yellow()
    };
    println!(
        "Config file: {} ({})",
        status.config_path.display().to_string().yellow(),
        source
    );

    let marker = if status.python_exists {
        "✓".green()
    } else {
        "✗ missing".red()
    };
    println!(
        "Python path: {} {}",
        status.python_path.display().to_string().cyan(),
        marker
    );

    Ok(())
}
