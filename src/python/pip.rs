use crate::config::{validate_python_path, ConfigManager, PipConfig};
use crate::core::error::{PipMgrError, Result};
use crate::core::{CapturedOutput, ProcessExecutor};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Runs `pip` through a configured interpreter, one process at a time.
///
/// Every operation resolves to the message shown to the user: `Ok` on success,
/// `Err` carrying the failure text otherwise.
pub struct PipManager {
    config: ConfigManager,
    python_path: PathBuf,
}

impl PipManager {
    pub async fn load(config: ConfigManager) -> Result<Self> {
        let python_path = config.load().await?.python_path;
        debug!("using interpreter {}", python_path.display());
        Ok(Self {
            config,
            python_path,
        })
    }

    pub fn python_path(&self) -> &Path {
        &self.python_path
    }

    pub fn config_path(&self) -> &Path {
        self.config.config_path()
    }

    async fn run_pip(&self, args: &[&str]) -> Result<CapturedOutput> {
        let mut full: Vec<&str> = vec!["-m", "pip"];
        full.extend_from_slice(args);
        ProcessExecutor::capture(self.python_path.as_os_str(), &full).await
    }

    pub async fn update_pip(&self) -> Result<String> {
        let output = self.run_pip(&["install", "--upgrade", "pip"]).await?;
        if output.success() {
            return Ok("Pip updated successfully!".to_string());
        }
        Err(PipMgrError::Pip(format!(
            "Error updating pip: {}",
            output.stderr
        )))
    }

    pub async fn install_package(&self, package: &str) -> Result<String> {
        let output = self.run_pip(&["install", package]).await?;
        if output.success() {
            return Ok(format!("Package '{}' installed successfully!", package));
        }
        Err(PipMgrError::Pip(format!(
            "Error installing package: {}",
            output.stderr
        )))
    }

    pub async fn remove_package(&self, package: &str) -> Result<String> {
        let output = self.run_pip(&["uninstall", "-y", package]).await?;
        if output.success() {
            return Ok(format!("Package '{}' removed successfully!", package));
        }
        Err(PipMgrError::Pip(format!(
            "Error removing package: {}",
            output.stderr
        )))
    }

    pub async fn check_version(&self, package: &str) -> Result<String> {
        let output = self.run_pip(&["show", package]).await?;
        if !output.success() {
            return Err(PipMgrError::PackageNotFound(package.to_string()));
        }

        match parse_show_version(&output.stdout) {
            Some(version) => Ok(format!("Package '{}' version: {}", package, version)),
            None => Err(PipMgrError::VersionNotFound(package.to_string())),
        }
    }

    pub async fn list_packages(&self) -> Result<String> {
        let output = self.run_pip(&["list"]).await?;
        if output.success() {
            return Ok(output.stdout);
        }
        Err(PipMgrError::Pip(format!(
            "Error listing packages: {}",
            output.stderr
        )))
    }

    /// The in-memory path only changes once the new value is on disk.
    pub async fn update_python_path(&mut self, new_path: &Path) -> Result<String> {
        validate_python_path(new_path)?;

        self.config
            .save(&PipConfig::new(new_path))
            .await
            .map_err(|e| PipMgrError::PathUpdate(e.to_string()))?;
        self.python_path = new_path.to_path_buf();

        Ok("Python path updated successfully!".to_string())
    }

    pub async fn pip_version(&self) -> Result<String> {
        let output = self.run_pip(&["--version"]).await?;
        if output.success() {
            return Ok(output.stdout.trim().to_string());
        }
        Err(PipMgrError::Pip(format!(
            "Error running pip: {}",
            output.stderr
        )))
    }
}

/// Value of the first `Version:` line in `pip show` output.
pub fn parse_show_version(stdout: &str) -> Option<&str> {
    stdout
        .lines()
        .find(|line| line.starts_with("Version:"))
        .and_then(|line| line.split_once(':'))
        .map(|(_, version)| version.trim())
}
