use crate::python::default_interpreter;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const DEFAULT_CONFIG_FILE: &str = "python_path.json";

/// On-disk shape: `{"python_path": "..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PipConfig {
    #[serde(default = "default_interpreter")]
    pub python_path: PathBuf,
}

impl PipConfig {
    pub fn new(python_path: impl Into<PathBuf>) -> Self {
        Self {
            python_path: python_path.into(),
        }
    }
}

impl Default for PipConfig {
    fn default() -> Self {
        Self::new(default_interpreter())
    }
}
