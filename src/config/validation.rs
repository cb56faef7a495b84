use crate::core::error::{PipMgrError, Result};
use std::path::Path;

pub fn validate_python_path(path: &Path) -> Result<()> {
    if path.as_os_str().is_empty() || !path.exists() {
        return Err(PipMgrError::InvalidPythonPath);
    }
    Ok(())
}
