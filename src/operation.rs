use crate::core::error::{PipMgrError, Result};
use crate::python::PipManager;
use std::fmt;
use std::path::Path;

/// The operations every front-end offers, in menu order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    UpdatePip,
    InstallPackage,
    RemovePackage,
    CheckVersion,
    ListPackages,
    UpdatePythonPath,
}

impl Operation {
    pub const ALL: [Operation; 6] = [
        Operation::UpdatePip,
        Operation::InstallPackage,
        Operation::RemovePackage,
        Operation::CheckVersion,
        Operation::ListPackages,
        Operation::UpdatePythonPath,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Operation::UpdatePip => "Update PIP",
            Operation::InstallPackage => "Install Package",
            Operation::RemovePackage => "Remove Package",
            Operation::CheckVersion => "Check Version",
            Operation::ListPackages => "List Packages",
            Operation::UpdatePythonPath => "Update Python Path",
        }
    }

    pub fn from_label(label: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|op| op.label() == label)
            .ok_or(PipMgrError::InvalidOperation)
    }

    pub fn requires_package(self) -> bool {
        matches!(
            self,
            Operation::InstallPackage | Operation::RemovePackage | Operation::CheckVersion
        )
    }

    pub fn requires_python_path(self) -> bool {
        self == Operation::UpdatePythonPath
    }

    /// Operations that may take a while because pip talks to an index.
    pub fn is_long_running(self) -> bool {
        matches!(
            self,
            Operation::UpdatePip | Operation::InstallPackage | Operation::RemovePackage
        )
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Validate the inputs `op` needs and run it. Blank inputs never reach pip.
pub async fn dispatch(
    manager: &mut PipManager,
    op: Operation,
    package: &str,
    python_path: &str,
) -> Result<String> {
    let package = package.trim();
    let python_path = python_path.trim();

    if op.requires_package() && package.is_empty() {
        return Err(PipMgrError::MissingInput("package name"));
    }
    if op.requires_python_path() && python_path.is_empty() {
        return Err(PipMgrError::MissingInput("Python path"));
    }

    match op {
        Operation::UpdatePip => manager.update_pip().await,
        Operation::InstallPackage => manager.install_package(package).await,
        Operation::RemovePackage => manager.remove_package(package).await,
        Operation::CheckVersion => manager.check_version(package).await,
        Operation::ListPackages => manager.list_packages().await,
        Operation::UpdatePythonPath => manager.update_python_path(Path::new(python_path)).await,
    }
}
