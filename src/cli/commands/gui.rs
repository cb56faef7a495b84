use crate::core::error::Result;
use std::path::Path;

#[cfg(feature = "gui")]
pub async fn execute(config: &Path) -> Result<()> {
    use crate::config::ConfigManager;
    use crate::python::PipManager;

    let manager = PipManager::load(ConfigManager::new(config)).await?;
    tokio::task::block_in_place(|| crate::gui::run(manager))
}

#[cfg(not(feature = "gui"))]
pub async fn execute(_config: &Path) -> Result<()> {
    Err(crate::core::error::PipMgrError::Config(
        "this build has no graphical front-end (rebuild with `--features gui`); use `pip-mgr menu`"
            .to_string(),
    ))
}
