use crate::cli::progress::spinner;
use crate::config::ConfigManager;
use crate::core::error::Result;
use crate::operation::{dispatch, Operation};
use crate::python::PipManager;
use colored::Colorize;
use std::path::Path;

pub async fn execute(config: &Path, op: Operation, package: &str, python_path: &str) -> Result<()> {
    let mut manager = PipManager::load(ConfigManager::new(config)).await?;

    let message = if op.is_long_running() {
        let pb = spinner(format!(
            "{} via {}",
            op.label(),
            manager.python_path().display()
        ));
        let result = dispatch(&mut manager, op, package, python_path).await;
        pb.finish_and_clear();
        result?
    } else {
        dispatch(&mut manager, op, package, python_path).await?
    };

    if op == Operation::ListPackages {
        print!("{}", message);
    } else {
        println!("{} {}", "✓".green().bold(), message.green());
    }

    Ok(())
}
