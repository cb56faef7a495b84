use crate::config::ConfigManager;
use crate::core::{error::Result, ProcessExecutor};
use crate::python::PipManager;
use colored::Colorize;
use std::path::{Path, PathBuf};

pub struct DoctorReport {
    pub python_path: PathBuf,
    pub interpreter_found: bool,
    /// `pip --version` output, or the first line of the failure.
    pub pip: std::result::Result<String, String>,
}

impl DoctorReport {
    pub fn all_ok(&self) -> bool {
        self.interpreter_found && self.pip.is_ok()
    }
}

pub async fn check(manager: &PipManager) -> DoctorReport {
    let python = manager.python_path();
    let interpreter_found = python.exists()
        || python
            .to_str()
            .is_some_and(ProcessExecutor::check_command_exists);

    let pip = manager.pip_version().await.map_err(|e| {
        let detail = e.to_string();
        detail
            .lines()
            .map(str::trim)
            .find(|l| !l.is_empty())
            .unwrap_or_default()
            .to_string()
    });

    DoctorReport {
        python_path: python.to_path_buf(),
        interpreter_found,
        pip,
    }
}

pub async fn execute(config: &Path) -> Result<()> {
    println!("{}", "Running environment checks...".bold());
    println!();

    let manager = PipManager::load(ConfigManager::new(config)).await?;
    let report = check(&manager).await;

    // Interpreter
    print!("Checking interpreter... ");
    if report.interpreter_found {
        println!(
            "{} ({})",
            "✓".green(),
            report.python_path.display().to_string().yellow()
        );
    } else {
        println!("{}", "✗ Not found".red());
        println!("  Select one with {}", "pip-mgr set-python <PATH>".cyan());
    }

    // pip
    print!("Checking pip... ");
    match &report.pip {
        Ok(version) => println!("{} ({})", "✓".green(), version.yellow()),
        Err(reason) => {
            println!("{}", "✗ Not runnable".red());
            println!("  {}", reason);
        }
    }

    println!();
    if report.all_ok() {
        println!("{}", "All checks passed!".green().bold());
    } else {
        println!(
            "{}",
            "Some checks failed. Please fix the issues above."
                .yellow()
                .bold()
        );
    }

    Ok(())
}
