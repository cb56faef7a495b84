pub mod commands;
pub mod menu;
pub mod progress;

use crate::config::DEFAULT_CONFIG_FILE;
use crate::operation::Operation;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "pip-mgr",
    version,
    about = "Manage the pip packages of a chosen Python interpreter",
    long_about = "Update pip, install, remove and inspect packages, and switch which Python \
                  interpreter's pip is used. Runs the graphical front-end when no command is given."
)]
pub struct Cli {
    /// JSON file that stores the selected Python interpreter
    #[arg(long, global = true, value_name = "FILE", default_value = DEFAULT_CONFIG_FILE)]
    pub config: PathBuf,

    /// Start the interactive text menu when no command is given (same as `pip-mgr menu`)
    #[arg(long = "cli")]
    pub menu: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Upgrade pip itself to the latest version
    UpdatePip,

    /// Install a package (e.g., requests, requests==2.31.0)
    Install {
        /// Package name or requirement specifier
        package: String,
    },

    /// Uninstall a package without confirmation
    #[command(visible_alias = "uninstall")]
    Remove {
        /// Package name
        package: String,
    },

    /// Show the installed version of a package
    #[command(visible_alias = "version")]
    Show {
        /// Package name
        package: String,
    },

    /// List installed packages
    List,

    /// Select the Python interpreter whose pip is used
    SetPython {
        /// Full path to the interpreter executable
        path: String,
    },

    /// Show the configuration file and the selected interpreter
    Config,

    /// Check that the selected interpreter and its pip work
    Doctor,

    /// Start the interactive text menu
    Menu,

    /// Start the graphical front-end
    Gui,
}

impl Cli {
    /// Config file plus the command to run: a subcommand wins, then `--cli`, then the GUI.
    pub fn resolve(self) -> (PathBuf, Commands) {
        let command = match self.command {
            Some(command) => command,
            None if self.menu => Commands::Menu,
            None => Commands::Gui,
        };
        (self.config, command)
    }
}

pub async fn run(cli: Cli) -> crate::core::error::Result<()> {
    let (config, command) = cli.resolve();

    match command {
        Commands::UpdatePip => {
            commands::operation::execute(&config, Operation::UpdatePip, "", "").await
        }

        Commands::Install { package } => {
            commands::operation::execute(&config, Operation::InstallPackage, &package, "").await
        }

        Commands::Remove { package } => {
            commands::operation::execute(&config, Operation::RemovePackage, &package, "").await
        }

        Commands::Show { package } => {
            commands::operation::execute(&config, Operation::CheckVersion, &package, "").await
        }

        Commands::List => {
            commands::operation::execute(&config, Operation::ListPackages, "", "").await
        }

        Commands::SetPython { path } => {
            commands::operation::execute(&config, Operation::UpdatePythonPath, "", &path).await
        }

        Commands::Config => commands::config::execute(&config).await,

        Commands::Doctor => commands::doctor::execute(&config).await,

        Commands::Menu => menu::execute(&config).await,

        Commands::Gui => commands::gui::execute(&config).await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ConfigManager, PipConfig};
    use crate::core::error::PipMgrError;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn no_subcommand_defaults_to_gui_and_cli_flag_to_menu() {
        let cli = Cli::try_parse_from(["pip-mgr"]).unwrap();
        assert!(cli.command.is_none());
        assert!(!cli.menu);
        assert_eq!(cli.config, PathBuf::from(DEFAULT_CONFIG_FILE));

        let cli = Cli::try_parse_from(["pip-mgr", "--cli"]).unwrap();
        assert!(cli.menu);
    }

    #[test]
    fn aliases_and_global_config() {
        let cli =
            Cli::try_parse_from(["pip-mgr", "uninstall", "requests", "--config", "/tmp/p.json"])
                .unwrap();
        assert!(
            matches!(cli.command, Some(Commands::Remove { ref package }) if package == "requests")
        );
        assert_eq!(cli.config, PathBuf::from("/tmp/p.json"));

        let cli = Cli::try_parse_from(["pip-mgr", "version", "numpy"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::Show { .. })));
    }

    #[test]
    fn resolve_routes_cli_flag_to_menu() {
        let parse = |args: &[&str]| Cli::try_parse_from(args).unwrap().resolve().1;

        assert!(matches!(parse(&["pip-mgr"]), Commands::Gui));
        assert!(matches!(parse(&["pip-mgr", "--cli"]), Commands::Menu));
        assert!(matches!(parse(&["pip-mgr", "--cli", "list"]), Commands::List));
    }

    #[cfg(not(feature = "gui"))]
    #[tokio::test]
    async fn default_gui_reports_missing_feature() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("python_path.json");
        let cli = Cli::try_parse_from(["pip-mgr", "--config", file.to_str().unwrap()]).unwrap();

        assert!(matches!(run(cli).await, Err(PipMgrError::Config(_))));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn run_executes_subcommands_against_configured_interpreter() {
        use crate::python::pip::fake;

        let dir = tempfile::tempdir().unwrap();
        let python = fake::install(dir.path());
        let file = dir.path().join("python_path.json");
        ConfigManager::new(&file)
            .save(&PipConfig::new(&python))
            .await
            .unwrap();
        let config = file.to_str().unwrap();
        let cli = |args: &[&str]| {
            let mut full = vec!["pip-mgr", "--config", config];
            full.extend_from_slice(args);
            Cli::try_parse_from(full).unwrap()
        };

        run(cli(&["show", "requests"])).await.unwrap();
        run(cli(&["config"])).await.unwrap();
        run(cli(&["doctor"])).await.unwrap();

        let err = run(cli(&["show", "ghost"])).await.unwrap_err();
        assert!(matches!(err, PipMgrError::PackageNotFound(ref name) if name == "ghost"));

        let err = run(cli(&["set-python", "  "])).await.unwrap_err();
        assert_eq!(err.to_string(), "Please enter a Python path");

        assert_eq!(
            fake::calls(dir.path()),
            ["-m pip show requests", "-m pip --version", "-m pip show ghost"]
        );
    }
}
