//! Interactive numbered menu, the text counterpart of the GUI form.
//!
//! On a terminal the prompts go through dialoguer; otherwise lines are read
//! from stdin so answers can be piped in.

use crate::config::ConfigManager;
use crate::core::error::Result;
use crate::operation::{dispatch, Operation};
use crate::python::PipManager;
use colored::Colorize;
use console::Term;
use dialoguer::{theme::ColorfulTheme, Input};
use std::io::{self, BufRead, IsTerminal, Write};
use std::path::Path;

const EXIT_CHOICE: usize = Operation::ALL.len() + 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Run(Operation),
    Exit,
}

/// `1..=6` pick an operation in menu order, `7` exits; anything else is invalid.
pub fn parse_choice(input: &str) -> Option<MenuChoice> {
    let n: usize = input.trim().parse().ok()?;
    match n {
        EXIT_CHOICE => Some(MenuChoice::Exit),
        n if (1..EXIT_CHOICE).contains(&n) => Some(MenuChoice::Run(Operation::ALL[n - 1])),
        _ => None,
    }
}

/// Where the menu reads answers and writes its text.
pub trait MenuIo {
    /// `None` once input is exhausted.
    fn ask(&mut self, prompt: &str) -> Result<Option<String>>;

    fn say(&mut self, text: &str) -> Result<()>;
}

pub struct TerminalIo {
    theme: ColorfulTheme,
}

impl TerminalIo {
    pub fn new() -> Self {
        Self {
            theme: ColorfulTheme::default(),
        }
    }
}

impl Default for TerminalIo {
    fn default() -> Self {
        Self::new()
    }
}

impl MenuIo for TerminalIo {
    fn ask(&mut self, prompt: &str) -> Result<Option<String>> {
        let answer = Input::<String>::with_theme(&self.theme)
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text()?;
        Ok(Some(answer))
    }

    fn say(&mut self, text: &str) -> Result<()> {
        let mut stdout = io::stdout().lock();
        stdout.write_all(text.as_bytes())?;
        stdout.flush()?;
        Ok(())
    }
}

/// Plain line-based prompts over any reader/writer pair.
pub struct LineIo<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> LineIo<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_output(self) -> W {
        self.output
    }
}

impl<R: BufRead, W: Write> MenuIo for LineIo<R, W> {
    fn ask(&mut self, prompt: &str) -> Result<Option<String>> {
        write!(self.output, "{}: ", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.output)?;
            return Ok(None);
        }
        writeln!(self.output)?;

        Ok(Some(line.trim_end_matches(&['\r', '\n'][..]).to_string()))
    }

    fn say(&mut self, text: &str) -> Result<()> {
        self.output.write_all(text.as_bytes())?;
        Ok(())
    }
}

fn menu_text(python_path: &Path) -> String {
    let mut text = format!(
        "\n{}\nCurrent Python Path: {}\n\nOperations:\n",
        "PIP Package Manager".bold(),
        python_path.display().to_string().cyan()
    );
    for (i, op) in Operation::ALL.iter().enumerate() {
        text.push_str(&format!("{}. {}\n", i + 1, op));
    }
    text.push_str(&format!("{}. Exit\n", EXIT_CHOICE));
    text
}

/// Run the menu until the user exits or input runs out.
pub async fn run_menu<I: MenuIo>(manager: &mut PipManager, io: &mut I) -> Result<()> {
    loop {
        io.say(&menu_text(manager.python_path()))?;

        let Some(choice) = io.ask(&format!("Enter your choice (1-{})", EXIT_CHOICE))? else {
            return Ok(());
        };

        match parse_choice(&choice) {
            Some(MenuChoice::Exit) => {
                io.say("Goodbye!\n")?;
                return Ok(());
            }
            Some(MenuChoice::Run(op)) => {
                let package = if op.requires_package() {
                    match io.ask("Enter package name")? {
                        Some(package) => package,
                        None => return Ok(()),
                    }
                } else {
                    String::new()
                };
                let python_path = if op.requires_python_path() {
                    match io.ask("Enter new Python path")? {
                        Some(path) => path,
                        None => return Ok(()),
                    }
                } else {
                    String::new()
                };

                let text = match dispatch(manager, op, &package, &python_path).await {
                    Ok(message) if op == Operation::ListPackages => message,
                    Ok(message) => format!("{}\n", message.green()),
                    Err(e) => format!("{}\n", e.to_string().red()),
                };
                io.say(&text)?;
            }
            None => io.say(&format!(
                "{}\n",
                "Invalid choice. Please try again.".yellow()
            ))?,
        }

        if io.ask("Press Enter to continue...")?.is_none() {
            return Ok(());
        }
    }
}

pub async fn execute(config: &Path) -> Result<()> {
    let mut manager = PipManager::load(ConfigManager::new(config)).await?;

    if Term::stderr().is_term() && io::stdin().is_terminal() {
        run_menu(&mut manager, &mut TerminalIo::new()).await
    } else {
        let mut line_io = LineIo::new(io::stdin().lock(), io::stdout().lock());
        run_menu(&mut manager, &mut line_io).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbers_follow_menu_order() {
        assert_eq!(parse_choice("1"), Some(MenuChoice::Run(Operation::UpdatePip)));
        assert_eq!(
            parse_choice(" 6 "),
            Some(MenuChoice::Run(Operation::UpdatePythonPath))
        );
        assert_eq!(parse_choice("7"), Some(MenuChoice::Exit));
    }

    #[test]
    fn everything_else_is_invalid() {
        for input in ["", "0", "8", "-1", "two", "1.5"] {
            assert_eq!(parse_choice(input), None, "input {:?}", input);
        }
    }

    #[test]
    fn line_io_strips_line_endings_and_reports_eof() {
        let mut io = LineIo::new("requests\r\n".as_bytes(), Vec::new());

        assert_eq!(
            io.ask("Enter package name").unwrap().as_deref(),
            Some("requests")
        );
        assert_eq!(io.ask("Enter package name").unwrap(), None);

        let out = String::from_utf8(io.into_output()).unwrap();
        assert!(out.starts_with("Enter package name: "));
    }

    async fn manager_at(dir: &Path, python: &Path) -> PipManager {
        use crate::config::PipConfig;

        let config = ConfigManager::new(dir.join("python_path.json"));
        config.save(&PipConfig::new(python)).await.unwrap();
        PipManager::load(config).await.unwrap()
    }

    async fn transcript(manager: &mut PipManager, script: &str) -> String {
        let mut io = LineIo::new(script.as_bytes(), Vec::new());
        run_menu(manager, &mut io).await.unwrap();
        String::from_utf8(io.into_output()).unwrap()
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn scripted_session_follows_menu_steps() {
        use crate::python::pip::fake;

        let dir = tempfile::tempdir().unwrap();
        let python = fake::install(dir.path());
        let mut mgr = manager_at(dir.path(), &python).await;
        let missing = dir.path().join("nowhere").display().to_string();

        // check version, invalid choice, blank install, bad path, exit
        let script = format!("4\nrequests\n\n9\n\n2\n\n\n6\n{}\n\n7\n", missing);
        let out = transcript(&mut mgr, &script).await;

        assert!(out.contains("PIP Package Manager"));
        assert!(out.contains("Current Python Path: "));
        assert!(out.contains("7. Exit"));
        assert!(out.contains("Package 'requests' version: 2.31.0"));
        assert!(out.contains("Invalid choice. Please try again."));
        assert!(out.contains("Please enter a package name"));
        assert!(out.contains("Invalid Python path: File does not exist"));

        assert_eq!(out.matches("Enter package name: ").count(), 2);
        assert_eq!(out.matches("Enter new Python path: ").count(), 1);
        assert_eq!(out.matches("Press Enter to continue...: ").count(), 4);
        assert_eq!(out.matches("Enter your choice (1-7): ").count(), 5);
        assert!(out.trim_end().ends_with("Goodbye!"));

        // Each result comes before the pause that follows it.
        let version_at = out.find("Package 'requests' version").unwrap();
        let first_pause = out.find("Press Enter to continue").unwrap();
        assert!(version_at < first_pause);

        // Only the version check reached pip.
        assert_eq!(fake::calls(dir.path()), ["-m pip show requests"]);
        assert_eq!(mgr.python_path(), python);
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn list_output_is_relayed_verbatim() {
        use crate::python::pip::fake;

        let dir = tempfile::tempdir().unwrap();
        let python = fake::install(dir.path());
        let mut mgr = manager_at(dir.path(), &python).await;

        let out = transcript(&mut mgr, "5\n\n7\n").await;
        assert!(out.contains("Package    Version\n---------- -------\npip        24.0\n"));
        assert!(out.trim_end().ends_with("Goodbye!"));
    }

    #[tokio::test]
    async fn end_of_input_ends_the_menu() {
        let dir = tempfile::tempdir().unwrap();
        let mut mgr = manager_at(dir.path(), Path::new("python3")).await;

        let out = transcript(&mut mgr, "").await;
        assert!(out.contains("Enter your choice (1-7): "));
        assert!(!out.contains("Goodbye!"));

        // Running out while asking for a package does not spawn anything.
        let out = transcript(&mut mgr, "2\n").await;
        assert_eq!(out.matches("Enter package name: ").count(), 1);
        assert!(!out.contains("Press Enter"));
    }

    #[tokio::test]
    async fn path_update_changes_the_header() {
        let dir = tempfile::tempdir().unwrap();
        let mut mgr = manager_at(dir.path(), Path::new("python3")).await;
        let other = dir.path().join("python3.13");
        std::fs::write(&other, "").unwrap();

        let script = format!("6\n{}\n\n7\n", other.display());
        let out = transcript(&mut mgr, &script).await;

        assert!(out.contains("Python path updated successfully!"));
        assert!(out.contains(&other.display().to_string()));
        assert_eq!(mgr.python_path(), other);
    }
}
