use crate::core::ProcessExecutor;
use std::path::PathBuf;

const CANDIDATES: &[&str] = &["python3", "python"];

/// Interpreter used when nothing is configured: the first of `python3`/`python` on PATH.
pub fn default_interpreter() -> PathBuf {
    CANDIDATES
        .iter()
        .find_map(|name| ProcessExecutor::locate(name))
        .unwrap_or_else(|| PathBuf::from(CANDIDATES[0]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_stable_between_calls() {
        assert_eq!(default_interpreter(), default_interpreter());
    }

    #[test]
    fn default_is_absolute_or_bare_fallback() {
        let python = default_interpreter();
        assert!(python.is_absolute() || python == PathBuf::from("python3"));
    }
}
