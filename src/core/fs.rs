use crate::core::error::Result;
use std::path::Path;

pub async fn ensure_dir_exists(path: &Path) -> Result<()> {
    if !path.as_os_str().is_empty() && !path.exists() {
        tokio::fs::create_dir_all(path).await?;
    }
    Ok(())
}

pub async fn ensure_parent_exists(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        ensure_dir_exists(parent).await?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn creates_missing_parents() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("a").join("b").join("python_path.json");

        ensure_parent_exists(&file).await.unwrap();
        assert!(dir.path().join("a").join("b").is_dir());
    }

    #[tokio::test]
    async fn bare_file_name_has_nothing_to_create() {
        ensure_parent_exists(Path::new("python_path.json")).await.unwrap();
    }
}
