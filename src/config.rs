use crate::models::Layout;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

pub const RAW_DATA_FOLDER: &str = "raw";
pub const PROCESSED_DATA_FOLDER: &str = "processed";

// Change these to convert a different file.
pub const DEFAULT_FILE_NAME: &str = "legal_advice.json";
pub const DEFAULT_GROUPED: bool = true;

pub struct Config {
    pub base_dir: PathBuf,
    pub raw_dir: PathBuf,
    pub processed_dir: PathBuf,
    pub file_name: String,
    pub layout: Layout,
}

impl Config {
    pub fn new() -> Result<Self> {
        let current_dir =
            std::env::current_dir().context("Failed to resolve current working directory")?;
        Ok(Self::with_base_dir(current_dir))
    }

    pub fn with_base_dir(base_dir: impl Into<PathBuf>) -> Self {
        let base_dir = base_dir.into();
        let data_dir = base_dir.join("data");
        Self {
            raw_dir: data_dir.join(RAW_DATA_FOLDER),
            processed_dir: data_dir.join(PROCESSED_DATA_FOLDER),
            base_dir,
            file_name: DEFAULT_FILE_NAME.to_string(),
            layout: Layout::from_grouped(DEFAULT_GROUPED),
        }
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    pub fn source_path(&self) -> PathBuf {
        self.raw_dir.join(&self.file_name)
    }

    pub fn destination_path(&self) -> PathBuf {
        self.processed_dir.join(&self.file_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_follow_data_layout() {
        let config = Config::with_base_dir("/work");
        assert_eq!(
            config.source_path(),
            PathBuf::from("/work/data/raw/legal_advice.json")
        );
        assert_eq!(
            config.destination_path(),
            PathBuf::from("/work/data/processed/legal_advice.json")
        );
        assert_eq!(config.layout, Layout::Nested);
    }
}
