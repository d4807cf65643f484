use crate::error::{ExportError, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Deserialize, clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// 16 row-major values of the 4x4 transform per line
    Matrix,
    /// `tx ty tz qx qy qz qw` per line, as read
    Pose,
}

impl Default for OutputFormat {
    fn default() -> Self {
        OutputFormat::Matrix
    }
}

/// Where to read poses from and where to write them.
///
/// Can be loaded from a JSON file; missing keys fall back to the defaults.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct ExportConfig {
    pub path: Option<PathBuf>,
    pub input_file: String,
    pub output_file: String,
    pub format: OutputFormat,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            path: None,
            input_file: String::from("poses.txt"),
            output_file: String::from("poses_matrix.txt"),
            format: OutputFormat::default(),
        }
    }
}

impl ExportConfig {
    pub fn deserialize(data: &[u8]) -> serde_json::Result<Self> {
        serde_json::from_slice::<ExportConfig>(data)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let data = fs::read(path).map_err(|source| ExportError::ConfigRead {
            path: path.to_owned(),
            source,
        })?;
        Self::deserialize(&data).map_err(|source| ExportError::Config {
            path: path.to_owned(),
            source,
        })
    }

    fn base_path(&self) -> Result<&Path> {
        self.path.as_deref().ok_or(ExportError::MissingBasePath)
    }

    pub fn input_path(&self) -> Result<PathBuf> {
        Ok(self.base_path()?.join(&self.input_file))
    }

    pub fn output_path(&self) -> Result<PathBuf> {
        Ok(self.base_path()?.join(&self.output_file))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ExportConfig::deserialize(b"{}").unwrap();
        assert_eq!(config, ExportConfig::default());
        assert_eq!(config.input_file, "poses.txt");
        assert_eq!(config.output_file, "poses_matrix.txt");
        assert_eq!(config.format, OutputFormat::Matrix);
    }

    #[test]
    fn test_partial_config() {
        let config =
            ExportConfig::deserialize(br#"{"path": "/data/seq01", "format": "pose"}"#).unwrap();
        assert_eq!(config.format, OutputFormat::Pose);
        assert_eq!(
            config.input_path().unwrap(),
            PathBuf::from("/data/seq01/poses.txt")
        );
        assert_eq!(
            config.output_path().unwrap(),
            PathBuf::from("/data/seq01/poses_matrix.txt")
        );
    }

    #[test]
    fn test_missing_base_path() {
        assert!(matches!(
            ExportConfig::default().input_path(),
            Err(ExportError::MissingBasePath)
        ));
    }

    #[test]
    fn test_unknown_format_rejected() {
        assert!(ExportConfig::deserialize(br#"{"format": "euler"}"#).is_err());
    }
}
