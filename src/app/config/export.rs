use std::path::PathBuf;

use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ExportConfig {
    /// Directory the export file is written into (optional)
    #[serde(default)]
    pub directory: Option<PathBuf>,
    /// Pretty-print the exported JSON
    #[serde(default = "ExportConfig::default_pretty")]
    pub pretty: bool,
}

impl ExportConfig {
    fn default_pretty() -> bool {
        true
    }

    /// Where the export lands: the configured directory, the platform
    /// download directory, or the working directory as a last resort.
    pub fn resolve_directory(&self) -> PathBuf {
        if let Some(directory) = &self.directory {
            return directory.clone();
        }
        dirs::download_dir().unwrap_or_else(|| PathBuf::from("."))
    }
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            directory: None,
            pretty: Self::default_pretty(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_configured_directory_wins() {
        let config = ExportConfig {
            directory: Some(PathBuf::from("/tmp/exports")),
            pretty: true,
        };
        assert_eq!(config.resolve_directory(), PathBuf::from("/tmp/exports"));
    }

    #[test]
    fn test_default_is_pretty() {
        assert!(ExportConfig::default().pretty);
    }
}
