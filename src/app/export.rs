use std::fs;
use std::path::PathBuf;

use chrono::Utc;
use color_eyre::Result;
use serde::Serialize;

use crate::app::catalog::{
    BOM_FILE, GERBER_FILES, PCB_FILE, PROJECT_DESCRIPTION, PROJECT_NAME, SCHEMATIC_FILE,
};
use crate::app::config::ExportConfig;

/// Import format tag the design platform expects.
pub const EXPORT_FORMAT: &str = "celus-import-v1";

/// Design files of the project, as the import format wants them.
#[derive(Debug, Serialize)]
pub struct ProjectData {
    pub name: &'static str,
    pub description: &'static str,
    pub schematic: &'static str,
    pub pcb: &'static str,
    pub bom: &'static str,
    pub gerbers: &'static [&'static str],
}

/// Full export payload: the project plus envelope metadata.
#[derive(Debug, Serialize)]
pub struct ExportBlob {
    pub project: ProjectData,
    pub timestamp: String,
    pub format: &'static str,
}

pub fn project_data() -> ProjectData {
    ProjectData {
        name: PROJECT_NAME,
        description: PROJECT_DESCRIPTION,
        schematic: SCHEMATIC_FILE,
        pcb: PCB_FILE,
        bom: BOM_FILE,
        gerbers: GERBER_FILES,
    }
}

pub fn export_blob() -> ExportBlob {
    ExportBlob {
        project: project_data(),
        timestamp: Utc::now().to_rfc3339(),
        format: EXPORT_FORMAT,
    }
}

/// Export file name derived from the project name, lowercased and
/// hyphen-joined.
pub fn export_file_name() -> String {
    let slug = PROJECT_NAME
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-");
    format!("{}-celus-export.json", slug)
}

/// Serialize the export payload and write it into the configured
/// directory. Returns the path of the written file.
pub fn write_export(config: &ExportConfig) -> Result<PathBuf> {
    let directory = config.resolve_directory();
    if !directory.exists() {
        fs::create_dir_all(&directory)?;
    }

    let blob = export_blob();
    let json = if config.pretty {
        serde_json::to_string_pretty(&blob)?
    } else {
        serde_json::to_string(&blob)?
    };

    let path = directory.join(export_file_name());
    fs::write(&path, json)?;
    log::info!("Exported project data to {}", path.display());
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_export_file_name_is_slugged() {
        assert_eq!(
            export_file_name(),
            "ws2811-led-controller-celus-export.json"
        );
    }

    #[test]
    fn test_export_blob_shape() {
        let blob = export_blob();
        let value = serde_json::to_value(&blob).unwrap();

        let object = value.as_object().unwrap();
        assert_eq!(object.len(), 3);
        assert_eq!(object["format"], EXPORT_FORMAT);
        assert_eq!(object["project"]["name"], PROJECT_NAME);
        assert_eq!(
            object["project"]["gerbers"].as_array().unwrap().len(),
            GERBER_FILES.len()
        );
        assert!(object["timestamp"].as_str().unwrap().contains('T'));
    }

    #[test]
    fn test_write_export_creates_file() {
        let directory = std::env::temp_dir().join("lumideck-export-test");
        let config = ExportConfig {
            directory: Some(directory.clone()),
            pretty: false,
        };

        let path = write_export(&config).unwrap();
        assert!(path.exists());
        assert!(path.ends_with("ws2811-led-controller-celus-export.json"));

        let contents = fs::read_to_string(&path).unwrap();
        let value: serde_json::Value = serde_json::from_str(&contents).unwrap();
        assert_eq!(value["format"], EXPORT_FORMAT);

        fs::remove_dir_all(&directory).unwrap();
    }
}
