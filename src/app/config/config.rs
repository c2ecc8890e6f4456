use crate::app::config::binds::BindsConfig;
use crate::app::config::colors::ColorsConfig;
use crate::app::config::export::ExportConfig;
use crate::app::config::logging::LoggingConfig;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub colors: ColorsConfig,
    #[serde(default)]
    pub binds: BindsConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub export: ExportConfig,
}

/// Calculate Levenshtein distance between two strings
fn levenshtein_distance(a: &str, b: &str) -> usize {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();
    let a_len = a_chars.len();
    let b_len = b_chars.len();

    if a_len == 0 {
        return b_len;
    }
    if b_len == 0 {
        return a_len;
    }

    // Two rows are enough, the full matrix is never needed
    let mut prev_row: Vec<usize> = (0..=b_len).collect();
    let mut curr_row: Vec<usize> = vec![0; b_len + 1];

    for (i, a_char) in a_chars.iter().enumerate() {
        curr_row[0] = i + 1;

        for (j, b_char) in b_chars.iter().enumerate() {
            let cost = if a_char == b_char { 0 } else { 1 };
            curr_row[j + 1] = (prev_row[j + 1] + 1)
                .min(curr_row[j] + 1)
                .min(prev_row[j] + cost);
        }

        std::mem::swap(&mut prev_row, &mut curr_row);
    }

    prev_row[b_len]
}

/// Find the most similar string from a list of candidates
fn find_similar(unknown: &str, candidates: &[&str]) -> Option<String> {
    let unknown_lower = unknown.to_lowercase();

    let mut best_match: Option<(&str, usize)> = None;

    for &candidate in candidates {
        let distance = levenshtein_distance(&unknown_lower, &candidate.to_lowercase());

        // Only suggest close names, with a floor so short keys still match
        let max_len = unknown.len().max(candidate.len());
        let threshold = (max_len / 2).max(3);

        if distance <= threshold {
            if let Some((_, best_distance)) = best_match {
                if distance < best_distance {
                    best_match = Some((candidate, distance));
                }
            } else {
                best_match = Some((candidate, distance));
            }
        }
    }

    best_match.map(|(s, _)| s.to_string())
}

/// Format an unknown config warning with optional "did you mean" suggestion
fn format_unknown_warning(section: &str, key: &str, suggestion: Option<&str>) -> String {
    if section == "section" {
        match suggestion {
            Some(s) => format!("Unknown config section: [{}] (did you mean: [{}]?)", key, s),
            None => format!("Unknown config section: [{}]", key),
        }
    } else {
        match suggestion {
            Some(s) => format!(
                "Unknown option in {}: {} (did you mean: {}?)",
                section, key, s
            ),
            None => format!("Unknown option in {}: {}", section, key),
        }
    }
}

impl Config {
    /// Returns the default config file path based on the platform:
    /// - Linux: ~/.config/lumideck/config.toml (XDG_CONFIG_HOME)
    /// - macOS: ~/Library/Application Support/lumideck/config.toml
    /// - Windows: C:\Users\<User>\AppData\Roaming\lumideck\config.toml
    fn default_config_path() -> color_eyre::Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| color_eyre::eyre::eyre!("Could not determine config directory"))?;
        Ok(config_dir.join("lumideck").join("config.toml"))
    }

    pub fn load(config_path: Option<PathBuf>) -> color_eyre::Result<(Self, Vec<String>)> {
        let config_path = match config_path {
            Some(path) => path,
            None => Self::default_config_path()?,
        };

        if !config_path.exists() {
            if let Some(parent) = config_path.parent() {
                std::fs::create_dir_all(parent)?;
            }

            let default_config = Config::default();

            let toml_string = toml::to_string_pretty(&default_config)?;
            std::fs::write(&config_path, &toml_string)?;

            // The logger is not up yet, so this goes to stderr only
            eprintln!("Created default config file at: {}", config_path.display());

            return Ok((default_config, Vec::new()));
        }
        let contents = std::fs::read_to_string(&config_path)?;

        // Collect unknown-option warnings before the strict parse
        let warnings = Self::check_unknown_fields(&contents);

        let config: Config = toml::from_str(&contents).unwrap_or_else(|e| {
            if cfg!(debug_assertions) {
                eprintln!("Warning: Failed to parse config file: {}", e);
            }
            Config::default()
        });
        Ok((config, warnings))
    }

    /// Check for unknown fields in the config file and return warnings
    fn check_unknown_fields(contents: &str) -> Vec<String> {
        let mut warnings = Vec::new();

        const KNOWN_SECTIONS: &[&str] = &["colors", "binds", "logging", "export"];

        const KNOWN_COLORS_FIELDS: &[&str] = &[
            "border",
            "border_title",
            "header",
            "accent",
            "label",
            "value",
            "lcd_text",
            "lcd_dim",
            "lcd_selected_bg",
            "lcd_selected_text",
            "led_on",
            "led_off",
            "link_up",
            "link_down",
            "unsaved",
            "toast_info",
            "toast_success",
            "toast_error",
        ];

        const KNOWN_BINDS_FIELDS: &[&str] = &[
            "navigate_up",
            "navigate_down",
            "navigate_left",
            "navigate_right",
            "confirm",
            "back",
            "switch_focus",
            "toggle_output",
            "universe_inc",
            "universe_dec",
            "save",
            "export",
            "download_gerbers",
            "open_design_tool",
            "goto_controller",
            "goto_schematic",
            "goto_main_pcb",
            "goto_display_pcb",
            "goto_output_pcb",
            "quit",
        ];

        const KNOWN_LOGGING_FIELDS: &[&str] = &[
            "enabled",
            "level",
            "log_to_console",
            "append_to_file",
            "rotate_logs",
            "rotation_size_mb",
            "keep_log_files",
            "custom_log_path",
        ];

        const KNOWN_EXPORT_FIELDS: &[&str] = &["directory", "pretty"];

        // Parse as generic TOML table
        let table: Result<toml::Table, _> = toml::from_str(contents);
        let table = match table {
            Ok(t) => t,
            Err(_) => return warnings, // Let the main parser handle errors
        };

        for key in table.keys() {
            if !KNOWN_SECTIONS.contains(&key.as_str()) {
                let suggestion = find_similar(key, KNOWN_SECTIONS);
                let msg = format_unknown_warning("section", key, suggestion.as_deref());
                warnings.push(msg);
            }
        }

        if let Some(toml::Value::Table(colors)) = table.get("colors") {
            for key in colors.keys() {
                if !KNOWN_COLORS_FIELDS.contains(&key.as_str()) {
                    let suggestion = find_similar(key, KNOWN_COLORS_FIELDS);
                    let msg = format_unknown_warning("[colors]", key, suggestion.as_deref());
                    warnings.push(msg);
                }
            }
        }

        if let Some(toml::Value::Table(binds)) = table.get("binds") {
            for key in binds.keys() {
                if !KNOWN_BINDS_FIELDS.contains(&key.as_str()) {
                    let suggestion = find_similar(key, KNOWN_BINDS_FIELDS);
                    let msg = format_unknown_warning("[binds]", key, suggestion.as_deref());
                    warnings.push(msg);
                }
            }
        }

        if let Some(toml::Value::Table(logging)) = table.get("logging") {
            for key in logging.keys() {
                if !KNOWN_LOGGING_FIELDS.contains(&key.as_str()) {
                    let suggestion = find_similar(key, KNOWN_LOGGING_FIELDS);
                    let msg = format_unknown_warning("[logging]", key, suggestion.as_deref());
                    warnings.push(msg);
                }
            }
        }

        if let Some(toml::Value::Table(export)) = table.get("export") {
            for key in export.keys() {
                if !KNOWN_EXPORT_FIELDS.contains(&key.as_str()) {
                    let suggestion = find_similar(key, KNOWN_EXPORT_FIELDS);
                    let msg = format_unknown_warning("[export]", key, suggestion.as_deref());
                    warnings.push(msg);
                }
            }
        }

        warnings
    }

    /// Generate a default config file at the specified path
    pub fn generate_default(path: PathBuf) -> color_eyre::Result<()> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }

        if path.exists() {
            return Err(color_eyre::eyre::eyre!(
                "Config file already exists at: {}",
                path.display()
            ));
        }

        let default_config = Config::default();
        let toml_string = toml::to_string_pretty(&default_config)?;
        std::fs::write(&path, &toml_string)?;

        println!("Generated default config at: {}", path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_levenshtein_distance() {
        assert_eq!(levenshtein_distance("", "abc"), 3);
        assert_eq!(levenshtein_distance("abc", "abc"), 0);
        assert_eq!(levenshtein_distance("color", "colors"), 1);
        assert_eq!(levenshtein_distance("bind", "binds"), 1);
    }

    #[test]
    fn test_find_similar_suggests_close_names() {
        let candidates = &["colors", "binds", "logging", "export"];
        assert_eq!(find_similar("colurs", candidates), Some("colors".to_string()));
        assert_eq!(find_similar("loging", candidates), Some("logging".to_string()));
        assert_eq!(find_similar("xyzzyquux", candidates), None);
    }

    #[test]
    fn test_check_unknown_fields_flags_typos() {
        let contents = r##"
[colors]
boarder = "#ffffff"

[binds]
quit = ["q"]
"##;
        let warnings = Config::check_unknown_fields(contents);
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("boarder"));
        assert!(warnings[0].contains("did you mean: border"));
    }

    #[test]
    fn test_check_unknown_fields_flags_sections() {
        let contents = r##"
[colour]
border = "#ffffff"
"##;
        let warnings = Config::check_unknown_fields(contents);
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("Unknown config section"));
    }

    #[test]
    fn test_clean_config_has_no_warnings() {
        let contents = r#"
[logging]
enabled = false

[export]
pretty = false
"#;
        let warnings = Config::check_unknown_fields(contents);
        assert!(warnings.is_empty());
    }
}
