//! Settings file loading for scenario-deck.

use std::fs::File;
use std::path::Path;

use log::debug;

use crate::config::ScenarioSettings;
use crate::error::{Error, Result};

fn get_reader(file_description: &str, path: &str) -> Result<File> {
    match File::open(path) {
        Ok(reader) => Ok(reader),
        Err(e) => Err(Error::io_error(
            file_description.to_string(),
            path.to_string(),
            e,
        )),
    }
}

fn get_settings_reader(settings_path: &str) -> Result<Option<File>> {
    if !Path::exists(Path::new(settings_path)) {
        return Ok(None);
    }

    get_reader("settings", settings_path).map(Some)
}

/// Loads the scenario settings from disk.
///
/// A settings file that does not exist is not an error: every scenario then
/// prompts for the values it needs. An empty file is treated the same way.
///
/// # Errors
///
/// Returns an error if:
/// - The file exists but cannot be read
/// - The file contains invalid YAML or unknown keys
/// - A page size or display limit is zero
///
/// # Examples
///
/// ```no_run
/// use scenario_deck_core::file_handling::get_settings;
///
/// let settings = get_settings("/home/me/.scenario-deck/settings.yml")?;
/// println!("Customer page size: {}", settings.customer_page_size());
/// # Ok::<(), scenario_deck_core::error::Error>(())
/// ```
pub fn get_settings(settings_path: &str) -> Result<ScenarioSettings> {
    let Some(settings_reader) = get_settings_reader(settings_path)? else {
        debug!("No settings file at `{settings_path}`, nothing is configured");
        return Ok(ScenarioSettings::default());
    };

    let content = std::io::read_to_string(settings_reader)
        .map_err(|e| Error::io_error("settings".to_string(), settings_path.to_string(), e))?;

    if content.trim().is_empty() {
        return Ok(ScenarioSettings::default());
    }

    let settings: ScenarioSettings = serde_yaml::from_str(&content).map_err(|e| {
        Error::yaml_error(
            "reading".to_string(),
            "settings".to_string(),
            settings_path.to_string(),
            e,
        )
    })?;

    settings.validate()?;

    Ok(settings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_settings(content: &str) -> NamedTempFile {
        let mut temp_file = NamedTempFile::new().unwrap();
        write!(temp_file, "{content}").unwrap();
        temp_file
    }

    #[test]
    fn test_get_settings_file_not_exists() {
        let result = get_settings("/this/path/does/not/exist.yml").unwrap();
        assert_eq!(result, ScenarioSettings::default());
    }

    #[test]
    fn test_get_settings_empty_file() {
        let temp_file = write_settings("");
        let result = get_settings(temp_file.path().to_str().unwrap()).unwrap();
        assert_eq!(result, ScenarioSettings::default());
    }

    #[test]
    fn test_get_settings_valid_yaml() {
        let temp_file = write_settings(
            r#"
default_customer_id: "cust-123"
customer_page_size: 5
"#,
        );

        let result = get_settings(temp_file.path().to_str().unwrap()).unwrap();
        assert_eq!(result.default_customer_id, Some("cust-123".to_string()));
        assert_eq!(result.customer_page_size(), 5);
        assert_eq!(result.invoice_page_size(), 10);
    }

    #[test]
    fn test_get_settings_invalid_yaml() {
        let temp_file = write_settings("invalid: yaml: content: [");
        let result = get_settings(temp_file.path().to_str().unwrap());
        assert!(matches!(result, Err(Error::Yaml { .. })));
    }

    #[test]
    fn test_get_settings_unknown_key() {
        let temp_file = write_settings("default_customer: \"cust-123\"\n");
        let result = get_settings(temp_file.path().to_str().unwrap());
        assert!(matches!(result, Err(Error::Yaml { .. })));
    }

    #[test]
    fn test_get_settings_zero_page_size() {
        let temp_file = write_settings("customer_page_size: 0\n");
        let result = get_settings(temp_file.path().to_str().unwrap());
        assert!(matches!(result, Err(Error::InvalidSetting { .. })));
    }
}
