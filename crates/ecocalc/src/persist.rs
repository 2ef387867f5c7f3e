//! Footprint form persistence (load/save).

use std::io::Read;
use std::path::Path;

use ecocalc_core::{FootprintError, FootprintForm};

/// Read a form from a JSON file.
pub fn load_form(path: &Path) -> Result<FootprintForm, FootprintError> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| FootprintError::Config(format!("cannot read {}: {e}", path.display())))?;
    parse_form(&content, &path.display().to_string())
}

/// Read a form from any reader, such as stdin.
pub fn read_form(mut reader: impl Read) -> Result<FootprintForm, FootprintError> {
    let mut content = String::new();
    reader
        .read_to_string(&mut content)
        .map_err(|e| FootprintError::Config(format!("cannot read form: {e}")))?;
    parse_form(&content, "stdin")
}

fn parse_form(content: &str, source: &str) -> Result<FootprintForm, FootprintError> {
    if content.trim().is_empty() {
        tracing::info!(source, "empty form input, using defaults");
        return Ok(FootprintForm::default());
    }
    FootprintForm::from_json(content)
        .map_err(|e| FootprintError::Config(format!("invalid form in {source}: {e}")))
}

/// Write a form as pretty-printed JSON, creating parent directories.
pub fn save_form(form: &FootprintForm, path: &Path) -> Result<(), FootprintError> {
    let content = form
        .to_json_pretty()
        .map_err(|e| FootprintError::Config(e.to_string()))?;
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| {
            FootprintError::Config(format!("cannot create {}: {e}", parent.display()))
        })?;
    }
    std::fs::write(path, content)
        .map_err(|e| FootprintError::Config(format!("cannot write {}: {e}", path.display())))?;
    tracing::debug!(path = %path.display(), "form saved");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ecocalc_core::FlightEntry;

    #[test]
    fn save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("form.json");

        let mut form = FootprintForm::default();
        form.house.electricity = 1200.0;
        form.flights.push(FlightEntry::new("JFK", "LHR"));
        save_form(&form, &path).unwrap();

        assert_eq!(load_form(&path).unwrap(), form);
    }

    #[test]
    fn missing_file_is_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_form(&dir.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, FootprintError::Config(_)));
    }

    #[test]
    fn invalid_json_names_source() {
        let err = read_form("{not json".as_bytes()).unwrap_err();
        assert!(err.to_string().contains("stdin"));
    }

    #[test]
    fn empty_input_is_default_form() {
        assert_eq!(read_form("  \n".as_bytes()).unwrap(), FootprintForm::default());
    }
}
