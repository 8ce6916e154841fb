//! Loading template data from files and `KEY=VALUE` assignments

use std::path::Path;

use eyre::{Context, Result, eyre};
use tracing::debug;

use super::value::{TemplateData, TemplateValue};

/// Load a mapping of template data from a YAML or JSON file
///
/// Files ending in `.json` are parsed as JSON, everything else as YAML.
pub fn load_data(path: &Path) -> Result<TemplateData> {
    debug!(?path, "load_data: called");
    let content = std::fs::read_to_string(path).context(format!("Failed to read data file {}", path.display()))?;

    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    let value: TemplateValue = if is_json {
        serde_json::from_str(&content).context(format!("Failed to parse JSON data {}", path.display()))?
    } else if content.trim().is_empty() {
        TemplateValue::Null
    } else {
        serde_yaml::from_str(&content).context(format!("Failed to parse YAML data {}", path.display()))?
    };

    let data = match value {
        TemplateValue::Mapping(data) => data,
        TemplateValue::Null => TemplateData::new(),
        _ => return Err(eyre!("Data file {} must hold a mapping", path.display())),
    };

    debug!(keys = data.len(), "load_data: loaded");
    Ok(data)
}

/// Parse a `KEY=VALUE` assignment; the value is read as a YAML scalar
pub fn parse_assignment(assignment: &str) -> Result<(String, TemplateValue)> {
    let (key, value) = assignment
        .split_once('=')
        .ok_or_else(|| eyre!("Invalid assignment '{}': expected KEY=VALUE", assignment))?;

    let key = key.trim();
    if key.is_empty() {
        return Err(eyre!("Invalid assignment '{}': empty key", assignment));
    }

    Ok((key.to_string(), TemplateValue::parse_scalar(value)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_load_yaml() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("data.yml");
        std::fs::write(&path, "Name: World\ncount: 2\n").unwrap();

        let data = load_data(&path).unwrap();
        assert_eq!(data["Name"], TemplateValue::from("World"));
        assert_eq!(data["count"], TemplateValue::Integer(2));
    }

    #[test]
    fn test_load_json() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("data.json");
        std::fs::write(&path, r#"{"Name": "World", "tags": ["a", "b"]}"#).unwrap();

        let data = load_data(&path).unwrap();
        assert_eq!(data["Name"], TemplateValue::from("World"));
        assert_eq!(data["tags"], TemplateValue::from(vec!["a", "b"]));
    }

    #[test]
    fn test_load_empty_yaml() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("data.yml");
        std::fs::write(&path, "\n").unwrap();

        assert!(load_data(&path).unwrap().is_empty());
    }

    #[test]
    fn test_load_rejects_non_mapping() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("data.yml");
        std::fs::write(&path, "- a\n- b\n").unwrap();

        assert!(load_data(&path).is_err());
    }

    #[test]
    fn test_load_numeric_keys() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("data.yml");
        std::fs::write(&path, "2024: current\nyears:\n  2023: previous\n").unwrap();

        let data = load_data(&path).unwrap();
        assert_eq!(data["2024"], TemplateValue::from("current"));
        assert!(matches!(&data["years"], TemplateValue::Mapping(m) if m["2023"] == TemplateValue::from("previous")));
    }

    #[test]
    fn test_parse_assignment() {
        assert_eq!(
            parse_assignment("Name=World").unwrap(),
            ("Name".to_string(), TemplateValue::from("World"))
        );
        assert_eq!(
            parse_assignment("count=3").unwrap(),
            ("count".to_string(), TemplateValue::Integer(3))
        );
        assert_eq!(
            parse_assignment("query=a=b").unwrap(),
            ("query".to_string(), TemplateValue::from("a=b"))
        );
        assert!(parse_assignment("novalue").is_err());
        assert!(parse_assignment("=value").is_err());
    }
}
