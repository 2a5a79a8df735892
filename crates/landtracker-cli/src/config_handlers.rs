//! Handlers for the `config` subcommands (`path`, `get`, `set`, `init`).
//!
//! Values are addressed by dotted keys such as `authz.guard_self_delete`.

use crate::cli::ConfigAction;
use crate::config::LandTrackerConfig;
use landtracker_core::{Error, Result};
use std::path::PathBuf;

/// Dispatches a `config` subcommand.
pub fn handle_config_command(config_path: Option<&str>, action: ConfigAction) -> Result<()> {
    match action {
        ConfigAction::Path => cmd_config_path(config_path),
        ConfigAction::Get { key } => cmd_config_get(config_path, &key),
        ConfigAction::Set { key, value } => cmd_config_set(config_path, &key, &value),
        ConfigAction::Init { file, force } => cmd_config_init(file.as_deref(), force).map(|_| ()),
    }
}

/// Prints the resolved config file path.
pub fn cmd_config_path(config_path: Option<&str>) -> Result<()> {
    let path = LandTrackerConfig::resolve_config_path(config_path)
        .ok_or_else(|| Error::config("Could not determine config directory for this platform"))?;
    println!("{}", path.display());
    if !path.exists() {
        eprintln!(
            "(file does not exist; run `{} config init` to create it)",
            LandTrackerConfig::project_name()
        );
    }
    Ok(())
}

/// Prints the value at a dotted key of the effective configuration.
pub fn cmd_config_get(config_path: Option<&str>, key: &str) -> Result<()> {
    let value = config_value(&LandTrackerConfig::load(config_path)?, key)?;
    println!("{}", format_toml_value(&value));
    Ok(())
}

/// Looks up a dotted key in `config`.
pub fn config_value(config: &LandTrackerConfig, key: &str) -> Result<toml::Value> {
    let root = toml::Value::try_from(config).map_err(|e| Error::config(e.to_string()))?;
    get_nested_value(&root, key)
        .cloned()
        .ok_or_else(|| Error::config(format!("Key '{key}' not found in configuration")))
}

/// Writes a value at a dotted key into the config file.
///
/// The result must still parse as a [`LandTrackerConfig`]; an unknown key or
/// a value of the wrong type is rejected before anything is written.
pub fn cmd_config_set(config_path: Option<&str>, key: &str, value: &str) -> Result<()> {
    let path = LandTrackerConfig::resolve_config_path(config_path)
        .ok_or_else(|| Error::config("Could not determine config directory"))?;
    if !path.exists() {
        return Err(Error::config(format!(
            "Config file does not exist at {}. Run `{} config init` first.",
            path.display(),
            LandTrackerConfig::project_name()
        )));
    }

    let content = std::fs::read_to_string(&path).map_err(|e| Error::io_with_path(e, &path))?;
    let mut doc: toml::Value = toml::from_str(&content)?;
    set_nested_value(&mut doc, key, parse_value(value))?;

    let text = toml::to_string_pretty(&doc)?;
    LandTrackerConfig::from_toml_str(&text)
        .map_err(|e| Error::config(format!("'{key} = {value}' is not valid: {e}")))?;
    std::fs::write(&path, text).map_err(|e| Error::io_with_path(e, &path))?;

    println!("Set {key} = {value} in {}", path.display());
    Ok(())
}

/// Writes a default config file and returns its path.
pub fn cmd_config_init(file: Option<&str>, force: bool) -> Result<PathBuf> {
    let path = match file {
        Some(p) => PathBuf::from(p),
        None => LandTrackerConfig::default_config_path()
            .ok_or_else(|| Error::config("Could not determine config directory"))?,
    };

    if path.exists() && !force {
        return Err(Error::config(format!(
            "Config file already exists at {}. Use --force to overwrite.",
            path.display()
        )));
    }

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| Error::io_with_path(e, parent))?;
    }

    let text = LandTrackerConfig::default().to_toml_string()?;
    std::fs::write(&path, text).map_err(|e| Error::io_with_path(e, &path))?;

    log::info!("Config file created at {}", path.display());
    println!("Config file created at {}", path.display());
    Ok(path)
}

// ============================================================================
// TOML dotted-key helpers
// ============================================================================

/// Navigates a dotted key path in a TOML value tree.
pub fn get_nested_value<'a>(value: &'a toml::Value, key: &str) -> Option<&'a toml::Value> {
    key.split('.')
        .try_fold(value, |current, part| current.as_table()?.get(part))
}

/// Sets a value at a dotted key path, creating intermediate tables as needed.
pub fn set_nested_value(root: &mut toml::Value, key: &str, value: toml::Value) -> Result<()> {
    let mut parts: Vec<&str> = key.split('.').collect();
    let last = parts
        .pop()
        .filter(|p| !p.is_empty())
        .ok_or_else(|| Error::config("Empty key path"))?;

    let mut current = root;
    for part in parts {
        let table = current
            .as_table_mut()
            .ok_or_else(|| Error::config("Cannot navigate into a non-table value"))?;
        current = table
            .entry(part.to_string())
            .or_insert_with(|| toml::Value::Table(toml::map::Map::new()));
    }

    current
        .as_table_mut()
        .ok_or_else(|| Error::config("Cannot set key on a non-table value"))?
        .insert(last.to_string(), value);
    Ok(())
}

/// Parses a command-line value: bool, then integer, then string.
pub fn parse_value(s: &str) -> toml::Value {
    match s {
        "true" => toml::Value::Boolean(true),
        "false" => toml::Value::Boolean(false),
        _ => s
            .parse::<i64>()
            .map(toml::Value::Integer)
            .unwrap_or_else(|_| toml::Value::String(s.to_string())),
    }
}

/// Formats a TOML value for stdout.
pub fn format_toml_value(value: &toml::Value) -> String {
    match value {
        toml::Value::String(s) => s.clone(),
        toml::Value::Integer(i) => i.to_string(),
        toml::Value::Float(f) => f.to_string(),
        toml::Value::Boolean(b) => b.to_string(),
        toml::Value::Datetime(dt) => dt.to_string(),
        toml::Value::Array(_) | toml::Value::Table(_) => {
            toml::to_string_pretty(value).unwrap_or_else(|_| format!("{value:?}"))
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn write_default(dir: &tempfile::TempDir) -> PathBuf {
        let path = dir.path().join("config.toml");
        std::fs::write(&path, LandTrackerConfig::default().to_toml_string().unwrap()).unwrap();
        path
    }

    #[test]
    fn test_cmd_config_path_explicit() {
        assert!(cmd_config_path(Some("/explicit/config.toml")).is_ok());
    }

    #[test]
    fn test_config_value_nested() {
        let config = LandTrackerConfig::default();
        assert_eq!(
            config_value(&config, "authz.guard_self_delete").unwrap(),
            toml::Value::Boolean(true)
        );
        assert_eq!(
            config_value(&config, "logging.level").unwrap(),
            toml::Value::String("info".into())
        );
    }

    #[test]
    fn test_config_value_missing() {
        let err = config_value(&LandTrackerConfig::default(), "authz.nothing").unwrap_err();
        assert!(err.to_string().contains("not found"));
    }

    #[test]
    fn test_cmd_config_get() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = write_default(&dir);
        assert!(cmd_config_get(Some(path.to_str().unwrap()), "logging.level").is_ok());
        assert!(cmd_config_get(Some(path.to_str().unwrap()), "logging.nope").is_err());
    }

    #[test]
    fn test_cmd_config_set_bool() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = write_default(&dir);

        cmd_config_set(Some(path.to_str().unwrap()), "authz.guard_self_delete", "false").unwrap();

        let config = LandTrackerConfig::load(Some(path.to_str().unwrap())).unwrap();
        assert!(!config.authz.guard_self_delete);
    }

    #[test]
    fn test_cmd_config_set_rejects_wrong_type() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = write_default(&dir);

        let result = cmd_config_set(Some(path.to_str().unwrap()), "authz.log_decisions", "loud");
        assert!(result.unwrap_err().to_string().contains("not valid"));

        let config = LandTrackerConfig::load(Some(path.to_str().unwrap())).unwrap();
        assert!(config.authz.log_decisions);
    }

    #[test]
    fn test_cmd_config_set_rejects_unknown_key() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = write_default(&dir);
        let before = std::fs::read_to_string(&path).unwrap();

        let result = cmd_config_set(Some(path.to_str().unwrap()), "authz.guard_self_delet", "false");
        assert!(result.unwrap_err().to_string().contains("not valid"));

        assert_eq!(std::fs::read_to_string(&path).unwrap(), before);
        let config = LandTrackerConfig::load(Some(path.to_str().unwrap())).unwrap();
        assert!(config.authz.guard_self_delete);
    }

    #[test]
    fn test_cmd_config_set_missing_file() {
        let result = cmd_config_set(Some("/nonexistent/landtracker.toml"), "logging.level", "debug");
        assert!(result.unwrap_err().to_string().contains("does not exist"));
    }

    #[test]
    fn test_cmd_config_init_creates_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let written = cmd_config_init(Some(path.to_str().unwrap()), false).unwrap();
        assert_eq!(written, path);
        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("[authz]"));
        assert!(content.contains("guard_self_delete"));
    }

    #[test]
    fn test_cmd_config_init_no_overwrite() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "existing").unwrap();

        let result = cmd_config_init(Some(path.to_str().unwrap()), false);
        assert!(result.unwrap_err().to_string().contains("already exists"));

        assert!(cmd_config_init(Some(path.to_str().unwrap()), true).is_ok());
        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("[logging]"));
    }

    #[test]
    fn test_set_nested_value_creates_section() {
        let mut val = toml::Value::Table(toml::map::Map::new());
        set_nested_value(&mut val, "authz.log_decisions", toml::Value::Boolean(false)).unwrap();
        assert_eq!(
            get_nested_value(&val, "authz.log_decisions"),
            Some(&toml::Value::Boolean(false))
        );
    }

    #[test]
    fn test_set_nested_value_empty_key() {
        let mut val = toml::Value::Table(toml::map::Map::new());
        assert!(set_nested_value(&mut val, "", toml::Value::Integer(1)).is_err());
    }

    #[test]
    fn test_parse_value_types() {
        assert_eq!(parse_value("true"), toml::Value::Boolean(true));
        assert_eq!(parse_value("42"), toml::Value::Integer(42));
        assert_eq!(parse_value("debug"), toml::Value::String("debug".into()));
    }

    #[test]
    fn test_format_toml_value() {
        assert_eq!(format_toml_value(&toml::Value::String("warn".into())), "warn");
        assert_eq!(format_toml_value(&toml::Value::Boolean(false)), "false");
    }
}
