use crate::error::{ConverterError, Result};
use crate::types::config::ConverterConfig;
use std::path::{Path, PathBuf};
use toml::map::Map;
use toml::Value;
use tracing::debug;

pub const DEFAULT_CONFIG_FILE: &str = "axe-sarif.toml";
pub const DEFAULT_GLOBAL_CONFIG_FILE: &str = ".config/axe-sarif-converter/config.toml";

/// Layers: global, then `axe-sarif.toml` in `root`, then the explicit path.
pub fn load_config(root: &Path, explicit: Option<&Path>) -> Result<Option<ConverterConfig>> {
    let global = std::env::var_os("HOME")
        .map(PathBuf::from)
        .map(|home| home.join(DEFAULT_GLOBAL_CONFIG_FILE));
    load_config_with_global(root, global.as_deref(), explicit)
}

pub(crate) fn load_config_with_global(
    root: &Path,
    global_path: Option<&Path>,
    explicit: Option<&Path>,
) -> Result<Option<ConverterConfig>> {
    if let Some(path) = explicit {
        if !path.exists() {
            return Err(ConverterError::ConfigNotFound(path.display().to_string()));
        }
    }

    let mut merged = Value::Table(Map::new());
    let mut found = false;
    let project = root.join(DEFAULT_CONFIG_FILE);
    for path in global_path
        .into_iter()
        .chain(std::iter::once(project.as_path()))
        .chain(explicit)
    {
        found |= merge_file_if_exists(&mut merged, path)?;
    }

    if !found {
        return Ok(None);
    }

    let cfg: ConverterConfig = merged
        .try_into()
        .map_err(|e: toml::de::Error| ConverterError::ConfigParse(e.to_string()))?;
    cfg.validate()?;
    Ok(Some(cfg))
}

fn merge_file_if_exists(merged: &mut Value, path: &Path) -> Result<bool> {
    if !path.exists() {
        return Ok(false);
    }
    debug!(path = %path.display(), "merging config layer");
    let value = read_toml_value(path)?;
    merge_toml(merged, value);
    Ok(true)
}

fn read_toml_value(path: &Path) -> Result<Value> {
    let content = std::fs::read_to_string(path)?;
    toml::from_str(&content)
        .map_err(|e| ConverterError::ConfigParse(format!("{}: {}", path.display(), e)))
}

fn merge_toml(base: &mut Value, overlay: Value) {
    match (base, overlay) {
        (Value::Table(base_table), Value::Table(overlay_table)) => {
            for (key, value) in overlay_table {
                match base_table.get_mut(&key) {
                    Some(existing) => merge_toml(existing, value),
                    None => {
                        base_table.insert(key, value);
                    }
                }
            }
        }
        (slot, value) => {
            *slot = value;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn load_config_returns_none_when_no_layer_exists() {
        let dir = TempDir::new().expect("temp dir should be created");
        let cfg = load_config_with_global(dir.path(), None, None).expect("load should not fail");
        assert!(cfg.is_none());
    }

    #[test]
    fn load_config_rejects_missing_explicit_path() {
        let dir = TempDir::new().expect("temp dir should be created");
        let missing = dir.path().join("nope.toml");
        let err = load_config_with_global(dir.path(), None, Some(&missing))
            .expect_err("missing explicit config should fail");
        assert!(matches!(err, ConverterError::ConfigNotFound(_)));
    }

    #[test]
    fn load_config_merges_global_project_and_explicit_in_order() {
        let root = TempDir::new().expect("root temp dir should be created");
        let global_root = TempDir::new().expect("global temp dir should be created");
        let global_path = global_root.path().join("config.toml");
        let explicit_path = root.path().join("ci.toml");

        fs::write(
            &global_path,
            r#"
[output]
pretty = true
sarif_version = "2.0.0"

[page]
title = "Global title"
"#,
        )
        .expect("global config should write");

        fs::write(
            root.path().join(DEFAULT_CONFIG_FILE),
            r#"
[output]
sarif_version = "2.1.2"

[scan]
name = "project"
"#,
        )
        .expect("project config should write");

        fs::write(
            &explicit_path,
            r#"
[scan]
name = "nightly-1"
"#,
        )
        .expect("explicit config should write");

        let cfg = load_config_with_global(root.path(), Some(&global_path), Some(&explicit_path))
            .expect("load should succeed")
            .expect("merged config should exist");

        assert!(cfg.pretty());
        assert_eq!(cfg.sarif_version(), Some("2.1.2"));
        assert_eq!(
            cfg.scan.as_ref().and_then(|scan| scan.name.as_deref()),
            Some("nightly-1")
        );
        assert_eq!(
            cfg.page.as_ref().and_then(|page| page.title.as_deref()),
            Some("Global title")
        );
    }

    #[test]
    fn load_config_surfaces_validation_errors() {
        let root = TempDir::new().expect("root temp dir should be created");
        fs::write(
            root.path().join(DEFAULT_CONFIG_FILE),
            r#"
[output]
input_shape = "csv"
"#,
        )
        .expect("project config should write");

        let err = load_config_with_global(root.path(), None, None)
            .expect_err("invalid shape should fail");
        assert!(err.to_string().contains("input_shape"));
    }
}
