use crate::error::{AssessError, Result};
use crate::types::config::AssessConfig;
use std::path::{Path, PathBuf};
use toml::map::Map;
use toml::Value;

pub const DEFAULT_CONFIG_FILE: &str = "visiscore.toml";
pub const DEFAULT_LOCAL_FILE: &str = ".visiscore/local.toml";
pub const DEFAULT_GLOBAL_CONFIG_FILE: &str = ".config/visiscore/config.toml";

#[derive(Debug, Clone)]
pub struct LoadedConfig {
    pub config: AssessConfig,
    /// Whether a project `visiscore.toml` was found.
    pub from_project: bool,
}

pub fn load_config(root: &Path) -> Result<LoadedConfig> {
    let global = std::env::var_os("HOME")
        .map(PathBuf::from)
        .map(|home| home.join(DEFAULT_GLOBAL_CONFIG_FILE));
    load_config_with_global(root, global.as_deref())
}

/// Merges global, project and local files in that order; later files win key by key.
pub(crate) fn load_config_with_global(
    root: &Path,
    global_path: Option<&Path>,
) -> Result<LoadedConfig> {
    let repo_path = root.join(DEFAULT_CONFIG_FILE);
    let from_project = repo_path.exists();

    let mut merged = Value::Table(Map::new());
    if let Some(path) = global_path {
        merge_file_if_exists(&mut merged, path)?;
    }
    merge_file_if_exists(&mut merged, &repo_path)?;
    merge_file_if_exists(&mut merged, &root.join(DEFAULT_LOCAL_FILE))?;

    let mut config: AssessConfig = merged
        .try_into()
        .map_err(|e: toml::de::Error| AssessError::ConfigParse(e.to_string()))?;
    config.validate()?;

    if config.rate_limit.ledger_file.is_relative() {
        config.rate_limit.ledger_file = root.join(&config.rate_limit.ledger_file);
    }
    tracing::debug!(from_project, "configuration loaded");
    Ok(LoadedConfig {
        config,
        from_project,
    })
}

fn merge_file_if_exists(merged: &mut Value, path: &Path) -> Result<()> {
    if !path.exists() {
        return Ok(());
    }
    let value = read_toml_value(path)?;
    merge_toml(merged, value);
    Ok(())
}

fn read_toml_value(path: &Path) -> Result<Value> {
    let content = std::fs::read_to_string(path)?;
    toml::from_str(&content)
        .map_err(|e| AssessError::ConfigParse(format!("{}: {}", path.display(), e)))
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
    fn load_config_uses_defaults_when_no_files_exist() {
        let dir = TempDir::new().expect("temp dir should be created");
        let loaded = load_config_with_global(dir.path(), None).expect("load should not fail");
        assert!(!loaded.from_project);
        assert_eq!(loaded.config.audit.timeout_secs, 180);
        assert_eq!(
            loaded.config.rate_limit.ledger_file,
            dir.path().join(".visiscore/send_ledger.json")
        );
    }

    #[test]
    fn load_config_merges_global_repo_and_local_in_order() {
        let root = TempDir::new().expect("root temp dir should be created");
        let global_root = TempDir::new().expect("global temp dir should be created");
        let global_path = global_root.path().join("config.toml");

        fs::write(
            &global_path,
            r#"
[webhook]
url = "https://hooks.example.com/global"
timeout_secs = 15

[rate_limit]
max_sends = 10
"#,
        )
        .expect("global config should write");

        fs::write(
            root.path().join(DEFAULT_CONFIG_FILE),
            r#"
[webhook]
url = "https://hooks.example.com/project"

[report]
locale = "de"
"#,
        )
        .expect("repo config should write");

        fs::create_dir_all(root.path().join(".visiscore")).expect("local dir should create");
        fs::write(
            root.path().join(DEFAULT_LOCAL_FILE),
            r#"
[report]
locale = "fr"
"#,
        )
        .expect("local override should write");

        let loaded = load_config_with_global(root.path(), Some(&global_path))
            .expect("load should succeed");

        assert!(loaded.from_project);
        assert_eq!(
            loaded.config.webhook.url.as_deref(),
            Some("https://hooks.example.com/project")
        );
        assert_eq!(loaded.config.webhook.timeout_secs, 15);
        assert_eq!(loaded.config.rate_limit.max_sends, 10);
        assert_eq!(loaded.config.report.locale, "fr");
    }

    #[test]
    fn load_config_rejects_invalid_values() {
        let root = TempDir::new().expect("root temp dir should be created");
        fs::write(
            root.path().join(DEFAULT_CONFIG_FILE),
            r#"
[rate_limit]
window_minutes = 0
"#,
        )
        .expect("repo config should write");

        let err = load_config_with_global(root.path(), None).expect_err("load should fail");
        assert!(matches!(err, AssessError::ConfigParse(_)));
    }

    #[test]
    fn load_config_reports_malformed_toml_with_path() {
        let root = TempDir::new().expect("root temp dir should be created");
        fs::write(root.path().join(DEFAULT_CONFIG_FILE), "[audit\n").expect("write");
        let err = load_config_with_global(root.path(), None).expect_err("load should fail");
        assert!(err.to_string().contains(DEFAULT_CONFIG_FILE));
    }
}
