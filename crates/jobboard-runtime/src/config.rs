use crate::{Error, Result};
use jobboard_types::{SortDirection, SortField, SortState};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Resolve the config file path based on priority:
/// 1. Explicit path (with tilde expansion)
/// 2. JOBBOARD_CONFIG environment variable (with tilde expansion)
/// 3. XDG config directory (recommended default)
/// 4. ~/.jobboard/config.toml (fallback for systems without XDG)
pub fn resolve_config_path(explicit_path: Option<&str>) -> Result<PathBuf> {
    if let Some(path) = explicit_path {
        return Ok(expand_tilde(path));
    }

    if let Ok(env_path) = std::env::var("JOBBOARD_CONFIG") {
        return Ok(expand_tilde(&env_path));
    }

    if let Some(config_dir) = dirs::config_dir() {
        return Ok(config_dir.join("jobboard").join("config.toml"));
    }

    if let Some(home) = std::env::var_os("HOME") {
        return Ok(PathBuf::from(home).join(".jobboard").join("config.toml"));
    }

    Err(Error::Config(
        "Could not determine config path: no HOME directory or XDG config directory found"
            .to_string(),
    ))
}

/// Expand tilde (~) in paths to the user's home directory
pub fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/")
        && let Some(home) = std::env::var_os("HOME")
    {
        return PathBuf::from(home).join(stripped);
    }
    PathBuf::from(path)
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SourceConfig {
    /// JSON file holding the postings
    #[serde(default)]
    pub path: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ViewConfig {
    /// Field shown as the initial sort indicator
    #[serde(default = "default_sort_field")]
    pub sort_field: SortField,
    #[serde(default)]
    pub sort_direction: SortDirection,
}

fn default_sort_field() -> SortField {
    SortField::PostingDate
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            sort_field: default_sort_field(),
            sort_direction: SortDirection::default(),
        }
    }
}

impl ViewConfig {
    pub fn sort_state(&self) -> SortState {
        SortState::new(self.sort_field, self.sort_direction)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub source: SourceConfig,
    #[serde(default)]
    pub view: ViewConfig,
}

impl Config {
    pub fn load(explicit_path: Option<&str>) -> Result<Self> {
        let config_path = resolve_config_path(explicit_path)?;
        Self::load_from(&config_path)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Override the configured source path (e.g. from `--source`)
    pub fn with_source_path(mut self, path: impl Into<String>) -> Self {
        self.source.path = Some(path.into());
        self
    }

    /// The posting file to read, tilde-expanded
    pub fn source_path(&self) -> Result<PathBuf> {
        self.source
            .path
            .as_deref()
            .map(expand_tilde)
            .ok_or_else(|| {
                Error::Config(
                    "No posting source configured: pass --source or set source.path".to_string(),
                )
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert!(config.source.path.is_none());
        assert_eq!(config.view.sort_state(), SortState::default());
    }

    #[test]
    fn test_config_save_and_load() -> anyhow::Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join("nested").join("config.toml");

        let mut config = Config::default().with_source_path("/data/postings.json");
        config.view.sort_field = SortField::Title;
        config.view.sort_direction = SortDirection::Asc;
        config.save_to(&config_path)?;

        let loaded = Config::load_from(&config_path)?;
        assert_eq!(loaded.source.path.as_deref(), Some("/data/postings.json"));
        assert_eq!(
            loaded.view.sort_state(),
            SortState::new(SortField::Title, SortDirection::Asc)
        );
        Ok(())
    }

    #[test]
    fn test_partial_config_uses_defaults() -> anyhow::Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join("config.toml");
        std::fs::write(&config_path, "[view]\nsort_field = \"open-positions\"\n")?;

        let config = Config::load_from(&config_path)?;
        assert_eq!(config.view.sort_field, SortField::OpenPositions);
        assert_eq!(config.view.sort_direction, SortDirection::Desc);
        assert!(config.source.path.is_none());
        Ok(())
    }

    #[test]
    fn test_load_nonexistent_returns_default() -> anyhow::Result<()> {
        let temp_dir = TempDir::new()?;
        let config = Config::load_from(&temp_dir.path().join("missing.toml"))?;
        assert!(config.source.path.is_none());
        Ok(())
    }

    #[test]
    fn test_invalid_toml_is_config_error() -> anyhow::Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join("config.toml");
        std::fs::write(&config_path, "[view]\nsort_field = \"salary\"\n")?;

        let result = Config::load_from(&config_path);
        assert!(matches!(result, Err(Error::Config(_))));
        Ok(())
    }

    #[test]
    fn test_missing_source_path_is_error() {
        let result = Config::default().source_path();
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn test_explicit_path_wins() -> anyhow::Result<()> {
        let path = resolve_config_path(Some("/etc/jobboard.toml"))?;
        assert_eq!(path, PathBuf::from("/etc/jobboard.toml"));
        Ok(())
    }
}
