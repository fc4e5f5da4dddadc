use std::path::{Path, PathBuf};

use color_vision::VisionDeficiency;
use serde::Deserialize;

use crate::error::ConfigError;

/// Environment variable naming a config file to load when `--config` is absent
pub const CONFIG_ENV_VAR: &str = "HUELENS_CONFIG";

/// Application configuration loaded from a YAML file
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct AppConfig {
    /// Number of dominant colors `extract` returns when `--count` is omitted
    #[serde(default = "default_extract_count")]
    pub extract_count: usize,

    /// Theme export settings
    #[serde(default)]
    pub theme: ThemeConfig,

    /// Which deficiencies reports cover by default
    #[serde(default)]
    pub report: ReportConfig,
}

fn default_extract_count() -> usize {
    5
}

/// Key names for the exported theme, assigned to colors in rank order
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ThemeConfig {
    #[serde(default = "default_theme_keys")]
    pub keys: Vec<String>,
}

fn default_theme_keys() -> Vec<String> {
    ["primary", "secondary", "accent", "background", "text"]
        .into_iter()
        .map(String::from)
        .collect()
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            keys: default_theme_keys(),
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ReportConfig {
    #[serde(default = "default_report_deficiencies")]
    pub deficiencies: Vec<VisionDeficiency>,
}

fn default_report_deficiencies() -> Vec<VisionDeficiency> {
    VisionDeficiency::DEFICIENT.to_vec()
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            deficiencies: default_report_deficiencies(),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            extract_count: default_extract_count(),
            theme: ThemeConfig::default(),
            report: ReportConfig::default(),
        }
    }
}

/// Where the active configuration came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// Built-in defaults
    Defaults,
    /// Loaded from a file
    File(PathBuf),
}

impl AppConfig {
    /// Parse configuration from a YAML string
    pub fn from_yaml(content: &str, path: &Path) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::info!(
            path = %path.display(),
            extract_count = config.extract_count,
            theme_keys = config.theme.keys.len(),
            deficiencies = config.report.deficiencies.len(),
            "Loaded configuration"
        );
        Ok(config)
    }

    /// Load configuration from a file, failing on any error
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml(&content, path)
    }

    /// Load configuration from a file, falling back to defaults on error
    pub fn load_or_default(path: &Path) -> (Self, ConfigSource) {
        match Self::from_file(path) {
            Ok(config) => (config, ConfigSource::File(path.to_path_buf())),
            Err(e) => {
                tracing::warn!(%e, "Failed to load config, using defaults");
                (Self::default(), ConfigSource::Defaults)
            }
        }
    }

    /// Resolve the active configuration.
    ///
    /// An explicit path (from `--config`) must load. Otherwise the path from
    /// [`CONFIG_ENV_VAR`] is tried and any failure falls back to defaults.
    pub fn resolve(
        explicit: Option<&Path>,
        from_env: Option<&Path>,
    ) -> Result<(Self, ConfigSource), ConfigError> {
        if let Some(path) = explicit {
            let config = Self::from_file(path)?;
            return Ok((config, ConfigSource::File(path.to_path_buf())));
        }
        match from_env {
            Some(path) => Ok(Self::load_or_default(path)),
            None => Ok((Self::default(), ConfigSource::Defaults)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();

        assert_eq!(config.extract_count, 5);
        assert_eq!(
            config.theme.keys,
            vec!["primary", "secondary", "accent", "background", "text"]
        );
        assert_eq!(config.report.deficiencies, VisionDeficiency::DEFICIENT.to_vec());
        assert!(!config.report.deficiencies.contains(&VisionDeficiency::Normal));
    }

    #[test]
    fn test_empty_yaml_uses_defaults() {
        let config = AppConfig::from_yaml("{}", Path::new("inline.yaml")).unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_partial_yaml_keeps_other_defaults() {
        let yaml = r#"
extract_count: 8
theme:
  keys: [brand, surface]
"#;
        let config = AppConfig::from_yaml(yaml, Path::new("inline.yaml")).unwrap();
        assert_eq!(config.extract_count, 8);
        assert_eq!(config.theme.keys, vec!["brand", "surface"]);
        assert_eq!(config.report, ReportConfig::default());
    }

    #[test]
    fn test_report_deficiencies_by_name() {
        let yaml = r#"
report:
  deficiencies: [protanopia, achromatopsia]
"#;
        let config = AppConfig::from_yaml(yaml, Path::new("inline.yaml")).unwrap();
        assert_eq!(
            config.report.deficiencies,
            vec![VisionDeficiency::Protanopia, VisionDeficiency::Achromatopsia]
        );
    }

    #[test]
    fn test_unknown_deficiency_is_parse_error() {
        let yaml = "report:\n  deficiencies: [deuteranomaly]\n";
        let result = AppConfig::from_yaml(yaml, Path::new("bad.yaml"));
        assert!(matches!(result, Err(ConfigError::Parse { .. })));
    }

    #[test]
    fn test_resolve_without_any_path_is_defaults() {
        let (config, source) = AppConfig::resolve(None, None).unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(source, ConfigSource::Defaults);
    }

    #[test]
    fn test_resolve_explicit_missing_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.yaml");
        let result = AppConfig::resolve(Some(&missing), None);
        assert!(matches!(result, Err(ConfigError::Read { .. })));
    }

    #[test]
    fn test_resolve_env_missing_file_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.yaml");
        let (config, source) = AppConfig::resolve(None, Some(&missing)).unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(source, ConfigSource::Defaults);
    }

    #[test]
    fn test_resolve_env_file_is_loaded() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "extract_count: 3").unwrap();

        let (config, source) = AppConfig::resolve(None, Some(file.path())).unwrap();
        assert_eq!(config.extract_count, 3);
        assert_eq!(source, ConfigSource::File(file.path().to_path_buf()));
    }

    #[test]
    fn test_resolve_explicit_wins_over_env() {
        let mut explicit = tempfile::NamedTempFile::new().unwrap();
        writeln!(explicit, "extract_count: 2").unwrap();
        let mut env = tempfile::NamedTempFile::new().unwrap();
        writeln!(env, "extract_count: 9").unwrap();

        let (config, _) = AppConfig::resolve(Some(explicit.path()), Some(env.path())).unwrap();
        assert_eq!(config.extract_count, 2);
    }
}
