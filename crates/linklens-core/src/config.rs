use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// How CLI results are rendered when no flag overrides it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Global configuration loaded from `~/.config/linklens/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinklensConfig {
    /// Default output format: "text" or "json".
    #[serde(default)]
    pub output_format: OutputFormat,
    /// Abort batch classification at the first invalid URL.
    #[serde(default)]
    pub batch_stop_on_invalid: bool,
}

impl Default for LinklensConfig {
    fn default() -> Self {
        Self {
            output_format: OutputFormat::Text,
            batch_stop_on_invalid: false,
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("linklens")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<LinklensConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = LinklensConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: LinklensConfig = toml::from_str(&data)?;
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_values() {
        let cfg = LinklensConfig::default();
        assert_eq!(cfg.output_format, OutputFormat::Text);
        assert!(!cfg.batch_stop_on_invalid);
    }

    #[test]
    fn config_toml_roundtrip() {
        let cfg = LinklensConfig::default();
        let toml = toml::to_string_pretty(&cfg).unwrap();
        let parsed: LinklensConfig = toml::from_str(&toml).unwrap();
        assert_eq!(parsed.output_format, cfg.output_format);
        assert_eq!(parsed.batch_stop_on_invalid, cfg.batch_stop_on_invalid);
    }

    #[test]
    fn config_toml_custom_values() {
        let toml = r#"
            output_format = "json"
            batch_stop_on_invalid = true
        "#;
        let cfg: LinklensConfig = toml::from_str(toml).unwrap();
        assert_eq!(cfg.output_format, OutputFormat::Json);
        assert!(cfg.batch_stop_on_invalid);
    }

    #[test]
    fn config_toml_missing_fields_use_defaults() {
        let cfg: LinklensConfig = toml::from_str("").unwrap();
        assert_eq!(cfg.output_format, OutputFormat::Text);
        assert!(!cfg.batch_stop_on_invalid);
    }
}
