use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::footer::FooterLink;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid color for theme.{key}: {value:?} (expected #RRGGBB or #RGB)")]
    InvalidColor { key: &'static str, value: String },
}

/// Build metadata of the dashboard being served
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct BuildInfo {
    #[serde(default)]
    pub edition: String,
    #[serde(default)]
    pub version: String,
    #[serde(default)]
    pub commit: String,
    #[serde(default)]
    pub hide_version: bool,
    #[serde(default)]
    pub has_update: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct LicenseInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state_info: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub license_url: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct FooterSettings {
    /// Hide license and version links entirely
    #[serde(default)]
    pub hide_edition: bool,

    /// Shown instead of the static links when set (an empty list hides them)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_links: Option<Vec<FooterLink>>,

    /// Replacement for the built-in static links, installed at startup
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub links: Vec<FooterLink>,
}

/// Hex colors for the terminal preview. Unset keys keep the built-in color.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ThemeSettings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_dim: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accent: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub build_info: BuildInfo,

    #[serde(default)]
    pub license_info: LicenseInfo,

    #[serde(default)]
    pub footer: FooterSettings,

    #[serde(default)]
    pub theme: ThemeSettings,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            build_info: BuildInfo {
                edition: "Open Source".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                commit: "unknown".to_string(),
                hide_version: false,
                has_update: false,
            },
            license_info: LicenseInfo::default(),
            footer: FooterSettings::default(),
            theme: ThemeSettings::default(),
        }
    }
}

impl AppConfig {
    /// Get the config file path
    fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not find config directory"))?
            .join("dashfoot");

        if let Err(e) = std::fs::create_dir_all(&config_dir) {
            tracing::warn!("Could not create config directory: {}", e);
        }

        Ok(config_dir.join("config.toml"))
    }

    /// Load config from the default location, or create default
    pub fn load() -> Result<Self> {
        let path = match Self::config_path() {
            Ok(p) => p,
            Err(_) => return Ok(AppConfig::default()),
        };

        if path.exists() {
            match std::fs::read_to_string(&path) {
                Ok(content) => match toml::from_str(&content) {
                    Ok(config) => return Ok(config),
                    Err(e) => tracing::warn!("Failed to parse config: {}", e),
                },
                Err(e) => tracing::warn!("Failed to read config: {}", e),
            }
            // Keep the broken file for the user to fix
            return Ok(AppConfig::default());
        }

        let config = AppConfig::default();
        if let Err(e) = config.save() {
            tracing::warn!("Could not write default config: {}", e);
        }
        Ok(config)
    }

    /// Load config from an explicit path. Unlike `load`, failures are errors.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse {}", path.display()))?;
        tracing::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Save config to the default location
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_serialization() {
        let config = AppConfig {
            build_info: BuildInfo {
                edition: "Enterprise".to_string(),
                version: "10.0.0".to_string(),
                commit: "abc123".to_string(),
                hide_version: false,
                has_update: true,
            },
            license_info: LicenseInfo {
                state_info: Some("Trial".to_string()),
                license_url: Some("https://example.com/licensing".to_string()),
            },
            footer: FooterSettings {
                hide_edition: false,
                custom_links: Some(vec![]),
                links: vec![FooterLink::new("docs", "Docs", Some("https://example.com/docs".to_string()))],
            },
            theme: ThemeSettings {
                link: Some("#89b4fa".to_string()),
                ..Default::default()
            },
        };

        let serialized = toml::to_string_pretty(&config).unwrap();
        let deserialized: AppConfig = toml::from_str(&serialized).unwrap();

        assert_eq!(config.build_info, deserialized.build_info);
        assert_eq!(config.license_info, deserialized.license_info);
        assert_eq!(deserialized.footer.custom_links, Some(vec![]));
        assert_eq!(config.footer.links, deserialized.footer.links);
        assert_eq!(deserialized.theme.link.as_deref(), Some("#89b4fa"));
    }

    #[test]
    fn test_missing_fields_default() {
        let config: AppConfig = toml::from_str(
            r#"
            [build_info]
            edition = "OSS"
            version = "10.0.0"
            "#,
        )
        .unwrap();

        assert_eq!(config.build_info.edition, "OSS");
        assert_eq!(config.build_info.commit, "");
        assert!(!config.build_info.hide_version);
        assert!(!config.build_info.has_update);
        assert!(config.license_info.state_info.is_none());
        assert!(config.footer.custom_links.is_none());
        assert!(config.footer.links.is_empty());
    }

    #[test]
    fn test_footer_links_table() {
        let config: AppConfig = toml::from_str(
            r#"
            [[footer.links]]
            id = "docs"
            text = "Documentation"
            url = "https://example.com/docs"

            [[footer.links]]
            id = "support"
            text = "Support"
            target = "_self"
            icon = "question-circle"
            "#,
        )
        .unwrap();

        assert_eq!(config.footer.links.len(), 2);
        assert_eq!(config.footer.links[1].url, None);
        assert_eq!(config.footer.links[1].target.as_str(), "_self");
    }

    #[test]
    fn test_load_from_missing_file_is_error() {
        let path = std::env::temp_dir().join("dashfoot-does-not-exist/config.toml");
        assert!(AppConfig::load_from(&path).is_err());
    }
}
