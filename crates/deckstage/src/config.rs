use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

const FILENAME: &str = "config.yaml";
const APP_DIR: &str = "deckstage";

pub const VALID_KEYS: &str =
    "defaults.theme, defaults.transition, defaults.particles, defaults.start_mode";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub defaults: Option<DefaultsConfig>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DefaultsConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theme: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transition: Option<String>,

    /// Draw the ambient particle overlay.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub particles: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_mode: Option<String>,
}

impl Config {
    pub fn path() -> Result<PathBuf> {
        dirs::config_dir()
            .map(|d| d.join(APP_DIR).join(FILENAME))
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))
    }

    pub fn load() -> Result<Self> {
        let path = Self::path()?;
        Self::load_from(&path)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                anyhow::anyhow!("No config found. Run `deckstage config show` to see defaults.")
            } else {
                anyhow::anyhow!("Failed to read config: {e}")
            }
        })?;
        let config: Config = serde_yaml::from_str(&contents)?;
        Ok(config)
    }

    pub fn load_or_default() -> Self {
        match Self::load() {
            Ok(config) => config,
            Err(e) => {
                log::debug!("using default config: {e}");
                Self::default()
            }
        }
    }

    pub fn save(&self) -> Result<PathBuf> {
        let path = Self::path()?;
        self.save_to(&path)?;
        Ok(path)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let yaml = serde_yaml::to_string(self)?;
        std::fs::write(path, format!("# deckstage configuration\n{yaml}"))?;
        Ok(())
    }

    pub fn theme(&self) -> Option<&str> {
        self.defaults.as_ref()?.theme.as_deref()
    }

    pub fn transition(&self) -> Option<&str> {
        self.defaults.as_ref()?.transition.as_deref()
    }

    pub fn particles(&self) -> bool {
        self.defaults
            .as_ref()
            .and_then(|d| d.particles)
            .unwrap_or(true)
    }

    /// Zero-based start slide from `start_mode`, if it names one.
    pub fn start_slide(&self) -> Option<usize> {
        let mode = self.defaults.as_ref()?.start_mode.as_deref()?;
        match mode {
            "first" => Some(0),
            n => n.parse::<usize>().ok().map(|n| n.saturating_sub(1)),
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let defaults = self.defaults.get_or_insert_with(DefaultsConfig::default);
        match key {
            "defaults.theme" => {
                match value {
                    "light" | "dark" => {}
                    _ => anyhow::bail!("Invalid theme: {value}. Must be 'light' or 'dark'."),
                }
                defaults.theme = Some(value.to_string());
            }
            "defaults.transition" => {
                match value {
                    "fade" | "slide" | "none" => {}
                    _ => anyhow::bail!(
                        "Invalid transition: {value}. Must be 'fade', 'slide', or 'none'."
                    ),
                }
                defaults.transition = Some(value.to_string());
            }
            "defaults.particles" => {
                let enabled = match value {
                    "true" | "on" | "yes" => true,
                    "false" | "off" | "no" => false,
                    _ => anyhow::bail!("Invalid particles: {value}. Must be 'true' or 'false'."),
                };
                defaults.particles = Some(enabled);
            }
            "defaults.start_mode" => {
                if value != "first" && value.parse::<usize>().map_or(true, |n| n == 0) {
                    anyhow::bail!(
                        "Invalid start_mode: {value}. Must be 'first' or a slide number."
                    );
                }
                defaults.start_mode = Some(value.to_string());
            }
            _ => anyhow::bail!("Unknown config key: {key}. Valid keys: {VALID_KEYS}"),
        }
        Ok(())
    }
}
