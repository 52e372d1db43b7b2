use anyhow::{ensure, Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::common::{PixelSize, MAX_PIXEL_SIZE, MIN_PIXEL_SIZE};

pub const DEFAULT_PIXEL_SIZE: PixelSize = 2;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct GlobalConfig {
    pub asset_dir: Option<PathBuf>,
    pub pixel_size: PixelSize,
    pub fullscreen: bool,
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            asset_dir: None,
            pixel_size: DEFAULT_PIXEL_SIZE,
            fullscreen: false,
        }
    }
}

impl GlobalConfig {
    pub fn validate(&self) -> Result<()> {
        ensure!(
            (MIN_PIXEL_SIZE..=MAX_PIXEL_SIZE).contains(&self.pixel_size),
            "pixel size must be between {} and {}, got {}",
            MIN_PIXEL_SIZE,
            MAX_PIXEL_SIZE,
            self.pixel_size
        );
        Ok(())
    }

    /// Apply command-line values on top of the stored ones.
    pub fn with_overrides(
        mut self,
        asset_dir: Option<PathBuf>,
        pixel_size: Option<PixelSize>,
    ) -> Result<Self> {
        if asset_dir.is_some() {
            self.asset_dir = asset_dir;
        }
        if let Some(pixel_size) = pixel_size {
            self.pixel_size = pixel_size;
        }
        self.validate()?;
        Ok(self)
    }

    pub fn asset_dir(&self) -> Result<PathBuf> {
        Ok(self
            .asset_dir
            .as_ref()
            .context("Asset directory not set (use --assets or the config file).")?
            .to_owned())
    }
}

pub fn get_global_config_path() -> Result<PathBuf> {
    let project_dirs = directories::ProjectDirs::from("", "", "DN1Engine")
        .context("Unable to open global config directory.")?;
    let config_dir = project_dirs.config_dir();
    let config_path = config_dir.join("config.json");
    Ok(config_path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        let config = GlobalConfig::default();
        assert_eq!(config.pixel_size, 2);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn pixel_size_bounds() {
        for (pixel_size, ok) in [(0, false), (1, true), (10, true), (11, false)] {
            let config = GlobalConfig {
                pixel_size,
                ..Default::default()
            };
            assert_eq!(config.validate().is_ok(), ok, "pixel size {pixel_size}");
        }
    }

    #[test]
    fn overrides_replace_stored_values() {
        let stored = GlobalConfig {
            asset_dir: Some(PathBuf::from("stored")),
            pixel_size: 3,
            fullscreen: true,
        };
        let config = stored.clone().with_overrides(None, Some(5)).unwrap();
        assert_eq!(config.asset_dir, Some(PathBuf::from("stored")));
        assert_eq!(config.pixel_size, 5);
        assert!(config.fullscreen);

        let config = stored.clone().with_overrides(Some(PathBuf::from("cli")), None).unwrap();
        assert_eq!(config.asset_dir().unwrap(), PathBuf::from("cli"));
        assert!(stored.with_overrides(None, Some(0)).is_err());
    }

    #[test]
    fn missing_fields_take_defaults() {
        let config: GlobalConfig = serde_json::from_str(r#"{"fullscreen": true}"#).unwrap();
        assert_eq!(config.pixel_size, DEFAULT_PIXEL_SIZE);
        assert!(config.fullscreen);
        assert!(config.asset_dir().is_err());
    }
}
