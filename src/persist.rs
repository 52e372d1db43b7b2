use std::{
    fs,
    io::BufWriter,
    path::Path,
};

use anyhow::{Context, Result};
use json_pretty_compact::PrettyCompactFormatter;
use log::{info, warn};
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Serializer;

use crate::{state::GlobalConfig, surface::Surface};

fn save_json<T: Serialize>(path: &Path, data: &T) -> Result<()> {
    info!("Saving {}", path.display());
    let formatter = PrettyCompactFormatter::new();
    let mut data_bytes = vec![];
    let mut ser = Serializer::with_formatter(&mut data_bytes, formatter);
    data.serialize(&mut ser)?;
    fs::create_dir_all(path.parent().context("invalid parent directory")?)?;
    fs::write(path, &data_bytes)?;
    Ok(())
}

fn load_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    info!("Loading {}", path.display());
    let data_bytes = std::fs::read(path)?;
    let data: T = serde_json::from_slice(&data_bytes)
        .with_context(|| format!("malformed JSON in {}", path.display()))?;
    Ok(data)
}

/// Load the config at `path`; a missing file yields the defaults.
pub fn load_global_config(path: &Path) -> Result<GlobalConfig> {
    if !path.exists() {
        warn!("No config at {}, using defaults", path.display());
        return Ok(GlobalConfig::default());
    }
    let config: GlobalConfig = load_json(path)?;
    config.validate()?;
    Ok(config)
}

pub fn save_global_config(path: &Path, config: &GlobalConfig) -> Result<()> {
    save_json(path, config)
}

pub fn save_png(path: &Path, surface: &Surface) -> Result<()> {
    info!(
        "Writing {} ({}x{})",
        path.display(),
        surface.width(),
        surface.height()
    );
    let file = fs::File::create(path).with_context(|| format!("unable to create {}", path.display()))?;
    let mut encoder = png::Encoder::new(BufWriter::new(file), surface.width(), surface.height());
    encoder.set_color(png::ColorType::Rgba);
    encoder.set_depth(png::BitDepth::Eight);
    let mut writer = encoder.write_header()?;
    writer.write_image_data(&surface.to_rgba())?;
    writer.finish()?;
    Ok(())
}
