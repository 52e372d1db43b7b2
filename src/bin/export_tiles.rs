use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use env_logger::Env;
use log::info;

use dn1_engine::{
    common::PixelSize,
    draw::contact_sheet,
    persist::{load_global_config, save_png},
    state::get_global_config_path,
    tilecache::TileCache,
};

#[derive(Parser, Debug)]
struct Args {
    /// PNG file to write
    output: PathBuf,

    /// Directory holding the game's .DN1 files
    #[arg(long)]
    assets: Option<PathBuf>,

    /// Integer scale applied when decoding (1-10)
    #[arg(long)]
    pixel_size: Option<PixelSize>,
}

pub fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();
    let args = Args::parse();
    let config = load_global_config(&get_global_config_path()?)?
        .with_overrides(args.assets, args.pixel_size)?;

    let mut tiles = TileCache::init(config.pixel_size);
    tiles.load_all(&config.asset_dir()?)?;
    let sheet = contact_sheet(&tiles);
    save_png(&args.output, &sheet)?;
    info!("Exported {} tiles", tiles.len());
    Ok(())
}
