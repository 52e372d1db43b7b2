use std::{path::PathBuf, process::ExitCode};

use anyhow::Result;
use clap::{Parser, Subcommand};
use env_logger::Env;
use log::{error, info};

use dn1_engine::{
    assets::AssetDir,
    backdrop::load_backdrop_file,
    common::PixelSize,
    draw::Environment,
    error::AssetError,
    persist::{load_global_config, save_global_config, save_png},
    picture::load_picture_file,
    state::{get_global_config_path, GlobalConfig},
    tilecache::{
        TileCache, ANIM_START, BACKGROUND_START, BORD_START, FONT_START, HERO_START, NUMB_START,
        OBJ_START, SOLID_START,
    },
    view::{draw_scene, hud::MAX_HEALTH, Scene},
};

#[derive(Parser, Debug)]
#[command(about = "Decode DN1 graphics files and compose game screens")]
struct Args {
    /// Directory holding the game's .DN1 files
    #[arg(long, global = true)]
    assets: Option<PathBuf>,

    /// Integer scale applied when decoding (1-10)
    #[arg(long, global = true)]
    pixel_size: Option<PixelSize>,

    /// Store the effective settings in the config file
    #[arg(long, global = true)]
    save_config: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compose backdrop, border, HUD and an optional message box
    Scene {
        output: PathBuf,
        #[arg(long)]
        backdrop: Option<String>,
        #[arg(long, default_value_t = 0)]
        score: u32,
        #[arg(long, default_value_t = MAX_HEALTH)]
        health: u32,
        #[arg(long, default_value_t = 1)]
        firepower: u32,
        #[arg(long)]
        message: Option<String>,
    },
    /// Decode a full-screen picture
    Picture { name: String, output: PathBuf },
    /// Decode a backdrop
    Backdrop { name: String, output: PathBuf },
    /// Load every tile sheet and report the index ranges
    Check,
}

fn load_tiles(config: &GlobalConfig) -> Result<TileCache> {
    let mut tiles = TileCache::init(config.pixel_size);
    tiles.load_all(&config.asset_dir()?)?;
    Ok(tiles)
}

fn run(args: Args) -> Result<()> {
    let config_path = get_global_config_path()?;
    let config =
        load_global_config(&config_path)?.with_overrides(args.assets, args.pixel_size)?;
    if args.save_config {
        save_global_config(&config_path, &config)?;
    }
    let pixel_size = config.pixel_size;

    match args.command {
        Command::Scene {
            output,
            backdrop,
            score,
            health,
            firepower,
            message,
        } => {
            let tiles = load_tiles(&config)?;
            let assets = AssetDir::scan(&config.asset_dir()?)?;
            let backdrop = backdrop
                .map(|name| load_backdrop_file(&assets.resolve(&name)?, pixel_size))
                .transpose()?;
            let scene = Scene {
                backdrop,
                score,
                health,
                firepower,
                inventory: vec![],
                message,
            };
            let mut env = Environment::new(tiles);
            draw_scene(&mut env, &scene);
            save_png(&output, &env.framebuffer)?;
        }
        Command::Picture { name, output } => {
            let assets = AssetDir::scan(&config.asset_dir()?)?;
            let picture = load_picture_file(&assets.resolve(&name)?, pixel_size)?;
            save_png(&output, &picture)?;
        }
        Command::Backdrop { name, output } => {
            let assets = AssetDir::scan(&config.asset_dir()?)?;
            let backdrop = load_backdrop_file(&assets.resolve(&name)?, pixel_size)?;
            save_png(&output, &backdrop)?;
        }
        Command::Check => {
            let tiles = load_tiles(&config)?;
            info!("{} tiles loaded at pixel size {}", tiles.len(), pixel_size);
            for (range, start) in [
                ("background", BACKGROUND_START),
                ("solid", SOLID_START),
                ("animation", ANIM_START),
                ("object", OBJ_START),
                ("hero", HERO_START),
                ("font", FONT_START),
                ("border", BORD_START),
                ("numbers", NUMB_START),
            ] {
                println!("{:<12}{:>5}", range, start);
            }
            println!("{:<12}{:>5}", "total", tiles.len());
        }
    }
    Ok(())
}

pub fn main() -> ExitCode {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();
    let args = Args::parse();
    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{:#}", err);
            if let Some(AssetError::MissingAsset { dir, .. }) = err.downcast_ref::<AssetError>() {
                eprintln!(
                    "Expected the game's .DN1 files in {} (set with --assets).",
                    dir.display()
                );
            }
            ExitCode::FAILURE
        }
    }
}
