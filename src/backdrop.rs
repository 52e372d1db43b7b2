// Module for backdrop files: a headerless 13x10 grid of 16x16 tiles.
use anyhow::{Context, Result};
use itertools::Itertools;
use log::info;
use std::path::Path;

use crate::{
    common::{PixelSize, TILE_HEIGHT, TILE_WIDTH},
    geometry::GridUnit,
    reader::AssetReader,
    surface::Surface,
    tile::{load_tile, TileHeader},
};

pub const BACKDROP_COLUMNS: u32 = 13;
pub const BACKDROP_ROWS: u32 = 10;
pub const BACKDROP_TILES: u32 = BACKDROP_COLUMNS * BACKDROP_ROWS;

const BACKDROP_TILE_HEADER: TileHeader = TileHeader {
    tile_count: BACKDROP_TILES as u8,
    width_bytes: 2,
    height: 16,
};

pub fn load_backdrop(reader: &mut AssetReader, pixel_size: PixelSize) -> Result<Surface> {
    let mut backdrop = Surface::new(
        BACKDROP_COLUMNS * TILE_WIDTH * pixel_size,
        BACKDROP_ROWS * TILE_HEIGHT * pixel_size,
    );
    for (row, col) in (0..BACKDROP_ROWS).cartesian_product(0..BACKDROP_COLUMNS) {
        let tile = load_tile(reader, &BACKDROP_TILE_HEADER, pixel_size)
            .with_context(|| format!("backdrop tile {}", row * BACKDROP_COLUMNS + col))?;
        let dest = GridUnit::Tile.cell_rect(col as i32, row as i32, pixel_size);
        tile.blit(None, &mut backdrop, dest);
    }
    Ok(backdrop)
}

pub fn load_backdrop_file(path: &Path, pixel_size: PixelSize) -> Result<Surface> {
    info!("Loading backdrop {}", path.display());
    let mut reader = AssetReader::open(path)?;
    load_backdrop(&mut reader, pixel_size)
}
