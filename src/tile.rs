// Module for decoding tile-format files: a 3-byte header followed by tiles of
// 5-byte planar records, 8 pixels per record.
use anyhow::{ensure, Result};
use log::debug;

use crate::{
    common::{ColorRGB, PixelSize, TRANSPARENT},
    error::AssetError,
    geometry::Rect,
    helpers::plane_intensity,
    reader::AssetReader,
    surface::Surface,
};

pub const RECORD_SIZE: usize = 5;

/// One 8-pixel strip as five bit-planes. Bit 7 is the leftmost pixel.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct ByteRow {
    pub brighten: u8,
    pub red: u8,
    pub green: u8,
    pub blue: u8,
    pub trans: u8,
}

impl ByteRow {
    /// From an on-disk record, which is ordered trans, blue, green, red, brighten.
    pub fn from_record([trans, blue, green, red, brighten]: [u8; RECORD_SIZE]) -> Self {
        Self {
            brighten,
            red,
            green,
            blue,
            trans,
        }
    }

    /// Color of pixel `i` (0 = leftmost), or `None` if it is transparent.
    pub fn pixel(&self, i: u32) -> Option<ColorRGB> {
        let shift = 7 - i;
        let bit = |plane: u8| (plane >> shift) & 1;
        if bit(self.trans) == 0 {
            return None;
        }
        let brighten = bit(self.brighten);
        Some([
            plane_intensity(bit(self.red), brighten),
            plane_intensity(bit(self.green), brighten),
            plane_intensity(bit(self.blue), brighten),
        ])
    }

    /// Paint the 8 pixels as `pixel_size` squares starting at `dest`, moving
    /// `dest.x` right by one block per pixel.
    pub fn draw(
        &self,
        transparent: ColorRGB,
        dest: &mut Rect,
        pixel_size: PixelSize,
        target: &mut Surface,
    ) {
        for i in 0..8 {
            let block = Rect::new(dest.x, dest.y, pixel_size, pixel_size);
            target.fill_rect(block, self.pixel(i).unwrap_or(transparent));
            dest.x += pixel_size as i32;
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct TileHeader {
    pub tile_count: u8,
    pub width_bytes: u8, // Width in 8-pixel groups
    pub height: u8,
}

impl TileHeader {
    pub fn read(reader: &mut AssetReader) -> Result<Self> {
        let [tile_count, width_bytes, height] = reader.read_array()?;
        ensure!(
            width_bytes > 0 && height > 0,
            AssetError::MalformedHeader {
                name: reader.name().to_string(),
                width_bytes,
                height,
            }
        );
        debug!(
            "{}: {} tiles of {}x{}",
            reader.name(),
            tile_count,
            width_bytes as u32 * 8,
            height
        );
        Ok(Self {
            tile_count,
            width_bytes,
            height,
        })
    }

    pub fn pixel_width(&self) -> u32 {
        self.width_bytes as u32 * 8
    }

    pub fn pixel_height(&self) -> u32 {
        self.height as u32
    }

    /// Number of 5-byte records per tile.
    pub fn records_per_tile(&self) -> usize {
        self.width_bytes as usize * self.height as usize
    }
}

/// Decode the next tile from `reader`, scaled by `pixel_size`, with the tile
/// background color installed as its color key.
pub fn load_tile(
    reader: &mut AssetReader,
    header: &TileHeader,
    pixel_size: PixelSize,
) -> Result<Surface> {
    let width = header.pixel_width() * pixel_size;
    let height = header.pixel_height() * pixel_size;
    let mut tile = Surface::new(width, height);
    let mut dest = Rect::new(0, 0, pixel_size, pixel_size);
    for _ in 0..header.records_per_tile() {
        let row = ByteRow::from_record(reader.read_array()?);
        row.draw(TRANSPARENT, &mut dest, pixel_size, &mut tile);
        if dest.x as u32 >= width {
            dest.x = 0;
            dest.y += pixel_size as i32;
        }
    }
    tile.set_color_key(Some(TRANSPARENT));
    Ok(tile)
}

/// Read a header and every tile it declares.
pub fn load_tiles(
    reader: &mut AssetReader,
    pixel_size: PixelSize,
) -> Result<(TileHeader, Vec<Surface>)> {
    let header = TileHeader::read(reader)?;
    let tiles = (0..header.tile_count)
        .map(|_| load_tile(reader, &header, pixel_size))
        .collect::<Result<Vec<_>>>()?;
    Ok((header, tiles))
}
