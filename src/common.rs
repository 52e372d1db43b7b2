pub type ColorValue = u8; // 8-bit channel intensity (0-255)
pub type ColorRGB = [ColorValue; 3];
pub type TileIdx = usize; // Index into the tile cache
pub type PixelSize = u32; // Integer scale factor applied at decode time

// Logical screen dimensions, before scaling:
pub const SCREEN_WIDTH: u32 = 320;
pub const SCREEN_HEIGHT: u32 = 200;

// Pixel sizes of the grid units used to place content:
pub const TILE_WIDTH: u32 = 16;
pub const TILE_HEIGHT: u32 = 16;
pub const HALFTILE_WIDTH: u32 = 8;
pub const HALFTILE_HEIGHT: u32 = 8;
pub const FONT_WIDTH: u32 = 8;
pub const FONT_HEIGHT: u32 = 8;

pub const MIN_PIXEL_SIZE: PixelSize = 1;
pub const MAX_PIXEL_SIZE: PixelSize = 10;

// Background color of every tile, installed as its color key.
pub const TRANSPARENT: ColorRGB = [100, 1, 1];
pub const BLACK: ColorRGB = [0, 0, 0];
