// Module for placing cached tiles on a framebuffer. Tiles are scaled once at
// decode time, so compositing only repositions and copies.
use crate::{
    common::{ColorRGB, PixelSize, TileIdx, SCREEN_HEIGHT, SCREEN_WIDTH, TRANSPARENT},
    geometry::{GridUnit, Rect},
    surface::{Drawable, Surface},
    tilecache::TileCache,
};

/// Entry of a layout array: a tile cache index, or negative for an empty cell.
pub type LayoutCell = i32;
pub const EMPTY: LayoutCell = -1;

pub fn layout_index(cell: LayoutCell) -> Option<TileIdx> {
    TileIdx::try_from(cell).ok()
}

/// Copy tile `index` to cell (`grid_x`, `grid_y`) of `target`. Returns false
/// (and draws nothing) if the cache has no such tile.
pub fn blit_tile(
    tiles: &TileCache,
    index: TileIdx,
    target: &mut Surface,
    grid_x: i32,
    grid_y: i32,
    unit: GridUnit,
) -> bool {
    let Some(tile) = tiles.get(index) else {
        return false;
    };
    tile.draw_at(target, unit.cell_rect(grid_x, grid_y, tiles.pixel_size()));
    true
}

/// Draw a grid of layout cells with its top-left cell at (`grid_x`, `grid_y`).
pub fn draw_layout<R: AsRef<[LayoutCell]>>(
    tiles: &TileCache,
    layout: &[R],
    target: &mut Surface,
    grid_x: i32,
    grid_y: i32,
    unit: GridUnit,
) {
    for (dy, row) in layout.iter().enumerate() {
        for (dx, &cell) in row.as_ref().iter().enumerate() {
            if let Some(index) = layout_index(cell) {
                blit_tile(
                    tiles,
                    index,
                    target,
                    grid_x + dx as i32,
                    grid_y + dy as i32,
                    unit,
                );
            }
        }
    }
}

/// Blank surface of `cols` x `rows` cells, keyed so undrawn cells stay see-through.
pub fn scratch_surface(cols: u32, rows: u32, unit: GridUnit, pixel_size: PixelSize) -> Surface {
    let (w, h) = unit.size();
    let mut surface = Surface::filled(cols * w * pixel_size, rows * h * pixel_size, TRANSPARENT);
    surface.set_color_key(Some(TRANSPARENT));
    surface
}

pub const SHEET_COLUMNS: u32 = 16;

/// Every cached tile in index order, `SHEET_COLUMNS` per row, one 16x16 cell each.
pub fn contact_sheet(tiles: &TileCache) -> Surface {
    let count = tiles.len() as u32;
    let rows = count.div_ceil(SHEET_COLUMNS).max(1);
    let (w, h) = GridUnit::Tile.size();
    let ps = tiles.pixel_size();
    let mut sheet = Surface::new(SHEET_COLUMNS * w * ps, rows * h * ps);
    for index in 0..count {
        let (col, row) = (index % SHEET_COLUMNS, index / SHEET_COLUMNS);
        blit_tile(
            tiles,
            index as TileIdx,
            &mut sheet,
            col as i32,
            row as i32,
            GridUnit::Tile,
        );
    }
    sheet
}

/// Drawing context: scale factor, the screen framebuffer and the loaded tiles.
pub struct Environment {
    pub pixel_size: PixelSize,
    pub transparent: ColorRGB,
    pub framebuffer: Surface,
    pub tiles: TileCache,
}

impl Environment {
    pub fn new(tiles: TileCache) -> Self {
        let pixel_size = tiles.pixel_size();
        Self {
            pixel_size,
            transparent: TRANSPARENT,
            framebuffer: Surface::new(SCREEN_WIDTH * pixel_size, SCREEN_HEIGHT * pixel_size),
            tiles,
        }
    }

    pub fn clear(&mut self, color: ColorRGB) {
        self.framebuffer.fill(color);
    }

    /// Place tile `index` on the half-tile grid.
    pub fn blit(&mut self, index: TileIdx, grid_x: i32, grid_y: i32) -> bool {
        self.blit_at(index, grid_x, grid_y, GridUnit::HalfTile)
    }

    pub fn blit_at(&mut self, index: TileIdx, grid_x: i32, grid_y: i32, unit: GridUnit) -> bool {
        blit_tile(
            &self.tiles,
            index,
            &mut self.framebuffer,
            grid_x,
            grid_y,
            unit,
        )
    }

    pub fn draw_layout<R: AsRef<[LayoutCell]>>(
        &mut self,
        layout: &[R],
        grid_x: i32,
        grid_y: i32,
        unit: GridUnit,
    ) {
        draw_layout(
            &self.tiles,
            layout,
            &mut self.framebuffer,
            grid_x,
            grid_y,
            unit,
        );
    }

    /// Place a surface built outside the cache at a scaled grid cell.
    pub fn draw_surface(&mut self, item: &impl Drawable, grid_x: i32, grid_y: i32, unit: GridUnit) {
        item.draw_at(
            &mut self.framebuffer,
            unit.cell_rect(grid_x, grid_y, self.pixel_size),
        );
    }

    pub fn scratch(&self, cols: u32, rows: u32, unit: GridUnit) -> Surface {
        scratch_surface(cols, rows, unit, self.pixel_size)
    }

    pub fn draw_rect(&mut self, item: &impl Drawable, dest: Rect) {
        item.draw_at(&mut self.framebuffer, dest);
    }
}
