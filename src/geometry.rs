// Module for rectangles and the grid units content is placed in.
use crate::common::{
    PixelSize, FONT_HEIGHT, FONT_WIDTH, HALFTILE_HEIGHT, HALFTILE_WIDTH, TILE_HEIGHT, TILE_WIDTH,
};

/// A rectangle in destination pixels.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn right(&self) -> i32 {
        self.x + self.width as i32
    }

    pub fn bottom(&self) -> i32 {
        self.y + self.height as i32
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }

    /// Overlap of two rectangles, or `None` if they don't touch.
    pub fn intersect(&self, other: &Rect) -> Option<Rect> {
        let x0 = self.x.max(other.x);
        let y0 = self.y.max(other.y);
        let x1 = self.right().min(other.right());
        let y1 = self.bottom().min(other.bottom());
        if x1 <= x0 || y1 <= y0 {
            return None;
        }
        Some(Rect::new(x0, y0, (x1 - x0) as u32, (y1 - y0) as u32))
    }
}

/// Unit of a board coordinate. Items and HUD icons are placed on a half-tile
/// grid, backgrounds on whole tiles, text and borders on font cells.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum GridUnit {
    HalfTile,
    Tile,
    FontCell,
}

impl GridUnit {
    pub fn size(self) -> (u32, u32) {
        match self {
            GridUnit::HalfTile => (HALFTILE_WIDTH, HALFTILE_HEIGHT),
            GridUnit::Tile => (TILE_WIDTH, TILE_HEIGHT),
            GridUnit::FontCell => (FONT_WIDTH, FONT_HEIGHT),
        }
    }

    /// Scaled destination rectangle of the cell at (`grid_x`, `grid_y`).
    pub fn cell_rect(self, grid_x: i32, grid_y: i32, pixel_size: PixelSize) -> Rect {
        let (w, h) = self.size();
        let w = w * pixel_size;
        let h = h * pixel_size;
        Rect::new(grid_x * w as i32, grid_y * h as i32, w, h)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rect_edges() {
        let r = Rect::new(2, 3, 4, 5);
        assert_eq!(r.right(), 6);
        assert_eq!(r.bottom(), 8);
        assert!(r.contains(2, 3));
        assert!(r.contains(5, 7));
        assert!(!r.contains(6, 7));
        assert!(!r.contains(5, 8));
    }

    #[test]
    fn rect_copy_is_independent() {
        let a = Rect::new(0, 0, 8, 8);
        let mut b = a;
        b.x += 8;
        assert_eq!(a.x, 0);
        assert_eq!(b.x, 8);
    }

    #[test]
    fn rect_intersect() {
        let a = Rect::new(0, 0, 10, 10);
        let b = Rect::new(5, -5, 10, 10);
        assert_eq!(a.intersect(&b), Some(Rect::new(5, 0, 5, 5)));
        assert_eq!(a.intersect(&Rect::new(10, 0, 4, 4)), None);
    }

    #[test]
    fn cell_rect_scales_units() {
        assert_eq!(GridUnit::HalfTile.cell_rect(3, 2, 2), Rect::new(48, 32, 16, 16));
        assert_eq!(GridUnit::Tile.cell_rect(3, 2, 2), Rect::new(96, 64, 32, 32));
        assert_eq!(GridUnit::FontCell.cell_rect(1, 1, 1), Rect::new(8, 8, 8, 8));
    }
}
