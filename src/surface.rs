// Module for owned RGB pixel buffers with an optional color key.
use crate::{
    common::{ColorRGB, PixelSize, BLACK},
    geometry::Rect,
};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Surface {
    width: u32,
    height: u32,
    pixels: Vec<ColorRGB>,
    color_key: Option<ColorRGB>,
}

/// Anything that can be placed on a target surface at a destination rectangle.
pub trait Drawable {
    fn draw_at(&self, target: &mut Surface, dest: Rect);
}

impl Surface {
    pub fn new(width: u32, height: u32) -> Self {
        Self::filled(width, height, BLACK)
    }

    pub fn filled(width: u32, height: u32, color: ColorRGB) -> Self {
        Self {
            width,
            height,
            pixels: vec![color; width as usize * height as usize],
            color_key: None,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn rect(&self) -> Rect {
        Rect::new(0, 0, self.width, self.height)
    }

    pub fn color_key(&self) -> Option<ColorRGB> {
        self.color_key
    }

    pub fn set_color_key(&mut self, key: Option<ColorRGB>) {
        self.color_key = key;
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<ColorRGB> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.pixels[(y * self.width + x) as usize])
    }

    pub fn pixels(&self) -> &[ColorRGB] {
        &self.pixels
    }

    /// Fill the part of `rect` that lies inside the surface.
    pub fn fill_rect(&mut self, rect: Rect, color: ColorRGB) {
        let Some(r) = rect.intersect(&self.rect()) else {
            return;
        };
        for y in r.y..r.bottom() {
            let row = y as usize * self.width as usize;
            self.pixels[row + r.x as usize..row + r.right() as usize].fill(color);
        }
    }

    pub fn fill(&mut self, color: ColorRGB) {
        self.pixels.fill(color);
    }

    /// Copy `src` (whole surface when `None`) to `dest`'s top-left corner on
    /// `target`, without rescaling. Pixels equal to the color key are skipped.
    /// `dest`'s size is ignored; the copy is clipped to both surfaces.
    pub fn blit(&self, src: Option<Rect>, target: &mut Surface, dest: Rect) {
        let Some(src) = src.unwrap_or_else(|| self.rect()).intersect(&self.rect()) else {
            return;
        };
        let placed = Rect::new(dest.x, dest.y, src.width, src.height);
        let Some(clip) = placed.intersect(&target.rect()) else {
            return;
        };
        let dx = src.x - placed.x;
        let dy = src.y - placed.y;
        for y in clip.y..clip.bottom() {
            let src_row = (y + dy) as usize * self.width as usize;
            let dst_row = y as usize * target.width as usize;
            for x in clip.x..clip.right() {
                let color = self.pixels[src_row + (x + dx) as usize];
                if Some(color) == self.color_key {
                    continue;
                }
                target.pixels[dst_row + x as usize] = color;
            }
        }
    }

    /// Nearest-neighbor reduction by an integer factor.
    pub fn downscale(&self, factor: PixelSize) -> Surface {
        let factor = factor.max(1);
        let width = self.width / factor;
        let height = self.height / factor;
        let mut out = Surface::new(width, height);
        for y in 0..height {
            for x in 0..width {
                out.pixels[(y * width + x) as usize] =
                    self.pixels[(y * factor * self.width + x * factor) as usize];
            }
        }
        out.color_key = self.color_key;
        out
    }

    /// RGBA bytes, row-major. Color-keyed pixels become fully transparent.
    pub fn to_rgba(&self) -> Vec<u8> {
        let mut data = Vec::with_capacity(self.pixels.len() * 4);
        for &color in &self.pixels {
            data.extend_from_slice(&color);
            data.push(if Some(color) == self.color_key { 0 } else { 255 });
        }
        data
    }
}

impl Drawable for Surface {
    fn draw_at(&self, target: &mut Surface, dest: Rect) {
        self.blit(None, target, dest);
    }
}
