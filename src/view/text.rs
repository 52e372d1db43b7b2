// Module for drawing text with the font sheets, one glyph per font cell.
use crate::{
    common::TileIdx,
    draw::blit_tile,
    geometry::GridUnit,
    surface::Surface,
    tilecache::{TileCache, FONT_START},
};

// FONT1.DN1 and FONT2.DN1 together hold consecutive glyphs starting at ' '.
pub const FONT_FIRST_CHAR: u8 = b' ';
pub const FONT_GLYPHS: usize = 100;

pub fn glyph_index(c: char) -> Option<TileIdx> {
    let code = u32::from(c).checked_sub(FONT_FIRST_CHAR as u32)? as usize;
    (code < FONT_GLYPHS).then_some(FONT_START + code)
}

/// Width in cells of the longest line, and number of lines.
pub fn text_size(text: &str) -> (u32, u32) {
    let cols = text.lines().map(|l| l.chars().count()).max().unwrap_or(0);
    let rows = text.lines().count();
    (cols as u32, rows as u32)
}

/// Draw `text` from font cell (`x`, `y`); each line starts a new row.
/// Characters without a glyph leave their cell untouched.
pub fn draw_text(tiles: &TileCache, target: &mut Surface, text: &str, x: i32, y: i32) {
    for (row, line) in text.lines().enumerate() {
        for (col, c) in line.chars().enumerate() {
            if c == ' ' {
                continue;
            }
            if let Some(index) = glyph_index(c) {
                blit_tile(
                    tiles,
                    index,
                    target,
                    x + col as i32,
                    y + row as i32,
                    GridUnit::FontCell,
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn glyphs_follow_ascii() {
        assert_eq!(glyph_index(' '), Some(FONT_START));
        assert_eq!(glyph_index('A'), Some(FONT_START + 33));
        assert_eq!(glyph_index('0'), Some(FONT_START + 16));
        assert_eq!(glyph_index('z'), Some(FONT_START + 90));
        assert_eq!(glyph_index('\n'), None);
        assert_eq!(glyph_index('é'), None);
        assert_eq!(glyph_index(char::from(0x20 + 99)), Some(FONT_START + 99));
        assert_eq!(glyph_index(char::from(0x20 + 100)), None);
    }

    #[test]
    fn multi_line_size() {
        assert_eq!(text_size("HELLO\nDUKE NUKEM\n"), (10, 2));
        assert_eq!(text_size(""), (0, 0));
    }
}
