// Module for message boxes and menus: framed text composed on a transient
// surface, then centered on the screen.
use crate::{
    draw::{draw_layout, scratch_surface, Environment, LayoutCell},
    geometry::GridUnit,
    surface::Surface,
    tilecache::TileCache,
};

use super::{
    border::{frame, CellBox, BORD_MSGBOX_FILL, SCREEN_COLS, SCREEN_ROWS},
    text::{draw_text, text_size},
};

pub const MENU_CURSOR: char = '>';

/// Layout of a box whose inside is `cols` x `rows` cells, frame included.
pub fn msgbox_layout(cols: usize, rows: usize) -> Vec<Vec<LayoutCell>> {
    let mut layout = vec![vec![BORD_MSGBOX_FILL; cols + 2]; rows + 2];
    if cols > 0 && rows > 0 {
        let inner = CellBox {
            x0: 1,
            y0: 1,
            x1: cols,
            y1: rows,
        };
        frame(&mut layout, inner, BORD_MSGBOX_FILL);
    }
    layout
}

pub fn build_msgbox(tiles: &TileCache, text: &str) -> Surface {
    let (cols, rows) = text_size(text);
    let layout = msgbox_layout(cols as usize, rows as usize);
    let mut surface = scratch_surface(
        cols + 2,
        rows + 2,
        GridUnit::FontCell,
        tiles.pixel_size(),
    );
    draw_layout(tiles, &layout, &mut surface, 0, 0, GridUnit::FontCell);
    draw_text(tiles, &mut surface, text, 1, 1);
    surface
}

/// Top-left font cell that centers a box of `cols` x `rows` cells.
pub fn centered_origin(cols: u32, rows: u32) -> (i32, i32) {
    (
        (SCREEN_COLS as i32 - cols as i32) / 2,
        (SCREEN_ROWS as i32 - rows as i32) / 2,
    )
}

pub fn draw_msgbox(env: &mut Environment, text: &str) {
    let msgbox = build_msgbox(&env.tiles, text);
    let (cols, rows) = text_size(text);
    let (x, y) = centered_origin(cols + 2, rows + 2);
    env.draw_surface(&msgbox, x, y, GridUnit::FontCell);
}

/// Menu text: title, a blank line, then one line per entry with the cursor
/// in front of the selected one.
pub fn menu_text(title: &str, entries: &[&str], selected: usize) -> String {
    let mut text = format!("{}\n\n", title);
    for (i, entry) in entries.iter().enumerate() {
        let cursor = if i == selected { MENU_CURSOR } else { ' ' };
        text.push_str(&format!("{} {}\n", cursor, entry));
    }
    text
}

pub fn draw_menu(env: &mut Environment, title: &str, entries: &[&str], selected: usize) {
    draw_msgbox(env, &menu_text(title, entries, selected));
}
