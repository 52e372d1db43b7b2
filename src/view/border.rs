// Module for the screen border: a 40x25 font-cell layout framing the game
// viewport and the HUD panel boxes.
use crate::{
    common::{FONT_HEIGHT, FONT_WIDTH, SCREEN_HEIGHT, SCREEN_WIDTH},
    draw::{LayoutCell, EMPTY},
    tilecache::BORD_START,
};

pub const SCREEN_COLS: usize = (SCREEN_WIDTH / FONT_WIDTH) as usize;
pub const SCREEN_ROWS: usize = (SCREEN_HEIGHT / FONT_HEIGHT) as usize;

// Pieces of BORDER.DN1.
pub const BORD_FILL: LayoutCell = BORD_START as LayoutCell;
pub const BORD_TOP_LEFT: LayoutCell = BORD_FILL + 1;
pub const BORD_TOP: LayoutCell = BORD_FILL + 2;
pub const BORD_TOP_RIGHT: LayoutCell = BORD_FILL + 3;
pub const BORD_LEFT: LayoutCell = BORD_FILL + 4;
pub const BORD_RIGHT: LayoutCell = BORD_FILL + 5;
pub const BORD_BOTTOM_LEFT: LayoutCell = BORD_FILL + 6;
pub const BORD_BOTTOM: LayoutCell = BORD_FILL + 7;
pub const BORD_BOTTOM_RIGHT: LayoutCell = BORD_FILL + 8;
pub const BORD_MSGBOX_FILL: LayoutCell = BORD_FILL + 9;

/// Inner area of a framed box, in font cells (inclusive corners).
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct CellBox {
    pub x0: usize,
    pub y0: usize,
    pub x1: usize,
    pub y1: usize,
}

impl CellBox {
    pub const fn cols(&self) -> usize {
        self.x1 - self.x0 + 1
    }

    pub const fn rows(&self) -> usize {
        self.y1 - self.y0 + 1
    }
}

pub const VIEWPORT: CellBox = CellBox {
    x0: 2,
    y0: 2,
    x1: 27,
    y1: 21,
};
pub const SCORE_BOX: CellBox = CellBox {
    x0: 30,
    y0: 3,
    x1: 37,
    y1: 3,
};
pub const HEALTH_BOX: CellBox = CellBox {
    x0: 30,
    y0: 7,
    x1: 37,
    y1: 7,
};
pub const FIREPOWER_BOX: CellBox = CellBox {
    x0: 30,
    y0: 11,
    x1: 37,
    y1: 12,
};
pub const INVENTORY_BOX: CellBox = CellBox {
    x0: 30,
    y0: 16,
    x1: 37,
    y1: 19,
};

// Labels printed above each HUD box: (text, x, y).
pub const HUD_LABELS: [(&str, i32, i32); 4] = [
    ("SCORE", 30, 1),
    ("HEALTH", 30, 5),
    ("FIREPOWER", 29, 9),
    ("INVENTORY", 29, 14),
];

pub type ScreenLayout = [[LayoutCell; SCREEN_COLS]; SCREEN_ROWS];

/// Surround `inner` with frame pieces and clear it. Cells outside `layout` are ignored.
pub fn frame<R: AsMut<[LayoutCell]>>(layout: &mut [R], inner: CellBox, fill: LayoutCell) {
    let (left, top) = (inner.x0 as isize - 1, inner.y0 as isize - 1);
    let (right, bottom) = (inner.x1 as isize + 1, inner.y1 as isize + 1);
    for y in top..=bottom {
        for x in left..=right {
            let piece = match (x == left, x == right, y == top, y == bottom) {
                (true, _, true, _) => BORD_TOP_LEFT,
                (_, true, true, _) => BORD_TOP_RIGHT,
                (true, _, _, true) => BORD_BOTTOM_LEFT,
                (_, true, _, true) => BORD_BOTTOM_RIGHT,
                (_, _, true, _) => BORD_TOP,
                (_, _, _, true) => BORD_BOTTOM,
                (true, _, _, _) => BORD_LEFT,
                (_, true, _, _) => BORD_RIGHT,
                _ => fill,
            };
            if x < 0 || y < 0 {
                continue;
            }
            if let Some(cell) = layout
                .get_mut(y as usize)
                .and_then(|row| row.as_mut().get_mut(x as usize))
            {
                *cell = piece;
            }
        }
    }
}

/// The in-game screen: filler everywhere, the viewport and HUD boxes framed
/// and left empty for the backdrop and HUD to show through.
pub fn game_screen_layout() -> ScreenLayout {
    let mut layout = [[BORD_FILL; SCREEN_COLS]; SCREEN_ROWS];
    for inner in [VIEWPORT, SCORE_BOX, HEALTH_BOX, FIREPOWER_BOX, INVENTORY_BOX] {
        frame(&mut layout, inner, EMPTY);
    }
    layout
}
