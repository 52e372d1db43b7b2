// Module for the HUD panel: score digits, life bar, firepower and inventory.
use crate::{
    common::TileIdx,
    draw::{blit_tile, Environment},
    geometry::GridUnit,
    surface::Surface,
    tilecache::{NUMB_START, OBJ_GUN},
};

use super::border::{CellBox, FIREPOWER_BOX, HEALTH_BOX, INVENTORY_BOX, SCORE_BOX};

pub const SCORE_DIGITS: usize = 8;
pub const MAX_HEALTH: u32 = 8;
pub const MAX_FIREPOWER: u32 = 4;
pub const INVENTORY_SLOTS: usize = 8;

// NUMBERS.DN1 holds the digits 0-9 followed by the life bar pieces.
pub const NUMB_HEALTH_FULL: TileIdx = NUMB_START + 10;
pub const NUMB_HEALTH_EMPTY: TileIdx = NUMB_START + 11;

pub fn digit_tiles(score: u32) -> [TileIdx; SCORE_DIGITS] {
    let text = format!("{:0width$}", score % 100_000_000, width = SCORE_DIGITS);
    let mut tiles = [NUMB_START; SCORE_DIGITS];
    for (tile, c) in tiles.iter_mut().zip(text.bytes()) {
        *tile = NUMB_START + (c - b'0') as TileIdx;
    }
    tiles
}

pub fn draw_score(env: &mut Environment, score: u32) {
    for (i, tile) in digit_tiles(score).into_iter().enumerate() {
        env.blit_at(
            tile,
            SCORE_BOX.x0 as i32 + i as i32,
            SCORE_BOX.y0 as i32,
            GridUnit::FontCell,
        );
    }
}

/// Life bar: `MAX_HEALTH` pieces, the first `health` of them full.
pub fn draw_health(env: &mut Environment, health: u32) {
    let mut bar = env.scratch(MAX_HEALTH, 1, GridUnit::FontCell);
    for i in 0..MAX_HEALTH {
        let piece = if i < health {
            NUMB_HEALTH_FULL
        } else {
            NUMB_HEALTH_EMPTY
        };
        blit_tile(&env.tiles, piece, &mut bar, i as i32, 0, GridUnit::FontCell);
    }
    place(env, &bar, HEALTH_BOX);
}

/// One gun icon (a whole 16x16 tile) per firepower level.
pub fn draw_firepower(env: &mut Environment, firepower: u32) {
    let mut guns = env.scratch(MAX_FIREPOWER, 1, GridUnit::Tile);
    for i in 0..firepower.min(MAX_FIREPOWER) {
        blit_tile(&env.tiles, OBJ_GUN, &mut guns, i as i32, 0, GridUnit::Tile);
    }
    place(env, &guns, FIREPOWER_BOX);
}

/// Inventory items as whole tiles, four per row.
pub fn draw_inventory(env: &mut Environment, items: &[TileIdx]) {
    let cols = (INVENTORY_BOX.cols() / 2) as u32;
    let rows = (INVENTORY_BOX.rows() / 2) as u32;
    let mut panel = env.scratch(cols, rows, GridUnit::Tile);
    for (i, &item) in items.iter().take(INVENTORY_SLOTS).enumerate() {
        let (x, y) = (i as u32 % cols, i as u32 / cols);
        blit_tile(&env.tiles, item, &mut panel, x as i32, y as i32, GridUnit::Tile);
    }
    place(env, &panel, INVENTORY_BOX);
}

fn place(env: &mut Environment, surface: &Surface, b: CellBox) {
    env.draw_surface(surface, b.x0 as i32, b.y0 as i32, GridUnit::FontCell);
}
