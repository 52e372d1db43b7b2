pub mod border;
pub mod hud;
pub mod msgbox;
pub mod text;

use crate::{
    common::{TileIdx, BLACK},
    draw::Environment,
    geometry::GridUnit,
    surface::Surface,
};

use border::{game_screen_layout, HUD_LABELS, VIEWPORT};

/// Everything shown on one in-game frame.
#[derive(Default)]
pub struct Scene {
    pub backdrop: Option<Surface>,
    pub score: u32,
    pub health: u32,
    pub firepower: u32,
    pub inventory: Vec<TileIdx>,
    pub message: Option<String>,
}

/// Compose a frame back to front: backdrop, border, HUD, message box.
pub fn draw_scene(env: &mut Environment, scene: &Scene) {
    env.clear(BLACK);
    if let Some(backdrop) = &scene.backdrop {
        env.draw_surface(
            backdrop,
            VIEWPORT.x0 as i32,
            VIEWPORT.y0 as i32,
            GridUnit::FontCell,
        );
    }
    env.draw_layout(&game_screen_layout(), 0, 0, GridUnit::FontCell);
    for (label, x, y) in HUD_LABELS {
        text::draw_text(&env.tiles, &mut env.framebuffer, label, x, y);
    }
    hud::draw_score(env, scene.score);
    hud::draw_health(env, scene.health);
    hud::draw_firepower(env, scene.firepower);
    hud::draw_inventory(env, &scene.inventory);
    if let Some(message) = &scene.message {
        msgbox::draw_msgbox(env, message);
    }
}
