//! Static hazards: spike balls placed from the map's `T` cells.
//!
//! A trap never moves and never dies. Contact damage goes through the same
//! hit-stun gate as enemy damage, so a trap cannot stun-lock the player.

use crate::assets::{draw_frame, Assets};
use sdl2::rect::Rect;
use sdl2::render::Canvas;
use sdl2::video::Window;

/// Visible sprite size in pixels, sitting on the spawn tile's floor.
pub const TRAP_SPRITE_SIZE: (u32, u32) = (48, 48);

pub struct Trap {
    x: i32,
    y: i32,
    damage: i32,
}

impl Trap {
    /// Builds a spike ball resting on the bottom of the tile at (col, row).
    pub fn spike(col: i32, row: i32, tile_size: i32, damage: i32) -> Trap {
        let pad = (tile_size - TRAP_SPRITE_SIZE.0 as i32) / 2;
        Trap {
            x: col * tile_size + pad,
            y: row * tile_size + (tile_size - TRAP_SPRITE_SIZE.1 as i32),
            damage,
        }
    }

    pub fn damage(&self) -> i32 {
        self.damage
    }

    /// Hurt box; slightly inset so grazing the sprite edge is forgiven.
    pub fn rect(&self) -> Rect {
        Rect::new(
            self.x + 4,
            self.y + 4,
            TRAP_SPRITE_SIZE.0 - 8,
            TRAP_SPRITE_SIZE.1 - 8,
        )
    }

    pub fn render(
        &self,
        canvas: &mut Canvas<Window>,
        assets: &Assets,
        camera_offset_x: i32,
    ) -> Result<(), String> {
        let dest = Rect::new(
            self.x + camera_offset_x,
            self.y,
            TRAP_SPRITE_SIZE.0,
            TRAP_SPRITE_SIZE.1,
        );
        draw_frame(canvas, assets, "spike/idle", 0, dest, false)
    }
}
