//! Collectible items: coins placed from the map's `I` cells.
//!
//! Items are static. They animate in place and vanish the tick the player
//! collider touches them; the controller owns the score.

use crate::animation::{AnimationSet, AnimationState, Animator};
use crate::assets::{draw_frame, Assets};
use sdl2::rect::Rect;
use sdl2::render::Canvas;
use sdl2::video::Window;

/// Visible sprite size in pixels, centered inside the spawn tile.
pub const ITEM_SPRITE_SIZE: (u32, u32) = (32, 32);

pub struct Item {
    x: i32,
    y: i32,
    value: u32,
    animator: Animator,
    clips: AnimationSet,
}

impl Item {
    /// Builds a coin centered in the tile at (col, row).
    pub fn coin(col: i32, row: i32, tile_size: i32, value: u32, clips: AnimationSet) -> Item {
        let pad = (tile_size - ITEM_SPRITE_SIZE.0 as i32) / 2;
        Item {
            x: col * tile_size + pad,
            y: row * tile_size + pad,
            value,
            animator: Animator::new(),
            clips,
        }
    }

    /// Score granted when collected.
    pub fn value(&self) -> u32 {
        self.value
    }

    /// Pickup box; the whole sprite is collectible.
    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, ITEM_SPRITE_SIZE.0, ITEM_SPRITE_SIZE.1)
    }

    pub fn update(&mut self) {
        self.animator.tick(&self.clips, AnimationState::Idle);
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
            ITEM_SPRITE_SIZE.0,
            ITEM_SPRITE_SIZE.1,
        );
        draw_frame(canvas, assets, "coin/idle", self.animator.frame(), dest, false)
    }
}
