//! Render-only decorations: palm trees placed from the map's `D` cells.

use crate::animation::{AnimationSet, AnimationState, Animator};
use crate::assets::{draw_frame, Assets};
use sdl2::rect::Rect;
use sdl2::render::Canvas;
use sdl2::video::Window;

/// Visible sprite size in pixels; taller than one tile, anchored to the
/// spawn tile's floor.
pub const DECORATION_SPRITE_SIZE: (u32, u32) = (64, 128);

pub struct Decoration {
    x: i32,
    y: i32,
    animator: Animator,
    clips: AnimationSet,
}

impl Decoration {
    pub fn palm(col: i32, row: i32, tile_size: i32, clips: AnimationSet) -> Decoration {
        Decoration {
            x: col * tile_size,
            y: (row + 1) * tile_size - DECORATION_SPRITE_SIZE.1 as i32,
            animator: Animator::new(),
            clips,
        }
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
            DECORATION_SPRITE_SIZE.0,
            DECORATION_SPRITE_SIZE.1,
        );
        draw_frame(canvas, assets, "palm/idle", self.animator.frame(), dest, false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palm_is_anchored_to_the_tile_floor() {
        let palm = Decoration::palm(5, 10, 64, AnimationSet::palm_default());
        assert_eq!(palm.y + DECORATION_SPRITE_SIZE.1 as i32, 11 * 64);
        assert_eq!(palm.x, 5 * 64);
    }
}
