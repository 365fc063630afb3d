//! Sky, clouds, water, and terrain rendering.
//!
//! The backdrop is screen-space: a flat sky fill, cloud strips drifting
//! left at independent speeds with wrap-around at the strip width, and
//! animated water strips along the screen bottom. Terrain tiles come from
//! one nine-frame strip indexed by the map code (`'1'` is frame 0), drawn
//! with the camera offset; only on-screen columns are touched.

use crate::animation::{AnimationSet, AnimationState, Animator};
use crate::assets::{draw_frame, Assets};
use crate::config::{SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::map::{TileKind, TileMap};
use sdl2::pixels::Color;
use sdl2::rect::Rect;
use sdl2::render::Canvas;
use sdl2::video::Window;

const SKY: Color = Color::RGB(120, 180, 235);

/// Width of one repeating cloud strip.
const STRIP_WIDTH: i32 = SCREEN_WIDTH as i32;

const WATER_TILE: u32 = 64;
const WATER_STRIPS: usize = 3;
const WATER_STRIP_HEIGHT: u32 = 24;

/// One cloud band: a full-width strip drifting left at its own speed.
struct CloudLayer {
    key: &'static str,
    /// Drift in px/tick.
    speed: i32,
    y: i32,
    height: u32,
    offset: i32,
}

pub struct Background {
    clouds: Vec<CloudLayer>,
    water_animator: Animator,
    water_clips: AnimationSet,
}

impl Background {
    pub fn new() -> Background {
        Background {
            clouds: vec![
                CloudLayer {
                    key: "clouds/big",
                    speed: 1,
                    y: 40,
                    height: 120,
                    offset: 0,
                },
                CloudLayer {
                    key: "clouds/small",
                    speed: 2,
                    y: 190,
                    height: 64,
                    offset: 320,
                },
                CloudLayer {
                    key: "clouds/small",
                    speed: 3,
                    y: 280,
                    height: 64,
                    offset: 840,
                },
            ],
            water_animator: Animator::new(),
            water_clips: AnimationSet::water_default(),
        }
    }

    /// One tick of cloud drift and water animation.
    pub fn update(&mut self) {
        for layer in &mut self.clouds {
            layer.offset = wrap_offset(layer.offset + layer.speed, STRIP_WIDTH);
        }
        self.water_animator
            .tick(&self.water_clips, AnimationState::Idle);
    }

    pub fn render(&self, canvas: &mut Canvas<Window>, assets: &Assets) -> Result<(), String> {
        canvas.set_draw_color(SKY);
        canvas.clear();

        for layer in &self.clouds {
            for x in strip_positions(layer.offset, STRIP_WIDTH) {
                let dest = Rect::new(x, layer.y, STRIP_WIDTH as u32, layer.height);
                draw_frame(canvas, assets, layer.key, 0, dest, false)?;
            }
        }

        // Water along the screen bottom; strips stagger the frame so the
        // rows do not animate in lockstep.
        let frames = self.water_clips.clip(AnimationState::Idle).frames;
        for strip in 0..WATER_STRIPS {
            let frame = (self.water_animator.frame() + strip) % frames.max(1);
            let y = SCREEN_HEIGHT as i32
                - (WATER_STRIPS as i32 - strip as i32) * WATER_STRIP_HEIGHT as i32;
            let mut x = 0;
            while x < SCREEN_WIDTH as i32 {
                let dest = Rect::new(x, y, WATER_TILE, WATER_STRIP_HEIGHT);
                draw_frame(canvas, assets, "water/idle", frame, dest, false)?;
                x += WATER_TILE as i32;
            }
        }
        Ok(())
    }
}

impl Default for Background {
    fn default() -> Self {
        Background::new()
    }
}

/// Keeps a drifting offset inside `0..width`.
fn wrap_offset(offset: i32, width: i32) -> i32 {
    offset.rem_euclid(width)
}

/// The two x positions that tile one strip seamlessly across the screen.
fn strip_positions(offset: i32, width: i32) -> [i32; 2] {
    [-offset, width - offset]
}

/// Draws every solid tile visible at the current camera offset.
pub fn draw_terrain(
    canvas: &mut Canvas<Window>,
    assets: &Assets,
    map: &TileMap,
    camera_offset_x: i32,
) -> Result<(), String> {
    let ts = map.tile_size();
    let first_col = (-camera_offset_x / ts).max(0);
    let last_col = ((-camera_offset_x + SCREEN_WIDTH as i32) / ts + 1).min(map.width() as i32);

    for row in 0..map.height() as i32 {
        for col in first_col..last_col {
            let code = map.code_at(col, row);
            if !TileKind::from_code(code).is_solid() {
                continue;
            }
            let frame = code as usize - '1' as usize;
            let dest = Rect::new(
                col * ts + camera_offset_x,
                row * ts,
                ts as u32,
                ts as u32,
            );
            draw_frame(canvas, assets, "terrain/tiles", frame, dest, false)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrap_offset_stays_inside_the_strip() {
        assert_eq!(wrap_offset(0, 1280), 0);
        assert_eq!(wrap_offset(1280, 1280), 0);
        assert_eq!(wrap_offset(1283, 1280), 3);
        assert_eq!(wrap_offset(-1, 1280), 1279);
    }

    #[test]
    fn cloud_strips_always_tile_the_screen() {
        let mut background = Background::new();
        // Longer than any layer's wrap period.
        for _ in 0..STRIP_WIDTH * 2 + 3 {
            background.update();
        }

        for layer in &background.clouds {
            assert!(layer.offset >= 0 && layer.offset < STRIP_WIDTH);
            let [first, second] = strip_positions(layer.offset, STRIP_WIDTH);
            assert_eq!(first + STRIP_WIDTH, second, "strips stay contiguous");
            assert!(first <= 0, "first strip covers the left edge");
            assert!(
                second + STRIP_WIDTH >= SCREEN_WIDTH as i32,
                "second strip covers the right edge"
            );
        }
    }

    #[test]
    fn layers_drift_at_independent_speeds() {
        let mut background = Background::new();
        let start: Vec<i32> = background.clouds.iter().map(|l| l.offset).collect();
        for _ in 0..10 {
            background.update();
        }
        for (layer, start) in background.clouds.iter().zip(start) {
            assert_eq!(layer.offset, wrap_offset(start + layer.speed * 10, STRIP_WIDTH));
        }
    }

    #[test]
    fn water_frame_stays_inside_its_clip() {
        let mut background = Background::new();
        let frames = background.water_clips.clip(AnimationState::Idle).frames;
        for _ in 0..100 {
            background.update();
            assert!(background.water_animator.frame() < frames);
        }
    }
}
