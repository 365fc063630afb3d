//! Texture store and sprite-sheet drawing.
//!
//! Sheets are horizontal strips, one file per `kind/clip` key, loaded once
//! at startup. A missing or unloadable sheet is logged and replaced by a
//! flat-colored placeholder rectangle at draw time, so the game always
//! runs even with no art on disk (and the logic tests never need SDL at
//! all).

use sdl2::image::LoadTexture;
use sdl2::pixels::Color;
use sdl2::rect::Rect;
use sdl2::render::{Canvas, Texture, TextureCreator};
use sdl2::video::{Window, WindowContext};
use std::collections::HashMap;

/// One horizontal-strip sheet: equal-width frames, single row.
pub struct SpriteSheet<'a> {
    texture: Texture<'a>,
    frame_width: u32,
    frame_height: u32,
    frames: u32,
}

/// Every sheet the game can ask for, with its frame count.
///
/// Keys double as file paths: `assets/sprites/<key>.png`.
const SHEET_MANIFEST: &[(&str, u32)] = &[
    ("player/idle", 5),
    ("player/run", 6),
    ("player/attack", 3),
    ("player/hit", 4),
    ("player/death", 4),
    ("tooth/idle", 8),
    ("tooth/run", 6),
    ("tooth/attack", 5),
    ("tooth/hit", 4),
    ("tooth/death", 4),
    ("seashell/idle", 1),
    ("seashell/attack", 6),
    ("seashell/hit", 4),
    ("seashell/death", 4),
    ("coin/idle", 8),
    ("spike/idle", 1),
    ("palm/idle", 4),
    ("terrain/tiles", 9),
    ("clouds/big", 1),
    ("clouds/small", 1),
    ("water/idle", 4),
];

pub struct Assets<'a> {
    sheets: HashMap<String, SpriteSheet<'a>>,
}

impl<'a> Assets<'a> {
    /// Loads every manifest sheet that exists on disk. Missing art is not
    /// an error; those keys fall back to placeholder rectangles.
    pub fn load(texture_creator: &'a TextureCreator<WindowContext>) -> Assets<'a> {
        let mut sheets = HashMap::new();
        for &(key, frames) in SHEET_MANIFEST {
            let path = format!("assets/sprites/{}.png", key);
            match texture_creator.load_texture(&path) {
                Ok(texture) => {
                    let query = texture.query();
                    sheets.insert(
                        key.to_string(),
                        SpriteSheet {
                            frame_width: query.width / frames.max(1),
                            frame_height: query.height,
                            frames,
                            texture,
                        },
                    );
                }
                Err(e) => {
                    eprintln!("Warning: no sheet for '{}' ({}), using placeholder", key, e);
                }
            }
        }
        println!("Loaded {} of {} sprite sheets", sheets.len(), SHEET_MANIFEST.len());
        Assets { sheets }
    }

    pub fn sheet(&self, key: &str) -> Option<&SpriteSheet<'a>> {
        self.sheets.get(key)
    }
}

/// Placeholder tint when a sheet is missing, keyed by entity kind.
fn placeholder_color(key: &str) -> Color {
    match key.split('/').next().unwrap_or("") {
        "player" => Color::RGB(66, 135, 245),
        "tooth" => Color::RGB(220, 68, 68),
        "seashell" => Color::RGB(170, 90, 200),
        "coin" => Color::RGB(240, 200, 60),
        "spike" => Color::RGB(110, 110, 110),
        "palm" => Color::RGB(60, 160, 90),
        "terrain" => Color::RGB(150, 105, 60),
        "clouds" => Color::RGB(235, 240, 250),
        "water" => Color::RGB(70, 130, 210),
        _ => Color::RGB(255, 0, 255),
    }
}

/// Draws frame `frame` of the sheet at `key` into `dest`, mirrored when
/// `flip` is set. Falls back to a flat rectangle when the sheet is
/// missing.
pub fn draw_frame(
    canvas: &mut Canvas<Window>,
    assets: &Assets,
    key: &str,
    frame: usize,
    dest: Rect,
    flip: bool,
) -> Result<(), String> {
    match assets.sheet(key) {
        Some(sheet) => {
            let index = (frame as u32) % sheet.frames.max(1);
            let src = Rect::new(
                (index * sheet.frame_width) as i32,
                0,
                sheet.frame_width,
                sheet.frame_height,
            );
            canvas.copy_ex(&sheet.texture, src, dest, 0.0, None, flip, false)
        }
        None => {
            canvas.set_draw_color(placeholder_color(key));
            canvas.fill_rect(dest)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manifest_keys_are_unique() {
        let mut seen = std::collections::HashSet::new();
        for &(key, frames) in SHEET_MANIFEST {
            assert!(seen.insert(key), "duplicate sheet key {}", key);
            assert!(frames > 0);
        }
    }

    #[test]
    fn placeholder_colors_distinguish_entity_kinds() {
        assert_ne!(placeholder_color("player/idle"), placeholder_color("tooth/idle"));
        assert_eq!(placeholder_color("garbage"), Color::RGB(255, 0, 255));
    }
}
