//! Title menu: a two-item start screen drawn with the bitmap font.

use crate::config::{SCREEN_HEIGHT, SCREEN_WIDTH, TITLE};
use crate::text::{draw_text_centered, text_width};
use sdl2::pixels::Color;
use sdl2::rect::Rect;
use sdl2::render::Canvas;
use sdl2::video::Window;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Start,
    Quit,
}

const ITEMS: [(&str, MenuChoice); 2] = [("START", MenuChoice::Start), ("QUIT", MenuChoice::Quit)];

pub struct Menu {
    selected: usize,
}

impl Menu {
    pub fn new() -> Menu {
        Menu { selected: 0 }
    }

    pub fn select_next(&mut self) {
        self.selected = (self.selected + 1) % ITEMS.len();
    }

    pub fn select_prev(&mut self) {
        self.selected = (self.selected + ITEMS.len() - 1) % ITEMS.len();
    }

    /// The item confirm would activate.
    pub fn choice(&self) -> MenuChoice {
        ITEMS[self.selected].1
    }

    pub fn render(&self, canvas: &mut Canvas<Window>) -> Result<(), String> {
        canvas.set_draw_color(Color::RGB(25, 40, 65));
        canvas.clear();

        let center = SCREEN_WIDTH as i32 / 2;
        draw_text_centered(canvas, TITLE, center, 180, Color::RGB(255, 220, 80), 6)?;

        let base_y = SCREEN_HEIGHT as i32 / 2;
        for (i, (label, _)) in ITEMS.iter().enumerate() {
            let y = base_y + i as i32 * 70;
            let selected = i == self.selected;
            if selected {
                let width = text_width(label, 4) + 40;
                canvas.set_draw_color(Color::RGB(80, 100, 140));
                canvas.fill_rect(Rect::new(center - width as i32 / 2, y - 10, width, 48))?;
            }
            let color = if selected {
                Color::RGB(255, 255, 255)
            } else {
                Color::RGB(160, 160, 170)
            };
            draw_text_centered(canvas, label, center, y, color, 4)?;
        }

        draw_text_centered(
            canvas,
            "A-D MOVE  SPACE JUMP  Z ATTACK",
            center,
            SCREEN_HEIGHT as i32 - 80,
            Color::RGB(120, 140, 170),
            2,
        )?;
        Ok(())
    }
}

impl Default for Menu {
    fn default() -> Self {
        Menu::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selection_wraps_both_ways() {
        let mut menu = Menu::new();
        assert_eq!(menu.choice(), MenuChoice::Start);

        menu.select_next();
        assert_eq!(menu.choice(), MenuChoice::Quit);
        menu.select_next();
        assert_eq!(menu.choice(), MenuChoice::Start);

        menu.select_prev();
        assert_eq!(menu.choice(), MenuChoice::Quit);
    }
}
