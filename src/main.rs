//! A side-scrolling platformer: run, jump, and swing through a tile
//! level, collecting coins while teeth and seashells push back.

mod animation;
mod assets;
mod background;
mod combat;
mod config;
mod decoration;
mod enemy;
mod game;
mod item;
mod map;
mod menu;
mod physics;
mod player;
mod text;
mod trap;

use crate::assets::Assets;
use crate::config::{GameConfig, FPS, SCREEN_HEIGHT, SCREEN_WIDTH, TITLE};
use crate::game::{Game, GameOutcome};
use crate::menu::{Menu, MenuChoice};
use crate::player::Inputs;
use sdl2::event::Event;
use sdl2::keyboard::{Keycode, Scancode};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Screen {
    Menu,
    Playing,
}

fn main() -> Result<(), String> {
    let sdl_context = sdl2::init()?;
    let video_subsystem = sdl_context.video()?;
    let _image_context = sdl2::image::init(sdl2::image::InitFlag::PNG)?;

    let window = video_subsystem
        .window(TITLE, SCREEN_WIDTH, SCREEN_HEIGHT)
        .position_centered()
        .build()
        .map_err(|e| e.to_string())?;

    let mut canvas = window.into_canvas().build().map_err(|e| e.to_string())?;
    canvas
        .set_logical_size(SCREEN_WIDTH, SCREEN_HEIGHT)
        .map_err(|e| e.to_string())?;

    let texture_creator = canvas.texture_creator();
    let assets = Assets::load(&texture_creator);
    let mut event_pump = sdl_context.event_pump()?;

    let mut screen = Screen::Menu;
    let mut menu = Menu::new();
    let mut game = Game::new(GameConfig::default())?;

    'running: loop {
        for event in event_pump.poll_iter() {
            match (screen, &event) {
                (_, Event::Quit { .. }) => break 'running,

                (
                    Screen::Menu,
                    Event::KeyDown {
                        keycode: Some(key), ..
                    },
                ) => match *key {
                    Keycode::Escape => break 'running,
                    Keycode::Up | Keycode::W => menu.select_prev(),
                    Keycode::Down | Keycode::S => menu.select_next(),
                    Keycode::Return | Keycode::Space => match menu.choice() {
                        MenuChoice::Start => {
                            game = Game::new(GameConfig::default())?;
                            screen = Screen::Playing;
                        }
                        MenuChoice::Quit => break 'running,
                    },
                    _ => {}
                },

                (
                    Screen::Playing,
                    Event::KeyDown {
                        keycode: Some(key),
                        repeat: false,
                        ..
                    },
                ) => match *key {
                    Keycode::Escape => screen = Screen::Menu,
                    Keycode::Space | Keycode::W | Keycode::Up => game.jump(),
                    Keycode::Z => game.attack(),
                    _ => {}
                },

                _ => {}
            }
        }

        match screen {
            Screen::Menu => {
                menu.render(&mut canvas)?;
            }
            Screen::Playing => {
                let keyboard = event_pump.keyboard_state();
                let inputs = Inputs {
                    left: keyboard.is_scancode_pressed(Scancode::A)
                        || keyboard.is_scancode_pressed(Scancode::Left),
                    right: keyboard.is_scancode_pressed(Scancode::D)
                        || keyboard.is_scancode_pressed(Scancode::Right),
                };

                if game.update(&inputs) == GameOutcome::BackToMenu {
                    screen = Screen::Menu;
                }
                game.render(&mut canvas, &assets)?;
            }
        }

        canvas.present();
        std::thread::sleep(std::time::Duration::new(0, 1_000_000_000u32 / FPS));
    }

    Ok(())
}
