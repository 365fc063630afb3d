//! The level controller: owns every entity, the camera, the score, and
//! the run/respawn/win flow.
//!
//! One `update` per tick drives the whole simulation; `render` is a
//! separate pass so all game logic stays testable without a window.

use crate::animation::AnimationSet;
use crate::assets::Assets;
use crate::background::{draw_terrain, Background};
use crate::config::{GameConfig, LEVEL_MAP, SCREEN_WIDTH};
use crate::decoration::Decoration;
use crate::enemy::{Enemy, EnemyKind};
use crate::item::Item;
use crate::map::{TileKind, TileMap};
use crate::player::{Inputs, Player};
use crate::text::{draw_text, draw_text_centered};
use crate::trap::Trap;
use sdl2::pixels::Color;
use sdl2::render::Canvas;
use sdl2::video::Window;

/// Ticks the win banner stays up before returning to the menu.
const WIN_BANNER_TICKS: u32 = 180;

/// What the main loop should do after a tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Continue,
    BackToMenu,
}

/// Level flow state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Running,
    /// Player died; counts down to the respawn.
    Respawning(u32),
    /// Score target reached; counts down to the menu.
    Won(u32),
}

/// Horizontal scroll that keeps the player inside the screen margins.
pub struct Camera {
    offset_x: i32,
    margin: i32,
    /// Most negative offset: world right edge flush with the screen.
    min_offset: i32,
}

impl Camera {
    pub fn new(margin: i32, world_width: i32, screen_width: i32) -> Camera {
        Camera {
            offset_x: 0,
            margin,
            min_offset: (screen_width - world_width).min(0),
        }
    }

    /// Applied to world x to get screen x.
    pub fn offset_x(&self) -> i32 {
        self.offset_x
    }

    /// Scrolls so `focus_x` (world space) stays at least `margin` pixels
    /// from either screen edge, clamped to the world bounds.
    pub fn follow(&mut self, focus_x: i32, screen_width: i32) {
        let screen_x = focus_x + self.offset_x;
        if screen_x > screen_width - self.margin {
            self.offset_x = screen_width - self.margin - focus_x;
        } else if screen_x < self.margin {
            self.offset_x = self.margin - focus_x;
        }
        self.offset_x = self.offset_x.clamp(self.min_offset, 0);
    }
}

pub struct Game {
    pub cfg: GameConfig,
    pub map: TileMap,
    pub player: Player,
    pub enemies: Vec<Enemy>,
    pub items: Vec<Item>,
    pub traps: Vec<Trap>,
    pub decorations: Vec<Decoration>,
    pub score: u32,
    pub mode: Mode,
    camera: Camera,
    background: Background,
    /// Tooth spawn candidates from the map's `E` cells, in pixel coords.
    spawn_points: Vec<(i32, i32)>,
    next_spawn: usize,
    spawn_timer: u32,
    tooth_clips: AnimationSet,
}

impl Game {
    pub fn new(cfg: GameConfig) -> Result<Game, String> {
        let map = TileMap::parse(LEVEL_MAP, cfg.tile_size)?;

        let player_clips = AnimationSet::load_or(
            "assets/config/player_animations.json",
            AnimationSet::player_default(cfg.player_anim_ticks),
        );
        let tooth_clips = AnimationSet::load_or(
            "assets/config/tooth_animations.json",
            AnimationSet::tooth_default(cfg.enemy_anim_ticks),
        );
        let seashell_clips = AnimationSet::load_or(
            "assets/config/seashell_animations.json",
            AnimationSet::seashell_default(cfg.enemy_anim_ticks),
        );

        let mut enemies = Vec::new();
        let mut items = Vec::new();
        let mut traps = Vec::new();
        let mut decorations = Vec::new();
        let mut spawn_points = Vec::new();

        for (col, row, kind) in map.cells() {
            let x = col * cfg.tile_size;
            let y = row * cfg.tile_size;
            match kind {
                TileKind::Item => {
                    items.push(Item::coin(
                        col,
                        row,
                        cfg.tile_size,
                        cfg.item_value,
                        AnimationSet::coin_default(),
                    ));
                }
                TileKind::SeashellSpawn => {
                    enemies.push(Enemy::seashell(&cfg, seashell_clips.clone(), x, y));
                }
                TileKind::EnemySpawn => spawn_points.push((x, y)),
                TileKind::Trap => traps.push(Trap::spike(col, row, cfg.tile_size, cfg.trap_damage)),
                TileKind::Decoration => {
                    decorations.push(Decoration::palm(
                        col,
                        row,
                        cfg.tile_size,
                        AnimationSet::palm_default(),
                    ));
                }
                TileKind::Solid | TileKind::Empty => {}
            }
        }

        let player = Player::new(&cfg, player_clips, map.width_pixels());
        let camera = Camera::new(cfg.camera_margin, map.width_pixels(), SCREEN_WIDTH as i32);
        let spawn_timer = cfg.spawn_interval;

        println!(
            "Level loaded: {} coins, {} traps, {} spawn points",
            items.len(),
            traps.len(),
            spawn_points.len()
        );

        Ok(Game {
            cfg,
            map,
            player,
            enemies,
            items,
            traps,
            decorations,
            score: 0,
            mode: Mode::Running,
            camera,
            background: Background::new(),
            spawn_points,
            next_spawn: 0,
            spawn_timer,
            tooth_clips,
        })
    }

    /// Jump key event; ignored outside normal play.
    pub fn jump(&mut self) {
        if self.mode == Mode::Running {
            self.player.jump();
        }
    }

    /// Attack key event; ignored outside normal play.
    pub fn attack(&mut self) {
        if self.mode == Mode::Running {
            self.player.attack();
        }
    }

    /// Advances the whole level by one tick.
    pub fn update(&mut self, inputs: &Inputs) -> GameOutcome {
        match self.mode {
            // Simulation stops; the banner counts down to the menu.
            Mode::Won(ticks) => {
                if ticks == 0 {
                    return GameOutcome::BackToMenu;
                }
                self.mode = Mode::Won(ticks - 1);
                GameOutcome::Continue
            }
            // The world stays frozen until the countdown ends.
            Mode::Respawning(ticks) => {
                if ticks == 0 {
                    self.player.respawn(&self.cfg);
                    self.mode = Mode::Running;
                } else {
                    self.mode = Mode::Respawning(ticks - 1);
                }
                GameOutcome::Continue
            }
            Mode::Running => {
                self.tick_world(inputs);
                self.resolve_combat();
                self.collect_items();

                if self.player.condition.is_dead() && self.player.death_animation_done() {
                    self.mode = Mode::Respawning(self.cfg.respawn_delay);
                } else if self.score >= self.cfg.win_score {
                    self.mode = Mode::Won(WIN_BANNER_TICKS);
                }
                GameOutcome::Continue
            }
        }
    }

    /// Movement, physics, spawning, and animation for everything.
    fn tick_world(&mut self, inputs: &Inputs) {
        self.background.update();
        self.player.run(inputs, &self.map);
        self.player.update(&self.cfg, &self.map);

        self.spawn_tooth_if_due();

        let target_x = if self.player.condition.is_dead() {
            None
        } else {
            let collider = self.player.collider();
            Some(collider.left() + collider.width() as i32 / 2)
        };
        for enemy in &mut self.enemies {
            enemy.update(&self.cfg, &self.map, target_x);
        }
        self.enemies.retain(|enemy| !enemy.should_despawn());

        for item in &mut self.items {
            item.update();
        }
        for decoration in &mut self.decorations {
            decoration.update();
        }

        self.camera.follow(self.player.body.x, SCREEN_WIDTH as i32);
    }

    /// Spawns a tooth at the next candidate cell on a fixed interval,
    /// round-robin, capped at the configured live count.
    fn spawn_tooth_if_due(&mut self) {
        if self.spawn_points.is_empty() {
            return;
        }
        if self.spawn_timer > 0 {
            self.spawn_timer -= 1;
            return;
        }
        self.spawn_timer = self.cfg.spawn_interval;

        let live_tooths = self
            .enemies
            .iter()
            .filter(|e| e.kind == EnemyKind::Tooth && !e.condition.is_dead())
            .count();
        if live_tooths >= self.cfg.enemy_cap {
            return;
        }

        let (x, y) = self.spawn_points[self.next_spawn];
        self.next_spawn = (self.next_spawn + 1) % self.spawn_points.len();
        self.enemies
            .push(Enemy::tooth(&self.cfg, self.tooth_clips.clone(), x, y));
    }

    /// Player swings, enemy swings, body contact, and traps, all through
    /// the same damage gate (hit-stun doubles as invulnerability).
    fn resolve_combat(&mut self) {
        let player_collider = self.player.collider();

        if self.player.can_deal_damage() {
            let hitbox = self.player.attack_hitbox();
            let damage = self.player.attack_damage();
            let mut landed = false;
            for enemy in &mut self.enemies {
                if enemy.condition.is_dead() {
                    continue;
                }
                if hitbox.has_intersection(enemy.collider())
                    && enemy.receive_damage(damage).applied
                {
                    landed = true;
                }
            }
            if landed {
                self.player.mark_swing_dealt();
            }
        }

        if !self.player.condition.is_dead() {
            for enemy in &mut self.enemies {
                if enemy.condition.is_dead() {
                    continue;
                }
                if enemy.can_deal_damage()
                    && enemy.attack_hitbox().has_intersection(player_collider)
                {
                    if self.player.receive_damage(enemy.contact_damage()).applied {
                        enemy.mark_swing_dealt();
                    }
                } else if enemy.collider().has_intersection(player_collider) {
                    self.player.receive_damage(enemy.contact_damage());
                }
            }

            for trap in &self.traps {
                if trap.rect().has_intersection(player_collider) {
                    self.player.receive_damage(trap.damage());
                }
            }
        }
    }

    fn collect_items(&mut self) {
        if self.player.condition.is_dead() {
            return;
        }
        let player_collider = self.player.collider();
        let before = self.items.len();
        let mut gained = 0;
        self.items.retain(|item| {
            if item.rect().has_intersection(player_collider) {
                gained += item.value();
                false
            } else {
                true
            }
        });
        if self.items.len() != before {
            self.score += gained;
            println!("Score: {}/{}", self.score, self.cfg.win_score);
        }
    }

    pub fn render(&self, canvas: &mut Canvas<Window>, assets: &Assets) -> Result<(), String> {
        self.background.render(canvas, assets)?;
        let offset = self.camera.offset_x();
        draw_terrain(canvas, assets, &self.map, offset)?;

        for decoration in &self.decorations {
            decoration.render(canvas, assets, offset)?;
        }
        for trap in &self.traps {
            trap.render(canvas, assets, offset)?;
        }
        for item in &self.items {
            item.render(canvas, assets, offset)?;
        }
        for enemy in &self.enemies {
            enemy.render(canvas, assets, offset)?;
        }
        self.player.render(canvas, assets, offset)?;

        self.render_hud(canvas)?;
        Ok(())
    }

    fn render_hud(&self, canvas: &mut Canvas<Window>) -> Result<(), String> {
        draw_text(
            canvas,
            &format!("HEALTH: {}", self.player.health),
            20,
            20,
            Color::RGB(255, 255, 255),
            3,
        )?;
        draw_text(
            canvas,
            &format!("SCORE: {}/{}", self.score, self.cfg.win_score),
            20,
            50,
            Color::RGB(255, 255, 255),
            3,
        )?;

        if let Mode::Won(_) = self.mode {
            draw_text_centered(
                canvas,
                "YOU WIN!",
                SCREEN_WIDTH as i32 / 2,
                300,
                Color::RGB(255, 220, 80),
                8,
            )?;
        }
        Ok(())
    }
}
