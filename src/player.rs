//! The player: input-driven kinematic body with melee combat.

use crate::animation::{select_state, AnimationSet, AnimationState, Animator};
use crate::assets::{draw_frame, Assets};
use crate::combat::{apply_damage, Condition, DamageOutcome};
use crate::config::GameConfig;
use crate::map::TileMap;
use crate::physics::{Body, Facing};
use sdl2::rect::Rect;
use sdl2::render::Canvas;
use sdl2::video::Window;

/// Visible sprite size in pixels (the collider is much smaller).
pub const PLAYER_SPRITE_SIZE: (u32, u32) = (128, 80);

/// Attack clip frames during which the swing can land.
const ATTACK_HIT_FRAMES: std::ops::RangeInclusive<usize> = 1..=2;

/// Per-frame boolean key state for continuous movement.
#[derive(Debug, Clone, Copy, Default)]
pub struct Inputs {
    pub left: bool,
    pub right: bool,
}

pub struct Player {
    pub body: Body,
    pub health: i32,
    pub condition: Condition,
    animator: Animator,
    clips: AnimationSet,
    locomotion: AnimationState,
    speed: i32,
    jump_force: i32,
    attack_damage: i32,
    attack_reach: u32,
    /// Per-swing dealt-once guard; set when the current swing lands.
    swing_spent: bool,
    max_x: i32,
}

impl Player {
    pub fn new(cfg: &GameConfig, clips: AnimationSet, map_width_pixels: i32) -> Player {
        let body = Body::new(
            cfg.player_spawn.0,
            cfg.player_spawn.1,
            cfg.player_collider_offset,
            cfg.player_collider_size,
        );
        let max_x =
            map_width_pixels - cfg.player_collider_size.0 as i32 - cfg.player_collider_offset.0;
        Player {
            body,
            health: cfg.player_health,
            condition: Condition::Normal,
            animator: Animator::new(),
            clips,
            locomotion: AnimationState::Idle,
            speed: cfg.player_speed,
            jump_force: cfg.player_jump_force,
            attack_damage: cfg.player_attack_damage,
            attack_reach: cfg.player_attack_reach,
            swing_spent: false,
            max_x,
        }
    }

    pub fn collider(&self) -> Rect {
        self.body.collider()
    }

    /// Horizontal movement from the key-state table. Suppressed while in
    /// any action state. Clamps to the world edges, then resolves tile
    /// collision on the x axis.
    pub fn run(&mut self, inputs: &Inputs, map: &TileMap) {
        if self.condition.is_busy() {
            return;
        }

        let dir = if inputs.right {
            Some(Facing::Right)
        } else if inputs.left {
            Some(Facing::Left)
        } else {
            None
        };

        match dir {
            Some(facing) => {
                let new_x = (self.body.x + self.speed * facing.sign()).clamp(0, self.max_x);
                if new_x != self.body.x {
                    self.body.x = new_x;
                    self.body.resolve_horizontal(map, facing);
                }
                self.body.facing = facing;
                self.locomotion = AnimationState::Run;
            }
            None => {
                self.locomotion = AnimationState::Idle;
            }
        }
    }

    /// Jump on the discrete key event; grounded only, and not while in an
    /// action state.
    pub fn jump(&mut self) {
        if self.condition.is_busy() {
            return;
        }
        if self.body.on_ground {
            self.body.vy = self.jump_force;
            self.body.on_ground = false;
        }
    }

    /// Starts a melee swing. One swing at a time.
    pub fn attack(&mut self) {
        if self.condition.is_busy() {
            return;
        }
        self.condition = Condition::Attacking;
        self.swing_spent = false;
    }

    pub fn receive_damage(&mut self, amount: i32) -> DamageOutcome {
        apply_damage(&mut self.health, &mut self.condition, amount)
    }

    /// True only on the swing's active-hit frames, while the swing has not
    /// yet landed.
    pub fn can_deal_damage(&self) -> bool {
        self.condition == Condition::Attacking
            && self.animator.state() == AnimationState::Attack
            && ATTACK_HIT_FRAMES.contains(&self.animator.frame())
            && !self.swing_spent
    }

    /// Marks the current swing as having dealt its damage.
    pub fn mark_swing_dealt(&mut self) {
        self.swing_spent = true;
    }

    pub fn attack_damage(&self) -> i32 {
        self.attack_damage
    }

    /// World-space hitbox of the active swing, extending from the collider
    /// toward the facing direction.
    pub fn attack_hitbox(&self) -> Rect {
        let collider = self.collider();
        let x = match self.body.facing {
            Facing::Right => collider.right(),
            Facing::Left => collider.left() - self.attack_reach as i32,
        };
        Rect::new(x, collider.top(), self.attack_reach, collider.height())
    }

    /// Gravity, vertical collision, and animation. Runs every tick even
    /// while dead (the corpse still settles onto the ground).
    pub fn update(&mut self, cfg: &GameConfig, map: &TileMap) {
        self.body.apply_gravity(cfg.gravity, cfg.terminal_velocity);
        self.body.resolve_vertical(map);

        let desired = select_state(self.condition, self.locomotion);
        if let Some(finished) = self.animator.tick(&self.clips, desired) {
            match finished {
                AnimationState::Hit | AnimationState::Attack => {
                    self.condition = Condition::Normal;
                    self.locomotion = AnimationState::Idle;
                }
                _ => {}
            }
        }
    }

    /// Death clip finished; safe to respawn.
    pub fn death_animation_done(&self) -> bool {
        self.animator.kill_flag()
    }

    /// Recreates the player at the spawn point with full health. The rest
    /// of the level is untouched by design.
    pub fn respawn(&mut self, cfg: &GameConfig) {
        self.body.x = cfg.player_spawn.0;
        self.body.y = cfg.player_spawn.1;
        self.body.vy = 0;
        self.body.facing = Facing::Right;
        self.body.on_ground = false;
        self.health = cfg.player_health;
        self.condition = Condition::Normal;
        self.locomotion = AnimationState::Idle;
        self.animator = Animator::new();
        self.swing_spent = false;
    }

    pub fn render(
        &self,
        canvas: &mut Canvas<Window>,
        assets: &Assets,
        camera_offset_x: i32,
    ) -> Result<(), String> {
        let dest = Rect::new(
            self.body.x + camera_offset_x,
            self.body.y,
            PLAYER_SPRITE_SIZE.0,
            PLAYER_SPRITE_SIZE.1,
        );
        let key = format!("player/{}", self.animator.state().key());
        draw_frame(
            canvas,
            assets,
            &key,
            self.animator.frame(),
            dest,
            self.body.facing.is_mirrored(),
        )
    }
}
