//! Game configuration
//!
//! Every tuning constant lives in an immutable `GameConfig` that is built
//! once at startup and passed by reference to constructors. Entities never
//! reach for globals; a test can build a config with whatever gravity or
//! aggro range it needs.

/// Screen resolution in pixels (logical size, pre window scaling).
pub const SCREEN_WIDTH: u32 = 1280;
pub const SCREEN_HEIGHT: u32 = 768;

pub const TITLE: &str = "Captain Clown Nose";

/// Fixed simulation/render tick rate.
pub const FPS: u32 = 60;

/// All gameplay tuning values.
///
/// `Default` gives the shipped game balance; tests override individual
/// fields (e.g. a zero-gravity world for aggro tests).
#[derive(Debug, Clone)]
pub struct GameConfig {
    /// Side length of one map tile in pixels.
    pub tile_size: i32,
    /// Downward acceleration applied every tick, in px/tick^2.
    pub gravity: i32,
    /// Falling speed cap, in px/tick.
    pub terminal_velocity: i32,

    // Player
    pub player_speed: i32,
    /// Upward impulse applied on jump (negative = up).
    pub player_jump_force: i32,
    /// Simulation ticks per animation frame.
    pub player_anim_ticks: u32,
    /// Collision box offset from the sprite's top-left anchor.
    pub player_collider_offset: (i32, i32),
    pub player_collider_size: (u32, u32),
    pub player_health: i32,
    pub player_attack_damage: i32,
    /// Reach of the player's melee swing hitbox, in pixels.
    pub player_attack_reach: u32,
    pub player_spawn: (i32, i32),

    // Enemies
    pub enemy_speed: i32,
    pub enemy_anim_ticks: u32,
    pub enemy_collider_size: (u32, u32),
    pub enemy_health: i32,
    pub enemy_contact_damage: i32,
    /// Horizontal distance at which an enemy starts chasing the player.
    pub aggro_range: i32,
    /// Horizontal distance at which an enemy swings instead of chasing.
    pub attack_range: i32,
    /// Ticks between enemy swings.
    pub attack_cooldown: u32,
    /// Maximum number of live patrolling enemies.
    pub enemy_cap: usize,
    /// Ticks between patrol-enemy spawn attempts.
    pub spawn_interval: u32,

    /// Contact damage dealt by a spike trap.
    pub trap_damage: i32,
    /// Score granted per collected coin.
    pub item_value: u32,

    // Level flow
    pub win_score: u32,
    /// Ticks between player death and respawn at the spawn point.
    pub respawn_delay: u32,
    /// Distance from the screen edge at which the camera starts scrolling.
    pub camera_margin: i32,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            tile_size: 64,
            gravity: 1,
            terminal_velocity: 15,

            player_speed: 5,
            player_jump_force: -22,
            player_anim_ticks: 7,
            player_collider_offset: (40, 8),
            player_collider_size: (46, 54),
            player_health: 100,
            player_attack_damage: 25,
            player_attack_reach: 48,
            player_spawn: (300, 600),

            enemy_speed: 2,
            enemy_anim_ticks: 10,
            enemy_collider_size: (30, 30),
            enemy_health: 50,
            enemy_contact_damage: 10,
            aggro_range: 300,
            attack_range: 96,
            attack_cooldown: 60,
            enemy_cap: 3,
            spawn_interval: 300,

            trap_damage: 20,
            item_value: 10,

            win_score: 30,
            respawn_delay: 180,
            camera_margin: 400,
        }
    }
}

/// The level layout, one character per tile.
///
/// Codes: `'1'..='9'` solid terrain variants, `'I'` coin, `'E'` patrol-enemy
/// spawn candidate, `'S'` fixed seashell enemy, `'T'` spike trap, `'D'`
/// decoration, `' '` empty. 40x12 tiles at 64 px = 2560x768 world.
pub const LEVEL_MAP: &[&str] = &[
    "                                        ",
    "                                        ",
    "                                        ",
    "                                        ",
    "                                        ",
    "                                        ",
    "                 III                    ",
    "           13 12222222222222222222222222",
    "          123 79 456                    ",
    "          789    456                    ",
    "     D T         456  E       E    S    ",
    "2222222222222222255522222222222222222222",
];
