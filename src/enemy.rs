//! Enemies: the patrolling tooth and the emplaced seashell.
//!
//! Both kinds share one struct; behavior splits on `EnemyKind` inside
//! `update`. A tooth patrols between walls and ledges, chases the player
//! inside its aggro range, and swings inside its attack range. A seashell
//! never moves but swings at anything that walks into range. The game
//! controller owns damage application; enemies only report whether their
//! swing can land this tick.

use crate::animation::{select_state, AnimationSet, AnimationState, Animator};
use crate::assets::{draw_frame, Assets};
use crate::combat::{apply_damage, Condition, DamageOutcome};
use crate::config::GameConfig;
use crate::map::TileMap;
use crate::physics::{Body, Facing};
use sdl2::rect::Rect;
use sdl2::render::Canvas;
use sdl2::video::Window;

/// Visible sprite size in pixels.
pub const ENEMY_SPRITE_SIZE: (u32, u32) = (64, 64);

/// Collider offset centering the box at the sprite's feet.
const ENEMY_COLLIDER_OFFSET: (i32, i32) = (17, 34);

/// Reach of an enemy swing hitbox, in pixels.
const ENEMY_ATTACK_REACH: u32 = 40;

/// Ledge-probe lookahead, in pixels past the leading collider edge.
const LEDGE_PROBE_STEP: i32 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnemyKind {
    /// Grounded patroller with aggro and chase behavior.
    Tooth,
    /// Stationary emplacement; attacks in range, never moves.
    Seashell,
}

pub struct Enemy {
    pub kind: EnemyKind,
    pub body: Body,
    pub health: i32,
    pub condition: Condition,
    animator: Animator,
    clips: AnimationSet,
    locomotion: AnimationState,
    speed: i32,
    contact_damage: i32,
    aggro_range: i32,
    attack_range: i32,
    attack_cooldown: u32,
    /// Ticks left before the next swing may start.
    cooldown: u32,
    swing_spent: bool,
}

impl Enemy {
    pub fn tooth(cfg: &GameConfig, clips: AnimationSet, x: i32, y: i32) -> Enemy {
        Enemy::new(EnemyKind::Tooth, cfg, clips, x, y)
    }

    pub fn seashell(cfg: &GameConfig, clips: AnimationSet, x: i32, y: i32) -> Enemy {
        Enemy::new(EnemyKind::Seashell, cfg, clips, x, y)
    }

    fn new(kind: EnemyKind, cfg: &GameConfig, clips: AnimationSet, x: i32, y: i32) -> Enemy {
        Enemy {
            kind,
            body: Body::new(x, y, ENEMY_COLLIDER_OFFSET, cfg.enemy_collider_size),
            health: cfg.enemy_health,
            condition: Condition::Normal,
            animator: Animator::new(),
            clips,
            locomotion: AnimationState::Idle,
            speed: cfg.enemy_speed,
            contact_damage: cfg.enemy_contact_damage,
            aggro_range: cfg.aggro_range,
            attack_range: cfg.attack_range,
            attack_cooldown: cfg.attack_cooldown,
            cooldown: 0,
            swing_spent: false,
        }
    }

    pub fn collider(&self) -> Rect {
        self.body.collider()
    }

    pub fn contact_damage(&self) -> i32 {
        self.contact_damage
    }

    pub fn cooldown(&self) -> u32 {
        self.cooldown
    }

    pub fn receive_damage(&mut self, amount: i32) -> DamageOutcome {
        apply_damage(&mut self.health, &mut self.condition, amount)
    }

    /// Death clip finished; the controller drops the enemy.
    pub fn should_despawn(&self) -> bool {
        self.animator.kill_flag()
    }

    /// Swing clip frames during which the swing can land. The wind-up and
    /// recovery frames are harmless.
    fn hit_frames(&self) -> std::ops::RangeInclusive<usize> {
        match self.kind {
            EnemyKind::Tooth => 1..=3,
            EnemyKind::Seashell => 2..=4,
        }
    }

    /// True only on the swing's active-hit frames, once per swing.
    pub fn can_deal_damage(&self) -> bool {
        self.condition == Condition::Attacking
            && self.animator.state() == AnimationState::Attack
            && self.hit_frames().contains(&self.animator.frame())
            && !self.swing_spent
    }

    pub fn mark_swing_dealt(&mut self) {
        self.swing_spent = true;
    }

    /// World-space hitbox of the active swing.
    pub fn attack_hitbox(&self) -> Rect {
        let collider = self.collider();
        let x = match self.body.facing {
            Facing::Right => collider.right(),
            Facing::Left => collider.left() - ENEMY_ATTACK_REACH as i32,
        };
        Rect::new(x, collider.top(), ENEMY_ATTACK_REACH, collider.height())
    }

    /// One simulation tick. `target_x` is the player collider's center x,
    /// or `None` while the player is dead (enemies fall back to patrol).
    pub fn update(&mut self, cfg: &GameConfig, map: &TileMap, target_x: Option<i32>) {
        self.cooldown = self.cooldown.saturating_sub(1);

        self.body.apply_gravity(cfg.gravity, cfg.terminal_velocity);
        self.body.resolve_vertical(map);

        if !self.condition.is_busy() {
            self.locomotion = AnimationState::Idle;
            match self.kind {
                EnemyKind::Tooth => self.tooth_behavior(map, target_x),
                EnemyKind::Seashell => self.seashell_behavior(target_x),
            }
        }

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

    fn center_x(&self) -> i32 {
        let collider = self.collider();
        collider.left() + collider.width() as i32 / 2
    }

    fn start_swing(&mut self, dx: i32) {
        self.body.facing = if dx < 0 { Facing::Left } else { Facing::Right };
        self.condition = Condition::Attacking;
        self.swing_spent = false;
        self.cooldown = self.attack_cooldown;
    }

    fn tooth_behavior(&mut self, map: &TileMap, target_x: Option<i32>) {
        if let Some(tx) = target_x {
            let dx = tx - self.center_x();
            if dx.abs() < self.attack_range {
                if self.cooldown == 0 {
                    self.start_swing(dx);
                }
                return;
            }
            if dx.abs() < self.aggro_range {
                let facing = if dx < 0 { Facing::Left } else { Facing::Right };
                self.body.facing = facing;
                // Chase, but never off a cliff.
                if self.body.on_ground && self.body.ledge_ahead(map, facing, LEDGE_PROBE_STEP) {
                    return;
                }
                self.step(map, facing);
                return;
            }
        }
        self.patrol(map);
    }

    /// Default back-and-forth walk: reverse on walls and ledges.
    fn patrol(&mut self, map: &TileMap) {
        let facing = self.body.facing;
        if self.body.on_ground && self.body.ledge_ahead(map, facing, LEDGE_PROBE_STEP) {
            self.body.facing = facing.flipped();
            return;
        }
        if self.step(map, facing) {
            self.body.facing = facing.flipped();
        }
    }

    /// Moves one speed step in `facing`; returns true when a wall stopped
    /// the move.
    fn step(&mut self, map: &TileMap, facing: Facing) -> bool {
        self.body.x += self.speed * facing.sign();
        self.locomotion = AnimationState::Run;
        self.body.resolve_horizontal(map, facing)
    }

    fn seashell_behavior(&mut self, target_x: Option<i32>) {
        if let Some(tx) = target_x {
            let dx = tx - self.center_x();
            if dx.abs() < self.attack_range && self.cooldown == 0 {
                self.start_swing(dx);
            }
        }
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
            ENEMY_SPRITE_SIZE.0,
            ENEMY_SPRITE_SIZE.1,
        );
        let prefix = match self.kind {
            EnemyKind::Tooth => "tooth",
            EnemyKind::Seashell => "seashell",
        };
        let key = format!("{}/{}", prefix, self.animator.state().key());
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::map::TileMap;

    fn flat_map() -> TileMap {
        TileMap::parse(
            &[
                "                ",
                "                ",
                "2222222222222222",
            ],
            64,
        )
        .unwrap()
    }

    fn settled_tooth(cfg: &GameConfig, map: &TileMap, x: i32) -> Enemy {
        let mut enemy = Enemy::tooth(cfg, AnimationSet::tooth_default(10), x, 60);
        for _ in 0..30 {
            enemy.update(cfg, map, None);
        }
        assert!(enemy.body.on_ground);
        enemy
    }

    #[test]
    fn target_in_attack_range_starts_a_swing_and_arms_cooldown() {
        let cfg = GameConfig::default();
        let map = flat_map();
        let mut enemy = settled_tooth(&cfg, &map, 200);

        // Player center 50 px away: inside attack range, cooldown idle.
        let target = enemy.center_x() + 50;
        enemy.update(&cfg, &map, Some(target));

        assert_eq!(enemy.condition, Condition::Attacking);
        assert_eq!(enemy.cooldown(), cfg.attack_cooldown);
        assert_eq!(enemy.body.facing, Facing::Right);
    }

    #[test]
    fn range_thresholds_are_exclusive() {
        let cfg = GameConfig::default();
        let map = flat_map();

        // Exactly at attack range: still a chase, not a swing.
        let mut enemy = settled_tooth(&cfg, &map, 200);
        let x = enemy.body.x;
        let target = enemy.center_x() + cfg.attack_range;
        enemy.update(&cfg, &map, Some(target));
        assert_eq!(enemy.condition, Condition::Normal);
        assert_eq!(enemy.body.x, x + cfg.enemy_speed, "chases the boundary target");

        // Exactly at aggro range: plain patrol, no aggro.
        let mut enemy = settled_tooth(&cfg, &map, 200);
        enemy.body.facing = Facing::Left;
        let x = enemy.body.x;
        let target = enemy.center_x() + cfg.aggro_range;
        enemy.update(&cfg, &map, Some(target));
        assert_eq!(enemy.body.x, x - cfg.enemy_speed, "patrols away from the target");

        // Same boundary rule for the seashell's swing.
        let mut shell = Enemy::seashell(&cfg, AnimationSet::seashell_default(10), 300, 60);
        for _ in 0..30 {
            shell.update(&cfg, &map, None);
        }
        shell.update(&cfg, &map, Some(shell.center_x() + cfg.attack_range));
        assert_eq!(shell.condition, Condition::Normal);
    }

    #[test]
    fn cooldown_blocks_back_to_back_swings() {
        let cfg = GameConfig::default();
        let map = flat_map();
        let mut enemy = settled_tooth(&cfg, &map, 200);
        let target = enemy.center_x() - 50;

        enemy.update(&cfg, &map, Some(target));
        assert_eq!(enemy.condition, Condition::Attacking);

        // Play out the swing (5 frames at 10 ticks).
        for _ in 0..5 * 10 {
            enemy.update(&cfg, &map, Some(target));
        }
        assert_eq!(enemy.condition, Condition::Normal);
        assert!(enemy.cooldown() > 0, "cooldown outlasts the swing clip");

        enemy.update(&cfg, &map, Some(target));
        assert_eq!(
            enemy.condition,
            Condition::Normal,
            "no new swing until the cooldown expires"
        );
    }

    #[test]
    fn swing_window_covers_only_the_active_frames() {
        let cfg = GameConfig::default();
        let map = flat_map();
        let mut enemy = settled_tooth(&cfg, &map, 200);
        let target = enemy.center_x() + 30;

        enemy.update(&cfg, &map, Some(target));
        assert!(!enemy.can_deal_damage(), "frame 0 is wind-up");

        for _ in 0..10 {
            enemy.update(&cfg, &map, Some(target));
        }
        assert!(enemy.can_deal_damage());

        enemy.mark_swing_dealt();
        assert!(!enemy.can_deal_damage(), "one hit per swing");
    }

    #[test]
    fn target_in_aggro_range_is_chased() {
        let cfg = GameConfig::default();
        let map = flat_map();
        let mut enemy = settled_tooth(&cfg, &map, 400);
        let x = enemy.body.x;

        // 200 px away: inside aggro (300), outside attack range (96).
        let target = enemy.center_x() - 200;
        enemy.update(&cfg, &map, Some(target));

        assert_eq!(enemy.body.facing, Facing::Left);
        assert_eq!(enemy.body.x, x - cfg.enemy_speed);
    }

    #[test]
    fn target_out_of_aggro_range_leaves_patrol_untouched() {
        let cfg = GameConfig::default();
        let map = flat_map();
        let mut enemy = settled_tooth(&cfg, &map, 400);
        enemy.body.facing = Facing::Right;
        let x = enemy.body.x;

        let target = enemy.center_x() + cfg.aggro_range + 100;
        enemy.update(&cfg, &map, Some(target));

        assert_eq!(enemy.body.facing, Facing::Right, "no aggro past the range");
        assert_eq!(enemy.body.x, x + cfg.enemy_speed);
    }

    #[test]
    fn patrol_reverses_at_a_ledge() {
        let cfg = GameConfig::default();
        let map = TileMap::parse(
            &[
                "     ",
                "     ",
                "222  ",
            ],
            64,
        )
        .unwrap();
        let mut enemy = Enemy::tooth(&cfg, AnimationSet::tooth_default(10), 100, 60);
        enemy.body.facing = Facing::Right;

        // Walk until the ledge probe fires; the enemy must never leave the
        // platform.
        for _ in 0..200 {
            enemy.update(&cfg, &map, None);
            assert!(enemy.collider().right() <= 192);
        }
        assert_eq!(enemy.body.facing, Facing::Left, "reversed at the edge");
    }

    #[test]
    fn chase_stops_at_a_ledge_instead_of_falling() {
        let cfg = GameConfig::default();
        let map = TileMap::parse(
            &[
                "     ",
                "     ",
                "222  ",
            ],
            64,
        )
        .unwrap();
        let mut enemy = Enemy::tooth(&cfg, AnimationSet::tooth_default(10), 100, 60);

        // Target past the ledge, inside aggro range.
        for _ in 0..200 {
            enemy.update(&cfg, &map, Some(280));
            assert!(enemy.collider().right() <= 192);
        }
        assert_eq!(enemy.body.facing, Facing::Right, "still facing the target");
    }

    #[test]
    fn seashell_never_moves() {
        let cfg = GameConfig::default();
        let map = flat_map();
        let mut shell = Enemy::seashell(&cfg, AnimationSet::seashell_default(10), 300, 60);
        for _ in 0..30 {
            shell.update(&cfg, &map, None);
        }
        let x = shell.body.x;

        // A target inside aggro but outside attack range provokes nothing.
        shell.update(&cfg, &map, Some(x + 200));
        assert_eq!(shell.body.x, x);
        assert_eq!(shell.condition, Condition::Normal);

        // In attack range it swings, still without moving.
        shell.update(&cfg, &map, Some(x + 40));
        assert_eq!(shell.body.x, x);
        assert_eq!(shell.condition, Condition::Attacking);
    }

    #[test]
    fn dead_enemy_despawns_after_the_death_clip() {
        let cfg = GameConfig::default();
        let map = flat_map();
        let mut enemy = settled_tooth(&cfg, &map, 200);

        enemy.health = 10;
        let outcome = enemy.receive_damage(25);
        assert!(outcome.killed);
        assert!(!enemy.should_despawn(), "death clip plays out first");

        for _ in 0..4 * 10 {
            enemy.update(&cfg, &map, Some(enemy.center_x() + 10));
        }
        assert!(enemy.should_despawn());
        assert_eq!(
            enemy.condition,
            Condition::Dead,
            "a nearby target cannot revive behavior"
        );
    }

    #[test]
    fn dead_player_target_reverts_enemies_to_patrol() {
        let cfg = GameConfig::default();
        let map = flat_map();
        let mut enemy = settled_tooth(&cfg, &map, 400);
        enemy.body.facing = Facing::Right;
        let x = enemy.body.x;

        enemy.update(&cfg, &map, None);
        assert_eq!(enemy.body.x, x + cfg.enemy_speed);
        assert_eq!(enemy.condition, Condition::Normal);
    }
}
