//! Kinematic body shared by the player and enemies.
//!
//! A `Body` is a sprite anchor plus a smaller collision box, vertical
//! velocity, facing, and ground contact. Gravity integration and tile
//! collision resolution live here so the player and enemies run the exact
//! same algorithm with different constants.
//!
//! Axis resolution is deliberately separated and ordered: vertical first,
//! then horizontal. Tiles are large relative to per-tick displacement, so
//! no swept/diagonal resolution is needed.

use crate::map::{TileKind, TileMap};
use sdl2::rect::Rect;

/// Horizontal facing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Facing {
    Left,
    Right,
}

/// Base art faces right; sprites with this facing are drawn mirrored.
/// One named convention so flip polarity cannot drift between entities.
pub const MIRRORED_FACING: Facing = Facing::Left;

impl Facing {
    pub fn flipped(self) -> Facing {
        match self {
            Facing::Left => Facing::Right,
            Facing::Right => Facing::Left,
        }
    }

    /// -1 for left, +1 for right.
    pub fn sign(self) -> i32 {
        match self {
            Facing::Left => -1,
            Facing::Right => 1,
        }
    }

    pub fn is_mirrored(self) -> bool {
        self == MIRRORED_FACING
    }
}

/// Position, collider, and vertical physics state for one entity.
#[derive(Debug, Clone)]
pub struct Body {
    /// Sprite top-left anchor in world pixels.
    pub x: i32,
    pub y: i32,
    /// Collision box offset from the anchor; the box is smaller than the
    /// visible sprite.
    pub collider_offset: (i32, i32),
    pub collider_size: (u32, u32),
    /// Vertical velocity in px/tick (positive = down).
    pub vy: i32,
    pub facing: Facing,
    pub on_ground: bool,
}

impl Body {
    pub fn new(x: i32, y: i32, collider_offset: (i32, i32), collider_size: (u32, u32)) -> Body {
        Body {
            x,
            y,
            collider_offset,
            collider_size,
            vy: 0,
            facing: Facing::Right,
            on_ground: false,
        }
    }

    /// Current collision box in world pixels.
    pub fn collider(&self) -> Rect {
        Rect::new(
            self.x + self.collider_offset.0,
            self.y + self.collider_offset.1,
            self.collider_size.0,
            self.collider_size.1,
        )
    }

    /// One gravity tick: accelerate toward terminal velocity and fall.
    pub fn apply_gravity(&mut self, gravity: i32, terminal_velocity: i32) {
        self.vy = (self.vy + gravity).min(terminal_velocity);
        self.y += self.vy;
    }

    /// Resolves vertical penetration against the first overlapping solid
    /// tile. Falling snaps the collider bottom to the tile top and grounds
    /// the body; rising snaps the collider top to the tile bottom. Either
    /// way vertical velocity is zeroed. Returns whether a tile was hit.
    pub fn resolve_vertical(&mut self, map: &TileMap) -> bool {
        if let Some(tile) = map.first_solid_overlap(&self.collider()) {
            if self.vy > 0 {
                // Falling: land on the tile top, exactly.
                self.y = tile.top() - self.collider_size.1 as i32 - self.collider_offset.1;
                self.vy = 0;
                self.on_ground = true;
            } else if self.vy < 0 {
                // Rising: bump the head on the tile bottom.
                self.y = tile.bottom() - self.collider_offset.1;
                self.vy = 0;
            }
            true
        } else {
            self.on_ground = false;
            false
        }
    }

    /// Resolves horizontal penetration after a move in `dir`: the leading
    /// collider edge snaps to the opposing tile edge. Returns whether a
    /// tile was hit (enemies reverse direction on true; the player just
    /// stops).
    pub fn resolve_horizontal(&mut self, map: &TileMap, dir: Facing) -> bool {
        if let Some(tile) = map.first_solid_overlap(&self.collider()) {
            match dir {
                Facing::Right => {
                    self.x = tile.left() - self.collider_size.0 as i32 - self.collider_offset.0;
                }
                Facing::Left => {
                    self.x = tile.right() - self.collider_offset.0;
                }
            }
            true
        } else {
            false
        }
    }

    /// Ledge probe for patrol movement: looks at the tile one `step` past
    /// the leading collider edge, at foot level. True when that column is
    /// outside the map or the tile there cannot support the body — the
    /// caller reverses direction instead of walking off.
    ///
    /// Only meaningful while grounded.
    pub fn ledge_ahead(&self, map: &TileMap, dir: Facing, step: i32) -> bool {
        let collider = self.collider();
        let probe_x = match dir {
            Facing::Right => collider.right() + step,
            Facing::Left => collider.left() - step - 1,
        };
        let foot_y = collider.bottom() + 1;

        let col = probe_x.div_euclid(map.tile_size());
        let row = foot_y / map.tile_size();

        if col < 0 || col >= map.width() as i32 {
            return true;
        }
        map.kind_at(col, row) != TileKind::Solid
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::map::TileMap;

    fn ground_map() -> TileMap {
        TileMap::parse(
            &[
                "     ", //
                "     ", //
                "22 22",
            ],
            64,
        )
        .unwrap()
    }

    fn body_at(x: i32, y: i32) -> Body {
        Body::new(x, y, (0, 0), (30, 30))
    }

    #[test]
    fn gravity_accelerates_and_caps_at_terminal_velocity() {
        let mut body = body_at(0, 0);
        body.apply_gravity(1, 15);
        assert_eq!(body.vy, 1);
        assert_eq!(body.y, 1);

        body.vy = 15;
        body.apply_gravity(1, 15);
        assert_eq!(body.vy, 15, "terminal velocity must cap the fall speed");
    }

    #[test]
    fn landing_snaps_bottom_to_tile_top_and_grounds() {
        let map = ground_map();
        // Ground top is at y = 128. Drop the body into it.
        let mut body = body_at(10, 101);
        body.vy = 5;
        body.y += body.vy; // simulate the gravity displacement
        assert!(body.collider().bottom() > 128);

        assert!(body.resolve_vertical(&map));
        assert_eq!(body.collider().bottom(), 128, "no penetration allowed");
        assert_eq!(body.vy, 0);
        assert!(body.on_ground);
    }

    #[test]
    fn rising_snaps_top_to_tile_bottom() {
        let map = TileMap::parse(&["222", "   "], 64).unwrap();
        let mut body = body_at(10, 70);
        body.vy = -10;
        body.y += body.vy; // head now inside the ceiling row
        assert!(body.resolve_vertical(&map));
        assert_eq!(body.collider().top(), 64);
        assert_eq!(body.vy, 0);
        assert!(!body.on_ground);
    }

    #[test]
    fn no_overlap_clears_ground_contact() {
        let map = ground_map();
        let mut body = body_at(10, 0);
        body.on_ground = true;
        assert!(!body.resolve_vertical(&map));
        assert!(!body.on_ground);
    }

    #[test]
    fn horizontal_hit_snaps_leading_edge() {
        let map = TileMap::parse(&[" 2"], 64).unwrap();
        let mut body = body_at(40, 10);
        // Moving right, collider right edge (70) is inside the wall at 64.
        assert!(body.resolve_horizontal(&map, Facing::Right));
        assert_eq!(body.collider().right(), 64);

        // Moving left into the same wall from the right side.
        let mut body = body_at(120, 10);
        assert!(body.resolve_horizontal(&map, Facing::Left));
        assert_eq!(body.collider().left(), 128);
    }

    #[test]
    fn ledge_probe_detects_gap_and_map_edge() {
        let map = ground_map(); // gap at column 2
        let mut body = body_at(97, 98); // standing near the right edge of column 1
        body.on_ground = true;

        assert!(
            body.ledge_ahead(&map, Facing::Right, 2),
            "gap ahead at foot level must read as a ledge"
        );
        assert!(
            !body.ledge_ahead(&map, Facing::Left, 2),
            "solid ground behind is not a ledge"
        );

        // Walking off the left edge of the map.
        let mut body = body_at(0, 98);
        body.on_ground = true;
        assert!(body.ledge_ahead(&map, Facing::Left, 2));
    }

    #[test]
    fn facing_mirror_convention() {
        assert!(Facing::Left.is_mirrored());
        assert!(!Facing::Right.is_mirrored());
        assert_eq!(Facing::Left.flipped(), Facing::Right);
        assert_eq!(Facing::Right.sign(), 1);
    }
}
