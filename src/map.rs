//! Tile map: a fixed grid of single-character cell codes.
//!
//! The map is parsed once from a string literal and never mutated. Codes
//! partition into solid terrain, decoration, item spawns, enemy spawns,
//! trap spawns, and empty space; only solid terrain participates in
//! collision. All queries are bounds-safe.

use sdl2::rect::Rect;

/// Classification of a single map cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TileKind {
    /// Terrain the physics system collides with.
    Solid,
    /// Collectible item spawn (coin).
    Item,
    /// Spawn candidate for a patrolling enemy.
    EnemySpawn,
    /// Fixed seashell enemy emplacement.
    SeashellSpawn,
    /// Static hazard spawn (spike ball).
    Trap,
    /// Render-only decoration.
    Decoration,
    Empty,
}

impl TileKind {
    pub fn from_code(code: char) -> TileKind {
        match code {
            '1'..='9' => TileKind::Solid,
            'I' => TileKind::Item,
            'E' => TileKind::EnemySpawn,
            'S' => TileKind::SeashellSpawn,
            'T' => TileKind::Trap,
            'D' => TileKind::Decoration,
            _ => TileKind::Empty,
        }
    }

    pub fn is_solid(self) -> bool {
        self == TileKind::Solid
    }
}

/// Immutable character-coded tile grid.
#[derive(Debug)]
pub struct TileMap {
    cells: Vec<Vec<char>>,
    width: usize,
    height: usize,
    tile_size: i32,
}

impl TileMap {
    /// Parses a map from row literals.
    ///
    /// Fails if the map is empty or any row length differs from the first
    /// (the collision sweep assumes a rectangular grid).
    pub fn parse(rows: &[&str], tile_size: i32) -> Result<TileMap, String> {
        if rows.is_empty() || rows[0].is_empty() {
            return Err("tile map must have at least one non-empty row".to_string());
        }
        let width = rows[0].chars().count();
        let mut cells = Vec::with_capacity(rows.len());
        for (i, row) in rows.iter().enumerate() {
            let chars: Vec<char> = row.chars().collect();
            if chars.len() != width {
                return Err(format!(
                    "tile map row {} has length {}, expected {}",
                    i,
                    chars.len(),
                    width
                ));
            }
            cells.push(chars);
        }
        Ok(TileMap {
            height: cells.len(),
            cells,
            width,
            tile_size,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn tile_size(&self) -> i32 {
        self.tile_size
    }

    /// Total map width in pixels.
    pub fn width_pixels(&self) -> i32 {
        self.width as i32 * self.tile_size
    }

    /// Raw cell code; out-of-bounds reads as empty space.
    pub fn code_at(&self, col: i32, row: i32) -> char {
        if col < 0 || row < 0 || col >= self.width as i32 || row >= self.height as i32 {
            return ' ';
        }
        self.cells[row as usize][col as usize]
    }

    pub fn kind_at(&self, col: i32, row: i32) -> TileKind {
        TileKind::from_code(self.code_at(col, row))
    }

    /// Pixel rectangle of the tile at (col, row).
    pub fn tile_rect(&self, col: i32, row: i32) -> Rect {
        Rect::new(
            col * self.tile_size,
            row * self.tile_size,
            self.tile_size as u32,
            self.tile_size as u32,
        )
    }

    /// Finds the first solid tile overlapping `rect`, scanning the covered
    /// tile span in row-major order. The span is inclusive of partially
    /// overlapped tiles and clamped to the map bounds.
    pub fn first_solid_overlap(&self, rect: &Rect) -> Option<Rect> {
        let ts = self.tile_size;
        let start_col = (rect.left() / ts).max(0);
        let end_col = ((rect.right() + ts - 1) / ts).min(self.width as i32);
        let start_row = (rect.top() / ts).max(0);
        let end_row = ((rect.bottom() + ts - 1) / ts).min(self.height as i32);

        for row in start_row..end_row {
            for col in start_col..end_col {
                if !self.kind_at(col, row).is_solid() {
                    continue;
                }
                let tile = self.tile_rect(col, row);
                if rect.has_intersection(tile) {
                    return Some(tile);
                }
            }
        }
        None
    }

    /// Iterates every cell as (col, row, kind), for level setup scans.
    pub fn cells(&self) -> impl Iterator<Item = (i32, i32, TileKind)> + '_ {
        self.cells.iter().enumerate().flat_map(|(row, line)| {
            line.iter()
                .enumerate()
                .map(move |(col, &c)| (col as i32, row as i32, TileKind::from_code(c)))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ROWS: &[&str] = &[
        "    ",
        " I  ",
        "2252",
    ];

    #[test]
    fn parse_accepts_rectangular_map() {
        let map = TileMap::parse(ROWS, 64).unwrap();
        assert_eq!(map.width(), 4);
        assert_eq!(map.height(), 3);
        assert_eq!(map.width_pixels(), 256);
    }

    #[test]
    fn parse_rejects_ragged_rows() {
        let err = TileMap::parse(&["  ", "   "], 64).unwrap_err();
        assert!(err.contains("row 1"));
    }

    #[test]
    fn parse_rejects_empty_map() {
        assert!(TileMap::parse(&[], 64).is_err());
        assert!(TileMap::parse(&[""], 64).is_err());
    }

    #[test]
    fn out_of_bounds_queries_read_empty() {
        let map = TileMap::parse(ROWS, 64).unwrap();
        assert_eq!(map.kind_at(-1, 0), TileKind::Empty);
        assert_eq!(map.kind_at(0, 99), TileKind::Empty);
        assert_eq!(map.code_at(99, -5), ' ');
    }

    #[test]
    fn code_classification_partitions() {
        assert_eq!(TileKind::from_code('5'), TileKind::Solid);
        assert_eq!(TileKind::from_code('I'), TileKind::Item);
        assert_eq!(TileKind::from_code('E'), TileKind::EnemySpawn);
        assert_eq!(TileKind::from_code('S'), TileKind::SeashellSpawn);
        assert_eq!(TileKind::from_code('T'), TileKind::Trap);
        assert_eq!(TileKind::from_code('D'), TileKind::Decoration);
        assert_eq!(TileKind::from_code(' '), TileKind::Empty);
        assert!(!TileKind::Item.is_solid());
    }

    #[test]
    fn solid_overlap_skips_non_solid_codes() {
        let map = TileMap::parse(ROWS, 64).unwrap();
        // Rect over the item cell only: no solid overlap.
        let over_item = Rect::new(70, 70, 20, 20);
        assert!(map.first_solid_overlap(&over_item).is_none());
        // Rect dipping into the ground row.
        let into_ground = Rect::new(70, 120, 20, 20);
        let tile = map.first_solid_overlap(&into_ground).unwrap();
        assert_eq!(tile, Rect::new(64, 128, 64, 64));
    }

    #[test]
    fn solid_overlap_is_row_major_first_hit() {
        let map = TileMap::parse(&["22", "22"], 64).unwrap();
        let rect = Rect::new(32, 32, 64, 64);
        assert_eq!(
            map.first_solid_overlap(&rect).unwrap(),
            Rect::new(0, 0, 64, 64)
        );
    }
}
