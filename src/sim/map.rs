//! Binary occupancy grid
//!
//! The world is a fixed-resolution grid of wall/empty cells. `tile_size`
//! converts world coordinates to cell indices; everything outside the grid is
//! solid. The map is immutable after load, so the whole kernel can share it
//! by reference.

use glam::Vec2;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Map data rejected at load time
#[derive(Debug, Error, PartialEq)]
pub enum MapError {
    #[error("grid dimensions must be nonzero, got {width}x{height}")]
    BadDimensions { width: usize, height: usize },
    #[error("tile_size must be positive, got {0}")]
    BadTileSize(f32),
    #[error("expected {expected} tiles, got {found}")]
    TileCountMismatch { expected: usize, found: usize },
    #[error("tile ({x}, {y}) has non-binary value {value}")]
    NonBinaryTile { x: usize, y: usize, value: u8 },
}

/// The stock 16x16 arena
const DEFAULT_ARENA: [[u8; 16]; 16] = [
    [1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1],
    [1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1],
    [1, 0, 0, 0, 0, 0, 0, 1, 1, 0, 0, 0, 0, 0, 0, 1],
    [1, 0, 0, 0, 0, 0, 0, 1, 1, 0, 0, 0, 0, 0, 0, 1],
    [1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1],
    [1, 0, 1, 1, 0, 0, 0, 0, 0, 0, 0, 0, 1, 1, 0, 1],
    [1, 0, 1, 1, 0, 0, 0, 0, 0, 0, 0, 0, 1, 1, 0, 1],
    [1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1],
    [1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1],
    [1, 0, 0, 0, 0, 1, 1, 0, 0, 1, 1, 0, 0, 0, 0, 1],
    [1, 0, 0, 0, 0, 1, 1, 0, 0, 1, 1, 0, 0, 0, 0, 1],
    [1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1],
    [1, 0, 1, 1, 0, 0, 0, 0, 0, 0, 0, 0, 1, 1, 0, 1],
    [1, 0, 1, 1, 0, 0, 0, 0, 0, 0, 0, 0, 1, 1, 0, 1],
    [1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1],
    [1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1],
];

/// Static binary occupancy grid
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GridMap {
    width: usize,
    height: usize,
    tile_size: f32,
    /// Row-major, `true` = wall
    walls: Vec<bool>,
}

impl GridMap {
    /// Build a map from row-major tile values (0 = empty, 1 = wall).
    ///
    /// Non-binary values are a configuration error; the kernel never sees a
    /// partially-valid map.
    pub fn new(
        width: usize,
        height: usize,
        tile_size: f32,
        tiles: &[u8],
    ) -> Result<Self, MapError> {
        if width == 0 || height == 0 {
            return Err(MapError::BadDimensions { width, height });
        }
        if tile_size <= 0.0 {
            return Err(MapError::BadTileSize(tile_size));
        }
        if tiles.len() != width * height {
            return Err(MapError::TileCountMismatch {
                expected: width * height,
                found: tiles.len(),
            });
        }
        for (i, &value) in tiles.iter().enumerate() {
            if value > 1 {
                return Err(MapError::NonBinaryTile {
                    x: i % width,
                    y: i / width,
                    value,
                });
            }
        }
        Ok(Self {
            width,
            height,
            tile_size,
            walls: tiles.iter().map(|&t| t != 0).collect(),
        })
    }

    /// The fixed 16x16 layout with a 64-unit tile, as shipped.
    pub fn default_arena() -> Self {
        let flat: Vec<u8> = DEFAULT_ARENA.iter().flatten().copied().collect();
        Self::new(16, 16, 64.0, &flat).expect("stock arena is well-formed")
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    pub fn tile_size(&self) -> f32 {
        self.tile_size
    }

    /// Whether the cell at grid indices is a wall. Out of range is solid.
    #[inline]
    pub fn cell(&self, x: usize, y: usize) -> bool {
        if x >= self.width || y >= self.height {
            return true;
        }
        self.walls[y * self.width + x]
    }

    /// Whether a world-space point is inside a wall tile.
    ///
    /// Callable at arbitrary fractional coordinates; the sub-tile ray march
    /// leans on that. Anything outside the grid is solid.
    pub fn is_wall(&self, point: Vec2) -> bool {
        let x = (point.x / self.tile_size).floor();
        let y = (point.y / self.tile_size).floor();
        if x < 0.0 || y < 0.0 {
            return true;
        }
        self.cell(x as usize, y as usize)
    }

    /// World-space center of a cell, handy for spawn points and tests.
    pub fn tile_center(&self, x: usize, y: usize) -> Vec2 {
        Vec2::new(
            (x as f32 + 0.5) * self.tile_size,
            (y as f32 + 0.5) * self.tile_size,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_out_of_bounds_is_solid() {
        let map = GridMap::default_arena();
        assert!(map.is_wall(Vec2::new(-1.0, 100.0)));
        assert!(map.is_wall(Vec2::new(100.0, -0.001)));
        assert!(map.is_wall(Vec2::new(16.0 * 64.0, 100.0)));
        assert!(map.is_wall(Vec2::new(100.0, 1e9)));
    }

    #[test]
    fn test_border_and_interior() {
        let map = GridMap::default_arena();
        // Border tile (0, 0)
        assert!(map.is_wall(Vec2::new(10.0, 10.0)));
        // Open tile (3, 3), queried at a fractional point
        assert!(!map.is_wall(Vec2::new(3.5 * 64.0, 3.2 * 64.0)));
        // Interior block at (7, 2)
        assert!(map.is_wall(map.tile_center(7, 2)));
    }

    #[test]
    fn test_cell_edges_floor_down() {
        let map = GridMap::default_arena();
        // Exactly on the boundary between wall column 0 and open column 1:
        // the point belongs to column 1.
        assert!(!map.is_wall(Vec2::new(64.0, 96.0)));
        assert!(map.is_wall(Vec2::new(63.999, 96.0)));
    }

    #[test]
    fn test_rejects_non_binary_tiles() {
        let tiles = [1, 1, 1, 1, 2, 1, 1, 1, 1];
        assert_eq!(
            GridMap::new(3, 3, 64.0, &tiles),
            Err(MapError::NonBinaryTile {
                x: 1,
                y: 1,
                value: 2
            })
        );
    }

    #[test]
    fn test_rejects_bad_shapes() {
        assert_eq!(
            GridMap::new(0, 3, 64.0, &[]),
            Err(MapError::BadDimensions { width: 0, height: 3 })
        );
        assert_eq!(
            GridMap::new(2, 2, 64.0, &[0, 0, 0]),
            Err(MapError::TileCountMismatch {
                expected: 4,
                found: 3
            })
        );
        assert_eq!(
            GridMap::new(2, 2, 0.0, &[0, 0, 0, 0]),
            Err(MapError::BadTileSize(0.0))
        );
    }
}
