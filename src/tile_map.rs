use crate::chain::{EntityChain, GridPosition};
use crate::config::GridSize;
use crate::error::Result;

/// Label of a single grid cell.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Default)]
pub enum Tile {
    #[default]
    Empty,
    Body,
    Head,
    Wall,
    Food,
}

/// Row-major grid of tile labels.
///
/// Derived from the chain and food every tick; never the source of truth.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct TileMap {
    size: GridSize,
    tiles: Vec<Tile>,
}

impl TileMap {
    /// Returns a map with only the static walls stamped.
    pub fn walls(size: GridSize) -> Result<Self> {
        let mut tiles = Vec::new();
        tiles.try_reserve_exact(size.total_cells())?;
        tiles.resize(size.total_cells(), Tile::Empty);

        let mut map = Self { size, tiles };
        for row in 0..i32::from(size.rows) {
            for column in 0..i32::from(size.columns) {
                let position = GridPosition { row, column };
                if size.is_wall(position) {
                    map.stamp(position, Tile::Wall);
                }
            }
        }

        Ok(map)
    }

    /// Stamps walls, then every chain node as body, then the head, then food.
    pub fn derive(chain: &EntityChain, food: GridPosition, size: GridSize) -> Result<Self> {
        let mut map = Self::walls(size)?;

        for node in chain.nodes() {
            map.stamp(*node, Tile::Body);
        }
        if let Some(head) = chain.head() {
            map.stamp(head, Tile::Head);
        }
        map.stamp(food, Tile::Food);

        Ok(map)
    }

    #[must_use]
    pub fn size(&self) -> GridSize {
        self.size
    }

    /// Returns the tile at `position`, or `None` off the grid.
    #[must_use]
    pub fn get(&self, position: GridPosition) -> Option<Tile> {
        self.index(position).map(|index| self.tiles[index])
    }

    /// Iterates over rows from top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Tile]> {
        self.tiles.chunks(usize::from(self.size.columns.max(1)))
    }

    fn stamp(&mut self, position: GridPosition, tile: Tile) {
        if let Some(index) = self.index(position) {
            self.tiles[index] = tile;
        }
    }

    fn index(&self, position: GridPosition) -> Option<usize> {
        if !self.size.contains(position) {
            return None;
        }

        let row = usize::try_from(position.row).ok()?;
        let column = usize::try_from(position.column).ok()?;
        Some(row * usize::from(self.size.columns) + column)
    }
}
