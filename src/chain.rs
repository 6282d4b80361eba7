use std::fmt;

use crate::error::{Result, SnekError};
use crate::input::Direction;

/// Grid position in tile coordinates.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub struct GridPosition {
    pub row: i32,
    pub column: i32,
}

impl GridPosition {
    #[must_use]
    pub fn new(row: i32, column: i32) -> Self {
        Self { row, column }
    }

    /// Returns this position moved by `delta`.
    #[must_use]
    pub fn offset(self, delta: Delta) -> Self {
        Self {
            row: self.row + delta.rows,
            column: self.column + delta.columns,
        }
    }
}

/// Signed displacement applied to the head each tick.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Delta {
    pub rows: i32,
    pub columns: i32,
}

impl From<Direction> for Delta {
    fn from(direction: Direction) -> Self {
        match direction {
            Direction::Up => Delta { rows: -1, columns: 0 },
            Direction::Down => Delta { rows: 1, columns: 0 },
            Direction::Left => Delta { rows: 0, columns: -1 },
            Direction::Right => Delta { rows: 0, columns: 1 },
        }
    }
}

/// The snake's body as an ordered run of positions, head first.
///
/// The chain is never mutated in place by the simulation: every tick builds a
/// replacement with [`EntityChain::advance`]. Moving drops the old tail,
/// growing keeps it.
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct EntityChain {
    nodes: Vec<GridPosition>,
}

impl EntityChain {
    /// Creates a one-node chain at `head`.
    #[must_use]
    pub fn new(head: GridPosition) -> Self {
        Self { nodes: vec![head] }
    }

    /// Creates a chain from explicit nodes (first is head).
    pub fn from_nodes(nodes: Vec<GridPosition>) -> Result<Self> {
        if nodes.is_empty() {
            return Err(SnekError::InvalidChain);
        }

        Ok(Self { nodes })
    }

    /// Adds `position` as the new tail.
    ///
    /// An empty chain has no head to hang a tail off, so it is left untouched
    /// and `InvalidChain` is returned.
    pub fn append(&mut self, position: GridPosition) -> Result<()> {
        if self.nodes.is_empty() {
            log::warn!("refusing to append {position:?} to an empty chain");
            return Err(SnekError::InvalidChain);
        }

        self.nodes.try_reserve(1)?;
        self.nodes.push(position);
        Ok(())
    }

    /// Builds the chain for the next tick: the old head moved by `delta`,
    /// followed by the old nodes, minus the old tail unless `grew`.
    pub fn advance(&self, delta: Delta, grew: bool) -> Result<Self> {
        let head = self.head().ok_or(SnekError::InvalidChain)?;
        let kept = if grew {
            self.nodes.len()
        } else {
            self.nodes.len() - 1
        };

        let mut nodes = Vec::new();
        nodes.try_reserve_exact(kept + 1)?;
        nodes.push(head.offset(delta));
        nodes.extend_from_slice(&self.nodes[..kept]);

        Ok(Self { nodes })
    }

    /// Returns true if any non-head node shares the head's position.
    #[must_use]
    pub fn self_intersects(&self) -> bool {
        let Some((head, body)) = self.nodes.split_first() else {
            return false;
        };

        body.contains(head)
    }

    #[must_use]
    pub fn head(&self) -> Option<GridPosition> {
        self.nodes.first().copied()
    }

    #[must_use]
    pub fn tail(&self) -> Option<GridPosition> {
        self.nodes.last().copied()
    }

    /// Returns true if any node occupies `position`.
    #[must_use]
    pub fn occupies(&self, position: GridPosition) -> bool {
        self.nodes.contains(&position)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Iterates over nodes from head to tail.
    pub fn nodes(&self) -> impl Iterator<Item = &GridPosition> {
        self.nodes.iter()
    }
}

/// One node per line, head first. Used for debug logging.
impl fmt::Display for EntityChain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, node) in self.nodes.iter().enumerate() {
            writeln!(f, "node {index}: row {} column {}", node.row, node.column)?;
        }
        Ok(())
    }
}
