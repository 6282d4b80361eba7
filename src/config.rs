use std::ops::RangeInclusive;
use std::time::Duration;

use clap::ValueEnum;
use ratatui::style::Color;

use crate::chain::GridPosition;

/// Default number of tile rows.
pub const DEFAULT_ROWS: u16 = 30;

/// Default number of tile columns.
pub const DEFAULT_COLUMNS: u16 = 53;

/// Wall-clock budget for finding a free food cell.
pub const PLACEMENT_TIMEOUT: Duration = Duration::from_secs(10);

/// Fixed per-frame yield of the loop driver. Unrelated to tick timing.
pub const FRAME_YIELD: Duration = Duration::from_millis(2);

/// Score a fresh game starts with.
pub const INITIAL_SCORE: u32 = 1;

/// Rows at the top of the grid stamped as wall. The in-game score text sits here.
pub const TOP_WALL_ROWS: u16 = 2;

/// Logical grid dimensions.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct GridSize {
    pub rows: u16,
    pub columns: u16,
}

impl GridSize {
    pub const DEFAULT: Self = Self {
        rows: DEFAULT_ROWS,
        columns: DEFAULT_COLUMNS,
    };

    /// Returns the total number of cells in the grid.
    #[must_use]
    pub fn total_cells(self) -> usize {
        usize::from(self.rows) * usize::from(self.columns)
    }

    /// Cell a fresh chain starts on.
    #[must_use]
    pub fn center(self) -> GridPosition {
        GridPosition {
            row: i32::from(self.rows / 2),
            column: i32::from(self.columns / 2),
        }
    }

    /// Rows a head or food may occupy: everything below the two-row top wall
    /// and above the single-row bottom wall.
    #[must_use]
    pub fn interior_rows(self) -> RangeInclusive<i32> {
        i32::from(TOP_WALL_ROWS)..=i32::from(self.rows) - 2
    }

    /// Columns a head or food may occupy.
    #[must_use]
    pub fn interior_columns(self) -> RangeInclusive<i32> {
        1..=i32::from(self.columns) - 2
    }

    /// Returns true when `position` is inside the walls.
    #[must_use]
    pub fn is_interior(self, position: GridPosition) -> bool {
        self.interior_rows().contains(&position.row)
            && self.interior_columns().contains(&position.column)
    }

    /// Returns true when `position` is a wall tile.
    #[must_use]
    pub fn is_wall(self, position: GridPosition) -> bool {
        self.contains(position) && !self.is_interior(position)
    }

    /// Returns true when `position` lies on the grid at all.
    #[must_use]
    pub fn contains(self, position: GridPosition) -> bool {
        (0..i32::from(self.rows)).contains(&position.row)
            && (0..i32::from(self.columns)).contains(&position.column)
    }
}

impl Default for GridSize {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Named difficulty levels. Each maps to the interval between simulation ticks.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Default, ValueEnum)]
pub enum Difficulty {
    Easy,
    #[default]
    Regular,
    Hard,
}

impl Difficulty {
    /// Milliseconds between ticks.
    #[must_use]
    pub fn interval_ms(self) -> u64 {
        match self {
            Self::Easy => 100,
            Self::Regular => 50,
            Self::Hard => 30,
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Easy => "Easy",
            Self::Regular => "Regular",
            Self::Hard => "Hard",
        }
    }
}

/// Fill colors for each tile label and the surrounding chrome.
#[derive(Debug)]
pub struct Palette {
    pub empty: Color,
    pub body: Color,
    pub head: Color,
    pub wall: Color,
    pub food: Color,
    /// Clear color behind menus and outside the board.
    pub backdrop: Color,
    pub text: Color,
    pub muted: Color,
}

pub const PALETTE: Palette = Palette {
    empty: Color::Rgb(0, 0, 0),
    body: Color::Rgb(0, 200, 60),
    head: Color::Rgb(0, 200, 20),
    wall: Color::Rgb(32, 32, 32),
    food: Color::Rgb(255, 0, 0),
    backdrop: Color::Rgb(32, 32, 32),
    text: Color::Rgb(255, 255, 255),
    muted: Color::DarkGray,
};

/// Upper half-block glyph. Each terminal cell shows two tile rows.
pub const GLYPH_HALF_UPPER: &str = "▀";
