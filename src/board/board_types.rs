//! Core board value types.
//!
//! The playing field is a 9x9 grid of cells split into nine 3x3 regions. The
//! region grid says which of those regions currently accept moves. Both grids
//! are indexed `[column][row]` with `(0, 0)` in the top-left corner.

use std::fmt;

pub const BOARD_COLUMNS: usize = 9;
pub const BOARD_ROWS: usize = 9;
pub const BOARD_CELLS: usize = BOARD_COLUMNS * BOARD_ROWS;

pub const REGION_COLUMNS: usize = 3;
pub const REGION_ROWS: usize = 3;
pub const REGION_CELLS: usize = REGION_COLUMNS * REGION_ROWS;

/// Width (and height) of a single region measured in cells.
pub const REGION_SPAN: usize = BOARD_COLUMNS / REGION_COLUMNS;

/// Wire token for an unoccupied cell.
pub const EMPTY_CELL_TOKEN: &str = ".";
/// Wire token for a region that currently accepts moves.
pub const AVAILABLE_REGION_TOKEN: &str = "-1";
/// Wire token written for a region that does not accept moves.
pub const UNAVAILABLE_REGION_TOKEN: &str = "0";

/// Participant id as sent by the engine.
pub type PlayerId = i32;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Cell {
    #[default]
    Empty,
    Occupied(PlayerId),
}

impl Cell {
    #[inline]
    pub const fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }

    #[inline]
    pub const fn owner(self) -> Option<PlayerId> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(id) => Some(id),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RegionState {
    Available,
    #[default]
    Unavailable,
    Reserved(PlayerId),
}

impl RegionState {
    #[inline]
    pub const fn is_available(self) -> bool {
        matches!(self, RegionState::Available)
    }
}

/// The 9x9 cell grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: [[Cell; BOARD_ROWS]; BOARD_COLUMNS],
}

impl Default for Board {
    fn default() -> Self {
        Self {
            cells: [[Cell::Empty; BOARD_ROWS]; BOARD_COLUMNS],
        }
    }
}

impl Board {
    /// All-empty board.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub const fn columns(&self) -> usize {
        BOARD_COLUMNS
    }

    #[inline]
    pub const fn rows(&self) -> usize {
        BOARD_ROWS
    }

    /// Panics if `column` or `row` is outside `0..9`.
    #[inline]
    pub fn cell(&self, column: usize, row: usize) -> Cell {
        self.cells[column][row]
    }

    #[inline]
    pub fn set_cell(&mut self, column: usize, row: usize, cell: Cell) {
        self.cells[column][row] = cell;
    }

    /// Owner of the cell at `(column, row)`, `None` when the cell is empty.
    #[inline]
    pub fn player_id(&self, column: usize, row: usize) -> Option<PlayerId> {
        self.cell(column, row).owner()
    }

    /// Cells in row-major order (row outer, column inner), matching the wire layout.
    pub fn cells_row_major(&self) -> impl Iterator<Item = Cell> + '_ {
        (0..BOARD_ROWS)
            .flat_map(move |row| (0..BOARD_COLUMNS).map(move |column| self.cells[column][row]))
    }
}

/// The 3x3 grid of region states.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RegionGrid {
    regions: [[RegionState; REGION_ROWS]; REGION_COLUMNS],
}

impl RegionGrid {
    /// Grid where every region holds `state`.
    pub fn filled(state: RegionState) -> Self {
        Self {
            regions: [[state; REGION_ROWS]; REGION_COLUMNS],
        }
    }

    #[inline]
    pub fn region(&self, region_column: usize, region_row: usize) -> RegionState {
        self.regions[region_column][region_row]
    }

    #[inline]
    pub fn set_region(&mut self, region_column: usize, region_row: usize, state: RegionState) {
        self.regions[region_column][region_row] = state;
    }

    pub fn regions_row_major(&self) -> impl Iterator<Item = RegionState> + '_ {
        (0..REGION_ROWS).flat_map(move |row| {
            (0..REGION_COLUMNS).map(move |column| self.regions[column][row])
        })
    }
}

/// A placement at `(column, row)`, both in `0..9`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CellMove {
    pub column: usize,
    pub row: usize,
}

impl CellMove {
    #[inline]
    pub const fn new(column: usize, row: usize) -> Self {
        Self { column, row }
    }
}

/// Protocol rendering of a chosen move.
impl fmt::Display for CellMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "place_move {} {}", self.column, self.row)
    }
}
