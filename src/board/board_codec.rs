//! Wire codec for the two grid encodings.
//!
//! The engine sends the cell grid as 81 row-major tokens separated by `,` or
//! `;`, and the region grid as 9 row-major tokens separated by `,`. Decoding
//! builds a fresh value so a malformed line never leaves a half-written grid.

use std::error::Error;
use std::fmt;

use crate::board::board_types::*;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    WrongTokenCount { expected: usize, found: usize },
    InvalidToken { index: usize, token: String },
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecodeError::WrongTokenCount { expected, found } => {
                write!(f, "expected {expected} tokens, found {found}")
            }
            DecodeError::InvalidToken { index, token } => {
                write!(f, "invalid token '{token}' at index {index}")
            }
        }
    }
}

impl Error for DecodeError {}

pub fn decode_board(text: &str) -> Result<Board, DecodeError> {
    let normalized = text.replace(';', ",");
    let tokens: Vec<&str> = normalized.split(',').collect();
    if tokens.len() != BOARD_CELLS {
        return Err(DecodeError::WrongTokenCount {
            expected: BOARD_CELLS,
            found: tokens.len(),
        });
    }

    let mut board = Board::new();
    for (index, token) in tokens.iter().enumerate() {
        let cell = parse_cell_token(index, token)?;
        board.set_cell(index % BOARD_COLUMNS, index / BOARD_COLUMNS, cell);
    }

    Ok(board)
}

pub fn decode_regions(text: &str) -> Result<RegionGrid, DecodeError> {
    let tokens: Vec<&str> = text.split(',').collect();
    if tokens.len() != REGION_CELLS {
        return Err(DecodeError::WrongTokenCount {
            expected: REGION_CELLS,
            found: tokens.len(),
        });
    }

    let mut regions = RegionGrid::default();
    for (index, token) in tokens.iter().enumerate() {
        let state = parse_region_token(index, token)?;
        regions.set_region(index % REGION_COLUMNS, index / REGION_COLUMNS, state);
    }

    Ok(regions)
}

pub fn encode_board(board: &Board) -> String {
    board
        .cells_row_major()
        .map(|cell| match cell {
            Cell::Empty => EMPTY_CELL_TOKEN.to_owned(),
            Cell::Occupied(id) => id.to_string(),
        })
        .collect::<Vec<_>>()
        .join(",")
}

/// Lossy for unavailable regions: every non-available, unowned region is written as `0`.
pub fn encode_regions(regions: &RegionGrid) -> String {
    regions
        .regions_row_major()
        .map(|state| match state {
            RegionState::Available => AVAILABLE_REGION_TOKEN.to_owned(),
            RegionState::Unavailable => UNAVAILABLE_REGION_TOKEN.to_owned(),
            RegionState::Reserved(id) => id.to_string(),
        })
        .collect::<Vec<_>>()
        .join(",")
}

fn parse_cell_token(index: usize, token: &str) -> Result<Cell, DecodeError> {
    if token == EMPTY_CELL_TOKEN {
        return Ok(Cell::Empty);
    }

    token
        .parse::<PlayerId>()
        .map(Cell::Occupied)
        .map_err(|_| invalid_token(index, token))
}

fn parse_region_token(index: usize, token: &str) -> Result<RegionState, DecodeError> {
    if token == AVAILABLE_REGION_TOKEN {
        return Ok(RegionState::Available);
    }

    let value = token
        .parse::<PlayerId>()
        .map_err(|_| invalid_token(index, token))?;

    // Ids are positive; zero and the remaining negatives all mean "closed".
    if value > 0 {
        Ok(RegionState::Reserved(value))
    } else {
        Ok(RegionState::Unavailable)
    }
}

fn invalid_token(index: usize, token: &str) -> DecodeError {
    DecodeError::InvalidToken {
        index,
        token: token.to_owned(),
    }
}
