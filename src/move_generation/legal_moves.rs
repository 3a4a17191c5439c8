//! Legal move generation.
//!
//! A cell is playable when it is empty and lies inside a region the engine has
//! marked available. Output order is row-major (row outer, column inner);
//! engines index into it, so the order is part of the contract.

use crate::board::board_types::*;

/// Region coordinates `(region_column, region_row)` that contain the cell.
#[inline]
pub const fn region_of(column: usize, row: usize) -> (usize, usize) {
    (column / REGION_SPAN, row / REGION_SPAN)
}

#[inline]
pub fn is_in_active_region(regions: &RegionGrid, column: usize, row: usize) -> bool {
    let (region_column, region_row) = region_of(column, row);
    regions.region(region_column, region_row).is_available()
}

pub fn legal_moves(board: &Board, regions: &RegionGrid) -> Vec<CellMove> {
    let mut moves = Vec::<CellMove>::with_capacity(BOARD_CELLS);

    for row in 0..BOARD_ROWS {
        for column in 0..BOARD_COLUMNS {
            if is_in_active_region(regions, column, row) && board.cell(column, row).is_empty() {
                moves.push(CellMove::new(column, row));
            }
        }
    }

    moves
}

pub fn board_is_full(board: &Board) -> bool {
    !board.cells_row_major().any(Cell::is_empty)
}

pub fn board_is_empty(board: &Board) -> bool {
    board.cells_row_major().all(Cell::is_empty)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::board_codec::{decode_board, decode_regions};

    fn all_available() -> RegionGrid {
        RegionGrid::filled(RegionState::Available)
    }

    #[test]
    fn region_of_maps_cell_blocks() {
        assert_eq!(region_of(0, 0), (0, 0));
        assert_eq!(region_of(2, 2), (0, 0));
        assert_eq!(region_of(3, 0), (1, 0));
        assert_eq!(region_of(5, 8), (1, 2));
        assert_eq!(region_of(8, 3), (2, 1));

        for column in 0..BOARD_COLUMNS {
            for row in 0..BOARD_ROWS {
                let (rc, rr) = region_of(column, row);
                assert!((3 * rc..3 * rc + 3).contains(&column));
                assert!((3 * rr..3 * rr + 3).contains(&row));
            }
        }
    }

    #[test]
    fn empty_board_all_available_yields_every_cell_in_row_major_order() {
        let board = decode_board(&vec!["."; 81].join(",")).expect("board should decode");
        let regions = decode_regions(&vec!["-1"; 9].join(",")).expect("regions should decode");

        let moves = legal_moves(&board, &regions);
        assert_eq!(moves.len(), 81);
        assert_eq!(moves.first(), Some(&CellMove::new(0, 0)));
        assert_eq!(moves[1], CellMove::new(1, 0));
        assert_eq!(moves[9], CellMove::new(0, 1));
        assert_eq!(moves.last(), Some(&CellMove::new(8, 8)));
    }

    #[test]
    fn only_center_region_available() {
        let board = Board::new();
        let regions = decode_regions("0,0,0,0,-1,0,0,0,0").expect("regions should decode");

        let moves = legal_moves(&board, &regions);
        let expected: Vec<CellMove> = (3..6)
            .flat_map(|row| (3..6).map(move |column| CellMove::new(column, row)))
            .collect();
        assert_eq!(moves, expected);
    }

    #[test]
    fn legal_set_agrees_with_pointwise_check() {
        let mut board = Board::new();
        board.set_cell(0, 0, Cell::Occupied(1));
        board.set_cell(4, 4, Cell::Occupied(2));
        board.set_cell(7, 1, Cell::Occupied(1));
        board.set_cell(8, 8, Cell::Occupied(2));
        let regions = decode_regions("-1,0,-1,1,-1,2,0,0,-1").expect("regions should decode");

        let moves = legal_moves(&board, &regions);
        let mut expected_count = 0;
        for row in 0..BOARD_ROWS {
            for column in 0..BOARD_COLUMNS {
                let (rc, rr) = region_of(column, row);
                let playable = regions.region(rc, rr) == RegionState::Available
                    && board.cell(column, row) == Cell::Empty;
                assert_eq!(moves.contains(&CellMove::new(column, row)), playable);
                if playable {
                    expected_count += 1;
                }
            }
        }
        assert_eq!(moves.len(), expected_count);
        assert_eq!(expected_count, 4 * 9 - 4);
    }

    #[test]
    fn no_available_region_yields_no_moves() {
        let board = Board::new();
        assert!(legal_moves(&board, &RegionGrid::default()).is_empty());
    }

    #[test]
    fn full_board_has_no_moves() {
        let board = decode_board(&vec!["1"; 81].join(";")).expect("board should decode");
        assert!(board_is_full(&board));
        assert!(!board_is_empty(&board));
        assert!(legal_moves(&board, &all_available()).is_empty());
    }

    #[test]
    fn fullness_predicates() {
        let empty = Board::new();
        assert!(board_is_empty(&empty));
        assert!(!board_is_full(&empty));

        let mut partial = Board::new();
        partial.set_cell(2, 6, Cell::Occupied(2));
        assert!(!board_is_empty(&partial));
        assert!(!board_is_full(&partial));
    }
}
