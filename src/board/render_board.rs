//! Terminal-oriented board renderer.
//!
//! Creates a human-readable view of the cell grid with region separators for
//! debug logging. Cells inside an available region that are still empty are
//! drawn as `+` so the playable area stands out.

use crate::board::board_types::*;
use crate::move_generation::legal_moves::is_in_active_region;

pub fn render_board(board: &Board, regions: &RegionGrid) -> String {
    let mut out = String::new();

    out.push_str("  0 1 2   3 4 5   6 7 8\n");

    for row in 0..BOARD_ROWS {
        if row > 0 && row % REGION_SPAN == 0 {
            out.push_str("  ------+-------+------\n");
        }

        out.push(char::from(b'0' + row as u8));
        out.push(' ');

        for column in 0..BOARD_COLUMNS {
            if column > 0 && column % REGION_SPAN == 0 {
                out.push_str("| ");
            }

            out.push(cell_char(board, regions, column, row));

            if column < BOARD_COLUMNS - 1 {
                out.push(' ');
            }
        }

        out.push('\n');
    }

    out.pop();
    out
}

fn cell_char(board: &Board, regions: &RegionGrid, column: usize, row: usize) -> char {
    match board.cell(column, row) {
        Cell::Occupied(1) => 'X',
        Cell::Occupied(2) => 'O',
        Cell::Occupied(_) => '?',
        Cell::Empty if is_in_active_region(regions, column, row) => '+',
        Cell::Empty => '.',
    }
}
