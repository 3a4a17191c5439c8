//! Deterministic engine that plays the first legal move in row-major order.
//!
//! Useful for diagnostics and reproducible protocol traces.

use crate::engines::engine_trait::{ActionParams, Engine, EngineOutput};
use crate::match_state::match_state::MatchState;
use crate::move_generation::legal_moves::legal_moves;

#[derive(Debug, Default)]
pub struct FirstAvailableEngine;

impl FirstAvailableEngine {
    pub fn new() -> Self {
        Self
    }
}

impl Engine for FirstAvailableEngine {
    fn name(&self) -> &str {
        "first-available"
    }

    fn choose_move(
        &mut self,
        match_state: &MatchState,
        _params: &ActionParams,
    ) -> Result<EngineOutput, String> {
        let moves = legal_moves(match_state.board(), match_state.regions());
        Ok(EngineOutput {
            best_move: moves.first().copied(),
            info_lines: vec![format!("first_available legal_moves {}", moves.len())],
        })
    }
}

#[cfg(test)]
mod tests {
    use super::FirstAvailableEngine;
    use crate::board::board_codec::decode_regions;
    use crate::board::board_types::{Cell, CellMove};
    use crate::engines::engine_trait::{ActionParams, Engine};
    use crate::match_state::match_state::MatchState;

    #[test]
    fn plays_first_empty_cell_of_active_region() {
        let mut state = MatchState::new();
        state.set_regions(decode_regions("0,0,-1,0,0,0,0,0,0").expect("regions should decode"));
        let mut board = state.board().clone();
        board.set_cell(6, 0, Cell::Occupied(2));
        state.set_board(board);

        let out = FirstAvailableEngine::new()
            .choose_move(&state, &ActionParams::default())
            .expect("engine should not fail");
        assert_eq!(out.best_move, Some(CellMove::new(7, 0)));
    }
}
