//! Engine abstraction used by the protocol dispatcher.
//!
//! An engine is the decision function: it receives the current match state
//! plus the clock figures for this request and returns a move, or no move
//! when nothing is playable. Strategies are selected at startup behind a
//! single trait object.

use crate::board::board_types::CellMove;
use crate::match_state::match_state::MatchState;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActionParams {
    /// Remaining time bank as sent with the action request.
    pub timebank_ms: i32,
    pub time_per_move_ms: i32,
    /// Time the engine should aim to use for this move.
    pub budget_ms: u64,
}

#[derive(Debug, Clone, Default)]
pub struct EngineOutput {
    pub best_move: Option<CellMove>,
    pub info_lines: Vec<String>,
}

pub trait Engine: Send {
    fn name(&self) -> &str;

    fn choose_move(
        &mut self,
        match_state: &MatchState,
        params: &ActionParams,
    ) -> Result<EngineOutput, String>;
}

/// Adapts a plain decision closure into an [`Engine`].
pub struct FnEngine<F> {
    name: String,
    decide: F,
}

impl<F> FnEngine<F>
where
    F: FnMut(&MatchState) -> Option<CellMove> + Send,
{
    pub fn new(name: impl Into<String>, decide: F) -> Self {
        Self {
            name: name.into(),
            decide,
        }
    }
}

impl<F> Engine for FnEngine<F>
where
    F: FnMut(&MatchState) -> Option<CellMove> + Send,
{
    fn name(&self) -> &str {
        &self.name
    }

    fn choose_move(
        &mut self,
        match_state: &MatchState,
        _params: &ActionParams,
    ) -> Result<EngineOutput, String> {
        Ok(EngineOutput {
            best_move: (self.decide)(match_state),
            info_lines: Vec::new(),
        })
    }
}
