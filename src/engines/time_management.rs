//! Per-move time budgeting.
//!
//! The engine sends the remaining time bank with every action request. The
//! dispatcher stores it on the match state and derives the parameters handed
//! to the decision engine from there, so the budget is always computed from
//! the latest figure.

use crate::engines::engine_trait::ActionParams;
use crate::match_state::match_state::MatchState;

pub fn resolve_action_params(match_state: &MatchState) -> ActionParams {
    ActionParams {
        timebank_ms: match_state.timebank(),
        time_per_move_ms: match_state.time_per_move(),
        budget_ms: move_budget_ms(match_state),
    }
}

/// Remaining time bank capped at the per-move allotment when one is configured.
pub fn move_budget_ms(match_state: &MatchState) -> u64 {
    let timebank = u64::try_from(match_state.timebank()).unwrap_or(0);
    match u64::try_from(match_state.time_per_move()) {
        Ok(per_move) if per_move > 0 => timebank.min(per_move),
        _ => timebank,
    }
}
