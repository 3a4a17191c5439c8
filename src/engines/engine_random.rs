//! Uniform random-move engine.
//!
//! Selects uniformly from the legal moves of the current position. This is the
//! default decision function and the baseline for anything smarter.

use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::engines::engine_trait::{ActionParams, Engine, EngineOutput};
use crate::match_state::match_state::MatchState;
use crate::move_generation::legal_moves::legal_moves;

pub struct RandomEngine {
    rng: StdRng,
}

impl RandomEngine {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Reproducible move sequence for a given seed.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine for RandomEngine {
    fn name(&self) -> &str {
        "random"
    }

    fn choose_move(
        &mut self,
        match_state: &MatchState,
        params: &ActionParams,
    ) -> Result<EngineOutput, String> {
        let moves = legal_moves(match_state.board(), match_state.regions());

        let mut out = EngineOutput::default();
        out.info_lines
            .push(format!("random_engine legal_moves {}", moves.len()));
        out.info_lines.push(format!(
            "random_engine timebank_ms {} time_per_move_ms {} budget_ms {}",
            params.timebank_ms, params.time_per_move_ms, params.budget_ms
        ));

        if moves.is_empty() {
            return Ok(out);
        }

        let picked = moves
            .as_slice()
            .choose(&mut self.rng)
            .ok_or("failed to choose a random move")?;

        out.best_move = Some(*picked);
        Ok(out)
    }
}
