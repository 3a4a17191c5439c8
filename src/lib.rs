//! Crate root module declarations for the Ultimate Tic-Tac-Toe bot client.
//!
//! This file exposes the board model and wire codec, legal move generation,
//! the match state aggregate, decision engines, and the line-protocol
//! dispatcher so the binary, tests, and benches can import stable paths.

pub mod board {
    pub mod board_codec;
    pub mod board_types;
    pub mod render_board;
}

pub mod move_generation {
    pub mod legal_moves;
}

pub mod match_state {
    pub mod match_state;
}

pub mod engines {
    pub mod engine_first_available;
    pub mod engine_random;
    pub mod engine_trait;
    pub mod time_management;
}

pub mod protocol {
    pub mod command;
    pub mod dispatcher;
    pub mod protocol_errors;
}
