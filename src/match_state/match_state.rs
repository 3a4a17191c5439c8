//! Match state aggregate.
//!
//! `MatchState` holds everything the engine has told this client so far:
//! clock settings, the roster, round/move counters, ids, and the current
//! grids. It is created once per process run and updated in place by the
//! dispatcher. Setters store values as given; range checks are left to the
//! engine that sends them.

use std::collections::HashMap;

use crate::board::board_types::{Board, PlayerId, RegionGrid};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Participant {
    pub name: String,
}

impl Participant {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

#[derive(Debug, Clone, Default)]
pub struct MatchState {
    // --- Clock ---
    timebank: i32,
    max_timebank: i32,
    time_per_move: i32,

    // --- Progress ---
    max_rounds: i32,
    round_number: i32,
    move_number: i32,

    // --- Roster ---
    my_name: String,
    players: HashMap<String, Participant>,
    my_id: PlayerId,
    opponent_id: PlayerId,

    // --- Grids ---
    board: Board,
    regions: RegionGrid,
}

impl MatchState {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn timebank(&self) -> i32 {
        self.timebank
    }

    pub fn set_timebank(&mut self, value: i32) {
        self.timebank = value;
    }

    pub fn max_timebank(&self) -> i32 {
        self.max_timebank
    }

    pub fn set_max_timebank(&mut self, value: i32) {
        self.max_timebank = value;
    }

    pub fn time_per_move(&self) -> i32 {
        self.time_per_move
    }

    pub fn set_time_per_move(&mut self, value: i32) {
        self.time_per_move = value;
    }

    pub fn max_rounds(&self) -> i32 {
        self.max_rounds
    }

    pub fn set_max_rounds(&mut self, value: i32) {
        self.max_rounds = value;
    }

    pub fn round_number(&self) -> i32 {
        self.round_number
    }

    pub fn set_round_number(&mut self, value: i32) {
        self.round_number = value;
    }

    pub fn move_number(&self) -> i32 {
        self.move_number
    }

    pub fn set_move_number(&mut self, value: i32) {
        self.move_number = value;
    }

    pub fn my_name(&self) -> &str {
        &self.my_name
    }

    pub fn set_my_name(&mut self, name: impl Into<String>) {
        self.my_name = name.into();
    }

    pub fn players(&self) -> &HashMap<String, Participant> {
        &self.players
    }

    /// Inserts a participant keyed by its name; an existing entry is replaced.
    pub fn add_player(&mut self, participant: Participant) {
        self.players.insert(participant.name.clone(), participant);
    }

    pub fn my_id(&self) -> PlayerId {
        self.my_id
    }

    pub fn set_my_id(&mut self, id: PlayerId) {
        self.my_id = id;
    }

    pub fn opponent_id(&self) -> PlayerId {
        self.opponent_id
    }

    pub fn set_opponent_id(&mut self, id: PlayerId) {
        self.opponent_id = id;
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn set_board(&mut self, board: Board) {
        self.board = board;
    }

    pub fn regions(&self) -> &RegionGrid {
        &self.regions
    }

    pub fn set_regions(&mut self, regions: RegionGrid) {
        self.regions = regions;
    }
}

#[cfg(test)]
mod tests {
    use super::{MatchState, Participant};
    use crate::board::board_types::{Board, Cell, RegionGrid, RegionState};

    #[test]
    fn new_state_is_zeroed() {
        let state = MatchState::new();
        assert_eq!(state.timebank(), 0);
        assert_eq!(state.max_rounds(), 0);
        assert_eq!(state.my_name(), "");
        assert!(state.players().is_empty());
        assert_eq!(state.board(), &Board::new());
        assert_eq!(state.regions(), &RegionGrid::default());
    }

    #[test]
    fn setters_store_values_unvalidated() {
        let mut state = MatchState::new();
        state.set_timebank(-5);
        state.set_max_timebank(10_000);
        state.set_time_per_move(500);
        state.set_round_number(12);
        state.set_move_number(23);
        state.set_my_id(7);
        state.set_opponent_id(-1);

        assert_eq!(state.timebank(), -5);
        assert_eq!(state.max_timebank(), 10_000);
        assert_eq!(state.time_per_move(), 500);
        assert_eq!(state.round_number(), 12);
        assert_eq!(state.move_number(), 23);
        assert_eq!(state.my_id(), 7);
        assert_eq!(state.opponent_id(), -1);
    }

    #[test]
    fn duplicate_player_names_overwrite() {
        let mut state = MatchState::new();
        state.add_player(Participant::new("player1"));
        state.add_player(Participant::new("player2"));
        state.add_player(Participant::new("player1"));

        assert_eq!(state.players().len(), 2);
        assert_eq!(state.players()["player2"].name, "player2");
    }

    #[test]
    fn grids_are_replaced_whole() {
        let mut state = MatchState::new();
        let mut board = Board::new();
        board.set_cell(3, 3, Cell::Occupied(2));
        state.set_board(board.clone());
        state.set_regions(RegionGrid::filled(RegionState::Available));

        assert_eq!(state.board(), &board);
        assert!(state.regions().region(2, 2).is_available());
    }
}
