//! Protocol front-end and command loop.
//!
//! Reads one line at a time, applies settings and game updates to the match
//! state, and answers each `action move` request with exactly one line:
//! `place_move <column> <row>` or `pass`. Diagnostics go to the log, never to
//! the response writer.

use std::borrow::Cow;
use std::io::{self, BufRead, Write};

use log::{debug, trace, warn};

use crate::board::board_codec::{encode_board, encode_regions};
use crate::board::render_board::render_board;
use crate::engines::engine_trait::Engine;
use crate::engines::time_management::resolve_action_params;
use crate::match_state::match_state::{MatchState, Participant};
use crate::protocol::command::{parse_command, Command, GameUpdate, Setting};

const UNKNOWN_COMMAND_REPLY: &str = "unknown command";
const PASS_REPLY: &str = "pass";

/// Runs the dispatcher on process stdin/stdout until end of input.
pub fn run_stdio_loop(engine: Box<dyn Engine>) -> io::Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut dispatcher = Dispatcher::new(engine);
    dispatcher.run(stdin.lock(), &mut stdout)
}

pub struct Dispatcher {
    match_state: MatchState,
    engine: Box<dyn Engine>,
}

impl Dispatcher {
    pub fn new(engine: Box<dyn Engine>) -> Self {
        Self {
            match_state: MatchState::new(),
            engine,
        }
    }

    pub fn match_state(&self) -> &MatchState {
        &self.match_state
    }

    /// Processes lines until `input` is exhausted, flushing after every line.
    /// Bytes that are not valid UTF-8 are replaced rather than ending the loop.
    pub fn run<R: BufRead, W: Write>(&mut self, mut input: R, out: &mut W) -> io::Result<()> {
        let mut buf = Vec::<u8>::with_capacity(256);
        loop {
            buf.clear();
            if input.read_until(b'\n', &mut buf)? == 0 {
                break;
            }

            let line = String::from_utf8_lossy(&buf);
            if matches!(line, Cow::Owned(_)) {
                warn!("input line is not valid utf-8: {}", line.trim_end());
            }
            self.handle_line(&line, out)?;
            out.flush()?;
        }

        debug!("input closed, leaving command loop");
        Ok(())
    }

    /// Only I/O failures on `out` are returned; protocol errors are logged.
    pub fn handle_line(&mut self, line: &str, out: &mut impl Write) -> io::Result<()> {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return Ok(());
        }

        trace!("<< {}", trimmed);

        let command = match parse_command(trimmed) {
            Ok(command) => command,
            Err(err) => {
                warn!("{}", err);
                return Ok(());
            }
        };

        match command {
            Command::Settings(setting) => self.apply_setting(setting),
            Command::UpdateGame(update) => self.apply_game_update(update),
            Command::ActionMove { timebank } => self.handle_action_move(timebank, out)?,
            Command::Unknown(category) => {
                debug!("unknown command category '{}'", category);
                writeln!(out, "{}", UNKNOWN_COMMAND_REPLY)?;
            }
        }

        Ok(())
    }

    fn apply_setting(&mut self, setting: Setting) {
        match setting {
            Setting::Timebank(time) => {
                self.match_state.set_max_timebank(time);
                self.match_state.set_timebank(time);
            }
            Setting::TimePerMove(time) => self.match_state.set_time_per_move(time),
            Setting::MaxRounds(rounds) => self.match_state.set_max_rounds(rounds),
            Setting::PlayerNames(names) => {
                for name in names {
                    self.match_state.add_player(Participant::new(name));
                }
            }
            Setting::YourBot(name) => self.match_state.set_my_name(name),
            Setting::YourBotId(my_id) => {
                // The other of {1, 2}; any other id is passed through arithmetically.
                let opponent_id = 2_i32.wrapping_sub(my_id).wrapping_add(1);
                self.match_state.set_my_id(my_id);
                self.match_state.set_opponent_id(opponent_id);
            }
        }
    }

    fn apply_game_update(&mut self, update: GameUpdate) {
        match update {
            GameUpdate::Round(round) => self.match_state.set_round_number(round),
            // Move number only. The reference bot also fed this value to the field
            // decoder, which can never succeed on a bare integer; that is not reproduced.
            GameUpdate::Move(move_number) => self.match_state.set_move_number(move_number),
            GameUpdate::Field(board) => {
                trace!("field {}", encode_board(&board));
                self.match_state.set_board(board);
            }
            GameUpdate::Macroboard(regions) => {
                trace!("macroboard {}", encode_regions(&regions));
                self.match_state.set_regions(regions);
            }
        }
    }

    fn handle_action_move(&mut self, timebank: i32, out: &mut impl Write) -> io::Result<()> {
        self.match_state.set_timebank(timebank);
        let params = resolve_action_params(&self.match_state);

        debug!(
            "move requested: round {} move {} budget {}ms\n{}",
            self.match_state.round_number(),
            self.match_state.move_number(),
            params.budget_ms,
            render_board(self.match_state.board(), self.match_state.regions())
        );

        let best_move = match self.engine.choose_move(&self.match_state, &params) {
            Ok(result) => {
                for info in &result.info_lines {
                    debug!("{}: {}", self.engine.name(), info);
                }
                result.best_move
            }
            Err(err) => {
                warn!("{} engine failed: {}", self.engine.name(), err);
                None
            }
        };

        match best_move {
            Some(cell_move) => writeln!(out, "{}", cell_move),
            None => writeln!(out, "{}", PASS_REPLY),
        }
    }
}
