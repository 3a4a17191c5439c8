//! Line tokenizer for the engine protocol.
//!
//! Every input line is whitespace-separated and its first token selects the
//! category: `settings <key> <value>`, `update game <key> <value>` or
//! `action move <timebank>`. Values are parsed and grids decoded here, so a
//! `Command` that reaches the dispatcher can always be applied as-is.

use crate::board::board_codec::{decode_board, decode_regions, DecodeError};
use crate::board::board_types::{Board, PlayerId, RegionGrid};
use crate::protocol::protocol_errors::ProtocolError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Settings(Setting),
    UpdateGame(GameUpdate),
    ActionMove { timebank: i32 },
    /// First token outside the known categories.
    Unknown(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Setting {
    Timebank(i32),
    TimePerMove(i32),
    MaxRounds(i32),
    PlayerNames(Vec<String>),
    YourBot(String),
    YourBotId(PlayerId),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameUpdate {
    Round(i32),
    Move(i32),
    Field(Board),
    Macroboard(RegionGrid),
}

pub fn parse_command(line: &str) -> Result<Command, ProtocolError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let category = tokens.first().copied().unwrap_or_default();

    match category {
        "settings" => {
            let key = required(&tokens, category, 1)?;
            let value = required(&tokens, category, 2)?;
            parse_setting(key, value).map(Command::Settings)
        }
        "update" => {
            let target = required(&tokens, category, 1)?;
            if target != "game" {
                return Err(ProtocolError::UnsupportedUpdateTarget(target.to_owned()));
            }
            let key = required(&tokens, category, 2)?;
            let value = required(&tokens, category, 3)?;
            parse_game_update(key, value).map(Command::UpdateGame)
        }
        "action" => {
            let kind = required(&tokens, category, 1)?;
            if kind != "move" {
                return Err(ProtocolError::UnsupportedAction(kind.to_owned()));
            }
            let timebank = parse_int("timebank", required(&tokens, category, 2)?)?;
            Ok(Command::ActionMove { timebank })
        }
        other => Ok(Command::Unknown(other.to_owned())),
    }
}

fn parse_setting(key: &str, value: &str) -> Result<Setting, ProtocolError> {
    match key {
        "timebank" => parse_int(key, value).map(Setting::Timebank),
        "time_per_move" => parse_int(key, value).map(Setting::TimePerMove),
        "max_rounds" => parse_int(key, value).map(Setting::MaxRounds),
        "player_names" => Ok(Setting::PlayerNames(
            value
                .split(',')
                .filter(|name| !name.is_empty())
                .map(str::to_owned)
                .collect(),
        )),
        "your_bot" => Ok(Setting::YourBot(value.to_owned())),
        "your_botid" => parse_int(key, value).map(Setting::YourBotId),
        _ => Err(ProtocolError::UnrecognizedSettingsKey(key.to_owned())),
    }
}

fn parse_game_update(key: &str, value: &str) -> Result<GameUpdate, ProtocolError> {
    match key {
        "round" => parse_int(key, value).map(GameUpdate::Round),
        "move" => parse_int(key, value).map(GameUpdate::Move),
        "field" => decode_board(value)
            .map(GameUpdate::Field)
            .map_err(|source| decode_failed(key, source)),
        "macroboard" => decode_regions(value)
            .map(GameUpdate::Macroboard)
            .map_err(|source| decode_failed(key, source)),
        _ => Err(ProtocolError::UnrecognizedGameKey(key.to_owned())),
    }
}

fn required<'a>(
    tokens: &[&'a str],
    command: &str,
    position: usize,
) -> Result<&'a str, ProtocolError> {
    tokens
        .get(position)
        .copied()
        .ok_or_else(|| ProtocolError::MissingToken {
            command: command.to_owned(),
            position,
        })
}

fn parse_int(key: &str, value: &str) -> Result<i32, ProtocolError> {
    value.parse::<i32>().map_err(|_| ProtocolError::InvalidInteger {
        key: key.to_owned(),
        value: value.to_owned(),
    })
}

fn decode_failed(key: &str, source: DecodeError) -> ProtocolError {
    ProtocolError::Decode {
        key: key.to_owned(),
        source,
    }
}
