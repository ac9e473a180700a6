use serde::{Deserialize, Serialize};

use super::bot_controller::TicTacToeBotType;
use super::types::Mark;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameMode {
    PlayerVsPlayer,
    #[default]
    PlayerVsComputer,
}

impl GameMode {
    pub fn toggled(&self) -> Self {
        match self {
            GameMode::PlayerVsPlayer => GameMode::PlayerVsComputer,
            GameMode::PlayerVsComputer => GameMode::PlayerVsPlayer,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            GameMode::PlayerVsPlayer => "2 Players",
            GameMode::PlayerVsComputer => "Single Player",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TicTacToeSessionSettings {
    pub mode: GameMode,
    pub computer_mark: Mark,
    pub bot_type: TicTacToeBotType,
}

impl Default for TicTacToeSessionSettings {
    fn default() -> Self {
        Self {
            mode: GameMode::PlayerVsComputer,
            computer_mark: Mark::O,
            bot_type: TicTacToeBotType::Minimax,
        }
    }
}

impl TicTacToeSessionSettings {
    pub fn validate(&self) -> Result<(), String> {
        if self.computer_mark == Mark::Empty {
            return Err("Computer mark must be X or O".to_string());
        }
        Ok(())
    }
}
