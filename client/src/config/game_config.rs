use common::config::Validate;
use common::games::tictactoe::{GameMode, Mark, TicTacToeBotType, TicTacToeSessionSettings};
use serde::{Deserialize, Serialize};

pub const MAX_COMPUTER_MOVE_DELAY_MS: u32 = 5000;

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct GameConfig {
    pub mode: GameMode,
    pub computer_mark: Mark,
    pub bot_type: TicTacToeBotType,
    pub computer_move_delay_ms: u32,
}

impl GameConfig {
    pub fn session_settings(&self) -> TicTacToeSessionSettings {
        TicTacToeSessionSettings {
            mode: self.mode,
            computer_mark: self.computer_mark,
            bot_type: self.bot_type,
        }
    }
}

impl Validate for GameConfig {
    fn validate(&self) -> Result<(), String> {
        if self.computer_mark == Mark::Empty {
            return Err("computer_mark must be X or O".to_string());
        }
        if self.computer_move_delay_ms > MAX_COMPUTER_MOVE_DELAY_MS {
            return Err(format!(
                "computer_move_delay_ms must not exceed {}",
                MAX_COMPUTER_MOVE_DELAY_MS
            ));
        }
        Ok(())
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            mode: GameMode::PlayerVsComputer,
            computer_mark: Mark::O,
            bot_type: TicTacToeBotType::Minimax,
            computer_move_delay_ms: 250,
        }
    }
}
