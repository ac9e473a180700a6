use clap::{Parser, ValueEnum};
use common::games::tictactoe::{GameMode, Mark, TicTacToeBotType};

use crate::config::{Config, DEFAULT_CONFIG_FILE};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ModeArg {
    Pvp,
    Pvc,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum MarkArg {
    X,
    O,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum BotArg {
    Minimax,
    Random,
}

#[derive(Parser, Debug)]
#[command(name = "tictactoe", about = "Tic Tac Toe in the terminal")]
pub struct Args {
    #[arg(long, default_value = DEFAULT_CONFIG_FILE)]
    pub config: String,
    #[arg(long, value_enum)]
    pub mode: Option<ModeArg>,
    /// Mark played by the computer in single player mode
    #[arg(long, value_enum)]
    pub computer: Option<MarkArg>,
    #[arg(long, value_enum)]
    pub bot: Option<BotArg>,
    #[arg(long)]
    pub seed: Option<u64>,
    #[arg(long)]
    pub use_log_prefix: bool,
}

impl Args {
    /// Command line values win over the config file.
    pub fn apply_to(&self, config: &mut Config) {
        if let Some(mode) = self.mode {
            config.game.mode = match mode {
                ModeArg::Pvp => GameMode::PlayerVsPlayer,
                ModeArg::Pvc => GameMode::PlayerVsComputer,
            };
        }
        if let Some(mark) = self.computer {
            config.game.computer_mark = match mark {
                MarkArg::X => Mark::X,
                MarkArg::O => Mark::O,
            };
        }
        if let Some(bot) = self.bot {
            config.game.bot_type = match bot {
                BotArg::Minimax => TicTacToeBotType::Minimax,
                BotArg::Random => TicTacToeBotType::Random,
            };
        }
        if self.use_log_prefix {
            config.log.use_prefix = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_leave_config_untouched() {
        let args = Args::try_parse_from(["tictactoe"]).unwrap();
        assert_eq!(args.config, DEFAULT_CONFIG_FILE);
        let mut config = Config::default();
        args.apply_to(&mut config);
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_overrides() {
        let args = Args::try_parse_from([
            "tictactoe",
            "--mode",
            "pvp",
            "--computer",
            "x",
            "--bot",
            "random",
            "--seed",
            "17",
            "--use-log-prefix",
        ])
        .unwrap();
        let mut config = Config::default();
        args.apply_to(&mut config);
        assert_eq!(config.game.mode, GameMode::PlayerVsPlayer);
        assert_eq!(config.game.computer_mark, Mark::X);
        assert_eq!(config.game.bot_type, TicTacToeBotType::Random);
        assert!(config.log.use_prefix);
        assert_eq!(args.seed, Some(17));
    }

    #[test]
    fn test_rejects_unknown_mode() {
        assert!(Args::try_parse_from(["tictactoe", "--mode", "online"]).is_err());
    }
}
