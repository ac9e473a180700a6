mod args;
mod config;
mod input;
mod runner;
mod ui;

use std::time::Duration;
use clap::Parser;
use tokio::io::BufReader;
use common::config::Validate;
use common::games::SessionRng;
use common::games::tictactoe::TicTacToeSession;
use common::{log, logger};

use args::Args;
use config::get_config_manager;
use runner::run_tictactoe_game;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let mut config = get_config_manager(&args.config).get_config()?;
    args.apply_to(&mut config);
    config.validate()?;

    let prefix = if config.log.use_prefix {
        Some("Client".to_string())
    } else {
        None
    };
    logger::init_logger(prefix, config.log.file.as_deref())?;

    let rng = match args.seed {
        Some(seed) => SessionRng::new(seed),
        None => SessionRng::from_random(),
    };
    let mut session = TicTacToeSession::new(config.game.session_settings(), rng)?;

    log!("Tic Tac Toe client started with config {}", args.config);

    let delay = Duration::from_millis(u64::from(config.game.computer_move_delay_ms));
    let stdin = BufReader::new(tokio::io::stdin());
    let mut stdout = tokio::io::stdout();
    run_tictactoe_game(&mut session, delay, stdin, &mut stdout).await?;

    log!("Client exiting, final score {}", session.score());
    Ok(())
}
