use std::io;
use std::time::Duration;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, Lines};

use common::games::tictactoe::{MoveError, SessionError, TicTacToeSession};
use common::log;
use crate::input::{ClientCommand, parse_command, parse_yes_no};
use crate::ui::{HELP_TEXT, render_screen};

async fn write_out<W: AsyncWrite + Unpin>(output: &mut W, text: &str) -> io::Result<()> {
    output.write_all(text.as_bytes()).await?;
    output.flush().await
}

fn describe_rejection(error: &SessionError) -> String {
    match error {
        SessionError::Move(MoveError::IllegalMove { index, .. }) => {
            format!("Cell {} is not available.\n", index + 1)
        }
        SessionError::GameOver => "The game is over.\n".to_string(),
        SessionError::NotYourTurn => "Wait for the computer's move.\n".to_string(),
    }
}

/// Keeps asking until the answer is yes or no; end of input counts as no.
async fn ask_play_again<R, W>(lines: &mut Lines<R>, output: &mut W) -> io::Result<bool>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    loop {
        write_out(output, "Play again? [y/n] ").await?;
        let Some(line) = lines.next_line().await? else {
            return Ok(false);
        };
        if let Some(answer) = parse_yes_no(&line) {
            return Ok(answer);
        }
    }
}

/// Runs games until the player quits, declines a replay, or input ends.
pub async fn run_tictactoe_game<R, W>(
    session: &mut TicTacToeSession,
    computer_move_delay: Duration,
    input: R,
    output: &mut W,
) -> io::Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut lines = input.lines();
    write_out(output, &format!("{}\n", HELP_TEXT)).await?;

    loop {
        write_out(output, &format!("{}\n", render_screen(session))).await?;

        if session.is_computer_turn() {
            tokio::time::sleep(computer_move_delay).await;
            if session.computer_move().is_none() {
                log!("Computer had no move to play");
                return Ok(());
            }
            continue;
        }

        if session.state().is_terminal() {
            if ask_play_again(&mut lines, output).await? {
                session.reset_board();
                continue;
            }
            return Ok(());
        }

        write_out(output, "> ").await?;
        let Some(line) = lines.next_line().await? else {
            log!("Input closed");
            return Ok(());
        };

        match parse_command(&line) {
            Ok(ClientCommand::PlaceMark(index)) => {
                if let Err(e) = session.human_move(index) {
                    log!("Move ignored: {}", e);
                    write_out(output, &describe_rejection(&e)).await?;
                }
            }
            Ok(ClientCommand::ResetBoard) => session.reset_board(),
            Ok(ClientCommand::ResetScores) => session.reset_scores(),
            Ok(ClientCommand::ToggleMode) => session.set_mode(session.mode().toggled()),
            Ok(ClientCommand::Help) => write_out(output, &format!("{}\n", HELP_TEXT)).await?,
            Ok(ClientCommand::Quit) => return Ok(()),
            Err(message) => write_out(output, &format!("{}\n", message)).await?,
        }
    }
}
