use serde::{Deserialize, Serialize};

use crate::games::SessionRng;
use crate::log;
use super::game_state::TicTacToeGameState;
use super::types::Mark;

const WIN_SCORE: i32 = 1;
const LOSS_SCORE: i32 = -1;
const DRAW_SCORE: i32 = 0;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TicTacToeBotType {
    #[default]
    Minimax,
    Random,
}

pub fn calculate_move(
    bot_type: TicTacToeBotType,
    state: &TicTacToeGameState,
    computer_mark: Mark,
    rng: &mut SessionRng,
) -> Option<usize> {
    match bot_type {
        TicTacToeBotType::Random => calculate_random_move(state, rng),
        TicTacToeBotType::Minimax => best_move(state, computer_mark).or_else(|| {
            if state.is_terminal() {
                return None;
            }
            log!("Minimax found no move for {}, falling back to random", computer_mark);
            calculate_random_move(state, rng)
        }),
    }
}

fn calculate_random_move(state: &TicTacToeGameState, rng: &mut SessionRng) -> Option<usize> {
    if state.is_terminal() {
        return None;
    }
    rng.pick(&state.empty_cells())
}

/// Optimal move for `computer_mark` under perfect play by both sides.
///
/// Full-depth minimax over snapshots, no pruning. Among equally scored moves the
/// lowest index wins. Returns `None` on a decided or full board.
pub fn best_move(state: &TicTacToeGameState, computer_mark: Mark) -> Option<usize> {
    let opponent_mark = computer_mark.opponent()?;
    if state.is_terminal() {
        return None;
    }

    let mut best_move = None;
    let mut best_score = i32::MIN;

    for index in state.empty_cells() {
        let Ok(child) = state.after_move(index, computer_mark) else {
            continue;
        };
        let score = minimax(&child, false, computer_mark, opponent_mark);

        if score > best_score {
            best_score = score;
            best_move = Some(index);
        }
    }

    best_move
}

fn minimax(
    state: &TicTacToeGameState,
    is_maximizing: bool,
    computer_mark: Mark,
    opponent_mark: Mark,
) -> i32 {
    if let Some(winner) = state.winner() {
        return if winner == computer_mark { WIN_SCORE } else { LOSS_SCORE };
    }
    if state.is_draw() {
        return DRAW_SCORE;
    }

    let mover = if is_maximizing { computer_mark } else { opponent_mark };
    let mut best = if is_maximizing { i32::MIN } else { i32::MAX };

    for index in state.empty_cells() {
        let Ok(child) = state.after_move(index, mover) else {
            continue;
        };
        let eval = minimax(&child, !is_maximizing, computer_mark, opponent_mark);

        if is_maximizing {
            if eval > best {
                best = eval;
            }
        } else if eval < best {
            best = eval;
        }
    }

    best
}
