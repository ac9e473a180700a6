mod board;
mod bot_controller;
mod game_state;
mod score;
mod session;
mod settings;
mod types;
mod win_detector;

pub use board::{empty_board, get_available_moves};
pub use bot_controller::{TicTacToeBotType, best_move, calculate_move};
pub use game_state::TicTacToeGameState;
pub use score::Score;
pub use session::{SessionError, TicTacToeSession};
pub use settings::{GameMode, TicTacToeSessionSettings};
pub use types::{
    BOARD_SIDE, Board, CELL_COUNT, IllegalMoveReason, LINES, Mark, MoveError, Outcome, Position,
    WinningLine,
};
pub use win_detector::{check_draw, check_win, check_win_with_line};
