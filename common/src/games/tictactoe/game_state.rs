use super::board::{count_marks, empty_board, get_available_moves};
use super::types::{Board, CELL_COUNT, IllegalMoveReason, Mark, MoveError, Outcome, WinningLine};
use super::win_detector::{check_draw, check_win, check_win_with_line};

/// Board plus the mark to move next.
///
/// Outcome is never cached; every predicate recomputes it from the board.
/// Moving past a decided position is prevented by the session, not here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TicTacToeGameState {
    board: Board,
    current_mark: Mark,
    last_move: Option<usize>,
}

impl Default for TicTacToeGameState {
    fn default() -> Self {
        Self::new()
    }
}

impl TicTacToeGameState {
    pub fn new() -> Self {
        Self {
            board: empty_board(),
            current_mark: Mark::X,
            last_move: None,
        }
    }

    /// Builds a state from an arbitrary board, deriving the mover from the mark counts.
    pub fn from_board(board: Board) -> Result<Self, String> {
        let x_count = count_marks(&board, Mark::X);
        let o_count = count_marks(&board, Mark::O);

        let current_mark = if x_count == o_count {
            Mark::X
        } else if x_count == o_count + 1 {
            Mark::O
        } else {
            return Err(format!(
                "Invalid board: {} X marks and {} O marks",
                x_count, o_count
            ));
        };

        Ok(Self {
            board,
            current_mark,
            last_move: None,
        })
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn cell(&self, index: usize) -> Option<Mark> {
        self.board.get(index).copied()
    }

    pub fn current_mark(&self) -> Mark {
        self.current_mark
    }

    pub fn last_move(&self) -> Option<usize> {
        self.last_move
    }

    /// Places `mark` at `index` without advancing the turn.
    pub fn apply_move(&mut self, index: usize, mark: Mark) -> Result<(), MoveError> {
        if index >= CELL_COUNT {
            return Err(MoveError::IllegalMove {
                index,
                reason: IllegalMoveReason::OutOfRange,
            });
        }

        if mark == Mark::Empty {
            return Err(MoveError::IllegalMove {
                index,
                reason: IllegalMoveReason::EmptyMark,
            });
        }

        if self.board[index] != Mark::Empty {
            return Err(MoveError::IllegalMove {
                index,
                reason: IllegalMoveReason::Occupied,
            });
        }

        self.board[index] = mark;
        self.last_move = Some(index);
        Ok(())
    }

    /// Copy of this state with the move applied; `self` is left untouched.
    pub fn after_move(&self, index: usize, mark: Mark) -> Result<Self, MoveError> {
        let mut next = *self;
        next.apply_move(index, mark)?;
        Ok(next)
    }

    pub fn switch_turn(&mut self) {
        if let Some(next) = self.current_mark.opponent() {
            self.current_mark = next;
        }
    }

    pub fn winner(&self) -> Option<Mark> {
        check_win(&self.board)
    }

    pub fn winning_line(&self) -> Option<WinningLine> {
        check_win_with_line(&self.board)
    }

    pub fn is_draw(&self) -> bool {
        check_draw(&self.board)
    }

    pub fn is_terminal(&self) -> bool {
        self.winner().is_some() || self.is_draw()
    }

    pub fn outcome(&self) -> Outcome {
        if let Some(mark) = self.winner() {
            return Outcome::Win(mark);
        }
        if self.is_draw() {
            return Outcome::Draw;
        }
        Outcome::InProgress
    }

    pub fn empty_cells(&self) -> Vec<usize> {
        get_available_moves(&self.board)
    }
}
