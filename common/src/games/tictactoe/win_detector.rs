use super::board::is_board_full;
use super::types::{Board, LINES, Mark, WinningLine};

pub fn check_win(board: &Board) -> Option<Mark> {
    check_win_with_line(board).map(|line| line.mark)
}

/// First line fully occupied by one mark, in `LINES` order.
pub fn check_win_with_line(board: &Board) -> Option<WinningLine> {
    for line in LINES {
        let [a, b, c] = line;
        let mark = board[a];
        if mark != Mark::Empty && mark == board[b] && mark == board[c] {
            return Some(WinningLine::new(mark, line));
        }
    }
    None
}

pub fn check_draw(board: &Board) -> bool {
    is_board_full(board) && check_win(board).is_none()
}
