use super::types::{Board, CELL_COUNT, Mark};

pub fn empty_board() -> Board {
    [Mark::Empty; CELL_COUNT]
}

pub fn get_available_moves(board: &Board) -> Vec<usize> {
    let mut moves = Vec::new();
    for (index, &cell) in board.iter().enumerate() {
        if cell == Mark::Empty {
            moves.push(index);
        }
    }
    moves
}

pub fn is_board_full(board: &Board) -> bool {
    board.iter().all(|&cell| cell != Mark::Empty)
}

pub fn count_marks(board: &Board, mark: Mark) -> usize {
    board.iter().filter(|&&cell| cell == mark).count()
}
