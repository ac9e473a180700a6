use common::games::tictactoe::{BOARD_SIDE, GameMode, Mark, Position, TicTacToeSession};

pub const HELP_TEXT: &str = "\
Commands:
  1-9        place your mark (cells numbered left to right, top to bottom)
  r, reset   start a new board (scores are kept)
  s, scores  reset the scores
  m, mode    switch between 2 Players and Single Player
  h, help    show this help
  q, quit    exit";

/// Empty cells show their number so the board doubles as the input legend.
pub fn render_board(session: &TicTacToeSession) -> String {
    let state = session.state();
    let winning_line = state.winning_line();
    let mut out = String::new();

    for row in 0..BOARD_SIDE {
        let cells: Vec<String> = (0..BOARD_SIDE)
            .map(|col| {
                let index = row * BOARD_SIDE + col;
                let mark = state.board()[index];
                let highlighted = winning_line.is_some_and(|line| line.contains(index));
                match (mark, highlighted) {
                    (Mark::Empty, _) => format!(" {} ", index + 1),
                    (mark, true) => format!("[{}]", mark),
                    (mark, false) => format!(" {} ", mark),
                }
            })
            .collect();
        out.push_str(&cells.join("|"));
        out.push('\n');
        if row + 1 < BOARD_SIDE {
            out.push_str("---+---+---\n");
        }
    }

    out
}

pub fn render_header(session: &TicTacToeSession) -> String {
    match session.human_mark() {
        Some(mark) => format!(
            "Mode: {} (you are {})    {}",
            session.mode().label(),
            mark,
            session.score()
        ),
        None => format!("Mode: {}    {}", session.mode().label(), session.score()),
    }
}

/// Cells are reported 1-9, matching the numbers shown on the board.
pub fn render_last_move(session: &TicTacToeSession) -> Option<String> {
    let index = session.state().last_move()?;
    let mark = session.state().cell(index)?;
    let by_computer = session.mode() == GameMode::PlayerVsComputer
        && mark == session.settings().computer_mark;
    if by_computer {
        Some(format!("Computer played {}", index + 1))
    } else {
        Some(format!("Player {} played {}", mark, index + 1))
    }
}

fn describe_position(position: Position) -> String {
    format!("row {}, column {}", position.y + 1, position.x + 1)
}

pub fn render_winning_line(session: &TicTacToeSession) -> Option<String> {
    let line = session.state().winning_line()?;
    Some(format!(
        "Line of {} from {} to {}",
        line.mark,
        describe_position(line.start()),
        describe_position(line.end())
    ))
}

pub fn render_screen(session: &TicTacToeSession) -> String {
    let mut screen = format!("\n{}\n\n{}", render_header(session), render_board(session));
    if let Some(last_move) = render_last_move(session) {
        screen.push_str(&last_move);
        screen.push('\n');
    }
    if let Some(line) = render_winning_line(session) {
        screen.push_str(&line);
        screen.push('\n');
    }
    screen.push_str(&session.status_message());
    screen
}
