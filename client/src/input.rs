use common::games::tictactoe::CELL_COUNT;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientCommand {
    /// Zero-based board index.
    PlaceMark(usize),
    ResetBoard,
    ResetScores,
    ToggleMode,
    Help,
    Quit,
}

pub fn parse_command(line: &str) -> Result<ClientCommand, String> {
    let trimmed = line.trim().to_ascii_lowercase();
    match trimmed.as_str() {
        "r" | "reset" => return Ok(ClientCommand::ResetBoard),
        "s" | "scores" => return Ok(ClientCommand::ResetScores),
        "m" | "mode" => return Ok(ClientCommand::ToggleMode),
        "h" | "help" | "?" => return Ok(ClientCommand::Help),
        "q" | "quit" | "exit" => return Ok(ClientCommand::Quit),
        "" => return Err("Enter a cell number 1-9, or 'h' for help".to_string()),
        _ => {}
    }

    match trimmed.parse::<usize>() {
        Ok(cell) if (1..=CELL_COUNT).contains(&cell) => Ok(ClientCommand::PlaceMark(cell - 1)),
        Ok(cell) => Err(format!("Cell {} is out of range, use 1-9", cell)),
        Err(_) => Err(format!("Unknown command '{}', type 'h' for help", line.trim())),
    }
}

/// `None` when the answer is neither yes nor no.
pub fn parse_yes_no(line: &str) -> Option<bool> {
    match line.trim().to_ascii_lowercase().as_str() {
        "y" | "yes" => Some(true),
        "n" | "no" | "q" | "quit" => Some(false),
        _ => None,
    }
}
