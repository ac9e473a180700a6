use super::types::{Mark, Outcome};

/// Win/draw tally kept across board resets.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Score {
    x_wins: u32,
    o_wins: u32,
    draws: u32,
}

impl Score {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns false and leaves the tally alone for a game still in progress.
    pub fn record(&mut self, outcome: Outcome) -> bool {
        match outcome {
            Outcome::Win(Mark::X) => self.x_wins += 1,
            Outcome::Win(Mark::O) => self.o_wins += 1,
            Outcome::Draw => self.draws += 1,
            Outcome::Win(Mark::Empty) | Outcome::InProgress => return false,
        }
        true
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn wins(&self, mark: Mark) -> u32 {
        match mark {
            Mark::X => self.x_wins,
            Mark::O => self.o_wins,
            Mark::Empty => 0,
        }
    }

    pub fn draws(&self) -> u32 {
        self.draws
    }

    pub fn games_played(&self) -> u32 {
        self.x_wins + self.o_wins + self.draws
    }
}

impl std::fmt::Display for Score {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "X: {}    O: {}    Draws: {}", self.x_wins, self.o_wins, self.draws)
    }
}
