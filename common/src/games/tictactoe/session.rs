use crate::games::SessionRng;
use crate::log;
use super::bot_controller::calculate_move;
use super::game_state::TicTacToeGameState;
use super::score::Score;
use super::settings::{GameMode, TicTacToeSessionSettings};
use super::types::{Mark, MoveError, Outcome};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionError {
    Move(MoveError),
    GameOver,
    NotYourTurn,
}

impl std::fmt::Display for SessionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SessionError::Move(e) => write!(f, "{}", e),
            SessionError::GameOver => write!(f, "Game is already over"),
            SessionError::NotYourTurn => write!(f, "Not your turn"),
        }
    }
}

impl std::error::Error for SessionError {}

impl From<MoveError> for SessionError {
    fn from(e: MoveError) -> Self {
        SessionError::Move(e)
    }
}

/// Drives one board at a time plus the score that outlives it.
pub struct TicTacToeSession {
    game_state: TicTacToeGameState,
    score: Score,
    settings: TicTacToeSessionSettings,
    rng: SessionRng,
}

impl TicTacToeSession {
    pub fn new(settings: TicTacToeSessionSettings, rng: SessionRng) -> Result<Self, String> {
        settings.validate()?;
        log!(
            "New session: mode={:?}, computer={}, bot={:?}, seed={}",
            settings.mode,
            settings.computer_mark,
            settings.bot_type,
            rng.seed()
        );

        Ok(Self {
            game_state: TicTacToeGameState::new(),
            score: Score::new(),
            settings,
            rng,
        })
    }

    pub fn state(&self) -> &TicTacToeGameState {
        &self.game_state
    }

    pub fn score(&self) -> &Score {
        &self.score
    }

    pub fn settings(&self) -> &TicTacToeSessionSettings {
        &self.settings
    }

    pub fn mode(&self) -> GameMode {
        self.settings.mode
    }

    pub fn is_computer_turn(&self) -> bool {
        self.settings.mode == GameMode::PlayerVsComputer
            && !self.game_state.is_terminal()
            && self.game_state.current_mark() == self.settings.computer_mark
    }

    pub fn human_move(&mut self, index: usize) -> Result<Outcome, SessionError> {
        if self.game_state.is_terminal() {
            return Err(SessionError::GameOver);
        }
        if self.is_computer_turn() {
            return Err(SessionError::NotYourTurn);
        }

        let mark = self.game_state.current_mark();
        self.game_state.apply_move(index, mark)?;
        log!("Player {} placed at {}", mark, index);

        Ok(self.finish_turn())
    }

    /// Plays the computer's reply; `None` when it is not the computer's turn.
    pub fn computer_move(&mut self) -> Option<(usize, Outcome)> {
        if !self.is_computer_turn() {
            return None;
        }

        let mark = self.settings.computer_mark;
        let index = calculate_move(self.settings.bot_type, &self.game_state, mark, &mut self.rng)?;

        if let Err(e) = self.game_state.apply_move(index, mark) {
            log!("Computer move rejected: {}", e);
            return None;
        }
        log!("Computer {} placed at {}", mark, index);

        Some((index, self.finish_turn()))
    }

    fn finish_turn(&mut self) -> Outcome {
        let outcome = self.game_state.outcome();
        if outcome.is_over() {
            self.score.record(outcome);
            log!("Game over: {:?}, score {}", outcome, self.score);
        } else {
            self.game_state.switch_turn();
        }
        outcome
    }

    pub fn reset_board(&mut self) {
        self.game_state = TicTacToeGameState::new();
    }

    pub fn reset_scores(&mut self) {
        self.score.reset();
    }

    /// Switching mode starts a new board and keeps the score.
    pub fn set_mode(&mut self, mode: GameMode) {
        self.settings.mode = mode;
        self.reset_board();
        log!("Mode changed to {:?}", mode);
    }

    pub fn status_message(&self) -> String {
        match self.game_state.outcome() {
            Outcome::InProgress => format!("Player {}'s turn", self.game_state.current_mark()),
            Outcome::Win(mark) => {
                if self.settings.mode == GameMode::PlayerVsComputer
                    && mark == self.settings.computer_mark
                {
                    "Computer wins!".to_string()
                } else {
                    format!("Player {} wins!", mark)
                }
            }
            Outcome::Draw => "It's a draw!".to_string(),
        }
    }

    pub fn human_mark(&self) -> Option<Mark> {
        match self.settings.mode {
            GameMode::PlayerVsPlayer => None,
            GameMode::PlayerVsComputer => self.settings.computer_mark.opponent(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::TicTacToeBotType;

    fn create_session(mode: GameMode) -> TicTacToeSession {
        let settings = TicTacToeSessionSettings {
            mode,
            computer_mark: Mark::O,
            bot_type: TicTacToeBotType::Minimax,
        };
        TicTacToeSession::new(settings, SessionRng::new(42)).unwrap()
    }

    fn play_x_wins(session: &mut TicTacToeSession) {
        for index in [0, 3, 1, 4] {
            assert_eq!(session.human_move(index), Ok(Outcome::InProgress));
        }
        assert_eq!(session.human_move(2), Ok(Outcome::Win(Mark::X)));
    }

    #[test]
    fn test_pvp_alternates_and_records_win_once() {
        let mut session = create_session(GameMode::PlayerVsPlayer);
        play_x_wins(&mut session);
        assert_eq!(session.score().wins(Mark::X), 1);
        assert_eq!(session.status_message(), "Player X wins!");

        assert_eq!(session.human_move(5), Err(SessionError::GameOver));
        assert_eq!(session.computer_move(), None);
        assert_eq!(session.score().games_played(), 1);
    }

    #[test]
    fn test_illegal_move_is_rejected_without_state_change() {
        let mut session = create_session(GameMode::PlayerVsPlayer);
        session.human_move(4).unwrap();
        let before = *session.state();

        let result = session.human_move(4);
        assert!(matches!(result, Err(SessionError::Move(MoveError::IllegalMove { index: 4, .. }))));
        assert!(matches!(session.human_move(12), Err(SessionError::Move(_))));
        assert_eq!(*session.state(), before);
        assert_eq!(session.state().current_mark(), Mark::O);
    }

    #[test]
    fn test_pvc_computer_replies_and_blocks_human() {
        let mut session = create_session(GameMode::PlayerVsComputer);
        assert!(!session.is_computer_turn());
        assert_eq!(session.human_mark(), Some(Mark::X));

        session.human_move(4).unwrap();
        assert!(session.is_computer_turn());
        assert_eq!(session.human_move(0), Err(SessionError::NotYourTurn));

        let (index, outcome) = session.computer_move().unwrap();
        assert!([0, 2, 6, 8].contains(&index));
        assert_eq!(outcome, Outcome::InProgress);
        assert_eq!(session.state().current_mark(), Mark::X);
        assert_eq!(session.computer_move(), None);
    }

    #[test]
    fn test_pvc_computer_never_loses_to_scripted_human() {
        let mut session = create_session(GameMode::PlayerVsComputer);
        while !session.state().is_terminal() {
            if session.is_computer_turn() {
                session.computer_move().unwrap();
            } else {
                let index = session.state().empty_cells()[0];
                session.human_move(index).unwrap();
            }
        }
        assert_ne!(session.state().outcome(), Outcome::Win(Mark::X));
        assert_eq!(session.score().games_played(), 1);
    }

    #[test]
    fn test_computer_moves_first_when_playing_x() {
        let settings = TicTacToeSessionSettings {
            mode: GameMode::PlayerVsComputer,
            computer_mark: Mark::X,
            bot_type: TicTacToeBotType::Random,
        };
        let mut session = TicTacToeSession::new(settings, SessionRng::new(3)).unwrap();
        assert!(session.is_computer_turn());
        assert_eq!(session.human_move(0), Err(SessionError::NotYourTurn));
        let (index, _) = session.computer_move().unwrap();
        assert_eq!(session.state().cell(index), Some(Mark::X));
    }

    #[test]
    fn test_reset_board_keeps_score_and_reset_scores_keeps_board() {
        let mut session = create_session(GameMode::PlayerVsPlayer);
        play_x_wins(&mut session);

        session.reset_board();
        assert_eq!(session.state().outcome(), Outcome::InProgress);
        assert_eq!(session.state().current_mark(), Mark::X);
        assert_eq!(session.score().wins(Mark::X), 1);

        session.human_move(4).unwrap();
        session.reset_scores();
        assert_eq!(session.score().games_played(), 0);
        assert_eq!(session.state().cell(4), Some(Mark::X));
    }

    #[test]
    fn test_set_mode_resets_board_and_keeps_score() {
        let mut session = create_session(GameMode::PlayerVsPlayer);
        play_x_wins(&mut session);
        session.set_mode(GameMode::PlayerVsComputer);
        assert_eq!(session.mode(), GameMode::PlayerVsComputer);
        assert_eq!(session.state().empty_cells().len(), 9);
        assert_eq!(session.score().wins(Mark::X), 1);
    }

    #[test]
    fn test_pvc_computer_win_is_announced_and_scored() {
        let mut session = create_session(GameMode::PlayerVsComputer);
        while !session.state().is_terminal() {
            if session.is_computer_turn() {
                session.computer_move().unwrap();
            } else {
                let index = session.state().empty_cells()[0];
                session.human_move(index).unwrap();
            }
        }
        assert_eq!(session.state().outcome(), Outcome::Win(Mark::O));
        assert_eq!(session.status_message(), "Computer wins!");
        assert_eq!(session.score().wins(Mark::O), 1);
        assert_eq!(session.score().wins(Mark::X), 0);
        assert_eq!(session.score().draws(), 0);
    }

    #[test]
    fn test_pvp_draw_is_announced_and_scored() {
        let mut session = create_session(GameMode::PlayerVsPlayer);
        let moves = [0, 1, 2, 4, 3, 5, 7, 6];
        for index in moves {
            assert_eq!(session.human_move(index), Ok(Outcome::InProgress));
        }
        assert_eq!(session.human_move(8), Ok(Outcome::Draw));
        assert_eq!(session.status_message(), "It's a draw!");
        assert_eq!(session.score().draws(), 1);
        assert_eq!(session.score().games_played(), 1);
        assert_eq!(session.human_move(8), Err(SessionError::GameOver));
        assert_eq!(session.score().draws(), 1);
    }

    #[test]
    fn test_status_messages() {
        let mut session = create_session(GameMode::PlayerVsComputer);
        assert_eq!(session.status_message(), "Player X's turn");
        session.human_move(0).unwrap();
        assert_eq!(session.status_message(), "Player O's turn");
    }

    #[test]
    fn test_empty_computer_mark_is_rejected() {
        let settings = TicTacToeSessionSettings {
            computer_mark: Mark::Empty,
            ..TicTacToeSessionSettings::default()
        };
        assert!(TicTacToeSession::new(settings, SessionRng::new(0)).is_err());
    }
}
