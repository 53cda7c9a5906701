use super::board::{BOARD_SIZE, Board};
use super::types::{GameStatus, Mark, Position};

/// Turn state machine for a single game. X always moves first; after every
/// placement the status is re-evaluated in fixed order (X win, O win, full
/// board) and the turn flips only while the game is still in progress.
#[derive(Clone, Debug)]
pub struct GameState {
    board: Board,
    current_mark: Mark,
    status: GameStatus,
    last_move: Option<Position>,
}

impl GameState {
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            current_mark: Mark::X,
            status: GameStatus::InProgress,
            last_move: None,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current_mark(&self) -> Mark {
        self.current_mark
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn last_move(&self) -> Option<Position> {
        self.last_move
    }

    pub fn place_mark(&mut self, position: Position) -> Result<(), String> {
        if self.status != GameStatus::InProgress {
            return Err("Game is already over".to_string());
        }

        if position.row >= BOARD_SIZE || position.col >= BOARD_SIZE {
            return Err("Position out of bounds".to_string());
        }

        if self.board.mark_at(position) != Mark::Empty {
            return Err("Cell is already marked".to_string());
        }

        self.board.set_mark(position, self.current_mark);
        self.last_move = Some(position);

        self.check_game_over();

        if self.status == GameStatus::InProgress {
            self.switch_turn();
        }

        Ok(())
    }

    fn switch_turn(&mut self) {
        self.current_mark = self
            .current_mark
            .opponent()
            .expect("current mark is always X or O");
    }

    fn check_game_over(&mut self) {
        if self.board.is_winner(Mark::X) {
            self.status = GameStatus::XWon;
            return;
        }

        if self.board.is_winner(Mark::O) {
            self.status = GameStatus::OWon;
            return;
        }

        if self.board.is_full() {
            self.status = GameStatus::Draw;
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
