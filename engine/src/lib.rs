pub mod config;
pub mod logger;

mod board;
mod bot;
mod game_state;
mod types;

pub use board::{BOARD_SIZE, Board, TrialMove};
pub use bot::{find_best_move, minimax};
pub use game_state::GameState;
pub use types::{GameStatus, Mark, Position};
