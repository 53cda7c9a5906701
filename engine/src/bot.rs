use super::board::{Board, TrialMove};
use super::types::{Mark, Position};

const WIN_SCORE: i32 = 10;

/// Optimal move for the AI (O). Scores every empty cell with a full-depth
/// minimax and keeps the first cell in row-major order with the strictly
/// greatest score. Returns `None` only when the board has no empty cells,
/// which the turn loop rules out by checking terminal status first.
pub fn find_best_move(board: &Board) -> Option<Position> {
    let moves = board.available_moves();
    if moves.is_empty() {
        return None;
    }

    // Trials run on a scratch copy so the caller's board is never touched.
    let mut scratch = *board;
    let mut best_move = None;
    let mut best_score = i32::MIN;

    for position in moves {
        let mut trial = TrialMove::place(&mut scratch, position, Mark::O);
        let score = minimax(trial.board_mut(), 0, false);
        drop(trial);

        if score > best_score {
            best_score = score;
            best_move = Some(position);
        }
    }

    best_move
}

/// Exhaustive adversarial evaluation. O maximizes, X minimizes. Terminal
/// scores are depth-biased so faster wins and slower losses score better:
/// an X line is worth `-10 + depth`, an O line `10 - depth`, a full board 0.
/// The board is left exactly as it was passed in.
pub fn minimax(board: &mut Board, depth: i32, is_maximizing: bool) -> i32 {
    if board.is_winner(Mark::X) {
        return -WIN_SCORE + depth;
    }
    if board.is_winner(Mark::O) {
        return WIN_SCORE - depth;
    }
    if board.is_full() {
        return 0;
    }

    let mover = if is_maximizing { Mark::O } else { Mark::X };
    let mut best_score = if is_maximizing { i32::MIN } else { i32::MAX };

    for position in board.available_moves() {
        let mut trial = TrialMove::place(board, position, mover);
        let score = minimax(trial.board_mut(), depth + 1, !is_maximizing);
        drop(trial);

        best_score = if is_maximizing {
            best_score.max(score)
        } else {
            best_score.min(score)
        };
    }

    best_score
}
