use std::fmt;

use super::types::{Mark, Position};

pub const BOARD_SIZE: usize = 3;

/// 3x3 grid of marks. Queries answer structurally and accept any
/// configuration; legality of the position is the turn loop's invariant.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Board {
    cells: [[Mark; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    pub fn new() -> Self {
        Self {
            cells: [[Mark::Empty; BOARD_SIZE]; BOARD_SIZE],
        }
    }

    pub fn from_rows(cells: [[Mark; BOARD_SIZE]; BOARD_SIZE]) -> Self {
        Self { cells }
    }

    pub fn mark_at(&self, position: Position) -> Mark {
        self.cells[position.row][position.col]
    }

    pub(crate) fn set_mark(&mut self, position: Position, mark: Mark) {
        self.cells[position.row][position.col] = mark;
    }

    pub fn is_winner(&self, mark: Mark) -> bool {
        let any_row = self
            .cells
            .iter()
            .any(|row| row.iter().all(|&cell| cell == mark));
        if any_row {
            return true;
        }

        let any_column =
            (0..BOARD_SIZE).any(|col| self.cells.iter().all(|row| row[col] == mark));
        if any_column {
            return true;
        }

        if (0..BOARD_SIZE).all(|i| self.cells[i][i] == mark) {
            return true;
        }

        (0..BOARD_SIZE).all(|i| self.cells[i][BOARD_SIZE - 1 - i] == mark)
    }

    pub fn is_full(&self) -> bool {
        self.cells
            .iter()
            .all(|row| row.iter().all(|&cell| cell != Mark::Empty))
    }

    /// Empty cells in row-major order. The search relies on this order for
    /// its deterministic tie-break.
    pub fn available_moves(&self) -> Vec<Position> {
        let mut moves = Vec::new();
        for (row, cells) in self.cells.iter().enumerate() {
            for (col, &cell) in cells.iter().enumerate() {
                if cell == Mark::Empty {
                    moves.push(Position::new(row, col));
                }
            }
        }
        moves
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row_index, row) in self.cells.iter().enumerate() {
            let rendered: Vec<String> =
                row.iter().map(|mark| format!(" {} ", mark.as_char())).collect();
            writeln!(f, "{}", rendered.join("|"))?;
            if row_index < BOARD_SIZE - 1 {
                writeln!(f, "---|---|---")?;
            }
        }
        Ok(())
    }
}

/// Speculative placement that restores the cell to Empty when dropped.
/// The search places every trial mark through this guard, so a branch
/// cannot leak its mutation to sibling branches.
pub struct TrialMove<'a> {
    board: &'a mut Board,
    position: Position,
}

impl<'a> TrialMove<'a> {
    pub fn place(board: &'a mut Board, position: Position, mark: Mark) -> Self {
        board.set_mark(position, mark);
        Self { board, position }
    }

    pub fn board_mut(&mut self) -> &mut Board {
        self.board
    }
}

impl Drop for TrialMove<'_> {
    fn drop(&mut self) {
        self.board.set_mark(self.position, Mark::Empty);
    }
}
