use anyhow::{anyhow, Result};
use thiserror::Error;

use std::fmt;

use crate::windows::{cell_index, WINDOWS};
use crate::{HEIGHT, WIDTH};

/// One of the two players
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Side {
    /// The human player, who always moves first
    Human,
    /// The automated player, whose score the search maximises
    Computer,
}

impl Side {
    pub fn opponent(self) -> Self {
        match self {
            Side::Human => Side::Computer,
            Side::Computer => Side::Human,
        }
    }
}

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Cell {
    Empty,
    Occupied(Side),
}

impl Cell {
    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }
}

/// Where a game stands after the latest move
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum GameState {
    InProgress,
    Won(Side),
    Draw,
}

/// Reasons a move is refused. The position it was played on is left unchanged.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Error)]
pub enum Rejected {
    #[error("Invalid move, column {column} out of range. Columns must be below {max}", max = WIDTH)]
    OutOfRange { column: usize },

    #[error("Invalid move, column {column} full")]
    ColumnFull { column: usize },

    #[error("Invalid move, the game is over")]
    GameOver,

    #[error("Invalid move, it is not your turn")]
    OutOfTurn,
}

/// An immutable snapshot of the board and the player to move
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
pub struct Position {
    cells: [Cell; WIDTH * HEIGHT], // cells are stored left-to-right, top-to-bottom
    to_move: Side,
}

impl Position {
    /// The empty board, with the human to move
    pub fn new() -> Self {
        Self {
            cells: [Cell::Empty; WIDTH * HEIGHT],
            to_move: Side::Human,
        }
    }

    /// Plays a string of 0-indexed column digits from the empty board
    pub fn from_moves<S: AsRef<str>>(moves: S) -> Result<Self> {
        let mut position = Self::new();

        for column_char in moves.as_ref().chars() {
            match column_char.to_digit(10).map(|c| c as usize) {
                Some(column) => {
                    // abort if the position is won at any point
                    if position.winner().is_some() {
                        return Err(anyhow!("Invalid position, game is over"));
                    }
                    position = position.apply_move(column)?;
                }
                _ => return Err(anyhow!("could not parse '{}' as a valid move", column_char)),
            }
        }
        Ok(position)
    }

    pub fn to_move(&self) -> Side {
        self.to_move
    }

    /// The contents of a cell, with row 0 at the top of the board
    pub fn cell(&self, row: usize, column: usize) -> Cell {
        self.cells[cell_index(row, column)]
    }

    pub fn num_moves(&self) -> usize {
        self.cells.iter().filter(|c| !c.is_empty()).count()
    }

    pub fn playable(&self, column: usize) -> bool {
        column < WIDTH && self.cell(0, column).is_empty()
    }

    /// Columns that still have room, in ascending order
    pub fn valid_moves(&self) -> Vec<usize> {
        (0..WIDTH).filter(|&column| self.playable(column)).collect()
    }

    /// Returns the position after the player to move drops a tile in `column`
    pub fn apply_move(&self, column: usize) -> Result<Self, Rejected> {
        if column >= WIDTH {
            return Err(Rejected::OutOfRange { column });
        }
        // the lowest empty cell, searching up from the bottom row
        let row = (0..HEIGHT)
            .rev()
            .find(|&row| self.cell(row, column).is_empty())
            .ok_or(Rejected::ColumnFull { column })?;

        let mut next = *self;
        next.cells[cell_index(row, column)] = Cell::Occupied(self.to_move);
        next.to_move = self.to_move.opponent();
        Ok(next)
    }

    /// Checks every window in every direction for four tiles of `side`
    pub fn is_winner(&self, side: Side) -> bool {
        let tile = Cell::Occupied(side);
        WINDOWS
            .iter()
            .any(|window| window.iter().all(|&i| self.cells[i] == tile))
    }

    pub fn winner(&self) -> Option<Side> {
        if self.is_winner(Side::Human) {
            Some(Side::Human)
        } else if self.is_winner(Side::Computer) {
            Some(Side::Computer)
        } else {
            None
        }
    }

    pub fn is_full(&self) -> bool {
        (0..WIDTH).all(|column| !self.cell(0, column).is_empty())
    }

    pub fn is_terminal(&self) -> bool {
        self.winner().is_some() || self.is_full()
    }

    pub fn state(&self) -> GameState {
        match self.winner() {
            Some(side) => GameState::Won(side),
            None if self.is_full() => GameState::Draw,
            None => GameState::InProgress,
        }
    }

    /// Every position one move away, in ascending column order
    pub fn children(&self) -> Vec<Self> {
        if self.is_terminal() {
            return Vec::new();
        }
        self.valid_moves()
            .into_iter()
            .filter_map(|column| self.apply_move(column).ok())
            .collect()
    }

    pub(crate) fn cells(&self) -> &[Cell; WIDTH * HEIGHT] {
        &self.cells
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Position ({:?} to move)", self.to_move)?;
        for row in 0..HEIGHT {
            for column in 0..WIDTH {
                let c = match self.cell(row, column) {
                    Cell::Empty => '.',
                    Cell::Occupied(Side::Human) => 'X',
                    Cell::Occupied(Side::Computer) => 'O',
                };
                write!(f, "{}", c)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
