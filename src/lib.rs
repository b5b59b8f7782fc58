//! A minimax agent for playing the board game 'Connect 4'
//!
//! This agent explores the game tree to a fixed depth with alpha-beta pruning,
//! scoring the leaves with a hand-written positional heuristic.
//!
//! # Basic Usage
//!
//! ```
//! use connect4_minimax::{game, position::Side};
//!
//!# use std::error::Error;
//!# fn main() -> Result<(), Box<dyn Error>> {
//! let position = game::new_game();
//! let position = game::human_move(&position, 3)?;
//! let position = game::automated_move(&position);
//!
//! assert_eq!(position.to_move(), Side::Human);
//! assert_eq!(position.num_moves(), 2);
//!# Ok(())
//!# }
//! ```

use static_assertions::*;
pub use anyhow;

pub mod windows;

pub mod position;

pub mod evaluation;

pub mod search;

pub mod game;


/// The width of the game board in tiles
pub const WIDTH: usize = 7;

/// The height of the game board in tiles
pub const HEIGHT: usize = 6;

/// The number of plies searched for each computer move
pub const DEFAULT_DEPTH: u32 = 7;

/// The score of a position won by the computer, negated for the human
pub const WIN_SCORE: i32 = 1_000_000;

/// The initial width of the search window
pub const INF: i32 = i32::MAX;

// a four-cell window must fit both ways for every direction we score
const_assert!(WIDTH >= 4 && HEIGHT >= 4);
// window scores must never be confused with a won position
const_assert!(INF > WIN_SCORE);
