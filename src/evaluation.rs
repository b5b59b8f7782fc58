//! Static scoring of positions from the computer's point of view
//!
//! Positive scores favour [`Side::Computer`], the maximising side of the search.
//! The weights are deliberately lopsided: the computer is rewarded for its own
//! partial runs but only penalised for the human's open threes.

use crate::position::{Cell, Position, Side};
use crate::windows::{Window, WINDOWS};
use crate::WIN_SCORE;

/// Four computer tiles in a window
pub const FOUR_SCORE: i32 = 100;
/// Three computer tiles and a gap
pub const THREE_SCORE: i32 = 5;
/// Two computer tiles and two gaps
pub const TWO_SCORE: i32 = 2;
/// Three human tiles and a gap
pub const OPPONENT_THREE_SCORE: i32 = -4;

/// Scores a position, returning `±WIN_SCORE` for decided games
pub fn evaluate(position: &Position) -> i32 {
    if position.is_winner(Side::Computer) {
        WIN_SCORE
    } else if position.is_winner(Side::Human) {
        -WIN_SCORE
    } else {
        heuristic(position)
    }
}

/// Sums the window scores over the whole board
pub fn heuristic(position: &Position) -> i32 {
    WINDOWS
        .iter()
        .map(|window| score_window(position, window))
        .sum()
}

fn score_window(position: &Position, window: &Window) -> i32 {
    let cells = position.cells();
    let (mut computer, mut human, mut empty) = (0, 0, 0);
    for &i in window.iter() {
        match cells[i] {
            Cell::Occupied(Side::Computer) => computer += 1,
            Cell::Occupied(Side::Human) => human += 1,
            Cell::Empty => empty += 1,
        }
    }

    let mut score = match (computer, empty) {
        (4, _) => FOUR_SCORE,
        (3, 1) => THREE_SCORE,
        (2, 2) => TWO_SCORE,
        _ => 0,
    };
    if human == 3 && empty == 1 {
        score += OPPONENT_THREE_SCORE;
    }
    score
}
