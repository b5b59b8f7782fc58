//! The interface used by front ends to run a human-versus-computer game

use tracing::debug;

use crate::position::{GameState, Position, Rejected, Side};
use crate::search::Searcher;
use crate::DEFAULT_DEPTH;

/// The empty board, with the human to move
pub fn new_game() -> Position {
    Position::new()
}

/// Plays the human's tile in `column`
pub fn human_move(position: &Position, column: usize) -> Result<Position, Rejected> {
    if position.is_terminal() {
        return Err(Rejected::GameOver);
    }
    if position.to_move() != Side::Human {
        return Err(Rejected::OutOfTurn);
    }
    position.apply_move(column)
}

/// Plays the computer's reply, searching `DEFAULT_DEPTH` plies ahead
///
/// Check [`is_terminal`] first: a finished game is returned unchanged.
pub fn automated_move(position: &Position) -> Position {
    Searcher::default().search(position).position
}

pub fn is_terminal(position: &Position) -> bool {
    position.is_terminal()
}

pub fn winning_side(position: &Position) -> Option<Side> {
    position.winner()
}

/// A single game in progress, with the history of columns played
#[derive(Clone, Debug)]
pub struct Game {
    position: Position,
    searcher: Searcher,
    /// 0-indexed columns played so far, in the format accepted by `Position::from_moves`
    pub moves: String,
}

impl Game {
    pub fn new() -> Self {
        Self::with_depth(DEFAULT_DEPTH)
    }

    /// Starts a game against a computer that looks `depth` plies ahead
    pub fn with_depth(depth: u32) -> Self {
        Self {
            position: new_game(),
            searcher: Searcher::new(depth),
            moves: String::new(),
        }
    }

    pub fn position(&self) -> &Position {
        &self.position
    }

    pub fn state(&self) -> GameState {
        self.position.state()
    }

    /// Nodes searched by the computer over the whole game
    pub fn node_count(&self) -> usize {
        self.searcher.node_count
    }

    /// Plays the human's move, leaving the game unchanged if it is rejected
    pub fn play_human(&mut self, column: usize) -> Result<GameState, Rejected> {
        self.position = human_move(&self.position, column)?;
        self.moves.push_str(&column.to_string());
        Ok(self.state())
    }

    /// Lets the computer reply, returning the column it chose
    pub fn play_computer(&mut self) -> Result<usize, Rejected> {
        if self.position.is_terminal() {
            return Err(Rejected::GameOver);
        }
        if self.position.to_move() != Side::Computer {
            return Err(Rejected::OutOfTurn);
        }

        let before = self.position;
        let result = self.searcher.search_parallel(&before);
        // the searched position differs from `before` in exactly one column
        let column = match before
            .valid_moves()
            .into_iter()
            .find(|&c| before.apply_move(c).ok() == Some(result.position))
        {
            Some(column) => column,
            None => unreachable!("search returned a position that is not a child"),
        };

        debug!(column, score = result.score, "computer move");
        self.position = result.position;
        self.moves.push_str(&column.to_string());
        Ok(column)
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use anyhow::Result;

    #[test]
    fn human_moves_first() {
        let position = new_game();
        assert_eq!(position.to_move(), Side::Human);
        assert!(!is_terminal(&position));
        assert_eq!(winning_side(&position), None);
    }

    #[test]
    fn human_move_checks_turn_and_state() -> Result<()> {
        let position = human_move(&new_game(), 3)?;
        assert_eq!(human_move(&position, 2), Err(Rejected::OutOfTurn));

        let won = Position::from_moves("0616263")?;
        assert_eq!(human_move(&won, 4), Err(Rejected::GameOver));
        assert_eq!(winning_side(&won), Some(Side::Human));
        Ok(())
    }

    #[test]
    fn automated_move_blocks_open_three() -> Result<()> {
        // ...X...
        // ...X...
        // O..XO..
        let position = Position::from_moves("30313")?;
        let reply = automated_move(&position);
        assert_eq!(reply, position.apply_move(3)?);
        assert_eq!(reply.to_move(), Side::Human);

        let won = Position::from_moves("0616263")?;
        assert_eq!(automated_move(&won), won);
        Ok(())
    }

    #[test]
    fn rejected_moves_leave_the_game_unchanged() -> Result<()> {
        let mut game = Game::with_depth(3);
        game.play_human(3)?;
        let column = game.play_computer()?;
        assert_eq!(game.moves, format!("3{}", column));

        let before = *game.position();
        let moves = game.moves.clone();
        assert_eq!(game.play_computer(), Err(Rejected::OutOfTurn));
        assert_eq!(game.play_human(9), Err(Rejected::OutOfRange { column: 9 }));
        assert_eq!(*game.position(), before);
        assert_eq!(game.moves, moves);
        assert_eq!(Position::from_moves(&game.moves)?, before);
        Ok(())
    }

    #[test]
    fn finished_games_accept_no_moves() -> Result<()> {
        let mut game = Game::with_depth(2);
        while game.state() == GameState::InProgress {
            let column = game.position().valid_moves()[0];
            if game.play_human(column)? != GameState::InProgress {
                break;
            }
            game.play_computer()?;
        }

        assert_ne!(game.state(), GameState::InProgress);
        assert_eq!(game.play_human(3), Err(Rejected::GameOver));
        assert_eq!(game.play_computer(), Err(Rejected::GameOver));
        assert!(game.node_count() > 0);
        Ok(())
    }
}
