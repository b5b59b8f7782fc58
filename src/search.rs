//! An agent to choose moves for the computer in Connect 4

use rayon::prelude::*;
use tracing::{debug, trace};

use crate::{evaluation::evaluate, position::Position, DEFAULT_DEPTH, INF};

/// The outcome of a search from some root position
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct SearchResult {
    /// The score of `position`, from the computer's point of view
    pub score: i32,
    /// The position after the chosen move, or the root itself if no move exists
    pub position: Position,
}

/// A depth-limited minimax search with alpha-beta pruning
///
/// # Notes
/// The search always maximises the computer's score at the root, so it should
/// only be asked for a move when it is the computer's turn. Children are
/// explored in ascending column order and the earliest child keeps its place
/// on equal scores, which makes the chosen move deterministic for a given depth.
#[derive(Clone, Debug)]
pub struct Searcher {
    max_depth: u32,

    /// The number of nodes searched by this `Searcher` so far (for diagnostics only)
    pub node_count: usize,
}

impl Searcher {
    /// Creates a new `Searcher` that looks `max_depth` plies ahead
    pub fn new(max_depth: u32) -> Self {
        Self {
            max_depth,
            node_count: 0,
        }
    }

    pub fn max_depth(&self) -> u32 {
        self.max_depth
    }

    /// Performs game tree search
    ///
    /// Returns the score of `position` and the child that achieves it, or
    /// `position` itself at the depth limit or the end of the game
    fn minimax(
        &mut self,
        position: &Position,
        depth: u32,
        mut alpha: i32,
        mut beta: i32,
        maximizing: bool,
    ) -> (i32, Position) {
        self.node_count += 1;

        if depth == 0 || position.is_terminal() {
            return (evaluate(position), *position);
        }

        let mut best: Option<(i32, Position)> = None;
        for child in position.children() {
            let (score, _) = self.minimax(&child, depth - 1, alpha, beta, !maximizing);

            if maximizing {
                // only a strictly better score displaces an earlier column
                if best.map_or(true, |(best_score, _)| score > best_score) {
                    best = Some((score, child));
                }
                alpha = alpha.max(score);
            } else {
                if best.map_or(true, |(best_score, _)| score < best_score) {
                    best = Some((score, child));
                }
                beta = beta.min(score);
            }

            if beta <= alpha {
                trace!(depth, alpha, beta, "pruned");
                break;
            }
        }

        match best {
            Some(best) => best,
            None => unreachable!("non-terminal position without children:\n{:?}", position),
        }
    }

    /// Finds the best move for the computer from `position`
    pub fn search(&mut self, position: &Position) -> SearchResult {
        let (score, position) = self.minimax(position, self.max_depth, -INF, INF, true);

        debug!(
            depth = self.max_depth,
            score,
            nodes = self.node_count,
            parallel = false,
            "search finished"
        );
        SearchResult { score, position }
    }

    /// Finds the same move as [`Searcher::search`], scoring the root's children in parallel
    ///
    /// Each child is searched with a full window. The root never prunes, as its
    /// upper bound stays at `INF`, so the chosen child and score match the
    /// sequential search.
    pub fn search_parallel(&mut self, position: &Position) -> SearchResult {
        if self.max_depth == 0 || position.is_terminal() {
            return self.search(position);
        }

        let depth = self.max_depth - 1;
        let scored: Vec<(i32, Position, usize)> = position
            .children()
            .into_par_iter()
            .map(|child| {
                let mut searcher = Searcher::new(depth);
                let (score, _) = searcher.minimax(&child, depth, -INF, INF, false);
                (score, child, searcher.node_count)
            })
            .collect();

        self.node_count += 1 + scored.iter().map(|&(_, _, nodes)| nodes).sum::<usize>();

        let mut best: Option<(i32, Position)> = None;
        for &(score, child, _) in scored.iter() {
            if best.map_or(true, |(best_score, _)| score > best_score) {
                best = Some((score, child));
            }
        }
        let (score, position) = match best {
            Some(best) => best,
            None => unreachable!("non-terminal position without children:\n{:?}", position),
        };

        debug!(
            depth = self.max_depth,
            score,
            nodes = self.node_count,
            parallel = true,
            "search finished"
        );
        SearchResult { score, position }
    }
}

impl Default for Searcher {
    fn default() -> Self {
        Self::new(DEFAULT_DEPTH)
    }
}

/// Returns the position after the computer's best move, looking `max_depth` plies ahead
///
/// A finished game has no moves, so a terminal `position` is returned unchanged.
pub fn best_move(position: &Position, max_depth: u32) -> Position {
    Searcher::new(max_depth).search(position).position
}
