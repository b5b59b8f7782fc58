//! Every run of four cells that can hold a connection
//!
//! Cells are addressed by their flat index `row * WIDTH + column`, with row 0
//! at the top of the board.

use static_assertions::const_assert_eq;

use crate::{HEIGHT, WIDTH};

/// The number of cells in a window
pub const WINDOW_LEN: usize = 4;

/// The number of windows on the board: horizontal, vertical and both diagonals
pub const NUM_WINDOWS: usize = HEIGHT * (WIDTH - WINDOW_LEN + 1)
    + (HEIGHT - WINDOW_LEN + 1) * WIDTH
    + 2 * (HEIGHT - WINDOW_LEN + 1) * (WIDTH - WINDOW_LEN + 1);

const_assert_eq!(NUM_WINDOWS, 69);

/// A run of four flat cell indices
pub type Window = [usize; WINDOW_LEN];

/// Flat index of the cell at `row`, `column`
pub const fn cell_index(row: usize, column: usize) -> usize {
    row * WIDTH + column
}

const fn window(row: usize, column: usize, d_row: isize, d_column: isize) -> Window {
    let mut cells = [0; WINDOW_LEN];
    let mut i = 0;
    while i < WINDOW_LEN {
        let r = row as isize + d_row * i as isize;
        let c = column as isize + d_column * i as isize;
        cells[i] = cell_index(r as usize, c as usize);
        i += 1;
    }
    cells
}

/// Builds the window table, grouped by direction
pub const fn all_windows() -> [Window; NUM_WINDOWS] {
    let mut windows = [[0; WINDOW_LEN]; NUM_WINDOWS];
    let mut n = 0;

    // horizontal
    let mut row = 0;
    while row < HEIGHT {
        let mut column = 0;
        while column + WINDOW_LEN <= WIDTH {
            windows[n] = window(row, column, 0, 1);
            n += 1;
            column += 1;
        }
        row += 1;
    }

    // vertical
    row = 0;
    while row + WINDOW_LEN <= HEIGHT {
        let mut column = 0;
        while column < WIDTH {
            windows[n] = window(row, column, 1, 0);
            n += 1;
            column += 1;
        }
        row += 1;
    }

    // diagonal, down and to the right
    row = 0;
    while row + WINDOW_LEN <= HEIGHT {
        let mut column = 0;
        while column + WINDOW_LEN <= WIDTH {
            windows[n] = window(row, column, 1, 1);
            n += 1;
            column += 1;
        }
        row += 1;
    }

    // diagonal, up and to the right (anchored at the top-right end)
    row = 0;
    while row + WINDOW_LEN <= HEIGHT {
        let mut column = WINDOW_LEN - 1;
        while column < WIDTH {
            windows[n] = window(row, column, 1, -1);
            n += 1;
            column += 1;
        }
        row += 1;
    }

    windows
}

/// The window table, computed at compile time
pub const WINDOWS: [Window; NUM_WINDOWS] = all_windows();

#[cfg(test)]
mod tests {
    use super::*;

    use std::collections::HashSet;

    #[test]
    fn windows_are_distinct() {
        let unique: HashSet<Window> = WINDOWS
            .iter()
            .map(|w| {
                let mut sorted = *w;
                sorted.sort_unstable();
                sorted
            })
            .collect();
        assert_eq!(unique.len(), NUM_WINDOWS);
    }

    #[test]
    fn windows_are_contiguous_lines() {
        for w in WINDOWS.iter() {
            let (r0, c0) = ((w[0] / WIDTH) as isize, (w[0] % WIDTH) as isize);
            let (r1, c1) = ((w[1] / WIDTH) as isize, (w[1] % WIDTH) as isize);
            let (dr, dc) = (r1 - r0, c1 - c0);
            assert!(dr.abs() <= 1 && dc.abs() <= 1 && (dr, dc) != (0, 0));
            for (i, &cell) in w.iter().enumerate() {
                let (r, c) = ((cell / WIDTH) as isize, (cell % WIDTH) as isize);
                assert_eq!((r, c), (r0 + dr * i as isize, c0 + dc * i as isize));
                assert!(cell < WIDTH * HEIGHT);
            }
        }
    }

    #[test]
    fn every_cell_is_covered() {
        let mut counts = [0; WIDTH * HEIGHT];
        for w in WINDOWS.iter() {
            for &cell in w.iter() {
                counts[cell] += 1;
            }
        }
        assert!(counts.iter().all(|&n| n > 0));
        assert_eq!(counts.iter().sum::<usize>(), NUM_WINDOWS * WINDOW_LEN);
        // a corner joins one window per direction except the unreachable diagonal
        assert_eq!(counts[cell_index(0, 0)], 3);
        // the centre of the bottom row is the most connected bottom cell
        assert_eq!(counts[cell_index(HEIGHT - 1, 3)], 7);
    }
}
