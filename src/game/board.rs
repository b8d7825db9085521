use super::PlayerId;

/// The four run directions checked for a win, as (row, col) steps.
/// Horizontal, vertical, diagonal down-right, diagonal down-left.
const RUN_DIRECTIONS: [(i64, i64); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];

/// A `width` x `height` grid of cells, each empty or holding a player's token.
///
/// Row 0 is the top, row `height - 1` is the bottom; dimensions are fixed at
/// construction. Stored row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    width: usize,
    height: usize,
    cells: Vec<Option<PlayerId>>,
}

impl Board {
    /// Create a new empty board. Dimensions are validated by `Game::new`.
    pub(super) fn new(width: usize, height: usize) -> Self {
        Board {
            width,
            height,
            cells: vec![None; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Get the cell at a specific position.
    pub fn get(&self, row: usize, col: usize) -> Option<PlayerId> {
        self.cells[row * self.width + col]
    }

    fn set(&mut self, row: usize, col: usize, token: PlayerId) {
        self.cells[row * self.width + col] = Some(token);
    }

    /// Check if a column has no free cell left.
    pub fn is_column_full(&self, col: usize) -> bool {
        if col >= self.width {
            return true;
        }
        self.get(0, col).is_some()
    }

    /// Find the lowest empty row in a column, scanning from the bottom up.
    pub fn open_row(&self, col: usize) -> Option<usize> {
        (0..self.height).rev().find(|&row| self.get(row, col).is_none())
    }

    /// Drop a token in a column, returning the row where it landed, or `None`
    /// if the column is full. The caller validates the column index.
    pub(super) fn drop_piece(&mut self, col: usize, token: PlayerId) -> Option<usize> {
        let row = self.open_row(col)?;
        self.set(row, col, token);
        Some(row)
    }

    /// Check if every cell on the board is occupied.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| cell.is_some())
    }

    /// Check whether `player` has four-in-a-row anywhere on the board.
    ///
    /// For every cell, four candidate runs of four cells start there, one per
    /// direction in [`RUN_DIRECTIONS`]. A run wins iff all four cells are in
    /// bounds and all four hold `player`'s token. Boards narrower or shorter
    /// than 4 never satisfy the bounds check along that axis, so no win is
    /// possible there.
    pub fn has_connect_four(&self, player: PlayerId) -> bool {
        for y in 0..self.height {
            for x in 0..self.width {
                for (dy, dx) in RUN_DIRECTIONS {
                    if self.run_is_won(y as i64, x as i64, dy, dx, player) {
                        return true;
                    }
                }
            }
        }
        false
    }

    fn run_is_won(&self, y: i64, x: i64, dy: i64, dx: i64, player: PlayerId) -> bool {
        (0..4).all(|k| {
            let (ry, rx) = (y + k * dy, x + k * dx);
            rx >= 0
                && rx < self.width as i64
                && ry >= 0
                && ry < self.height as i64
                && self.get(ry as usize, rx as usize) == Some(player)
        })
    }
}
