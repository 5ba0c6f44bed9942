//! Board module - manages the game grid
//!
//! The board is an NxN grid where each cell is either empty (0) or holds a
//! power-of-two tile. Uses a flat row-major array: index = row * size + col.
//! The size is fixed at construction.
//!
//! Moves are applied line by line (rows for left/right, columns for up/down)
//! with [`collapse_line`], which always compacts towards index 0. Lines for
//! right/down moves are read back-to-front so the same routine serves all
//! four directions.

use crate::error::BoardError;
use crate::types::{
    can_merge, is_valid_tile, Direction, Tile, DEFAULT_SIZE, EMPTY_TILE, MAX_SIZE, MIN_SIZE,
};

/// Result of sliding every line of the board in one direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SlideResult {
    /// Whether any cell changed
    pub moved: bool,
    /// Sum of the tiles created by merges
    pub score_gained: u32,
    /// Number of merges performed
    pub merges: u32,
}

/// Collapse a single line towards index 0.
///
/// Compacts the non-zero values, merges each adjacent equal pair exactly once
/// (a merged tile never merges again in the same pass), re-compacts and pads
/// with zeros. Returns `(score_gained, merges)`. A pair of
/// [`MAX_TILE`](crate::types::MAX_TILE) tiles is left as is.
///
/// ```
/// use tui_2048_core::board::collapse_line;
///
/// let mut line = [2, 2, 2, 0];
/// assert_eq!(collapse_line(&mut line), (4, 1));
/// assert_eq!(line, [4, 2, 0, 0]);
/// ```
pub fn collapse_line(line: &mut [Tile]) -> (u32, u32) {
    let mut compacted: Vec<Tile> = line.iter().copied().filter(|&v| v != EMPTY_TILE).collect();

    let mut score = 0u32;
    let mut merges = 0u32;
    let mut i = 0;
    while i + 1 < compacted.len() {
        if can_merge(compacted[i], compacted[i + 1]) {
            compacted[i] *= 2;
            compacted[i + 1] = EMPTY_TILE;
            score = score.saturating_add(compacted[i]);
            merges += 1;
            // Skip the consumed tile.
            i += 2;
        } else {
            i += 1;
        }
    }

    let mut values = compacted.into_iter().filter(|&v| v != EMPTY_TILE);
    for cell in line.iter_mut() {
        *cell = values.next().unwrap_or(EMPTY_TILE);
    }

    (score, merges)
}

fn check_size(size: usize) -> Result<(), BoardError> {
    if size < MIN_SIZE {
        return Err(BoardError::TooSmall { size });
    }
    if size > MAX_SIZE {
        return Err(BoardError::TooLarge { size });
    }
    Ok(())
}

/// The game board - NxN tiles using flat array storage
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    size: usize,
    /// Flat array of cells, row-major order (row * size + col)
    cells: Vec<Tile>,
}

impl Board {
    /// Create a new empty board
    pub fn new(size: usize) -> Result<Self, BoardError> {
        check_size(size)?;
        Ok(Self {
            size,
            cells: vec![EMPTY_TILE; size * size],
        })
    }

    /// Build a board from rows, validating shape and tile values
    pub fn from_rows(rows: &[Vec<Tile>]) -> Result<Self, BoardError> {
        let size = rows.len();
        check_size(size)?;

        let mut cells = Vec::with_capacity(size * size);
        for (row, values) in rows.iter().enumerate() {
            if values.len() != size {
                return Err(BoardError::NotSquare {
                    row,
                    len: values.len(),
                    size,
                });
            }
            for (col, &value) in values.iter().enumerate() {
                if !is_valid_tile(value) {
                    return Err(BoardError::InvalidTile { row, col, value });
                }
                cells.push(value);
            }
        }

        Ok(Self { size, cells })
    }

    #[inline(always)]
    fn index(&self, row: usize, col: usize) -> Option<usize> {
        if row >= self.size || col >= self.size {
            return None;
        }
        Some(row * self.size + col)
    }

    /// Board dimension (rows == columns)
    pub fn size(&self) -> usize {
        self.size
    }

    /// Get tile at (row, col). Returns None if out of bounds
    pub fn get(&self, row: usize, col: usize) -> Option<Tile> {
        self.index(row, col).map(|idx| self.cells[idx])
    }

    /// Set tile at (row, col). Returns false if out of bounds
    pub(crate) fn set(&mut self, row: usize, col: usize, value: Tile) -> bool {
        match self.index(row, col) {
            Some(idx) => {
                self.cells[idx] = value;
                true
            }
            None => false,
        }
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Tile] {
        &self.cells
    }

    /// Iterate rows as slices
    pub fn rows(&self) -> impl Iterator<Item = &[Tile]> {
        self.cells.chunks(self.size)
    }

    /// Copy into a vector of rows
    pub fn to_rows(&self) -> Vec<Vec<Tile>> {
        self.rows().map(<[Tile]>::to_vec).collect()
    }

    /// Positions (row, col) of every empty cell, row-major
    pub fn empty_cells(&self) -> Vec<(usize, usize)> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, &v)| v == EMPTY_TILE)
            .map(|(i, _)| (i / self.size, i % self.size))
            .collect()
    }

    pub fn empty_count(&self) -> usize {
        self.cells.iter().filter(|&&v| v == EMPTY_TILE).count()
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|&v| v != EMPTY_TILE)
    }

    pub fn max_tile(&self) -> Tile {
        self.cells.iter().copied().max().unwrap_or(EMPTY_TILE)
    }

    pub fn contains(&self, value: Tile) -> bool {
        self.cells.contains(&value)
    }

    /// Whether any horizontally or vertically adjacent pair holds equal tiles
    pub fn has_adjacent_pair(&self) -> bool {
        let n = self.size;
        for row in 0..n {
            for col in 0..n {
                let v = self.cells[row * n + col];
                if v == EMPTY_TILE {
                    continue;
                }
                if col + 1 < n && can_merge(v, self.cells[row * n + col + 1]) {
                    return true;
                }
                if row + 1 < n && can_merge(v, self.cells[(row + 1) * n + col]) {
                    return true;
                }
            }
        }
        false
    }

    /// Whether any move can still change the board.
    ///
    /// Scans the full grid: an empty cell or an equal adjacent pair means
    /// the game can go on.
    pub fn has_moves(&self) -> bool {
        !self.is_full() || self.has_adjacent_pair()
    }

    /// Flat indices of line `line` when travelling in `direction`,
    /// ordered from the edge tiles move towards.
    fn line_indices(&self, direction: Direction, line: usize) -> Vec<usize> {
        let n = self.size;
        let mut indices: Vec<usize> = if direction.is_horizontal() {
            (0..n).map(|col| line * n + col).collect()
        } else {
            (0..n).map(|row| row * n + line).collect()
        };
        if direction.is_reversed() {
            indices.reverse();
        }
        indices
    }

    /// Slide and merge every line towards `direction`.
    pub fn slide(&mut self, direction: Direction) -> SlideResult {
        let mut result = SlideResult::default();
        let mut line = vec![EMPTY_TILE; self.size];

        for l in 0..self.size {
            let indices = self.line_indices(direction, l);
            for (slot, &idx) in line.iter_mut().zip(&indices) {
                *slot = self.cells[idx];
            }

            let (score, merges) = collapse_line(&mut line);
            result.score_gained = result.score_gained.saturating_add(score);
            result.merges += merges;

            for (&value, &idx) in line.iter().zip(&indices) {
                if self.cells[idx] != value {
                    self.cells[idx] = value;
                    result.moved = true;
                }
            }
        }

        result
    }

    /// Whether sliding towards `direction` would change the board
    pub fn can_slide(&self, direction: Direction) -> bool {
        let mut probe = self.clone();
        probe.slide(direction).moved
    }

    /// Clear the entire board
    pub fn clear(&mut self) {
        self.cells.fill(EMPTY_TILE);
    }
}

impl Default for Board {
    /// Empty classic 4x4 board
    fn default() -> Self {
        Self {
            size: DEFAULT_SIZE,
            cells: vec![EMPTY_TILE; DEFAULT_SIZE * DEFAULT_SIZE],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(rows: &[&[Tile]]) -> Board {
        let rows: Vec<Vec<Tile>> = rows.iter().map(|r| r.to_vec()).collect();
        Board::from_rows(&rows).unwrap()
    }

    #[test]
    fn test_collapse_line_cases() {
        let cases: &[([Tile; 4], [Tile; 4], u32)] = &[
            ([0, 0, 0, 0], [0, 0, 0, 0], 0),
            ([0, 2, 0, 2], [4, 0, 0, 0], 4),
            ([2, 2, 4, 0], [4, 4, 0, 0], 4),
            ([2, 2, 2, 0], [4, 2, 0, 0], 4),
            ([2, 2, 2, 2], [4, 4, 0, 0], 8),
            ([4, 4, 8, 8], [8, 16, 0, 0], 24),
            ([2, 4, 8, 16], [2, 4, 8, 16], 0),
            ([0, 0, 0, 8], [8, 0, 0, 0], 0),
            ([1 << 30, 1 << 30, 0, 0], [1 << 31, 0, 0, 0], 1 << 31),
            ([1 << 31, 1 << 31, 2, 2], [1 << 31, 1 << 31, 4, 0], 4),
        ];
        for (input, expected, score) in cases {
            let mut line = *input;
            let (gained, _) = collapse_line(&mut line);
            assert_eq!(&line, expected, "collapse of {:?}", input);
            assert_eq!(gained, *score, "score of {:?}", input);
        }
    }

    #[test]
    fn test_board_index_calculation() {
        let b = Board::new(4).unwrap();
        assert_eq!(b.index(0, 0), Some(0));
        assert_eq!(b.index(0, 3), Some(3));
        assert_eq!(b.index(1, 0), Some(4));
        assert_eq!(b.index(3, 3), Some(15));
        assert_eq!(b.index(4, 0), None);
        assert_eq!(b.index(0, 4), None);
    }

    #[test]
    fn test_from_rows_validation() {
        assert_eq!(
            Board::from_rows(&[vec![0]]),
            Err(BoardError::TooSmall { size: 1 })
        );
        assert_eq!(
            Board::from_rows(&[vec![0, 0], vec![0, 0, 0]]),
            Err(BoardError::NotSquare {
                row: 1,
                len: 3,
                size: 2
            })
        );
        assert_eq!(
            Board::from_rows(&[vec![0, 3], vec![0, 0]]),
            Err(BoardError::InvalidTile {
                row: 0,
                col: 1,
                value: 3
            })
        );
        assert_eq!(
            Board::from_rows(&[vec![1, 0], vec![0, 0]]),
            Err(BoardError::InvalidTile {
                row: 0,
                col: 0,
                value: 1
            })
        );
    }

    #[test]
    fn test_largest_tiles_never_merge() {
        let mut b = board(&[&[1 << 31, 1 << 31], &[1 << 31, 4]]);
        let r = b.slide(Direction::Left);
        assert!(!r.moved);
        assert_eq!(r.score_gained, 0);
        assert_eq!(b.to_rows(), vec![vec![1 << 31, 1 << 31], vec![1 << 31, 4]]);
        assert!(!b.has_adjacent_pair());
        assert!(!b.has_moves());
    }

    #[test]
    fn test_board_size_limits() {
        assert!(Board::new(MAX_SIZE).is_ok());
        assert_eq!(
            Board::new(MAX_SIZE + 1),
            Err(BoardError::TooLarge { size: MAX_SIZE + 1 })
        );
        let rows = vec![vec![0; MAX_SIZE + 1]; MAX_SIZE + 1];
        assert_eq!(
            Board::from_rows(&rows),
            Err(BoardError::TooLarge { size: MAX_SIZE + 1 })
        );
    }

    #[test]
    fn test_slide_right_and_down() {
        let mut b = board(&[
            &[2, 2, 4, 0],
            &[0, 0, 0, 0],
            &[0, 0, 0, 0],
            &[0, 0, 0, 0],
        ]);
        let r = b.slide(Direction::Right);
        assert!(r.moved);
        assert_eq!(r.score_gained, 4);
        assert_eq!(b.to_rows()[0], vec![0, 0, 4, 4]);

        let mut b = board(&[
            &[2, 0, 0, 0],
            &[2, 0, 0, 0],
            &[2, 0, 0, 0],
            &[0, 0, 0, 0],
        ]);
        let r = b.slide(Direction::Down);
        assert!(r.moved);
        assert_eq!(r.merges, 1);
        let col: Vec<Tile> = b.to_rows().iter().map(|row| row[0]).collect();
        assert_eq!(col, vec![0, 0, 2, 4]);
    }

    #[test]
    fn test_slide_up_merges_towards_top() {
        let mut b = board(&[
            &[0, 4, 0, 0],
            &[0, 4, 0, 0],
            &[0, 4, 0, 0],
            &[0, 4, 0, 0],
        ]);
        let r = b.slide(Direction::Up);
        assert_eq!(r.score_gained, 16);
        let col: Vec<Tile> = b.to_rows().iter().map(|row| row[1]).collect();
        assert_eq!(col, vec![8, 8, 0, 0]);
    }

    #[test]
    fn test_slide_without_change() {
        let mut b = board(&[
            &[2, 4, 0, 0],
            &[8, 0, 0, 0],
            &[0, 0, 0, 0],
            &[0, 0, 0, 0],
        ]);
        let before = b.clone();
        let r = b.slide(Direction::Left);
        assert!(!r.moved);
        assert_eq!(r.score_gained, 0);
        assert_eq!(b, before);
        assert!(!b.can_slide(Direction::Left));
        assert!(!b.can_slide(Direction::Up));
        assert!(b.can_slide(Direction::Right));
    }

    #[test]
    fn test_has_moves() {
        let dead = board(&[&[2, 4], &[4, 2]]);
        assert!(dead.is_full());
        assert!(!dead.has_adjacent_pair());
        assert!(!dead.has_moves());

        let vertical_pair = board(&[&[2, 4], &[2, 8]]);
        assert!(vertical_pair.has_moves());

        let with_gap = board(&[&[2, 4], &[8, 0]]);
        assert!(with_gap.has_moves());
    }

    #[test]
    fn test_empty_cells_row_major() {
        let b = board(&[&[2, 0], &[0, 4]]);
        assert_eq!(b.empty_cells(), vec![(0, 1), (1, 0)]);
        assert_eq!(b.empty_count(), 2);
        assert_eq!(b.max_tile(), 4);
        assert!(b.contains(2));
        assert!(!b.contains(8));
    }
}
