use crate::position::{Neighbors, Position};
use crate::Error;
use std::fmt;

const DEFAULT_TILES: [&str; 16] = [
    "E", "E", "C", "A", //
    "A", "L", "E", "P", //
    "H", "N", "B", "O", //
    "Q", "T", "T", "Y",
];

/// Return n if `len` == n * n.
fn exact_sqrt(len: usize) -> Option<usize> {
    let mut n = (len as f64).sqrt() as usize;
    while n * n > len {
        n -= 1;
    }
    while (n + 1) * (n + 1) <= len {
        n += 1;
    }
    if n * n == len {
        Some(n)
    } else {
        None
    }
}

/// A square board of N x N tiles, stored in row-major order.
///
/// A tile holds one or more letters. Tiles are kept as given for display,
/// the search matches them in uppercase.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    tiles: Vec<String>,
    n: usize,
}

/// The default board is the 4x4 board
/// ```text
/// [E, E, C, A]
/// [A, L, E, P]
/// [H, N, B, O]
/// [Q, T, T, Y]
/// ```
impl Default for Board {
    fn default() -> Self {
        Board {
            tiles: DEFAULT_TILES.iter().map(|&s| String::from(s)).collect(),
            n: 4,
        }
    }
}

/// Display the board one row per line, cells comma separated: `[A, B]`.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in self.to_strings() {
            writeln!(f, "{}", row)?;
        }
        Ok(())
    }
}

impl Board {
    /// Create a board from `tiles` in row-major order.
    /// The number of tiles must be a perfect square N x N.
    ///
    /// ## Errors
    /// - If `tiles` is empty,
    /// - if the number of tiles is not a perfect square,
    /// - if a tile is an empty string.
    /// ## Examples
    /// ```
    /// # use wordsearch_solver::{Board, Error};
    /// let board = Board::from_tiles(&["CAT", "X", "FISH", "XXXX"])?;
    /// assert_eq!(board.size(), 2);
    /// assert_eq!(board.to_string(), "[CAT, X]\n[FISH, XXXX]\n");
    /// assert!(Board::from_tiles(&["one", "two", "three"]).is_err());
    /// # Ok::<(), Error>(())
    /// ```
    pub fn from_tiles<S: AsRef<str>>(tiles: &[S]) -> Result<Board, Error> {
        if tiles.is_empty() {
            return Err(Error::EmptyBoard);
        }
        let n = exact_sqrt(tiles.len()).ok_or_else(|| Error::BoardNotSquare(tiles.len()))?;
        if let Some(i) = tiles.iter().position(|t| t.as_ref().is_empty()) {
            return Err(Error::EmptyTile(i));
        }
        let tiles = tiles.iter().map(|t| String::from(t.as_ref())).collect();
        Ok(Board { tiles, n })
    }

    /// The board dimension N.
    pub fn size(&self) -> usize {
        self.n
    }

    /// The number of tiles, N x N.
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    /// A board is never empty, this is always false.
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// The tiles in row-major order.
    pub fn tiles(&self) -> &[String] {
        &self.tiles
    }

    /// Return the tile at `p` or None if outside the board.
    pub fn tile(&self, p: Position) -> Option<&str> {
        if p.is_valid(self.n) {
            self.tile_at(self.index_of(p))
        } else {
            None
        }
    }

    /// Return the tile at row-major `index` or None if outside the board.
    pub fn tile_at(&self, index: usize) -> Option<&str> {
        self.tiles.get(index).map(String::as_str)
    }

    /// Row-major index of `p`: `row * N + col`.
    pub fn index_of(&self, p: Position) -> usize {
        p.index(self.n)
    }

    /// Position of row-major `index`, or None if outside the board.
    pub fn position_of(&self, index: usize) -> Option<Position> {
        Position::from_index(index, self.n)
    }

    /// Iterate over all positions in row-major order.
    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        (0..self.len()).map(move |i| Position::new(i / self.n, i % self.n))
    }

    /// The neighbors of `p` on this board, in fixed order.
    pub fn neighbors(&self, p: Position) -> Neighbors {
        p.neighbors(self.n)
    }

    /// Get board rows as a vec of N strings, like `[A, B, C]`.
    pub fn to_strings(&self) -> Vec<String> {
        self.tiles
            .chunks(self.n)
            .map(|row| format!("[{}]", row.join(", ")))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default() {
        let board = Board::default();
        assert_eq!(board.size(), 4);
        assert_eq!(
            board.to_string(),
            "[E, E, C, A]\n[A, L, E, P]\n[H, N, B, O]\n[Q, T, T, Y]\n"
        );
        assert_eq!(board.tile(Position::new(1, 1)), Some("L"));
        assert_eq!(board.tile(Position::new(3, 0)), Some("Q"));
        // (0, 4) would wrap around to index 4 if it were not checked
        assert_eq!(board.tile(Position::new(0, 4)), None);
        assert_eq!(board.tile(Position::new(4, 0)), None);
        assert_eq!(board.tile_at(15), Some("Y"));
        assert_eq!(board.tile_at(16), None);
    }

    #[test]
    fn test_from_tiles() -> Result<(), Error> {
        let board = Board::from_tiles(&["A", "B", "C", "D"])?;
        assert_eq!(board.to_string(), "[A, B]\n[C, D]\n");
        let board = Board::from_tiles(&["tiger"])?;
        assert_eq!(board.size(), 1);
        assert_eq!(board.to_strings(), vec!["[tiger]"]);
        Ok(())
    }

    #[test]
    fn test_sizes() -> Result<(), Error> {
        for n in 1..=12 {
            let tiles = vec!["A"; n * n];
            assert_eq!(Board::from_tiles(&tiles)?.size(), n);
            let tiles = vec!["A"; n * n + 1];
            assert!(Board::from_tiles(&tiles).is_err());
        }
        Ok(())
    }

    #[test]
    #[should_panic(expected = "BoardNotSquare(3)")]
    fn test_not_square() {
        Board::from_tiles(&["one", "two", "three"]).unwrap();
    }

    #[test]
    #[should_panic(expected = "EmptyBoard")]
    fn test_empty() {
        let tiles: [&str; 0] = [];
        Board::from_tiles(&tiles).unwrap();
    }

    #[test]
    #[should_panic(expected = "EmptyTile(2)")]
    fn test_empty_tile() {
        Board::from_tiles(&["A", "B", "", "D"]).unwrap();
    }

    #[test]
    fn test_positions() {
        let board = Board::default();
        let indices: Vec<usize> = board.positions().map(|p| board.index_of(p)).collect();
        assert_eq!(indices, (0..16).collect::<Vec<_>>());
        assert_eq!(board.position_of(13), Some(Position::new(3, 1)));
        assert_eq!(board.neighbors(Position::new(3, 3)).len(), 3);
    }
}
