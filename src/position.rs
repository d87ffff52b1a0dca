use std::fmt;
use tinyvec::ArrayVec;

/// The positions around a square, at most 8.
pub type Neighbors = ArrayVec<[Position; 8]>;

/// A (row, col) coordinate on an N x N board.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl Position {
    pub fn new(row: usize, col: usize) -> Position {
        Position { row, col }
    }

    /// Return the position of row-major `index` on a board of size `n`,
    /// or None if it is outside the board.
    /// ## Examples
    /// ```
    /// use wordsearch_solver::Position;
    /// assert_eq!(Position::from_index(6, 4), Some(Position::new(1, 2)));
    /// assert_eq!(Position::from_index(16, 4), None);
    /// ```
    pub fn from_index(index: usize, n: usize) -> Option<Position> {
        if index < n * n {
            Some(Position::new(index / n, index % n))
        } else {
            None
        }
    }

    /// Row-major index on a board of size `n`.
    pub fn index(&self, n: usize) -> usize {
        self.row * n + self.col
    }

    pub fn is_valid(&self, n: usize) -> bool {
        self.row < n && self.col < n
    }

    /// Returns true if `other` is one of the 8 squares around us.
    pub fn is_adjacent(&self, other: Position) -> bool {
        let dr = (self.row as isize - other.row as isize).abs();
        let dc = (self.col as isize - other.col as isize).abs();
        dr <= 1 && dc <= 1 && (dr, dc) != (0, 0)
    }

    /// The valid positions around us on a board of size `n`.
    /// Row offsets -1..=1 are the outer loop and column offsets -1..=1 the inner loop,
    /// so the order is always: up-left, up, up-right, left, right, down-left, down, down-right.
    /// ## Examples
    /// ```
    /// use wordsearch_solver::Position;
    /// let neighbors = Position::new(0, 1).neighbors(3);
    /// let expect = [(0, 0), (0, 2), (1, 0), (1, 1), (1, 2)];
    /// assert!(neighbors.iter().map(|p| (p.row, p.col)).eq(expect.iter().copied()));
    /// ```
    pub fn neighbors(&self, n: usize) -> Neighbors {
        let mut neighbors = Neighbors::new();
        for dr in -1isize..=1 {
            for dc in -1isize..=1 {
                if dr == 0 && dc == 0 {
                    continue;
                }
                let row = self.row as isize + dr;
                let col = self.col as isize + dc;
                if row < 0 || col < 0 {
                    continue;
                }
                let p = Position::new(row as usize, col as usize);
                if p.is_valid(n) {
                    neighbors.push(p);
                }
            }
        }
        neighbors
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_neighbor_count() {
        let n = 4;
        assert_eq!(Position::new(0, 0).neighbors(n).len(), 3);
        assert_eq!(Position::new(0, 2).neighbors(n).len(), 5);
        assert_eq!(Position::new(2, 1).neighbors(n).len(), 8);
        assert_eq!(Position::new(3, 3).neighbors(n).len(), 3);
        assert!(Position::new(0, 0).neighbors(1).is_empty());
    }

    #[test]
    fn test_neighbor_order() {
        let order: Vec<usize> = Position::new(1, 1)
            .neighbors(3)
            .iter()
            .map(|p| p.index(3))
            .collect();
        assert_eq!(order, vec![0, 1, 2, 3, 5, 6, 7, 8]);
    }

    #[test]
    fn test_index() {
        let n = 5;
        for index in 0..n * n {
            let p = Position::from_index(index, n).unwrap();
            assert!(p.is_valid(n));
            assert_eq!(p.index(n), index);
        }
        assert_eq!(Position::new(2, 3).to_string(), "(2, 3)");
    }

    #[test]
    fn test_adjacent() {
        let p = Position::new(1, 1);
        for q in p.neighbors(3) {
            assert!(p.is_adjacent(q));
        }
        assert!(!p.is_adjacent(p));
        assert!(!p.is_adjacent(Position::new(3, 1)));
    }
}
