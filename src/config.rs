#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Options for the board search.
///
/// ## Examples
/// ```
/// use wordsearch_solver::SearchConfig;
/// let config = SearchConfig::default().with_max_path_len(8);
/// assert!(config.can_extend(7));
/// assert!(!config.can_extend(8));
/// ```
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SearchConfig {
    /// Maximum number of tiles in a path. `None` allows paths over all tiles of the board.
    /// A path always holds its start tile, so `Some(0)` behaves like `Some(1)`.
    pub max_path_len: Option<usize>,
}

impl SearchConfig {
    /// Limit the number of tiles in a path to `len`.
    #[must_use]
    pub fn with_max_path_len(mut self, len: usize) -> SearchConfig {
        self.max_path_len = Some(len);
        self
    }

    /// Returns true if a path of `path_len` tiles may be extended by one more tile.
    pub fn can_extend(&self, path_len: usize) -> bool {
        self.max_path_len.map_or(true, |max| path_len < max)
    }
}
