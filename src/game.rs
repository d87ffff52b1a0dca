use crate::{Board, Codec, Error, Lexicon, Scorer, SearchConfig, Searcher};
use std::collections::BTreeSet;
use std::fmt;

/// Display the board, one row per line.
impl fmt::Display for WordSearchGame {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.board)
    }
}

/// A word search game: a square board of tiles, and the lexicon of valid words.
///
/// Words are formed by a path of adjacent tiles (horizontal, vertical or diagonal),
/// each tile used at most once. Every query needs a lexicon, so load one with
/// [`load_lexicon`](WordSearchGame::load_lexicon) or one of the builder functions first.
#[derive(Debug, Clone, Default)]
pub struct WordSearchGame {
    board: Board,
    lexicon: Option<Lexicon>,
    config: SearchConfig,
}

impl WordSearchGame {
    /// Create a game with the [default board](Board::default) and no lexicon.
    /// Builder functions can be used to set the board, lexicon and search options.
    /// See also:
    /// - [`with_board`](WordSearchGame::with_board)
    /// - [`with_lexicon_from_file`](WordSearchGame::with_lexicon_from_file)
    /// - [`with_lexicon_from_words`](WordSearchGame::with_lexicon_from_words)
    /// - [`with_config`](WordSearchGame::with_config)
    #[must_use]
    pub fn new() -> WordSearchGame {
        WordSearchGame::default()
    }

    /// Replace the board with `tiles`, given in row-major order.
    /// ## Errors
    /// If `tiles` is empty, is not a perfect square, or contains an empty tile.
    pub fn set_board<S: AsRef<str>>(&mut self, tiles: &[S]) -> Result<(), Error> {
        self.board = Board::from_tiles(tiles)?;
        tracing::debug!(size = self.board.size(), "board set");
        Ok(())
    }

    /// Specify the board by its tiles in row-major order, and returns the modified game.
    /// ## Errors
    /// See [`set_board`](WordSearchGame::set_board).
    pub fn with_board<S: AsRef<str>>(mut self, tiles: &[S]) -> Result<WordSearchGame, Error> {
        self.set_board(tiles)?;
        Ok(self)
    }

    /// Load the lexicon from `wordfile`. The first word of each line is used.
    /// ## Errors
    /// If `wordfile` can not be read.
    pub fn load_lexicon(&mut self, wordfile: &str) -> Result<(), Error> {
        self.lexicon = Some(Lexicon::from_file(wordfile, &Codec::default())?);
        Ok(())
    }

    /// Specify the lexicon by reading it from `wordfile`, and returns the modified game.
    /// ## Errors
    /// If `wordfile` can not be read.
    /// ## Examples
    /// ```
    /// # use wordsearch_solver::{WordSearchGame, Error};
    /// let game = WordSearchGame::new().with_lexicon_from_file("wordlists/words-small.txt")?;
    /// assert!(game.is_valid_word("peace")?);
    /// # Ok::<(), Error>(())
    /// ```
    pub fn with_lexicon_from_file(mut self, wordfile: &str) -> Result<WordSearchGame, Error> {
        self.load_lexicon(wordfile)?;
        Ok(self)
    }

    /// Specify the lexicon by a list of words, and returns the modified game.
    /// ## Errors
    /// If the words hold more distinct letters than a [`Codec`] can encode.
    pub fn with_lexicon_from_words<S: AsRef<str>>(self, words: &[S]) -> Result<WordSearchGame, Error> {
        Ok(self.with_lexicon(Lexicon::from_words(words, &Codec::default())?))
    }

    /// Use `lexicon`, for instance one built with a custom [`Codec`].
    #[must_use]
    pub fn with_lexicon(mut self, lexicon: Lexicon) -> WordSearchGame {
        self.lexicon = Some(lexicon);
        self
    }

    #[must_use]
    pub fn with_config(mut self, config: SearchConfig) -> WordSearchGame {
        self.config = config;
        self
    }

    /// Return reference to our board, see [`board`](WordSearchGame::board) for its text.
    pub fn board_ref(&self) -> &Board {
        &self.board
    }

    /// Return reference to our lexicon, if loaded.
    pub fn lexicon(&self) -> Option<&Lexicon> {
        self.lexicon.as_ref()
    }

    pub fn config(&self) -> SearchConfig {
        self.config
    }

    /// The board as text, one row per line: `[A, B]\n[C, D]\n`.
    pub fn board(&self) -> String {
        self.board.to_string()
    }

    fn loaded_lexicon(&self) -> Result<&Lexicon, Error> {
        self.lexicon.as_ref().ok_or(Error::LexiconNotLoaded)
    }

    /// A searcher over our board and lexicon.
    /// ## Errors
    /// If no lexicon is loaded.
    pub fn searcher(&self) -> Result<Searcher<'_>, Error> {
        let lexicon = self.loaded_lexicon()?;
        Ok(Searcher::new(&self.board, lexicon, self.config))
    }

    /// Return all words of at least `min_len` letters that are in the lexicon
    /// and on the board, in lexicographic order.
    /// ## Errors
    /// - If `min_len` is 0.
    /// - If no lexicon is loaded.
    /// ## Examples
    /// ```
    /// # use wordsearch_solver::{WordSearchGame, Error};
    /// let game = WordSearchGame::new()
    ///     .with_board(&["CAT", "X", "FISH", "XXXX"])?
    ///     .with_lexicon_from_words(&["cat", "fish", "catfish"])?;
    /// let words: Vec<String> = game.all_scorable_words(3)?.into_iter().collect();
    /// assert_eq!(words, ["CAT", "CATFISH", "FISH"]);
    /// # Ok::<(), Error>(())
    /// ```
    pub fn all_scorable_words(&self, min_len: usize) -> Result<BTreeSet<String>, Error> {
        if min_len < 1 {
            return Err(Error::InvalidMinLength(min_len));
        }
        self.searcher()?.find_all_words(min_len)
    }

    /// Calculate the total score of `words`. A word scores if it has at least
    /// `min_len` letters, is in the lexicon and is on the board. It is awarded one
    /// point for the minimum length, and one point for each letter beyond it.
    /// ## Errors
    /// - If `min_len` is 0.
    /// - If no lexicon is loaded.
    pub fn score_for_words<S: AsRef<str>>(&self, words: &[S], min_len: usize) -> Result<usize, Error> {
        if min_len < 1 {
            return Err(Error::InvalidMinLength(min_len));
        }
        let searcher = self.searcher()?;
        Scorer::new(&searcher).score(words, min_len)
    }

    /// Returns true if `word` is in the lexicon. Case is ignored.
    /// ## Errors
    /// If no lexicon is loaded.
    pub fn is_valid_word(&self, word: &str) -> Result<bool, Error> {
        Ok(self.loaded_lexicon()?.contains(word))
    }

    /// Returns true if at least one word in the lexicon starts with `prefix`. Case is ignored.
    /// ## Errors
    /// If no lexicon is loaded.
    pub fn is_valid_prefix(&self, prefix: &str) -> Result<bool, Error> {
        Ok(self.loaded_lexicon()?.has_prefix(prefix))
    }

    /// Return the path of tiles that spells `word` as row-major indices,
    /// or an empty list if `word` is not on the board. Positions are numbered from
    /// zero, left to right and top to bottom: on an N x N board the upper left tile is 0
    /// and the lower right tile is N * N - 1.
    /// ## Errors
    /// If no lexicon is loaded.
    /// ## Examples
    /// ```
    /// # use wordsearch_solver::{WordSearchGame, Error};
    /// let game = WordSearchGame::new().with_lexicon_from_words(&["lent"])?;
    /// assert_eq!(game.is_on_board("lent")?, vec![5, 6, 9, 13]);
    /// # Ok::<(), Error>(())
    /// ```
    pub fn is_on_board(&self, word: &str) -> Result<Vec<usize>, Error> {
        Ok(self.searcher()?.find_path(word))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;

    type Result<T> = std::result::Result<T, Error>;

    const WORDFILE: &str = "wordlists/words-small.txt";

    fn game() -> Result<WordSearchGame> {
        WordSearchGame::new().with_lexicon_from_file(WORDFILE)
    }

    #[test]
    fn test_default_board() {
        let game = WordSearchGame::new();
        assert_eq!(
            game.board(),
            "[E, E, C, A]\n[A, L, E, P]\n[H, N, B, O]\n[Q, T, T, Y]\n"
        );
        assert_eq!(game.to_string(), game.board());
    }

    #[test]
    fn test_set_board() -> Result<()> {
        let mut game = WordSearchGame::new();
        game.set_board(&["A", "B", "C", "D"])?;
        assert_eq!(game.board(), "[A, B]\n[C, D]\n");
        assert_eq!(game.board_ref().size(), 2);
        assert_eq!(game.board_ref().tile_at(3), Some("D"));
        let err = game.set_board(&["one", "two", "three"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
        // a failed call keeps the previous board
        assert_eq!(game.board(), "[A, B]\n[C, D]\n");
        Ok(())
    }

    #[test]
    fn test_lexicon_not_loaded() {
        let game = WordSearchGame::new();
        let errors = vec![
            game.all_scorable_words(3).unwrap_err(),
            game.score_for_words(&["lent"], 3).unwrap_err(),
            game.is_valid_word("lent").unwrap_err(),
            game.is_valid_prefix("le").unwrap_err(),
            game.is_on_board("lent").unwrap_err(),
        ];
        for err in errors {
            assert_eq!(err.kind(), ErrorKind::IllegalState, "{:?}", err);
        }
    }

    #[test]
    fn test_min_len_checked_first() {
        let game = WordSearchGame::new();
        let err = game.all_scorable_words(0).unwrap_err();
        assert!(matches!(err, Error::InvalidMinLength(0)));
        let err = game.score_for_words(&["lent"], 0).unwrap_err();
        assert!(matches!(err, Error::InvalidMinLength(0)));
    }

    #[test]
    fn test_load_lexicon_error() {
        let mut game = WordSearchGame::new();
        let err = game.load_lexicon("wordlists/no-such-file.txt").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
        assert!(game.lexicon().is_none());
    }

    #[test]
    fn test_valid_word_and_prefix() -> Result<()> {
        let game = game()?;
        assert!(game.is_valid_word("PEACE")?);
        assert!(game.is_valid_word("Peace")?);
        assert!(!game.is_valid_word("peac")?);
        assert!(game.is_valid_prefix("peac")?);
        assert!(game.is_valid_prefix("CATF")?);
        assert!(!game.is_valid_prefix("zz")?);
        assert!(!game.is_valid_prefix("yobs")?);
        Ok(())
    }

    #[test]
    fn test_is_on_board() -> Result<()> {
        let game = game()?;
        assert_eq!(game.is_on_board("LENT")?, vec![5, 6, 9, 13]);
        assert_eq!(game.is_on_board("lent")?, game.is_on_board("lent")?);
        assert!(game.is_on_board("catfish")?.is_empty());
        // the board is searched even for words that are not in the lexicon
        assert_eq!(game.is_on_board("QT")?, vec![12, 13]);
        Ok(())
    }

    #[test]
    fn test_paths_on_default_board() -> Result<()> {
        let game = game()?;
        assert_eq!(game.is_on_board("peace")?, vec![7, 6, 3, 2, 1]);
        // PEBT reaches T at 13 first, which has no Y next to it
        assert_eq!(game.is_on_board("pebty")?, vec![7, 6, 10, 14, 15]);
        // an earlier search leaves nothing behind
        assert_eq!(game.is_on_board("eb")?, vec![6, 10]);
        Ok(())
    }

    #[test]
    fn test_word_with_punctuation() -> Result<()> {
        let game = WordSearchGame::new()
            .with_board(&["DON", "'", "T", "X"])?
            .with_lexicon_from_words(&["don't", "o'clock"])?;
        assert!(game.is_valid_word("DON'T")?);
        assert!(game.is_valid_prefix("o'c")?);
        let words: Vec<String> = game.all_scorable_words(1)?.into_iter().collect();
        assert_eq!(words, ["DON'T"]);
        assert_eq!(game.is_on_board("don't")?, vec![0, 1, 2]);
        assert_eq!(game.score_for_words(&words, 5)?, 1);
        Ok(())
    }

    #[test]
    fn test_score_counts_each_entry() -> Result<()> {
        let game = game()?;
        assert_eq!(game.score_for_words(&["lent", "LENT"], 4)?, 2);
        assert_eq!(game.score_for_words(&["lent"], 4)?, 1);
        Ok(())
    }

    #[test]
    fn test_single_tile_board() -> Result<()> {
        let game = game()?.with_board(&["TIGER"])?;
        assert!(game.all_scorable_words(7)?.is_empty());
        assert_eq!(game.is_on_board("tiger")?, vec![0]);
        Ok(())
    }

    #[test]
    fn test_multi_letter_tiles() -> Result<()> {
        let game = game()?.with_board(&["CAT", "X", "FISH", "XXXX"])?;
        let words: Vec<String> = game.all_scorable_words(3)?.into_iter().collect();
        assert_eq!(words, ["CAT", "CATFISH", "FISH"]);
        assert_eq!(game.score_for_words(&words, 3)?, 1 + 5 + 2);
        Ok(())
    }

    #[test]
    fn test_scorable_words_are_on_board() -> Result<()> {
        let game = game()?;
        let words = game.all_scorable_words(4)?;
        assert!(!words.is_empty());
        for word in &words {
            assert!(word.len() >= 4);
            assert!(game.is_valid_word(word)?);
            assert!(!game.is_on_board(word)?.is_empty());
        }
        let words: Vec<&String> = words.iter().collect();
        let total: usize = words.iter().map(|w| w.len() - 3).sum();
        assert_eq!(game.score_for_words(&words, 4)?, total);
        Ok(())
    }

    #[test]
    fn test_with_config() -> Result<()> {
        let game = game()?.with_config(SearchConfig::default().with_max_path_len(3));
        let words = game.all_scorable_words(1)?;
        assert!(words.iter().all(|w| w.len() <= 3));
        assert!(words.contains("ACE"));
        assert!(game.is_on_board("lent")?.is_empty());
        Ok(())
    }
}
