use crate::{Error, Searcher};

/// Points for a scorable word of `len` letters: one point for the minimum
/// length, and one for every letter beyond it.
pub fn word_points(len: usize, min_len: usize) -> usize {
    len + 1 - min_len
}

/// Scores sets of words against the board and lexicon of a [`Searcher`].
#[derive(Debug)]
pub struct Scorer<'s, 'a> {
    searcher: &'s Searcher<'a>,
}

impl<'s, 'a> Scorer<'s, 'a> {
    pub fn new(searcher: &'s Searcher<'a>) -> Scorer<'s, 'a> {
        Scorer { searcher }
    }

    /// Returns true if `word` has at least `min_len` letters, is in the lexicon
    /// and can be found on the board.
    pub fn is_scorable(&self, word: &str, min_len: usize) -> bool {
        word.chars().count() >= min_len
            && self.searcher.lexicon().contains(word)
            && !self.searcher.find_path(word).is_empty()
    }

    /// Calculate the total score of `words`. Every entry is scored on its own;
    /// case is only ignored to look a word up, so `lent` and `LENT` both score.
    /// Each word is checked on the board again, no matter how it was found.
    /// ## Errors
    /// If `min_len` is 0.
    /// ## Examples
    /// ```
    /// # use wordsearch_solver::{Board, Codec, Error, Lexicon, Scorer, SearchConfig, Searcher};
    /// let board = Board::default();
    /// let lexicon = Lexicon::from_words(&["lent", "bent", "lentil"], &Codec::default())?;
    /// let searcher = Searcher::new(&board, &lexicon, SearchConfig::default());
    /// let scorer = Scorer::new(&searcher);
    /// // "lentil" is not on the board, "dent" is not in the lexicon
    /// assert_eq!(scorer.score(&["lent", "BENT", "lentil", "dent"], 3)?, 4);
    /// # Ok::<(), Error>(())
    /// ```
    pub fn score<S: AsRef<str>>(&self, words: &[S], min_len: usize) -> Result<usize, Error> {
        if min_len < 1 {
            return Err(Error::InvalidMinLength(min_len));
        }
        let mut score = 0;
        for word in words {
            let word: &str = word.as_ref();
            if self.is_scorable(word, min_len) {
                score += word_points(word.chars().count(), min_len);
            }
        }
        tracing::debug!(words = words.len(), min_len, score, "score");
        Ok(score)
    }
}
