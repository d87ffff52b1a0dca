//! Word ladders: sequences of words where each word differs from the next in one letter.
use crate::Lexicon;
use std::collections::{HashMap, VecDeque};

/// Returns the number of positions at which `a` and `b` differ, ignoring case,
/// or None if they have a different length.
/// ## Examples
/// ```
/// use wordsearch_solver::hamming_distance;
/// assert_eq!(hamming_distance("cat", "COT"), Some(1));
/// assert_eq!(hamming_distance("cat", "cart"), None);
/// ```
pub fn hamming_distance(a: &str, b: &str) -> Option<usize> {
    let a: Vec<char> = a.to_uppercase().chars().collect();
    let b: Vec<char> = b.to_uppercase().chars().collect();
    if a.len() != b.len() {
        return None;
    }
    Some(a.iter().zip(&b).filter(|(x, y)| x != y).count())
}

/// Finds word ladders with the words of a [`Lexicon`].
#[derive(Debug, Clone, Copy)]
pub struct WordLadder<'a> {
    lexicon: &'a Lexicon,
}

impl<'a> WordLadder<'a> {
    pub fn new(lexicon: &'a Lexicon) -> WordLadder<'a> {
        WordLadder { lexicon }
    }

    /// All words in the lexicon that differ from `word` in exactly one letter, in uppercase.
    /// Letters are replaced position by position, in the order of the lexicon codec.
    pub fn neighbors(&self, word: &str) -> Vec<String> {
        let word: Vec<char> = word.to_uppercase().chars().collect();
        let mut neighbors: Vec<String> = Vec::new();
        let mut candidate = word.clone();
        for i in 0..word.len() {
            for letter in self.lexicon.codec().alphabet() {
                if letter == word[i] {
                    continue;
                }
                candidate[i] = letter;
                let s: String = candidate.iter().collect();
                if self.lexicon.contains(&s) && !neighbors.contains(&s) {
                    neighbors.push(s);
                }
            }
            candidate[i] = word[i];
        }
        neighbors
    }

    /// Returns true if `sequence` is not empty, every entry is a word, and each
    /// word differs from the next in exactly one letter.
    pub fn is_word_ladder<S: AsRef<str>>(&self, sequence: &[S]) -> bool {
        !sequence.is_empty()
            && sequence.iter().all(|w| self.lexicon.contains(w.as_ref()))
            && sequence
                .windows(2)
                .all(|pair| hamming_distance(pair[0].as_ref(), pair[1].as_ref()) == Some(1))
    }

    /// Return a shortest word ladder from `start` to `end`, in uppercase.
    ///
    /// If `start` and `end` are the same word the ladder is just that word.
    /// An empty list is returned if the words have a different length, one of them
    /// is not in the lexicon, or no ladder exists.
    /// ## Examples
    /// ```
    /// use wordsearch_solver::{Codec, Error, Lexicon, WordLadder};
    /// let lexicon = Lexicon::from_words(&["cat", "cot", "cog", "dog", "dot"], &Codec::default())?;
    /// let ladder = WordLadder::new(&lexicon).min_ladder("cat", "dog");
    /// assert_eq!(ladder.len(), 4);
    /// assert_eq!(ladder.first().map(String::as_str), Some("CAT"));
    /// assert_eq!(ladder.last().map(String::as_str), Some("DOG"));
    /// # Ok::<(), Error>(())
    /// ```
    pub fn min_ladder(&self, start: &str, end: &str) -> Vec<String> {
        let start = start.to_uppercase();
        let end = end.to_uppercase();
        if start == end {
            return vec![start];
        }
        if hamming_distance(&start, &end).is_none()
            || !self.lexicon.contains(&start)
            || !self.lexicon.contains(&end)
        {
            return Vec::new();
        }
        // predecessor of every word reached so far
        let mut reached: HashMap<String, Option<String>> = HashMap::new();
        let mut queue = VecDeque::new();
        reached.insert(start.clone(), None);
        queue.push_back(start);
        while let Some(word) = queue.pop_front() {
            for next in self.neighbors(&word) {
                if reached.contains_key(&next) {
                    continue;
                }
                reached.insert(next.clone(), Some(word.clone()));
                if next == end {
                    return Self::unwind(&reached, next);
                }
                queue.push_back(next);
            }
        }
        tracing::debug!(%end, reached = reached.len(), "no word ladder");
        Vec::new()
    }

    fn unwind(reached: &HashMap<String, Option<String>>, end: String) -> Vec<String> {
        let mut ladder = vec![end];
        while let Some(Some(prev)) = ladder.last().and_then(|w| reached.get(w)) {
            ladder.push(prev.clone());
        }
        ladder.reverse();
        ladder
    }
}
