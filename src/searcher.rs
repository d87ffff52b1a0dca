//! Backtracking search for words on a board.
//!
//! Both searches walk simple paths of adjacent tiles depth first. The state of
//! the path under construction (visited squares, positions and the word spelled
//! so far) lives in a `PathState` owned by one top level call. Each tile added
//! to the path is held by a `Frame`, which takes the tile off the path again
//! when it is dropped, whether the branch failed or succeeded.
use crate::codec::Code;
use crate::lexicon::{Lexicon, ROOT};
use crate::position::Position;
use crate::{Board, Error, SearchConfig};
use std::collections::BTreeSet;
use std::ops::{Deref, DerefMut};

/// Visited squares, path trace and accumulated word of the path being built.
#[derive(Debug)]
struct PathState {
    visited: Vec<bool>,
    trace: Vec<Position>,
    word: String,
}

impl PathState {
    fn new(len: usize) -> PathState {
        PathState {
            visited: vec![false; len],
            trace: Vec::new(),
            word: String::new(),
        }
    }

    fn is_clean(&self) -> bool {
        self.trace.is_empty() && self.word.is_empty() && !self.visited.contains(&true)
    }
}

/// One tile on the current path.
struct Frame<'s> {
    state: &'s mut PathState,
    position: Position,
    index: usize,
    word_len: usize,
}

impl<'s> Frame<'s> {
    /// Mark the square at `index` visited and append `tile` to the word.
    fn enter(state: &'s mut PathState, p: Position, index: usize, tile: &str) -> Frame<'s> {
        let word_len = state.word.len();
        state.visited[index] = true;
        state.trace.push(p);
        state.word.push_str(tile);
        Frame {
            state,
            position: p,
            index,
            word_len,
        }
    }
}

impl Drop for Frame<'_> {
    fn drop(&mut self) {
        self.state.word.truncate(self.word_len);
        self.state.trace.pop();
        self.state.visited[self.index] = false;
    }
}

impl Deref for Frame<'_> {
    type Target = PathState;
    fn deref(&self) -> &PathState {
        self.state
    }
}

impl DerefMut for Frame<'_> {
    fn deref_mut(&mut self) -> &mut PathState {
        self.state
    }
}

/// Searches a [`Board`] for the words of a [`Lexicon`].
///
/// The board and the lexicon are only read. Every search starts with a fresh
/// path state, so calls never influence each other.
#[derive(Debug)]
pub struct Searcher<'a> {
    board: &'a Board,
    lexicon: &'a Lexicon,
    config: SearchConfig,
    /// Uppercase tile contents, row-major.
    tiles: Vec<String>,
    /// Tile contents encoded with the lexicon codec. `None` if a tile has letters
    /// outside the codec, such a tile is never part of a word.
    codes: Vec<Option<Vec<Code>>>,
}

impl<'a> Searcher<'a> {
    pub fn new(board: &'a Board, lexicon: &'a Lexicon, config: SearchConfig) -> Searcher<'a> {
        let tiles: Vec<String> = board.tiles().iter().map(|t| t.to_uppercase()).collect();
        let codes = tiles
            .iter()
            .map(|t| lexicon.codec().encode(t).ok())
            .collect();
        Searcher {
            board,
            lexicon,
            config,
            tiles,
            codes,
        }
    }

    pub fn board(&self) -> &'a Board {
        self.board
    }

    pub fn lexicon(&self) -> &'a Lexicon {
        self.lexicon
    }

    /// Find all words in the lexicon with at least `min_len` letters that can be
    /// spelled by a simple path of adjacent tiles.
    ///
    /// Every square is used as start of an independent search. A branch is
    /// only followed while the word spelled so far is a prefix of some word in
    /// the lexicon.
    /// ## Errors
    /// If `min_len` is 0.
    /// ## Examples
    /// ```
    /// # use wordsearch_solver::{Board, Codec, Error, Lexicon, SearchConfig, Searcher};
    /// let board = Board::from_tiles(&["CAT", "X", "FISH", "XXXX"])?;
    /// let lexicon = Lexicon::from_words(&["cat", "fish", "catfish"], &Codec::default())?;
    /// let searcher = Searcher::new(&board, &lexicon, SearchConfig::default());
    /// let words = searcher.find_all_words(3)?;
    /// assert_eq!(words.into_iter().collect::<Vec<_>>(), vec!["CAT", "CATFISH", "FISH"]);
    /// # Ok::<(), Error>(())
    /// ```
    pub fn find_all_words(&self, min_len: usize) -> Result<BTreeSet<String>, Error> {
        if min_len < 1 {
            return Err(Error::InvalidMinLength(min_len));
        }
        let mut found = BTreeSet::new();
        let mut state = PathState::new(self.board.len());
        for start in self.board.positions() {
            let index = self.board.index_of(start);
            if let Some(node) = self.step(ROOT, index) {
                let mut frame = Frame::enter(&mut state, start, index, &self.tiles[index]);
                self.collect_words(&mut frame, node, min_len, &mut found);
            }
            debug_assert!(state.is_clean());
        }
        tracing::debug!(min_len, found = found.len(), "find_all_words");
        Ok(found)
    }

    /// Follow the tile at `index` from lexicon `node`.
    fn step(&self, node: usize, index: usize) -> Option<usize> {
        self.codes[index]
            .as_ref()
            .and_then(|codes| self.lexicon.walk(node, codes))
    }

    fn collect_words(
        &self,
        frame: &mut Frame<'_>,
        node: usize,
        min_len: usize,
        found: &mut BTreeSet<String>,
    ) {
        if self.lexicon.is_terminal(node) && frame.word.chars().count() >= min_len {
            found.insert(frame.word.clone());
        }
        if !self.config.can_extend(frame.trace.len()) {
            return;
        }
        for next in self.board.neighbors(frame.position) {
            let index = self.board.index_of(next);
            if frame.visited[index] {
                continue;
            }
            if let Some(child) = self.step(node, index) {
                let mut child_frame = Frame::enter(&mut **frame, next, index, &self.tiles[index]);
                self.collect_words(&mut child_frame, child, min_len, found);
            }
        }
    }

    /// Find a path of adjacent tiles that spells `target`. Case is ignored.
    ///
    /// Returns the row-major indices of the tiles from start to end, or an
    /// empty list if `target` can not be found. Start squares are tried in
    /// row-major order and neighbors in fixed order; the first path found wins.
    /// The lexicon is not consulted.
    /// ## Examples
    /// ```
    /// # use wordsearch_solver::{Board, Codec, Error, Lexicon, SearchConfig, Searcher};
    /// let board = Board::default();
    /// let lexicon = Lexicon::from_words(&["lent"], &Codec::default())?;
    /// let searcher = Searcher::new(&board, &lexicon, SearchConfig::default());
    /// assert_eq!(searcher.find_path("lent"), vec![5, 6, 9, 13]);
    /// assert!(searcher.find_path("lentil").is_empty());
    /// # Ok::<(), Error>(())
    /// ```
    pub fn find_path(&self, target: &str) -> Vec<usize> {
        let target = target.to_uppercase();
        let mut state = PathState::new(self.board.len());
        for start in self.board.positions() {
            let index = self.board.index_of(start);
            let tile = &self.tiles[index];
            if !target.starts_with(tile.as_str()) {
                continue;
            }
            if *tile == target {
                return vec![index];
            }
            let mut frame = Frame::enter(&mut state, start, index, tile);
            if let Some(path) = self.trace_target(&mut frame, &target) {
                tracing::trace!(word = %target, ?path, "find_path");
                return path;
            }
        }
        tracing::trace!(word = %target, "find_path: not on board");
        Vec::new()
    }

    fn trace_target(&self, frame: &mut Frame<'_>, target: &str) -> Option<Vec<usize>> {
        // the word is always a prefix of the target
        let len = frame.word.len();
        if len == target.len() {
            return Some(frame.trace.iter().map(|&p| self.board.index_of(p)).collect());
        }
        if !self.config.can_extend(frame.trace.len()) {
            return None;
        }
        let rest = &target[len..];
        for next in self.board.neighbors(frame.position) {
            let index = self.board.index_of(next);
            if frame.visited[index] || !rest.starts_with(self.tiles[index].as_str()) {
                continue;
            }
            let mut child_frame = Frame::enter(&mut **frame, next, index, &self.tiles[index]);
            if let Some(path) = self.trace_target(&mut child_frame, target) {
                return Some(path);
            }
        }
        None
    }
}
