//! A word search library for Rust.
//! <br>
//! This crate finds and scores the words on a square board of letter tiles, as in a game of Boggle.
//! A word is spelled by a path of adjacent tiles (horizontal, vertical or diagonal),
//! using each tile at most once. Tiles can hold more than one letter, like the `QU` tile.
//!
//! The words are checked against a lexicon, which is stored in a trie. The trie is used
//! to stop searching a path as soon as no word in the lexicon starts with the letters
//! found so far.
//!
//! # How to use `wordsearch_solver`
//! Start by creating a game, then specify the lexicon and the tiles on the board.
//! By default a 4x4 board is used, but you can specify your own N x N board.
//! The lexicon must be in utf-8; the first word of each line is used.
//!
//! # Basic usage
//!  ```
//! # use wordsearch_solver::{WordSearchGame, Error};
//! let game = WordSearchGame::new()
//!     .with_board(&["E", "E", "C", "A", "A", "L", "E", "P", "H", "N", "B", "O", "Q", "T", "T", "Y"])?
//!     .with_lexicon_from_words(&["lent", "peace", "bent", "cape"])?;
//! println!("{}", game);
//! let words = game.all_scorable_words(4)?;
//! assert_eq!(words.len(), 4);
//! assert_eq!(game.is_on_board("lent")?, vec![5, 6, 9, 13]);
//! assert_eq!(game.score_for_words(&["lent", "peace", "cape"], 4)?, 4);
//! # Ok::<(), Error>(())
//! ```
mod board;
mod codec;
mod config;
mod error;
mod game;
mod labelset;
mod ladder;
mod lexicon;
mod position;
mod scorer;
mod searcher;

pub use crate::board::Board;
pub use crate::codec::{Code, Codec};
pub use crate::config::SearchConfig;
pub use crate::error::{Error, ErrorKind};
pub use crate::game::WordSearchGame;
pub use crate::labelset::LabelSet;
pub use crate::ladder::{hamming_distance, WordLadder};
pub use crate::lexicon::{Lexicon, ROOT};
pub use crate::position::{Neighbors, Position};
pub use crate::scorer::{word_points, Scorer};
pub use crate::searcher::Searcher;
