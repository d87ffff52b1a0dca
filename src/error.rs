use thiserror::Error;

/// Broad classification of an [`Error`].
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    /// The caller passed something malformed: an unreadable wordfile,
    /// a board that is not square, a minimum word length of 0.
    InvalidArgument,
    /// The operation needs state that has not been set up yet.
    IllegalState,
}

#[derive(Error, Debug)]
/// Errors that can be returned
pub enum Error {
    /// Error reading wordfile
    #[error("Wordfile \"{path}\" could not be read")]
    ReadError {
        path: String,
        source: std::io::Error,
    },

    /// Error deserializing bincoded wordfile
    #[cfg(feature = "bincode")]
    #[error("Wordfile {0} could not be deserialized")]
    WordfileDeserializeError(String),

    /// Token can not be encoded
    #[error("Encoder: invalid token '{0}'")]
    EncodeInvalidToken(String),

    /// Too many extra letters for the codec
    #[error("Codec can hold {max} extra letters, got {count}")]
    CodecOverflow { count: usize, max: usize },

    /// A board needs at least one tile
    #[error("Board has no tiles")]
    EmptyBoard,

    /// The number of tiles must be a perfect square
    #[error("Invalid number of tiles {0} (expect a perfect square)")]
    BoardNotSquare(usize),

    /// Tiles must contain at least one character
    #[error("Tile at index {0} is empty")]
    EmptyTile(usize),

    /// The minimum word length must be at least 1
    #[error("Invalid minimum word length {0} (expect at least 1)")]
    InvalidMinLength(usize),

    /// A query was issued before a lexicon was loaded
    #[error("No lexicon loaded")]
    LexiconNotLoaded,
}

impl Error {
    /// Return the kind of this error.
    /// ## Examples
    /// ```
    /// use wordsearch_solver::{Error, ErrorKind};
    /// assert_eq!(Error::BoardNotSquare(3).kind(), ErrorKind::InvalidArgument);
    /// assert_eq!(Error::LexiconNotLoaded.kind(), ErrorKind::IllegalState);
    /// ```
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::LexiconNotLoaded => ErrorKind::IllegalState,
            _ => ErrorKind::InvalidArgument,
        }
    }
}
