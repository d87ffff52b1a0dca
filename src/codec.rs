use crate::error::Error;
use crate::labelset::LabelSet;
use std::collections::HashMap;

/// Compact code for a single letter, as stored in the lexicon nodes.
pub type Code = u8;

/// Highest code a [`LabelSet`](crate::LabelSet) can hold.
const MAX_CODE: usize = LabelSet::CAPACITY - 1;

const ASCII_UC: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
/// Translate from string to letter codes and vice versa.
/// Letters are uppercased before encoding.
/// - 0: unused (the label of the lexicon root)
/// - 1 .. 26: `A` .. `Z`
/// - 27 .. 127: extra letters, in the order they were added
pub struct Codec {
    encoder: HashMap<char, Code>,
    decoder: Vec<char>,
}

impl Default for Codec {
    fn default() -> Codec {
        let decoder: Vec<char> = std::iter::once('\0').chain(ASCII_UC.chars()).collect();
        let encoder = decoder
            .iter()
            .enumerate()
            .skip(1)
            .map(|(code, &ch)| (ch, code as Code))
            .collect();
        Codec { encoder, decoder }
    }
}

impl Codec {
    /// Return a new `Codec` for "A".."Z", extended with the letters from `extend`.
    /// Extra letters are stored in uppercase.
    /// ## Errors
    /// If the extra letters, once uppercased, do not fit the codes 27..=127.
    /// ## Examples
    /// ```
    /// use wordsearch_solver::{Codec, Error};
    /// let codec = Codec::new(&['ä', 'ö', 'ü'])?;
    /// assert_eq!(codec.encode("zä")?, vec![26, 27]);
    /// # Ok::<(), Error>(())
    /// ```
    pub fn new(extend: &[char]) -> Result<Codec, Error> {
        let mut codec = Codec::default();
        codec.extend(extend.iter().copied())?;
        Ok(codec)
    }

    /// Add the uppercase form of every letter in `letters` that the codec can not
    /// encode yet. Returns the number of letters added.
    /// ## Errors
    /// If the codec would need codes beyond 127. The codec is left unchanged.
    pub fn extend<I: IntoIterator<Item = char>>(&mut self, letters: I) -> Result<usize, Error> {
        let mut added: Vec<char> = Vec::new();
        for ch in letters.into_iter().flat_map(char::to_uppercase) {
            if !self.encoder.contains_key(&ch) && !added.contains(&ch) {
                added.push(ch);
            }
        }
        let count = self.decoder.len() - 1 - ASCII_UC.len() + added.len();
        let max = MAX_CODE - ASCII_UC.len();
        if count > max {
            return Err(Error::CodecOverflow { count, max });
        }
        for ch in &added {
            self.encoder.insert(*ch, self.decoder.len() as Code);
            self.decoder.push(*ch);
        }
        Ok(added.len())
    }

    /// The number of letters the codec can encode.
    pub fn len(&self) -> usize {
        self.decoder.len() - 1
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Encode string, and return a list of letter codes.
    /// ## Errors
    /// An error is returned if a letter can not be encoded with the codec.
    /// ## Examples
    /// ```
    /// use wordsearch_solver::{Codec, Error};
    /// let codec = Codec::default();
    /// assert_eq!(codec.encode("azAZ")?, vec![1, 26, 1, 26]);
    /// assert!(codec.encode("a-z").is_err());
    /// # Ok::<(), Error>(())
    /// ```
    pub fn encode(&self, word: &str) -> Result<Vec<Code>, Error> {
        word.chars()
            .flat_map(char::to_uppercase)
            .map(|ch| {
                self.encoder
                    .get(&ch)
                    .copied()
                    .ok_or_else(|| Error::EncodeInvalidToken(ch.to_string()))
            })
            .collect()
    }

    /// Decode letter codes to an uppercase string. Unknown codes are skipped.
    pub fn decode(&self, codes: &[Code]) -> String {
        codes
            .iter()
            .filter_map(|&code| self.decoder.get(code as usize).filter(|_| code > 0))
            .collect()
    }

    /// Iterate over all letters of the codec, in code order.
    pub fn alphabet(&self) -> impl Iterator<Item = char> + '_ {
        self.decoder.iter().skip(1).copied()
    }
}
