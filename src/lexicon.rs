mod trievec;

use self::trievec::TrieVec;
use crate::codec::{Code, Codec};
use crate::labelset::LabelSet;
use crate::Error;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::fmt;
use std::fs::read_to_string;
use std::io::BufRead;

/// Index of the root node of every lexicon.
pub const ROOT: usize = 0;

#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
/// A trie data structure that holds all the words of the game, in uppercase.
pub struct Lexicon {
    /// List of nodes in trie. Each node is a tuple with the index of the first
    /// child node, and a `LabelSet` with the codes of all child nodes.
    nodes: Vec<(u32, LabelSet)>,
    /// The code on the edge leading to each node.
    labels: Vec<Code>,
    /// List indicating terminal nodes
    terminal: Vec<bool>,
    /// Path of the wordfile used to build the lexicon.
    /// Empty if the lexicon is not build from a file.
    wordfile: String,
    word_count: usize,
    /// Encode words to/from codes
    codec: Codec,
}

impl fmt::Display for Lexicon {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "<Lexicon: {} words, {} nodes from '{}'>",
            self.word_count,
            self.node_count(),
            self.wordfile
        )
    }
}

impl Default for Lexicon {
    fn default() -> Self {
        Lexicon::from(TrieVec::new())
    }
}

impl From<TrieVec<Code>> for Lexicon {
    fn from(trie: TrieVec<Code>) -> Self {
        let mut nodes: Vec<(u32, LabelSet)> = Vec::new();
        let mut labels: Vec<Code> = Vec::new();
        let mut terminal: Vec<bool> = Vec::new();
        let mut word_count = 0;

        let mut queue = VecDeque::new();
        queue.push_back((&trie, ROOT, 0));
        while let Some((node, parent, code)) = queue.pop_front() {
            let i = nodes.len();
            let children: LabelSet = node.children().iter().map(|(c, _)| *c).collect();
            for (c, child) in node.children() {
                queue.push_back((child, i, *c));
            }
            if node.terminal() {
                word_count += 1;
            }
            nodes.push((0, children));
            labels.push(code);
            terminal.push(node.terminal());
            // the first child to be dequeued marks the start of the siblings
            if i != ROOT && nodes[parent].0 == 0 {
                nodes[parent].0 = i as u32;
            }
        }
        Lexicon {
            nodes,
            labels,
            terminal,
            wordfile: String::new(),
            word_count,
            codec: Codec::default(),
        }
    }
}

/// The first whitespace delimited token of each record, blank records are skipped.
fn first_tokens<'w, I>(records: I) -> Vec<&'w str>
where
    I: IntoIterator<Item = &'w str>,
{
    records
        .into_iter()
        .filter_map(|r| r.split_whitespace().next())
        .collect()
}

impl Lexicon {
    /// Build the trie from `records`. `codec` is extended with every letter of the
    /// words that it can not encode yet, so no word is left out.
    fn build<'w, I>(records: I, codec: &Codec) -> Result<Lexicon, Error>
    where
        I: IntoIterator<Item = &'w str>,
    {
        let words = first_tokens(records);
        let mut codec = codec.clone();
        let added = codec.extend(words.iter().flat_map(|w| w.chars()))?;
        if added > 0 {
            tracing::debug!(added, letters = codec.len(), "codec extended");
        }
        let mut builder = TrieVec::new();
        for word in &words {
            builder.insert(codec.encode(word)?);
        }
        let mut lexicon = Lexicon::from(builder);
        lexicon.codec = codec;
        Ok(lexicon)
    }

    /// Read the lexicon from a file. The file must be encoded in utf-8.
    /// The first word of each line is added to the lexicon, in uppercase; the rest of
    /// the line is ignored. Letters outside `codec` are added to the codec of the lexicon.
    /// ## Errors
    /// - If the file can not be read.
    /// - If the words hold more distinct letters than a codec can encode.
    pub fn from_file(wordfile: &str, codec: &Codec) -> Result<Lexicon, Error> {
        let contents = read_to_string(wordfile).map_err(|source| Error::ReadError {
            path: String::from(wordfile),
            source,
        })?;
        let mut lexicon = Lexicon::build(contents.lines(), codec)?;
        lexicon.wordfile = String::from(wordfile);
        tracing::debug!(wordfile, words = lexicon.word_count, "lexicon loaded");
        Ok(lexicon)
    }

    /// Read the lexicon from `reader`, with the same format as [`from_file`](Lexicon::from_file).
    /// ## Errors
    /// Fails if reading from `reader` fails, or as [`from_file`](Lexicon::from_file).
    pub fn from_reader<R: BufRead>(reader: R, codec: &Codec) -> Result<Lexicon, Error> {
        let lines = reader
            .lines()
            .collect::<Result<Vec<String>, _>>()
            .map_err(|source| Error::ReadError {
                path: String::from("<reader>"),
                source,
            })?;
        Lexicon::build(lines.iter().map(String::as_str), codec)
    }

    /// Build a lexicon from a list of words.
    /// ## Errors
    /// If the words hold more distinct letters than a codec can encode.
    /// ## Examples
    /// ```
    /// use wordsearch_solver::{Codec, Error, Lexicon};
    /// let lexicon = Lexicon::from_words(&["rust", "rest", "crust", "don't"], &Codec::default())?;
    /// assert!(lexicon.contains("Rust"));
    /// assert!(lexicon.contains("DON'T"));
    /// assert!(lexicon.has_prefix("CR"));
    /// assert!(!lexicon.has_prefix("RX"));
    /// # Ok::<(), Error>(())
    /// ```
    pub fn from_words<S: AsRef<str>>(words: &[S], codec: &Codec) -> Result<Lexicon, Error> {
        Lexicon::build(words.iter().map(AsRef::as_ref), codec)
    }

    #[cfg(all(feature = "serde", feature = "bincode"))]
    /// Deserialize the lexicon from a bincoded file.
    /// ## Errors
    /// - If the file can not be read.
    /// - If the contents can not be deserialized
    pub fn deserialize_from(wordfile: &str) -> Result<Lexicon, Error> {
        use std::fs::File;
        use std::io::BufReader;
        let file = File::open(wordfile).map_err(|source| Error::ReadError {
            path: String::from(wordfile),
            source,
        })?;
        let reader = BufReader::new(file);
        let mut lexicon: Lexicon = bincode::deserialize_from(reader)
            .map_err(|_| Error::WordfileDeserializeError(String::from(wordfile)))?;
        lexicon.wordfile = String::from(wordfile);
        Ok(lexicon)
    }

    /// The codec used to encode words. It can encode every letter of every word.
    pub fn codec(&self) -> &Codec {
        &self.codec
    }

    /// The number of words in the lexicon.
    pub fn word_count(&self) -> usize {
        self.word_count
    }

    /// The number of nodes in the trie, including the root.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Path of the wordfile, empty if the lexicon was not read from a file.
    pub fn wordfile(&self) -> &str {
        &self.wordfile
    }

    pub fn is_empty(&self) -> bool {
        self.word_count == 0
    }

    /// Return the start and end index of the child nodes of node `i`,
    /// or None if node has no children.
    fn range_children(&self, i: usize) -> Option<(usize, usize)> {
        let (start, codes) = &self.nodes[i];
        match codes.len() {
            0 => None,
            n => Some((*start as usize, *start as usize + n - 1)),
        }
    }

    /// Get the index of the child with `code` of node `i` if present.
    pub fn get(&self, i: usize, code: Code) -> Option<usize> {
        let (start, codes) = &self.nodes[i];
        codes.index_of(code).map(|index| *start as usize + index)
    }

    /// Follow `codes` from node `i`. Returns the node reached, or None if
    /// no word continues with `codes`.
    pub fn walk<K: AsRef<[Code]>>(&self, i: usize, codes: K) -> Option<usize> {
        codes
            .as_ref()
            .iter()
            .try_fold(i, |node, &code| self.get(node, code))
    }

    /// Returns true if a word ends at node `i`.
    pub fn is_terminal(&self, i: usize) -> bool {
        self.terminal[i]
    }

    /// Returns true if `word` is in the lexicon. Case is ignored.
    pub fn contains(&self, word: &str) -> bool {
        match self.codec.encode(word) {
            Ok(codes) => self.walk(ROOT, codes).map_or(false, |i| self.is_terminal(i)),
            Err(_) => false,
        }
    }

    /// Returns true if at least one word in the lexicon starts with `prefix`. Case is ignored.
    ///
    /// Every node of the trie lies on the path of some word, so the prefix is valid
    /// as soon as it can be followed from the root. The empty prefix is valid
    /// unless the lexicon is empty.
    pub fn has_prefix(&self, prefix: &str) -> bool {
        if prefix.is_empty() {
            return !self.is_empty();
        }
        match self.codec.encode(prefix) {
            Ok(codes) => self.walk(ROOT, codes).is_some(),
            Err(_) => false,
        }
    }

    /// Return all words in lexicographic order.
    pub fn words(&self) -> Vec<String> {
        let mut words = Vec::with_capacity(self.word_count);
        let mut prefix = Vec::new();
        self.collect_words(ROOT, &mut prefix, &mut words);
        words.sort();
        words
    }

    fn collect_words(&self, i: usize, prefix: &mut Vec<Code>, words: &mut Vec<String>) {
        if self.terminal[i] {
            words.push(self.codec.decode(prefix));
        }
        if let Some((start, end)) = self.range_children(i) {
            for child in start..=end {
                prefix.push(self.labels[child]);
                self.collect_words(child, prefix, words);
                prefix.pop();
            }
        }
    }
}
