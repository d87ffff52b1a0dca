//! Dynamic trie used while reading a word list.
//!
//! The layout follows the `TrieVec` of the [`louds`](https://github.com/ajalab/louds) crate:
//! every node keeps its children sorted by label, so a breadth-first walk
//! visits the edges in lexicographic order.

/// Naive trie supporting dynamic insertion.
#[derive(Debug, Default)]
pub struct TrieVec<T> {
    children: Vec<(T, Box<TrieVec<T>>)>,
    terminal: bool,
}

impl<T> TrieVec<T> {
    pub fn new() -> TrieVec<T> {
        TrieVec {
            children: Vec::new(),
            terminal: false,
        }
    }

    pub fn children(&self) -> &[(T, Box<Self>)] {
        &self.children
    }

    pub fn terminal(&self) -> bool {
        self.terminal
    }
}

impl<T: Ord + Copy> TrieVec<T> {
    /// Insert `key`, returns false if it was already present.
    pub fn insert<K: AsRef<[T]>>(&mut self, key: K) -> bool {
        let mut t = self;
        for &c in key.as_ref() {
            let pos = match t.children.binary_search_by(|(c2, _)| c2.cmp(&c)) {
                Ok(pos) => pos,
                Err(pos) => {
                    t.children.insert(pos, (c, Box::new(TrieVec::new())));
                    pos
                }
            };
            t = &mut { t }.children[pos].1;
        }
        !std::mem::replace(&mut t.terminal, true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_sorted() {
        let mut t = TrieVec::new();
        for key in &["to", "tea", "ten", "i", "in", "inn", "we"] {
            assert!(t.insert(key.as_bytes()));
        }
        assert!(!t.insert("tea".as_bytes()));
        let labels: Vec<u8> = t.children().iter().map(|(c, _)| *c).collect();
        assert_eq!(labels, b"itw".to_vec());
        let (_, i) = &t.children()[0];
        assert!(i.terminal());
        assert!(!t.terminal());
    }
}
