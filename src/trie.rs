//! `trie` — the length-sharded dictionary index.
//!
//! Rather than one big prefix tree with end-of-word markers, we keep a
//! separate tree per word length. A node sitting at depth `L` inside the
//! length-`L` tree *is* a complete word; no terminal flag is stored or
//! needed. This matters for matching: a node that is a valid prefix of a
//! longer word must never be mistaken for a complete word of the current
//! target length, and the per-length sharding rules that out structurally.
//!
//! The index is built once from a word list and never mutated afterwards,
//! so it can be shared freely across concurrent queries.

use std::collections::HashMap;

/// A single prefix-tree node: one child edge per letter.
///
/// Nodes carry no data beyond their children. Word validity is established
/// by *where* a node sits (depth within a per-length tree), not by a flag.
#[derive(Debug, Default)]
pub struct TrieNode {
    children: HashMap<char, TrieNode>,
}

impl TrieNode {
    /// The child reached by following the edge for `letter`, if any.
    pub fn child(&self, letter: char) -> Option<&TrieNode> {
        self.children.get(&letter)
    }

    /// Walk or create the edge for `letter`, returning the child.
    fn child_or_insert(&mut self, letter: char) -> &mut TrieNode {
        self.children.entry(letter).or_default()
    }

    /// Letters that have a child edge from this node.
    pub fn edges(&self) -> impl Iterator<Item = char> + '_ {
        self.children.keys().copied()
    }
}

/// Mapping from word length to the root of the tree holding all words of
/// exactly that length.
///
/// Built once at startup; read-only thereafter.
#[derive(Debug, Default)]
pub struct DictionaryIndex {
    roots: HashMap<usize, TrieNode>,
}

impl DictionaryIndex {
    /// Build the index from an iterator of already-normalized words.
    ///
    /// Words of length ≤ 1 are discarded — single letters aren't useful
    /// answers in this puzzle domain. Each remaining word is inserted into
    /// the tree for its own length, creating nodes along its path as
    /// needed.
    pub fn build<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut roots: HashMap<usize, TrieNode> = HashMap::new();

        for word in words {
            let word = word.as_ref();
            let len = word.chars().count();
            if len <= 1 {
                continue;
            }

            let mut node = roots.entry(len).or_default();
            for letter in word.chars() {
                node = node.child_or_insert(letter);
            }
        }

        DictionaryIndex { roots }
    }

    /// The root of the tree for words of exactly `len`, if any exist.
    pub fn root_for(&self, len: usize) -> Option<&TrieNode> {
        self.roots.get(&len)
    }

    /// Number of distinct word lengths present in the index.
    pub fn num_lengths(&self) -> usize {
        self.roots.len()
    }

    /// True if the index contains `word` at its exact length.
    ///
    /// Mostly useful for tests and diagnostics; matching goes through the
    /// solver, not this.
    pub fn contains(&self, word: &str) -> bool {
        let len = word.chars().count();
        let Some(root) = self.root_for(len) else {
            return false;
        };
        let mut node = root;
        for letter in word.chars() {
            match node.child(letter) {
                Some(next) => node = next,
                None => return false,
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_shards_by_length() {
        let index = DictionaryIndex::build(["cat", "dog", "able", "be"]);

        assert_eq!(index.num_lengths(), 3);
        assert!(index.root_for(2).is_some());
        assert!(index.root_for(3).is_some());
        assert!(index.root_for(4).is_some());
        assert!(index.root_for(5).is_none());
    }

    #[test]
    fn test_build_discards_short_words() {
        let index = DictionaryIndex::build(["a", "i", "", "at"]);

        assert!(index.root_for(1).is_none());
        assert!(index.root_for(0).is_none());
        assert!(index.contains("at"));
    }

    #[test]
    fn test_contains_exact_words_only() {
        let index = DictionaryIndex::build(["cat", "cart"]);

        assert!(index.contains("cat"));
        assert!(index.contains("cart"));
        // "car" is a prefix of "cart" but not a word in the list; the
        // length-3 tree has no 'r' edge under "ca" since only "cat" is
        // three letters long.
        assert!(!index.contains("car"));
        assert!(!index.contains("ca"));
    }

    #[test]
    fn test_prefix_in_longer_tree_is_not_a_word() {
        // "care" only exists at length 4; nothing of length 3 was inserted,
        // so there is no length-3 tree at all.
        let index = DictionaryIndex::build(["care"]);

        assert!(index.root_for(3).is_none());
        assert!(!index.contains("car"));
    }

    #[test]
    fn test_child_walk() {
        let index = DictionaryIndex::build(["cat"]);
        let root = index.root_for(3).unwrap();

        let c = root.child('c').unwrap();
        let a = c.child('a').unwrap();
        assert!(a.child('t').is_some());
        assert!(a.child('r').is_none());
        assert!(root.child('x').is_none());
    }

    #[test]
    fn test_shared_prefixes_share_nodes() {
        let index = DictionaryIndex::build(["cat", "car", "cab"]);
        let root = index.root_for(3).unwrap();

        let ca = root.child('c').unwrap().child('a').unwrap();
        let edges: Vec<char> = {
            let mut e: Vec<char> = ca.edges().collect();
            e.sort_unstable();
            e
        };
        assert_eq!(edges, vec!['b', 'r', 't']);
    }

    #[test]
    fn test_empty_input() {
        let index = DictionaryIndex::build(Vec::<&str>::new());
        assert_eq!(index.num_lengths(), 0);
    }
}
