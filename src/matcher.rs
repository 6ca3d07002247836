//! `matcher` — the letter-pool matcher at the core of the solver.
//!
//! [`PoolWalk`] enumerates every way of choosing and ordering exactly
//! `remaining` letters from a pool such that each successive letter is a
//! child edge of the current trie node, yielding the accumulated string
//! plus the node reached. It is an exhaustive backtracking search over
//! permutations of a chosen subset of the pool, pruned at two points:
//!
//! 1. A missing tree edge kills a branch immediately, so no permutation is
//!    materialized unless some dictionary word can still use it.
//! 2. Identical letters at adjacent positions in the (sorted) pool are
//!    branched on only once. Consuming either physical tile of a repeated
//!    letter leads to the same string and the same node, so branching on
//!    both would duplicate every downstream result.
//!
//! The walk is a pull-based iterator over an explicit stack of search
//! frames, so it is lazy, pausable, and restartable: nothing is computed
//! until `next()` is called, and dropping the iterator cancels the search.
//! Branches are explored in sorted pool order, which makes the enumeration
//! order deterministic.

use crate::patterns::LetterPool;
use crate::trie::TrieNode;

/// One suspended choice point in the backtracking search.
struct Frame<'t> {
    /// Letters consumed so far (including any prefix from earlier segments).
    prefix: String,
    /// Trie node reached by `prefix`.
    node: &'t TrieNode,
    /// Letters still available to this segment, sorted.
    pool: LetterPool,
    /// How many more letters this segment must consume.
    remaining: usize,
    /// Next pool position to consider when this frame resumes.
    next_choice: usize,
}

/// Lazy enumeration of `(consumed-letters, node-reached)` pairs for a
/// single segment.
///
/// Yields, for every valid ordering of `remaining` letters drawn from
/// `pool` along trie edges, the extended prefix and the trie node it lands
/// on. With `remaining == 0` it yields the starting pair exactly once.
/// Yields nothing when `remaining` exceeds the pool size or no sequence of
/// choices stays on the tree.
pub struct PoolWalk<'t> {
    stack: Vec<Frame<'t>>,
}

impl<'t> PoolWalk<'t> {
    /// Start a walk at `node` with `prefix` already consumed.
    ///
    /// `prefix` is carried through untouched and prepended to every yielded
    /// string; the composer uses this to chain segments.
    pub fn new(prefix: String, node: &'t TrieNode, pool: LetterPool, remaining: usize) -> Self {
        PoolWalk {
            stack: vec![Frame {
                prefix,
                node,
                pool,
                remaining,
                next_choice: 0,
            }],
        }
    }
}

impl<'t> Iterator for PoolWalk<'t> {
    type Item = (String, &'t TrieNode);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let frame = self.stack.last_mut()?;

            // Base case: the segment is fully consumed. Yield once and
            // backtrack; the pool is not examined further.
            if frame.remaining == 0 {
                let done = self.stack.pop()?;
                return Some((done.prefix, done.node));
            }

            // Resume scanning this frame's pool where we left off, looking
            // for the next branchable letter.
            let picked = {
                let letters = frame.pool.letters();
                let mut found = None;
                let mut i = frame.next_choice;
                while i < letters.len() {
                    let letter = letters[i];
                    // Duplicate-letter pruning: the pool is sorted, so a
                    // repeat of the previous position would retrace the
                    // exact same branch.
                    if i > 0 && letter == letters[i - 1] {
                        i += 1;
                        continue;
                    }
                    if let Some(child) = frame.node.child(letter) {
                        found = Some((i, letter, child));
                        break;
                    }
                    i += 1;
                }
                found
            };

            match picked {
                Some((i, letter, child)) => {
                    frame.next_choice = i + 1;
                    let mut prefix = frame.prefix.clone();
                    prefix.push(letter);
                    let pool = frame.pool.without(i);
                    let remaining = frame.remaining - 1;
                    self.stack.push(Frame {
                        prefix,
                        node: child,
                        pool,
                        remaining,
                        next_choice: 0,
                    });
                }
                // Frame exhausted: backtrack.
                None => {
                    self.stack.pop();
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trie::DictionaryIndex;

    fn walk_words(index: &DictionaryIndex, len: usize, pool: &str, remaining: usize) -> Vec<String> {
        let root = index.root_for(len).expect("no root at that length");
        PoolWalk::new(String::new(), root, LetterPool::new(pool.chars()), remaining)
            .map(|(word, _)| word)
            .collect()
    }

    #[test]
    fn test_finds_words_from_pool() {
        let index = DictionaryIndex::build(["cat", "act", "car"]);

        // "car" is excluded: the pool has no 'r'. Branches are explored in
        // sorted pool order ('a' before 'c' before 't'), so "act" comes
        // out before "cat".
        assert_eq!(walk_words(&index, 3, "act", 3), vec!["act", "cat"]);
    }

    #[test]
    fn test_duplicate_letters_yield_once() {
        let index = DictionaryIndex::build(["bee"]);

        // Two physical 'e' tiles, but only one "bee".
        assert_eq!(walk_words(&index, 3, "bee", 3), vec!["bee"]);
    }

    #[test]
    fn test_duplicate_pruning_with_partial_consumption() {
        let index = DictionaryIndex::build(["ab", "ba"]);

        // Pool {a,a,b}, choose 2: each result appears once even though the
        // repeated 'a' could be either tile.
        assert_eq!(walk_words(&index, 2, "aab", 2), vec!["ab", "ba"]);
    }

    #[test]
    fn test_zero_remaining_yields_start_once() {
        let index = DictionaryIndex::build(["cat"]);
        let root = index.root_for(3).unwrap();

        let results: Vec<(String, &_)> =
            PoolWalk::new("pre".to_string(), root, LetterPool::new("xyz".chars()), 0).collect();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].0, "pre");
        assert!(std::ptr::eq(results[0].1, root));
    }

    #[test]
    fn test_pool_smaller_than_remaining_is_empty() {
        let index = DictionaryIndex::build(["cat"]);

        assert!(walk_words(&index, 3, "ca", 3).is_empty());
        assert!(walk_words(&index, 3, "", 1).is_empty());
    }

    #[test]
    fn test_no_tree_path_is_empty() {
        let index = DictionaryIndex::build(["cat"]);

        assert!(walk_words(&index, 3, "xyz", 3).is_empty());
    }

    #[test]
    fn test_oversized_pool_selects_subset() {
        let index = DictionaryIndex::build(["at", "ta"]);

        // Pool has 4 letters but only 2 are consumed; the leftovers simply
        // go unused.
        assert_eq!(walk_words(&index, 2, "qzta", 2), vec!["at", "ta"]);
    }

    #[test]
    fn test_enumeration_is_deterministic() {
        let index = DictionaryIndex::build(["stop", "spot", "pots", "tops", "opts", "post"]);

        let first = walk_words(&index, 4, "opst", 4);
        let second = walk_words(&index, 4, "opst", 4);
        assert_eq!(first.len(), 6);
        assert_eq!(first, second);
    }

    #[test]
    fn test_order_follows_sorted_first_choice() {
        let index = DictionaryIndex::build(["tab", "bat"]);

        // 'b' sorts before 't', so "bat" is enumerated first.
        assert_eq!(walk_words(&index, 3, "abt", 3), vec!["bat", "tab"]);
    }

    #[test]
    fn test_walk_is_lazy_and_resumable() {
        let index = DictionaryIndex::build(["stop", "spot", "pots"]);
        let root = index.root_for(4).unwrap();

        let mut walk = PoolWalk::new(String::new(), root, LetterPool::new("opst".chars()), 4);

        // Pull one result, pause, pull the rest; dropping early would
        // simply abandon the remaining frames.
        let first = walk.next().map(|(w, _)| w);
        assert_eq!(first.as_deref(), Some("pots"));
        let rest: Vec<String> = walk.map(|(w, _)| w).collect();
        assert_eq!(rest, vec!["spot", "stop"]);
    }

    #[test]
    fn test_yields_node_usable_for_continuation() {
        let index = DictionaryIndex::build(["abcd"]);
        let root = index.root_for(4).unwrap();

        // Consume "ab" from the first pool, then continue from the reached
        // node with a second pool.
        let (prefix, node) = PoolWalk::new(String::new(), root, LetterPool::new("ab".chars()), 2)
            .next()
            .expect("first half should match");
        assert_eq!(prefix, "ab");

        let completions: Vec<String> =
            PoolWalk::new(prefix, node, LetterPool::new("cd".chars()), 2)
                .map(|(w, _)| w)
                .collect();
        assert_eq!(completions, vec!["abcd"]);
    }
}
