use crate::error::InvariantError;

use super::types::TrieNode;

const ROOT: u32 = 0;

/// Arena-backed prefix tree storing a set of words.
///
/// The root node always exists at arena slot 0 and is never pruned; the
/// empty word is stored as the root's own end marker. Slots freed by
/// pruning stay in the arena as garbage until [`Trie::clear`].
pub struct Trie {
    arena: Vec<TrieNode>,
    len: usize,
}

impl Trie {
    pub fn new() -> Self {
        Self {
            arena: vec![TrieNode::new()],
            len: 0,
        }
    }

    /// Number of distinct live words.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn clear(&mut self) {
        self.arena.clear();
        self.arena.push(TrieNode::new());
        self.len = 0;
    }

    /// Walks the character path of `s`; `None` when a step is missing.
    fn walk(&self, s: &str) -> Option<u32> {
        let mut curr = ROOT;
        for ch in s.chars() {
            curr = *self.arena[curr as usize].children.get(&ch)?;
        }
        Some(curr)
    }

    /// Inserts `word`. Returns `true` when the word is new; re-inserting a
    /// live word changes nothing.
    pub fn insert(&mut self, word: &str) -> bool {
        let mut curr = ROOT;
        for ch in word.chars() {
            match self.arena[curr as usize].children.get(&ch) {
                Some(&child) => curr = child,
                None => {
                    self.arena.push(TrieNode::new());
                    let child = (self.arena.len() - 1) as u32;
                    self.arena[curr as usize].children.insert(ch, child);
                    curr = child;
                }
            }
        }
        if self.arena[curr as usize].is_end {
            return false;
        }
        self.arena[curr as usize].is_end = true;
        self.len += 1;
        true
    }

    /// Exact-word membership.
    pub fn search(&self, word: &str) -> bool {
        self.walk(word)
            .map_or(false, |i| self.arena[i as usize].is_end)
    }

    /// Whether any live word starts with `prefix`.
    pub fn starts_with(&self, prefix: &str) -> bool {
        match self.walk(prefix) {
            None => false,
            Some(i) => self.arena[i as usize].is_end || self.subtree_has_word(i),
        }
    }

    fn subtree_has_word(&self, start: u32) -> bool {
        let mut stack: Vec<u32> = vec![start];
        while let Some(i) = stack.pop() {
            let node = &self.arena[i as usize];
            if node.is_end && i != start {
                return true;
            }
            stack.extend(node.children.values().copied());
        }
        false
    }

    /// Every live word starting with `prefix`, in lexicographic order.
    /// The empty prefix enumerates the whole set.
    pub fn words_with_prefix(&self, prefix: &str) -> Vec<String> {
        let Some(start) = self.walk(prefix) else {
            return Vec::new();
        };

        let mut out = Vec::new();
        // Pre-order with children pushed in reverse keeps lexicographic
        // order off an explicit stack.
        let mut stack: Vec<(u32, String)> = vec![(start, prefix.to_string())];
        while let Some((i, word)) = stack.pop() {
            let node = &self.arena[i as usize];
            if node.is_end {
                out.push(word.clone());
            }
            for (&ch, &child) in node.children.iter().rev() {
                let mut next = word.clone();
                next.push(ch);
                stack.push((child, next));
            }
        }
        out
    }

    /// Removes `word` if live. Unwinds the recorded path, pruning every
    /// node left childless and non-terminal; stops at the first node still
    /// carrying other words. The root survives even when empty.
    pub fn remove(&mut self, word: &str) -> bool {
        let mut path: Vec<(u32, char, u32)> = Vec::new();
        let mut curr = ROOT;
        for ch in word.chars() {
            match self.arena[curr as usize].children.get(&ch) {
                Some(&child) => {
                    path.push((curr, ch, child));
                    curr = child;
                }
                None => return false,
            }
        }
        if !self.arena[curr as usize].is_end {
            return false;
        }

        self.arena[curr as usize].is_end = false;
        self.len -= 1;

        for (parent, ch, child) in path.into_iter().rev() {
            let node = &self.arena[child as usize];
            if node.is_end || !node.children.is_empty() {
                break;
            }
            self.arena[parent as usize].children.remove(&ch);
        }

        true
    }

    /// Validates reachability bookkeeping: no childless non-terminal node
    /// below the root, and the live length matches the reachable end
    /// markers.
    pub fn assert_valid(&self) -> Result<(), InvariantError> {
        let mut words = 0usize;
        let mut stack: Vec<u32> = vec![ROOT];
        while let Some(i) = stack.pop() {
            let node = &self.arena[i as usize];
            if node.is_end {
                words += 1;
            }
            if i != ROOT && !node.is_end && node.children.is_empty() {
                return Err(InvariantError::DanglingTrieNode(i));
            }
            stack.extend(node.children.values().copied());
        }
        if words != self.len {
            return Err(InvariantError::LengthMismatch {
                len: self.len,
                count: words,
            });
        }
        Ok(())
    }
}

impl Default for Trie {
    fn default() -> Self {
        Self::new()
    }
}
