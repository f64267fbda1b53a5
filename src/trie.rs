// Copyright (c) 2025 Exact Trie Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Exact-match trie implementation.
//!
//! This module contains the core container: insertion, exact lookup, and
//! checkpoint-based longest-prefix lookup, each in forward or reversed key
//! order.

use std::borrow::Cow;
use std::fmt;

use crate::config::ExactTrieConfig;
use crate::error::{ExactTrieError, ExactTrieResult};
use crate::node::TrieNode;

/// An exact-match trie mapping character sequences to values.
///
/// Keys are stored one character per tree level. Lookups require the full
/// key path to exist *and* a value to have been stored at its final node, so
/// prefixes of stored keys do not match by accident. The two extensions on
/// top of that base:
///
/// * **Reversed keys**: `put`/`get` take a `reverse` flag that processes
///   the key back to front, which turns the prefix tree into a suffix tree
///   for matching things like file extensions.
/// * **Checkpoints**: [`get_with_checkpoints`](Self::get_with_checkpoints)
///   relaxes the exact-match rule to "longest stored prefix ending at a
///   delimiter", with the full input always eligible.
///
/// # Examples
///
/// ```
/// use exact_trie::ExactTrie;
///
/// let mut trie = ExactTrie::new();
/// trie.put("hello", 1, false).put("hello.world", 2, false);
///
/// assert_eq!(trie.get("hello.world", false), Some(&2));
/// assert_eq!(trie.get("hello.wor", false), None);
/// assert_eq!(trie.get_with_checkpoints("hello.there", Some('.'), false), Some(&1));
/// ```
pub struct ExactTrie<V> {
    /// The root node of the trie
    root: TrieNode<V>,

    /// Configuration options
    config: ExactTrieConfig,

    /// Number of keys currently stored
    len: usize,
}

impl<V> ExactTrie<V> {
    /// Creates a new empty trie with default configuration.
    pub fn new() -> Self {
        Self::with_config(ExactTrieConfig::default())
    }

    /// Creates a new empty trie with the specified configuration.
    pub fn with_config(config: ExactTrieConfig) -> Self {
        Self {
            root: TrieNode::new(),
            config,
            len: 0,
        }
    }

    /// Gets the configuration of this trie.
    pub fn config(&self) -> &ExactTrieConfig {
        &self.config
    }

    /// Returns the number of keys stored in the trie.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the trie contains no keys.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Removes all keys from the trie, keeping the configuration.
    pub fn clear(&mut self) {
        self.root = TrieNode::new();
        self.len = 0;
    }

    /// Inserts a key-value pair into the trie.
    ///
    /// The key may be empty, in which case the value is stored at the root.
    /// Inserting over an existing key replaces its value.
    ///
    /// # Arguments
    ///
    /// * `key` - The key to insert.
    /// * `value` - The value to associate with the key.
    /// * `reverse` - Process the key's characters back to front.
    ///
    /// # Returns
    ///
    /// `&mut Self`, so calls can be chained fluently.
    pub fn put<K>(&mut self, key: K, value: V, reverse: bool) -> &mut Self
    where
        K: AsRef<str>,
    {
        let folded = self.fold(key.as_ref());

        let mut node = &mut self.root;
        for c in Self::path_chars(&folded, reverse) {
            node = node.children.entry(c).or_insert_with(TrieNode::new);
        }

        if node.value.replace(value).is_none() {
            self.len += 1;
        }

        self
    }

    /// Inserts several keys that all map to distinct values.
    ///
    /// The i-th key is paired with the i-th value. The counts must agree:
    /// on a mismatch this fails with [`ExactTrieError::LengthMismatch`]
    /// before touching the trie, so a failed call never partially inserts.
    ///
    /// # Arguments
    ///
    /// * `keys` - The keys to insert, in order.
    /// * `values` - One value per key, in the same order.
    /// * `reverse` - Process each key's characters back to front.
    pub fn put_all_values<K>(
        &mut self,
        keys: &[K],
        values: Vec<V>,
        reverse: bool,
    ) -> ExactTrieResult<&mut Self>
    where
        K: AsRef<str>,
    {
        if keys.len() != values.len() {
            return Err(ExactTrieError::LengthMismatch {
                keys: keys.len(),
                values: values.len(),
            });
        }

        for (key, value) in keys.iter().zip(values) {
            self.put(key, value, reverse);
        }

        Ok(self)
    }

    /// Retrieves the value stored for exactly this key.
    ///
    /// The full path must exist and a value must have been stored at its
    /// final node; keys that are strict prefixes (or extensions) of stored
    /// keys do not match.
    ///
    /// # Arguments
    ///
    /// * `key` - The key to look up.
    /// * `reverse` - Process the key's characters back to front.
    ///
    /// # Returns
    ///
    /// The stored value, or `None` if this exact key was never stored.
    pub fn get<K>(&self, key: K, reverse: bool) -> Option<&V>
    where
        K: AsRef<str>,
    {
        let folded = self.fold(key.as_ref());

        let mut node = &self.root;
        for c in Self::path_chars(&folded, reverse) {
            node = match node.children.get(&c) {
                Some(next) => next,
                None => return None,
            };
        }

        node.value.as_ref()
    }

    /// Checks whether exactly this key is stored.
    pub fn has<K>(&self, key: K, reverse: bool) -> bool
    where
        K: AsRef<str>,
    {
        self.get(key, reverse).is_some()
    }

    /// Applies [`get`](Self::get) to each key, preserving order and length.
    pub fn get_all<K>(&self, keys: &[K], reverse: bool) -> Vec<Option<&V>>
    where
        K: AsRef<str>,
    {
        keys.iter().map(|key| self.get(key, reverse)).collect()
    }

    /// Applies [`has`](Self::has) to each key, preserving order and length.
    pub fn has_all<K>(&self, keys: &[K], reverse: bool) -> Vec<bool>
    where
        K: AsRef<str>,
    {
        keys.iter().map(|key| self.has(key, reverse)).collect()
    }

    /// Finds the longest stored prefix of `input` ending at a checkpoint.
    ///
    /// The input is traversed character by character (front to back, or
    /// back to front when `reverse` is set), following child links until one
    /// is missing; input beyond that point is never examined. A node on the
    /// matched path is remembered as the best candidate so far when it holds
    /// a value and the character consumed next is the checkpoint character.
    /// When `checkpoint` is `None`, every node on the path qualifies. The
    /// node where traversal stops qualifies unconditionally, so an exact
    /// full-input match always wins.
    ///
    /// # Arguments
    ///
    /// * `input` - The string to match stored keys against.
    /// * `checkpoint` - Delimiter character marking eligible match ends, or
    ///   `None` to make every position eligible.
    /// * `reverse` - Process the input's characters back to front.
    ///
    /// # Returns
    ///
    /// The value of the longest eligible stored prefix, or `None` if no
    /// eligible prefix holds a value.
    pub fn get_with_checkpoints<K>(
        &self,
        input: K,
        checkpoint: Option<char>,
        reverse: bool,
    ) -> Option<&V>
    where
        K: AsRef<str>,
    {
        let folded = self.fold(input.as_ref());

        let mut candidate = None;
        let mut node = &self.root;

        for c in Self::path_chars(&folded, reverse) {
            let next = match node.children.get(&c) {
                Some(next) => next,
                None => break,
            };
            if checkpoint.map_or(true, |delimiter| c == delimiter) {
                candidate = node.value.as_ref().or(candidate);
            }
            node = next;
        }

        // The stop node counts whether input ran out or a child was missing.
        node.value.as_ref().or(candidate)
    }

    /// Checks whether [`get_with_checkpoints`](Self::get_with_checkpoints)
    /// would find a value.
    pub fn has_with_checkpoints<K>(
        &self,
        input: K,
        checkpoint: Option<char>,
        reverse: bool,
    ) -> bool
    where
        K: AsRef<str>,
    {
        self.get_with_checkpoints(input, checkpoint, reverse)
            .is_some()
    }

    /// Applies [`get_with_checkpoints`](Self::get_with_checkpoints) to each
    /// input, preserving order and length.
    pub fn get_all_with_checkpoints<K>(
        &self,
        inputs: &[K],
        checkpoint: Option<char>,
        reverse: bool,
    ) -> Vec<Option<&V>>
    where
        K: AsRef<str>,
    {
        inputs
            .iter()
            .map(|input| self.get_with_checkpoints(input, checkpoint, reverse))
            .collect()
    }

    /// Applies [`has_with_checkpoints`](Self::has_with_checkpoints) to each
    /// input, preserving order and length.
    pub fn has_all_with_checkpoints<K>(
        &self,
        inputs: &[K],
        checkpoint: Option<char>,
        reverse: bool,
    ) -> Vec<bool>
    where
        K: AsRef<str>,
    {
        inputs
            .iter()
            .map(|input| self.has_with_checkpoints(input, checkpoint, reverse))
            .collect()
    }

    /// Folds a key to its canonical case if the trie is case-insensitive.
    fn fold<'a>(&self, key: &'a str) -> Cow<'a, str> {
        if self.config.ignore_case() {
            Cow::Owned(key.to_lowercase())
        } else {
            Cow::Borrowed(key)
        }
    }

    /// Collects a key's characters in traversal order.
    fn path_chars(key: &str, reverse: bool) -> Vec<char> {
        let mut chars: Vec<char> = key.chars().collect();
        if reverse {
            chars.reverse();
        }
        chars
    }
}

impl<V: Clone> ExactTrie<V> {
    /// Inserts several keys that all map to clones of the same value.
    ///
    /// Equivalent to calling [`put`](Self::put) once per key in order. The
    /// per-key counterpart is [`put_all_values`](Self::put_all_values).
    pub fn put_all<K>(&mut self, keys: &[K], value: V, reverse: bool) -> &mut Self
    where
        K: AsRef<str>,
    {
        for key in keys {
            self.put(key, value.clone(), reverse);
        }
        self
    }
}

impl<V> Default for ExactTrie<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> fmt::Debug for ExactTrie<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExactTrie")
            .field("len", &self.len)
            .field("ignore_case", &self.config.ignore_case())
            .finish_non_exhaustive()
    }
}

impl<K: AsRef<str>, V> Extend<(K, V)> for ExactTrie<V> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.put(key, value, false);
        }
    }
}

impl<K: AsRef<str>, V> FromIterator<(K, V)> for ExactTrie<V> {
    /// Builds a trie with default configuration from forward-stored pairs.
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut trie = Self::new();
        trie.extend(iter);
        trie
    }
}
