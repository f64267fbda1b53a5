// Copyright (c) 2025 Exact Trie Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Configuration for the exact trie.

use serde::{Deserialize, Serialize};

/// Configuration options for [`ExactTrie`](crate::ExactTrie).
///
/// The configuration is captured at construction time and never mutated
/// afterwards; two tries built with different settings index the same keys
/// differently, so the flag cannot be flipped on a populated instance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExactTrieConfig {
    /// Whether keys and lookup inputs are folded to lowercase before use
    ignore_case: bool,
}

impl ExactTrieConfig {
    /// Create a new default configuration.
    ///
    /// Default values:
    /// - ignore_case: true
    pub fn new() -> Self {
        Self { ignore_case: true }
    }

    /// Set whether keys are folded to lowercase before storage and lookup.
    ///
    /// When enabled (the default), `put("Hello", ..)` and `get("HELLO")`
    /// address the same entry. When disabled, keys are byte-for-byte exact.
    pub fn with_ignore_case(mut self, value: bool) -> Self {
        self.ignore_case = value;
        self
    }

    /// Get whether case folding is enabled.
    pub fn ignore_case(&self) -> bool {
        self.ignore_case
    }
}

impl Default for ExactTrieConfig {
    fn default() -> Self {
        Self::new()
    }
}
