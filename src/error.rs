// Copyright (c) 2025 Exact Trie Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Error types for exact trie operations.

/// Errors that can occur in exact trie operations.
///
/// Absence of a key is never an error; lookups report it as `None`. The only
/// failure class is caller misuse of the batch insertion API.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ExactTrieError {
    /// Batch insertion was given differing numbers of keys and values.
    #[error("batch insert received {keys} keys but {values} values")]
    LengthMismatch {
        /// Number of keys supplied.
        keys: usize,
        /// Number of values supplied.
        values: usize,
    },
}

/// Result type for exact trie operations.
pub type ExactTrieResult<T> = std::result::Result<T, ExactTrieError>;
