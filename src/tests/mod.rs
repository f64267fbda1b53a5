//! Crate-internal test modules.
//!
//! Deterministic unit tests live next to the code they cover; this tree
//! holds the property-based tests, which exercise the whole container
//! through randomly generated key sets and compare it against a simple
//! reference model.
