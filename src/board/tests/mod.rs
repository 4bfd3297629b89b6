//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `movegen.rs` - Per-piece pseudo-legal destinations and castling
//! - `state.rs` - Placement, relocation, removal and snapshots
//! - `rules.rs` - Move validation, capture, check resolution
//! - `eval.rs` - Static evaluation
//! - `search.rs` - Minimax, root selection and random moves
//! - `proptest.rs` - Property-based tests

mod eval;
mod proptest;
mod state;
