//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `movegen.rs` - Special moves, pins and move order
//! - `make_unmake.rs` - Make/unmake move correctness
//! - `eval.rs` - Evaluation symmetry
//! - `search.rs` - Alpha-beta against plain minimax
//! - `proptest.rs` - Property-based tests

mod make_unmake;
mod movegen;
mod proptest;
