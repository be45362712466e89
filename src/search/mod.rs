//! Search for the Omok decision engine
//!
//! Contains:
//! - Candidate generation with spatial pruning and move ordering
//! - Fixed-depth minimax with alpha-beta pruning

pub mod alphabeta;
pub mod candidates;

pub use alphabeta::{SearchResult, Searcher};
pub use candidates::{generate_candidates, order_candidates, CANDIDATE_RADIUS, MAX_CANDIDATES};
