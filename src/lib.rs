//! # Boggle Solver
//!
//! Finds every dictionary word that can be spelled by a path of adjacent cells
//! on an N-dimensional letter grid, never using the same cell twice in one path.
//!
//! The dictionary is a prefix tree, so the search abandons a path as soon as
//! its letters stop being the start of any word. Every cell is tried as a start
//! cell, and searches from different cells run in parallel.

pub mod config;
pub mod dictionary;
pub mod error;
pub mod grid;
pub mod moves;
pub mod searcher;
pub mod solver;

pub use config::SearchConfig;
pub use dictionary::{Dictionary, TrieNode};
pub use error::{DictionaryError, GridError, SearchError};
pub use grid::{Grid, Position};
pub use moves::{MoveSet, Neighborhood};
pub use searcher::{PathSearcher, SearchStats, WordMatch};
pub use solver::{unique_words, BoardSolver, SolveOutcome};

/// Load the dictionary from the embedded word list
pub fn load_dictionary() -> Result<Dictionary, DictionaryError> {
    Dictionary::from_word_list(include_str!("../dictionary/words.txt"))
}
