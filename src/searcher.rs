//! Backtracking path search guided by the dictionary.
//!
//! From a start cell the searcher walks every simple path of adjacent cells
//! whose letters are a prefix of some dictionary word, recording a match each
//! time the letters so far spell a whole word. A branch is abandoned as soon
//! as the trie has no child for the next letter, which keeps the search small
//! even on large boards.
//!
//! The walk keeps an explicit stack instead of recursing, so long paths on big
//! grids cannot exhaust the call stack. Results come out in the same order a
//! depth-first recursion over the move set would produce.

use std::fmt;

use crate::dictionary::{Dictionary, TrieNode};
use crate::error::{GridError, SearchError};
use crate::grid::{Grid, Position};
use crate::moves::MoveSet;

/// A dictionary word and the path of cells that spells it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct WordMatch {
    pub word: String,
    pub path: Vec<Position>,
}

impl WordMatch {
    pub fn new(word: impl Into<String>, path: Vec<Position>) -> Self {
        Self {
            word: word.into(),
            path,
        }
    }

    pub fn start(&self) -> Option<&Position> {
        self.path.first()
    }
}

impl fmt::Display for WordMatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.word)?;
        for (i, position) in self.path.iter().enumerate() {
            let sep = if i == 0 { " " } else { " -> " };
            write!(f, "{sep}{position}")?;
        }
        Ok(())
    }
}

/// Counters for one start-cell search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Cells stepped onto because their letter continued a dictionary prefix.
    pub cells_entered: usize,
    pub matches: usize,
}

impl std::ops::AddAssign for SearchStats {
    fn add_assign(&mut self, other: Self) {
        self.cells_entered += other.cells_entered;
        self.matches += other.matches;
    }
}

struct Frame<'a> {
    node: &'a TrieNode,
    index: usize,
    next_move: usize,
}

/// Branch-local state of one walk. Everything pushed on the way down is
/// popped on the way back up.
struct Walk<'a> {
    stack: Vec<Frame<'a>>,
    path: Vec<Position>,
    word: String,
    visited: Vec<bool>,
}

impl Walk<'_> {
    fn leave(&mut self) {
        if let Some(frame) = self.stack.pop() {
            self.visited[frame.index] = false;
            self.path.pop();
            self.word.pop();
        }
    }
}

/// Finds dictionary words along simple paths from a given start cell.
#[derive(Debug, Clone, Copy)]
pub struct PathSearcher<'a> {
    pub(crate) grid: &'a Grid,
    pub(crate) dictionary: &'a Dictionary,
    pub(crate) moves: &'a MoveSet,
}

impl<'a> PathSearcher<'a> {
    /// Fails if the move set and the grid disagree on dimensionality.
    pub fn new(
        grid: &'a Grid,
        dictionary: &'a Dictionary,
        moves: &'a MoveSet,
    ) -> Result<Self, GridError> {
        if !moves.is_empty() && moves.ndim() != grid.ndim() {
            return Err(GridError::DimensionMismatch {
                expected: grid.ndim(),
                actual: moves.ndim(),
            });
        }
        Ok(Self {
            grid,
            dictionary,
            moves,
        })
    }

    pub fn grid(&self) -> &'a Grid {
        self.grid
    }

    pub fn dictionary(&self) -> &'a Dictionary {
        self.dictionary
    }

    pub fn moves(&self) -> &'a MoveSet {
        self.moves
    }

    /// Append every word reachable from `start` to `results`.
    ///
    /// Returns [`SearchError::InvalidStartPosition`] without searching if
    /// `start` is outside the grid.
    pub fn search_from(
        &self,
        start: &Position,
        results: &mut Vec<WordMatch>,
    ) -> Result<SearchStats, SearchError> {
        let Some(start_index) = self.grid.index_of(start) else {
            return Err(SearchError::InvalidStartPosition {
                position: start.clone(),
                shape: self.grid.shape().to_vec(),
            });
        };

        let mut stats = SearchStats::default();
        self.explore(start.clone(), start_index, results, &mut stats);
        tracing::trace!(
            start = %start,
            cells_entered = stats.cells_entered,
            matches = stats.matches,
            "searched start cell"
        );
        Ok(stats)
    }

    /// Like [`PathSearcher::search_from`], returning the matches.
    pub fn collect_from(&self, start: &Position) -> Result<Vec<WordMatch>, SearchError> {
        let mut results = Vec::new();
        self.search_from(start, &mut results)?;
        Ok(results)
    }

    fn explore(
        &self,
        start: Position,
        start_index: usize,
        results: &mut Vec<WordMatch>,
        stats: &mut SearchStats,
    ) {
        let root = self.dictionary.root();
        if root.child_for(self.grid.letter_at_index(start_index)).is_none() {
            return;
        }

        let mut walk = Walk {
            stack: Vec::new(),
            path: Vec::new(),
            word: String::new(),
            visited: vec![false; self.grid.len()],
        };
        self.enter(&mut walk, start, start_index, root, results, stats);

        let offsets = self.moves.offsets();
        while let Some(frame) = walk.stack.last_mut() {
            let Some(current) = walk.path.last() else {
                break;
            };
            let node = frame.node;

            let mut next = None;
            while frame.next_move < offsets.len() {
                let candidate = current.checked_offset_by(&offsets[frame.next_move]);
                frame.next_move += 1;
                // Overflowing, out of bounds, or already on this path.
                let Some(candidate) = candidate else {
                    continue;
                };
                match self.grid.index_of(&candidate) {
                    Some(index) if !walk.visited[index] => {
                        next = Some((candidate, index));
                        break;
                    }
                    _ => {}
                }
            }

            match next {
                Some((candidate, index)) => {
                    self.enter(&mut walk, candidate, index, node, results, stats);
                }
                None => walk.leave(),
            }
        }
    }

    /// Step onto `position` if its letter continues the prefix at `cursor`.
    fn enter(
        &self,
        walk: &mut Walk<'a>,
        position: Position,
        index: usize,
        cursor: &'a TrieNode,
        results: &mut Vec<WordMatch>,
        stats: &mut SearchStats,
    ) -> bool {
        let letter = self.grid.letter_at_index(index);
        let Some(node) = self.dictionary.child(cursor, letter) else {
            return false;
        };

        stats.cells_entered += 1;
        walk.word.push(letter);
        walk.path.push(position);
        walk.visited[index] = true;

        if node.is_word() {
            results.push(WordMatch::new(walk.word.clone(), walk.path.clone()));
            stats.matches += 1;
        }

        walk.stack.push(Frame {
            node,
            index,
            next_move: 0,
        });
        true
    }
}
