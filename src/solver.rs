//! Whole-board solving.
//!
//! A board is solved by starting an independent path search at every cell.
//! Searches from different cells share nothing mutable, so they run in
//! parallel, each collecting into its own buffer; the buffers are joined in
//! row-major cell order so the output does not depend on scheduling.

use std::collections::HashSet;
use std::time::Instant;

use rayon::prelude::*;

use crate::config::SearchConfig;
use crate::dictionary::Dictionary;
use crate::error::{GridError, SearchError};
use crate::grid::{Grid, Position};
use crate::moves::MoveSet;
use crate::searcher::{PathSearcher, SearchStats, WordMatch};

/// Outcome of a sequential solve that may stop early.
#[derive(Debug, Clone, Default)]
pub struct SolveOutcome {
    pub matches: Vec<WordMatch>,
    pub cells_searched: usize,
    /// True if every cell was used as a start cell.
    pub complete: bool,
    pub stats: SearchStats,
}

/// Finds every dictionary word on a board.
#[derive(Debug, Clone)]
pub struct BoardSolver<'a> {
    grid: &'a Grid,
    dictionary: &'a Dictionary,
    moves: MoveSet,
}

impl<'a> BoardSolver<'a> {
    /// Fails if `config` cannot build a move set for the grid's dimensions.
    pub fn new(
        grid: &'a Grid,
        dictionary: &'a Dictionary,
        config: SearchConfig,
    ) -> Result<Self, GridError> {
        Ok(Self {
            grid,
            dictionary,
            moves: config.move_set(grid.ndim())?,
        })
    }

    /// A solver with explicit moves instead of a [`SearchConfig`].
    pub fn with_moves(
        grid: &'a Grid,
        dictionary: &'a Dictionary,
        moves: MoveSet,
    ) -> Result<Self, GridError> {
        PathSearcher::new(grid, dictionary, &moves)?;
        Ok(Self {
            grid,
            dictionary,
            moves,
        })
    }

    pub fn grid(&self) -> &'a Grid {
        self.grid
    }

    pub fn moves(&self) -> &MoveSet {
        &self.moves
    }

    fn searcher(&self) -> PathSearcher<'_> {
        PathSearcher {
            grid: self.grid,
            dictionary: self.dictionary,
            moves: &self.moves,
        }
    }

    /// Search from a single start cell.
    pub fn search_from(&self, start: &Position) -> Result<Vec<WordMatch>, SearchError> {
        self.searcher().collect_from(start)
    }

    /// Search from every cell in parallel.
    ///
    /// Matches are grouped by start cell in row-major order; within a start
    /// cell they appear in move-set order. The same word may appear many times.
    pub fn solve(&self) -> Vec<WordMatch> {
        let searcher = self.searcher();
        let starts: Vec<Position> = self.grid.positions().collect();

        let per_cell: Vec<(Vec<WordMatch>, SearchStats)> = starts
            .par_iter()
            .map(|start| {
                let mut found = Vec::new();
                let stats = search_cell(&searcher, start, &mut found);
                (found, stats)
            })
            .collect();

        let mut stats = SearchStats::default();
        let mut matches = Vec::with_capacity(per_cell.iter().map(|(m, _)| m.len()).sum());
        for (found, cell_stats) in per_cell {
            stats += cell_stats;
            matches.extend(found);
        }

        tracing::debug!(
            cells = starts.len(),
            cells_entered = stats.cells_entered,
            matches = matches.len(),
            "solved board"
        );
        matches
    }

    /// Search from every cell in row-major order on the calling thread.
    ///
    /// `progress` is called with `(done, total)` after each start cell. Once
    /// `deadline` has passed no further start cells are searched; a search
    /// already under way always finishes.
    pub fn solve_sequential<F>(&self, deadline: Option<Instant>, mut progress: F) -> SolveOutcome
    where
        F: FnMut(usize, usize),
    {
        let searcher = self.searcher();
        let total = self.grid.len();
        let mut outcome = SolveOutcome::default();

        for start in self.grid.positions() {
            if deadline.is_some_and(|d| Instant::now() >= d) {
                tracing::warn!(
                    searched = outcome.cells_searched,
                    total,
                    "deadline reached, stopping early"
                );
                break;
            }
            outcome.stats += search_cell(&searcher, &start, &mut outcome.matches);
            outcome.cells_searched += 1;
            progress(outcome.cells_searched, total);
        }

        outcome.complete = outcome.cells_searched == total;
        tracing::debug!(
            cells = outcome.cells_searched,
            complete = outcome.complete,
            matches = outcome.matches.len(),
            "solved board sequentially"
        );
        outcome
    }
}

/// Search one start cell taken from the searcher's own grid.
///
/// Such a cell is always in bounds, so the error arm is unreachable.
fn search_cell(
    searcher: &PathSearcher<'_>,
    start: &Position,
    results: &mut Vec<WordMatch>,
) -> SearchStats {
    match searcher.search_from(start, results) {
        Ok(stats) => stats,
        Err(err) => {
            debug_assert!(false, "grid position rejected by its own grid: {err}");
            tracing::error!(%err, "skipping start cell");
            SearchStats::default()
        }
    }
}

/// Keep only the first match of each distinct word, preserving order.
///
/// Searching never deduplicates on its own; this is a separate pass for
/// callers that want each word once.
pub fn unique_words(matches: Vec<WordMatch>) -> Vec<WordMatch> {
    let mut seen = HashSet::new();
    matches
        .into_iter()
        .filter(|m| seen.insert(m.word.clone()))
        .collect()
}
