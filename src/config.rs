//! Search configuration passed explicitly into the solver.

use crate::error::GridError;
use crate::moves::{MoveSet, Neighborhood};

/// How the grid is walked.
///
/// Cells are never revisited within one path regardless of these settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SearchConfig {
    pub neighborhood: Neighborhood,
    /// Add the zero offset to the move set. It never yields a move, since the
    /// current cell is always already on the path.
    pub include_zero_offset: bool,
}

impl SearchConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_neighborhood(mut self, neighborhood: Neighborhood) -> Self {
        self.neighborhood = neighborhood;
        self
    }

    pub fn with_zero_offset(mut self, include: bool) -> Self {
        self.include_zero_offset = include;
        self
    }

    /// The move set for a grid of `ndim` dimensions.
    pub fn move_set(&self, ndim: usize) -> Result<MoveSet, GridError> {
        MoveSet::new(ndim, self.neighborhood, self.include_zero_offset)
    }
}
