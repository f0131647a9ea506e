//! Relative offsets that define which cells are adjacent.

use crate::error::GridError;
use crate::grid::{Position, MAX_DIMENSIONS};

/// Which cells count as neighbours.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Neighborhood {
    /// Every combination of -1, 0 and +1 per axis except all zeros
    /// (orthogonal and diagonal, 8 cells in 2-D).
    #[default]
    Moore,
    /// One step along exactly one axis (4 cells in 2-D).
    VonNeumann,
}

/// The ordered list of candidate offsets tried from every cell.
///
/// Order is deterministic and fixes the order in which results are found.
/// A zero offset, if present, never produces a move: the current cell is
/// always on the path already and the no-revisit rule rejects it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveSet {
    ndim: usize,
    offsets: Vec<Position>,
}

impl MoveSet {
    /// Build the offsets of `neighborhood` in `ndim` dimensions.
    ///
    /// The zero offset comes first when `include_zero` is set. Moore offsets
    /// follow odometer order over -1, 0, +1 with the last axis fastest; Von
    /// Neumann offsets go axis by axis, -1 before +1.
    ///
    /// Fails with [`GridError::TooManyDimensions`] above [`MAX_DIMENSIONS`].
    pub fn new(
        ndim: usize,
        neighborhood: Neighborhood,
        include_zero: bool,
    ) -> Result<Self, GridError> {
        if ndim > MAX_DIMENSIONS {
            return Err(GridError::TooManyDimensions {
                ndim,
                max: MAX_DIMENSIONS,
            });
        }
        Ok(Self::build(ndim, neighborhood, include_zero))
    }

    fn build(ndim: usize, neighborhood: Neighborhood, include_zero: bool) -> Self {
        let mut offsets = Vec::new();
        if include_zero {
            offsets.push(Position::new(std::iter::repeat(0).take(ndim)));
        }
        match neighborhood {
            Neighborhood::Moore => {
                let total = 3usize.pow(ndim as u32);
                for n in 0..total {
                    let mut digits = vec![0i32; ndim];
                    let mut rest = n;
                    for axis in (0..ndim).rev() {
                        digits[axis] = (rest % 3) as i32 - 1;
                        rest /= 3;
                    }
                    let offset = Position::new(digits);
                    if !offset.is_zero() {
                        offsets.push(offset);
                    }
                }
            }
            Neighborhood::VonNeumann => {
                for axis in 0..ndim {
                    for step in [-1, 1] {
                        offsets.push(Position::new(
                            (0..ndim).map(|a| if a == axis { step } else { 0 }),
                        ));
                    }
                }
            }
        }
        Self { ndim, offsets }
    }

    /// The 8 orthogonal and diagonal neighbours of a 2-D board.
    pub fn king_moves() -> Self {
        Self::build(2, Neighborhood::Moore, false)
    }

    /// A move set from explicit offsets. Repeated offsets are dropped.
    pub fn from_offsets(offsets: Vec<Position>) -> Result<Self, GridError> {
        let ndim = offsets.first().map_or(0, Position::ndim);
        let mut unique: Vec<Position> = Vec::with_capacity(offsets.len());
        for offset in offsets {
            if offset.ndim() != ndim {
                return Err(GridError::DimensionMismatch {
                    expected: ndim,
                    actual: offset.ndim(),
                });
            }
            if !unique.contains(&offset) {
                unique.push(offset);
            }
        }
        Ok(Self {
            ndim,
            offsets: unique,
        })
    }

    pub fn offsets(&self) -> &[Position] {
        &self.offsets
    }

    pub fn len(&self) -> usize {
        self.offsets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.offsets.is_empty()
    }

    pub fn ndim(&self) -> usize {
        self.ndim
    }

    pub fn includes_zero(&self) -> bool {
        self.offsets.iter().any(Position::is_zero)
    }

    /// True if one step of this move set leads from `from` to `to`.
    pub fn is_adjacent(&self, from: &Position, to: &Position) -> bool {
        from.ndim() == self.ndim
            && to.ndim() == self.ndim
            && to
                .checked_delta(from)
                .is_some_and(|delta| self.offsets.contains(&delta))
    }

    /// Every `position + offset`, in move set order, without bounds checks.
    /// Offsets whose sum overflows a coordinate are skipped.
    pub fn apply<'a>(&'a self, position: &'a Position) -> impl Iterator<Item = Position> + 'a {
        self.offsets
            .iter()
            .filter_map(move |offset| position.checked_offset_by(offset))
    }
}
