//! Dense N-dimensional letter grid.

use std::fmt;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use smallvec::SmallVec;

use crate::error::GridError;

/// Letters drawn for random boards.
pub const ALL_LETTERS: &str = "qwertyuiopasdfghjklzxcvbnm";

/// Most axes a grid may have. Moore neighbourhoods grow as 3^d.
pub const MAX_DIMENSIONS: usize = 8;

/// Largest size of a single axis; coordinates are `i32`.
pub const MAX_AXIS_SIZE: usize = i32::MAX as usize;

/// Number of cells in a grid of `shape`, after checking every axis.
fn cell_count(shape: &[usize]) -> Result<usize, GridError> {
    if shape.is_empty() {
        return Err(GridError::EmptyShape);
    }
    if shape.len() > MAX_DIMENSIONS {
        return Err(GridError::TooManyDimensions {
            ndim: shape.len(),
            max: MAX_DIMENSIONS,
        });
    }
    for (axis, &size) in shape.iter().enumerate() {
        if size == 0 {
            return Err(GridError::ZeroDimension { axis });
        }
        if size > MAX_AXIS_SIZE {
            return Err(GridError::DimensionTooLarge {
                axis,
                size,
                max: MAX_AXIS_SIZE,
            });
        }
    }
    shape
        .iter()
        .try_fold(1usize, |acc, &d| acc.checked_mul(d))
        .ok_or_else(|| GridError::TooManyCells {
            shape: shape.to_vec(),
        })
}

/// An integer coordinate tuple, one entry per grid axis.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position(SmallVec<[i32; 4]>);

impl Position {
    pub fn new(coords: impl IntoIterator<Item = i32>) -> Self {
        Self(coords.into_iter().collect())
    }

    pub fn coords(&self) -> &[i32] {
        &self.0
    }

    pub fn ndim(&self) -> usize {
        self.0.len()
    }

    /// `self + offset`, axis by axis, or `None` if any coordinate overflows.
    /// Both must have the same dimensionality.
    pub fn checked_offset_by(&self, offset: &Position) -> Option<Position> {
        debug_assert_eq!(self.ndim(), offset.ndim());
        self.0
            .iter()
            .zip(offset.0.iter())
            .map(|(a, b)| a.checked_add(*b))
            .collect::<Option<SmallVec<[i32; 4]>>>()
            .map(Self)
    }

    /// `self - other`, axis by axis, or `None` if any coordinate overflows.
    pub fn checked_delta(&self, other: &Position) -> Option<Position> {
        debug_assert_eq!(self.ndim(), other.ndim());
        self.0
            .iter()
            .zip(other.0.iter())
            .map(|(a, b)| a.checked_sub(*b))
            .collect::<Option<SmallVec<[i32; 4]>>>()
            .map(Self)
    }

    pub fn is_zero(&self) -> bool {
        self.0.iter().all(|&c| c == 0)
    }
}

impl<const N: usize> From<[i32; N]> for Position {
    fn from(coords: [i32; N]) -> Self {
        Self::new(coords)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (i, c) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{c}")?;
        }
        write!(f, ")")
    }
}

/// An immutable grid of single characters with a fixed shape.
///
/// Letters are stored row-major: the last axis varies fastest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    shape: Vec<usize>,
    strides: Vec<usize>,
    cells: Vec<char>,
}

impl Grid {
    pub fn new(shape: Vec<usize>, letters: Vec<char>) -> Result<Self, GridError> {
        let expected = cell_count(&shape)?;
        if letters.len() != expected {
            return Err(GridError::LetterCountMismatch {
                expected,
                actual: letters.len(),
            });
        }

        let mut strides = vec![1; shape.len()];
        for axis in (0..shape.len() - 1).rev() {
            strides[axis] = strides[axis + 1] * shape[axis + 1];
        }

        Ok(Self {
            shape,
            strides,
            cells: letters,
        })
    }

    /// Build a 2-D grid from equal-length rows.
    pub fn from_rows<S: AsRef<str>>(rows: &[S]) -> Result<Self, GridError> {
        let width = rows.first().map_or(0, |r| r.as_ref().chars().count());
        let mut letters = Vec::with_capacity(width * rows.len());
        for (row, text) in rows.iter().enumerate() {
            let before = letters.len();
            letters.extend(text.as_ref().chars());
            let actual = letters.len() - before;
            if actual != width {
                return Err(GridError::RaggedRows {
                    row,
                    expected: width,
                    actual,
                });
            }
        }
        Self::new(vec![rows.len(), width], letters)
    }

    /// Fill a grid of `shape` with letters drawn uniformly from [`ALL_LETTERS`].
    pub fn random<R: Rng + ?Sized>(shape: Vec<usize>, rng: &mut R) -> Result<Self, GridError> {
        let alphabet: Vec<char> = ALL_LETTERS.chars().collect();
        let count = cell_count(&shape)?;
        let mut letters = Vec::with_capacity(count);
        for _ in 0..count {
            if let Some(&letter) = alphabet.choose(rng) {
                letters.push(letter);
            }
        }
        Self::new(shape, letters)
    }

    /// A random grid that is the same for the same `shape` and `seed`.
    pub fn seeded(shape: Vec<usize>, seed: u64) -> Result<Self, GridError> {
        let mut rng = StdRng::seed_from_u64(seed);
        Self::random(shape, &mut rng)
    }

    pub fn shape(&self) -> &[usize] {
        &self.shape
    }

    pub fn ndim(&self) -> usize {
        self.shape.len()
    }

    /// Total number of cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always `false`; construction rejects empty grids.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn in_bounds(&self, position: &Position) -> bool {
        position.ndim() == self.ndim()
            && position
                .coords()
                .iter()
                .zip(&self.shape)
                .all(|(&c, &dim)| c >= 0 && (c as usize) < dim)
    }

    /// Row-major offset of `position` in the cell buffer.
    pub fn index_of(&self, position: &Position) -> Option<usize> {
        if !self.in_bounds(position) {
            return None;
        }
        Some(
            position
                .coords()
                .iter()
                .zip(&self.strides)
                .map(|(&c, &stride)| c as usize * stride)
                .sum(),
        )
    }

    /// The letter at `position`.
    ///
    /// # Panics
    ///
    /// Panics if `position` is out of bounds.
    pub fn at(&self, position: &Position) -> char {
        match self.index_of(position) {
            Some(index) => self.cells[index],
            None => panic!("position {position} out of bounds for grid shape {:?}", self.shape),
        }
    }

    pub fn get(&self, position: &Position) -> Option<char> {
        self.index_of(position).map(|index| self.cells[index])
    }

    /// Letter at a row-major cell index.
    pub(crate) fn letter_at_index(&self, index: usize) -> char {
        self.cells[index]
    }

    /// The position of a row-major cell index.
    pub fn position_of(&self, mut index: usize) -> Position {
        Position::new(self.strides.iter().map(|&stride| {
            let coord = index / stride;
            index %= stride;
            coord as i32
        }))
    }

    /// Every position in row-major order, each exactly once.
    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        (0..self.len()).map(|index| self.position_of(index))
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self.shape[self.ndim() - 1];
        let plane = if self.ndim() >= 2 {
            width * self.shape[self.ndim() - 2]
        } else {
            self.len()
        };
        for (i, row) in self.cells.chunks(width).enumerate() {
            if i > 0 && (i * width) % plane == 0 {
                writeln!(f)?;
            }
            let line: String = row.iter().collect();
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}
