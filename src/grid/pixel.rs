//! Owned single-channel 8-bit pixel grid in row-major layout.
//!
//! The grid is the unit of work for every filter in this crate: one request
//! owns one `PixelGrid` exclusively for its lifetime. Constructors validate
//! shape (non-empty, rectangular) so downstream operations can rely on
//! `width * height == data.len()` without re-checking.
use std::slice::{ChunksExact, ChunksExactMut};

/// Reasons a pixel source is rejected at construction time.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InvalidImageError {
    /// No rows, no columns, or a zero dimension.
    Empty,
    /// A row whose length deviates from the first row's.
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },
    /// Raw buffer length does not match `width * height`.
    LengthMismatch {
        width: usize,
        height: usize,
        len: usize,
    },
}

impl std::fmt::Display for InvalidImageError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InvalidImageError::Empty => {
                write!(f, "empty image: expected at least one row and one column")
            }
            InvalidImageError::RaggedRow {
                row,
                expected,
                found,
            } => write!(
                f,
                "ragged row {row}: expected {expected} samples, found {found}"
            ),
            InvalidImageError::LengthMismatch { width, height, len } => write!(
                f,
                "buffer of {len} samples does not match a {width}x{height} grid"
            ),
        }
    }
}

impl std::error::Error for InvalidImageError {}

/// Rectangular grid of intensity samples in [0, 255].
///
/// Stored row-major with `stride == width`. Fields are private so the
/// rectangularity invariant established at construction cannot be broken;
/// filters that change dimensions go through [`PixelGrid::replace`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PixelGrid {
    width: usize,
    height: usize,
    data: Vec<u8>,
}

impl PixelGrid {
    /// Build a grid from decoded rows of samples.
    ///
    /// Fails with [`InvalidImageError::Empty`] when there are no rows or the
    /// first row has no columns, and with [`InvalidImageError::RaggedRow`]
    /// when any later row deviates from the first row's length.
    pub fn from_rows(rows: Vec<Vec<u8>>) -> Result<Self, InvalidImageError> {
        let height = rows.len();
        if height == 0 {
            return Err(InvalidImageError::Empty);
        }
        let width = rows[0].len();
        if width == 0 {
            return Err(InvalidImageError::Empty);
        }
        let mut data = Vec::with_capacity(width * height);
        for (y, row) in rows.iter().enumerate() {
            if row.len() != width {
                return Err(InvalidImageError::RaggedRow {
                    row: y,
                    expected: width,
                    found: row.len(),
                });
            }
            data.extend_from_slice(row);
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Build a grid from a tightly packed row-major buffer.
    pub fn from_raw(width: usize, height: usize, data: Vec<u8>) -> Result<Self, InvalidImageError> {
        if width == 0 || height == 0 {
            return Err(InvalidImageError::Empty);
        }
        if data.len() != width * height {
            return Err(InvalidImageError::LengthMismatch {
                width,
                height,
                len: data.len(),
            });
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Build a grid with every sample set to `value`.
    pub fn from_fill(width: usize, height: usize, value: u8) -> Result<Self, InvalidImageError> {
        if width == 0 || height == 0 {
            return Err(InvalidImageError::Empty);
        }
        Ok(Self {
            width,
            height,
            data: vec![value; width * height],
        })
    }

    /// Grid width in pixels.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Grid height in pixels.
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// `(width, height)` pair.
    #[inline]
    pub fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    #[inline]
    fn idx(&self, x: usize, y: usize) -> usize {
        y * self.width + x
    }

    /// Sample at `(x, y)`. Panics when out of bounds.
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> u8 {
        self.data[self.idx(x, y)]
    }

    /// Overwrite the sample at `(x, y)`. Panics when out of bounds.
    #[inline]
    pub fn set(&mut self, x: usize, y: usize, value: u8) {
        let i = self.idx(x, y);
        self.data[i] = value;
    }

    /// Borrow row `y`.
    #[inline]
    pub fn row(&self, y: usize) -> &[u8] {
        let start = y * self.width;
        &self.data[start..start + self.width]
    }

    /// Mutably borrow row `y`.
    #[inline]
    pub fn row_mut(&mut self, y: usize) -> &mut [u8] {
        let start = y * self.width;
        let end = start + self.width;
        &mut self.data[start..end]
    }

    /// Iterate over rows top to bottom.
    pub fn rows(&self) -> ChunksExact<'_, u8> {
        self.data.chunks_exact(self.width)
    }

    /// Iterate over mutable rows top to bottom.
    pub fn rows_mut(&mut self) -> ChunksExactMut<'_, u8> {
        self.data.chunks_exact_mut(self.width)
    }

    /// The contiguous row-major backing buffer.
    #[inline]
    pub fn as_slice(&self) -> &[u8] {
        &self.data
    }

    /// Copy the grid out as rows of samples (collaborator re-encoding shape).
    pub fn to_rows(&self) -> Vec<Vec<u8>> {
        self.rows().map(|row| row.to_vec()).collect()
    }

    /// Swap in a rebuilt buffer, possibly with new dimensions.
    ///
    /// Callers must pass a non-empty buffer of exactly `width * height`
    /// samples; the dimension-changing filters (rotate, concat) build such
    /// buffers internally.
    pub(crate) fn replace(&mut self, width: usize, height: usize, data: Vec<u8>) {
        debug_assert!(width > 0 && height > 0, "replacement grid must be non-empty");
        debug_assert_eq!(data.len(), width * height, "replacement buffer mis-sized");
        self.width = width;
        self.height = height;
        self.data = data;
    }
}
