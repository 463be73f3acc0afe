//! Mirror-style concatenation of two grids.
use crate::grid::PixelGrid;
use serde::Deserialize;

/// Join axis for [`concat`]. Horizontal is the caption-level default.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConcatDirection {
    #[default]
    Horizontal,
    Vertical,
}

/// Incompatible dimensions for the requested join.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DimensionMismatchError {
    /// Horizontal join with differing heights.
    HeightMismatch { left: usize, right: usize },
    /// Vertical join with differing widths.
    WidthMismatch { top: usize, bottom: usize },
}

impl std::fmt::Display for DimensionMismatchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DimensionMismatchError::HeightMismatch { left, right } => write!(
                f,
                "height mismatch for horizontal concat: left grid has {left} rows, right has {right}"
            ),
            DimensionMismatchError::WidthMismatch { top, bottom } => write!(
                f,
                "width mismatch for vertical concat: top grid has {top} columns, bottom has {bottom}"
            ),
        }
    }
}

impl std::error::Error for DimensionMismatchError {}

/// Append `other` to `grid` along `direction`, growing `grid` in place.
///
/// Horizontal joins require equal heights and produce a grid of width
/// `grid.width + other.width`; vertical joins require equal widths and sum
/// the heights. `other` is never mutated, and `grid` is left untouched when
/// the dimensions do not line up.
pub fn concat(
    grid: &mut PixelGrid,
    other: &PixelGrid,
    direction: ConcatDirection,
) -> Result<(), DimensionMismatchError> {
    match direction {
        ConcatDirection::Horizontal => concat_horizontal(grid, other),
        ConcatDirection::Vertical => concat_vertical(grid, other),
    }
}

fn concat_horizontal(grid: &mut PixelGrid, other: &PixelGrid) -> Result<(), DimensionMismatchError> {
    if grid.height() != other.height() {
        return Err(DimensionMismatchError::HeightMismatch {
            left: grid.height(),
            right: other.height(),
        });
    }
    let width = grid.width() + other.width();
    let height = grid.height();
    let mut out = Vec::with_capacity(width * height);
    for (left, right) in grid.rows().zip(other.rows()) {
        out.extend_from_slice(left);
        out.extend_from_slice(right);
    }
    grid.replace(width, height, out);
    Ok(())
}

fn concat_vertical(grid: &mut PixelGrid, other: &PixelGrid) -> Result<(), DimensionMismatchError> {
    if grid.width() != other.width() {
        return Err(DimensionMismatchError::WidthMismatch {
            top: grid.width(),
            bottom: other.width(),
        });
    }
    let width = grid.width();
    let height = grid.height() + other.height();
    let mut out = Vec::with_capacity(width * height);
    out.extend_from_slice(grid.as_slice());
    out.extend_from_slice(other.as_slice());
    grid.replace(width, height, out);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ramp_grid(width: usize, height: usize) -> PixelGrid {
        let rows = (0..height)
            .map(|y| (0..width).map(|x| (y * width + x) as u8).collect())
            .collect();
        PixelGrid::from_rows(rows).expect("valid rows")
    }

    #[test]
    fn horizontal_concat_sums_widths() {
        let mut left = ramp_grid(3, 2);
        let right = ramp_grid(5, 2);
        concat(&mut left, &right, ConcatDirection::Horizontal).expect("equal heights");
        assert_eq!(left.dimensions(), (8, 2));
    }

    #[test]
    fn self_concat_mirrors_halves() {
        let mut grid = ramp_grid(4, 3);
        let copy = grid.clone();
        concat(&mut grid, &copy, ConcatDirection::Horizontal).expect("equal heights");

        assert_eq!(grid.dimensions(), (8, 3));
        for (y, row) in grid.rows().enumerate() {
            let (left, right) = row.split_at(4);
            assert_eq!(left, right, "row {y} halves differ");
            assert_eq!(left, copy.row(y), "row {y} does not match the source");
        }
    }

    #[test]
    fn other_grid_is_untouched() {
        let mut left = ramp_grid(2, 2);
        let right = ramp_grid(3, 2);
        let right_before = right.clone();
        concat(&mut left, &right, ConcatDirection::Horizontal).expect("equal heights");
        assert_eq!(right, right_before);
    }

    #[test]
    fn height_mismatch_is_rejected() {
        let mut left = ramp_grid(2, 3);
        let untouched = left.clone();
        let right = ramp_grid(2, 4);
        let err = concat(&mut left, &right, ConcatDirection::Horizontal).unwrap_err();
        assert_eq!(err, DimensionMismatchError::HeightMismatch { left: 3, right: 4 });
        assert_eq!(left, untouched, "failed concat must not mutate the target");
    }

    #[test]
    fn vertical_concat_sums_heights() {
        let mut top = ramp_grid(3, 2);
        let bottom = ramp_grid(3, 4);
        concat(&mut top, &bottom, ConcatDirection::Vertical).expect("equal widths");
        assert_eq!(top.dimensions(), (3, 6));
        assert_eq!(top.row(2), bottom.row(0));
    }

    #[test]
    fn width_mismatch_is_rejected() {
        let mut top = ramp_grid(3, 2);
        let bottom = ramp_grid(4, 2);
        let err = concat(&mut top, &bottom, ConcatDirection::Vertical).unwrap_err();
        assert_eq!(err, DimensionMismatchError::WidthMismatch { top: 3, bottom: 4 });
    }

    #[test]
    fn mismatch_messages_describe_the_axis() {
        let err = DimensionMismatchError::HeightMismatch { left: 3, right: 4 };
        assert!(err.to_string().contains("height mismatch"));
        let err = DimensionMismatchError::WidthMismatch { top: 5, bottom: 6 };
        assert!(err.to_string().contains("width mismatch"));
    }
}
