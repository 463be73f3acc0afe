//! Binary threshold segmentation.
use crate::grid::PixelGrid;

/// Published threshold: samples below it become 0, samples at or above become 255.
pub const DEFAULT_THRESHOLD: u8 = 100;

/// Collapse every sample to 0 or 255 against `threshold`, in place.
///
/// Samples strictly below `threshold` become 0, everything else 255.
/// Dimensions are unchanged; deterministic, no error paths.
pub fn segment(grid: &mut PixelGrid, threshold: u8) {
    for row in grid.rows_mut() {
        for px in row {
            *px = if *px < threshold { 0 } else { 255 };
        }
    }
}
