//! 90° clockwise rotation.
use crate::grid::PixelGrid;

/// Rotate the grid 90° clockwise in place.
///
/// Dimensions swap: a `w × h` grid becomes `h × w`, with
/// `rotated[x][h-1-y] == original[y][x]`. Four applications reproduce the
/// original grid exactly. O(w·h), no error paths.
pub fn rotate_cw(grid: &mut PixelGrid) {
    let (w, h) = grid.dimensions();
    let mut out = vec![0u8; w * h];
    for (y, src) in grid.rows().enumerate() {
        let dst_x = h - 1 - y;
        for (x, &px) in src.iter().enumerate() {
            out[x * h + dst_x] = px;
        }
    }
    grid.replace(h, w, out);
}
