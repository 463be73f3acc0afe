//! Edge contouring via 3×3 gradient magnitude.
//!
//! Convolves a Sobel (default) or Scharr kernel pair with replicate-clamped
//! borders, then writes back the per-pixel magnitude `sqrt(gx² + gy²)`
//! normalized by the kernel's positive-weight sum, so an ideal black-to-white
//! step maps to exactly 255. Values are rounded and clamped into [0, 255].
//!
//! Deterministic for a fixed input; dimensions are unchanged; a flat grid
//! maps to all zeros. With the `parallel` feature the row loop runs on the
//! rayon pool; the output is identical either way.
use crate::grid::PixelGrid;
use serde::Deserialize;

type Kernel3 = [[f32; 3]; 3];

const SOBEL_KERNEL_X: Kernel3 = [[-1.0, 0.0, 1.0], [-2.0, 0.0, 2.0], [-1.0, 0.0, 1.0]];
const SOBEL_KERNEL_Y: Kernel3 = [[-1.0, -2.0, -1.0], [0.0, 0.0, 0.0], [1.0, 2.0, 1.0]];

const SCHARR_KERNEL_X: Kernel3 = [[-3.0, 0.0, 3.0], [-10.0, 0.0, 10.0], [-3.0, 0.0, 3.0]];
const SCHARR_KERNEL_Y: Kernel3 = [[-3.0, -10.0, -3.0], [0.0, 0.0, 0.0], [3.0, 10.0, 3.0]];

/// Gradient kernel pair used by [`contour`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GradientKernel {
    #[default]
    Sobel,
    Scharr,
}

impl GradientKernel {
    fn kernels(self) -> (&'static Kernel3, &'static Kernel3) {
        match self {
            GradientKernel::Sobel => (&SOBEL_KERNEL_X, &SOBEL_KERNEL_Y),
            GradientKernel::Scharr => (&SCHARR_KERNEL_X, &SCHARR_KERNEL_Y),
        }
    }

    /// Sum of the positive taps per axis; maps an ideal 0→255 step to 255.
    fn positive_weight(self) -> f32 {
        match self {
            GradientKernel::Sobel => 4.0,
            GradientKernel::Scharr => 16.0,
        }
    }
}

/// Replace the grid with its gradient-magnitude edge map, in place.
pub fn contour(grid: &mut PixelGrid, kernel: GradientKernel) {
    let (w, h) = grid.dimensions();
    let mut out = vec![0u8; w * h];
    let (kernel_x, kernel_y) = kernel.kernels();
    let norm = kernel.positive_weight();
    fill_rows(grid, kernel_x, kernel_y, norm, &mut out);
    grid.replace(w, h, out);
}

#[cfg(not(feature = "parallel"))]
fn fill_rows(grid: &PixelGrid, kernel_x: &Kernel3, kernel_y: &Kernel3, norm: f32, out: &mut [u8]) {
    for (y, dst) in out.chunks_exact_mut(grid.width()).enumerate() {
        contour_row(grid, kernel_x, kernel_y, norm, y, dst);
    }
}

#[cfg(feature = "parallel")]
fn fill_rows(
    grid: &PixelGrid,
    kernel_x: &'static Kernel3,
    kernel_y: &'static Kernel3,
    norm: f32,
    out: &mut [u8],
) {
    use rayon::prelude::*;

    out.par_chunks_mut(grid.width())
        .enumerate()
        .for_each(|(y, dst)| contour_row(grid, kernel_x, kernel_y, norm, y, dst));
}

fn contour_row(
    grid: &PixelGrid,
    kernel_x: &Kernel3,
    kernel_y: &Kernel3,
    norm: f32,
    y: usize,
    dst: &mut [u8],
) {
    let (w, h) = grid.dimensions();
    let rows = [
        grid.row(y.saturating_sub(1)),
        grid.row(y),
        grid.row((y + 1).min(h - 1)),
    ];
    for (x, dst_px) in dst.iter_mut().enumerate() {
        let x_idx = [x.saturating_sub(1), x, (x + 1).min(w - 1)];

        let mut sum_x = 0.0f32;
        let mut sum_y = 0.0f32;
        for (ky, row) in rows.iter().enumerate() {
            let kx_taps = &kernel_x[ky];
            let ky_taps = &kernel_y[ky];
            for (tap, &sx) in x_idx.iter().enumerate() {
                let sample = row[sx] as f32;
                sum_x += sample * kx_taps[tap];
                sum_y += sample * ky_taps[tap];
            }
        }

        let magnitude = (sum_x * sum_x + sum_y * sum_y).sqrt() / norm;
        *dst_px = magnitude.round().clamp(0.0, 255.0) as u8;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vertical_step(width: usize, height: usize, step_at: usize) -> PixelGrid {
        let rows = (0..height)
            .map(|_| {
                (0..width)
                    .map(|x| if x < step_at { 0 } else { 255 })
                    .collect()
            })
            .collect();
        PixelGrid::from_rows(rows).expect("valid rows")
    }

    #[test]
    fn dimensions_are_preserved() {
        let mut grid = vertical_step(9, 5, 4);
        contour(&mut grid, GradientKernel::Sobel);
        assert_eq!(grid.dimensions(), (9, 5));
    }

    #[test]
    fn flat_grid_maps_to_zero() {
        let mut grid = PixelGrid::from_fill(8, 6, 173).expect("valid dimensions");
        contour(&mut grid, GradientKernel::Sobel);
        assert!(grid.as_slice().iter().all(|px| *px == 0));
    }

    #[test]
    fn ideal_step_saturates_at_the_boundary() {
        let mut grid = vertical_step(6, 4, 3);
        contour(&mut grid, GradientKernel::Sobel);
        for (y, row) in grid.rows().enumerate() {
            assert_eq!(
                row,
                &[0, 0, 255, 255, 0, 0],
                "unexpected edge response in row {y}"
            );
        }
    }

    #[test]
    fn scharr_agrees_on_the_ideal_step() {
        let mut grid = vertical_step(6, 4, 3);
        contour(&mut grid, GradientKernel::Scharr);
        for row in grid.rows() {
            assert_eq!(row, &[0, 0, 255, 255, 0, 0]);
        }
    }

    #[test]
    fn contour_is_deterministic() {
        let mut first = vertical_step(16, 9, 7);
        let mut second = vertical_step(16, 9, 7);
        contour(&mut first, GradientKernel::Sobel);
        contour(&mut second, GradientKernel::Sobel);
        assert_eq!(first, second);
    }

    #[test]
    fn single_row_grid_keeps_horizontal_response() {
        let mut grid = PixelGrid::from_rows(vec![vec![0, 0, 255, 255]]).expect("valid rows");
        contour(&mut grid, GradientKernel::Sobel);
        assert_eq!(grid.to_rows(), vec![vec![0, 255, 255, 0]]);
    }
}
