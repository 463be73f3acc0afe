use pixelgrid::PixelGrid;

/// Generates a grid filled with a single intensity.
pub fn uniform_grid(width: usize, height: usize, value: u8) -> PixelGrid {
    assert!(width > 0 && height > 0, "grid dimensions must be positive");
    PixelGrid::from_fill(width, height, value).expect("uniform grid dimensions are valid")
}

/// Generates a horizontal ramp from black on the left edge to white on the right.
pub fn ramp_grid(width: usize, height: usize) -> PixelGrid {
    assert!(width > 1 && height > 0, "ramp needs at least two columns");

    let rows = (0..height)
        .map(|_| {
            (0..width)
                .map(|x| (x * 255 / (width - 1)) as u8)
                .collect()
        })
        .collect();
    PixelGrid::from_rows(rows).expect("ramp rows are rectangular")
}

/// Generates a simple high-contrast checkerboard grid.
pub fn checkerboard_grid(width: usize, height: usize, cell: usize) -> PixelGrid {
    assert!(width > 0 && height > 0, "grid dimensions must be positive");
    assert!(cell > 0, "cell size must be positive");

    let rows = (0..height)
        .map(|y| {
            (0..width)
                .map(|x| {
                    let sum = x / cell + y / cell;
                    if sum % 2 == 0 {
                        32u8
                    } else {
                        220u8
                    }
                })
                .collect()
        })
        .collect();
    PixelGrid::from_rows(rows).expect("checkerboard rows are rectangular")
}
