#![doc = include_str!("../README.md")]

// Public modules (stable-ish surface)
pub mod config;
pub mod grid;
pub mod ops;

// --- High-level re-exports -------------------------------------------------

// Core buffer type + its validation error.
pub use crate::grid::{InvalidImageError, PixelGrid};

// One-shot dispatch: caption -> operation -> report.
pub use crate::ops::{apply, user_retry_message, ApplyError, FilterParams, OpKind, OpReport};

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
///
/// ```
/// use pixelgrid::prelude::*;
/// use rand::rngs::StdRng;
/// use rand::SeedableRng;
///
/// # fn main() {
/// let mut img = PixelGrid::from_fill(4, 2, 160).unwrap();
/// let mut rng = StdRng::seed_from_u64(1);
///
/// let report = apply(OpKind::Rotate, &mut img, None, &FilterParams::default(), &mut rng)
///     .unwrap();
/// println!(
///     "op={} size={}x{} elapsed_ms={:.3}",
///     report.op, report.width, report.height, report.elapsed_ms
/// );
/// # }
/// ```
pub mod prelude {
    pub use crate::grid::PixelGrid;
    pub use crate::ops::{apply, FilterParams, OpKind, OpReport};
}
