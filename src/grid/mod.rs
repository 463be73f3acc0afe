//! Grid representation and the file/JSON glue around it.
//!
//! [`PixelGrid`] is the single data structure every filter operates on; the
//! transforms themselves live in `crate::ops`. [`io`] holds the image-crate
//! bridging used by the demo binaries and by collaborators that move grids
//! across a storage boundary.

pub mod io;
pub mod pixel;

pub use pixel::{InvalidImageError, PixelGrid};
