//! Random salt-and-pepper corruption.
use crate::grid::PixelGrid;
use log::debug;
use rand::Rng;
use serde::Deserialize;

/// Fractions of pixels flipped to the two intensity extremes.
///
/// Defaults sit well above the contract floors (at least 0.15% salt, at
/// least 0.15% pepper, at least 70% of pixels untouched).
#[derive(Clone, Copy, Debug, Deserialize)]
#[serde(default)]
pub struct NoiseOptions {
    /// Probability that a pixel is set to 255.
    pub salt_fraction: f64,
    /// Probability that a pixel is set to 0.
    pub pepper_fraction: f64,
}

impl Default for NoiseOptions {
    fn default() -> Self {
        Self {
            salt_fraction: 0.05,
            pepper_fraction: 0.05,
        }
    }
}

/// Corrupt a random minority of pixels to 0 or 255, in place.
///
/// Every pixel draws one uniform `u ∈ [0, 1)`: `u < salt` sets the pixel to
/// 255, `u ≥ 1 - pepper` sets it to 0, anything else leaves the sample
/// byte-identical. Fractions are clamped so the two bands cannot overlap.
/// Dimensions are unchanged. The generator is caller-supplied, so a fixed
/// seed reproduces the exact corruption pattern.
pub fn salt_and_pepper<R: Rng + ?Sized>(grid: &mut PixelGrid, options: &NoiseOptions, rng: &mut R) {
    let salt = options.salt_fraction.clamp(0.0, 1.0);
    let pepper = options.pepper_fraction.clamp(0.0, 1.0 - salt);
    let mut salted = 0usize;
    let mut peppered = 0usize;
    for row in grid.rows_mut() {
        for px in row {
            let u: f64 = rng.gen();
            if u < salt {
                *px = 255;
                salted += 1;
            } else if u >= 1.0 - pepper {
                *px = 0;
                peppered += 1;
            }
        }
    }
    debug!(
        "salt_and_pepper: salted={salted} peppered={peppered} total={}",
        grid.width() * grid.height()
    );
}
