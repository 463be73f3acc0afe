//! Filter operations over a [`PixelGrid`] and the dispatch glue around them.
//!
//! Each transform lives in its own submodule and operates in place:
//!
//! - [`rotate_cw`]: 90° clockwise rotation (dimensions swap).
//! - [`concat`]: horizontal/vertical concatenation with a second grid.
//! - [`segment`]: binary thresholding into {0, 255}.
//! - [`salt_and_pepper`]: random corruption to the two intensity extremes.
//! - [`contour`]: gradient-magnitude edge map.
//!
//! [`OpKind`] is the closed set of operations a collaborator can request;
//! free-text captions map into it through a fixed alias table rather than
//! string-keyed dispatch. [`apply`] runs exactly one operation per request,
//! times it, and returns a serializable [`OpReport`].

mod concat;
mod contour;
mod noise;
mod rotate;
mod segment;

pub use concat::{concat, ConcatDirection, DimensionMismatchError};
pub use contour::{contour, GradientKernel};
pub use noise::{salt_and_pepper, NoiseOptions};
pub use rotate::rotate_cw;
pub use segment::{segment, DEFAULT_THRESHOLD};

use crate::grid::PixelGrid;
use log::debug;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::time::Instant;

/// Closed set of operations a caption can select.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum OpKind {
    Rotate,
    Concat,
    Segment,
    SaltAndPepper,
    Contour,
}

/// Caption aliases accepted by [`OpKind::from_caption`], compared after
/// trimming and ASCII lowercasing.
const CAPTION_TABLE: &[(&str, OpKind)] = &[
    ("rotate", OpKind::Rotate),
    ("concat", OpKind::Concat),
    ("segment", OpKind::Segment),
    ("salt and pepper", OpKind::SaltAndPepper),
    ("salt_n_pepper", OpKind::SaltAndPepper),
    ("salt-and-pepper", OpKind::SaltAndPepper),
    ("contour", OpKind::Contour),
];

impl OpKind {
    /// Map a free-text caption to an operation.
    ///
    /// Returns `None` for anything outside the alias table; the caller
    /// decides how to answer unsupported requests.
    pub fn from_caption(caption: &str) -> Option<Self> {
        let normalized = caption.trim().to_ascii_lowercase();
        CAPTION_TABLE
            .iter()
            .find(|(alias, _)| *alias == normalized)
            .map(|(_, kind)| *kind)
    }

    /// Canonical name used in reports and logs.
    pub fn as_str(self) -> &'static str {
        match self {
            OpKind::Rotate => "rotate",
            OpKind::Concat => "concat",
            OpKind::Segment => "segment",
            OpKind::SaltAndPepper => "salt-and-pepper",
            OpKind::Contour => "contour",
        }
    }

    /// Whether the operation consumes a second grid.
    pub fn needs_second_image(self) -> bool {
        matches!(self, OpKind::Concat)
    }
}

impl std::fmt::Display for OpKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Knobs shared by the dispatch entry point.
#[derive(Clone, Copy, Debug, Deserialize)]
#[serde(default)]
pub struct FilterParams {
    /// Segmentation threshold; samples below it become 0.
    pub threshold: u8,
    /// Salt-and-pepper densities.
    pub noise: NoiseOptions,
    /// Contour kernel pair.
    pub kernel: GradientKernel,
}

impl Default for FilterParams {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            noise: NoiseOptions::default(),
            kernel: GradientKernel::default(),
        }
    }
}

/// Failures surfaced by [`apply`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ApplyError {
    /// The requested operation needs a second grid and none was supplied.
    MissingSecondImage,
    /// Concatenation rejected the grid pair.
    Dimensions(DimensionMismatchError),
}

impl std::fmt::Display for ApplyError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApplyError::MissingSecondImage => {
                write!(f, "concat needs a second image and none was supplied")
            }
            ApplyError::Dimensions(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for ApplyError {}

impl From<DimensionMismatchError> for ApplyError {
    fn from(err: DimensionMismatchError) -> Self {
        ApplyError::Dimensions(err)
    }
}

/// Outcome of a single dispatched operation.
#[derive(Clone, Debug, Serialize)]
pub struct OpReport {
    pub op: OpKind,
    pub width: usize,
    pub height: usize,
    pub elapsed_ms: f64,
}

/// Run exactly one operation against `grid`.
///
/// `second` is consulted only by [`OpKind::Concat`] (horizontal join, the
/// caption-level default) and is never mutated. The RNG is consumed only by
/// [`OpKind::SaltAndPepper`]; a seeded generator makes the whole dispatch
/// reproducible.
pub fn apply<R: Rng + ?Sized>(
    kind: OpKind,
    grid: &mut PixelGrid,
    second: Option<&PixelGrid>,
    params: &FilterParams,
    rng: &mut R,
) -> Result<OpReport, ApplyError> {
    let start = Instant::now();
    match kind {
        OpKind::Rotate => rotate_cw(grid),
        OpKind::Concat => {
            let other = second.ok_or(ApplyError::MissingSecondImage)?;
            concat(grid, other, ConcatDirection::Horizontal)?;
        }
        OpKind::Segment => segment(grid, params.threshold),
        OpKind::SaltAndPepper => salt_and_pepper(grid, &params.noise, rng),
        OpKind::Contour => contour(grid, params.kernel),
    }
    let elapsed_ms = start.elapsed().as_secs_f64() * 1000.0;
    debug!(
        "apply: op={} w={} h={} elapsed_ms={:.3}",
        kind.as_str(),
        grid.width(),
        grid.height(),
        elapsed_ms
    );
    Ok(OpReport {
        op: kind,
        width: grid.width(),
        height: grid.height(),
        elapsed_ms,
    })
}

/// Boundary message for the requester when any stage of the pipeline fails.
///
/// Collaborators relay failures to the chat user as a retry prompt instead of
/// crashing the serving loop; the wording always carries an explicit retry
/// cue. Accepts anything printable so both typed errors and the string
/// errors of the io layer can be relayed.
pub fn user_retry_message<E: std::fmt::Display + ?Sized>(err: &E) -> String {
    format!("Something went wrong ({err}), please try again.")
}
