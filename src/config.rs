use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Upper bound on `width * height` for a single run.
pub const MAX_CELLS: usize = 1 << 24;

/// Neighbor resolution at the first and last column of a row.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum BoundaryPolicy {
    /// Indices wrap modulo the width (ring topology).
    Wrapped,
    /// Indices saturate at 0 and w-1, so an edge cell sees itself as its
    /// missing neighbor.
    #[default]
    Clamped,
}

impl BoundaryPolicy {
    pub fn is_wrapped(self) -> bool {
        self == BoundaryPolicy::Wrapped
    }
}

/// All tunable parameters of one run. Exposed as CLI flags and JSON fields.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Params {
    pub width: usize,
    pub height: usize,
    /// Leading rows dropped from the rendered image.
    pub offset: i64,
    pub boundary: BoundaryPolicy,
}

impl Default for Params {
    fn default() -> Self {
        Self {
            width: 2 << 9,
            height: 2 << 10,
            offset: 0,
            boundary: BoundaryPolicy::Clamped,
        }
    }
}

impl Params {
    /// Reject empty grids and grids larger than [`MAX_CELLS`].
    pub fn validate(&self) -> Result<()> {
        let cells = self.width.checked_mul(self.height);
        match cells {
            Some(n) if (1..=MAX_CELLS).contains(&n) => Ok(()),
            _ => Err(Error::InvalidSize {
                width: self.width,
                height: self.height,
            }),
        }
    }
}
