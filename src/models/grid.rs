//! Grid geometry for poster layouts.

use serde::{Deserialize, Serialize};

/// Column/row dimensions of a poster grid.
///
/// Both dimensions are at least 1; the degenerate zero-item layout is the
/// 1x1 grid so downstream geometry never divides by zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridSpec {
    /// Number of columns.
    pub cols: usize,
    /// Number of rows.
    pub rows: usize,
}

impl GridSpec {
    /// Total cell capacity of the grid.
    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.cols * self.rows
    }

    /// Width-to-height ratio of the grid.
    #[must_use]
    pub fn aspect_ratio(&self) -> f64 {
        self.cols as f64 / self.rows as f64
    }
}
