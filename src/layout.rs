//! Grid layout and font-size heuristics for the poster canvas.
//!
//! Pure arithmetic, no I/O. `compute_grid` packs `n` items into the grid
//! whose shape best approximates the 16:9 canvas; `compute_font_size` scales
//! words down by character count so long words stay inside fixed-size cells
//! without text measurement.

use crate::constants::{BASE_FONT_BUDGET, BASE_FONT_CAP, TARGET_ASPECT};
use crate::models::GridSpec;

/// Default floor factor for [`compute_font_size`].
pub const MIN_SIZE_FACTOR: f64 = 0.6;

/// Computes the grid shape for `item_count` cells.
///
/// Candidate column counts run from 1 to `ceil(sqrt(n * 16/9))`; each
/// candidate's row count is `ceil(n / cols)`. A candidate replaces the
/// current best when its `cols/rows` ratio is strictly closer to 16:9,
/// otherwise when its total cell count is smaller — checked in that order.
/// The capacity of the result always covers `item_count`.
///
/// `item_count == 0` returns the 1x1 sentinel grid.
#[must_use]
pub fn compute_grid(item_count: usize) -> GridSpec {
    if item_count == 0 {
        return GridSpec { cols: 1, rows: 1 };
    }

    let mut best_cols = 1;
    let mut best_rows = item_count;

    let limit = (item_count as f64 * TARGET_ASPECT).sqrt().ceil() as usize;
    for cols in 1..=limit {
        let rows = item_count.div_ceil(cols);
        if cols * rows >= item_count {
            let ratio = cols as f64 / rows as f64;
            let best_ratio = best_cols as f64 / best_rows as f64;
            if (ratio - TARGET_ASPECT).abs() < (best_ratio - TARGET_ASPECT).abs() {
                best_cols = cols;
                best_rows = rows;
            } else if cols * rows < best_cols * best_rows {
                best_cols = cols;
                best_rows = rows;
            }
        }
    }

    GridSpec { cols: best_cols, rows: best_rows }
}

/// Scales a base font size down by word length.
///
/// Tiers: up to 5 chars keep the base size, then 0.9x, 0.8x, 0.7x at 8, 12,
/// and 16 chars; anything longer floors at `max(min_size_factor, 0.6)` of
/// the base.
#[must_use]
pub fn compute_font_size(word_length: usize, base_size: f64, min_size_factor: f64) -> f64 {
    let min_size = base_size * min_size_factor;
    match word_length {
        0..=5 => base_size,
        6..=8 => base_size * 0.9,
        9..=12 => base_size * 0.8,
        13..=16 => base_size * 0.7,
        _ => min_size.max(base_size * 0.6),
    }
}

/// Shared base font size for a poster with the given column count.
///
/// Tuned for the 1920px-wide canvas: narrower columns get smaller text,
/// capped at 36px.
#[must_use]
pub fn base_font_size(cols: usize) -> f64 {
    (BASE_FONT_BUDGET / cols as f64).min(BASE_FONT_CAP)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_items_yields_sentinel_grid() {
        assert_eq!(compute_grid(0), GridSpec { cols: 1, rows: 1 });
    }

    #[test]
    fn grid_capacity_covers_all_items() {
        for n in 1..=200 {
            let grid = compute_grid(n);
            assert!(grid.cols >= 1 && grid.rows >= 1);
            assert!(
                grid.capacity() >= n,
                "grid {}x{} cannot hold {n} items",
                grid.cols,
                grid.rows
            );
        }
    }

    #[test]
    fn grid_golden_table() {
        // Locked to the reference behavior, including its tie-break order.
        let golden = [
            (1, 2, 1),
            (4, 3, 2),
            (9, 4, 3),
            (12, 5, 3),
            (16, 6, 3),
            (25, 7, 4),
        ];
        for (n, cols, rows) in golden {
            assert_eq!(compute_grid(n), GridSpec { cols, rows }, "n = {n}");
        }
    }

    #[test]
    fn grid_is_deterministic() {
        for n in [1, 7, 33, 120] {
            assert_eq!(compute_grid(n), compute_grid(n));
        }
    }

    #[test]
    fn font_size_tiers() {
        assert!((compute_font_size(4, 40.0, MIN_SIZE_FACTOR) - 40.0).abs() < 1e-9);
        assert!((compute_font_size(5, 40.0, MIN_SIZE_FACTOR) - 40.0).abs() < 1e-9);
        assert!((compute_font_size(8, 40.0, MIN_SIZE_FACTOR) - 36.0).abs() < 1e-9);
        assert!((compute_font_size(10, 40.0, MIN_SIZE_FACTOR) - 36.0).abs() > 1e-9);
        assert!((compute_font_size(10, 40.0, MIN_SIZE_FACTOR) - 32.0).abs() < 1e-9);
        assert!((compute_font_size(16, 40.0, MIN_SIZE_FACTOR) - 28.0).abs() < 1e-9);
        assert!((compute_font_size(20, 40.0, MIN_SIZE_FACTOR) - 24.0).abs() < 1e-9);
    }

    #[test]
    fn font_size_floor_respects_custom_factor() {
        // A factor above 0.6 raises the floor for very long words.
        assert!((compute_font_size(30, 40.0, 0.8) - 32.0).abs() < 1e-9);
        // A factor below 0.6 is overridden by the 0.6x fallback.
        assert!((compute_font_size(30, 40.0, 0.3) - 24.0).abs() < 1e-9);
    }

    #[test]
    fn base_font_size_caps_at_36() {
        assert!((base_font_size(1) - 36.0).abs() < 1e-9);
        assert!((base_font_size(25) - 36.0).abs() < 1e-9);
        assert!((base_font_size(30) - 30.0).abs() < 1e-9);
    }
}
