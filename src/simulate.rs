use rayon::prelude::*;

use crate::config::BoundaryPolicy;
use crate::grid::Grid;
use crate::rule::Rule;

/// Run `rule` from a single live cell at column `w / 2` for `h` rows.
///
/// Rows are produced strictly in order. Each row reads only the finished
/// previous row, so its columns are computed in parallel.
pub fn simulate(rule: Rule, policy: BoundaryPolicy, h: usize, w: usize) -> Grid<bool> {
    assert!(h >= 1 && w >= 1, "grid must be at least 1x1 (got {w}x{h})");

    let mut grid = Grid::<bool>::new(w, h);
    grid.set(w / 2, 0, true);

    for y in 1..h {
        let (done, rest) = grid.data.split_at_mut(y * w);
        let prev = &done[(y - 1) * w..];
        step(rule, policy, prev, &mut rest[..w]);
    }

    grid
}

/// Compute `next` from `prev`. Both slices must have the same width.
pub fn step(rule: Rule, policy: BoundaryPolicy, prev: &[bool], next: &mut [bool]) {
    let w = prev.len();
    assert_eq!(w, next.len());

    next.par_iter_mut().enumerate().for_each(|(x, cell)| {
        let (lx, rx) = policy.neighbors(x, w);
        *cell = rule.apply(prev[lx], prev[x], prev[rx]);
    });
}
