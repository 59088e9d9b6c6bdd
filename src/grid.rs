use crate::config::BoundaryPolicy;

/// Row-major flat grid. No per-cell objects.
/// Row 0 is the initial condition; row y is derived from row y-1.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid<T> {
    pub data: Vec<T>,
    pub w: usize,
    pub h: usize,
}

impl<T: Copy + Default> Grid<T> {
    pub fn new(w: usize, h: usize) -> Self {
        Self {
            data: vec![T::default(); w * h],
            w,
            h,
        }
    }

    #[inline]
    pub fn idx(&self, x: usize, y: usize) -> usize {
        debug_assert!(x < self.w && y < self.h);
        y * self.w + x
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> T {
        self.data[self.idx(x, y)]
    }

    #[inline]
    pub fn set(&mut self, x: usize, y: usize, v: T) {
        let i = self.idx(x, y);
        self.data[i] = v;
    }

    #[inline]
    pub fn row(&self, y: usize) -> &[T] {
        &self.data[y * self.w..(y + 1) * self.w]
    }

    pub fn rows(&self) -> impl Iterator<Item = &[T]> {
        self.data.chunks_exact(self.w)
    }
}

impl BoundaryPolicy {
    /// Column index of the left neighbor of `x` in a row of width `w`.
    #[inline]
    pub fn left(self, x: usize, w: usize) -> usize {
        match self {
            // (x - 1 + w) mod w, without going negative at x = 0
            BoundaryPolicy::Wrapped => (x + w - 1) % w,
            BoundaryPolicy::Clamped => x.saturating_sub(1),
        }
    }

    /// Column index of the right neighbor of `x` in a row of width `w`.
    #[inline]
    pub fn right(self, x: usize, w: usize) -> usize {
        match self {
            BoundaryPolicy::Wrapped => (x + 1) % w,
            BoundaryPolicy::Clamped => (x + 1).min(w - 1),
        }
    }

    #[inline]
    pub fn neighbors(self, x: usize, w: usize) -> (usize, usize) {
        (self.left(x, w), self.right(x, w))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrapped_edges_meet() {
        let p = BoundaryPolicy::Wrapped;
        assert_eq!(p.neighbors(0, 8), (7, 1));
        assert_eq!(p.neighbors(7, 8), (6, 0));
        assert_eq!(p.neighbors(3, 8), (2, 4));
    }

    #[test]
    fn clamped_edges_see_themselves() {
        let p = BoundaryPolicy::Clamped;
        assert_eq!(p.neighbors(0, 8), (0, 1));
        assert_eq!(p.neighbors(7, 8), (6, 7));
        assert_eq!(p.neighbors(3, 8), (2, 4));
    }

    #[test]
    fn single_column_is_its_own_neighbor() {
        for p in [BoundaryPolicy::Wrapped, BoundaryPolicy::Clamped] {
            assert_eq!(p.neighbors(0, 1), (0, 0));
        }
    }

    #[test]
    fn rows_are_contiguous_slices() {
        let mut g = Grid::<bool>::new(3, 2);
        g.set(2, 1, true);
        assert_eq!(g.row(0), &[false, false, false]);
        assert_eq!(g.row(1), &[false, false, true]);
        assert_eq!(g.rows().count(), 2);
        assert!(g.get(2, 1));
    }
}
