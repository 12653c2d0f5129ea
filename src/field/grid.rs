use geodesy_array_types::Vector;

use crate::{Coord, FieldError};

/// The rectangular domain of a field, and the nodes sampled on it.
///
/// On an axis with `n > 1` sample points, node `i` sits at
/// `lower + i * (upper - lower) / (n - 1)`, so the first and last nodes lie
/// exactly on the bounds. On an axis with a single sample point, that node
/// sits at `lower`.
///
/// Nodes are numbered in row-major order (the last axis varies fastest).
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Grid<T, const N: usize> {
    lower: Vector<T, N>,
    upper: Vector<T, N>,
    shape: [usize; N],
}

impl<T: Coord, const N: usize> Grid<T, N> {
    /// Validate and construct a grid.
    ///
    /// Every bound must be finite, `lower <= upper` on every axis,
    /// and every axis must have at least one sample point.
    /// An axis of zero width may only have one sample point, and the
    /// total number of nodes must fit in a `usize`.
    pub fn new(lower: Vector<T, N>, upper: Vector<T, N>, shape: [usize; N]) -> Result<Self, FieldError> {
        for axis in 0..N {
            if !(lower[axis].is_finite() && upper[axis].is_finite()) {
                throw!(FieldError::NonFiniteBound { axis });
            }
            if lower[axis] > upper[axis] {
                throw!(FieldError::InvertedDomain { axis });
            }
            match shape[axis] {
                0 => { throw!(FieldError::EmptyAxis { axis }); },
                1 => {},
                points => if lower[axis] == upper[axis] {
                    throw!(FieldError::DegenerateAxis { axis, points });
                },
            }
        }

        let total = shape.iter().try_fold(1usize, |acc, &n| acc.checked_mul(n));
        if total.is_none() {
            throw!(FieldError::TooManyNodes { shape: shape.to_vec() });
        }
        Ok(Grid { lower, upper, shape })
    }

    #[inline(always)]
    pub fn lower(&self) -> &Vector<T, N>
    { &self.lower }

    #[inline(always)]
    pub fn upper(&self) -> &Vector<T, N>
    { &self.upper }

    /// Number of sample points along each axis.
    #[inline(always)]
    pub fn shape(&self) -> [usize; N]
    { self.shape }

    /// Total number of nodes.
    #[inline]
    pub fn num_nodes(&self) -> usize
    { self.shape.iter().product() }

    /// Distance between adjacent nodes along an axis. (zero if there is only one node)
    pub fn spacing(&self, axis: usize) -> T {
        match self.shape[axis] {
            1 => T::zero(),
            n => (self.upper[axis] - self.lower[axis]) / T::from_index(n - 1),
        }
    }

    /// Test whether a point lies inside the closed domain.
    pub fn contains(&self, point: &Vector<T, N>) -> bool {
        (0..N).all(|k| self.lower[k] <= point[k] && point[k] <= self.upper[k])
    }

    /// Coordinates of a node.
    ///
    /// # Panics
    ///
    /// Panics if the index is out of bounds.
    pub fn node_point(&self, index: [usize; N]) -> Vector<T, N> {
        self.check_index(index);
        Vector::from_fn(|k| self.node_coord(k, index[k]))
    }

    /// Position of a node in row-major order, if the index is in bounds.
    pub fn flat_index(&self, index: [usize; N]) -> Option<usize> {
        let mut flat = 0;
        for k in 0..N {
            if index[k] >= self.shape[k] {
                return None;
            }
            flat = flat * self.shape[k] + index[k];
        }
        Some(flat)
    }

    /// Inverse of `flat_index`.
    ///
    /// # Panics
    ///
    /// Panics if `flat >= self.num_nodes()`.
    pub fn node_index(&self, flat: usize) -> [usize; N] {
        assert!(flat < self.num_nodes(), "node {} out of range for {} nodes", flat, self.num_nodes());

        let mut rest = flat;
        let mut index = [0; N];
        for k in (0..N).rev() {
            index[k] = rest % self.shape[k];
            rest /= self.shape[k];
        }
        index
    }

    /// Iterate over all node indices in row-major order.
    pub fn node_indices<'a>(&'a self) -> impl Iterator<Item=[usize; N]> + 'a
    { (0..self.num_nodes()).map(move |flat| self.node_index(flat)) }

    /// Map a coordinate along one axis into continuous index space,
    /// clamped to `[0, n - 1]`.
    ///
    /// Values within rounding error of a node are snapped onto it,
    /// so that sampling at `node_point(i)` reads node `i` exactly.
    pub(crate) fn index_coord(&self, axis: usize, x: T) -> T {
        let n = self.shape[axis];
        let (lo, hi) = (self.lower[axis], self.upper[axis]);
        if n == 1 {
            return T::zero();
        }

        let last = T::from_index(n - 1);
        let u = (x - lo) / (hi - lo) * last;
        // (NaN maps to the lower bound)
        let u = u.max(T::zero()).min(last);

        let nearest = u.round();
        let snap_tol = T::epsilon() * T::from_index(16 * n);
        match (u - nearest).abs() <= snap_tol {
            true => nearest,
            false => u,
        }
    }

    fn node_coord(&self, axis: usize, i: usize) -> T {
        let n = self.shape[axis];
        let (lo, hi) = (self.lower[axis], self.upper[axis]);
        if i == 0 || n == 1 {
            lo
        } else if i == n - 1 {
            hi
        } else {
            lo + (hi - lo) * (T::from_index(i) / T::from_index(n - 1))
        }
    }

    fn check_index(&self, index: [usize; N]) {
        if self.flat_index(index).is_none() {
            panic!("node index {:?} out of bounds for grid shape {:?}", index, self.shape);
        }
    }
}
