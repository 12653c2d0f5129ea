use std::ops::{Add, AddAssign, Index};

use geodesy_array_types::Vector;

use crate::interp::Stencil;
use crate::{Coord, FieldError, Grid, Interp, Value};

/// A function sampled on the nodes of a [`Grid`].
///
/// Values are stored densely in row-major node order. After construction
/// they only change through addition.
///
/// [`Grid`]: struct.Grid.html
#[derive(Debug, Clone, PartialEq)]
pub struct Field<T, const N: usize, Y> {
    grid: Grid<T, N>,
    interp: Interp,
    values: Vec<Y>,
}

impl<T: Coord, const N: usize, Y: Value<T>> Field<T, N, Y> {
    /// A field that is zero everywhere.
    pub fn new(grid: Grid<T, N>, interp: Interp) -> Self
    { Self::filled(grid, interp, Y::zero()) }

    /// A field with the same value at every node.
    pub fn filled(grid: Grid<T, N>, interp: Interp, value: Y) -> Self {
        let values = vec![value; grid.num_nodes()];
        Self::from_parts(grid, interp, values)
    }

    /// Evaluate a function at every node.
    ///
    /// The function is called once per node, in row-major node order.
    pub fn from_fn<F>(grid: Grid<T, N>, interp: Interp, mut f: F) -> Self
    where F: FnMut(&Vector<T, N>) -> Y,
    {
        let values = grid.node_indices()
            .map(|index| f(&grid.node_point(index)))
            .collect();
        Self::from_parts(grid, interp, values)
    }

    /// Wrap values already laid out in row-major node order.
    pub fn from_values(grid: Grid<T, N>, interp: Interp, values: Vec<Y>) -> Result<Self, FieldError> {
        let expected = grid.num_nodes();
        if values.len() != expected {
            throw!(FieldError::DimensionMismatch { expected, found: values.len() });
        }
        Ok(Self::from_parts(grid, interp, values))
    }

    fn from_parts(grid: Grid<T, N>, interp: Interp, values: Vec<Y>) -> Self {
        debug!(
            "field: {} nodes (shape {:?}), interpolation {}",
            values.len(), grid.shape(), interp,
        );
        Field { grid, interp, values }
    }

    #[inline(always)]
    pub fn grid(&self) -> &Grid<T, N>
    { &self.grid }

    #[inline(always)]
    pub fn interp(&self) -> Interp
    { self.interp }

    /// Node values, in row-major node order.
    #[inline(always)]
    pub fn values(&self) -> &[Y]
    { &self.values }

    #[inline]
    pub fn get(&self, index: [usize; N]) -> Option<&Y>
    { self.grid.flat_index(index).map(|flat| &self.values[flat]) }

    /// Coordinates of a node.
    #[inline]
    pub fn node_point(&self, index: [usize; N]) -> Vector<T, N>
    { self.grid.node_point(index) }

    /// Apply a function to every node value.
    pub fn map<Z: Value<T>, F>(self, f: F) -> Field<T, N, Z>
    where F: FnMut(Y) -> Z,
    {
        let Field { grid, interp, values } = self;
        Field { grid, interp, values: values.into_iter().map(f).collect() }
    }

    /// Evaluate the field at an arbitrary point.
    ///
    /// Points outside the domain are clamped onto it, axis by axis.
    /// Sampling exactly at a node produces that node's value, for every
    /// interpolation order.
    pub fn sample(&self, point: &Vector<T, N>) -> Y {
        let shape = self.grid.shape();
        let stencils: [Stencil<T>; N] = std::array::from_fn(|k| {
            let u = self.grid.index_coord(k, point[k]);
            self.interp.stencil(u, shape[k])
        });

        // Walk the tensor product of the stencils like an odometer,
        // last axis fastest.
        let mut acc = Y::zero();
        let mut offsets = [0; N];
        loop {
            let mut weight = T::one();
            let mut flat = 0;
            for (k, stencil) in stencils.iter().enumerate() {
                weight = weight * stencil.weights[offsets[k]];
                flat = flat * shape[k] + stencil.start + offsets[k];
            }
            if weight != T::zero() {
                acc = acc + self.values[flat] * weight;
            }

            let mut k = N;
            loop {
                if k == 0 {
                    return acc;
                }
                k -= 1;
                offsets[k] += 1;
                if offsets[k] < stencils[k].len {
                    break;
                }
                offsets[k] = 0;
            }
        }
    }

    /// Sample this field at every node of another grid.
    ///
    /// The result lives on `grid`, and keeps this field's interpolation order.
    pub fn resample(&self, grid: &Grid<T, N>) -> Self {
        trace!("field: resampling shape {:?} onto shape {:?}", self.grid.shape(), grid.shape());
        Self::from_fn(*grid, self.interp, |point| self.sample(point))
    }
}

impl<T: Coord, const N: usize, Y: Value<T>> Index<[usize; N]> for Field<T, N, Y> {
    type Output = Y;

    fn index(&self, index: [usize; N]) -> &Y {
        match self.get(index) {
            Some(value) => value,
            None => panic!("node index {:?} out of bounds for grid shape {:?}", index, self.grid.shape()),
        }
    }
}

// ---------------------------------------------------------------------------
// Addition
//
// The result always lives on the left operand's grid and uses its
// interpolation order. When the grids differ, the right operand is
// resampled onto the left grid first (using its own order).

impl<'b, T: Coord, const N: usize, Y: Value<T>> AddAssign<&'b Field<T, N, Y>> for Field<T, N, Y> {
    fn add_assign(&mut self, other: &'b Field<T, N, Y>) {
        if self.grid == other.grid {
            debug!("field addition: identical grids, {} nodes", self.values.len());
            add_values(&mut self.values, &other.values);
        } else {
            debug!(
                "field addition: resampling right operand (shape {:?}, {}) onto shape {:?}",
                other.grid.shape(), other.interp, self.grid.shape(),
            );
            let resampled = other.resample(&self.grid);
            add_values(&mut self.values, &resampled.values);
        }
    }
}

fn add_values<Y: Copy + Add<Output=Y>>(dest: &mut [Y], src: &[Y]) {
    assert_eq!(dest.len(), src.len());
    for (a, &b) in izip!(dest, src) {
        *a = *a + b;
    }
}

impl<T: Coord, const N: usize, Y: Value<T>> AddAssign<Field<T, N, Y>> for Field<T, N, Y> {
    #[inline(always)]
    fn add_assign(&mut self, other: Field<T, N, Y>)
    { *self += &other; }
}

impl<'a, 'b, T: Coord, const N: usize, Y: Value<T>> Add<&'b Field<T, N, Y>> for &'a Field<T, N, Y> {
    type Output = Field<T, N, Y>;

    fn add(self, other: &'b Field<T, N, Y>) -> Self::Output {
        let mut out = self.clone();
        out += other;
        out
    }
}

impl<'b, T: Coord, const N: usize, Y: Value<T>> Add<&'b Field<T, N, Y>> for Field<T, N, Y> {
    type Output = Field<T, N, Y>;

    fn add(mut self, other: &'b Field<T, N, Y>) -> Self::Output {
        self += other;
        self
    }
}

impl<'a, T: Coord, const N: usize, Y: Value<T>> Add<Field<T, N, Y>> for &'a Field<T, N, Y> {
    type Output = Field<T, N, Y>;

    fn add(self, other: Field<T, N, Y>) -> Self::Output
    { self + &other }
}

impl<T: Coord, const N: usize, Y: Value<T>> Add<Field<T, N, Y>> for Field<T, N, Y> {
    type Output = Field<T, N, Y>;

    fn add(mut self, other: Field<T, N, Y>) -> Self::Output {
        self += &other;
        self
    }
}

// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use geodesy_array_types::{V2, V3, Complex};

    const ALL_ORDERS: [Interp; 3] = [Interp::Nearest, Interp::Linear, Interp::Quadratic];

    fn grid_2d() -> Grid<f64, 2> {
        Grid::new(V2([-1.0, 0.0]), V2([2.0, 3.0]), [4, 7]).unwrap()
    }

    fn random_point_in(grid: &Grid<f64, 2>) -> V2 {
        Vector::from_fn(|k| {
            let alpha = ::rand::random::<f64>();
            grid.lower()[k] + alpha * (grid.upper()[k] - grid.lower()[k])
        })
    }

    fn wavy(p: &V2) -> f64 { (3.0 * p[0]).sin() + p[1] * p[1] }

    #[test]
    fn construction() {
        let g = grid_2d();
        let zero = Field::<f64, 2, f64>::new(g, Interp::Linear);
        assert_eq!(zero.values(), &[0.0; 28][..]);

        let filled = Field::filled(g, Interp::Nearest, 2.5);
        assert!(filled.values().iter().all(|&x| x == 2.5));
        assert_eq!(filled.interp(), Interp::Nearest);
        assert_eq!(filled.grid(), &g);

        let field = Field::from_fn(g, Interp::Linear, |p| p[0] + 10.0 * p[1]);
        assert_eq!(field[[0, 0]], -1.0);
        assert_eq!(field[[3, 6]], 32.0);
        assert_eq!(field.get([1, 2]), Some(&(0.0 + 10.0 * 1.0)));
        assert_eq!(field.get([4, 0]), None);
        assert_eq!(field.node_point([3, 6]), V2([2.0, 3.0]));
    }

    #[test]
    fn from_values_checks_length() {
        let g = grid_2d();
        let values: Vec<f64> = (0..28).map(|x| x as f64).collect();
        let field = Field::from_values(g, Interp::Linear, values.clone()).unwrap();
        assert_eq!(field.values(), &values[..]);
        assert_eq!(field[[1, 0]], 7.0);

        assert_eq!(
            Field::from_values(g, Interp::Linear, vec![0.0; 27]),
            Err(FieldError::DimensionMismatch { expected: 28, found: 27 }),
        );
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn index_out_of_bounds() {
        let field = Field::<f64, 2, f64>::new(grid_2d(), Interp::Linear);
        let _ = field[[0, 7]];
    }

    #[test]
    fn sampling_a_node_reads_the_node() {
        let g = grid_2d();
        for &interp in &ALL_ORDERS {
            let field = Field::from_fn(g, interp, wavy);
            for index in g.node_indices() {
                assert_eq!(field.sample(&g.node_point(index)), field[index], "{:?} {:?}", interp, index);
            }
        }
    }

    #[test]
    fn sampling_is_idempotent() {
        let g = grid_2d();
        for &interp in &ALL_ORDERS {
            let field = Field::from_fn(g, interp, wavy);
            for _ in 0..10 {
                let p = random_point_in(&g);
                assert_eq!(field.sample(&p), field.sample(&p));
            }
        }
    }

    #[test]
    fn sampling_outside_clamps() {
        let g = grid_2d();
        for &interp in &ALL_ORDERS {
            let field = Field::from_fn(g, interp, wavy);
            assert_eq!(field.sample(&V2([-100.0, 1.3])), field.sample(&V2([-1.0, 1.3])));
            assert_eq!(field.sample(&V2([0.7, 55.0])), field.sample(&V2([0.7, 3.0])));
            assert_eq!(field.sample(&V2([9.0, -9.0])), field[[3, 0]]);
        }
    }

    #[test]
    fn nearest_picks_a_node() {
        let field = Field::from_fn(grid_2d(), Interp::Nearest, wavy);
        // nodes are at x = -1, 0, 1, 2 and y = 0, 0.5, 1, ...
        assert_eq!(field.sample(&V2([0.3, 1.2])), field[[1, 2]]);
        assert_eq!(field.sample(&V2([0.6, 1.3])), field[[2, 3]]);
    }

    #[test]
    fn linear_reproduces_affine() {
        let g = grid_2d();
        let f = |p: &V2| 2.0 * p[0] - 3.0 * p[1] + 1.0;
        let field = Field::from_fn(g, Interp::Linear, f);
        for _ in 0..20 {
            let p = random_point_in(&g);
            assert_close!(abs=1e-12, f(&p), field.sample(&p));
        }
    }

    #[test]
    fn linear_reproduces_bilinear() {
        let g = grid_2d();
        let f = |p: &V2| p[0] * p[1] - p[0];
        let field = Field::from_fn(g, Interp::Linear, f);
        for _ in 0..20 {
            let p = random_point_in(&g);
            assert_close!(abs=1e-12, f(&p), field.sample(&p));
        }
    }

    #[test]
    fn quadratic_reproduces_quadratic() {
        let g = grid_2d();
        let f = |p: &V2| p[0] * p[0] - 2.0 * p[0] * p[1] + 0.5 * p[1] * p[1] - p[1] + 4.0;
        let field = Field::from_fn(g, Interp::Quadratic, f);
        for _ in 0..20 {
            let p = random_point_in(&g);
            assert_close!(abs=1e-11, f(&p), field.sample(&p));
        }

        // linear interpolation can't do this
        let field = Field::from_fn(g, Interp::Linear, f);
        let p = V2([0.5, 0.25]);
        assert!((field.sample(&p) - f(&p)).abs() > 1e-3);
    }

    #[test]
    fn single_node_axis_is_constant() {
        let g = Grid::new(V2([1.0, 0.0]), V2([5.0, 1.0]), [1, 2]).unwrap();
        for &interp in &ALL_ORDERS {
            let field = Field::from_fn(g, interp, |p| p[0] + p[1]);
            assert_eq!(field.sample(&V2([3.0, 1.0])), 2.0);
            assert_eq!(field.sample(&V2([-3.0, 0.0])), 1.0);
            assert_eq!(field.sample(&V2([1.0, 0.1])), field.sample(&V2([8.0, 0.1])));
        }
    }

    #[test]
    fn vector_and_complex_values() {
        let g = Grid::new(V3([0.0, 0.0, 0.0]), V3([1.0, 1.0, 1.0]), [3, 3, 3]).unwrap();
        let field = Field::from_fn(g, Interp::Linear, |p| *p * 2.0);
        assert_close!(abs=1e-12, [0.5, 1.0, 1.5], field.sample(&V3([0.25, 0.5, 0.75])).0);

        let g = grid_2d();
        let field = Field::from_fn(g, Interp::Quadratic, |p| Complex::new(p[0], -p[1]));
        assert_close!(abs=1e-12, [0.3, -1.7], field.sample(&V2([0.3, 1.7])).0 .0);
    }

    #[test]
    fn map_keeps_grid() {
        let field = Field::from_fn(grid_2d(), Interp::Quadratic, wavy);
        let doubled = field.clone().map(|x| 2.0 * x);
        assert_eq!(doubled.grid(), field.grid());
        assert_eq!(doubled.interp(), Interp::Quadratic);
        assert_eq!(doubled[[2, 5]], 2.0 * field[[2, 5]]);
    }

    #[test]
    fn add_on_identical_grids() {
        let field = Field::from_fn(grid_2d(), Interp::Linear, wavy);
        let sum = &field + &field;
        for (&a, &b) in izip!(sum.values(), field.values()) {
            assert_eq!(a, 2.0 * b);
        }
        assert_eq!(field.clone() + field.clone(), sum);
        assert_eq!(field.clone() + &field, sum);
        assert_eq!(&field + field.clone(), sum);

        let mut acc = field.clone();
        acc += &field;
        assert_eq!(acc, sum);
        acc += field.clone();
        assert_eq!(acc[[1, 1]], 3.0 * field[[1, 1]]);
    }

    #[test]
    fn add_resamples_onto_left_grid() {
        let a_grid = Grid::new(V2([0.0, 0.0]), V2([1.0, 1.0]), [5, 5]).unwrap();
        let b_grid = Grid::new(V2([-1.0, -1.0]), V2([2.0, 2.0]), [7, 4]).unwrap();
        let fa = |p: &V2| p[0] * p[0];
        let fb = |p: &V2| 3.0 * p[0] - p[1];
        let a = Field::from_fn(a_grid, Interp::Quadratic, fa);
        let b = Field::from_fn(b_grid, Interp::Linear, fb);

        let sum = &a + &b;
        assert_eq!(sum.grid(), &a_grid);
        assert_eq!(sum.interp(), Interp::Quadratic);
        assert_eq!(sum.values().len(), 25);
        for index in a_grid.node_indices() {
            let p = a_grid.node_point(index);
            assert_close!(abs=1e-12, fa(&p) + fb(&p), sum[index]);
        }

        // the other way around lives on b's grid
        let sum = &b + &a;
        assert_eq!(sum.grid(), &b_grid);
        assert_eq!(sum.values().len(), 28);
    }

    #[test]
    fn resample_same_grid_is_identity() {
        for &interp in &ALL_ORDERS {
            let field = Field::from_fn(grid_2d(), interp, wavy);
            assert_eq!(field.resample(field.grid()), field);
        }
    }
}
