use std::fmt;

use crate::{Coord, FieldError};

/// How a field reconstructs values between its nodes.
///
/// The discriminant is the conventional integer "order" of the scheme.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Interp {
    /// Order 0: the value of the nearest node.
    Nearest = 0,
    /// Order 1: multilinear interpolation between the `2^N` surrounding nodes.
    Linear = 1,
    /// Order 2: tensor-product 3-point Lagrange interpolation, centered on
    /// the nearest node.
    ///
    /// Near the edge of the grid the stencil is shifted inward rather than
    /// shrunk, so it always uses three nodes. Axes with two nodes fall back
    /// to linear interpolation.
    ///
    /// The result passes through every node but is not continuous between
    /// them: the center moves to the next node halfway between two nodes,
    /// and the reconstruction can jump there.
    Quadratic = 2,
}

impl Default for Interp {
    fn default() -> Self { Interp::Linear }
}

impl Interp {
    pub fn from_order(order: u32) -> Result<Self, FieldError> {
        match order {
            0 => Ok(Interp::Nearest),
            1 => Ok(Interp::Linear),
            2 => Ok(Interp::Quadratic),
            _ => Err(FieldError::UnsupportedOrder(order)),
        }
    }

    #[inline(always)]
    pub fn order(self) -> u32
    { self as u32 }

    /// Weights along one axis for a continuous index `u` in `[0, n - 1]`.
    pub(crate) fn stencil<T: Coord>(self, u: T, n: usize) -> Stencil<T> {
        let one = T::one();
        let two = one + one;

        match (self, n) {
            (_, 1) => Stencil::single(0),

            (Interp::Nearest, _) => {
                let i = (u + one / two).floor().to_index();
                Stencil::single(i.min(n - 1))
            },

            (Interp::Linear, _) |
            (Interp::Quadratic, 2) => {
                let start = u.floor().to_index().min(n - 2);
                let t = u - T::from_index(start);
                Stencil { start, len: 2, weights: [one - t, t, T::zero()] }
            },

            (Interp::Quadratic, _) => {
                let center = u.round().to_index().max(1).min(n - 2);
                let s = u - T::from_index(center);
                Stencil {
                    start: center - 1,
                    len: 3,
                    weights: [
                        s * (s - one) / two,
                        (one - s) * (one + s),
                        s * (s + one) / two,
                    ],
                }
            },
        }
    }
}

impl fmt::Display for Interp {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match *self {
            Interp::Nearest => "nearest",
            Interp::Linear => "linear",
            Interp::Quadratic => "quadratic",
        };
        write!(f, "{} (order {})", name, self.order())
    }
}

/// Nodes `start..start + len` along one axis, with their weights.
#[derive(Debug, Copy, Clone, PartialEq)]
pub(crate) struct Stencil<T> {
    pub start: usize,
    pub len: usize,
    pub weights: [T; 3],
}

impl<T: Coord> Stencil<T> {
    fn single(i: usize) -> Self
    { Stencil { start: i, len: 1, weights: [T::one(), T::zero(), T::zero()] } }
}
