/// Reasons a grid or field could not be constructed.
#[derive(Debug, Fail, Clone, PartialEq, Eq)]
pub enum FieldError {
    #[fail(display = "inverted domain on axis {}: lower bound exceeds upper bound", axis)]
    InvertedDomain { axis: usize },

    #[fail(display = "axis {} has no sample points", axis)]
    EmptyAxis { axis: usize },

    #[fail(display = "axis {} has zero width but {} sample points", axis, points)]
    DegenerateAxis { axis: usize, points: usize },

    #[fail(display = "grid shape {:?} has more nodes than can be indexed", shape)]
    TooManyNodes { shape: Vec<usize> },

    #[fail(display = "non-finite domain bound on axis {}", axis)]
    NonFiniteBound { axis: usize },

    #[fail(display = "expected {} grid values, found {}", expected, found)]
    DimensionMismatch { expected: usize, found: usize },

    #[fail(display = "unsupported interpolation order {} (expected 0, 1 or 2)", _0)]
    UnsupportedOrder(u32),
}
