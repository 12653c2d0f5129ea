/// A value fell outside the domain of an operation.
///
/// The operator forms (`/`, `inv` through `One`, etc.) panic with this
/// error's message; the `checked_*` methods return it.
#[derive(Debug, Fail, Copy, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[fail(display = "division by a zero scalar")]
    DivisionByZero,
    #[fail(display = "matrix is singular (determinant is zero)")]
    SingularMatrix,
}
