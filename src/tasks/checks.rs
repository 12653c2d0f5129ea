//! The math self-check suite.
//!
//! This exercises the public operators of `geodesy-array-types` and
//! `geodesy-field` on small worked examples with known answers, and
//! tabulates the results into a printable report.

use std::fmt;

use geodesy_array_types::{V2, V3, M44, Complex, DomainError};
use geodesy_array_types::{abs, phase, mat};
use geodesy_field::{Field, Grid, Interp, FieldError};

use crate::FailResult;

/// Width of the name column in the report.
const NAME_WIDTH: usize = 50;

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct CheckConfig {
    /// Absolute tolerance for comparisons of floats.
    pub epsilon: f64,
}

impl Default for CheckConfig {
    fn default() -> Self {
        CheckConfig { epsilon: 1e-5 }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckOutcome {
    pub name: String,
    pub passed: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckSection {
    pub title: String,
    pub outcomes: Vec<CheckOutcome>,
}

/// Collects the outcomes of named checks, grouped into sections.
#[derive(Debug, Clone)]
pub struct CheckSuite {
    epsilon: f64,
    sections: Vec<CheckSection>,
}

impl CheckSuite {
    pub fn new(config: &CheckConfig) -> Self {
        CheckSuite { epsilon: config.epsilon, sections: vec![] }
    }

    /// Begin a new section. Checks recorded afterwards belong to it.
    pub fn section(&mut self, title: &str) {
        info!("Testing {}", title);
        self.sections.push(CheckSection { title: title.to_string(), outcomes: vec![] });
    }

    /// Record the outcome of a check, returning `passed`.
    pub fn check(&mut self, name: &str, passed: bool) -> bool {
        match passed {
            true => debug!("{}: passed", name),
            false => warn!("{}: FAILED", name),
        }

        if self.sections.is_empty() {
            self.sections.push(CheckSection { title: String::new(), outcomes: vec![] });
        }
        let outcome = CheckOutcome { name: name.to_string(), passed };
        // (just ensured that there is a section)
        if let Some(section) = self.sections.last_mut() {
            section.outcomes.push(outcome);
        }
        passed
    }

    /// Record a check whose body may fail with an error.
    ///
    /// An error counts as a failure, and is logged.
    pub fn check_with<F>(&mut self, name: &str, body: F) -> bool
    where F: FnOnce(&Self) -> FailResult<bool>,
    {
        let passed = match body(self) {
            Ok(passed) => passed,
            Err(e) => {
                warn!("{}: {}", name, e);
                false
            },
        };
        self.check(name, passed)
    }

    pub fn epsilon(&self) -> f64
    { self.epsilon }

    pub fn close(&self, a: f64, b: f64) -> bool
    { (a - b).abs() < self.epsilon }

    /// Elementwise `close`. Slices of different lengths are never close.
    pub fn all_close(&self, a: &[f64], b: &[f64]) -> bool {
        a.len() == b.len() && izip!(a, b).all(|(&a, &b)| self.close(a, b))
    }

    pub fn finish(self) -> CheckReport
    { CheckReport { sections: self.sections } }
}

/// The tabulated outcome of a run.
///
/// `Display` renders one line per check, followed by a summary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckReport {
    pub sections: Vec<CheckSection>,
}

impl CheckReport {
    pub fn outcomes(&self) -> impl Iterator<Item=&CheckOutcome>
    { self.sections.iter().flat_map(|s| s.outcomes.iter()) }

    pub fn total(&self) -> usize
    { self.outcomes().count() }

    pub fn passed(&self) -> usize
    { self.outcomes().filter(|o| o.passed).count() }

    pub fn failed(&self) -> usize
    { self.total() - self.passed() }

    pub fn all_passed(&self) -> bool
    { self.failed() == 0 }

    /// Percentage of checks that passed. An empty report counts as 100%.
    pub fn success_rate(&self) -> f64 {
        match self.total() {
            0 => 100.0,
            total => 100.0 * self.passed() as f64 / total as f64,
        }
    }
}

impl fmt::Display for CheckReport {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "=== Testing Math Library ===")?;
        for section in &self.sections {
            writeln!(f)?;
            if !section.title.is_empty() {
                writeln!(f, "Testing {}:", section.title)?;
            }
            for outcome in &section.outcomes {
                let status = match outcome.passed {
                    true => "PASSED",
                    false => "FAILED",
                };
                writeln!(f, "{:<width$}{}", outcome.name, status, width = NAME_WIDTH)?;
            }
        }

        writeln!(f)?;
        writeln!(f, "=== Test Summary ===")?;
        writeln!(f, "Total Tests: {}", self.total())?;
        writeln!(f, "Passed: {}", self.passed())?;
        writeln!(f, "Failed: {}", self.failed())?;
        writeln!(f, "Success Rate: {:.1}%", self.success_rate())?;
        Ok(())
    }
}

/// Run every section of the self-check suite.
pub fn run_math_checks(config: &CheckConfig) -> CheckReport {
    let mut suite = CheckSuite::new(config);
    check_vectors(&mut suite);
    check_complex(&mut suite);
    check_matrices(&mut suite);
    check_fields(&mut suite);

    let report = suite.finish();
    info!("{} of {} checks passed", report.passed(), report.total());
    report
}

fn f64s(v: &[f32]) -> Vec<f64>
{ v.iter().map(|&x| x as f64).collect() }

fn check_vectors(suite: &mut CheckSuite) {
    suite.section("Vector<T, N>");

    let zero = V3::<f32>::default();
    suite.check("Default constructor zero initialization", zero.iter().all(|&x| x == 0.0));

    let v = V3([1.0f32, 2.0, 3.0]);
    suite.check("Literal constructor", (v[0], v[1], v[2]) == (1.0, 2.0, 3.0));

    let a = V3([2.0f32, 1.0, -3.0]);
    let b = V3([0.0f32, -2.09, 9.987]);

    let ok = suite.all_close(&f64s(&(-a).0), &[-2.0, -1.0, 3.0]);
    suite.check("Negation operator", ok);

    let ok = suite.all_close(&f64s(&(a + b).0), &[2.0, -1.09, 6.987]);
    suite.check("Addition operator", ok);

    let ok = suite.all_close(&f64s(&(a - b).0), &[2.0, 3.09, -12.987]);
    suite.check("Subtraction operator", ok);

    let ok = suite.all_close(&f64s(&(a * 2.0f32).0), &[4.0, 2.0, -6.0]);
    suite.check("Scalar multiplication", ok);

    let ok = suite.all_close(&f64s(&(a / 2.0f32).0), &[1.0, 0.5, -1.5]);
    suite.check("Scalar division", ok);

    let mut c = a;
    c += b;
    let ok = suite.all_close(&f64s(&c.0), &f64s(&(a + b).0));
    suite.check("Compound addition", ok);

    let mut c = a;
    c -= b;
    let ok = suite.all_close(&f64s(&c.0), &f64s(&(a - b).0));
    suite.check("Compound subtraction", ok);

    let mut c = a;
    c *= 3.0f32;
    let ok = suite.all_close(&f64s(&c.0), &[6.0, 3.0, -9.0]);
    suite.check("Compound scalar multiplication", ok);

    let mut c = a;
    c /= 4.0f32;
    let ok = suite.all_close(&f64s(&c.0), &[0.5, 0.25, -0.75]);
    suite.check("Compound scalar division", ok);

    let ok = suite.close((a * b) as f64, 2.0 * 0.0 + 1.0 * -2.09 + -3.0 * 9.987);
    suite.check("Dot product", ok);

    let ok = suite.all_close(&f64s(&(a ^ b).0), &[3.717, -19.974, -4.18]);
    suite.check("Cross product", ok);

    let ok = a.checked_div(0.0f32) == Err(DomainError::DivisionByZero);
    suite.check("Division by zero is a domain error", ok);
}

fn check_complex(suite: &mut CheckSuite) {
    suite.section("Complex<T>");

    let zero = Complex::<f32>::default();
    suite.check("Default constructor zero initialization", (zero.re(), zero.im()) == (0.0, 0.0));

    let a = Complex::new(1.0f32, 2.0);
    suite.check("Initialization constructor", (a.re(), a.im()) == (1.0, 2.0));

    let b = Complex::new(3.0f32, 4.0);
    let ok = suite.all_close(&f64s(&(a + b).0 .0), &[4.0, 6.0]);
    suite.check("Addition operator", ok);

    let ok = suite.all_close(&f64s(&(!a).0 .0), &[1.0, -2.0]);
    suite.check("Conjugate operator", ok);

    let ok = suite.all_close(&f64s(&(a * b).0 .0), &[-5.0, 10.0]);
    suite.check("Multiplication operator", ok);

    let ok = suite.close(abs(&b) as f64, 5.0);
    suite.check("Absolute value", ok);

    let ok = suite.close(phase(&a) as f64, 2f64.atan2(1.0));
    suite.check("Phase", ok);
}

fn check_matrices(suite: &mut CheckSuite) {
    suite.section("Matrix<T, M, N>");

    let a = mat::from_array([
        [1.0f32, 0.0, 0.0, 1.0],
        [2.0, 1.0, -1.0, 2.0],
        [3.0, 2.0, 0.0, 3.0],
        [4.0, 3.0, 1.0, 4.0],
    ]);
    let b = mat::from_array([
        [1.0f32, 2.0, 3.0, 4.0],
        [5.0, 6.0, 7.0, 8.0],
        [9.0, 10.0, 11.0, 12.0],
        [13.0, 14.0, 15.0, 16.0],
    ]);

    let ok = {
        (a[(0, 0)], a[(1, 0)], a[(2, 0)], a[(3, 0)]) == (1.0, 2.0, 3.0, 4.0)
        && a.cols()[0] == a.col(0)
        && a.col(0).0 == [1.0, 2.0, 3.0, 4.0]
    };
    suite.check("Column-major storage, row-major access", ok);

    let product: M44<f32> = &a * &b;
    let ok = {
        suite.all_close(&f64s(&product.row(0).0), &[14.0, 16.0, 18.0, 20.0])
        && suite.all_close(&f64s(&product.row(1).0), &[24.0, 28.0, 32.0, 36.0])
        && suite.all_close(&f64s(&product.row(3).0), &[80.0, 92.0, 104.0, 116.0])
    };
    suite.check("Matrix multiplication", ok);

    let c = M44::<f64>::new([
        [2.0, -1.0, 0.0, 1.0],
        [1.0, 3.0, -2.0, 0.0],
        [0.0, 2.0, 4.0, -1.0],
        [1.0, -1.0, 1.0, 2.0],
    ]);
    let ok = suite.close(c.det(), 55.0) && a.det() == 0.0;
    suite.check("Determinant", ok);

    suite.check_with("Inverse round trip", |suite| {
        let round_trip = c.inv()? * c;
        let eye = M44::<f64>::eye();
        Ok((0..4).all(|r| suite.all_close(&round_trip.row(r).0, &eye.row(r).0)))
    });
}

fn check_fields(suite: &mut CheckSuite) {
    suite.section("Field<T, N, Y>");

    suite.check_with("Grid rejects an inverted domain", |_| {
        let result = Grid::new(V2([1.0, 0.0]), V2([0.0, 1.0]), [2, 2]);
        Ok(result == Err(FieldError::InvertedDomain { axis: 0 }))
    });

    suite.check_with("Addition of differently-shaped fields", |suite| {
        let (x, y) = example_fields()?;
        let sum = &x + &y;
        let point = V2([1.9, 1.3]);
        let expected = (1.9 + 1.3) + 1.9 * 1.3;
        Ok(sum.grid() == x.grid() && suite.close(sum.sample(&point), expected))
    });

    suite.check_with("Sampling is idempotent", |_| {
        let (x, _) = example_fields()?;
        let point = V2([-0.37, 1.21]);
        Ok(x.sample(&point) == x.sample(&point))
    });

    suite.check_with("Sampling at a node returns its value", |_| {
        let (_, y) = example_fields()?;
        let all_match = y.grid().node_indices().all(|index| y.sample(&y.node_point(index)) == y[index]);
        Ok(all_match)
    });
}

/// `x + y` sampled linearly on one grid, and `x * y` sampled quadratically
/// on another that overlaps it.
fn example_fields() -> FailResult<(Field<f64, 2, f64>, Field<f64, 2, f64>)> {
    let x_grid = Grid::new(V2([-5.0, -5.0]), V2([2.0, 2.0]), [50, 50])?;
    let y_grid = Grid::new(V2([-2.0, -3.0]), V2([4.0, 5.0]), [50, 50])?;

    let x = Field::from_fn(x_grid, Interp::Linear, |p| p[0] + p[1]);
    let y = Field::from_fn(y_grid, Interp::Quadratic, |p| p[0] * p[1]);
    Ok((x, y))
}
