#[macro_use]
extern crate pretty_assertions;

use geodesy_math::array_types::{V2, M22, Complex};
use geodesy_math::field::{Field, Grid, Interp};
use geodesy_math::tasks::{CheckConfig, run_math_checks};

#[test]
fn self_check_suite_passes() {
    let report = run_math_checks(&CheckConfig::default());

    let failed: Vec<_> = report.outcomes()
        .filter(|o| !o.passed)
        .map(|o| o.name.clone())
        .collect();
    assert_eq!(failed, Vec::<String>::new());

    let titles: Vec<_> = report.sections.iter().map(|s| s.title.as_str()).collect();
    assert_eq!(titles, vec!["Vector<T, N>", "Complex<T>", "Matrix<T, M, N>", "Field<T, N, Y>"]);

    let text = report.to_string();
    let summary: Vec<_> = text.lines().skip_while(|line| !line.starts_with("=== Test Summary")).collect();
    assert_eq!(summary, vec![
        "=== Test Summary ===",
        "Total Tests: 29",
        "Passed: 29",
        "Failed: 0",
        "Success Rate: 100.0%",
    ]);
}

#[test]
fn report_lines_are_aligned() {
    let text = run_math_checks(&CheckConfig::default()).to_string();
    for line in text.lines().filter(|l| l.ends_with("PASSED") || l.ends_with("FAILED")) {
        assert_eq!(line.len(), 56, "{:?}", line);
    }
}

// the crates can be used together through the facade
#[test]
fn field_of_complex_rotations() {
    let grid = Grid::new(V2([0.0, 0.0]), V2([1.0, 1.0]), [3, 3]).unwrap();
    let field = Field::from_fn(grid, Interp::Linear, |p| Complex::new(p[0], p[1]));

    let rotated = field.map(|c| c * Complex::new(0.0, 1.0));
    let value = rotated.sample(&V2([0.25, 0.75]));
    assert_eq!(value, Complex::new(-0.75, 0.25));

    let m = M22::<f64>::new([[0.0, -1.0], [1.0, 0.0]]);
    assert_eq!(&m * value.0, V2([-0.75, 0.25]));
}
