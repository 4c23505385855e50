
fn is_close(a: &f64, b: &f64, abs_tol: Option<f64>) -> bool {
    // used rather than equality for float numbers
    (a - b).abs() < abs_tol.unwrap_or(1e-8)
}
