use super::IMAGINARY_TOLERANCE;
use nalgebra::DMatrix;

/// Real roots of the polynomial $a_0 + a_1 x + \dots + a_{N-1} x^{N-1} = 0$
/// in ascending order.
///
/// The roots are the eigenvalues of the companion matrix. Trailing zero
/// coefficients are ignored, so that a polynomial of degree zero
/// (including the zero polynomial) has no roots.
pub fn polynomial_real_roots(a: &[f64]) -> Vec<f64> {
    let Some(n) = a.iter().rposition(|&ai| ai != 0.0) else {
        return Vec::new();
    };
    if n == 0 {
        return Vec::new();
    }

    let lead = a[n];
    let companion = DMatrix::from_fn(n, n, |i, j| {
        if j == n - 1 {
            -a[i] / lead
        } else if i == j + 1 {
            1.0
        } else {
            0.0
        }
    });

    let mut x: Vec<f64> = companion
        .complex_eigenvalues()
        .iter()
        .filter(|xi| xi.im.abs() < IMAGINARY_TOLERANCE)
        .map(|xi| xi.re)
        .collect();
    x.sort_by(f64::total_cmp);
    x
}
