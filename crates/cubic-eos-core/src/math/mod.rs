//! Real roots of cubic and general polynomial equations.
mod cubic;
mod polynomial;

pub use cubic::{real_roots, CubicEquation};
pub use polynomial::polynomial_real_roots;

/// Absolute tolerance on the imaginary part below which a root is considered real.
pub const IMAGINARY_TOLERANCE: f64 = 1e-10;
