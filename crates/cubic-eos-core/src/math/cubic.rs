use super::IMAGINARY_TOLERANCE;
use num_complex::Complex;
use std::fmt;

const SQRT_3: f64 = 1.732_050_807_568_877_2;

/// The primitive cube roots of unity.
const W1: Complex<f64> = Complex::new(-0.5, 0.5 * SQRT_3);
const W2: Complex<f64> = Complex::new(-0.5, -0.5 * SQRT_3);

/// Monic cubic equation $x^3 + ax^2 + bx + c = 0$.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CubicEquation {
    pub a: f64,
    pub b: f64,
    pub c: f64,
}

impl From<[f64; 3]> for CubicEquation {
    fn from([a, b, c]: [f64; 3]) -> Self {
        Self::new(a, b, c)
    }
}

impl fmt::Display for CubicEquation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "x^3 + ({})x^2 + ({})x + ({}) = 0", self.a, self.b, self.c)
    }
}

impl CubicEquation {
    pub fn new(a: f64, b: f64, c: f64) -> Self {
        Self { a, b, c }
    }

    /// Coefficients $(p, q)$ of the depressed cubic $y^3 + 3py + 2q = 0$
    /// obtained with the substitution $x = y - a/3$.
    pub fn depressed(&self) -> (f64, f64) {
        let Self { a, b, c } = *self;
        let p = (3.0 * b - a * a) / 9.0;
        let q = (27.0 * c + a * (2.0 * a * a - 9.0 * b)) / 54.0;
        (p, q)
    }

    /// $p^3 + q^2$ of the depressed cubic.
    ///
    /// Negative values indicate three distinct real roots, positive values
    /// a single real root.
    pub fn discriminant(&self) -> f64 {
        let (p, q) = self.depressed();
        p * p * p + q * q
    }

    /// Number of distinct real roots derived from the sign of [Self::discriminant].
    pub fn num_real_roots(&self) -> usize {
        let (p, q) = self.depressed();
        let disc = p * p * p + q * q;
        if disc == 0.0 {
            if p == 0.0 {
                1
            } else {
                2
            }
        } else if disc < 0.0 {
            3
        } else {
            1
        }
    }

    /// All three (complex) roots from Cardano's formula.
    ///
    /// The computation is carried out in complex arithmetic so that no case
    /// distinction on the sign of the discriminant is necessary. The roots
    /// are not sorted.
    pub fn roots(&self) -> [Complex<f64>; 3] {
        let (p, q) = self.depressed();
        let disc = p * p * p + q * q;

        let s = Complex::new(disc, 0.0).sqrt();
        // the larger of -q ± s avoids cancellation in the cube root
        let (c1, c2) = (-q + s, -q - s);
        let c = if c1.norm_sqr() >= c2.norm_sqr() { c1 } else { c2 };
        let u1 = c.powf(1.0 / 3.0);
        // u1 * u2 = -p selects the matching cube root for u2
        let u2 = if u1.norm_sqr() > 0.0 {
            -p / u1
        } else {
            Complex::new(0.0, 0.0)
        };

        let shift = self.a / 3.0;
        [
            u1 + u2 - shift,
            W1 * u1 + W2 * u2 - shift,
            W2 * u1 + W1 * u2 - shift,
        ]
    }

    /// Real roots in ascending order.
    ///
    /// Roots with an imaginary part below [IMAGINARY_TOLERANCE] are regarded as real.
    /// Repeated roots are reported with their multiplicity.
    pub fn real_roots(&self) -> Vec<f64> {
        let mut x: Vec<f64> = self
            .roots()
            .iter()
            .filter(|xi| xi.im.abs() < IMAGINARY_TOLERANCE)
            .map(|xi| xi.re)
            .collect();
        x.sort_by(f64::total_cmp);
        x
    }
}

/// Real roots of $x^3 + ax^2 + bx + c = 0$ in ascending order.
pub fn real_roots(a: f64, b: f64, c: f64) -> Vec<f64> {
    CubicEquation::new(a, b, c).real_roots()
}
