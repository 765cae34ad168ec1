use cubic_eos_core::math::CubicEquation;
use cubic_eos_core::{AlphaFunction, Correction, CubicEos, CubicKind, EosResult, RGAS};
use num_dual::DualNum;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Soave-Redlich-Kwong equation of state (1972).
///
/// $$p = \frac{RT}{v-b} - \frac{a\alpha(T_r)}{v(v+b)}$$
///
/// with $\alpha(T_r) = \left(1 + m(1-\sqrt{T_r})\right)^2$ and
/// $m = 0.480 + 1.574\omega - 0.176\omega^2$.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct SoaveRedlichKwong {
    acentric_factor: f64,
}

impl SoaveRedlichKwong {
    pub fn new(acentric_factor: f64) -> Self {
        Self { acentric_factor }
    }

    pub fn acentric_factor(&self) -> f64 {
        self.acentric_factor
    }

    pub fn m(&self) -> f64 {
        let w = self.acentric_factor;
        0.48 + w * (1.574 - w * 0.176)
    }

    fn q(z: f64, a: f64, b: f64) -> f64 {
        a / b * (1.0 + b / z).ln()
    }
}

impl fmt::Display for SoaveRedlichKwong {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "SoaveRedlichKwong(acentric factor={})",
            self.acentric_factor
        )
    }
}

// beta from automatic differentiation
impl AlphaFunction for SoaveRedlichKwong {
    fn alpha<D: DualNum<f64> + Copy>(&self, reduced_temperature: D) -> D {
        ((-reduced_temperature.sqrt() + 1.0) * self.m() + 1.0).powi(2)
    }
}

impl CubicKind for SoaveRedlichKwong {
    const OMEGA_A: f64 = 0.42748;
    const OMEGA_B: f64 = 0.08664;

    fn pressure(t: f64, v: f64, a: f64, b: f64) -> f64 {
        RGAS * t / (v - b) - a / (v * (v + b))
    }

    fn zfactor_cubic_eq(a: f64, b: f64) -> CubicEquation {
        CubicEquation::new(-1.0, a - b - b * b, -a * b)
    }

    fn ln_fugacity_coeff(z: f64, a: f64, b: f64) -> f64 {
        z - 1.0 - (z - b).ln() - Self::q(z, a, b)
    }

    fn residual_enthalpy(z: f64, t: f64, a: f64, b: f64, beta: f64) -> f64 {
        RGAS * t * (z - 1.0 - (1.0 - beta) * Self::q(z, a, b))
    }

    fn residual_entropy(z: f64, a: f64, b: f64, beta: f64) -> f64 {
        RGAS * ((z - b).ln() + beta * Self::q(z, a, b))
    }

    fn residual_helmholtz_energy(z: f64, t: f64, a: f64, b: f64) -> f64 {
        RGAS * t * ((z - b).ln() + Self::q(z, a, b))
    }

    fn from_acentric_factor(acentric_factor: f64) -> Self {
        Self::new(acentric_factor)
    }

    fn correction(&self, reduced_temperature: f64) -> Option<Correction> {
        Some(Correction::new(self, reduced_temperature))
    }
}

/// Soave-Redlich-Kwong equation of state for a substance with critical pressure `pc`,
/// critical temperature `tc` and acentric factor `acentric_factor`.
pub fn make_soave_redlich_kwong_eos(
    pc: f64,
    tc: f64,
    acentric_factor: f64,
) -> EosResult<CubicEos<SoaveRedlichKwong>> {
    CubicEos::new(pc, tc, SoaveRedlichKwong::new(acentric_factor))
}
