use cubic_eos_core::math::CubicEquation;
use cubic_eos_core::{AlphaFunction, Correction, CubicEos, CubicKind, EosResult, RGAS};
use num_dual::DualNum;
use serde::{Deserialize, Serialize};
use std::f64::consts::SQRT_2;
use std::fmt;

const DELTA1: f64 = 1.0 + SQRT_2;
const DELTA2: f64 = 1.0 - SQRT_2;

/// Peng-Robinson equation of state (1976).
///
/// $$p = \frac{RT}{v-b} - \frac{a\alpha(T_r)}{v(v+b)+b(v-b)}$$
///
/// with $\alpha(T_r) = \left(1 + m(1-\sqrt{T_r})\right)^2$ and
/// $m = 0.3796 + 1.485\omega - 0.1644\omega^2 + 0.01667\omega^3$.
///
/// The temperature correction uses the logarithmic derivative
/// $\beta = \frac{d\ln\alpha}{d\ln T} = -\frac{m\sqrt{T_r}}{1+m(1-\sqrt{T_r})}$.
/// The form $-m\sqrt{T_r}\left(1+m(1-\sqrt{T_r})\right)$ found in some tables
/// is $T\frac{d\alpha}{dT}$ instead. Both agree only at $T_r = 1$, so residual
/// enthalpies and entropies computed with the latter differ from the ones
/// here at every other temperature.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct PengRobinson {
    acentric_factor: f64,
}

impl PengRobinson {
    pub fn new(acentric_factor: f64) -> Self {
        Self { acentric_factor }
    }

    pub fn acentric_factor(&self) -> f64 {
        self.acentric_factor
    }

    pub fn m(&self) -> f64 {
        let w = self.acentric_factor;
        0.3796 + w * (1.485 - w * (0.1644 - 0.01667 * w))
    }

    fn q(z: f64, a: f64, b: f64) -> f64 {
        a / (2.0 * SQRT_2 * b) * ((z + DELTA1 * b) / (z + DELTA2 * b)).ln()
    }
}

impl fmt::Display for PengRobinson {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PengRobinson(acentric factor={})", self.acentric_factor)
    }
}

impl AlphaFunction for PengRobinson {
    fn alpha<D: DualNum<f64> + Copy>(&self, reduced_temperature: D) -> D {
        ((-reduced_temperature.sqrt() + 1.0) * self.m() + 1.0).powi(2)
    }

    fn beta(&self, reduced_temperature: f64) -> f64 {
        let m = self.m();
        let sqrt_tr = reduced_temperature.sqrt();
        -m * sqrt_tr / (1.0 + m * (1.0 - sqrt_tr))
    }
}

impl CubicKind for PengRobinson {
    const OMEGA_A: f64 = 0.45724;
    const OMEGA_B: f64 = 0.07780;

    fn pressure(t: f64, v: f64, a: f64, b: f64) -> f64 {
        RGAS * t / (v - b) - a / (v * (v + b) + b * (v - b))
    }

    fn zfactor_cubic_eq(a: f64, b: f64) -> CubicEquation {
        CubicEquation::new(b - 1.0, a - (3.0 * b + 2.0) * b, (-a + b + b * b) * b)
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

/// Peng-Robinson equation of state for a substance with critical pressure `pc`,
/// critical temperature `tc` and acentric factor `acentric_factor`.
pub fn make_peng_robinson_eos(
    pc: f64,
    tc: f64,
    acentric_factor: f64,
) -> EosResult<CubicEos<PengRobinson>> {
    CubicEos::new(pc, tc, PengRobinson::new(acentric_factor))
}
