use cubic_eos_core::math::CubicEquation;
use cubic_eos_core::{Correction, CubicEos, CubicKind, EosResult, RGAS};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Van der Waals equation of state (1873).
///
/// $$p = \frac{RT}{v-b} - \frac{a}{v^2}$$
///
/// The attraction parameter does not depend on temperature.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq)]
pub struct VanDerWaals;

impl fmt::Display for VanDerWaals {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "VanDerWaals")
    }
}

impl CubicKind for VanDerWaals {
    const OMEGA_A: f64 = 0.421875;
    const OMEGA_B: f64 = 0.125;

    fn pressure(t: f64, v: f64, a: f64, b: f64) -> f64 {
        RGAS * t / (v - b) - a / (v * v)
    }

    fn zfactor_cubic_eq(a: f64, b: f64) -> CubicEquation {
        CubicEquation::new(-b - 1.0, a, -a * b)
    }

    fn ln_fugacity_coeff(z: f64, a: f64, b: f64) -> f64 {
        -(z - b).ln() - a / z + z - 1.0
    }

    fn residual_enthalpy(z: f64, t: f64, a: f64, _: f64, _: f64) -> f64 {
        RGAS * t * (z - 1.0 - a / z)
    }

    fn residual_entropy(z: f64, _: f64, b: f64, _: f64) -> f64 {
        RGAS * (z - b).ln()
    }

    fn residual_helmholtz_energy(z: f64, t: f64, a: f64, b: f64) -> f64 {
        RGAS * t * ((z - b).ln() + a / z)
    }

    fn from_acentric_factor(_: f64) -> Self {
        Self
    }

    fn correction(&self, _: f64) -> Option<Correction> {
        None
    }
}

/// Van der Waals equation of state for a substance with critical pressure `pc`
/// and critical temperature `tc`.
pub fn make_van_der_waals_eos(pc: f64, tc: f64) -> EosResult<CubicEos<VanDerWaals>> {
    CubicEos::new(pc, tc, VanDerWaals)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn critical_point_is_triple_root() -> EosResult<()> {
        let eos = make_van_der_waals_eos(4.6e6, 190.6)?;
        let z = eos.zfactor(4.6e6, 190.6);
        assert!(!z.is_empty());
        for zi in z {
            assert_relative_eq!(zi, 0.375, max_relative = 1e-12);
        }
        Ok(())
    }

    #[test]
    fn temperature_independent_attraction() -> EosResult<()> {
        let eos = make_van_der_waals_eos(4.6e6, 190.6)?;
        assert_eq!(eos.isothermal_line(100.0).attraction_param(), eos.attraction_param());
        assert_eq!(eos.isobaric_isothermal_state(1e5, 100.0).beta(), 0.0);
        Ok(())
    }

    #[test]
    fn ideal_gas_limit() {
        let z = 1.0 - 1e-12;
        assert_relative_eq!(VanDerWaals::ln_fugacity_coeff(z, 0.0, 0.0), 0.0, epsilon = 1e-10);
        assert_relative_eq!(VanDerWaals::residual_entropy(1.0, 0.0, 0.0, 0.0), 0.0);
    }
}
