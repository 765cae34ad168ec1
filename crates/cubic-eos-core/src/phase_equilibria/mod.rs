use crate::errors::{EosError, EosResult};

mod saturation_curve;
mod vle_pure;
pub use saturation_curve::SaturationCurve;
pub use vle_pure::{make_flash, Flash, FlashStatus, IterReport};

/// Estimate the vapor pressure of a pure component with the Wilson equation
///
/// $$p = p_c 10^{\frac{7}{3}(1+\omega)\left(1-\frac{T_c}{T}\right)}$$
///
/// The estimate is used as initial value of [Flash::vapor_pressure].
pub fn estimate_vapor_pressure(t: f64, pc: f64, tc: f64, omega: f64) -> EosResult<f64> {
    if t > tc {
        return Err(EosError::SuperCritical);
    }
    Ok(pc * 10f64.powf(7.0 / 3.0 * (1.0 + omega) * (1.0 - tc / t)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn wilson_estimate() -> EosResult<()> {
        let (pc, tc, omega) = (4.6e6, 190.6, 0.008);
        assert_relative_eq!(estimate_vapor_pressure(tc, pc, tc, omega)?, pc);
        // the acentric factor is defined at a reduced temperature of 0.7
        assert_relative_eq!(
            estimate_vapor_pressure(0.7 * tc, pc, tc, 0.0)?,
            0.1 * pc,
            max_relative = 1e-12
        );
        assert!(estimate_vapor_pressure(150.0, pc, tc, omega)? < pc);
        assert!(matches!(
            estimate_vapor_pressure(200.0, pc, tc, omega),
            Err(EosError::SuperCritical)
        ));
        Ok(())
    }
}
