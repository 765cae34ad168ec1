use crate::cubic_eos::{CubicEos, CubicKind};
use crate::errors::{EosError, EosResult};
use crate::{SolverOptions, Verbosity};
use std::fmt;

const MAX_ITER_FLASH: usize = 100;
const TOL_FLASH: f64 = 1e-6;

/// Outcome of a vapor pressure calculation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FlashStatus {
    /// The fugacity coefficients of both phases agree within the tolerance.
    Success,
    /// The tolerance was not reached within the maximum number of iterations.
    MaxIterReached,
    /// The current pressure does not lie in the two-phase region.
    MultipleRootsNotFound,
}

impl fmt::Display for FlashStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let str = match self {
            Self::Success => "success",
            Self::MaxIterReached => "max_iter_reached",
            Self::MultipleRootsNotFound => "multiple_roots_not_found",
        };
        write!(f, "{str}")
    }
}

/// Residual, number of iterations and status of a flash calculation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IterReport {
    pub residual: f64,
    pub iter: usize,
    pub status: FlashStatus,
}

impl IterReport {
    pub fn is_success(&self) -> bool {
        self.status == FlashStatus::Success
    }

    /// Convert an unsuccessful report into an error.
    pub fn check(&self) -> EosResult<()> {
        match self.status {
            FlashStatus::Success => Ok(()),
            FlashStatus::MaxIterReached => Err(EosError::NotConverged(format!(
                "vapor_pressure (residual {:e} after {} iterations)",
                self.residual, self.iter
            ))),
            FlashStatus::MultipleRootsNotFound => Err(EosError::MultipleRootsNotFound(format!(
                "vapor_pressure (iteration {})",
                self.iter
            ))),
        }
    }
}

impl fmt::Display for IterReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "IterReport(status={}, iter={}, residual={:e})",
            self.status, self.iter, self.residual
        )
    }
}

/// Successive substitution solver for the vapor pressure of a pure component.
///
/// Starting from an initial pressure, the pressure is updated with the ratio
/// of the fugacity coefficients of the liquid (smallest root) and the vapor
/// (largest root) until both coincide:
///
/// $$p^{(k+1)} = p^{(k)}\frac{\varphi^\mathrm{L}}{\varphi^\mathrm{V}}$$
#[derive(Clone, Debug)]
pub struct Flash<K> {
    eos: CubicEos<K>,
    tol: f64,
    max_iter: usize,
    verbosity: Verbosity,
}

/// Create a flash solver with default tolerance and iteration limit.
pub fn make_flash<K: CubicKind>(eos: CubicEos<K>) -> Flash<K> {
    Flash::new(eos)
}

impl<K: CubicKind> Flash<K> {
    /// Create a flash solver with tolerance 1e-6 and at most 100 iterations.
    pub fn new(eos: CubicEos<K>) -> Self {
        Self::with_options(eos, SolverOptions::default())
    }

    pub fn with_options(eos: CubicEos<K>, options: SolverOptions) -> Self {
        let (max_iter, tol, verbosity) = options.unwrap_or(MAX_ITER_FLASH, TOL_FLASH);
        Self {
            eos,
            tol,
            max_iter,
            verbosity,
        }
    }

    pub fn eos(&self) -> &CubicEos<K> {
        &self.eos
    }

    pub fn tolerance(&self) -> f64 {
        self.tol
    }

    pub fn set_tolerance(&mut self, tol: f64) {
        self.tol = tol;
    }

    pub fn max_iter(&self) -> usize {
        self.max_iter
    }

    pub fn set_max_iter(&mut self, max_iter: usize) {
        self.max_iter = max_iter;
    }

    pub fn verbosity(&self) -> Verbosity {
        self.verbosity
    }

    pub fn set_verbosity(&mut self, verbosity: Verbosity) {
        self.verbosity = verbosity;
    }

    /// Calculate the vapor pressure at temperature `t`.
    ///
    /// The returned pressure is 0 unless the status of the report is
    /// [FlashStatus::Success]. A converged result requires a subcritical
    /// temperature and an initial pressure inside the two-phase region,
    /// e.g. from [estimate_vapor_pressure](super::estimate_vapor_pressure).
    pub fn vapor_pressure(&self, p_init: f64, t: f64) -> (f64, IterReport) {
        let verbosity = self.verbosity;
        let mut p = p_init;
        let mut residual = 1.0;
        let mut iter = 0;

        log_iter!(
            verbosity,
            " iter |    residual    |     pressure     |   liquid Z   |    vapor Z"
        );
        log_iter!(verbosity, "{:-<72}", "");
        log_iter!(verbosity, " {:4} |                | {:16.8e} |", iter, p);

        while residual > self.tol && iter < self.max_iter {
            let state = self.eos.isobaric_isothermal_state(p, t);
            let roots = state.zfactor();
            let (z_liq, z_vap) = match roots.as_slice() {
                [z_liq, .., z_vap] => (*z_liq, *z_vap),
                _ => {
                    let report = IterReport {
                        residual,
                        iter,
                        status: FlashStatus::MultipleRootsNotFound,
                    };
                    log_result!(
                        verbosity,
                        "Flash::vapor_pressure: single root at p = {:e}, T = {} in iteration {}\n",
                        p,
                        t,
                        iter
                    );
                    return (0.0, report);
                }
            };

            let ratio = state.fugacity_coeff(z_liq) / state.fugacity_coeff(z_vap);
            residual = (1.0 - ratio).abs();
            p *= ratio;
            iter += 1;
            log_iter!(
                verbosity,
                " {:4} | {:14.8e} | {:16.8e} | {:12.8} | {:12.8}",
                iter,
                residual,
                p,
                z_liq,
                z_vap
            );
        }

        if iter >= self.max_iter {
            log_result!(
                verbosity,
                "Flash::vapor_pressure: no convergence after {} step(s), residual {:e}\n",
                iter,
                residual
            );
            let report = IterReport {
                residual,
                iter,
                status: FlashStatus::MaxIterReached,
            };
            (0.0, report)
        } else {
            log_result!(
                verbosity,
                "Flash::vapor_pressure: calculation converged in {} step(s)\n",
                iter
            );
            let report = IterReport {
                residual,
                iter,
                status: FlashStatus::Success,
            };
            (p, report)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_check() {
        let mut report = IterReport {
            residual: 1e-8,
            iter: 12,
            status: FlashStatus::Success,
        };
        assert!(report.is_success());
        assert!(report.check().is_ok());

        report.status = FlashStatus::MaxIterReached;
        assert!(!report.is_success());
        assert!(matches!(report.check(), Err(EosError::NotConverged(_))));

        report.status = FlashStatus::MultipleRootsNotFound;
        assert!(matches!(
            report.check(),
            Err(EosError::MultipleRootsNotFound(_))
        ));
    }

    #[test]
    fn status_display() {
        assert_eq!(FlashStatus::Success.to_string(), "success");
        assert_eq!(
            FlashStatus::MultipleRootsNotFound.to_string(),
            "multiple_roots_not_found"
        );
        let report = IterReport {
            residual: 0.5,
            iter: 3,
            status: FlashStatus::MaxIterReached,
        };
        assert_eq!(
            report.to_string(),
            "IterReport(status=max_iter_reached, iter=3, residual=5e-1)"
        );
    }
}
