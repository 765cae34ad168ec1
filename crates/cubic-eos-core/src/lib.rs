#![warn(clippy::all)]
#![allow(clippy::many_single_char_names)]
//! Core traits and solvers for two-parameter cubic equations of state.
//!
//! The crate provides
//! - a closed-form solver for the real roots of cubic (and general) polynomials,
//! - the [CubicKind] contract that concrete equations of state implement,
//! - the evaluation core [CubicEos] that reduces pressure and temperature,
//!   builds the cubic equation of the compressibility factor and exposes
//!   fugacity coefficients and residual properties of its roots,
//! - a successive substitution [Flash] for the vapor pressure of pure components.

/// Print messages with level `Verbosity::Iter` or higher.
#[macro_export]
macro_rules! log_iter {
    ($verbosity:expr, $($arg:tt)*) => {
        if $verbosity >= $crate::Verbosity::Iter {
            println!($($arg)*);
        }
    }
}

/// Print messages with level `Verbosity::Result` or higher.
#[macro_export]
macro_rules! log_result {
    ($verbosity:expr, $($arg:tt)*) => {
        if $verbosity >= $crate::Verbosity::Result {
            println!($($arg)*);
        }
    }
}

mod cubic_eos;
mod errors;
pub mod math;
pub mod parameter;
mod phase_equilibria;
pub use cubic_eos::{
    AlphaFunction, Correction, CubicEos, CubicKind, IsobaricIsothermalState, IsothermalLine,
};
pub use errors::{EosError, EosResult};
pub use phase_equilibria::{
    estimate_vapor_pressure, make_flash, Flash, FlashStatus, IterReport, SaturationCurve,
};

/// Universal gas constant in J/(mol K).
///
/// Pressures, temperatures and volumes passed to the equations of state
/// have to be given in the consistent SI units Pa, K and m³/mol.
pub const RGAS: f64 = 8.314462618;

/// Level of detail in the iteration output.
#[derive(Copy, Clone, Debug, PartialOrd, PartialEq, Eq, Default)]
pub enum Verbosity {
    /// Do not print output.
    #[default]
    None,
    /// Print information about the success or failure of the iteration.
    Result,
    /// Print a detailed output for every iteration.
    Iter,
}

/// Options for the iterative solvers.
///
/// If the values are [None], solver specific default
/// values are used.
#[derive(Copy, Clone, Debug, Default)]
pub struct SolverOptions {
    /// Maximum number of iterations.
    pub max_iter: Option<usize>,
    /// Tolerance.
    pub tol: Option<f64>,
    /// Iteration output indicated by the [Verbosity] enum.
    pub verbosity: Verbosity,
}

impl From<(Option<usize>, Option<f64>, Option<Verbosity>)> for SolverOptions {
    fn from(options: (Option<usize>, Option<f64>, Option<Verbosity>)) -> Self {
        Self {
            max_iter: options.0,
            tol: options.1,
            verbosity: options.2.unwrap_or(Verbosity::None),
        }
    }
}

impl SolverOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn max_iter(mut self, max_iter: usize) -> Self {
        self.max_iter = Some(max_iter);
        self
    }

    pub fn tol(mut self, tol: f64) -> Self {
        self.tol = Some(tol);
        self
    }

    pub fn verbosity(mut self, verbosity: Verbosity) -> Self {
        self.verbosity = verbosity;
        self
    }

    pub fn unwrap_or(self, max_iter: usize, tol: f64) -> (usize, f64, Verbosity) {
        (
            self.max_iter.unwrap_or(max_iter),
            self.tol.unwrap_or(tol),
            self.verbosity,
        )
    }
}
