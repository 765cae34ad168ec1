//! Cubic equations of state for pure substances.
//!
//! # Example: vapor pressure of methane using Peng-Robinson
//!
//! ```
//! # use cubic_eos::core::EosError;
//! use cubic_eos::core::{estimate_vapor_pressure, make_flash};
//! use cubic_eos::make_peng_robinson_eos;
//!
//! let (pc, tc, omega) = (4.6e6, 190.6, 0.008);
//! let eos = make_peng_robinson_eos(pc, tc, omega)?;
//!
//! // Initialize the flash with the Wilson equation.
//! let t = 150.0;
//! let p_init = estimate_vapor_pressure(t, pc, tc, omega)?;
//! let (p, report) = make_flash(eos).vapor_pressure(p_init, t);
//! report.check()?;
//!
//! // Liquid and vapor have the same fugacity coefficient.
//! let state = eos.isobaric_isothermal_state(p, t);
//! let z = state.zfactor();
//! let (phi_l, phi_v) = (state.fugacity_coeff(z[0]), state.fugacity_coeff(z[2]));
//! assert!((phi_l / phi_v - 1.0).abs() < 1e-5);
//! println!("vapor pressure at {t} K: {p} Pa ({report})");
//! # Ok::<(), EosError>(())
//! ```
#![warn(clippy::all)]

pub use cubic_eos_core as core;

mod peng_robinson;
mod soave_redlich_kwong;
mod van_der_waals;
pub use peng_robinson::{make_peng_robinson_eos, PengRobinson};
pub use soave_redlich_kwong::{make_soave_redlich_kwong_eos, SoaveRedlichKwong};
pub use van_der_waals::{make_van_der_waals_eos, VanDerWaals};
