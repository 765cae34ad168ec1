//! Generic two-parameter cubic equation of state.
//!
//! A concrete equation of state is a [CubicKind]: it supplies the universal
//! constants $\Omega_a$ and $\Omega_b$ and the closed-form expressions for the
//! pressure, the cubic equation of the compressibility factor, the fugacity
//! coefficient and the residual properties. [CubicEos] combines a kind with
//! the critical constants of a substance and reduces pressure and temperature
//! to the dimensionless parameters
//!
//! $$A = \Omega_a \alpha(T_r) \frac{p_r}{T_r^2},\qquad B = \Omega_b \frac{p_r}{T_r}$$
//!
//! that enter the expressions of the kind.
use crate::errors::{EosError, EosResult};
use crate::math::CubicEquation;
use crate::parameter::CriticalRecord;
use crate::RGAS;
use num_dual::{first_derivative, Dual64, DualNum};
use std::fmt;

mod state;
pub use state::{IsobaricIsothermalState, IsothermalLine};

/// Temperature dependence $\alpha(T_r)$ of the attraction parameter.
pub trait AlphaFunction {
    /// Correction factor of the attraction parameter with $\alpha(1) = 1$.
    fn alpha<D: DualNum<f64> + Copy>(&self, reduced_temperature: D) -> D;

    /// $\beta = \frac{\mathrm{d} \ln \alpha}{\mathrm{d} \ln T}$
    ///
    /// The default implementation differentiates [AlphaFunction::alpha]
    /// using dual numbers.
    fn beta(&self, reduced_temperature: f64) -> f64 {
        let (alpha, dalpha) =
            first_derivative(|tr: Dual64| self.alpha(tr), reduced_temperature);
        reduced_temperature * dalpha / alpha
    }
}

/// Temperature correction of a kind at a given reduced temperature.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Correction {
    pub alpha: f64,
    pub beta: f64,
}

impl Correction {
    /// Evaluate `alpha` and `beta` of an alpha function.
    pub fn new<A: AlphaFunction>(alpha_function: &A, reduced_temperature: f64) -> Self {
        Self {
            alpha: alpha_function.alpha(reduced_temperature),
            beta: alpha_function.beta(reduced_temperature),
        }
    }
}

/// Closed-form expressions of a specific cubic equation of state.
///
/// In the functions below, `t` is the temperature, `v` the molar volume,
/// `a` and `b` the attraction and repulsion parameters (reduced
/// parameters $A$ and $B$ for all functions of the compressibility factor `z`)
/// and `beta` the temperature correction factor.
pub trait CubicKind: Clone + fmt::Display {
    /// Universal constant of the attraction parameter.
    const OMEGA_A: f64;
    /// Universal constant of the repulsion parameter.
    const OMEGA_B: f64;

    /// Pressure from temperature, molar volume and the (dimensional) parameters.
    fn pressure(t: f64, v: f64, a: f64, b: f64) -> f64;

    /// Cubic equation of the compressibility factor.
    fn zfactor_cubic_eq(a: f64, b: f64) -> CubicEquation;

    /// Natural logarithm of the fugacity coefficient.
    fn ln_fugacity_coeff(z: f64, a: f64, b: f64) -> f64;

    fn fugacity_coeff(z: f64, a: f64, b: f64) -> f64 {
        Self::ln_fugacity_coeff(z, a, b).exp()
    }

    fn residual_enthalpy(z: f64, t: f64, a: f64, b: f64, beta: f64) -> f64;

    fn residual_entropy(z: f64, a: f64, b: f64, beta: f64) -> f64;

    fn residual_helmholtz_energy(z: f64, t: f64, a: f64, b: f64) -> f64;

    /// Build the kind from the acentric factor of a substance.
    ///
    /// Kinds without temperature correction ignore the value.
    fn from_acentric_factor(acentric_factor: f64) -> Self;

    /// `alpha` and `beta` at the reduced temperature or `None` if the kind
    /// has no temperature correction ($\alpha = 1$, $\beta = 0$).
    fn correction(&self, reduced_temperature: f64) -> Option<Correction>;
}

/// A cubic equation of state for a pure substance.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CubicEos<K> {
    /// Critical pressure
    pc: f64,
    /// Critical temperature
    tc: f64,
    /// Critical attraction parameter
    ac: f64,
    /// Critical repulsion parameter
    bc: f64,
    kind: K,
}

impl<K: CubicKind> fmt::Display for CubicEos<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(pc={} Pa, tc={} K)", self.kind, self.pc, self.tc)
    }
}

fn validate(name: &str, value: f64) -> EosResult<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(EosError::InvalidState(
            "CubicEos::new".into(),
            name.into(),
            value,
        ))
    }
}

impl<K: CubicKind> CubicEos<K> {
    /// Create a new equation of state from critical pressure and temperature.
    pub fn new(pc: f64, tc: f64, kind: K) -> EosResult<Self> {
        validate("pc", pc)?;
        validate("tc", tc)?;
        Ok(Self {
            pc,
            tc,
            ac: Self::critical_attraction_param(pc, tc),
            bc: Self::critical_repulsion_param(pc, tc),
            kind,
        })
    }

    /// Create a new equation of state from a parameter record.
    pub fn from_record(record: &CriticalRecord) -> EosResult<Self> {
        Self::new(
            record.pc,
            record.tc,
            K::from_acentric_factor(record.acentric_factor),
        )
    }

    /// Rebuild the equation of state for different critical constants.
    pub fn with_params(&self, pc: f64, tc: f64) -> EosResult<Self> {
        Self::new(pc, tc, self.kind.clone())
    }

    pub fn critical_attraction_param(pc: f64, tc: f64) -> f64 {
        K::OMEGA_A * RGAS * RGAS * tc * tc / pc
    }

    pub fn critical_repulsion_param(pc: f64, tc: f64) -> f64 {
        K::OMEGA_B * RGAS * tc / pc
    }

    /// Reduced attraction parameter without temperature correction.
    pub fn reduced_attraction_param(pr: f64, tr: f64) -> f64 {
        K::OMEGA_A * pr / (tr * tr)
    }

    pub fn reduced_repulsion_param(pr: f64, tr: f64) -> f64 {
        K::OMEGA_B * pr / tr
    }

    pub fn critical_pressure(&self) -> f64 {
        self.pc
    }

    pub fn critical_temperature(&self) -> f64 {
        self.tc
    }

    /// Attraction parameter at the critical point.
    pub fn attraction_param(&self) -> f64 {
        self.ac
    }

    /// Repulsion parameter at the critical point.
    pub fn repulsion_param(&self) -> f64 {
        self.bc
    }

    pub fn kind(&self) -> &K {
        &self.kind
    }

    pub fn reduced_pressure(&self, p: f64) -> f64 {
        p / self.pc
    }

    pub fn reduced_temperature(&self, t: f64) -> f64 {
        t / self.tc
    }

    /// `(alpha, beta)` at the reduced temperature.
    fn alpha_beta(&self, tr: f64) -> (f64, f64) {
        self.kind
            .correction(tr)
            .map_or((1.0, 0.0), |c| (c.alpha, c.beta))
    }

    /// Attraction and repulsion parameters along an isotherm.
    pub fn isothermal_line(&self, t: f64) -> IsothermalLine<K> {
        let (alpha, _) = self.alpha_beta(self.reduced_temperature(t));
        IsothermalLine::new(t, alpha * self.ac, self.bc)
    }

    /// Reduced parameters at a given pressure and temperature.
    pub fn isobaric_isothermal_state(&self, p: f64, t: f64) -> IsobaricIsothermalState<K> {
        let pr = self.reduced_pressure(p);
        let tr = self.reduced_temperature(t);
        let (alpha, beta) = self.alpha_beta(tr);
        let ar = alpha * Self::reduced_attraction_param(pr, tr);
        let br = Self::reduced_repulsion_param(pr, tr);
        IsobaricIsothermalState::new(p, t, ar, br, beta)
    }

    /// Pressure at given temperature and molar volume.
    pub fn pressure(&self, t: f64, v: f64) -> f64 {
        self.isothermal_line(t).pressure(v)
    }

    /// Real roots of the compressibility factor in ascending order.
    pub fn zfactor(&self, p: f64, t: f64) -> Vec<f64> {
        self.isobaric_isothermal_state(p, t).zfactor()
    }
}
