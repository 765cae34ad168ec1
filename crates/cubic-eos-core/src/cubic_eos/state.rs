use super::CubicKind;
use crate::RGAS;
use std::marker::PhantomData;

/// Attraction and repulsion parameters at fixed temperature.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IsothermalLine<K> {
    t: f64,
    a: f64,
    b: f64,
    kind: PhantomData<K>,
}

impl<K: CubicKind> IsothermalLine<K> {
    pub fn new(t: f64, a: f64, b: f64) -> Self {
        Self {
            t,
            a,
            b,
            kind: PhantomData,
        }
    }

    pub fn temperature(&self) -> f64 {
        self.t
    }

    pub fn attraction_param(&self) -> f64 {
        self.a
    }

    pub fn repulsion_param(&self) -> f64 {
        self.b
    }

    /// Pressure at the given molar volume.
    pub fn pressure(&self, v: f64) -> f64 {
        K::pressure(self.t, v, self.a, self.b)
    }
}

/// Reduced parameters of a cubic equation of state at fixed pressure and temperature.
///
/// Properties are evaluated for an explicitly chosen root `z` of [Self::zfactor].
/// Usually the smallest root describes the liquid and the largest root the vapor.
/// No check is made that `z` is a physically meaningful root; for `z <= B`
/// the logarithmic terms evaluate to `NaN`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IsobaricIsothermalState<K> {
    p: f64,
    t: f64,
    ar: f64,
    br: f64,
    beta: f64,
    kind: PhantomData<K>,
}

impl<K: CubicKind> IsobaricIsothermalState<K> {
    pub fn new(p: f64, t: f64, ar: f64, br: f64, beta: f64) -> Self {
        Self {
            p,
            t,
            ar,
            br,
            beta,
            kind: PhantomData,
        }
    }

    pub fn pressure(&self) -> f64 {
        self.p
    }

    pub fn temperature(&self) -> f64 {
        self.t
    }

    /// Reduced attraction parameter $A$ (including the temperature correction).
    pub fn reduced_attraction_param(&self) -> f64 {
        self.ar
    }

    /// Reduced repulsion parameter $B$.
    pub fn reduced_repulsion_param(&self) -> f64 {
        self.br
    }

    /// Temperature correction factor, 0 for kinds without temperature correction.
    pub fn beta(&self) -> f64 {
        self.beta
    }

    /// Real roots of the compressibility factor in ascending order.
    pub fn zfactor(&self) -> Vec<f64> {
        K::zfactor_cubic_eq(self.ar, self.br).real_roots()
    }

    pub fn ln_fugacity_coeff(&self, z: f64) -> f64 {
        K::ln_fugacity_coeff(z, self.ar, self.br)
    }

    pub fn fugacity_coeff(&self, z: f64) -> f64 {
        K::fugacity_coeff(z, self.ar, self.br)
    }

    pub fn residual_enthalpy(&self, z: f64) -> f64 {
        K::residual_enthalpy(z, self.t, self.ar, self.br, self.beta)
    }

    pub fn residual_entropy(&self, z: f64) -> f64 {
        K::residual_entropy(z, self.ar, self.br, self.beta)
    }

    pub fn residual_helmholtz_energy(&self, z: f64) -> f64 {
        K::residual_helmholtz_energy(z, self.t, self.ar, self.br)
    }

    /// Residual Gibbs energy $G^\mathrm{res} = RT\ln\varphi$.
    pub fn residual_gibbs_energy(&self, z: f64) -> f64 {
        RGAS * self.t * self.ln_fugacity_coeff(z)
    }

    /// Molar volume $v = zRT/p$.
    pub fn molar_volume(&self, z: f64) -> f64 {
        z * RGAS * self.t / self.p
    }
}
