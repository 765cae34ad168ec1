use approx::assert_relative_eq;
use cubic_eos::core::{AlphaFunction, CubicEos, CubicKind, EosError, EosResult, RGAS};
use cubic_eos::{
    make_peng_robinson_eos, make_soave_redlich_kwong_eos, make_van_der_waals_eos, PengRobinson,
};
use num_dual::{first_derivative, Dual64};

const METHANE: (f64, f64, f64) = (4.6e6, 190.6, 0.008);
const PROPANE: (f64, f64, f64) = (4.248e6, 369.8, 0.152);

fn vapor_ln_fugacity_coeff<K: CubicKind>(eos: &CubicEos<K>, p: f64, t: f64) -> f64 {
    let state = eos.isobaric_isothermal_state(p, t);
    let z = state.zfactor();
    state.ln_fugacity_coeff(z[z.len() - 1])
}

/// $H^\mathrm{res} = -RT^2\left(\frac{\partial\ln\varphi}{\partial T}\right)_p$
fn check_enthalpy_derivative<K: CubicKind>(eos: &CubicEos<K>, p: f64, t: f64) {
    let h = 1e-3;
    let lnphi_plus = vapor_ln_fugacity_coeff(eos, p, t + h);
    let lnphi_minus = vapor_ln_fugacity_coeff(eos, p, t - h);
    let dlnphi_dt = (lnphi_plus - lnphi_minus) / (2.0 * h);
    let state = eos.isobaric_isothermal_state(p, t);
    let z = state.zfactor();
    assert_relative_eq!(
        state.residual_enthalpy(z[z.len() - 1]),
        -RGAS * t * t * dlnphi_dt,
        max_relative = 1e-6
    );
}

/// Residual properties of every root satisfy $G = H - TS$ and $G + A = RT(Z-1)$.
fn check_residual_relations<K: CubicKind>(eos: &CubicEos<K>, p: f64, t: f64) {
    let state = eos.isobaric_isothermal_state(p, t);
    for z in state.zfactor() {
        let g = state.residual_gibbs_energy(z);
        assert_relative_eq!(
            g,
            state.residual_enthalpy(z) - t * state.residual_entropy(z),
            epsilon = 1e-9,
            max_relative = 1e-9
        );
        assert_relative_eq!(
            g + state.residual_helmholtz_energy(z),
            RGAS * t * (z - 1.0),
            epsilon = 1e-9,
            max_relative = 1e-9
        );
        assert_relative_eq!(state.fugacity_coeff(z), state.ln_fugacity_coeff(z).exp());
    }
}

#[test]
fn two_phase_zfactor() -> EosResult<()> {
    let (pc, tc, omega) = METHANE;
    let eos = make_peng_robinson_eos(pc, tc, omega)?;
    let state = eos.isobaric_isothermal_state(1.04e6, 150.0);
    let z = state.zfactor();
    assert_eq!(z.len(), 3);
    assert!(z.windows(2).all(|w| w[0] < w[1]));
    assert!(z[0] > state.reduced_repulsion_param());
    assert_relative_eq!(z[0], 0.0344264382556, max_relative = 1e-8);
    assert_relative_eq!(z[2], 0.8167230577815, max_relative = 1e-8);
    Ok(())
}

#[test]
fn supercritical_zfactor() -> EosResult<()> {
    let (pc, tc, omega) = METHANE;
    let eos = make_peng_robinson_eos(pc, tc, omega)?;
    assert_eq!(eos.zfactor(pc, 250.0).len(), 1);
    assert_eq!(eos.zfactor(1e5, 250.0).len(), 1);
    Ok(())
}

#[test]
fn molar_volume_reproduces_pressure() -> EosResult<()> {
    let (pc, tc, omega) = METHANE;
    let pr = make_peng_robinson_eos(pc, tc, omega)?;
    let srk = make_soave_redlich_kwong_eos(pc, tc, omega)?;
    let vdw = make_van_der_waals_eos(pc, tc)?;
    let (p, t) = (1.04e6, 150.0);

    let state = pr.isobaric_isothermal_state(p, t);
    for z in state.zfactor() {
        assert_relative_eq!(pr.pressure(t, state.molar_volume(z)), p, max_relative = 1e-10);
    }
    let state = srk.isobaric_isothermal_state(p, t);
    for z in state.zfactor() {
        assert_relative_eq!(srk.pressure(t, state.molar_volume(z)), p, max_relative = 1e-10);
    }
    let state = vdw.isobaric_isothermal_state(p, t);
    for z in state.zfactor() {
        assert_relative_eq!(vdw.pressure(t, state.molar_volume(z)), p, max_relative = 1e-10);
    }
    Ok(())
}

#[test]
fn isothermal_line() -> EosResult<()> {
    let (pc, tc, omega) = METHANE;
    let eos = make_peng_robinson_eos(pc, tc, omega)?;
    let t = 150.0;
    let line = eos.isothermal_line(t);
    assert_eq!(line.temperature(), t);
    assert_eq!(line.repulsion_param(), eos.repulsion_param());
    assert_relative_eq!(
        line.attraction_param(),
        eos.kind().alpha(t / tc) * eos.attraction_param()
    );
    for v in [5e-5, 1e-4, 1e-3, 1e-2] {
        assert_eq!(line.pressure(v), eos.pressure(t, v));
    }
    // ideal gas limit
    assert_relative_eq!(eos.pressure(t, 1e3), RGAS * t / 1e3, max_relative = 1e-6);
    Ok(())
}

#[test]
fn with_params() -> EosResult<()> {
    let (pc, tc, omega) = METHANE;
    let (pc2, tc2, _) = PROPANE;
    let eos = make_peng_robinson_eos(pc, tc, omega)?.with_params(pc2, tc2)?;
    assert_eq!(eos.reduced_pressure(pc2), 1.0);
    assert_eq!(eos.reduced_temperature(tc2), 1.0);
    assert_eq!(eos, make_peng_robinson_eos(pc2, tc2, omega)?);
    assert_relative_eq!(
        eos.attraction_param(),
        CubicEos::<PengRobinson>::critical_attraction_param(pc2, tc2)
    );
    assert!(matches!(
        eos.with_params(-1.0, tc2),
        Err(EosError::InvalidState(..))
    ));
    assert!(make_van_der_waals_eos(pc, f64::NAN).is_err());
    Ok(())
}

#[test]
fn reduced_parameters() -> EosResult<()> {
    let (pc, tc, omega) = METHANE;
    let eos = make_peng_robinson_eos(pc, tc, omega)?;
    let state = eos.isobaric_isothermal_state(pc, tc);
    assert_relative_eq!(state.reduced_attraction_param(), PengRobinson::OMEGA_A);
    assert_relative_eq!(state.reduced_repulsion_param(), PengRobinson::OMEGA_B);
    assert_relative_eq!(state.beta(), -eos.kind().m());

    let (p, t) = (2e6, 160.0);
    let state = eos.isobaric_isothermal_state(p, t);
    let (pr, tr) = (p / pc, t / tc);
    assert_relative_eq!(
        state.reduced_attraction_param(),
        eos.kind().alpha(tr) * CubicEos::<PengRobinson>::reduced_attraction_param(pr, tr)
    );
    assert_relative_eq!(
        state.reduced_repulsion_param(),
        eos.repulsion_param() * p / (RGAS * t),
        max_relative = 1e-14
    );
    Ok(())
}

#[test]
fn peng_robinson_beta() {
    let pr = PengRobinson::new(METHANE.2);
    for tr in [0.5, 0.787, 1.0, 1.5] {
        let (alpha, dalpha) = first_derivative(|t: Dual64| pr.alpha(t), tr);
        assert_relative_eq!(pr.beta(tr), tr * dalpha / alpha, max_relative = 1e-12);
    }
}

#[test]
fn residual_enthalpy() -> EosResult<()> {
    let (pc, tc, omega) = METHANE;
    check_enthalpy_derivative(&make_peng_robinson_eos(pc, tc, omega)?, 1e5, 150.0);
    check_enthalpy_derivative(&make_van_der_waals_eos(pc, tc)?, 1e5, 150.0);
    let (pc, tc, omega) = PROPANE;
    check_enthalpy_derivative(&make_soave_redlich_kwong_eos(pc, tc, omega)?, 1e5, 300.0);
    Ok(())
}

#[test]
fn residual_relations() -> EosResult<()> {
    let (pc, tc, omega) = METHANE;
    check_residual_relations(&make_peng_robinson_eos(pc, tc, omega)?, 1.04e6, 150.0);
    check_residual_relations(&make_soave_redlich_kwong_eos(pc, tc, omega)?, 1.04e6, 150.0);
    check_residual_relations(&make_van_der_waals_eos(pc, tc)?, 1.5e6, 150.0);
    check_residual_relations(&make_peng_robinson_eos(pc, tc, omega)?, 1e7, 250.0);
    Ok(())
}

#[test]
fn invalid_root_is_not_finite() -> EosResult<()> {
    let (pc, tc, omega) = METHANE;
    let state = make_peng_robinson_eos(pc, tc, omega)?.isobaric_isothermal_state(1e6, 150.0);
    let b = state.reduced_repulsion_param();
    assert!(!state.ln_fugacity_coeff(0.5 * b).is_finite());
    assert!(!state.residual_entropy(b).is_finite());
    Ok(())
}
