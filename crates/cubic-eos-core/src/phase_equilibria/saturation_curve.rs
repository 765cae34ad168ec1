use super::{estimate_vapor_pressure, Flash};
use crate::cubic_eos::CubicKind;
use ndarray::{Array1, ArrayView1};
#[cfg(feature = "rayon")]
use ndarray::Axis;
#[cfg(feature = "rayon")]
use rayon::{prelude::*, ThreadPool};

/// Vapor pressures of a pure component at a set of temperatures.
#[derive(Clone, Debug, PartialEq)]
pub struct SaturationCurve {
    pub temperature: Array1<f64>,
    pub pressure: Array1<f64>,
}

impl SaturationCurve {
    fn from_points(points: Vec<(f64, f64)>) -> Self {
        let (temperature, pressure): (Vec<_>, Vec<_>) = points.into_iter().unzip();
        Self {
            temperature: Array1::from_vec(temperature),
            pressure: Array1::from_vec(pressure),
        }
    }

    pub fn len(&self) -> usize {
        self.temperature.len()
    }

    pub fn is_empty(&self) -> bool {
        self.temperature.is_empty()
    }
}

impl<K: CubicKind> Flash<K> {
    fn solve_temperatures(&self, temperatures: ArrayView1<f64>, omega: f64) -> Vec<(f64, f64)> {
        let eos = self.eos();
        let (pc, tc) = (eos.critical_pressure(), eos.critical_temperature());
        temperatures
            .iter()
            .filter_map(|&t| {
                let p_init = estimate_vapor_pressure(t, pc, tc, omega).ok()?;
                let (p, report) = self.vapor_pressure(p_init, t);
                report.is_success().then_some((t, p))
            })
            .collect()
    }

    /// Calculate the vapor pressure at every temperature.
    ///
    /// Each calculation is initialized with the Wilson equation using the
    /// acentric factor `omega`. Supercritical and unconverged points are
    /// not part of the result.
    pub fn saturation_curve(&self, temperatures: ArrayView1<f64>, omega: f64) -> SaturationCurve {
        SaturationCurve::from_points(self.solve_temperatures(temperatures, omega))
    }
}

#[cfg(feature = "rayon")]
impl<K: CubicKind + Send + Sync> Flash<K> {
    /// Calculate the saturation curve in parallel on the given thread pool.
    ///
    /// The temperatures are distributed in chunks of size `chunksize`.
    pub fn par_saturation_curve(
        &self,
        temperatures: ArrayView1<f64>,
        omega: f64,
        chunksize: usize,
        thread_pool: &ThreadPool,
    ) -> SaturationCurve {
        let points: Vec<(f64, f64)> = thread_pool.install(|| {
            temperatures
                .axis_chunks_iter(Axis(0), chunksize)
                .into_par_iter()
                .flat_map_iter(|t| self.solve_temperatures(t, omega))
                .collect()
        });
        SaturationCurve::from_points(points)
    }
}
