//! The per-frequency assembly loop.
//!
//! Validates the problem, flattens the system, obtains earth properties
//! per frequency (through an EHEM reduction when configured, otherwise
//! from the topmost earth layer), assembles Z and Y, Kron-eliminates
//! grounded conductors and stacks the results into
//! [`LineParameters`] tensors.

use crate::admittance::self_admittance;
use crate::flatten::{FlatConductor, flatten};
use crate::impedance::{mutual_impedance, self_impedance};
use crate::kron::kron_reduce;
use crate::line_parameters::LineParameters;
use lc_core::constants::{F_QUASI_TEM, TOL};
use lc_core::error::{LcError, LcResult};
use lc_core::scalar::Scalar;
use lc_earth::ehem::EhemFormulation;
use lc_earth::formulation::LayerProperties;
use lc_earth::model::EarthModel;
use lc_model::system::LineCableSystem;
use ndarray::Array3;
use num_complex::Complex;

/// Everything the engine needs for one computation.
#[derive(Debug)]
pub struct Problem<'a, T: Scalar> {
    pub system: &'a LineCableSystem<T>,
    /// Operating conductor temperature (°C)
    pub temperature: T,
    pub earth_model: &'a EarthModel<T>,
    pub frequencies: &'a [f64],
}

/// Earth-return impedance variants. The uniform equivalent-depth term is
/// the built-in; Carson/Pollaczek-family integrals plug in here.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub enum EarthReturn {
    #[default]
    UniformDepth,
}

/// Selection of active sub-formulations.
#[derive(Debug)]
pub struct FormulationSet<T: Scalar> {
    pub earth_return: EarthReturn,
    /// Optional reduction of the layered earth to a homogeneous one
    pub ehem: Option<Box<dyn EhemFormulation<T>>>,
    /// Skip the Kron reduction and return per-conductor tensors
    pub raw_output: bool,
}

impl<T: Scalar> Default for FormulationSet<T> {
    fn default() -> Self {
        Self {
            earth_return: EarthReturn::default(),
            ehem: None,
            raw_output: false,
        }
    }
}

/// Compute the per-unit-length parameter tensors for a cable system.
pub fn compute<T: Scalar>(
    problem: &Problem<'_, T>,
    options: &FormulationSet<T>,
) -> LcResult<LineParameters<T>> {
    validate(problem)?;
    if let Some(&f_max) = problem.frequencies.last()
        && f_max > F_QUASI_TEM
    {
        log::warn!(
            "maximum frequency {f_max:.3e} Hz exceeds the quasi-TEM validity limit {F_QUASI_TEM:.1e} Hz"
        );
    }

    let rows = flatten(problem.system)?;
    let n = rows.len();
    let n_freq = problem.frequencies.len();

    let earth: LayerProperties<T> = match &options.ehem {
        Some(ehem) => ehem.reduce(problem.earth_model)?,
        None => {
            let top = &problem.earth_model.earth_layers()[0];
            LayerProperties {
                rho: top.rho.clone(),
                eps: top.eps.clone(),
                mu: top.mu.clone(),
            }
        }
    };

    let keep: Vec<bool> = rows.iter().map(|r| r.phase > 0).collect();
    let out_rows = output_rows(&rows, options.raw_output)?;
    let out_n = out_rows.len();

    let zero = Complex::new(T::zero(), T::zero());
    let mut z_out = Array3::from_elem((out_n, out_n, n_freq), zero);
    let mut y_out = Array3::from_elem((out_n, out_n, n_freq), zero);

    for (k, &f) in problem.frequencies.iter().enumerate() {
        let rho_e = earth.rho[k];

        let z: Vec<Vec<Complex<T>>> = (0..n)
            .map(|i| {
                (0..n)
                    .map(|j| {
                        if i == j {
                            self_impedance(&rows[i], problem.temperature, rho_e, f)
                        } else {
                            mutual_impedance(&rows[i], &rows[j], rho_e, f)
                        }
                    })
                    .collect()
            })
            .collect();
        let y: Vec<Vec<Complex<T>>> = (0..n)
            .map(|i| {
                (0..n)
                    .map(|j| if i == j { self_admittance(&rows[i], f) } else { zero })
                    .collect()
            })
            .collect();

        let (z_red, y_red) = if options.raw_output {
            (z, y)
        } else {
            (kron_reduce(&z, &keep, k)?, kron_reduce(&y, &keep, k)?)
        };

        for (a, &ra) in out_rows.iter().enumerate() {
            for (b, &rb) in out_rows.iter().enumerate() {
                z_out[[ra, rb, k]] = z_red[a][b];
                y_out[[ra, rb, k]] = y_red[a][b];
            }
        }
    }

    LineParameters::new(z_out, y_out)
}

/// Output row index for each surviving matrix row: identity for raw
/// output, ascending phase number (phase p lands at row p−1) after the
/// Kron reduction.
fn output_rows<T: Scalar>(rows: &[FlatConductor<T>], raw: bool) -> LcResult<Vec<usize>> {
    if raw {
        return Ok((0..rows.len()).collect());
    }
    let phases: Vec<usize> = rows.iter().map(|r| r.phase).filter(|&p| p > 0).collect();
    let num_phases = phases.iter().copied().max().unwrap_or(0);
    if num_phases == 0 {
        return Err(LcError::input(
            "every conductor is grounded, nothing remains after reduction",
        ));
    }
    for p in 1..=num_phases {
        let count = phases.iter().filter(|&&q| q == p).count();
        if count != 1 {
            return Err(LcError::input(format!(
                "phase {p} is mapped to {count} conductors; use raw output for unbundled systems"
            )));
        }
    }
    Ok(phases.iter().map(|&p| p - 1).collect())
}

fn validate<T: Scalar>(problem: &Problem<'_, T>) -> LcResult<()> {
    let freqs = problem.frequencies;
    if freqs.is_empty() {
        return Err(LcError::input("frequency vector is empty"));
    }
    if freqs.iter().any(|&f| !(f > 0.0)) {
        return Err(LcError::input("frequencies must be strictly positive"));
    }
    if freqs.windows(2).any(|w| w[1] <= w[0]) {
        return Err(LcError::input("frequencies must be strictly increasing"));
    }
    if problem.earth_model.frequencies() != freqs {
        return Err(LcError::input(format!(
            "earth model has {} frequencies, the problem has {}",
            problem.earth_model.frequencies().len(),
            freqs.len()
        )));
    }

    let positions = problem.system.positions();
    for (i, a) in positions.iter().enumerate() {
        for (j, b) in positions.iter().enumerate().skip(i + 1) {
            let dx = (a.horz - b.horz).value();
            let dy = (a.vert - b.vert).value();
            let distance = dx.hypot(dy);
            let clearance = (a.design.radius_ext() + b.design.radius_ext()).value();
            if distance + TOL < clearance {
                return Err(LcError::input(format!(
                    "cables {i} and {j} overlap: centers {distance:.6} m apart, outer radii sum to {clearance:.6} m"
                )));
            }
        }
    }
    Ok(())
}
