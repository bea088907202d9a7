//! Geometric mean distance between cable parts.
//!
//! Each part is represented as a set of sub-elements (wire centers for a
//! wire array, a single axis point for concentric parts) weighted by area;
//! the GMD is the area-weighted geometric mean of the pairwise distances,
//! evaluated in log space for stability.

use lc_core::constants::TOL;
use lc_core::scalar::Scalar;
use std::f64::consts::PI;

/// One sub-element of a part: a point with an associated area weight.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SubElement<T> {
    pub x: T,
    pub y: T,
    pub area: T,
}

impl<T: Scalar> SubElement<T> {
    pub fn new(x: T, y: T, area: T) -> Self {
        Self { x, y, area }
    }
}

/// Centers of the wires of an array laid on a circle around `(center_x, center_y)`.
///
/// The lay radius is r_in + r_wire; a single wire sits on the axis itself.
pub fn wire_centers<T: Scalar>(
    center_x: T,
    center_y: T,
    radius_in: T,
    radius_wire: T,
    num_wires: u32,
) -> Vec<(T, T)> {
    let lay_radius = if num_wires == 1 {
        T::zero()
    } else {
        radius_in + radius_wire
    };
    let angle_step = 2.0 * PI / f64::from(num_wires);
    (0..num_wires)
        .map(|i| {
            let angle = T::from_f64(angle_step * f64::from(i));
            (
                center_x + lay_radius * angle.cos(),
                center_y + lay_radius * angle.sin(),
            )
        })
        .collect()
}

/// Log-area-weighted geometric mean distance between two sub-element sets.
///
/// ln GMD = Σᵢⱼ sᵢ·sⱼ·ln dᵢⱼ / Σᵢⱼ sᵢ·sⱼ
///
/// Coincident sub-elements (concentric parts) contribute
/// ln(max(r_outer_p, r_outer_q)) instead of a singular log.
pub fn geometric_mean_distance<T: Scalar>(
    p: &[SubElement<T>],
    q: &[SubElement<T>],
    r_outer_p: T,
    r_outer_q: T,
) -> T {
    let concentric = r_outer_p.max(r_outer_q).ln();
    let mut weighted_logs = T::zero();
    let mut weights = T::zero();
    for a in p {
        for b in q {
            let distance = (a.x - b.x).hypot(a.y - b.y);
            let log_d = if distance.value() < TOL {
                concentric
            } else {
                distance.ln()
            };
            let w = a.area * b.area;
            weighted_logs = weighted_logs + w * log_d;
            weights = weights + w;
        }
    }
    (weighted_logs / weights).exp()
}
