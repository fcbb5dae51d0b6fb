//! # VSOP87 periodic-series evaluator
//!
//! Turns a [`CoefficientTable`] into a rectangular position at a given time:
//!
//! ```text
//! t        = jT / 10                                   (Julian millennia)
//! S_a,k    = Σ_i A_i · cos(B_i + C_i · t)              (a ∈ {X, Y, Z}, k ∈ 0..=5)
//! a(t)     = S_a,0 + S_a,1·t + S_a,2·t² + … + S_a,5·t⁵
//! ```
//!
//! The 18 partial sums are independent reductions. [`evaluate`] computes them as fork-join tasks
//! on the global `rayon` pool, [`evaluate_sequential`] on the calling thread. Both feed the same
//! fixed combination step so they return bit-identical vectors.
//!
//! The time derivative of the series is available in closed form through [`evaluate_rate`] and
//! [`evaluate_rate_sequential`], expressed in AU/day.

use nalgebra::Vector3;
use rayon::prelude::*;

use crate::{
    constants::{JulianCentury, JULIAN_DAYS_PER_MILLENNIUM},
    ref_system::Axis,
    time::jt_to_millennia,
    vsop87::table::{CoefficientTable, Term, POWERS},
};

/// Sum of the terms of one series, folded in table order.
#[inline]
fn partial_sum(terms: &[Term], t10: f64) -> f64 {
    terms.iter().fold(0.0, |acc, term| acc + term.value(t10))
}

/// Sum of the terms of one series and of their time derivatives.
#[inline]
fn partial_sum_and_rate(terms: &[Term], t10: f64) -> (f64, f64) {
    terms.iter().fold((0.0, 0.0), |(value, rate), term| {
        let (v, r) = term.value_and_rate(t10);
        (value + v, rate + r)
    })
}

/// Combine the partial sums of one axis as `Σ_k S_k · t^k`, in ascending `k`.
#[inline]
fn combine(partials: &[f64; POWERS], t10: f64) -> f64 {
    let mut value = 0.0;
    let mut tk = 1.0;
    for partial in partials {
        value += partial * tk;
        tk *= t10;
    }
    value
}

/// Derivative of `Σ_k S_k · t^k` with respect to `t`, in ascending `k`.
#[inline]
fn combine_rate(partials: &[(f64, f64); POWERS], t10: f64) -> f64 {
    let mut rate = 0.0;
    let mut tk = 1.0;
    let mut tk_minus_one = 0.0;
    for (k, (value, value_rate)) in partials.iter().enumerate() {
        rate += value_rate * tk + k as f64 * value * tk_minus_one;
        tk_minus_one = tk;
        tk *= t10;
    }
    rate
}

/// Evaluate a VSOP87 table at `jt`, computing the partial sums in parallel.
///
/// Arguments
/// ---------
/// * `table`: the coefficient table of the body.
/// * `jt`: Julian centuries since J2000.0.
///
/// Return
/// ------
/// * The rectangular vector `(X, Y, Z)` in AU, in the frame of the table
///   (heliocentric ecliptic J2000 for VSOP87A).
///
/// Remarks
/// -------
/// * Each of the 3 × 6 series is reduced by its own task; the reductions are joined in a fixed
///   order before being combined, so the result is identical to [`evaluate_sequential`].
/// * Empty series contribute zero.
pub fn evaluate(table: &CoefficientTable, jt: JulianCentury) -> Vector3<f64> {
    let t10 = jt_to_millennia(jt);

    let axes: Vec<f64> = Axis::ALL
        .par_iter()
        .map(|&axis| {
            let sums: Vec<f64> = (0..POWERS)
                .into_par_iter()
                .map(|power| partial_sum(table.series(axis, power), t10))
                .collect();
            combine(&to_powers(&sums), t10)
        })
        .collect();

    Vector3::new(axes[0], axes[1], axes[2])
}

/// Evaluate a VSOP87 table at `jt` on the calling thread.
///
/// Reference reduction for [`evaluate`]: same partial sums, same combination order.
pub fn evaluate_sequential(table: &CoefficientTable, jt: JulianCentury) -> Vector3<f64> {
    let t10 = jt_to_millennia(jt);

    let mut position = Vector3::zeros();
    for axis in Axis::ALL {
        let sums: [f64; POWERS] =
            std::array::from_fn(|power| partial_sum(table.series(axis, power), t10));
        position[axis.index()] = combine(&sums, t10);
    }
    position
}

/// Evaluate the time derivative of a VSOP87 table at `jt`, in parallel.
///
/// Return
/// ------
/// * The velocity `(dX/dt, dY/dt, dZ/dt)` in AU/day.
pub fn evaluate_rate(table: &CoefficientTable, jt: JulianCentury) -> Vector3<f64> {
    let t10 = jt_to_millennia(jt);

    let axes: Vec<f64> = Axis::ALL
        .par_iter()
        .map(|&axis| {
            let sums: Vec<(f64, f64)> = (0..POWERS)
                .into_par_iter()
                .map(|power| partial_sum_and_rate(table.series(axis, power), t10))
                .collect();
            combine_rate(&to_powers(&sums), t10)
        })
        .collect();

    Vector3::new(axes[0], axes[1], axes[2]) / JULIAN_DAYS_PER_MILLENNIUM
}

/// Evaluate the time derivative of a VSOP87 table at `jt` on the calling thread.
pub fn evaluate_rate_sequential(table: &CoefficientTable, jt: JulianCentury) -> Vector3<f64> {
    let t10 = jt_to_millennia(jt);

    let mut velocity = Vector3::zeros();
    for axis in Axis::ALL {
        let sums: [(f64, f64); POWERS] =
            std::array::from_fn(|power| partial_sum_and_rate(table.series(axis, power), t10));
        velocity[axis.index()] = combine_rate(&sums, t10);
    }
    velocity / JULIAN_DAYS_PER_MILLENNIUM
}

fn to_powers<T: Copy + Default>(sums: &[T]) -> [T; POWERS] {
    std::array::from_fn(|power| sums.get(power).copied().unwrap_or_default())
}
