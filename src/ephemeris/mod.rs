//! # Ephemeris providers
//!
//! An [`Ephemeris`] maps a time `jT` (Julian centuries since J2000) to a rectangular position in
//! AU, tagged with the [`Metadata`] of the frame it is expressed in. Providers are immutable and
//! referentially transparent: they can be shared behind an `Arc` and evaluated from any number
//! of threads.
//!
//! Providers of the crate:
//!
//! * [`heliocentric::SeriesEphemeris`] – evaluates a VSOP87 [`CoefficientTable`](crate::vsop87::table::CoefficientTable),
//! * [`heliocentric::ZeroEphemeris`] – the origin of the heliocentric frame (the Sun),
//! * [`planets::PlanetEphemeris`] – the compiled-in VSOP87A series of the eight planets,
//! * [`GeocentricEphemeris`](crate::geocentric::GeocentricEphemeris) – the output of the
//!   geocentric transformer.

use std::sync::Arc;

use nalgebra::Vector3;

use crate::{
    constants::{JulianCentury, JULIAN_DAYS_PER_CENTURY},
    metadata::Metadata,
};

pub mod heliocentric;
pub mod planets;

/// Default step of [`finite_difference_velocity`], in days.
pub const DEFAULT_VELOCITY_STEP_DAYS: f64 = 0.01;

/// A time-parameterised position provider.
pub trait Ephemeris: Send + Sync {
    /// Frame of the vectors returned by [`Ephemeris::position`].
    fn metadata(&self) -> Metadata;

    /// Position at `jt` Julian centuries since J2000, in AU.
    fn position(&self, jt: JulianCentury) -> Vector3<f64>;

    /// Velocity at `jt`, in AU/day.
    ///
    /// The default is a central difference of [`Ephemeris::position`] with a step of
    /// [`DEFAULT_VELOCITY_STEP_DAYS`]. Providers with a closed-form derivative override it.
    fn velocity(&self, jt: JulianCentury) -> Vector3<f64> {
        finite_difference_velocity(self, jt, DEFAULT_VELOCITY_STEP_DAYS)
    }
}

impl<E: Ephemeris + ?Sized> Ephemeris for Arc<E> {
    fn metadata(&self) -> Metadata {
        (**self).metadata()
    }

    fn position(&self, jt: JulianCentury) -> Vector3<f64> {
        (**self).position(jt)
    }

    fn velocity(&self, jt: JulianCentury) -> Vector3<f64> {
        (**self).velocity(jt)
    }
}

/// Central finite-difference velocity of an ephemeris.
///
/// Arguments
/// ---------
/// * `ephemeris`: the provider to differentiate.
/// * `jt`: Julian centuries since J2000.
/// * `step_days`: half-width of the difference, in days.
///
/// Return
/// ------
/// * `(position(jt + h) − position(jt − h)) / 2h` in AU/day.
pub fn finite_difference_velocity<E: Ephemeris + ?Sized>(
    ephemeris: &E,
    jt: JulianCentury,
    step_days: f64,
) -> Vector3<f64> {
    let dt = step_days / JULIAN_DAYS_PER_CENTURY;
    let forward = ephemeris.position(jt + dt);
    let backward = ephemeris.position(jt - dt);
    (forward - backward) / (2.0 * step_days)
}

#[cfg(test)]
mod ephemeris_test {
    use super::*;
    use approx::assert_relative_eq;

    /// Uniform circular motion of radius 1 AU and period 365.25 days in the xy plane.
    struct Circular;

    const MEAN_MOTION: f64 = std::f64::consts::TAU / 365.25;

    impl Ephemeris for Circular {
        fn metadata(&self) -> Metadata {
            Metadata::HELIOCENTRIC_ECLIPTIC_J2000
        }

        fn position(&self, jt: JulianCentury) -> Vector3<f64> {
            let angle = MEAN_MOTION * jt * JULIAN_DAYS_PER_CENTURY;
            Vector3::new(angle.cos(), angle.sin(), 0.0)
        }
    }

    #[test]
    fn test_default_velocity() {
        let jt = 0.05;
        let angle = MEAN_MOTION * jt * JULIAN_DAYS_PER_CENTURY;
        let expected = Vector3::new(-angle.sin(), angle.cos(), 0.0) * MEAN_MOTION;
        assert_relative_eq!(Circular.velocity(jt), expected, epsilon = 1e-10);
    }

    #[test]
    fn test_finite_difference_converges() {
        let jt = -0.3;
        let angle = MEAN_MOTION * jt * JULIAN_DAYS_PER_CENTURY;
        let expected = Vector3::new(-angle.sin(), angle.cos(), 0.0) * MEAN_MOTION;

        let coarse = (finite_difference_velocity(&Circular, jt, 10.0) - expected).norm();
        let fine = (finite_difference_velocity(&Circular, jt, 1.0) - expected).norm();
        assert!(fine < coarse);
    }

    #[test]
    fn test_arc_forwarding() {
        let shared: Arc<dyn Ephemeris> = Arc::new(Circular);
        assert_eq!(shared.metadata(), Metadata::HELIOCENTRIC_ECLIPTIC_J2000);
        assert_eq!(shared.position(0.1), Circular.position(0.1));
        assert_eq!(shared.velocity(0.1), Circular.velocity(0.1));
    }
}
