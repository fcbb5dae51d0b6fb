//! # Reference system rotations
//!
//! Elementary axis rotations and the three **rotation elements** applied by the geocentric
//! transformer:
//!
//! * [`Obliquity`] – rotates a vector between the ecliptic and the equatorial plane,
//! * [`Precession`] – moves a vector between the J2000 mean equator and the mean equator of date,
//! * [`Nutation`] – moves a vector from the mean to the true equator (or equinox) of date.
//!
//! Each element is an immutable value computed once for a given epoch and model, then applied to
//! any number of vectors. [`RotationElements`] bundles the three values handed to a
//! [`GeocentricTransformer`](crate::geocentric::GeocentricTransformer).

use nalgebra::{Matrix3, Rotation3, Vector3};

use crate::{
    constants::{ArcSec, JulianCentury, Radian, RADSEC},
    earth_orientation::{nutation_iau2000b, nutation_matrix, ObliquityModel, PrecessionModel},
    geocentric::GeocentricParams,
    metadata::{Epoch, Plane},
};

/// Principal axes of a rectangular frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    /// Position of the axis in a vector (0, 1 or 2).
    pub const fn index(self) -> usize {
        match self {
            Axis::X => 0,
            Axis::Y => 1,
            Axis::Z => 2,
        }
    }
}

/// Construct a right-handed 3×3 rotation matrix around one of the principal axes.
///
/// This function builds a [`nalgebra::Matrix3`] representing an **active rotation**
/// of a 3D vector by an angle `alpha` around the chosen axis, counter-clockwise when looking
/// from the positive end of the axis toward the origin.
///
/// # Arguments
///
/// * `alpha` - Rotation angle in **radians**.
/// * `axis` - Axis of rotation.
///
/// # Returns
///
/// A 3×3 rotation matrix `R` such that the rotated vector is `x' = R · x`.
///
/// # Remarks
///
/// * Built with [`nalgebra::Rotation3::from_axis_angle`], the result is orthonormal and
///   satisfies `R.transpose() == R.inverse()`.
/// * The rotation is **applied to the vector** in a fixed frame and does not represent a change
///   of basis; the change of basis by `alpha` is `rotmt(-alpha, axis)`.
pub fn rotmt(alpha: Radian, axis: Axis) -> Matrix3<f64> {
    let axis = match axis {
        Axis::X => Vector3::x_axis(),
        Axis::Y => Vector3::y_axis(),
        Axis::Z => Vector3::z_axis(),
    };

    Rotation3::from_axis_angle(&axis, alpha).into()
}

/// Apply the first-order light-time correction to a geocentric position.
///
/// Arguments
/// ---------
/// * `xrel`: geometric position of the body relative to the Earth [AU].
/// * `vrel`: velocity of the body relative to the Earth [AU/day].
/// * `light_time`: one-way light travel time between the Earth and the body [days].
///
/// Returns
/// --------
/// * The apparent position `xrel − vrel · Δ`, which accounts at once for the planetary
///   light-time and the annual aberration.
///
/// Remarks
/// -------
/// * This function does **not** normalize the output.
/// * A single retardation step is applied.
pub fn correct_aberration(
    xrel: Vector3<f64>,
    vrel: Vector3<f64>,
    light_time: f64,
) -> Vector3<f64> {
    xrel - vrel * light_time
}

/// Rotation between the ecliptic and the equatorial plane.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Obliquity {
    model: ObliquityModel,
    epoch: JulianCentury,
    epsilon: Radian,
    ecliptic_to_equatorial: Matrix3<f64>,
}

impl Obliquity {
    /// Build the obliquity rotation for the mean ecliptic of `epoch`.
    pub fn new(model: ObliquityModel, epoch: JulianCentury) -> Self {
        let epsilon = model.mean_obliquity(epoch);
        Obliquity {
            model,
            epoch,
            epsilon,
            ecliptic_to_equatorial: rotmt(epsilon, Axis::X),
        }
    }

    pub fn model(&self) -> ObliquityModel {
        self.model
    }

    pub fn epoch(&self) -> JulianCentury {
        self.epoch
    }

    /// Mean obliquity ε (radians).
    pub fn angle(&self) -> Radian {
        self.epsilon
    }

    /// Rotate `v` into `target` plane.
    ///
    /// The input vector is assumed to be expressed in the other plane: towards
    /// [`Plane::Equatorial`] the rotation is `R_x(ε)`, towards [`Plane::Ecliptic`] it is `R_x(−ε)`.
    pub fn rotate_plane(&self, v: &Vector3<f64>, target: Plane) -> Vector3<f64> {
        match target {
            Plane::Equatorial => self.ecliptic_to_equatorial * v,
            Plane::Ecliptic => self.ecliptic_to_equatorial.transpose() * v,
        }
    }
}

/// Precession of the mean equator between J2000 and a given date.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Precession {
    model: PrecessionModel,
    epoch: JulianCentury,
    j2000_to_date: Matrix3<f64>,
}

impl Precession {
    /// Build the precession rotation from J2000 to the mean equator of `epoch`.
    pub fn new(model: PrecessionModel, epoch: JulianCentury) -> Self {
        Precession {
            model,
            epoch,
            j2000_to_date: model.matrix(epoch),
        }
    }

    pub fn model(&self) -> PrecessionModel {
        self.model
    }

    pub fn epoch(&self) -> JulianCentury {
        self.epoch
    }

    pub fn matrix(&self) -> &Matrix3<f64> {
        &self.j2000_to_date
    }

    /// Move an equatorial vector to the `target` epoch.
    ///
    /// [`Epoch::Apparent`] precesses a J2000 vector to the mean equator of date,
    /// [`Epoch::J2000`] brings a vector of date back to J2000.
    pub fn change_epoch(&self, v: &Vector3<f64>, target: Epoch) -> Vector3<f64> {
        match target {
            Epoch::Apparent => self.j2000_to_date * v,
            Epoch::J2000 => self.j2000_to_date.transpose() * v,
        }
    }
}

/// Nutation of date, IAU 2000B.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Nutation {
    epoch: JulianCentury,
    mean_obliquity: Radian,
    dpsi: ArcSec,
    deps: ArcSec,
    mean_to_true: Matrix3<f64>,
}

impl Nutation {
    /// Build the nutation rotation of `epoch`, the mean obliquity of date being computed with
    /// `obliquity_model`.
    pub fn new(obliquity_model: ObliquityModel, epoch: JulianCentury) -> Self {
        let mean_obliquity = obliquity_model.mean_obliquity(epoch);
        let (dpsi, deps) = nutation_iau2000b(epoch);
        Nutation {
            epoch,
            mean_obliquity,
            dpsi,
            deps,
            mean_to_true: nutation_matrix(mean_obliquity, dpsi * RADSEC, deps * RADSEC),
        }
    }

    pub fn epoch(&self) -> JulianCentury {
        self.epoch
    }

    /// Nutation in longitude and in obliquity (arcseconds).
    pub fn angles(&self) -> (ArcSec, ArcSec) {
        (self.dpsi, self.deps)
    }

    /// True obliquity of date ε + Δε (radians).
    pub fn true_obliquity(&self) -> Radian {
        self.mean_obliquity + self.deps * RADSEC
    }

    /// Apply the nutation to a vector referred to the mean equinox of date.
    ///
    /// In the equatorial plane the full nutation matrix is applied; in the ecliptic plane only
    /// the nutation in longitude moves the vector, around the ecliptic pole.
    pub fn apply(&self, v: &Vector3<f64>, plane: Plane) -> Vector3<f64> {
        match plane {
            Plane::Equatorial => self.mean_to_true * v,
            Plane::Ecliptic => rotmt(self.dpsi * RADSEC, Axis::Z) * v,
        }
    }

    /// Remove the nutation from a vector referred to the true equinox of date.
    pub fn remove(&self, v: &Vector3<f64>, plane: Plane) -> Vector3<f64> {
        match plane {
            Plane::Equatorial => self.mean_to_true.transpose() * v,
            Plane::Ecliptic => rotmt(-self.dpsi * RADSEC, Axis::Z) * v,
        }
    }
}

/// The rotation values used by a geocentric transformer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RotationElements {
    pub obliquity: Obliquity,
    pub precession: Precession,
    pub nutation: Nutation,
}

impl RotationElements {
    pub fn new(obliquity: Obliquity, precession: Precession, nutation: Nutation) -> Self {
        RotationElements {
            obliquity,
            precession,
            nutation,
        }
    }

    /// Build the three elements described by a validated parameter set.
    ///
    /// * obliquity of the ecliptic at `obliquity_epoch`,
    /// * precession and nutation at `observation_epoch`.
    pub fn from_params(params: &GeocentricParams) -> Self {
        RotationElements {
            obliquity: Obliquity::new(params.obliquity_model, params.obliquity_epoch),
            precession: Precession::new(params.precession_model, params.observation_epoch),
            nutation: Nutation::new(params.obliquity_model, params.observation_epoch),
        }
    }
}

impl Default for RotationElements {
    fn default() -> Self {
        RotationElements::from_params(&GeocentricParams::default())
    }
}
