//! # Geocentric transformation
//!
//! Turns a heliocentric ecliptic J2000 ephemeris into a geocentric equatorial one, either
//! referred to the mean equator and equinox of J2000 or to the true equator and equinox of date.
//!
//! ## Pipeline
//!
//! For a body `B`, the Earth `E` and a time `t`:
//!
//! 1. `geo0 = B(t) − E(t)` with `B(t)` and `E(t)` evaluated concurrently,
//! 2. light time `Δ = |geo0| / c` in days,
//! 3. [`Epoch::J2000`]: `geo = B(t − Δ) − E(t)` (one retardation step), rotated from the ecliptic
//!    to the equator with the obliquity element,
//! 4. [`Epoch::Apparent`]: `geo = geo0 − (V_B(t) − V_E(t)) · Δ` (light time and annual aberration
//!    at once), rotated to the equator, precessed from J2000 to the date, then nutated.
//!
//! The rotation elements are fixed values given at construction, see
//! [`RotationElements`]. Both the body and the Earth must be tagged
//! [`Metadata::HELIOCENTRIC_ECLIPTIC_J2000`]; anything else is rejected before any evaluation.
//!
//! ## Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//!
//! use geovsop::ephemeris::{planets::{Planet, PlanetEphemeris}, Ephemeris};
//! use geovsop::geocentric::{GeocentricParams, GeocentricTransformer};
//! use geovsop::metadata::Epoch;
//!
//! let jt = 0.2202737850787132;
//! let params = GeocentricParams::builder().observation_epoch(jt).build()?;
//! let transformer =
//!     GeocentricTransformer::from_params(Arc::new(PlanetEphemeris::new(Planet::Earth)), &params)?;
//!
//! let mars = transformer.transform(Arc::new(PlanetEphemeris::new(Planet::Mars)), Epoch::Apparent)?;
//! let position = mars.position(jt);
//! # Ok::<(), geovsop::geovsop_errors::GeoVsopError>(())
//! ```

use std::{
    cmp::Ordering::{Equal, Less},
    fmt,
    sync::Arc,
};

use log::{debug, trace};
use nalgebra::Vector3;

use crate::{
    constants::{JulianCentury, JULIAN_DAYS_PER_CENTURY, LIGHT_TIME_DAYS_PER_AU},
    earth_orientation::{ObliquityModel, PrecessionModel},
    ephemeris::Ephemeris,
    geovsop_errors::GeoVsopError,
    metadata::{Epoch, Metadata, Orbit, Plane},
    ref_system::{correct_aberration, RotationElements},
};

/// Largest distance to J2000 accepted for an epoch, in Julian centuries.
pub const MAX_EPOCH_OFFSET: JulianCentury = 100.0;

/// Configuration of a [`GeocentricTransformer`].
///
/// * `observation_epoch`: date of the precession and nutation (Julian centuries since J2000),
/// * `obliquity_epoch`: date of the ecliptic rotated onto the equator,
/// * `obliquity_model`: model of the mean obliquity, also used by the nutation,
/// * `precession_model`: model of the precession matrix.
///
/// The default observes at J2000 with the IAU 2006 models.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeocentricParams {
    pub observation_epoch: JulianCentury,
    pub obliquity_epoch: JulianCentury,
    pub obliquity_model: ObliquityModel,
    pub precession_model: PrecessionModel,
}

impl GeocentricParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a [`GeocentricParamsBuilder`] from the default values.
    pub fn builder() -> GeocentricParamsBuilder {
        GeocentricParamsBuilder::new()
    }
}

impl Default for GeocentricParams {
    fn default() -> Self {
        GeocentricParams {
            observation_epoch: 0.0,
            obliquity_epoch: 0.0,
            obliquity_model: ObliquityModel::Iau2006,
            precession_model: PrecessionModel::Iau2006,
        }
    }
}

impl fmt::Display for GeocentricParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "observation jT = {:.10}, obliquity jT = {:.10}, obliquity {:?}, precession {:?}",
            self.observation_epoch,
            self.obliquity_epoch,
            self.obliquity_model,
            self.precession_model
        )
    }
}

/// Builder for [`GeocentricParams`], with validation.
#[derive(Debug, Clone, Default)]
pub struct GeocentricParamsBuilder {
    params: GeocentricParams,
}

impl GeocentricParamsBuilder {
    pub fn new() -> Self {
        Self {
            params: GeocentricParams::default(),
        }
    }

    pub fn observation_epoch(mut self, v: JulianCentury) -> Self {
        self.params.observation_epoch = v;
        self
    }

    pub fn obliquity_epoch(mut self, v: JulianCentury) -> Self {
        self.params.obliquity_epoch = v;
        self
    }

    pub fn obliquity_model(mut self, v: ObliquityModel) -> Self {
        self.params.obliquity_model = v;
        self
    }

    pub fn precession_model(mut self, v: PrecessionModel) -> Self {
        self.params.precession_model = v;
        self
    }

    /// Return true iff |x| <= bound and x is comparable (i.e., not NaN).
    #[inline]
    fn within(x: f64, bound: f64) -> bool {
        matches!(x.abs().partial_cmp(&bound), Some(Less) | Some(Equal))
    }

    /// Finalize the builder.
    ///
    /// Validation rules
    /// -----------------
    /// * `observation_epoch` and `obliquity_epoch` are finite and within
    ///   [`MAX_EPOCH_OFFSET`] centuries of J2000.
    ///
    /// Returns
    /// -----------------
    /// * `Ok(GeocentricParams)` if every value is valid,
    /// * [`GeoVsopError::InvalidParameter`] otherwise.
    pub fn build(self) -> Result<GeocentricParams, GeoVsopError> {
        let p = &self.params;

        if !Self::within(p.observation_epoch, MAX_EPOCH_OFFSET) {
            return Err(GeoVsopError::InvalidParameter(format!(
                "observation_epoch must be finite and within {MAX_EPOCH_OFFSET} centuries of J2000, got {}",
                p.observation_epoch
            )));
        }
        if !Self::within(p.obliquity_epoch, MAX_EPOCH_OFFSET) {
            return Err(GeoVsopError::InvalidParameter(format!(
                "obliquity_epoch must be finite and within {MAX_EPOCH_OFFSET} centuries of J2000, got {}",
                p.obliquity_epoch
            )));
        }

        Ok(self.params)
    }
}

/// Builds geocentric ephemerides relative to a given Earth.
#[derive(Clone)]
pub struct GeocentricTransformer {
    earth: Arc<dyn Ephemeris>,
    elements: RotationElements,
}

impl fmt::Debug for GeocentricTransformer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GeocentricTransformer")
            .field("earth", &self.earth.metadata())
            .field("elements", &self.elements)
            .finish()
    }
}

impl GeocentricTransformer {
    /// Create a transformer from an Earth ephemeris and explicit rotation elements.
    ///
    /// Return
    /// ------
    /// * [`GeoVsopError::MetadataMismatch`] if `earth` is not heliocentric ecliptic J2000.
    pub fn new(
        earth: Arc<dyn Ephemeris>,
        elements: RotationElements,
    ) -> Result<Self, GeoVsopError> {
        earth
            .metadata()
            .ensure(Metadata::HELIOCENTRIC_ECLIPTIC_J2000)?;

        debug!(
            "Geocentric transformer: obliquity {:?} at jT = {}, precession {:?} at jT = {}, nutation at jT = {}",
            elements.obliquity.model(),
            elements.obliquity.epoch(),
            elements.precession.model(),
            elements.precession.epoch(),
            elements.nutation.epoch()
        );

        Ok(GeocentricTransformer { earth, elements })
    }

    /// Create a transformer whose rotation elements are described by `params`.
    pub fn from_params(
        earth: Arc<dyn Ephemeris>,
        params: &GeocentricParams,
    ) -> Result<Self, GeoVsopError> {
        Self::new(earth, RotationElements::from_params(params))
    }

    pub fn earth(&self) -> &Arc<dyn Ephemeris> {
        &self.earth
    }

    pub fn elements(&self) -> &RotationElements {
        &self.elements
    }

    /// Geocentric equatorial ephemeris of `body`, referred to `epoch`.
    ///
    /// Return
    /// ------
    /// * [`GeoVsopError::MetadataMismatch`] if `body` is not heliocentric ecliptic J2000. The
    ///   body is never evaluated in that case.
    pub fn transform(
        &self,
        body: Arc<dyn Ephemeris>,
        epoch: Epoch,
    ) -> Result<GeocentricEphemeris, GeoVsopError> {
        body.metadata()
            .ensure(Metadata::HELIOCENTRIC_ECLIPTIC_J2000)?;

        Ok(GeocentricEphemeris {
            body,
            earth: Arc::clone(&self.earth),
            elements: self.elements,
            epoch,
        })
    }
}

/// A body seen from the center of the Earth, in equatorial coordinates.
#[derive(Clone)]
pub struct GeocentricEphemeris {
    body: Arc<dyn Ephemeris>,
    earth: Arc<dyn Ephemeris>,
    elements: RotationElements,
    epoch: Epoch,
}

impl fmt::Debug for GeocentricEphemeris {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GeocentricEphemeris")
            .field("metadata", &self.metadata())
            .field("elements", &self.elements)
            .finish()
    }
}

impl GeocentricEphemeris {
    pub fn epoch(&self) -> Epoch {
        self.epoch
    }

    /// Light-time-corrected vector in the mean equator of J2000.
    fn j2000_position(
        &self,
        jt: JulianCentury,
        earth: &Vector3<f64>,
        light_time: f64,
    ) -> Vector3<f64> {
        let retarded = self.body.position(jt - light_time / JULIAN_DAYS_PER_CENTURY);
        self.elements
            .obliquity
            .rotate_plane(&(retarded - earth), Plane::Equatorial)
    }

    /// Aberrated vector in the true equator of date.
    fn apparent_position(
        &self,
        jt: JulianCentury,
        geo0: Vector3<f64>,
        light_time: f64,
    ) -> Vector3<f64> {
        let (body_velocity, earth_velocity) =
            rayon::join(|| self.body.velocity(jt), || self.earth.velocity(jt));
        let aberrated = correct_aberration(geo0, body_velocity - earth_velocity, light_time);

        let equatorial = self
            .elements
            .obliquity
            .rotate_plane(&aberrated, Plane::Equatorial);
        let mean_of_date = self
            .elements
            .precession
            .change_epoch(&equatorial, Epoch::Apparent);
        self.elements
            .nutation
            .apply(&mean_of_date, Plane::Equatorial)
    }
}

impl Ephemeris for GeocentricEphemeris {
    fn metadata(&self) -> Metadata {
        Metadata::new(Orbit::Geocentric, Plane::Equatorial, self.epoch)
    }

    fn position(&self, jt: JulianCentury) -> Vector3<f64> {
        let (body, earth) = rayon::join(|| self.body.position(jt), || self.earth.position(jt));
        let geo0 = body - earth;
        let r = geo0.norm();
        let light_time = r * LIGHT_TIME_DAYS_PER_AU;
        trace!("jT = {jt}: geometric distance {r} AU, light time {light_time} days");

        match self.epoch {
            Epoch::J2000 => self.j2000_position(jt, &earth, light_time),
            Epoch::Apparent => self.apparent_position(jt, geo0, light_time),
        }
    }
}
