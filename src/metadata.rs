//! # Ephemeris metadata tags
//!
//! Every ephemeris carries a [`Metadata`] triple describing **where** its vectors are centered
//! ([`Orbit`]), **which plane** they are expressed in ([`Plane`]) and **which equator/equinox**
//! they refer to ([`Epoch`]).
//!
//! Operations composing ephemerides never coerce a mismatching input: they call
//! [`Metadata::ensure`] before any numeric work and surface
//! [`GeoVsopError::MetadataMismatch`] otherwise.

use std::fmt;

use crate::geovsop_errors::GeoVsopError;

/// Origin of the coordinate system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Orbit {
    /// Centered on the Sun
    Heliocentric,
    /// Centered on the Earth
    Geocentric,
}

/// Fundamental plane of the coordinate system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Plane {
    /// Ecliptic plane, x-axis towards the equinox
    Ecliptic,
    /// Celestial equator, x-axis towards the equinox
    Equatorial,
}

/// Equator and equinox the coordinates refer to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Epoch {
    /// Mean equator and equinox of J2000.0
    J2000,
    /// True equator and equinox of date (precession and nutation applied)
    Apparent,
}

/// The full tag of an ephemeris.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Metadata {
    pub orbit: Orbit,
    pub plane: Plane,
    pub epoch: Epoch,
}

impl Metadata {
    /// Tag of the raw VSOP87A series: heliocentric, ecliptic, J2000.
    pub const HELIOCENTRIC_ECLIPTIC_J2000: Metadata = Metadata {
        orbit: Orbit::Heliocentric,
        plane: Plane::Ecliptic,
        epoch: Epoch::J2000,
    };

    pub const fn new(orbit: Orbit, plane: Plane, epoch: Epoch) -> Self {
        Metadata {
            orbit,
            plane,
            epoch,
        }
    }

    /// Check that `self` is exactly `expected`.
    ///
    /// Return
    /// ------
    /// * `Ok(())` when every component matches,
    /// * [`GeoVsopError::MetadataMismatch`] otherwise.
    pub fn ensure(&self, expected: Metadata) -> Result<(), GeoVsopError> {
        if *self == expected {
            Ok(())
        } else {
            Err(GeoVsopError::MetadataMismatch {
                expected,
                found: *self,
            })
        }
    }
}

impl fmt::Display for Orbit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Orbit::Heliocentric => write!(f, "heliocentric"),
            Orbit::Geocentric => write!(f, "geocentric"),
        }
    }
}

impl fmt::Display for Plane {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Plane::Ecliptic => write!(f, "ecliptic"),
            Plane::Equatorial => write!(f, "equatorial"),
        }
    }
}

impl fmt::Display for Epoch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Epoch::J2000 => write!(f, "J2000"),
            Epoch::Apparent => write!(f, "apparent"),
        }
    }
}

impl fmt::Display for Metadata {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}/{}", self.orbit, self.plane, self.epoch)
    }
}
