//! Compiled-in VSOP87A series of the eight planets.
//!
//! The series come from the [`vsop87`] crate. Positions are heliocentric rectangular
//! coordinates referred to the ecliptic and equinox J2000, like any [`CoefficientTable`](crate::vsop87::table::CoefficientTable)
//! read from the IMCCE `VSOP87A.*` files.

use std::{fmt, str::FromStr};

use nalgebra::Vector3;
use ::vsop87::vsop87a;

use crate::{
    constants::JulianCentury, ephemeris::Ephemeris, geovsop_errors::GeoVsopError,
    metadata::Metadata, time::jd_from_jt,
};

/// The bodies covered by VSOP87A.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Planet {
    Mercury,
    Venus,
    Earth,
    Mars,
    Jupiter,
    Saturn,
    Uranus,
    Neptune,
}

impl Planet {
    pub const ALL: [Planet; 8] = [
        Planet::Mercury,
        Planet::Venus,
        Planet::Earth,
        Planet::Mars,
        Planet::Jupiter,
        Planet::Saturn,
        Planet::Uranus,
        Planet::Neptune,
    ];

    /// Extension of the IMCCE file holding the series of the planet (`VSOP87A.<ext>`).
    pub fn file_extension(&self) -> &'static str {
        match self {
            Planet::Mercury => "mer",
            Planet::Venus => "ven",
            Planet::Earth => "ear",
            Planet::Mars => "mar",
            Planet::Jupiter => "jup",
            Planet::Saturn => "sat",
            Planet::Uranus => "ura",
            Planet::Neptune => "nep",
        }
    }

    /// Body name as written in the headers of the IMCCE files.
    pub fn vsop_name(&self) -> &'static str {
        match self {
            Planet::Mercury => "MERCURY",
            Planet::Venus => "VENUS",
            Planet::Earth => "EARTH",
            Planet::Mars => "MARS",
            Planet::Jupiter => "JUPITER",
            Planet::Saturn => "SATURN",
            Planet::Uranus => "URANUS",
            Planet::Neptune => "NEPTUNE",
        }
    }
}

impl fmt::Display for Planet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

impl FromStr for Planet {
    type Err = GeoVsopError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Planet::ALL
            .into_iter()
            .find(|planet| planet.vsop_name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| GeoVsopError::InvalidParameter(format!("unknown planet: {s}")))
    }
}

/// Heliocentric ephemeris of a planet from the compiled-in VSOP87A series.
///
/// Velocities use the central finite difference of [`Ephemeris::velocity`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlanetEphemeris {
    planet: Planet,
}

impl PlanetEphemeris {
    pub fn new(planet: Planet) -> Self {
        PlanetEphemeris { planet }
    }

    pub fn planet(&self) -> Planet {
        self.planet
    }
}

impl Ephemeris for PlanetEphemeris {
    fn metadata(&self) -> Metadata {
        Metadata::HELIOCENTRIC_ECLIPTIC_J2000
    }

    fn position(&self, jt: JulianCentury) -> Vector3<f64> {
        let jde = jd_from_jt(jt);
        let coords = match self.planet {
            Planet::Mercury => vsop87a::mercury(jde),
            Planet::Venus => vsop87a::venus(jde),
            Planet::Earth => vsop87a::earth(jde),
            Planet::Mars => vsop87a::mars(jde),
            Planet::Jupiter => vsop87a::jupiter(jde),
            Planet::Saturn => vsop87a::saturn(jde),
            Planet::Uranus => vsop87a::uranus(jde),
            Planet::Neptune => vsop87a::neptune(jde),
        };
        Vector3::new(coords.x, coords.y, coords.z)
    }
}
