//! # geovsop
//!
//! Geocentric apparent positions of the Sun and the planets from the VSOP87A theory.
//!
//! The crate is organised bottom-up:
//!
//! * [`vsop87`] – coefficient tables, their parallel evaluation and the IMCCE file reader,
//! * [`ephemeris`] – the [`Ephemeris`](ephemeris::Ephemeris) trait and the heliocentric
//!   providers (series-backed, compiled-in planets, and the Sun at the origin),
//! * [`earth_orientation`] and [`ref_system`] – obliquity, precession and nutation models and the
//!   rotation values built from them,
//! * [`geocentric`] – the light-time, aberration and frame pipeline producing geocentric
//!   equatorial ephemerides.
//!
//! Time is always `jT`, the number of Julian centuries since J2000.0, see [`time`].
//!
//! ```rust,no_run
//! use std::sync::Arc;
//!
//! use geovsop::conversion::{format_dec, format_ra, Spherical};
//! use geovsop::ephemeris::{heliocentric::ZeroEphemeris, planets::{Planet, PlanetEphemeris}, Ephemeris};
//! use geovsop::geocentric::{GeocentricParams, GeocentricTransformer};
//! use geovsop::metadata::Epoch;
//! use geovsop::time::jt_from_date;
//!
//! let jt = jt_from_date("2022-01-11T00:00:00 UTC")?;
//! let params = GeocentricParams::builder().observation_epoch(jt).build()?;
//! let transformer =
//!     GeocentricTransformer::from_params(Arc::new(PlanetEphemeris::new(Planet::Earth)), &params)?;
//!
//! let sun = transformer.transform(Arc::new(ZeroEphemeris), Epoch::Apparent)?;
//! let radec = Spherical::from_cartesian(&sun.position(jt));
//! println!("{} {}", format_ra(radec.longitude, 2), format_dec(radec.latitude, 1));
//! # Ok::<(), geovsop::geovsop_errors::GeoVsopError>(())
//! ```

pub mod constants;
pub mod conversion;
pub mod earth_orientation;
pub mod ephemeris;
pub mod geocentric;
pub mod geovsop_errors;
pub mod metadata;
pub mod ref_system;
pub mod time;
pub mod vsop87;
