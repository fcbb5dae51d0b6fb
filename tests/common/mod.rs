#![allow(dead_code)]

use std::sync::Arc;

use geovsop::{
    conversion::{format_dec, format_ra, Spherical},
    ephemeris::{
        planets::{Planet, PlanetEphemeris},
        Ephemeris,
    },
    geocentric::{GeocentricParams, GeocentricTransformer},
    time::jt_from_epoch,
};
use hifitime::Epoch;
use nalgebra::Vector3;

/// 2022-01-11T00:00:00 UTC in Julian centuries since J2000.
pub fn fixture_jt() -> f64 {
    jt_from_epoch(&Epoch::from_gregorian_utc_at_midnight(2022, 1, 11))
}

/// Transformer relative to `earth`, observing at `jt`.
pub fn transformer(earth: Arc<dyn Ephemeris>, jt: f64) -> GeocentricTransformer {
    let params = GeocentricParams::builder()
        .observation_epoch(jt)
        .build()
        .unwrap();
    GeocentricTransformer::from_params(earth, &params).unwrap()
}

/// Transformer relative to the compiled-in Earth, observing at `jt`.
pub fn earth_transformer(jt: f64) -> GeocentricTransformer {
    transformer(Arc::new(PlanetEphemeris::new(Planet::Earth)), jt)
}

/// Number of decimals printed on the last field of a sexagesimal angle.
fn decimals(angle: &str) -> usize {
    angle
        .trim_end_matches(|c: char| !c.is_ascii_digit())
        .rsplit_once('.')
        .map_or(0, |(_, fraction)| fraction.len())
}

/// Check the right ascension and declination of an equatorial vector against their printed
/// values, rounded to the number of decimals of the expected strings.
///
/// * `ra`: expected right ascension, `"19h 28m 21.97s"`
/// * `dec`: expected declination, `"-21° 53′ 02.4″"`
pub fn assert_radec_eq(actual: &Vector3<f64>, ra: &str, dec: &str) {
    let radec = Spherical::from_cartesian(actual);
    assert_eq!(format_ra(radec.longitude, decimals(ra)), ra);
    assert_eq!(format_dec(radec.latitude, decimals(dec)), dec);
}
