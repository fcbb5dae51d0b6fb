#![cfg(feature = "vsop-download")]

//! Geocentric fixtures computed from the IMCCE `VSOP87A.*` files, evaluated by the series
//! evaluator for both the body and the Earth.

use std::sync::Arc;

use approx::assert_relative_eq;
use geovsop::{
    ephemeris::{
        heliocentric::{Evaluation, SeriesEphemeris, ZeroEphemeris},
        planets::{Planet, PlanetEphemeris},
        Ephemeris,
    },
    metadata::Epoch,
    vsop87::load_series_ephemeris,
};

mod common;
use common::{assert_radec_eq, fixture_jt, transformer};

fn series(planet: Planet) -> Arc<SeriesEphemeris> {
    Arc::new(load_series_ephemeris(planet, None).unwrap())
}

#[test]
fn test_series_matches_compiled_in_planets() {
    let jt = fixture_jt();
    for planet in [Planet::Earth, Planet::Mars, Planet::Uranus] {
        let from_file = series(planet);
        let compiled = PlanetEphemeris::new(planet);

        assert_relative_eq!(
            from_file.position(jt),
            compiled.position(jt),
            epsilon = 1e-10
        );
        assert_relative_eq!(
            from_file.velocity(jt),
            compiled.velocity(jt),
            epsilon = 1e-9
        );

        let sequential = SeriesEphemeris::new(from_file.table().clone())
            .with_evaluation(Evaluation::Sequential);
        assert_eq!(sequential.position(jt), from_file.position(jt));
    }
}

#[test]
fn test_series_fixtures() {
    let jt = fixture_jt();
    let earth: Arc<dyn Ephemeris> = series(Planet::Earth);
    let geocentric = transformer(earth, jt);
    let sun: Arc<dyn Ephemeris> = Arc::new(ZeroEphemeris);
    let mars: Arc<dyn Ephemeris> = series(Planet::Mars);
    let uranus: Arc<dyn Ephemeris> = series(Planet::Uranus);

    let fixtures = [
        (&sun, Epoch::J2000, "19h 28m 21.97s", "-21° 53′ 02.4″"),
        (&sun, Epoch::Apparent, "19h 29m 38.22s", "-21° 50′ 24.6″"),
        (&mars, Epoch::J2000, "17h 16m 08.64s", "-23° 17′ 53.5″"),
        (&mars, Epoch::Apparent, "17h 17m 26.51s", "-23° 19′ 18.2″"),
        (&uranus, Epoch::J2000, "2h 32m 59.9s", "+14° 36′ 02.7″"),
        (&uranus, Epoch::Apparent, "2h 34m 11.92s", "+14° 41′ 49.2″"),
    ];
    for (body, epoch, ra, dec) in fixtures {
        let geo = geocentric.transform(body.clone(), epoch).unwrap();
        assert_radec_eq(&geo.position(jt), ra, dec);
    }
}
