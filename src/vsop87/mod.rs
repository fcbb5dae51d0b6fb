//! VSOP87 coefficient tables, their evaluation and their sources.

use std::sync::Arc;

use crate::{
    ephemeris::{heliocentric::SeriesEphemeris, planets::Planet},
    geovsop_errors::GeoVsopError,
};

pub mod download;
pub mod reader;
pub mod series;
pub mod table;

/// Build a [`SeriesEphemeris`] from the IMCCE file of `planet`.
///
/// Arguments
/// ---------
/// * `planet`: the body to load.
/// * `user_path`: an optional path to a local `VSOP87A.<ext>` file, see
///   [`download::get_vsop87_file`].
///
/// Return
/// ------
/// * the series-backed ephemeris of the body,
/// * [`GeoVsopError::MalformedVsopFile`] if the file describes another body, and the errors of
///   the file resolution and parsing otherwise.
pub fn load_series_ephemeris(
    planet: Planet,
    user_path: Option<&str>,
) -> Result<SeriesEphemeris, GeoVsopError> {
    let path = download::get_vsop87_file(planet, user_path)?;
    let file = reader::read_vsop87_file(&path)?;
    if file.body != planet.vsop_name() {
        return Err(GeoVsopError::MalformedVsopFile {
            line: 0,
            reason: format!("expected the series of {}, found {}", planet.vsop_name(), file.body),
        });
    }
    Ok(SeriesEphemeris::new(Arc::new(file.table)))
}
