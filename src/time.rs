//! # Time coordinate conversions
//!
//! Every computation in the crate is driven by a single time coordinate, `jT`: the number of
//! Julian centuries elapsed since J2000.0 (JD 2451545.0). This module converts between `jT`,
//! Julian dates and [`hifitime::Epoch`] values.
//!
//! The Julian date is taken in the UTC scale (no ΔT correction is applied before evaluating
//! the series), which is the convention of the regression fixtures shipped with the crate.

use hifitime::Epoch;
use std::str::FromStr;

use crate::{
    constants::{JulianCentury, J2000_JD, JD, JULIAN_DAYS_PER_CENTURY},
    geovsop_errors::GeoVsopError,
};

/// Transformation from julian date (JD) to julian centuries since J2000 (jT)
///
/// Argument
/// --------
/// * `jd`: a julian date
///
/// Return
/// ------
/// * the number of julian centuries elapsed since J2000.0
pub fn jt_from_jd(jd: JD) -> JulianCentury {
    (jd - J2000_JD) / JULIAN_DAYS_PER_CENTURY
}

/// Transformation from julian centuries since J2000 (jT) to julian date (JD)
pub fn jd_from_jt(jt: JulianCentury) -> JD {
    J2000_JD + jt * JULIAN_DAYS_PER_CENTURY
}

/// Transformation from a hifitime [`Epoch`] to julian centuries since J2000 (jT)
///
/// Argument
/// --------
/// * `epoch`: the instant to convert, the UTC julian date of this instant is used
///
/// Return
/// ------
/// * the number of julian centuries elapsed since J2000.0
pub fn jt_from_epoch(epoch: &Epoch) -> JulianCentury {
    jt_from_jd(epoch.to_jde_utc_days())
}

/// Transformation from julian centuries since J2000 (jT) to a hifitime [`Epoch`] (UTC)
pub fn epoch_from_jt(jt: JulianCentury) -> Epoch {
    Epoch::from_jde_utc(jd_from_jt(jt))
}

/// Transformation from date in the format YYYY-MM-ddTHH:mm:ss to julian centuries since J2000
///
/// Argument
/// --------
/// * `date`: a date string understood by hifitime, e.g. `"2022-01-11T00:00:00 UTC"`
///
/// Return
/// ------
/// * the number of julian centuries elapsed since J2000.0
/// * [`GeoVsopError::InvalidDate`] if the string cannot be parsed
pub fn jt_from_date(date: &str) -> Result<JulianCentury, GeoVsopError> {
    let epoch = Epoch::from_str(date.trim())
        .map_err(|err| GeoVsopError::InvalidDate(format!("{date}: {err}")))?;
    Ok(jt_from_epoch(&epoch))
}

/// Transformation from julian centuries to julian millennia, the time argument of VSOP87
#[inline]
pub fn jt_to_millennia(jt: JulianCentury) -> f64 {
    jt / 10.0
}
