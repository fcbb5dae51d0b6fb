//! # Coordinate conversions
//!
//! Cartesian ↔ spherical conversion of position vectors and sexagesimal parsing / formatting of
//! right ascension and declination.

use nalgebra::Vector3;

use crate::constants::{ArcSec, Degree, Radian, DPI};

/// Spherical form of a position vector.
///
/// For an equatorial vector `longitude` is the right ascension and `latitude` the declination;
/// for an ecliptic vector they are the ecliptic longitude and latitude.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spherical {
    /// Euclidean norm of the vector (AU)
    pub radius: f64,
    /// Longitude in radians, in the range [0, 2π)
    pub longitude: Radian,
    /// Latitude in radians, in the range [−π/2, +π/2]
    pub latitude: Radian,
}

impl Spherical {
    /// Convert a 3D Cartesian vector to spherical coordinates.
    ///
    /// Arguments
    /// ---------
    /// * `v`: 3D position vector in Cartesian coordinates.
    ///
    /// Returns
    /// --------
    /// * The spherical form `(radius, longitude, latitude)`.
    ///
    /// Remarks
    /// -------
    /// * A zero vector converts to `(0, 0, 0)`.
    /// * On the poles the longitude is undefined and set to `0`.
    pub fn from_cartesian(v: &Vector3<f64>) -> Self {
        let radius = v.norm();
        if radius == 0. {
            return Spherical {
                radius: 0.0,
                longitude: 0.0,
                latitude: 0.0,
            };
        }

        let latitude = (v.z / radius).clamp(-1.0, 1.0).asin();
        let longitude = if v.x == 0.0 && v.y == 0.0 {
            0.0
        } else {
            let lon = v.y.atan2(v.x);
            if lon < 0.0 {
                lon + DPI
            } else {
                lon
            }
        };

        Spherical {
            radius,
            longitude,
            latitude,
        }
    }

    /// Convert back to a Cartesian vector.
    pub fn to_cartesian(&self) -> Vector3<f64> {
        let (sin_lat, cos_lat) = self.latitude.sin_cos();
        let (sin_lon, cos_lon) = self.longitude.sin_cos();
        Vector3::new(
            self.radius * cos_lat * cos_lon,
            self.radius * cos_lat * sin_lon,
            self.radius * sin_lat,
        )
    }
}

/// Estimate the accuracy of a numeric string based on its decimal precision.
///
/// Arguments
/// ---------------
/// * `field`: a string slice containing the numeric value (e.g., `"56.78"`), typically the last component of an angle
/// * `factor`: a scale factor to apply to the accuracy (e.g., `1.0 / 3600.0` for arcseconds)
///
/// Return
/// ----------
/// * `Option<f64>`: the estimated accuracy scaled by `factor`
fn compute_accuracy(field: &str, factor: f64) -> Option<f64> {
    if let Some(dot_pos) = field.find('.') {
        let length = field.trim().len();
        let digits_after_dot = length - dot_pos - 1;
        let acc = 10f64.powi(-(digits_after_dot as i32)) * factor;
        Some(acc)
    } else {
        Some(1.0 * factor)
    }
}

/// Parse a right ascension string to degrees
///
/// Arguments
/// ---------
/// * `ra`: a string representing the right ascension in the format `HH MM SS.SS`
///
/// Returns
/// -------
/// * `Option<(Degree, Degree)>`: the right ascension in degrees and the accuracy of the last
///   field, in degrees. Returns `None` if the input format is invalid.
pub fn parse_ra_to_deg(ra: &str) -> Option<(Degree, Degree)> {
    let parts: Vec<&str> = ra.split_whitespace().collect();
    if parts.len() != 3 {
        return None;
    }

    let h: f64 = parts[0].parse().ok()?;
    let m: f64 = parts[1].parse().ok()?;
    let s_raw = parts[2];
    let s: f64 = s_raw.parse().ok()?;

    let ra_deg = (h + m / 60.0 + s / 3600.0) * 15.0;
    let acc = compute_accuracy(s_raw, 15.0 / 3600.0)?;
    Some((ra_deg, acc))
}

/// Parse a declination string to degrees
///
/// Arguments
/// ---------
/// * `dec`: a string representing the declination in the format `±DD MM SS.SS`
///
/// Returns
/// -------
/// * `Option<(Degree, Degree)>`: the declination in degrees and the accuracy of the last field,
///   in degrees. Returns `None` if the input format is invalid.
pub fn parse_dec_to_deg(dec: &str) -> Option<(Degree, Degree)> {
    let parts: Vec<&str> = dec.split_whitespace().collect();
    if parts.len() != 3 {
        return None;
    }

    let sign = if parts[0].starts_with('-') { -1.0 } else { 1.0 };
    let d: f64 = parts[0].trim_start_matches(&['-', '+'][..]).parse().ok()?;
    let m: f64 = parts[1].parse().ok()?;
    let s_raw = parts[2];
    let s: f64 = s_raw.parse().ok()?;

    let dec_deg = sign * (d + m / 60.0 + s / 3600.0);
    let acc = compute_accuracy(s_raw, 1. / 3600.)?;
    Some((dec_deg, acc))
}

/// Split a right ascension into hours, minutes and seconds.
///
/// The angle is first normalized into [0, 2π).
pub fn ra_to_hms(ra: Radian) -> (u32, u32, f64) {
    let hours = ra.rem_euclid(DPI).to_degrees() / 15.0;
    let h = hours.trunc();
    let minutes = (hours - h) * 60.0;
    let m = minutes.trunc();
    let s = (minutes - m) * 60.0;
    (h as u32, m as u32, s)
}

/// Split a declination into its sign, degrees, arcminutes and arcseconds.
///
/// The returned sign is `-1` for southern declinations and `1` otherwise.
pub fn dec_to_dms(dec: Radian) -> (i8, u32, u32, ArcSec) {
    let sign = if dec < 0.0 { -1 } else { 1 };
    let degrees = dec.abs().to_degrees();
    let d = degrees.trunc();
    let minutes = (degrees - d) * 60.0;
    let m = minutes.trunc();
    let s = (minutes - m) * 60.0;
    (sign, d as u32, m as u32, s)
}

/// Format a right ascension as `HHh MMm SS.SSs`.
///
/// Arguments
/// ---------
/// * `ra`: right ascension in radians
/// * `decimals`: number of decimals printed on the seconds field
pub fn format_ra(ra: Radian, decimals: usize) -> String {
    let (mut h, mut m, s) = ra_to_hms(ra);
    let mut s = round_to(s, decimals);
    if s >= 60.0 {
        s -= 60.0;
        m += 1;
    }
    if m >= 60 {
        m -= 60;
        h += 1;
    }
    if h >= 24 {
        h -= 24;
    }
    let width = if decimals == 0 { 2 } else { decimals + 3 };
    format!("{h}h {m:02}m {s:0width$.decimals$}s")
}

/// Format a declination as `±DD° MM′ SS.S″`.
///
/// Arguments
/// ---------
/// * `dec`: declination in radians
/// * `decimals`: number of decimals printed on the arcseconds field
pub fn format_dec(dec: Radian, decimals: usize) -> String {
    let (sign, mut d, mut m, s) = dec_to_dms(dec);
    let mut s = round_to(s, decimals);
    if s >= 60.0 {
        s -= 60.0;
        m += 1;
    }
    if m >= 60 {
        m -= 60;
        d += 1;
    }
    let sign = if sign < 0 { '-' } else { '+' };
    let width = if decimals == 0 { 2 } else { decimals + 3 };
    format!("{sign}{d:02}° {m:02}′ {s:0width$.decimals$}″")
}

fn round_to(value: f64, decimals: usize) -> f64 {
    let scale = 10f64.powi(decimals as i32);
    (value * scale).round() / scale
}
