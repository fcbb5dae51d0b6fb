//! # Constants and type definitions for geovsop
//!
//! This module centralizes the **physical constants**, **conversion factors**, and **common type
//! definitions** used throughout the `geovsop` library.
//!
//! ## Overview
//!
//! - Astronomical constants (speed of light, astronomical unit, light-time per AU)
//! - Time scale anchors (J2000, days per Julian century / millennium)
//! - Unit conversions (degrees ↔ radians, arcseconds ↔ radians)
//! - Core type aliases used across the crate

// -------------------------------------------------------------------------------------------------
// Physical constants and unit conversions
// -------------------------------------------------------------------------------------------------

/// 2π, useful for trigonometric conversions
pub const DPI: f64 = 2. * std::f64::consts::PI;

/// Number of seconds in a Julian day
pub const SECONDS_PER_DAY: f64 = 86_400.0;

/// Astronomical Unit in kilometers (IAU 2012)
pub const AU: f64 = 149_597_870.7;

/// Julian Date of the J2000.0 epoch (2000-01-01 12:00:00 TT)
pub const J2000_JD: f64 = 2_451_545.0;

/// Number of days in a Julian century
pub const JULIAN_DAYS_PER_CENTURY: f64 = 36_525.0;

/// Number of days in a Julian millennium, the time unit of the VSOP87 series
pub const JULIAN_DAYS_PER_MILLENNIUM: f64 = 365_250.0;

/// Degrees → radians
pub const RADEG: f64 = std::f64::consts::PI / 180.0;

/// Arcseconds → radians
pub const RADSEC: f64 = std::f64::consts::PI / 648000.0;

/// Hours → radians
pub const RADH: f64 = DPI / 24.0;

/// Speed of light in km/s
pub const VLIGHT: f64 = 2.99792458e5;

/// Speed of light in astronomical units per day
pub const VLIGHT_AU: f64 = VLIGHT / AU * SECONDS_PER_DAY;

/// Light travel time across one astronomical unit, in days
pub const LIGHT_TIME_DAYS_PER_AU: f64 = 1.0 / VLIGHT_AU;

// -------------------------------------------------------------------------------------------------
// Type aliases
// -------------------------------------------------------------------------------------------------

/// Angle in degrees
pub type Degree = f64;
/// Angle in arcseconds
pub type ArcSec = f64;
/// Angle in radians
pub type Radian = f64;
/// Julian centuries elapsed since J2000.0 (the `jT` time coordinate)
pub type JulianCentury = f64;
/// Julian Date (days)
pub type JD = f64;
