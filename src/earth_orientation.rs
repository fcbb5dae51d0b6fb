//! # Earth orientation models
//!
//! Mean obliquity of the ecliptic, precession of the equator and nutation, all expressed as
//! functions of `jT`, the number of Julian centuries since J2000.0.
//!
//! | Quantity   | Models                                   |
//! |------------|------------------------------------------|
//! | Obliquity  | IAU 1976 (Lieske), IAU 2006 (Capitaine)  |
//! | Precession | IAU 1976 (ζ, z, θ), IAU 2006 (ψ, ω, χ)  |
//! | Nutation   | IAU 2000B (77 lunisolar terms)           |
//!
//! The rotation values built on top of these models live in [`crate::ref_system`].

use nalgebra::Matrix3;

use crate::{
    constants::{ArcSec, JulianCentury, Radian, DPI, RADEG, RADSEC},
    ref_system::{rotmt, Axis},
};

/// Model used to compute the mean obliquity of the ecliptic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ObliquityModel {
    /// Lieske et al. (1977), ε₀ = 84381.448″
    Iau1976,
    /// Capitaine et al. (2003), ε₀ = 84381.406″
    #[default]
    Iau2006,
}

impl ObliquityModel {
    /// Mean obliquity of the ecliptic at `t` (radians).
    pub fn mean_obliquity(&self, t: JulianCentury) -> Radian {
        match self {
            ObliquityModel::Iau1976 => mean_obliquity_iau1976(t),
            ObliquityModel::Iau2006 => mean_obliquity_iau2006(t),
        }
    }
}

/// Model used to compute the precession matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PrecessionModel {
    /// Lieske et al. (1977), three Euler angles ζ, z, θ
    Iau1976,
    /// Capitaine et al. (2003), four-angle formulation
    #[default]
    Iau2006,
}

impl PrecessionModel {
    /// Precession matrix `P` from the J2000 mean equator to the mean equator of date `t`.
    pub fn matrix(&self, t: JulianCentury) -> Matrix3<f64> {
        match self {
            PrecessionModel::Iau1976 => precession_iau1976(t),
            PrecessionModel::Iau2006 => precession_iau2006(t),
        }
    }
}

/// Compute the mean obliquity of the ecliptic at a given epoch (IAU 1976 model).
///
/// Arguments
/// ---------
/// * `t`: Julian centuries since J2000.0.
///
/// Returns
/// --------
/// * Mean obliquity of the ecliptic in radians.
///
/// Formula
/// -------
/// ```text
/// ε(t) = ε₀ + ε₁·T + ε₂·T² + ε₃·T³
/// ```
/// with the coefficients in arcseconds, evaluated with Horner's method.
///
/// # See also
/// * [`mean_obliquity_iau2006`] – the IAU 2006 counterpart
pub fn mean_obliquity_iau1976(t: JulianCentury) -> Radian {
    let ob0 = ((23.0 * 3600.0 + 26.0 * 60.0) + 21.448) * RADSEC;
    let ob1 = -46.815 * RADSEC;
    let ob2 = -0.0006 * RADSEC;
    let ob3 = 0.00181 * RADSEC;

    ((ob3 * t + ob2) * t + ob1) * t + ob0
}

/// Compute the mean obliquity of the ecliptic at a given epoch (IAU 2006 model).
///
/// Arguments
/// ---------
/// * `t`: Julian centuries since J2000.0.
///
/// Returns
/// --------
/// * Mean obliquity of the ecliptic in radians.
///
/// Formula
/// -------
/// Fifth-order polynomial of Capitaine et al. (2003), in arcseconds:
/// ```text
/// ε(t) = 84381.406 − 46.836769·T − 0.0001831·T² + 0.00200340·T³ − 0.000000576·T⁴ − 0.0000000434·T⁵
/// ```
pub fn mean_obliquity_iau2006(t: JulianCentury) -> Radian {
    let epsilon = ((((-0.0000000434 * t - 0.000000576) * t + 0.00200340) * t - 0.0001831) * t
        - 46.836769)
        * t
        + 84381.406;

    epsilon * RADSEC
}

/// Compute the precession matrix from J2000 to the mean equator and equinox of a given epoch (IAU 1976 model).
///
/// Arguments
/// ---------
/// * `t`: Julian centuries since J2000.0 (epoch of transformation).
///
/// Returns
/// --------
/// * A 3×3 orthonormal matrix `P` such that `x_mean(t) = P · x_J2000`.
///
/// Method
/// ------
/// ```text
/// ζ(T) = (0.6406161 + 0.0000839·T + 0.0000050·T²) · T  [deg]
/// θ(T) = (0.5567530 - 0.0001185·T - 0.0000116·T²) · T  [deg]
/// z(T) = (0.6406161 + 0.0003041·T + 0.0000051·T²) · T  [deg]
/// ```
/// and `P = R_z(z) · R_y(−θ) · R_z(ζ)` with active rotations.
///
/// # See also
/// * [`precession_iau2006`] – the IAU 2006 counterpart
pub fn precession_iau1976(t: JulianCentury) -> Matrix3<f64> {
    let zed = 0.6406161 * RADEG;
    let zd = 0.6406161 * RADEG;
    let thd = 0.5567530 * RADEG;

    let zedd = 0.0000839 * RADEG;
    let zdd = 0.0003041 * RADEG;
    let thdd = -0.0001185 * RADEG;

    let zeddd = 0.0000050 * RADEG;
    let zddd = 0.0000051 * RADEG;
    let thddd = -0.0000116 * RADEG;

    let zeta = ((zeddd * t + zedd) * t + zed) * t;
    let z = ((zddd * t + zdd) * t + zd) * t;
    let theta = ((thddd * t + thdd) * t + thd) * t;

    rotmt(z, Axis::Z) * rotmt(-theta, Axis::Y) * rotmt(zeta, Axis::Z)
}

/// Compute the precession matrix from J2000 to the mean equator and equinox of a given epoch (IAU 2006 model).
///
/// Arguments
/// ---------
/// * `t`: Julian centuries since J2000.0 (TT).
///
/// Returns
/// --------
/// * A 3×3 orthonormal matrix `P` such that `x_mean(t) = P · x_J2000`.
///
/// Method
/// ------
/// Four-angle formulation of Capitaine et al. (2003): the precession angles ψ_A, ω_A and χ_A
/// are composed as `R3(χ_A) · R1(−ω_A) · R3(−ψ_A) · R1(ε₀)` (passive rotations).
pub fn precession_iau2006(t: JulianCentury) -> Matrix3<f64> {
    const EPS0: ArcSec = 84381.406;

    let psi_a = ((((-0.0000000951 * t + 0.000132851) * t - 0.00114045) * t - 1.0790069) * t
        + 5038.481507)
        * t;

    let omega_a =
        ((((0.0000003337 * t - 0.000000467) * t - 0.00772503) * t + 0.0512623) * t - 0.025754) * t
            + EPS0;

    let chi_a = ((((-0.0000000560 * t + 0.000170663) * t - 0.00121197) * t - 2.3814292) * t
        + 10.556403)
        * t;

    let (sa, ca) = (EPS0 * RADSEC).sin_cos();
    let (sb, cb) = (-psi_a * RADSEC).sin_cos();
    let (sc, cc) = (-omega_a * RADSEC).sin_cos();
    let (sd, cd) = (chi_a * RADSEC).sin_cos();

    #[rustfmt::skip]
    let m = Matrix3::new(
        cd * cb - sb * sd * cc,
        cd * sb * ca + sd * cc * cb * ca - sa * sd * sc,
        cd * sb * sa + sd * cc * cb * sa + ca * sd * sc,

        -sd * cb - sb * cd * cc,
        -sd * sb * ca + cd * cc * cb * ca - sa * cd * sc,
        -sd * sb * sa + cd * cc * cb * sa + ca * cd * sc,

        sb * sc,
        -sc * cb * ca - sa * cc,
        -sc * cb * sa + cc * ca,
    );

    m
}

/// Compute the five Delaunay fundamental arguments in radians.
///
/// Returns `[l, l', F, D, Ω]`:
/// - `l`  mean anomaly of the Moon
/// - `l'` mean anomaly of the Sun
/// - `F`  mean argument of latitude of the Moon
/// - `D`  mean elongation of the Moon from the Sun
/// - `Ω`  mean longitude of the ascending node of the Moon
///
/// Polynomials from the IERS Conventions 2010, Table 5.2e.
pub fn fundamental_arguments(t: JulianCentury) -> [Radian; 5] {
    let t2 = t * t;
    let t3 = t2 * t;
    let t4 = t3 * t;

    let l = 485868.249036 + 1717915923.2178 * t + 31.8792 * t2 + 0.051635 * t3 - 0.00024470 * t4;
    let lp = 1287104.79305 + 129596581.0481 * t - 0.5532 * t2 + 0.000136 * t3 - 0.00001149 * t4;
    let f = 335779.526232 + 1739527262.8478 * t - 12.7512 * t2 - 0.001037 * t3 + 0.00000417 * t4;
    let d = 1072260.70369 + 1602961601.2090 * t - 6.3706 * t2 + 0.006593 * t3 - 0.00003169 * t4;
    let om = 450160.398036 - 6962890.5431 * t + 7.4722 * t2 + 0.007702 * t3 - 0.00005939 * t4;

    [l, lp, f, d, om].map(|arg| (arg * RADSEC).rem_euclid(DPI))
}

/// IAU 2000B lunisolar nutation terms.
///
/// Each row: `[nl, nl', nF, nD, nΩ, S, S', C, C']` where `S`, `S'` (Δψ) and `C`, `C'` (Δε)
/// are in units of 0.1 μas (1e-7 arcsec).
#[rustfmt::skip]
static NUTATION_2000B: [[i64; 9]; 77] = [
    //  nl  nl'  nF   nD   nΩ        S         S'          C          C'
    [   0,   0,   0,   0,   1, -172064161,  -174666,   92052331,    9086],
    [   0,   0,   2,  -2,   2,  -13170906,    -1675,    5730336,   -3015],
    [   0,   0,   2,   0,   2,   -2276413,     -234,     978459,    -485],
    [   0,   0,   0,   0,   2,    2074554,      207,    -897492,     470],
    [   0,   1,   0,   0,   0,    1475877,    -3633,      73871,    -184],
    [   0,   1,   2,  -2,   2,    -516821,     1226,     224386,    -677],
    [   1,   0,   0,   0,   0,     711159,       73,      -6750,       0],
    [   0,   0,   2,   0,   1,    -387298,     -367,     200728,      18],
    [   1,   0,   2,   0,   2,    -301461,      -36,     129025,     -63],
    [   0,  -1,   2,  -2,   2,     215829,     -494,     -95929,     299],
    [   0,   0,   2,  -2,   1,     128227,      137,     -68982,      -9],
    [  -1,   0,   2,   0,   2,     123457,       11,     -53311,      32],
    [  -1,   0,   0,   2,   0,     156994,       10,      -1235,       0],
    [   1,   0,   0,   0,   1,      63110,       63,     -33228,       0],
    [  -1,   0,   0,   0,   1,     -57976,      -63,      31429,       0],
    [  -1,   0,   2,   2,   2,     -59641,      -11,      25543,     -11],
    [   1,   0,   2,   0,   1,     -51613,      -42,      26366,       0],
    [  -2,   0,   2,   0,   1,      45893,       50,     -24236,     -10],
    [   0,   0,   0,   2,   0,      63384,       11,      -1220,       0],
    [   0,   0,   2,   2,   2,     -38571,       -1,      16452,     -11],
    [   0,  -2,   2,  -2,   2,      32481,        0,     -13870,       0],
    [  -2,   0,   0,   2,   0,     -47722,        0,        477,       0],
    [   2,   0,   2,   0,   2,     -31046,       -1,      13238,     -11],
    [   1,   0,   2,  -2,   2,      28593,        0,     -12338,      10],
    [  -1,   0,   2,   0,   1,      20441,       21,     -10758,       0],
    [   2,   0,   0,   0,   0,      29243,        0,       -609,       0],
    [   0,   0,   2,   0,   0,      25887,        0,       -550,       0],
    [   0,   1,   0,   0,   1,     -14053,      -25,       8551,      -2],
    [  -1,   0,   0,   2,   1,      15164,       10,      -8001,       0],
    [   0,   2,   2,  -2,   2,     -15794,       72,       6850,     -42],
    [   0,   0,  -2,   2,   0,      21783,        0,       -167,       0],
    [   1,   0,   0,  -2,   1,     -12873,      -10,       6953,       0],
    [   0,  -1,   0,   0,   1,     -12654,       11,       6415,       0],
    [  -1,   0,   2,   2,   1,     -10204,        0,       5222,       0],
    [   0,   2,   0,   0,   0,      16707,      -85,        168,      -1],
    [   1,   0,   2,   2,   2,      -7691,        0,       3268,       0],
    [  -2,   0,   2,   0,   0,     -11024,        0,        104,       0],
    [   0,   1,   2,   0,   2,       7566,      -21,      -3250,       0],
    [   0,   0,   2,   2,   1,      -6637,      -11,       3353,       0],
    [   0,  -1,   2,   0,   2,      -7141,       21,       3070,       0],
    [   0,   0,   0,   2,   1,      -6302,      -11,       3272,       0],
    [   1,   0,   2,  -2,   1,       5800,       10,      -3045,       0],
    [   2,   0,   2,  -2,   2,       6443,        0,      -2768,       0],
    [  -2,   0,   0,   2,   1,      -5774,      -11,       3041,       0],
    [   2,   0,   2,   0,   1,      -5350,        0,       2695,       0],
    [   0,  -1,   2,  -2,   1,      -4752,      -11,       2719,       0],
    [   0,   0,   0,  -2,   1,      -4940,      -11,       2720,       0],
    [  -1,  -1,   0,   2,   0,       7350,        0,        -51,       0],
    [   2,   0,   0,  -2,   1,      -4803,      -11,       2556,       0],
    [   1,   0,   0,   2,   0,      -7677,        0,        462,       0],
    [   0,   1,   2,  -2,   1,       5417,        0,      -2520,       0],
    [   1,  -1,   0,   0,   0,       6624,        0,       -468,       0],
    [  -2,   0,   2,   0,   2,      -5433,        0,       2334,       0],
    [   3,   0,   2,   0,   2,      -4632,        0,       1991,       0],
    [   0,  -1,   0,   2,   0,       6106,        0,       -167,       0],
    [   1,  -1,   2,   0,   2,      -3593,        0,       1556,       0],
    [   0,   0,   0,   1,   0,      -4766,        0,        270,       0],
    [  -1,  -1,   2,   2,   2,      -4095,        0,       1793,       0],
    [  -1,   0,   2,   0,   0,       4229,        0,       -101,       0],
    [   0,  -1,   2,   2,   2,      -3372,        0,       1487,       0],
    [   2,   0,   0,   0,   1,      -3353,        0,       1758,       0],
    [   1,   0,   2,   0,   0,      -3523,        0,        246,       0],
    [   1,   1,   0,   0,   0,      -3613,        0,        329,       0],
    [  -1,   0,   2,  -2,   1,       3522,        0,      -1830,       0],
    [   2,   0,   0,   0,  -1,       3312,        0,      -1730,       0],
    [   0,   0,  -2,   2,   1,      -3142,        0,       1704,       0],
    [   0,   1,   0,   0,  -1,      -2927,        0,       1564,       0],
    [   0,   1,   2,   0,   1,      -2887,        0,       1401,       0],
    [   0,  -1,   2,   0,   1,       2451,        0,      -1200,       0],
    [   2,   0,  -2,   0,   0,      -2790,        0,        410,       0],
    [  -1,   0,   0,   2,  -1,       2145,        0,      -1154,       0],
    [   0,   0,   2,  -2,   0,       2816,        0,        286,       0],
    [   0,   1,   0,  -2,   0,       2700,        0,       -258,       0],
    [   1,   0,   0,  -1,   0,      -2330,        0,        -37,       0],
    [   0,   0,   0,   0,   2,       2283,        0,      -1039,       0],
    [   1,   0,  -2,   0,   0,      -2321,        0,        284,       0],
    [  -1,   0,   0,   1,   1,      -2049,        0,       1112,       0],
];

/// Fixed offsets standing in for the planetary nutation terms in IAU 2000B (arcseconds).
const DPSI_PLANETARY: ArcSec = -0.000_135;
const DEPS_PLANETARY: ArcSec = 0.000_388;

/// Compute the nutation angles in longitude and obliquity using the IAU 2000B model.
///
/// Arguments
/// ---------
/// * `t`: Julian centuries since J2000.0.
///
/// Returns
/// --------
/// * A tuple `(Δψ, Δε)` in arcseconds:
///     - `Δψ`: nutation in longitude
///     - `Δε`: nutation in obliquity
///
/// Description
/// -----------
/// Sum of the 77 lunisolar terms of McCarthy & Luzum (2003) plus the fixed offsets
/// replacing the planetary terms. Accuracy is about 1 mas over 1995–2050.
pub fn nutation_iau2000b(t: JulianCentury) -> (ArcSec, ArcSec) {
    let args = fundamental_arguments(t);

    let (dpsi, deps) = NUTATION_2000B
        .iter()
        .fold((0.0, 0.0), |(dpsi, deps), row| {
            let arg = row[..5]
                .iter()
                .zip(args.iter())
                .map(|(&n, &a)| n as f64 * a)
                .sum::<f64>();
            let (sin_arg, cos_arg) = arg.sin_cos();

            (
                dpsi + (row[5] as f64 + row[6] as f64 * t) * sin_arg,
                deps + (row[7] as f64 + row[8] as f64 * t) * cos_arg,
            )
        });

    (
        dpsi * 1e-7 + DPSI_PLANETARY,
        deps * 1e-7 + DEPS_PLANETARY,
    )
}

/// Build the nutation matrix from the mean obliquity and the nutation angles.
///
/// Arguments
/// ---------
/// * `eps_mean`: mean obliquity of date (radians)
/// * `dpsi`: nutation in longitude (radians)
/// * `deps`: nutation in obliquity (radians)
///
/// Returns
/// --------
/// * A 3×3 orthonormal matrix `N` such that `x_true = N · x_mean`, equal to
///   `R_x(ε + Δε) · R_z(Δψ) · R_x(−ε)` with active rotations.
pub fn nutation_matrix(eps_mean: Radian, dpsi: Radian, deps: Radian) -> Matrix3<f64> {
    let eps_true = eps_mean + deps;

    let (sobm, cobm) = eps_mean.sin_cos();
    let (sobt, cobt) = eps_true.sin_cos();
    let (spsi, cpsi) = dpsi.sin_cos();

    #[rustfmt::skip]
    let n = Matrix3::new(
        cpsi,          -spsi * cobm,                      -spsi * sobm,
        spsi * cobt,    cpsi * cobm * cobt + sobm * sobt,  cpsi * sobm * cobt - cobm * sobt,
        spsi * sobt,    cpsi * cobm * sobt - sobm * cobt,  cpsi * sobm * sobt + cobm * cobt,
    );

    n
}

#[cfg(test)]
mod test_earth_orientation {
    use super::*;
    use approx::assert_relative_eq;

    const JT_2022_01_11: JulianCentury = 0.2202737850787132;

    fn assert_orthonormal(m: &Matrix3<f64>) {
        assert_relative_eq!(m * m.transpose(), Matrix3::identity(), epsilon = 1e-14);
        assert_relative_eq!(m.determinant(), 1.0, epsilon = 1e-14);
    }

    #[test]
    fn test_obliquity() {
        assert_eq!(mean_obliquity_iau1976(0.0), 0.40909280422232897);
        assert_relative_eq!(mean_obliquity_iau2006(0.0), 84381.406 * RADSEC);
        assert_eq!(
            ObliquityModel::default().mean_obliquity(0.0),
            mean_obliquity_iau2006(0.0)
        );
    }

    #[test]
    fn test_obliquity_models_agree() {
        // 0.042″ offset at J2000 plus a slowly growing rate difference
        for t in [-1.0, 0.0, 0.22, 1.0] {
            let diff = (mean_obliquity_iau1976(t) - mean_obliquity_iau2006(t)) / RADSEC;
            assert!(diff.abs() < 0.1, "t = {t}: {diff}″");
        }
    }

    #[test]
    fn test_obliquity_decreases() {
        assert!(mean_obliquity_iau2006(1.0) < mean_obliquity_iau2006(0.0));
        assert_relative_eq!(
            (mean_obliquity_iau2006(0.01) - mean_obliquity_iau2006(0.0)) / RADSEC,
            -0.468,
            epsilon = 1e-3
        );
    }

    mod test_precession {
        use super::*;

        #[test]
        fn test_precession_at_j2000_is_identity() {
            assert_relative_eq!(precession_iau1976(0.0), Matrix3::identity(), epsilon = 1e-15);
            assert_relative_eq!(precession_iau2006(0.0), Matrix3::identity(), epsilon = 1e-12);
        }

        #[test]
        fn test_precession_orthonormal() {
            assert_orthonormal(&precession_iau1976(JT_2022_01_11));
            assert_orthonormal(&precession_iau2006(JT_2022_01_11));
        }

        #[test]
        fn test_precession_models_agree() {
            let p76 = precession_iau1976(JT_2022_01_11);
            let p06 = precession_iau2006(JT_2022_01_11);
            // Both models agree to well below 0.1″ over a few decades
            assert_relative_eq!(p76, p06, epsilon = 0.1 * RADSEC);
        }

        #[test]
        fn test_precession_moves_equinox() {
            // The J2000 equinox drifts eastwards by about 50.3″ per year
            let p = precession_iau2006(0.01);
            let equinox = p * nalgebra::Vector3::x();
            let shift = equinox.y.atan2(equinox.x).abs() / RADSEC;
            assert_relative_eq!(shift, 46.1, epsilon = 0.2);
        }
    }

    mod test_nutation {
        use super::*;

        #[test]
        fn test_fundamental_arguments_range() {
            for a in fundamental_arguments(JT_2022_01_11) {
                assert!((0.0..DPI).contains(&a));
            }
        }

        #[test]
        fn test_nutation_at_date() {
            let (dpsi, deps) = nutation_iau2000b(JT_2022_01_11);
            assert_relative_eq!(dpsi, -13.789, epsilon = 1e-3);
            assert_relative_eq!(deps, 4.420, epsilon = 1e-3);
        }

        #[test]
        fn test_nutation_amplitude() {
            for i in 0..40 {
                let (dpsi, deps) = nutation_iau2000b(-0.2 + i as f64 * 0.01);
                assert!(dpsi.abs() < 20.0);
                assert!(deps.abs() < 11.0);
            }
        }

        #[test]
        fn test_nutation_matrix() {
            let eps = mean_obliquity_iau2006(JT_2022_01_11);
            assert_relative_eq!(
                nutation_matrix(eps, 0.0, 0.0),
                Matrix3::identity(),
                epsilon = 1e-15
            );

            let (dpsi, deps) = nutation_iau2000b(JT_2022_01_11);
            let n = nutation_matrix(eps, dpsi * RADSEC, deps * RADSEC);
            assert_orthonormal(&n);

            let composed = rotmt(eps + deps * RADSEC, Axis::X)
                * rotmt(dpsi * RADSEC, Axis::Z)
                * rotmt(-eps, Axis::X);
            assert_relative_eq!(n, composed, epsilon = 1e-15);
        }
    }
}
