//! Coefficient tables of the VSOP87 periodic series.
//!
//! A table stores, for each rectangular axis X, Y, Z and each power `k ∈ 0..=5` of the time
//! argument, an ordered sequence of [`Term`]s `A·cos(B + C·t)`. Tables are assembled once, then
//! shared read-only (usually behind an `Arc`) by every ephemeris evaluating them.

use crate::{geovsop_errors::GeoVsopError, ref_system::Axis};

/// Number of powers of the time argument in a VSOP87 series (`T⁰` to `T⁵`).
pub const POWERS: usize = 6;

/// One periodic term `A·cos(B + C·t)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Term {
    /// Amplitude `A` (AU)
    pub amplitude: f64,
    /// Phase `B` (radians)
    pub phase: f64,
    /// Frequency `C` (radians per Julian millennium)
    pub frequency: f64,
}

impl Term {
    pub const fn new(amplitude: f64, phase: f64, frequency: f64) -> Self {
        Term {
            amplitude,
            phase,
            frequency,
        }
    }

    /// Value of the term at `t10` Julian millennia.
    #[inline]
    pub fn value(&self, t10: f64) -> f64 {
        self.amplitude * (self.phase + self.frequency * t10).cos()
    }

    /// Value of the term and of its time derivative at `t10` Julian millennia.
    #[inline]
    pub fn value_and_rate(&self, t10: f64) -> (f64, f64) {
        let (sin_arg, cos_arg) = (self.phase + self.frequency * t10).sin_cos();
        (
            self.amplitude * cos_arg,
            -self.amplitude * self.frequency * sin_arg,
        )
    }
}

/// The 18 series (3 axes × 6 powers) of one body.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CoefficientTable {
    series: [[Vec<Term>; POWERS]; 3],
}

impl CoefficientTable {
    /// An empty table: every series contributes zero.
    pub fn new() -> Self {
        CoefficientTable::default()
    }

    /// Build a table from its 18 series, indexed `[axis][power]`.
    pub fn from_series(series: [[Vec<Term>; POWERS]; 3]) -> Self {
        CoefficientTable { series }
    }

    /// Terms of the series of `axis` multiplied by `T^power`.
    ///
    /// An out-of-range power yields an empty slice.
    pub fn series(&self, axis: Axis, power: usize) -> &[Term] {
        self.series[axis.index()]
            .get(power)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Replace the series of `axis` multiplied by `T^power`.
    ///
    /// Return
    /// ------
    /// * [`GeoVsopError::InvalidParameter`] if `power` is not in `0..=5`
    pub fn set_series(
        &mut self,
        axis: Axis,
        power: usize,
        terms: Vec<Term>,
    ) -> Result<(), GeoVsopError> {
        let slot = self.series[axis.index()].get_mut(power).ok_or_else(|| {
            GeoVsopError::InvalidParameter(format!(
                "VSOP87 power must be in 0..={}, got {power}",
                POWERS - 1
            ))
        })?;
        *slot = terms;
        Ok(())
    }

    /// Builder-style variant of [`CoefficientTable::set_series`].
    pub fn with_series(
        mut self,
        axis: Axis,
        power: usize,
        terms: Vec<Term>,
    ) -> Result<Self, GeoVsopError> {
        self.set_series(axis, power, terms)?;
        Ok(self)
    }

    /// Total number of terms over the 18 series.
    pub fn term_count(&self) -> usize {
        self.series.iter().flatten().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.term_count() == 0
    }
}
