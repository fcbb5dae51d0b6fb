//! Heliocentric ecliptic J2000 providers.

use std::sync::Arc;

use nalgebra::Vector3;

use crate::{
    constants::JulianCentury,
    ephemeris::Ephemeris,
    metadata::Metadata,
    vsop87::{
        series::{evaluate, evaluate_rate, evaluate_rate_sequential, evaluate_sequential},
        table::CoefficientTable,
    },
};

/// Reduction strategy of a [`SeriesEphemeris`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Evaluation {
    /// Partial sums as fork-join tasks on the global `rayon` pool.
    #[default]
    Parallel,
    /// Partial sums on the calling thread.
    Sequential,
}

/// A body whose heliocentric position is given by a VSOP87A coefficient table.
#[derive(Debug, Clone)]
pub struct SeriesEphemeris {
    table: Arc<CoefficientTable>,
    evaluation: Evaluation,
}

impl SeriesEphemeris {
    pub fn new(table: Arc<CoefficientTable>) -> Self {
        SeriesEphemeris {
            table,
            evaluation: Evaluation::default(),
        }
    }

    /// Select the reduction strategy; both return the same vectors.
    pub fn with_evaluation(mut self, evaluation: Evaluation) -> Self {
        self.evaluation = evaluation;
        self
    }

    pub fn evaluation(&self) -> Evaluation {
        self.evaluation
    }

    pub fn table(&self) -> &Arc<CoefficientTable> {
        &self.table
    }
}

impl Ephemeris for SeriesEphemeris {
    fn metadata(&self) -> Metadata {
        Metadata::HELIOCENTRIC_ECLIPTIC_J2000
    }

    fn position(&self, jt: JulianCentury) -> Vector3<f64> {
        match self.evaluation {
            Evaluation::Parallel => evaluate(&self.table, jt),
            Evaluation::Sequential => evaluate_sequential(&self.table, jt),
        }
    }

    fn velocity(&self, jt: JulianCentury) -> Vector3<f64> {
        match self.evaluation {
            Evaluation::Parallel => evaluate_rate(&self.table, jt),
            Evaluation::Sequential => evaluate_rate_sequential(&self.table, jt),
        }
    }
}

/// The origin of the heliocentric frame.
///
/// Transformed to geocentric coordinates, it gives the apparent place of the Sun.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ZeroEphemeris;

impl Ephemeris for ZeroEphemeris {
    fn metadata(&self) -> Metadata {
        Metadata::HELIOCENTRIC_ECLIPTIC_J2000
    }

    fn position(&self, _jt: JulianCentury) -> Vector3<f64> {
        Vector3::zeros()
    }

    fn velocity(&self, _jt: JulianCentury) -> Vector3<f64> {
        Vector3::zeros()
    }
}
