use std::sync::LazyLock;

use vigor_core::models::classification::TugRisk;
use vigor_core::models::measurements::{Measurements, TugInput};
use vigor_core::models::patient::PatientProfile;
use vigor_core::models::protocol::ProtocolId;
use vigor_core::models::result::{AssessmentOutcome, TugOutcome};

use crate::Protocol;
use crate::error::InstrumentError;
use crate::scoring::{MeasurementKind, MeasurementRange, ScoreRange};

/// Timed Up and Go. Fixed thresholds, no demographic adjustment.
pub struct TimedUpAndGo;

impl Protocol for TimedUpAndGo {
    fn id(&self) -> ProtocolId {
        ProtocolId::Tug
    }

    fn measurement_ranges(&self) -> &[MeasurementRange] {
        static RANGES: LazyLock<Vec<MeasurementRange>> = LazyLock::new(|| {
            vec![MeasurementRange::new(
                "time_seconds",
                "Time to stand, walk 3 m, return and sit",
                MeasurementKind::Seconds,
                ScoreRange {
                    min: 0.0,
                    max: 300.0,
                    step: None,
                },
            )]
        });
        &RANGES
    }

    fn score(
        &self,
        input: &Measurements,
        _profile: &PatientProfile,
    ) -> Result<AssessmentOutcome, InstrumentError> {
        match input {
            Measurements::Tug(i) => score(i).map(AssessmentOutcome::Tug),
            other => Err(self.mismatch(other)),
        }
    }
}

pub fn score(input: &TugInput) -> Result<TugOutcome, InstrumentError> {
    let time_seconds = input
        .time_seconds
        .filter(|t| t.is_finite())
        .ok_or(InstrumentError::Incomplete {
            protocol: ProtocolId::Tug,
            field: "time_seconds",
        })?;

    Ok(TugOutcome {
        time_seconds,
        classification: classify(time_seconds),
    })
}

/// Under 10 s low risk, 10–20 s inclusive moderate, over 20 s high.
pub fn classify(time_seconds: f64) -> TugRisk {
    if time_seconds < 10.0 {
        TugRisk::LowRisk
    } else if time_seconds <= 20.0 {
        TugRisk::ModerateRisk
    } else {
        TugRisk::HighRisk
    }
}
