use std::sync::LazyLock;

use vigor_core::models::classification::FlexibilityClass;
use vigor_core::models::measurements::{Measurements, SitAndReachInput};
use vigor_core::models::patient::PatientProfile;
use vigor_core::models::protocol::ProtocolId;
use vigor_core::models::result::{AssessmentOutcome, ReferenceRange, SitAndReachOutcome};

use crate::Protocol;
use crate::error::InstrumentError;
use crate::scoring::{MeasurementKind, MeasurementRange, ScoreRange};
use crate::tables::SIT_AND_REACH;

/// Chair sit-and-reach flexibility test.
pub struct SitAndReach;

impl Protocol for SitAndReach {
    fn id(&self) -> ProtocolId {
        ProtocolId::SitAndReach
    }

    fn measurement_ranges(&self) -> &[MeasurementRange] {
        static RANGES: LazyLock<Vec<MeasurementRange>> = LazyLock::new(|| {
            vec![MeasurementRange::new(
                "distance_cm",
                "Fingertip to toe distance",
                MeasurementKind::Centimeters,
                ScoreRange {
                    min: -50.0,
                    max: 50.0,
                    step: None,
                },
            )]
        });
        &RANGES
    }

    fn score(
        &self,
        input: &Measurements,
        profile: &PatientProfile,
    ) -> Result<AssessmentOutcome, InstrumentError> {
        match input {
            Measurements::SitAndReach(i) => score(i, profile).map(AssessmentOutcome::SitAndReach),
            other => Err(self.mismatch(other)),
        }
    }
}

pub fn score(
    input: &SitAndReachInput,
    profile: &PatientProfile,
) -> Result<SitAndReachOutcome, InstrumentError> {
    let distance_cm = input
        .distance_cm
        .filter(|d| d.is_finite())
        .ok_or(InstrumentError::Incomplete {
            protocol: ProtocolId::SitAndReach,
            field: "distance_cm",
        })?;
    let reference = SIT_AND_REACH.lookup(profile.age, profile.sex)?;

    Ok(SitAndReachOutcome {
        distance_cm,
        reference,
        classification: classify(distance_cm, reference),
    })
}

/// The normal range is split at its midpoint into "regular" and "bom".
pub fn classify(distance_cm: f64, reference: ReferenceRange) -> FlexibilityClass {
    if distance_cm < reference.min {
        FlexibilityClass::Poor
    } else if distance_cm <= reference.midpoint() {
        FlexibilityClass::Fair
    } else if distance_cm <= reference.max {
        FlexibilityClass::Good
    } else {
        FlexibilityClass::VeryGood
    }
}
