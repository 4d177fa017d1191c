use std::sync::LazyLock;

use vigor_core::models::classification::FrailtyClass;
use vigor_core::models::measurements::{FriedInput, Measurements};
use vigor_core::models::patient::PatientProfile;
use vigor_core::models::protocol::ProtocolId;
use vigor_core::models::result::{AssessmentOutcome, FriedCriteria, FriedOutcome};

use crate::Protocol;
use crate::error::InstrumentError;
use crate::scoring::{MeasurementKind, MeasurementRange, ScoreRange};
use crate::tables::{gait_speed_cutoff, grip_strength_cutoff};

/// Fried frailty phenotype: five criteria, one point each.
/// 0 not frail, 1–2 pre-frail, 3+ frail.
pub struct FriedFrailty;

impl Protocol for FriedFrailty {
    fn id(&self) -> ProtocolId {
        ProtocolId::FriedFrailty
    }

    fn measurement_ranges(&self) -> &[MeasurementRange] {
        static RANGES: LazyLock<Vec<MeasurementRange>> = LazyLock::new(|| {
            vec![
                MeasurementRange::new(
                    "grip_strength_kg",
                    "Grip strength",
                    MeasurementKind::Kilograms,
                    ScoreRange {
                        min: 0.0,
                        max: 100.0,
                        step: None,
                    },
                ),
                MeasurementRange::new(
                    "gait_speed_seconds",
                    "Gait speed (4.6 m walk)",
                    MeasurementKind::Seconds,
                    ScoreRange {
                        min: 0.0,
                        max: 60.0,
                        step: None,
                    },
                ),
            ]
        });
        &RANGES
    }

    fn score(
        &self,
        input: &Measurements,
        profile: &PatientProfile,
    ) -> Result<AssessmentOutcome, InstrumentError> {
        match input {
            Measurements::FriedFrailty(i) => Ok(AssessmentOutcome::FriedFrailty(score(i, profile))),
            other => Err(self.mismatch(other)),
        }
    }
}

/// Score the phenotype. Never fails: a blank or non-numeric grip or gait
/// measurement simply leaves that criterion unmet.
pub fn score(input: &FriedInput, profile: &PatientProfile) -> FriedOutcome {
    let grip_cutoff_kg = grip_strength_cutoff(profile.sex, profile.bmi);
    let gait_cutoff_seconds = gait_speed_cutoff(profile.sex, profile.height_meters);

    let grip = input.grip_strength_kg.filter(|v| v.is_finite());
    let gait = input.gait_speed_seconds.filter(|v| v.is_finite());

    let criteria = FriedCriteria {
        weight_loss: u8::from(input.weight_loss),
        fatigue: u8::from(input.fatigue),
        low_activity: u8::from(input.low_activity),
        grip_strength: u8::from(grip.is_some_and(|kg| kg <= grip_cutoff_kg)),
        gait_speed: u8::from(gait.is_some_and(|s| s >= gait_cutoff_seconds)),
    };
    let total_score = criteria.total();

    FriedOutcome {
        input: *input,
        criteria,
        grip_cutoff_kg,
        gait_cutoff_seconds,
        total_score,
        classification: classify(total_score),
    }
}

pub fn classify(total_score: u8) -> FrailtyClass {
    match total_score {
        0 => FrailtyClass::NotFrail,
        1..=2 => FrailtyClass::PreFrail,
        _ => FrailtyClass::Frail,
    }
}
