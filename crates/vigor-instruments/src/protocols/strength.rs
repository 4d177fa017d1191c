//! 30-second chair stand (lower body) and arm curl (upper body).
//!
//! Both compare a repetition count against an age/sex-banded normal range
//! and share the same five-tier rule.

use std::sync::LazyLock;

use vigor_core::models::classification::FitnessClass;
use vigor_core::models::measurements::{Measurements, RepetitionInput};
use vigor_core::models::patient::PatientProfile;
use vigor_core::models::protocol::ProtocolId;
use vigor_core::models::result::{AssessmentOutcome, ReferenceRange, RepetitionOutcome};

use crate::Protocol;
use crate::error::InstrumentError;
use crate::scoring::{MeasurementKind, MeasurementRange, ScoreRange};
use crate::tables::{ARM_CURL, BandTable, CHAIR_STAND};

pub struct ChairStand;

pub struct ArmCurl;

fn repetition_ranges(name: &str) -> Vec<MeasurementRange> {
    vec![MeasurementRange::new(
        "repetitions",
        name,
        MeasurementKind::Repetitions,
        ScoreRange {
            min: 0.0,
            max: 60.0,
            step: Some(1.0),
        },
    )]
}

impl Protocol for ChairStand {
    fn id(&self) -> ProtocolId {
        ProtocolId::ChairStand
    }

    fn measurement_ranges(&self) -> &[MeasurementRange] {
        static RANGES: LazyLock<Vec<MeasurementRange>> =
            LazyLock::new(|| repetition_ranges("Full stands in 30 s"));
        &RANGES
    }

    fn score(
        &self,
        input: &Measurements,
        profile: &PatientProfile,
    ) -> Result<AssessmentOutcome, InstrumentError> {
        match input {
            Measurements::ChairStand(i) => {
                score(&CHAIR_STAND, i, profile).map(AssessmentOutcome::ChairStand)
            }
            other => Err(self.mismatch(other)),
        }
    }
}

impl Protocol for ArmCurl {
    fn id(&self) -> ProtocolId {
        ProtocolId::ArmCurl
    }

    fn measurement_ranges(&self) -> &[MeasurementRange] {
        static RANGES: LazyLock<Vec<MeasurementRange>> =
            LazyLock::new(|| repetition_ranges("Arm curls in 30 s"));
        &RANGES
    }

    fn score(
        &self,
        input: &Measurements,
        profile: &PatientProfile,
    ) -> Result<AssessmentOutcome, InstrumentError> {
        match input {
            Measurements::ArmCurl(i) => score(&ARM_CURL, i, profile).map(AssessmentOutcome::ArmCurl),
            other => Err(self.mismatch(other)),
        }
    }
}

pub fn score(
    table: &BandTable,
    input: &RepetitionInput,
    profile: &PatientProfile,
) -> Result<RepetitionOutcome, InstrumentError> {
    let repetitions = input.repetitions.ok_or(InstrumentError::Incomplete {
        protocol: table.protocol,
        field: "repetitions",
    })?;
    let reference = table.lookup(profile.age, profile.sex)?;

    Ok(RepetitionOutcome {
        repetitions,
        reference,
        classification: classify(repetitions, reference),
    })
}

/// Two below the range is "regular", up to three above is "muito bom".
pub fn classify(repetitions: u32, reference: ReferenceRange) -> FitnessClass {
    let reps = f64::from(repetitions);
    if reps < reference.min - 2.0 {
        FitnessClass::Poor
    } else if reps < reference.min {
        FitnessClass::Fair
    } else if reps <= reference.max {
        FitnessClass::Good
    } else if reps <= reference.max + 3.0 {
        FitnessClass::VeryGood
    } else {
        FitnessClass::Excellent
    }
}
