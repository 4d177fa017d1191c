use serde::{Deserialize, Serialize};
use thiserror::Error;
use ts_rs::TS;

use vigor_core::models::measurements::{MeemSection, Measurements};

/// The unit a raw measurement is recorded in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum MeasurementKind {
    Seconds,
    Kilograms,
    /// Signed distance; negative means short of the target.
    Centimeters,
    Repetitions,
    /// Questionnaire or rating-scale points.
    Points,
}

/// Defines the admissible range for a measurement.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScoreRange {
    pub min: f64,
    pub max: f64,
    pub step: Option<f64>,
}

impl ScoreRange {
    pub fn contains(&self, value: f64) -> bool {
        if !(self.min..=self.max).contains(&value) {
            return false;
        }
        if let Some(step) = self.step {
            let offset = value - self.min;
            let remainder = offset % step;
            // Allow floating point tolerance
            remainder < 1e-9 || (step - remainder) < 1e-9
        } else {
            true
        }
    }
}

/// One raw field a protocol accepts, with its admissible range.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct MeasurementRange {
    pub id: String,
    pub name: String,
    pub kind: MeasurementKind,
    pub range: ScoreRange,
}

impl MeasurementRange {
    pub fn new(id: &str, name: &str, kind: MeasurementKind, range: ScoreRange) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            kind,
            range,
        }
    }
}

/// A raw value pulled out of a measurement payload for validation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct MeasurementValue {
    pub field_id: String,
    pub value: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS, Error)]
#[ts(export)]
#[error("{message}")]
pub struct ValidationError {
    pub field_id: String,
    pub value: f64,
    pub expected_range: ScoreRange,
    pub kind: MeasurementKind,
    pub message: String,
}

fn value(field_id: impl Into<String>, value: f64) -> MeasurementValue {
    MeasurementValue {
        field_id: field_id.into(),
        value,
    }
}

/// Numeric fields present in a payload. Blank optional fields and booleans
/// are not listed.
pub fn measurement_values(input: &Measurements) -> Vec<MeasurementValue> {
    match input {
        Measurements::FriedFrailty(i) => [
            i.grip_strength_kg.map(|v| value("grip_strength_kg", v)),
            i.gait_speed_seconds.map(|v| value("gait_speed_seconds", v)),
        ]
        .into_iter()
        .flatten()
        .collect(),
        Measurements::Tug(i) => i
            .time_seconds
            .map(|v| value("time_seconds", v))
            .into_iter()
            .collect(),
        Measurements::ChairStand(i) | Measurements::ArmCurl(i) => i
            .repetitions
            .map(|v| value("repetitions", f64::from(v)))
            .into_iter()
            .collect(),
        Measurements::SitAndReach(i) => i
            .distance_cm
            .map(|v| value("distance_cm", v))
            .into_iter()
            .collect(),
        Measurements::Gds15(_) => Vec::new(),
        Measurements::Meem(i) => MeemSection::ALL
            .into_iter()
            .map(|s| value(meem_field_id(s), f64::from(i.section(s))))
            .collect(),
        Measurements::BergBalance(i) => i
            .item_scores
            .iter()
            .enumerate()
            .map(|(idx, &s)| value(format!("berg_item_{}", idx + 1), f64::from(s)))
            .collect(),
    }
}

pub(crate) fn meem_field_id(section: MeemSection) -> &'static str {
    match section {
        MeemSection::Orientation => "orientation",
        MeemSection::Registration => "registration",
        MeemSection::Attention => "attention",
        MeemSection::Recall => "recall",
        MeemSection::Language => "language",
    }
}
