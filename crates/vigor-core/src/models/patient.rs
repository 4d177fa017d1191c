use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Biological sex as used by the sex-specific reference tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum Sex {
    #[serde(rename = "M")]
    Male,
    #[serde(rename = "F")]
    Female,
}

/// Years of formal schooling, bucketed the way the MEEM cutoffs are.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum EducationLevel {
    #[serde(rename = "analfabeto")]
    Illiterate,
    #[serde(rename = "1_4_anos")]
    Years1To4,
    #[serde(rename = "5_8_anos")]
    Years5To8,
    #[serde(rename = "9_11_anos")]
    Years9To11,
    #[serde(rename = "12_mais_anos")]
    Years12Plus,
}

/// Demographics the scoring engine reads. Owned by the patient-records
/// collaborator; the engine only borrows it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PatientProfile {
    pub age: u32,
    pub sex: Sex,
    pub height_meters: f64,
    pub bmi: f64,
    /// Only required by the MEEM cognitive screening.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub education_level: Option<EducationLevel>,
}

impl PatientProfile {
    pub fn new(age: u32, sex: Sex, height_meters: f64, bmi: f64) -> Self {
        Self {
            age,
            sex,
            height_meters,
            bmi,
            education_level: None,
        }
    }

    pub fn with_education(mut self, level: EducationLevel) -> Self {
        self.education_level = Some(level);
        self
    }
}
