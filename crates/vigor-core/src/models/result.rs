use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::classification::{
    BalanceRisk, Classification, CognitiveClass, DepressionClass, FitnessClass, FlexibilityClass,
    FrailtyClass, TugRisk,
};
use super::measurements::{BERG_ITEM_COUNT, FriedInput, GDS15_ITEM_COUNT, MeemInput};
use super::patient::EducationLevel;
use super::protocol::ProtocolId;

/// Age- and sex-specific "normal" range a measurement was compared against.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ReferenceRange {
    pub min: f64,
    pub max: f64,
}

impl ReferenceRange {
    pub fn midpoint(&self) -> f64 {
        (self.min + self.max) / 2.0
    }
}

/// Per-criterion points (0 or 1) of the Fried phenotype.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct FriedCriteria {
    pub weight_loss: u8,
    pub fatigue: u8,
    pub low_activity: u8,
    pub grip_strength: u8,
    pub gait_speed: u8,
}

impl FriedCriteria {
    pub fn total(&self) -> u8 {
        self.weight_loss + self.fatigue + self.low_activity + self.grip_strength + self.gait_speed
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct FriedOutcome {
    pub input: FriedInput,
    pub criteria: FriedCriteria,
    pub grip_cutoff_kg: f64,
    pub gait_cutoff_seconds: f64,
    pub total_score: u8,
    pub classification: FrailtyClass,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TugOutcome {
    pub time_seconds: f64,
    pub classification: TugRisk,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct RepetitionOutcome {
    pub repetitions: u32,
    pub reference: ReferenceRange,
    pub classification: FitnessClass,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SitAndReachOutcome {
    pub distance_cm: f64,
    pub reference: ReferenceRange,
    pub classification: FlexibilityClass,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Gds15Outcome {
    pub answers: [bool; GDS15_ITEM_COUNT],
    pub total_score: u8,
    pub classification: DepressionClass,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct MeemOutcome {
    pub sections: MeemInput,
    pub education_level: EducationLevel,
    pub cutoff: f64,
    pub total_score: u32,
    pub classification: CognitiveClass,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct BergOutcome {
    pub item_scores: [u8; BERG_ITEM_COUNT],
    pub total_score: u32,
    pub classification: BalanceRisk,
}

/// Scored outcome of one protocol execution, tagged by protocol.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[serde(tag = "protocol", rename_all = "snake_case")]
#[ts(export)]
pub enum AssessmentOutcome {
    FriedFrailty(FriedOutcome),
    Tug(TugOutcome),
    ChairStand(RepetitionOutcome),
    ArmCurl(RepetitionOutcome),
    SitAndReach(SitAndReachOutcome),
    Gds15(Gds15Outcome),
    Meem(MeemOutcome),
    BergBalance(BergOutcome),
}

impl AssessmentOutcome {
    pub fn protocol_id(&self) -> ProtocolId {
        match self {
            Self::FriedFrailty(_) => ProtocolId::FriedFrailty,
            Self::Tug(_) => ProtocolId::Tug,
            Self::ChairStand(_) => ProtocolId::ChairStand,
            Self::ArmCurl(_) => ProtocolId::ArmCurl,
            Self::SitAndReach(_) => ProtocolId::SitAndReach,
            Self::Gds15(_) => ProtocolId::Gds15,
            Self::Meem(_) => ProtocolId::Meem,
            Self::BergBalance(_) => ProtocolId::BergBalance,
        }
    }

    /// The protocol's headline number: points, seconds, repetitions or cm.
    pub fn total_score(&self) -> f64 {
        match self {
            Self::FriedFrailty(o) => f64::from(o.total_score),
            Self::Tug(o) => o.time_seconds,
            Self::ChairStand(o) | Self::ArmCurl(o) => f64::from(o.repetitions),
            Self::SitAndReach(o) => o.distance_cm,
            Self::Gds15(o) => f64::from(o.total_score),
            Self::Meem(o) => f64::from(o.total_score),
            Self::BergBalance(o) => f64::from(o.total_score),
        }
    }

    pub fn classification_code(&self) -> &'static str {
        match self {
            Self::FriedFrailty(o) => o.classification.code(),
            Self::Tug(o) => o.classification.code(),
            Self::ChairStand(o) | Self::ArmCurl(o) => o.classification.code(),
            Self::SitAndReach(o) => o.classification.code(),
            Self::Gds15(o) => o.classification.code(),
            Self::Meem(o) => o.classification.code(),
            Self::BergBalance(o) => o.classification.code(),
        }
    }
}

/// One completed protocol execution. Never mutated after creation; a repeat
/// execution produces a new result.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AssessmentResult {
    pub outcome: AssessmentOutcome,
    pub completed_at: jiff::Timestamp,
}

impl AssessmentResult {
    pub fn new(outcome: AssessmentOutcome, completed_at: jiff::Timestamp) -> Self {
        Self {
            outcome,
            completed_at,
        }
    }

    pub fn protocol_id(&self) -> ProtocolId {
        self.outcome.protocol_id()
    }

    pub fn total_score(&self) -> f64 {
        self.outcome.total_score()
    }

    pub fn classification_code(&self) -> &'static str {
        self.outcome.classification_code()
    }
}
