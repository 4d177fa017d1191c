//! Closed classification domains, one enum per protocol family.
//!
//! Each variant serialises to a stable snake_case code. Codes are what gets
//! persisted and what the label translator maps to display text.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::protocol::ProtocolId;

/// A categorical outcome with a stable code.
pub trait Classification: Copy + Eq + 'static {
    /// Every variant, in ascending order of the underlying scale.
    const ALL: &'static [Self];

    fn code(&self) -> &'static str;
}

/// Fried frailty phenotype.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum FrailtyClass {
    NotFrail,
    PreFrail,
    Frail,
}

impl Classification for FrailtyClass {
    const ALL: &'static [Self] = &[Self::NotFrail, Self::PreFrail, Self::Frail];

    fn code(&self) -> &'static str {
        match self {
            Self::NotFrail => "not_frail",
            Self::PreFrail => "pre_frail",
            Self::Frail => "frail",
        }
    }
}

/// Fall risk from the Timed Up and Go test.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum TugRisk {
    LowRisk,
    ModerateRisk,
    HighRisk,
}

impl Classification for TugRisk {
    const ALL: &'static [Self] = &[Self::LowRisk, Self::ModerateRisk, Self::HighRisk];

    fn code(&self) -> &'static str {
        match self {
            Self::LowRisk => "low_risk",
            Self::ModerateRisk => "moderate_risk",
            Self::HighRisk => "high_risk",
        }
    }
}

/// Five-tier rating shared by the chair-stand and arm-curl tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum FitnessClass {
    #[serde(rename = "ruim")]
    Poor,
    #[serde(rename = "regular")]
    Fair,
    #[serde(rename = "bom")]
    Good,
    #[serde(rename = "muito_bom")]
    VeryGood,
    #[serde(rename = "excelente")]
    Excellent,
}

impl Classification for FitnessClass {
    const ALL: &'static [Self] = &[
        Self::Poor,
        Self::Fair,
        Self::Good,
        Self::VeryGood,
        Self::Excellent,
    ];

    fn code(&self) -> &'static str {
        match self {
            Self::Poor => "ruim",
            Self::Fair => "regular",
            Self::Good => "bom",
            Self::VeryGood => "muito_bom",
            Self::Excellent => "excelente",
        }
    }
}

/// Four-tier flexibility rating (sit-and-reach has no "excelente" tier).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum FlexibilityClass {
    #[serde(rename = "ruim")]
    Poor,
    #[serde(rename = "regular")]
    Fair,
    #[serde(rename = "bom")]
    Good,
    #[serde(rename = "muito_bom")]
    VeryGood,
}

impl Classification for FlexibilityClass {
    const ALL: &'static [Self] = &[Self::Poor, Self::Fair, Self::Good, Self::VeryGood];

    fn code(&self) -> &'static str {
        match self {
            Self::Poor => "ruim",
            Self::Fair => "regular",
            Self::Good => "bom",
            Self::VeryGood => "muito_bom",
        }
    }
}

/// GDS-15 depression screening outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum DepressionClass {
    #[serde(rename = "normal")]
    Normal,
    #[serde(rename = "depressao_leve")]
    Mild,
    #[serde(rename = "depressao_grave")]
    Severe,
}

impl Classification for DepressionClass {
    const ALL: &'static [Self] = &[Self::Normal, Self::Mild, Self::Severe];

    fn code(&self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Mild => "depressao_leve",
            Self::Severe => "depressao_grave",
        }
    }
}

/// MEEM cognitive screening outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum CognitiveClass {
    #[serde(rename = "sem_declinio")]
    NoDecline,
    #[serde(rename = "declinio_leve")]
    MildDecline,
    #[serde(rename = "declinio_moderado")]
    ModerateDecline,
    #[serde(rename = "declinio_grave")]
    SevereDecline,
}

impl Classification for CognitiveClass {
    const ALL: &'static [Self] = &[
        Self::NoDecline,
        Self::MildDecline,
        Self::ModerateDecline,
        Self::SevereDecline,
    ];

    fn code(&self) -> &'static str {
        match self {
            Self::NoDecline => "sem_declinio",
            Self::MildDecline => "declinio_leve",
            Self::ModerateDecline => "declinio_moderado",
            Self::SevereDecline => "declinio_grave",
        }
    }
}

/// Fall risk from the Berg balance scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum BalanceRisk {
    #[serde(rename = "alto_risco")]
    High,
    #[serde(rename = "medio_risco")]
    Medium,
    #[serde(rename = "baixo_risco")]
    Low,
}

impl Classification for BalanceRisk {
    const ALL: &'static [Self] = &[Self::High, Self::Medium, Self::Low];

    fn code(&self) -> &'static str {
        match self {
            Self::High => "alto_risco",
            Self::Medium => "medio_risco",
            Self::Low => "baixo_risco",
        }
    }
}

fn codes<C: Classification>() -> Vec<&'static str> {
    C::ALL.iter().map(Classification::code).collect()
}

/// All classification codes a protocol may produce.
pub fn domain(protocol: ProtocolId) -> Vec<&'static str> {
    match protocol {
        ProtocolId::FriedFrailty => codes::<FrailtyClass>(),
        ProtocolId::Tug => codes::<TugRisk>(),
        ProtocolId::ChairStand | ProtocolId::ArmCurl => codes::<FitnessClass>(),
        ProtocolId::SitAndReach => codes::<FlexibilityClass>(),
        ProtocolId::Gds15 => codes::<DepressionClass>(),
        ProtocolId::Meem => codes::<CognitiveClass>(),
        ProtocolId::BergBalance => codes::<BalanceRisk>(),
    }
}
