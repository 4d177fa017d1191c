use std::sync::LazyLock;

use vigor_core::models::classification::BalanceRisk;
use vigor_core::models::measurements::{BERG_ITEM_COUNT, BERG_ITEM_MAX, BergInput, Measurements};
use vigor_core::models::patient::PatientProfile;
use vigor_core::models::protocol::ProtocolId;
use vigor_core::models::result::{AssessmentOutcome, BergOutcome};

use crate::Protocol;
use crate::error::InstrumentError;
use crate::scoring::{MeasurementKind, MeasurementRange, ScoreRange};

/// Berg Balance Scale. 14 tasks rated 0–4, total 0–56.
pub struct BergBalance;

pub static TASKS: [&str; BERG_ITEM_COUNT] = [
    "Sentado para em pé",
    "Em pé sem apoio",
    "Sentado sem apoio",
    "Em pé para sentado",
    "Transferências",
    "Em pé com olhos fechados",
    "Em pé com pés juntos",
    "Alcançar à frente com braço estendido",
    "Pegar objeto do chão",
    "Virar-se para olhar para trás",
    "Girar 360 graus",
    "Colocar pés alternadamente no degrau",
    "Em pé com um pé à frente",
    "Em pé sobre um pé",
];

impl Protocol for BergBalance {
    fn id(&self) -> ProtocolId {
        ProtocolId::BergBalance
    }

    fn measurement_ranges(&self) -> &[MeasurementRange] {
        static RANGES: LazyLock<Vec<MeasurementRange>> = LazyLock::new(|| {
            TASKS
                .iter()
                .enumerate()
                .map(|(idx, name)| {
                    MeasurementRange::new(
                        &format!("berg_item_{}", idx + 1),
                        name,
                        MeasurementKind::Points,
                        ScoreRange {
                            min: 0.0,
                            max: f64::from(BERG_ITEM_MAX),
                            step: Some(1.0),
                        },
                    )
                })
                .collect()
        });
        &RANGES
    }

    fn score(
        &self,
        input: &Measurements,
        _profile: &PatientProfile,
    ) -> Result<AssessmentOutcome, InstrumentError> {
        match input {
            Measurements::BergBalance(i) => Ok(AssessmentOutcome::BergBalance(score(i))),
            other => Err(self.mismatch(other)),
        }
    }
}

pub fn score(input: &BergInput) -> BergOutcome {
    let total_score = input.total();
    BergOutcome {
        item_scores: input.item_scores,
        total_score,
        classification: classify(total_score),
    }
}

/// 0–20 high fall risk, 21–40 medium, 41+ low.
pub fn classify(total_score: u32) -> BalanceRisk {
    match total_score {
        0..=20 => BalanceRisk::High,
        21..=40 => BalanceRisk::Medium,
        _ => BalanceRisk::Low,
    }
}
