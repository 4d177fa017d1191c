use vigor_core::models::classification::DepressionClass;
use vigor_core::models::measurements::{GDS15_ITEM_COUNT, Gds15Input, Measurements};
use vigor_core::models::patient::PatientProfile;
use vigor_core::models::protocol::ProtocolId;
use vigor_core::models::result::{AssessmentOutcome, Gds15Outcome};

use crate::Protocol;
use crate::error::InstrumentError;
use crate::scoring::MeasurementRange;

/// Geriatric Depression Scale, short form. 15 yes/no items.
pub struct Gds15;

/// One questionnaire item and the points each answer is worth.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GdsQuestion {
    pub text: &'static str,
    pub score_if_yes: u8,
    pub score_if_no: u8,
}

impl GdsQuestion {
    const fn negative(text: &'static str) -> Self {
        Self {
            text,
            score_if_yes: 1,
            score_if_no: 0,
        }
    }

    const fn positive(text: &'static str) -> Self {
        Self {
            text,
            score_if_yes: 0,
            score_if_no: 1,
        }
    }

    pub fn points(&self, answer: bool) -> u8 {
        if answer { self.score_if_yes } else { self.score_if_no }
    }
}

// Items 1, 5, 7, 11 and 13 are positively framed.
pub static QUESTIONS: [GdsQuestion; GDS15_ITEM_COUNT] = [
    GdsQuestion::positive("Você está basicamente satisfeito com sua vida?"),
    GdsQuestion::negative("Você deixou muitos de seus interesses e atividades?"),
    GdsQuestion::negative("Você sente que sua vida está vazia?"),
    GdsQuestion::negative("Você se aborrece com frequência?"),
    GdsQuestion::positive("Você se sente de bom humor a maior parte do tempo?"),
    GdsQuestion::negative("Você tem medo que algum mal vá lhe acontecer?"),
    GdsQuestion::positive("Você se sente feliz a maior parte do tempo?"),
    GdsQuestion::negative("Você sente que sua situação não tem saída?"),
    GdsQuestion::negative("Você prefere ficar em casa a sair e fazer coisas novas?"),
    GdsQuestion::negative("Você se sente com mais problemas de memória do que a maioria?"),
    GdsQuestion::positive("Você acha maravilhoso estar vivo?"),
    GdsQuestion::negative("Você se sente um inútil nas atuais circunstâncias?"),
    GdsQuestion::positive("Você se sente cheio de energia?"),
    GdsQuestion::negative("Você acha que sua situação é sem esperança?"),
    GdsQuestion::negative("Você sente que a maioria das pessoas está melhor que você?"),
];

impl Protocol for Gds15 {
    fn id(&self) -> ProtocolId {
        ProtocolId::Gds15
    }

    fn measurement_ranges(&self) -> &[MeasurementRange] {
        &[]
    }

    fn score(
        &self,
        input: &Measurements,
        _profile: &PatientProfile,
    ) -> Result<AssessmentOutcome, InstrumentError> {
        match input {
            Measurements::Gds15(i) => score(i).map(AssessmentOutcome::Gds15),
            other => Err(self.mismatch(other)),
        }
    }
}

/// Refuses to score until every item has an answer.
pub fn score(input: &Gds15Input) -> Result<Gds15Outcome, InstrumentError> {
    let mut answers = [false; GDS15_ITEM_COUNT];
    for (slot, answer) in answers.iter_mut().zip(input.answers) {
        *slot = answer.ok_or(InstrumentError::Incomplete {
            protocol: ProtocolId::Gds15,
            field: "answers",
        })?;
    }

    let total_score: u8 = QUESTIONS
        .iter()
        .zip(answers)
        .map(|(q, a)| q.points(a))
        .sum();

    Ok(Gds15Outcome {
        answers,
        total_score,
        classification: classify(total_score),
    })
}

/// 0–5 normal, 6–10 mild, 11+ severe.
pub fn classify(total_score: u8) -> DepressionClass {
    match total_score {
        0..=5 => DepressionClass::Normal,
        6..=10 => DepressionClass::Mild,
        _ => DepressionClass::Severe,
    }
}
