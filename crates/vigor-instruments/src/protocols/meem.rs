use std::sync::LazyLock;

use vigor_core::models::classification::CognitiveClass;
use vigor_core::models::measurements::{MeemInput, MeemSection, Measurements};
use vigor_core::models::patient::{EducationLevel, PatientProfile};
use vigor_core::models::protocol::ProtocolId;
use vigor_core::models::result::{AssessmentOutcome, MeemOutcome};

use crate::Protocol;
use crate::error::InstrumentError;
use crate::scoring::{MeasurementKind, MeasurementRange, ScoreRange, meem_field_id};
use crate::tables::meem_cutoff;

/// Mini Exame do Estado Mental. Five subsections, 30 points, with an
/// education-adjusted cutoff.
pub struct Meem;

impl Protocol for Meem {
    fn id(&self) -> ProtocolId {
        ProtocolId::Meem
    }

    fn measurement_ranges(&self) -> &[MeasurementRange] {
        static RANGES: LazyLock<Vec<MeasurementRange>> = LazyLock::new(|| {
            MeemSection::ALL
                .into_iter()
                .map(|s| {
                    MeasurementRange::new(
                        meem_field_id(s),
                        section_name(s),
                        MeasurementKind::Points,
                        ScoreRange {
                            min: 0.0,
                            max: f64::from(s.max()),
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
        profile: &PatientProfile,
    ) -> Result<AssessmentOutcome, InstrumentError> {
        match input {
            Measurements::Meem(i) => {
                score(i, profile.education_level).map(AssessmentOutcome::Meem)
            }
            other => Err(self.mismatch(other)),
        }
    }
}

pub fn section_name(section: MeemSection) -> &'static str {
    match section {
        MeemSection::Orientation => "Orientação temporal e espacial",
        MeemSection::Registration => "Memória imediata",
        MeemSection::Attention => "Atenção e cálculo",
        MeemSection::Recall => "Evocação",
        MeemSection::Language => "Linguagem",
    }
}

/// Subsections are summed as given; clamping to each maximum is the
/// caller's job (see [`MeemInput::clamped`]).
pub fn score(
    input: &MeemInput,
    education: Option<EducationLevel>,
) -> Result<MeemOutcome, InstrumentError> {
    let education_level = education.ok_or(InstrumentError::Incomplete {
        protocol: ProtocolId::Meem,
        field: "education_level",
    })?;
    let cutoff = meem_cutoff(education_level);
    let total_score = input.total();

    Ok(MeemOutcome {
        sections: *input,
        education_level,
        cutoff,
        total_score,
        classification: classify(total_score, cutoff),
    })
}

/// Lowest total still rated mild decline when under the cutoff.
const MILD_DECLINE_FLOOR: f64 = 20.0;

/// At or above the cutoff is no decline. Below it: 20+ mild, 10+ moderate,
/// else severe. One point under the cutoff is always at least mild, which
/// only matters for the illiterate cutoff of 20.
pub fn classify(total_score: u32, cutoff: f64) -> CognitiveClass {
    let total = f64::from(total_score);
    if total >= cutoff {
        CognitiveClass::NoDecline
    } else if total >= MILD_DECLINE_FLOOR.min(cutoff - 1.0) {
        CognitiveClass::MildDecline
    } else if total_score >= 10 {
        CognitiveClass::ModerateDecline
    } else {
        CognitiveClass::SevereDecline
    }
}
