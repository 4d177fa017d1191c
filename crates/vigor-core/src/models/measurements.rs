//! Raw measurement payloads, one shape per protocol.
//!
//! Fields that a form may leave blank are `Option`s. Fixed-size item lists
//! are arrays, so a payload with the wrong number of items cannot be built.
//! Item edits return a new value; nothing here mutates in place.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::protocol::ProtocolId;

pub const GDS15_ITEM_COUNT: usize = 15;
pub const BERG_ITEM_COUNT: usize = 14;
pub const BERG_ITEM_MAX: u8 = 4;

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct FriedInput {
    pub weight_loss: bool,
    pub fatigue: bool,
    pub low_activity: bool,
    #[serde(default)]
    pub grip_strength_kg: Option<f64>,
    /// Time to walk the gait course, in seconds.
    #[serde(default)]
    pub gait_speed_seconds: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TugInput {
    #[serde(default)]
    pub time_seconds: Option<f64>,
}

/// Repetition count for the 30-second chair-stand and arm-curl tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct RepetitionInput {
    #[serde(default)]
    pub repetitions: Option<u32>,
}

/// Negative distances fall short of the toe, positive ones reach past it.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SitAndReachInput {
    #[serde(default)]
    pub distance_cm: Option<f64>,
}

/// GDS-15 answers in questionnaire order. `None` means unanswered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Gds15Input {
    #[serde(default)]
    pub answers: [Option<bool>; GDS15_ITEM_COUNT],
}

impl Gds15Input {
    /// Copy with the answer at `index` replaced.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not a valid question index.
    pub fn with_answer(&self, index: usize, answer: Option<bool>) -> Self {
        let mut next = *self;
        next.answers[index] = answer;
        next
    }

    pub fn answered(&self) -> usize {
        self.answers.iter().filter(|a| a.is_some()).count()
    }
}

/// The five MEEM subsections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum MeemSection {
    Orientation,
    Registration,
    Attention,
    Recall,
    Language,
}

impl MeemSection {
    pub const ALL: [MeemSection; 5] = [
        MeemSection::Orientation,
        MeemSection::Registration,
        MeemSection::Attention,
        MeemSection::Recall,
        MeemSection::Language,
    ];

    pub fn max(&self) -> u8 {
        match self {
            Self::Orientation => 10,
            Self::Registration => 3,
            Self::Attention => 5,
            Self::Recall => 3,
            Self::Language => 9,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct MeemInput {
    pub orientation: u8,
    pub registration: u8,
    pub attention: u8,
    pub recall: u8,
    pub language: u8,
}

impl MeemInput {
    pub fn section(&self, section: MeemSection) -> u8 {
        match section {
            MeemSection::Orientation => self.orientation,
            MeemSection::Registration => self.registration,
            MeemSection::Attention => self.attention,
            MeemSection::Recall => self.recall,
            MeemSection::Language => self.language,
        }
    }

    /// Copy with one subsection replaced, clamped to that subsection's max.
    pub fn with_section(&self, section: MeemSection, value: u8) -> Self {
        let value = value.min(section.max());
        let mut next = *self;
        match section {
            MeemSection::Orientation => next.orientation = value,
            MeemSection::Registration => next.registration = value,
            MeemSection::Attention => next.attention = value,
            MeemSection::Recall => next.recall = value,
            MeemSection::Language => next.language = value,
        }
        next
    }

    /// Copy with every subsection clamped to its max.
    pub fn clamped(&self) -> Self {
        MeemSection::ALL
            .into_iter()
            .fold(*self, |acc, s| acc.with_section(s, acc.section(s)))
    }

    pub fn total(&self) -> u32 {
        MeemSection::ALL
            .into_iter()
            .map(|s| u32::from(self.section(s)))
            .sum()
    }
}

/// Berg balance item scores, each 0–4, in task order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct BergInput {
    pub item_scores: [u8; BERG_ITEM_COUNT],
}

impl BergInput {
    /// Copy with the score at `index` replaced.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not a valid task index.
    pub fn with_item(&self, index: usize, score: u8) -> Self {
        let mut next = *self;
        next.item_scores[index] = score;
        next
    }

    pub fn total(&self) -> u32 {
        self.item_scores.iter().map(|&s| u32::from(s)).sum()
    }
}

/// A raw measurement payload tagged with the protocol it belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[serde(tag = "protocol", rename_all = "snake_case")]
#[ts(export)]
pub enum Measurements {
    FriedFrailty(FriedInput),
    Tug(TugInput),
    ChairStand(RepetitionInput),
    ArmCurl(RepetitionInput),
    SitAndReach(SitAndReachInput),
    Gds15(Gds15Input),
    Meem(MeemInput),
    BergBalance(BergInput),
}

impl Measurements {
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
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn berg_with_item_leaves_original_untouched() {
        let original = BergInput::default();
        let edited = original.with_item(3, 4);
        assert_eq!(original.item_scores[3], 0);
        assert_eq!(edited.item_scores[3], 4);
        assert_eq!(edited.total(), 4);
    }

    #[test]
    fn meem_clamps_each_section_to_its_max() {
        let raw = MeemInput {
            orientation: 12,
            registration: 7,
            attention: 5,
            recall: 9,
            language: 20,
        };
        let clamped = raw.clamped();
        assert_eq!(clamped.orientation, 10);
        assert_eq!(clamped.registration, 3);
        assert_eq!(clamped.attention, 5);
        assert_eq!(clamped.recall, 3);
        assert_eq!(clamped.language, 9);
        assert_eq!(clamped.total(), 30);
    }

    #[test]
    fn gds_with_answer_counts_answered() {
        let input = Gds15Input::default()
            .with_answer(0, Some(true))
            .with_answer(14, Some(false));
        assert_eq!(input.answered(), 2);
    }

    #[test]
    fn measurements_are_tagged_by_protocol() {
        let json = r#"{"protocol":"chair_stand","repetitions":14}"#;
        let parsed: Measurements = serde_json::from_str(json).unwrap();
        assert_eq!(
            parsed,
            Measurements::ChairStand(RepetitionInput {
                repetitions: Some(14)
            })
        );
        assert_eq!(parsed.protocol_id(), ProtocolId::ChairStand);
    }

    #[test]
    fn missing_tug_time_parses_as_none() {
        let parsed: Measurements = serde_json::from_str(r#"{"protocol":"tug"}"#).unwrap();
        assert_eq!(parsed, Measurements::Tug(TugInput { time_seconds: None }));
    }
}
