use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use super::protocol::ProtocolId;
use super::result::AssessmentResult;

/// Headline score as displayed. Older stored entries may carry text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(untagged)]
#[ts(export)]
pub enum HistoryScore {
    Number(f64),
    Text(String),
}

impl HistoryScore {
    /// Numeric value, if the score is a number or a text that parses as one.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            Self::Text(s) => s.trim().parse().ok(),
        }
    }
}

/// Flattened, display-oriented projection of an [`AssessmentResult`].
///
/// Histories are append-only and stored newest first by the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AssessmentHistoryEntry {
    pub id: Uuid,
    pub date: jiff::Timestamp,
    pub protocol_id: ProtocolId,
    pub protocol_name: String,
    pub score: HistoryScore,
    pub classification: String,
    pub details: AssessmentResult,
}

impl AssessmentHistoryEntry {
    pub fn from_result(result: AssessmentResult) -> Self {
        let protocol_id = result.protocol_id();
        Self {
            id: Uuid::new_v4(),
            date: result.completed_at,
            protocol_id,
            protocol_name: protocol_id.display_name().to_string(),
            score: HistoryScore::Number(result.total_score()),
            classification: result.classification_code().to_string(),
            details: result,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_scores_parse_when_numeric() {
        assert_eq!(HistoryScore::Text(" 42 ".to_string()).as_f64(), Some(42.0));
        assert_eq!(HistoryScore::Text("n/a".to_string()).as_f64(), None);
        assert_eq!(HistoryScore::Number(7.5).as_f64(), Some(7.5));
    }

    #[test]
    fn untagged_score_round_trips_either_shape() {
        let n: HistoryScore = serde_json::from_str("12.5").unwrap();
        let t: HistoryScore = serde_json::from_str("\"3/5\"").unwrap();
        assert_eq!(n, HistoryScore::Number(12.5));
        assert_eq!(t, HistoryScore::Text("3/5".to_string()));
    }
}
