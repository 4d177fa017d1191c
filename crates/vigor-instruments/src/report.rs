//! Report-ready summary of a patient's assessment history.

use serde::Serialize;
use ts_rs::TS;

use vigor_core::config::VigorConfig;
use vigor_core::models::history::{AssessmentHistoryEntry, HistoryScore};
use vigor_core::models::protocol::ProtocolId;

use crate::history::{latest_per_protocol, protocol_series, series_points};
use crate::labels::LabelTable;
use crate::progress::{history_completion, pending_protocols};

#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[ts(export)]
pub struct ReportRow {
    pub protocol_id: ProtocolId,
    pub protocol_name: String,
    pub date: jiff::Timestamp,
    pub score: HistoryScore,
    pub classification: String,
    pub classification_label: String,
    pub video_url: Option<String>,
}

/// First-to-latest change for a protocol with at least two numeric results.
#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[ts(export)]
pub struct ProtocolTrend {
    pub protocol_id: ProtocolId,
    pub points: usize,
    pub first_score: f64,
    pub latest_score: f64,
    pub change: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[ts(export)]
pub struct ReportSummary {
    pub clinic_name: String,
    pub generated_at: jiff::Timestamp,
    pub completion_percentage: u8,
    pub pending: Vec<ProtocolId>,
    pub rows: Vec<ReportRow>,
    pub trends: Vec<ProtocolTrend>,
}

impl ReportSummary {
    pub fn build(
        history: &[AssessmentHistoryEntry],
        config: &VigorConfig,
        generated_at: jiff::Timestamp,
    ) -> Self {
        let labels = LabelTable::with_overrides(&config.label_overrides);

        let rows = latest_per_protocol(history)
            .into_iter()
            .map(|entry| ReportRow {
                protocol_id: entry.protocol_id,
                protocol_name: entry.protocol_name,
                date: entry.date,
                score: entry.score,
                classification_label: labels.label(&entry.classification),
                classification: entry.classification,
                video_url: config.video_for(entry.protocol_id).map(str::to_string),
            })
            .collect();

        let trends = ProtocolId::ALL
            .into_iter()
            .filter_map(|protocol| trend(history, protocol))
            .collect();

        Self {
            clinic_name: config.clinic_name.clone(),
            generated_at,
            completion_percentage: history_completion(history),
            pending: pending_protocols(history),
            rows,
            trends,
        }
    }
}

fn trend(history: &[AssessmentHistoryEntry], protocol: ProtocolId) -> Option<ProtocolTrend> {
    let points = series_points(&protocol_series(history, protocol));
    let (first, latest) = match points.as_slice() {
        [first, .., latest] => (first, latest),
        _ => return None,
    };
    Some(ProtocolTrend {
        protocol_id: protocol,
        points: points.len(),
        first_score: first.score,
        latest_score: latest.score,
        change: latest.score - first.score,
    })
}
