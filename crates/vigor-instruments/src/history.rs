//! Folds over a patient's assessment history.
//!
//! Both folds are total: empty input yields empty output.

use std::collections::BTreeMap;

use vigor_core::models::history::AssessmentHistoryEntry;
use vigor_core::models::protocol::ProtocolId;

/// Most recent entry per protocol, in catalog order.
///
/// Entries are ordered by date with a stable sort, so among identical
/// timestamps the one appearing last in `entries` wins.
pub fn latest_per_protocol(entries: &[AssessmentHistoryEntry]) -> Vec<AssessmentHistoryEntry> {
    let mut ordered: Vec<&AssessmentHistoryEntry> = entries.iter().collect();
    ordered.sort_by_key(|e| e.date);

    let mut latest: BTreeMap<ProtocolId, &AssessmentHistoryEntry> = BTreeMap::new();
    for entry in ordered {
        latest.insert(entry.protocol_id, entry);
    }

    tracing::debug!(
        entries = entries.len(),
        protocols = latest.len(),
        "folded latest-per-protocol view"
    );
    latest.into_values().cloned().collect()
}

/// One protocol's entries, oldest first, for trend charts.
///
/// Fewer than two points is not much of a trend; whether to draw it is the
/// caller's call.
pub fn protocol_series(
    entries: &[AssessmentHistoryEntry],
    protocol: ProtocolId,
) -> Vec<AssessmentHistoryEntry> {
    let mut series: Vec<AssessmentHistoryEntry> = entries
        .iter()
        .filter(|e| e.protocol_id == protocol)
        .cloned()
        .collect();
    series.sort_by_key(|e| e.date);
    series
}

/// A chartable point: date and numeric score.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeriesPoint {
    pub date: jiff::Timestamp,
    pub score: f64,
}

/// Numeric points of a series. Text scores that parse as a number are
/// charted; any other text score is skipped.
pub fn series_points(series: &[AssessmentHistoryEntry]) -> Vec<SeriesPoint> {
    series
        .iter()
        .filter_map(|e| {
            e.score.as_f64().map(|score| SeriesPoint {
                date: e.date,
                score,
            })
        })
        .collect()
}
