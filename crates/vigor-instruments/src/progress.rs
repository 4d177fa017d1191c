use std::collections::BTreeSet;
use std::str::FromStr;

use vigor_core::models::history::AssessmentHistoryEntry;
use vigor_core::models::protocol::ProtocolId;

/// Percentage of the protocol catalog with at least one result, 0–100.
/// Duplicates count once.
pub fn completion_percentage<I>(completed: I) -> u8
where
    I: IntoIterator<Item = ProtocolId>,
{
    let distinct: BTreeSet<ProtocolId> = completed.into_iter().collect();
    let catalog = ProtocolId::ALL.len() as f64;
    let pct = (100.0 * distinct.len() as f64 / catalog).round();
    pct.clamp(0.0, 100.0) as u8
}

/// Same as [`completion_percentage`] for raw string ids; ids outside the
/// catalog are ignored.
pub fn completion_percentage_from_ids<'a, I>(ids: I) -> u8
where
    I: IntoIterator<Item = &'a str>,
{
    completion_percentage(ids.into_iter().filter_map(|id| ProtocolId::from_str(id).ok()))
}

pub fn history_completion(entries: &[AssessmentHistoryEntry]) -> u8 {
    completion_percentage(entries.iter().map(|e| e.protocol_id))
}

/// Catalog protocols with no result yet, in catalog order.
pub fn pending_protocols(entries: &[AssessmentHistoryEntry]) -> Vec<ProtocolId> {
    let done: BTreeSet<ProtocolId> = entries.iter().map(|e| e.protocol_id).collect();
    ProtocolId::ALL
        .into_iter()
        .filter(|p| !done.contains(p))
        .collect()
}
