use vigor_core::models::history::{AssessmentHistoryEntry, HistoryScore};
use vigor_core::models::measurements::{BergInput, Measurements, TugInput};
use vigor_core::models::patient::{PatientProfile, Sex};
use vigor_core::models::protocol::ProtocolId;
use vigor_instruments::assess;
use vigor_instruments::history::{latest_per_protocol, protocol_series, series_points};
use vigor_instruments::progress::{
    completion_percentage, completion_percentage_from_ids, pending_protocols,
};

fn at(ts: &str) -> jiff::Timestamp {
    ts.parse().unwrap()
}

fn tug(seconds: f64, when: &str) -> AssessmentHistoryEntry {
    let profile = PatientProfile::new(70, Sex::Male, 1.72, 24.0);
    let input = Measurements::Tug(TugInput {
        time_seconds: Some(seconds),
    });
    AssessmentHistoryEntry::from_result(assess(&input, &profile, at(when)).unwrap())
}

fn berg(item: u8, when: &str) -> AssessmentHistoryEntry {
    let profile = PatientProfile::new(70, Sex::Male, 1.72, 24.0);
    let input = Measurements::BergBalance(BergInput {
        item_scores: [item; 14],
    });
    AssessmentHistoryEntry::from_result(assess(&input, &profile, at(when)).unwrap())
}

#[test]
fn latest_keeps_one_entry_per_protocol() {
    let t1 = tug(14.0, "2026-01-10T09:00:00Z");
    let t2 = tug(9.0, "2026-02-10T09:00:00Z");
    let b3 = berg(3, "2026-01-20T09:00:00Z");

    // Stored newest first.
    let latest = latest_per_protocol(&[t2.clone(), b3.clone(), t1.clone()]);
    assert_eq!(latest.len(), 2);
    assert_eq!(latest[0].id, t2.id);
    assert_eq!(latest[1].id, b3.id);
}

#[test]
fn latest_ignores_input_order_when_dates_differ() {
    let t1 = tug(14.0, "2026-01-10T09:00:00Z");
    let t2 = tug(9.0, "2026-02-10T09:00:00Z");
    let b3 = berg(3, "2026-01-20T09:00:00Z");

    let a = latest_per_protocol(&[t1.clone(), t2.clone(), b3.clone()]);
    let b = latest_per_protocol(&[b3, t2, t1]);
    assert_eq!(a, b);
}

#[test]
fn identical_timestamps_last_in_input_wins() {
    let first = tug(14.0, "2026-01-10T09:00:00Z");
    let second = tug(9.0, "2026-01-10T09:00:00Z");
    let latest = latest_per_protocol(&[first, second.clone()]);
    assert_eq!(latest.len(), 1);
    assert_eq!(latest[0].id, second.id);
}

#[test]
fn empty_history_folds_to_empty() {
    assert!(latest_per_protocol(&[]).is_empty());
    assert!(protocol_series(&[], ProtocolId::Tug).is_empty());
}

#[test]
fn series_is_filtered_and_ascending() {
    let history = vec![
        tug(9.0, "2026-03-01T09:00:00Z"),
        berg(2, "2026-02-15T09:00:00Z"),
        tug(12.0, "2026-02-01T09:00:00Z"),
        tug(15.5, "2026-01-01T09:00:00Z"),
    ];
    let series = protocol_series(&history, ProtocolId::Tug);
    let scores: Vec<f64> = series_points(&series).iter().map(|p| p.score).collect();
    assert_eq!(scores, vec![15.5, 12.0, 9.0]);
}

#[test]
fn text_scores_are_left_out_of_points() {
    let mut legacy = tug(11.0, "2026-01-01T09:00:00Z");
    legacy.score = HistoryScore::Text("pendente".to_string());
    let current = tug(10.0, "2026-02-01T09:00:00Z");
    let points = series_points(&[legacy, current]);
    assert_eq!(points.len(), 1);
    assert_eq!(points[0].score, 10.0);
}

#[test]
fn numeric_text_scores_are_charted() {
    let mut legacy = tug(11.0, "2026-01-01T09:00:00Z");
    legacy.score = HistoryScore::Text("42".to_string());
    let current = tug(10.0, "2026-02-01T09:00:00Z");
    let scores: Vec<f64> = series_points(&[legacy, current])
        .iter()
        .map(|p| p.score)
        .collect();
    assert_eq!(scores, vec![42.0, 10.0]);
}

#[test]
fn history_entry_projects_result() {
    let entry = berg(3, "2026-01-20T09:00:00Z");
    assert_eq!(entry.protocol_id, ProtocolId::BergBalance);
    assert_eq!(entry.protocol_name, "Escala de Equilíbrio de Berg");
    assert_eq!(entry.score, HistoryScore::Number(42.0));
    assert_eq!(entry.classification, "baixo_risco");
    assert_eq!(entry.date, entry.details.completed_at);
}

#[test]
fn history_entry_survives_json() {
    let entry = tug(12.5, "2026-01-20T09:00:00Z");
    let json = serde_json::to_string(&entry).unwrap();
    let back: AssessmentHistoryEntry = serde_json::from_str(&json).unwrap();
    assert_eq!(back, entry);
}

#[test]
fn completion_percentages() {
    assert_eq!(completion_percentage(Vec::<ProtocolId>::new()), 0);
    assert_eq!(completion_percentage(ProtocolId::ALL[..4].iter().copied()), 50);
    assert_eq!(completion_percentage(ProtocolId::ALL), 100);
    assert_eq!(completion_percentage([ProtocolId::Tug]), 13);
}

#[test]
fn duplicates_and_unknown_ids_never_exceed_hundred() {
    let doubled = ProtocolId::ALL.into_iter().chain(ProtocolId::ALL);
    assert_eq!(completion_percentage(doubled), 100);

    let ids = ["tug", "tug", "meem", "six_minute_walk", "handgrip"];
    assert_eq!(completion_percentage_from_ids(ids), 25);
}

#[test]
fn pending_lists_missing_protocols_in_catalog_order() {
    let history = vec![tug(9.0, "2026-03-01T09:00:00Z"), berg(2, "2026-02-15T09:00:00Z")];
    let pending = pending_protocols(&history);
    assert_eq!(pending.len(), 6);
    assert_eq!(pending[0], ProtocolId::FriedFrailty);
    assert!(!pending.contains(&ProtocolId::Tug));
    assert!(!pending.contains(&ProtocolId::BergBalance));
}
