use vigor_core::config::VigorConfig;
use vigor_core::models::history::AssessmentHistoryEntry;
use vigor_core::models::measurements::{Measurements, RepetitionInput};
use vigor_core::models::patient::{PatientProfile, Sex};
use vigor_core::models::protocol::ProtocolId;
use vigor_instruments::assess;
use vigor_instruments::report::ReportSummary;

fn chair_stand(reps: u32, when: &str) -> AssessmentHistoryEntry {
    let profile = PatientProfile::new(68, Sex::Female, 1.60, 24.0);
    let input = Measurements::ChairStand(RepetitionInput {
        repetitions: Some(reps),
    });
    AssessmentHistoryEntry::from_result(assess(&input, &profile, when.parse().unwrap()).unwrap())
}

fn config() -> VigorConfig {
    let mut config = VigorConfig {
        clinic_name: "Clínica Aurora".to_string(),
        ..VigorConfig::default()
    };
    config.protocol_videos.insert(
        ProtocolId::ChairStand,
        "https://videos.example/chair-stand".to_string(),
    );
    config
        .label_overrides
        .insert("muito_bom".to_string(), "Acima do Esperado".to_string());
    config
}

#[test]
fn summary_rows_use_latest_and_labels() {
    let history = vec![
        chair_stand(19, "2026-04-01T10:00:00Z"),
        chair_stand(10, "2026-01-01T10:00:00Z"),
    ];
    let generated: jiff::Timestamp = "2026-04-02T08:00:00Z".parse().unwrap();
    let summary = ReportSummary::build(&history, &config(), generated);

    assert_eq!(summary.clinic_name, "Clínica Aurora");
    assert_eq!(summary.completion_percentage, 13);
    assert_eq!(summary.pending.len(), 7);
    assert_eq!(summary.rows.len(), 1);

    let row = &summary.rows[0];
    assert_eq!(row.classification, "muito_bom");
    assert_eq!(row.classification_label, "Acima do Esperado");
    assert_eq!(
        row.video_url.as_deref(),
        Some("https://videos.example/chair-stand")
    );
}

#[test]
fn trend_needs_two_points() {
    let generated: jiff::Timestamp = "2026-04-02T08:00:00Z".parse().unwrap();

    let single = vec![chair_stand(12, "2026-01-01T10:00:00Z")];
    assert!(ReportSummary::build(&single, &config(), generated).trends.is_empty());

    let history = vec![
        chair_stand(15, "2026-04-01T10:00:00Z"),
        chair_stand(12, "2026-02-01T10:00:00Z"),
        chair_stand(10, "2026-01-01T10:00:00Z"),
    ];
    let trends = ReportSummary::build(&history, &config(), generated).trends;
    assert_eq!(trends.len(), 1);
    assert_eq!(trends[0].points, 3);
    assert_eq!(trends[0].first_score, 10.0);
    assert_eq!(trends[0].latest_score, 15.0);
    assert_eq!(trends[0].change, 5.0);
}

#[test]
fn empty_history_reports_nothing_done() {
    let generated: jiff::Timestamp = "2026-04-02T08:00:00Z".parse().unwrap();
    let summary = ReportSummary::build(&[], &VigorConfig::default(), generated);
    assert_eq!(summary.completion_percentage, 0);
    assert_eq!(summary.pending, ProtocolId::ALL.to_vec());
    assert!(summary.rows.is_empty());
}
