use std::path::{Path, PathBuf};
use std::str::FromStr;

use eyre::bail;
use serde::Serialize;

use vigor_core::config::{VigorConfig, load_config};
use vigor_core::models::history::AssessmentHistoryEntry;
use vigor_core::models::measurements::Measurements;
use vigor_core::models::patient::PatientProfile;
use vigor_core::models::protocol::ProtocolId;
use vigor_instruments::error::InstrumentError;
use vigor_instruments::history::{latest_per_protocol, protocol_series};
use vigor_instruments::labels::LabelTable;
use vigor_instruments::progress::{history_completion, pending_protocols};
use vigor_instruments::report::ReportSummary;
use vigor_instruments::scoring::MeasurementRange;
use vigor_instruments::{all_protocols, assess, get_protocol};

use crate::store;

pub fn resolve_config(path: Option<&Path>) -> eyre::Result<VigorConfig> {
    match path {
        Some(path) => Ok(load_config(path)?),
        None => Ok(VigorConfig::default()),
    }
}

fn to_json<T: Serialize>(value: &T) -> eyre::Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

#[derive(Serialize)]
struct ProtocolSummary {
    id: ProtocolId,
    name: String,
    classifications: Vec<&'static str>,
    measurements: Vec<MeasurementRange>,
}

pub fn protocols() -> eyre::Result<String> {
    let catalog: Vec<ProtocolSummary> = all_protocols()
        .iter()
        .map(|p| ProtocolSummary {
            id: p.id(),
            name: p.name().to_string(),
            classifications: p.classifications(),
            measurements: p.measurement_ranges().to_vec(),
        })
        .collect();
    to_json(&catalog)
}

pub struct ScoreRequest {
    pub measurements: PathBuf,
    pub profile: PathBuf,
    pub history: Option<PathBuf>,
    pub completed_at: jiff::Timestamp,
    pub allow_out_of_range: bool,
}

pub fn score(request: &ScoreRequest) -> eyre::Result<String> {
    let input: Measurements = store::read_json(&request.measurements)?;
    let profile: PatientProfile = store::read_json(&request.profile)?;
    let protocol_id = input.protocol_id();

    let protocol = get_protocol(protocol_id.as_str())
        .ok_or_else(|| InstrumentError::UnknownProtocol(protocol_id.as_str().to_string()))?;
    let findings = protocol.validate_measurements(&input);
    for finding in &findings {
        tracing::warn!(protocol = %protocol_id, field = %finding.field_id, "{}", finding.message);
    }
    if !findings.is_empty() && !request.allow_out_of_range {
        bail!(
            "{} measurement(s) out of range for {protocol_id}; fix them or pass --allow-out-of-range",
            findings.len()
        );
    }

    let result = match assess(&input, &profile, request.completed_at) {
        Ok(result) => result,
        Err(e) if e.is_incomplete() => {
            tracing::warn!(protocol = %protocol_id, "input incomplete, nothing recorded");
            bail!("not ready: {e}");
        }
        Err(e) => return Err(e.into()),
    };

    let entry = AssessmentHistoryEntry::from_result(result);
    if let Some(path) = &request.history {
        store::prepend_entry(path, entry.clone())?;
    }
    to_json(&entry)
}

#[derive(Serialize)]
struct LabelledEntry {
    #[serde(flatten)]
    entry: AssessmentHistoryEntry,
    classification_label: String,
}

pub fn latest(history: &Path, config: &VigorConfig) -> eyre::Result<String> {
    let labels = LabelTable::with_overrides(&config.label_overrides);
    let rows: Vec<LabelledEntry> = latest_per_protocol(&store::load_history(history)?)
        .into_iter()
        .map(|entry| LabelledEntry {
            classification_label: labels.label(&entry.classification),
            entry,
        })
        .collect();
    to_json(&rows)
}

pub fn series(history: &Path, protocol: &str) -> eyre::Result<String> {
    let protocol = ProtocolId::from_str(protocol)?;
    let series = protocol_series(&store::load_history(history)?, protocol);
    if series.len() < 2 {
        tracing::info!(%protocol, points = series.len(), "fewer than two points, no trend to chart");
    }
    to_json(&series)
}

#[derive(Serialize)]
struct Progress {
    completion_percentage: u8,
    pending: Vec<ProtocolId>,
}

pub fn progress(history: &Path) -> eyre::Result<String> {
    let entries = store::load_history(history)?;
    to_json(&Progress {
        completion_percentage: history_completion(&entries),
        pending: pending_protocols(&entries),
    })
}

pub fn report(
    history: &Path,
    config: &VigorConfig,
    generated_at: jiff::Timestamp,
) -> eyre::Result<String> {
    let entries = store::load_history(history)?;
    to_json(&ReportSummary::build(&entries, config, generated_at))
}

pub fn label(code: &str, config: &VigorConfig) -> String {
    LabelTable::with_overrides(&config.label_overrides).label(code)
}
