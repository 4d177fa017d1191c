//! vigor-instruments
//!
//! Functional-assessment scoring engine. Pure and synchronous: reference
//! tables, one classifier per protocol, and the folds that turn a patient's
//! assessment history into report and chart views.

pub mod error;
pub mod history;
pub mod labels;
pub mod progress;
pub mod protocols;
pub mod report;
pub mod scoring;
pub mod tables;

use vigor_core::models::classification;
use vigor_core::models::measurements::Measurements;
use vigor_core::models::patient::PatientProfile;
use vigor_core::models::protocol::ProtocolId;
use vigor_core::models::result::{AssessmentOutcome, AssessmentResult};

use error::InstrumentError;
use scoring::{MeasurementRange, ValidationError, measurement_values};

/// Trait implemented by each functional-assessment protocol.
pub trait Protocol: Send + Sync {
    fn id(&self) -> ProtocolId;

    /// Human-readable name (e.g., "Escala de Equilíbrio de Berg").
    fn name(&self) -> &str {
        self.id().display_name()
    }

    /// Every classification code this protocol can produce.
    fn classifications(&self) -> Vec<&'static str> {
        classification::domain(self.id())
    }

    /// The numeric raw fields this protocol accepts and their admissible ranges.
    fn measurement_ranges(&self) -> &[MeasurementRange];

    /// Score one execution. Fails with [`InstrumentError::Incomplete`] when a
    /// required measurement is missing.
    fn score(
        &self,
        input: &Measurements,
        profile: &PatientProfile,
    ) -> Result<AssessmentOutcome, InstrumentError>;

    /// Check a payload's numeric fields against this protocol's ranges.
    ///
    /// Advisory: classifiers do not validate, so callers sanitise first.
    fn validate_measurements(&self, input: &Measurements) -> Vec<ValidationError> {
        let ranges = self.measurement_ranges();

        let mut errors = Vec::new();
        for entry in measurement_values(input) {
            if let Some(field) = ranges.iter().find(|r| r.id == entry.field_id)
                && !field.range.contains(entry.value)
            {
                errors.push(ValidationError {
                    field_id: entry.field_id.clone(),
                    value: entry.value,
                    expected_range: field.range,
                    kind: field.kind,
                    message: format!(
                        "{}: {} value {} is outside range [{}, {}]",
                        self.name(),
                        field.name,
                        entry.value,
                        field.range.min,
                        field.range.max,
                    ),
                });
            }
        }
        errors
    }

    fn mismatch(&self, found: &Measurements) -> InstrumentError {
        InstrumentError::MismatchedInput {
            expected: self.id(),
            found: found.protocol_id(),
        }
    }
}

/// Return all registered protocols, in catalog order.
pub fn all_protocols() -> Vec<Box<dyn Protocol>> {
    vec![
        Box::new(protocols::fried::FriedFrailty),
        Box::new(protocols::tug::TimedUpAndGo),
        Box::new(protocols::strength::ChairStand),
        Box::new(protocols::strength::ArmCurl),
        Box::new(protocols::sit_and_reach::SitAndReach),
        Box::new(protocols::gds15::Gds15),
        Box::new(protocols::meem::Meem),
        Box::new(protocols::berg::BergBalance),
    ]
}

/// Look up a protocol by its stable identifier.
pub fn get_protocol(id: &str) -> Option<Box<dyn Protocol>> {
    all_protocols().into_iter().find(|p| p.id().as_str() == id)
}

/// Score a tagged payload with the protocol it names and stamp the result.
pub fn assess(
    input: &Measurements,
    profile: &PatientProfile,
    completed_at: jiff::Timestamp,
) -> Result<AssessmentResult, InstrumentError> {
    let id = input.protocol_id();
    let protocol = get_protocol(id.as_str())
        .ok_or_else(|| InstrumentError::UnknownProtocol(id.as_str().to_string()))?;

    let outcome = protocol.score(input, profile)?;
    tracing::debug!(
        protocol = %id,
        score = outcome.total_score(),
        classification = outcome.classification_code(),
        "protocol scored"
    );
    Ok(AssessmentResult::new(outcome, completed_at))
}
