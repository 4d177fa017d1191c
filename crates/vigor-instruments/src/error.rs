use thiserror::Error;

use vigor_core::models::patient::Sex;
use vigor_core::models::protocol::ProtocolId;

#[derive(Debug, Error)]
pub enum InstrumentError {
    /// A required measurement is absent or not a number. The caller must not
    /// persist a result.
    #[error("incomplete input for {protocol}: {field} is missing")]
    Incomplete {
        protocol: ProtocolId,
        field: &'static str,
    },

    #[error("unknown protocol: {0}")]
    UnknownProtocol(String),

    #[error("{expected} scorer received {found} measurements")]
    MismatchedInput {
        expected: ProtocolId,
        found: ProtocolId,
    },

    #[error("no {protocol} reference band for age {age}, sex {sex:?}")]
    MissingReferenceBand {
        protocol: ProtocolId,
        age: u32,
        sex: Sex,
    },
}

impl InstrumentError {
    /// True for the expected "not ready yet" state, as opposed to a
    /// contract violation.
    pub fn is_incomplete(&self) -> bool {
        matches!(self, Self::Incomplete { .. })
    }
}
