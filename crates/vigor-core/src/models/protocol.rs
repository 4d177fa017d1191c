use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

/// The fixed catalog of functional-assessment protocols.
///
/// Declaration order is catalog order; reports list protocols in this order.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, TS,
)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum ProtocolId {
    FriedFrailty,
    Tug,
    ChairStand,
    ArmCurl,
    SitAndReach,
    Gds15,
    Meem,
    BergBalance,
}

impl ProtocolId {
    pub const ALL: [ProtocolId; 8] = [
        ProtocolId::FriedFrailty,
        ProtocolId::Tug,
        ProtocolId::ChairStand,
        ProtocolId::ArmCurl,
        ProtocolId::SitAndReach,
        ProtocolId::Gds15,
        ProtocolId::Meem,
        ProtocolId::BergBalance,
    ];

    /// Stable identifier used in storage and on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::FriedFrailty => "fried_frailty",
            Self::Tug => "tug",
            Self::ChairStand => "chair_stand",
            Self::ArmCurl => "arm_curl",
            Self::SitAndReach => "sit_and_reach",
            Self::Gds15 => "gds15",
            Self::Meem => "meem",
            Self::BergBalance => "berg_balance",
        }
    }

    /// Human-readable protocol name.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::FriedFrailty => "Fenótipo de Fragilidade de Fried",
            Self::Tug => "Timed Up and Go (TUG)",
            Self::ChairStand => "Levantar e Sentar na Cadeira (30s)",
            Self::ArmCurl => "Flexão de Antebraço (30s)",
            Self::SitAndReach => "Sentar e Alcançar",
            Self::Gds15 => "Escala de Depressão Geriátrica (GDS-15)",
            Self::Meem => "Mini Exame do Estado Mental (MEEM)",
            Self::BergBalance => "Escala de Equilíbrio de Berg",
        }
    }
}

impl fmt::Display for ProtocolId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProtocolId {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ProtocolId::ALL
            .into_iter()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| CoreError::UnknownProtocol(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_catalog_id() {
        for id in ProtocolId::ALL {
            assert_eq!(id.as_str().parse::<ProtocolId>().unwrap(), id);
        }
    }

    #[test]
    fn serde_code_matches_as_str() {
        for id in ProtocolId::ALL {
            let json = serde_json::to_string(&id).unwrap();
            assert_eq!(json, format!("\"{}\"", id.as_str()));
        }
    }

    #[test]
    fn rejects_unknown_id() {
        assert!(matches!(
            "six_minute_walk".parse::<ProtocolId>(),
            Err(CoreError::UnknownProtocol(_))
        ));
    }
}
