//! Explicit, versioned clinic configuration.
//!
//! Components that need settings take a `&VigorConfig` argument; nothing
//! reads configuration from ambient state.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::models::protocol::ProtocolId;

/// Current config version. Bump this when adding fields or changing shape.
/// Each bump requires a corresponding entry in [`migrate`].
pub const CURRENT_VERSION: u32 = 1;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VigorConfig {
    /// Schema version. Missing or 0 = pre-versioned config.
    #[serde(default)]
    pub config_version: u32,
    pub clinic_name: String,
    /// Per-clinic display labels, keyed by classification code. Added in v1.
    #[serde(default)]
    pub label_overrides: BTreeMap<String, String>,
    /// Instructional video per protocol. Added in v1.
    #[serde(default)]
    pub protocol_videos: BTreeMap<ProtocolId, String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tutor: Option<TutorSettings>,
}

/// Credentials for the AI tutor collaborator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TutorSettings {
    pub api_key: String,
    pub model: String,
}

impl Default for VigorConfig {
    fn default() -> Self {
        Self {
            config_version: CURRENT_VERSION,
            clinic_name: String::new(),
            label_overrides: BTreeMap::new(),
            protocol_videos: BTreeMap::new(),
            tutor: None,
        }
    }
}

impl VigorConfig {
    pub fn video_for(&self, protocol: ProtocolId) -> Option<&str> {
        self.protocol_videos.get(&protocol).map(String::as_str)
    }

    /// Copy safe to print or send to a frontend.
    pub fn redacted(&self) -> Self {
        let mut copy = self.clone();
        if let Some(tutor) = copy.tutor.as_mut() {
            tutor.api_key = redact_key(&tutor.api_key);
        }
        copy
    }
}

pub fn load_config(path: &Path) -> Result<VigorConfig, CoreError> {
    let contents = std::fs::read_to_string(path)?;

    // Parse as raw JSON so we can run migrations before deserializing.
    let json: serde_json::Value = serde_json::from_str(&contents)?;
    let on_disk_version = json
        .get("config_version")
        .and_then(|v| v.as_u64())
        .unwrap_or(0) as u32;

    let migrated = migrate(json, on_disk_version)?;
    let config: VigorConfig = serde_json::from_value(migrated)?;
    tracing::debug!(path = %path.display(), clinic = %config.clinic_name, "config loaded");
    Ok(config)
}

/// Run sequential migrations from `from_version` up to [`CURRENT_VERSION`].
///
/// Each migration is a pure transform on the raw JSON value.
fn migrate(mut json: serde_json::Value, from_version: u32) -> Result<serde_json::Value, CoreError> {
    if from_version > CURRENT_VERSION {
        return Err(CoreError::UnsupportedConfigVersion {
            found: from_version,
            supported: CURRENT_VERSION,
        });
    }

    // v0 → v1: add label_overrides and protocol_videos
    if from_version < 1 {
        let obj = json
            .as_object_mut()
            .ok_or_else(|| CoreError::InvalidConfig("config is not a JSON object".to_string()))?;
        obj.entry("label_overrides")
            .or_insert(serde_json::Value::Object(serde_json::Map::new()));
        obj.entry("protocol_videos")
            .or_insert(serde_json::Value::Object(serde_json::Map::new()));
        obj.insert(
            "config_version".to_string(),
            serde_json::Value::Number(1.into()),
        );
        tracing::info!("migrated config v0 → v1 (added label_overrides, protocol_videos)");
    }

    Ok(json)
}

pub fn save_config(path: &Path, config: &VigorConfig) -> Result<(), CoreError> {
    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir)?;
    }

    // Always write the current version, regardless of what was loaded.
    let mut stamped = config.clone();
    stamped.config_version = CURRENT_VERSION;
    let json = serde_json::to_string_pretty(&stamped)?;

    let tmp_path = path.with_extension("json.tmp");
    std::fs::write(&tmp_path, json.as_bytes())?;

    // The file may hold the tutor API key.
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        std::fs::set_permissions(&tmp_path, std::fs::Permissions::from_mode(0o600))?;
    }

    std::fs::rename(&tmp_path, path)?;

    tracing::info!(path = %path.display(), "config saved");
    Ok(())
}

fn redact_key(key: &str) -> String {
    let chars: Vec<char> = key.chars().collect();
    if chars.len() <= 8 {
        return "****".to_string();
    }
    let prefix: String = chars[..4].iter().collect();
    let suffix: String = chars[chars.len() - 4..].iter().collect();
    format!("{prefix}...{suffix}")
}
