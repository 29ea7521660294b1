//! Building [`GenderOverrides`] from override files and previous exports
//!
//! Loading is tolerant: a source that cannot be read or parsed
//! contributes nothing and the remaining sources still apply.

use super::{Gender, GenderOverrides};
use serde_json::Value;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Top-level key under which an export embeds its global table.
pub const EXPORT_TABLE_KEY: &str = "FEMALE_CHARACTERS";

impl GenderOverrides {
    /// Merge all sources in order: previous exports first, then the
    /// override file. Later sources overwrite earlier ones.
    pub fn load(gender_file: Option<&Path>, previous_exports: &[PathBuf]) -> Self {
        let mut overrides = GenderOverrides::new();

        for path in previous_exports {
            if let Some(value) = read_value(path) {
                overrides.merge(Self::from_export(&value));
            }
        }

        if let Some(path) = gender_file {
            if let Some(value) = read_value(path) {
                overrides.merge(Self::from_override_value(&value));
            }
        }

        debug!(
            global = overrides.global.len(),
            plays = overrides.per_play.len(),
            "gender overrides loaded"
        );
        overrides
    }

    /// Parse an override document.
    ///
    /// Two shapes are accepted: a flat `{name: token}` mapping, or a
    /// per-play `{play_id: {name: token}}` mapping. The per-play shape is
    /// assumed as soon as any top-level value is itself a mapping.
    pub fn from_override_value(value: &Value) -> Self {
        let mut overrides = GenderOverrides::new();
        let Some(map) = value.as_object() else {
            warn!("gender override document is not a mapping; ignoring it");
            return overrides;
        };

        if map.values().any(Value::is_object) {
            for (play_id, table) in map {
                let Some(table) = table.as_object() else {
                    continue;
                };
                for (name, token) in table {
                    overrides.insert_play(play_id, name, parse_gender_value(token));
                }
            }
        } else {
            for (name, token) in map {
                overrides.insert_global(name, parse_gender_value(token));
            }
        }
        overrides
    }

    /// Pick up the global table embedded in a previously written export.
    pub fn from_export(value: &Value) -> Self {
        let mut overrides = GenderOverrides::new();
        if let Some(table) = value.get(EXPORT_TABLE_KEY).and_then(Value::as_object) {
            for (name, flag) in table {
                overrides.insert_global(name, Gender::from_female_flag(truthy(flag)));
            }
        }
        overrides
    }
}

/// Booleans map directly; strings go through the token table; anything else is Unknown.
fn parse_gender_value(value: &Value) -> Gender {
    match value {
        Value::Bool(flag) => Gender::from_female_flag(*flag),
        Value::String(token) => Gender::from_token(token),
        _ => Gender::Unknown,
    }
}

/// Loose truthiness for values embedded in an export table.
fn truthy(value: &Value) -> bool {
    match value {
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|n| n != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
        Value::Null => false,
    }
}

/// Read a JSON or YAML document, logging and swallowing any failure.
fn read_value(path: &Path) -> Option<Value> {
    if !path.exists() {
        debug!(path = %path.display(), "gender source not present");
        return None;
    }

    let text = match std::fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) => {
            warn!(path = %path.display(), error = %e, "cannot read gender source; ignoring it");
            return None;
        }
    };

    let parsed = if is_yaml(path) {
        serde_yaml::from_str::<Value>(&text).map_err(|e| e.to_string())
    } else {
        serde_json::from_str::<Value>(&text).map_err(|e| e.to_string())
    };

    match parsed {
        Ok(value) => Some(value),
        Err(e) => {
            warn!(path = %path.display(), error = %e, "cannot parse gender source; ignoring it");
            None
        }
    }
}

fn is_yaml(path: &Path) -> bool {
    matches!(
        path.extension().and_then(|e| e.to_str()),
        Some("yaml") | Some("yml")
    )
}
