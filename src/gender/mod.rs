//! Gender override tables and resolution
//!
//! Overrides are an explicit configuration object built once at startup
//! (see [`GenderOverrides::load`]) and borrowed by a [`GenderResolver`]
//! for the lifetime of an export. There is no process-wide table.

mod load;

use crate::play::normalize_name;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Resolved gender of a speaker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    #[serde(rename = "F")]
    Female,
    #[serde(rename = "M")]
    Male,
    #[serde(rename = "?")]
    Unknown,
}

impl Gender {
    /// `true` maps to Female, `false` to Male.
    pub fn from_female_flag(is_female: bool) -> Self {
        if is_female {
            Gender::Female
        } else {
            Gender::Male
        }
    }

    /// Map a free-text token, case-insensitively. Unrecognized tokens are Unknown.
    pub fn from_token(token: &str) -> Self {
        match token.trim().to_lowercase().as_str() {
            "f" | "female" | "k" | "kv" | "kvinne" | "kvinnelig" => Gender::Female,
            "m" | "male" | "mann" | "mannlig" => Gender::Male,
            _ => Gender::Unknown,
        }
    }

    /// The female flag stored in override tables; `None` for Unknown.
    pub fn female_flag(self) -> Option<bool> {
        match self {
            Gender::Female => Some(true),
            Gender::Male => Some(false),
            Gender::Unknown => None,
        }
    }

    pub fn is_female(self) -> bool {
        self == Gender::Female
    }
}

impl std::fmt::Display for Gender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Gender::Female => "F",
            Gender::Male => "M",
            Gender::Unknown => "?",
        };
        f.write_str(s)
    }
}

/// Canonical name -> is-female flag.
pub type GenderTable = BTreeMap<String, bool>;

/// Merged gender overrides: a global table and per-play tables keyed by play id.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenderOverrides {
    global: GenderTable,
    per_play: BTreeMap<String, GenderTable>,
}

impl GenderOverrides {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a global override. Names are normalized; unnormalizable names are ignored.
    pub fn with_global(mut self, name: &str, gender: Gender) -> Self {
        self.insert_global(name, gender);
        self
    }

    /// Set an override that applies only within one play.
    pub fn with_play(mut self, play_id: &str, name: &str, gender: Gender) -> Self {
        self.insert_play(play_id, name, gender);
        self
    }

    pub fn insert_global(&mut self, name: &str, gender: Gender) {
        if let Some((name, flag)) = override_entry(name, gender) {
            self.global.insert(name, flag);
        }
    }

    pub fn insert_play(&mut self, play_id: &str, name: &str, gender: Gender) {
        if let Some((name, flag)) = override_entry(name, gender) {
            self.per_play
                .entry(play_id.to_string())
                .or_default()
                .insert(name, flag);
        }
    }

    /// Fold `other` into `self`; entries in `other` win.
    pub fn merge(&mut self, other: GenderOverrides) {
        self.global.extend(other.global);
        for (play_id, table) in other.per_play {
            self.per_play.entry(play_id).or_default().extend(table);
        }
    }

    /// The global table, as embedded at the top of every export.
    pub fn global(&self) -> &GenderTable {
        &self.global
    }

    pub fn play_table(&self, play_id: &str) -> Option<&GenderTable> {
        self.per_play.get(play_id)
    }

    pub fn is_empty(&self) -> bool {
        self.global.is_empty() && self.per_play.values().all(|t| t.is_empty())
    }
}

/// Canonical name and female flag, or `None` when either is missing.
fn override_entry(name: &str, gender: Gender) -> Option<(String, bool)> {
    Some((normalize_name(Some(name))?, gender.female_flag()?))
}

/// Resolves canonical names against borrowed overrides.
#[derive(Debug, Clone, Copy)]
pub struct GenderResolver<'a> {
    overrides: &'a GenderOverrides,
}

impl<'a> GenderResolver<'a> {
    pub fn new(overrides: &'a GenderOverrides) -> Self {
        Self { overrides }
    }

    /// Per-play table first, then the global table, then Unknown.
    pub fn resolve(&self, name: &str, play_id: Option<&str>) -> Gender {
        let per_play = play_id
            .and_then(|id| self.overrides.play_table(id))
            .and_then(|table| table.get(name));
        per_play
            .or_else(|| self.overrides.global.get(name))
            .map(|&flag| Gender::from_female_flag(flag))
            .unwrap_or(Gender::Unknown)
    }

    /// True only when the name resolves positively to Female.
    pub fn is_female(&self, name: &str, play_id: Option<&str>) -> bool {
        self.resolve(name, play_id).is_female()
    }

    pub fn overrides(&self) -> &'a GenderOverrides {
        self.overrides
    }
}
