//! Play transcript data model
//!
//! These records are the boundary between the markup parser and the
//! network engine. Every optional or nullable field is defaulted here so
//! that nothing downstream needs to second-guess the shape of the input.

mod lenient;
mod normalize;
mod sequence;

pub use normalize::{count_words, normalize_name, words};
pub use sequence::{build_scene_turns, sequence_scene, SceneTurns, Turn, TurnRecord};

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use tracing::warn;

/// A whole parsed corpus.
///
/// Accepts both `{"plays": [...]}` and a bare list of plays. A play that
/// cannot be read at all is logged and skipped; the others still load.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Corpus {
    pub plays: Vec<Play>,
}

impl Corpus {
    /// Build a corpus from an already parsed document.
    pub fn from_value(value: Value) -> Result<Self, serde_json::Error> {
        let items = match value {
            Value::Array(items) => items,
            Value::Object(mut map) => match map.remove("plays") {
                Some(Value::Array(items)) => items,
                Some(Value::Null) => Vec::new(),
                Some(other) => {
                    return Err(serde_json::Error::custom(format!(
                        "`plays` must be a list of plays, found {}",
                        lenient::kind(&other)
                    )))
                }
                None => {
                    let keys: Vec<&String> = map.keys().collect();
                    warn!(?keys, "corpus mapping has no `plays` list; treating it as empty");
                    Vec::new()
                }
            },
            other => {
                return Err(serde_json::Error::custom(format!(
                    "a corpus must be a list of plays or a mapping with `plays`, found {}",
                    lenient::kind(&other)
                )))
            }
        };
        Ok(Self {
            plays: lenient::parse_records(items, "play"),
        })
    }
}

impl<'de> Deserialize<'de> for Corpus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Self::from_value(value).map_err(D::Error::custom)
    }
}

/// A play. The title doubles as its identity key.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Play {
    #[serde(default, deserialize_with = "lenient::label")]
    pub title: String,
    /// Source document the parser read, if it recorded one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
    #[serde(default, deserialize_with = "lenient::records")]
    pub acts: Vec<Act>,
}

impl Play {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Default::default()
        }
    }

    pub fn with_act(mut self, act: Act) -> Self {
        self.acts.push(act);
        self
    }

    /// Identifier used for per-play gender overrides and in the export.
    pub fn id(&self) -> &str {
        &self.title
    }

    /// Iterate `(act, scene)` pairs in document order.
    pub fn scenes(&self) -> impl Iterator<Item = (&Act, &Scene)> {
        self.acts
            .iter()
            .flat_map(|act| act.scenes.iter().map(move |scene| (act, scene)))
    }
}

/// An act: a free-form label and its scenes in order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Act {
    #[serde(rename = "act_n", default, deserialize_with = "lenient::label")]
    pub label: String,
    #[serde(default, deserialize_with = "lenient::records")]
    pub scenes: Vec<Scene>,
}

impl Act {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            scenes: Vec::new(),
        }
    }

    pub fn with_scene(mut self, scene: Scene) -> Self {
        self.scenes.push(scene);
        self
    }
}

/// A scene: ordered speeches plus the set of speakers known to be present.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Scene {
    #[serde(rename = "scene_n", default, deserialize_with = "lenient::label")]
    pub label: String,
    #[serde(default, deserialize_with = "lenient::records")]
    pub speeches: Vec<Speech>,
    /// Raw labels of speakers present; may include people who never speak.
    #[serde(rename = "speakers_in_scene", default, deserialize_with = "lenient::names")]
    pub present: Vec<String>,
}

impl Scene {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            ..Default::default()
        }
    }

    pub fn with_speech(mut self, speech: Speech) -> Self {
        self.speeches.push(speech);
        self
    }

    pub fn with_present<I, S>(mut self, speakers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.present.extend(speakers.into_iter().map(Into::into));
        self
    }

    /// Canonical, deduplicated, sorted present set.
    pub fn present_speakers(&self) -> Vec<String> {
        let mut names: Vec<String> = self
            .present
            .iter()
            .filter_map(|raw| normalize_name(Some(raw)))
            .collect();
        names.sort();
        names.dedup();
        names
    }
}

/// One speech: who said it, what was said, and optionally how many words.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Speech {
    #[serde(default, deserialize_with = "lenient::speaker")]
    pub speaker: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub text: String,
    /// Precomputed word count; derived from `text` when absent or unusable.
    #[serde(
        default,
        deserialize_with = "lenient::length",
        skip_serializing_if = "Option::is_none"
    )]
    pub length: Option<usize>,
}

impl Speech {
    pub fn new(speaker: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            speaker: Some(speaker.into()),
            text: text.into(),
            length: None,
        }
    }

    pub fn with_length(mut self, length: usize) -> Self {
        self.length = Some(length);
        self
    }

    /// Canonical speaker name, if the raw label normalizes.
    pub fn canonical_speaker(&self) -> Option<String> {
        normalize_name(self.speaker.as_deref())
    }

    /// Declared length, or the number of word runs in the text.
    pub fn word_length(&self) -> usize {
        self.length.unwrap_or_else(|| count_words(&self.text))
    }
}
