//! Export records
//!
//! Field names match the JSON consumed by the network viewer, including
//! the `FEMALE_CHARACTERS` table and the `avg_len_A`/`avg_len_B` edge fields.

use crate::analysis::{BechdelSummary, DialogueRun, WordCountEntry};
use crate::gender::{Gender, GenderTable};
use crate::graph::{CooccurrenceEdge, TransitionEdge, TransitionEvent};
use crate::play::SceneTurns;
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

/// A graph node with its resolved gender.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NodeRecord {
    pub id: String,
    pub gender: Gender,
}

/// A transition edge with averages taken over the finished counts.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TransitionEdgeRecord {
    pub source: String,
    pub target: String,
    pub count: usize,
    #[serde(rename = "avg_len_A")]
    pub avg_len_a: f64,
    #[serde(rename = "avg_len_B")]
    pub avg_len_b: f64,
}

impl From<&TransitionEdge> for TransitionEdgeRecord {
    fn from(edge: &TransitionEdge) -> Self {
        Self {
            source: edge.source.clone(),
            target: edge.target.clone(),
            count: edge.count,
            avg_len_a: edge.avg_len_source(),
            avg_len_b: edge.avg_len_target(),
        }
    }
}

/// Nodes and edges of one exported network.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NetworkExport<E> {
    pub nodes: Vec<NodeRecord>,
    pub edges: Vec<E>,
}

pub type SpeechNetworkExport = NetworkExport<TransitionEdgeRecord>;
pub type CooccurrenceNetworkExport = NetworkExport<CooccurrenceEdge>;

/// Per-act network and word counts.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ActExport {
    pub act_n: String,
    pub speech_network: SpeechNetworkExport,
    pub word_counts: Vec<WordCountEntry>,
}

/// Act label -> sorted word counts, serialized as a JSON object in act order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActWordCounts(pub Vec<(String, Vec<WordCountEntry>)>);

impl ActWordCounts {
    pub fn get(&self, act: &str) -> Option<&[WordCountEntry]> {
        self.0
            .iter()
            .find(|(label, _)| label == act)
            .map(|(_, entries)| entries.as_slice())
    }
}

impl Serialize for ActWordCounts {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (act, entries) in &self.0 {
            map.serialize_entry(act, entries)?;
        }
        map.end()
    }
}

/// Everything derived from one play.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlayExport {
    pub id: String,
    pub title: String,
    pub speech_network: SpeechNetworkExport,
    pub co_network: CooccurrenceNetworkExport,
    pub acts: Vec<ActExport>,
    pub word_counts: Vec<WordCountEntry>,
    pub act_word_counts: ActWordCounts,
    pub dialogs: Vec<DialogueRun>,
    pub scene_turns: Vec<SceneTurns>,
    pub bechdel: BechdelSummary,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transitions: Option<Vec<TransitionEvent>>,
}

/// The full export: the global gender table plus one record per play.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CorpusExport {
    #[serde(rename = "FEMALE_CHARACTERS")]
    pub female_characters: GenderTable,
    pub plays: Vec<PlayExport>,
}

/// One-line overview of a play export.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlaySummary {
    pub title: String,
    pub speakers: usize,
    pub transition_edges: usize,
    pub cooccurrence_edges: usize,
    pub dialogs: usize,
    pub female_dialogs: usize,
    pub passes_bechdel: bool,
}

impl From<&PlayExport> for PlaySummary {
    fn from(play: &PlayExport) -> Self {
        Self {
            title: play.title.clone(),
            speakers: play.speech_network.nodes.len(),
            transition_edges: play.speech_network.edges.len(),
            cooccurrence_edges: play.co_network.edges.len(),
            dialogs: play.dialogs.len(),
            female_dialogs: play.bechdel.female_dialog_count,
            passes_bechdel: play.bechdel.passes,
        }
    }
}
