//! Transition Network Builder
//!
//! Folds scenes into a directed, edge-weighted graph of who speaks after
//! whom. Accumulation happens in a private builder; the finished
//! [`SpeechNetwork`] is produced in one step by [`TransitionNetworkBuilder::finish`],
//! which is also where self-transitions are dropped.

use super::edge::TransitionEdge;
use super::node::{NodeIx, SpeakerIndex};
use crate::play::{sequence_scene, Act, Play, Scene};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::debug;

/// One recorded transition, kept for event-level analyses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransitionEvent {
    pub play: String,
    pub act: String,
    pub scene: String,
    /// Index of the current speech within the scene's valid speeches
    pub pos_in_scene: usize,
    pub current_speaker: String,
    pub next_speaker: String,
    pub len_current: usize,
    pub len_next: usize,
    /// Canonical present set of the scene, sorted
    pub scene_speakers: Vec<String>,
}

/// Finished directed speech network.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SpeechNetwork {
    /// Canonical speakers in first-seen order
    pub nodes: Vec<String>,
    /// Edges in creation order, self-loops excluded
    pub edges: Vec<TransitionEdge>,
}

impl SpeechNetwork {
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn edge(&self, source: &str, target: &str) -> Option<&TransitionEdge> {
        self.edges
            .iter()
            .find(|e| e.source == source && e.target == target)
    }
}

/// Single-writer accumulator for a [`SpeechNetwork`].
#[derive(Debug, Default)]
pub struct TransitionNetworkBuilder {
    speakers: SpeakerIndex,
    edges: Vec<TransitionEdge>,
    edge_positions: HashMap<(NodeIx, NodeIx), usize>,
    /// Play title; event recording is on when set
    event_play: Option<String>,
    events: Vec<TransitionEvent>,
}

impl TransitionNetworkBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Also record a [`TransitionEvent`] per transition, tagged with `play`.
    pub fn recording_events(play: impl Into<String>) -> Self {
        Self {
            event_play: Some(play.into()),
            ..Self::default()
        }
    }

    /// Fold one scene into the network.
    ///
    /// Scenes with fewer than two valid speeches contribute nothing, not
    /// even nodes.
    pub fn fold_scene(&mut self, act_label: &str, scene: &Scene) {
        let turns = sequence_scene(scene);
        if turns.len() < 2 {
            debug!(
                act = act_label,
                scene = %scene.label,
                turns = turns.len(),
                "scene too short for transitions"
            );
            return;
        }

        let scene_speakers = self
            .event_play
            .as_ref()
            .map(|_| scene.present_speakers())
            .unwrap_or_default();

        for (pos, pair) in turns.windows(2).enumerate() {
            let (current, next) = (&pair[0], &pair[1]);
            self.record(&current.speaker, &next.speaker, current.length, next.length);

            if let Some(play) = &self.event_play {
                self.events.push(TransitionEvent {
                    play: play.clone(),
                    act: act_label.to_string(),
                    scene: scene.label.clone(),
                    pos_in_scene: pos,
                    current_speaker: current.speaker.clone(),
                    next_speaker: next.speaker.clone(),
                    len_current: current.length,
                    len_next: next.length,
                    scene_speakers: scene_speakers.clone(),
                });
            }
        }
    }

    /// Fold every scene of an act.
    pub fn fold_act(&mut self, act: &Act) {
        for scene in &act.scenes {
            self.fold_scene(&act.label, scene);
        }
    }

    fn record(&mut self, source: &str, target: &str, len_source: usize, len_target: usize) {
        let s = self.speakers.ensure(source);
        let t = self.speakers.ensure(target);
        let position = match self.edge_positions.get(&(s, t)) {
            Some(&position) => position,
            None => {
                self.edges.push(TransitionEdge::new(source, target));
                self.edge_positions.insert((s, t), self.edges.len() - 1);
                self.edges.len() - 1
            }
        };
        self.edges[position].record(len_source, len_target);
    }

    /// Finalize: drop self-loops and hand out the immutable network.
    pub fn finish(self) -> SpeechNetwork {
        self.finish_with_events().0
    }

    /// Like [`finish`](Self::finish), also returning the recorded events.
    ///
    /// Events for self-transitions stay in the audit trail even though
    /// their edge is pruned.
    pub fn finish_with_events(self) -> (SpeechNetwork, Vec<TransitionEvent>) {
        let total = self.edges.len();
        let edges: Vec<TransitionEdge> = self
            .edges
            .into_iter()
            .filter(|edge| !edge.is_self_loop())
            .collect();
        if edges.len() < total {
            debug!(pruned = total - edges.len(), "self-transitions removed");
        }

        let network = SpeechNetwork {
            nodes: self.speakers.into_names(),
            edges,
        };
        (network, self.events)
    }
}

/// Play-scope network plus its transition events.
pub fn build_play_network(play: &Play) -> (SpeechNetwork, Vec<TransitionEvent>) {
    let mut builder = TransitionNetworkBuilder::recording_events(play.title.clone());
    for act in &play.acts {
        builder.fold_act(act);
    }
    builder.finish_with_events()
}

/// Act-scope network. Same algorithm, narrower input.
pub fn build_act_network(act: &Act) -> SpeechNetwork {
    let mut builder = TransitionNetworkBuilder::new();
    builder.fold_act(act);
    builder.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::play::Speech;

    fn scene_of(label: &str, speakers: &[&str]) -> Scene {
        speakers.iter().fold(Scene::new(label), |scene, speaker| {
            scene.with_speech(Speech::new(*speaker, "a b"))
        })
    }

    #[test]
    fn alternating_scene_collapses_to_two_edges() {
        let act = Act::new("1").with_scene(scene_of("1", &["A", "B", "A", "B"]));
        let network = build_act_network(&act);

        assert_eq!(network.nodes, vec!["A", "B"]);
        assert_eq!(network.edge_count(), 2);
        assert_eq!(network.edge("A", "B").unwrap().count, 2);
        assert_eq!(network.edge("B", "A").unwrap().count, 1);
    }

    #[test]
    fn self_transitions_are_pruned_but_nodes_stay() {
        let act = Act::new("1")
            .with_scene(scene_of("1", &["A", "A", "B"]))
            .with_scene(scene_of("2", &["C", "C"]));
        let network = build_act_network(&act);

        assert!(network.edge("A", "A").is_none());
        assert!(network.edge("C", "C").is_none());
        assert_eq!(network.edge("A", "B").unwrap().count, 1);
        assert_eq!(network.nodes, vec!["A", "B", "C"]);
    }

    #[test]
    fn short_scenes_contribute_nothing() {
        let act = Act::new("1")
            .with_scene(scene_of("1", &["Solo"]))
            .with_scene(
                Scene::new("2")
                    .with_speech(Speech::new("", "no name"))
                    .with_speech(Speech::new("Rank", "hm")),
            );
        let network = build_act_network(&act);
        assert_eq!(network.node_count(), 0);
        assert_eq!(network.edge_count(), 0);
    }

    #[test]
    fn edges_accumulate_across_scenes() {
        let mut builder = TransitionNetworkBuilder::new();
        builder.fold_scene("1", &scene_of("1", &["Nora", "Helmer"]));
        builder.fold_scene(
            "1",
            &Scene::new("2")
                .with_speech(Speech::new("NORA", "x").with_length(4))
                .with_speech(Speech::new("Helmer, advokat", "y").with_length(6)),
        );
        let network = builder.finish();

        let edge = network.edge("Nora", "Helmer").unwrap();
        assert_eq!(edge.count, 2);
        assert_eq!(edge.len_source_sum, 6);
        assert_eq!(edge.len_target_sum, 8);
        assert_eq!(edge.avg_len_source(), 3.0);
        assert_eq!(edge.avg_len_target(), 4.0);
    }

    #[test]
    fn play_network_records_events() {
        let play = Play::new("Et_dukkehjem").with_act(
            Act::new("2").with_scene(
                scene_of("3", &["Nora", "Nora", "Helmer"]).with_present(["NORA", "HELMER", "RANK"]),
            ),
        );
        let (network, events) = build_play_network(&play);

        assert_eq!(network.edge_count(), 1);
        assert_eq!(events.len(), 2);
        assert_eq!(events[0].current_speaker, "Nora");
        assert_eq!(events[0].next_speaker, "Nora");
        assert_eq!(events[1].pos_in_scene, 1);
        assert_eq!(events[1].play, "Et_dukkehjem");
        assert_eq!(events[1].act, "2");
        assert_eq!(events[1].scene, "3");
        assert_eq!(events[1].scene_speakers, vec!["Helmer", "Nora", "Rank"]);
        assert_eq!(events[1].len_current, 2);
    }

    #[test]
    fn act_builder_records_no_events() {
        let mut builder = TransitionNetworkBuilder::new();
        builder.fold_scene("1", &scene_of("1", &["A", "B"]));
        let (_, events) = builder.finish_with_events();
        assert!(events.is_empty());
    }
}
