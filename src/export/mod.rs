//! Export Assembler
//!
//! Pure composition of the builders and aggregators into one record per
//! play. Plays share nothing mutable, so the corpus is processed with one
//! worker per play when the configuration allows it; the output is the
//! same either way.

mod types;

pub use types::{
    ActExport, ActWordCounts, CooccurrenceNetworkExport, CorpusExport, NetworkExport, NodeRecord,
    PlayExport, PlaySummary, SpeechNetworkExport, TransitionEdgeRecord,
};

use crate::analysis::{compute_word_counts, sorted_entries, summarize_bechdel, DialogueDetector};
use crate::config::PipelineConfig;
use crate::gender::{GenderOverrides, GenderResolver};
use crate::graph::{
    build_act_network, build_cooccurrence_network, build_play_network, SpeechNetwork,
};
use crate::play::{build_scene_turns, Play};
use rayon::prelude::*;
use tracing::{debug, info};

/// Assembles exports from borrowed configuration and gender overrides.
#[derive(Debug, Clone, Copy)]
pub struct ExportAssembler<'a> {
    config: &'a PipelineConfig,
    overrides: &'a GenderOverrides,
}

impl<'a> ExportAssembler<'a> {
    pub fn new(config: &'a PipelineConfig, overrides: &'a GenderOverrides) -> Self {
        Self { config, overrides }
    }

    fn resolver(&self) -> GenderResolver<'a> {
        GenderResolver::new(self.overrides)
    }

    /// Export every play, preserving input order.
    pub fn assemble(&self, plays: &[Play]) -> CorpusExport {
        info!(plays = plays.len(), parallel = self.config.parallel, "assembling export");

        let plays: Vec<PlayExport> = if self.config.parallel {
            plays.par_iter().map(|play| self.assemble_play(play)).collect()
        } else {
            plays.iter().map(|play| self.assemble_play(play)).collect()
        };

        CorpusExport {
            female_characters: self.overrides.global().clone(),
            plays,
        }
    }

    pub fn assemble_play(&self, play: &Play) -> PlayExport {
        let play_id = play.id();

        let (speech_network, events) = build_play_network(play);
        let co_network = build_cooccurrence_network(play);
        let word_counts = compute_word_counts(play);

        let acts = play
            .acts
            .iter()
            .map(|act| {
                let network = build_act_network(act);
                let counts = word_counts
                    .act(&act.label)
                    .map(sorted_entries)
                    .unwrap_or_default();
                ActExport {
                    act_n: act.label.clone(),
                    speech_network: self.speech_export(&network, play_id),
                    word_counts: counts,
                }
            })
            .collect();

        let act_word_counts = ActWordCounts(
            word_counts
                .acts
                .iter()
                .map(|(label, counts)| (label.clone(), sorted_entries(counts)))
                .collect(),
        );

        let detector = DialogueDetector::new(
            self.config.min_dialogue_len,
            &self.config.pronouns,
            self.resolver(),
        );
        let dialogs = detector.detect_play(play);
        let bechdel = summarize_bechdel(&dialogs);

        let export = PlayExport {
            id: play_id.to_string(),
            title: play.title.clone(),
            speech_network: self.speech_export(&speech_network, play_id),
            co_network: NetworkExport {
                nodes: self.node_records(&co_network.nodes, play_id),
                edges: co_network.edges,
            },
            acts,
            word_counts: sorted_entries(&word_counts.play),
            act_word_counts,
            dialogs,
            scene_turns: build_scene_turns(play),
            bechdel,
            transitions: self.config.include_transitions.then_some(events),
        };

        debug!(
            play = %export.title,
            speakers = export.speech_network.nodes.len(),
            edges = export.speech_network.edges.len(),
            dialogs = export.dialogs.len(),
            passes = export.bechdel.passes,
            "play assembled"
        );
        export
    }

    fn speech_export(&self, network: &SpeechNetwork, play_id: &str) -> SpeechNetworkExport {
        NetworkExport {
            nodes: self.node_records(&network.nodes, play_id),
            edges: network.edges.iter().map(TransitionEdgeRecord::from).collect(),
        }
    }

    fn node_records(&self, names: &[String], play_id: &str) -> Vec<NodeRecord> {
        let resolver = self.resolver();
        names
            .iter()
            .map(|name| NodeRecord {
                id: name.clone(),
                gender: resolver.resolve(name, Some(play_id)),
            })
            .collect()
    }
}

/// Export a corpus in one call.
pub fn export_plays(
    plays: &[Play],
    config: &PipelineConfig,
    overrides: &GenderOverrides,
) -> CorpusExport {
    ExportAssembler::new(config, overrides).assemble(plays)
}
