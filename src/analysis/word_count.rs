//! Word-Count Aggregator

use crate::play::{sequence_scene, Play};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One row of a word-count listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordCountEntry {
    pub character: String,
    pub words: usize,
}

/// Words spoken per canonical speaker, for a play and each of its acts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordCounts {
    pub play: HashMap<String, usize>,
    /// Per act label, in order of first appearance. Acts sharing a label share an entry.
    pub acts: Vec<(String, HashMap<String, usize>)>,
}

impl WordCounts {
    pub fn act(&self, label: &str) -> Option<&HashMap<String, usize>> {
        self.acts
            .iter()
            .find(|(act, _)| act == label)
            .map(|(_, counts)| counts)
    }
}

/// Single pass over the play. Zero-length speeches are not counted.
pub fn compute_word_counts(play: &Play) -> WordCounts {
    let mut counts = WordCounts::default();

    for act in &play.acts {
        let act_ix = match counts.acts.iter().position(|(label, _)| *label == act.label) {
            Some(ix) => ix,
            None => {
                counts.acts.push((act.label.clone(), HashMap::new()));
                counts.acts.len() - 1
            }
        };

        for scene in &act.scenes {
            for turn in sequence_scene(scene) {
                if turn.length == 0 {
                    continue;
                }
                let total = counts.play.entry(turn.speaker.clone()).or_insert(0);
                *total = total.saturating_add(turn.length);
                let in_act = counts.acts[act_ix].1.entry(turn.speaker).or_insert(0);
                *in_act = in_act.saturating_add(turn.length);
            }
        }
    }

    counts
}

/// Descending by words, ties broken by ascending name.
pub fn sorted_entries(counts: &HashMap<String, usize>) -> Vec<WordCountEntry> {
    let mut entries: Vec<WordCountEntry> = counts
        .iter()
        .map(|(character, &words)| WordCountEntry {
            character: character.clone(),
            words,
        })
        .collect();
    entries.sort_by(|a, b| b.words.cmp(&a.words).then_with(|| a.character.cmp(&b.character)));
    entries
}
