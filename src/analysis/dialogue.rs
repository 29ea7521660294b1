//! Alternating-Dialogue Detector
//!
//! Finds maximal two-party call-and-response runs inside a scene and scores
//! each one by pronoun usage.
//!
//! The scan keeps a cursor `i` over the scene's valid speeches. A run starts
//! wherever two different speakers A and B follow one another and is
//! extended while the next speaker is A or B and differs from the previous
//! one. After a candidate the cursor moves to `max(i + 1, j - 1)`, where `j`
//! is the first index that broke the run, so the last speech of one run may
//! also open the next one.

use super::pronouns::{PronounClass, PronounSets};
use crate::gender::GenderResolver;
use crate::play::{sequence_scene, words, Play, Scene, Turn};
use serde::{Deserialize, Serialize};
use std::ops::Range;

/// Default minimum run length
pub const DEFAULT_MIN_DIALOGUE_LEN: usize = 4;

/// A detected two-party exchange.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DialogueRun {
    pub play: String,
    pub act: String,
    pub scene: String,
    /// The two participants, in order of first appearance
    pub speakers: [String; 2],
    pub length: usize,
    pub start_index: usize,
    pub end_index: usize,
    #[serde(rename = "male_pron")]
    pub male_pronouns: usize,
    #[serde(rename = "female_pron")]
    pub female_pronouns: usize,
    pub total_words: usize,
    /// Both participants resolve as Female
    pub female_pair: bool,
}

/// Index ranges of alternating runs of at least `min_len` speeches.
pub fn find_alternating_runs<S: AsRef<str>>(speakers: &[S], min_len: usize) -> Vec<Range<usize>> {
    let n = speakers.len();
    let at = |k: usize| speakers[k].as_ref();
    let mut runs = Vec::new();
    let mut i = 0;

    while i + 1 < n {
        let (a, b) = (at(i), at(i + 1));
        if a == b {
            i += 1;
            continue;
        }

        let mut j = i + 2;
        while j < n && (at(j) == a || at(j) == b) && at(j) != at(j - 1) {
            j += 1;
        }

        if j - i >= min_len {
            runs.push(i..j);
        }
        i = (i + 1).max(j - 1);
    }

    runs
}

/// Detects and scores dialogue runs using borrowed configuration.
#[derive(Debug, Clone, Copy)]
pub struct DialogueDetector<'a> {
    min_len: usize,
    pronouns: &'a PronounSets,
    resolver: GenderResolver<'a>,
}

impl<'a> DialogueDetector<'a> {
    pub fn new(min_len: usize, pronouns: &'a PronounSets, resolver: GenderResolver<'a>) -> Self {
        Self {
            min_len,
            pronouns,
            resolver,
        }
    }

    /// All runs in a play, scene by scene, in document order.
    pub fn detect_play(&self, play: &Play) -> Vec<DialogueRun> {
        play.scenes()
            .flat_map(|(act, scene)| self.detect_scene(&play.title, &act.label, scene))
            .collect()
    }

    pub fn detect_scene(&self, play_id: &str, act_label: &str, scene: &Scene) -> Vec<DialogueRun> {
        let turns = sequence_scene(scene);
        if turns.len() < self.min_len {
            return Vec::new();
        }

        let speakers: Vec<&str> = turns.iter().map(|t| t.speaker.as_str()).collect();
        find_alternating_runs(&speakers, self.min_len)
            .into_iter()
            .map(|range| self.score(play_id, act_label, &scene.label, &turns, range))
            .collect()
    }

    fn score(
        &self,
        play_id: &str,
        act_label: &str,
        scene_label: &str,
        turns: &[Turn<'_>],
        range: Range<usize>,
    ) -> DialogueRun {
        let a = turns[range.start].speaker.clone();
        let b = turns[range.start + 1].speaker.clone();

        let mut male_pronouns = 0;
        let mut female_pronouns = 0;
        let mut total_words = 0;
        for turn in &turns[range.clone()] {
            for token in words(turn.text) {
                total_words += 1;
                match self.pronouns.classify(token) {
                    Some(PronounClass::Male) => male_pronouns += 1,
                    Some(PronounClass::Female) => female_pronouns += 1,
                    None => {}
                }
            }
        }

        let female_pair = self.resolver.is_female(&a, Some(play_id))
            && self.resolver.is_female(&b, Some(play_id));

        DialogueRun {
            play: play_id.to_string(),
            act: act_label.to_string(),
            scene: scene_label.to_string(),
            speakers: [a, b],
            length: range.len(),
            start_index: range.start,
            end_index: range.end - 1,
            male_pronouns,
            female_pronouns,
            total_words,
            female_pair,
        }
    }
}
