//! Scene Sequencer: the ordered speaker sequence every builder consumes

use super::{Play, Scene};
use serde::{Deserialize, Serialize};

/// One valid speech in scene order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Turn<'a> {
    /// Canonical speaker
    pub speaker: String,
    /// Declared or derived word length
    pub length: usize,
    /// Spoken text, borrowed from the scene
    pub text: &'a str,
}

/// Extract the ordered turns of a scene.
///
/// Speeches whose speaker does not normalize are skipped; nothing else is.
pub fn sequence_scene(scene: &Scene) -> Vec<Turn<'_>> {
    scene
        .speeches
        .iter()
        .filter_map(|speech| {
            speech.canonical_speaker().map(|speaker| Turn {
                speaker,
                length: speech.word_length(),
                text: speech.text.as_str(),
            })
        })
        .collect()
}

/// A turn as it appears in the export.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnRecord {
    pub speaker: String,
    pub words: usize,
}

/// The turns of one scene, labelled with its act and scene.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SceneTurns {
    pub act: String,
    pub scene: String,
    pub turns: Vec<TurnRecord>,
}

/// Flatten a play into per-scene turn listings, dropping empty scenes.
pub fn build_scene_turns(play: &Play) -> Vec<SceneTurns> {
    play.scenes()
        .filter_map(|(act, scene)| {
            let turns: Vec<TurnRecord> = sequence_scene(scene)
                .into_iter()
                .map(|turn| TurnRecord {
                    speaker: turn.speaker,
                    words: turn.length,
                })
                .collect();
            if turns.is_empty() {
                return None;
            }
            Some(SceneTurns {
                act: act.label.clone(),
                scene: scene.label.clone(),
                turns,
            })
        })
        .collect()
}
