//! Test corpora for integration tests
//!
//! Small hand-built plays with known answers, plus a seeded random
//! generator for property checks.

use dramanet::{Act, Corpus, Play, Scene, Speech};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use serde_json::{json, Value};

/// Cast used by the random generator. Labels deliberately vary in form.
const CAST: &[&str] = &[
    "NORA",
    "Nora, hustru",
    "HELMER.",
    "Doktor Rank",
    "FRU LINDE",
    "Krogstad",
    "Anne-Marie",
];

const LINES: &[&str] = &[
    "Hun kommer snart.",
    "Han er ikke hjemme.",
    "Look at her",
    "Indeed",
    "Ja, ja.",
    "",
    "Det vet jeg ikke.",
    "Hvor er henne?",
];

/// The four-speech scene with a known answer.
pub fn doll_house() -> Play {
    Play::new("Et_dukkehjem").with_act(
        Act::new("1").with_scene(
            Scene::new("1")
                .with_speech(Speech::new("Nora", "Hello there"))
                .with_speech(Speech::new("Helmer", "Hi Nora"))
                .with_speech(Speech::new("Nora", "Look at her"))
                .with_speech(Speech::new("Helmer", "Indeed"))
                .with_present(["Nora", "Helmer"]),
        ),
    )
}

/// Two women talking about a third person, then a man interrupting.
pub fn lady_from_the_sea() -> Play {
    Play::new("Fruen_fra_havet")
        .with_act(
            Act::new("1").with_scene(
                Scene::new("1")
                    .with_speech(Speech::new("ELLIDA", "Har du sett henne?"))
                    .with_speech(Speech::new("BOLETTE", "Hun gikk ned til sjøen."))
                    .with_speech(Speech::new("ELLIDA", "Alene?"))
                    .with_speech(Speech::new("BOLETTE", "Ja, hun ville være alene."))
                    .with_speech(Speech::new("WANGEL", "Hvem snakker dere om?"))
                    .with_present(["ELLIDA", "BOLETTE", "WANGEL"]),
            ),
        )
        .with_act(
            Act::new("2").with_scene(
                Scene::new("1")
                    .with_speech(Speech::new("ELLIDA", "Han kommer tilbake."))
                    .with_speech(Speech::new("BOLETTE", "Hvem?"))
                    .with_speech(Speech::new("ELLIDA", "Den fremmede."))
                    .with_speech(Speech::new("BOLETTE", "Ham?"))
                    .with_present(["ELLIDA", "BOLETTE"]),
            ),
        )
}

/// The parsed-corpus JSON the markup parser would write for [`doll_house`].
pub fn doll_house_json() -> Value {
    json!({
        "plays": [{
            "title": "Et_dukkehjem",
            "file": "plays/Et_dukkehjem.xml",
            "acts": [{
                "act_n": "1",
                "scenes": [{
                    "scene_n": "1",
                    "speakers_in_scene": ["Helmer", "Nora"],
                    "speeches": [
                        {"speaker": "Nora", "text": "Hello there", "length": 2},
                        {"speaker": "Helmer", "text": "Hi Nora", "length": 2},
                        {"speaker": "Nora", "text": "Look at her", "length": 3},
                        {"speaker": "Helmer", "text": "Indeed", "length": 1}
                    ]
                }]
            }]
        }]
    })
}

/// A seeded random corpus: several plays, acts, scenes and speeches.
pub fn random_corpus(seed: u64) -> Corpus {
    let mut rng = StdRng::seed_from_u64(seed);
    let plays = (0..rng.gen_range(2..5))
        .map(|p| {
            let acts = (0..rng.gen_range(1..5))
                .map(|a| {
                    let scenes = (0..rng.gen_range(0..6))
                        .map(|s| random_scene(&mut rng, s))
                        .collect();
                    Act {
                        label: (a + 1).to_string(),
                        scenes,
                    }
                })
                .collect();
            Play {
                title: format!("Play_{p}"),
                file: None,
                acts,
            }
        })
        .collect();
    Corpus { plays }
}

fn random_scene(rng: &mut StdRng, index: usize) -> Scene {
    let cast_size = rng.gen_range(1..=CAST.len());
    let cast: Vec<&str> = CAST.choose_multiple(rng, cast_size).copied().collect();

    let mut scene = Scene::new((index + 1).to_string());
    for _ in 0..rng.gen_range(0..25) {
        let speaker = *cast.choose(rng).unwrap_or(&"");
        let text = *LINES.choose(rng).unwrap_or(&"");
        let speaker = if rng.gen_bool(0.05) { "  " } else { speaker };
        scene = scene.with_speech(Speech::new(speaker, text));
    }
    scene.with_present(cast)
}
