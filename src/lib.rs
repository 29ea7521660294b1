//! Dramanet: discourse networks from stage-play transcripts
//!
//! Turns a parsed play (acts → scenes → speeches) into derived artifacts:
//!
//! - **Speech networks**: directed speaker-to-next-speaker transitions,
//!   for the whole play and for each act
//! - **Co-occurrence networks**: undirected shared-scene presence
//! - **Word counts**: per speaker, per play and per act
//! - **Dialogue runs**: maximal two-party alternating exchanges, scored by
//!   pronoun usage and reduced to a Bechdel pass/fail summary
//!
//! Every speaker label is canonicalized before it is compared, so
//! "NORA." and "Nora, hustru" are the same node.
//!
//! # Example
//!
//! ```
//! use dramanet::{export_plays, Act, GenderOverrides, PipelineConfig, Play, Scene, Speech};
//!
//! let play = Play::new("Et_dukkehjem").with_act(
//!     Act::new("1").with_scene(
//!         Scene::new("1")
//!             .with_speech(Speech::new("NORA", "Hello there"))
//!             .with_speech(Speech::new("HELMER", "Hi Nora")),
//!     ),
//! );
//! let export = export_plays(&[play], &PipelineConfig::default(), &GenderOverrides::new());
//! assert_eq!(export.plays[0].speech_network.edges[0].source, "Nora");
//! ```

pub mod analysis;
pub mod config;
mod error;
pub mod export;
pub mod gender;
pub mod graph;
pub mod io;
pub mod play;

pub use analysis::{BechdelSummary, DialogueDetector, DialogueRun, PronounSets, WordCountEntry};
pub use config::PipelineConfig;
pub use error::{DramanetError, DramanetResult};
pub use export::{export_plays, CorpusExport, ExportAssembler, PlayExport, PlaySummary};
pub use gender::{Gender, GenderOverrides, GenderResolver};
pub use graph::{CooccurrenceNetwork, SpeechNetwork, TransitionEvent};
pub use play::{normalize_name, Act, Corpus, Play, Scene, Speech};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
