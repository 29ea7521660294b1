//! Per-play aggregates: word counts, dialogue runs and the Bechdel summary

mod bechdel;
mod dialogue;
mod pronouns;
mod word_count;

pub use bechdel::{summarize_bechdel, BechdelSummary};
pub use dialogue::{find_alternating_runs, DialogueDetector, DialogueRun, DEFAULT_MIN_DIALOGUE_LEN};
pub use pronouns::{PronounClass, PronounSets};
pub use word_count::{compute_word_counts, sorted_entries, WordCountEntry, WordCounts};
