//! Bechdel Aggregator

use super::dialogue::DialogueRun;
use serde::{Deserialize, Serialize};

/// Pass/fail reduction of a play's dialogue runs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BechdelSummary {
    /// Some female-pair run has female pronouns and no male ones
    pub passes: bool,
    /// Runs whose participants both resolve as Female
    pub female_dialog_count: usize,
    /// Female-pair runs without any male pronoun
    pub female_dialogs_no_male_pron: usize,
}

pub fn summarize_bechdel(runs: &[DialogueRun]) -> BechdelSummary {
    let female_runs = runs.iter().filter(|run| run.female_pair);

    let mut summary = BechdelSummary::default();
    for run in female_runs {
        summary.female_dialog_count += 1;
        if run.male_pronouns == 0 {
            summary.female_dialogs_no_male_pron += 1;
            if run.female_pronouns > 0 {
                summary.passes = true;
            }
        }
    }
    summary
}
