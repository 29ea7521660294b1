//! Edge records of the finished networks

use serde::{Deserialize, Serialize};

/// Directed speaker-to-next-speaker edge.
///
/// Keeps the raw sums so that averages are derived from complete data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransitionEdge {
    pub source: String,
    pub target: String,
    /// Times `source` was immediately followed by `target`
    pub count: usize,
    /// Sum of the source speech lengths over those transitions
    pub len_source_sum: usize,
    /// Sum of the target speech lengths over those transitions
    pub len_target_sum: usize,
}

impl TransitionEdge {
    pub(crate) fn new(source: &str, target: &str) -> Self {
        Self {
            source: source.to_string(),
            target: target.to_string(),
            count: 0,
            len_source_sum: 0,
            len_target_sum: 0,
        }
    }

    pub(crate) fn record(&mut self, len_source: usize, len_target: usize) {
        self.count += 1;
        self.len_source_sum = self.len_source_sum.saturating_add(len_source);
        self.len_target_sum = self.len_target_sum.saturating_add(len_target);
    }

    pub fn is_self_loop(&self) -> bool {
        self.source == self.target
    }

    /// Mean length of the source speech across all transitions.
    pub fn avg_len_source(&self) -> f64 {
        average(self.len_source_sum, self.count)
    }

    /// Mean length of the target speech across all transitions.
    pub fn avg_len_target(&self) -> f64 {
        average(self.len_target_sum, self.count)
    }
}

/// Undirected shared-scene edge. `source` sorts before `target`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CooccurrenceEdge {
    pub source: String,
    pub target: String,
    /// Number of scenes in which both were present
    pub weight: usize,
}

fn average(sum: usize, count: usize) -> f64 {
    if count == 0 {
        0.0
    } else {
        sum as f64 / count as f64
    }
}
