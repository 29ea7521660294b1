//! Speaker nodes

use std::collections::HashMap;

/// Index into a builder's node list
pub type NodeIx = usize;

/// Canonical speakers in first-seen order.
///
/// Node order in every network follows the order in which speakers were
/// first added during the build, which keeps exports reproducible.
#[derive(Debug, Clone, Default)]
pub struct SpeakerIndex {
    names: Vec<String>,
    positions: HashMap<String, NodeIx>,
}

impl SpeakerIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the index of `name`, adding it if it is new.
    pub fn ensure(&mut self, name: &str) -> NodeIx {
        if let Some(&ix) = self.positions.get(name) {
            return ix;
        }
        let ix = self.names.len();
        self.names.push(name.to_string());
        self.positions.insert(name.to_string(), ix);
        ix
    }

    pub fn get(&self, name: &str) -> Option<NodeIx> {
        self.positions.get(name).copied()
    }

    pub fn name(&self, ix: NodeIx) -> &str {
        &self.names[ix]
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn into_names(self) -> Vec<String> {
        self.names
    }
}
