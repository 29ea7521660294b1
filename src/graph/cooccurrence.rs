//! Co-occurrence Network Builder
//!
//! Undirected graph of speakers sharing a scene, weighted by the number of
//! scenes shared. Only the scene's present set matters; speech order does
//! not.

use super::edge::CooccurrenceEdge;
use super::node::{NodeIx, SpeakerIndex};
use crate::play::{Play, Scene};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::debug;

/// Finished co-occurrence network.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CooccurrenceNetwork {
    pub nodes: Vec<String>,
    pub edges: Vec<CooccurrenceEdge>,
}

impl CooccurrenceNetwork {
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Weight between `a` and `b`, in either order.
    pub fn weight(&self, a: &str, b: &str) -> Option<usize> {
        let (a, b) = if a <= b { (a, b) } else { (b, a) };
        self.edges
            .iter()
            .find(|e| e.source == a && e.target == b)
            .map(|e| e.weight)
    }
}

#[derive(Debug, Default)]
pub struct CooccurrenceNetworkBuilder {
    speakers: SpeakerIndex,
    edges: Vec<CooccurrenceEdge>,
    edge_positions: HashMap<(NodeIx, NodeIx), usize>,
}

impl CooccurrenceNetworkBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one scene's present set. Sets with fewer than two names are skipped.
    pub fn fold_scene(&mut self, scene: &Scene) {
        let present = scene.present_speakers();
        if present.len() < 2 {
            debug!(
                scene = %scene.label,
                present = present.len(),
                "scene too small for co-occurrence"
            );
            return;
        }

        let ixs: Vec<NodeIx> = present.iter().map(|name| self.speakers.ensure(name)).collect();

        // `present` is sorted, so every pair comes out as (smaller, larger).
        for i in 0..present.len() {
            for j in (i + 1)..present.len() {
                let key = (ixs[i], ixs[j]);
                match self.edge_positions.get(&key) {
                    Some(&position) => self.edges[position].weight += 1,
                    None => {
                        self.edges.push(CooccurrenceEdge {
                            source: present[i].clone(),
                            target: present[j].clone(),
                            weight: 1,
                        });
                        self.edge_positions.insert(key, self.edges.len() - 1);
                    }
                }
            }
        }
    }

    pub fn finish(self) -> CooccurrenceNetwork {
        CooccurrenceNetwork {
            nodes: self.speakers.into_names(),
            edges: self.edges,
        }
    }
}

/// Co-occurrence network over every scene of a play.
pub fn build_cooccurrence_network(play: &Play) -> CooccurrenceNetwork {
    let mut builder = CooccurrenceNetworkBuilder::new();
    for (_, scene) in play.scenes() {
        builder.fold_scene(scene);
    }
    builder.finish()
}
