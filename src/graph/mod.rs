//! Discourse networks: directed speech transitions and undirected co-occurrence

mod cooccurrence;
mod edge;
mod node;
mod transition;

#[cfg(test)]
mod tests;

pub use cooccurrence::{build_cooccurrence_network, CooccurrenceNetwork, CooccurrenceNetworkBuilder};
pub use edge::{CooccurrenceEdge, TransitionEdge};
pub use node::{NodeIx, SpeakerIndex};
pub use transition::{
    build_act_network, build_play_network, SpeechNetwork, TransitionEvent, TransitionNetworkBuilder,
};
