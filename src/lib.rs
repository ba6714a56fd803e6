//! netwalk: breadth-first traversal over neural network layer graphs.
//!
//! A network is a graph of layers connected through data slots: each slot has
//! at most one producing layer and any number of consuming layers. The
//! [`LayerWalker`] visits every layer weakly connected to the network's first
//! input exactly once, following both consumer and producer edges.

pub mod cli;
pub mod format;
pub mod graph;
pub mod types;

// Re-export commonly used types at the crate root
pub use format::{LayerDescription, NetworkDescription, NetworkReader, NetworkWriter};
pub use graph::{LayerWalker, Network, NetworkBuilder, NetworkDescriptor};
pub use types::{
    layer_id, DataRef, DataSlot, InputInfo, InputsDataMap, Layer, LayerId, LayerRef, WalkError,
    WalkResult,
};
