//! In-memory network graph and its breadth-first walker.

pub mod builder;
pub mod network;
pub mod walker;

pub use builder::NetworkBuilder;
pub use network::{Network, NetworkDescriptor};
pub use walker::LayerWalker;
