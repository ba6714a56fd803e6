//! Fluent API for building Network instances.

use crate::format::{LayerDescription, NetworkDescription};
use crate::types::WalkResult;

use super::Network;

/// Fluent builder for constructing a Network.
///
/// Edges are named by data slot; names are resolved in [`NetworkBuilder::build`],
/// so layers may be added in any order.
pub struct NetworkBuilder {
    description: NetworkDescription,
}

impl NetworkBuilder {
    /// Create a builder for an empty network.
    pub fn new(name: &str) -> Self {
        Self {
            description: NetworkDescription {
                name: name.to_string(),
                ..NetworkDescription::default()
            },
        }
    }

    /// Start from an existing topology description.
    pub fn from_description(description: NetworkDescription) -> Self {
        Self { description }
    }

    /// Declare a network input producing the data slot `name`.
    pub fn add_input(&mut self, name: &str) -> &mut Self {
        self.description.inputs.push(name.to_string());
        self
    }

    /// Add a layer consuming the `inputs` slots and producing the `outputs` slots.
    pub fn add_layer(
        &mut self,
        name: &str,
        kind: &str,
        inputs: &[&str],
        outputs: &[&str],
    ) -> &mut Self {
        self.description.layers.push(LayerDescription {
            name: name.to_string(),
            kind: kind.to_string(),
            inputs: inputs.iter().map(|s| s.to_string()).collect(),
            outputs: outputs.iter().map(|s| s.to_string()).collect(),
        });
        self
    }

    /// Build the final Network.
    pub fn build(self) -> WalkResult<Network> {
        Network::from_description(&self.description)
    }
}

impl Default for NetworkBuilder {
    fn default() -> Self {
        Self::new("")
    }
}
