//! Serializable network topology.

use serde::{Deserialize, Serialize};

use crate::graph::Network;

/// Topology of a network: declared inputs and layers with named edges.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkDescription {
    /// Network name.
    #[serde(default)]
    pub name: String,
    /// Declared input names. Each names the data slot the input produces.
    #[serde(default)]
    pub inputs: Vec<String>,
    /// Layers, in declaration order.
    #[serde(default)]
    pub layers: Vec<LayerDescription>,
}

/// One layer and the data slots it consumes and produces.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayerDescription {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub inputs: Vec<String>,
    #[serde(default)]
    pub outputs: Vec<String>,
}

impl From<&Network> for NetworkDescription {
    fn from(network: &Network) -> Self {
        let layers = network
            .layers()
            .iter()
            .map(|layer| LayerDescription {
                name: layer.name().to_string(),
                kind: layer.kind().to_string(),
                inputs: layer
                    .ins_data()
                    .iter()
                    .filter_map(|d| d.upgrade())
                    .map(|d| d.name().to_string())
                    .collect(),
                outputs: layer
                    .out_data()
                    .iter()
                    .map(|d| d.name().to_string())
                    .collect(),
            })
            .collect();

        Self {
            name: network.name().to_string(),
            inputs: network.inputs().keys().cloned().collect(),
            layers,
        }
    }
}
