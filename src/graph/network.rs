//! The network container and the descriptor seam the walker reads through.

use std::collections::{BTreeMap, HashMap};

use crate::format::NetworkDescription;
use crate::types::{
    DataRef, DataSlot, InputInfo, InputsDataMap, Layer, LayerRef, WalkError, WalkResult,
};

use super::LayerWalker;

/// Read-only view of a network: its declared inputs.
pub trait NetworkDescriptor {
    /// Declared inputs, keyed by input name.
    fn inputs_info(&self) -> InputsDataMap;
}

/// Owner of every layer and data slot of one network graph.
#[derive(Debug)]
pub struct Network {
    name: String,
    inputs: InputsDataMap,
    /// All layers, in declaration order.
    layers: Vec<LayerRef>,
    layer_index: HashMap<String, usize>,
    /// All data slots, declared inputs first.
    data: Vec<DataRef>,
    data_index: HashMap<String, usize>,
}

impl Network {
    /// Create an empty network.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            inputs: BTreeMap::new(),
            layers: Vec::new(),
            layer_index: HashMap::new(),
            data: Vec::new(),
            data_index: HashMap::new(),
        }
    }

    /// Build a network from a topology description, resolving edge names.
    pub fn from_description(desc: &NetworkDescription) -> WalkResult<Self> {
        let mut network = Self::new(desc.name.as_str());

        for input in &desc.inputs {
            let data = DataSlot::new(input.as_str());
            network.register_data(&data)?;
            network.inputs.insert(input.clone(), InputInfo::new(data));
        }

        // Layers and the slots they produce.
        for decl in &desc.layers {
            if network.layer_index.contains_key(&decl.name) {
                return Err(WalkError::DuplicateLayer(decl.name.clone()));
            }
            let layer = Layer::new(decl.name.as_str(), decl.kind.as_str());
            for output in &decl.outputs {
                let data = DataSlot::new(output.as_str());
                network.register_data(&data)?;
                Layer::add_output(&layer, &data);
            }
            network
                .layer_index
                .insert(decl.name.clone(), network.layers.len());
            network.layers.push(layer);
        }

        // Consumers, now that every slot exists.
        for (layer, decl) in network.layers.iter().zip(&desc.layers) {
            for input in &decl.inputs {
                let data = network
                    .data(input)
                    .ok_or_else(|| WalkError::DataNotFound(input.clone()))?;
                DataSlot::add_consumer(data, layer);
            }
        }

        log::debug!(
            "Built network '{}': {} inputs, {} layers, {} data slots",
            network.name,
            network.inputs.len(),
            network.layers.len(),
            network.data.len()
        );
        Ok(network)
    }

    fn register_data(&mut self, data: &DataRef) -> WalkResult<()> {
        if self.data_index.contains_key(data.name()) {
            return Err(WalkError::DuplicateData(data.name().to_string()));
        }
        self.data_index
            .insert(data.name().to_string(), self.data.len());
        self.data.push(DataRef::clone(data));
        Ok(())
    }

    /// Network name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Declared inputs, keyed by input name.
    pub fn inputs(&self) -> &InputsDataMap {
        &self.inputs
    }

    /// Get a layer by name.
    pub fn layer(&self, name: &str) -> Option<&LayerRef> {
        self.layer_index.get(name).map(|&idx| &self.layers[idx])
    }

    /// Get a layer by name, failing with `LayerNotFound`.
    pub fn require_layer(&self, name: &str) -> WalkResult<&LayerRef> {
        self.layer(name)
            .ok_or_else(|| WalkError::LayerNotFound(name.to_string()))
    }

    /// Get a data slot by name.
    pub fn data(&self, name: &str) -> Option<&DataRef> {
        self.data_index.get(name).map(|&idx| &self.data[idx])
    }

    /// All layers, in declaration order.
    pub fn layers(&self) -> &[LayerRef] {
        &self.layers
    }

    /// All data slots, declared inputs first.
    pub fn data_slots(&self) -> &[DataRef] {
        &self.data
    }

    /// Number of layers.
    pub fn layer_count(&self) -> usize {
        self.layers.len()
    }

    /// Number of data slots.
    pub fn data_count(&self) -> usize {
        self.data.len()
    }

    /// Breadth-first walker over the layers reachable from the first input.
    pub fn walk(&self) -> LayerWalker<'_> {
        LayerWalker::new(self)
    }
}

impl NetworkDescriptor for Network {
    fn inputs_info(&self) -> InputsDataMap {
        self.inputs.clone()
    }
}

impl<'a> IntoIterator for &'a Network {
    type Item = LayerRef;
    type IntoIter = LayerWalker<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.walk()
    }
}

impl Drop for Network {
    fn drop(&mut self) {
        // Consumer maps hold strong handles; recurrent graphs would leak.
        for data in &self.data {
            data.clear_consumers();
        }
    }
}
