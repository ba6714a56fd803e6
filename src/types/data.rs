//! Data slots: the edges connecting a producer to its consumers.

use std::cell::{Ref, RefCell};
use std::collections::BTreeMap;
use std::fmt;
use std::rc::{Rc, Weak};

use super::layer::{Layer, LayerRef};

/// Shared handle to a data slot.
pub type DataRef = Rc<DataSlot>;

/// The edge object between one producing layer and zero or more consumers.
pub struct DataSlot {
    name: String,
    /// Producer back-reference. Empty for declared network inputs.
    creator: RefCell<Weak<Layer>>,
    /// Consumers keyed by layer name.
    input_to: RefCell<BTreeMap<String, LayerRef>>,
}

impl DataSlot {
    /// Create a slot with no producer and no consumers.
    pub fn new(name: impl Into<String>) -> DataRef {
        Rc::new(Self {
            name: name.into(),
            creator: RefCell::new(Weak::new()),
            input_to: RefCell::new(BTreeMap::new()),
        })
    }

    /// Slot name, unique within its network.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The producing layer, if any.
    pub fn creator_layer(&self) -> Weak<Layer> {
        self.creator.borrow().clone()
    }

    /// Consumers of this slot, ordered by layer name.
    pub fn input_to(&self) -> Ref<'_, BTreeMap<String, LayerRef>> {
        self.input_to.borrow()
    }

    /// Register `layer` as a consumer of `data` and give it the matching
    /// input edge.
    ///
    /// Consumers are keyed by layer name. Subscribing a second layer with the
    /// same name replaces the first in the consumer set, while the first keeps
    /// its input edge. Callers wiring graphs by hand must keep names unique;
    /// [`NetworkBuilder`](crate::graph::NetworkBuilder) enforces this.
    pub fn add_consumer(data: &DataRef, layer: &LayerRef) {
        layer.push_input(data);
        data.input_to
            .borrow_mut()
            .insert(layer.name().to_string(), Rc::clone(layer));
    }

    pub(crate) fn set_creator(&self, layer: &LayerRef) {
        *self.creator.borrow_mut() = Rc::downgrade(layer);
    }

    /// Drop every consumer handle. Breaks forward reference cycles.
    pub(crate) fn clear_consumers(&self) {
        self.input_to.borrow_mut().clear();
    }
}

impl fmt::Debug for DataSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let creator = self.creator_layer().upgrade().map(|l| l.name().to_string());
        let input_to = self.input_to.borrow();
        let consumers: Vec<&String> = input_to.keys().collect();
        f.debug_struct("DataSlot")
            .field("name", &self.name)
            .field("creator", &creator)
            .field("input_to", &consumers)
            .finish()
    }
}

/// A declared network input.
#[derive(Debug, Clone)]
pub struct InputInfo {
    input_data: DataRef,
}

impl InputInfo {
    /// Wrap the data slot of a declared input.
    pub fn new(input_data: DataRef) -> Self {
        Self { input_data }
    }

    /// The slot the input's consumers subscribe to.
    pub fn input_data(&self) -> &DataRef {
        &self.input_data
    }
}
