//! Layer nodes: the vertices of a network graph.

use std::cell::{Ref, RefCell};
use std::fmt;
use std::rc::{Rc, Weak};

use super::data::{DataRef, DataSlot};

/// Shared handle to a layer. Layers are owned by their network.
pub type LayerRef = Rc<Layer>;

/// Identity of a layer: the address of its allocation.
///
/// Two handles denote the same layer iff their ids are equal, regardless of
/// name or contents. Only meaningful while the owning network is alive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LayerId(*const Layer);

/// Identity of the layer behind a handle.
pub fn layer_id(layer: &LayerRef) -> LayerId {
    LayerId(Rc::as_ptr(layer))
}

/// A computational unit in the network graph.
pub struct Layer {
    name: String,
    kind: String,
    /// Output edges, owned by the producing layer.
    out_data: RefCell<Vec<DataRef>>,
    /// Input edges. Lookup only: following them never keeps a slot alive.
    ins_data: RefCell<Vec<Weak<DataSlot>>>,
}

impl Layer {
    /// Create an unconnected layer.
    pub fn new(name: impl Into<String>, kind: impl Into<String>) -> LayerRef {
        Rc::new(Self {
            name: name.into(),
            kind: kind.into(),
            out_data: RefCell::new(Vec::new()),
            ins_data: RefCell::new(Vec::new()),
        })
    }

    /// Layer name, unique within its network.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Layer type, e.g. `"Convolution"`.
    pub fn kind(&self) -> &str {
        &self.kind
    }

    /// Output edges in declaration order.
    pub fn out_data(&self) -> Ref<'_, [DataRef]> {
        Ref::map(self.out_data.borrow(), Vec::as_slice)
    }

    /// Input edges in declaration order.
    pub fn ins_data(&self) -> Ref<'_, [Weak<DataSlot>]> {
        Ref::map(self.ins_data.borrow(), Vec::as_slice)
    }

    /// Attach `data` as an output of `layer` and make `layer` its creator.
    pub fn add_output(layer: &LayerRef, data: &DataRef) {
        data.set_creator(layer);
        layer.out_data.borrow_mut().push(Rc::clone(data));
    }

    pub(crate) fn push_input(&self, data: &DataRef) {
        self.ins_data.borrow_mut().push(Rc::downgrade(data));
    }

    /// Layers producing this layer's inputs, in input-edge order.
    ///
    /// Inputs without a live producer (declared network inputs, expired
    /// slots) are skipped.
    pub fn parents(&self) -> Vec<LayerRef> {
        self.ins_data
            .borrow()
            .iter()
            .filter_map(Weak::upgrade)
            .filter_map(|data| data.creator_layer().upgrade())
            .collect()
    }

    /// Layers consuming this layer's outputs, in output-edge order then by
    /// consumer name. A consumer of several outputs appears once per edge.
    pub fn children(&self) -> Vec<LayerRef> {
        let mut result = Vec::new();
        for data in self.out_data.borrow().iter() {
            result.extend(data.input_to().values().cloned());
        }
        result
    }
}

impl fmt::Debug for Layer {
    // Edge targets are printed by name only; the graph may be cyclic.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let outputs: Vec<String> = self
            .out_data
            .borrow()
            .iter()
            .map(|d| d.name().to_string())
            .collect();
        let inputs: Vec<String> = self
            .ins_data
            .borrow()
            .iter()
            .map(|d| match d.upgrade() {
                Some(d) => d.name().to_string(),
                None => "<expired>".to_string(),
            })
            .collect();
        f.debug_struct("Layer")
            .field("name", &self.name)
            .field("kind", &self.kind)
            .field("inputs", &inputs)
            .field("outputs", &outputs)
            .finish()
    }
}
