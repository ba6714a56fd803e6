//! Graph element types: layers, data slots, network inputs and errors.

pub mod data;
pub mod error;
pub mod layer;

use std::collections::BTreeMap;

pub use data::{DataRef, DataSlot, InputInfo};
pub use error::{WalkError, WalkResult};
pub use layer::{layer_id, Layer, LayerId, LayerRef};

/// Declared network inputs, keyed by input name.
pub type InputsDataMap = BTreeMap<String, InputInfo>;
