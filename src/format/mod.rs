//! JSON topology descriptions: reading and writing networks.

pub mod description;
pub mod reader;
pub mod writer;

pub use description::{LayerDescription, NetworkDescription};
pub use reader::NetworkReader;
pub use writer::NetworkWriter;
