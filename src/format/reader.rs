//! Reads JSON topology descriptions into networks.

use std::io::Read;
use std::path::Path;

use crate::graph::Network;
use crate::types::WalkResult;

use super::NetworkDescription;

/// Reader for JSON topology files.
pub struct NetworkReader;

impl NetworkReader {
    /// Read a topology file into a Network.
    pub fn read_from_file(path: &Path) -> WalkResult<Network> {
        let data = std::fs::read(path)?;
        Self::read_from(&mut data.as_slice())
    }

    /// Read from any reader into a Network.
    pub fn read_from(reader: &mut impl Read) -> WalkResult<Network> {
        let description = Self::read_description(reader)?;
        Network::from_description(&description)
    }

    /// Parse a description without building the graph.
    pub fn read_description(reader: &mut impl Read) -> WalkResult<NetworkDescription> {
        Ok(serde_json::from_reader(reader)?)
    }
}
