//! Writes networks as JSON topology descriptions.

use std::io::Write;
use std::path::Path;

use crate::graph::Network;
use crate::types::WalkResult;

use super::NetworkDescription;

/// Writer for JSON topology files.
pub struct NetworkWriter {
    pretty: bool,
}

impl NetworkWriter {
    /// Create a writer producing compact JSON.
    pub fn new() -> Self {
        Self { pretty: false }
    }

    /// Toggle pretty-printed output.
    pub fn pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    /// Write a network to a file.
    pub fn write_to_file(&self, network: &Network, path: &Path) -> WalkResult<()> {
        let mut file = std::fs::File::create(path)?;
        self.write_to(network, &mut file)?;
        file.flush()?;
        Ok(())
    }

    /// Write a network to any writer.
    pub fn write_to(&self, network: &Network, writer: &mut impl Write) -> WalkResult<()> {
        let description = NetworkDescription::from(network);
        if self.pretty {
            serde_json::to_writer_pretty(writer, &description)?;
        } else {
            serde_json::to_writer(writer, &description)?;
        }
        Ok(())
    }
}

impl Default for NetworkWriter {
    fn default() -> Self {
        Self::new()
    }
}
