//! CLI command implementations.

use std::path::Path;

use crate::format::{NetworkReader, NetworkWriter};
use crate::types::{LayerRef, WalkResult};

/// Display information about a topology file.
pub fn cmd_info(path: &Path, json: bool) -> WalkResult<()> {
    let network = NetworkReader::read_from_file(path)?;
    let inputs: Vec<&str> = network.inputs().keys().map(String::as_str).collect();
    let reachable = network.walk().count();

    if json {
        let info = serde_json::json!({
            "file": path.display().to_string(),
            "name": network.name(),
            "inputs": inputs,
            "layers": network.layer_count(),
            "data": network.data_count(),
            "reachable": reachable,
        });
        println!(
            "{}",
            serde_json::to_string_pretty(&info).unwrap_or_default()
        );
    } else {
        println!("File: {}", path.display());
        println!("Name: {}", network.name());
        println!("Inputs: {}", inputs.join(", "));
        println!("Layers: {}", network.layer_count());
        println!("Data slots: {}", network.data_count());
        println!("Reachable layers: {}", reachable);
        if reachable < network.layer_count() {
            println!(
                "  ({} layers not connected to the first input)",
                network.layer_count() - reachable
            );
        }
    }
    Ok(())
}

/// Print the breadth-first visitation order.
pub fn cmd_walk(path: &Path, limit: Option<usize>, json: bool) -> WalkResult<()> {
    let network = NetworkReader::read_from_file(path)?;
    let limit = limit.unwrap_or(usize::MAX);
    let order: Vec<LayerRef> = network.walk().take(limit).collect();

    if json {
        let layers: Vec<serde_json::Value> = order
            .iter()
            .enumerate()
            .map(|(i, layer)| {
                serde_json::json!({
                    "index": i,
                    "name": layer.name(),
                    "type": layer.kind(),
                })
            })
            .collect();
        println!(
            "{}",
            serde_json::to_string_pretty(&serde_json::json!({
                "network": network.name(),
                "count": layers.len(),
                "layers": layers,
            }))
            .unwrap_or_default()
        );
    } else {
        println!("Walk of '{}':", network.name());
        for (i, layer) in order.iter().enumerate() {
            println!("  {:>4}  {:<24} {}", i, layer.name(), layer.kind());
        }
        println!("{} layers visited", order.len());
    }
    Ok(())
}

/// Show a layer's producers and consumers.
pub fn cmd_layer(path: &Path, name: &str, json: bool) -> WalkResult<()> {
    let network = NetworkReader::read_from_file(path)?;
    let layer = network.require_layer(name)?;

    let inputs: Vec<String> = layer
        .ins_data()
        .iter()
        .filter_map(|d| d.upgrade())
        .map(|d| d.name().to_string())
        .collect();
    let outputs: Vec<String> = layer
        .out_data()
        .iter()
        .map(|d| d.name().to_string())
        .collect();
    let parents = names(&layer.parents());
    let children = names(&layer.children());

    if json {
        let info = serde_json::json!({
            "name": layer.name(),
            "type": layer.kind(),
            "inputs": inputs,
            "outputs": outputs,
            "producers": parents,
            "consumers": children,
        });
        println!(
            "{}",
            serde_json::to_string_pretty(&info).unwrap_or_default()
        );
    } else {
        println!("Layer {}", layer.name());
        println!("  Type: {}", layer.kind());
        println!("  Inputs: {}", inputs.join(", "));
        println!("  Outputs: {}", outputs.join(", "));
        println!("  Producers: {}", parents.join(", "));
        println!("  Consumers: {}", children.join(", "));
    }
    Ok(())
}

/// Re-serialize a topology file in canonical form.
pub fn cmd_export(path: &Path, output: Option<&Path>, pretty: bool) -> WalkResult<()> {
    let network = NetworkReader::read_from_file(path)?;
    let writer = NetworkWriter::new().pretty(pretty);
    match output {
        Some(out) => {
            writer.write_to_file(&network, out)?;
            println!("Exported '{}' to {}", network.name(), out.display());
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            writer.write_to(&network, &mut stdout)?;
            println!();
        }
    }
    Ok(())
}

fn names(layers: &[LayerRef]) -> Vec<String> {
    let mut result: Vec<String> = Vec::with_capacity(layers.len());
    for layer in layers {
        if !result.iter().any(|n| n == layer.name()) {
            result.push(layer.name().to_string());
        }
    }
    result
}
