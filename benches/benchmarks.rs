//! Criterion benchmarks for netwalk.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::Rng;

use netwalk::format::{NetworkReader, NetworkWriter};
use netwalk::graph::{Network, NetworkBuilder};

/// Build a layered network: every layer consumes one to three earlier outputs.
fn make_large_network(layer_count: usize) -> Network {
    let mut rng = rand::thread_rng();
    let kinds = ["Convolution", "ReLU", "Pooling", "Eltwise", "Concat"];

    let mut builder = NetworkBuilder::new("bench");
    builder.add_input("in");
    builder.add_layer("L0", "Convolution", &["in"], &["d0"]);

    for i in 1..layer_count {
        let name = format!("L{}", i);
        let output = format!("d{}", i);
        let mut inputs: Vec<String> = (0..rng.gen_range(1..=3))
            .map(|_| format!("d{}", rng.gen_range(0..i)))
            .collect();
        inputs.sort();
        inputs.dedup();
        let input_refs: Vec<&str> = inputs.iter().map(String::as_str).collect();
        builder.add_layer(&name, kinds[i % kinds.len()], &input_refs, &[output.as_str()]);
    }

    builder.build().unwrap()
}

fn bench_build_10k(c: &mut Criterion) {
    c.bench_function("build_10k_layers", |b| {
        b.iter(|| black_box(make_large_network(10_000)))
    });
}

fn bench_walk_10k(c: &mut Criterion) {
    let network = make_large_network(10_000);

    c.bench_function("walk_10k_layers", |b| {
        b.iter(|| black_box(network.walk().count()))
    });
}

fn bench_walk_100k(c: &mut Criterion) {
    let network = make_large_network(100_000);

    c.bench_function("walk_100k_layers", |b| {
        b.iter(|| black_box(network.walk().count()))
    });
}

fn bench_read_10k(c: &mut Criterion) {
    let network = make_large_network(10_000);
    let mut buf = Vec::new();
    NetworkWriter::new().write_to(&network, &mut buf).unwrap();

    c.bench_function("read_10k_layers", |b| {
        b.iter(|| black_box(NetworkReader::read_from(&mut buf.as_slice()).unwrap()))
    });
}

criterion_group!(
    benches,
    bench_build_10k,
    bench_walk_10k,
    bench_walk_100k,
    bench_read_10k
);
criterion_main!(benches);
