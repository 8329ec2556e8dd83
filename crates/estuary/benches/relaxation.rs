use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use estuary::{Graph, LayoutConfig, layout};
use std::hint::black_box;
use std::time::Duration;

/// A layered flow: `layers` columns of `width` nodes, each node feeding `fanout` nodes of the
/// next layer with varying values.
fn build_layered_graph(layers: usize, width: usize, fanout: usize) -> Graph {
    let mut g = Graph::new();
    for layer in 0..layers {
        for i in 0..width {
            g.add_node(format!("l{layer}_n{i}"));
        }
    }

    for layer in 0..layers.saturating_sub(1) {
        for i in 0..width {
            let from = layer * width + i;
            for k in 0..fanout {
                let to = (layer + 1) * width + (i + k * 3) % width;
                let value = 1.0 + ((i * 7 + k * 13) % 11) as f64;
                g.add_link(from, to, value);
            }
        }
    }
    g
}

fn bench_layout(c: &mut Criterion) {
    let mut group = c.benchmark_group("layout");
    group.measurement_time(Duration::from_secs(10));

    let cases = [
        ("l4_w8_f2", 4usize, 8usize, 2usize),
        ("l8_w20_f3", 8, 20, 3),
        ("l12_w40_f4", 12, 40, 4),
    ];
    let config = LayoutConfig {
        column_width: 15.0,
        padding: 4.0,
        ..LayoutConfig::new(1200.0, 800.0)
    };

    for (name, layers, width, fanout) in cases {
        let graph = build_layered_graph(layers, width, fanout);
        group.bench_with_input(BenchmarkId::new("layout", name), &graph, |b, graph| {
            b.iter(|| {
                let result = layout(black_box(graph), &config, estuary::DEFAULT_ITERATIONS);
                black_box(result.map(|r| r.nodes.len()).unwrap_or(0));
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_layout);
criterion_main!(benches);
