#![forbid(unsafe_code)]

//! Headless Sankey (flow diagram) layout.
//!
//! Given nodes and weighted links, [`layout`] assigns every node a column (`x`), a depth (`y`)
//! and a height proportional to its flow, and every link a thickness plus the vertical offsets
//! at which it leaves its source and enters its target. Drawing is left to the caller;
//! [`curve_for`] turns a finished link into cubic Bezier geometry.
//!
//! The pipeline is link → value → breadth → depth, where the depth solver re-runs port
//! assignment after every relaxation pass. A layout never mutates its input graph and keeps no
//! state between calls.

mod breadth;
pub mod config;
pub mod curve;
mod depth;
pub mod error;
pub mod graph;
mod linker;
pub mod model;
mod ports;
mod value;

pub use config::LayoutConfig;
pub use curve::{DEFAULT_CURVATURE, PathGeometry, Point, curve_for};
pub use error::{Error, Result};
pub use graph::{Endpoint, Graph, Link, LinkId, Node, NodeId};
pub use model::{LayoutResult, LinkLayout, NodeLayout};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Relaxation rounds used by the classic d3 Sankey examples.
pub const DEFAULT_ITERATIONS: usize = 32;

/// Runs the full layout.
///
/// Fails before any work is done if the graph is empty, a link references a missing node, a
/// link value is negative or not finite, or the config holds an invalid size. Identical input,
/// config and iteration count always produce identical output.
pub fn layout(graph: &Graph, config: &LayoutConfig, iterations: usize) -> Result<LayoutResult> {
    let span = tracing::debug_span!(
        "layout",
        nodes = graph.nodes.len(),
        links = graph.links.len(),
        iterations
    );
    let _enter = span.enter();

    config.validate()?;
    if graph.nodes.is_empty() {
        return Err(Error::EmptyGraph);
    }

    let (mut nodes, mut links) = linker::link_graph(graph)?;
    value::assign_values(&mut nodes, &links);
    let stage_count = breadth::assign_breadths(&mut nodes, &links, config);
    tracing::debug!(stage_count, "breadths assigned");
    let ky = depth::solve(&mut nodes, &mut links, stage_count, config, iterations);

    Ok(LayoutResult {
        width: config.width,
        height: config.height,
        column_width: config.column_width,
        padding: config.padding,
        ky,
        stage_count,
        nodes,
        links,
    })
}

/// Recomputes only the link port offsets of `result`, e.g. after nodes were dragged.
pub fn refresh_ports(result: &mut LayoutResult) {
    result.refresh_ports();
}
