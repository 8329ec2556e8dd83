//! Breadth (column) assignment.

use crate::config::LayoutConfig;
use crate::graph::NodeId;
use crate::model::{LinkLayout, NodeLayout};

/// Longest-path layering followed by scaling to pixels. Returns the number of stages.
pub(crate) fn assign_breadths(
    nodes: &mut [NodeLayout],
    links: &[LinkLayout],
    config: &LayoutConfig,
) -> usize {
    let stage_count = assign_stages(nodes, links);

    if config.sources_right {
        move_sources_right(nodes, links);
    }
    if config.sinks_right {
        move_sinks_right(nodes, stage_count);
    }

    scale_breadths(nodes, stage_count, config);
    stage_count
}

/// Re-visits the targets of every frontier until no new frontier is produced, so a node ends up
/// on the level of the longest chain reaching it. The level count is capped at the node count to
/// terminate on cycles.
fn assign_stages(nodes: &mut [NodeLayout], links: &[LinkLayout]) -> usize {
    let n = nodes.len();
    let mut current: Vec<NodeId> = (0..n).map(NodeId::new).collect();
    let mut next: Vec<NodeId> = Vec::new();
    let mut next_seen = vec![false; n];
    let mut level = 0usize;

    while !current.is_empty() && level < n {
        for &id in &current {
            let node = &mut nodes[id.index()];
            node.stage = level;
            for &li in &node.source_links {
                let target = links[li.index()].target;
                if !next_seen[target.index()] {
                    next_seen[target.index()] = true;
                    next.push(target);
                }
            }
        }
        level += 1;
        current = std::mem::take(&mut next);
        next_seen.fill(false);
    }

    if !current.is_empty() {
        tracing::debug!(level, "breadth assignment stopped at the level bound (cyclic graph)");
    }
    level
}

fn move_sources_right(nodes: &mut [NodeLayout], links: &[LinkLayout]) {
    let stages: Vec<usize> = nodes.iter().map(|n| n.stage).collect();
    for node in nodes.iter_mut() {
        if !node.target_links.is_empty() {
            continue;
        }
        let min_target = node
            .source_links
            .iter()
            .map(|li| stages[links[li.index()].target.index()])
            .min();
        if let Some(stage) = min_target {
            node.stage = stage.saturating_sub(1);
        }
    }
}

fn move_sinks_right(nodes: &mut [NodeLayout], stage_count: usize) {
    let last = stage_count.saturating_sub(1);
    for node in nodes.iter_mut() {
        if node.source_links.is_empty() {
            node.stage = last;
        }
    }
}

fn scale_breadths(nodes: &mut [NodeLayout], stage_count: usize, config: &LayoutConfig) {
    let span = stage_count.saturating_sub(1);
    let room = (config.width - config.column_width).max(0.0);
    for node in nodes.iter_mut() {
        node.dx = config.column_width;
        node.x = if span == 0 {
            0.0
        } else {
            room * (node.stage as f64 / span as f64)
        };
    }
}
