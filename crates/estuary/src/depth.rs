//! Depth (vertical position) solver.
//!
//! Three phases: seed every column top-down at a shared vertical scale, then alternate damped
//! right-to-left and left-to-right relaxation passes. Every pass is followed by collision
//! resolution and a fresh port assignment, so the non-overlap constraint holds after each round.

use crate::config::LayoutConfig;
use crate::graph::{LinkId, NodeId};
use crate::model::{LinkLayout, NodeLayout};
use crate::ports::{assign_ports, f64_cmp};
use crate::value::value_sum;

const ALPHA_DECAY: f64 = 0.99;

/// Runs the solver and returns the vertical scale (`ky`) it used.
pub(crate) fn solve(
    nodes: &mut [NodeLayout],
    links: &mut [LinkLayout],
    stage_count: usize,
    config: &LayoutConfig,
    iterations: usize,
) -> f64 {
    let mut columns = group_by_stage(nodes, stage_count);

    let ky = initialize_depths(nodes, links, &columns, config);
    resolve_collisions(nodes, &mut columns, config);
    assign_ports(nodes, links);

    let mut alpha = 1.0;
    for round in 0..iterations {
        alpha *= ALPHA_DECAY;
        tracing::trace!(round, alpha, "relaxation round");

        relax_right_to_left(nodes, links, &columns, alpha);
        resolve_collisions(nodes, &mut columns, config);
        assign_ports(nodes, links);

        relax_left_to_right(nodes, links, &columns, alpha);
        resolve_collisions(nodes, &mut columns, config);
        assign_ports(nodes, links);
    }

    ky
}

fn group_by_stage(nodes: &[NodeLayout], stage_count: usize) -> Vec<Vec<NodeId>> {
    let mut columns: Vec<Vec<NodeId>> = vec![Vec::new(); stage_count.max(1)];
    for (idx, node) in nodes.iter().enumerate() {
        let stage = node.stage.min(columns.len() - 1);
        columns[stage].push(NodeId::new(idx));
    }
    columns.retain(|c| !c.is_empty());
    columns
}

/// The scale is the tightest over all columns so that every column fits the canvas height.
fn vertical_scale(nodes: &[NodeLayout], columns: &[Vec<NodeId>], config: &LayoutConfig) -> f64 {
    let mut ky = f64::INFINITY;
    for column in columns {
        let total: f64 = column.iter().map(|id| nodes[id.index()].value).sum();
        if !(total > 0.0) {
            continue;
        }
        let room = config.height - (column.len() as f64 - 1.0) * config.padding;
        ky = ky.min(room / total);
    }
    if !ky.is_finite() || ky < 0.0 {
        tracing::debug!(ky, "degenerate vertical scale, collapsing node heights");
        return 0.0;
    }
    ky
}

fn initialize_depths(
    nodes: &mut [NodeLayout],
    links: &mut [LinkLayout],
    columns: &[Vec<NodeId>],
    config: &LayoutConfig,
) -> f64 {
    let ky = vertical_scale(nodes, columns, config);
    tracing::debug!(ky, columns = columns.len(), "initial depths");

    for column in columns {
        for (i, id) in column.iter().enumerate() {
            let node = &mut nodes[id.index()];
            node.y = i as f64;
            node.dy = node.value * ky;
        }
    }
    for link in links.iter_mut() {
        link.dy = link.value * ky;
    }
    ky
}

/// Value-weighted mean of the band centers at the far end of `ids`, or `None` when the links
/// carry no flow.
fn weighted_center(
    nodes: &[NodeLayout],
    links: &[LinkLayout],
    ids: &[LinkId],
    far_end: fn(&[NodeLayout], &LinkLayout) -> f64,
) -> Option<f64> {
    let weight = value_sum(links, ids);
    if !(weight > 0.0) {
        return None;
    }
    let sum: f64 = ids
        .iter()
        .map(|id| {
            let link = &links[id.index()];
            far_end(nodes, link) * link.value
        })
        .sum();
    Some(sum / weight)
}

fn target_band_center(nodes: &[NodeLayout], link: &LinkLayout) -> f64 {
    nodes[link.target.index()].y + link.ty + link.dy / 2.0
}

fn source_band_center(nodes: &[NodeLayout], link: &LinkLayout) -> f64 {
    nodes[link.source.index()].y + link.sy + link.dy / 2.0
}

fn relax_right_to_left(
    nodes: &mut [NodeLayout],
    links: &[LinkLayout],
    columns: &[Vec<NodeId>],
    alpha: f64,
) {
    for column in columns.iter().rev() {
        for &id in column {
            let node = &nodes[id.index()];
            let Some(y) = weighted_center(nodes, links, &node.source_links, target_band_center)
            else {
                continue;
            };
            let node = &mut nodes[id.index()];
            node.y += (y - node.center()) * alpha;
        }
    }
}

fn relax_left_to_right(
    nodes: &mut [NodeLayout],
    links: &[LinkLayout],
    columns: &[Vec<NodeId>],
    alpha: f64,
) {
    for column in columns {
        for &id in column {
            let node = &nodes[id.index()];
            let Some(y) = weighted_center(nodes, links, &node.target_links, source_band_center)
            else {
                continue;
            };
            let node = &mut nodes[id.index()];
            node.y += (y - node.center()) * alpha;
        }
    }
}

fn resolve_collisions(
    nodes: &mut [NodeLayout],
    columns: &mut [Vec<NodeId>],
    config: &LayoutConfig,
) {
    for column in columns.iter_mut() {
        resolve_column(nodes, column, config.padding, config.height);
    }
}

/// Sorts the column by depth (stable) and sweeps it top-down, pushing overlapping nodes down.
/// If the last node then overflows the canvas, sweeps bottom-up pushing nodes back up.
fn resolve_column(nodes: &mut [NodeLayout], column: &mut [NodeId], padding: f64, height: f64) {
    column.sort_by(|a, b| f64_cmp(nodes[a.index()].y, nodes[b.index()].y));
    let Some(&last) = column.last() else {
        return;
    };

    let mut y0 = 0.0;
    for id in column.iter() {
        let node = &mut nodes[id.index()];
        let dy = y0 - node.y;
        if dy > 0.0 {
            node.y += dy;
        }
        y0 = node.y + node.dy + padding;
    }

    let overflow = y0 - padding - height;
    if overflow > 0.0 {
        let bottom = &mut nodes[last.index()];
        bottom.y -= overflow;
        y0 = bottom.y;

        for id in column.iter().rev().skip(1) {
            let node = &mut nodes[id.index()];
            let dy = node.y + node.dy + padding - y0;
            if dy > 0.0 {
                node.y -= dy;
            }
            y0 = node.y;
        }
    }
}
