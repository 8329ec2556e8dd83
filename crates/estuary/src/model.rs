//! Layout output types.
//!
//! A [`LayoutResult`] is an arena: nodes and links refer to each other through [`NodeId`] and
//! [`LinkId`] handles, both of which are plain indices into `nodes` / `links`.

use crate::curve::{PathGeometry, curve_for};
use crate::graph::{LinkId, NodeId};
use crate::ports;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeLayout {
    pub id: String,
    /// Position of the node in the input graph.
    pub index: usize,
    /// Discrete column index.
    pub stage: usize,
    pub value: f64,
    pub x: f64,
    pub dx: f64,
    pub y: f64,
    pub dy: f64,
    /// Outgoing links, ordered top to bottom by target depth after layout.
    pub source_links: Vec<LinkId>,
    /// Incoming links, ordered top to bottom by source depth after layout.
    pub target_links: Vec<LinkId>,
}

impl NodeLayout {
    pub fn center(&self) -> f64 {
        self.y + self.dy / 2.0
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkLayout {
    /// Position of the link in the input graph.
    pub index: usize,
    pub source: NodeId,
    pub target: NodeId,
    pub value: f64,
    /// Band thickness.
    pub dy: f64,
    /// Offset of the band's top edge below the source node's top.
    pub sy: f64,
    /// Offset of the band's top edge below the target node's top.
    pub ty: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutResult {
    pub width: f64,
    pub height: f64,
    pub column_width: f64,
    pub padding: f64,
    /// Pixels per unit of flow.
    pub ky: f64,
    pub stage_count: usize,
    pub nodes: Vec<NodeLayout>,
    pub links: Vec<LinkLayout>,
}

impl LayoutResult {
    pub fn node(&self, id: NodeId) -> Option<&NodeLayout> {
        self.nodes.get(id.index())
    }

    pub fn node_mut(&mut self, id: NodeId) -> Option<&mut NodeLayout> {
        self.nodes.get_mut(id.index())
    }

    pub fn link(&self, id: LinkId) -> Option<&LinkLayout> {
        self.links.get(id.index())
    }

    pub fn node_by_id(&self, id: &str) -> Option<&NodeLayout> {
        self.nodes.iter().find(|n| n.id == id)
    }

    /// Nodes grouped by stage, skipping empty stages. Each column is in input order.
    pub fn columns(&self) -> Vec<Vec<NodeId>> {
        let mut by_stage: Vec<Vec<NodeId>> = vec![Vec::new(); self.stage_count.max(1)];
        for (idx, node) in self.nodes.iter().enumerate() {
            if let Some(column) = by_stage.get_mut(node.stage) {
                column.push(NodeId::new(idx));
            }
        }
        by_stage.retain(|c| !c.is_empty());
        by_stage
    }

    /// Recomputes every link's `sy`/`ty` from the current node depths.
    ///
    /// Use after moving nodes by hand; breadth and depth are left untouched.
    pub fn refresh_ports(&mut self) {
        ports::assign_ports(&mut self.nodes, &mut self.links);
    }

    pub fn link_curve(&self, id: LinkId, curvature: f64) -> Option<PathGeometry> {
        let link = self.link(id)?;
        let source = self.node(link.source)?;
        let target = self.node(link.target)?;
        Some(curve_for(source, target, link, curvature))
    }

    /// Curve geometry for every link, in link order.
    pub fn curves(&self, curvature: f64) -> impl Iterator<Item = PathGeometry> + '_ {
        (0..self.links.len()).filter_map(move |idx| self.link_curve(LinkId::new(idx), curvature))
    }
}
