//! Input graph types.
//!
//! The input side is deliberately thin: a node is only an identity, a link only names its two
//! endpoints and carries a flow value. Every derived coordinate lives in
//! [`LayoutResult`](crate::LayoutResult), so the caller's graph is never mutated by a layout.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Handle of a node inside a [`LayoutResult`](crate::LayoutResult).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(usize);

impl NodeId {
    pub fn new(index: usize) -> Self {
        Self(index)
    }

    pub fn index(self) -> usize {
        self.0
    }
}

/// Handle of a link inside a [`LayoutResult`](crate::LayoutResult).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LinkId(usize);

impl LinkId {
    pub fn new(index: usize) -> Self {
        Self(index)
    }

    pub fn index(self) -> usize {
        self.0
    }
}

/// A link endpoint as supplied by the caller.
///
/// JSON numbers deserialize to [`Endpoint::Index`], strings to [`Endpoint::Id`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Endpoint {
    /// Position in [`Graph::nodes`].
    Index(usize),
    /// The `id` of a node; the first node carrying that id wins.
    Id(String),
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Endpoint::Index(idx) => write!(f, "index {idx}"),
            Endpoint::Id(id) => write!(f, "id {id:?}"),
        }
    }
}

impl From<usize> for Endpoint {
    fn from(value: usize) -> Self {
        Self::Index(value)
    }
}

impl From<NodeId> for Endpoint {
    fn from(value: NodeId) -> Self {
        Self::Index(value.index())
    }
}

impl From<&str> for Endpoint {
    fn from(value: &str) -> Self {
        Self::Id(value.to_string())
    }
}

impl From<String> for Endpoint {
    fn from(value: String) -> Self {
        Self::Id(value)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Link {
    pub source: Endpoint,
    pub target: Endpoint,
    pub value: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Graph {
    #[serde(default)]
    pub nodes: Vec<Node>,
    #[serde(default)]
    pub links: Vec<Link>,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a node and returns the handle it will have in the layout result.
    pub fn add_node(&mut self, id: impl Into<String>) -> NodeId {
        self.nodes.push(Node { id: id.into() });
        NodeId::new(self.nodes.len() - 1)
    }

    pub fn add_link(
        &mut self,
        source: impl Into<Endpoint>,
        target: impl Into<Endpoint>,
        value: f64,
    ) -> LinkId {
        self.links.push(Link {
            source: source.into(),
            target: target.into(),
            value,
        });
        LinkId::new(self.links.len() - 1)
    }
}
