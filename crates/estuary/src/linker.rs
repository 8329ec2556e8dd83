//! Endpoint resolution and adjacency lists.

use crate::error::{Error, Result};
use crate::graph::{Endpoint, Graph, LinkId, NodeId};
use crate::model::{LinkLayout, NodeLayout};
use rustc_hash::FxHashMap as HashMap;

/// Resolves every link endpoint to a [`NodeId`] and builds the per-node link lists.
///
/// Link lists keep input order. Nothing is built unless every link resolves and carries a
/// finite, non-negative value.
pub(crate) fn link_graph(graph: &Graph) -> Result<(Vec<NodeLayout>, Vec<LinkLayout>)> {
    let mut by_id: HashMap<&str, NodeId> = HashMap::default();
    for (idx, node) in graph.nodes.iter().enumerate() {
        by_id.entry(node.id.as_str()).or_insert(NodeId::new(idx));
    }

    let resolve = |link: usize, endpoint: &Endpoint| -> Result<NodeId> {
        let resolved = match endpoint {
            Endpoint::Index(idx) => (*idx < graph.nodes.len()).then(|| NodeId::new(*idx)),
            Endpoint::Id(id) => by_id.get(id.as_str()).copied(),
        };
        resolved.ok_or_else(|| Error::InvalidReference {
            link,
            endpoint: endpoint.clone(),
        })
    };

    let mut links: Vec<LinkLayout> = Vec::with_capacity(graph.links.len());
    for (idx, l) in graph.links.iter().enumerate() {
        let source = resolve(idx, &l.source)?;
        let target = resolve(idx, &l.target)?;
        if !l.value.is_finite() || l.value < 0.0 {
            return Err(Error::InvalidValue {
                link: idx,
                value: l.value,
            });
        }
        links.push(LinkLayout {
            index: idx,
            source,
            target,
            value: l.value,
            dy: 0.0,
            sy: 0.0,
            ty: 0.0,
        });
    }

    let mut nodes: Vec<NodeLayout> = graph
        .nodes
        .iter()
        .enumerate()
        .map(|(idx, n)| NodeLayout {
            id: n.id.clone(),
            index: idx,
            stage: 0,
            value: 0.0,
            x: 0.0,
            dx: 0.0,
            y: 0.0,
            dy: 0.0,
            source_links: Vec::new(),
            target_links: Vec::new(),
        })
        .collect();

    for (idx, l) in links.iter().enumerate() {
        nodes[l.source.index()].source_links.push(LinkId::new(idx));
        nodes[l.target.index()].target_links.push(LinkId::new(idx));
    }

    Ok((nodes, links))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_indices_and_ids() {
        let mut g = Graph::new();
        g.add_node("a");
        g.add_node("b");
        g.add_node("c");
        g.add_link(0usize, "b", 1.0);
        g.add_link("b", 2usize, 2.0);

        let (nodes, links) = link_graph(&g).unwrap();
        assert_eq!(links[0].source, NodeId::new(0));
        assert_eq!(links[0].target, NodeId::new(1));
        assert_eq!(links[1].source, NodeId::new(1));
        assert_eq!(links[1].target, NodeId::new(2));
        assert_eq!(nodes[1].target_links, vec![LinkId::new(0)]);
        assert_eq!(nodes[1].source_links, vec![LinkId::new(1)]);
    }

    #[test]
    fn keeps_input_order_per_node() {
        let mut g = Graph::new();
        let a = g.add_node("a");
        let b = g.add_node("b");
        let c = g.add_node("c");
        g.add_link(a, c, 1.0);
        g.add_link(a, b, 1.0);
        g.add_link(a, c, 3.0);

        let (nodes, _) = link_graph(&g).unwrap();
        assert_eq!(
            nodes[0].source_links,
            vec![LinkId::new(0), LinkId::new(1), LinkId::new(2)]
        );
        assert_eq!(nodes[2].target_links, vec![LinkId::new(0), LinkId::new(2)]);
    }

    #[test]
    fn duplicate_ids_resolve_to_the_first_node() {
        let mut g = Graph::new();
        g.add_node("x");
        g.add_node("x");
        g.add_node("y");
        g.add_link("x", "y", 1.0);

        let (_, links) = link_graph(&g).unwrap();
        assert_eq!(links[0].source, NodeId::new(0));
    }

    #[test]
    fn rejects_out_of_bounds_index() {
        let mut g = Graph::new();
        g.add_node("a");
        g.add_link(0usize, 5usize, 1.0);

        assert_eq!(
            link_graph(&g).unwrap_err(),
            Error::InvalidReference {
                link: 0,
                endpoint: Endpoint::Index(5),
            }
        );
    }

    #[test]
    fn rejects_unknown_id() {
        let mut g = Graph::new();
        g.add_node("a");
        g.add_link("a", "missing", 1.0);

        assert!(matches!(
            link_graph(&g),
            Err(Error::InvalidReference { link: 0, .. })
        ));
    }

    #[test]
    fn rejects_negative_and_nan_values() {
        let mut g = Graph::new();
        g.add_node("a");
        g.add_node("b");
        g.add_link("a", "b", -2.0);
        assert!(matches!(
            link_graph(&g),
            Err(Error::InvalidValue { link: 0, .. })
        ));

        g.links[0].value = f64::NAN;
        assert!(matches!(
            link_graph(&g),
            Err(Error::InvalidValue { link: 0, .. })
        ));
    }
}
