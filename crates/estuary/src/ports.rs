//! Link port offsets (`sy` / `ty`).

use crate::model::{LinkLayout, NodeLayout};
use std::cmp::Ordering;

/// Total order over depths: NaN sorts last, `-0.0` and `0.0` stay equal so ties keep their order.
pub(crate) fn f64_cmp(a: f64, b: f64) -> Ordering {
    a.partial_cmp(&b).unwrap_or_else(|| a.is_nan().cmp(&b.is_nan()))
}

/// Orders every node's links by the depth of the node at their far end, then stacks them from
/// the node's top edge so they tile its height. Sorts are stable.
pub(crate) fn assign_ports(nodes: &mut [NodeLayout], links: &mut [LinkLayout]) {
    let node_y: Vec<f64> = nodes.iter().map(|n| n.y).collect();

    for node in nodes.iter_mut() {
        node.source_links.sort_by(|a, b| {
            f64_cmp(
                node_y[links[a.index()].target.index()],
                node_y[links[b.index()].target.index()],
            )
        });
        node.target_links.sort_by(|a, b| {
            f64_cmp(
                node_y[links[a.index()].source.index()],
                node_y[links[b.index()].source.index()],
            )
        });
    }

    for node in nodes.iter() {
        let mut sy = 0.0;
        for li in &node.source_links {
            let link = &mut links[li.index()];
            link.sy = sy;
            sy += link.dy;
        }
        let mut ty = 0.0;
        for li in &node.target_links {
            let link = &mut links[li.index()];
            link.ty = ty;
            ty += link.dy;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{Graph, LinkId};
    use crate::linker::link_graph;

    #[test]
    fn orders_by_far_end_depth_and_tiles() {
        let mut g = Graph::new();
        let a = g.add_node("a");
        let hi = g.add_node("hi");
        let lo = g.add_node("lo");
        g.add_link(a, lo, 3.0);
        g.add_link(a, hi, 1.0);

        let (mut nodes, mut links) = link_graph(&g).unwrap();
        links[0].dy = 3.0;
        links[1].dy = 1.0;
        nodes[hi.index()].y = 0.0;
        nodes[lo.index()].y = 50.0;

        assign_ports(&mut nodes, &mut links);
        assert_eq!(
            nodes[a.index()].source_links,
            vec![LinkId::new(1), LinkId::new(0)]
        );
        assert_eq!(links[1].sy, 0.0);
        assert_eq!(links[0].sy, 1.0);
        assert_eq!(links[0].ty, 0.0);
        assert_eq!(links[1].ty, 0.0);
    }

    #[test]
    fn nan_sorts_last_and_signed_zeros_tie() {
        assert_eq!(f64_cmp(f64::NAN, 1.0), Ordering::Greater);
        assert_eq!(f64_cmp(1.0, f64::NAN), Ordering::Less);
        assert_eq!(f64_cmp(f64::NAN, f64::NAN), Ordering::Equal);
        assert_eq!(f64_cmp(-0.0, 0.0), Ordering::Equal);
    }

    #[test]
    fn ties_keep_previous_order() {
        let mut g = Graph::new();
        let a = g.add_node("a");
        let b = g.add_node("b");
        g.add_link(a, b, 1.0);
        g.add_link(a, b, 2.0);
        g.add_link(a, b, 3.0);

        let (mut nodes, mut links) = link_graph(&g).unwrap();
        for link in links.iter_mut() {
            link.dy = link.value;
        }
        assign_ports(&mut nodes, &mut links);
        let sy: Vec<f64> = links.iter().map(|l| l.sy).collect();
        let ty: Vec<f64> = links.iter().map(|l| l.ty).collect();
        assert_eq!(sy, vec![0.0, 1.0, 3.0]);
        assert_eq!(ty, vec![0.0, 1.0, 3.0]);
    }
}
