use crate::graph::LinkId;
use crate::model::{LinkLayout, NodeLayout};

pub(crate) fn value_sum(links: &[LinkLayout], ids: &[LinkId]) -> f64 {
    ids.iter().map(|id| links[id.index()].value).sum()
}

/// A node is as tall as the heavier of its two sides; in and out flow need not balance.
pub(crate) fn assign_values(nodes: &mut [NodeLayout], links: &[LinkLayout]) {
    for node in nodes.iter_mut() {
        let out_sum = value_sum(links, &node.source_links);
        let in_sum = value_sum(links, &node.target_links);
        node.value = out_sum.max(in_sum);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::Graph;
    use crate::linker::link_graph;

    #[test]
    fn takes_the_larger_side() {
        let mut g = Graph::new();
        let a = g.add_node("a");
        let b = g.add_node("b");
        let c = g.add_node("c");
        let d = g.add_node("d");
        g.add_link(a, b, 5.0);
        g.add_link(c, b, 2.0);
        g.add_link(b, d, 4.0);

        let (mut nodes, links) = link_graph(&g).unwrap();
        assign_values(&mut nodes, &links);
        assert_eq!(nodes[b.index()].value, 7.0);
        assert_eq!(nodes[a.index()].value, 5.0);
        assert_eq!(nodes[d.index()].value, 4.0);
    }

    #[test]
    fn isolated_node_has_zero_value() {
        let mut g = Graph::new();
        g.add_node("lonely");
        let (mut nodes, links) = link_graph(&g).unwrap();
        assign_values(&mut nodes, &links);
        assert_eq!(nodes[0].value, 0.0);
    }
}
