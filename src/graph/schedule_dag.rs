use crate::registry::ActivityRegistry;
use petgraph::Direction;
use petgraph::graph::{DiGraph, NodeIndex};

/// Precedence graph over registry indices, edges pointing predecessor -> successor.
///
/// Nodes are added in registry order, so `NodeIndex::new(i)` is activity `i`.
pub struct ScheduleDag {
    pub graph: DiGraph<usize, ()>,
    pub durations: Vec<i64>,
}

impl ScheduleDag {
    pub fn build(registry: &ActivityRegistry) -> Self {
        let mut graph: DiGraph<usize, ()> =
            DiGraph::with_capacity(registry.len(), registry.len());
        let mut durations = Vec::with_capacity(registry.len());

        for (idx, activity) in registry.all().iter().enumerate() {
            graph.add_node(idx);
            durations.push(activity.duration);
        }

        for (pred, succ) in registry.index_edges() {
            graph.add_edge(NodeIndex::new(pred), NodeIndex::new(succ), ());
        }

        Self { graph, durations }
    }

    pub(crate) fn len(&self) -> usize {
        self.graph.node_count()
    }

    pub fn predecessors(&self, idx: usize) -> impl Iterator<Item = usize> + '_ {
        self.graph
            .neighbors_directed(NodeIndex::new(idx), Direction::Incoming)
            .map(|node| self.graph[node])
    }

    /// Successor lists for every activity, built in one pass over the edges.
    pub fn reverse_adjacency(&self) -> Vec<Vec<usize>> {
        let mut successors = vec![Vec::new(); self.len()];
        for edge in self.graph.raw_edges() {
            successors[edge.source().index()].push(edge.target().index());
        }
        successors
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dag_mirrors_registry_edges() {
        let mut registry = ActivityRegistry::new();
        registry.add_activity("A", 2, Vec::<String>::new()).unwrap();
        registry.add_activity("B", 5, Vec::<String>::new()).unwrap();
        registry.add_activity("C", 3, ["A", "B"]).unwrap();

        let dag = ScheduleDag::build(&registry);
        assert_eq!(dag.graph.node_count(), 3);
        assert_eq!(dag.graph.edge_count(), 2);
        assert_eq!(dag.durations, vec![2, 5, 3]);

        let mut preds: Vec<usize> = dag.predecessors(2).collect();
        preds.sort_unstable();
        assert_eq!(preds, vec![0, 1]);
        assert_eq!(dag.reverse_adjacency(), vec![vec![2], vec![2], vec![]]);
    }
}
