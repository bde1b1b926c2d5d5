use kruskal_core::{Graph, NodeId};

/// Four cities wired into a fresh graph without any edges.
pub struct Cities {
    pub graph: Graph<&'static str>,
    pub boston: NodeId,
    pub sf: NodeId,
    pub chicago: NodeId,
    pub new_york: NodeId,
}

impl Cities {
    #[must_use]
    pub fn new() -> Self {
        let mut graph = Graph::new();
        let boston = graph.add_node("Boston");
        let sf = graph.add_node("San Francisco");
        let chicago = graph.add_node("Chicago");
        let new_york = graph.add_node("New York");
        Self {
            graph,
            boston,
            sf,
            chicago,
            new_york,
        }
    }

    /// Drains a fresh Kruskal iterator and returns the emitted weights.
    pub fn forest_weights(&self) -> Vec<i64> {
        self.graph
            .kruskal_iter()
            .map(|edge| edge.map(|edge| edge.weight()))
            .collect::<Result<_, _>>()
            .expect("graph is not modified while draining")
    }
}
