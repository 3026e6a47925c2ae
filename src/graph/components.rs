// src/graph/components.rs
//! Weakly connected components.

use super::directed::{DirectedGraph, NodeId};
use std::collections::VecDeque;

/// Partition of a graph's nodes into weakly connected components.
///
/// Components are ordered by their lowest insertion id; members are listed in
/// breadth-first discovery order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Components {
    members: Vec<Vec<NodeId>>,
    assignment: Vec<usize>,
}

impl Components {
    #[must_use]
    pub fn count(&self) -> usize {
        self.members.len()
    }

    /// Member ids of every component.
    #[must_use]
    pub fn members(&self) -> &[Vec<NodeId>] {
        &self.members
    }

    /// Index of the component holding `node`.
    #[must_use]
    pub fn component_of(&self, node: NodeId) -> Option<usize> {
        self.assignment.get(node).copied()
    }

    #[must_use]
    pub fn largest_size(&self) -> usize {
        self.members.iter().map(Vec::len).max().unwrap_or(0)
    }

    /// Components as sets of node labels.
    #[must_use]
    pub fn labelled<'g>(&self, graph: &'g DirectedGraph) -> Vec<Vec<&'g str>> {
        self.members
            .iter()
            .map(|c| c.iter().filter_map(|&n| graph.label(n)).collect())
            .collect()
    }
}

/// Computes weak components by breadth-first search over the undirected skeleton.
#[must_use]
pub fn analyze(graph: &DirectedGraph) -> Components {
    const UNASSIGNED: usize = usize::MAX;

    let mut assignment = vec![UNASSIGNED; graph.node_count()];
    let mut members = Vec::new();
    let mut queue = VecDeque::new();

    for start in graph.nodes() {
        if assignment[start] != UNASSIGNED {
            continue;
        }
        let component = members.len();
        let mut reached = Vec::new();
        assignment[start] = component;
        queue.push_back(start);

        while let Some(node) = queue.pop_front() {
            reached.push(node);
            let both_ways = graph
                .out_neighbors(node)
                .iter()
                .chain(graph.in_neighbors(node));
            for &next in both_ways {
                if assignment[next] == UNASSIGNED {
                    assignment[next] = component;
                    queue.push_back(next);
                }
            }
        }
        members.push(reached);
    }

    Components {
        members,
        assignment,
    }
}
