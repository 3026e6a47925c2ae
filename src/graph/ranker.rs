// src/graph/ranker.rs
use super::directed::{DirectedGraph, NodeId};
use super::pagerank::ScoreVector;

/// One line of the final ranking.
#[derive(Debug, Clone, PartialEq)]
pub struct RankedNode<'g> {
    pub label: &'g str,
    pub score: f64,
    /// First-seen insertion sequence number; used only to break ties.
    pub sequence: NodeId,
}

/// Orders nodes by descending score, ties by ascending insertion sequence.
///
/// `total_cmp` gives a total order over `f64`, so the result is reproducible
/// even for equal or non-finite scores.
#[must_use]
pub fn rank<'g>(graph: &'g DirectedGraph, scores: &ScoreVector) -> Vec<RankedNode<'g>> {
    let mut ranked: Vec<RankedNode<'g>> = graph
        .labels()
        .zip(scores.as_slice())
        .enumerate()
        .map(|(sequence, (label, &score))| RankedNode {
            label,
            score,
            sequence,
        })
        .collect();

    ranked.sort_by(|a, b| {
        b.score
            .total_cmp(&a.score)
            .then_with(|| a.sequence.cmp(&b.sequence))
    });
    ranked
}
