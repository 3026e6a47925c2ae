// src/graph/mod.rs
pub mod builder;
pub mod components;
pub mod directed;
pub mod pagerank;
pub mod ranker;

pub use builder::{BuildStats, GraphBuilder};
pub use components::Components;
pub use directed::{DirectedGraph, NodeId};
pub use pagerank::{PageRankConfig, PageRankEngine, PageRankResult, ScoreVector};
pub use ranker::RankedNode;

use crate::error::Result;
use tracing::info;

/// Everything the report needs, computed from one immutable graph.
#[derive(Debug)]
pub struct Analysis {
    pub graph: DirectedGraph,
    pub components: Components,
    pub pagerank: PageRankResult,
    pub config: PageRankConfig,
}

impl Analysis {
    /// Nodes by descending score, ties in insertion order.
    #[must_use]
    pub fn ranking(&self) -> Vec<RankedNode<'_>> {
        ranker::rank(&self.graph, &self.pagerank.scores)
    }
}

/// Orchestrates component analysis and ranking over a built graph.
pub struct GraphEngine;

impl GraphEngine {
    /// Runs the component and `PageRank` stages over `graph`.
    ///
    /// # Errors
    /// Returns error if `config` fails validation.
    pub fn analyze(graph: DirectedGraph, config: PageRankConfig) -> Result<Analysis> {
        let pagerank = pagerank::compute(&graph, config)?;
        let components = components::analyze(&graph);

        info!(
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            components = components.count(),
            iterations = pagerank.iterations,
            converged = pagerank.converged,
            "analysis complete"
        );

        Ok(Analysis {
            graph,
            components,
            pagerank,
            config,
        })
    }

    /// Parses adjacency-list text and analyzes it.
    ///
    /// # Errors
    /// Returns error if `config` fails validation.
    pub fn analyze_str(contents: &str, config: PageRankConfig) -> Result<Analysis> {
        Self::analyze(builder::build_from_str(contents), config)
    }
}
