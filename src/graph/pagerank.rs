// src/graph/pagerank.rs
//! `PageRank` by power iteration.
//!
//! `jump` is the random-jump probability: with probability `jump` the surfer
//! teleports to a uniformly random node, otherwise it follows an out-edge
//! chosen uniformly (parallel edges counted separately). Mass sitting on
//! dangling nodes is spread uniformly over all nodes.
//!
//! ```text
//! new(v) = jump/N + (1 - jump) * (Σ_{u→v} old(u)/out(u) + dangling/N)
//! ```

use super::directed::{DirectedGraph, NodeId};
use crate::error::{Result, SeqRankError};
use rayon::prelude::*;
use serde::Deserialize;
use tracing::{debug, trace, warn};

pub const DEFAULT_JUMP: f64 = 0.15;
pub const DEFAULT_TOLERANCE: f64 = 1e-10;
pub const DEFAULT_MAX_ITERATIONS: usize = 1000;

/// Tuning knobs for the power iteration.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PageRankConfig {
    pub jump: f64,
    /// Stop once the L1 distance between successive vectors drops below this.
    pub tolerance: f64,
    pub max_iterations: usize,
}

impl Default for PageRankConfig {
    fn default() -> Self {
        Self {
            jump: DEFAULT_JUMP,
            tolerance: DEFAULT_TOLERANCE,
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }
}

impl PageRankConfig {
    /// # Errors
    /// Returns error if `jump` is outside `[0, 1]` or `tolerance` is not positive.
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.jump) {
            return Err(SeqRankError::InvalidJump(self.jump));
        }
        if !self.tolerance.is_finite() || self.tolerance <= 0.0 {
            return Err(SeqRankError::InvalidTolerance(self.tolerance));
        }
        Ok(())
    }
}

/// One score per node, indexed by [`NodeId`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScoreVector {
    values: Vec<f64>,
}

impl ScoreVector {
    #[allow(clippy::cast_precision_loss)]
    fn uniform(n: usize) -> Self {
        Self {
            values: vec![1.0 / n as f64; n],
        }
    }

    #[must_use]
    pub fn score(&self, node: NodeId) -> Option<f64> {
        self.values.get(node).copied()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[f64] {
        &self.values
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    #[must_use]
    pub fn total(&self) -> f64 {
        self.values.iter().sum()
    }

    fn l1_distance(&self, other: &[f64]) -> f64 {
        self.values
            .iter()
            .zip(other)
            .map(|(a, b)| (a - b).abs())
            .sum()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineState {
    Initialized,
    Iterating,
    Converged,
    /// Stopped at `max_iterations` without meeting the tolerance.
    CapReached,
}

/// Final scores plus how the iteration ended.
#[derive(Debug, Clone)]
pub struct PageRankResult {
    pub scores: ScoreVector,
    pub iterations: usize,
    /// L1 distance covered by the last iteration.
    pub delta: f64,
    pub converged: bool,
}

/// Power-iteration driver over a frozen graph.
pub struct PageRankEngine<'g> {
    graph: &'g DirectedGraph,
    config: PageRankConfig,
    scores: ScoreVector,
    state: EngineState,
    iterations: usize,
    delta: f64,
}

impl<'g> PageRankEngine<'g> {
    /// Prepares the engine with a uniform starting vector.
    ///
    /// # Errors
    /// Returns error if `config` fails validation.
    pub fn new(graph: &'g DirectedGraph, config: PageRankConfig) -> Result<Self> {
        config.validate()?;
        let state = if graph.is_empty() {
            EngineState::Converged
        } else {
            EngineState::Initialized
        };
        Ok(Self {
            graph,
            config,
            scores: ScoreVector::uniform(graph.node_count()),
            state,
            iterations: 0,
            delta: 0.0,
        })
    }

    #[must_use]
    pub fn state(&self) -> EngineState {
        self.state
    }

    #[must_use]
    pub fn scores(&self) -> &ScoreVector {
        &self.scores
    }

    /// Runs one iteration unless already terminated. Returns the current state.
    pub fn step(&mut self) -> EngineState {
        if matches!(self.state, EngineState::Converged | EngineState::CapReached) {
            return self.state;
        }
        if self.iterations >= self.config.max_iterations {
            self.state = EngineState::CapReached;
            return self.state;
        }

        let next = self.iterate_once();
        self.delta = self.scores.l1_distance(&next);
        self.scores = ScoreVector { values: next };
        self.iterations += 1;
        trace!(iteration = self.iterations, delta = self.delta, "pagerank step");

        self.state = if self.delta < self.config.tolerance {
            EngineState::Converged
        } else if self.iterations >= self.config.max_iterations {
            EngineState::CapReached
        } else {
            EngineState::Iterating
        };
        self.state
    }

    /// Iterates to termination and freezes the scores.
    #[must_use]
    pub fn run(mut self) -> PageRankResult {
        while matches!(self.step(), EngineState::Initialized | EngineState::Iterating) {}

        let converged = self.state == EngineState::Converged;
        if converged {
            debug!(iterations = self.iterations, delta = self.delta, "pagerank converged");
        } else {
            warn!(
                iterations = self.iterations,
                delta = self.delta,
                tolerance = self.config.tolerance,
                "pagerank stopped at iteration cap without converging"
            );
        }

        PageRankResult {
            scores: self.scores,
            iterations: self.iterations,
            delta: self.delta,
            converged,
        }
    }

    // Each node pulls from its in-neighbours and reads only the previous vector,
    // so the per-node map is safe to run in parallel. Reductions stay sequential
    // to keep results bit-identical regardless of thread count.
    #[allow(clippy::cast_precision_loss)]
    fn iterate_once(&self) -> Vec<f64> {
        let graph = self.graph;
        let old = self.scores.as_slice();
        let n = old.len() as f64;
        let follow = 1.0 - self.config.jump;

        let dangling: f64 = graph
            .nodes()
            .filter(|&u| graph.out_degree(u) == 0)
            .map(|u| old[u])
            .sum();
        let base = self.config.jump / n + follow * dangling / n;

        (0..old.len())
            .into_par_iter()
            .map(|v| {
                let incoming: f64 = graph
                    .in_neighbors(v)
                    .iter()
                    .map(|&u| old[u] / graph.out_degree(u) as f64)
                    .sum();
                base + follow * incoming
            })
            .collect()
    }
}

/// Computes `PageRank` scores for every node in `graph`.
///
/// # Errors
/// Returns error if `config` fails validation.
pub fn compute(graph: &DirectedGraph, config: PageRankConfig) -> Result<PageRankResult> {
    Ok(PageRankEngine::new(graph, config)?.run())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn engine_walks_through_states() {
        let mut g = DirectedGraph::new();
        g.add_edge("a", "b");
        g.add_edge("b", "a");
        let mut engine = PageRankEngine::new(&g, PageRankConfig::default()).unwrap();
        assert_eq!(engine.state(), EngineState::Initialized);
        assert_eq!(engine.scores().as_slice(), &[0.5, 0.5]);
        // Symmetric 2-cycle is already at its fixed point.
        assert_eq!(engine.step(), EngineState::Converged);
        assert_eq!(engine.step(), EngineState::Converged);
    }

    #[test]
    fn zero_cap_returns_initial_vector() {
        let mut g = DirectedGraph::new();
        g.add_edge("a", "b");
        let config = PageRankConfig {
            max_iterations: 0,
            ..PageRankConfig::default()
        };
        let result = compute(&g, config).unwrap();
        assert_eq!(result.iterations, 0);
        assert!(!result.converged);
        assert_eq!(result.scores.as_slice(), &[0.5, 0.5]);
    }

    #[test]
    fn validate_rejects_out_of_range() {
        let bad_jump = PageRankConfig {
            jump: 1.5,
            ..PageRankConfig::default()
        };
        assert!(matches!(bad_jump.validate(), Err(SeqRankError::InvalidJump(_))));

        let bad_tol = PageRankConfig {
            tolerance: 0.0,
            ..PageRankConfig::default()
        };
        assert!(matches!(
            bad_tol.validate(),
            Err(SeqRankError::InvalidTolerance(_))
        ));

        let nan_jump = PageRankConfig {
            jump: f64::NAN,
            ..PageRankConfig::default()
        };
        assert!(nan_jump.validate().is_err());
    }
}
