// src/graph/builder.rs
//! Graph construction from adjacency-list text.
//!
//! Each line is `source target1 target2 ...`. Tokens may be separated by tabs
//! or spaces, and output from distributed jobs may wrap the target list in
//! `[ ]` with commas in between; brackets are stripped and commas become
//! whitespace before tokenizing.

use super::directed::DirectedGraph;
use tracing::debug;

/// Counters collected while parsing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BuildStats {
    pub lines_read: usize,
    pub lines_skipped: usize,
}

/// Incremental adjacency-list parser. Feed lines, then call [`GraphBuilder::finish`].
#[derive(Debug, Default)]
pub struct GraphBuilder {
    graph: DirectedGraph,
    stats: BuildStats,
}

impl GraphBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a complete block of text (one file's worth).
    pub fn feed_str(&mut self, contents: &str) {
        for line in contents.split('\n') {
            self.feed_line(line);
        }
    }

    /// Parses one adjacency record. Blank lines are counted and skipped.
    pub fn feed_line(&mut self, line: &str) {
        self.stats.lines_read += 1;

        let cleaned = clean_line(line);
        let mut tokens = cleaned.split_whitespace();
        let Some(source) = tokens.next() else {
            self.stats.lines_skipped += 1;
            return;
        };

        self.graph.add_node(source);
        for target in tokens.filter(|t| !t.is_empty()) {
            self.graph.add_edge(source, target);
        }
    }

    #[must_use]
    pub fn stats(&self) -> BuildStats {
        self.stats
    }

    /// Freezes the parsed graph.
    #[must_use]
    pub fn finish(self) -> (DirectedGraph, BuildStats) {
        debug!(
            nodes = self.graph.node_count(),
            edges = self.graph.edge_count(),
            lines = self.stats.lines_read,
            skipped = self.stats.lines_skipped,
            "graph built"
        );
        (self.graph, self.stats)
    }
}

/// Builds a graph from an iterator of lines.
#[must_use]
pub fn build_from_lines<'a, I>(lines: I) -> DirectedGraph
where
    I: IntoIterator<Item = &'a str>,
{
    let mut builder = GraphBuilder::new();
    for line in lines {
        builder.feed_line(line);
    }
    builder.finish().0
}

/// Builds a graph from a block of text.
#[must_use]
pub fn build_from_str(contents: &str) -> DirectedGraph {
    build_from_lines(contents.split('\n'))
}

fn clean_line(line: &str) -> String {
    line.chars()
        .filter(|c| !matches!(c, '[' | ']'))
        .map(|c| if c == ',' { ' ' } else { c })
        .collect()
}
