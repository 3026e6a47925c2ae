// src/report.rs
//! Plain-text analysis report.

use crate::graph::Analysis;
use colored::Colorize;
use std::io::{self, Write};

/// Writes the summary header followed by one `score<TAB>node` line per node.
///
/// # Errors
/// Returns error if the writer fails.
pub fn write_report<W: Write>(out: &mut W, analysis: &Analysis) -> io::Result<()> {
    writeln!(out, "Number of components: {}", analysis.components.count())?;
    writeln!(out, "Number of edges: {}", analysis.graph.edge_count())?;
    writeln!(out, "Number of nodes: {}", analysis.graph.node_count())?;
    writeln!(out, "Random jump factor: {}", analysis.config.jump)?;

    writeln!(out, "\nPageRank of nodes, in descending order:")?;
    for entry in analysis.ranking() {
        writeln!(out, "{}\t{}", entry.score, entry.label)?;
    }
    out.flush()
}

/// Renders the report into a string.
///
/// # Errors
/// Returns error if formatting into the buffer fails.
pub fn render(analysis: &Analysis) -> io::Result<String> {
    let mut buf = Vec::new();
    write_report(&mut buf, analysis)?;
    String::from_utf8(buf).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
}

/// One-line terminal summary for verbose runs.
#[must_use]
pub fn format_summary(analysis: &Analysis) -> String {
    let pr = &analysis.pagerank;
    let status = if pr.converged {
        "converged".green().bold()
    } else {
        "hit iteration cap".yellow().bold()
    };
    format!(
        "{} nodes, {} edges, {} components (largest {}) | {} after {} iterations (delta {:.2e})",
        analysis.graph.node_count(),
        analysis.graph.edge_count(),
        analysis.components.count(),
        analysis.components.largest_size(),
        status,
        pr.iterations,
        pr.delta
    )
}
