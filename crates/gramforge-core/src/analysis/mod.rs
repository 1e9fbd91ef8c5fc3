//! Grammar + LL(1) Analyzer (§4.6): builds the wrapped grammar graph,
//! computes FIRST/FOLLOW, and verifies the grammar is LL(1).

mod first_follow;
mod graph;
mod ll1;

pub use first_follow::{FirstFollowSets, TerminalSet};
pub use graph::{GrammarGraph, Production};

use crate::{
  error::DiagnosticsReport,
  syntactic::SyntacticSpec,
  types::{line::Line, symbol::{Symbol, SymbolWrapper}},
};

pub struct GrammarAnalysis {
  pub graph: GrammarGraph,
  pub sets: FirstFollowSets,
  pub start: SymbolWrapper,
}

/// Builds the grammar graph and its FIRST/FOLLOW sets. This half of the
/// analyzer always runs: even a `--LL1=false` invocation needs the sets
/// (and the graph) for the AST model builder's repetition handling.
pub fn build(spec: &SyntacticSpec) -> GrammarAnalysis {
  let graph = graph::build_graph(spec);

  let start_name = spec.start_symbol().unwrap_or_default().to_string();
  let start = SymbolWrapper::new(Symbol::LhsNonTerminal { name: start_name, alt_name: None });

  let sets = first_follow::compute_first_follow(&graph, &start);

  GrammarAnalysis { graph, sets, start }
}

/// Runs the LL(1) conflict and reachability sweeps over an already-built
/// analysis. Skipped entirely when `--LL1=false`.
pub fn check_ll1(analysis: &GrammarAnalysis, spec: &SyntacticSpec, root_anchor: Line) -> DiagnosticsReport {
  let line_for_rule = |index: usize| spec.rules().get(index).map(|r| r.line.clone());
  ll1::check_ll1(&analysis.graph, &analysis.sets, &analysis.start, line_for_rule, root_anchor)
}
