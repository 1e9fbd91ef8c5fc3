//! LL(1) verification (§4.6): pairwise predict-set disjointness per
//! non-terminal, plus the useless/left-recursive and unreachability
//! sweeps.

use std::collections::{BTreeSet, HashSet};

use crate::{
  error::{Diagnostic, DiagnosticKind, DiagnosticsReport},
  types::{line::Line, symbol::SymbolWrapper},
};

use super::{first_follow::FirstFollowSets, graph::GrammarGraph};

/// Runs the LL(1) conflict check, the useless/left-recursive sweep, and
/// the reachability sweep, surfacing every violation it finds. `anchor`
/// supplies the [`Line`] to attach to diagnostics that have no single
/// natural rule to point at (reachability is a property of the whole
/// grammar).
pub fn check_ll1(
  graph: &GrammarGraph,
  sets: &FirstFollowSets,
  start: &SymbolWrapper,
  line_for_rule: impl Fn(usize) -> Option<Line>,
  anchor: Line,
) -> DiagnosticsReport {
  let mut report = DiagnosticsReport::new();

  // Predict sets are computed before conflict detection, in iteration
  // order, so error messages are deterministic (§4.6 "Tie-breaks").
  for nt in graph.surface_nonterminals() {
    let productions = graph.productions_of(nt);
    let predict_sets: Vec<BTreeSet<SymbolWrapper>> =
      productions.iter().map(|p| sets.predict_set(nt, &p.rhs)).collect();

    let union: BTreeSet<SymbolWrapper> = predict_sets.iter().flatten().cloned().collect();
    if union.is_empty() && !productions.is_empty() {
      report.push(Diagnostic::new(anchor.clone(), DiagnosticKind::UselessOrLeftRecursive { nonterminal: nt.name.clone() }));
      continue;
    }

    for i in 0..predict_sets.len() {
      for j in (i + 1)..predict_sets.len() {
        let overlap: Vec<String> = predict_sets[i].intersection(&predict_sets[j]).map(|s| s.name.clone()).collect();
        if overlap.is_empty() {
          continue;
        }

        let rule_line = productions[i]
          .rule_index
          .and_then(&line_for_rule)
          .or_else(|| productions[j].rule_index.and_then(&line_for_rule))
          .unwrap_or_else(|| anchor.clone());

        let competing_rules: Vec<usize> =
          [productions[i].rule_index, productions[j].rule_index].into_iter().flatten().collect();

        report.push(Diagnostic::new(
          rule_line,
          DiagnosticKind::Ll1Conflict {
            nonterminal: nt.name.clone(),
            overlapping_terminals: overlap,
            competing_rules,
          },
        ));
      }
    }
  }

  report.extend(check_reachability(graph, start, anchor));
  report
}

fn check_reachability(graph: &GrammarGraph, start: &SymbolWrapper, anchor: Line) -> DiagnosticsReport {
  let mut reachable = HashSet::new();
  let mut stack = vec![start.clone()];

  while let Some(nt) = stack.pop() {
    if !reachable.insert(nt.clone()) {
      continue;
    }
    for production in graph.productions_of(&nt) {
      for sym in &production.rhs {
        if sym.payload.is_nonterminal() && !reachable.contains(sym) {
          stack.push(sym.clone());
        }
      }
    }
  }

  let mut report = DiagnosticsReport::new();
  for nt in graph.surface_nonterminals() {
    if !reachable.contains(nt) {
      report.push(Diagnostic::new(anchor.clone(), DiagnosticKind::UnreachableCase { nonterminal: nt.name.clone() }));
    }
  }
  report
}
