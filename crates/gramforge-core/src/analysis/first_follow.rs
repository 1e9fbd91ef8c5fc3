//! FIRST / FOLLOW computation by fixed-point iteration (§4.6).

use std::collections::{BTreeMap, BTreeSet};

use crate::types::symbol::SymbolWrapper;

use super::graph::GrammarGraph;

pub type TerminalSet = BTreeSet<SymbolWrapper>;

#[derive(Debug, Default)]
pub struct FirstFollowSets {
  first: BTreeMap<SymbolWrapper, TerminalSet>,
  follow: BTreeMap<SymbolWrapper, TerminalSet>,
}

impl FirstFollowSets {
  pub fn first(&self, nonterm: &SymbolWrapper) -> TerminalSet {
    self.first.get(nonterm).cloned().unwrap_or_default()
  }

  pub fn follow(&self, nonterm: &SymbolWrapper) -> TerminalSet {
    self.follow.get(nonterm).cloned().unwrap_or_default()
  }

  /// FIRST of a symbol sequence: the standard concatenation rule,
  /// including ε iff every symbol in the sequence is nullable.
  pub fn first_of_sequence(&self, seq: &[SymbolWrapper]) -> TerminalSet {
    let mut out = TerminalSet::new();
    for sym in seq {
      let sym_first = if sym.payload.is_terminal() {
        TerminalSet::from([sym.clone()])
      } else {
        self.first(sym)
      };

      let nullable = sym_first.iter().any(SymbolWrapper::is_epsilon);
      out.extend(sym_first.iter().filter(|s| !s.is_epsilon()).cloned());

      if !nullable {
        return out;
      }
    }
    out.insert(SymbolWrapper::epsilon());
    out
  }

  /// The predict set of one production: FIRST(RHS) \ {ε}, plus
  /// FOLLOW(lhs) when ε ∈ FIRST(RHS).
  pub fn predict_set(&self, lhs: &SymbolWrapper, rhs: &[SymbolWrapper]) -> TerminalSet {
    let first = self.first_of_sequence(rhs);
    let nullable = first.iter().any(SymbolWrapper::is_epsilon);
    let mut out: TerminalSet = first.into_iter().filter(|s| !s.is_epsilon()).collect();
    if nullable {
      out.extend(self.follow(lhs));
    }
    out
  }
}

pub fn compute_first_follow(graph: &GrammarGraph, start: &SymbolWrapper) -> FirstFollowSets {
  let mut sets = FirstFollowSets::default();

  for nt in graph.nonterminals() {
    sets.first.entry(nt.clone()).or_default();
    sets.follow.entry(nt.clone()).or_default();
  }

  // FIRST: fixed-point iteration until no set grows.
  loop {
    let mut changed = false;

    for nt in graph.nonterminals() {
      for production in graph.productions_of(nt) {
        let addition = if production.is_epsilon() {
          TerminalSet::from([SymbolWrapper::epsilon()])
        } else {
          sets.first_of_sequence(&production.rhs)
        };

        let entry = sets.first.entry(nt.clone()).or_default();
        let before = entry.len();
        entry.extend(addition);
        if entry.len() != before {
          changed = true;
        }
      }
    }

    if !changed {
      break;
    }
  }

  sets.follow.entry(start.clone()).or_default().insert(SymbolWrapper::eof());

  // FOLLOW: fixed-point iteration over every B -> alpha A beta.
  loop {
    let mut changed = false;

    for lhs in graph.nonterminals() {
      for production in graph.productions_of(lhs) {
        let rhs = &production.rhs;
        for (i, sym) in rhs.iter().enumerate() {
          if sym.payload.is_terminal() {
            continue;
          }

          let beta = &rhs[i + 1..];
          let first_beta = sets.first_of_sequence(beta);
          let nullable_beta = beta.is_empty() || first_beta.iter().any(SymbolWrapper::is_epsilon);

          let mut addition: TerminalSet = first_beta.into_iter().filter(|s| !s.is_epsilon()).collect();
          if nullable_beta {
            addition.extend(sets.follow(lhs));
          }

          let entry = sets.follow.entry(sym.clone()).or_default();
          let before = entry.len();
          entry.extend(addition);
          if entry.len() != before {
            changed = true;
          }
        }
      }
    }

    if !changed {
      break;
    }
  }

  sets
}
