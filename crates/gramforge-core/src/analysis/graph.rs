//! Grammar graph construction (§4.6, §9).
//!
//! A repeating rule `A **= α + s` is expanded here into its normal form
//! `A → ε | α A'` with a synthetic continuation `A' → ε | s α A'` (or
//! `A' → ε | α A'` when no separator is given) purely so FIRST/FOLLOW
//! and the LL(1) check see an equivalent non-repeating grammar. The
//! synthetic continuation never escapes this module: the AST model
//! builder still works from the original [`SyntacticRule`]s.

use std::collections::BTreeMap;

use crate::{
  syntactic::SyntacticSpec,
  types::{symbol::Symbol, symbol::SymbolWrapper, syntactic_rule::SyntacticRule},
};

/// One alternative of a non-terminal: its fully-wrapped RHS symbol
/// sequence (empty for an epsilon alternative), plus the originating
/// rule index when it corresponds to a user-written production.
#[derive(Debug, Clone)]
pub struct Production {
  pub rhs: Vec<SymbolWrapper>,
  pub rule_index: Option<usize>,
}

impl Production {
  pub fn is_epsilon(&self) -> bool {
    self.rhs.is_empty()
  }
}

#[derive(Debug, Default)]
pub struct GrammarGraph {
  productions: BTreeMap<SymbolWrapper, Vec<Production>>,
}

impl GrammarGraph {
  pub fn nonterminals(&self) -> impl Iterator<Item = &SymbolWrapper> {
    self.productions.keys()
  }

  /// Nonterminals that correspond to a surface (user-written) LHS, i.e.
  /// excluding synthetic repetition continuations.
  pub fn surface_nonterminals(&self) -> impl Iterator<Item = &SymbolWrapper> {
    self.productions.keys().filter(|k| !is_continuation_name(&k.name))
  }

  pub fn productions_of(&self, nonterm: &SymbolWrapper) -> &[Production] {
    self.productions.get(nonterm).map(Vec::as_slice).unwrap_or(&[])
  }

  fn entry(&mut self, key: SymbolWrapper) -> &mut Vec<Production> {
    self.productions.entry(key).or_default()
  }
}

fn continuation_name(lhs_name: &str) -> String {
  format!("{lhs_name}__cont")
}

fn is_continuation_name(name: &str) -> bool {
  name.ends_with("__cont")
}

fn wrap_symbol(sym: &Symbol) -> SymbolWrapper {
  SymbolWrapper::new(sym.clone())
}

fn lhs_key(name: &str) -> SymbolWrapper {
  SymbolWrapper::new(Symbol::LhsNonTerminal { name: name.to_string(), alt_name: None })
}

pub fn build_graph(spec: &SyntacticSpec) -> GrammarGraph {
  let mut graph = GrammarGraph::default();

  for (index, rule) in spec.rules().iter().enumerate() {
    let key = lhs_key(rule.lhs_name());
    // Ensure every declared LHS appears as a graph key even before any
    // alternative is pushed, so unreachability/uselessness checks see it.
    graph.entry(key.clone());

    if !rule.repeating {
      let rhs = rule.rhs.iter().map(wrap_symbol).collect();
      graph.entry(key).push(Production { rhs, rule_index: Some(index) });
      continue;
    }

    expand_repeating(&mut graph, rule, index);
  }

  graph
}

fn expand_repeating(graph: &mut GrammarGraph, rule: &SyntacticRule, index: usize) {
  let key = lhs_key(rule.lhs_name());
  let cont_name = continuation_name(rule.lhs_name());
  let cont_key = lhs_key(&cont_name);

  let body: Vec<SymbolWrapper> = rule.rhs.iter().map(wrap_symbol).collect();

  graph.entry(key.clone()).push(Production { rhs: vec![], rule_index: None });
  let mut first_alt = body.clone();
  first_alt.push(cont_key.clone());
  graph.entry(key).push(Production { rhs: first_alt, rule_index: Some(index) });

  graph.entry(cont_key.clone()).push(Production { rhs: vec![], rule_index: None });
  let mut cont_alt = Vec::new();
  if let Some(sep) = &rule.separator {
    cont_alt.push(wrap_symbol(sep));
  }
  cont_alt.extend(body);
  cont_alt.push(cont_key.clone());
  graph.entry(cont_key).push(Production { rhs: cont_alt, rule_index: Some(index) });
}
