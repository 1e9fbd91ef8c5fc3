//! Syntactic Validator (§4.5): enforces structural rules on the grammar
//! independently of LL(1) analysis, so shape errors surface even when
//! the grammar is too broken to analyze.

use std::collections::{HashMap, HashSet};
use std::sync::OnceLock;

use regex::Regex;

use crate::{
  error::{Diagnostic, DiagnosticKind, DiagnosticsReport},
  types::syntactic_rule::SyntacticRule,
};

fn lhs_name_regex() -> &'static Regex {
  static RE: OnceLock<Regex> = OnceLock::new();
  RE.get_or_init(|| Regex::new(r"^[a-z][a-zA-Z0-9_]+$").unwrap())
}

fn alt_name_regex() -> &'static Regex {
  static RE: OnceLock<Regex> = OnceLock::new();
  RE.get_or_init(|| Regex::new(r"^[A-Z][a-zA-Z0-9_]+$").unwrap())
}

/// The validated, immutable syntactic specification.
///
/// `start` is the first LHS encountered in source order (invariant d).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SyntacticSpec {
  rules: Vec<SyntacticRule>,
  start: Option<String>,
}

impl SyntacticSpec {
  pub fn rules(&self) -> &[SyntacticRule] {
    &self.rules
  }

  pub fn start_symbol(&self) -> Option<&str> {
    self.start.as_deref()
  }

  /// All rules sharing one declared LHS name, in source order.
  pub fn rules_for(&self, lhs_name: &str) -> Vec<&SyntacticRule> {
    self.rules.iter().filter(|r| r.lhs_name() == lhs_name).collect()
  }

  pub fn lhs_names(&self) -> HashSet<&str> {
    self.rules.iter().map(|r| r.lhs_name()).collect()
  }
}

pub fn validate_syntactic_rules(rules: Vec<SyntacticRule>) -> (SyntacticSpec, DiagnosticsReport) {
  let mut report = DiagnosticsReport::new();
  let start = rules.first().map(|r| r.lhs_name().to_string());

  let lhs_names: HashSet<&str> = rules.iter().map(|r| r.lhs_name()).collect();

  let mut resolved_seen: HashMap<String, usize> = HashMap::new();
  let mut accepted = Vec::new();

  for rule in rules {
    let mut ok = true;

    if !lhs_name_regex().is_match(rule.lhs_name()) {
      report.push(Diagnostic::new(
        rule.line.clone(),
        DiagnosticKind::InvalidLhsName { name: rule.lhs_name().to_string() },
      ));
      ok = false;
    }

    if let Some(alt) = rule.lhs_alt_name() {
      if !alt_name_regex().is_match(alt) {
        report.push(Diagnostic::new(
          rule.line.clone(),
          DiagnosticKind::InvalidLhsAltName { name: alt.to_string() },
        ));
        ok = false;
      }
    }

    let resolved = rule.resolved_lhs_name();
    let count = resolved_seen.entry(resolved.clone()).or_insert(0);
    *count += 1;
    if *count > 1 {
      report.push(Diagnostic::new(rule.line.clone(), DiagnosticKind::DuplicateLhs { name: resolved }));
      ok = false;
    }

    for sym in &rule.rhs {
      if sym.is_nonterminal() && !lhs_names.contains(sym.name()) {
        report.push(Diagnostic::new(
          rule.line.clone(),
          DiagnosticKind::UndefinedNonterminal { name: sym.name().to_string() },
        ));
        ok = false;
      }
    }

    if ok {
      accepted.push(rule);
    }
  }

  (SyntacticSpec { rules: accepted, start }, report)
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::syntactic::parser::parse_syntactic_section;
  use std::{path::PathBuf, rc::Rc};

  fn line(n: usize, s: &str) -> crate::types::line::Line {
    crate::types::line::Line::new(Rc::new(PathBuf::from("spec.g")), n, s, false)
  }

  #[test]
  fn rejects_undefined_nonterminal() {
    let lines = vec![line(1, "<s> ::= <missing>")];
    let (parsed, _) = parse_syntactic_section(&lines);
    let (spec, report) = validate_syntactic_rules(parsed);
    assert!(spec.rules().is_empty());
    assert!(matches!(report.iter().next().unwrap().kind, DiagnosticKind::UndefinedNonterminal { .. }));
  }

  #[test]
  fn first_lhs_is_start_symbol() {
    let lines = vec![line(1, "<s> ::= A <t>"), line(2, "<t> ::= B")];
    let (parsed, _) = parse_syntactic_section(&lines);
    let (spec, report) = validate_syntactic_rules(parsed);
    assert!(report.is_empty());
    assert_eq!(spec.start_symbol(), Some("s"));
  }

  #[test]
  fn duplicate_resolved_lhs_is_rejected() {
    let lines = vec![line(1, "<s>:Foo ::= A"), line(2, "<s>:Foo ::= B")];
    let (parsed, _) = parse_syntactic_section(&lines);
    let (spec, report) = validate_syntactic_rules(parsed);
    assert_eq!(spec.rules().len(), 0);
    assert!(report.iter().any(|d| matches!(d.kind, DiagnosticKind::DuplicateLhs { .. })));
  }
}
