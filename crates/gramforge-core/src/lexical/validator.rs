//! Lexical Validator (§4.3): checks name format, pattern shape, and
//! cross-rule uniqueness, surfacing every diagnostic rather than
//! stopping at the first one.

use std::collections::HashSet;
use std::sync::OnceLock;

use regex::Regex;

use crate::{
  error::{Diagnostic, DiagnosticKind, DiagnosticsReport},
  types::lexical_rule::LexicalRule,
};

use super::parser::LexicalParseResult;

fn name_regex() -> &'static Regex {
  static RE: OnceLock<Regex> = OnceLock::new();
  RE.get_or_init(|| Regex::new(r"^[A-Z_][A-Z0-9_]*$").unwrap())
}

/// The validated, immutable lexical specification: the accepted rules
/// (first occurrence of each distinct name/pattern), in source order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LexicalSpec {
  rules: Vec<LexicalRule>,
}

impl LexicalSpec {
  pub fn rules(&self) -> &[LexicalRule] {
    &self.rules
  }

  pub fn emitted_rules(&self) -> impl Iterator<Item = &LexicalRule> {
    self.rules.iter().filter(|r| !r.is_skip)
  }

  pub fn find(&self, name: &str) -> Option<&LexicalRule> {
    self.rules.iter().find(|r| r.name == name)
  }
}

pub fn validate_lexical_rules(parsed: Vec<LexicalParseResult>) -> (LexicalSpec, DiagnosticsReport) {
  let mut report = DiagnosticsReport::new();
  let mut seen_names = HashSet::new();
  let mut seen_patterns = HashSet::new();
  let mut accepted = Vec::new();

  for item in parsed {
    let rule = match item {
      LexicalParseResult::Unrecognized(line) => {
        report.push(Diagnostic::new(line, DiagnosticKind::InvalidRule));
        continue;
      }
      LexicalParseResult::Recognized(rule) => rule,
    };

    let mut ok = true;

    if !name_regex().is_match(&rule.name) {
      report.push(Diagnostic::new(
        rule.line.clone(),
        DiagnosticKind::InvalidNameFormat { name: rule.name.clone() },
      ));
      ok = false;
    }

    if rule.pattern.is_empty() || rule.pattern.contains('\'') || rule.pattern.contains('"') {
      report.push(Diagnostic::new(
        rule.line.clone(),
        DiagnosticKind::InvalidPattern { reason: format!("pattern `{}` is empty or has stray quotes", rule.pattern) },
      ));
      ok = false;
    }

    if !seen_names.insert(rule.name.clone()) {
      report.push(Diagnostic::new(rule.line.clone(), DiagnosticKind::DuplicateName { name: rule.name.clone() }));
      ok = false;
    }

    if !seen_patterns.insert(rule.pattern.clone()) {
      report.push(Diagnostic::new(
        rule.line.clone(),
        DiagnosticKind::DuplicatePattern { pattern: rule.pattern.clone() },
      ));
      ok = false;
    }

    if ok {
      accepted.push(rule);
    }
  }

  (LexicalSpec { rules: accepted }, report)
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::lexical::parser::parse_lexical_section;
  use std::{path::PathBuf, rc::Rc};

  fn line(n: usize, s: &str) -> crate::types::line::Line {
    crate::types::line::Line::new(Rc::new(PathBuf::from("spec.g")), n, s, false)
  }

  #[test]
  fn flags_invalid_name_but_keeps_valid_one() {
    let lines = vec![line(1, "skip WHITESPACE '\\s+'"), line(2, "token 1MINUS '-'")];
    let parsed = parse_lexical_section(&lines);
    let (spec, report) = validate_lexical_rules(parsed);

    assert_eq!(report.len(), 1);
    assert!(matches!(report.iter().next().unwrap().kind, DiagnosticKind::InvalidNameFormat { .. }));
    assert_eq!(spec.rules().len(), 1);
    assert_eq!(spec.rules()[0].name, "WHITESPACE");
  }

  #[test]
  fn first_of_duplicate_name_is_silently_accepted() {
    let lines = vec![line(1, "token A 'a'"), line(2, "token A 'b'")];
    let parsed = parse_lexical_section(&lines);
    let (spec, report) = validate_lexical_rules(parsed);

    assert_eq!(spec.rules().len(), 1);
    assert_eq!(report.len(), 1);
    assert!(matches!(report.iter().next().unwrap().kind, DiagnosticKind::DuplicateName { .. }));
  }
}
