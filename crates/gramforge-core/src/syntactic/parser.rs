//! Syntactic Parser (§4.4): turns one syntactic-section line into a
//! [`SyntacticRule`] with typed symbols, or into diagnostics when the
//! line's shape can't be recognized at all.

use std::sync::OnceLock;

use regex::Regex;

use crate::{
  error::{Diagnostic, DiagnosticKind, DiagnosticsReport},
  types::{line::Line, symbol::Symbol, syntactic_rule::SyntacticRule},
};

fn line_regex() -> &'static Regex {
  static RE: OnceLock<Regex> = OnceLock::new();
  RE.get_or_init(|| {
    Regex::new(r#"^<([^>:]+)>(?::(\S+))?\s*(::=|\*\*=)\s*(.*?)\s*(?:#.*)?$"#).unwrap()
  })
}

fn nonterm_regex() -> &'static Regex {
  static RE: OnceLock<Regex> = OnceLock::new();
  RE.get_or_init(|| Regex::new(r"^<([a-zA-Z_][a-zA-Z0-9_]*)>(?::([A-Za-z][A-Za-z0-9_]*))?$").unwrap())
}

fn terminal_name_regex() -> &'static Regex {
  static RE: OnceLock<Regex> = OnceLock::new();
  RE.get_or_init(|| Regex::new(r"^[A-Z_][A-Z0-9_]*$").unwrap())
}

/// Parses every line of the syntactic section, accumulating rules that
/// parsed cleanly and diagnostics for every line (or symbol within a
/// line) that didn't. A line that produces any diagnostic contributes
/// no rule — a syntactic-parse error is not locally patchable below the
/// line level.
pub fn parse_syntactic_section(lines: &[Line]) -> (Vec<SyntacticRule>, DiagnosticsReport) {
  let mut rules = Vec::new();
  let mut report = DiagnosticsReport::new();

  for line in lines {
    match parse_line(line) {
      Ok(rule) => rules.push(rule),
      Err(diagnostics) => report.extend(diagnostics),
    }
  }

  (rules, report)
}

fn parse_line(line: &Line) -> Result<SyntacticRule, DiagnosticsReport> {
  let trimmed = line.trimmed();

  let caps = match line_regex().captures(trimmed) {
    Some(caps) => caps,
    None => {
      let mut report = DiagnosticsReport::new();
      report.push(Diagnostic::new(line.clone(), DiagnosticKind::MissingDefinitionOperator));
      return Err(report);
    }
  };

  let lhs_name = caps.get(1).unwrap().as_str().to_string();
  let lhs_alt = caps.get(2).map(|m| m.as_str().to_string());
  let repeating = &caps[3] == "**=";
  let rest = caps.get(4).map(|m| m.as_str()).unwrap_or("").trim();

  let lhs = Symbol::LhsNonTerminal { name: lhs_name, alt_name: lhs_alt };

  let mut report = DiagnosticsReport::new();
  let mut rhs = Vec::new();
  let mut separator = None;

  let tokens: Vec<&str> = rest.split_whitespace().collect();
  let mut index = 0;
  while index < tokens.len() {
    let tok = tokens[index];
    if tok == "+" {
      index += 1;
      if index >= tokens.len() {
        report.push(Diagnostic::new(
          line.clone(),
          DiagnosticKind::ExtraContent { text: "+ with no following separator".to_string() },
        ));
        break;
      }
      let sep_tok = tokens[index];
      match parse_symbol(line, sep_tok, &mut report) {
        Some(sym) if sym.is_terminal() => separator = Some(sym),
        Some(_) => {
          report.push(Diagnostic::new(
            line.clone(),
            DiagnosticKind::SeparatorMustBeTerminal { name: sep_tok.to_string() },
          ));
        }
        None => {}
      }
      index += 1;
      if index < tokens.len() {
        report.push(Diagnostic::new(
          line.clone(),
          DiagnosticKind::ExtraContent { text: tokens[index..].join(" ") },
        ));
      }
      break;
    }

    if let Some(sym) = parse_symbol(line, tok, &mut report) {
      rhs.push(sym);
    }
    index += 1;
  }

  if !repeating && separator.is_some() {
    // Tolerated per the open design question in §9: a separator on a
    // non-repeating rule is accepted but still flagged.
    report.push(Diagnostic::new(
      line.clone(),
      DiagnosticKind::ExtraContent { text: "separator has no effect on a non-repeating (::=) rule".to_string() },
    ));
  }

  if !report.is_empty() {
    return Err(report);
  }

  Ok(SyntacticRule::new(line.clone(), lhs, rhs, repeating, separator))
}

/// Parses one RHS token into a typed symbol, pushing a diagnostic and
/// returning `None` if it matches neither the non-terminal nor the
/// terminal shape.
fn parse_symbol(line: &Line, token: &str, report: &mut DiagnosticsReport) -> Option<Symbol> {
  if token.starts_with('<') {
    return match nonterm_regex().captures(token) {
      Some(caps) => {
        let name = caps.get(1).unwrap().as_str().to_string();
        let alt = caps.get(2).map(|m| m.as_str().to_string());
        Some(Symbol::RhsNonTerminal { name, alt_name: alt })
      }
      None => {
        report.push(Diagnostic::new(line.clone(), DiagnosticKind::InvalidNonterminal { text: token.to_string() }));
        None
      }
    };
  }

  if terminal_name_regex().is_match(token) {
    Some(Symbol::CapturingTerminal { name: token.to_string(), field_name: token.to_ascii_lowercase() })
  } else {
    report.push(Diagnostic::new(line.clone(), DiagnosticKind::InvalidTerminal { text: token.to_string() }));
    None
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use std::{path::PathBuf, rc::Rc};

  fn line(s: &str) -> Line {
    Line::new(Rc::new(PathBuf::from("spec.g")), 1, s, false)
  }

  #[test]
  fn parses_simple_rule() {
    let (rules, report) = parse_syntactic_section(&[line("<s> ::= A B")]);
    assert!(report.is_empty());
    assert_eq!(rules.len(), 1);
    assert_eq!(rules[0].rhs.len(), 2);
    assert!(!rules[0].repeating);
  }

  #[test]
  fn parses_repeating_rule_with_separator() {
    let (rules, report) = parse_syntactic_section(&[line("<list> **= <item> + COMMA")]);
    assert!(report.is_empty());
    assert_eq!(rules.len(), 1);
    assert!(rules[0].repeating);
    assert!(rules[0].separator.is_some());
  }

  #[test]
  fn parses_alt_names() {
    let (rules, report) = parse_syntactic_section(&[line("<stmt>:IfStmt ::= IF <cond:test> THEN <body>")]);
    assert!(report.is_empty());
    assert_eq!(rules[0].lhs_alt_name(), Some("IfStmt"));
  }

  #[test]
  fn missing_operator_is_reported() {
    let (rules, report) = parse_syntactic_section(&[line("<s> A B")]);
    assert!(rules.is_empty());
    assert_eq!(report.len(), 1);
  }

  #[test]
  fn separator_must_be_terminal() {
    let (rules, report) = parse_syntactic_section(&[line("<list> **= <item> + <other>")]);
    assert!(rules.is_empty());
    assert!(matches!(report.iter().next().unwrap().kind, DiagnosticKind::SeparatorMustBeTerminal { .. }));
  }
}
