use crate::types::{line::Line, symbol::Symbol};

/// One recognized syntactic-section production.
///
/// `repeating` marks a `**=` rule; when true, `separator` may carry the
/// bare terminal that separates repeated elements. `separator` is `None`
/// for a plain repeating rule and must always be `None` when `repeating`
/// is false (a separator on a non-repeating `::=` rule is tolerated by
/// the parser but flagged by the validator — see DESIGN.md).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntacticRule {
  pub line: Line,
  pub lhs: Symbol,
  pub rhs: Vec<Symbol>,
  pub repeating: bool,
  pub separator: Option<Symbol>,
}

impl SyntacticRule {
  pub fn new(line: Line, lhs: Symbol, rhs: Vec<Symbol>, repeating: bool, separator: Option<Symbol>) -> Self {
    Self { line, lhs, rhs, repeating, separator }
  }

  /// The LHS's declared name (e.g. `stmt` in `<stmt:IfStmt> ::= ...`).
  pub fn lhs_name(&self) -> &str {
    self.lhs.name()
  }

  /// The LHS's alt-name, if the rule disambiguates a shared LHS.
  pub fn lhs_alt_name(&self) -> Option<&str> {
    match &self.lhs {
      Symbol::LhsNonTerminal { alt_name, .. } => alt_name.as_deref(),
      _ => None,
    }
  }

  /// The resolved LHS name used for uniqueness checks and class naming:
  /// the alt-name if given, else the capitalized base name (§4.5c).
  pub fn resolved_lhs_name(&self) -> String {
    match self.lhs_alt_name() {
      Some(alt) => alt.to_string(),
      None => capitalize(self.lhs_name()),
    }
  }
}

pub fn capitalize(name: &str) -> String {
  let mut chars = name.chars();
  match chars.next() {
    Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
    None => String::new(),
  }
}
