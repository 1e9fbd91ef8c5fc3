use std::path::PathBuf;

use crate::types::line::Line;

/// The distinguishable failure kinds a pipeline stage can report.
///
/// Every variant maps to one row of the error taxonomy: read errors,
/// lexical errors, syntactic-parse errors, syntactic-validation errors,
/// analysis errors, and generation errors.
#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum DiagnosticKind {
  #[error("include cycle: `{directive}` revisits a file already on the include stack")]
  IncludeCycle { directive: String },

  #[error("file not found: {path}")]
  FileNotFound { path: PathBuf },

  #[error("name `{name}` does not match ^[A-Z_][A-Z0-9_]*$")]
  InvalidNameFormat { name: String },

  #[error("duplicate lexical rule name `{name}`")]
  DuplicateName { name: String },

  #[error("duplicate lexical pattern `{pattern}`")]
  DuplicatePattern { pattern: String },

  #[error("invalid pattern: {reason}")]
  InvalidPattern { reason: String },

  #[error("line does not match any recognized lexical-rule shape")]
  InvalidRule,

  #[error("missing `::=` or `**=` definition operator")]
  MissingDefinitionOperator,

  #[error("`{text}` is not a valid non-terminal reference")]
  InvalidNonterminal { text: String },

  #[error("`{text}` is not a valid terminal reference")]
  InvalidTerminal { text: String },

  #[error("separator `{name}` must be a terminal")]
  SeparatorMustBeTerminal { name: String },

  #[error("unexpected trailing content: `{text}`")]
  ExtraContent { text: String },

  #[error("LHS name `{name}` does not match ^[a-z][a-zA-Z0-9_]+$")]
  InvalidLhsName { name: String },

  #[error("alt-name `{name}` does not match ^[A-Z][a-zA-Z0-9_]+$")]
  InvalidLhsAltName { name: String },

  #[error("resolved LHS name `{name}` is used by more than one rule")]
  DuplicateLhs { name: String },

  #[error("non-terminal `{name}` is never defined as a LHS")]
  UndefinedNonterminal { name: String },

  #[error(
    "LL(1) conflict on non-terminal `{nonterminal}`: productions {competing_rules:?} overlap on {overlapping_terminals:?}"
  )]
  Ll1Conflict { nonterminal: String, overlapping_terminals: Vec<String>, competing_rules: Vec<usize> },

  #[error("non-terminal `{nonterminal}` is useless (empty predict set) or left-recursive")]
  UselessOrLeftRecursive { nonterminal: String },

  #[error("production of `{nonterminal}` is unreachable")]
  UnreachableCase { nonterminal: String },

  #[error("duplicate field name `{name}` within one production")]
  DuplicateField { name: String },

  #[error("`{name}` collides with a reserved class name in the target language")]
  ReservedClassName { name: String },

  #[error("failed to write `{path}`: {reason}")]
  WriteFailure { path: PathBuf, reason: String },
}

/// One reported problem, optionally anchored to the source [`Line`] that
/// caused it. Errors without a natural source anchor (e.g. a destination
/// directory that can't be created) carry `line: None`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
  pub line: Option<Line>,
  pub kind: DiagnosticKind,
}

impl Diagnostic {
  pub fn new(line: Line, kind: DiagnosticKind) -> Self {
    Self { line: Some(line), kind }
  }

  pub fn without_line(kind: DiagnosticKind) -> Self {
    Self { line: None, kind }
  }

  /// Renders as `<line-number> [<path>]: <message>` followed by the
  /// offending line text, per the CLI's stderr contract.
  pub fn render(&self) -> String {
    match &self.line {
      Some(line) => format!("{} [{}]: {}\n{}", line.number, line.path.display(), self.kind, line.string),
      None => format!("[-]: {}", self.kind),
    }
  }
}

impl std::fmt::Display for Diagnostic {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.write_str(&self.render())
  }
}

/// An ordered collection of diagnostics, preserving emission order.
///
/// Each pipeline stage collects into its own `DiagnosticsReport` without
/// aborting at the first failure ("local recovery: skip the offending
/// line, continue"); the CLI layer merges reports and exits non-zero
/// if any of them is non-empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DiagnosticsReport {
  diagnostics: Vec<Diagnostic>,
}

impl DiagnosticsReport {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn push(&mut self, diagnostic: Diagnostic) {
    self.diagnostics.push(diagnostic);
  }

  pub fn push_kind(&mut self, line: Line, kind: DiagnosticKind) {
    self.push(Diagnostic::new(line, kind));
  }

  pub fn extend(&mut self, other: DiagnosticsReport) {
    self.diagnostics.extend(other.diagnostics);
  }

  pub fn is_empty(&self) -> bool {
    self.diagnostics.is_empty()
  }

  pub fn len(&self) -> usize {
    self.diagnostics.len()
  }

  pub fn iter(&self) -> std::slice::Iter<'_, Diagnostic> {
    self.diagnostics.iter()
  }

  /// 1 if any diagnostic was produced, 0 otherwise.
  pub fn exit_code(&self) -> i32 {
    if self.is_empty() {
      0
    } else {
      1
    }
  }

  pub fn write_to(&self, mut out: impl std::io::Write) -> std::io::Result<()> {
    for diagnostic in &self.diagnostics {
      writeln!(out, "{}", diagnostic.render())?;
    }
    Ok(())
  }
}

impl IntoIterator for DiagnosticsReport {
  type Item = Diagnostic;
  type IntoIter = std::vec::IntoIter<Diagnostic>;

  fn into_iter(self) -> Self::IntoIter {
    self.diagnostics.into_iter()
  }
}

impl FromIterator<Diagnostic> for DiagnosticsReport {
  fn from_iter<T: IntoIterator<Item = Diagnostic>>(iter: T) -> Self {
    Self { diagnostics: iter.into_iter().collect() }
  }
}
