use std::hash::{Hash, Hasher};

/// A grammar symbol, tagged by the role it plays on the RHS or LHS of a
/// production.
///
/// `CapturingTerminal` is an ordinary RHS terminal, which becomes a
/// `Token`-typed field on the generated AST class (§4.7). Plain
/// `Terminal` is reserved for symbols that never capture a field — today
/// that's only the separator of a repeating rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Symbol {
  Terminal { name: String },
  CapturingTerminal { name: String, field_name: String },
  LhsNonTerminal { name: String, alt_name: Option<String> },
  RhsNonTerminal { name: String, alt_name: Option<String> },
}

impl Symbol {
  pub fn name(&self) -> &str {
    match self {
      Symbol::Terminal { name } => name,
      Symbol::CapturingTerminal { name, .. } => name,
      Symbol::LhsNonTerminal { name, .. } => name,
      Symbol::RhsNonTerminal { name, .. } => name,
    }
  }

  pub fn is_terminal(&self) -> bool {
    matches!(self, Symbol::Terminal { .. } | Symbol::CapturingTerminal { .. })
  }

  pub fn is_nonterminal(&self) -> bool {
    !self.is_terminal()
  }

  /// The RHS-side alt-name, if any, that overrides the default field name
  /// derived from `name` (§4.7: "an explicit `:alt` on a RHS non-terminal
  /// overrides it").
  pub fn field_override(&self) -> Option<&str> {
    match self {
      Symbol::RhsNonTerminal { alt_name, .. } => alt_name.as_deref(),
      Symbol::CapturingTerminal { field_name, .. } => Some(field_name),
      _ => None,
    }
  }

  /// The default field name: the symbol's name, lower-cased.
  pub fn default_field_name(&self) -> String {
    self.name().to_ascii_lowercase()
  }

  pub fn field_name(&self) -> String {
    self.field_override().map(str::to_string).unwrap_or_else(|| self.default_field_name())
  }
}

/// A wrapper around [`Symbol`] whose equality and hash depend only on the
/// wrapped symbol's `name`, so that two identically-named symbols from
/// different production sites compare equal (§9: "Symbol wrapping").
///
/// This is the node identity used by the grammar graph; the wrapped
/// `Symbol` payload still carries the original variant for downstream
/// consumers such as the AST model builder.
#[derive(Debug, Clone)]
pub struct SymbolWrapper {
  pub name: String,
  pub payload: Symbol,
}

impl SymbolWrapper {
  pub fn new(payload: Symbol) -> Self {
    Self { name: payload.name().to_string(), payload }
  }

  /// The epsilon sentinel: the empty-string wrapper used only at the
  /// graph level, never as a rule-level symbol.
  pub fn epsilon() -> Self {
    Self { name: String::new(), payload: Symbol::Terminal { name: String::new() } }
  }

  /// The end-of-text sentinel.
  pub fn eof() -> Self {
    const EOF_MARKER: &str = "\u{3}";
    Self { name: EOF_MARKER.to_string(), payload: Symbol::Terminal { name: EOF_MARKER.to_string() } }
  }

  pub fn is_epsilon(&self) -> bool {
    self.name.is_empty()
  }

  pub fn is_eof(&self) -> bool {
    self.name == "\u{3}"
  }
}

impl PartialEq for SymbolWrapper {
  fn eq(&self, other: &Self) -> bool {
    self.name == other.name
  }
}

impl Eq for SymbolWrapper {}

impl Hash for SymbolWrapper {
  fn hash<H: Hasher>(&self, state: &mut H) {
    self.name.hash(state);
  }
}

impl Ord for SymbolWrapper {
  fn cmp(&self, other: &Self) -> std::cmp::Ordering {
    self.name.cmp(&other.name)
  }
}

impl PartialOrd for SymbolWrapper {
  fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
    Some(self.cmp(other))
  }
}
