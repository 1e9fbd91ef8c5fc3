use crate::types::symbol::Symbol;

/// A name whose concrete spelling is deferred to a target translator.
///
/// The AST model builder only ever produces `UnresolvedName`s; resolving
/// one into a string is the one and only place target-language syntax
/// enters the pipeline (§4.8).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UnresolvedName {
  TypeName(Symbol),
  VariableName(Symbol),
  ListTypeName(Symbol),
  ListVariableName(Symbol),
  ClassName(Symbol),
  BaseClassName(Symbol),
}

impl UnresolvedName {
  pub fn symbol(&self) -> &Symbol {
    match self {
      UnresolvedName::TypeName(s)
      | UnresolvedName::VariableName(s)
      | UnresolvedName::ListTypeName(s)
      | UnresolvedName::ListVariableName(s)
      | UnresolvedName::ClassName(s)
      | UnresolvedName::BaseClassName(s) => s,
    }
  }

  /// The symbol's preferred given name, if the grammar supplied one
  /// (a RHS `:alt` override or a LHS alt-name). When present, resolution
  /// must return it verbatim regardless of translator (§8 property 6).
  pub fn given_name(&self) -> Option<&str> {
    match self {
      UnresolvedName::VariableName(s) | UnresolvedName::ListVariableName(s) => s.field_override(),
      UnresolvedName::ClassName(s) => match s {
        Symbol::LhsNonTerminal { alt_name, .. } => alt_name.as_deref(),
        _ => None,
      },
      _ => None,
    }
  }
}
