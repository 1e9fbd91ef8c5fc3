//! The Target Translator capability set (§4.8): a small set of pure
//! functions a concrete target implements. No language-specific syntax
//! appears anywhere outside this crate — the AST model itself only
//! ever carries [`UnresolvedName`]s.

use gramforge_core::types::unresolved_name::UnresolvedName;

pub trait TargetTranslator {
  fn to_type_name(&self, name: &str) -> String;
  fn to_list_type_name(&self, elem_type: &str) -> String;
  fn to_variable_name(&self, name: &str) -> String;
  fn to_list_variable_name(&self, name: &str) -> String;
  fn to_class_name(&self, name: &str) -> String;
  fn to_base_class_name(&self, name: &str) -> String;
  fn to_field_reference(&self, name: &str) -> String;
  fn to_assignment_statement(&self, lhs: &str, rhs: &str) -> String;
  fn to_parameter(&self, name: &str, ty: &str) -> String;
  fn indent(&self, lines: &[String], levels: usize) -> Vec<String>;
}

/// Resolves an [`UnresolvedName`] to its concrete spelling for `t`.
///
/// When the wrapped symbol carries a `givenName` (a grammar-supplied
/// `:alt` override), it is returned verbatim regardless of the
/// translator (§8 property 6) — that's the one case where the grammar
/// author, not the target, owns the final spelling.
pub fn resolve_name(name: &UnresolvedName, t: &dyn TargetTranslator) -> String {
  if let Some(given) = name.given_name() {
    return given.to_string();
  }

  match name {
    UnresolvedName::TypeName(sym) => {
      if sym.is_terminal() {
        "Token".to_string()
      } else {
        t.to_type_name(sym.name())
      }
    }
    UnresolvedName::ListTypeName(sym) => {
      let elem = if sym.is_terminal() { "Token".to_string() } else { t.to_type_name(sym.name()) };
      t.to_list_type_name(&elem)
    }
    UnresolvedName::VariableName(sym) => t.to_variable_name(&sym.field_name()),
    UnresolvedName::ListVariableName(sym) => t.to_list_variable_name(&sym.field_name()),
    UnresolvedName::ClassName(sym) => t.to_class_name(sym.name()),
    UnresolvedName::BaseClassName(sym) => t.to_base_class_name(sym.name()),
  }
}
