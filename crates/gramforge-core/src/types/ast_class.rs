use crate::types::unresolved_name::UnresolvedName;

/// One field of a generated AST class: a resolved-later variable name
/// plus its (possibly list) type, both still unresolved names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDeclaration {
  pub variable: UnresolvedName,
  pub ty: UnresolvedName,
  pub is_list: bool,
}

/// The constructor for a concrete class: one parameter per field, in RHS
/// order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Constructor {
  pub parameters: Vec<FieldDeclaration>,
}

/// A concrete class or abstract base produced by the AST model builder.
///
/// `extends` is `Some(base)` for a concrete class derived from one
/// alternative of a multi-production LHS; it is `None` for both a
/// single-production concrete class and for the abstract base itself
/// (an abstract base never extends anything further up).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AstClass {
  pub name: UnresolvedName,
  pub extends: Option<UnresolvedName>,
  pub fields: Vec<FieldDeclaration>,
  pub constructor: Constructor,
  pub is_abstract: bool,
}

impl AstClass {
  pub fn concrete(name: UnresolvedName, extends: Option<UnresolvedName>, fields: Vec<FieldDeclaration>) -> Self {
    Self { name, extends, constructor: Constructor { parameters: fields.clone() }, fields, is_abstract: false }
  }

  pub fn abstract_base(name: UnresolvedName) -> Self {
    Self { name, extends: None, fields: Vec::new(), constructor: Constructor::default(), is_abstract: true }
  }
}
