//! Target Translator (§4.8): renders the language-agnostic AST-node
//! model produced by `gramforge_core` into concrete source text for each
//! reference target. No target-language syntax exists anywhere upstream
//! of this crate — every name here starts life as an `UnresolvedName`.

pub mod braces;
pub mod indent;
pub mod translator;

use gramforge_core::types::ast_class::AstClass;

pub use braces::BracesTypedTranslator;
pub use indent::IndentDynamicTranslator;
pub use translator::{resolve_name, TargetTranslator};

/// One generated file: the bare class name (the caller appends the
/// target's extension and joins it under the destination directory) and
/// its rendered contents.
pub struct GeneratedFile {
  pub class_name: String,
  pub contents: String,
}

/// Renders every concrete class for the braces/typed target. Abstract
/// bases render too — §4.8 doesn't exempt them, and both reference
/// languages need *some* declaration for a shared base type.
pub fn render_braces(classes: &[AstClass]) -> Vec<GeneratedFile> {
  let t = BracesTypedTranslator;
  classes
    .iter()
    .map(|class| GeneratedFile {
      class_name: resolve_name(&class.name, &t),
      contents: braces::render_class(class, &t),
    })
    .collect()
}

/// Renders every concrete class for the indentation/dynamic target.
pub fn render_indent(classes: &[AstClass]) -> Vec<GeneratedFile> {
  let t = IndentDynamicTranslator;
  classes
    .iter()
    .map(|class| GeneratedFile {
      class_name: resolve_name(&class.name, &t),
      contents: indent::render_class(class, &t),
    })
    .collect()
}

#[cfg(test)]
mod tests {
  use super::*;
  use gramforge_core::types::{
    ast_class::{Constructor, FieldDeclaration},
    symbol::Symbol,
    unresolved_name::UnresolvedName,
  };

  fn cat_class() -> AstClass {
    let field = |name: &str, ty: &str| FieldDeclaration {
      variable: UnresolvedName::VariableName(Symbol::RhsNonTerminal { name: name.to_string(), alt_name: None }),
      ty: UnresolvedName::TypeName(Symbol::LhsNonTerminal { name: ty.to_string(), alt_name: None }),
      is_list: false,
    };
    let fields = vec![field("tail", "Tail"), field("claws", "Claws")];
    AstClass {
      name: UnresolvedName::ClassName(Symbol::LhsNonTerminal { name: "Cat".to_string(), alt_name: None }),
      extends: None,
      constructor: Constructor { parameters: fields.clone() },
      fields,
      is_abstract: false,
    }
  }

  #[test]
  fn braces_matches_reference_output() {
    let rendered = render_braces(&[cat_class()]);
    assert_eq!(rendered[0].class_name, "Cat");
    let expected = "public class Cat {\n    public Tail tail;\n    public Claws claws;\n\n    public Cat(Tail tail, Claws claws) {\n        this.tail = tail;\n        this.claws = claws;\n    }\n}\n";
    assert_eq!(rendered[0].contents, expected);
  }

  #[test]
  fn indent_matches_reference_output() {
    let rendered = render_indent(&[cat_class()]);
    assert_eq!(rendered[0].class_name, "Cat");
    let expected =
      "class Cat:\n    def __init__(self, tail: Tail, claws: Claws):\n        self.tail = tail\n        self.claws = claws\n";
    assert_eq!(rendered[0].contents, expected);
  }

  #[test]
  fn given_name_overrides_translator_for_both_targets() {
    let field = FieldDeclaration {
      variable: UnresolvedName::VariableName(Symbol::RhsNonTerminal {
        name: "TAIL".to_string(),
        alt_name: Some("theTail".to_string()),
      }),
      ty: UnresolvedName::TypeName(Symbol::LhsNonTerminal { name: "Tail".to_string(), alt_name: None }),
      is_list: false,
    };
    let class = AstClass {
      name: UnresolvedName::ClassName(Symbol::LhsNonTerminal { name: "Cat".to_string(), alt_name: None }),
      extends: None,
      constructor: Constructor { parameters: vec![field.clone()] },
      fields: vec![field],
      is_abstract: false,
    };
    let braces = render_braces(&[class.clone()]);
    let indent = render_indent(&[class]);
    assert!(braces[0].contents.contains("theTail"));
    assert!(indent[0].contents.contains("theTail"));
  }
}
