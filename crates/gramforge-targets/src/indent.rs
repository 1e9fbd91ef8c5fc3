//! The Indentation/Dynamic reference translator (§4.8): a Python-shaped
//! target with `[T]` collections, `self.x` field references, elided
//! field declarations, and indentation-delimited bodies.

use gramforge_core::types::ast_class::AstClass;

use crate::translator::{resolve_name, TargetTranslator};

pub struct IndentDynamicTranslator;

impl TargetTranslator for IndentDynamicTranslator {
  fn to_type_name(&self, name: &str) -> String {
    name.to_string()
  }

  fn to_list_type_name(&self, elem_type: &str) -> String {
    format!("[{elem_type}]")
  }

  fn to_variable_name(&self, name: &str) -> String {
    name.to_string()
  }

  fn to_list_variable_name(&self, name: &str) -> String {
    self.to_variable_name(name)
  }

  fn to_class_name(&self, name: &str) -> String {
    name.to_string()
  }

  fn to_base_class_name(&self, name: &str) -> String {
    self.to_class_name(name)
  }

  fn to_field_reference(&self, name: &str) -> String {
    format!("self.{name}")
  }

  fn to_assignment_statement(&self, lhs: &str, rhs: &str) -> String {
    format!("{lhs} = {rhs}")
  }

  fn to_parameter(&self, name: &str, ty: &str) -> String {
    format!("{name}: {ty}")
  }

  fn indent(&self, lines: &[String], levels: usize) -> Vec<String> {
    let prefix = "    ".repeat(levels);
    lines.iter().map(|l| if l.is_empty() { l.clone() } else { format!("{prefix}{l}") }).collect()
  }
}

/// Renders one [`AstClass`] as Python-shaped source text.
pub fn render_class(class: &AstClass, t: &IndentDynamicTranslator) -> String {
  let class_name = resolve_name(&class.name, t);

  if class.is_abstract {
    return format!("class {class_name}:\n    pass\n");
  }

  let header = match &class.extends {
    Some(base) => format!("class {}({}):", class_name, resolve_name(base, t)),
    None => format!("class {class_name}:"),
  };

  let mut params = vec!["self".to_string()];
  params.extend(
    class
      .constructor
      .parameters
      .iter()
      .map(|f| t.to_parameter(&resolve_name(&f.variable, t), &resolve_name(&f.ty, t))),
  );
  let ctor_header = t.indent(&[format!("def __init__({}):", params.join(", "))], 1);

  let mut assignments = Vec::new();
  for field in &class.fields {
    let var = resolve_name(&field.variable, t);
    let lhs = t.to_field_reference(&var);
    assignments.push(t.to_assignment_statement(&lhs, &var));
  }
  let ctor_body = if assignments.is_empty() {
    t.indent(&["pass".to_string()], 2)
  } else {
    t.indent(&assignments, 2)
  };

  let mut lines = vec![header];
  lines.extend(ctor_header);
  lines.extend(ctor_body);

  let mut out = lines.join("\n");
  out.push('\n');
  out
}
