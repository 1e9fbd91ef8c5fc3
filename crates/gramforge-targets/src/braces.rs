//! The Braces/Typed reference translator (§4.8): a Java-shaped target
//! with `List<T>` collections, `this.x` field references, and a
//! brace-delimited class body.

use gramforge_core::types::ast_class::AstClass;

use crate::translator::{resolve_name, TargetTranslator};

pub struct BracesTypedTranslator;

impl TargetTranslator for BracesTypedTranslator {
  fn to_type_name(&self, name: &str) -> String {
    name.to_string()
  }

  fn to_list_type_name(&self, elem_type: &str) -> String {
    format!("List<{elem_type}>")
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
    format!("this.{name}")
  }

  fn to_assignment_statement(&self, lhs: &str, rhs: &str) -> String {
    format!("{lhs} = {rhs};")
  }

  fn to_parameter(&self, name: &str, ty: &str) -> String {
    format!("{ty} {name}")
  }

  fn indent(&self, lines: &[String], levels: usize) -> Vec<String> {
    let prefix = "    ".repeat(levels);
    lines.iter().map(|l| if l.is_empty() { l.clone() } else { format!("{prefix}{l}") }).collect()
  }
}

/// Renders one [`AstClass`] as Java-shaped source text.
pub fn render_class(class: &AstClass, t: &BracesTypedTranslator) -> String {
  let class_name = resolve_name(&class.name, t);
  let header = match &class.extends {
    Some(base) => format!("public class {} extends {} {{", class_name, resolve_name(base, t)),
    None => format!("public class {class_name} {{"),
  };

  if class.is_abstract {
    return format!("public abstract class {class_name} {{\n}}\n");
  }

  let mut body = Vec::new();
  for field in &class.fields {
    let ty = resolve_name(&field.ty, t);
    let var = resolve_name(&field.variable, t);
    body.push(format!("public {ty} {var};"));
  }
  let field_lines = t.indent(&body, 1);

  let params: Vec<String> = class
    .constructor
    .parameters
    .iter()
    .map(|f| t.to_parameter(&resolve_name(&f.variable, t), &resolve_name(&f.ty, t)))
    .collect();
  let ctor_header = t.indent(&[format!("public {}({}) {{", class_name, params.join(", "))], 1);

  let mut assignments = Vec::new();
  for field in &class.fields {
    let var = resolve_name(&field.variable, t);
    let lhs = t.to_field_reference(&var);
    assignments.push(t.to_assignment_statement(&lhs, &var));
  }
  let ctor_body = t.indent(&assignments, 2);

  let mut lines = vec![header];
  lines.extend(field_lines);
  lines.push(String::new());
  lines.extend(ctor_header);
  lines.extend(ctor_body);
  lines.extend(t.indent(&["}".to_string()], 1));
  lines.push("}".to_string());

  let mut out = lines.join("\n");
  out.push('\n');
  out
}
