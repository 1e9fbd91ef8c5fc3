//! AST Model Builder (§4.7): derives the language-agnostic "unresolved"
//! class model from a validated [`SyntacticSpec`]. Every name in the
//! output is an [`UnresolvedName`] — no target-language syntax appears
//! here; that's the Target Translator's job (§4.8).

use std::collections::{HashMap, HashSet};

use crate::{
  error::{Diagnostic, DiagnosticKind, DiagnosticsReport},
  syntactic::SyntacticSpec,
  types::{
    ast_class::{AstClass, FieldDeclaration},
    symbol::Symbol,
    syntactic_rule::{capitalize, SyntacticRule},
    unresolved_name::UnresolvedName,
  },
};

/// Words that collide with a construct in at least one of the two
/// reference target languages (class, method or builtin names), plus
/// the names of the bundled runtime-support files themselves — a
/// generated class can never shadow a file the runtime copies in
/// alongside it.
const RESERVED_CLASS_NAMES: &[&str] = &[
  "Object", "String", "Class", "Token", "List", "Self", "self", "class", "def", "import", "None", "True", "False",
  "ILazy", "IMatch", "IScan", "ITrace", "Trace", "PLCCException", "Scan", "ProcessFiles", "Parse", "Rep", "ParseJsonAst",
];

pub fn build_ast_model(spec: &SyntacticSpec) -> (Vec<AstClass>, DiagnosticsReport) {
  let mut report = DiagnosticsReport::new();
  let mut groups: Vec<(&str, Vec<&SyntacticRule>)> = Vec::new();

  for rule in spec.rules() {
    match groups.iter_mut().find(|(name, _)| *name == rule.lhs_name()) {
      Some((_, rules)) => rules.push(rule),
      None => groups.push((rule.lhs_name(), vec![rule])),
    }
  }

  // The type any RHS reference to a nonterminal should resolve to: the
  // abstract base name for a multi-production LHS, the single concrete
  // class's resolved name otherwise.
  let reference_type: HashMap<&str, String> = groups
    .iter()
    .map(|(name, rules)| {
      let ty = if rules.len() > 1 { capitalize(name) } else { rules[0].resolved_lhs_name() };
      (*name, ty)
    })
    .collect();

  let mut classes = Vec::new();

  for (name, rules) in &groups {
    if rules.len() > 1 {
      let base_name = capitalize(name);
      check_reserved(&mut report, &rules[0].line, &base_name);
      classes.push(AstClass::abstract_base(base_class_name_unresolved(&base_name)));

      for rule in rules {
        if let Some(class) = build_concrete_class(&mut report, rule, Some(&base_name), &reference_type) {
          classes.push(class);
        }
      }
    } else if let Some(class) = build_concrete_class(&mut report, rules[0], None, &reference_type) {
      classes.push(class);
    }
  }

  (classes, report)
}

fn check_reserved(report: &mut DiagnosticsReport, line: &crate::types::line::Line, name: &str) {
  if RESERVED_CLASS_NAMES.contains(&name) {
    report.push(Diagnostic::new(line.clone(), DiagnosticKind::ReservedClassName { name: name.to_string() }));
  }
}

fn build_concrete_class(
  report: &mut DiagnosticsReport,
  rule: &SyntacticRule,
  base_name: Option<&str>,
  reference_type: &HashMap<&str, String>,
) -> Option<AstClass> {
  let class_name = rule.resolved_lhs_name();
  check_reserved(report, &rule.line, &class_name);

  let mut seen_fields = HashSet::new();
  let mut duplicates = Vec::new();
  let mut fields = Vec::new();

  for sym in &rule.rhs {
    let field_name = sym.field_name();
    if !seen_fields.insert(field_name.clone()) {
      duplicates.push(field_name);
      continue;
    }
    fields.push(build_field(sym, rule.repeating, reference_type));
  }

  for dup in duplicates {
    report.push(Diagnostic::new(rule.line.clone(), DiagnosticKind::DuplicateField { name: dup }));
  }

  let extends = base_name.map(base_class_name_unresolved);
  let class_sym = Symbol::LhsNonTerminal { name: class_name.clone(), alt_name: rule.lhs_alt_name().map(str::to_string) };

  Some(AstClass::concrete(UnresolvedName::ClassName(class_sym), extends, fields))
}

fn base_class_name_unresolved(name: &str) -> UnresolvedName {
  UnresolvedName::BaseClassName(Symbol::LhsNonTerminal { name: name.to_string(), alt_name: None })
}

fn build_field(sym: &Symbol, repeating: bool, reference_type: &HashMap<&str, String>) -> FieldDeclaration {
  let variable_sym = field_symbol(sym);

  let ty_sym = match sym {
    Symbol::CapturingTerminal { .. } | Symbol::Terminal { .. } => sym.clone(),
    Symbol::RhsNonTerminal { name, .. } => {
      let resolved = reference_type.get(name.as_str()).cloned().unwrap_or_else(|| capitalize(name));
      Symbol::LhsNonTerminal { name: resolved, alt_name: None }
    }
    Symbol::LhsNonTerminal { .. } => sym.clone(),
  };

  let (variable, ty) = if repeating {
    (UnresolvedName::ListVariableName(variable_sym), UnresolvedName::ListTypeName(ty_sym))
  } else {
    (UnresolvedName::VariableName(variable_sym), UnresolvedName::TypeName(ty_sym))
  };

  FieldDeclaration { variable, ty, is_list: repeating }
}

fn field_symbol(sym: &Symbol) -> Symbol {
  match sym {
    Symbol::CapturingTerminal { name, field_name } => {
      Symbol::CapturingTerminal { name: name.clone(), field_name: field_name.clone() }
    }
    other => other.clone(),
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::syntactic::{parser::parse_syntactic_section, validator::validate_syntactic_rules};

  fn build(source: &[&str]) -> (Vec<AstClass>, DiagnosticsReport) {
    use std::{path::PathBuf, rc::Rc};
    let lines: Vec<_> = source
      .iter()
      .enumerate()
      .map(|(i, s)| crate::types::line::Line::new(Rc::new(PathBuf::from("spec.g")), i + 1, *s, false))
      .collect();
    let (parsed, parse_report) = parse_syntactic_section(&lines);
    assert!(parse_report.is_empty(), "{:?}", parse_report);
    let (spec, validate_report) = validate_syntactic_rules(parsed);
    assert!(validate_report.is_empty(), "{:?}", validate_report);
    build_ast_model(&spec)
  }

  #[test]
  fn single_production_yields_one_concrete_class() {
    let (classes, report) = build(&["<cat> ::= TAIL CLAWS"]);
    assert!(report.is_empty());
    assert_eq!(classes.len(), 1);
    assert!(!classes[0].is_abstract);
    assert_eq!(classes[0].fields.len(), 2);
  }

  #[test]
  fn multiple_productions_yield_abstract_base_plus_concrete_classes() {
    let (classes, report) = build(&["<stmt>:IfStmt ::= IF", "<stmt>:WhileStmt ::= WHILE"]);
    assert!(report.is_empty());
    assert_eq!(classes.len(), 3);
    assert!(classes[0].is_abstract);
    assert!(classes[1].extends.is_some());
    assert!(classes[2].extends.is_some());
  }

  #[test]
  fn duplicate_field_names_are_flagged() {
    let (classes, report) = build(&["<pair> ::= <expr> <expr>", "<expr> ::= A"]);
    assert_eq!(classes[0].fields.len(), 1);
    assert!(report.iter().any(|d| matches!(d.kind, DiagnosticKind::DuplicateField { .. })));
  }

  #[test]
  fn repeating_rule_yields_list_fields() {
    let (classes, report) = build(&["<list> **= <item> + COMMA"]);
    assert!(report.is_empty());
    assert!(classes[0].fields.iter().all(|f| f.is_list));
  }
}
