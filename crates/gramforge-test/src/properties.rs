//! Property tests for the invariants listed among the testable
//! properties: reader line numbering, lexical uniqueness, validation
//! idempotence, and translator `givenName` precedence.

use std::{fs, path::PathBuf, rc::Rc};

use gramforge_core::{
  lexical::{parse_lexical_section, validate_lexical_rules},
  reader::SourceReader,
  types::{line::Line, symbol::Symbol, unresolved_name::UnresolvedName},
};
use gramforge_targets::{resolve_name, BracesTypedTranslator, IndentDynamicTranslator};
use proptest::prelude::*;

fn safe_text() -> impl Strategy<Value = String> {
  "[a-zA-Z0-9 _]{1,40}".prop_filter("not a directive or divider", |s| {
    let t = s.trim();
    !t.is_empty() && t != "%" && !t.starts_with('#') && !t.starts_with("%include") && !t.starts_with("%%")
  })
}

proptest! {
  /// Invariant 3: Lines produced by the reader have a strictly
  /// increasing, 1-based `number` within their file.
  #[test]
  fn reader_line_numbers_are_strictly_increasing(body in prop::collection::vec(safe_text(), 1..20)) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("spec.g");
    fs::write(&path, body.join("\n") + "\n").unwrap();

    let lines = SourceReader::new().read(&path).unwrap();
    let mut previous = 0usize;
    for (i, line) in lines.iter().enumerate() {
      prop_assert!(line.number > previous);
      prop_assert_eq!(line.number, i + 1);
      previous = line.number;
    }
  }

  /// Invariant 4: for any lexical spec the validator accepts, names and
  /// patterns are pairwise distinct.
  #[test]
  fn accepted_lexical_rules_have_distinct_names_and_patterns(
    count in 1usize..8,
  ) {
    let lines: Vec<Line> = (0..count)
      .map(|i| {
        let text = format!("token NAME{i} 'pat{i}'");
        Line::new(Rc::new(PathBuf::from("spec.g")), i + 1, text, false)
      })
      .collect();

    let parsed = parse_lexical_section(&lines);
    let (spec, report) = validate_lexical_rules(parsed);
    prop_assert!(report.is_empty());

    let names: std::collections::HashSet<_> = spec.rules().iter().map(|r| r.name.clone()).collect();
    let patterns: std::collections::HashSet<_> = spec.rules().iter().map(|r| r.pattern.clone()).collect();
    prop_assert_eq!(names.len(), spec.rules().len());
    prop_assert_eq!(patterns.len(), spec.rules().len());
  }

  /// Invariant 5: re-validating an already-valid set of lexical lines
  /// produces no new diagnostics.
  #[test]
  fn revalidating_a_valid_spec_is_idempotent(count in 1usize..8) {
    let lines: Vec<Line> = (0..count)
      .map(|i| {
        let text = format!("token NAME{i} 'pat{i}'");
        Line::new(Rc::new(PathBuf::from("spec.g")), i + 1, text, false)
      })
      .collect();

    let (_, first_report) = validate_lexical_rules(parse_lexical_section(&lines));
    prop_assert!(first_report.is_empty());

    let (_, second_report) = validate_lexical_rules(parse_lexical_section(&lines));
    prop_assert!(second_report.is_empty());
  }

  /// Invariant 6: a non-empty `givenName` wins over every translator.
  #[test]
  fn given_name_overrides_both_reference_translators(given in "[a-z][a-zA-Z0-9]{0,12}") {
    let sym = Symbol::RhsNonTerminal { name: "ORIGINAL".to_string(), alt_name: Some(given.clone()) };
    let name = UnresolvedName::VariableName(sym);

    prop_assert_eq!(resolve_name(&name, &BracesTypedTranslator), given.clone());
    prop_assert_eq!(resolve_name(&name, &IndentDynamicTranslator), given);
  }
}
