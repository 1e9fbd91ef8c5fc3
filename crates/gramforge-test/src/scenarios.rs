//! The end-to-end scenarios named in the testable-properties section:
//! two render targets, include resolution (direct and circular), an
//! LL(1) conflict, and a lexical validation pass.

use std::{fs, path::Path};

use gramforge_core::{
  config::PipelineConfig,
  error::DiagnosticKind,
  lexical::{parse_lexical_section, validate_lexical_rules},
  pipeline::GrammarBuilder,
  reader::SourceReader,
  types::line::Line,
};
use gramforge_targets::{render_braces, render_indent};

fn write(dir: &Path, name: &str, contents: &str) -> std::path::PathBuf {
  let path = dir.join(name);
  fs::write(&path, contents).unwrap();
  path
}

fn line(n: usize, s: &str) -> Line {
  use std::{path::PathBuf, rc::Rc};
  Line::new(Rc::new(PathBuf::from("spec.g")), n, s, false)
}

/// S1 / S2 — a two-field class rendered for both reference targets.
#[test]
fn simple_class_renders_for_both_targets() {
  let dir = tempfile::tempdir().unwrap();
  let spec = write(
    dir.path(),
    "spec.g",
    "%\n<cat> ::= <tail> <claws>\n<tail> ::= SOMETOK\n<claws> ::= OTHERTOK\n",
  );

  let (compiled, report) = GrammarBuilder::new(PipelineConfig::default()).add_source(&spec).unwrap().build();
  assert!(report.is_empty(), "{:?}", report);
  let compiled = compiled.unwrap();

  let braces = render_braces(&compiled.classes);
  let cat = braces.iter().find(|f| f.class_name == "Cat").unwrap();
  assert_eq!(
    cat.contents,
    "public class Cat {\n    public Tail tail;\n    public Claws claws;\n\n    public Cat(Tail tail, Claws claws) {\n        this.tail = tail;\n        this.claws = claws;\n    }\n}\n"
  );

  let indent = render_indent(&compiled.classes);
  let cat = indent.iter().find(|f| f.class_name == "Cat").unwrap();
  assert_eq!(
    cat.contents,
    "class Cat:\n    def __init__(self, tail: Tail, claws: Claws):\n        self.tail = tail\n        self.claws = claws\n"
  );
}

/// S3 — an `%include` splices the included file's lines in place.
///
/// Mirrors the scenario's `/a/b/f` including `/a/c/g` via `../c/g`.
#[test]
fn include_resolution_splices_lines_in_textual_order() {
  let root = tempfile::tempdir().unwrap();
  fs::create_dir_all(root.path().join("b")).unwrap();
  fs::create_dir_all(root.path().join("c")).unwrap();

  write(&root.path().join("c"), "g", "alpha\nbravo\n");
  let f_path = write(&root.path().join("b"), "f", "one\n%include ../c/g\nthree\n");

  let lines = SourceReader::new().read(&f_path).unwrap();
  assert_eq!(lines.len(), 4);
  assert_eq!(lines[0].string.as_ref(), "one");
  assert_eq!(lines[0].number, 1);
  assert_eq!(lines[1].string.as_ref(), "alpha");
  assert_eq!(lines[1].number, 1);
  assert_eq!(lines[2].string.as_ref(), "bravo");
  assert_eq!(lines[2].number, 2);
  assert_eq!(lines[3].string.as_ref(), "three");
  assert_eq!(lines[3].number, 3);
}

/// S4 — a root file that (transitively) includes itself fails with
/// `IncludeCycle`.
#[test]
fn circular_include_is_rejected() {
  let dir = tempfile::tempdir().unwrap();
  write(dir.path(), "root.g", "%include g.g\n");
  write(dir.path(), "g.g", "%include root.g\n");

  let err = SourceReader::new().read(&dir.path().join("root.g")).unwrap_err();
  assert!(matches!(err.kind, DiagnosticKind::IncludeCycle { .. }));
}

/// S5 — `<s>:First ::= A B | <s>:Second ::= A C` conflicts on the shared
/// prefix `A`. Distinct alt names keep both alternatives grouped under
/// one nonterminal by the validator (it rejects same-named productions
/// before they ever reach LL(1) analysis) while still giving the
/// analyzer two alternatives to find the conflict in.
#[test]
fn ll1_conflict_on_shared_prefix() {
  let dir = tempfile::tempdir().unwrap();
  let spec = write(dir.path(), "spec.g", "%\n<s>:First ::= A B\n<s>:Second ::= A C\n");

  let (compiled, report) = GrammarBuilder::new(PipelineConfig::default()).add_source(&spec).unwrap().build();
  assert!(compiled.is_none());
  assert!(report.iter().any(|d| matches!(d.kind, DiagnosticKind::Ll1Conflict { ref nonterminal, .. } if nonterminal == "s")));
}

/// S6 — an invalid lexical name is flagged; a valid one alongside it is
/// still accepted.
#[test]
fn lexical_validation_flags_bad_name_only() {
  let lines = vec![line(1, "skip WHITESPACE '\\s+'"), line(2, "token 1MINUS '-'")];
  let parsed = parse_lexical_section(&lines);
  let (spec, report) = validate_lexical_rules(parsed);

  assert_eq!(spec.rules().len(), 1);
  assert_eq!(spec.rules()[0].name, "WHITESPACE");
  assert_eq!(report.len(), 1);
  assert!(matches!(report.iter().next().unwrap().kind, DiagnosticKind::InvalidNameFormat { ref name } if name == "1MINUS"));
}
