//! Top-level orchestration, wiring together every stage from §2's
//! pipeline table. This is the one place that knows the full stage
//! order and the gating rule from §7: "generation does not run if any
//! earlier stage produced errors."

use std::path::Path;

use tracing::{debug, info};

use crate::{
  analysis::{self, GrammarAnalysis},
  ast::build_ast_model,
  config::PipelineConfig,
  error::{Diagnostic, DiagnosticsReport},
  lexical::{parse_lexical_section, validate_lexical_rules, LexicalSpec},
  reader::SourceReader,
  splitter::split_sections,
  syntactic::{parse_syntactic_section, validate_syntactic_rules, SyntacticSpec},
  types::{ast_class::AstClass, line::Line, section::Section},
};

/// Everything downstream stages need: the validated lexical and
/// syntactic specs, the grammar analysis, the derived AST class model,
/// and the semantic sections for passthrough copying.
pub struct CompiledGrammar {
  pub lexical: LexicalSpec,
  pub syntactic: SyntacticSpec,
  pub analysis: GrammarAnalysis,
  pub classes: Vec<AstClass>,
  pub semantic_sections: Vec<Section>,
}

#[derive(Default)]
pub struct GrammarBuilder {
  config: PipelineConfig,
  lines: Vec<Line>,
  report: DiagnosticsReport,
}

impl GrammarBuilder {
  pub fn new(config: PipelineConfig) -> Self {
    Self { config, lines: Vec::new(), report: DiagnosticsReport::new() }
  }

  /// Reads and appends a root specification file's fully-expanded line
  /// stream. Fails fast on an unrecoverable read error (include cycle,
  /// missing file) rather than collecting it — see §5.
  pub fn add_source(mut self, path: &Path) -> Result<Self, Diagnostic> {
    info!(path = %path.display(), "reading specification");
    let lines = SourceReader::new().read(path)?;
    self.lines.extend(lines);
    Ok(self)
  }

  pub fn has_errors(&self) -> bool {
    !self.report.is_empty()
  }

  pub fn report(&self) -> &DiagnosticsReport {
    &self.report
  }

  /// Runs the full pipeline. Returns `None` for the compiled grammar
  /// when lexical or syntactic validation produced any diagnostic — the
  /// grammar graph and AST model are not built over data that already
  /// failed validation.
  pub fn build(mut self) -> (Option<CompiledGrammar>, DiagnosticsReport) {
    let root_anchor = self.lines.first().cloned();

    let mut sections = split_sections(std::mem::take(&mut self.lines));
    if sections.is_empty() {
      sections.push(Section::default());
    }
    while sections.len() < 2 {
      sections.push(Section::default());
    }

    let lexical_lines = std::mem::take(&mut sections[0]).lines;
    let syntactic_lines = std::mem::take(&mut sections[1]).lines;
    let semantic_sections = sections.split_off(2);

    let parsed_lexical = parse_lexical_section(&lexical_lines);
    let (lexical, lexical_report) = validate_lexical_rules(parsed_lexical);
    debug!(rules = lexical.rules().len(), "lexical section validated");
    self.report.extend(lexical_report);

    let (parsed_syntactic, syntactic_parse_report) = parse_syntactic_section(&syntactic_lines);
    self.report.extend(syntactic_parse_report);

    let (syntactic, syntactic_validate_report) = validate_syntactic_rules(parsed_syntactic);
    debug!(rules = syntactic.rules().len(), "syntactic section validated");
    self.report.extend(syntactic_validate_report);

    let analysis = analysis::build(&syntactic);

    if self.config.check_ll1 {
      if let Some(anchor) = root_anchor.clone() {
        let ll1_report = analysis::check_ll1(&analysis, &syntactic, anchor);
        self.report.extend(ll1_report);
      }
    }

    let (classes, ast_report) = build_ast_model(&syntactic);
    self.report.extend(ast_report);

    if self.has_errors() {
      return (None, self.report);
    }

    (Some(CompiledGrammar { lexical, syntactic, analysis, classes, semantic_sections }), self.report)
  }
}
