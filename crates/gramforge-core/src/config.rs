//! Pipeline configuration, mirroring the CLI flags of §6 but usable
//! directly by library consumers that drive the pipeline without going
//! through the `gramforge` binary.

/// Verbosity level for `tracing` spans emitted while the pipeline runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum DebugLevel {
  Quiet,
  Verbose,
  Trace,
}

impl DebugLevel {
  pub fn from_flag(level: u8) -> Self {
    match level {
      0 => DebugLevel::Quiet,
      1 => DebugLevel::Verbose,
      _ => DebugLevel::Trace,
    }
  }
}

impl Default for DebugLevel {
  fn default() -> Self {
    DebugLevel::Quiet
  }
}

/// Which stages of the pipeline actually run. Every field defaults to
/// `true`; the CLI's `--LL1=bool`, `--parser=bool`, `--Token=bool`,
/// `--semantics=bool` and `--python_semantics=bool` flags flip them off.
#[derive(Debug, Clone, Copy)]
pub struct PipelineConfig {
  pub check_ll1: bool,
  pub generate_parser: bool,
  pub generate_lexer: bool,
  pub generate_braces_semantics: bool,
  pub generate_indent_semantics: bool,
  pub write_files: bool,
  pub debug: DebugLevel,
}

impl Default for PipelineConfig {
  fn default() -> Self {
    Self {
      check_ll1: true,
      generate_parser: true,
      generate_lexer: true,
      generate_braces_semantics: true,
      generate_indent_semantics: true,
      write_files: true,
      debug: DebugLevel::default(),
    }
  }
}
