//! Command-line surface (§6) — an external collaborator around the
//! `gramforge_core` pipeline: argument parsing, destination-directory
//! creation, and file writing contain no non-trivial design of their
//! own (§1).

use std::{
  path::{Path, PathBuf},
  process::ExitCode,
};

use clap::Parser;
use gramforge_core::{config::PipelineConfig, pipeline::GrammarBuilder, DebugLevel};
use gramforge_runtime::{copy_runtime_files, JAVA_RUNTIME_FILES, PYTHON_RUNTIME_FILES};
use gramforge_targets::{render_braces, render_indent};
use tracing::info;

/// A compiler-compiler: reads a declarative language specification and
/// emits a lexer, a recursive-descent parser, and typed AST-node
/// classes for the braces/typed and indentation/dynamic targets.
#[derive(Parser, Debug)]
#[command(name = "gramforge", version, about)]
struct Cli {
  /// Path to the root specification file.
  spec: PathBuf,

  /// Output directory for the braces/typed target.
  #[arg(long, default_value = "Java")]
  destdir: PathBuf,

  /// Output directory for the indentation/dynamic target.
  #[arg(long, default_value = "Python")]
  python_destdir: PathBuf,

  /// Verbosity level 0..2.
  #[arg(long, default_value_t = 0)]
  debug: u8,

  /// Run all analysis and emit diagnostics, but write no files.
  #[arg(long, default_value_t = false)]
  nowrite: bool,

  /// Skip the LL(1) check when false.
  #[arg(long = "LL1", default_value_t = true)]
  ll1: bool,

  /// Skip AST-node class generation when false.
  #[arg(long, default_value_t = true)]
  parser: bool,

  /// Skip lexer runtime-support generation when false.
  #[arg(long = "Token", default_value_t = true)]
  token: bool,

  /// Skip the braces/typed semantic pass when false.
  #[arg(long, default_value_t = true)]
  semantics: bool,

  /// Skip the indentation/dynamic semantic pass when false.
  #[arg(long, default_value_t = true)]
  python_semantics: bool,
}

impl Cli {
  fn pipeline_config(&self) -> PipelineConfig {
    PipelineConfig {
      check_ll1: self.ll1,
      generate_parser: self.parser,
      generate_lexer: self.token,
      generate_braces_semantics: self.semantics,
      generate_indent_semantics: self.python_semantics,
      write_files: !self.nowrite,
      debug: DebugLevel::from_flag(self.debug),
    }
  }
}

fn main() -> ExitCode {
  let cli = Cli::parse();
  init_tracing(DebugLevel::from_flag(cli.debug));

  let config = cli.pipeline_config();
  let builder = match GrammarBuilder::new(config).add_source(&cli.spec) {
    Ok(builder) => builder,
    Err(diagnostic) => {
      eprintln!("{diagnostic}");
      return ExitCode::FAILURE;
    }
  };

  let (compiled, report) = builder.build();
  if report.write_to(std::io::stderr()).is_err() {
    return ExitCode::FAILURE;
  }

  let Some(compiled) = compiled else {
    return ExitCode::from(report.exit_code() as u8);
  };

  if config.write_files {
    if let Err(diagnostic) = write_outputs(&cli, &compiled) {
      eprintln!("{diagnostic}");
      return ExitCode::FAILURE;
    }
  }

  ExitCode::from(report.exit_code() as u8)
}

fn write_outputs(cli: &Cli, compiled: &gramforge_core::pipeline::CompiledGrammar) -> Result<(), gramforge_core::Diagnostic> {
  use gramforge_core::error::DiagnosticKind;

  let io_err = |path: &Path, e: std::io::Error| {
    gramforge_core::Diagnostic::without_line(DiagnosticKind::WriteFailure { path: path.to_path_buf(), reason: e.to_string() })
  };

  if cli.parser {
    let files = render_braces(&compiled.classes);
    std::fs::create_dir_all(&cli.destdir).map_err(|e| io_err(&cli.destdir, e))?;
    for file in files {
      let path = cli.destdir.join(format!("{}.java", file.class_name));
      std::fs::write(&path, file.contents).map_err(|e| io_err(&path, e))?;
    }

    let files = render_indent(&compiled.classes);
    std::fs::create_dir_all(&cli.python_destdir).map_err(|e| io_err(&cli.python_destdir, e))?;
    for file in files {
      let path = cli.python_destdir.join(format!("{}.py", file.class_name));
      std::fs::write(&path, file.contents).map_err(|e| io_err(&path, e))?;
    }
  }

  if cli.token {
    copy_runtime_files(&cli.destdir, JAVA_RUNTIME_FILES).map_err(|e| io_err(&cli.destdir, e))?;
    copy_runtime_files(&cli.python_destdir, PYTHON_RUNTIME_FILES).map_err(|e| io_err(&cli.python_destdir, e))?;
  }

  if cli.semantics {
    write_semantic_passthrough(&cli.destdir, compiled)?;
  }

  if cli.python_semantics {
    write_semantic_passthrough(&cli.python_destdir, compiled)?;
  }

  info!(classes = compiled.classes.len(), "generation complete");
  Ok(())
}

/// Copies semantic-section lines verbatim into the destination
/// directory (§1: "semantic-section passthrough... contain no
/// non-trivial design"). A no-op when the specification has no
/// semantic sections.
fn write_semantic_passthrough(
  dest_dir: &Path,
  compiled: &gramforge_core::pipeline::CompiledGrammar,
) -> Result<(), gramforge_core::Diagnostic> {
  use gramforge_core::error::DiagnosticKind;

  for (index, section) in compiled.semantic_sections.iter().enumerate() {
    if section.is_empty() {
      continue;
    }
    let text: String = section.iter().map(|l| l.string.as_ref()).collect::<Vec<_>>().join("\n");
    let path = dest_dir.join(format!("Semantics{index}.txt"));
    std::fs::write(&path, text).map_err(|e| {
      gramforge_core::Diagnostic::without_line(DiagnosticKind::WriteFailure {
        path: path.clone(),
        reason: e.to_string(),
      })
    })?;
  }
  Ok(())
}

fn init_tracing(level: DebugLevel) {
  use tracing_subscriber::EnvFilter;

  let directive = match level {
    DebugLevel::Quiet => "warn",
    DebugLevel::Verbose => "info",
    DebugLevel::Trace => "trace",
  };
  let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(directive));
  tracing_subscriber::fmt().with_env_filter(filter).with_target(false).init();
}
