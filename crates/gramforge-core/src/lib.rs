//! Core of the compiler-compiler pipeline: specification loading,
//! grammar analysis, and AST-node model derivation (§1). Rendering the
//! model into concrete target-language source lives in
//! `gramforge_targets`; copying bundled runtime-support files lives in
//! `gramforge_runtime`.

pub mod analysis;
pub mod ast;
pub mod config;
pub mod error;
pub mod lexical;
pub mod pipeline;
pub mod reader;
pub mod splitter;
pub mod syntactic;
pub mod types;

pub use config::{DebugLevel, PipelineConfig};
pub use error::{Diagnostic, DiagnosticKind, DiagnosticsReport};
pub use pipeline::{CompiledGrammar, GrammarBuilder};
