//! Facade crate re-exporting the pipeline (`gramforge_core`), the
//! target translators (`gramforge_targets`) and the bundled
//! runtime-support files (`gramforge_runtime`) behind one dependency,
//! for consumers that want the whole compiler-compiler without pinning
//! each crate individually.

pub use gramforge_core::*;
pub use gramforge_runtime as runtime;
pub use gramforge_targets as targets;
