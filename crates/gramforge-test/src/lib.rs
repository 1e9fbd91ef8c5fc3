//! End-to-end coverage for the compiler-compiler pipeline, exercising
//! `gramforge_core`, `gramforge_targets` and `gramforge_runtime`
//! together the way the `gramforge` CLI wires them.

#[cfg(test)]
mod scenarios;

#[cfg(test)]
mod properties;
