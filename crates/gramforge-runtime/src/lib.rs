//! Bundled runtime-support files (§1: "copying of fixed runtime-support
//! files from a bundled library directory" — an external collaborator
//! the core pipeline hands off to, not part of its design).
//!
//! These are plain Java/Python source text, embedded at compile time and
//! copied verbatim into a target's destination directory alongside the
//! generated AST classes.

use std::{
  io,
  path::Path,
};

/// One bundled file: its destination-relative name and its contents.
pub struct RuntimeFile {
  pub name: &'static str,
  pub contents: &'static str,
}

pub const JAVA_RUNTIME_FILES: &[RuntimeFile] =
  &[RuntimeFile { name: "Token.java", contents: include_str!("../support/java/Token.java") }];

pub const PYTHON_RUNTIME_FILES: &[RuntimeFile] =
  &[RuntimeFile { name: "token.py", contents: include_str!("../support/python/token.py") }];

/// Writes every file in `files` into `dest_dir`, creating it if absent.
pub fn copy_runtime_files(dest_dir: &Path, files: &[RuntimeFile]) -> io::Result<()> {
  std::fs::create_dir_all(dest_dir)?;
  for file in files {
    std::fs::write(dest_dir.join(file.name), file.contents)?;
  }
  Ok(())
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn bundled_files_are_non_empty() {
    assert!(!JAVA_RUNTIME_FILES.is_empty());
    assert!(!PYTHON_RUNTIME_FILES.is_empty());
    for f in JAVA_RUNTIME_FILES.iter().chain(PYTHON_RUNTIME_FILES) {
      assert!(!f.contents.is_empty());
    }
  }

  #[test]
  fn copy_writes_every_file() {
    let dir = tempfile::tempdir().unwrap();
    copy_runtime_files(dir.path(), JAVA_RUNTIME_FILES).unwrap();
    assert!(dir.path().join("Token.java").exists());
  }
}
