use std::{path::PathBuf, rc::Rc};

/// An immutable record of one physical line in the fully-expanded source
/// stream, after `%include` resolution.
///
/// `number` is the 1-based physical line index *within the file named by
/// `path`* — it does not reset or continue across an include boundary.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Line {
  pub path: Rc<PathBuf>,
  pub number: usize,
  pub string: Rc<str>,
  pub is_in_block: bool,
}

impl Line {
  pub fn new(path: Rc<PathBuf>, number: usize, string: impl Into<Rc<str>>, is_in_block: bool) -> Self {
    Self { path, number, string: string.into(), is_in_block }
  }

  pub fn trimmed(&self) -> &str {
    self.string.trim()
  }

  pub fn is_blank(&self) -> bool {
    self.trimmed().is_empty()
  }

  pub fn is_comment(&self) -> bool {
    self.trimmed().starts_with('#')
  }
}

impl std::fmt::Display for Line {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "{}:{}", self.path.display(), self.number)
  }
}
