//! Section Splitter (§4.2): partitions the expanded `Line` stream on
//! any top-level `%` divider (a line whose trimmed content is exactly
//! `%` and which is not inside a verbatim-code block).

use crate::types::{line::Line, section::Section};

pub fn split_sections(lines: Vec<Line>) -> Vec<Section> {
  let mut sections = Vec::new();
  let mut current = Vec::new();

  for line in lines {
    if !line.is_in_block && line.trimmed() == "%" {
      sections.push(Section::new(std::mem::take(&mut current)));
    } else {
      current.push(line);
    }
  }
  sections.push(Section::new(current));

  sections
}

#[cfg(test)]
mod tests {
  use super::*;
  use std::{path::PathBuf, rc::Rc};

  fn line(n: usize, s: &str) -> Line {
    Line::new(Rc::new(PathBuf::from("spec.g")), n, s, false)
  }

  #[test]
  fn splits_on_bare_percent() {
    let lines = vec![line(1, "token A 'a'"), line(2, "%"), line(3, "<s> ::= A")];
    let sections = split_sections(lines);
    assert_eq!(sections.len(), 2);
    assert_eq!(sections[0].lines.len(), 1);
    assert_eq!(sections[1].lines.len(), 1);
  }

  #[test]
  fn preserves_trailing_empty_sections() {
    let lines = vec![line(1, "token A 'a'"), line(2, "%"), line(3, "<s> ::= A"), line(4, "%")];
    let sections = split_sections(lines);
    assert_eq!(sections.len(), 3);
    assert!(sections[2].is_empty());
  }

  #[test]
  fn percent_inside_block_is_not_a_divider() {
    let mut inside = line(2, "%");
    inside.is_in_block = true;
    let lines = vec![line(1, "%%%"), inside, line(3, "%%%")];
    let sections = split_sections(lines);
    assert_eq!(sections.len(), 1);
    assert_eq!(sections[0].lines.len(), 3);
  }
}
