//! Lexical Parser (§4.3): recognizes the three ordered line shapes of
//! the lexical section.
//!
//! We pick the strictest consistent interpretation per the open design
//! question in §9: `skip` and `token` are mutually exclusive keywords,
//! and a trailing comment must begin with `#` after optional whitespace
//! and run to end of line (no support for multiple separate `#` groups).

use regex::Regex;
use std::sync::OnceLock;

use crate::types::{line::Line, lexical_rule::LexicalRule};

fn rule_regex() -> &'static Regex {
  static RE: OnceLock<Regex> = OnceLock::new();
  RE.get_or_init(|| {
    Regex::new(r#"^(?:(skip|token)\s+)?(\S+)\s+(?:'([^']*)'|"([^"]*)")\s*(?:#.*)?$"#).unwrap()
  })
}

pub enum LexicalParseResult {
  Recognized(LexicalRule),
  Unrecognized(Line),
}

/// Recognizes every non-blank, non-comment line of the lexical section.
/// Blank and comment lines never reach this stage — the reader already
/// dropped them (§4.1) — so every `Line` here is either recognized or
/// retained as `Unrecognized` for the validator to flag.
pub fn parse_lexical_section(lines: &[Line]) -> Vec<LexicalParseResult> {
  lines.iter().map(|line| parse_line(line)).collect()
}

fn parse_line(line: &Line) -> LexicalParseResult {
  let trimmed = line.trimmed();
  match rule_regex().captures(trimmed) {
    Some(caps) => {
      let is_skip = caps.get(1).map(|m| m.as_str() == "skip").unwrap_or(false);
      let name = caps.get(2).unwrap().as_str().to_string();
      let pattern = caps
        .get(3)
        .or_else(|| caps.get(4))
        .map(|m| m.as_str().to_string())
        .unwrap_or_default();
      LexicalParseResult::Recognized(LexicalRule::new(line.clone(), is_skip, name, pattern))
    }
    None => LexicalParseResult::Unrecognized(line.clone()),
  }
}
