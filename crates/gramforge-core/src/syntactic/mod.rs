mod parser;
mod validator;

pub use parser::parse_syntactic_section;
pub use validator::{validate_syntactic_rules, SyntacticSpec};
