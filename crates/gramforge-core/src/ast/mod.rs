mod builder;

pub use builder::build_ast_model;
