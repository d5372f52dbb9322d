//! `rox`: a tree-walking interpreter for the Lox language.
//!
//! The pipeline is `Scanner` → `Parser` → `Resolver` → `Interpreter`, driven
//! end to end by [`lox::Lox`].

pub mod ast_printer;
pub mod callable;
pub mod class;
pub mod environment;
pub mod error;
pub mod expr;
pub mod interpreter;
pub mod lox;
pub mod native;
pub mod parser;
pub mod resolver;
pub mod scanner;
pub mod stmt;
pub mod token;
pub mod value;
