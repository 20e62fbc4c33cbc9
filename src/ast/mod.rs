//! AST (Abstract Syntax Tree) module
//! Contains all definitions related to the AST structure
//!
//! Submodules:
//! - ops: operator families (arithmetic, boolean, comparison, unary)
//! - expressions: literals, variables with accessor chains, expressions
//! - statements: statement forms and whole programs

pub mod expressions;
pub mod ops;
pub mod statements;
