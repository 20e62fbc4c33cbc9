//! Parser for builtin signature declarations.
//!
//! A separate declarative mini-language describes the types of builtin
//! globals, the signatures of builtin functions, and enumerations. It is
//! lexed with its own pattern set (notably without shift tokens, so
//! nested generics close with two `>` tokens) and parsed by recursive
//! descent into the type model of `crate::types`.

pub mod lookups;
pub mod parser;
