//! Parser for script source.
//!
//! Transforms a token stream into an AST. Expressions use a Pratt parser
//! with NUD (null denotation) and LED (left denotation) handlers and an
//! explicit binding-power table that reproduces the language's declared
//! precedence levels exactly. Statements dispatch on their leading token
//! through a handler table, with assignment-or-expression as fallback.

pub mod expr;
pub mod lookups;
pub mod parser;
pub mod stmt;
