//! Error types shared by the lexer and both parsers.
//!
//! Every failure carries the byte offset of the deepest successful
//! partial parse plus the name of the unit being parsed.

pub mod errors;

#[cfg(test)]
mod tests;
