//! Lexical analysis for both input grammars.
//!
//! The lexer converts raw source text into a token stream using ordered
//! regex patterns. Two pattern sets exist: one for script source and one
//! for signature declarations (the signature set carries no shift tokens
//! so that nested `array<array<real>>` lexes as two `>`).

pub mod lexer;
pub mod tokens;

#[cfg(test)]
mod tests;
