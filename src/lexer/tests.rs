//! Unit tests for the lexer module.
//!
//! This module contains tests for tokenization including:
//! - Keywords and identifiers
//! - Numeric literals (integers and reals)
//! - String literals with escape sequences
//! - Operators, accessor markers and punctuation
//! - Comments
//! - The signature token set
//! - Error cases

use super::{
    lexer::{tokenize, tokenize_signature},
    tokens::TokenKind,
};

#[test]
fn test_tokenize_keywords() {
    let source = "var if else while do until for repeat with switch case default break continue exit return begin end div mod".to_string();
    let tokens = tokenize(source, Some("test.gml".to_string())).unwrap();

    assert_eq!(tokens[0].kind, TokenKind::Var);
    assert_eq!(tokens[1].kind, TokenKind::If);
    assert_eq!(tokens[2].kind, TokenKind::Else);
    assert_eq!(tokens[3].kind, TokenKind::While);
    assert_eq!(tokens[4].kind, TokenKind::Do);
    assert_eq!(tokens[5].kind, TokenKind::Until);
    assert_eq!(tokens[6].kind, TokenKind::For);
    assert_eq!(tokens[7].kind, TokenKind::Repeat);
    assert_eq!(tokens[8].kind, TokenKind::With);
    assert_eq!(tokens[9].kind, TokenKind::Switch);
    assert_eq!(tokens[10].kind, TokenKind::Case);
    assert_eq!(tokens[11].kind, TokenKind::Default);
    assert_eq!(tokens[12].kind, TokenKind::Break);
    assert_eq!(tokens[13].kind, TokenKind::Continue);
    assert_eq!(tokens[14].kind, TokenKind::Exit);
    assert_eq!(tokens[15].kind, TokenKind::Return);
    assert_eq!(tokens[16].kind, TokenKind::Begin);
    assert_eq!(tokens[17].kind, TokenKind::End);
    assert_eq!(tokens[18].kind, TokenKind::Div);
    assert_eq!(tokens[19].kind, TokenKind::Mod);
    assert_eq!(tokens[20].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_identifiers() {
    let source = "foo bar baz_123 _underscore divide modulo".to_string();
    let tokens = tokenize(source, Some("test.gml".to_string())).unwrap();

    assert_eq!(tokens[0].kind, TokenKind::Identifier);
    assert_eq!(tokens[0].value, "foo");
    assert_eq!(tokens[1].kind, TokenKind::Identifier);
    assert_eq!(tokens[1].value, "bar");
    assert_eq!(tokens[2].kind, TokenKind::Identifier);
    assert_eq!(tokens[2].value, "baz_123");
    assert_eq!(tokens[3].kind, TokenKind::Identifier);
    assert_eq!(tokens[3].value, "_underscore");
    // Keywords only match exactly, not as prefixes
    assert_eq!(tokens[4].kind, TokenKind::Identifier);
    assert_eq!(tokens[4].value, "divide");
    assert_eq!(tokens[5].kind, TokenKind::Identifier);
    assert_eq!(tokens[5].value, "modulo");
    assert_eq!(tokens[6].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_numbers() {
    let source = "42 3.14 0 100.001".to_string();
    let tokens = tokenize(source, Some("test.gml".to_string())).unwrap();

    assert_eq!(tokens[0].kind, TokenKind::Number);
    assert_eq!(tokens[0].value, "42");
    assert_eq!(tokens[1].kind, TokenKind::Number);
    assert_eq!(tokens[1].value, "3.14");
    assert_eq!(tokens[2].kind, TokenKind::Number);
    assert_eq!(tokens[2].value, "0");
    assert_eq!(tokens[3].kind, TokenKind::Number);
    assert_eq!(tokens[3].value, "100.001");
    assert_eq!(tokens[4].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_strings() {
    let source = "\"hello\" \"two words\"".to_string();
    let tokens = tokenize(source, Some("test.gml".to_string())).unwrap();

    assert_eq!(tokens[0].kind, TokenKind::String);
    assert_eq!(tokens[0].value, "hello");
    assert_eq!(tokens[1].kind, TokenKind::String);
    assert_eq!(tokens[1].value, "two words");
    assert_eq!(tokens[2].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_string_escapes() {
    let source = "\"line\\nbreak\\ttab\\\\slash\\\"quote\\x41\"".to_string();
    let tokens = tokenize(source, Some("test.gml".to_string())).unwrap();

    assert_eq!(tokens[0].kind, TokenKind::String);
    assert_eq!(tokens[0].value, "line\nbreak\ttab\\slash\"quoteA");
}

#[test]
fn test_tokenize_operators() {
    let source = "+ - * / % == != <= < >= > && || ^^ & | ^ << >> ~ ! =".to_string();
    let tokens = tokenize(source, Some("test.gml".to_string())).unwrap();

    let expected = [
        TokenKind::Plus,
        TokenKind::Dash,
        TokenKind::Star,
        TokenKind::Slash,
        TokenKind::Percent,
        TokenKind::Equals,
        TokenKind::NotEquals,
        TokenKind::LessEquals,
        TokenKind::Less,
        TokenKind::GreaterEquals,
        TokenKind::Greater,
        TokenKind::And,
        TokenKind::Or,
        TokenKind::Xor,
        TokenKind::BitAnd,
        TokenKind::BitOr,
        TokenKind::BitXor,
        TokenKind::Shl,
        TokenKind::Shr,
        TokenKind::Tilde,
        TokenKind::Not,
        TokenKind::Assignment,
        TokenKind::EOF,
    ];

    for (token, kind) in tokens.iter().zip(expected.iter()) {
        assert_eq!(token.kind, *kind);
    }
}

#[test]
fn test_tokenize_compound_assignment() {
    let source = "+= -= *= /= |= &= ^= ++ --".to_string();
    let tokens = tokenize(source, Some("test.gml".to_string())).unwrap();

    assert_eq!(tokens[0].kind, TokenKind::PlusEquals);
    assert_eq!(tokens[1].kind, TokenKind::MinusEquals);
    assert_eq!(tokens[2].kind, TokenKind::StarEquals);
    assert_eq!(tokens[3].kind, TokenKind::SlashEquals);
    assert_eq!(tokens[4].kind, TokenKind::OrEquals);
    assert_eq!(tokens[5].kind, TokenKind::AndEquals);
    assert_eq!(tokens[6].kind, TokenKind::XorEquals);
    assert_eq!(tokens[7].kind, TokenKind::PlusPlus);
    assert_eq!(tokens[8].kind, TokenKind::MinusMinus);
    assert_eq!(tokens[9].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_punctuation() {
    let source = "[ ] { } ( ) . ; : ? , # @".to_string();
    let tokens = tokenize(source, Some("test.gml".to_string())).unwrap();

    assert_eq!(tokens[0].kind, TokenKind::OpenBracket);
    assert_eq!(tokens[1].kind, TokenKind::CloseBracket);
    assert_eq!(tokens[2].kind, TokenKind::OpenCurly);
    assert_eq!(tokens[3].kind, TokenKind::CloseCurly);
    assert_eq!(tokens[4].kind, TokenKind::OpenParen);
    assert_eq!(tokens[5].kind, TokenKind::CloseParen);
    assert_eq!(tokens[6].kind, TokenKind::Dot);
    assert_eq!(tokens[7].kind, TokenKind::Semicolon);
    assert_eq!(tokens[8].kind, TokenKind::Colon);
    assert_eq!(tokens[9].kind, TokenKind::Question);
    assert_eq!(tokens[10].kind, TokenKind::Comma);
    assert_eq!(tokens[11].kind, TokenKind::Hash);
    assert_eq!(tokens[12].kind, TokenKind::At);
    assert_eq!(tokens[13].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_accessor_spans_are_adjacent() {
    let source = "a[|0]".to_string();
    let tokens = tokenize(source, Some("test.gml".to_string())).unwrap();

    assert_eq!(tokens[1].kind, TokenKind::OpenBracket);
    assert_eq!(tokens[2].kind, TokenKind::BitOr);
    assert_eq!(tokens[1].span.end.0, tokens[2].span.start.0);
}

#[test]
fn test_tokenize_line_comment() {
    let source = "x // this is ignored\ny".to_string();
    let tokens = tokenize(source, Some("test.gml".to_string())).unwrap();

    assert_eq!(tokens[0].kind, TokenKind::Identifier);
    assert_eq!(tokens[0].value, "x");
    assert_eq!(tokens[1].kind, TokenKind::Identifier);
    assert_eq!(tokens[1].value, "y");
    assert_eq!(tokens[2].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_block_comment() {
    let source = "x /* spans\nmultiple\nlines */ y".to_string();
    let tokens = tokenize(source, Some("test.gml".to_string())).unwrap();

    assert_eq!(tokens[0].value, "x");
    assert_eq!(tokens[1].value, "y");
    assert_eq!(tokens[2].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_unrecognised_token() {
    let source = "x = `".to_string();
    let result = tokenize(source, Some("test.gml".to_string()));

    assert!(result.is_err());
    let error = result.unwrap_err();
    assert_eq!(error.get_error_name(), "UnrecognisedToken");
    assert_eq!(error.get_position().0, 4);
}

#[test]
fn test_tokenize_signature_keywords() {
    let source = "const enum real".to_string();
    let tokens = tokenize_signature(source, Some("builtins".to_string())).unwrap();

    assert_eq!(tokens[0].kind, TokenKind::Const);
    assert_eq!(tokens[1].kind, TokenKind::Enum);
    // Type names are plain identifiers at the token level
    assert_eq!(tokens[2].kind, TokenKind::Identifier);
    assert_eq!(tokens[3].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_signature_symbols() {
    let source = "f: (x: real, *real) -> array<real>".to_string();
    let tokens = tokenize_signature(source, Some("builtins".to_string())).unwrap();

    let expected = [
        TokenKind::Identifier,
        TokenKind::Colon,
        TokenKind::OpenParen,
        TokenKind::Identifier,
        TokenKind::Colon,
        TokenKind::Identifier,
        TokenKind::Comma,
        TokenKind::Star,
        TokenKind::Identifier,
        TokenKind::CloseParen,
        TokenKind::Arrow,
        TokenKind::Identifier,
        TokenKind::Less,
        TokenKind::Identifier,
        TokenKind::Greater,
        TokenKind::EOF,
    ];

    for (token, kind) in tokens.iter().zip(expected.iter()) {
        assert_eq!(token.kind, *kind);
    }
}

#[test]
fn test_tokenize_signature_nested_generics() {
    // No shift token in the signature set: `>>` is two `>`
    let source = "array<array<real>>".to_string();
    let tokens = tokenize_signature(source, Some("builtins".to_string())).unwrap();

    assert_eq!(tokens[0].kind, TokenKind::Identifier);
    assert_eq!(tokens[1].kind, TokenKind::Less);
    assert_eq!(tokens[2].kind, TokenKind::Identifier);
    assert_eq!(tokens[3].kind, TokenKind::Less);
    assert_eq!(tokens[4].kind, TokenKind::Identifier);
    assert_eq!(tokens[5].kind, TokenKind::Greater);
    assert_eq!(tokens[6].kind, TokenKind::Greater);
    assert_eq!(tokens[7].kind, TokenKind::EOF);
}
