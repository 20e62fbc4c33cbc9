use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

use crate::Span;

lazy_static! {
    /// Reserved words of the script grammar. A reserved word is never
    /// an `Identifier`, so it can never parse as a variable name.
    pub static ref RESERVED_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("var", TokenKind::Var);
        map.insert("if", TokenKind::If);
        map.insert("else", TokenKind::Else);
        map.insert("while", TokenKind::While);
        map.insert("do", TokenKind::Do);
        map.insert("until", TokenKind::Until);
        map.insert("for", TokenKind::For);
        map.insert("repeat", TokenKind::Repeat);
        map.insert("with", TokenKind::With);
        map.insert("switch", TokenKind::Switch);
        map.insert("case", TokenKind::Case);
        map.insert("default", TokenKind::Default);
        map.insert("break", TokenKind::Break);
        map.insert("continue", TokenKind::Continue);
        map.insert("exit", TokenKind::Exit);
        map.insert("return", TokenKind::Return);
        map.insert("begin", TokenKind::Begin);
        map.insert("end", TokenKind::End);
        map.insert("div", TokenKind::Div);
        map.insert("mod", TokenKind::Mod);
        map
    };

    /// Reserved words of the signature grammar.
    pub static ref SIGNATURE_RESERVED_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("const", TokenKind::Const);
        map.insert("enum", TokenKind::Enum);
        map
    };
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    EOF,
    Number,
    String,
    Identifier,

    OpenBracket,
    CloseBracket,
    OpenCurly,
    CloseCurly,
    OpenParen,
    CloseParen,

    Assignment, // =
    Equals,     // ==
    Not,        // !
    NotEquals,  // !=

    Less,
    LessEquals,
    Greater,
    GreaterEquals,

    And, // &&
    Or,  // ||
    Xor, // ^^

    BitAnd,
    BitOr,
    BitXor,
    Shl,
    Shr,
    Tilde,

    Dot,
    Semicolon,
    Colon,
    Question,
    Comma,
    Hash,
    At,
    Arrow,

    PlusPlus,
    MinusMinus,
    PlusEquals,
    MinusEquals,
    StarEquals,
    SlashEquals,
    AndEquals,
    OrEquals,
    XorEquals,

    Plus,
    Dash,
    Star,
    Slash,
    Percent,

    // Reserved (script)
    Var,
    If,
    Else,
    While,
    Do,
    Until,
    For,
    Repeat,
    With,
    Switch,
    Case,
    Default,
    Break,
    Continue,
    Exit,
    Return,
    Begin,
    End,
    Div,
    Mod,

    // Reserved (signature)
    Const,
    Enum,
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[derive(Debug, Clone)]
pub struct Token {
    pub kind: TokenKind,
    pub value: String,
    pub span: Span,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Token {{\nkind: {},\nvalue: {}}}", self.kind, self.value)
    }
}
