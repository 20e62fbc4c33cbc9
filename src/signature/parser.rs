use std::collections::HashMap;

use crate::{
    errors::errors::{Error, ErrorImpl},
    lexer::{
        lexer::tokenize_signature,
        tokens::{Token, TokenKind},
    },
    types::{ArgTail, Argument, Enum, Signature, Type},
};

use super::lookups::{SCALAR_LOOKUP, VECTOR_LOOKUP};

/// Cursor over a signature token stream. Alternatives that share a
/// leading identifier are tried in order with full backtracking: a
/// failed alternative restores the cursor before the next is tried.
struct SignatureParser {
    tokens: Vec<Token>,
    pos: i32,
}

impl SignatureParser {
    fn new(tokens: Vec<Token>) -> Self {
        SignatureParser { tokens, pos: 0 }
    }

    fn current_token(&self) -> &Token {
        &self.tokens[self.pos as usize]
    }

    fn current_token_kind(&self) -> TokenKind {
        self.tokens[self.pos as usize].kind
    }

    fn advance(&mut self) -> &Token {
        self.pos += 1;
        &self.tokens[(self.pos - 1) as usize]
    }

    fn mark(&self) -> i32 {
        self.pos
    }

    fn reset(&mut self, mark: i32) {
        self.pos = mark;
    }

    fn expect(&mut self, expected_kind: TokenKind) -> Result<Token, Error> {
        let token = self.current_token();
        if token.kind != expected_kind {
            return Err(Error::new(
                ErrorImpl::UnexpectedTokenDetailed {
                    token: token.value.clone(),
                    message: format!("expected {}", expected_kind),
                },
                token.span.start.clone(),
            ));
        }
        Ok(self.advance().clone())
    }

    fn has_tokens(&self) -> bool {
        self.pos + 1 < self.tokens.len() as i32 && self.current_token_kind() != TokenKind::EOF
    }

    /// Consumes the comma between list items. The only other token
    /// allowed after an item is the closing delimiter, which is left
    /// for the caller.
    fn expect_separator(&mut self, close: TokenKind) -> Result<(), Error> {
        match self.current_token_kind() {
            TokenKind::Comma => {
                self.advance();
                Ok(())
            }
            kind if kind == close => Ok(()),
            _ => Err(Error::new(
                ErrorImpl::UnexpectedTokenDetailed {
                    token: self.current_token().value.clone(),
                    message: format!("expected Comma or {}", close),
                },
                self.current_token().span.start.clone(),
            )),
        }
    }

    /// Resolves a type name. Vector names require a `<subtype>` clause;
    /// scalar names map directly; anything else is an opaque nominal
    /// type.
    fn parse_type(&mut self) -> Result<Type, Error> {
        let name = self.expect(TokenKind::Identifier)?.value;

        if let Some(constructor) = VECTOR_LOOKUP.get(name.as_str()) {
            self.expect(TokenKind::Less)?;
            let subtype = self.parse_type()?;
            self.expect(TokenKind::Greater)?;
            return Ok(constructor(subtype));
        }

        if let Some(scalar) = SCALAR_LOOKUP.get(name.as_str()) {
            return Ok(scalar.clone());
        }

        Ok(Type::Newtype(name))
    }

    /// Parses one argument, either `name: type` or a bare type whose
    /// leading name doubles as the argument name.
    fn parse_argument(&mut self) -> Result<Argument, Error> {
        let start = self.mark();
        let first = self.expect(TokenKind::Identifier)?;

        if self.current_token_kind() == TokenKind::Colon {
            self.advance();
            let ty = self.parse_type()?;
            return Ok(Argument {
                name: first.value,
                ty,
            });
        }

        self.reset(start);
        let ty = self.parse_type()?;
        Ok(Argument {
            name: first.value,
            ty,
        })
    }

    /// Parses a signature: a parenthesized argument list with an
    /// optional variadic or optional-run tail and a return type, or the
    /// bare one-argument form `arg -> type`.
    fn parse_signature(&mut self) -> Result<Signature, Error> {
        if self.current_token_kind() == TokenKind::OpenParen {
            self.advance();

            let mut args = vec![];
            let mut tail = ArgTail::None;

            while self.current_token_kind() != TokenKind::CloseParen {
                match self.current_token_kind() {
                    TokenKind::Star => {
                        self.advance();
                        tail = ArgTail::Variadic(self.parse_argument()?);
                        break;
                    }
                    TokenKind::Question => {
                        self.advance();
                        let mut optional = vec![];
                        while self.current_token_kind() != TokenKind::CloseParen {
                            optional.push(self.parse_argument()?);
                            self.expect_separator(TokenKind::CloseParen)?;
                        }
                        tail = ArgTail::Optional(optional);
                        break;
                    }
                    _ => {
                        args.push(self.parse_argument()?);
                        self.expect_separator(TokenKind::CloseParen)?;
                    }
                }
            }

            self.expect(TokenKind::CloseParen)?;
            self.expect(TokenKind::Arrow)?;
            let ret = self.parse_type()?;

            return Ok(Signature { args, tail, ret });
        }

        // Bare form: a single unparenthesized argument
        let arg = self.parse_argument()?;
        self.expect(TokenKind::Arrow)?;
        let ret = self.parse_type()?;

        Ok(Signature {
            args: vec![arg],
            tail: ArgTail::None,
            ret,
        })
    }

    /// Parses a comma-separated run of declared names up to the `:`.
    fn parse_name_list(&mut self) -> Result<Vec<String>, Error> {
        let mut names = vec![self.expect(TokenKind::Identifier)?.value];
        while self.current_token_kind() == TokenKind::Comma {
            self.advance();
            names.push(self.expect(TokenKind::Identifier)?.value);
        }
        self.expect(TokenKind::Colon)?;
        Ok(names)
    }
}

/// Parses a variable-declaration block into a map from name to
/// (type, is-const). Each line is `[const] name[, name]* : type`; every
/// listed name gets the same type and constness.
pub fn parse_variables(
    source: String,
    file: Option<String>,
) -> Result<HashMap<String, (Type, bool)>, Error> {
    let tokens = tokenize_signature(source, file)?;
    let mut parser = SignatureParser::new(tokens);

    let mut variables = HashMap::new();
    while parser.has_tokens() {
        let is_const = if parser.current_token_kind() == TokenKind::Const {
            parser.advance();
            true
        } else {
            false
        };

        let names = parser.parse_name_list()?;
        let ty = parser.parse_type()?;

        for name in names {
            variables.insert(name, (ty.clone(), is_const));
        }
    }

    Ok(variables)
}

/// Parses a function-declaration block into a map from name to
/// signature. Each line is `name[, name]* : signature`; listed names are
/// aliases sharing one signature.
pub fn parse_functions(
    source: String,
    file: Option<String>,
) -> Result<HashMap<String, Signature>, Error> {
    let tokens = tokenize_signature(source, file)?;
    let mut parser = SignatureParser::new(tokens);

    let mut functions = HashMap::new();
    while parser.has_tokens() {
        let names = parser.parse_name_list()?;
        let signature = parser.parse_signature()?;

        for name in names {
            functions.insert(name, signature.clone());
        }
    }

    Ok(functions)
}

/// Parses enum declarations `enum Name { Label, Label, … }` in source
/// order. Labels receive sequential values from 0; the grammar has no
/// explicit-value form.
pub fn parse_enums(source: String, file: Option<String>) -> Result<Vec<Enum>, Error> {
    let tokens = tokenize_signature(source, file)?;
    let mut parser = SignatureParser::new(tokens);

    let mut enums = vec![];
    while parser.has_tokens() {
        parser.expect(TokenKind::Enum)?;
        let name = parser.expect(TokenKind::Identifier)?.value;
        parser.expect(TokenKind::OpenCurly)?;

        let mut entries = vec![];
        while parser.current_token_kind() != TokenKind::CloseCurly {
            let label = parser.expect(TokenKind::Identifier)?.value;
            entries.push((label, entries.len() as i64));
            parser.expect_separator(TokenKind::CloseCurly)?;
        }

        parser.expect(TokenKind::CloseCurly)?;
        enums.push(Enum { name, entries });
    }

    Ok(enums)
}
