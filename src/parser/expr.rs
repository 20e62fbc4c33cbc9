use crate::{
    ast::{
        expressions::{Container, Container2, Expr, Literal, Variable},
        ops::{BinOp, BoolOp, CompOp, NumOp, UnOp},
    },
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::{Token, TokenKind},
};

use super::{lookups::BindingPower, parser::Parser};

pub fn parse_expr(parser: &mut Parser, bp: BindingPower) -> Result<Expr, Error> {
    // First parse NUD
    let token_kind = parser.current_token_kind();
    let nud_handler = match parser.get_nud_lookup().get(&token_kind) {
        Some(handler) => *handler,
        None => {
            return Err(Error::new(
                ErrorImpl::UnexpectedToken {
                    token: parser.current_token().value.clone(),
                },
                parser.get_position(),
            ))
        }
    };

    let mut left = nud_handler(parser)?;

    // While the current token has an infix role and binds tighter than
    // the surrounding context, keep extending the left-hand side. A
    // token with no LED ends the expression (statement separators are
    // optional, so this must not be an error).
    loop {
        let token_kind = parser.current_token_kind();
        let led_handler = match parser.get_led_lookup().get(&token_kind) {
            Some(handler) => *handler,
            None => break,
        };

        let token_bp = match parser.get_bp_lookup().get(&token_kind) {
            Some(token_bp) => *token_bp,
            None => break,
        };
        if token_bp <= bp {
            break;
        }

        left = led_handler(parser, left, token_bp)?;
    }

    Ok(left)
}

pub fn parse_primary_expr(parser: &mut Parser) -> Result<Expr, Error> {
    match parser.current_token_kind() {
        TokenKind::Number => {
            let result = parser.current_token().value.parse::<f64>();

            match result {
                Ok(value) => {
                    parser.advance();
                    Ok(Expr::Lit(Literal::Real(value)))
                }
                Err(_) => Err(Error::new(
                    ErrorImpl::NumberParseError {
                        token: parser.current_token().value.clone(),
                    },
                    parser.get_position(),
                )),
            }
        }
        TokenKind::String => {
            let value = parser.advance().value.clone();
            Ok(Expr::Lit(Literal::Str(value)))
        }
        _ => Err(Error::new(
            ErrorImpl::UnexpectedToken {
                token: parser.current_token().value.clone(),
            },
            parser.get_position(),
        )),
    }
}

/// Parses a term beginning with an identifier: a function call when the
/// name is directly followed by `(`, otherwise a variable reference with
/// its accessor chain.
pub fn parse_symbol_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let name = parser.expect(TokenKind::Identifier)?.value;

    if parser.current_token_kind() == TokenKind::OpenParen {
        parser.advance();

        let mut args = vec![];
        if parser.current_token_kind() != TokenKind::CloseParen {
            args.push(parse_expr(parser, BindingPower::Default)?);
            while parser.current_token_kind() == TokenKind::Comma {
                parser.advance();
                args.push(parse_expr(parser, BindingPower::Default)?);
            }
        }

        parser.expect(TokenKind::CloseParen)?;

        return Ok(Expr::Call { name, args });
    }

    let variable = parse_accessor_chain(parser, Variable::Name(name))?;
    Ok(Expr::Var(variable))
}

/// Extends `base` with field and bracket accessors, left to right.
fn parse_accessor_chain(parser: &mut Parser, base: Variable) -> Result<Variable, Error> {
    let mut variable = base;

    loop {
        match parser.current_token_kind() {
            TokenKind::Dot => {
                parser.advance();
                let name = parser.expect(TokenKind::Identifier)?.value;
                variable = Variable::Field {
                    base: Box::new(variable),
                    name,
                };
            }
            TokenKind::OpenBracket => {
                variable = parse_bracket_accessor(parser, variable)?;
            }
            _ => break,
        }
    }

    Ok(variable)
}

/// Parses one bracket accessor. The container marker (`|`, `?`, `@` for
/// the 1-ary forms, `#` for grid) must touch the opening bracket; a
/// marker separated by whitespace is not a marker.
fn parse_bracket_accessor(parser: &mut Parser, base: Variable) -> Result<Variable, Error> {
    let open = parser.expect(TokenKind::OpenBracket)?;

    let marker = match parser.current_token_kind() {
        kind @ (TokenKind::BitOr | TokenKind::Question | TokenKind::At | TokenKind::Hash)
            if tokens_touch(&open, parser.current_token()) =>
        {
            parser.advance();
            Some(kind)
        }
        _ => None,
    };

    let first = parse_expr(parser, BindingPower::Default)?;

    if parser.current_token_kind() == TokenKind::Comma {
        parser.advance();
        let second = parse_expr(parser, BindingPower::Default)?;
        parser.expect(TokenKind::CloseBracket)?;

        let container = match marker {
            None => Container2::Array2,
            Some(TokenKind::Hash) => Container2::Grid,
            Some(kind) => {
                return Err(Error::new(
                    ErrorImpl::InvalidAccessor {
                        marker: marker_text(kind),
                        message: String::from("this container takes a single index"),
                    },
                    parser.get_position(),
                ))
            }
        };

        return Ok(Variable::Index2 {
            base: Box::new(base),
            container,
            index1: Box::new(first),
            index2: Box::new(second),
        });
    }

    parser.expect(TokenKind::CloseBracket)?;

    let container = match marker {
        None | Some(TokenKind::At) => Container::Array,
        Some(TokenKind::BitOr) => Container::List,
        Some(TokenKind::Question) => Container::Map,
        Some(TokenKind::Hash) => {
            return Err(Error::new(
                ErrorImpl::InvalidAccessor {
                    marker: String::from("#"),
                    message: String::from("grid accessors take two indices"),
                },
                parser.get_position(),
            ))
        }
        Some(_) => unreachable!("marker is one of the four accessor tokens"),
    };

    Ok(Variable::Index {
        base: Box::new(base),
        container,
        index: Box::new(first),
    })
}

fn tokens_touch(left: &Token, right: &Token) -> bool {
    left.span.end.0 == right.span.start.0
}

fn marker_text(kind: TokenKind) -> String {
    match kind {
        TokenKind::BitOr => String::from("|"),
        TokenKind::Question => String::from("?"),
        TokenKind::At => String::from("@"),
        TokenKind::Hash => String::from("#"),
        _ => format!("{}", kind),
    }
}

fn token_to_binary_op(kind: TokenKind) -> Option<BinOp> {
    match kind {
        TokenKind::Plus => Some(BinOp::Num(NumOp::Add)),
        TokenKind::Dash => Some(BinOp::Num(NumOp::Sub)),
        TokenKind::Star => Some(BinOp::Num(NumOp::Mul)),
        TokenKind::Slash => Some(BinOp::Num(NumOp::Div)),
        TokenKind::Div => Some(BinOp::Num(NumOp::IntDiv)),
        TokenKind::Mod | TokenKind::Percent => Some(BinOp::Num(NumOp::Mod)),
        TokenKind::Shl => Some(BinOp::Num(NumOp::Shl)),
        TokenKind::Shr => Some(BinOp::Num(NumOp::Shr)),
        TokenKind::BitAnd => Some(BinOp::Num(NumOp::BitAnd)),
        TokenKind::BitOr => Some(BinOp::Num(NumOp::BitOr)),
        TokenKind::BitXor => Some(BinOp::Num(NumOp::BitXor)),
        TokenKind::And => Some(BinOp::Bool(BoolOp::And)),
        TokenKind::Or => Some(BinOp::Bool(BoolOp::Or)),
        TokenKind::Xor => Some(BinOp::Bool(BoolOp::Xor)),
        TokenKind::Equals => Some(BinOp::Comp(CompOp::Eq)),
        TokenKind::NotEquals => Some(BinOp::Comp(CompOp::NotEq)),
        TokenKind::Less => Some(BinOp::Comp(CompOp::Less)),
        TokenKind::Greater => Some(BinOp::Comp(CompOp::Greater)),
        TokenKind::LessEquals => Some(BinOp::Comp(CompOp::LessEq)),
        TokenKind::GreaterEquals => Some(BinOp::Comp(CompOp::GreaterEq)),
        _ => None,
    }
}

pub fn parse_binary_expr(parser: &mut Parser, left: Expr, bp: BindingPower) -> Result<Expr, Error> {
    let operator_token = parser.advance().clone();

    let operator = match token_to_binary_op(operator_token.kind) {
        Some(operator) => operator,
        None => {
            return Err(Error::new(
                ErrorImpl::UnexpectedToken {
                    token: operator_token.value.clone(),
                },
                operator_token.span.start.clone(),
            ))
        }
    };

    // Passing the operator's own binding power makes every level
    // left-associative: an equal-precedence operator stops the rhs.
    let right = parse_expr(parser, bp)?;

    Ok(Expr::Binary(operator, Box::new(left), Box::new(right)))
}

pub fn parse_prefix_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let operator_token = parser.advance().clone();
    let rhs = parse_expr(parser, BindingPower::Unary)?;

    let operator = match operator_token.kind {
        TokenKind::Dash => UnOp::Neg,
        TokenKind::Tilde => UnOp::BitNeg,
        TokenKind::Not => UnOp::Not,
        // Unary plus is the identity and produces no node
        TokenKind::Plus => return Ok(rhs),
        _ => {
            return Err(Error::new(
                ErrorImpl::UnexpectedToken {
                    token: operator_token.value.clone(),
                },
                operator_token.span.start.clone(),
            ))
        }
    };

    Ok(Expr::Unary(operator, Box::new(rhs)))
}

pub fn parse_prefix_incdec_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let operator_token = parser.advance().clone();
    let rhs = parse_expr(parser, BindingPower::IncDec)?;

    let operator = match operator_token.kind {
        TokenKind::PlusPlus => UnOp::PreInc,
        TokenKind::MinusMinus => UnOp::PreDec,
        _ => {
            return Err(Error::new(
                ErrorImpl::UnexpectedToken {
                    token: operator_token.value.clone(),
                },
                operator_token.span.start.clone(),
            ))
        }
    };

    Ok(Expr::Unary(operator, Box::new(rhs)))
}

pub fn parse_postfix_expr(parser: &mut Parser, left: Expr, _bp: BindingPower) -> Result<Expr, Error> {
    let operator_token = parser.advance().clone();

    let operator = match operator_token.kind {
        TokenKind::PlusPlus => UnOp::PostInc,
        TokenKind::MinusMinus => UnOp::PostDec,
        _ => {
            return Err(Error::new(
                ErrorImpl::UnexpectedToken {
                    token: operator_token.value.clone(),
                },
                operator_token.span.start.clone(),
            ))
        }
    };

    Ok(Expr::Unary(operator, Box::new(left)))
}

pub fn parse_ternary_expr(parser: &mut Parser, left: Expr, _bp: BindingPower) -> Result<Expr, Error> {
    parser.expect(TokenKind::Question)?;
    let then_expr = parse_expr(parser, BindingPower::Default)?;
    parser.expect(TokenKind::Colon)?;
    // Parsing the else branch at Default makes the ternary right-associative
    let else_expr = parse_expr(parser, BindingPower::Default)?;

    Ok(Expr::Ternary {
        cond: Box::new(left),
        then_expr: Box::new(then_expr),
        else_expr: Box::new(else_expr),
    })
}

pub fn parse_grouping_expr(parser: &mut Parser) -> Result<Expr, Error> {
    parser.expect(TokenKind::OpenParen)?;
    let expr = parse_expr(parser, BindingPower::Default)?;
    parser.expect(TokenKind::CloseParen)?;

    Ok(expr)
}

pub fn parse_array_literal_expr(parser: &mut Parser) -> Result<Expr, Error> {
    parser.expect(TokenKind::OpenBracket)?;

    let mut elements = vec![];
    if parser.current_token_kind() != TokenKind::CloseBracket {
        elements.push(parse_expr(parser, BindingPower::Default)?);
        while parser.current_token_kind() == TokenKind::Comma {
            parser.advance();
            elements.push(parse_expr(parser, BindingPower::Default)?);
        }
    }

    parser.expect(TokenKind::CloseBracket)?;

    Ok(Expr::ArrayLit(elements))
}
