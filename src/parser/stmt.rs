use crate::{
    ast::{
        expressions::Expr,
        statements::{AssignOp, Stmt},
    },
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
};

use super::{expr::parse_expr, lookups::BindingPower, parser::Parser};

/// Parses a single statement. Dispatches on the leading token through the
/// statement lookup table; anything else is an assignment or a bare
/// expression. Semicolons are statement terminators but optional, so a
/// trailing one is consumed here and nowhere else.
pub fn parse_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let token_kind = parser.current_token_kind();

    let stmt = match parser.get_stmt_lookup().get(&token_kind).copied() {
        Some(handler) => handler(parser)?,
        None => parse_assignment_or_expr_stmt(parser)?,
    };

    if parser.current_token_kind() == TokenKind::Semicolon {
        parser.advance();
    }

    Ok(stmt)
}

fn token_to_assign_op(kind: TokenKind) -> Option<AssignOp> {
    match kind {
        TokenKind::Assignment => Some(AssignOp::Assign),
        TokenKind::PlusEquals => Some(AssignOp::Add),
        TokenKind::MinusEquals => Some(AssignOp::Sub),
        TokenKind::StarEquals => Some(AssignOp::Mul),
        TokenKind::SlashEquals => Some(AssignOp::Div),
        TokenKind::OrEquals => Some(AssignOp::BitOr),
        TokenKind::AndEquals => Some(AssignOp::BitAnd),
        TokenKind::XorEquals => Some(AssignOp::BitXor),
        _ => None,
    }
}

/// Parses an expression and, if an assignment operator follows, turns it
/// into an assignment. Only a variable reference is a legal target.
fn parse_assignment_or_expr_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let expr = parse_expr(parser, BindingPower::Default)?;

    let op = match token_to_assign_op(parser.current_token_kind()) {
        Some(op) => op,
        None => return Ok(Stmt::Expr(expr)),
    };

    let target = match expr {
        Expr::Var(variable) => variable,
        _ => {
            return Err(Error::new(
                ErrorImpl::InvalidAssignmentTarget,
                parser.get_position(),
            ))
        }
    };

    parser.advance();
    let value = parse_expr(parser, BindingPower::Default)?;

    Ok(Stmt::Assign { target, op, value })
}

/// Parses a block statement, either `{ ... }` or `begin ... end`.
pub fn parse_block_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let close = match parser.current_token_kind() {
        TokenKind::Begin => TokenKind::End,
        _ => TokenKind::CloseCurly,
    };
    parser.advance();

    let mut body = vec![];
    while parser.has_tokens() && parser.current_token_kind() != close {
        body.push(parse_stmt(parser)?);
    }

    parser.expect(close)?;

    Ok(Stmt::Block(body))
}

/// Parses a `var` declaration list. Each declared name carries its own
/// optional initializer.
pub fn parse_var_decl_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    parser.expect(TokenKind::Var)?;

    let mut decls = vec![];
    loop {
        let name = parser.expect(TokenKind::Identifier)?.value;

        let init = if parser.current_token_kind() == TokenKind::Assignment {
            parser.advance();
            Some(parse_expr(parser, BindingPower::Default)?)
        } else {
            None
        };

        decls.push((name, init));

        if parser.current_token_kind() != TokenKind::Comma {
            break;
        }
        parser.advance();
    }

    Ok(Stmt::Var(decls))
}

/// Parses an if statement. An `else` always binds to the nearest
/// unmatched `if`.
pub fn parse_if_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    parser.expect(TokenKind::If)?;
    let cond = parse_expr(parser, BindingPower::Default)?;
    let then_body = parse_stmt(parser)?;

    let else_body = if parser.current_token_kind() == TokenKind::Else {
        parser.advance();
        Some(Box::new(parse_stmt(parser)?))
    } else {
        None
    };

    Ok(Stmt::If {
        cond,
        then_body: Box::new(then_body),
        else_body,
    })
}

pub fn parse_while_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    parser.expect(TokenKind::While)?;
    let cond = parse_expr(parser, BindingPower::Default)?;
    let body = parse_stmt(parser)?;

    Ok(Stmt::While(cond, Box::new(body)))
}

pub fn parse_do_until_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    parser.expect(TokenKind::Do)?;
    let body = parse_stmt(parser)?;
    parser.expect(TokenKind::Until)?;
    let cond = parse_expr(parser, BindingPower::Default)?;

    Ok(Stmt::DoUntil(Box::new(body), cond))
}

/// Parses a C-style for loop. The init and step clauses are arbitrary
/// statements; the grammar does not restrict them to assignments.
pub fn parse_for_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    parser.expect(TokenKind::For)?;
    parser.expect(TokenKind::OpenParen)?;

    // parse_stmt consumes the separating semicolon after the init clause
    let init = parse_stmt(parser)?;
    let cond = parse_expr(parser, BindingPower::Default)?;
    if parser.current_token_kind() == TokenKind::Semicolon {
        parser.advance();
    }
    let step = parse_stmt(parser)?;

    parser.expect(TokenKind::CloseParen)?;
    let body = parse_stmt(parser)?;

    Ok(Stmt::For {
        init: Box::new(init),
        cond,
        step: Box::new(step),
        body: Box::new(body),
    })
}

pub fn parse_repeat_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    parser.expect(TokenKind::Repeat)?;
    let count = parse_expr(parser, BindingPower::Default)?;
    let body = parse_stmt(parser)?;

    Ok(Stmt::Repeat(count, Box::new(body)))
}

pub fn parse_with_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    parser.expect(TokenKind::With)?;
    let target = parse_expr(parser, BindingPower::Default)?;
    let body = parse_stmt(parser)?;

    Ok(Stmt::With(target, Box::new(body)))
}

/// Parses a switch statement. Consecutive `case` labels share one body;
/// `default` is a case group with an empty label list.
pub fn parse_switch_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    parser.expect(TokenKind::Switch)?;
    let cond = parse_expr(parser, BindingPower::Default)?;
    parser.expect(TokenKind::OpenCurly)?;

    let mut cases = vec![];
    while parser.has_tokens() && parser.current_token_kind() != TokenKind::CloseCurly {
        // A default is always its own group: an empty label list is the
        // only thing that identifies it downstream, so it must never be
        // merged into a preceding run of case labels.
        let labels = match parser.current_token_kind() {
            TokenKind::Case => {
                let mut labels = vec![];
                while parser.current_token_kind() == TokenKind::Case {
                    parser.advance();
                    labels.push(parse_expr(parser, BindingPower::Default)?);
                    while parser.current_token_kind() == TokenKind::Comma {
                        parser.advance();
                        labels.push(parse_expr(parser, BindingPower::Default)?);
                    }
                    parser.expect(TokenKind::Colon)?;
                }
                labels
            }
            TokenKind::Default => {
                parser.advance();
                parser.expect(TokenKind::Colon)?;
                vec![]
            }
            _ => {
                return Err(Error::new(
                    ErrorImpl::UnexpectedTokenDetailed {
                        token: parser.current_token().value.clone(),
                        message: String::from("expected case or default"),
                    },
                    parser.get_position(),
                ))
            }
        };

        let mut body = vec![];
        while parser.has_tokens()
            && parser.current_token_kind() != TokenKind::Case
            && parser.current_token_kind() != TokenKind::Default
            && parser.current_token_kind() != TokenKind::CloseCurly
        {
            body.push(parse_stmt(parser)?);
        }

        cases.push((labels, body));
    }

    parser.expect(TokenKind::CloseCurly)?;

    Ok(Stmt::Switch { cond, cases })
}

pub fn parse_break_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    parser.expect(TokenKind::Break)?;
    Ok(Stmt::Break)
}

pub fn parse_continue_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    parser.expect(TokenKind::Continue)?;
    Ok(Stmt::Continue)
}

pub fn parse_exit_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    parser.expect(TokenKind::Exit)?;
    Ok(Stmt::Exit)
}

pub fn parse_return_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    parser.expect(TokenKind::Return)?;
    let value = parse_expr(parser, BindingPower::Default)?;
    Ok(Stmt::Return(value))
}
