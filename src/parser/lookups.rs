use std::collections::HashMap;

use crate::{
    ast::{expressions::Expr, statements::Stmt},
    errors::errors::Error,
    lexer::tokens::TokenKind,
};

use super::{expr::*, parser::Parser, stmt::*};

/// Binding powers, loosest to tightest. The relative order of the
/// variants is the declared precedence contract of the language:
/// unary prefix binds tightest, then integer div/mod, then
/// increment/decrement, then bitwise, then multiplicative, additive,
/// comparison, logical, and the ternary binds loosest of all. Note that
/// div/mod binding tighter than multiplication and bitwise binding
/// tighter than both diverge from common convention.
#[derive(PartialEq, PartialOrd, Clone, Copy, Debug)]
pub enum BindingPower {
    Default,
    Ternary,
    Logical,
    Comparison,
    Additive,
    Multiplicative,
    Bitwise,
    IncDec,
    IntDivMod,
    Unary,
    Primary,
}

pub type StmtHandler = fn(&mut Parser) -> Result<Stmt, Error>;
pub type NUDHandler = fn(&mut Parser) -> Result<Expr, Error>;
pub type LEDHandler = fn(&mut Parser, Expr, BindingPower) -> Result<Expr, Error>;

pub fn create_token_lookups(parser: &mut Parser) {
    // Ternary
    parser.led(TokenKind::Question, BindingPower::Ternary, parse_ternary_expr);

    // Logical
    parser.led(TokenKind::And, BindingPower::Logical, parse_binary_expr);
    parser.led(TokenKind::Or, BindingPower::Logical, parse_binary_expr);
    parser.led(TokenKind::Xor, BindingPower::Logical, parse_binary_expr);

    // Comparison
    parser.led(TokenKind::Equals, BindingPower::Comparison, parse_binary_expr);
    parser.led(TokenKind::NotEquals, BindingPower::Comparison, parse_binary_expr);
    parser.led(TokenKind::Less, BindingPower::Comparison, parse_binary_expr);
    parser.led(TokenKind::LessEquals, BindingPower::Comparison, parse_binary_expr);
    parser.led(TokenKind::Greater, BindingPower::Comparison, parse_binary_expr);
    parser.led(TokenKind::GreaterEquals, BindingPower::Comparison, parse_binary_expr);

    // Additive and multiplicative
    parser.led(TokenKind::Plus, BindingPower::Additive, parse_binary_expr);
    parser.led(TokenKind::Dash, BindingPower::Additive, parse_binary_expr);
    parser.led(TokenKind::Star, BindingPower::Multiplicative, parse_binary_expr);
    parser.led(TokenKind::Slash, BindingPower::Multiplicative, parse_binary_expr);

    // Bitwise binds tighter than multiplicative, per the declared table
    parser.led(TokenKind::BitOr, BindingPower::Bitwise, parse_binary_expr);
    parser.led(TokenKind::BitAnd, BindingPower::Bitwise, parse_binary_expr);
    parser.led(TokenKind::BitXor, BindingPower::Bitwise, parse_binary_expr);
    parser.led(TokenKind::Shl, BindingPower::Bitwise, parse_binary_expr);
    parser.led(TokenKind::Shr, BindingPower::Bitwise, parse_binary_expr);

    // Postfix increment/decrement
    parser.led(TokenKind::PlusPlus, BindingPower::IncDec, parse_postfix_expr);
    parser.led(TokenKind::MinusMinus, BindingPower::IncDec, parse_postfix_expr);

    // Integer division and modulo, both spellings
    parser.led(TokenKind::Div, BindingPower::IntDivMod, parse_binary_expr);
    parser.led(TokenKind::Mod, BindingPower::IntDivMod, parse_binary_expr);
    parser.led(TokenKind::Percent, BindingPower::IntDivMod, parse_binary_expr);

    // Literals and terms
    parser.nud(TokenKind::Number, parse_primary_expr);
    parser.nud(TokenKind::String, parse_primary_expr);
    parser.nud(TokenKind::Identifier, parse_symbol_expr);
    parser.nud(TokenKind::OpenParen, parse_grouping_expr);
    parser.nud(TokenKind::OpenBracket, parse_array_literal_expr);
    parser.nud(TokenKind::Dash, parse_prefix_expr);
    parser.nud(TokenKind::Plus, parse_prefix_expr);
    parser.nud(TokenKind::Tilde, parse_prefix_expr);
    parser.nud(TokenKind::Not, parse_prefix_expr);
    parser.nud(TokenKind::PlusPlus, parse_prefix_incdec_expr);
    parser.nud(TokenKind::MinusMinus, parse_prefix_incdec_expr);

    // Statements
    parser.stmt(TokenKind::OpenCurly, parse_block_stmt);
    parser.stmt(TokenKind::Begin, parse_block_stmt);
    parser.stmt(TokenKind::Var, parse_var_decl_stmt);
    parser.stmt(TokenKind::If, parse_if_stmt);
    parser.stmt(TokenKind::While, parse_while_stmt);
    parser.stmt(TokenKind::Do, parse_do_until_stmt);
    parser.stmt(TokenKind::For, parse_for_stmt);
    parser.stmt(TokenKind::Repeat, parse_repeat_stmt);
    parser.stmt(TokenKind::With, parse_with_stmt);
    parser.stmt(TokenKind::Switch, parse_switch_stmt);
    parser.stmt(TokenKind::Break, parse_break_stmt);
    parser.stmt(TokenKind::Continue, parse_continue_stmt);
    parser.stmt(TokenKind::Exit, parse_exit_stmt);
    parser.stmt(TokenKind::Return, parse_return_stmt);
}

// Lookup tables inside parser struct, so it's easier
pub type StmtLookup = HashMap<TokenKind, StmtHandler>;
pub type NUDLookup = HashMap<TokenKind, NUDHandler>;
pub type LEDLookup = HashMap<TokenKind, LEDHandler>;
pub type BPLookup = HashMap<TokenKind, BindingPower>;
