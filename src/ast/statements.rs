//! Statement nodes and whole programs.

use super::expressions::{Expr, Variable};

/// Assignment operator, plain or compound.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssignOp {
    Assign,
    Add,
    Sub,
    Mul,
    Div,
    BitOr,
    BitAnd,
    BitXor,
}

/// A statement node.
#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    /// Bare expression evaluated for its side effects.
    Expr(Expr),
    /// `var` declaration list; one entry per declared name, each with
    /// an independent optional initializer.
    Var(Vec<(String, Option<Expr>)>),
    Assign {
        target: Variable,
        op: AssignOp,
        value: Expr,
    },
    Block(Vec<Stmt>),
    /// Context switch: `with expr stmt`.
    With(Expr, Box<Stmt>),
    Repeat(Expr, Box<Stmt>),
    While(Expr, Box<Stmt>),
    /// Post-condition loop: `do stmt until expr`.
    DoUntil(Box<Stmt>, Expr),
    /// C-style loop. The grammar places no shape restriction on init
    /// and step beyond being statements.
    For {
        init: Box<Stmt>,
        cond: Expr,
        step: Box<Stmt>,
        body: Box<Stmt>,
    },
    If {
        cond: Expr,
        then_body: Box<Stmt>,
        else_body: Option<Box<Stmt>>,
    },
    /// Case groups in source order; an empty label list is the default
    /// branch. The parser does not enforce at most one default.
    Switch {
        cond: Expr,
        cases: Vec<(Vec<Expr>, Vec<Stmt>)>,
    },
    Break,
    Continue,
    /// Bail out of the current unit without a value.
    Exit,
    Return(Expr),
}

/// An ordered sequence of top-level statements.
#[derive(Debug, Clone, PartialEq)]
pub struct Program {
    pub stmts: Vec<Stmt>,
}
