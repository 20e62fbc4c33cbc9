//! Expression nodes.
//!
//! All nodes are immutable values that exclusively own their children;
//! the tree carries no parent references.

use super::ops::{BinOp, UnOp};

/// A literal constant.
#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    Real(f64),
    Str(String),
}

/// Container kind of a one-dimensional bracket accessor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Container {
    Array,
    List,
    Map,
}

/// Container kind of a two-dimensional bracket accessor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Container2 {
    Array2,
    Grid,
}

/// A variable reference with its accessor chain.
///
/// Chains associate left: `a[0][1]` is index 1 of the array obtained
/// from `a[0]`. Field and container accessors interleave freely.
#[derive(Debug, Clone, PartialEq)]
pub enum Variable {
    /// Plain reference by name. Whether the name is local, self or
    /// global is resolved downstream, not here.
    Name(String),
    /// Field access `base.name`.
    Field { base: Box<Variable>, name: String },
    /// One-dimensional container access `base[i]`, `base[|i]`, `base[?k]`.
    Index {
        base: Box<Variable>,
        container: Container,
        index: Box<Expr>,
    },
    /// Two-dimensional container access `base[i, j]` or `base[# i, j]`.
    Index2 {
        base: Box<Variable>,
        container: Container2,
        index1: Box<Expr>,
        index2: Box<Expr>,
    },
}

/// An expression node.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Unary(UnOp, Box<Expr>),
    Binary(BinOp, Box<Expr>, Box<Expr>),
    Ternary {
        cond: Box<Expr>,
        then_expr: Box<Expr>,
        else_expr: Box<Expr>,
    },
    /// Function or script call; arguments are positional.
    Call { name: String, args: Vec<Expr> },
    Var(Variable),
    Lit(Literal),
    ArrayLit(Vec<Expr>),
}
