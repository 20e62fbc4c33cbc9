//! Operator families.
//!
//! Each family is a closed enum; a binary operator is always a member of
//! exactly one of the first three families, tagged by `BinOp`. Adding an
//! operator means extending exactly one of these enumerations.

/// Arithmetic and bitwise binary operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumOp {
    Add,
    Sub,
    Mul,
    Div,
    Mod,
    IntDiv,
    Shr,
    Shl,
    BitAnd,
    BitOr,
    BitXor,
}

/// Boolean binary operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoolOp {
    And,
    Or,
    Xor,
}

/// Comparison operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompOp {
    Eq,
    NotEq,
    Less,
    Greater,
    LessEq,
    GreaterEq,
}

/// Unary operators, prefix and postfix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnOp {
    BitNeg,
    Neg,
    Not,
    PreInc,
    PreDec,
    PostInc,
    PostDec,
}

/// A binary operator tagged with its family.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinOp {
    Num(NumOp),
    Bool(BoolOp),
    Comp(CompOp),
}
