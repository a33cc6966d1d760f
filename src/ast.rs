//! The arithmetic AST the evaluator reduces.
use crate::number::NumberValue;

///
/// BinaryOp
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum BinaryOp {
    Plus,
    Minus,
    Times,
    Divide,
    Div,
    Exp,
}

impl BinaryOp {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Plus => "Plus",
            Self::Minus => "Minus",
            Self::Times => "Times",
            Self::Divide => "Divide",
            Self::Div => "Div",
            Self::Exp => "Exp",
        }
    }
}

///
/// UnaryOp
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum UnaryOp {
    Floor,
}

impl UnaryOp {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Floor => "Floor",
        }
    }
}

///
/// Expr
///
/// A strictly tree-shaped arithmetic expression. Leaves are either a literal
/// already materialized into a [`NumberValue`], or a named binding the caller
/// resolves through an opaque lookup closure at evaluation time.
///

#[derive(Clone, Debug)]
pub enum Expr {
    Literal(NumberValue),
    Binding(String),
    Binary {
        op: BinaryOp,
        left: Box<Self>,
        right: Box<Self>,
    },
    Unary {
        op: UnaryOp,
        argument: Box<Self>,
    },
}

impl Expr {
    #[must_use]
    pub fn literal(value: NumberValue) -> Self {
        Self::Literal(value)
    }

    #[must_use]
    pub fn binding(name: impl Into<String>) -> Self {
        Self::Binding(name.into())
    }

    #[must_use]
    pub fn binary(op: BinaryOp, left: Self, right: Self) -> Self {
        Self::Binary {
            op,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    #[must_use]
    pub fn unary(op: UnaryOp, argument: Self) -> Self {
        Self::Unary {
            op,
            argument: Box::new(argument),
        }
    }
}
