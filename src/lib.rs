//! Exact-numeric arithmetic evaluator and decimal-preserving JSON
//! serialization: the arithmetic+serialization seam of a graph query engine,
//! isolated so rational and arbitrary-precision integer values survive
//! arithmetic, persistence, and read interfaces without ever being coerced to
//! binary floating-point.
//!
//! See [`interface`] for the two entry points external callers (the query
//! engine, the storage layer) use; the rest of the module tree is the
//! pipeline those two functions drive.
#![warn(unreachable_pub)]

pub mod ast;
pub mod declared_type;
pub mod emit;
pub mod error;
pub mod eval;
pub mod interface;
pub mod number;
pub mod obs;
pub mod parser;
pub mod project;

pub mod prelude {
    pub use crate::ast::{BinaryOp, Expr, UnaryOp};
    pub use crate::declared_type::DeclaredType;
    pub use crate::error::{NumericError, NumericResult};
    pub use crate::number::NumberValue;
    pub use crate::project::WireForm;
}
