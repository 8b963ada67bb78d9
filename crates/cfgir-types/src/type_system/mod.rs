//! The type lattice used to tag IR values.
//!
//! This module provides:
//! - [`Type`]: eight scalar kinds plus a reference carrying a descriptive payload
//! - [`TypeKind`]: the payload-free kind with its fixed byte size
//! - shared constants for the scalars and the builtin references
//! - parsing of rendered type names

mod kind;
mod parse;
mod predefined;
mod referent;
mod ty;

#[cfg(test)]
mod parse_tests;

pub use kind::{POINTER_SIZE, TypeKind};
pub use parse::ParseTypeError;
pub use predefined::{
    LABEL_BLOCK, LABEL_FUNCTION, LABEL_PTR, LABEL_STRING, LABEL_UNIT, PREDEFINED_REFERENCES,
    TYPE_BLOCK, TYPE_BOOLEAN, TYPE_BYTE, TYPE_CHAR, TYPE_DOUBLE, TYPE_FLOAT, TYPE_FUNCTION,
    TYPE_INT, TYPE_LONG, TYPE_PTR, TYPE_SHORT, TYPE_STRING, TYPE_UNIT,
};
pub use referent::{BuiltinLabel, Class, Referent};
pub use ty::Type;
