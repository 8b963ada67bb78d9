#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Type lattice for the CFG intermediate representation.
//!
//! This crate contains:
//! - The closed set of value types (eight scalars plus references) with their
//!   fixed byte sizes
//! - Shared constants for the builtin references (`unit`, `string`, ...)
//! - Typed IR operands (constants and variables)
//! - A human-readable lattice dump
//!
//! # Example
//!
//! ```
//! use cfgir_types::{TYPE_INT, TYPE_STRING, Type};
//!
//! assert_eq!(TYPE_INT.byte_size(), 4);
//! assert_eq!(TYPE_INT.to_string(), "int");
//!
//! assert_eq!(TYPE_STRING.byte_size(), 8);
//! assert_eq!(TYPE_STRING.to_string(), "ptr<string>");
//!
//! let obj = Type::class("A");
//! assert_eq!(obj.to_string(), "ptr<class A>");
//! assert_eq!("ptr<class A>".parse::<Type>(), Ok(obj));
//! ```

pub mod colors;
pub mod config;
pub mod dump;
pub mod operand;
pub mod type_system;

#[cfg(test)]
mod dump_tests;

pub use colors::Colors;
pub use config::Config;
pub use dump::{Entry, dump, lattice_entries};
pub use operand::{ConstValue, Constant, Operand, Variable};
pub use type_system::{
    BuiltinLabel, Class, POINTER_SIZE, PREDEFINED_REFERENCES, ParseTypeError, Referent,
    TYPE_BLOCK, TYPE_BOOLEAN, TYPE_BYTE, TYPE_CHAR, TYPE_DOUBLE, TYPE_FLOAT, TYPE_FUNCTION,
    TYPE_INT, TYPE_LONG, TYPE_PTR, TYPE_SHORT, TYPE_STRING, TYPE_UNIT, Type, TypeKind,
};
