//! Shared lattice constants.
//!
//! Scalars carry no payload, so a single constant per kind serves every
//! consumer. The five builtin references are labelled with a [`BuiltinLabel`].

use super::referent::{BuiltinLabel, Referent};
use super::ty::Type;

pub const TYPE_BOOLEAN: Type = Type::Boolean;
pub const TYPE_BYTE: Type = Type::Byte;
pub const TYPE_SHORT: Type = Type::Short;
pub const TYPE_INT: Type = Type::Int;
pub const TYPE_LONG: Type = Type::Long;
pub const TYPE_FLOAT: Type = Type::Float;
pub const TYPE_DOUBLE: Type = Type::Double;
pub const TYPE_CHAR: Type = Type::Char;

pub const LABEL_UNIT: &str = "unit";
pub const LABEL_STRING: &str = "string";
pub const LABEL_FUNCTION: &str = "function";
pub const LABEL_BLOCK: &str = "block";
pub const LABEL_PTR: &str = "ptr";

/// Invalid pointer; stands in for values of type `Unit`.
pub const TYPE_UNIT: Type = Type::ptr(Referent::Label(BuiltinLabel::Unit));

/// Pointer to a string constant.
pub const TYPE_STRING: Type = Type::ptr(Referent::Label(BuiltinLabel::String));

/// Pointer to a function.
pub const TYPE_FUNCTION: Type = Type::ptr(Referent::Label(BuiltinLabel::Function));

/// Pointer to a basic block.
pub const TYPE_BLOCK: Type = Type::ptr(Referent::Label(BuiltinLabel::Block));

/// Pointer to an object we know nothing about.
pub const TYPE_PTR: Type = Type::ptr(Referent::Label(BuiltinLabel::Ptr));

/// Builtin references with the name they are exported under.
pub const PREDEFINED_REFERENCES: [(&str, Type); 5] = [
    ("TYPE_UNIT", TYPE_UNIT),
    ("TYPE_STRING", TYPE_STRING),
    ("TYPE_FUNCTION", TYPE_FUNCTION),
    ("TYPE_BLOCK", TYPE_BLOCK),
    ("TYPE_PTR", TYPE_PTR),
];
