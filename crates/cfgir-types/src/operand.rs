//! Typed IR operands.
//!
//! Every value an instruction reads is either a constant or a named variable,
//! tagged with the lattice type that decides how it is stored:
//!
//! ```text
//! 42              -> Constant(int, 42)
//! "Hello world"   -> Constant(ptr<string>, "Hello world")
//! foo()           -> Constant(ptr<function>, @foo)
//! isOn: Boolean   -> Variable(boolean, isOn)
//! obj: A          -> Variable(ptr<class A>, obj)
//! ```
//!
//! Operands do not check that their value fits their type.

use std::fmt;

use crate::type_system::{TYPE_BLOCK, TYPE_FUNCTION, TYPE_STRING, Type};

/// Literal payload of a constant.
#[derive(Clone, PartialEq, Debug)]
pub enum ConstValue {
    Bool(bool),
    Int(i64),
    Float(f64),
    Char(char),
    /// String literal contents (unescaped).
    Str(String),
    /// Name of a function or basic block.
    Symbol(String),
}

impl fmt::Display for ConstValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(v) => write!(f, "{v}"),
            Self::Int(v) => write!(f, "{v}"),
            Self::Float(v) => write!(f, "{v:?}"),
            Self::Char(v) => write!(f, "{v:?}"),
            Self::Str(v) => write!(f, "{v:?}"),
            Self::Symbol(v) => write!(f, "@{v}"),
        }
    }
}

#[derive(Clone, PartialEq, Debug)]
pub struct Constant<P = crate::Referent> {
    pub ty: Type<P>,
    pub value: ConstValue,
}

impl<P> Constant<P> {
    pub fn new(ty: Type<P>, value: ConstValue) -> Self {
        Self { ty, value }
    }

    pub fn ty(&self) -> &Type<P> {
        &self.ty
    }

    pub fn byte_size(&self) -> usize {
        self.ty.byte_size()
    }

    pub fn boolean(v: bool) -> Self {
        Self::new(Type::Boolean, ConstValue::Bool(v))
    }

    pub fn int(v: i32) -> Self {
        Self::new(Type::Int, ConstValue::Int(v.into()))
    }

    pub fn long(v: i64) -> Self {
        Self::new(Type::Long, ConstValue::Int(v))
    }

    pub fn double(v: f64) -> Self {
        Self::new(Type::Double, ConstValue::Float(v))
    }

    pub fn char(v: char) -> Self {
        Self::new(Type::Char, ConstValue::Char(v))
    }
}

impl Constant {
    pub fn string(text: impl Into<String>) -> Self {
        Self::new(TYPE_STRING, ConstValue::Str(text.into()))
    }

    pub fn function(name: impl Into<String>) -> Self {
        Self::new(TYPE_FUNCTION, ConstValue::Symbol(name.into()))
    }

    pub fn block(name: impl Into<String>) -> Self {
        Self::new(TYPE_BLOCK, ConstValue::Symbol(name.into()))
    }
}

impl<P: fmt::Display> fmt::Display for Constant<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.ty, self.value)
    }
}

#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct Variable<P = crate::Referent> {
    pub ty: Type<P>,
    pub name: String,
}

impl<P> Variable<P> {
    pub fn new(ty: Type<P>, name: impl Into<String>) -> Self {
        Self {
            ty,
            name: name.into(),
        }
    }

    pub fn ty(&self) -> &Type<P> {
        &self.ty
    }

    pub fn byte_size(&self) -> usize {
        self.ty.byte_size()
    }
}

impl<P: fmt::Display> fmt::Display for Variable<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "%{}: {}", self.name, self.ty)
    }
}

#[derive(Clone, PartialEq, Debug)]
pub enum Operand<P = crate::Referent> {
    Constant(Constant<P>),
    Variable(Variable<P>),
}

impl<P> Operand<P> {
    pub fn ty(&self) -> &Type<P> {
        match self {
            Self::Constant(c) => c.ty(),
            Self::Variable(v) => v.ty(),
        }
    }

    pub fn byte_size(&self) -> usize {
        self.ty().byte_size()
    }
}

impl<P> From<Constant<P>> for Operand<P> {
    fn from(c: Constant<P>) -> Self {
        Self::Constant(c)
    }
}

impl<P> From<Variable<P>> for Operand<P> {
    fn from(v: Variable<P>) -> Self {
        Self::Variable(v)
    }
}

impl<P: fmt::Display> fmt::Display for Operand<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Constant(c) => c.fmt(f),
            Self::Variable(v) => v.fmt(f),
        }
    }
}
