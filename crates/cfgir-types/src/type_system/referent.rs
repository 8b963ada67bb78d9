//! What a reference points to.

use std::fmt;
use std::sync::Arc;

use super::predefined::{LABEL_BLOCK, LABEL_FUNCTION, LABEL_PTR, LABEL_STRING, LABEL_UNIT};

/// A user-defined class, as named in the source program.
///
/// The name is kept verbatim, including surrounding whitespace.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct Class {
    name: String,
}

impl Class {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for Class {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "class {}", self.name)
    }
}

/// Label of one of the five builtin references.
///
/// The set is closed so that a label can never spell out a class rendering.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum BuiltinLabel {
    Unit,
    String,
    Function,
    Block,
    Ptr,
}

impl BuiltinLabel {
    pub const ALL: [BuiltinLabel; 5] = [
        Self::Unit,
        Self::String,
        Self::Function,
        Self::Block,
        Self::Ptr,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            Self::Unit => LABEL_UNIT,
            Self::String => LABEL_STRING,
            Self::Function => LABEL_FUNCTION,
            Self::Block => LABEL_BLOCK,
            Self::Ptr => LABEL_PTR,
        }
    }

    /// Look up a label by its rendered name. Case-sensitive.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|label| label.name() == name)
    }
}

impl fmt::Display for BuiltinLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Default reference payload.
///
/// Labels describe the builtin references (`string`, `function`, ...).
/// Classes are shared, so tagging many values with the same class does not
/// copy the name.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub enum Referent {
    Label(BuiltinLabel),
    Class(Arc<Class>),
}

impl Referent {
    pub fn label(&self) -> Option<BuiltinLabel> {
        match self {
            Self::Label(label) => Some(*label),
            Self::Class(_) => None,
        }
    }

    pub fn class(&self) -> Option<&Class> {
        match self {
            Self::Label(_) => None,
            Self::Class(class) => Some(class),
        }
    }
}

impl From<BuiltinLabel> for Referent {
    fn from(label: BuiltinLabel) -> Self {
        Self::Label(label)
    }
}

impl From<Class> for Referent {
    fn from(class: Class) -> Self {
        Self::Class(Arc::new(class))
    }
}

impl From<Arc<Class>> for Referent {
    fn from(class: Arc<Class>) -> Self {
        Self::Class(class)
    }
}

impl fmt::Display for Referent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Label(label) => label.fmt(f),
            Self::Class(class) => class.fmt(f),
        }
    }
}
