//! The IR type lattice.

use std::fmt;

use super::kind::TypeKind;
use super::referent::{Class, Referent};

/// Physical representation of an IR value.
///
/// The variant set is closed: every consumer matches on all nine cases and
/// the compiler rejects a match that forgets one.
///
/// ```compile_fail
/// use cfgir_types::Type;
///
/// fn is_wide(ty: &Type) -> bool {
///     match ty {
///         Type::Boolean | Type::Byte | Type::Short | Type::Int => false,
///         Type::Long | Type::Double | Type::Ptr(_) => true,
///         Type::Float => false,
///         // `Type::Char` is missing
///     }
/// }
/// ```
///
/// The payload `P` of a reference is a free-form description of the referent.
/// It is kept as given and never checked against what the reference actually
/// points to.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub enum Type<P = Referent> {
    Boolean,
    Byte,
    Short,
    Int,
    Long,
    Float,
    Double,
    Char,
    Ptr(P),
}

impl<P> Type<P> {
    /// Reference to whatever `payload` describes.
    pub const fn ptr(payload: P) -> Self {
        Self::Ptr(payload)
    }

    /// The scalar type of `kind`, `None` for [`TypeKind::Ptr`] which needs a
    /// payload.
    pub fn scalar(kind: TypeKind) -> Option<Self> {
        match kind {
            TypeKind::Boolean => Some(Self::Boolean),
            TypeKind::Byte => Some(Self::Byte),
            TypeKind::Short => Some(Self::Short),
            TypeKind::Int => Some(Self::Int),
            TypeKind::Long => Some(Self::Long),
            TypeKind::Float => Some(Self::Float),
            TypeKind::Double => Some(Self::Double),
            TypeKind::Char => Some(Self::Char),
            TypeKind::Ptr => None,
        }
    }

    pub fn kind(&self) -> TypeKind {
        match self {
            Self::Boolean => TypeKind::Boolean,
            Self::Byte => TypeKind::Byte,
            Self::Short => TypeKind::Short,
            Self::Int => TypeKind::Int,
            Self::Long => TypeKind::Long,
            Self::Float => TypeKind::Float,
            Self::Double => TypeKind::Double,
            Self::Char => TypeKind::Char,
            Self::Ptr(_) => TypeKind::Ptr,
        }
    }

    /// Number of bytes a value of this type occupies.
    ///
    /// Depends on the variant only; a reference is pointer sized whatever its
    /// payload.
    #[inline]
    pub fn byte_size(&self) -> usize {
        self.kind().byte_size()
    }

    pub fn is_reference(&self) -> bool {
        matches!(self, Self::Ptr(_))
    }

    /// Reference payload, `None` for scalars.
    pub fn payload(&self) -> Option<&P> {
        match self {
            Self::Ptr(payload) => Some(payload),
            Self::Boolean
            | Self::Byte
            | Self::Short
            | Self::Int
            | Self::Long
            | Self::Float
            | Self::Double
            | Self::Char => None,
        }
    }

    /// Rebuild the type with a different payload representation.
    pub fn map_payload<Q>(self, f: impl FnOnce(P) -> Q) -> Type<Q> {
        match self {
            Self::Boolean => Type::Boolean,
            Self::Byte => Type::Byte,
            Self::Short => Type::Short,
            Self::Int => Type::Int,
            Self::Long => Type::Long,
            Self::Float => Type::Float,
            Self::Double => Type::Double,
            Self::Char => Type::Char,
            Self::Ptr(payload) => Type::Ptr(f(payload)),
        }
    }

    /// Borrowing view of the payload.
    pub fn by_ref(&self) -> Type<&P> {
        match self {
            Self::Boolean => Type::Boolean,
            Self::Byte => Type::Byte,
            Self::Short => Type::Short,
            Self::Int => Type::Int,
            Self::Long => Type::Long,
            Self::Float => Type::Float,
            Self::Double => Type::Double,
            Self::Char => Type::Char,
            Self::Ptr(payload) => Type::Ptr(payload),
        }
    }
}

impl Type<Referent> {
    /// Reference to an instance of the class `name`.
    pub fn class(name: impl Into<String>) -> Self {
        Self::Ptr(Referent::from(Class::new(name)))
    }
}

impl<P: fmt::Display> fmt::Display for Type<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ptr(payload) => write!(f, "ptr<{payload}>"),
            Self::Boolean
            | Self::Byte
            | Self::Short
            | Self::Int
            | Self::Long
            | Self::Float
            | Self::Double
            | Self::Char => f.write_str(self.kind().name()),
        }
    }
}
