//! Payload-free type kinds.
//!
//! `TypeKind` mirrors the variants of [`Type`](super::Type) one to one, minus the
//! reference payload. Layout tables and dumps use it to talk about a kind
//! without having a concrete reference in hand.

/// Size in bytes of every reference. Only 64-bit targets are supported.
pub const POINTER_SIZE: usize = 8;

/// Storage kind of an IR value.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, serde::Serialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum TypeKind {
    Boolean = 0,
    Byte = 1,
    Short = 2,
    Int = 3,
    Long = 4,
    Float = 5,
    Double = 6,
    Char = 7,
    /// Pointer to something described by the reference payload.
    Ptr = 8,
}

impl TypeKind {
    /// Every kind, in discriminant order.
    pub const ALL: [TypeKind; 9] = [
        Self::Boolean,
        Self::Byte,
        Self::Short,
        Self::Int,
        Self::Long,
        Self::Float,
        Self::Double,
        Self::Char,
        Self::Ptr,
    ];

    /// The eight scalar kinds, in discriminant order.
    pub const SCALARS: [TypeKind; 8] = [
        Self::Boolean,
        Self::Byte,
        Self::Short,
        Self::Int,
        Self::Long,
        Self::Float,
        Self::Double,
        Self::Char,
    ];

    /// Convert from raw discriminant.
    pub fn from_u8(v: u8) -> Option<Self> {
        match v {
            0 => Some(Self::Boolean),
            1 => Some(Self::Byte),
            2 => Some(Self::Short),
            3 => Some(Self::Int),
            4 => Some(Self::Long),
            5 => Some(Self::Float),
            6 => Some(Self::Double),
            7 => Some(Self::Char),
            8 => Some(Self::Ptr),
            _ => None,
        }
    }

    /// Raw discriminant.
    #[inline]
    pub const fn as_u8(self) -> u8 {
        self as u8
    }

    /// Number of bytes a value of this kind occupies.
    ///
    /// The scalar sizes are fixed by the lattice and do not follow any
    /// particular ABI (`byte` and `char` are both two bytes wide).
    pub const fn byte_size(self) -> usize {
        match self {
            Self::Boolean => 1,
            Self::Byte => 2,
            Self::Short => 2,
            Self::Int => 4,
            Self::Long => 8,
            Self::Float => 4,
            Self::Double => 8,
            Self::Char => 2,
            Self::Ptr => POINTER_SIZE,
        }
    }

    /// Display name, as used in IR dumps.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Boolean => "boolean",
            Self::Byte => "byte",
            Self::Short => "short",
            Self::Int => "int",
            Self::Long => "long",
            Self::Float => "float",
            Self::Double => "double",
            Self::Char => "char",
            Self::Ptr => "ptr",
        }
    }

    /// Whether this kind is stored inline (no indirection).
    pub fn is_scalar(self) -> bool {
        !self.is_reference()
    }

    /// Whether values of this kind live in integer registers.
    ///
    /// `boolean` is excluded; `char` is an unsigned 16-bit code unit.
    pub fn is_integral(self) -> bool {
        matches!(
            self,
            Self::Byte | Self::Short | Self::Int | Self::Long | Self::Char
        )
    }

    /// Whether this is a floating-point kind.
    pub fn is_floating(self) -> bool {
        matches!(self, Self::Float | Self::Double)
    }

    pub fn is_reference(self) -> bool {
        matches!(self, Self::Ptr)
    }
}

impl std::fmt::Display for TypeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
