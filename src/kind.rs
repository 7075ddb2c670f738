use std::fmt;

/// The shape of a default value, used to pick a parser
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Kind {
    Bool,
    String,
    I8,
    I16,
    I32,
    I64,
    Isize,
    U8,
    U16,
    U32,
    U64,
    Usize,
    F32,
    F64,
    /// Complex number with `f32` components (64 bits total)
    Complex32,
    /// Complex number with `f64` components (128 bits total)
    Complex64,
    /// Vectors, arrays and sets
    Sequence,
    /// Maps of any kind
    Mapping,
    /// Structs that are not a plain wrapper over a scalar
    Record,
    Optional,
    /// Owning pointers such as `Box`, `Rc` and `Arc`
    Reference,
}

impl Kind {
    /// Every kind that has a parser
    pub const SUPPORTED: [Kind; 16] = [
        Kind::Bool,
        Kind::String,
        Kind::I8,
        Kind::I16,
        Kind::I32,
        Kind::I64,
        Kind::Isize,
        Kind::U8,
        Kind::U16,
        Kind::U32,
        Kind::U64,
        Kind::Usize,
        Kind::F32,
        Kind::F64,
        Kind::Complex32,
        Kind::Complex64,
    ];

    pub fn is_supported(&self) -> bool {
        !matches!(
            self,
            Self::Sequence | Self::Mapping | Self::Record | Self::Optional | Self::Reference
        )
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Bool => "bool",
            Self::String => "String",
            Self::I8 => "i8",
            Self::I16 => "i16",
            Self::I32 => "i32",
            Self::I64 => "i64",
            Self::Isize => "isize",
            Self::U8 => "u8",
            Self::U16 => "u16",
            Self::U32 => "u32",
            Self::U64 => "u64",
            Self::Usize => "usize",
            Self::F32 => "f32",
            Self::F64 => "f64",
            Self::Complex32 => "Complex<f32>",
            Self::Complex64 => "Complex<f64>",
            Self::Sequence => "sequence",
            Self::Mapping => "mapping",
            Self::Record => "record",
            Self::Optional => "optional",
            Self::Reference => "reference",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
