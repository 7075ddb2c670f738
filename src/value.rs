use crate::kind::Kind;
use num_complex::{Complex32, Complex64};
use std::{
    collections::{BTreeMap, BTreeSet, HashMap, HashSet},
    rc::Rc,
    sync::Arc,
};

/// A parsed primitive, tagged with the kind it was parsed as
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    Bool(bool),
    String(String),
    I8(i8),
    I16(i16),
    I32(i32),
    I64(i64),
    Isize(isize),
    U8(u8),
    U16(u16),
    U32(u32),
    U64(u64),
    Usize(usize),
    F32(f32),
    F64(f64),
    Complex32(Complex32),
    Complex64(Complex64),
}

impl Scalar {
    pub fn kind(&self) -> Kind {
        match self {
            Self::Bool(_) => Kind::Bool,
            Self::String(_) => Kind::String,
            Self::I8(_) => Kind::I8,
            Self::I16(_) => Kind::I16,
            Self::I32(_) => Kind::I32,
            Self::I64(_) => Kind::I64,
            Self::Isize(_) => Kind::Isize,
            Self::U8(_) => Kind::U8,
            Self::U16(_) => Kind::U16,
            Self::U32(_) => Kind::U32,
            Self::U64(_) => Kind::U64,
            Self::Usize(_) => Kind::Usize,
            Self::F32(_) => Kind::F32,
            Self::F64(_) => Kind::F64,
            Self::Complex32(_) => Kind::Complex32,
            Self::Complex64(_) => Kind::Complex64,
        }
    }
}

/// A type that can be read from an environment variable
///
/// The kind of the default value decides which parser runs; `from_scalar`
/// turns the parsed primitive back into `Self`. Wrapper types over a scalar
/// get an implementation from `#[derive(EnvValue)]`:
///
/// ```rust
/// use typed_env::EnvValue;
///
/// #[derive(Debug, EnvValue)]
/// struct Port(u16);
///
/// let port = typed_env::get("TYPED_ENV_DOC_PORT", Port(8080));
/// assert_eq!(port.0, 8080);
/// ```
pub trait EnvValue: Sized {
    const KIND: Kind;

    /// Returns `None` when the scalar is not of `Self::KIND`
    fn from_scalar(scalar: Scalar) -> Option<Self>;
}

macro_rules! impl_scalar {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl EnvValue for $ty {
                const KIND: Kind = Kind::$variant;

                fn from_scalar(scalar: Scalar) -> Option<Self> {
                    match scalar {
                        Scalar::$variant(v) => Some(v),
                        _ => None,
                    }
                }
            }
        )*
    };
}

impl_scalar! {
    bool => Bool,
    String => String,
    i8 => I8,
    i16 => I16,
    i32 => I32,
    i64 => I64,
    isize => Isize,
    u8 => U8,
    u16 => U16,
    u32 => U32,
    u64 => U64,
    usize => Usize,
    f32 => F32,
    f64 => F64,
    Complex32 => Complex32,
    Complex64 => Complex64,
}

// Shapes that are accepted as defaults but never parsed.
macro_rules! impl_unsupported {
    ($kind:ident => $($ty:ty),* $(,)?) => {
        $(
            impl<T> EnvValue for $ty {
                const KIND: Kind = Kind::$kind;

                fn from_scalar(_: Scalar) -> Option<Self> {
                    None
                }
            }
        )*
    };
}

impl_unsupported!(Sequence => Vec<T>, HashSet<T>, BTreeSet<T>);
impl_unsupported!(Optional => Option<T>);
impl_unsupported!(Reference => Box<T>, Rc<T>, Arc<T>);

impl<T, const N: usize> EnvValue for [T; N] {
    const KIND: Kind = Kind::Sequence;

    fn from_scalar(_: Scalar) -> Option<Self> {
        None
    }
}

impl<K, V> EnvValue for HashMap<K, V> {
    const KIND: Kind = Kind::Mapping;

    fn from_scalar(_: Scalar) -> Option<Self> {
        None
    }
}

impl<K, V> EnvValue for BTreeMap<K, V> {
    const KIND: Kind = Kind::Mapping;

    fn from_scalar(_: Scalar) -> Option<Self> {
        None
    }
}
