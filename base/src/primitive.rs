use bytemuck::{NoUninit, Pod};
use core::{fmt::Debug, mem::size_of};
use num_traits::PrimInt;

mod sealed {
    pub trait Sealed {}
}

/// Category of a primitive numeric type.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Kind {
    Bool,
    Signed,
    Unsigned,
    Float,
}

/// Primitive numeric type.
///
/// The set of implementors is closed:
///
/// + [`bool`],
/// + signed and unsigned integers ([`i8`], [`u8`], [`i16`], [`u16`], [`i32`], [`u32`], [`i64`], [`u64`], [`isize`], [`usize`]),
/// + floating-point numbers ([`f32`], [`f64`]).
///
/// C `char` is [`core::ffi::c_char`] which is an alias to either [`i8`] or [`u8`].
pub trait Primitive: NoUninit + Debug + PartialEq + sealed::Sealed {
    const KIND: Kind;
    /// Size of the type in bytes.
    const WIDTH: usize = size_of::<Self>();

    /// Signed counterpart of the same width. `Self` if there is no such split.
    type Signed: Primitive;
    /// Unsigned counterpart of the same width. `Self` if there is no such split.
    type Unsigned: Primitive;
}

/// Primitive integer.
pub trait Integer: Primitive + Pod + PrimInt {
    const SIGNED: bool = matches!(Self::KIND, Kind::Signed);

    const MIN: Self;
    const MAX: Self;

    /// [`Self::MAX`] as unsigned 64-bit number.
    const MAX_MAGNITUDE: u64;

    /// Decimal representation of [`Self::MIN`].
    ///
    /// Magnitude of the minimal signed value can't be represented by the type itself,
    /// so it's stored as a literal.
    const MIN_LITERAL: &'static str;
}

macro_rules! impl_primitive {
    ($ty:ty, $kind:ident, $signed:ty, $unsigned:ty $(,)?) => {
        impl sealed::Sealed for $ty {}

        impl Primitive for $ty {
            const KIND: Kind = Kind::$kind;
            type Signed = $signed;
            type Unsigned = $unsigned;
        }
    };
}

macro_rules! impl_integer {
    ($ty:ty, $kind:ident, $signed:ty, $unsigned:ty, $min_literal:expr $(,)?) => {
        impl_primitive!($ty, $kind, $signed, $unsigned);

        impl Integer for $ty {
            const MIN: Self = <$ty>::MIN;
            const MAX: Self = <$ty>::MAX;
            const MAX_MAGNITUDE: u64 = <$ty>::MAX as u64;
            const MIN_LITERAL: &'static str = $min_literal;
        }
    };
}

impl_primitive!(bool, Bool, bool, bool);

impl_integer!(i8, Signed, i8, u8, "-128");
impl_integer!(i16, Signed, i16, u16, "-32768");
impl_integer!(i32, Signed, i32, u32, "-2147483648");
impl_integer!(i64, Signed, i64, u64, "-9223372036854775808");
impl_integer!(isize, Signed, isize, usize, ISIZE_MIN_LITERAL);

impl_integer!(u8, Unsigned, i8, u8, "0");
impl_integer!(u16, Unsigned, i16, u16, "0");
impl_integer!(u32, Unsigned, i32, u32, "0");
impl_integer!(u64, Unsigned, i64, u64, "0");
impl_integer!(usize, Unsigned, isize, usize, "0");

impl_primitive!(f32, Float, f32, f32);
impl_primitive!(f64, Float, f64, f64);

#[cfg(target_pointer_width = "16")]
const ISIZE_MIN_LITERAL: &str = "-32768";
#[cfg(target_pointer_width = "32")]
const ISIZE_MIN_LITERAL: &str = "-2147483648";
#[cfg(target_pointer_width = "64")]
const ISIZE_MIN_LITERAL: &str = "-9223372036854775808";
