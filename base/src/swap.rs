use crate::{cast::reinterpret, Primitive};
use core::mem::size_of;

/// Reverse the order of bytes of `value`.
///
/// Single-byte types are returned as is.
pub const fn byte_swap<T: Primitive>(value: T) -> T {
    // `bit_cast` asserts sizes for every arm including the ones not taken, so it can't be used here.
    //
    // SAFETY: All primitives wider than a byte are integers or floats, any bit pattern is valid for them.
    unsafe {
        match size_of::<T>() {
            1 => value,
            2 => reinterpret::<u16, T>(reinterpret::<T, u16>(value).swap_bytes()),
            4 => reinterpret::<u32, T>(reinterpret::<T, u32>(value).swap_bytes()),
            8 => reinterpret::<u64, T>(reinterpret::<T, u64>(value).swap_bytes()),
            _ => unreachable!(),
        }
    }
}

/// Byte order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Endian {
    Little,
    Big,
}

impl Endian {
    /// Byte order of the target platform.
    #[cfg(target_endian = "little")]
    pub const NATIVE: Self = Self::Little;
    /// Byte order of the target platform.
    #[cfg(target_endian = "big")]
    pub const NATIVE: Self = Self::Big;

    pub const fn is_native(self) -> bool {
        matches!(
            (self, Self::NATIVE),
            (Self::Little, Self::Little) | (Self::Big, Self::Big)
        )
    }

    /// Convert `value` between the native byte order and `self`.
    ///
    /// The conversion is symmetric, so the same call is used in both directions.
    pub const fn convert<T: Primitive>(self, value: T) -> T {
        if self.is_native() {
            value
        } else {
            byte_swap(value)
        }
    }
}

pub const fn to_be<T: Primitive>(value: T) -> T {
    Endian::Big.convert(value)
}

pub const fn from_be<T: Primitive>(value: T) -> T {
    Endian::Big.convert(value)
}

pub const fn to_le<T: Primitive>(value: T) -> T {
    Endian::Little.convert(value)
}

pub const fn from_le<T: Primitive>(value: T) -> T {
    Endian::Little.convert(value)
}
