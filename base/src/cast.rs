use crate::{Integer, Primitive};
use bytemuck::{AnyBitPattern, NoUninit};
use core::mem::size_of;

#[repr(C)]
union Reinterpret<F: Copy, T: Copy> {
    from: F,
    to: T,
}

/// Reinterpret bits of `value` as `T` without any checks.
///
/// # Safety
///
/// `F` and `T` must have the same size and bits of `value` must be a valid `T`.
pub(crate) const unsafe fn reinterpret<F: Copy, T: Copy>(value: F) -> T {
    Reinterpret { from: value }.to
}

/// Reinterpret bits of `value` as a value of another type of the same size.
///
/// This is not a numeric conversion: `bit_cast::<u32, f32>(1.0)` gives `0x3f80_0000`.
///
/// Types of different size are rejected at compile time:
///
/// ```compile_fail
/// let _: u64 = flatnum_base::bit_cast(1u32);
/// ```
pub const fn bit_cast<To: AnyBitPattern, From: NoUninit>(value: From) -> To {
    const { assert!(size_of::<From>() == size_of::<To>(), "bit_cast requires types of the same size") };
    // SAFETY: Sizes are equal, `From` has no uninit bytes and any bit pattern is a valid `To`.
    unsafe { reinterpret(value) }
}

/// Reinterpret `value` as its unsigned counterpart.
pub const fn to_unsigned<T: Primitive>(value: T) -> T::Unsigned {
    // SAFETY: The counterpart is either `T` itself or an integer of the same width.
    unsafe { reinterpret(value) }
}

/// Reinterpret `value` as its signed counterpart.
pub const fn to_signed<T: Primitive>(value: T) -> T::Signed {
    // SAFETY: The counterpart is either `T` itself or an integer of the same width.
    unsafe { reinterpret(value) }
}

/// Two's-complement value of `value` extended to 64 bits.
///
/// Signed integers are sign-extended, unsigned ones are zero-extended.
pub const fn extend<T: Integer>(value: T) -> u64 {
    // SAFETY: Each arm reinterprets `value` as an integer of its own width.
    unsafe {
        match (size_of::<T>(), T::SIGNED) {
            (1, false) => reinterpret::<T, u8>(value) as u64,
            (1, true) => reinterpret::<T, i8>(value) as u64,
            (2, false) => reinterpret::<T, u16>(value) as u64,
            (2, true) => reinterpret::<T, i16>(value) as u64,
            (4, false) => reinterpret::<T, u32>(value) as u64,
            (4, true) => reinterpret::<T, i32>(value) as u64,
            (8, _) => reinterpret::<T, u64>(value),
            _ => unreachable!(),
        }
    }
}

/// Lower `size_of::<T>()` bytes of `value` as `T`.
pub const fn truncate<T: Integer>(value: u64) -> T {
    // SAFETY: Each arm reinterprets an integer of the `T` width, any bit pattern is a valid integer.
    unsafe {
        match size_of::<T>() {
            1 => reinterpret::<u8, T>(value as u8),
            2 => reinterpret::<u16, T>(value as u16),
            4 => reinterpret::<u32, T>(value as u32),
            8 => reinterpret::<u64, T>(value),
            _ => unreachable!(),
        }
    }
}
