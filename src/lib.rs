//! Primitive number utilities usable in constant evaluation.
//!
//! # Contents
//!
//! + [`bit_cast`] - reinterpret bits of a value as another type of the same size.
//! + [`byte_swap`] - reverse byte order of a [`Primitive`], and endianness conversions built on it ([`to_be`], [`from_le`], [`Endian`], etc.).
//! + [`parse_integer`] and [`format_integer`] - decimal text conversion of [`Integer`]s.
//!
//! All of them are `const fn`s and give the same results at compile time and at run time.
//!
//! ```rust
//! use flatnum::{byte_swap, format_integer, integer};
//!
//! const MAGIC: u32 = byte_swap(integer!(u32, "16909060"));
//! assert_eq!(MAGIC, 0x04030201);
//! assert_eq!(format_integer(i32::MIN), "-2147483648");
//! ```
//!
//! # Supported types
//!
//! Operations are only defined for [`Primitive`] types:
//! [`bool`], [`i8`], [`u8`], [`i16`], [`u16`], [`i32`], [`u32`], [`i64`], [`u64`], [`isize`], [`usize`], [`f32`], [`f64`].
//! Decimal conversion is defined for [`Integer`]s only.
//!
//! ```compile_fail
//! let _ = flatnum::byte_swap('a');
//! ```
#![no_std]

pub use flatnum_base::{
    self as base, bit_cast, byte_swap, extend, from_be, from_le, to_be, to_le, to_signed, to_unsigned, truncate,
    Endian, Integer, Kind, Primitive,
};
pub use flatnum_decimal::{
    self as decimal, format_integer, integer, parse, parse_bytes, parse_const, parse_integer, Decimal, Error,
    ErrorKind,
};

pub mod prelude {
    pub use flatnum_base::prelude::*;
}
