//! Decimal text conversion of primitive integers.
//!
//! Both parsing and formatting are `const fn`s. Parsing has two wrappers that differ only in the way they report invalid input:
//!
//! + [`parse_integer`] returns [`Error`] at run time,
//! + [`parse_const`] and the [`integer!`] macro abort constant evaluation, so invalid literal fails to compile.
#![no_std]

#[cfg(any(test, feature = "std"))]
extern crate std;

pub mod error;
mod format;
mod parse;

pub use error::{Error, ErrorKind};
pub use format::{format_integer, Decimal};
pub use parse::{parse, parse_bytes, parse_const, parse_integer};

/// Parse integer literal at compile time.
///
/// ```
/// const PORT: u16 = flatnum_decimal::integer!(u16, "8080");
/// assert_eq!(PORT, 8080);
/// assert_eq!(flatnum_decimal::integer!(i8, "-128"), i8::MIN);
/// ```
///
/// Invalid literal is a compilation error:
///
/// ```compile_fail
/// let _ = flatnum_decimal::integer!(u8, "256");
/// ```
#[macro_export]
macro_rules! integer {
    ($ty:ty, $text:expr $(,)?) => {{
        const VALUE: $ty = $crate::parse_const::<$ty>($text);
        VALUE
    }};
}
