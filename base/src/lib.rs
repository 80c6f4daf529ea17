//! Primitive numeric kinds and the bit-level operations on them.
//!
//! Everything here is a `const fn`, so it can be evaluated at compile time as well as at run time with the same result.
#![no_std]

#[cfg(test)]
extern crate std;

mod cast;
mod primitive;
mod swap;

pub use cast::{bit_cast, extend, to_signed, to_unsigned, truncate};
pub use primitive::{Integer, Kind, Primitive};
pub use swap::{byte_swap, from_be, from_le, to_be, to_le, Endian};

pub mod prelude {
    pub use super::{Integer, Primitive};
}
