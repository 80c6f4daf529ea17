use crate::error::{Error, ErrorKind};
use flatnum_base::{truncate, Integer};

const fn bytes_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    let mut i = 0;
    while i < a.len() {
        if a[i] != b[i] {
            return false;
        }
        i += 1;
    }
    true
}

/// Parse decimal integer from bytes.
///
/// The text may start with a single `-` if `T` is signed. Any other character must be a decimal digit.
pub const fn parse_bytes<T: Integer>(text: &[u8]) -> Result<T, Error> {
    if text.is_empty() {
        return Err(Error::new(ErrorKind::EmptyInput, 0));
    }
    // Magnitude of the minimal value exceeds the maximal one, so it can't pass the overflow check below.
    if T::SIGNED && bytes_eq(text, T::MIN_LITERAL.as_bytes()) {
        return Ok(T::MIN);
    }

    let negative = text[0] == b'-';
    let mut pos = 0;
    if negative {
        if !T::SIGNED {
            return Err(Error::new(ErrorKind::InvalidSign, 0));
        }
        pos = 1;
        if pos == text.len() {
            return Err(Error::new(ErrorKind::InvalidDigit, pos));
        }
    }

    let mut magnitude: u64 = 0;
    while pos < text.len() {
        let c = text[pos];
        if c == b'-' {
            return Err(Error::new(ErrorKind::InvalidSign, pos));
        }
        if !c.is_ascii_digit() {
            return Err(Error::new(ErrorKind::InvalidDigit, pos));
        }
        let digit = (c - b'0') as u64;
        if magnitude > (T::MAX_MAGNITUDE - digit) / 10 {
            return Err(Error::new(ErrorKind::Overflow, pos));
        }
        magnitude = magnitude * 10 + digit;
        pos += 1;
    }

    let value = if negative {
        (magnitude as i64).wrapping_neg() as u64
    } else {
        magnitude
    };
    Ok(truncate(value))
}

/// Parse decimal integer from string.
pub const fn parse<T: Integer>(text: &str) -> Result<T, Error> {
    parse_bytes(text.as_bytes())
}

/// Parse decimal integer aborting constant evaluation on invalid input.
///
/// Being called at run time it panics instead.
pub const fn parse_const<T: Integer>(text: &str) -> T {
    match parse(text) {
        Ok(value) => value,
        Err(error) => error.fail(),
    }
}

/// Parse decimal integer at run time.
pub fn parse_integer<T: Integer>(text: &str) -> Result<T, Error> {
    parse(text).map_err(|error| {
        tracing::debug!(kind = ?error.kind, pos = error.pos, text, "rejected decimal integer");
        error
    })
}
