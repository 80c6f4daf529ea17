use flatnum_base::{extend, Integer};
use core::{
    fmt::{self, Debug, Display},
    ops::Deref,
};

/// Decimal text of an integer stored inline.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Decimal {
    bytes: [u8; Decimal::CAPACITY],
    len: usize,
}

impl Decimal {
    /// Maximal length of decimal text of a 64-bit integer.
    pub const CAPACITY: usize = 20;

    const fn empty() -> Self {
        Self {
            bytes: [0; Self::CAPACITY],
            len: 0,
        }
    }

    const fn from_literal(text: &str) -> Self {
        let src = text.as_bytes();
        let mut this = Self::empty();
        while this.len < src.len() {
            this.bytes[this.len] = src[this.len];
            this.len += 1;
        }
        this
    }

    const fn push(&mut self, byte: u8) {
        self.bytes[self.len] = byte;
        self.len += 1;
    }

    const fn reverse(&mut self) {
        if self.len < 2 {
            return;
        }
        let (mut i, mut j) = (0, self.len - 1);
        while i < j {
            let tmp = self.bytes[i];
            self.bytes[i] = self.bytes[j];
            self.bytes[j] = tmp;
            i += 1;
            j -= 1;
        }
    }

    pub const fn as_bytes(&self) -> &[u8] {
        self.bytes.split_at(self.len).0
    }

    pub const fn as_str(&self) -> &str {
        // SAFETY: Only ASCII digits and minus sign are ever written.
        unsafe { core::str::from_utf8_unchecked(self.as_bytes()) }
    }

    pub const fn len(&self) -> usize {
        self.len
    }

    /// Always `false`, there is at least one digit.
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }
}

/// Format integer as canonical decimal text.
///
/// There are no leading zeros and no `+` sign, negative numbers are prefixed with `-`.
pub const fn format_integer<T: Integer>(value: T) -> Decimal {
    let wide = extend(value);
    let negative = T::SIGNED && (wide as i64) < 0;
    // Negation of the minimal value overflows.
    if negative && wide == extend(T::MIN) {
        return Decimal::from_literal(T::MIN_LITERAL);
    }
    let mut magnitude = if negative { -(wide as i64) as u64 } else { wide };
    if magnitude == 0 {
        return Decimal::from_literal("0");
    }

    let mut text = Decimal::empty();
    while magnitude > 0 {
        text.push(b'0' + (magnitude % 10) as u8);
        magnitude /= 10;
    }
    if negative {
        text.push(b'-');
    }
    text.reverse();
    text
}

impl Deref for Decimal {
    type Target = str;
    fn deref(&self) -> &str {
        self.as_str()
    }
}

impl AsRef<str> for Decimal {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl Display for Decimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl Debug for Decimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        <str as Debug>::fmt(self.as_str(), f)
    }
}

impl PartialEq<str> for Decimal {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == other
    }
}

impl PartialEq<&str> for Decimal {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}
