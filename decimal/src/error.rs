use core::fmt;

/// Error that can occur while parsing decimal text.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Error {
    pub kind: ErrorKind,
    /// Byte offset in the text where the error was detected.
    pub pos: usize,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The text is empty.
    EmptyInput,
    /// Minus sign is not the first character, or the target type is unsigned.
    InvalidSign,
    /// Character other than decimal digit.
    InvalidDigit,
    /// The number doesn't fit into the target type.
    Overflow,
}

impl ErrorKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            ErrorKind::EmptyInput => "empty input",
            ErrorKind::InvalidSign => "invalid sign",
            ErrorKind::InvalidDigit => "invalid digit",
            ErrorKind::Overflow => "number too large for the type",
        }
    }
}

impl Error {
    pub const fn new(kind: ErrorKind, pos: usize) -> Self {
        Self { kind, pos }
    }

    /// Abort constant evaluation (or panic at run time).
    pub(crate) const fn fail(self) -> ! {
        match self.kind {
            ErrorKind::EmptyInput => panic!("cannot parse integer from empty text"),
            ErrorKind::InvalidSign => panic!("invalid minus sign in integer literal"),
            ErrorKind::InvalidDigit => panic!("invalid digit in integer literal"),
            ErrorKind::Overflow => panic!("integer literal out of range for the type"),
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at position {}", self.kind, self.pos)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}
