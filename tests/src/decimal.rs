use flatnum::{format_integer, integer, parse_integer, Error, ErrorKind, Integer};
use proptest::prelude::*;
use std::fmt::Display;

fn check_roundtrip<T: Integer + Display>(x: T) -> Result<(), TestCaseError> {
    let text = format_integer(x);
    prop_assert_eq!(text.as_str(), x.to_string());
    prop_assert_eq!(parse_integer::<T>(&text), Ok(x));
    Ok(())
}

#[test]
fn boundaries() {
    assert_eq!(format_integer(-2147483648i32), "-2147483648");
    assert_eq!(parse_integer::<i32>("-2147483648"), Ok(-2147483648));
    assert_eq!(format_integer(0i32), "0");
}

#[test]
fn error_kinds() {
    let kind = |r: Result<i32, Error>| r.unwrap_err().kind;
    assert_eq!(kind(parse_integer("2147483648")), ErrorKind::Overflow);
    assert_eq!(kind(parse_integer("12a3")), ErrorKind::InvalidDigit);
    assert_eq!(kind(parse_integer("")), ErrorKind::EmptyInput);
    assert_eq!(parse_integer::<u8>("-1").unwrap_err().kind, ErrorKind::InvalidSign);
}

#[test]
fn compile_time_literal() {
    const LIMIT: u32 = integer!(u32, "4294967295");
    assert_eq!(LIMIT, u32::MAX);
}

proptest! {
    #[test]
    fn roundtrip_i8(x: i8) {
        check_roundtrip(x)?;
    }

    #[test]
    fn roundtrip_u8(x: u8) {
        check_roundtrip(x)?;
    }

    #[test]
    fn roundtrip_i16(x: i16) {
        check_roundtrip(x)?;
    }

    #[test]
    fn roundtrip_u16(x: u16) {
        check_roundtrip(x)?;
    }

    #[test]
    fn roundtrip_i32(x: i32) {
        check_roundtrip(x)?;
    }

    #[test]
    fn roundtrip_u32(x: u32) {
        check_roundtrip(x)?;
    }

    #[test]
    fn roundtrip_i64(x: i64) {
        check_roundtrip(x)?;
    }

    #[test]
    fn roundtrip_u64(x: u64) {
        check_roundtrip(x)?;
    }

    #[test]
    fn roundtrip_isize(x: isize) {
        check_roundtrip(x)?;
    }

    #[test]
    fn roundtrip_usize(x: usize) {
        check_roundtrip(x)?;
    }

    #[test]
    fn agrees_with_std(text in "-?[1-9][0-9]{0,11}") {
        prop_assert_eq!(parse_integer::<i32>(&text).ok(), text.parse::<i32>().ok());
        prop_assert_eq!(parse_integer::<u32>(&text).ok(), text.parse::<u32>().ok());
    }
}
