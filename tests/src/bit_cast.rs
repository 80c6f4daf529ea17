use flatnum::{bit_cast, to_signed, to_unsigned};
use proptest::prelude::*;

#[test]
fn float_pattern() {
    assert_eq!(bit_cast::<u32, f32>(-2.5), 0xc020_0000);
    assert_eq!(bit_cast::<i64, f64>(0.0), 0);
    assert_eq!(bit_cast::<[u8; 4], u32>(u32::from_ne_bytes([1, 2, 3, 4])), [1, 2, 3, 4]);
}

proptest! {
    #[test]
    fn roundtrip_f32(bits: u32) {
        let x = bit_cast::<f32, u32>(bits);
        prop_assert_eq!(bit_cast::<u32, f32>(x), bits);
    }

    #[test]
    fn roundtrip_f64(bits: u64) {
        let x = bit_cast::<f64, u64>(bits);
        prop_assert_eq!(bit_cast::<u64, f64>(x), bits);
    }

    #[test]
    fn roundtrip_i16(x: i16) {
        prop_assert_eq!(bit_cast::<i16, u16>(bit_cast::<u16, i16>(x)), x);
    }

    #[test]
    fn signedness_inverse_i32(x: i32) {
        prop_assert_eq!(to_signed(to_unsigned(x)), x);
        prop_assert_eq!(to_unsigned(x), x as u32);
    }

    #[test]
    fn signedness_inverse_u64(x: u64) {
        prop_assert_eq!(to_unsigned(to_signed(x)), x);
        prop_assert_eq!(to_signed(x), x as i64);
    }
}
