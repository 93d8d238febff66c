use pretty_assertions::assert_eq;

use crate::error::Error;
use crate::params::Param;
use crate::value::{FromValue, Value};

#[test]
fn integers_convert_within_range() {
    assert_eq!(i64::from_value(Value::SignedInt(-42)).unwrap(), -42);
    assert_eq!(i8::from_value(Value::SignedInt(-128)).unwrap(), -128);
    assert_eq!(u8::from_value(Value::SignedInt(255)).unwrap(), 255);
    assert_eq!(i64::from_value(Value::UnsignedInt(7)).unwrap(), 7);
    assert_eq!(
        u64::from_value(Value::UnsignedInt(u64::MAX)).unwrap(),
        u64::MAX
    );
    assert_eq!(i32::from_value(Value::Bool(true)).unwrap(), 1);
}

#[test]
fn integers_out_of_range_are_rejected() {
    assert!(matches!(
        u8::from_value(Value::SignedInt(256)),
        Err(Error::BadUsageError(_))
    ));
    assert!(matches!(
        u32::from_value(Value::SignedInt(-1)),
        Err(Error::BadUsageError(_))
    ));
    assert!(matches!(
        i64::from_value(Value::UnsignedInt(u64::MAX)),
        Err(Error::BadUsageError(_))
    ));
}

#[test]
fn incompatible_variants_are_rejected() {
    let err = i64::from_value(Value::from("12")).unwrap_err();
    match err {
        Error::BadUsageError(msg) => assert_eq!(msg, "Cannot decode TEXT to i64"),
        other => panic!("unexpected error: {}", other),
    }
    assert!(String::from_value(Value::Null).is_err());
    assert!(Vec::<u8>::from_value(Value::SignedInt(1)).is_err());
}

#[test]
fn null_maps_to_none() {
    assert_eq!(Option::<i64>::from_value(Value::Null).unwrap(), None);
    assert_eq!(
        Option::<i64>::from_value(Value::SignedInt(3)).unwrap(),
        Some(3)
    );
    assert_eq!(
        Option::<String>::from_value(Value::from("x")).unwrap(),
        Some("x".to_string())
    );
}

#[test]
fn floats_and_bools() {
    assert_eq!(f64::from_value(Value::Double(2.5)).unwrap(), 2.5);
    assert_eq!(f64::from_value(Value::SignedInt(2)).unwrap(), 2.0);
    assert_eq!(f32::from_value(Value::Double(0.5)).unwrap(), 0.5);
    assert!(bool::from_value(Value::SignedInt(1)).unwrap());
    assert!(!bool::from_value(Value::SignedInt(0)).unwrap());
    assert!(bool::from_value(Value::Double(1.0)).is_err());
}

#[test]
fn text_and_bytes() {
    assert_eq!(
        String::from_value(Value::Bytes(b"abc".to_vec())).unwrap(),
        "abc"
    );
    assert!(String::from_value(Value::Bytes(vec![0xff])).is_err());
    assert_eq!(
        String::from_value(Value::Other("12.50".to_string())).unwrap(),
        "12.50"
    );
    assert_eq!(
        Vec::<u8>::from_value(Value::from("hi")).unwrap(),
        b"hi".to_vec()
    );
}

#[test]
fn accessors() {
    assert!(Value::Null.is_null());
    assert!(!Value::SignedInt(0).is_null());
    assert_eq!(Value::from("a").as_str(), Some("a"));
    assert_eq!(Value::SignedInt(1).as_str(), None);
    assert_eq!(Value::Bytes(vec![1]).as_bytes(), Some(&[1u8][..]));
    assert_eq!(Value::UnsignedInt(5).as_i64(), Some(5));
    assert_eq!(Value::UnsignedInt(u64::MAX).as_i64(), None);
    assert_eq!(Value::SignedInt(9).get::<u16>().unwrap(), 9);
}

#[test]
fn conversions_into_value() {
    assert_eq!(Value::from(1u8), Value::SignedInt(1));
    assert_eq!(Value::from(u64::MAX), Value::UnsignedInt(u64::MAX));
    assert_eq!(Value::from(1.5f32), Value::Double(1.5));
    assert_eq!(Value::from(None::<i32>), Value::Null);
    assert_eq!(Value::from(Some("x")), Value::from("x"));
    assert_eq!(Value::from(&b"ab"[..]), Value::Bytes(b"ab".to_vec()));
}

#[test]
fn params_to_values() {
    assert_eq!(42i32.to_value(), Value::SignedInt(42));
    assert_eq!("alice".to_value(), Value::from("alice"));
    assert_eq!(String::from("bob").to_value(), Value::from("bob"));
    assert_eq!(None::<String>.to_value(), Value::Null);
    assert_eq!(Some(true).to_value(), Value::Bool(true));
    assert_eq!(vec![1u8, 2].to_value(), Value::Bytes(vec![1, 2]));
    assert_eq!(Value::Double(0.25).to_value(), Value::Double(0.25));
}
