#![cfg(feature = "regon")]

use firma::regon::*;

#[test]
fn short_regon() {
    let regon = Regon::parse("123 456 785").unwrap();
    assert_eq!(regon.digits(), "123456785");
    assert_eq!(regon.kind(), RegonKind::Short);
}

#[test]
fn long_regon_extends_base() {
    let regon: Regon = "12345678512347".parse().unwrap();
    assert_eq!(regon.kind(), RegonKind::Long);
    assert_eq!(regon.base(), "123456785");
    assert!(validate_regon(regon.base()).is_ok());
}

#[test]
fn every_wrong_check_digit_rejected() {
    for last in (0..=9).filter(|&d| d != 5) {
        let regon = format!("12345678{last}");
        assert_eq!(validate_regon(&regon), Err(RegonError::BadChecksum), "{regon}");
    }
}

#[test]
fn long_regon_with_invalid_base() {
    assert_eq!(
        validate_regon("12345678012347"),
        Err(RegonError::BadBaseChecksum)
    );
}

#[test]
fn nip_length_is_not_a_regon() {
    assert_eq!(validate_regon("1234563218"), Err(RegonError::WrongLength));
}

#[test]
fn serde_roundtrip_validates() {
    let regon = Regon::parse("123456785").unwrap();
    let json = serde_json::to_string(&regon).unwrap();
    assert_eq!(json, "\"123456785\"");
    assert!(serde_json::from_str::<Regon>("\"123456784\"").is_err());
}

#[test]
fn converts_into_crate_error() {
    let err: firma::FirmaError = RegonError::WrongLength.into();
    assert_eq!(err.to_string(), "invalid REGON: REGON must have 9 or 14 digits");
}
