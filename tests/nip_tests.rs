#![cfg(feature = "core")]

use firma::nip::*;

// ---------------------------------------------------------------------------
// Normalization
// ---------------------------------------------------------------------------

#[test]
fn normalize_strips_non_digits() {
    assert_eq!(normalize_nip("abc123def456ghi789jkl0"), "1234567890");
}

#[test]
fn normalize_truncates_overlong_input() {
    assert_eq!(normalize_nip("12345678901234"), "1234567890");
}

#[test]
fn normalize_vat_prefixed_input() {
    assert_eq!(normalize_nip("PL1234563218"), "1234563218");
}

#[test]
fn normalize_is_idempotent_on_examples() {
    for raw in ["", "12-34", "PL 526-025-02-74", "x9y8z7", "12345678901234"] {
        let once = normalize_nip(raw);
        assert_eq!(normalize_nip(&once), once, "{raw}");
    }
}

// ---------------------------------------------------------------------------
// Formatting
// ---------------------------------------------------------------------------

#[test]
fn partial_formatting_while_typing() {
    assert_eq!(format_nip(&normalize_nip("123")), "123");
    assert_eq!(format_nip(&normalize_nip("123456")), "123-456");
    assert_eq!(format_nip(&normalize_nip("12345678")), "123-456-78");
    assert_eq!(format_nip(&normalize_nip("1234567890")), "123-456-78-90");
}

#[test]
fn formatting_snapshots() {
    insta::assert_snapshot!(format_nip("5260250274"), @"526-025-02-74");
    insta::assert_snapshot!(format_nip("PL 774 000 14 54 extra 99"), @"774-000-14-54");
    insta::assert_snapshot!(Nip::parse("1234563218").unwrap().to_string(), @"123-456-32-18");
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

#[test]
fn known_valid_nip() {
    let result = check_nip("1234563218");
    assert!(result.is_valid);
    assert_eq!(result.error_reason, ErrorReason::None);
}

#[test]
fn known_bad_checksum() {
    let result = check_nip("1234567890");
    assert!(!result.is_valid);
    assert_eq!(result.error_reason, ErrorReason::BadChecksum);
}

#[test]
fn nine_digits_wrong_length() {
    let result = check_nip("123456789");
    assert!(!result.is_valid);
    assert_eq!(result.error_reason, ErrorReason::WrongLength);
}

#[test]
fn repeated_digits_rejected() {
    let result = check_nip("1111111111");
    assert!(!result.is_valid);
    assert_eq!(result.error_reason, ErrorReason::RepeatedDigits);
    for d in 0..=9 {
        let nip = d.to_string().repeat(10);
        assert_eq!(validate_nip(&nip), Err(NipError::RepeatedDigits), "{nip}");
    }
}

#[test]
fn validation_is_deterministic() {
    for input in ["1234563218", "1234567890", "1111111111", "12"] {
        assert_eq!(check_nip(input), check_nip(input));
    }
}

#[test]
fn remainder_ten_prefix_never_validates() {
    assert_eq!(nip_check_digit(&[1, 2, 3, 4, 5, 6, 7, 8, 9]), None);
    for last in 0..=9 {
        let nip = format!("123456789{last}");
        assert_eq!(validate_nip(&nip), Err(NipError::BadChecksum), "{nip}");
    }
}

#[test]
fn overlong_input_is_not_truncated_by_validator() {
    assert_eq!(validate_nip("12345632180"), Err(NipError::WrongLength));
}

#[test]
fn unicode_digits_do_not_count() {
    // Fullwidth "8" instead of ASCII
    assert_eq!(validate_nip("123456321８"), Err(NipError::WrongLength));
}

#[test]
fn error_messages() {
    assert_eq!(NipError::WrongLength.to_string(), "NIP must have exactly 10 digits");
    assert_eq!(NipError::BadChecksum.to_string(), "NIP check digit does not match");
}

// ---------------------------------------------------------------------------
// Serialization
// ---------------------------------------------------------------------------

#[test]
fn validation_result_json_shape() {
    let json = serde_json::to_value(check_nip("1234563218")).unwrap();
    assert_eq!(json, serde_json::json!({ "isValid": true, "errorReason": "NONE" }));

    let json = serde_json::to_value(check_nip("1111111111")).unwrap();
    assert_eq!(
        json,
        serde_json::json!({ "isValid": false, "errorReason": "REPEATED_DIGITS" })
    );
}

#[test]
fn nip_serializes_as_digits() {
    let nip = Nip::parse("123-456-32-18").unwrap();
    assert_eq!(serde_json::to_string(&nip).unwrap(), "\"1234563218\"");
}

#[test]
fn nip_deserialization_validates() {
    let nip: Nip = serde_json::from_str("\"526-025-02-74\"").unwrap();
    assert_eq!(nip.digits(), "5260250274");
    assert!(serde_json::from_str::<Nip>("\"1234567890\"").is_err());
}

// ---------------------------------------------------------------------------
// Field policy
// ---------------------------------------------------------------------------

#[test]
fn field_config_from_json_defaults() {
    let config: FieldConfig = serde_json::from_str("{}").unwrap();
    assert_eq!(config, FieldConfig::default());

    let config: FieldConfig = serde_json::from_str(r#"{"mode":"real_time"}"#).unwrap();
    assert_eq!(config.mode, ValidationMode::RealTime);
    assert!(config.required);
}

#[test]
fn field_typing_session_on_blur() {
    let mut field = NipField::new(FieldConfig::new());
    let mut shown = Vec::new();
    let mut typed = String::new();
    for c in "5260250274".chars() {
        typed.push(c);
        let change = field.input(&typed);
        assert_eq!(change.validation, None);
        shown.push(change.formatted);
    }
    assert_eq!(shown[2], "526");
    assert_eq!(shown[3], "526-0");
    assert_eq!(shown[9], "526-025-02-74");

    assert_eq!(field.blur(), Some(ValidationResult::VALID));
    assert!(field.is_valid());
}

#[test]
fn field_typing_session_real_time() {
    let mut field = NipField::new(FieldConfig::new().with_mode(ValidationMode::RealTime));
    let change = field.input("123-456-78-90");
    assert_eq!(
        change.validation,
        Some(ValidationResult::invalid(NipError::BadChecksum))
    );
    assert_eq!(field.error(), Some(NipError::BadChecksum));
}
