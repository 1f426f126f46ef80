use firma::money::*;
use firma::nip::*;
use firma::regon::*;
use firma::{format_date, parse_date};
use rust_decimal::Decimal;

fn main() {
    // NIP validation (no network required)
    println!("=== NIP Validation ===\n");

    let test_nips = [
        "1234563218",
        "PL 526-025-02-74",
        "1234567890", // remainder 10, no valid check digit
        "1111111111", // repeated digits
        "123456789",  // too short
    ];

    for input in &test_nips {
        match validate_nip(input) {
            Ok(nip) => println!("  {input} => valid ({nip}, VAT ID {})", nip.vat_id()),
            Err(e) => println!("  {input} => INVALID: {e}"),
        }
    }

    // What the input field shows while typing
    println!("\n=== Typing Session (real-time) ===\n");

    let mut field = NipField::new(FieldConfig::new().with_mode(ValidationMode::RealTime));
    let target = "5260250274";
    for n in 1..=target.len() {
        let change = field.input(&target[..n]);
        let status = change
            .validation
            .map(|v| format!("{:?}", v.error_reason))
            .unwrap_or_default();
        println!("  {:<14} {status}", change.formatted);
    }

    // REGON validation
    println!("\n=== REGON Validation ===\n");

    for input in ["123456785", "12345678512347", "123456784"] {
        match validate_regon(input) {
            Ok(regon) => println!("  {input} => valid ({:?})", regon.kind()),
            Err(e) => println!("  {input} => INVALID: {e}"),
        }
    }

    // Amounts and dates
    println!("\n=== Amounts & Dates ===\n");

    for input in ["1234,5", "12 345,678", "1 000 000 zł", "12,3,4"] {
        match parse_amount(input) {
            Ok(amount) => println!("  {input:?} => {}", format_pln(amount)),
            Err(e) => println!("  {input:?} => {e}"),
        }
    }
    println!("  {}", format_pln(Decimal::new(-9876540, 2)));

    match parse_date("2024-06-15") {
        Ok(date) => println!("  2024-06-15 => {}", format_date(date)),
        Err(e) => println!("  {e}"),
    }
}
