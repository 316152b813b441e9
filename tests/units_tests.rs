// Host-side tests for the px to rem tool.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod core {
    pub mod units {
        include!("../src/core/units.rs");
    }
}

use crate::core::units::*;

#[test]
fn rem_values_are_rounded_and_trimmed() {
    assert_eq!(format_rem(3, 16), "0.19");
    assert_eq!(format_rem(4, 16), "0.25");
    assert_eq!(format_rem(8, 16), "0.5");
    assert_eq!(format_rem(16, 16), "1");
    assert_eq!(format_rem(24, 16), "1.5");
    assert_eq!(format_rem(200, 16), "12.5");
    assert_eq!(format_rem(20, 10), "2");
}

#[test]
fn zero_base_falls_back_to_default() {
    assert_eq!(format_rem(32, 0), "2");
}

#[test]
fn base_size_parsing() {
    assert_eq!(parse_base_size("18"), 18);
    assert_eq!(parse_base_size(" 20 "), 20);
    assert_eq!(parse_base_size("14px"), 14);
    assert_eq!(parse_base_size(""), 16);
    assert_eq!(parse_base_size("abc"), 16);
    assert_eq!(parse_base_size("0"), 16);
    assert_eq!(parse_base_size("-4"), 16);
}

#[test]
fn rows_cover_every_pixel_in_pairs() {
    let rows = unit_rows(16);
    assert_eq!(rows.len(), 100);
    assert_eq!(rows[0][0].px, 1);
    assert_eq!(rows[0][1].px, 2);
    assert_eq!(rows[99][0].px, 199);
    assert_eq!(rows[99][1].px, 200);
    assert_eq!(rows[99][1].rem, "12.5");
    for (i, row) in rows.iter().enumerate() {
        assert_eq!(row[0].px as usize, 2 * i + 1);
        assert_eq!(row[1].px, row[0].px + 1);
    }
}

#[test]
fn row_markup_carries_copy_targets() {
    let rows = unit_rows(16);
    let html = row_markup(&rows[7]);
    assert!(html.starts_with("<tr>") && html.ends_with("</tr>"));
    assert!(html.contains(r#"data-clipboard-text="15px""#));
    assert!(html.contains(r#"data-clipboard-text="16px""#));
    assert!(html.contains(r#"data-clipboard-text="1rem""#));
    assert!(html.contains("Copy 16 pixels as rem to clipboard"));
    assert_eq!(html.matches("<td").count(), 6);
}

#[test]
fn unit_attribute() {
    assert_eq!(Unit::from_attr("px"), Some(Unit::Px));
    assert_eq!(Unit::from_attr(" rem "), Some(Unit::Rem));
    assert_eq!(Unit::from_attr("em"), None);
}

#[test]
fn numeric_input_passes_through() {
    assert_eq!(sanitize_unit_input("12", Unit::Px), Ok("12".to_string()));
    assert_eq!(sanitize_unit_input("1.5", Unit::Rem), Ok("1.5".to_string()));
    assert_eq!(sanitize_unit_input("", Unit::Px), Ok(String::new()));
}

#[test]
fn matching_unit_suffix_is_stripped() {
    assert_eq!(sanitize_unit_input("12px", Unit::Px), Ok("12".to_string()));
    assert_eq!(sanitize_unit_input("007px", Unit::Px), Ok("7".to_string()));
    assert_eq!(sanitize_unit_input("3rem", Unit::Rem), Ok("3".to_string()));
}

#[test]
fn other_input_is_rejected() {
    assert!(sanitize_unit_input("12rem", Unit::Px).is_err());
    assert!(sanitize_unit_input("12px", Unit::Rem).is_err());
    assert!(sanitize_unit_input("abc", Unit::Px).is_err());
    let err = sanitize_unit_input("1.5px", Unit::Px).unwrap_err();
    assert_eq!(err.to_string(), "`1.5px` is not a valid px value");
}

#[test]
fn number_literals_follow_browser_parsing() {
    // accepted as numbers, left untouched
    for ok in ["0x10", "0b101", "0o17", "1e3", "-2.5", ".5", "5.", "Infinity", " 42 "] {
        assert_eq!(sanitize_unit_input(ok, Unit::Px), Ok(ok.to_string()), "{}", ok);
    }
    // not numbers and not `<digits>px`
    for bad in ["inf", "infinity", "NaN", "-0x10", "1e", ".", "1_000", "١٢"] {
        assert!(sanitize_unit_input(bad, Unit::Px).is_err(), "{}", bad);
    }
}
