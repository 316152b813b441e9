// Pixel to rem conversion table and unit input sanitising.

use crate::constants::{UNITS_DEFAULT_BASE_PX, UNITS_MAX_PX};
use regex::Regex;
use std::sync::OnceLock;
use thiserror::Error;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Unit {
    Px,
    Rem,
}

impl Unit {
    /// Parse a `data-unit` attribute value.
    pub fn from_attr(attr: &str) -> Option<Self> {
        match attr.trim() {
            "px" => Some(Unit::Px),
            "rem" => Some(Unit::Rem),
            _ => None,
        }
    }

    pub fn suffix(self) -> &'static str {
        match self {
            Unit::Px => "px",
            Unit::Rem => "rem",
        }
    }

    fn pattern(self) -> &'static Regex {
        static PX: OnceLock<Regex> = OnceLock::new();
        static REM: OnceLock<Regex> = OnceLock::new();
        match self {
            Unit::Px => PX.get_or_init(|| Regex::new(r"^\d+(?:px)?$").expect("px pattern")),
            Unit::Rem => REM.get_or_init(|| Regex::new(r"^\d+(?:rem)?$").expect("rem pattern")),
        }
    }
}

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum UnitInputError {
    #[error("`{value}` is not a valid {unit} value")]
    Invalid { value: String, unit: &'static str },
}

/// Whether a browser would read `value` as a number: blank, decimal with an
/// optional exponent, `Infinity`, or a `0x`/`0o`/`0b` integer literal.
fn is_numeric(value: &str) -> bool {
    static NUMBER: OnceLock<Regex> = OnceLock::new();
    let number = NUMBER.get_or_init(|| {
        Regex::new(
            r"^(?:[+-]?(?:(?:[0-9]+\.?[0-9]*|\.[0-9]+)(?:[eE][+-]?[0-9]+)?|Infinity)|0[xX][0-9a-fA-F]+|0[oO][0-7]+|0[bB][01]+)$",
        )
        .expect("number pattern")
    });
    let v = value.trim();
    v.is_empty() || number.is_match(v)
}

/// Plain numbers pass through, `12px`-style values lose their unit, anything
/// else is rejected.
pub fn sanitize_unit_input(value: &str, unit: Unit) -> Result<String, UnitInputError> {
    if is_numeric(value) {
        return Ok(value.to_string());
    }
    if unit.pattern().is_match(value) {
        let digits = value.trim_end_matches(unit.suffix());
        if let Ok(n) = digits.parse::<f64>() {
            return Ok(n.to_string());
        }
    }
    Err(UnitInputError::Invalid {
        value: value.to_string(),
        unit: unit.suffix(),
    })
}

/// Base font size in px; falls back to the default on empty, unparsable or
/// non-positive input.
pub fn parse_base_size(raw: &str) -> u32 {
    // leading digits only, like a lenient integer parse
    let digits: String = raw
        .trim()
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .collect();
    match digits.parse::<u32>() {
        Ok(n) if n > 0 => n,
        _ => UNITS_DEFAULT_BASE_PX,
    }
}

/// `px / base` rounded to two decimals, trailing zeros stripped.
pub fn format_rem(px: u32, base: u32) -> String {
    let base = if base == 0 { UNITS_DEFAULT_BASE_PX } else { base };
    let s = format!("{:.2}", px as f64 / base as f64);
    s.trim_end_matches('0').trim_end_matches('.').to_string()
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnitCell {
    pub px: u32,
    pub rem: String,
}

/// Table rows of two cells each: (1, 2), (3, 4), ... up to the max px.
pub fn unit_rows(base: u32) -> Vec<[UnitCell; 2]> {
    (1..=UNITS_MAX_PX)
        .step_by(2)
        .map(|px| {
            [
                UnitCell {
                    px,
                    rem: format_rem(px, base),
                },
                UnitCell {
                    px: px + 1,
                    rem: format_rem(px + 1, base),
                },
            ]
        })
        .collect()
}

const COPY_ICON: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" class="copy-icon neutral-500" width="13" height="13" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"><rect width="14" height="14" x="8" y="8" rx="2" ry="2"/><path d="M4 16c-1.1 0-2-.9-2-2V4c0-1.1.9-2 2-2h10c1.1 0 2 .9 2 2"/></svg>"#;

fn copy_cell(value: &str, unit: &str, label: &str) -> String {
    format!(
        r#"<td><div class="fl-row al-center gap-1" data-clipboard-text="{value}{unit}"><span>{value}<span class="unit">{unit}</span></span><span class="sr-only">{label}</span><span class="copy-area fl-row al-center jc-center">{COPY_ICON}<span class="tooltip">Copied!</span></span></div></td>"#
    )
}

fn index_cell(px: u32) -> String {
    format!(
        r#"<td class="text-center" style="background-color:hsl(0 0% 5%);inline-size:2rem">{px}</td>"#
    )
}

pub fn row_markup(row: &[UnitCell; 2]) -> String {
    let mut html = String::from("<tr>");
    for cell in row {
        let px = cell.px.to_string();
        html.push_str(&index_cell(cell.px));
        html.push_str(&copy_cell(
            &px,
            "px",
            &format!("Copy {} pixels to clipboard", cell.px),
        ));
        html.push_str(&copy_cell(
            &cell.rem,
            "rem",
            &format!("Copy {} pixels as rem to clipboard", cell.px),
        ));
    }
    html.push_str("</tr>");
    html
}
