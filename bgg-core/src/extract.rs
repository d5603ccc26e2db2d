//! Typed field readers over a possibly-absent [`Element`].
//!
//! The defensive readers (`string_value`, `int_value`, `bool_value`,
//! `decimal_value`) never fail: an absent node, an absent attribute, or text
//! that does not parse as the target type all yield the caller's default.
//! With `attribute: None` they read the element's text instead.
//!
//! The `require_*` readers are their strict counterparts for the few fields
//! that are mapped without a fallback. They return [`MapError`] and let the
//! caller fail the whole mapping.

use chrono::NaiveDate;

use crate::error::MapError;
use crate::xml::Element;

/// Walk `path` from an optional starting node.
pub fn descend<'a>(node: Option<&'a Element>, path: &[&str]) -> Option<&'a Element> {
    node?.path(path)
}

fn raw_value<'a>(node: Option<&'a Element>, attribute: Option<&str>) -> Option<&'a str> {
    let node = node?;
    match attribute {
        Some(name) => node.attr(name),
        None => Some(node.text()),
    }
}

pub fn string_value(node: Option<&Element>, attribute: Option<&str>, default: &str) -> String {
    raw_value(node, attribute).unwrap_or(default).to_string()
}

pub fn int_value(node: Option<&Element>, attribute: Option<&str>, default: i32) -> i32 {
    raw_value(node, attribute)
        .and_then(parse_int)
        .unwrap_or(default)
}

/// Only the integer `1` is true. Other integers are false; text that is not
/// an integer at all falls back to `default`.
pub fn bool_value(node: Option<&Element>, attribute: Option<&str>, default: bool) -> bool {
    raw_value(node, attribute)
        .and_then(parse_int)
        .map_or(default, |v| v == 1)
}

pub fn decimal_value(node: Option<&Element>, attribute: Option<&str>, default: f64) -> f64 {
    raw_value(node, attribute)
        .and_then(parse_decimal)
        .unwrap_or(default)
}

pub fn parse_int(text: &str) -> Option<i32> {
    text.trim().parse().ok()
}

/// Finite decimal numbers only; `NaN` and `inf` spellings are rejected.
pub fn parse_decimal(text: &str) -> Option<f64> {
    text.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Parse a strict `yyyy-MM-dd` date, or [`NaiveDate::MIN`] for anything else.
pub fn date_value(text: &str) -> NaiveDate {
    parse_strict_date(text).unwrap_or(NaiveDate::MIN)
}

fn parse_strict_date(text: &str) -> Option<NaiveDate> {
    let bytes = text.as_bytes();
    let shape_ok = bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        });
    if !shape_ok {
        return None;
    }
    NaiveDate::parse_from_str(text, "%Y-%m-%d").ok()
}

// ---------------------------------------------------------------------------
// Strict readers
// ---------------------------------------------------------------------------

pub fn require_child<'a>(node: &'a Element, name: &str) -> Result<&'a Element, MapError> {
    node.child(name)
        .ok_or_else(|| MapError::missing_element(name))
}

pub fn require_attr<'a>(node: &'a Element, attribute: &str) -> Result<&'a str, MapError> {
    node.attr(attribute)
        .ok_or_else(|| MapError::missing_attribute(node.name(), attribute))
}

pub fn require_int(node: &Element, attribute: &str) -> Result<i32, MapError> {
    let raw = require_attr(node, attribute)?;
    parse_int(raw).ok_or_else(|| MapError::invalid_value(node.name(), raw, "integer"))
}

pub fn require_decimal(node: &Element, attribute: &str) -> Result<f64, MapError> {
    let raw = require_attr(node, attribute)?;
    parse_decimal(raw).ok_or_else(|| MapError::invalid_value(node.name(), raw, "decimal"))
}

/// `value` attribute of a required child, e.g. `<minplayers value="2"/>`.
pub fn require_child_value<'a>(node: &'a Element, name: &str) -> Result<&'a str, MapError> {
    require_attr(require_child(node, name)?, "value")
}

pub fn require_child_int(node: &Element, name: &str) -> Result<i32, MapError> {
    require_int(require_child(node, name)?, "value")
}

#[cfg(test)]
#[path = "tests/extract_tests.rs"]
mod tests;
