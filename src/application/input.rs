//! Trip form input
//!
//! Riders type distance and wait time as free text. Parsing is lenient: the
//! longest leading number is taken and anything unparsable counts as zero.
//! Negative numbers survive parsing and are rejected by validation.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::{DomainError, DomainResult, FareInput};

/// Message shown when the form holds negative numbers.
pub const INVALID_NUMBERS_MESSAGE: &str = "Please enter valid numbers";

/// Parse the leading number of `text`, or `0.0` when there is none.
///
/// Accepts an optional sign, digits with an optional fraction, and an
/// optional exponent. Trailing garbage is ignored: `"12km"` is `12.0`.
pub fn parse_numeric_input(text: &str) -> f64 {
    let text = text.trim();
    let end = numeric_prefix_len(text);
    if end == 0 {
        return 0.0;
    }

    match text[..end].parse::<f64>() {
        // `-0` is normalised to plain zero
        Ok(value) if value.is_finite() && value != 0.0 => value,
        _ => 0.0,
    }
}

fn numeric_prefix_len(text: &str) -> usize {
    let bytes = text.as_bytes();
    let mut i = 0;

    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        i += 1;
    }

    let int_start = i;
    while i < bytes.len() && bytes[i].is_ascii_digit() {
        i += 1;
    }
    let mut digits = i - int_start;

    if i < bytes.len() && bytes[i] == b'.' {
        let frac_start = i + 1;
        let mut j = frac_start;
        while j < bytes.len() && bytes[j].is_ascii_digit() {
            j += 1;
        }
        if digits > 0 || j > frac_start {
            digits += j - frac_start;
            i = j;
        }
    }

    if digits == 0 {
        return 0;
    }

    // exponent only counts when at least one digit follows it
    if i < bytes.len() && (bytes[i] == b'e' || bytes[i] == b'E') {
        let mut j = i + 1;
        if j < bytes.len() && (bytes[j] == b'+' || bytes[j] == b'-') {
            j += 1;
        }
        let exp_start = j;
        while j < bytes.len() && bytes[j].is_ascii_digit() {
            j += 1;
        }
        if j > exp_start {
            i = j;
        }
    }

    i
}

/// Raw values from the trip form.
///
/// `FareRequest::default()` is the cleared form.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct FareRequest {
    #[validate(range(min = 0.0, message = "distance must not be negative"))]
    pub distance_km: f64,
    #[validate(range(min = 0.0, message = "wait time must not be negative"))]
    pub wait_minutes: f64,
}

impl FareRequest {
    pub fn new(distance_km: f64, wait_minutes: f64) -> Self {
        Self {
            distance_km,
            wait_minutes,
        }
    }

    /// Build a request from the two text fields of the form.
    pub fn from_text(distance: &str, wait_time: &str) -> Self {
        Self::new(parse_numeric_input(distance), parse_numeric_input(wait_time))
    }

    /// Validate and convert into calculator input.
    pub fn into_input(self) -> DomainResult<FareInput> {
        if let Err(errors) = self.validate() {
            let field_errors = errors.field_errors();
            let field = if field_errors.contains_key("distance_km") {
                "distance_km"
            } else {
                "wait_minutes"
            };
            return Err(DomainError::invalid_input(field, "must not be negative"));
        }

        FareInput::from_f64(self.distance_km, self.wait_minutes)
    }
}
