//! Text and coordinate clean-up applied while adapting supplier payloads.
//!
//! Merge-time normalization (case transforms, dedup) lives in the reconcile
//! crate; this module only fixes supplier-specific quirks.

use std::sync::LazyLock;

use regex::Regex;
use serde_json::Value;

/// Facility names this short are left alone by [`normalize_facility`]
/// (e.g. `"WiFi"` must not become `"Wi Fi"`).
pub const CAMEL_SPLIT_MIN_LEN: usize = 4;

static CAMEL_BOUNDARY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\p{Ll})(\p{Lu})").expect("valid camel-case regex"));

/// Inserts a space at every lower-to-upper case boundary:
/// `"BusinessCenter"` → `"Business Center"`.
#[must_use]
pub fn split_camel_case(s: &str) -> String {
    CAMEL_BOUNDARY.replace_all(s, "$1 $2").into_owned()
}

/// Trims a `supplierA` facility name and splits run-together words when the
/// name is longer than [`CAMEL_SPLIT_MIN_LEN`] characters.
#[must_use]
pub fn normalize_facility(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.chars().count() > CAMEL_SPLIT_MIN_LEN {
        split_camel_case(trimmed)
    } else {
        trimmed.to_string()
    }
}

/// Extracts a latitude/longitude pair when both values are JSON numbers.
///
/// Anything else (strings, `null`, missing) yields `None` and the caller
/// leaves the coordinates at the `0.0` unset sentinel. This is a silent skip,
/// not an error.
#[must_use]
pub fn coerce_coordinates(lat: &Value, lng: &Value) -> Option<(f64, f64)> {
    Some((lat.as_f64()?, lng.as_f64()?))
}

#[cfg(test)]
#[path = "normalize_test.rs"]
mod tests;
