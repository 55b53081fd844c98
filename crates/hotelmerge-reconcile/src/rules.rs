//! Per-field merge rules. Each takes the existing value and the incoming
//! value, in that order, and returns the merged value.

use std::collections::HashSet;

use hotelmerge_core::Image;

use crate::case::CaseTransform;
use crate::dedup::DedupSet;

/// Length of an ISO 3166-1 alpha-2 country code.
pub const COUNTRY_CODE_LEN: usize = 2;

/// Keeps whichever value has more characters, then applies `case`.
/// On an exact tie the incoming value wins.
#[must_use]
pub fn longer_string(existing: &str, incoming: &str, case: CaseTransform) -> String {
    let winner = if existing.chars().count() > incoming.chars().count() {
        existing
    } else {
        incoming
    };
    case.apply(winner)
}

/// Prefers a two-letter country code.
///
/// An incoming code always wins; otherwise incoming text only fills an empty
/// existing value.
#[must_use]
pub fn country(existing: &str, incoming: &str) -> String {
    if is_country_code(incoming) || existing.is_empty() {
        incoming.to_string()
    } else {
        existing.to_string()
    }
}

fn is_country_code(s: &str) -> bool {
    s.len() == COUNTRY_CODE_LEN && s.chars().all(|c| c.is_ascii_alphabetic())
}

/// Keeps the existing coordinate unless it is the `0.0` unset sentinel.
#[must_use]
pub fn coordinate(existing: f64, incoming: f64) -> f64 {
    if existing == 0.0 {
        incoming
    } else {
        existing
    }
}

/// Appends every incoming element, trimmed and case-transformed, after the
/// existing ones. Nothing is deduplicated: merging the same list twice
/// repeats it.
#[must_use]
pub fn concat_strings(existing: &[String], incoming: &[String], case: CaseTransform) -> Vec<String> {
    existing
        .iter()
        .cloned()
        .chain(incoming.iter().map(|s| case.apply(s.trim())))
        .collect()
}

/// Normalizes existing and incoming elements and folds them through a
/// [`DedupSet`]. Output order is lexical, not arrival order.
#[must_use]
pub fn dedup_strings(existing: &[String], incoming: &[String], case: CaseTransform) -> Vec<String> {
    existing
        .iter()
        .chain(incoming)
        .map(|s| case.apply(s.trim()))
        .collect::<DedupSet>()
        .into_vec()
}

/// Appends incoming images whose link is not already present. Existing
/// images keep their position and description.
#[must_use]
pub fn union_images_by_link(existing: &[Image], incoming: &[Image]) -> Vec<Image> {
    let mut seen: HashSet<&str> = existing.iter().map(|i| i.link.as_str()).collect();
    let mut merged = existing.to_vec();
    for image in incoming {
        if seen.insert(image.link.as_str()) {
            merged.push(image.clone());
        }
    }
    merged
}
