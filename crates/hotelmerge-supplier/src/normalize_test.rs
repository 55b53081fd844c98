use serde_json::json;

use super::*;

// -----------------------------------------------------------------------
// split_camel_case / normalize_facility
// -----------------------------------------------------------------------

#[test]
fn split_camel_case_inserts_spaces_at_boundaries() {
    assert_eq!(split_camel_case("BusinessCenter"), "Business Center");
    assert_eq!(split_camel_case("DryCleaning"), "Dry Cleaning");
    assert_eq!(split_camel_case("Pool"), "Pool");
}

#[test]
fn split_camel_case_leaves_existing_spaces() {
    assert_eq!(split_camel_case("Outdoor Pool"), "Outdoor Pool");
}

#[test]
fn normalize_facility_trims_whitespace() {
    assert_eq!(normalize_facility(" Breakfast"), "Breakfast");
    assert_eq!(normalize_facility("WiFi "), "WiFi");
}

#[test]
fn normalize_facility_keeps_short_names_intact() {
    assert_eq!(normalize_facility("WiFi"), "WiFi");
    assert_eq!(normalize_facility("BathTub"), "Bath Tub");
}

// -----------------------------------------------------------------------
// coerce_coordinates
// -----------------------------------------------------------------------

#[test]
fn coerce_coordinates_accepts_numbers() {
    assert_eq!(
        coerce_coordinates(&json!(1.264_751), &json!(103.824_006)),
        Some((1.264_751, 103.824_006))
    );
}

#[test]
fn coerce_coordinates_accepts_integer_numbers() {
    assert_eq!(coerce_coordinates(&json!(1), &json!(-12)), Some((1.0, -12.0)));
}

#[test]
fn coerce_coordinates_skips_strings_and_nulls() {
    assert_eq!(coerce_coordinates(&json!(""), &json!(103.8)), None);
    assert_eq!(coerce_coordinates(&json!(1.2), &json!(null)), None);
    assert_eq!(coerce_coordinates(&Value::Null, &Value::Null), None);
}
