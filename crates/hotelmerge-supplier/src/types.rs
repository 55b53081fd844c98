//! Raw payload shapes published by each hotel supplier.
//!
//! Every supplier serves a JSON array of hotel objects; one element binds to
//! one of the structs below.
//!
//! ## Observed shape notes
//!
//! ### Identity
//! The hotel id and destination id are the only required fields. A payload
//! without them, or with a destination id that is not an integer, does not
//! belong to this supplier and fails to bind.
//!
//! ### Coordinates
//! `supplierA` and `supplierC` publish latitude/longitude as numbers most of
//! the time, but empty strings and `null` have been seen in the wild. They are
//! kept as raw [`serde_json::Value`] here and coerced in [`crate::normalize`].
//!
//! ### `null` text
//! Optional text and list fields may be `null` rather than omitted; both
//! decode to the empty value.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// One hotel from `supplierA`. PascalCase keys, flat location, amenity
/// names run together in CamelCase (e.g. `"BusinessCenter"`).
#[derive(Debug, Clone, Deserialize)]
pub struct SupplierAHotel {
    #[serde(rename = "Id")]
    pub id: String,

    #[serde(rename = "DestinationId")]
    pub destination_id: i64,

    #[serde(rename = "Name", default, deserialize_with = "null_as_default")]
    pub name: String,

    #[serde(rename = "Latitude", default)]
    pub latitude: Value,

    #[serde(rename = "Longitude", default)]
    pub longitude: Value,

    #[serde(rename = "Address", default, deserialize_with = "null_as_default")]
    pub address: String,

    #[serde(rename = "City", default, deserialize_with = "null_as_default")]
    pub city: String,

    #[serde(rename = "Country", default, deserialize_with = "null_as_default")]
    pub country: String,

    /// Published but not part of the canonical record.
    #[serde(rename = "PostalCode", default, deserialize_with = "null_as_default")]
    pub postal_code: String,

    #[serde(rename = "Description", default, deserialize_with = "null_as_default")]
    pub description: String,

    #[serde(rename = "Facilities", default, deserialize_with = "null_as_default")]
    pub facilities: Vec<String>,
}

/// One hotel from `supplierB`. snake_case keys, nested location and
/// amenities, images captioned rather than described.
#[derive(Debug, Clone, Deserialize)]
pub struct SupplierBHotel {
    pub hotel_id: String,

    pub destination_id: i64,

    #[serde(default, deserialize_with = "null_as_default")]
    pub hotel_name: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub location: SupplierBLocation,

    #[serde(default, deserialize_with = "null_as_default")]
    pub details: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub amenities: SupplierBAmenities,

    #[serde(default, deserialize_with = "null_as_default")]
    pub images: SupplierBImages,

    #[serde(default, deserialize_with = "null_as_default")]
    pub booking_conditions: Vec<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SupplierBLocation {
    #[serde(default, deserialize_with = "null_as_default")]
    pub address: String,
    /// Usually a full country name (e.g. `"Singapore"`), not a code.
    #[serde(default, deserialize_with = "null_as_default")]
    pub country: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SupplierBAmenities {
    #[serde(default, deserialize_with = "null_as_default")]
    pub general: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub room: Vec<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SupplierBImages {
    #[serde(default, deserialize_with = "null_as_default")]
    pub rooms: Vec<SupplierBImage>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub site: Vec<SupplierBImage>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SupplierBImage {
    pub link: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub caption: String,
}

/// One hotel from `supplierC`. Short lowercase keys, flat location, a single
/// amenity list that describes rooms, images keyed by `url`.
#[derive(Debug, Clone, Deserialize)]
pub struct SupplierCHotel {
    pub id: String,

    pub destination: i64,

    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,

    #[serde(default)]
    pub lat: Value,

    #[serde(default)]
    pub lng: Value,

    #[serde(default, deserialize_with = "null_as_default")]
    pub address: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub info: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub amenities: Vec<String>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub images: SupplierCImages,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SupplierCImages {
    #[serde(default, deserialize_with = "null_as_default")]
    pub rooms: Vec<SupplierCImage>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub amenities: Vec<SupplierCImage>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SupplierCImage {
    pub url: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
}

/// Decodes an explicit `null` as `T::default()`. Combined with
/// `#[serde(default)]` this covers both the omitted and the `null` case.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}
