//! Supplier adapters: bind a raw JSON value to a supplier's payload shape
//! and expose it through the canonical [`HotelFields`] accessors.

use std::str::FromStr;

use hotelmerge_core::{Amenities, HotelFields, Image, Images, Location};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::SupplierError;
use crate::normalize::{coerce_coordinates, normalize_facility};
use crate::types::{SupplierAHotel, SupplierBHotel, SupplierCHotel};

/// The registered suppliers, selected by the key used in the supplier
/// source configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SupplierKind {
    A,
    B,
    C,
}

impl SupplierKind {
    pub const ALL: [SupplierKind; 3] = [SupplierKind::A, SupplierKind::B, SupplierKind::C];

    /// Registration key, e.g. `"supplierA"`.
    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            SupplierKind::A => "supplierA",
            SupplierKind::B => "supplierB",
            SupplierKind::C => "supplierC",
        }
    }

    /// Binds one raw payload element to this supplier's shape.
    ///
    /// # Errors
    ///
    /// Returns [`SupplierError::Decode`] if the value does not fit the shape
    /// (missing id or destination id, wrong field types), or
    /// [`SupplierError::EmptyId`] if the hotel id is blank.
    pub fn decode(self, raw: Value) -> Result<SupplierRecord, SupplierError> {
        let record = match self {
            SupplierKind::A => SupplierRecord::A(bind(self, raw)?),
            SupplierKind::B => SupplierRecord::B(bind(self, raw)?),
            SupplierKind::C => SupplierRecord::C(bind(self, raw)?),
        };
        if record.id().is_empty() {
            return Err(SupplierError::EmptyId {
                supplier: self.key(),
            });
        }
        Ok(record)
    }
}

impl FromStr for SupplierKind {
    type Err = SupplierError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SupplierKind::ALL
            .into_iter()
            .find(|kind| kind.key() == s)
            .ok_or_else(|| SupplierError::UnknownSupplierKey(s.to_string()))
    }
}

impl std::fmt::Display for SupplierKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

fn bind<T: DeserializeOwned>(kind: SupplierKind, raw: Value) -> Result<T, SupplierError> {
    serde_json::from_value(raw).map_err(|source| SupplierError::Decode {
        context: format!("{kind} record"),
        source,
    })
}

/// A decoded hotel payload from one supplier.
#[derive(Debug, Clone)]
pub enum SupplierRecord {
    A(SupplierAHotel),
    B(SupplierBHotel),
    C(SupplierCHotel),
}

impl SupplierRecord {
    #[must_use]
    pub fn kind(&self) -> SupplierKind {
        match self {
            SupplierRecord::A(_) => SupplierKind::A,
            SupplierRecord::B(_) => SupplierKind::B,
            SupplierRecord::C(_) => SupplierKind::C,
        }
    }
}

impl HotelFields for SupplierRecord {
    fn id(&self) -> &str {
        match self {
            SupplierRecord::A(h) => h.id.trim(),
            SupplierRecord::B(h) => h.hotel_id.trim(),
            SupplierRecord::C(h) => h.id.trim(),
        }
    }

    fn destination_id(&self) -> i64 {
        match self {
            SupplierRecord::A(h) => h.destination_id,
            SupplierRecord::B(h) => h.destination_id,
            SupplierRecord::C(h) => h.destination,
        }
    }

    fn name(&self) -> &str {
        match self {
            SupplierRecord::A(h) => h.name.trim(),
            SupplierRecord::B(h) => h.hotel_name.trim(),
            SupplierRecord::C(h) => h.name.trim(),
        }
    }

    fn location(&self) -> Location {
        match self {
            SupplierRecord::A(h) => with_coordinates(
                Location {
                    address: h.address.trim().to_string(),
                    city: h.city.trim().to_string(),
                    country: h.country.trim().to_string(),
                    ..Location::default()
                },
                &h.latitude,
                &h.longitude,
                &h.id,
            ),
            SupplierRecord::B(h) => Location {
                address: h.location.address.trim().to_string(),
                country: h.location.country.trim().to_string(),
                ..Location::default()
            },
            SupplierRecord::C(h) => with_coordinates(
                Location {
                    address: h.address.trim().to_string(),
                    ..Location::default()
                },
                &h.lat,
                &h.lng,
                &h.id,
            ),
        }
    }

    fn description(&self) -> &str {
        match self {
            SupplierRecord::A(h) => h.description.trim(),
            SupplierRecord::B(h) => h.details.trim(),
            SupplierRecord::C(h) => h.info.trim(),
        }
    }

    fn amenities(&self) -> Amenities {
        match self {
            SupplierRecord::A(h) => Amenities {
                general: h.facilities.iter().map(|f| normalize_facility(f)).collect(),
                room: Vec::new(),
            },
            SupplierRecord::B(h) => Amenities {
                general: h.amenities.general.clone(),
                room: h.amenities.room.clone(),
            },
            SupplierRecord::C(h) => Amenities {
                general: Vec::new(),
                room: h.amenities.clone(),
            },
        }
    }

    fn images(&self) -> Images {
        match self {
            SupplierRecord::A(_) => Images::default(),
            SupplierRecord::B(h) => Images {
                rooms: h
                    .images
                    .rooms
                    .iter()
                    .map(|i| Image::new(i.link.trim(), i.caption.trim()))
                    .collect(),
                site: h
                    .images
                    .site
                    .iter()
                    .map(|i| Image::new(i.link.trim(), i.caption.trim()))
                    .collect(),
                amenities: Vec::new(),
            },
            SupplierRecord::C(h) => Images {
                rooms: h
                    .images
                    .rooms
                    .iter()
                    .map(|i| Image::new(i.url.trim(), i.description.trim()))
                    .collect(),
                site: Vec::new(),
                amenities: h
                    .images
                    .amenities
                    .iter()
                    .map(|i| Image::new(i.url.trim(), i.description.trim()))
                    .collect(),
            },
        }
    }

    fn booking_conditions(&self) -> Vec<String> {
        match self {
            SupplierRecord::B(h) => h.booking_conditions.clone(),
            SupplierRecord::A(_) | SupplierRecord::C(_) => Vec::new(),
        }
    }
}

fn with_coordinates(mut location: Location, lat: &Value, lng: &Value, hotel_id: &str) -> Location {
    match coerce_coordinates(lat, lng) {
        Some((lat, lng)) => {
            location.lat = lat;
            location.lng = lng;
        }
        None => {
            tracing::debug!(
                hotel_id,
                %lat,
                %lng,
                "coordinates are not numeric; leaving location unset"
            );
        }
    }
    location
}
