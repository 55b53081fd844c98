use serde::{Deserialize, Serialize};

/// A hotel reconciled from every supplier that has reported it, keyed by
/// the supplier-independent hotel `id`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Hotel {
    /// Stable hotel identifier shared by all suppliers (e.g. `"iJhz"`).
    pub id: String,
    /// Destination the hotel belongs to. Always taken from the latest
    /// supplier record, never merged.
    pub destination_id: i64,
    pub name: String,
    pub location: Location,
    pub description: String,
    pub amenities: Amenities,
    pub images: Images,
    /// Free-text booking conditions in arrival order. Duplicates are kept.
    pub booking_conditions: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Location {
    /// Latitude in decimal degrees. `0.0` means "not provided".
    pub lat: f64,
    /// Longitude in decimal degrees. `0.0` means "not provided".
    pub lng: f64,
    pub address: String,
    pub city: String,
    /// ISO 3166-1 alpha-2 code when any supplier provided one, otherwise
    /// whatever country text was reported.
    pub country: String,
}

impl Location {
    /// Returns `true` when both coordinates carry a real (non-sentinel) value.
    #[must_use]
    pub fn has_coordinates(&self) -> bool {
        self.lat != 0.0 && self.lng != 0.0
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Amenities {
    pub general: Vec<String>,
    pub room: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Images {
    pub rooms: Vec<Image>,
    pub site: Vec<Image>,
    pub amenities: Vec<Image>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Image {
    pub link: String,
    pub description: String,
}

impl Image {
    #[must_use]
    pub fn new(link: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            link: link.into(),
            description: description.into(),
        }
    }
}

/// Canonical field accessors shared by every supplier adapter and by
/// [`Hotel`] itself, so the reconciliation engine can merge either.
///
/// Accessors that have to build a canonical shape out of a supplier's native
/// layout return owned values; plain text fields are borrowed.
pub trait HotelFields {
    fn id(&self) -> &str;
    fn destination_id(&self) -> i64;
    fn name(&self) -> &str;
    fn location(&self) -> Location;
    fn description(&self) -> &str;
    fn amenities(&self) -> Amenities;
    fn images(&self) -> Images;
    fn booking_conditions(&self) -> Vec<String>;
}

impl HotelFields for Hotel {
    fn id(&self) -> &str {
        &self.id
    }

    fn destination_id(&self) -> i64 {
        self.destination_id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn location(&self) -> Location {
        self.location.clone()
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn amenities(&self) -> Amenities {
        self.amenities.clone()
    }

    fn images(&self) -> Images {
        self.images.clone()
    }

    fn booking_conditions(&self) -> Vec<String> {
        self.booking_conditions.clone()
    }
}
