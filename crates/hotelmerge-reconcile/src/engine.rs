use hotelmerge_core::{Amenities, Hotel, HotelFields, Images, Location};

use crate::case::CaseTransform;
use crate::rules;

/// Case transforms applied while merging, passed explicitly per call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MergePolicy {
    /// Name, description, address and city.
    pub text: CaseTransform,
    /// General and room amenity tags.
    pub amenities: CaseTransform,
    pub booking_conditions: CaseTransform,
}

impl Default for MergePolicy {
    fn default() -> Self {
        Self {
            text: CaseTransform::Title,
            amenities: CaseTransform::Lower,
            booking_conditions: CaseTransform::Preserve,
        }
    }
}

/// Reconciles `incoming` into `existing`, returning a fully populated record.
///
/// `id` and `destination_id` come from `incoming` unconditionally. Every other
/// field is resolved by its rule in [`crate::rules`]. Neither input is
/// modified, so a caller that discards the result leaves its record intact.
#[must_use]
pub fn merge_hotel(existing: &Hotel, incoming: &impl HotelFields, policy: &MergePolicy) -> Hotel {
    Hotel {
        id: incoming.id().to_string(),
        destination_id: incoming.destination_id(),
        name: rules::longer_string(&existing.name, incoming.name(), policy.text),
        location: merge_location(&existing.location, &incoming.location(), policy),
        description: rules::longer_string(
            &existing.description,
            incoming.description(),
            policy.text,
        ),
        amenities: merge_amenities(&existing.amenities, &incoming.amenities(), policy),
        images: merge_images(&existing.images, &incoming.images()),
        booking_conditions: rules::concat_strings(
            &existing.booking_conditions,
            &incoming.booking_conditions(),
            policy.booking_conditions,
        ),
    }
}

fn merge_location(existing: &Location, incoming: &Location, policy: &MergePolicy) -> Location {
    Location {
        lat: rules::coordinate(existing.lat, incoming.lat),
        lng: rules::coordinate(existing.lng, incoming.lng),
        address: rules::longer_string(&existing.address, &incoming.address, policy.text),
        city: rules::longer_string(&existing.city, &incoming.city, policy.text),
        country: rules::country(&existing.country, &incoming.country),
    }
}

fn merge_amenities(existing: &Amenities, incoming: &Amenities, policy: &MergePolicy) -> Amenities {
    Amenities {
        general: rules::dedup_strings(&existing.general, &incoming.general, policy.amenities),
        room: rules::dedup_strings(&existing.room, &incoming.room, policy.amenities),
    }
}

fn merge_images(existing: &Images, incoming: &Images) -> Images {
    Images {
        rooms: rules::union_images_by_link(&existing.rooms, &incoming.rooms),
        site: rules::union_images_by_link(&existing.site, &incoming.site),
        amenities: rules::union_images_by_link(&existing.amenities, &incoming.amenities),
    }
}

#[cfg(test)]
mod tests {
    use hotelmerge_core::Image;

    use super::*;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| (*s).to_string()).collect()
    }

    fn supplier_a_like() -> Hotel {
        Hotel {
            id: "iJhz".to_string(),
            destination_id: 5432,
            name: "Beach Villas Singapore".to_string(),
            location: Location {
                lat: 1.264_751,
                lng: 103.824_006,
                address: "8 Sentosa Gateway, Beach Villas".to_string(),
                city: "Singapore".to_string(),
                country: "SG".to_string(),
            },
            description: "This 5 star hotel is located on the coastline of Singapore.".to_string(),
            amenities: Amenities {
                general: strings(&["pool", "wifi"]),
                room: Vec::new(),
            },
            ..Hotel::default()
        }
    }

    fn supplier_b_like() -> Hotel {
        Hotel {
            id: "iJhz".to_string(),
            destination_id: 5432,
            name: "Beach Villas Singapore".to_string(),
            location: Location {
                address: "8 Sentosa Gateway, Beach Villas, 098269".to_string(),
                country: "Singapore".to_string(),
                ..Location::default()
            },
            amenities: Amenities {
                general: strings(&["outdoor pool", "Breakfast"]),
                room: strings(&["aircon", "tv"]),
            },
            images: Images {
                site: vec![Image::new("https://cdn.example.com/site/1.jpg", "Front")],
                ..Images::default()
            },
            booking_conditions: strings(&["No pets allowed."]),
            ..Hotel::default()
        }
    }

    #[test]
    fn merge_into_empty_record_adopts_incoming() {
        let incoming = supplier_a_like();
        let merged = merge_hotel(&Hotel::default(), &incoming, &MergePolicy::default());

        assert_eq!(merged.id, "iJhz");
        assert_eq!(merged.destination_id, 5432);
        assert_eq!(merged.name, "Beach Villas Singapore");
        assert_eq!(merged.location.city, "Singapore");
        assert_eq!(merged.location.country, "SG");
        assert!(merged.location.has_coordinates());
        assert_eq!(merged.amenities.general, strings(&["pool", "wifi"]));
    }

    #[test]
    fn identity_comes_from_incoming() {
        let existing = supplier_a_like();
        let mut incoming = supplier_b_like();
        incoming.destination_id = 9999;

        let merged = merge_hotel(&existing, &incoming, &MergePolicy::default());
        assert_eq!(merged.destination_id, 9999);
    }

    #[test]
    fn location_rules_apply_per_field() {
        let merged = merge_hotel(&supplier_a_like(), &supplier_b_like(), &MergePolicy::default());

        assert!((merged.location.lat - 1.264_751).abs() < f64::EPSILON);
        assert!((merged.location.lng - 103.824_006).abs() < f64::EPSILON);
        assert_eq!(merged.location.country, "SG");
        assert_eq!(merged.location.address, "8 Sentosa Gateway, Beach Villas, 098269");
        assert_eq!(merged.location.city, "Singapore");
    }

    #[test]
    fn longer_description_wins_and_is_title_cased() {
        let existing = Hotel {
            description: "Beautiful hotel".to_string(),
            ..Hotel::default()
        };
        let incoming = Hotel {
            description: "Beautiful hotel with luxurious rooms".to_string(),
            ..Hotel::default()
        };
        let merged = merge_hotel(&existing, &incoming, &MergePolicy::default());
        assert_eq!(merged.description, "Beautiful Hotel With Luxurious Rooms");
    }

    #[test]
    fn amenities_are_absorbed_regardless_of_merge_order() {
        let policy = MergePolicy::default();
        let a_then_b = merge_hotel(
            &merge_hotel(&Hotel::default(), &supplier_a_like(), &policy),
            &supplier_b_like(),
            &policy,
        );
        let b_then_a = merge_hotel(
            &merge_hotel(&Hotel::default(), &supplier_b_like(), &policy),
            &supplier_a_like(),
            &policy,
        );

        assert_eq!(
            a_then_b.amenities.general,
            strings(&["breakfast", "outdoor pool", "wifi"])
        );
        assert_eq!(a_then_b.amenities, b_then_a.amenities);
        assert_eq!(a_then_b.amenities.room, strings(&["aircon", "tv"]));
    }

    #[test]
    fn booking_conditions_repeat_on_every_merge() {
        let policy = MergePolicy::default();
        let incoming = supplier_b_like();
        let once = merge_hotel(&Hotel::default(), &incoming, &policy);
        let twice = merge_hotel(&once, &incoming, &policy);
        assert_eq!(
            twice.booking_conditions,
            strings(&["No pets allowed.", "No pets allowed."])
        );
    }

    #[test]
    fn images_union_by_link_per_collection() {
        let existing = Hotel {
            images: Images {
                rooms: vec![Image::new("https://cdn.example.com/r/1.jpg", "Double room")],
                site: vec![Image::new("https://cdn.example.com/site/1.jpg", "Lobby")],
                ..Images::default()
            },
            ..Hotel::default()
        };
        let merged = merge_hotel(&existing, &supplier_b_like(), &MergePolicy::default());

        assert_eq!(merged.images.rooms.len(), 1);
        assert_eq!(
            merged.images.site,
            vec![Image::new("https://cdn.example.com/site/1.jpg", "Lobby")]
        );
        assert!(merged.images.amenities.is_empty());
    }

    #[test]
    fn preserve_policy_leaves_text_untouched() {
        let policy = MergePolicy {
            text: CaseTransform::Preserve,
            amenities: CaseTransform::Preserve,
            booking_conditions: CaseTransform::Preserve,
        };
        let merged = merge_hotel(&Hotel::default(), &supplier_b_like(), &policy);
        assert_eq!(merged.amenities.general, strings(&["Breakfast", "outdoor pool"]));
    }

    #[test]
    fn merge_leaves_inputs_unchanged() {
        let existing = supplier_a_like();
        let snapshot = existing.clone();
        let _ = merge_hotel(&existing, &supplier_b_like(), &MergePolicy::default());
        assert_eq!(existing, snapshot);
    }
}
