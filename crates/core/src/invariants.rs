//! Developer guardrails and invariants
//!
//! Debug assertions for detecting impossible states during development,
//! compiled out in release builds, plus checks for states that damaged
//! files can legitimately produce.

use uuid::Uuid;

use crate::error::EntityKind;
use crate::models::{Hotel, Reservation};
use crate::registry::{CustomerRegistry, HotelRegistry};

/// Describe what is wrong with a hotel's room counts, if anything
pub fn check_hotel(hotel: &Hotel) -> Option<String> {
    if hotel.total_rooms < 0 {
        return Some(format!("total_rooms is negative ({})", hotel.total_rooms));
    }
    if hotel.available_rooms < 0 {
        return Some(format!("available_rooms is negative ({})", hotel.available_rooms));
    }
    if hotel.available_rooms > hotel.total_rooms {
        return Some(format!(
            "available_rooms ({}) exceeds total_rooms ({})",
            hotel.available_rooms, hotel.total_rooms
        ));
    }
    None
}

/// Validate that 0 <= available_rooms <= total_rooms
pub fn assert_hotel_invariants(hotel: &Hotel) {
    let problem = check_hotel(hotel);
    debug_assert!(problem.is_none(), "Hotel {}: {:?}", hotel.id, problem);
}

/// An active reservation pointing at a record that is not on file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DanglingReference {
    pub reservation_id: Uuid,
    pub kind: EntityKind,
    pub missing_id: Uuid,
}

/// Find active reservations whose hotel or customer is missing.
///
/// Reachable on purpose: a damaged collection file loads as empty.
pub fn find_dangling_references(
    reservations: &[Reservation],
    hotels: &HotelRegistry,
    customers: &CustomerRegistry,
) -> Vec<DanglingReference> {
    let mut dangling = Vec::new();
    for reservation in reservations.iter().filter(|r| r.is_active()) {
        if hotels.get(reservation.hotel_id).is_none() {
            dangling.push(DanglingReference {
                reservation_id: reservation.id,
                kind: EntityKind::Hotel,
                missing_id: reservation.hotel_id,
            });
        }
        if customers.get(reservation.customer_id).is_none() {
            dangling.push(DanglingReference {
                reservation_id: reservation.id,
                kind: EntityKind::Customer,
                missing_id: reservation.customer_id,
            });
        }
    }
    dangling
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_hotel() -> Hotel {
        Hotel::new("Test Hotel".into(), "City".into(), 3).unwrap()
    }

    #[test]
    fn test_valid_hotel() {
        let hotel = make_hotel();
        assert!(check_hotel(&hotel).is_none());
        assert_hotel_invariants(&hotel);
    }

    #[test]
    fn test_over_available_hotel() {
        let mut hotel = make_hotel();
        hotel.available_rooms = 4;
        assert!(check_hotel(&hotel).unwrap().contains("exceeds"));
    }

    #[test]
    fn test_dangling_references() {
        let dir = tempfile::tempdir().unwrap();
        let storage = crate::storage::Storage::open(dir.path()).unwrap();
        let mut hotels = HotelRegistry::open(&storage);
        let customers = CustomerRegistry::open(&storage);
        let hotel = hotels.create("Plaza", "NYC", 1).unwrap();

        let orphan = Reservation::new(Uuid::new_v4(), hotel.id);
        let mut cancelled = Reservation::new(Uuid::new_v4(), Uuid::new_v4());
        cancelled.cancel().unwrap();

        let reservations = [orphan.clone(), cancelled];
        let dangling = find_dangling_references(&reservations, &hotels, &customers);
        assert_eq!(
            dangling,
            vec![DanglingReference {
                reservation_id: orphan.id,
                kind: EntityKind::Customer,
                missing_id: orphan.customer_id,
            }]
        );
    }

    #[test]
    #[should_panic(expected = "negative")]
    fn test_negative_availability_panics_in_debug() {
        let mut hotel = make_hotel();
        hotel.available_rooms = -1;
        assert_hotel_invariants(&hotel);
    }
}
