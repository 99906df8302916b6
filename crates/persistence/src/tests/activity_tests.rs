// Copyright (C) 2026 Gym Agenda Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::helpers::{new_persistence, nine_am, sample_date, seed_activity, seed_client, seed_professional};
use crate::PersistenceError;
use gym_agenda::{ActivityCatalog, BookingStore, NewBooking};
use gym_agenda_domain::{Activity, ActivityKind, Capacity};

#[test]
fn test_create_and_find_activity() {
    let mut persistence = new_persistence();
    let professional_id = seed_professional(&mut persistence, "Carla");

    let activity = Activity::new(
        String::from("Crossfit"),
        ActivityKind::Workout,
        Some(String::from("High intensity")),
        45,
        Capacity::Limited(12),
        professional_id,
    )
    .expect("activity fields should validate");

    let created = persistence
        .create_activity(&activity)
        .expect("create should succeed");
    let activity_id = created.activity_id.expect("id should be assigned");

    let found = persistence
        .find_activity(activity_id)
        .expect("lookup should succeed")
        .expect("activity should exist");

    assert_eq!(found.name, "Crossfit");
    assert_eq!(found.kind, ActivityKind::Workout);
    assert_eq!(found.description.as_deref(), Some("High intensity"));
    assert_eq!(found.duration_minutes, 45);
    assert_eq!(found.capacity, Capacity::Limited(12));
    assert_eq!(found.professional_id, professional_id);
}

#[test]
fn test_unlimited_capacity_round_trips_as_null() {
    let mut persistence = new_persistence();
    let professional_id = seed_professional(&mut persistence, "Carla");
    let activity_id = seed_activity(&mut persistence, "Open Gym", 120, Capacity::Unlimited, professional_id);

    let found = persistence
        .find_activity(activity_id)
        .expect("lookup should succeed")
        .expect("activity should exist");

    assert_eq!(found.capacity, Capacity::Unlimited);
}

#[test]
fn test_capacity_beyond_column_range_is_rejected() {
    let mut persistence = new_persistence();
    let professional_id = seed_professional(&mut persistence, "Carla");

    // The capacity column is a signed 32-bit integer; a larger limit must
    // fail loudly instead of being stored clamped.
    let activity = Activity::new(
        String::from("Stadium"),
        ActivityKind::Class,
        None,
        60,
        Capacity::Limited(u32::MAX),
        professional_id,
    )
    .expect("activity fields should validate");

    let result = persistence.create_activity(&activity);
    assert!(matches!(result, Err(PersistenceError::Other(_))));
}

#[test]
fn test_update_activity_fields() {
    let mut persistence = new_persistence();
    let professional_id = seed_professional(&mut persistence, "Carla");
    let activity_id = seed_activity(&mut persistence, "Yoga", 60, Capacity::Limited(5), professional_id);

    let mut activity = persistence
        .get_activity(activity_id)
        .expect("lookup should succeed")
        .expect("activity should exist");
    activity.name = String::from("Hot Yoga");
    activity.duration_minutes = 90;
    activity.capacity = Capacity::Limited(8);

    let updated = persistence
        .update_activity(&activity)
        .expect("update should succeed");

    assert_eq!(updated.name, "Hot Yoga");
    assert_eq!(updated.duration_minutes, 90);
    assert_eq!(updated.capacity, Capacity::Limited(8));
}

#[test]
fn test_delete_unreferenced_activity() {
    let mut persistence = new_persistence();
    let professional_id = seed_professional(&mut persistence, "Carla");
    let activity_id = seed_activity(&mut persistence, "Yoga", 60, Capacity::Unlimited, professional_id);

    persistence
        .delete_activity(activity_id)
        .expect("delete should succeed");

    let found = persistence
        .get_activity(activity_id)
        .expect("lookup should succeed");
    assert!(found.is_none());
}

#[test]
fn test_delete_referenced_activity_is_rejected() {
    let mut persistence = new_persistence();
    let professional_id = seed_professional(&mut persistence, "Carla");
    let client_id = seed_client(&mut persistence, "Ana");
    let activity_id = seed_activity(&mut persistence, "Yoga", 60, Capacity::Unlimited, professional_id);

    let booking = persistence
        .insert_booking(&NewBooking {
            client_id,
            activity_id,
            date: sample_date(),
            time: nine_am(),
        })
        .expect("insert should succeed");
    // Even a cancelled booking pins its activity.
    persistence
        .mark_cancelled(booking.booking_id)
        .expect("cancel should succeed");

    let result = persistence.delete_activity(activity_id);

    assert_eq!(
        result,
        Err(PersistenceError::ActivityReferenced { activity_id })
    );
}

#[test]
fn test_listing_reports_occupancy() {
    let mut persistence = new_persistence();
    let professional_id = seed_professional(&mut persistence, "Carla");
    let ana = seed_client(&mut persistence, "Ana");
    let bruno = seed_client(&mut persistence, "Bruno");
    let activity_id = seed_activity(&mut persistence, "Yoga", 60, Capacity::Limited(3), professional_id);

    persistence
        .insert_booking(&NewBooking {
            client_id: ana,
            activity_id,
            date: sample_date(),
            time: nine_am(),
        })
        .expect("insert should succeed");
    persistence
        .insert_booking(&NewBooking {
            client_id: bruno,
            activity_id,
            date: sample_date(),
            time: nine_am(),
        })
        .expect("insert should succeed");

    let listed = persistence.list_activities().expect("listing should succeed");

    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].active_bookings, 2);
    assert_eq!(listed[0].remaining_slots, Some(1));
}

#[test]
fn test_available_listing_hides_full_activities() {
    let mut persistence = new_persistence();
    let professional_id = seed_professional(&mut persistence, "Carla");
    let ana = seed_client(&mut persistence, "Ana");
    let full = seed_activity(&mut persistence, "Pilates", 60, Capacity::Limited(1), professional_id);
    seed_activity(&mut persistence, "Yoga", 60, Capacity::Unlimited, professional_id);

    persistence
        .insert_booking(&NewBooking {
            client_id: ana,
            activity_id: full,
            date: sample_date(),
            time: nine_am(),
        })
        .expect("insert should succeed");

    let available = persistence
        .list_available_activities()
        .expect("listing should succeed");

    assert_eq!(available.len(), 1);
    assert_eq!(available[0].activity.name, "Yoga");
}

#[test]
fn test_listing_by_professional() {
    let mut persistence = new_persistence();
    let carla = seed_professional(&mut persistence, "Carla");
    let diego = seed_professional(&mut persistence, "Diego");
    seed_activity(&mut persistence, "Yoga", 60, Capacity::Unlimited, carla);
    seed_activity(&mut persistence, "Spin", 30, Capacity::Unlimited, diego);

    let for_carla = persistence
        .list_activities_by_professional(carla)
        .expect("listing should succeed");

    assert_eq!(for_carla.len(), 1);
    assert_eq!(for_carla[0].activity.name, "Yoga");
}
