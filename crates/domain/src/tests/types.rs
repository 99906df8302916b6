// Copyright (C) 2026 Gym Agenda Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::types::{Activity, ActivityKind, BookingStatus, Capacity, Role};

#[test]
fn test_role_parse_round_trip() {
    for role in [
        Role::Client,
        Role::Professional,
        Role::PersonalTrainer,
        Role::Administrator,
    ] {
        assert_eq!(Role::parse(role.as_str()), Ok(role));
    }
}

#[test]
fn test_role_parse_rejects_unknown() {
    let result = Role::parse("Receptionist");
    assert!(matches!(result, Err(DomainError::InvalidRole(_))));
}

#[test]
fn test_offering_roles() {
    assert!(Role::Professional.offers_activities());
    assert!(Role::PersonalTrainer.offers_activities());
    assert!(!Role::Client.offers_activities());
    assert!(!Role::Administrator.offers_activities());
}

#[test]
fn test_activity_kind_parse() {
    assert_eq!(ActivityKind::parse("Class"), Ok(ActivityKind::Class));
    assert_eq!(ActivityKind::parse("Workout"), Ok(ActivityKind::Workout));
    assert!(matches!(
        ActivityKind::parse("Sauna"),
        Err(DomainError::InvalidActivityKind(_))
    ));
}

#[test]
fn test_booking_status_transitions() {
    assert!(BookingStatus::Active.can_transition_to(BookingStatus::Cancelled));
    assert!(!BookingStatus::Cancelled.can_transition_to(BookingStatus::Active));
    assert!(!BookingStatus::Active.can_transition_to(BookingStatus::Active));
    assert!(!BookingStatus::Cancelled.can_transition_to(BookingStatus::Cancelled));
}

#[test]
fn test_booking_status_string_round_trip() {
    assert_eq!("Active".parse::<BookingStatus>(), Ok(BookingStatus::Active));
    assert_eq!(
        "Cancelled".parse::<BookingStatus>(),
        Ok(BookingStatus::Cancelled)
    );
    assert!("Pending".parse::<BookingStatus>().is_err());
}

#[test]
fn test_capacity_admits_below_limit() {
    let capacity = Capacity::Limited(2);
    assert!(capacity.admits(0));
    assert!(capacity.admits(1));
    assert!(!capacity.admits(2));
    assert!(!capacity.admits(3));
}

#[test]
fn test_unlimited_capacity_always_admits() {
    assert!(Capacity::Unlimited.admits(0));
    assert!(Capacity::Unlimited.admits(u32::MAX));
    assert_eq!(Capacity::Unlimited.remaining(10), None);
}

#[test]
fn test_capacity_remaining_saturates() {
    assert_eq!(Capacity::Limited(5).remaining(3), Some(2));
    assert_eq!(Capacity::Limited(5).remaining(7), Some(0));
}

#[test]
fn test_activity_new_validates_fields() {
    let result = Activity::new(
        String::from("Spinning"),
        ActivityKind::Class,
        None,
        60,
        Capacity::Limited(10),
        42,
    );
    assert!(result.is_ok());

    let zero_duration = Activity::new(
        String::from("Spinning"),
        ActivityKind::Class,
        None,
        0,
        Capacity::Limited(10),
        42,
    );
    assert!(matches!(
        zero_duration,
        Err(DomainError::InvalidDuration { .. })
    ));
}
