// Copyright (C) 2026 Gym Agenda Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::helpers::{booking_request, new_persistence, seed_activity, seed_user, test_now};
use crate::error::ApiError;
use crate::handlers::{create_activity, create_booking, delete_activity, list_activities, update_activity};
use crate::request_response::{
    CreateActivityRequest, DeleteActivityRequest, ListActivitiesFilter, UpdateActivityRequest,
};
use gym_agenda_domain::{Capacity, Role};

fn create_request(actor_id: i64, name: &str, capacity: Option<u32>) -> CreateActivityRequest {
    CreateActivityRequest {
        actor_id,
        actor_role: String::from("Professional"),
        name: String::from(name),
        kind: String::from("Class"),
        description: None,
        duration_minutes: 60,
        capacity,
    }
}

#[test]
fn test_create_activity() {
    let mut persistence = new_persistence();
    let professional = seed_user(&mut persistence, "Carla", Role::Professional);

    let response = create_activity(&mut persistence, &create_request(professional, "Yoga", Some(10)))
        .expect("handler should succeed");

    assert!(response.success);
    assert_eq!(response.code, "created");
    let data = response.data.expect("data should exist");
    assert_eq!(data.name, "Yoga");
    assert_eq!(data.capacity, Some(10));
    assert_eq!(data.professional_id, professional);
    assert_eq!(data.active_bookings, 0);
    assert_eq!(data.remaining_slots, Some(10));
}

#[test]
fn test_create_activity_rejects_invalid_fields() {
    let mut persistence = new_persistence();
    let professional = seed_user(&mut persistence, "Carla", Role::Professional);

    let blank_name = create_activity(&mut persistence, &create_request(professional, "  ", Some(10)));
    assert!(matches!(
        blank_name,
        Err(ApiError::InvalidInput { ref field, .. }) if field == "name"
    ));

    let zero_capacity = create_activity(&mut persistence, &create_request(professional, "Yoga", Some(0)));
    assert!(matches!(
        zero_capacity,
        Err(ApiError::InvalidInput { ref field, .. }) if field == "capacity"
    ));

    let mut zero_duration = create_request(professional, "Yoga", Some(10));
    zero_duration.duration_minutes = 0;
    let result = create_activity(&mut persistence, &zero_duration);
    assert!(matches!(
        result,
        Err(ApiError::InvalidInput { ref field, .. }) if field == "duration_minutes"
    ));

    let mut bad_kind = create_request(professional, "Yoga", Some(10));
    bad_kind.kind = String::from("Dance");
    let result = create_activity(&mut persistence, &bad_kind);
    assert!(matches!(
        result,
        Err(ApiError::InvalidInput { ref field, .. }) if field == "kind"
    ));
}

#[test]
fn test_update_activity_keeps_owner() {
    let mut persistence = new_persistence();
    let professional = seed_user(&mut persistence, "Carla", Role::Professional);
    let activity_id = seed_activity(&mut persistence, "Yoga", 60, Capacity::Limited(5), professional);

    let response = update_activity(
        &mut persistence,
        activity_id,
        &UpdateActivityRequest {
            actor_id: professional,
            actor_role: String::from("Professional"),
            name: String::from("Hot Yoga"),
            kind: String::from("Class"),
            description: Some(String::from("Heated room")),
            duration_minutes: 90,
            capacity: None,
        },
    )
    .expect("handler should succeed");

    assert_eq!(response.code, "updated");
    let data = response.data.expect("data should exist");
    assert_eq!(data.name, "Hot Yoga");
    assert_eq!(data.duration_minutes, 90);
    assert_eq!(data.capacity, None);
    assert_eq!(data.professional_id, professional);
}

#[test]
fn test_update_activity_reports_live_booking_load() {
    let mut persistence = new_persistence();
    let professional = seed_user(&mut persistence, "Carla", Role::Professional);
    let client = seed_user(&mut persistence, "Ana", Role::Client);
    let activity_id = seed_activity(&mut persistence, "Pilates", 60, Capacity::Limited(3), professional);

    create_booking(
        &mut persistence,
        &booking_request(client, activity_id, "2025-12-20", "09:00"),
        test_now(),
    )
    .expect("booking should succeed");

    let response = update_activity(
        &mut persistence,
        activity_id,
        &UpdateActivityRequest {
            actor_id: professional,
            actor_role: String::from("Professional"),
            name: String::from("Pilates"),
            kind: String::from("Class"),
            description: None,
            duration_minutes: 60,
            capacity: Some(3),
        },
    )
    .expect("handler should succeed");

    let data = response.data.expect("data should exist");
    assert_eq!(data.active_bookings, 1);
    assert_eq!(data.remaining_slots, Some(2));
}

#[test]
fn test_update_missing_activity_is_not_found() {
    let mut persistence = new_persistence();
    let professional = seed_user(&mut persistence, "Carla", Role::Professional);

    let result = update_activity(
        &mut persistence,
        999,
        &UpdateActivityRequest {
            actor_id: professional,
            actor_role: String::from("Professional"),
            name: String::from("Yoga"),
            kind: String::from("Class"),
            description: None,
            duration_minutes: 60,
            capacity: None,
        },
    );

    assert!(matches!(
        result,
        Err(ApiError::ResourceNotFound { ref resource_type, .. }) if resource_type == "Activity"
    ));
}

#[test]
fn test_delete_activity_with_bookings_is_rejected() {
    let mut persistence = new_persistence();
    let professional = seed_user(&mut persistence, "Carla", Role::Professional);
    let client = seed_user(&mut persistence, "Ana", Role::Client);
    let activity_id = seed_activity(&mut persistence, "Yoga", 60, Capacity::Unlimited, professional);

    create_booking(
        &mut persistence,
        &booking_request(client, activity_id, "2025-12-20", "09:00"),
        test_now(),
    )
    .expect("booking should succeed");

    let result = delete_activity(
        &mut persistence,
        activity_id,
        &DeleteActivityRequest {
            actor_id: professional,
            actor_role: String::from("Professional"),
        },
    );

    assert!(matches!(
        result,
        Err(ApiError::RuleViolation { ref rule, .. }) if rule == "activity_referenced"
    ));
}

#[test]
fn test_delete_unreferenced_activity() {
    let mut persistence = new_persistence();
    let professional = seed_user(&mut persistence, "Carla", Role::Professional);
    let activity_id = seed_activity(&mut persistence, "Yoga", 60, Capacity::Unlimited, professional);

    let response = delete_activity(
        &mut persistence,
        activity_id,
        &DeleteActivityRequest {
            actor_id: professional,
            actor_role: String::from("Professional"),
        },
    )
    .expect("handler should succeed");

    assert_eq!(response.code, "deleted");
}

#[test]
fn test_listing_filters() {
    let mut persistence = new_persistence();
    let carla = seed_user(&mut persistence, "Carla", Role::Professional);
    let diego = seed_user(&mut persistence, "Diego", Role::Professional);
    let ana = seed_user(&mut persistence, "Ana", Role::Client);
    let pilates = seed_activity(&mut persistence, "Pilates", 60, Capacity::Limited(1), carla);
    seed_activity(&mut persistence, "Spin", 30, Capacity::Unlimited, diego);

    create_booking(
        &mut persistence,
        &booking_request(ana, pilates, "2025-12-20", "09:00"),
        test_now(),
    )
    .expect("booking should succeed");

    let all = list_activities(&mut persistence, ListActivitiesFilter::default())
        .expect("listing should succeed");
    assert_eq!(all.data.expect("data").len(), 2);

    let available = list_activities(
        &mut persistence,
        ListActivitiesFilter {
            professional_id: None,
            available_only: true,
        },
    )
    .expect("listing should succeed");
    let available_rows = available.data.expect("data");
    assert_eq!(available_rows.len(), 1);
    assert_eq!(available_rows[0].name, "Spin");

    let for_carla = list_activities(
        &mut persistence,
        ListActivitiesFilter {
            professional_id: Some(carla),
            available_only: false,
        },
    )
    .expect("listing should succeed");
    let carla_rows = for_carla.data.expect("data");
    assert_eq!(carla_rows.len(), 1);
    assert_eq!(carla_rows[0].name, "Pilates");
}
