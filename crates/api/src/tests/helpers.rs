// Copyright (C) 2026 Gym Agenda Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use gym_agenda_domain::{Activity, ActivityKind, Capacity, Role};
use gym_agenda_persistence::Persistence;
use time::PrimitiveDateTime;
use time::macros::datetime;

use crate::request_response::CreateBookingRequest;

pub fn test_now() -> PrimitiveDateTime {
    datetime!(2025-12-01 08:00)
}

pub fn new_persistence() -> Persistence {
    Persistence::new_in_memory().expect("in-memory database should initialize")
}

pub fn seed_user(persistence: &mut Persistence, name: &str, role: Role) -> i64 {
    let email = format!("{}@example.com", name.to_lowercase());
    persistence
        .create_user(name, &email, role)
        .expect("user should be created")
}

pub fn seed_activity(
    persistence: &mut Persistence,
    name: &str,
    duration_minutes: u32,
    capacity: Capacity,
    professional_id: i64,
) -> i64 {
    let activity = Activity::new(
        String::from(name),
        ActivityKind::Class,
        None,
        duration_minutes,
        capacity,
        professional_id,
    )
    .expect("activity fields should validate");
    persistence
        .create_activity(&activity)
        .expect("activity should be created")
        .activity_id
        .expect("created activity should carry an id")
}

pub fn booking_request(
    actor_id: i64,
    activity_id: i64,
    date: &str,
    time: &str,
) -> CreateBookingRequest {
    CreateBookingRequest {
        actor_id,
        actor_role: String::from("Client"),
        activity_id,
        date: String::from(date),
        time: String::from(time),
    }
}
