// Copyright (C) 2026 Gym Agenda Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::Persistence;
use gym_agenda_domain::{Activity, ActivityKind, Capacity, Role};
use time::macros::{date, time};
use time::{Date, Time};

pub fn new_persistence() -> Persistence {
    Persistence::new_in_memory().expect("in-memory database should initialize")
}

pub fn seed_client(persistence: &mut Persistence, name: &str) -> i64 {
    let email = format!("{}@example.com", name.to_lowercase());
    persistence
        .create_user(name, &email, Role::Client)
        .expect("client should be created")
}

pub fn seed_professional(persistence: &mut Persistence, name: &str) -> i64 {
    let email = format!("{}@example.com", name.to_lowercase());
    persistence
        .create_user(name, &email, Role::Professional)
        .expect("professional should be created")
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

pub fn sample_date() -> Date {
    date!(2025 - 12 - 20)
}

pub fn nine_am() -> Time {
    time!(09:00)
}
