// Copyright (C) 2026 Gym Agenda Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{ActivityCatalog, BookingStore, CoreError, NewBooking};
use gym_agenda_domain::{
    Activity, ActivityKind, BookedWindow, Booking, BookingDetails, BookingStatus, Capacity,
};
use std::collections::HashMap;
use time::{Date, PrimitiveDateTime, Time};
use time::macros::{date, datetime, time};

pub const CLIENT_ANA: i64 = 1;
pub const CLIENT_BRUNO: i64 = 2;
pub const PROFESSIONAL_CARLA: i64 = 10;
pub const PROFESSIONAL_DIEGO: i64 = 11;

pub fn test_now() -> PrimitiveDateTime {
    datetime!(2025-12-01 08:00)
}

pub fn test_date() -> Date {
    date!(2025 - 12 - 20)
}

pub fn ten_am() -> Time {
    time!(10:00)
}

/// In-memory store backing the lifecycle tests.
pub struct FakeStore {
    pub activities: HashMap<i64, Activity>,
    pub bookings: Vec<Booking>,
    next_booking_id: i64,
}

impl FakeStore {
    pub fn new() -> Self {
        Self {
            activities: HashMap::new(),
            bookings: Vec::new(),
            next_booking_id: 1,
        }
    }

    pub fn add_activity(
        &mut self,
        activity_id: i64,
        name: &str,
        duration_minutes: u32,
        capacity: Capacity,
        professional_id: i64,
    ) {
        self.activities.insert(
            activity_id,
            Activity::with_id(
                activity_id,
                String::from(name),
                ActivityKind::Class,
                None,
                duration_minutes,
                capacity,
                professional_id,
            ),
        );
    }

    pub fn add_booking(
        &mut self,
        client_id: i64,
        activity_id: i64,
        date: Date,
        time: Time,
        status: BookingStatus,
    ) -> i64 {
        let booking_id = self.next_booking_id;
        self.next_booking_id += 1;
        self.bookings.push(Booking {
            booking_id,
            client_id,
            activity_id,
            date,
            time,
            status,
        });
        booking_id
    }

    pub fn booking(&self, booking_id: i64) -> &Booking {
        self.bookings
            .iter()
            .find(|b| b.booking_id == booking_id)
            .expect("booking should exist")
    }

    fn details(&self, booking: &Booking) -> BookingDetails {
        let activity = self
            .activities
            .get(&booking.activity_id)
            .expect("activity should exist");
        BookingDetails {
            booking: booking.clone(),
            activity_name: activity.name.clone(),
            activity_kind: activity.kind,
            duration_minutes: activity.duration_minutes,
            professional_name: format!("professional-{}", activity.professional_id),
            client_name: format!("client-{}", booking.client_id),
        }
    }
}

impl Default for FakeStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ActivityCatalog for FakeStore {
    fn find_activity(&mut self, activity_id: i64) -> Result<Option<Activity>, CoreError> {
        Ok(self.activities.get(&activity_id).cloned())
    }
}

impl BookingStore for FakeStore {
    fn find_booking(&mut self, booking_id: i64) -> Result<Option<Booking>, CoreError> {
        Ok(self
            .bookings
            .iter()
            .find(|b| b.booking_id == booking_id)
            .cloned())
    }

    fn active_windows_for_client(
        &mut self,
        client_id: i64,
        date: Date,
    ) -> Result<Vec<BookedWindow>, CoreError> {
        Ok(self
            .bookings
            .iter()
            .filter(|b| b.client_id == client_id && b.date == date && b.status.is_active())
            .map(|b| {
                let activity = self
                    .activities
                    .get(&b.activity_id)
                    .expect("activity should exist");
                BookedWindow {
                    booking_id: b.booking_id,
                    start: b.time,
                    duration_minutes: activity.duration_minutes,
                }
            })
            .collect())
    }

    fn count_active_at_slot(
        &mut self,
        activity_id: i64,
        date: Date,
        time: Time,
    ) -> Result<u32, CoreError> {
        let count = self
            .bookings
            .iter()
            .filter(|b| {
                b.activity_id == activity_id
                    && b.date == date
                    && b.time == time
                    && b.status.is_active()
            })
            .count();
        Ok(u32::try_from(count).expect("count fits in u32"))
    }

    fn insert_booking(&mut self, booking: &NewBooking) -> Result<Booking, CoreError> {
        let booking_id = self.add_booking(
            booking.client_id,
            booking.activity_id,
            booking.date,
            booking.time,
            BookingStatus::Active,
        );
        Ok(self.booking(booking_id).clone())
    }

    fn reschedule_booking(
        &mut self,
        booking_id: i64,
        date: Date,
        time: Time,
    ) -> Result<Booking, CoreError> {
        let booking = self
            .bookings
            .iter_mut()
            .find(|b| b.booking_id == booking_id)
            .ok_or_else(|| CoreError::Storage(String::from("booking not found")))?;
        booking.date = date;
        booking.time = time;
        Ok(booking.clone())
    }

    fn mark_cancelled(&mut self, booking_id: i64) -> Result<(), CoreError> {
        let booking = self
            .bookings
            .iter_mut()
            .find(|b| b.booking_id == booking_id)
            .ok_or_else(|| CoreError::Storage(String::from("booking not found")))?;
        booking.status = BookingStatus::Cancelled;
        Ok(())
    }

    fn find_booking_details(
        &mut self,
        booking_id: i64,
    ) -> Result<Option<BookingDetails>, CoreError> {
        Ok(self
            .bookings
            .iter()
            .find(|b| b.booking_id == booking_id)
            .map(|b| self.details(b)))
    }

    fn list_for_client(&mut self, client_id: i64) -> Result<Vec<BookingDetails>, CoreError> {
        Ok(self
            .bookings
            .iter()
            .filter(|b| b.client_id == client_id)
            .map(|b| self.details(b))
            .collect())
    }

    fn list_for_professional(
        &mut self,
        professional_id: i64,
    ) -> Result<Vec<BookingDetails>, CoreError> {
        Ok(self
            .bookings
            .iter()
            .filter(|b| {
                self.activities
                    .get(&b.activity_id)
                    .is_some_and(|a| a.professional_id == professional_id)
            })
            .map(|b| self.details(b))
            .collect())
    }

    fn list_all(&mut self) -> Result<Vec<BookingDetails>, CoreError> {
        Ok(self.bookings.iter().map(|b| self.details(b)).collect())
    }
}

/// A store with one 60-minute yoga class of the given capacity.
pub fn store_with_activity(capacity: Capacity) -> FakeStore {
    let mut store = FakeStore::new();
    store.add_activity(100, "Yoga", 60, capacity, PROFESSIONAL_CARLA);
    store
}
