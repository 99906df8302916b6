// Copyright (C) 2026 Gym Agenda Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API boundary layer for the gym agenda.
//!
//! This crate sits between the HTTP server and the booking core. It owns:
//!
//! - request/response DTOs (distinct from domain types),
//! - input validation (date/time formats, past-date rejection on create),
//! - role-based authorization,
//! - translation of domain/core/persistence errors into API errors,
//! - the stable outcome codes the response envelope carries.
//!
//! Authentication itself is out of scope: callers supply an already
//! identified actor as `(actor_id, actor_role)` and this layer only decides
//! what that actor may do.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]

mod auth;
mod error;
mod handlers;
mod request_response;

#[cfg(test)]
mod tests;

pub use auth::{AuthenticatedActor, AuthorizationService};
pub use error::{ApiError, AuthError, translate_core_error, translate_domain_error};
pub use handlers::{
    cancel_booking, create_activity, create_booking, delete_activity, get_booking,
    list_activities, list_bookings, register_user, reschedule_booking, update_activity,
};
pub use request_response::{
    ActivityData, ApiResponse, BookingData, BookingDetailsData, CancelBookingRequest,
    CreateActivityRequest, CreateBookingRequest, DeleteActivityRequest, ListActivitiesFilter,
    RegisterUserRequest, RescheduleBookingRequest, UpdateActivityRequest, UserData,
};
