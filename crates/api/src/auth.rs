// Copyright (C) 2026 Gym Agenda Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Authorization types and services.
//!
//! Authentication is out of scope; the caller (an upstream identity layer)
//! supplies a `(user_id, role)` pair and this module decides what that
//! actor may do.

use gym_agenda_domain::Role;

use crate::error::AuthError;

/// An already-authenticated actor with an associated role.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthenticatedActor {
    /// The actor's user id.
    pub user_id: i64,
    /// The role assigned to this actor.
    pub role: Role,
}

impl AuthenticatedActor {
    /// Creates a new authenticated actor.
    #[must_use]
    pub const fn new(user_id: i64, role: Role) -> Self {
        Self { user_id, role }
    }
}

/// Authorization service for enforcing role-based access control.
pub struct AuthorizationService;

impl AuthorizationService {
    /// Checks if an actor may create, reschedule, or cancel bookings.
    ///
    /// Only clients book; staff booking on behalf of clients is out of
    /// scope. The actor's own `user_id` is always the client id.
    ///
    /// # Errors
    ///
    /// Returns an error if the actor does not have the `Client` role.
    pub fn authorize_booking_mutation(
        actor: &AuthenticatedActor,
        action: &str,
    ) -> Result<(), AuthError> {
        match actor.role {
            Role::Client => Ok(()),
            Role::Professional | Role::PersonalTrainer | Role::Administrator => {
                Err(AuthError::Unauthorized {
                    action: String::from(action),
                    required_role: String::from("Client"),
                })
            }
        }
    }

    /// Checks if an actor may create, update, or delete activities.
    ///
    /// # Errors
    ///
    /// Returns an error if the actor is a `Client`.
    pub fn authorize_activity_management(
        actor: &AuthenticatedActor,
        action: &str,
    ) -> Result<(), AuthError> {
        match actor.role {
            Role::Professional | Role::PersonalTrainer | Role::Administrator => Ok(()),
            Role::Client => Err(AuthError::Unauthorized {
                action: String::from(action),
                required_role: String::from("Professional, PersonalTrainer, or Administrator"),
            }),
        }
    }

    /// Checks if an actor may act on an activity another user owns.
    ///
    /// Administrators manage any activity; professionals and personal
    /// trainers only their own.
    ///
    /// # Errors
    ///
    /// Returns an error if a non-administrator targets a foreign activity.
    pub fn authorize_activity_ownership(
        actor: &AuthenticatedActor,
        owner_id: i64,
        action: &str,
    ) -> Result<(), AuthError> {
        if actor.role == Role::Administrator || actor.user_id == owner_id {
            Ok(())
        } else {
            Err(AuthError::Unauthorized {
                action: String::from(action),
                required_role: String::from("Administrator or owning professional"),
            })
        }
    }
}
