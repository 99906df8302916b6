// Copyright (C) 2026 Gym Agenda Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! State-changing operations over the gym agenda schema.
//!
//! Callers (the `Persistence` adapter) wrap every function in this module
//! in an immediate transaction, so each mutation observes and changes the
//! database atomically with respect to other writers.

pub(crate) mod activities;
pub(crate) mod bookings;
pub(crate) mod users;
