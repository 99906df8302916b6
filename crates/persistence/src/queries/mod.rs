// Copyright (C) 2026 Gym Agenda Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Read-only queries over the gym agenda schema.
//!
//! All queries use Diesel DSL against a `SqliteConnection` and never
//! mutate state.

pub(crate) mod activities;
pub(crate) mod bookings;
pub(crate) mod users;
