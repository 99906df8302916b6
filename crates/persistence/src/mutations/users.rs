// Copyright (C) 2026 Gym Agenda Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! User mutations.

use diesel::SqliteConnection;
use diesel::prelude::*;
use gym_agenda_domain::Role;
use tracing::info;

use crate::diesel_schema::users;
use crate::error::PersistenceError;
use crate::sqlite::get_last_insert_rowid;

pub fn create_user(
    conn: &mut SqliteConnection,
    name: &str,
    email: &str,
    role: Role,
) -> Result<i64, PersistenceError> {
    info!("Creating user '{}' with role {}", name, role.as_str());

    diesel::insert_into(users::table)
        .values((
            users::name.eq(name),
            users::email.eq(email),
            users::role.eq(role.as_str()),
        ))
        .execute(conn)?;

    let user_id: i64 = get_last_insert_rowid(conn)?;

    info!(user_id, "User created");

    Ok(user_id)
}
