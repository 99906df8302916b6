// Copyright (C) 2026 Gym Agenda Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Activity catalog mutations.

use diesel::SqliteConnection;
use diesel::prelude::*;
use gym_agenda_domain::Activity;
use tracing::info;

use crate::data_models::capacity_to_column;
use crate::diesel_schema::activities;
use crate::error::PersistenceError;
use crate::queries::activities::find_activity;
use crate::queries::bookings::is_activity_referenced;
use crate::sqlite::get_last_insert_rowid;

pub fn create_activity(
    conn: &mut SqliteConnection,
    activity: &Activity,
) -> Result<Activity, PersistenceError> {
    info!(
        "Creating activity '{}' for professional {}",
        activity.name, activity.professional_id
    );

    let duration = i32::try_from(activity.duration_minutes)
        .map_err(|_| PersistenceError::Other("Activity duration out of range".to_string()))?;
    let capacity = capacity_to_column(activity.capacity)?;

    diesel::insert_into(activities::table)
        .values((
            activities::name.eq(&activity.name),
            activities::kind.eq(activity.kind.as_str()),
            activities::description.eq(&activity.description),
            activities::duration_minutes.eq(duration),
            activities::capacity.eq(capacity),
            activities::professional_id.eq(activity.professional_id),
        ))
        .execute(conn)?;

    let activity_id: i64 = get_last_insert_rowid(conn)?;

    info!(activity_id, "Activity created");

    find_activity(conn, activity_id)?
        .ok_or_else(|| PersistenceError::NotFound(format!("activity {activity_id} after insert")))
}

pub fn update_activity(
    conn: &mut SqliteConnection,
    activity: &Activity,
) -> Result<Activity, PersistenceError> {
    let activity_id = activity.activity_id.ok_or_else(|| {
        PersistenceError::Other("Cannot update an activity without an id".to_string())
    })?;

    info!("Updating activity {}", activity_id);

    let duration = i32::try_from(activity.duration_minutes)
        .map_err(|_| PersistenceError::Other("Activity duration out of range".to_string()))?;
    let capacity = capacity_to_column(activity.capacity)?;

    let updated = diesel::update(activities::table)
        .filter(activities::activity_id.eq(activity_id))
        .set((
            activities::name.eq(&activity.name),
            activities::kind.eq(activity.kind.as_str()),
            activities::description.eq(&activity.description),
            activities::duration_minutes.eq(duration),
            activities::capacity.eq(capacity),
        ))
        .execute(conn)?;

    if updated == 0 {
        return Err(PersistenceError::NotFound(format!(
            "activity {activity_id}"
        )));
    }

    find_activity(conn, activity_id)?
        .ok_or_else(|| PersistenceError::NotFound(format!("activity {activity_id} after update")))
}

/// Deletes an activity that no booking (of any status) references.
///
/// Bookings are soft-deleted, so a cancelled booking still pins its
/// activity; hard-deleting the activity would orphan the history.
pub fn delete_activity(
    conn: &mut SqliteConnection,
    activity_id: i64,
) -> Result<(), PersistenceError> {
    if is_activity_referenced(conn, activity_id)? {
        return Err(PersistenceError::ActivityReferenced { activity_id });
    }

    info!("Deleting activity {}", activity_id);

    let deleted = diesel::delete(activities::table)
        .filter(activities::activity_id.eq(activity_id))
        .execute(conn)?;

    if deleted == 0 {
        return Err(PersistenceError::NotFound(format!(
            "activity {activity_id}"
        )));
    }

    Ok(())
}
