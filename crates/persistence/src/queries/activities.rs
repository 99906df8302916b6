// Copyright (C) 2026 Gym Agenda Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Activity catalog queries.

use diesel::SqliteConnection;
use diesel::prelude::*;
use gym_agenda_domain::Activity;
use tracing::debug;

use crate::data_models::{ActivityOverview, ActivityRow};
use crate::diesel_schema::activities;
use crate::error::PersistenceError;
use crate::queries::bookings::count_active_for_activity;

pub fn find_activity(
    conn: &mut SqliteConnection,
    activity_id: i64,
) -> Result<Option<Activity>, PersistenceError> {
    debug!("Looking up activity by id: {}", activity_id);

    let result: Result<ActivityRow, diesel::result::Error> = activities::table
        .filter(activities::activity_id.eq(activity_id))
        .select(ActivityRow::as_select())
        .first(conn);

    match result {
        Ok(row) => Ok(Some(Activity::try_from(row)?)),
        Err(diesel::result::Error::NotFound) => Ok(None),
        Err(e) => Err(PersistenceError::from(e)),
    }
}

fn to_overview(
    conn: &mut SqliteConnection,
    row: ActivityRow,
) -> Result<ActivityOverview, PersistenceError> {
    let activity = Activity::try_from(row)?;
    let activity_id = activity.activity_id.ok_or_else(|| {
        PersistenceError::Other("Loaded activity is missing its id".to_string())
    })?;
    let active_bookings = count_active_for_activity(conn, activity_id)?;
    let remaining_slots = activity.capacity.remaining(active_bookings);
    Ok(ActivityOverview {
        activity,
        active_bookings,
        remaining_slots,
    })
}

pub fn list_activities(
    conn: &mut SqliteConnection,
) -> Result<Vec<ActivityOverview>, PersistenceError> {
    debug!("Listing all activities");

    let rows: Vec<ActivityRow> = activities::table
        .order(activities::name.asc())
        .select(ActivityRow::as_select())
        .load(conn)?;

    rows.into_iter().map(|row| to_overview(conn, row)).collect()
}

pub fn list_activities_by_professional(
    conn: &mut SqliteConnection,
    professional_id: i64,
) -> Result<Vec<ActivityOverview>, PersistenceError> {
    debug!("Listing activities for professional: {}", professional_id);

    let rows: Vec<ActivityRow> = activities::table
        .filter(activities::professional_id.eq(professional_id))
        .order(activities::name.asc())
        .select(ActivityRow::as_select())
        .load(conn)?;

    rows.into_iter().map(|row| to_overview(conn, row)).collect()
}

/// Lists activities that still admit at least one booking.
pub fn list_available_activities(
    conn: &mut SqliteConnection,
) -> Result<Vec<ActivityOverview>, PersistenceError> {
    let overviews = list_activities(conn)?;
    Ok(overviews
        .into_iter()
        .filter(|o| o.remaining_slots != Some(0))
        .collect())
}
