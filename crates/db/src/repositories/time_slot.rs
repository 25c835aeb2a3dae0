use std::collections::HashMap;

use eyre::Result;
use meetsync_core::models::time_slot::TimeSlot;
use sqlx::{Pool, Postgres, Transaction};
use uuid::Uuid;

use crate::models::DbTimeSlot;

pub async fn insert_time_slot(
    tx: &mut Transaction<'_, Postgres>,
    slot: &TimeSlot,
) -> Result<DbTimeSlot> {
    let time_slot = sqlx::query_as::<_, DbTimeSlot>(
        r#"
        INSERT INTO time_slots (id, event_id, start_time, end_time, timezone, created_at)
        VALUES ($1, $2, $3, $4, $5, $6)
        RETURNING id, event_id, start_time, end_time, timezone, created_at
        "#,
    )
    .bind(slot.id)
    .bind(slot.event_id)
    .bind(slot.start_time)
    .bind(slot.end_time)
    .bind(&slot.timezone)
    .bind(slot.created_at)
    .fetch_one(&mut **tx)
    .await?;

    Ok(time_slot)
}

pub async fn get_time_slots_by_event_id(
    pool: &Pool<Postgres>,
    event_id: Uuid,
) -> Result<Vec<TimeSlot>> {
    let time_slots = sqlx::query_as::<_, DbTimeSlot>(
        r#"
        SELECT id, event_id, start_time, end_time, timezone, created_at
        FROM time_slots
        WHERE event_id = $1
        ORDER BY start_time ASC
        "#,
    )
    .bind(event_id)
    .fetch_all(pool)
    .await?;

    Ok(time_slots.into_iter().map(TimeSlot::from).collect())
}

/// Slots of several events at once, grouped by event and ordered by start time.
pub async fn get_time_slots_by_event_ids(
    pool: &Pool<Postgres>,
    event_ids: &[Uuid],
) -> Result<HashMap<Uuid, Vec<TimeSlot>>> {
    let rows = sqlx::query_as::<_, DbTimeSlot>(
        r#"
        SELECT id, event_id, start_time, end_time, timezone, created_at
        FROM time_slots
        WHERE event_id = ANY($1)
        ORDER BY start_time ASC
        "#,
    )
    .bind(event_ids)
    .fetch_all(pool)
    .await?;

    let mut grouped: HashMap<Uuid, Vec<TimeSlot>> = HashMap::new();
    for row in rows {
        grouped.entry(row.event_id).or_default().push(row.into());
    }
    Ok(grouped)
}
