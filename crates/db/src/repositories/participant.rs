use std::collections::HashMap;

use eyre::Result;
use meetsync_core::models::event::{Participant, ParticipantStatus};
use sqlx::{Pool, Postgres, Transaction};
use uuid::Uuid;

use crate::models::DbParticipant;

pub async fn insert_participant(
    tx: &mut Transaction<'_, Postgres>,
    participant: &Participant,
) -> Result<DbParticipant> {
    let row = sqlx::query_as::<_, DbParticipant>(
        r#"
        INSERT INTO participants (id, event_id, email, name, status, created_at)
        VALUES ($1, $2, $3, $4, $5, $6)
        RETURNING id, event_id, email, name, status, created_at
        "#,
    )
    .bind(participant.id)
    .bind(participant.event_id)
    .bind(&participant.email)
    .bind(&participant.name)
    .bind(participant.status.as_str())
    .bind(participant.created_at)
    .fetch_one(&mut **tx)
    .await?;

    Ok(row)
}

pub async fn get_participants_by_event_id(
    pool: &Pool<Postgres>,
    event_id: Uuid,
) -> Result<Vec<Participant>> {
    let rows = sqlx::query_as::<_, DbParticipant>(
        r#"
        SELECT id, event_id, email, name, status, created_at
        FROM participants
        WHERE event_id = $1
        ORDER BY created_at ASC, email ASC
        "#,
    )
    .bind(event_id)
    .fetch_all(pool)
    .await?;

    rows.into_iter().map(Participant::try_from).collect()
}

pub async fn get_participants_by_event_ids(
    pool: &Pool<Postgres>,
    event_ids: &[Uuid],
) -> Result<HashMap<Uuid, Vec<Participant>>> {
    let rows = sqlx::query_as::<_, DbParticipant>(
        r#"
        SELECT id, event_id, email, name, status, created_at
        FROM participants
        WHERE event_id = ANY($1)
        ORDER BY created_at ASC, email ASC
        "#,
    )
    .bind(event_ids)
    .fetch_all(pool)
    .await?;

    let mut grouped: HashMap<Uuid, Vec<Participant>> = HashMap::new();
    for row in rows {
        let participant = Participant::try_from(row)?;
        grouped.entry(participant.event_id).or_default().push(participant);
    }
    Ok(grouped)
}

pub async fn set_participant_status(
    tx: &mut Transaction<'_, Postgres>,
    participant_id: Uuid,
    status: ParticipantStatus,
) -> Result<bool> {
    let result = sqlx::query(
        r#"
        UPDATE participants
        SET status = $2
        WHERE id = $1
        "#,
    )
    .bind(participant_id)
    .bind(status.as_str())
    .execute(&mut **tx)
    .await?;

    Ok(result.rows_affected() > 0)
}
