use async_trait::async_trait;
use eyre::Result;
use meetsync_core::{
    models::{
        event::{Event, Participant, ParticipantStatus},
        time_slot::TimeSlot,
    },
    readers::EventReader,
};
use uuid::Uuid;

use crate::DbPool;
use crate::models::DbEvent;
use crate::repositories::{participant, time_slot};

const EVENT_COLUMNS: &str =
    "id, title, description, organizer_id, duration, status, finalized_slot_id, created_at, updated_at";

/// Events together with their proposed slots and participants.
#[derive(Clone)]
pub struct EventRepository {
    pool: DbPool,
}

impl EventRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Inserts the event, its slots and its participants in one transaction.
    pub async fn create_event(&self, event: &Event) -> Result<Event> {
        tracing::debug!(
            "Creating event: id={}, slots={}, participants={}",
            event.id,
            event.proposed_slots.len(),
            event.participants.len()
        );

        let mut tx = self.pool.begin().await?;

        let row = sqlx::query_as::<_, DbEvent>(&format!(
            r#"
            INSERT INTO events (id, title, description, organizer_id, duration, status, finalized_slot_id, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING {EVENT_COLUMNS}
            "#
        ))
        .bind(event.id)
        .bind(&event.title)
        .bind(&event.description)
        .bind(event.organizer_id)
        .bind(&event.duration)
        .bind(event.status.as_str())
        .bind(event.finalized_slot_id)
        .bind(event.created_at)
        .bind(event.updated_at)
        .fetch_one(&mut *tx)
        .await?;

        let mut proposed_slots = Vec::with_capacity(event.proposed_slots.len());
        for slot in &event.proposed_slots {
            let row = time_slot::insert_time_slot(&mut tx, slot).await?;
            proposed_slots.push(TimeSlot::from(row));
        }

        let mut participants = Vec::with_capacity(event.participants.len());
        for p in &event.participants {
            let row = participant::insert_participant(&mut tx, p).await?;
            participants.push(Participant::try_from(row)?);
        }

        tx.commit().await?;

        tracing::debug!("Event created successfully: id={}", event.id);
        row.into_event(proposed_slots, participants)
    }

    pub async fn get_event_by_id(&self, id: Uuid) -> Result<Option<Event>> {
        tracing::debug!("Getting event by id: {}", id);

        let row = sqlx::query_as::<_, DbEvent>(&format!(
            r#"
            SELECT {EVENT_COLUMNS}
            FROM events
            WHERE id = $1
            "#
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        let Some(row) = row else {
            tracing::debug!("Event not found: id={}", id);
            return Ok(None);
        };

        let proposed_slots = time_slot::get_time_slots_by_event_id(&self.pool, id).await?;
        let participants = participant::get_participants_by_event_id(&self.pool, id).await?;

        row.into_event(proposed_slots, participants).map(Some)
    }

    /// Newest first.
    pub async fn list_events_by_organizer(&self, organizer_id: Uuid) -> Result<Vec<Event>> {
        tracing::debug!("Listing events for organizer: {}", organizer_id);

        let rows = sqlx::query_as::<_, DbEvent>(&format!(
            r#"
            SELECT {EVENT_COLUMNS}
            FROM events
            WHERE organizer_id = $1
            ORDER BY created_at DESC
            "#
        ))
        .bind(organizer_id)
        .fetch_all(&self.pool)
        .await?;

        if rows.is_empty() {
            return Ok(Vec::new());
        }

        let ids: Vec<Uuid> = rows.iter().map(|row| row.id).collect();
        let mut slots = time_slot::get_time_slots_by_event_ids(&self.pool, &ids).await?;
        let mut participants = participant::get_participants_by_event_ids(&self.pool, &ids).await?;

        rows.into_iter()
            .map(|row| {
                let event_slots = slots.remove(&row.id).unwrap_or_default();
                let event_participants = participants.remove(&row.id).unwrap_or_default();
                row.into_event(event_slots, event_participants)
            })
            .collect()
    }

    /// Persists title, description and duration.
    pub async fn update_event(&self, event: &Event) -> Result<bool> {
        tracing::debug!("Updating event details: id={}", event.id);

        let result = sqlx::query(
            r#"
            UPDATE events
            SET title = $2, description = $3, duration = $4, updated_at = $5
            WHERE id = $1
            "#,
        )
        .bind(event.id)
        .bind(&event.title)
        .bind(&event.description)
        .bind(&event.duration)
        .bind(event.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Persists status and the finalized slot.
    pub async fn update_event_status(&self, event: &Event) -> Result<bool> {
        tracing::debug!(
            "Updating event status: id={}, status={}",
            event.id,
            event.status
        );

        let result = sqlx::query(
            r#"
            UPDATE events
            SET status = $2, finalized_slot_id = $3, updated_at = $4
            WHERE id = $1
            "#,
        )
        .bind(event.id)
        .bind(event.status.as_str())
        .bind(event.finalized_slot_id)
        .bind(event.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    pub async fn delete_event(&self, id: Uuid) -> Result<bool> {
        tracing::debug!("Deleting event: id={}", id);

        let result = sqlx::query("DELETE FROM events WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    pub async fn update_participant_status(
        &self,
        participant_id: Uuid,
        status: ParticipantStatus,
    ) -> Result<bool> {
        let mut tx = self.pool.begin().await?;
        let updated = participant::set_participant_status(&mut tx, participant_id, status).await?;
        tx.commit().await?;
        Ok(updated)
    }
}

#[async_trait]
impl EventReader for EventRepository {
    async fn get_event(&self, event_id: Uuid) -> Result<Option<Event>> {
        self.get_event_by_id(event_id).await
    }
}
