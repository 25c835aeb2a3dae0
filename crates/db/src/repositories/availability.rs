use std::collections::HashSet;

use async_trait::async_trait;
use eyre::Result;
use meetsync_core::{
    models::{availability::Availability, event::ParticipantStatus},
    readers::AvailabilityReader,
};
use uuid::Uuid;

use crate::DbPool;
use crate::models::DbAvailability;
use crate::repositories::participant;

#[derive(Clone)]
pub struct AvailabilityRepository {
    pool: DbPool,
}

impl AvailabilityRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Upserts every record on `(participant_id, slot_id)` and marks the
    /// submitting participants as responded, all in one transaction.
    pub async fn submit_availability(&self, records: &[Availability]) -> Result<Vec<Availability>> {
        tracing::debug!("Submitting {} availability records", records.len());

        let mut tx = self.pool.begin().await?;
        let mut saved = Vec::with_capacity(records.len());

        for record in records {
            let row = sqlx::query_as::<_, DbAvailability>(
                r#"
                INSERT INTO availability
                    (id, event_id, participant_id, slot_id, status, available_from, available_to, created_at, updated_at)
                VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
                ON CONFLICT (participant_id, slot_id) DO UPDATE SET
                    status = EXCLUDED.status,
                    available_from = EXCLUDED.available_from,
                    available_to = EXCLUDED.available_to,
                    updated_at = EXCLUDED.updated_at
                RETURNING id, event_id, participant_id, slot_id, status, available_from, available_to, created_at, updated_at
                "#,
            )
            .bind(record.id)
            .bind(record.event_id)
            .bind(record.participant_id)
            .bind(record.slot_id)
            .bind(record.status.as_str())
            .bind(record.available_from)
            .bind(record.available_to)
            .bind(record.created_at)
            .bind(record.updated_at)
            .fetch_one(&mut *tx)
            .await?;

            saved.push(Availability::try_from(row)?);
        }

        let responders: HashSet<Uuid> = records.iter().map(|r| r.participant_id).collect();
        for participant_id in responders {
            participant::set_participant_status(&mut tx, participant_id, ParticipantStatus::Responded)
                .await?;
        }

        tx.commit().await?;
        Ok(saved)
    }

    pub async fn get_availability_by_event_id(&self, event_id: Uuid) -> Result<Vec<Availability>> {
        tracing::debug!("Getting availability for event: {}", event_id);

        let rows = sqlx::query_as::<_, DbAvailability>(
            r#"
            SELECT id, event_id, participant_id, slot_id, status, available_from, available_to, created_at, updated_at
            FROM availability
            WHERE event_id = $1
            ORDER BY created_at ASC
            "#,
        )
        .bind(event_id)
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(Availability::try_from).collect()
    }

    pub async fn get_availability_by_participant(
        &self,
        event_id: Uuid,
        participant_id: Uuid,
    ) -> Result<Vec<Availability>> {
        let rows = sqlx::query_as::<_, DbAvailability>(
            r#"
            SELECT id, event_id, participant_id, slot_id, status, available_from, available_to, created_at, updated_at
            FROM availability
            WHERE event_id = $1 AND participant_id = $2
            ORDER BY created_at ASC
            "#,
        )
        .bind(event_id)
        .bind(participant_id)
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(Availability::try_from).collect()
    }

    pub async fn get_availability_by_id(&self, id: Uuid) -> Result<Option<Availability>> {
        let row = sqlx::query_as::<_, DbAvailability>(
            r#"
            SELECT id, event_id, participant_id, slot_id, status, available_from, available_to, created_at, updated_at
            FROM availability
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        row.map(Availability::try_from).transpose()
    }

    pub async fn update_availability(&self, availability: &Availability) -> Result<bool> {
        tracing::debug!("Updating availability: id={}", availability.id);

        let result = sqlx::query(
            r#"
            UPDATE availability
            SET status = $2, available_from = $3, available_to = $4, updated_at = $5
            WHERE id = $1
            "#,
        )
        .bind(availability.id)
        .bind(availability.status.as_str())
        .bind(availability.available_from)
        .bind(availability.available_to)
        .bind(availability.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    pub async fn delete_availability(&self, id: Uuid) -> Result<bool> {
        let result = sqlx::query("DELETE FROM availability WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

#[async_trait]
impl AvailabilityReader for AvailabilityRepository {
    async fn get_availability_by_event(&self, event_id: Uuid) -> Result<Vec<Availability>> {
        self.get_availability_by_event_id(event_id).await
    }
}
