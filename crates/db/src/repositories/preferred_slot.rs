use async_trait::async_trait;
use eyre::Result;
use meetsync_core::{models::preferred_slot::PreferredSlot, readers::PreferenceReader};
use uuid::Uuid;

use crate::DbPool;
use crate::models::DbPreferredSlot;

/// Standing time-of-day preferences keyed by email. Email lookups ignore case.
#[derive(Clone)]
pub struct PreferredSlotRepository {
    pool: DbPool,
}

impl PreferredSlotRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub async fn create_preferred_slot(&self, slot: &PreferredSlot) -> Result<PreferredSlot> {
        tracing::debug!("Creating preferred slot: id={}, email={}", slot.id, slot.email);

        let row = sqlx::query_as::<_, DbPreferredSlot>(
            r#"
            INSERT INTO preferred_slots (id, email, start_time, end_time, timezone, day_of_week, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING id, email, start_time, end_time, timezone, day_of_week, created_at, updated_at
            "#,
        )
        .bind(slot.id)
        .bind(&slot.email)
        .bind(slot.start_time)
        .bind(slot.end_time)
        .bind(&slot.timezone)
        .bind(slot.day_of_week)
        .bind(slot.created_at)
        .bind(slot.updated_at)
        .fetch_one(&self.pool)
        .await?;

        Ok(row.into())
    }

    pub async fn get_preferred_slot_by_id(&self, id: Uuid) -> Result<Option<PreferredSlot>> {
        let row = sqlx::query_as::<_, DbPreferredSlot>(
            r#"
            SELECT id, email, start_time, end_time, timezone, day_of_week, created_at, updated_at
            FROM preferred_slots
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(PreferredSlot::from))
    }

    pub async fn get_preferred_slots_by_email(&self, email: &str) -> Result<Vec<PreferredSlot>> {
        let rows = sqlx::query_as::<_, DbPreferredSlot>(
            r#"
            SELECT id, email, start_time, end_time, timezone, day_of_week, created_at, updated_at
            FROM preferred_slots
            WHERE LOWER(email) = LOWER($1)
            ORDER BY start_time ASC
            "#,
        )
        .bind(email)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(PreferredSlot::from).collect())
    }

    pub async fn get_preferred_slots_for_emails(
        &self,
        emails: &[String],
    ) -> Result<Vec<PreferredSlot>> {
        tracing::debug!("Getting preferred slots for {} emails", emails.len());

        let lowered: Vec<String> = emails.iter().map(|email| email.to_lowercase()).collect();
        let rows = sqlx::query_as::<_, DbPreferredSlot>(
            r#"
            SELECT id, email, start_time, end_time, timezone, day_of_week, created_at, updated_at
            FROM preferred_slots
            WHERE LOWER(email) = ANY($1)
            ORDER BY email ASC, start_time ASC
            "#,
        )
        .bind(&lowered)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(PreferredSlot::from).collect())
    }

    pub async fn update_preferred_slot(&self, slot: &PreferredSlot) -> Result<bool> {
        let result = sqlx::query(
            r#"
            UPDATE preferred_slots
            SET start_time = $2, end_time = $3, timezone = $4, day_of_week = $5, updated_at = $6
            WHERE id = $1
            "#,
        )
        .bind(slot.id)
        .bind(slot.start_time)
        .bind(slot.end_time)
        .bind(&slot.timezone)
        .bind(slot.day_of_week)
        .bind(slot.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    pub async fn delete_preferred_slot(&self, id: Uuid) -> Result<bool> {
        let result = sqlx::query("DELETE FROM preferred_slots WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

#[async_trait]
impl PreferenceReader for PreferredSlotRepository {
    async fn get_preferred_slots_by_emails(&self, emails: &[String]) -> Result<Vec<PreferredSlot>> {
        self.get_preferred_slots_for_emails(emails).await
    }
}
