use eyre::Result;
use sqlx::{Executor, Pool, Postgres};
use tracing::info;

pub async fn initialize_database(pool: &Pool<Postgres>) -> Result<()> {
    info!("Initializing database schema...");

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS events (
            id UUID PRIMARY KEY,
            title VARCHAR(255) NOT NULL,
            description TEXT NOT NULL DEFAULT '',
            organizer_id UUID NOT NULL,
            duration VARCHAR(64) NOT NULL,
            status VARCHAR(32) NOT NULL DEFAULT 'open',
            finalized_slot_id UUID NULL,
            created_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW(),
            updated_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW(),
            CONSTRAINT valid_event_status
                CHECK (status IN ('draft', 'open', 'finalized', 'cancelled'))
        );
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS time_slots (
            id UUID PRIMARY KEY,
            event_id UUID NOT NULL REFERENCES events(id) ON DELETE CASCADE,
            start_time TIMESTAMP WITH TIME ZONE NOT NULL,
            end_time TIMESTAMP WITH TIME ZONE NOT NULL,
            timezone VARCHAR(64) NOT NULL DEFAULT 'UTC',
            created_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW(),
            CONSTRAINT valid_time_range CHECK (end_time > start_time)
        );
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS participants (
            id UUID PRIMARY KEY,
            event_id UUID NOT NULL REFERENCES events(id) ON DELETE CASCADE,
            email VARCHAR(255) NOT NULL,
            name VARCHAR(255) NOT NULL,
            status VARCHAR(32) NOT NULL DEFAULT 'pending',
            created_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW(),
            CONSTRAINT valid_participant_status
                CHECK (status IN ('pending', 'responded', 'declined'))
        );
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS availability (
            id UUID PRIMARY KEY,
            event_id UUID NOT NULL REFERENCES events(id) ON DELETE CASCADE,
            participant_id UUID NOT NULL REFERENCES participants(id) ON DELETE CASCADE,
            slot_id UUID NOT NULL REFERENCES time_slots(id) ON DELETE CASCADE,
            status VARCHAR(32) NOT NULL,
            available_from TIMESTAMP WITH TIME ZONE NULL,
            available_to TIMESTAMP WITH TIME ZONE NULL,
            created_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW(),
            updated_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW(),
            CONSTRAINT unique_participant_slot UNIQUE (participant_id, slot_id),
            CONSTRAINT valid_availability_status
                CHECK (status IN ('available', 'unavailable', 'partial'))
        );
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS preferred_slots (
            id UUID PRIMARY KEY,
            email VARCHAR(255) NOT NULL,
            start_time TIMESTAMP WITH TIME ZONE NOT NULL,
            end_time TIMESTAMP WITH TIME ZONE NOT NULL,
            timezone VARCHAR(64) NOT NULL DEFAULT 'UTC',
            day_of_week INTEGER NULL,
            created_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW(),
            updated_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW(),
            CONSTRAINT valid_day_of_week CHECK (day_of_week BETWEEN 0 AND 6),
            CONSTRAINT valid_preferred_range CHECK (end_time > start_time)
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Several statements at once need the simple query protocol.
    pool.execute(
        r#"
        CREATE INDEX IF NOT EXISTS idx_events_organizer_id ON events(organizer_id);
        CREATE INDEX IF NOT EXISTS idx_time_slots_event_id ON time_slots(event_id);
        CREATE INDEX IF NOT EXISTS idx_time_slots_start_time ON time_slots(start_time);
        CREATE INDEX IF NOT EXISTS idx_participants_event_id ON participants(event_id);
        CREATE INDEX IF NOT EXISTS idx_participants_email ON participants(LOWER(email));
        CREATE INDEX IF NOT EXISTS idx_availability_event_id ON availability(event_id);
        CREATE INDEX IF NOT EXISTS idx_availability_slot_id ON availability(slot_id);
        CREATE INDEX IF NOT EXISTS idx_preferred_slots_email ON preferred_slots(LOWER(email));
        "#,
    )
    .await?;

    info!("Database schema initialized successfully.");
    Ok(())
}
