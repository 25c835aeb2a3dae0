use async_trait::async_trait;
use mockall::mock;
use meetsync_core::{
    models::{availability::Availability, event::Event, preferred_slot::PreferredSlot},
    readers::{AvailabilityReader, EventReader, PreferenceReader},
};
use uuid::Uuid;

mock! {
    pub EventRepo {}

    #[async_trait]
    impl EventReader for EventRepo {
        async fn get_event(&self, event_id: Uuid) -> eyre::Result<Option<Event>>;
    }
}

mock! {
    pub AvailabilityRepo {}

    #[async_trait]
    impl AvailabilityReader for AvailabilityRepo {
        async fn get_availability_by_event(
            &self,
            event_id: Uuid,
        ) -> eyre::Result<Vec<Availability>>;
    }
}

mock! {
    pub PreferredSlotRepo {}

    #[async_trait]
    impl PreferenceReader for PreferredSlotRepo {
        async fn get_preferred_slots_by_emails(
            &self,
            emails: &[String],
        ) -> eyre::Result<Vec<PreferredSlot>>;
    }
}
