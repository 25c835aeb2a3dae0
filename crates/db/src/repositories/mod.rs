pub mod availability;
pub mod event;
pub mod participant;
pub mod preferred_slot;
pub mod time_slot;

pub use availability::AvailabilityRepository;
pub use event::EventRepository;
pub use preferred_slot::PreferredSlotRepository;
