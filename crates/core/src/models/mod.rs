pub mod availability;
pub mod event;
pub mod preferred_slot;
pub mod recommendation;
pub mod time_slot;
