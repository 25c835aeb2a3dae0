pub mod availability;
pub mod event;
pub mod health;
pub mod preferred_slot;
