//! # MeetSync Core
//!
//! Domain types, error taxonomy and the slot recommendation engine shared by
//! the persistence and API crates. Nothing here performs I/O; storage is
//! reached only through the traits in [`readers`].

pub mod errors;
pub mod models;
pub mod readers;
pub mod scheduler;
pub mod time;
pub mod validation;
