//! mockall doubles of the reader traits for downstream handler tests.

pub mod repositories;
