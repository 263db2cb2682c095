//! The three sheets opened from a species card.

pub mod delete;
pub mod detail;
pub mod edit;
