//! Types shared between the species catalog frontend and its table service.

pub mod model;
pub mod requests;
pub mod validation;
