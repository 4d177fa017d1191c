//! vigor-core
//!
//! Pure domain types for senior-fitness assessment: patient demographics,
//! the protocol catalog, classification codes, assessment results and the
//! history entries built from them. No scoring logic lives here. This is the
//! shared vocabulary of the Vigor system.

pub mod config;
pub mod error;
pub mod models;
