//! spiro-core
//!
//! Pure domain types for pulmonary staging: input records, classification
//! results, and the report line model. No I/O — this is the shared
//! vocabulary of the spiro system, and the serialized shapes double as the
//! contract with the questionnaire UI.

pub mod error;
pub mod models;
