//! spiro-instruments
//!
//! Pulmonary staging instrument definitions. Pure computation — no I/O.
//! Defines the questionnaire fields, validation rules, and staging rules
//! for each supported instrument.

pub mod error;
pub mod fields;
pub mod instruments;

use error::InstrumentError;
use fields::{FieldSpec, ValidationError};

/// Identity and field metadata shared by every instrument. Object-safe so
/// the registry can hand the wizard a uniform view.
pub trait InstrumentMeta: Send + Sync {
    /// Unique identifier for this instrument (e.g. "copd", "asthma").
    fn id(&self) -> &str;

    /// Human-readable name (e.g. "COPD Staging (GOLD)").
    fn name(&self) -> &str;

    /// The questionnaire fields this instrument collects.
    fn fields(&self) -> &[FieldSpec];
}

/// A staging instrument: validates a raw questionnaire form and classifies
/// it into a typed result.
pub trait Instrument: InstrumentMeta {
    type Form;
    type Output;

    /// Check a form against this instrument's field rules. Returns every
    /// violation, so the wizard can flag all offending steps at once.
    fn validate(&self, form: &Self::Form) -> Vec<ValidationError>;

    /// Classify a validated form. Fails with the first validation error if
    /// the form is incomplete; classification itself is total.
    fn classify(&self, form: &Self::Form) -> Result<Self::Output, InstrumentError>;
}

/// Return all registered instruments.
pub fn all_instruments() -> Vec<&'static dyn InstrumentMeta> {
    vec![&instruments::copd::Copd, &instruments::asthma::Asthma]
}

/// Look up an instrument by ID.
pub fn get_instrument(id: &str) -> Option<&'static dyn InstrumentMeta> {
    all_instruments().into_iter().find(|i| i.id() == id)
}

/// Field metadata for an instrument ID, for callers that only know the ID.
pub fn instrument_fields(id: &str) -> Result<&'static [FieldSpec], InstrumentError> {
    get_instrument(id)
        .map(|i| i.fields())
        .ok_or_else(|| InstrumentError::UnknownInstrument(id.to_string()))
}
