pub mod asthma;
pub mod copd;

use crate::InstrumentMeta;
use crate::error::InstrumentError;
use crate::fields::ValidationError;

/// Pull a required field out of a form, surfacing a missing-field error
/// when the wizard never filled it in.
pub(crate) fn require<T>(
    meta: &dyn InstrumentMeta,
    field_id: &str,
    value: Option<T>,
) -> Result<T, InstrumentError> {
    value.ok_or_else(|| {
        let name = meta
            .fields()
            .iter()
            .find(|f| f.id == field_id)
            .map(|f| f.name.clone())
            .unwrap_or_else(|| field_id.to_string());
        ValidationError::missing(meta.name(), field_id, &name).into()
    })
}
