// File: rusty-forms/src/validate.rs
// Purpose: Whole-form validation over bound inputs or a separate record

use crate::error::FormError;
use crate::form::{invalid, Form};
use crate::record::FormRecord;
use serde::{Deserialize, Serialize};

/// What the caller intends to do with a validated record. Accepted for
/// call-site clarity; every action validates the same way.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    Create,
    Read,
    Update,
    Delete,
}

impl<R: FormRecord> Form<R> {
    /// Validates every input in order, skipping inputs marked
    /// skip-validation. The first failure is returned.
    pub fn validate(&self) -> Result<(), FormError> {
        self.inputs
            .iter()
            .filter(|input| !input.skip_validation())
            .try_for_each(|input| input.validate().map_err(|err| invalid(input, err)))
    }

    /// Validates `record` with this form's inputs, reading values through
    /// the stored field indices. The form itself is not touched.
    ///
    /// `None` is accepted and validates successfully. Inputs not backed by a
    /// record field are skipped.
    pub fn validate_record(&self, action: Action, record: Option<&R>) -> Result<(), FormError> {
        let Some(record) = record else {
            return Ok(());
        };
        tracing::trace!(form = %self.id, ?action, "validating record");

        for (input, slot) in self.inputs.iter().zip(&self.field_indices) {
            if input.skip_validation() {
                continue;
            }
            let Some(index) = *slot else {
                continue;
            };
            let value = record
                .field_value(index)
                .ok_or_else(|| FormError::FieldIndex {
                    field: input.name().to_string(),
                    index,
                })?;
            for selected in value.selected() {
                input
                    .validate_field(selected)
                    .map_err(|err| invalid(input, err))?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Action::Update).unwrap(), "\"update\"");
        let parsed: Action = serde_json::from_str("\"delete\"").unwrap();
        assert_eq!(parsed, Action::Delete);
    }
}
