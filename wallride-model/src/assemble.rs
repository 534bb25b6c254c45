//! Batch assembly of an [`AttributeSet`] from raw form values.

use std::collections::{BTreeMap, HashSet};
use tracing::debug;
use wallride_types::{FieldId, Violation};

use crate::{AttributeSet, FieldDefinition, FieldError, FieldResult, ValueCoercer};

impl ValueCoercer {
    /// Builds the attribute set for `fields` from `raw_values`.
    ///
    /// Every field gets an entry; a missing raw value counts as the empty
    /// string. Validation is batch, not fail-fast: all per-field failures
    /// are returned together as [`FieldError::ValidationFailed`].
    pub fn build(
        &self,
        fields: &[FieldDefinition],
        raw_values: &BTreeMap<FieldId, String>,
    ) -> FieldResult<AttributeSet> {
        self.assemble(fields, raw_values)
            .map_err(|errors| FieldError::ValidationFailed { errors })
    }

    /// Like [`build`](Self::build), but hands back the bare violation list
    /// so callers can merge it with their own.
    ///
    /// Besides coercion failures this reports a field listed twice and raw
    /// values for ids that match no field.
    pub fn assemble(
        &self,
        fields: &[FieldDefinition],
        raw_values: &BTreeMap<FieldId, String>,
    ) -> Result<AttributeSet, Vec<Violation>> {
        let mut set = AttributeSet::new();
        let mut errors = Vec::new();

        for field in fields {
            let raw = raw_values.get(&field.id).map_or("", String::as_str);
            let outcome = self
                .coerce(field, raw)
                .and_then(|value| set.insert(value));
            if let Err(e) = outcome {
                errors.extend(e.into_violations());
            }
        }

        let known: HashSet<FieldId> = fields.iter().map(|f| f.id).collect();
        errors.extend(
            raw_values
                .keys()
                .filter(|id| !known.contains(id))
                .map(|id| Violation::not_found(*id)),
        );

        if errors.is_empty() {
            Ok(set)
        } else {
            debug!(
                fields = fields.len(),
                failures = errors.len(),
                "custom field values failed validation"
            );
            Err(errors)
        }
    }
}

/// Builds an attribute set with the default form patterns.
pub fn build_attribute_set(
    fields: &[FieldDefinition],
    raw_values: &BTreeMap<FieldId, String>,
) -> FieldResult<AttributeSet> {
    ValueCoercer::default().build(fields, raw_values)
}
