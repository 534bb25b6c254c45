use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use wallride_types::FieldId;

use crate::{AttributeValue, FieldError, FieldResult, FieldValue, ValueCoercer};

/// All custom field values of one content item, at most one per field.
///
/// Iteration is ordered by field id. Serialized as a plain array of
/// [`AttributeValue`]s; duplicates are rejected on the way back in.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(into = "Vec<AttributeValue>", try_from = "Vec<AttributeValue>")]
pub struct AttributeSet {
    values: BTreeMap<FieldId, AttributeValue>,
}

impl AttributeSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a value, failing if the field already has one.
    pub fn insert(&mut self, value: AttributeValue) -> FieldResult<()> {
        if self.values.contains_key(&value.field_id) {
            return Err(FieldError::DuplicateValue(value.field_id));
        }
        self.values.insert(value.field_id, value);
        Ok(())
    }

    pub fn get(&self, field_id: FieldId) -> Option<&AttributeValue> {
        self.values.get(&field_id)
    }

    /// Shorthand for the typed value of a field.
    pub fn value(&self, field_id: FieldId) -> Option<&FieldValue> {
        self.get(field_id).map(|v| &v.value)
    }

    #[must_use]
    pub fn contains(&self, field_id: FieldId) -> bool {
        self.values.contains_key(&field_id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &AttributeValue> {
        self.values.values()
    }

    pub fn field_ids(&self) -> impl Iterator<Item = FieldId> + '_ {
        self.values.keys().copied()
    }

    /// Renders every value back to its raw form string.
    pub fn to_raw_values(&self, coercer: &ValueCoercer) -> BTreeMap<FieldId, String> {
        self.values
            .iter()
            .map(|(id, v)| (*id, coercer.render(&v.value)))
            .collect()
    }
}

impl From<AttributeSet> for Vec<AttributeValue> {
    fn from(set: AttributeSet) -> Self {
        set.values.into_values().collect()
    }
}

impl TryFrom<Vec<AttributeValue>> for AttributeSet {
    type Error = FieldError;

    fn try_from(values: Vec<AttributeValue>) -> Result<Self, Self::Error> {
        let mut set = Self::new();
        for value in values {
            set.insert(value)?;
        }
        Ok(set)
    }
}

impl<'a> IntoIterator for &'a AttributeSet {
    type Item = &'a AttributeValue;
    type IntoIter = std::collections::btree_map::Values<'a, FieldId, AttributeValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.values()
    }
}
