//! Custom field model for WallRide.
//!
//! Administrators declare custom fields; authors fill them in per article.
//! This crate holds the types and the pure logic in between:
//! - [`FieldDefinition`] / [`FieldType`]: the administrator-defined schema
//! - [`FieldValue`] / [`AttributeValue`]: one typed value, as a sum type
//! - [`AttributeSet`]: all values for one content item, unique per field
//! - [`ValueCoercer`]: raw form string → typed value, and back
//! - [`ValueCoercer::build`]: batch assembly of an attribute set
//!
//! Nothing here performs I/O. Definitions come from a repository (see
//! `wallride-storage`) and are passed in by reference.

mod assemble;
mod attribute_set;
mod coerce;
mod error;
mod field;
mod value;

pub use assemble::build_attribute_set;
pub use attribute_set::AttributeSet;
pub use coerce::{coerce, CoercionConfig, FieldLookup, ValueCoercer, DATETIME_FORMAT, DATE_FORMAT};
pub use error::{FieldError, FieldResult};
pub use field::{FieldDefinition, FieldType};
pub use value::{AttributeValue, FieldValue};
