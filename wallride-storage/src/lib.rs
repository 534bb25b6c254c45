//! Custom field storage for WallRide.
//!
//! Provides read access to custom field definitions:
//!
//! - [`CustomFieldRepository`] is the seam to the persistence layer
//! - [`FieldRegistry`] is an immutable in-memory implementation that can be
//!   shared across threads without locking
//! - [`SearchCriteria`], [`PageRequest`] and [`Page`] drive paginated search
//!
//! Creating and editing definitions is an administrative concern outside
//! this crate; a changed definition set is published as a new registry.

mod criteria;
mod error;
mod page;
mod registry;
mod repository;

pub use criteria::SearchCriteria;
pub use error::{StorageError, StorageResult};
pub use page::{Direction, Page, PageRequest, Sort, SortKey};
pub use registry::{FieldRegistry, RegistryConfig};
pub use repository::{CustomFieldRepository, DEFAULT_PAGE_SIZE};
