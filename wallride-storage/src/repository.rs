use wallride_model::FieldDefinition;
use wallride_types::{FieldId, Language};

use crate::{Page, PageRequest, SearchCriteria, StorageResult};

/// Page size used when a search does not say otherwise.
pub const DEFAULT_PAGE_SIZE: usize = 20;

/// Read access to custom field definitions.
///
/// [`FieldRegistry`](crate::FieldRegistry) is the in-memory implementation.
/// A database-backed implementation lives with the persistence layer.
pub trait CustomFieldRepository: Send + Sync {
    /// Loads one definition, failing with `NotFound` if it does not exist.
    fn get(&self, id: FieldId) -> StorageResult<FieldDefinition>;

    /// All definitions applying to `language` (or all, for `None`), in
    /// display order.
    fn find_all(&self, language: Option<&Language>) -> StorageResult<Vec<FieldDefinition>>;

    /// One page of matching definitions.
    fn search_with(
        &self,
        criteria: &SearchCriteria,
        page: &PageRequest,
    ) -> StorageResult<Page<FieldDefinition>>;

    /// Number of definitions matching `criteria`.
    fn count(&self, criteria: &SearchCriteria) -> StorageResult<usize>;

    /// Page size for [`search`](Self::search).
    fn default_page_size(&self) -> usize {
        DEFAULT_PAGE_SIZE
    }

    /// First page of matching definitions, at the default page size.
    fn search(&self, criteria: &SearchCriteria) -> StorageResult<Page<FieldDefinition>> {
        self.search_with(criteria, &PageRequest::of(0, self.default_page_size()))
    }
}
