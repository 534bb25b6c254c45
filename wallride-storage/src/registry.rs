//! In-memory custom field registry.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, info};
use wallride_model::{FieldDefinition, FieldError, FieldLookup};
use wallride_types::{FieldId, Language};

use crate::repository::DEFAULT_PAGE_SIZE;
use crate::{
    CustomFieldRepository, Page, PageRequest, SearchCriteria, Sort, StorageError, StorageResult,
};

/// Configuration for the registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegistryConfig {
    /// Page size for searches without an explicit page request.
    pub default_page_size: usize,
    /// Upper bound on any page size; larger requests are clamped.
    pub max_page_size: usize,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            default_page_size: DEFAULT_PAGE_SIZE,
            max_page_size: 100,
        }
    }
}

impl RegistryConfig {
    fn validate(&self) -> StorageResult<()> {
        if self.default_page_size == 0 {
            return Err(StorageError::InvalidConfig(
                "default_page_size must be positive".into(),
            ));
        }
        if self.max_page_size < self.default_page_size {
            return Err(StorageError::InvalidConfig(format!(
                "max_page_size {} is below default_page_size {}",
                self.max_page_size, self.default_page_size
            )));
        }
        Ok(())
    }
}

struct Snapshot {
    /// Sorted by the default order.
    definitions: Vec<FieldDefinition>,
    by_id: HashMap<FieldId, usize>,
}

/// An immutable, shareable set of field definitions.
///
/// Cloning is cheap (one `Arc`), and the snapshot is never mutated, so any
/// number of threads can read it without locking. To change definitions,
/// build a new registry.
#[derive(Clone)]
pub struct FieldRegistry {
    snapshot: Arc<Snapshot>,
    config: RegistryConfig,
}

impl FieldRegistry {
    /// Creates a registry with the default config.
    pub fn new(definitions: Vec<FieldDefinition>) -> StorageResult<Self> {
        Self::with_config(definitions, RegistryConfig::default())
    }

    /// Creates a registry, rejecting duplicate ids and invalid definitions.
    pub fn with_config(
        mut definitions: Vec<FieldDefinition>,
        config: RegistryConfig,
    ) -> StorageResult<Self> {
        config.validate()?;
        for definition in &definitions {
            definition.validate().map_err(|e| match e {
                FieldError::InvalidDefinition(reason) => StorageError::InvalidDefinition(reason),
                other => StorageError::InvalidDefinition(other.to_string()),
            })?;
        }

        let default_sort = Sort::default();
        definitions.sort_by(|a, b| default_sort.compare(a, b));

        let mut by_id = HashMap::with_capacity(definitions.len());
        for (pos, definition) in definitions.iter().enumerate() {
            if by_id.insert(definition.id, pos).is_some() {
                return Err(StorageError::DuplicateField(definition.id));
            }
        }

        info!(definitions = definitions.len(), "custom field registry built");
        Ok(Self {
            snapshot: Arc::new(Snapshot { definitions, by_id }),
            config,
        })
    }

    /// Builds a registry from a JSON array of definitions.
    pub fn from_json(json: &str, config: RegistryConfig) -> StorageResult<Self> {
        let definitions: Vec<FieldDefinition> = serde_json::from_str(json)?;
        Self::with_config(definitions, config)
    }

    /// Reads a JSON array of definitions from `path`.
    pub fn load(path: &Path, config: RegistryConfig) -> StorageResult<Self> {
        debug!(path = %path.display(), "loading custom field definitions");
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json, config)
    }

    pub fn config(&self) -> &RegistryConfig {
        &self.config
    }

    pub fn len(&self) -> usize {
        self.snapshot.definitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshot.definitions.is_empty()
    }

    /// Borrows a definition without cloning it.
    pub fn definition(&self, id: FieldId) -> Option<&FieldDefinition> {
        self.snapshot
            .by_id
            .get(&id)
            .map(|&pos| &self.snapshot.definitions[pos])
    }

    /// All definitions in display order.
    pub fn definitions(&self) -> &[FieldDefinition] {
        &self.snapshot.definitions
    }

    fn matching<'a>(
        &'a self,
        criteria: &'a SearchCriteria,
    ) -> impl Iterator<Item = &'a FieldDefinition> + 'a {
        self.snapshot
            .definitions
            .iter()
            .filter(move |f| criteria.matches(f))
    }
}

impl std::fmt::Debug for FieldRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FieldRegistry")
            .field("definitions", &self.len())
            .field("config", &self.config)
            .finish()
    }
}

impl CustomFieldRepository for FieldRegistry {
    fn get(&self, id: FieldId) -> StorageResult<FieldDefinition> {
        self.definition(id)
            .cloned()
            .ok_or(StorageError::NotFound(id))
    }

    fn find_all(&self, language: Option<&Language>) -> StorageResult<Vec<FieldDefinition>> {
        Ok(self
            .snapshot
            .definitions
            .iter()
            .filter(|f| language.is_none_or(|l| f.applies_to(l)))
            .cloned()
            .collect())
    }

    fn search_with(
        &self,
        criteria: &SearchCriteria,
        page: &PageRequest,
    ) -> StorageResult<Page<FieldDefinition>> {
        if page.size() == 0 {
            return Err(StorageError::InvalidPageRequest(
                "page size must be positive".into(),
            ));
        }
        let size = page.size().min(self.config.max_page_size);
        let offset = page.page().saturating_mul(size);

        let mut hits: Vec<&FieldDefinition> = self.matching(criteria).collect();
        let sort = page.sort();
        if sort != Sort::default() {
            hits.sort_by(|a, b| sort.compare(a, b));
        }

        let total = hits.len();
        let content = hits
            .into_iter()
            .skip(offset)
            .take(size)
            .cloned()
            .collect::<Vec<_>>();

        debug!(
            page = page.page(),
            size,
            total,
            returned = content.len(),
            "custom field search"
        );
        Ok(Page::new(content, page.page(), size, total))
    }

    fn count(&self, criteria: &SearchCriteria) -> StorageResult<usize> {
        Ok(self.matching(criteria).count())
    }

    fn default_page_size(&self) -> usize {
        self.config.default_page_size
    }
}

impl FieldLookup for FieldRegistry {
    fn find_field(&self, id: FieldId) -> Option<&FieldDefinition> {
        self.definition(id)
    }
}
