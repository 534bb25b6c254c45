//! Pagination and sorting.
//!
//! Pages are zero-indexed. Page `n` of size `s` covers the half-open range
//! `[n * s, (n + 1) * s)` of the sorted result.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use wallride_model::FieldDefinition;

/// Property to sort field definitions by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    /// Display order.
    #[default]
    Idx,
    /// Name, case-insensitive.
    Name,
    Id,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    #[default]
    Asc,
    Desc,
}

/// Sort order for a search. Ties are always broken by ascending id so
/// that paging is deterministic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Sort {
    pub key: SortKey,
    pub direction: Direction,
}

impl Sort {
    pub fn asc(key: SortKey) -> Self {
        Self {
            key,
            direction: Direction::Asc,
        }
    }

    pub fn desc(key: SortKey) -> Self {
        Self {
            key,
            direction: Direction::Desc,
        }
    }

    /// Compares two definitions under this order.
    pub fn compare(&self, a: &FieldDefinition, b: &FieldDefinition) -> Ordering {
        let primary = match self.key {
            SortKey::Idx => a.idx.cmp(&b.idx),
            SortKey::Name => a
                .name
                .to_lowercase()
                .cmp(&b.name.to_lowercase())
                .then_with(|| a.name.cmp(&b.name)),
            SortKey::Id => Ordering::Equal,
        };
        let primary = match self.direction {
            Direction::Asc => primary,
            Direction::Desc => primary.reverse(),
        };
        let by_id = match (self.key, self.direction) {
            (SortKey::Id, Direction::Desc) => b.id.cmp(&a.id),
            _ => a.id.cmp(&b.id),
        };
        primary.then(by_id)
    }
}

/// Which slice of a result to return.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    page: usize,
    size: usize,
    #[serde(default)]
    sort: Sort,
}

impl PageRequest {
    /// Page `page` (zero-indexed) of `size` elements, default sort.
    pub fn of(page: usize, size: usize) -> Self {
        Self {
            page,
            size,
            sort: Sort::default(),
        }
    }

    pub fn with_sort(mut self, sort: Sort) -> Self {
        self.sort = sort;
        self
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn sort(&self) -> Sort {
        self.sort
    }

    /// Index of the first element on this page.
    pub fn offset(&self) -> usize {
        self.page.saturating_mul(self.size)
    }

    pub fn next(&self) -> Self {
        Self {
            page: self.page.saturating_add(1),
            ..*self
        }
    }

    /// The previous page, or `None` on the first page.
    pub fn previous(&self) -> Option<Self> {
        self.page.checked_sub(1).map(|page| Self { page, ..*self })
    }

    pub fn first(&self) -> Self {
        Self { page: 0, ..*self }
    }
}

/// One page of a sorted result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    content: Vec<T>,
    number: usize,
    size: usize,
    total_elements: usize,
}

impl<T> Page<T> {
    pub fn new(content: Vec<T>, number: usize, size: usize, total_elements: usize) -> Self {
        Self {
            content,
            number,
            size,
            total_elements,
        }
    }

    pub fn content(&self) -> &[T] {
        &self.content
    }

    pub fn into_content(self) -> Vec<T> {
        self.content
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.content.iter()
    }

    /// Zero-based page number.
    pub fn number(&self) -> usize {
        self.number
    }

    /// Requested page size (the last page may hold fewer elements).
    pub fn size(&self) -> usize {
        self.size
    }

    /// Elements on this page.
    pub fn number_of_elements(&self) -> usize {
        self.content.len()
    }

    /// Elements across all pages.
    pub fn total_elements(&self) -> usize {
        self.total_elements
    }

    pub fn total_pages(&self) -> usize {
        if self.size == 0 {
            0
        } else {
            self.total_elements.div_ceil(self.size)
        }
    }

    pub fn has_next(&self) -> bool {
        self.number.saturating_add(1) < self.total_pages()
    }

    pub fn has_previous(&self) -> bool {
        self.number > 0
    }

    pub fn is_first(&self) -> bool {
        !self.has_previous()
    }

    pub fn is_last(&self) -> bool {
        !self.has_next()
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    /// Converts the content, keeping the paging metadata.
    pub fn map<U, F>(self, f: F) -> Page<U>
    where
        F: FnMut(T) -> U,
    {
        Page {
            content: self.content.into_iter().map(f).collect(),
            number: self.number,
            size: self.size,
            total_elements: self.total_elements,
        }
    }
}

impl<'a, T> IntoIterator for &'a Page<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.content.iter()
    }
}
