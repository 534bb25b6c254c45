use wallride_model::FieldDefinition;
use wallride_storage::{Direction, Page, PageRequest, Sort, SortKey};

// ── PageRequest ──────────────────────────────────────────────────

#[test]
fn page_request_offset() {
    assert_eq!(PageRequest::of(0, 10).offset(), 0);
    assert_eq!(PageRequest::of(3, 10).offset(), 30);
    assert_eq!(PageRequest::of(usize::MAX, 2).offset(), usize::MAX);
}

#[test]
fn page_request_navigation() {
    let req = PageRequest::of(2, 5).with_sort(Sort::desc(SortKey::Name));
    assert_eq!(req.next().page(), 3);
    assert_eq!(req.previous().map(|p| p.page()), Some(1));
    assert_eq!(req.first().page(), 0);
    assert_eq!(req.next().sort(), Sort::desc(SortKey::Name));
    assert!(PageRequest::of(0, 5).previous().is_none());
}

#[test]
fn default_sort_is_idx_ascending() {
    let sort = Sort::default();
    assert_eq!(sort.key, SortKey::Idx);
    assert_eq!(sort.direction, Direction::Asc);
    assert_eq!(PageRequest::of(0, 1).sort(), sort);
}

#[test]
fn page_request_serde_defaults_sort() {
    let req: PageRequest = serde_json::from_str(r#"{"page": 1, "size": 10}"#).unwrap();
    assert_eq!(req, PageRequest::of(1, 10));
}

// ── Sort ─────────────────────────────────────────────────────────

#[test]
fn name_sort_is_case_insensitive() {
    let a = FieldDefinition::text(1, "apple");
    let b = FieldDefinition::text(2, "Banana");
    assert!(Sort::asc(SortKey::Name).compare(&a, &b).is_lt());
    assert!(Sort::desc(SortKey::Name).compare(&a, &b).is_gt());
}

#[test]
fn idx_sort_uses_display_order() {
    let a = FieldDefinition::text(1, "a").with_idx(5);
    let b = FieldDefinition::text(2, "b").with_idx(1);
    assert!(Sort::default().compare(&a, &b).is_gt());
}

// ── Page ─────────────────────────────────────────────────────────

#[test]
fn page_metadata() {
    let page = Page::new(vec![7, 8, 9], 1, 3, 10);
    assert_eq!(page.number_of_elements(), 3);
    assert_eq!(page.total_pages(), 4);
    assert!(page.has_next());
    assert!(page.has_previous());
    assert!(!page.is_first());
    assert!(!page.is_last());
}

#[test]
fn last_partial_page() {
    let page = Page::new(vec![10], 3, 3, 10);
    assert!(page.is_last());
    assert!(!page.has_next());
}

#[test]
fn page_far_past_the_end_has_no_next() {
    let page: Page<i32> = Page::new(vec![], usize::MAX, 10, 1);
    assert!(!page.has_next());
    assert!(page.has_previous());
    assert!(page.is_last());
}

#[test]
fn map_keeps_metadata() {
    let page = Page::new(vec![1, 2], 0, 2, 5).map(|n| n * 10);
    assert_eq!(page.content(), &[10, 20]);
    assert_eq!(page.total_elements(), 5);
    assert_eq!(page.size(), 2);
}

#[test]
fn page_iterates_content() {
    let page = Page::new(vec!["a", "b"], 0, 2, 2);
    let collected: Vec<_> = (&page).into_iter().copied().collect();
    assert_eq!(collected, vec!["a", "b"]);
    assert_eq!(page.iter().count(), 2);
    assert_eq!(page.into_content(), vec!["a", "b"]);
}
