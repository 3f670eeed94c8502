use postdeck_store::{ComposerState, PostStore, StoreError};
use postdeck_types::{DEFAULT_TITLE, ImageRef, Post, PostId, PostStatus, Slide, SlideId, Tag};
use pretty_assertions::assert_eq;

fn sid(raw: u64) -> SlideId {
    SlideId::new(raw)
}

/// A store with slides 1..=n, slide n selected.
fn make_store(n: usize) -> PostStore {
    let mut store = PostStore::new();
    for _ in 1..n {
        store.add_slide().unwrap();
    }
    store
}

// ── Defaults ─────────────────────────────────────────────────────

#[test]
fn new_store_has_one_selected_slide() {
    let store = PostStore::new();
    assert_eq!(store.title(), DEFAULT_TITLE);
    assert_eq!(store.slide_ids(), vec![sid(1)]);
    assert_eq!(store.selected_slide_id(), Some(sid(1)));
    assert_eq!(store.next_slide_id(), sid(2));
    assert!(store.sidebar_open());
    assert!(!store.has_image());
    assert!(!store.can_delete());
}

// ── Title ────────────────────────────────────────────────────────

#[test]
fn set_title_stores_text() {
    let mut store = PostStore::new();
    store.set_title("Spring collection");
    assert_eq!(store.title(), "Spring collection");
}

#[test]
fn empty_title_becomes_default() {
    let mut store = PostStore::new();
    store.set_title("Something");
    store.set_title("");
    assert_eq!(store.title(), DEFAULT_TITLE);
}

#[test]
fn title_is_not_trimmed_by_store() {
    let mut store = PostStore::new();
    store.set_title("  spaced ");
    assert_eq!(store.title(), "  spaced ");
}

// ── Add / select ─────────────────────────────────────────────────

#[test]
fn add_slide_appends_and_selects() {
    let mut store = PostStore::new();
    let id = store.add_slide().unwrap();
    assert_eq!(id, sid(2));
    assert_eq!(store.slide_ids(), vec![sid(1), sid(2)]);
    assert_eq!(store.selected_slide_id(), Some(sid(2)));
    assert_eq!(store.next_slide_id(), sid(3));
    assert_eq!(store.current_slide(), Some(&Slide::empty(sid(2))));
}

#[test]
fn select_existing_slide() {
    let mut store = make_store(3);
    assert!(store.select_slide(sid(1)));
    assert_eq!(store.selected_slide_id(), Some(sid(1)));
}

#[test]
fn select_unknown_slide_is_noop() {
    let mut store = make_store(2);
    assert!(!store.select_slide(sid(99)));
    assert_eq!(store.selected_slide_id(), Some(sid(2)));
}

#[test]
fn add_slide_stops_when_ids_run_out() {
    let last = SlideId::new(u64::MAX - 2);
    let mut store = PostStore::from_state(ComposerState {
        next_slide_id: last,
        ..ComposerState::default()
    })
    .unwrap();

    assert_eq!(store.add_slide().unwrap(), last);
    let before = store.state().clone();
    let err = store.add_slide().unwrap_err();
    assert_eq!(err, StoreError::SlideIdsExhausted { next: sid(u64::MAX - 1) });
    assert_eq!(store.state(), &before);
    assert!(store.state().validate().is_ok());
}

// ── Delete ───────────────────────────────────────────────────────

#[test]
fn ids_are_never_reused_after_delete() {
    let mut store = make_store(3);
    assert!(store.delete_slide(sid(3)).unwrap());
    let id = store.add_slide().unwrap();
    assert_eq!(id, sid(4));
    assert_eq!(store.slide_ids(), vec![sid(1), sid(2), sid(4)]);
}

#[test]
fn delete_unknown_is_noop() {
    let mut store = make_store(2);
    assert!(!store.delete_slide(sid(42)).unwrap());
    assert_eq!(store.slide_ids(), vec![sid(1), sid(2)]);
}

#[test]
fn delete_last_remaining_slide_is_refused() {
    let mut store = PostStore::new();
    let err = store.delete_slide(sid(1)).unwrap_err();
    assert_eq!(err, StoreError::CannotDeleteLastSlide { id: sid(1) });
    assert_eq!(store.slide_ids(), vec![sid(1)]);
    assert_eq!(store.selected_slide_id(), Some(sid(1)));
}

#[test]
fn delete_unknown_on_single_slide_is_still_noop() {
    let mut store = PostStore::new();
    assert!(!store.delete_slide(sid(5)).unwrap());
}

#[test]
fn delete_selected_middle_selects_same_index() {
    let mut store = make_store(3);
    store.select_slide(sid(2));
    store.delete_slide(sid(2)).unwrap();
    assert_eq!(store.slide_ids(), vec![sid(1), sid(3)]);
    assert_eq!(store.selected_slide_id(), Some(sid(3)));
}

#[test]
fn delete_selected_last_selects_new_last() {
    let mut store = make_store(3);
    store.delete_slide(sid(3)).unwrap();
    assert_eq!(store.selected_slide_id(), Some(sid(2)));
}

#[test]
fn delete_selected_first_selects_new_first() {
    let mut store = make_store(3);
    store.select_slide(sid(1));
    store.delete_slide(sid(1)).unwrap();
    assert_eq!(store.selected_slide_id(), Some(sid(2)));
}

#[test]
fn delete_unselected_keeps_selection() {
    let mut store = make_store(3);
    store.select_slide(sid(3));
    store.delete_slide(sid(1)).unwrap();
    assert_eq!(store.selected_slide_id(), Some(sid(3)));
}

// ── Reorder ──────────────────────────────────────────────────────

#[test]
fn reorder_with_full_permutation() {
    let mut store = make_store(3);
    store.reorder_slides(&[sid(3), sid(1), sid(2)]).unwrap();
    assert_eq!(store.slide_ids(), vec![sid(3), sid(1), sid(2)]);
}

#[test]
fn reorder_is_idempotent() {
    let mut store = make_store(4);
    let order = [sid(2), sid(4), sid(1), sid(3)];
    store.reorder_slides(&order).unwrap();
    let once = store.state().clone();
    store.reorder_slides(&order).unwrap();
    assert_eq!(store.state(), &once);
}

#[test]
fn reorder_keeps_slide_contents() {
    let mut store = make_store(2);
    store.add_tag("jane", false);
    store.set_slide_image(ImageRef::from("data:two"));
    store.reorder_slides(&[sid(2), sid(1)]).unwrap();
    let first = &store.slides()[0];
    assert_eq!(first.id, sid(2));
    assert_eq!(first.tags, vec![Tag::new("jane", false)]);
    assert_eq!(first.src, Some(ImageRef::from("data:two")));
}

#[test]
fn reorder_skips_unknown_ids() {
    let mut store = make_store(2);
    store.reorder_slides(&[sid(2), sid(77), sid(1)]).unwrap();
    assert_eq!(store.slide_ids(), vec![sid(2), sid(1)]);
}

#[test]
fn reorder_with_incomplete_permutation_drops_missing_slides() {
    let mut store = make_store(3);
    store.select_slide(sid(1));
    store.reorder_slides(&[sid(3), sid(1)]).unwrap();
    assert_eq!(store.slide_ids(), vec![sid(3), sid(1)]);
    assert_eq!(store.selected_slide_id(), Some(sid(1)));
    // ids stay monotonic even though slide 2 is gone
    assert_eq!(store.add_slide().unwrap(), sid(4));
}

#[test]
fn reorder_dropping_selected_slide_reselects_first() {
    let mut store = make_store(3);
    store.reorder_slides(&[sid(2), sid(1)]).unwrap();
    assert_eq!(store.slide_ids(), vec![sid(2), sid(1)]);
    assert_eq!(store.selected_slide_id(), Some(sid(2)));
}

#[test]
fn reorder_ignores_repeated_ids() {
    let mut store = make_store(2);
    store.reorder_slides(&[sid(2), sid(2), sid(1)]).unwrap();
    assert_eq!(store.slide_ids(), vec![sid(2), sid(1)]);
}

#[test]
fn reorder_matching_nothing_is_refused() {
    let mut store = make_store(2);
    let before = store.state().clone();
    assert_eq!(
        store.reorder_slides(&[sid(8), sid(9)]).unwrap_err(),
        StoreError::EmptyReorder
    );
    assert_eq!(store.reorder_slides(&[]).unwrap_err(), StoreError::EmptyReorder);
    assert_eq!(store.state(), &before);
}

// ── Tags ─────────────────────────────────────────────────────────

#[test]
fn add_tag_to_selected_slide_only() {
    let mut store = make_store(2);
    assert!(store.add_tag("jane", true));
    assert_eq!(store.slide(sid(2)).unwrap().tags, vec![Tag::new("jane", true)]);
    assert!(store.slide(sid(1)).unwrap().tags.is_empty());
}

#[test]
fn add_tag_is_idempotent() {
    let mut store = PostStore::new();
    assert!(store.add_tag("jane", false));
    let once = store.state().clone();
    assert!(!store.add_tag("jane", true));
    assert_eq!(store.state(), &once);
}

#[test]
fn tags_keep_insertion_order() {
    let mut store = PostStore::new();
    store.add_tag("b", false);
    store.add_tag("a", false);
    store.add_tag("c", true);
    let handles: Vec<_> = store
        .current_slide()
        .unwrap()
        .tags
        .iter()
        .map(|t| t.handle.as_str())
        .collect();
    assert_eq!(handles, vec!["b", "a", "c"]);
}

#[test]
fn tag_handles_are_case_sensitive() {
    let mut store = PostStore::new();
    assert!(store.add_tag("Jane", false));
    assert!(store.add_tag("jane", false));
    assert_eq!(store.current_slide().unwrap().tags.len(), 2);
}

#[test]
fn same_handle_on_different_slides() {
    let mut store = make_store(2);
    assert!(store.add_tag("jane", false));
    store.select_slide(sid(1));
    assert!(store.add_tag("jane", false));
}

#[test]
fn remove_tag_present_and_absent() {
    let mut store = PostStore::new();
    store.add_tag("jane", false);
    store.add_tag("joe", false);
    assert!(store.remove_tag("jane"));
    assert!(!store.remove_tag("jane"));
    assert_eq!(store.current_slide().unwrap().tags, vec![Tag::new("joe", false)]);
}

// ── Images ───────────────────────────────────────────────────────

#[test]
fn set_slide_image_targets_selection() {
    let mut store = make_store(2);
    assert!(store.set_slide_image(ImageRef::from("data:image/jpeg;base64,AA")));
    assert!(store.has_image());
    assert_eq!(store.slide(sid(1)).unwrap().src, None);
}

#[test]
fn set_slide_image_overwrites() {
    let mut store = PostStore::new();
    store.set_slide_image(ImageRef::from("data:first"));
    store.set_slide_image(ImageRef::from("data:second"));
    assert_eq!(
        store.current_slide().unwrap().src,
        Some(ImageRef::from("data:second"))
    );
}

#[test]
fn set_image_for_unknown_slide_is_noop() {
    let mut store = PostStore::new();
    assert!(!store.set_image_for(sid(9), ImageRef::from("https://cdn/x.jpg")));
}

// ── Sidebar ──────────────────────────────────────────────────────

#[test]
fn toggle_sidebar_flips() {
    let mut store = PostStore::new();
    store.toggle_sidebar();
    assert!(!store.sidebar_open());
    store.toggle_sidebar();
    assert!(store.sidebar_open());
}

// ── Construction ─────────────────────────────────────────────────

#[test]
fn from_state_rejects_invalid_snapshot() {
    let state = ComposerState {
        slides: Vec::new(),
        ..ComposerState::default()
    };
    assert!(matches!(
        PostStore::from_state(state),
        Err(StoreError::InvalidState(_))
    ));
}

#[test]
fn hydrate_rejects_and_keeps_state() {
    let mut store = make_store(2);
    let before = store.state().clone();
    let bad = ComposerState {
        selected_slide_id: Some(sid(50)),
        ..ComposerState::default()
    };
    assert!(store.hydrate(bad).is_err());
    assert_eq!(store.state(), &before);
}

#[test]
fn from_post_selects_first_and_continues_ids() {
    let post = Post {
        id: Some(PostId::new(7)),
        title: String::new(),
        slides: vec![Slide::empty(sid(10)), Slide::empty(sid(4))],
        status: PostStatus::Draft,
    };
    let mut store = PostStore::from_post(post).unwrap();
    assert_eq!(store.title(), DEFAULT_TITLE);
    assert_eq!(store.selected_slide_id(), Some(sid(10)));
    assert_eq!(store.add_slide().unwrap(), sid(11));
}

#[test]
fn from_post_without_slides_is_refused() {
    let post = Post {
        id: None,
        title: "x".into(),
        slides: Vec::new(),
        status: PostStatus::Draft,
    };
    assert!(PostStore::from_post(post).is_err());
}

#[test]
fn to_post_mirrors_state() {
    let mut store = PostStore::new();
    store.set_title("Launch");
    let post = store.to_post(Some(PostId::new(3)), PostStatus::Scheduled);
    assert_eq!(post.title, "Launch");
    assert_eq!(post.slides, store.slides());
    assert_eq!(post.status, PostStatus::Scheduled);
}
