use postdeck_draft::{
    DEFAULT_DRAFT_KEY, DraftError, DraftResult, DraftSlot, DraftStore, FileSlot, MemorySlot,
    encode_state,
};
use postdeck_store::{ComposerState, PostStore};
use postdeck_types::{DEFAULT_TITLE, ImageRef, SlideId};
use pretty_assertions::assert_eq;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use tempfile::TempDir;

/// A slot whose writes always fail.
#[derive(Default)]
struct BrokenSlot {
    attempts: AtomicUsize,
}

impl DraftSlot for BrokenSlot {
    fn read(&self) -> DraftResult<Option<String>> {
        Err(DraftError::Io(std::io::Error::other("disk unplugged")))
    }

    fn write(&self, _contents: &str) -> DraftResult<()> {
        self.attempts.fetch_add(1, Ordering::SeqCst);
        Err(DraftError::Io(std::io::Error::other("quota exceeded")))
    }

    fn clear(&self) -> DraftResult<()> {
        Ok(())
    }
}

fn make_drafts(contents: Option<&str>) -> (DraftStore, Arc<MemorySlot>) {
    let slot = Arc::new(match contents {
        Some(c) => MemorySlot::with_contents(c),
        None => MemorySlot::new(),
    });
    (DraftStore::new(slot.clone()), slot)
}

// ── Load ─────────────────────────────────────────────────────────

#[test]
fn empty_slot_loads_nothing() {
    let (drafts, _) = make_drafts(None);
    assert_eq!(drafts.load(), None);
}

#[test]
fn empty_slides_is_treated_as_absent_and_purged() {
    let (drafts, slot) = make_drafts(Some(r#"{"slides": []}"#));
    let mut store = PostStore::new();

    assert!(!drafts.restore_into(&mut store));
    assert_eq!(store.state(), &ComposerState::default());
    assert_eq!(slot.read().unwrap(), None);
}

#[test]
fn out_of_range_slide_id_is_purged() {
    let (drafts, slot) = make_drafts(Some(r#"{"slides": [{"id": 18446744073709551615}]}"#));
    let mut store = PostStore::new();

    assert!(!drafts.restore_into(&mut store));
    assert_eq!(store.state(), &ComposerState::default());
    assert_eq!(slot.read().unwrap(), None);
}

#[test]
fn malformed_json_is_purged() {
    let (drafts, slot) = make_drafts(Some("{{{"));
    assert_eq!(drafts.load(), None);
    assert_eq!(slot.read().unwrap(), None);
}

#[test]
fn unreadable_slot_falls_back_to_defaults() {
    let drafts = DraftStore::new(Arc::new(BrokenSlot::default()));
    let mut store = PostStore::new();
    assert!(!drafts.restore_into(&mut store));
    assert_eq!(store.title(), DEFAULT_TITLE);
}

#[test]
fn valid_draft_is_restored() {
    let mut saved = ComposerState::default();
    saved.post_title = "Saved".into();
    let (drafts, _) = make_drafts(Some(&encode_state(&saved).unwrap()));

    let mut store = PostStore::new();
    assert!(drafts.restore_into(&mut store));
    assert_eq!(store.state(), &saved);
}

// ── Save ─────────────────────────────────────────────────────────

#[test]
fn save_then_load() {
    let (drafts, _) = make_drafts(None);
    let mut store = PostStore::new();
    store.add_slide().unwrap();
    store.set_title("Round trip");

    drafts.save(store.state());
    assert_eq!(drafts.load().as_ref(), Some(store.state()));
}

#[test]
fn write_failure_is_swallowed() {
    let slot = Arc::new(BrokenSlot::default());
    let drafts = DraftStore::new(slot.clone());
    let mut store = PostStore::new();
    drafts.attach(&mut store);

    store.set_title("Still here");
    store.add_slide().unwrap();

    assert_eq!(store.title(), "Still here");
    assert_eq!(store.slides().len(), 2);
    assert_eq!(slot.attempts.load(Ordering::SeqCst), 2);
    assert!(drafts.try_save(store.state()).is_err());
}

#[test]
fn autosave_follows_every_change() {
    let (drafts, _) = make_drafts(None);
    let mut store = PostStore::new();
    drafts.attach(&mut store);

    store.add_slide().unwrap();
    store.set_slide_image(ImageRef::from("data:x"));
    store.toggle_sidebar();

    let saved = drafts.load().unwrap();
    assert_eq!(&saved, store.state());
    assert!(!saved.sidebar_open);
}

#[test]
fn detached_autosave_stops_writing() {
    let (drafts, slot) = make_drafts(None);
    let mut store = PostStore::new();
    let sub = drafts.attach(&mut store);
    store.unsubscribe(sub);

    store.add_slide().unwrap();
    assert_eq!(slot.read().unwrap(), None);
}

#[test]
fn discard_clears_slot() {
    let (drafts, slot) = make_drafts(None);
    drafts.save(&ComposerState::default());
    drafts.discard().unwrap();
    assert_eq!(slot.read().unwrap(), None);
    drafts.discard().unwrap();
}

// ── File slot ────────────────────────────────────────────────────

#[test]
fn file_slot_roundtrip() {
    let dir = TempDir::new().unwrap();
    let slot = FileSlot::new(dir.path().join("nested"), DEFAULT_DRAFT_KEY);
    assert_eq!(slot.read().unwrap(), None);

    slot.write("{\"slides\":[]}").unwrap();
    assert!(slot.path().ends_with("nested/postdeck-draft.json"));
    assert_eq!(slot.read().unwrap().as_deref(), Some("{\"slides\":[]}"));

    slot.clear().unwrap();
    assert_eq!(slot.read().unwrap(), None);
    slot.clear().unwrap();
}

#[test]
fn file_slot_survives_process_restart() {
    let dir = TempDir::new().unwrap();
    {
        let drafts = DraftStore::new(Arc::new(FileSlot::new(dir.path(), "draft")));
        let mut store = PostStore::new();
        drafts.attach(&mut store);
        store.add_slide().unwrap();
        store.add_tag("jane", false);
    }

    let drafts = DraftStore::new(Arc::new(FileSlot::new(dir.path(), "draft")));
    let mut store = PostStore::new();
    assert!(drafts.restore_into(&mut store));
    assert_eq!(store.selected_slide_id(), Some(SlideId::new(2)));
    assert!(store.current_slide().unwrap().has_tag("jane"));
    assert_eq!(store.add_slide().unwrap(), SlideId::new(3));
}
