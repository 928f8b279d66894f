// Registry lookup and the modal open/close lifecycle, including the
// reopen-before-close-finished race.

use folio_core::content::{ContentRegistry, ENTRIES};
use folio_core::modal::ModalController;

#[test]
fn registry_holds_all_entries_with_unique_ids() {
    let registry = ContentRegistry::new();
    assert_eq!(registry.len(), ENTRIES.len());
    assert_eq!(registry.len(), 8);
    for entry in ENTRIES {
        let found = registry.get(entry.id).expect("entry by id");
        assert_eq!(found.id, entry.id);
        assert!(!found.title.is_empty());
        assert!(!found.body.is_empty());
    }
    assert!(registry.get("nonexistent").is_none());
}

#[test]
fn open_known_id_shows_content() {
    let mut modal = ModalController::new();
    assert!(!modal.is_visible());
    let entry = modal.open("cert1").expect("known id");
    assert!(entry.title.contains("AWS"));
    assert!(modal.is_visible());
    assert_eq!(modal.active().unwrap().id, "cert1");
}

#[test]
fn open_unknown_id_is_silent_noop() {
    let mut modal = ModalController::new();
    assert!(modal.open("nope").is_none());
    assert!(!modal.is_visible());
    assert!(modal.active().is_none());

    assert!(modal.open("project2").is_some());
    assert!(modal.open("nope").is_none());
    // Previously shown content is untouched.
    assert!(modal.is_visible());
    assert_eq!(modal.active().unwrap().id, "project2");
}

#[test]
fn close_hides_only_after_ticket_redeemed() {
    let mut modal = ModalController::new();
    assert!(modal.open("cert2").is_some());
    let ticket = modal.close().expect("visible");
    // Display stays on until the fade-out completes.
    assert!(modal.is_visible());
    assert!(modal.finish_close(ticket));
    assert!(!modal.is_visible());
    assert!(modal.active().is_none());
}

#[test]
fn close_while_hidden_is_noop() {
    let mut modal = ModalController::new();
    assert!(modal.close().is_none());
}

#[test]
fn reopen_cancels_pending_close() {
    let mut modal = ModalController::new();
    assert!(modal.open("cert3").is_some());
    let stale = modal.close().expect("visible");
    assert!(modal.open("cert4").is_some());
    // The old fade-out completion must not hide the reopened modal.
    assert!(!modal.finish_close(stale));
    assert!(modal.is_visible());
    assert_eq!(modal.active().unwrap().id, "cert4");
}

#[test]
fn repeated_close_keeps_only_latest_ticket() {
    let mut modal = ModalController::new();
    assert!(modal.open("project1").is_some());
    let first = modal.close().unwrap();
    let second = modal.close().unwrap();
    assert!(!modal.finish_close(first));
    assert!(modal.is_visible());
    assert!(modal.finish_close(second));
    assert!(!modal.is_visible());
}

#[test]
fn finish_close_is_not_redeemable_twice() {
    let mut modal = ModalController::new();
    assert!(modal.open("project3").is_some());
    let ticket = modal.close().unwrap();
    assert!(modal.finish_close(ticket));
    assert!(!modal.finish_close(ticket));
}
