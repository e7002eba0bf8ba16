//! Engine/viewport reconciliation against a mocked viewport.

use std::sync::{Arc, Mutex};

use mockall::predicate::eq;
use mockall::Sequence;
use tokio::sync::mpsc;

use crate::core::engine::GalleryEngine;
use crate::core::navigation::Direction;
use crate::core::viewport::{MockViewport, SelectNotice};
use crate::tests::common::five_item_catalog;

type Listener = Arc<Mutex<Option<mpsc::UnboundedSender<SelectNotice>>>>;

/// Mock that records its listener and reports a shared snap position.
fn recording_mock(snap: Arc<Mutex<usize>>, listener: Listener) -> MockViewport {
    let mut mock = MockViewport::new();
    mock.expect_on_select().times(1).returning(move |tx| {
        *listener.lock().unwrap() = Some(tx);
        1
    });
    mock.expect_off_select().with(eq(1u64)).times(1).return_const(());
    mock.expect_set_slide_count().return_const(());
    mock.expect_selected_scroll_snap()
        .returning(move || *snap.lock().unwrap());
    mock
}

#[test]
fn test_attach_reinitializes_and_pushes_current() {
    let mut mock = MockViewport::new();
    let mut seq = Sequence::new();
    mock.expect_on_select().times(1).in_sequence(&mut seq).return_const(3u64);
    mock.expect_set_slide_count()
        .with(eq(5usize))
        .times(1)
        .in_sequence(&mut seq)
        .return_const(());
    mock.expect_selected_scroll_snap().return_const(0usize);
    mock.expect_scroll_to().with(eq(2usize)).times(1).return_const(());
    mock.expect_off_select().with(eq(3u64)).times(1).return_const(());

    let mut engine = GalleryEngine::new(five_item_catalog());
    engine.go_to(2);
    engine.attach_viewport(mock);
}

#[test]
fn test_viewport_select_is_not_pushed_back() {
    let snap = Arc::new(Mutex::new(0usize));
    let listener: Listener = Arc::new(Mutex::new(None));
    let mut mock = recording_mock(Arc::clone(&snap), Arc::clone(&listener));
    mock.expect_scroll_to().times(0);

    let mut engine = GalleryEngine::new(five_item_catalog());
    engine.attach_viewport(mock);

    // User drags the widget to slide 3.
    *snap.lock().unwrap() = 3;
    let tx = listener.lock().unwrap().clone().unwrap();
    tx.send(SelectNotice).unwrap();

    assert!(engine.sync_viewport());
    assert_eq!(engine.current_index(), 3);
    // A second sync without new notices changes nothing.
    assert!(!engine.sync_viewport());
}

#[test]
fn test_out_of_range_snap_is_ignored() {
    let snap = Arc::new(Mutex::new(0usize));
    let listener: Listener = Arc::new(Mutex::new(None));
    let mut mock = recording_mock(Arc::clone(&snap), Arc::clone(&listener));
    mock.expect_scroll_to().times(0);

    let mut engine = GalleryEngine::new(five_item_catalog());
    engine.attach_viewport(mock);

    *snap.lock().unwrap() = 9;
    let tx = listener.lock().unwrap().clone().unwrap();
    tx.send(SelectNotice).unwrap();

    assert!(!engine.sync_viewport());
    assert_eq!(engine.current_index(), 0);
}

#[test]
fn test_step_pushes_once_then_suppresses_echo() {
    let snap = Arc::new(Mutex::new(0usize));
    let listener: Listener = Arc::new(Mutex::new(None));
    let mut mock = recording_mock(Arc::clone(&snap), Arc::clone(&listener));
    let echo_snap = Arc::clone(&snap);
    let echo_listener = Arc::clone(&listener);
    // The widget moves and echoes a select notice, like a real carousel.
    mock.expect_scroll_to().times(1).returning(move |pos| {
        *echo_snap.lock().unwrap() = pos;
        if let Some(tx) = echo_listener.lock().unwrap().as_ref() {
            let _ = tx.send(SelectNotice);
        }
    });

    let mut engine = GalleryEngine::new(five_item_catalog());
    engine.attach_viewport(mock);

    assert!(engine.step(Direction::Prev));
    assert_eq!(engine.current_index(), 4);
    // The echo agrees with the engine: no change, no further scroll.
    assert!(!engine.sync_viewport());
    assert_eq!(engine.current_index(), 4);
}

#[test]
fn test_filter_change_resets_viewport() {
    let snap = Arc::new(Mutex::new(0usize));
    let listener: Listener = Arc::new(Mutex::new(None));
    let mut mock = MockViewport::new();
    let l = Arc::clone(&listener);
    mock.expect_on_select().times(1).returning(move |tx| {
        *l.lock().unwrap() = Some(tx);
        1
    });
    mock.expect_off_select().return_const(());
    mock.expect_set_slide_count().with(eq(5usize)).times(1).return_const(());
    mock.expect_set_slide_count().with(eq(2usize)).times(1).return_const(());
    let s = Arc::clone(&snap);
    mock.expect_selected_scroll_snap().returning(move || *s.lock().unwrap());
    let s = Arc::clone(&snap);
    mock.expect_scroll_to().returning(move |pos| *s.lock().unwrap() = pos);

    let mut engine = GalleryEngine::new(five_item_catalog());
    engine.attach_viewport(mock);
    engine.go_to(4);
    assert_eq!(*snap.lock().unwrap(), 4);

    engine.toggle_year("1931");
    assert_eq!(engine.current_index(), 0);
    assert_eq!(*snap.lock().unwrap(), 0);
}

#[test]
fn test_detach_unsubscribes() {
    let mut mock = MockViewport::new();
    mock.expect_on_select().times(1).return_const(11u64);
    mock.expect_set_slide_count().return_const(());
    mock.expect_selected_scroll_snap().return_const(0usize);
    mock.expect_off_select().with(eq(11u64)).times(1).return_const(());

    let mut engine = GalleryEngine::new(five_item_catalog());
    engine.attach_viewport(mock);
    engine.detach_viewport();
    assert!(engine.viewport().is_none());
}
