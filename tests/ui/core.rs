use crate::common::{FakeAuthProvider, EMAIL, PASSWORD, REJECTION};
use authlist::auth::{Credentials, Session, UserIdentity};
use authlist::gate::GateEvent;
use authlist::ui::core::{Action, EventHandler, TaskManager};
use authlist::ui::LayoutManager;
use ratatui::layout::Rect;
use std::sync::Arc;
use std::time::Duration;

#[test]
fn test_action_is_none() {
    assert!(Action::None.is_none());
    assert!(!Action::Quit.is_none());
    assert!(!Action::SubmitCredentials.is_none());
}

#[tokio::test]
async fn test_session_check_reports_back() {
    let (mut manager, mut rx) = TaskManager::new();
    manager.spawn_session_check(Arc::new(FakeAuthProvider::signed_in(EMAIL)));

    let action = rx.recv().await.unwrap();
    assert_eq!(
        action,
        Action::Gate(GateEvent::SessionResolved(Session::Authenticated(UserIdentity::new(EMAIL))))
    );
}

#[tokio::test]
async fn test_sign_in_reports_success_and_failure() {
    let provider = Arc::new(FakeAuthProvider::new());
    let (mut manager, mut rx) = TaskManager::new();

    manager.spawn_sign_in(provider.clone(), Credentials::new(EMAIL, PASSWORD));
    assert_eq!(
        rx.recv().await.unwrap(),
        Action::Gate(GateEvent::AuthSucceeded(UserIdentity::new(EMAIL)))
    );

    manager.spawn_sign_in(provider.clone(), Credentials::new(EMAIL, "nope"));
    assert_eq!(
        rx.recv().await.unwrap(),
        Action::Gate(GateEvent::AuthFailed(REJECTION.to_string()))
    );

    assert_eq!(provider.verify_count(), 2);
}

#[tokio::test]
async fn test_finished_tasks_are_cleaned_up() {
    let (mut manager, mut rx) = TaskManager::new();
    let task_id = manager.spawn_session_check(Arc::new(FakeAuthProvider::new()));
    assert_eq!(manager.task_count(), 1);

    rx.recv().await.unwrap();
    let mut finished = Vec::new();
    for _ in 0..100 {
        finished.extend(manager.cleanup_finished_tasks());
        if manager.task_count() == 0 {
            break;
        }
        tokio::time::sleep(Duration::from_millis(5)).await;
    }

    assert_eq!(manager.task_count(), 0);
    assert_eq!(finished.len(), 1);
    assert_eq!(finished[0].id, task_id);
    assert_eq!(finished[0].label, "Session check (fake)");
}

#[tokio::test]
async fn test_cancel_all_tasks() {
    let (mut manager, _rx) = TaskManager::new();
    manager.spawn_session_check(Arc::new(FakeAuthProvider::new()));
    manager.cancel_all_tasks();
    assert_eq!(manager.task_count(), 0);
}

#[test]
fn test_event_handler_timing() {
    assert_eq!(EventHandler::new().tick_rate(), Duration::from_millis(100));
    assert_eq!(
        EventHandler::with_tick_rate(Duration::from_millis(10)).tick_rate(),
        Duration::from_millis(10)
    );

    let mut handler = EventHandler::default();
    handler.mark_rendered();
    assert!(handler.time_since_last_render() < Duration::from_secs(1));
}

#[test]
fn test_centered_fixed_clamps_to_area() {
    let area = Rect::new(0, 0, 80, 24);
    assert_eq!(LayoutManager::centered_fixed(40, 10, area), Rect::new(20, 7, 40, 10));
    assert_eq!(LayoutManager::centered_fixed(100, 50, area), area);
}

#[test]
fn test_centered_rect_is_inside_area() {
    let area = Rect::new(0, 0, 100, 50);
    let popup = LayoutManager::centered_rect(50, 50, area);
    assert_eq!(popup.width, 50);
    assert_eq!(popup.height, 25);
    assert!(popup.x >= 25 && popup.y >= 12);
}

#[tokio::test]
async fn test_finished_sign_in_is_labelled() {
    let (mut manager, mut rx) = TaskManager::new();
    manager.spawn_sign_in(Arc::new(FakeAuthProvider::new()), Credentials::new(EMAIL, "nope"));

    rx.recv().await.unwrap();
    let mut finished = Vec::new();
    for _ in 0..100 {
        finished.extend(manager.cleanup_finished_tasks());
        if manager.task_count() == 0 {
            break;
        }
        tokio::time::sleep(Duration::from_millis(5)).await;
    }

    assert_eq!(finished.len(), 1);
    assert_eq!(finished[0].label, format!("Sign in as {}", EMAIL));
}
