use super::actions::Action;
use crate::auth::{AuthProvider, Credentials, SignInOptions};
use crate::constants::ERROR_SESSION_CHECK_FAILED;
use crate::gate::GateEvent;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

pub type TaskId = u64;

/// A provider call running on the tokio runtime
#[derive(Debug)]
pub struct ProviderCall {
    pub id: TaskId,
    pub handle: JoinHandle<()>,
    pub label: String,
    pub started_at: Instant,
}

/// A call that has finished and been removed from the manager
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FinishedCall {
    pub id: TaskId,
    pub label: String,
    pub elapsed: Duration,
}

/// Runs authentication provider calls off the UI loop.
///
/// Each spawned call reports its outcome back as an [`Action`] on the channel
/// returned by [`TaskManager::new`]. Nothing de-duplicates submissions: every
/// call to [`TaskManager::spawn_sign_in`] issues its own request.
pub struct TaskManager {
    calls: HashMap<TaskId, ProviderCall>,
    next_id: TaskId,
    outcome_tx: mpsc::UnboundedSender<Action>,
}

impl TaskManager {
    pub fn new() -> (Self, mpsc::UnboundedReceiver<Action>) {
        let (outcome_tx, outcome_rx) = mpsc::unbounded_channel();
        let manager = Self {
            calls: HashMap::new(),
            next_id: 1,
            outcome_tx,
        };
        (manager, outcome_rx)
    }

    fn track(&mut self, handle: JoinHandle<()>, label: String) -> TaskId {
        let id = self.next_id;
        self.next_id += 1;
        self.calls.insert(
            id,
            ProviderCall {
                id,
                handle,
                label,
                started_at: Instant::now(),
            },
        );
        id
    }

    /// Ask the provider for the current session
    pub fn spawn_session_check(&mut self, provider: Arc<dyn AuthProvider>) -> TaskId {
        let outcome_tx = self.outcome_tx.clone();
        let label = format!("Session check ({})", provider.provider_type());

        let handle = tokio::spawn(async move {
            let event = match provider.get_session().await {
                Ok(session) => GateEvent::SessionResolved(session),
                Err(e) => GateEvent::SessionCheckFailed(format!("{}: {}", ERROR_SESSION_CHECK_FAILED, e)),
            };
            let _ = outcome_tx.send(Action::Gate(event));
        });

        self.track(handle, label)
    }

    /// Send one credential verification request
    pub fn spawn_sign_in(&mut self, provider: Arc<dyn AuthProvider>, credentials: Credentials) -> TaskId {
        let outcome_tx = self.outcome_tx.clone();
        let label = format!("Sign in as {}", credentials.email);

        let handle = tokio::spawn(async move {
            let outcome = provider
                .verify_credentials(credentials, SignInOptions::no_redirect())
                .await;

            let event = match outcome {
                Ok(user) => GateEvent::AuthSucceeded(user),
                // Rejection text reaches the form unchanged
                Err(e) => GateEvent::AuthFailed(e.to_string()),
            };
            let _ = outcome_tx.send(Action::Gate(event));
        });

        self.track(handle, label)
    }

    /// Drop finished calls; their outcomes were already sent as actions
    pub fn cleanup_finished_tasks(&mut self) -> Vec<FinishedCall> {
        let finished: Vec<TaskId> = self
            .calls
            .values()
            .filter(|call| call.handle.is_finished())
            .map(|call| call.id)
            .collect();

        finished
            .into_iter()
            .filter_map(|id| self.calls.remove(&id))
            .map(|call| FinishedCall {
                id: call.id,
                label: call.label,
                elapsed: call.started_at.elapsed(),
            })
            .collect()
    }

    pub fn cancel_all_tasks(&mut self) {
        for (_, call) in self.calls.drain() {
            call.handle.abort();
        }
    }

    /// Number of calls still in flight
    pub fn task_count(&self) -> usize {
        self.calls.len()
    }
}

impl Drop for TaskManager {
    fn drop(&mut self) {
        self.cancel_all_tasks();
    }
}
