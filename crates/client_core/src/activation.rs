//! One cancellable query task per view activation.

use std::{
    future::Future,
    sync::{Arc, Mutex, PoisonError},
    time::Duration,
};

use futures::future::{AbortHandle, Abortable, Aborted};
use tokio::{sync::watch, task::JoinHandle};
use tracing::debug;

/// View state published by an [`Activation`].
pub trait ViewState: Clone + Send + Sync + 'static {
    /// `false` only while the query is outstanding.
    fn is_settled(&self) -> bool;
}

/// How an activation's query ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    /// The result was published to the view.
    Applied,
    /// The query was aborted before it produced a result.
    Cancelled,
    /// The query finished after teardown; its result was dropped.
    Discarded,
}

pub struct Activation<S: ViewState> {
    state: watch::Receiver<S>,
    live: Arc<Mutex<bool>>,
    abort: Option<AbortHandle>,
    task: Option<JoinHandle<Completion>>,
}

impl<S: ViewState> Activation<S> {
    /// Publishes `initial` and runs `query` on a new task; its output becomes
    /// the next state unless the activation is torn down first.
    pub fn spawn<F>(initial: S, query: F) -> Self
    where
        F: Future<Output = S> + Send + 'static,
    {
        let (tx, rx) = watch::channel(initial);
        let live = Arc::new(Mutex::new(true));
        let (abort, registration) = AbortHandle::new_pair();

        let task_live = Arc::clone(&live);
        let task = tokio::spawn(async move {
            match Abortable::new(query, registration).await {
                Ok(next) => publish(&task_live, &tx, next),
                Err(Aborted) => Completion::Cancelled,
            }
        });

        Self {
            state: rx,
            live,
            abort: Some(abort),
            task: Some(task),
        }
    }

    /// An activation that needs no query.
    pub fn resolved(state: S) -> Self {
        let (_tx, rx) = watch::channel(state);
        Self {
            state: rx,
            live: Arc::new(Mutex::new(true)),
            abort: None,
            task: None,
        }
    }

    pub fn state(&self) -> S {
        self.state.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<S> {
        self.state.clone()
    }

    /// Waits for the query to resolve.
    pub async fn settled(&mut self) -> S {
        let settled = self
            .state
            .wait_for(|state| state.is_settled())
            .await
            .map(|state| state.clone());
        settled.unwrap_or_else(|_| self.state.borrow().clone())
    }

    /// Like [`Activation::settled`] but gives up after `limit`, leaving the
    /// query running.
    pub async fn settled_within(&mut self, limit: Duration) -> Option<S> {
        tokio::time::timeout(limit, self.settled()).await.ok()
    }

    /// Detaches the view from its query. Nothing the query produces after
    /// this point reaches the view's state.
    pub fn teardown(mut self) -> Teardown {
        self.detach();
        Teardown {
            task: self.task.take(),
        }
    }

    fn detach(&mut self) {
        *self.live.lock().unwrap_or_else(PoisonError::into_inner) = false;
        if let Some(abort) = self.abort.take() {
            abort.abort();
        }
    }
}

impl<S: ViewState> Drop for Activation<S> {
    fn drop(&mut self) {
        self.detach();
    }
}

fn publish<S: ViewState>(live: &Mutex<bool>, tx: &watch::Sender<S>, next: S) -> Completion {
    let live = live.lock().unwrap_or_else(PoisonError::into_inner);
    if !*live {
        debug!("view torn down before its query finished; discarding result");
        return Completion::Discarded;
    }
    tx.send_replace(next);
    Completion::Applied
}

/// Handle to a torn-down activation's query task.
#[must_use = "await `finished` to observe how the query ended, or drop to ignore"]
pub struct Teardown {
    task: Option<JoinHandle<Completion>>,
}

impl Teardown {
    pub async fn finished(self) -> Completion {
        match self.task {
            Some(task) => task.await.unwrap_or(Completion::Cancelled),
            None => Completion::Applied,
        }
    }
}
