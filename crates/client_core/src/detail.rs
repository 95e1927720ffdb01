use std::{sync::Arc, time::Duration};

use catalog::{EventSource, Lookup};
use shared::domain::{EventDetail, EventId};
use tokio::sync::watch;
use tracing::{debug, error};

use crate::{
    activation::{Activation, Teardown, ViewState},
    route::Route,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetailState {
    Loading,
    Found(EventDetail),
    /// No such event, no id, or the source failed.
    NotFound,
}

impl ViewState for DetailState {
    fn is_settled(&self) -> bool {
        !matches!(self, DetailState::Loading)
    }
}

impl DetailState {
    /// The "View All Events" action offered when nothing was found.
    pub fn recovery(&self) -> Option<Route> {
        match self {
            DetailState::NotFound => Some(Route::List),
            DetailState::Loading | DetailState::Found(_) => None,
        }
    }
}

pub struct DetailView {
    id: Option<EventId>,
    activation: Activation<DetailState>,
}

impl DetailView {
    /// A missing or empty id goes straight to `NotFound` without querying.
    pub fn activate(source: Arc<dyn EventSource>, id: Option<EventId>) -> Self {
        let id = id.filter(|id| !id.as_str().is_empty());
        let activation = match &id {
            Some(id) => {
                debug!(event_id = %id, "activating detail view");
                Activation::spawn(DetailState::Loading, load(source, id.clone()))
            }
            None => {
                debug!("detail view activated without an event id");
                Activation::resolved(DetailState::NotFound)
            }
        };
        Self { id, activation }
    }

    pub fn id(&self) -> Option<&EventId> {
        self.id.as_ref()
    }

    pub fn state(&self) -> DetailState {
        self.activation.state()
    }

    pub fn subscribe(&self) -> watch::Receiver<DetailState> {
        self.activation.subscribe()
    }

    pub async fn settled(&mut self) -> DetailState {
        self.activation.settled().await
    }

    pub async fn settled_within(&mut self, limit: Duration) -> Option<DetailState> {
        self.activation.settled_within(limit).await
    }

    pub fn recovery(&self) -> Option<Route> {
        self.state().recovery()
    }

    /// The "Back to Events" action.
    pub fn back(&self) -> Route {
        Route::List
    }

    pub fn teardown(self) -> Teardown {
        self.activation.teardown()
    }
}

async fn load(source: Arc<dyn EventSource>, id: EventId) -> DetailState {
    match source.get_detail(&id).await {
        Ok(Lookup::Found(detail)) => DetailState::Found(detail),
        Ok(Lookup::Absent) => DetailState::NotFound,
        Err(error) => {
            error!(event_id = %id, error = %error, "error loading event; showing not found");
            DetailState::NotFound
        }
    }
}
