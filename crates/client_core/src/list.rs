use std::{sync::Arc, time::Duration};

use catalog::EventSource;
use shared::domain::EventSummary;
use tokio::sync::watch;
use tracing::{debug, error};

use crate::{
    activation::{Activation, Teardown, ViewState},
    card::Card,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListState {
    Loading,
    /// Sorted ascending by date; never empty.
    Populated(Vec<EventSummary>),
    /// No events, or the source failed.
    Empty,
}

impl ViewState for ListState {
    fn is_settled(&self) -> bool {
        !matches!(self, ListState::Loading)
    }
}

impl ListState {
    pub fn from_summaries(mut summaries: Vec<EventSummary>) -> Self {
        if summaries.is_empty() {
            return ListState::Empty;
        }
        sort_by_date(&mut summaries);
        ListState::Populated(summaries)
    }

    pub fn cards(&self) -> Vec<Card> {
        match self {
            ListState::Populated(summaries) => summaries
                .iter()
                .cloned()
                .enumerate()
                .map(|(index, summary)| Card::new(index, summary))
                .collect(),
            ListState::Loading | ListState::Empty => Vec::new(),
        }
    }
}

/// Stable: events on the same date keep their source order.
pub fn sort_by_date(summaries: &mut [EventSummary]) {
    summaries.sort_by_key(|summary| summary.date);
}

pub struct ListView {
    activation: Activation<ListState>,
}

impl ListView {
    pub fn activate(source: Arc<dyn EventSource>) -> Self {
        debug!("activating list view");
        Self {
            activation: Activation::spawn(ListState::Loading, load(source)),
        }
    }

    pub fn state(&self) -> ListState {
        self.activation.state()
    }

    pub fn subscribe(&self) -> watch::Receiver<ListState> {
        self.activation.subscribe()
    }

    pub async fn settled(&mut self) -> ListState {
        self.activation.settled().await
    }

    pub async fn settled_within(&mut self, limit: Duration) -> Option<ListState> {
        self.activation.settled_within(limit).await
    }

    pub fn cards(&self) -> Vec<Card> {
        self.state().cards()
    }

    pub fn teardown(self) -> Teardown {
        self.activation.teardown()
    }
}

async fn load(source: Arc<dyn EventSource>) -> ListState {
    match source.list_summaries().await {
        Ok(summaries) => ListState::from_summaries(summaries),
        Err(error) => {
            error!(error = %error, "error loading events; showing empty list");
            ListState::Empty
        }
    }
}
