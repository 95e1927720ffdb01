use std::sync::Arc;

use catalog::EventSource;
use tracing::info;

use crate::{
    activation::Teardown,
    card::{Card, CardInput},
    detail::DetailView,
    list::ListView,
    route::Route,
};

pub enum Screen {
    List(ListView),
    Detail(DetailView),
}

impl Screen {
    fn activate(source: &Arc<dyn EventSource>, route: &Route) -> Self {
        match route {
            Route::List => Screen::List(ListView::activate(Arc::clone(source))),
            Route::Detail(id) => {
                Screen::Detail(DetailView::activate(Arc::clone(source), Some(id.clone())))
            }
        }
    }

    fn teardown(self) -> Teardown {
        match self {
            Screen::List(view) => view.teardown(),
            Screen::Detail(view) => view.teardown(),
        }
    }

    /// Waits for the active view's query to resolve.
    pub async fn settle(&mut self) {
        match self {
            Screen::List(view) => {
                view.settled().await;
            }
            Screen::Detail(view) => {
                view.settled().await;
            }
        }
    }
}

/// Owns the active screen. Each navigation tears down the previous view
/// before its replacement starts querying.
pub struct Navigator {
    source: Arc<dyn EventSource>,
    route: Route,
    screen: Screen,
}

impl Navigator {
    /// Starts on the list route. Must be called inside a tokio runtime.
    pub fn new(source: Arc<dyn EventSource>) -> Self {
        let route = Route::List;
        let screen = Screen::activate(&source, &route);
        Self {
            source,
            route,
            screen,
        }
    }

    pub fn route(&self) -> &Route {
        &self.route
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    pub fn navigate(&mut self, route: Route) -> Teardown {
        info!(from = %self.route, to = %route, "navigating");
        let next = Screen::activate(&self.source, &route);
        let previous = std::mem::replace(&mut self.screen, next);
        self.route = route;
        previous.teardown()
    }

    pub fn open(&mut self, path: &str) -> Teardown {
        self.navigate(Route::parse(path))
    }

    pub async fn settle(&mut self) {
        self.screen.settle().await;
    }

    /// Navigates if `input` activates `card`.
    pub fn activate_card(&mut self, card: &Card, input: CardInput) -> Option<Teardown> {
        card.activate(input).map(|route| self.navigate(route))
    }

    /// Follows the not-found recovery action, if the detail view offers one.
    pub fn recover(&mut self) -> Option<Teardown> {
        let route = match &self.screen {
            Screen::Detail(view) => view.recovery()?,
            Screen::List(_) => return None,
        };
        Some(self.navigate(route))
    }

    /// Follows the detail view's back action.
    pub fn back(&mut self) -> Option<Teardown> {
        let route = match &self.screen {
            Screen::Detail(view) => view.back(),
            Screen::List(_) => return None,
        };
        Some(self.navigate(route))
    }
}
