use std::fmt;

use shared::domain::EventId;

/// The two navigable screens. Anything unrecognized falls back to the list.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Route {
    List,
    Detail(EventId),
}

impl Route {
    pub fn parse(path: &str) -> Self {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
        match segments.as_slice() {
            ["event", id] => Route::Detail(EventId::new(*id)),
            _ => Route::List,
        }
    }

    pub fn detail(id: impl Into<EventId>) -> Self {
        Route::Detail(id.into())
    }

    pub fn path(&self) -> String {
        match self {
            Route::List => "/".to_string(),
            Route::Detail(id) => format!("/event/{id}"),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}
