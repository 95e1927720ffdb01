use shared::domain::EventSummary;

use crate::route::Route;

/// Cosmetic card backgrounds, assigned round-robin by position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CardCategory {
    Purple,
    Blue,
    Green,
    Orange,
    Card,
}

pub const PALETTE: [CardCategory; 5] = [
    CardCategory::Purple,
    CardCategory::Blue,
    CardCategory::Green,
    CardCategory::Orange,
    CardCategory::Card,
];

impl CardCategory {
    pub fn for_index(index: usize) -> Self {
        PALETTE[index % PALETTE.len()]
    }

    pub fn css_class(self) -> &'static str {
        match self {
            CardCategory::Purple => "gradient-purple",
            CardCategory::Blue => "gradient-blue",
            CardCategory::Green => "gradient-green",
            CardCategory::Orange => "gradient-orange",
            CardCategory::Card => "gradient-card",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardInput {
    Click,
    Enter,
    Space,
    OtherKey,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    pub index: usize,
    pub summary: EventSummary,
    pub category: CardCategory,
}

impl Card {
    pub fn new(index: usize, summary: EventSummary) -> Self {
        Self {
            index,
            summary,
            category: CardCategory::for_index(index),
        }
    }

    pub fn route(&self) -> Route {
        Route::Detail(self.summary.id.clone())
    }

    /// Pointer clicks and the keyboard activate keys open the event.
    pub fn activate(&self, input: CardInput) -> Option<Route> {
        match input {
            CardInput::Click | CardInput::Enter | CardInput::Space => Some(self.route()),
            CardInput::OtherKey => None,
        }
    }
}
