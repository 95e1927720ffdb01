//! View state machines for the meetups list and detail screens.
//!
//! Each view is activated against an injected [`catalog::EventSource`],
//! issues a single query on its own task and moves from `Loading` to a
//! terminal state. Tearing a view down cancels its query.

pub mod activation;
pub mod card;
pub mod detail;
pub mod list;
pub mod navigator;
pub mod route;

pub use activation::{Activation, Completion, Teardown, ViewState};
pub use card::{Card, CardCategory, CardInput, PALETTE};
pub use detail::{DetailState, DetailView};
pub use list::{sort_by_date, ListState, ListView};
pub use navigator::{Navigator, Screen};
pub use route::Route;

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
