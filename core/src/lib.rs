//! Navigation core for the profile presentation.
//!
//! A landing screen leads into a clamped slide deck; testimonial tiles are
//! disclosed one-way through per-view reveal trackers. Hosts feed discrete
//! input events into a view session and act on the routes it requests.

pub mod content;
pub mod deck;
pub mod prelude;
pub mod telemetry;
pub mod view;

pub use prelude::{DeckConfig, DeckError, DeckResult, Route, Router};
