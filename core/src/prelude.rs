use serde::{Deserialize, Serialize};

/// How a hidden testimonial tile is presented before it is revealed.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum RevealStyle {
    /// Question-mark glyph with a call-to-action.
    #[default]
    Glyph,
    /// Blurred author image with a call-to-action.
    BlurredImage,
}

/// Behavioural switches shared by every view session.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct DeckConfig {
    pub auto_rotate: bool,
    pub rotate_interval_secs: u64,
    pub reveal_style: RevealStyle,
}

impl Default for DeckConfig {
    fn default() -> Self {
        Self {
            auto_rotate: false,
            rotate_interval_secs: 5,
            reveal_style: RevealStyle::Glyph,
        }
    }
}

/// Common error type for deck and reveal operations.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum DeckError {
    #[error("deck has no sections")]
    EmptyDeck,
    #[error("index {index} out of range for {len} entries")]
    IndexOutOfRange { index: usize, len: usize },
    #[error("invalid content: {0}")]
    InvalidContent(String),
    #[error("unknown input event: {0}")]
    UnknownEvent(String),
}

pub type DeckResult<T> = Result<T, DeckError>;

/// Top-level views a session can ask the host to switch to.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Route {
    Profile,
    Testimonials,
}

impl Route {
    pub fn path(&self) -> &'static str {
        match self {
            Route::Profile => "/",
            Route::Testimonials => "/testimonials",
        }
    }
}

/// Outbound navigation collaborator. Requests are fire-and-forget.
pub trait Router {
    fn navigate(&mut self, route: Route);
}

/// Router that only remembers the last requested route.
#[derive(Debug, Default, Clone)]
pub struct PendingRoute {
    pub route: Option<Route>,
}

impl PendingRoute {
    pub fn take(&mut self) -> Option<Route> {
        self.route.take()
    }
}

impl Router for PendingRoute {
    fn navigate(&mut self, route: Route) {
        self.route = Some(route);
    }
}
