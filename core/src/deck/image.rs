use serde::{Deserialize, Serialize};

/// Load state of the current section's image.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum ImageStatus {
    #[default]
    Pending,
    Loaded,
    Failed,
}

impl ImageStatus {
    pub fn is_loaded(&self) -> bool {
        matches!(self, ImageStatus::Loaded)
    }

    /// Placeholder stays visible until the image is loaded.
    pub fn shows_placeholder(&self) -> bool {
        !self.is_loaded()
    }
}
