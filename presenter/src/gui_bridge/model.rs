use profilecore::content::Catalog;
use profilecore::prelude::DeckConfig;
use serde::{Deserialize, Serialize};

/// Payload served to the viewer at `/content`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct ContentModel {
    pub catalog: Catalog,
    pub deck: DeckConfig,
}

impl ContentModel {
    pub fn new(catalog: Catalog, deck: DeckConfig) -> Self {
        Self { catalog, deck }
    }
}
