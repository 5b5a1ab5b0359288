use anyhow::Context;
use profilecore::prelude::DeckConfig;
use serde::{Deserialize, Serialize};
use std::fs;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct PresenterConfig {
    /// Content YAML; the built-in catalog is used when absent
    pub content: Option<PathBuf>,
    /// Directory whose `images/` folder backs `/images/*`
    pub assets: PathBuf,
    pub bind: SocketAddr,
    pub deck: DeckConfig,
}

impl Default for PresenterConfig {
    fn default() -> Self {
        Self {
            content: None,
            assets: PathBuf::from("public"),
            bind: SocketAddr::from(([127, 0, 0, 1], 9000)),
            deck: DeckConfig::default(),
        }
    }
}

impl PresenterConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path_ref = path.as_ref();
        let contents = fs::read_to_string(path_ref)
            .with_context(|| format!("reading presenter config {}", path_ref.display()))?;
        let config: PresenterConfig = serde_yaml::from_str(&contents)
            .with_context(|| format!("parsing presenter config {}", path_ref.display()))?;
        Ok(config)
    }

    /// Applies command-line overrides on top of file or default settings.
    /// Unset flags keep the loaded values; `auto_rotate` can only switch on.
    pub fn merge_args(
        mut self,
        content: Option<PathBuf>,
        assets: Option<PathBuf>,
        auto_rotate: bool,
    ) -> Self {
        if content.is_some() {
            self.content = content;
        }
        if let Some(assets) = assets {
            self.assets = assets;
        }
        self.deck.auto_rotate |= auto_rotate;
        self
    }
}
