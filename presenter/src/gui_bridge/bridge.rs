use crate::gui_bridge::model::ContentModel;
use log::{error, info};
use serde_json::json;
use std::{net::SocketAddr, path::PathBuf, sync::Arc, thread};
use tokio::runtime::Builder;
use warp::{Filter, Rejection, Reply};

/// HTTP routes: `GET /content`, `GET /health` and static `GET /images/*`.
pub fn routes(
    model: Arc<ContentModel>,
    assets: PathBuf,
) -> impl Filter<Extract = (impl Reply,), Error = Rejection> + Clone {
    let model_filter = warp::any().map(move || model.clone());

    let content_route = warp::path("content")
        .and(warp::path::end())
        .and(warp::get())
        .and(model_filter.clone())
        .map(|model: Arc<ContentModel>| warp::reply::json(&*model));

    let health_route = warp::path("health")
        .and(warp::path::end())
        .and(warp::get())
        .and(model_filter)
        .map(|model: Arc<ContentModel>| {
            warp::reply::json(&json!({
                "status": "ok",
                "sections": model.catalog.sections.len(),
                "testimonials": model.catalog.testimonials.len(),
            }))
        });

    let image_route = warp::path("images")
        .and(warp::get())
        .and(warp::fs::dir(assets.join("images")));

    content_route.or(health_route).or(image_route)
}

/// Serves content and image assets to the viewer from a background thread.
pub struct GuiBridge {
    model: Arc<ContentModel>,
    bind: SocketAddr,
}

impl GuiBridge {
    pub fn start(model: ContentModel, assets: PathBuf, bind: SocketAddr) -> Self {
        let model = Arc::new(model);
        let filter = routes(model.clone(), assets.clone());

        thread::spawn(move || {
            let runtime = match Builder::new_current_thread().enable_all().build() {
                Ok(runtime) => runtime,
                Err(err) => {
                    error!("failed to build bridge runtime: {}", err);
                    return;
                }
            };
            info!("serving content on http://{} (assets {})", bind, assets.display());
            runtime.block_on(async move {
                warp::serve(filter).run(bind).await;
            });
        });

        Self { model, bind }
    }

    pub fn publish_status(&self, message: &str) {
        println!("[GUI] {}", message);
    }

    pub fn address(&self) -> SocketAddr {
        self.bind
    }

    pub fn section_count(&self) -> usize {
        self.model.catalog.sections.len()
    }
}
