use anyhow::Context;
use clap::Parser;
use content::loader::{load_catalog, missing_assets};
use gui_bridge::bridge::GuiBridge;
use gui_bridge::model::ContentModel;
use log::{info, warn};
use profilecore::view::SessionHost;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::PathBuf;
use tokio::runtime::Builder as TokioBuilder;
use tokio::signal;
use workflow::config::PresenterConfig;
use workflow::render::render_screen;
use workflow::runner::{parse_script, Runner};

mod content;
mod gui_bridge;
mod workflow;

#[derive(Parser)]
#[command(author, version, about = "Headless driver and content server for the profile deck")]
struct Args {
    /// Load presenter settings from YAML
    #[arg(long)]
    config: Option<PathBuf>,
    /// Content table in YAML (defaults to the built-in profile)
    #[arg(long)]
    content: Option<PathBuf>,
    /// Directory holding the `images/` folder [default: public]
    #[arg(long)]
    assets: Option<PathBuf>,
    /// Comma separated input events, e.g. `start,next,dot:3,reveal:1`
    #[arg(long)]
    script: Option<String>,
    /// Print the screen after every scripted step
    #[arg(long, default_value_t = false)]
    render: bool,
    /// Rotate in-deck testimonials on every `tick`
    #[arg(long, default_value_t = false)]
    auto_rotate: bool,
    /// Append the run summary as a JSON line to this file
    #[arg(long)]
    report: Option<PathBuf>,
    /// Serve content and images to the viewer until Ctrl+C
    #[arg(long, default_value_t = false)]
    serve: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let config = match args.config {
        Some(path) => PresenterConfig::load(path)?,
        None => PresenterConfig::default(),
    }
    .merge_args(args.content, args.assets, args.auto_rotate);

    let catalog = load_catalog(config.content.as_deref())?;
    let runner = Runner::new(catalog.clone(), config.deck.clone());

    if let Some(script) = args.script.as_deref() {
        let events = parse_script(script)?;
        info!("replaying {} scripted events", events.len());

        let summary = if args.render {
            runner.execute_with(&events, |step, event, host| {
                println!("--- step {} {:?}", step, event);
                println!("{}", render_screen(host));
            })?
        } else {
            runner.execute(&events)?
        };

        println!(
            "Replay -> route {}, section {}, progress {}, revealed {}, rejected {}",
            summary.route.path(),
            summary
                .section_index
                .map_or_else(|| "-".to_string(), |i| (i + 1).to_string()),
            summary
                .progress
                .map_or_else(|| "-".to_string(), |p| format!("{:.1}%", p)),
            summary.revealed,
            summary.rejected
        );

        if let Some(report_path) = args.report {
            if let Some(parent) = report_path.parent() {
                fs::create_dir_all(parent)?;
            }
            let line = serde_json::to_string(&summary).context("encoding run summary")?;
            let mut file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(&report_path)
                .with_context(|| format!("opening report {}", report_path.display()))?;
            writeln!(file, "{}", line)?;
        }
    } else if args.render {
        let host = SessionHost::new(catalog.clone(), config.deck.clone())?;
        println!("{}", render_screen(&host));
    }

    if args.serve {
        for file in missing_assets(&catalog, &config.assets) {
            warn!("asset {} not found; it will be served as 404", file.display());
        }
        let bridge = GuiBridge::start(
            ContentModel::new(catalog, config.deck.clone()),
            config.assets.clone(),
            config.bind,
        );
        bridge.publish_status(&format!(
            "Serving {} sections on http://{} (Ctrl+C to stop)...",
            bridge.section_count(),
            bridge.address()
        ));
        let runtime = TokioBuilder::new_current_thread()
            .enable_all()
            .build()
            .context("creating runtime for signal handling")?;
        runtime.block_on(async {
            signal::ctrl_c().await.context("awaiting Ctrl+C to exit")?;
            Ok::<(), anyhow::Error>(())
        })?;
    }

    Ok(())
}
