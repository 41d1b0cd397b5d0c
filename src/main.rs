use crate::config::{Config, app_name, app_version};
use crate::pipeline::{PipelineStage, StageStatus, status_of};
use crate::session::Session;
use anyhow::{Context, Result};
use clap::{Arg, ArgAction, ArgMatches, Command};
use log::{error, info};
use native_dialog::DialogBuilder;
use std::path::PathBuf;
use std::process;

pub mod config;
pub mod content;
pub mod export;
pub mod media;
pub mod pipeline;
pub mod session;
pub mod utils;

#[cfg(test)]
pub mod test_helpers;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let matches = Command::new(app_name())
        .version(app_version())
        .author(env!("CARGO_PKG_AUTHORS"))
        .about(env!("CARGO_PKG_DESCRIPTION"))
        .arg(
            Arg::new("files")
                .value_name("FILE")
                .num_args(0..)
                .value_parser(clap::value_parser!(PathBuf))
                .help("Media files to ingest; opens a file picker when omitted"),
        )
        .arg(
            Arg::new("copy-caption")
                .long("copy-caption")
                .action(ArgAction::SetTrue)
                .help("Place the generated caption on the system clipboard"),
        )
        .arg(
            Arg::new("copy-hashtags")
                .long("copy-hashtags")
                .action(ArgAction::SetTrue)
                .help("Place the generated hashtags on the system clipboard"),
        )
        .arg(
            Arg::new("save")
                .long("save")
                .value_name("DIR")
                .value_parser(clap::value_parser!(PathBuf))
                .help("Save the first ingested file under its original name into DIR"),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .action(ArgAction::SetTrue)
                .help("Print the generated content as JSON"),
        )
        .get_matches();

    if let Err(e) = run(&matches).await {
        error!("{e:#}");
        process::exit(1);
    }
}

async fn run(matches: &ArgMatches) -> Result<()> {
    let files: Vec<PathBuf> = matches
        .get_many::<PathBuf>("files")
        .map(|values| values.cloned().collect())
        .unwrap_or_default();
    let files = if files.is_empty() { pick_files()? } else { files };

    let mut session = Session::new(Config::new());
    if !session.ingest_paths(&files)? {
        info!("no media selected, nothing to do");
        return Ok(());
    }

    let mut stages = session.subscribe();
    render_progress(session.current_stage());
    while session.current_stage() != Some(PipelineStage::Ready) {
        stages
            .changed()
            .await
            .context("pipeline closed unexpectedly")?;
        let active = *stages.borrow_and_update();
        render_progress(active);
    }

    if matches.get_flag("json") {
        println!("{}", serde_json::to_string_pretty(session.content())?);
    } else {
        print_content(&session);
    }

    // Export failures are reported but never abort the session (the
    // generated content stays available for another attempt).
    if matches.get_flag("copy-caption") {
        if let Err(e) = export::copy_caption(session.caption()) {
            error!("copy caption failed: {e:#}");
        }
    }
    if matches.get_flag("copy-hashtags") {
        if let Err(e) = export::copy_hashtags(session.hashtags()) {
            error!("copy hashtags failed: {e:#}");
        }
    }
    if let Some(dir) = matches.get_one::<PathBuf>("save") {
        match export::download_first(session.items(), dir) {
            Ok(path) => println!("Saved {}", path.display()),
            Err(e) => error!("save failed: {e:#}"),
        }
    }

    Ok(())
}

/// Interactive selection, advertising the media filters the tool understands.
/// Any file type is still accepted and classified at ingestion.
fn pick_files() -> Result<Vec<PathBuf>> {
    DialogBuilder::file()
        .add_filter("Images", ["jpg", "jpeg", "png", "gif", "webp"])
        .add_filter("Video", ["mp4", "mov", "webm", "mkv"])
        .add_filter("Audio", ["mp3", "wav", "ogg", "flac"])
        .open_multiple_file()
        .show()
        .context("file picker failed")
}

fn render_progress(active: Option<PipelineStage>) {
    println!();
    for stage in PipelineStage::ALL {
        let marker = match status_of(active, stage) {
            StageStatus::Done => "[x]",
            StageStatus::InProgress => "[>]",
            StageStatus::Pending => "[ ]",
        };
        println!("{marker} {}", stage.label());
    }
}

fn print_content(session: &Session) {
    println!();
    println!("Caption:");
    println!("  {}", session.caption());
    println!("Hashtags:");
    println!("  {}", export::format_hashtags(session.hashtags()));
    if let Some(hero) = session.hero() {
        println!("Preview:");
        println!("  {}", hero.preview.url());
    }
}
