mod app;
mod cli;
mod data;
mod render;
mod state;
mod ui;

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result, anyhow};
use app::Render1dApp;
use clap::Parser;
use cli::Args;
use data::error::VolumeError;
use data::model::TimeSeries;
use data::volume::{self, H5VolumeFile};
use data::{export, loader};
use eframe::egui;
use render::{output_path, still, video};
use state::ViewerState;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            match err.downcast_ref::<VolumeError>() {
                Some(mismatch @ VolumeError::VersionMismatch { .. }) => eprintln!("{mismatch}"),
                _ => log::error!("{err:#}"),
            }
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<()> {
    let paths = volume::discover_files(&args.file_prefix)?;
    log::info!(
        "Found {} volume file(s) for '{}'",
        paths.len(),
        args.file_prefix
    );

    if args.list_vars {
        return print_variables(args, &paths);
    }

    let variable = args.var.as_deref().context("--var is required")?;
    let series = load(args, &paths, variable)?;
    log::info!("Loaded {} observations of '{variable}'", series.len());

    if let Some(path) = &args.export {
        log::info!("Writing data to file {}", path.display());
        let exported = match args.time {
            Some(index) => export::export_file(
                path,
                &series.variable,
                std::slice::from_ref(series.select(index)?),
            ),
            None => export::export_series(path, &series),
        };
        return exported.with_context(|| format!("exporting to {}", path.display()));
    }

    match args.time {
        Some(index) => render_still(args, series, index),
        None => render_animation(args, series),
    }
}

/// The volume files are closed before this returns.
fn load(args: &Args, paths: &[PathBuf], variable: &str) -> Result<TimeSeries, VolumeError> {
    let sources = paths
        .iter()
        .map(|path| H5VolumeFile::open(path, &args.subfile))
        .collect::<Result<Vec<_>, _>>()?;
    loader::load_time_series(&sources, variable, &args.coord)
}

/// Every file is opened, so a version mismatch anywhere fails the listing.
fn print_variables(args: &Args, paths: &[PathBuf]) -> Result<()> {
    let variables = {
        let sources = paths
            .iter()
            .map(|path| H5VolumeFile::open(path, &args.subfile))
            .collect::<Result<Vec<_>, _>>()?;
        let first = sources
            .first()
            .context("no volume files to list variables from")?;
        loader::list_variables(first, &args.coord)?
    };
    println!("Variables in H5 file:\n[{}]", variables.join(", "));
    Ok(())
}

fn render_still(args: &Args, series: TimeSeries, index: usize) -> Result<()> {
    let Some(base) = &args.save else {
        return run_viewer(ViewerState::still(series, index)?);
    };

    let observation = series.select(index)?;
    let path = output_path(base, args.still_format.extension());
    log::info!("Writing still to file {}", path.display());
    still::save_still(
        observation,
        &series.variable,
        &path,
        args.still_format,
        args.size(),
    )
    .with_context(|| format!("writing {}", path.display()))
}

fn render_animation(args: &Args, series: TimeSeries) -> Result<()> {
    let Some(base) = &args.save else {
        return run_viewer(ViewerState::animation(series, args.interval));
    };

    let path = output_path(base, args.video_format.extension());
    log::info!(
        "Writing animation to file {} at {} frames per second",
        path.display(),
        args.fps
    );
    video::save_animation(&series, &path, args.video_format, args.fps, args.size())
        .with_context(|| format!("writing {}", path.display()))
}

fn run_viewer(state: ViewerState) -> Result<()> {
    let title = format!("render1d – {}", state.series.variable);
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1000.0, 700.0])
            .with_min_inner_size([500.0, 350.0]),
        ..Default::default()
    };

    eframe::run_native(
        &title,
        options,
        Box::new(move |_cc| Ok(Box::new(Render1dApp::new(state)))),
    )
    .map_err(|e| anyhow!("viewer failed: {e}"))
}
