use std::io::Write;
use std::path::Path;
use std::process::{ChildStdin, Command, Stdio};

use plotters::prelude::*;

use super::chart::{animation_bounds, draw_observation, render_rgb};
use super::{RenderError, VideoFormat, draw_error};
use crate::data::model::{Bounds, TimeSeries};

pub const DEFAULT_FPS: u32 = 30;

const FFMPEG: &str = "ffmpeg";

/// Write every observation as one frame, axes fixed to the whole series.
pub fn save_animation(
    series: &TimeSeries,
    path: &Path,
    format: VideoFormat,
    fps: u32,
    size: (u32, u32),
) -> Result<(), RenderError> {
    let bounds = animation_bounds(series);

    match format {
        VideoFormat::Gif => write_gif(series, path, fps, size, bounds),
        VideoFormat::Mp4 | VideoFormat::Mpg => pipe_to_ffmpeg(series, path, format, fps, size, bounds),
    }
}

/// Gif frame delay in milliseconds.
pub fn frame_delay_ms(fps: u32) -> u32 {
    (1000 / fps.max(1)).max(1)
}

/// ffmpeg reads raw RGB frames from stdin and overwrites `path`.
pub fn ffmpeg_args(format: VideoFormat, fps: u32, size: (u32, u32), path: &Path) -> Vec<String> {
    let mut args: Vec<String> = [
        "-y",
        "-loglevel",
        "error",
        "-f",
        "rawvideo",
        "-pix_fmt",
        "rgb24",
        "-s",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect();
    args.push(format!("{}x{}", size.0, size.1));
    args.extend(["-r".to_string(), fps.to_string(), "-i".to_string(), "-".to_string()]);

    match format {
        VideoFormat::Mp4 => args.extend(
            ["-vcodec", "libx264", "-pix_fmt", "yuv420p"]
                .iter()
                .map(|s| s.to_string()),
        ),
        VideoFormat::Mpg => args.extend(["-vcodec", "mpeg2video"].iter().map(|s| s.to_string())),
        VideoFormat::Gif => {}
    }

    args.push(path.display().to_string());
    args
}

fn write_gif(
    series: &TimeSeries,
    path: &Path,
    fps: u32,
    size: (u32, u32),
    bounds: Bounds,
) -> Result<(), RenderError> {
    let root = BitMapBackend::gif(path, size, frame_delay_ms(fps))
        .map_err(draw_error)?
        .into_drawing_area();
    for observation in &series.observations {
        draw_observation(&root, observation, &series.variable, bounds)?;
        root.present().map_err(draw_error)?;
    }
    Ok(())
}

fn pipe_to_ffmpeg(
    series: &TimeSeries,
    path: &Path,
    format: VideoFormat,
    fps: u32,
    size: (u32, u32),
    bounds: Bounds,
) -> Result<(), RenderError> {
    let args = ffmpeg_args(format, fps, size, path);
    log::debug!("{FFMPEG} {}", args.join(" "));

    let mut child = Command::new(FFMPEG)
        .args(&args)
        .stdin(Stdio::piped())
        .spawn()
        .map_err(|source| RenderError::EncoderSpawn {
            program: FFMPEG.to_string(),
            source,
        })?;

    let written = match child.stdin.take() {
        Some(stdin) => write_frames(stdin, series, size, bounds),
        None => Err(RenderError::Io(std::io::Error::other("encoder stdin not captured"))),
    };

    // A dead encoder shows up as a broken pipe; its exit status says more.
    let status = child.wait()?;
    if !status.success() {
        return Err(RenderError::EncoderFailed {
            program: FFMPEG.to_string(),
            status,
        });
    }
    written
}

/// Consumes `stdin` so the pipe closes once the last frame is written.
fn write_frames(
    mut stdin: ChildStdin,
    series: &TimeSeries,
    size: (u32, u32),
    bounds: Bounds,
) -> Result<(), RenderError> {
    for (n, observation) in series.observations.iter().enumerate() {
        let frame = render_rgb(observation, &series.variable, bounds, size)?;
        stdin.write_all(&frame)?;
        log::debug!("frame {n} (t = {}) written", observation.time);
    }
    stdin.flush()?;
    Ok(())
}
