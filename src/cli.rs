use std::path::PathBuf;

use clap::Parser;

use crate::data::loader::DEFAULT_COORDINATE;
use crate::data::volume::DEFAULT_SUBFILE;
use crate::render::video::DEFAULT_FPS;
use crate::render::{StillFormat, VideoFormat};

fn even_dimension(value: &str) -> Result<u32, String> {
    let pixels: u32 = value.parse().map_err(|e| format!("{e}"))?;
    if pixels == 0 || pixels % 2 != 0 {
        return Err(format!("{pixels} is not a positive even number of pixels"));
    }
    Ok(pixels)
}

/// Render 1-dimensional volume data as a still or an animation.
#[derive(Debug, Parser)]
#[command(version, about)]
pub struct Args {
    /// Common prefix of all h5 files being used, matched as `<prefix>*.h5`.
    ///
    /// A value containing `*`, `?` or `[` is used as a glob pattern instead.
    #[arg(long)]
    pub file_prefix: String,

    /// Name of the variable to render, e.g. `psi`, `psi-Error` or `psi-Analytic`.
    #[arg(long, required_unless_present = "list_vars")]
    pub var: Option<String>,

    /// Render this observation step as a still instead of an animation.
    #[arg(long)]
    pub time: Option<usize>,

    /// Base name of the output file. Stills get the still format extension,
    /// animations the video format extension.
    ///
    /// Without it the result is shown in a window.
    #[arg(long)]
    pub save: Option<String>,

    /// Frames per second when writing an animation to disk.
    #[arg(long, default_value_t = DEFAULT_FPS, value_parser = clap::value_parser!(u32).range(1..))]
    pub fps: u32,

    /// Milliseconds between frames when showing an animation in a window.
    #[arg(long, default_value_t = 200, value_parser = clap::value_parser!(u64).range(1..))]
    pub interval: u64,

    /// Print the variables of the first h5 file and exit.
    #[arg(long)]
    pub list_vars: bool,

    /// Volume subfile inside each h5 file (`.vol` is appended when missing).
    #[arg(long, default_value = DEFAULT_SUBFILE)]
    pub subfile: String,

    /// Tensor component used as the x coordinate.
    #[arg(long, default_value = DEFAULT_COORDINATE)]
    pub coord: String,

    #[arg(long, value_enum, default_value_t)]
    pub still_format: StillFormat,

    #[arg(long, value_enum, default_value_t)]
    pub video_format: VideoFormat,

    /// Image width in pixels (even).
    #[arg(long, default_value_t = 800, value_parser = even_dimension)]
    pub width: u32,

    /// Image height in pixels (even).
    #[arg(long, default_value_t = 600, value_parser = even_dimension)]
    pub height: u32,

    /// Write the extracted data (`.json` or `.csv`) and exit without rendering.
    ///
    /// With `--time` only that observation is written.
    #[arg(long)]
    pub export: Option<PathBuf>,
}

impl Args {
    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }
}
