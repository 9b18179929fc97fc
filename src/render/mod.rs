//! Non-interactive output: still images and videos drawn with `plotters`.

pub mod chart;
pub mod still;
pub mod video;

use std::path::PathBuf;

use clap::ValueEnum;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("drawing failed: {0}")]
    Draw(String),

    #[error("encoding image failed")]
    Image(#[from] image::ImageError),

    #[error("cannot start encoder '{program}'")]
    EncoderSpawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("encoder '{program}' exited with {status}")]
    EncoderFailed {
        program: String,
        status: std::process::ExitStatus,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Output format of a still.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum StillFormat {
    #[default]
    Svg,
    Png,
}

impl StillFormat {
    pub fn extension(self) -> &'static str {
        match self {
            StillFormat::Svg => "svg",
            StillFormat::Png => "png",
        }
    }
}

/// Output container of an animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum VideoFormat {
    /// H.264 in mp4, through ffmpeg.
    #[default]
    Mp4,
    /// MPEG-2 in mpg, through ffmpeg.
    Mpg,
    /// Animated gif, no external encoder.
    Gif,
}

impl VideoFormat {
    pub fn extension(self) -> &'static str {
        match self {
            VideoFormat::Mp4 => "mp4",
            VideoFormat::Mpg => "mpg",
            VideoFormat::Gif => "gif",
        }
    }
}

/// `--save BASE` plus the format extension.
pub fn output_path(base: &str, extension: &str) -> PathBuf {
    PathBuf::from(format!("{base}.{extension}"))
}

fn draw_error(err: impl std::fmt::Display) -> RenderError {
    RenderError::Draw(err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_path_appends_extension() {
        assert_eq!(output_path("out/psi", "svg"), PathBuf::from("out/psi.svg"));
        assert_eq!(
            output_path("run.v2", VideoFormat::Mpg.extension()),
            PathBuf::from("run.v2.mpg")
        );
    }

    #[test]
    fn default_formats() {
        assert_eq!(StillFormat::default().extension(), "svg");
        assert_eq!(VideoFormat::default().extension(), "mp4");
    }
}
