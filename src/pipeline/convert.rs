use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Instant;

use crate::animation::blend::{Blender, FrameTimes};
use crate::assets::decode::load_image;
use crate::color::matrix::MatrixPair;
use crate::encode::ffmpeg::{FfmpegSink, FfmpegSinkOpts};
use crate::encode::sink::FrameSink;
use crate::foundation::core::{AnimParams, Fps};
use crate::foundation::error::YbtError;
use crate::pipeline::render::render_animation;

/// Extension given to every output file.
pub const OUTPUT_EXTENSION: &str = "mp4";

/// Everything a conversion needs besides the input paths.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ConvertSettings {
    /// Period and repeat count.
    pub anim: AnimParams,
    /// Output frame rate.
    pub fps: Fps,
    /// The two renderings to alternate between.
    pub matrices: MatrixPair,
    /// Replace existing output files.
    pub overwrite: bool,
}

impl ConvertSettings {
    /// Settings with the fixed 30 fps rate, the default matrices, and overwriting enabled.
    pub fn new(anim: AnimParams) -> Self {
        Self {
            anim,
            fps: Fps::ANIMATION,
            matrices: MatrixPair::default(),
            overwrite: true,
        }
    }
}

/// Per-file failure, split by the stage that failed.
#[derive(thiserror::Error, Debug)]
pub enum ConvertError {
    /// The input image could not be read or decoded.
    #[error("image load error: {source}")]
    Load {
        path: PathBuf,
        #[source]
        source: YbtError,
    },

    /// The output video could not be opened, written or finalized.
    #[error("video write error: '{}': {source}", output.display())]
    Write {
        path: PathBuf,
        output: PathBuf,
        #[source]
        source: YbtError,
    },
}

impl ConvertError {
    /// Input file the failure belongs to.
    pub fn path(&self) -> &Path {
        match self {
            Self::Load { path, .. } | Self::Write { path, .. } => path,
        }
    }
}

/// Outcome of one successful conversion.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConvertReport {
    pub input: PathBuf,
    pub output: PathBuf,
    pub frames: u64,
    pub width: u32,
    pub height: u32,
}

/// Outcome of a whole run, in input order.
#[derive(Debug, Default)]
pub struct RunSummary {
    pub converted: Vec<ConvertReport>,
    pub failed: Vec<ConvertError>,
}

impl RunSummary {
    pub fn all_succeeded(&self) -> bool {
        self.failed.is_empty()
    }
}

type SinkFactory = Box<dyn FnMut(&Path) -> Box<dyn FrameSink>>;

/// Output path for `input`: the final extension, if any, replaced by `mp4`.
///
/// `photo.jpg` becomes `photo.mp4`, `archive.tar.gz` becomes `archive.tar.mp4` and `noext`
/// becomes `noext.mp4`. A dot-leading name such as `.jpg` has no extension and becomes
/// `.jpg.mp4`.
pub fn output_path_for(input: &Path) -> PathBuf {
    input.with_extension(OUTPUT_EXTENSION)
}

/// Drives load, transform, blend and write for each input file.
pub struct Converter {
    settings: ConvertSettings,
    make_sink: SinkFactory,
}

impl Converter {
    /// Converter writing MP4 files through the system `ffmpeg`.
    pub fn new(settings: ConvertSettings) -> Self {
        let overwrite = settings.overwrite;
        Self::with_sink_factory(settings, move |out: &Path| {
            Box::new(FfmpegSink::new(
                FfmpegSinkOpts::new(out).with_overwrite(overwrite),
            )) as Box<dyn FrameSink>
        })
    }

    /// Converter writing into sinks produced by `make_sink`, called once per output path.
    pub fn with_sink_factory(
        settings: ConvertSettings,
        make_sink: impl FnMut(&Path) -> Box<dyn FrameSink> + 'static,
    ) -> Self {
        Self {
            settings,
            make_sink: Box::new(make_sink),
        }
    }

    pub fn settings(&self) -> &ConvertSettings {
        &self.settings
    }

    /// Convert a single file.
    #[tracing::instrument(skip(self))]
    pub fn convert_file(&mut self, input: &Path) -> Result<ConvertReport, ConvertError> {
        let started = Instant::now();
        let output = output_path_for(input);

        let source = load_image(input).map_err(|source| ConvertError::Load {
            path: input.to_path_buf(),
            source,
        })?;
        let (width, height) = source.dimensions();

        if output == input {
            return Err(write_error(
                input,
                &output,
                YbtError::validation("output path would replace the input file"),
            ));
        }

        let blender = Blender::from_source(
            &source,
            &self.settings.matrices,
            self.settings.anim.period_secs,
        )
        .map_err(|e| write_error(input, &output, e))?;
        drop(source);

        let times = FrameTimes::new(self.settings.anim, self.settings.fps);
        let mut sink = (self.make_sink)(&output);
        let frames = render_animation(&blender, times, sink.as_mut())
            .map_err(|e| write_error(input, &output, e))?;

        tracing::debug!(
            frames,
            elapsed_ms = started.elapsed().as_millis() as u64,
            "converted"
        );
        Ok(ConvertReport {
            input: input.to_path_buf(),
            output,
            frames,
            width,
            height,
        })
    }

    /// Convert every input in order, reporting progress to `out` and failures to `err`.
    ///
    /// A failing file never stops the run.
    pub fn run<P: AsRef<Path>>(
        &mut self,
        inputs: &[P],
        out: &mut dyn Write,
        err: &mut dyn Write,
    ) -> RunSummary {
        let mut summary = RunSummary::default();
        for input in inputs {
            let input = input.as_ref();
            let _ = writeln!(out, "Converting {}...", input.display());
            match self.convert_file(input) {
                Ok(report) => summary.converted.push(report),
                Err(e) => {
                    tracing::debug!(error = ?e, "conversion failed");
                    let _ = writeln!(err, "{e}");
                    summary.failed.push(e);
                }
            }
        }
        tracing::info!(
            converted = summary.converted.len(),
            failed = summary.failed.len(),
            "run finished"
        );
        summary
    }
}

fn write_error(input: &Path, output: &Path, source: YbtError) -> ConvertError {
    ConvertError::Write {
        path: input.to_path_buf(),
        output: output.to_path_buf(),
        source,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/pipeline/convert.rs"]
mod tests;
