//! Command-line interfaces for the background generator and the tile splitter

use crate::generation::{BackgroundConfig, BackgroundGenerator};
use crate::io::configuration::{
    DEFAULT_BRIGHT, DEFAULT_GALAXIES, DEFAULT_HEIGHT, DEFAULT_OUTPUT_FILE, DEFAULT_WIDTH, TILE_SIZE,
};
use crate::io::error::{Result, invalid_parameter};
use crate::io::image::save_png;
use crate::io::preview::open_preview;
use crate::io::progress::ProgressReporter;
use crate::io::splitter::TileSplitter;
use clap::Parser;
use image::DynamicImage;
use std::ffi::OsString;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "gen_background")]
#[command(
    author,
    version,
    about = "Generate a starfield background of randomly placed galaxies"
)]
/// Command-line arguments for the background generator
pub struct GenerateCli {
    /// Canvas width in pixels
    #[arg(short = 'W', long, default_value_t = DEFAULT_WIDTH)]
    pub width: u32,

    /// Canvas height in pixels
    #[arg(short = 'H', long, default_value_t = DEFAULT_HEIGHT)]
    pub height: u32,

    /// Number of galaxies to place
    #[arg(short, long, default_value_t = DEFAULT_GALAXIES)]
    pub galaxies: usize,

    /// Maximum number of galaxies forced to full brightness
    #[arg(short, long, default_value_t = DEFAULT_BRIGHT)]
    pub bright: usize,

    /// Random seed for reproducible output (OS entropy if omitted)
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Output PNG path
    #[arg(short, long, default_value = DEFAULT_OUTPUT_FILE)]
    pub output: PathBuf,

    /// Do not open the result in an image viewer
    #[arg(long)]
    pub no_preview: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,
}

/// Outcome of a background generation run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateSummary {
    /// Where the canvas was written
    pub output: PathBuf,
    /// Galaxies placed
    pub galaxies: usize,
    /// Galaxies promoted to full brightness
    pub bright: usize,
}

impl GenerateCli {
    /// Canvas configuration described by the arguments
    pub const fn config(&self) -> BackgroundConfig {
        BackgroundConfig {
            width: self.width,
            height: self.height,
            num_galaxies: self.galaxies,
            num_bright: self.bright,
        }
    }

    /// Check if the preview should be opened after saving
    pub const fn should_preview(&self) -> bool {
        !self.no_preview
    }

    /// Render, save and optionally preview the background
    ///
    /// # Errors
    ///
    /// Returns an error if the canvas cannot be saved
    // Allow print for the closing summary line
    #[allow(clippy::print_stderr)]
    pub fn run(&self) -> Result<GenerateSummary> {
        let progress = ProgressReporter::for_quiet(self.quiet);
        progress.start("Galaxies", self.galaxies);

        let mut generator = BackgroundGenerator::seeded(self.config(), self.seed);
        let background = generator.generate_with(|_| progress.advance());
        progress.finish();

        let summary = GenerateSummary {
            output: self.output.clone(),
            galaxies: background.galaxies.len(),
            bright: background.bright_count(),
        };

        save_png(&DynamicImage::ImageRgb8(background.canvas), &self.output)?;

        if !self.quiet {
            eprintln!(
                "Saved {} ({} galaxies, {} bright)",
                summary.output.display(),
                summary.galaxies,
                summary.bright
            );
        }

        if self.should_preview() {
            open_preview(&self.output);
        }

        Ok(summary)
    }
}

#[derive(Parser, Debug)]
#[command(name = "split_tiles")]
#[command(about = "Split an image into fixed-size PNG tiles")]
// Help and version requests are misuse too: they get the usage line and exit 1
#[command(disable_help_flag = true, disable_version_flag = true)]
/// Command-line arguments for the tile splitter
pub struct SplitCli {
    /// Image to split
    #[arg(value_name = "INPUT_IMAGE_PATH")]
    pub input: PathBuf,

    /// Directory receiving the tiles (created if missing)
    #[arg(value_name = "OUTPUT_FOLDER")]
    pub output: PathBuf,

    /// Tile edge length in pixels
    #[arg(short, long, default_value_t = TILE_SIZE)]
    pub tile_size: u32,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,
}

impl SplitCli {
    /// Parse arguments without exiting on failure
    ///
    /// # Errors
    ///
    /// Returns the clap error for a wrong argument count or an unknown flag,
    /// including `--help` and `--version`
    pub fn try_parse_args<I, T>(args: I) -> std::result::Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        Self::try_parse_from(args)
    }

    /// Write every tile of the input into the output folder
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The tile size is zero
    /// - The output folder cannot be created
    /// - The input image cannot be loaded
    /// - A tile cannot be written
    // Allow print for the closing summary line
    #[allow(clippy::print_stderr)]
    pub fn run(&self) -> Result<Vec<PathBuf>> {
        if self.tile_size == 0 {
            return Err(invalid_parameter(
                "tile_size",
                &self.tile_size,
                &"must be at least 1 pixel",
            ));
        }

        let progress = ProgressReporter::for_quiet(self.quiet);
        let splitter = TileSplitter::new(self.tile_size);
        let written = splitter.split_with(
            &self.input,
            &self.output,
            |total| progress.start("Tiles", total),
            |_| progress.advance(),
        )?;
        progress.finish();

        if !self.quiet {
            eprintln!(
                "Wrote {} tiles to {}",
                written.len(),
                self.output.display()
            );
        }

        Ok(written)
    }
}
