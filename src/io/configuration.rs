//! Generation constants and runtime configuration defaults

// Canvas defaults for the background generator
/// Default canvas width in pixels
pub const DEFAULT_WIDTH: u32 = 1600;
/// Default canvas height in pixels
pub const DEFAULT_HEIGHT: u32 = 900;
/// Default number of galaxies stamped onto the canvas
pub const DEFAULT_GALAXIES: usize = 700;
/// Default budget of galaxies forced to full brightness
pub const DEFAULT_BRIGHT: usize = 50;

/// Divisor applied to galaxy positions before sampling noise
pub const NOISE_SCALE: f64 = 100.0;
/// Multiplier mapping a noise sample onto the intensity range
pub const NOISE_AMPLITUDE: f64 = 127.0;
/// Offset mapping a noise sample onto the intensity range
pub const NOISE_OFFSET: f64 = 128.0;

/// Smallest galaxy radius drawn
pub const MIN_RADIUS: i64 = 1;
/// Exclusive upper bound of the galaxy radius draw
pub const MAX_RADIUS_EXCLUSIVE: i64 = 3;

// A uniform draw at or above this value makes the galaxy bright (25% chance)
/// Threshold for promoting a galaxy to full brightness
pub const BRIGHT_CHANCE_THRESHOLD: f64 = 0.75;
/// Radius multiplier applied to bright galaxies before truncation
pub const BRIGHT_RADIUS_FACTOR: f64 = 1.5;
/// Intensity of bright galaxies
pub const BRIGHT_INTENSITY: u8 = 255;

/// Fixed output filename of the background generator
pub const DEFAULT_OUTPUT_FILE: &str = "space_background.png";

// Tile splitter settings
/// Edge length of square tiles in pixels
pub const TILE_SIZE: u32 = 128;
/// Extension used for tile files
pub const TILE_EXTENSION: &str = "png";
/// Usage line printed when the splitter receives the wrong arguments
pub const SPLIT_USAGE: &str = "Usage: split_tiles input_image_path output_folder";
/// Exit status after printing usage
pub const USAGE_EXIT_STATUS: u8 = 1;

// Progress bar display settings
/// Width of progress bars in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;
