//! Input/output operations, configuration and error handling

/// Command-line interfaces for both binaries
pub mod cli;
/// Constants and runtime defaults
pub mod configuration;
/// Error types and result alias
pub mod error;
/// Image loading and PNG export
pub mod image;
/// Fire-and-forget image preview in the platform viewer
pub mod preview;
/// Progress display for long-running loops
pub mod progress;
/// Cutting source images into tile files
pub mod splitter;
