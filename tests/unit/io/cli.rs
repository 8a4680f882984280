//! Tests for command-line parsing and the run entry points of both tools

#[cfg(test)]
mod tests {
    use clap::Parser;
    use image::GenericImageView;
    use spacetiles::io::cli::{GenerateCli, SplitCli};
    use spacetiles::io::configuration::{
        DEFAULT_BRIGHT, DEFAULT_GALAXIES, DEFAULT_HEIGHT, DEFAULT_OUTPUT_FILE, DEFAULT_WIDTH,
        TILE_SIZE,
    };
    use std::path::PathBuf;
    use tempfile::TempDir;

    // Tests generator parsing with no arguments uses the fixed constants
    // Verified by changing default values to ensure defaults are used
    #[test]
    fn test_generate_defaults() {
        let cli = GenerateCli::parse_from(["gen_background"]);

        assert_eq!(cli.width, DEFAULT_WIDTH);
        assert_eq!(cli.height, DEFAULT_HEIGHT);
        assert_eq!(cli.galaxies, DEFAULT_GALAXIES);
        assert_eq!(cli.bright, DEFAULT_BRIGHT);
        assert_eq!(cli.output, PathBuf::from(DEFAULT_OUTPUT_FILE));
        assert_eq!(cli.seed, None);
        assert!(cli.should_preview());
        assert!(!cli.quiet);
    }

    // Tests generator flag parsing including short forms
    // Verified by changing short flag definitions
    #[test]
    fn test_generate_flags() {
        let cli = GenerateCli::parse_from([
            "gen_background",
            "-W",
            "64",
            "-H",
            "48",
            "-g",
            "20",
            "-b",
            "4",
            "-s",
            "77",
            "-o",
            "out/bg.png",
            "--no-preview",
            "-q",
        ]);

        let config = cli.config();
        assert_eq!((config.width, config.height), (64, 48));
        assert_eq!(config.num_galaxies, 20);
        assert_eq!(config.num_bright, 4);
        assert_eq!(cli.seed, Some(77));
        assert_eq!(cli.output, PathBuf::from("out/bg.png"));
        assert!(!cli.should_preview());
        assert!(cli.quiet);
    }

    // Tests a generator run writes a PNG of the requested size
    // Verified by disabling the save step
    #[test]
    fn test_generate_run_writes_png() {
        let temp_dir = TempDir::new().unwrap();
        let output = temp_dir.path().join("bg.png");
        let output_arg = output.to_str().unwrap();
        let cli = GenerateCli::parse_from([
            "gen_background",
            "-W",
            "80",
            "-H",
            "40",
            "-g",
            "30",
            "-b",
            "5",
            "-s",
            "1",
            "-o",
            output_arg,
            "--no-preview",
            "--quiet",
        ]);

        let summary = cli.run().unwrap();

        assert_eq!(summary.output, output);
        assert_eq!(summary.galaxies, 30);
        assert!(summary.bright <= 5);
        let saved = image::open(&output).unwrap();
        assert_eq!(saved.dimensions(), (80, 40));
    }

    // Tests splitter parsing of the two positional arguments
    // Verified by swapping positional argument order
    #[test]
    fn test_split_two_positionals() {
        let cli = SplitCli::try_parse_args(["split_tiles", "in.png", "out"]).unwrap();

        assert_eq!(cli.input, PathBuf::from("in.png"));
        assert_eq!(cli.output, PathBuf::from("out"));
        assert_eq!(cli.tile_size, TILE_SIZE);
        assert!(!cli.quiet);
    }

    // Tests any other positional count is a parse error
    // Verified by making the output folder optional
    #[test]
    fn test_split_wrong_argument_count() {
        for args in [
            vec!["split_tiles"],
            vec!["split_tiles", "in.png"],
            vec!["split_tiles", "in.png", "out", "extra"],
        ] {
            assert!(SplitCli::try_parse_args(args.clone()).is_err(), "args {args:?}");
        }
    }

    // Tests help and version flags are rejected like any other misuse
    // Verified by re-enabling the clap help flag
    #[test]
    fn test_split_help_and_version_rejected() {
        for flag in ["--help", "-h", "--version", "-V"] {
            let error = SplitCli::try_parse_args(["split_tiles", flag]).unwrap_err();
            assert_eq!(error.kind(), clap::error::ErrorKind::UnknownArgument, "flag {flag}");
        }
    }

    // Tests a splitter run writes all tiles into the output folder
    // Verified by dropping the last tile row
    #[test]
    fn test_split_run() {
        let temp_dir = TempDir::new().unwrap();
        let source = temp_dir.path().join("input.png");
        image::RgbImage::new(260, 130).save(&source).unwrap();
        let out = temp_dir.path().join("tiles");

        let cli = SplitCli::try_parse_args([
            "split_tiles",
            source.to_str().unwrap(),
            out.to_str().unwrap(),
            "--quiet",
        ])
        .unwrap();
        let written = cli.run().unwrap();

        assert_eq!(written.len(), 3 * 2);
        assert!(out.join("input_256_128.png").exists());
    }

    // Tests a zero tile size is rejected before any file is written
    // Verified by removing the tile size validation
    #[test]
    fn test_split_run_zero_tile_size() {
        let temp_dir = TempDir::new().unwrap();
        let out = temp_dir.path().join("tiles");
        let cli = SplitCli::try_parse_args([
            "split_tiles",
            "missing.png",
            out.to_str().unwrap(),
            "-t",
            "0",
            "-q",
        ])
        .unwrap();

        assert!(cli.run().is_err());
        assert!(!out.exists());
    }
}
