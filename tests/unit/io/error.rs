//! Tests for error types including source chaining and message formatting

#[cfg(test)]
mod tests {
    use spacetiles::SpacetilesError;
    use spacetiles::io::error::{invalid_parameter, invalid_path};
    use std::error::Error;
    use std::path::{Path, PathBuf};

    // Tests error source chaining works correctly
    // Verified by breaking source chain
    #[test]
    fn test_error_source_chain() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let error = SpacetilesError::FileSystem {
            path: "/tmp/tiles".into(),
            operation: "create directory",
            source: io_error,
        };

        assert!(error.source().is_some());
        let message = error.to_string();
        assert!(message.contains("create directory"));
        assert!(message.contains("/tmp/tiles"));
    }

    // Tests InvalidParameter error contains all fields and has no source
    // Verified by omitting value from message
    #[test]
    fn test_invalid_parameter_error() {
        let error = invalid_parameter("tile_size", &0, &"must be at least 1 pixel");

        let message = error.to_string();
        assert!(message.contains("tile_size"));
        assert!(message.contains("'0'"));
        assert!(message.contains("must be at least 1 pixel"));
        assert!(error.source().is_none());
    }

    // Tests image load errors name the offending path
    // Verified by dropping the path from the message
    #[test]
    fn test_image_load_error_message() {
        let source = image::ImageError::IoError(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "missing",
        ));
        let error = SpacetilesError::ImageLoad {
            path: PathBuf::from("stars.png"),
            source,
        };

        assert!(error.to_string().contains("stars.png"));
        assert!(error.source().is_some());
    }

    // Tests the path helper names the offending path
    // Verified by leaving the value empty
    #[test]
    fn test_invalid_path_helper() {
        let error = invalid_path(Path::new("tiles/.."), &"Source path has no file name");
        match &error {
            SpacetilesError::InvalidParameter {
                parameter, value, ..
            } => {
                assert_eq!(*parameter, "path");
                assert_eq!(value, "tiles/..");
            }
            other => unreachable!("Expected InvalidParameter error, got {other:?}"),
        }
        assert!(error.to_string().contains("no file name"));
    }
}
