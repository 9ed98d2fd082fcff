//! Tests for file reading and line splitting

#[cfg(test)]
mod tests {
    use cursorgrid::PuzzleError;
    use cursorgrid::io::reader::{read, read_lines, split_lines};
    use std::fs;
    use tempfile::TempDir;

    // Tests read returns the whole file text
    // Verified by stopping at the first line
    #[test]
    fn test_read_whole_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("input.txt");
        fs::write(&path, "ab\ncd\n").unwrap();

        assert_eq!(read(&path).unwrap(), "ab\ncd\n");
    }

    // Tests a missing file is a FileSystem error
    // Verified by mapping the error to InvalidInput
    #[test]
    fn test_missing_file_is_file_system_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing.txt");

        match read_lines(&path) {
            Err(PuzzleError::FileSystem {
                path: error_path,
                operation,
                source,
            }) => {
                assert_eq!(error_path, path);
                assert_eq!(operation, "read");
                assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
            }
            other => unreachable!("Expected FileSystem error, got {other:?}"),
        }
    }

    // Tests read_lines drops empty lines
    // Verified by keeping empty lines
    #[test]
    fn test_read_lines_drops_empty_lines() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("lines.txt");
        fs::write(&path, "a\r\nb\rc\n\nd\n").unwrap();

        assert_eq!(read_lines(&path).unwrap(), vec!["a", "b", "c", "d"]);
    }

    // Tests split_lines keeps inner empty lines
    // Verified by filtering empty pieces
    #[test]
    fn test_split_lines_keeps_inner_empty_lines() {
        assert_eq!(split_lines("a\n\nb\n").collect::<Vec<_>>(), vec!["a", "", "b"]);
        assert_eq!(split_lines("a\r\nb").collect::<Vec<_>>(), vec!["a", "b"]);
        assert_eq!(split_lines("").count(), 0);
    }
}
