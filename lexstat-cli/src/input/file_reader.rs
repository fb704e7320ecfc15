//! File reading utilities

use anyhow::{Context, Result};
use lexstat_core::CleanupMode;
use std::fs;
use std::path::Path;

/// File reader producing cleaned, analysis-ready text
pub struct FileReader;

impl FileReader {
    /// Read a UTF-8 file, join its lines and apply `cleanup`
    pub fn read_text(path: &Path, cleanup: CleanupMode) -> Result<String> {
        lexstat_core::read_file(path, cleanup)
            .with_context(|| format!("Failed to read file: {}", path.display()))
    }

    /// Get file size in bytes
    pub fn file_size(path: &Path) -> Result<u64> {
        let metadata = fs::metadata(path)
            .with_context(|| format!("Failed to get metadata for: {}", path.display()))?;

        Ok(metadata.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::{self, File};
    use tempfile::TempDir;

    #[test]
    fn test_read_text_success() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("test.txt");
        fs::write(&file_path, "Hallo   Welt.").unwrap();

        let result = FileReader::read_text(&file_path, CleanupMode::Plain).unwrap();
        assert_eq!(result, "Hallo Welt.");
    }

    #[test]
    fn test_read_text_nonexistent_file() {
        let path = Path::new("/nonexistent/file.txt");
        let result = FileReader::read_text(path, CleanupMode::Plain);

        assert!(result.is_err());
        let err_msg = result.unwrap_err().to_string();
        assert!(err_msg.contains("Failed to read file"));
    }

    #[test]
    fn test_read_text_invalid_utf8() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("latin1.txt");
        fs::write(&file_path, [0x53, 0x74, 0x72, 0x61, 0xdf, 0x65]).unwrap();

        let err = FileReader::read_text(&file_path, CleanupMode::None).unwrap_err();
        assert!(err.root_cause().to_string().to_lowercase().contains("utf-8"));
    }

    #[test]
    fn test_read_text_html_cleanup() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("page.html");
        fs::write(&file_path, "<h1>Titel</h1>\n<p>Ein Satz.</p>").unwrap();

        let text = FileReader::read_text(&file_path, CleanupMode::Html).unwrap();
        assert!(!text.contains('<'));
        assert!(text.contains("Ein Satz."));
    }

    #[test]
    fn test_file_size() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("sized.txt");
        fs::write(&file_path, "a".repeat(1024)).unwrap();

        assert_eq!(FileReader::file_size(&file_path).unwrap(), 1024);
    }

    #[test]
    fn test_empty_file() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("empty.txt");
        File::create(&file_path).unwrap();

        assert_eq!(FileReader::read_text(&file_path, CleanupMode::Plain).unwrap(), "");
        assert_eq!(FileReader::file_size(&file_path).unwrap(), 0);
    }
}
