//! File-based page source.
//!
//! Reads page snapshots from a JSON file the server (or a cron job)
//! writes for the display board.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use super::PageSource;
use crate::page::PageSnapshot;

/// A page source backed by a JSON file.
///
/// `poll` tracks the file's modification time and only returns a page
/// when the file changed - cheap enough to call every loop iteration.
/// `reload` ignores that cache and always re-reads, which is what the
/// scheduled page refresh requires.
#[derive(Debug)]
pub struct FileSource {
    path: PathBuf,
    description: String,
    last_error: Option<String>,
    last_modified: Option<SystemTime>,
}

impl FileSource {
    /// Create a new file source for the given path.
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref().to_path_buf();
        let description = format!("file: {}", path.display());
        Self {
            path,
            description,
            last_error: None,
            last_modified: None,
        }
    }

    /// Returns the path being watched.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn get_modified_time(&self) -> Option<SystemTime> {
        fs::metadata(&self.path).ok()?.modified().ok()
    }

    /// Read and parse the file.
    fn read_file(&mut self) -> Option<PageSnapshot> {
        match fs::read_to_string(&self.path) {
            Ok(content) => match serde_json::from_str(&content) {
                Ok(page) => {
                    self.last_error = None;
                    Some(page)
                }
                Err(e) => {
                    self.last_error = Some(format!("Parse error: {}", e));
                    None
                }
            },
            Err(e) => {
                self.last_error = Some(format!("Read error: {}", e));
                None
            }
        }
    }
}

impl PageSource for FileSource {
    fn poll(&mut self) -> Option<PageSnapshot> {
        let current_modified = self.get_modified_time();

        // Check if the file has been modified since the last read
        let file_changed = match (&self.last_modified, &current_modified) {
            (None, _) => true,        // First poll, always read
            (Some(_), None) => false, // File disappeared, keep the current page
            (Some(last), Some(current)) => current > last,
        };

        if file_changed {
            if let Some(page) = self.read_file() {
                self.last_modified = current_modified;
                return Some(page);
            }
        }

        None
    }

    fn reload(&mut self) -> Option<PageSnapshot> {
        // Bypass the mtime gate entirely: a refresh re-fetches from the
        // origin even when nothing appears to have changed.
        let current_modified = self.get_modified_time();
        let page = self.read_file()?;
        self.last_modified = current_modified;
        Some(page)
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn sample_json() -> &'static str {
        r#"{
            "queue": {
                "branch": "downtown",
                "entries": [
                    { "name": "Alice", "service": "Haircut", "time": "09:05" }
                ]
            },
            "alerts": [
                { "category": "success", "message": "Customer added" }
            ]
        }"#
    }

    #[test]
    fn test_file_source_new() {
        let source = FileSource::new("/tmp/page.json");
        assert_eq!(source.path(), Path::new("/tmp/page.json"));
        assert_eq!(source.description(), "file: /tmp/page.json");
        assert!(source.error().is_none());
    }

    #[test]
    fn test_poll_reads_once_until_changed() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "{}", sample_json()).unwrap();

        let mut source = FileSource::new(file.path());

        // First poll returns the page
        let page = source.poll().unwrap();
        assert_eq!(page.queue.unwrap().branch, "downtown");

        // Second poll without a change returns None
        assert!(source.poll().is_none());
    }

    #[test]
    fn test_reload_bypasses_mtime_gate() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "{}", sample_json()).unwrap();

        let mut source = FileSource::new(file.path());
        let _ = source.poll();
        assert!(source.poll().is_none());

        // Unchanged file, but reload still fetches it.
        let page = source.reload();
        assert!(page.is_some());
        assert_eq!(page.unwrap().alerts.len(), 1);
    }

    #[test]
    fn test_missing_file_reports_error() {
        let mut source = FileSource::new("/nonexistent/path/page.json");

        assert!(source.poll().is_none());
        assert!(source.error().unwrap().contains("Read error"));
        assert!(source.reload().is_none());
    }

    #[test]
    fn test_invalid_json_reports_error() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "not valid json").unwrap();

        let mut source = FileSource::new(file.path());

        assert!(source.poll().is_none());
        assert!(source.error().unwrap().contains("Parse error"));
    }

    #[test]
    fn test_error_clears_after_successful_read() {
        let mut source = FileSource::new("/nonexistent/path/page.json");
        let _ = source.poll();
        assert!(source.error().is_some());

        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "{}", sample_json()).unwrap();
        let mut source = FileSource::new(file.path());
        let _ = source.poll();
        assert!(source.error().is_none());
    }
}
