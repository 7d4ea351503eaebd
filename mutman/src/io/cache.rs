//! Fallback removal of the engine's cache file.

use std::fs;
use std::path::Path;

use tracing::{debug, warn};

/// Remove the cache file at `path` if present.
///
/// The file's contents belong to the engine and are never read here. Every
/// outcome, including a removal fault, is reported as text.
pub fn clear_cache_file(path: &Path) -> String {
    if !path.exists() {
        return "No mutmut cache found to clear.".to_string();
    }
    match fs::remove_file(path) {
        Ok(()) => {
            debug!(path = %path.display(), "removed cache file");
            "Mutmut cache cleared successfully.".to_string()
        }
        Err(err) => {
            warn!(err = %err, path = %path.display(), "failed to remove cache file");
            format!("Failed to clear mutmut cache: {err}")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_cache_reports_nothing_to_clear() {
        let temp = tempfile::tempdir().expect("tempdir");
        let message = clear_cache_file(&temp.path().join(".mutmut-cache"));
        assert_eq!(message, "No mutmut cache found to clear.");
    }

    #[test]
    fn existing_cache_is_removed() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join(".mutmut-cache");
        fs::write(&path, b"engine-private bytes").expect("write cache");

        let message = clear_cache_file(&path);
        assert_eq!(message, "Mutmut cache cleared successfully.");
        assert!(!path.exists());
    }
}
