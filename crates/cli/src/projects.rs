//! Project list loading.

use std::path::Path;
use tracing::error;

/// Load the ordered project list from a newline-delimited file.
///
/// Lines are trimmed; blank lines and lines starting with `#` are skipped.
/// Duplicates are kept. An unreadable file is reported and yields an empty
/// list rather than an error: provisioning continues with the data source
/// and notification channel.
pub fn load_projects(path: &Path) -> Vec<String> {
    match std::fs::read_to_string(path) {
        Ok(contents) => contents
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .map(str::to_string)
            .collect(),
        Err(e) => {
            error!(path = %path.display(), error = %e, "project list is not available");
            Vec::new()
        }
    }
}
