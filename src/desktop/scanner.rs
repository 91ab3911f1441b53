//! Bounded-depth scan of platform install locations.
//!
//! Traversal runs off an explicit worklist rather than recursion, so the
//! depth bound is a plain loop condition and stack depth stays constant no
//! matter how deep an install tree is.

use std::collections::VecDeque;
use std::path::PathBuf;
use tokio::fs;

/// Walk `roots` up to `max_depth` directory levels, collecting entries whose
/// file name ends with `suffix`.
///
/// A suffix match is checked before the directory check on purpose: macOS
/// `.app` bundles are directories and must be collected, not descended into.
/// Unreadable or missing directories contribute nothing; install locations
/// come and go, so those failures are logged and swallowed rather than
/// aborting the scan. No ordering of the result is guaranteed.
pub async fn scan(roots: &[PathBuf], suffix: Option<&str>, max_depth: usize) -> Vec<String> {
    let Some(suffix) = suffix else {
        // Platform without filesystem-based discovery.
        return Vec::new();
    };

    let mut found = Vec::new();
    let mut pending: VecDeque<(PathBuf, usize)> =
        roots.iter().cloned().map(|root| (root, 0)).collect();

    while let Some((dir, depth)) = pending.pop_front() {
        if depth == max_depth {
            continue;
        }

        let mut entries = match fs::read_dir(&dir).await {
            Ok(entries) => entries,
            Err(error) => {
                tracing::debug!(dir = %dir.display(), %error, "skipping unreadable directory");
                continue;
            }
        };

        loop {
            let entry = match entries.next_entry().await {
                Ok(Some(entry)) => entry,
                Ok(None) => break,
                Err(error) => {
                    tracing::debug!(dir = %dir.display(), %error, "directory listing failed");
                    break;
                }
            };

            let path = entry.path();
            if entry.file_name().to_string_lossy().ends_with(suffix) {
                found.push(path.to_string_lossy().into_owned());
            } else if entry.file_type().await.map(|t| t.is_dir()).unwrap_or(false) {
                pending.push_back((path, depth + 1));
            }
        }
    }

    found
}
