//! List handler
//!
//! Enumerates the static-file folder and reports each entry's modification
//! time. The enumeration is non-recursive and the reply is keyed by filename
//! in ascending order.

use crate::config::Settings;
use crate::logger;
use chrono::{DateTime, Local};
use std::collections::BTreeMap;
use std::time::SystemTime;
use tokio::fs;

/// Timestamp layout used in the reply, e.g. `2024-11-03, 14:20:01`.
const MTIME_FORMAT: &str = "%Y-%m-%d, %H:%M:%S";

/// List the entries of the configured static-file folder.
///
/// `extensions` keeps only entries whose name ends with one of the given
/// suffixes (case-sensitive; callers include the dot, e.g. `".txt"`). `None`
/// keeps everything, subdirectories included.
///
/// Filesystem failures propagate to the caller; an unlistable folder is a
/// node misconfiguration, not something the remote analyst can act on.
pub async fn list_static_files(
    settings: &Settings,
    extensions: Option<&[String]>,
) -> std::io::Result<BTreeMap<String, String>> {
    let folder = &settings.static_folder;
    logger::info(&format!("Listing static files in: {folder}"));

    let mut files = BTreeMap::new();
    let mut entries = fs::read_dir(folder).await?;

    while let Some(entry) = entries.next_entry().await? {
        let name = entry.file_name().to_string_lossy().into_owned();

        if let Some(suffixes) = extensions {
            if !has_matching_suffix(&name, suffixes) {
                continue;
            }
        }

        let modified = entry.metadata().await?.modified()?;
        files.insert(name, format_mtime(modified));
    }

    Ok(files)
}

/// Exact, case-sensitive suffix match against any of `suffixes`.
fn has_matching_suffix(name: &str, suffixes: &[String]) -> bool {
    suffixes.iter().any(|suffix| name.ends_with(suffix.as_str()))
}

/// Render a modification time as a local wall-clock string.
fn format_mtime(modified: SystemTime) -> String {
    DateTime::<Local>::from(modified).format(MTIME_FORMAT).to_string()
}
