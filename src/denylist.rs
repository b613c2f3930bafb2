//! Denylist of filenames that must never leave the data station.
//!
//! Database files are handed to algorithms through `*_DATABASE_URI`
//! environment variables. Whatever those variables point at is off limits
//! for the static-file fetch, so the denylist is the set of their base
//! filenames. It is recomputed on every invocation; the node environment
//! can differ between runs and nothing here may be cached.

use std::collections::HashSet;
use std::path::Path;

const DATABASE_URI_MARKER: &str = "_DATABASE_URI";

/// Collect the disallowed base filenames from the process environment.
#[must_use]
pub fn disallowed_names() -> HashSet<String> {
    scan(std::env::vars())
}

/// Core scan over `(name, value)` pairs.
///
/// Every variable whose name contains `_DATABASE_URI` contributes the final
/// path component of its value. Values without a final component (e.g. `/`)
/// contribute nothing.
pub fn scan<I>(vars: I) -> HashSet<String>
where
    I: IntoIterator<Item = (String, String)>,
{
    vars.into_iter()
        .filter(|(name, _)| name.contains(DATABASE_URI_MARKER))
        .filter_map(|(_, value)| {
            Path::new(&value)
                .file_name()
                .map(|base| base.to_string_lossy().into_owned())
        })
        .collect()
}
