//! Fetch handler
//!
//! Returns the raw bytes of one static file. CSV files and files referenced
//! by `*_DATABASE_URI` environment variables are refused. Every expected
//! failure is reported as a `{"msg": ...}` reply so the caller sees a normal
//! result object instead of a task fault.

use crate::config::Settings;
use crate::{denylist, logger};
use serde::Serialize;
use std::path::Path;
use tokio::fs;

/// Reply of the fetch handler.
///
/// Serializes untagged: file contents become a JSON byte array, rejections
/// become `{"msg": "..."}`.
#[derive(Debug, Serialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum FetchReply {
    Contents(Vec<u8>),
    Rejection { msg: String },
}

impl FetchReply {
    fn rejection(msg: impl Into<String>) -> Self {
        Self::Rejection { msg: msg.into() }
    }
}

/// Fetch a static file from the data station.
///
/// The caller may name the file; otherwise the node's `STATIC_FILENAME`
/// fallback is used. Only the caller-supplied name is checked against the
/// CSV rule and the denylist: the fallback name is served unchecked. That
/// asymmetry is inherited behavior that callers may rely on, so it is pinned
/// by tests rather than fixed here.
pub async fn fetch_static_file(settings: &Settings, filename: Option<String>) -> FetchReply {
    let folder = &settings.static_folder;
    logger::info(&format!("Using {folder} to search for the file..."));

    let denied = denylist::disallowed_names();
    if let Some(name) = filename.as_deref() {
        if name.ends_with(".csv") {
            logger::info("CSV file requested by user. This is not permitted!");
            return FetchReply::rejection("It is not allowed to transfer a csv file...");
        }
        if denied.contains(name) {
            logger::warn(&format!("Database file {name} requested by user!"));
            return FetchReply::rejection("It is not allowed to transfer a database file...");
        }
    }

    let filename = match filename.or_else(|| settings.static_filename.clone()) {
        Some(name) => name,
        None => {
            logger::warn("Filename is missing!");
            return FetchReply::rejection("Either the node or you should specify a filename!");
        }
    };

    logger::info(&format!("Locating static file: {filename}"));
    let path = Path::new(folder).join(&filename);
    if !path.exists() {
        logger::warn(&format!(
            "Static file is not found in the expected location {}",
            path.display()
        ));
        return FetchReply::rejection(format!(
            "Static file {} could not be found",
            path.display()
        ));
    }

    logger::info("Reading static file");
    match fs::read(&path).await {
        Ok(contents) => FetchReply::Contents(contents),
        Err(err) => {
            logger::warn(&format!("Could not read static file {}!", path.display()));
            FetchReply::rejection(format!(
                "failed to read static file {}! {err}",
                path.display()
            ))
        }
    }
}
