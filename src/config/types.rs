// Configuration types module
// Defines the environment-backed settings structure

use serde::Deserialize;

/// Node-provided settings for a single algorithm run.
///
/// The node container injects these as environment variables; nothing is
/// read from disk. `static_folder` always has a value (the node mounts the
/// data volume at `/mnt/data`), the rest is optional.
#[derive(Debug, Deserialize, Clone)]
pub struct Settings {
    /// Folder searched for static files (`STATIC_FOLDER`).
    pub static_folder: String,
    /// Fallback filename for fetch when the caller supplies none
    /// (`STATIC_FILENAME`).
    #[serde(default)]
    pub static_filename: Option<String>,
    /// Path of the task input file mounted by the node (`INPUT_FILE`).
    #[serde(default)]
    pub input_file: Option<String>,
    /// Path the node collects the result from (`OUTPUT_FILE`).
    #[serde(default)]
    pub output_file: Option<String>,
}
