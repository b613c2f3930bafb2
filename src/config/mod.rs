// Configuration module entry point
// Loads node settings from the process environment

mod types;

pub use types::Settings;

/// Default static-file folder. The node mounts its data volume here, so
/// relative operator paths always start from `/mnt/data`.
pub const DEFAULT_STATIC_FOLDER: &str = "/mnt/data";

impl Settings {
    /// Load settings from the process environment.
    ///
    /// `STATIC_FOLDER` falls back to [`DEFAULT_STATIC_FOLDER`] when unset;
    /// every other variable is optional. Unrelated environment variables are
    /// ignored.
    pub fn load() -> Result<Self, config::ConfigError> {
        let settings = config::Config::builder()
            .add_source(config::Environment::default())
            .set_default("static_folder", DEFAULT_STATIC_FOLDER)?
            .build()?;

        settings.try_deserialize()
    }

    /// Settings with only a static folder, everything else unset.
    #[must_use]
    pub const fn with_folder(static_folder: String) -> Self {
        Self {
            static_folder,
            static_filename: None,
            input_file: None,
            output_file: None,
        }
    }
}
