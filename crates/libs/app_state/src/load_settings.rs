use crate::{AppSettings, RawSettings};
use color_eyre::eyre::Result;
use std::path::Path;
use tracing::info;

/// Load settings from YAML + `APP__`-prefixed environment variables.
pub fn load_app_settings() -> Result<AppSettings> {
    // Load .env first so it can overwrite settings from the environment.
    dotenv::from_path(".env").ok();
    load_settings_from(Path::new("config/settings.yaml"))
}

/// Load settings from the given YAML file, with `APP__` environment
/// overrides applied on top.
pub fn load_settings_from(path: &Path) -> Result<AppSettings> {
    let config_path = path.canonicalize()?;

    let builder = config::Config::builder()
        .add_source(config::File::from(config_path.clone()))
        .add_source(
            config::Environment::with_prefix("APP")
                .separator("__")
                .try_parsing(true),
        );

    let raw_settings = builder.build()?.try_deserialize::<RawSettings>()?;
    info!("⚙️ Loaded settings from {}", config_path.display());
    Ok(raw_settings.into())
}
