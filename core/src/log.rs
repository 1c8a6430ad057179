use crate::settings::{LogFormat, LogSettings};
use anyhow::{anyhow, Result};
use tracing::info;
use tracing_subscriber::EnvFilter;

pub fn setup_logging(log_settings: &LogSettings) -> Result<()> {
  let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
  let builder = tracing_subscriber::fmt().with_env_filter(filter);

  match log_settings.format {
    LogFormat::Json => builder.json().try_init(),
    LogFormat::Pretty => builder.pretty().try_init(),
  }
  .map_err(|error| anyhow!(error))?;

  info!(format = %log_settings.format, "Logging initialized");
  Ok(())
}
