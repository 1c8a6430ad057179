use config::{
  builder::{ConfigBuilder, DefaultState},
  Config, ConfigError, Environment,
};
use serde_derive::Deserialize;
use strum::{Display, EnumString};

#[derive(Debug, Clone, Copy, Default, Deserialize, PartialEq, Eq, Display, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum LogFormat {
  #[default]
  Json,
  Pretty,
}

#[derive(Debug, Clone, Copy, Default, Deserialize, PartialEq, Eq, Display, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum HeapOrder {
  Ascending,
  #[default]
  Descending,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct LogSettings {
  pub format: LogFormat,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct DemoSettings {
  pub order: HeapOrder,
  pub pop_count: u32,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct Settings {
  pub log: LogSettings,
  pub demo: DemoSettings,
}

impl Settings {
  pub fn new() -> Result<Self, ConfigError> {
    Self::defaults()?
      .add_source(
        Environment::with_prefix("PQUEUE")
          .separator("__")
          .try_parsing(true),
      )
      .build()?
      .try_deserialize()
  }

  fn defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    Ok(
      Config::builder()
        .set_default("log.format", LogFormat::default().to_string())?
        .set_default("demo.order", HeapOrder::default().to_string())?
        .set_default("demo.pop_count", 10)?,
    )
  }
}
