mod app;

pub use app::{
    AppConfig, ConfigError, GeneralConfig, LoggingConfig, RebuildPolicy, SearchSettings,
};

#[cfg(test)]
mod tests;
