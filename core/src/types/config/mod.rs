mod app;

pub use app::{AppConfig, AppConfigError, LoggingConfig, WindowConfig};

#[cfg(test)]
mod tests;
