pub(crate) mod config;
pub use config::{AppConfig, AppConfigError, LoggingConfig, WindowConfig};

pub(crate) mod element;
pub use element::{Element, ElementError};
