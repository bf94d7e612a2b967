pub mod database;
pub mod errors;
pub mod logging;
pub mod root;
pub mod sweeper;

pub use database::DatabaseConfig;
pub use errors::ConfigError;
pub use logging::{LogFormat, LoggingConfig};
pub use root::{CliOverrides, Config};
pub use sweeper::SweeperConfig;
