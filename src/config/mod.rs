//! Configuration loading for the earnings ticker engine.
//!
//! This module loads the user's schedule from YAML and the holiday calendar from
//! saved holiday feed responses.
//!
//! # Example
//!
//! ```no_run
//! use earnings_ticker::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/default").unwrap();
//! println!("Configured: {}", config.schedule().is_some());
//! ```

mod loader;

pub use loader::{ConfigLoader, HOLIDAYS_DIR, SCHEDULE_FILE};
