pub mod config;
pub mod error;
pub mod logging;
pub mod packager;
pub mod updater;

pub use config::{PackagerConfig, UpdateConfig, CURRENT_VERSION};
pub use error::{PackError, UpdateError};
