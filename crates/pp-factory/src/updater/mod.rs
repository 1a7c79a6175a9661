pub mod async_handler;
pub mod cli;
pub mod core;
pub mod types;

pub use async_handler::*;
pub use cli::*;
pub use self::core::*;
pub use types::*;
