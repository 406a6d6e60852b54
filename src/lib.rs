pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{CliConfig, Command};

pub use app::{Outcome, Repl, Session};
pub use config::CalcConfig;
pub use self::core::{Dispatcher, Operation, OperationInfo, OperationRegistry};
pub use utils::error::{CalcError, Result};
