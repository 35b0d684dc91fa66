pub mod config;
pub mod core;
pub mod utils;

pub use config::{Cli, Command, Testament};
pub use core::{client::ApiClient, request::RequestSpec};
pub use utils::error::{CliError, Result};
