pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::{CliConfig, Command};

pub use adapters::LocalStorage;
pub use config::StripConfig;
pub use core::{demo::run_demo, engine::StripEngine, stripper::strip_comments};
pub use domain::{language::Language, model::Container};
pub use utils::error::{DecommentError, Result};
