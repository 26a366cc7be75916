use crate::config::toml_config::StripFileConfig;
use crate::config::{StripConfig, DEFAULT_MAX_FILE_BYTES};
use crate::utils::error::Result;
use clap::{Args, Parser, Subcommand};

#[derive(Debug, Clone, Parser)]
#[command(name = "decomment")]
#[command(about = "Strip comments from JavaScript, C++, Lua and Python sources")]
pub struct CliConfig {
    #[arg(long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, global = true, help = "Write logs to stderr as JSON lines")]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Run the container demo (the default)
    Demo,
    /// Remove comments from a source file
    Strip(StripArgs),
}

#[derive(Debug, Clone, Args)]
pub struct StripArgs {
    /// File to strip
    pub input: String,

    #[arg(short, long, help = "Write the result here instead of stdout")]
    pub output: Option<String>,

    #[arg(short, long, help = "Language id (javascript, cpp, lua, python)")]
    pub language: Option<String>,

    #[arg(long, help = "Overwrite the input file")]
    pub in_place: bool,

    #[arg(long, help = "TOML file with a [strip] table")]
    pub config: Option<String>,

    #[arg(long, help = "Refuse inputs larger than this many bytes")]
    pub max_file_bytes: Option<u64>,

    #[arg(long, help = "Print a JSON report to stderr")]
    pub report: bool,
}

impl CliConfig {
    pub fn command(&self) -> Command {
        self.command.clone().unwrap_or(Command::Demo)
    }
}

impl StripArgs {
    pub fn resolve(&self) -> Result<StripConfig> {
        let config = StripConfig {
            input: self.input.clone(),
            output: self.output.clone(),
            language: self.language.clone(),
            in_place: self.in_place,
            max_file_bytes: self.max_file_bytes.unwrap_or(DEFAULT_MAX_FILE_BYTES),
            report: self.report,
        };

        match &self.config {
            Some(path) => {
                tracing::debug!("Loading config file {}", path);
                let file = StripFileConfig::from_file(path)?;
                config.merge_file(&file, self.max_file_bytes)
            }
            None => Ok(config),
        }
    }
}
