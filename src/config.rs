use std::path::PathBuf;
use clap::Parser;
use crate::commands::Command;

#[derive(Parser, Clone, Debug)]
#[clap(name = "eat-where-la-client", about = "Command line client for the Eat Where La places backend")]
pub struct Config {
    #[clap(env, long, default_value = "development")]
    pub environment: String,

    #[clap(env, long, default_value = crate::api::DEFAULT_API_URL)]
    pub api_url: String,

    /// JSON file standing in for browser local storage.
    #[clap(env, long, default_value = ".eat-where-la/storage.json")]
    pub auth_storage_path: PathBuf,

    #[clap(subcommand)]
    pub command: Command,
}
