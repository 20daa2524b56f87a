pub mod screenshots;

use std::net::SocketAddr;
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use screenshots::ScreenshotCommands;

#[derive(Debug, Parser)]
#[command(author, version, about = "Organise exam question screenshots", long_about = None)]
pub struct Cli {
    #[arg(
        long,
        global = true,
        env = "EXAMSHOT_URL",
        default_value = "http://localhost:3000"
    )]
    pub api_url: String,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Run the HTTP server
    Serve(ServeCommand),

    /// Manage screenshots
    Screenshot {
        #[command(subcommand)]
        command: ScreenshotCommands,
    },
}

#[derive(Debug, Args)]
pub struct ServeCommand {
    #[arg(
        long,
        env = "EXAMSHOT_STORAGE_PATH",
        default_value = "examshot.json"
    )]
    pub storage_path: PathBuf,

    #[arg(long, env = "EXAMSHOT_BIND_ADDRESS", default_value = "127.0.0.1:3000")]
    pub bind_address: SocketAddr,
}

pub(crate) fn print_json<T>(value: &T) -> anyhow::Result<()>
where
    T: serde::Serialize,
{
    let rendered = serde_json::to_string_pretty(value)?;
    println!("{rendered}");
    Ok(())
}
