use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use modscript_lib::Dialect;

mod cmd;
mod output;

/// modscript - read and write game configuration scripts
#[derive(Parser)]
#[command(name = "modscript")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse a modinfo.lua and print it as JSON
    Modinfo {
        /// Path to the modinfo.lua file
        file: PathBuf,

        /// Locale used to resolve translated strings
        #[arg(short, long, default_value = "")]
        locale: String,

        /// Mod folder name exposed to the script (defaults to the file's parent directory)
        #[arg(long)]
        folder_name: Option<String>,

        /// Write to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Parse a leveldataoverride.lua and print it as JSON
    Level {
        /// Path to the leveldataoverride.lua file
        file: PathBuf,

        /// Write to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Generate a leveldataoverride.lua from a JSON record
    Generate {
        /// Path to the JSON record (as printed by `modscript level`)
        file: PathBuf,

        /// Dialect to generate: master or cave
        #[arg(short, long, default_value_t = Dialect::Master)]
        dialect: Dialect,

        /// Write to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Parse a newline-delimited player id list and print it as JSON
    Players {
        /// Path to the list (adminlist.txt, whitelist.txt, ...)
        file: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)))
        .with_writer(std::io::stderr)
        .without_time()
        .init();

    match cli.command {
        Commands::Modinfo {
            file,
            locale,
            folder_name,
            output,
        } => cmd::cmd_modinfo(&file, &locale, folder_name, output.as_deref()),
        Commands::Level { file, output } => cmd::cmd_level(&file, output.as_deref()),
        Commands::Generate { file, dialect, output } => cmd::cmd_generate(&file, dialect, output.as_deref()),
        Commands::Players { file } => cmd::cmd_players(&file),
    }
}
