//! MySQL Settings Diff CLI
//!
//! Compares two MySQL variable dumps and reports configuration deltas,
//! optionally annotated from a category table.

use anyhow::Result;
use clap::{Parser, Subcommand};
use env_logger::Env;
use std::path::PathBuf;

use mysql_settings_diff::commands::{execute_compare, hash_password, CompareArgs};
use mysql_settings_diff::utils::config::SCHEMA_VERSION;

/// MySQL Settings Diff - configuration delta reports for MySQL servers
#[derive(Parser, Debug)]
#[command(name = "settings-diff")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Compare a settings dump against a template and report differences
    Compare {
        /// New settings dump to be compared with the template
        #[arg(short, long)]
        new_settings: PathBuf,

        /// Template settings dump against which the new settings are compared
        #[arg(short, long)]
        template_settings: PathBuf,

        /// Category table with units and cnf parameter names
        #[arg(short, long)]
        categories: Option<PathBuf>,

        /// Write the report to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Emit the report as JSON (requires --output)
        #[arg(long)]
        json: bool,
    },

    /// Print a MySQL authentication string for a plaintext password
    HashPassword {
        /// Password to be hashed
        #[arg(long)]
        password: String,

        /// Authentication plugin to produce the hash for
        #[arg(long, default_value = "mysql_native_password")]
        plugin: String,
    },

    /// Display version information
    Version,
}

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    // Execute command
    match cli.command {
        Commands::Compare {
            new_settings,
            template_settings,
            categories,
            output,
            json,
        } => {
            let args = CompareArgs {
                new_settings,
                template_settings,
                categories,
                output,
                json,
            };

            execute_compare(args)?;
        }

        Commands::HashPassword { password, plugin } => {
            let auth_string = hash_password(&password, &plugin)?;
            println!("{auth_string}");
        }

        Commands::Version => {
            display_version();
        }
    }

    Ok(())
}

/// Display version information
///
/// **Private** - internal command implementation
fn display_version() {
    println!("MySQL Settings Diff v{}", env!("CARGO_PKG_VERSION"));
    println!("Report Schema: v{}", SCHEMA_VERSION);
    println!();
    println!("Compares MySQL variable dumps and reports configuration deltas.");
}
