//! CLI definitions and entry point

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::commands;
use facegate::output::OutputMode;

/// facegate - attendance capture with face verification
#[derive(Parser, Debug)]
#[command(
    name = "facegate",
    version,
    about = "Attendance capture with face verification",
    long_about = "Record check-in/check-out against a face-recognition backend.\n\n\
                  A capture is only accepted for the logged-in subject: the client\n\
                  re-checks the recognized identity even when the server reports success."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Submit a capture frame for check-in/check-out
    Check {
        /// Path to the encoded capture frame (webcam snapshot)
        image: PathBuf,

        /// Skip the post-success delay before returning
        #[arg(long)]
        no_wait: bool,
    },

    /// Manage registered face samples
    Faces {
        #[command(subcommand)]
        action: FacesAction,
    },

    /// Show today's attendance records
    Today,

    /// Manage the stored session (subject id and API token)
    Session {
        #[command(subcommand)]
        action: SessionAction,
    },

    /// Show version
    Version,
}

#[derive(Subcommand, Debug)]
pub enum FacesAction {
    /// Register a new face sample
    Add {
        /// Path to the encoded sample image
        image: PathBuf,

        /// Subject to register for (defaults to the session subject)
        #[arg(short, long)]
        subject: Option<String>,
    },

    /// List registered face samples
    List {
        /// Subject to list (defaults to the session subject)
        #[arg(short, long)]
        subject: Option<String>,
    },

    /// Remove a face sample
    Remove {
        /// Face sample id
        id: i64,
    },
}

#[derive(Subcommand, Debug)]
pub enum SessionAction {
    /// Store the logged-in subject id and API token
    Set {
        /// Subject id (employee id)
        subject_id: String,

        /// Backend API token
        #[arg(short, long)]
        token: Option<String>,
    },

    /// Show the stored session
    Show,

    /// Clear the stored session
    Clear,
}

/// Run the CLI
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    let output_mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    match cli.command {
        Some(Command::Check { image, no_wait }) => commands::check(&image, no_wait, output_mode),
        Some(Command::Faces { action }) => commands::faces(action, output_mode),
        Some(Command::Today) => commands::today(output_mode),
        Some(Command::Session { action }) => commands::session(action, output_mode),
        Some(Command::Version) => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": env!("CARGO_PKG_VERSION")
                    })
                );
            } else {
                println!("facegate v{}", env!("CARGO_PKG_VERSION"));
            }
            Ok(())
        },
        None => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": env!("CARGO_PKG_VERSION"),
                        "hint": "Use --help for usage"
                    })
                );
            } else {
                println!("facegate v{}", env!("CARGO_PKG_VERSION"));
                println!("\nRun 'facegate --help' for usage");
                println!("Run 'facegate session set <subject-id>' to get started");
            }
            Ok(())
        },
    }
}
