//! CLI argument parsing and configuration

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Main CLI structure for folio
#[derive(Parser, Debug)]
#[command(
    name = "folio",
    version,
    about = "Interactive portfolio terminal with a quota-limited AI assistant"
)]
pub struct Cli {
    /// Configuration file path (defaults to ./folio.toml when present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// TOML profile file overriding the built-in profile
    #[arg(long, global = true)]
    pub profile: Option<PathBuf>,

    /// Disable color output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, global = true, default_value = "warn")]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Interactive portfolio shell (the default)
    Shell,

    /// Interactive chat with the AI assistant
    Chat,

    /// Single question; prints the assistant's reply and exits
    Ask {
        /// The question to ask
        question: Vec<String>,
    },

    /// Display bio and introduction
    About,

    /// Show technical skills
    Skills {
        /// Show all categories with all items
        #[arg(long)]
        list: bool,
    },

    /// Show work experience
    Experience,

    /// List projects
    Projects {
        /// Only projects whose tags contain this substring
        #[arg(long)]
        filter: Option<String>,
    },

    /// Show contact information
    Contact,

    /// Show GitHub profile link
    Github,

    /// Show education background
    Education,

    /// Show published articles
    Publications,

    /// Show awards and recognition
    Awards,

    /// Show certifications
    Certifications,
}
