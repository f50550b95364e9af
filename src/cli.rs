//! Command-line interface definition for Fabula
//!
//! This module defines the CLI structure using clap's derive API,
//! providing an interactive session plus one-shot generate and list
//! commands.

use clap::{Parser, Subcommand};

/// Fabula - client for an AI story generation service
///
/// Submit a topic, read the generated story, and browse previously
/// generated stories from the backend.
#[derive(Parser, Debug, Clone)]
#[command(name = "fabula")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "config/config.yaml")]
    pub config: Option<String>,

    /// Override the story API base URL
    #[arg(long)]
    pub api_base: Option<String>,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Command to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands for Fabula
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Start an interactive story session
    Chat,

    /// Generate a single story from a prompt
    Generate {
        /// Topic to generate a story about
        #[arg(short, long)]
        prompt: String,

        /// Print the raw story object as JSON
        #[arg(long)]
        json: bool,
    },

    /// List previously generated stories
    List {
        /// Case-insensitive substring filter over prompt and story text
        #[arg(short, long)]
        query: Option<String>,

        /// Print the stories as JSON
        #[arg(long)]
        json: bool,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
