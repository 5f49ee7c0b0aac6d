//! CLI command definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "annotext")]
#[command(about = "Hashtag, mention and link annotation for user text", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize a new workspace
    Init {
        /// Directory to initialize (default: current directory)
        #[arg(default_value = ".")]
        path: PathBuf,
    },

    /// View or modify workspace configuration
    Config {
        /// Config key to get or set
        key: Option<String>,

        /// Value to set (if provided, sets the key)
        value: Option<String>,

        /// List all configuration
        #[arg(short, long)]
        list: bool,
    },

    /// Normalize tags into storage slugs
    Normalize {
        /// Raw tags
        #[arg(required = true)]
        tags: Vec<String>,

        /// Fail when a tag normalizes to nothing
        #[arg(long)]
        strict: bool,

        /// Print each slug once, in first-seen order
        #[arg(short, long, conflicts_with = "strict")]
        unique: bool,
    },

    /// Show tags in display form
    Display {
        /// Raw or normalized tags
        #[arg(required = true)]
        tags: Vec<String>,
    },

    /// List distinct hashtags, mentions and links in text
    Extract {
        /// Input file (default: stdin)
        file: Option<PathBuf>,

        /// Print JSON
        #[arg(long)]
        json: bool,
    },

    /// Split text into plain, hashtag, mention and link segments
    Segment {
        /// Input file (default: stdin)
        file: Option<PathBuf>,

        /// Print JSON
        #[arg(long)]
        json: bool,
    },

    /// Render text with hashtags, mentions and links as links
    Render {
        /// Input file (default: stdin)
        file: Option<PathBuf>,

        /// Output format (html, markdown)
        #[arg(short, long, default_value = "html")]
        format: String,
    },

    /// Count hashtags and mentions across workspace documents
    Index {
        /// Print JSON
        #[arg(long)]
        json: bool,
    },
}
