//! CLI command definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "moodlog")]
#[command(about = "Daily mood diary with a rolling seven-day diagnosis", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Day to record for (e.g., today, yesterday, 3 days ago, 2025-01-17)
    #[arg(value_name = "TIME_REF")]
    pub time_ref: Option<String>,

    /// Mood to record instead of prompting (happy, relaxed, apathetic, sad, angry)
    #[arg(short, long)]
    pub mood: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize a new mood journal
    Init {
        /// Directory to initialize (default: current directory)
        #[arg(default_value = ".")]
        path: PathBuf,

        /// Diary file, relative to the journal directory
        #[arg(short, long)]
        diary: Option<String>,
    },

    /// Show the diagnosis for the most recent entries without recording
    Diagnose,

    /// List recorded entries, most recent first
    History {
        /// Maximum number of entries to show
        #[arg(short = 'n', long)]
        limit: Option<usize>,
    },

    /// View or modify configuration
    Config {
        /// Config key to get or set
        key: Option<String>,

        /// Value to set (if provided, sets the key)
        value: Option<String>,

        /// List all configuration
        #[arg(short, long)]
        list: bool,
    },
}
