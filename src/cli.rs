use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "guide-search")]
#[command(about = "Index and search a guide collection", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Search the collection and print the matching guides.
    Search {
        query: String,
        #[arg(short, long, default_value = "data/commands.json")]
        data: PathBuf,
        #[arg(short = 'm', long, default_value = "1")]
        min_token_length: usize,
        /// Emit matches as JSON instead of text.
        #[arg(long)]
        json: bool,
    },
    /// Render the collection (or search results) as HTML on stdout.
    Render {
        #[arg(short, long, default_value = "data/commands.json")]
        data: PathBuf,
        /// Render only the guides matching this query.
        #[arg(short, long)]
        query: Option<String>,
        #[arg(short = 'm', long, default_value = "1")]
        min_token_length: usize,
    },
    /// Print index statistics.
    Stats {
        #[arg(short, long, default_value = "data/commands.json")]
        data: PathBuf,
        #[arg(short = 'm', long, default_value = "1")]
        min_token_length: usize,
    },
}
