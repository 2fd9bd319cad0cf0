use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Main CLI parser structure
#[derive(Parser)]
#[command(name = "petalpress")]
#[command(about = "Blog front-end that renders portable-text posts from a hosted content store", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Configuration file (defaults to ./petalpress.toml|yml|yaml)
    #[arg(short, long, value_name = "CONFIG_FILE")]
    pub config: Option<PathBuf>,

    /// Show the full backtrace when an error occurs
    #[arg(short, long, default_value_t = false)]
    pub trace: bool,

    /// Enable verbose debugging
    #[arg(short = 'g', long, default_value_t = false)]
    pub debug: bool,
}

/// Subcommands for the CLI
#[derive(Subcommand)]
pub enum Commands {
    /// Build every published post into static pages plus a sitemap
    #[command(alias = "b")]
    Build {
        /// Destination directory (defaults to ./_site)
        #[arg(short, long, value_name = "DIR")]
        destination: Option<PathBuf>,

        /// Include draft revisions of posts
        #[arg(short = 'D', long, default_value_t = false)]
        drafts: bool,

        /// Silence output
        #[arg(short, long, default_value_t = false)]
        quiet: bool,

        /// Print verbose output
        #[arg(short = 'V', long, default_value_t = false)]
        verbose: bool,
    },

    /// Render one post as an HTML page
    #[command(alias = "r")]
    Render {
        /// Slug of the post to render
        slug: String,

        /// Include draft revisions of the post
        #[arg(short = 'D', long, default_value_t = false)]
        drafts: bool,

        /// Write the page here instead of stdout
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Print the table of contents of one post as a markdown list
    #[command(alias = "o")]
    Outline {
        /// Slug of the post to outline
        slug: String,

        /// Include draft revisions of the post
        #[arg(short = 'D', long, default_value_t = false)]
        drafts: bool,
    },

    /// Suggest tags for one post based on its content
    Tags {
        /// Slug of the post to tag
        slug: String,

        /// Include draft revisions of the post
        #[arg(short = 'D', long, default_value_t = false)]
        drafts: bool,
    },
}
