use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "imgvault")]
#[command(author, version, about = "Image upload and retrieval service")]
pub struct Cli {
    /// Path to config file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the HTTP server
    Start {
        /// Host to bind to (overrides config)
        #[arg(long)]
        host: Option<String>,

        /// Port to listen on (overrides config)
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Upload a single image file into the configured store
    Upload {
        /// Image file to upload
        #[arg(required = true)]
        file: PathBuf,
    },

    /// Retrieve a stored image by ID
    Retrieve {
        /// Image identifier returned at upload time
        #[arg(required = true)]
        id: String,

        /// Convert the image to this format (png, jpeg, gif)
        #[arg(short, long)]
        format: Option<String>,

        /// Output path (defaults to {id}.{format} in the current directory)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Validate configuration file
    Validate {
        /// Config file to validate (uses default if not specified)
        config: Option<PathBuf>,
    },

    /// Display version information
    Version,
}
