//! Command-line arguments.

use std::path::PathBuf;

use clap::Parser;

use galaxy_export_core::{ExportOptions, TagSelection};

#[derive(Parser, Debug)]
#[command(name = "galaxy-export")]
#[command(about = "Export a GOG Galaxy 2.0 library to a spreadsheet", long_about = None)]
pub struct Cli {
    /// Path to the Galaxy database (galaxy-2.0.db)
    pub db_path: PathBuf,

    /// Filename of the output file, without extension
    #[arg(short, long, default_value = "galaxy-library")]
    pub output: String,

    /// Which game tags to include. Given without values, all tags are included
    #[arg(short, long, num_args = 0.., value_name = "Tag")]
    pub tags: Option<Vec<String>>,

    /// Which platforms to include (e.g. steam gog epic). All by default
    #[arg(short, long, num_args = 1.., value_name = "Platform")]
    pub platforms: Option<Vec<String>>,

    /// Enable verbose/debug logging (timestamps + debug-level messages)
    #[arg(short, long)]
    pub verbose: bool,

    /// Only show warnings and errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

impl Cli {
    pub fn export_options(&self) -> ExportOptions {
        ExportOptions::new()
            .platforms(self.platforms.clone())
            .tags(TagSelection::from_arg(self.tags.clone()))
    }
}
