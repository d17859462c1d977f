use anyhow::Result;
use clap::{Parser, Subcommand};

pub mod commands;

use crate::config::{DEFAULT_ICONS_URL, DEFAULT_PAGE_TITLE, DEFAULT_STYLESHEET_URL, PageSettings};
use commands::{RenderRequest, render, sample};

#[derive(Parser, Debug)]
#[command(name = "donation-analytics")]
#[command(about = "Render the donation analytics panel from a data snapshot")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render an analytics snapshot to HTML
    ///
    /// The snapshot is a JSON object with the panel inputs:
    ///   { "data": { ... }, "isLoading": false, "error": { "data": { "message": "..." } } }
    /// Every key is optional.
    Render {
        /// Path to the snapshot JSON file, or "-" for stdin
        #[arg(short, long, default_value = "-")]
        snapshot: String,

        /// Path of the HTML file to write, or "-" for stdout
        #[arg(short, long, default_value = "-")]
        output: String,

        /// Render the loading state regardless of the snapshot
        #[arg(long)]
        loading: bool,

        /// Write only the panel markup, without the page shell
        #[arg(long)]
        fragment: bool,

        /// Page title
        #[arg(long, env = "DONATION_ANALYTICS_TITLE", default_value = DEFAULT_PAGE_TITLE)]
        title: String,

        /// CSS framework stylesheet URL
        #[arg(long, env = "DONATION_ANALYTICS_STYLESHEET", default_value = DEFAULT_STYLESHEET_URL)]
        stylesheet: String,

        /// Icon font stylesheet URL
        #[arg(long, env = "DONATION_ANALYTICS_ICONS", default_value = DEFAULT_ICONS_URL)]
        icons: String,
    },
    /// Print the built-in sample snapshot as JSON
    Sample {
        /// Path of the JSON file to write, or "-" for stdout
        #[arg(short, long, default_value = "-")]
        output: String,
    },
}

impl Cli {
    pub async fn run(self) -> Result<()> {
        match self.command {
            Commands::Render {
                snapshot,
                output,
                loading,
                fragment,
                title,
                stylesheet,
                icons,
            } => {
                let request = RenderRequest {
                    snapshot_path: snapshot,
                    output_path: output,
                    force_loading: loading,
                    fragment,
                    page: PageSettings {
                        title,
                        stylesheet_url: stylesheet,
                        icons_url: icons,
                    },
                };
                render(&request).await?;
            }
            Commands::Sample { output } => {
                sample(&output)?;
            }
        }
        Ok(())
    }
}
