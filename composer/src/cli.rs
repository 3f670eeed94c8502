//! Command-line arguments.

use crate::config::CONFIG_FILE_NAME;
use clap::{Parser, Subcommand};
use postdeck_types::SlideId;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "postdeck")]
#[command(about = "Compose carousel posts from the terminal", version)]
pub struct Cli {
    /// Path to the config file
    #[arg(short, long, default_value = CONFIG_FILE_NAME)]
    pub config: PathBuf,

    /// Directory holding the draft (overrides the config file)
    #[arg(long)]
    pub draft_dir: Option<PathBuf>,

    /// Enable verbose debug logging
    #[arg(short, long)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Print the draft
    Show,
    /// Rename the post; an empty title resets it
    Title { text: String },
    /// Append an empty slide and select it
    AddSlide,
    /// Delete a slide
    DeleteSlide { id: SlideId },
    /// Select a slide
    Select { id: SlideId },
    /// Drag slide `active` onto the position of slide `over`
    Move { active: SlideId, over: SlideId },
    /// Tag the selected slide with a handle or profile link
    Tag { raw: String },
    /// Remove a tag from the selected slide
    Untag { handle: String },
    /// Pick a file and apply its crop to the selected slide
    Attach {
        /// Cropped image payload written to the slide
        payload: String,
        /// Size of the picked file in bytes
        #[arg(long)]
        size: u64,
        /// MIME type of the picked file
        #[arg(long)]
        mime: String,
    },
    /// Run the full editor on the selected slide; no payload closes without saving
    Edit { payload: Option<String> },
    /// Compute the canvas layout for a container size
    Layout {
        #[arg(long)]
        width: Option<f64>,
        #[arg(long)]
        height: Option<f64>,
        #[arg(long)]
        padding: Option<f64>,
    },
    /// Toggle the sidebar
    Sidebar,
    /// Throw away the saved draft
    Discard,
    /// Push the draft to the backend
    Publish,
}
