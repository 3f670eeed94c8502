//! Terminal front end for the postdeck composer.
//!
//! Each invocation restores the saved draft, applies one command and lets
//! the draft store persist the result.

pub mod cli;
pub mod config;
pub mod session;

pub use cli::{Cli, Command};
pub use config::{CONFIG_FILE_NAME, ComposerConfig, ContainerConfig};
pub use session::{Session, render_state};
