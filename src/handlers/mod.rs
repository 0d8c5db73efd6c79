//! Command handlers for the CLI.

mod scan;

pub use scan::{handle_languages, handle_scan};
