//! CLI output formatting.
//!
//! Format functions are pure, no I/O and no side effects; `main` decides
//! where each line goes (stdout for results, stderr for the prompt).

use crate::generate::{Event, Outcome};
use std::path::Path;

/// Format a progress event from the generator.
pub fn format_event(event: &Event) -> String {
    match event {
        Event::OverwritingExisting(path) => {
            format!("Overwriting existing post: {}", file_name(path))
        }
    }
}

/// Format the final line for a finished run.
pub fn format_outcome(outcome: &Outcome) -> String {
    match outcome {
        Outcome::Written(path) => format!("Post created: {}", path.display()),
        Outcome::Declined(_) => "Operation cancelled, nothing written".to_string(),
    }
}

/// The overwrite confirmation question, without trailing newline.
pub fn overwrite_prompt(path: &Path) -> String {
    format!("Post '{}' already exists. Overwrite? [y/N] ", file_name(path))
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
