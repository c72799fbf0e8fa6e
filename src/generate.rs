//! Post generation, the orchestrator for the whole pipeline.
//!
//! [`PostGenerator`] runs the stages strictly in order:
//!
//! ```text
//! validate → resolve timestamp → derive filename → overwrite check
//!          → render template → write file
//! ```
//!
//! Failure at any stage aborts before the write. The write is the only
//! filesystem mutation, and content is fully rendered in memory first, so
//! there are no partial files to clean up.
//!
//! The generator performs no I/O on stdin/stdout itself. The overwrite
//! confirmation and progress reporting are injected by the caller: `main`
//! wires them to an interactive prompt and stdout, tests pass closures.

use crate::config::{self, ConfigError};
use crate::naming::{self, EmptySlugError};
use crate::template::{self, CustomField, RenderContext, TemplateError, TemplateSpec};
use crate::timestamp::{self, TimestampError};
use crate::types::PostRequest;
use crate::validate::{self, ValidationError};
use chrono_tz::Tz;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("{0}")]
    Validation(#[from] ValidationError),
    #[error("{0}")]
    Config(#[from] ConfigError),
    #[error("{0}")]
    EmptySlug(#[from] EmptySlugError),
    #[error("{0}")]
    Timestamp(#[from] TimestampError),
    #[error("{0}")]
    Template(#[from] TemplateError),
}

/// Progress events emitted through the caller-supplied sink.
#[derive(Debug)]
pub enum Event {
    /// An existing post is about to be replaced because force was set.
    OverwritingExisting(PathBuf),
}

/// How a generation run ended. Declining an overwrite is a normal outcome,
/// not an error.
#[derive(Debug, PartialEq)]
pub enum Outcome {
    /// The post was written to this path.
    Written(PathBuf),
    /// The target existed and the user declined to overwrite it.
    Declined(PathBuf),
}

/// Generates one post per call. Construction performs the startup checks:
/// timezone resolution and an output directory writability probe.
#[derive(Debug)]
pub struct PostGenerator {
    output_dir: PathBuf,
    zone: Tz,
    template: TemplateSpec,
}

impl PostGenerator {
    pub fn new(
        output_dir: impl Into<PathBuf>,
        timezone: &str,
        template: TemplateSpec,
    ) -> Result<Self, ConfigError> {
        let zone = config::resolve_timezone(timezone)?;
        let output_dir = output_dir.into();
        probe_writable(&output_dir)?;
        Ok(Self {
            output_dir,
            zone,
            template,
        })
    }

    /// Run the full pipeline for one request.
    ///
    /// `confirm_overwrite` is consulted when the target file exists and
    /// `force` is off; returning `false` ends the run with
    /// [`Outcome::Declined`] and no write.
    pub fn generate(
        &self,
        request: &PostRequest,
        confirm_overwrite: &mut dyn FnMut(&Path) -> bool,
        report: &mut dyn FnMut(Event),
    ) -> Result<Outcome, GenerateError> {
        let post = validate::validate_request(request)?;
        let timestamp = timestamp::resolve(self.zone, post.date)?;
        let filename = naming::derive_filename(&post.title, timestamp.date_naive())?;
        let path = self.output_dir.join(&filename);

        if path.exists() {
            if request.force {
                report(Event::OverwritingExisting(path.clone()));
            } else if !confirm_overwrite(&path) {
                return Ok(Outcome::Declined(path));
            }
        }

        let context = RenderContext {
            title: post.title,
            date: timestamp::front_matter_date(&timestamp),
            categories: [post.top_category, post.sub_category],
            tags: post.tags,
            author: post.author,
            description: post.description,
            custom_fields: request
                .custom_fields
                .iter()
                .map(|(key, value)| CustomField {
                    key: key.clone(),
                    value: value.clone(),
                })
                .collect(),
        };

        let content = template::render(&self.template, &context)?;
        fs::write(&path, normalize_line_endings(&content))?;
        Ok(Outcome::Written(path))
    }
}

/// The written file always uses `\n`, even if a custom template carried
/// Windows line endings.
fn normalize_line_endings(content: &str) -> String {
    content.replace("\r\n", "\n")
}

/// Create the output directory and probe writability with a marker file,
/// so permission problems surface before any generation work.
fn probe_writable(dir: &Path) -> Result<(), ConfigError> {
    let attempt = (|| {
        fs::create_dir_all(dir)?;
        let marker = dir.join(".write-check");
        fs::write(&marker, b"")?;
        fs::remove_file(&marker)
    })();
    attempt.map_err(|source| ConfigError::OutputDirNotWritable {
        dir: dir.to_path_buf(),
        source,
    })
}
