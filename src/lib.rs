//! # mkpost
//!
//! Generate Jekyll-style markdown posts with validated YAML front matter.
//! One invocation produces one file: CLI arguments in, a dated, slugged
//! `.md` file with a front matter header out.
//!
//! # Architecture: One Linear Pass
//!
//! Every run is a single synchronous pipeline; failure at any stage aborts
//! before the file write, which is the only side effect:
//!
//! ```text
//! 1. validate    raw fields     →  ValidatedPost      (constraints enforced)
//! 2. timestamp   zone + date    →  DateTime<Tz>       (DST-correct offset)
//! 3. naming      title + date   →  YYYY-MM-DD-slug.md (URL-safe filename)
//! 4. template    context        →  rendered text      (Handlebars)
//! 5. write       rendered text  →  one file on disk
//! ```
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`validate`] | Per-field validation: title, categories, tags, date, author, description |
//! | [`timestamp`] | Timezone-aware timestamp resolution via the IANA database |
//! | [`naming`] | Slug derivation and Jekyll filename composition |
//! | [`template`] | Built-in or user-supplied Handlebars template rendering |
//! | [`generate`] | Orchestrator: runs the stages, overwrite check, file write |
//! | [`config`] | Optional `mkpost.toml` defaults (output dir, timezone, author) |
//! | [`types`] | The raw `PostRequest` built from CLI input |
//! | [`output`] | Pure CLI output formatting, printing happens in `main` |
//!
//! # Design Decisions
//!
//! ## Validate Everything Before Touching Disk
//!
//! All user input is checked up front and the post content is rendered fully
//! in memory before the write. There is exactly one filesystem mutation per
//! run, so an error can never leave a partial post behind.
//!
//! ## Handlebars Over a Hand-Rolled Formatter
//!
//! The front matter needs interpolation, two optional blocks, and one
//! repeated block, and users can supply their own template file. That is
//! precisely the Handlebars feature set, with strict mode turning a typo'd
//! field name into an error instead of silent empty output.
//!
//! ## No Ambient State
//!
//! The generator takes the overwrite confirmation and progress sink as
//! arguments instead of reading stdin or configuring a global logger.
//! Interactive behavior lives entirely in `main`, which keeps the whole
//! pipeline testable without a terminal.

pub mod config;
pub mod generate;
pub mod naming;
pub mod output;
pub mod template;
pub mod timestamp;
pub mod types;
pub mod validate;
