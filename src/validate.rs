//! Input validation for all user-supplied fields.
//!
//! Every field of a [`PostRequest`] passes through one of the pure
//! `validate_*` functions below before any other stage sees it. Each function
//! returns the normalized value or a [`ValidationError`] naming the violated
//! constraint. Nothing in this module touches the filesystem.
//!
//! ## Constraints
//!
//! | Field       | Rule |
//! |-------------|------|
//! | title       | 1-200 chars, none of `/ \ : * ? " < > |` |
//! | category    | 1-50 chars, letters/digits/space/hyphen/underscore |
//! | tags        | 1-10 entries, each 1-30 chars of letters/digits/hyphen/underscore, lowercased |
//! | date        | strict `YYYY-MM-DD` |
//! | author      | up to 100 chars, blank allowed |
//! | description | up to 500 chars, blank allowed |
//!
//! Tags keep their first-occurrence order and duplicates are preserved;
//! deduplication is the site generator's call, not ours.

use crate::types::PostRequest;
use chrono::NaiveDate;
use thiserror::Error;

/// Characters that would break filenames or front matter if left in a title.
const FORBIDDEN_TITLE_CHARS: &[char] = &['/', '\\', ':', '*', '?', '"', '<', '>', '|'];

const MAX_TITLE_CHARS: usize = 200;
const MAX_CATEGORY_CHARS: usize = 50;
const MAX_TAG_CHARS: usize = 30;
const MAX_TAGS: usize = 10;
const MAX_AUTHOR_CHARS: usize = 100;
const MAX_DESCRIPTION_CHARS: usize = 500;

#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("post title cannot be empty")]
    EmptyTitle,
    #[error("post title cannot exceed 200 characters")]
    TitleTooLong,
    #[error("title contains forbidden character '{0}'")]
    ForbiddenTitleCharacter(char),
    #[error("{0} cannot be empty")]
    EmptyCategory(&'static str),
    #[error("{0} cannot exceed 50 characters")]
    CategoryTooLong(&'static str),
    #[error("{0} can only contain letters, numbers, spaces, hyphens, and underscores")]
    InvalidCategoryCharacter(&'static str),
    #[error("tag '{0}' exceeds the 30 character limit")]
    TagTooLong(String),
    #[error("tag '{0}' can only contain letters, numbers, hyphens, and underscores")]
    InvalidTagCharacter(String),
    #[error("at least one tag is required")]
    NoTags,
    #[error("maximum 10 tags allowed, got {0}")]
    TooManyTags(usize),
    #[error("date '{0}' must be in YYYY-MM-DD format (e.g. 2023-12-25)")]
    InvalidDate(String),
    #[error("author name cannot exceed 100 characters")]
    AuthorTooLong,
    #[error("description cannot exceed 500 characters")]
    DescriptionTooLong,
}

/// Post fields after validation. Every field satisfies its constraint.
#[derive(Debug, Clone)]
pub struct ValidatedPost {
    pub title: String,
    pub top_category: String,
    pub sub_category: String,
    pub tags: Vec<String>,
    /// Empty when no author was given.
    pub author: String,
    /// Empty when no description was given.
    pub description: String,
    /// Parsed custom date; `None` means "now".
    pub date: Option<NaiveDate>,
}

/// Validate every field of a request, failing on the first violation.
pub fn validate_request(request: &PostRequest) -> Result<ValidatedPost, ValidationError> {
    Ok(ValidatedPost {
        title: validate_title(&request.title)?,
        top_category: validate_category(&request.top_category, "top category")?,
        sub_category: validate_category(&request.sub_category, "sub category")?,
        tags: validate_tags(&request.tags)?,
        author: validate_author(request.author.as_deref().unwrap_or(""))?,
        description: validate_description(request.description.as_deref().unwrap_or(""))?,
        date: request.date.as_deref().map(validate_date).transpose()?,
    })
}

/// Trim and check a post title.
pub fn validate_title(title: &str) -> Result<String, ValidationError> {
    let title = title.trim();
    if title.is_empty() {
        return Err(ValidationError::EmptyTitle);
    }
    if title.chars().count() > MAX_TITLE_CHARS {
        return Err(ValidationError::TitleTooLong);
    }
    if let Some(ch) = title.chars().find(|c| FORBIDDEN_TITLE_CHARS.contains(c)) {
        return Err(ValidationError::ForbiddenTitleCharacter(ch));
    }
    Ok(title.to_string())
}

/// Trim and check a category. `label` names the field in error messages
/// ("top category" / "sub category").
pub fn validate_category(category: &str, label: &'static str) -> Result<String, ValidationError> {
    let category = category.trim();
    if category.is_empty() {
        return Err(ValidationError::EmptyCategory(label));
    }
    if category.chars().count() > MAX_CATEGORY_CHARS {
        return Err(ValidationError::CategoryTooLong(label));
    }
    if !category
        .chars()
        .all(|c| c.is_alphanumeric() || matches!(c, ' ' | '-' | '_'))
    {
        return Err(ValidationError::InvalidCategoryCharacter(label));
    }
    Ok(category.to_string())
}

/// Split a comma-separated tag list, lowercasing and trimming each entry.
///
/// Empty pieces (from `a,,b` or stray commas) are dropped. Order and
/// duplicates are preserved.
pub fn validate_tags(tags: &str) -> Result<Vec<String>, ValidationError> {
    let mut valid = Vec::new();
    for piece in tags.split(',') {
        let tag = piece.trim().to_lowercase();
        if tag.is_empty() {
            continue;
        }
        if tag.chars().count() > MAX_TAG_CHARS {
            return Err(ValidationError::TagTooLong(tag));
        }
        if !tag.chars().all(|c| c.is_alphanumeric() || matches!(c, '-' | '_')) {
            return Err(ValidationError::InvalidTagCharacter(tag));
        }
        valid.push(tag);
    }
    if valid.is_empty() {
        return Err(ValidationError::NoTags);
    }
    if valid.len() > MAX_TAGS {
        return Err(ValidationError::TooManyTags(valid.len()));
    }
    Ok(valid)
}

/// Parse a custom date. Only strict `YYYY-MM-DD` is accepted.
pub fn validate_date(date: &str) -> Result<NaiveDate, ValidationError> {
    NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .map_err(|_| ValidationError::InvalidDate(date.to_string()))
}

/// Blank input yields an empty author, which renders no `author:` line.
pub fn validate_author(author: &str) -> Result<String, ValidationError> {
    let author = author.trim();
    if author.chars().count() > MAX_AUTHOR_CHARS {
        return Err(ValidationError::AuthorTooLong);
    }
    Ok(author.to_string())
}

/// Blank input yields an empty description, which renders no line.
pub fn validate_description(description: &str) -> Result<String, ValidationError> {
    let description = description.trim();
    if description.chars().count() > MAX_DESCRIPTION_CHARS {
        return Err(ValidationError::DescriptionTooLong);
    }
    Ok(description.to_string())
}
