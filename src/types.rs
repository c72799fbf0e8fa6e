//! Shared request types passed from the CLI into the pipeline.

/// Raw input bundle, built once from CLI arguments.
///
/// Nothing here is trusted: every field goes through [`crate::validate`]
/// before it reaches naming or rendering.
#[derive(Debug, Clone)]
pub struct PostRequest {
    /// Post title as typed by the user.
    pub title: String,
    /// Primary category.
    pub top_category: String,
    /// Secondary category.
    pub sub_category: String,
    /// Comma-separated tag list.
    pub tags: String,
    /// Author, if given. Blank counts as absent.
    pub author: Option<String>,
    /// Description, if given. Blank counts as absent.
    pub description: Option<String>,
    /// Custom date in `YYYY-MM-DD` form. Absent means "now".
    pub date: Option<String>,
    /// Extra front matter fields in insertion order.
    pub custom_fields: Vec<(String, String)>,
    /// Overwrite an existing post without asking.
    pub force: bool,
}
