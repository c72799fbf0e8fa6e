//! Front matter template rendering.
//!
//! Rendering uses [Handlebars](https://docs.rs/handlebars) with a
//! statically-known context: plain interpolation for the required fields,
//! `{{#if}}` blocks for the optional author/description lines, and one
//! `{{#each}}` over the custom fields. No other template features are
//! needed, but a user-supplied template gets the full engine.
//!
//! Two registry settings matter here:
//!
//! - escaping is disabled, because the output is markdown front matter, not
//!   HTML; `&` and quotes must pass through verbatim
//! - strict mode is on, so a custom template that references an undefined
//!   field fails with a render error instead of silently printing nothing

use handlebars::Handlebars;
use serde::Serialize;
use std::fs;
use std::path::Path;
use thiserror::Error;

/// The built-in post template. With no optional fields set it renders the
/// minimal Jekyll front matter block followed by a content placeholder.
pub const DEFAULT_TEMPLATE: &str = r"---
title: {{title}}
date: {{date}}
categories: [{{#each categories}}{{this}}{{#unless @last}}, {{/unless}}{{/each}}]
tags: [{{#each tags}}{{this}}{{#unless @last}}, {{/unless}}{{/each}}]
{{#if author}}author: {{author}}
{{/if}}{{#if description}}description: {{description}}
{{/if}}{{#each custom_fields}}{{key}}: {{value}}
{{/each}}---

<!-- Write your post content here -->

";

#[derive(Error, Debug)]
pub enum TemplateError {
    #[error("cannot read template file: {0}")]
    Io(#[from] std::io::Error),
    #[error("template is malformed: {0}")]
    Parse(#[from] handlebars::TemplateError),
    #[error("template rendering failed: {0}")]
    Render(#[from] handlebars::RenderError),
}

/// Template source: the built-in default or externally supplied text.
/// The renderer treats both as opaque template text.
#[derive(Debug, Clone)]
pub enum TemplateSpec {
    Default,
    Custom(String),
}

impl TemplateSpec {
    /// Load a custom template from a file.
    pub fn from_file(path: &Path) -> Result<Self, TemplateError> {
        Ok(TemplateSpec::Custom(fs::read_to_string(path)?))
    }

    pub fn text(&self) -> &str {
        match self {
            TemplateSpec::Default => DEFAULT_TEMPLATE,
            TemplateSpec::Custom(text) => text,
        }
    }
}

/// Everything a template can reference, in final rendered form.
///
/// Optional fields are always present: an empty `author`/`description` is
/// falsy in `{{#if}}`, so the corresponding line is simply omitted.
#[derive(Debug, Serialize)]
pub struct RenderContext {
    pub title: String,
    /// Pre-formatted front matter date, e.g. `2023-12-25 10:00:00 +0530`.
    pub date: String,
    /// Always `[top_category, sub_category]`.
    pub categories: [String; 2],
    pub tags: Vec<String>,
    pub author: String,
    pub description: String,
    /// Extra front matter fields, rendered as `key: value` lines in order.
    pub custom_fields: Vec<CustomField>,
}

#[derive(Debug, Serialize)]
pub struct CustomField {
    pub key: String,
    pub value: String,
}

/// Render the template against the context.
pub fn render(spec: &TemplateSpec, context: &RenderContext) -> Result<String, TemplateError> {
    let mut registry = Handlebars::new();
    registry.set_strict_mode(true);
    registry.register_escape_fn(handlebars::no_escape);
    registry.register_template_string("post", spec.text())?;
    Ok(registry.render("post", context)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn context() -> RenderContext {
        RenderContext {
            title: "Hello World".into(),
            date: "2023-12-25 10:00:00 +0530".into(),
            categories: ["Tech".into(), "AI".into()],
            tags: vec!["ml".into(), "ai".into()],
            author: String::new(),
            description: String::new(),
            custom_fields: Vec::new(),
        }
    }

    #[test]
    fn default_template_without_optionals() {
        let rendered = render(&TemplateSpec::Default, &context()).unwrap();
        assert_eq!(
            rendered,
            "---\n\
             title: Hello World\n\
             date: 2023-12-25 10:00:00 +0530\n\
             categories: [Tech, AI]\n\
             tags: [ml, ai]\n\
             ---\n\
             \n\
             <!-- Write your post content here -->\n\
             \n"
        );
    }

    #[test]
    fn optional_lines_appear_when_set() {
        let mut ctx = context();
        ctx.author = "John Doe".into();
        ctx.description = "A post about things".into();
        let rendered = render(&TemplateSpec::Default, &ctx).unwrap();
        assert!(rendered.contains("tags: [ml, ai]\nauthor: John Doe\ndescription: A post about things\n---\n"));
    }

    #[test]
    fn custom_fields_render_in_insertion_order() {
        let mut ctx = context();
        ctx.custom_fields = vec![
            CustomField { key: "series".into(), value: "rust-basics".into() },
            CustomField { key: "layout".into(), value: "wide".into() },
        ];
        let rendered = render(&TemplateSpec::Default, &ctx).unwrap();
        assert!(rendered.contains("tags: [ml, ai]\nseries: rust-basics\nlayout: wide\n---\n"));
    }

    #[test]
    fn single_tag_renders_without_separator() {
        let mut ctx = context();
        ctx.tags = vec!["solo".into()];
        let rendered = render(&TemplateSpec::Default, &ctx).unwrap();
        assert!(rendered.contains("tags: [solo]\n"));
    }

    #[test]
    fn values_are_not_html_escaped() {
        let mut ctx = context();
        ctx.title = "Q&A: Tips 'n Tricks".into();
        // ':' is forbidden in real titles but the renderer itself is opaque
        let rendered = render(&TemplateSpec::Default, &ctx).unwrap();
        assert!(rendered.contains("title: Q&A: Tips 'n Tricks\n"));
    }

    #[test]
    fn custom_template_text_is_used() {
        let spec = TemplateSpec::Custom("# {{title}} ({{date}})\n".into());
        let rendered = render(&spec, &context()).unwrap();
        assert_eq!(rendered, "# Hello World (2023-12-25 10:00:00 +0530)\n");
    }

    #[test]
    fn malformed_template_is_a_parse_error() {
        let spec = TemplateSpec::Custom("{{#if author}} unclosed".into());
        assert!(matches!(
            render(&spec, &context()),
            Err(TemplateError::Parse(_))
        ));
    }

    #[test]
    fn undefined_field_is_a_render_error() {
        let spec = TemplateSpec::Custom("{{no_such_field}}".into());
        assert!(matches!(
            render(&spec, &context()),
            Err(TemplateError::Render(_))
        ));
    }

    #[test]
    fn from_file_reads_template_text() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("post.hbs");
        fs::write(&path, "{{title}}").unwrap();
        let spec = TemplateSpec::from_file(&path).unwrap();
        assert_eq!(spec.text(), "{{title}}");

        assert!(matches!(
            TemplateSpec::from_file(&tmp.path().join("missing.hbs")),
            Err(TemplateError::Io(_))
        ));
    }
}
