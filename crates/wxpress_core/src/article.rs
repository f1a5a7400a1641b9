//! Formatted article values exchanged with the content formatter and draft publisher.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Rendering switches passed to a [`ContentFormatter`](crate::ContentFormatter).
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct FormatOptions {
    /// Syntax highlight style for code blocks
    highlight_style: String,
    /// Honour front-matter metadata instead of discarding it
    preserve_frontmatter: bool,
    /// Fall back to the first body image when no cover is declared
    extract_cover: bool,
}

impl FormatOptions {
    /// Creates a set of rendering switches.
    pub fn new(
        highlight_style: impl Into<String>,
        preserve_frontmatter: bool,
        extract_cover: bool,
    ) -> Self {
        Self {
            highlight_style: highlight_style.into(),
            preserve_frontmatter,
            extract_cover,
        }
    }
}

/// Output of a content formatter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormattedArticle {
    /// Title declared by the document, if any
    pub title: Option<String>,
    /// Cover image reference, if any
    pub cover: Option<String>,
    /// Styled HTML body
    pub html: String,
}

/// A formatted article ready to become a draft.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct ArticleDraft {
    /// Article title
    title: String,
    /// Styled HTML body
    html: String,
    /// Cover image reference; empty when none was declared
    cover: String,
}

impl ArticleDraft {
    /// Creates an article draft.
    pub fn new(title: impl Into<String>, html: impl Into<String>, cover: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            html: html.into(),
            cover: cover.into(),
        }
    }
}

/// Theme catalog entry as reported to protocol callers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeSummary {
    /// Theme identifier accepted by `publish_article`
    pub id: String,
    /// Display name
    pub name: String,
    /// Short description
    pub description: String,
}
