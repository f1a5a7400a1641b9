//! Markdown formatter for wxpress.
//!
//! Renders Markdown into HTML the platform's article editor accepts: every
//! block element carries its theme styling inline, since `<style>` blocks are
//! stripped on import. Also owns the theme catalog reported by `list_themes`.
//!
//! ```
//! use wxpress_core::FormatOptions;
//! use wxpress_format::MarkdownFormatter;
//!
//! let formatter = MarkdownFormatter::new();
//! let options = FormatOptions::new("solarized-light", true, true);
//! let article = formatter
//!     .render("---\ntitle: Hello\n---\n# Hi\n\n![](cover.png)", Some("lapis"), &options)
//!     .unwrap();
//! assert_eq!(article.title.as_deref(), Some("Hello"));
//! assert_eq!(article.cover.as_deref(), Some("cover.png"));
//! assert!(article.html.starts_with("<section"));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod frontmatter;
mod highlight;
mod render;
mod themes;

pub use frontmatter::FrontMatter;
pub use highlight::{HIGHLIGHT_STYLES, HighlightStyle, find_highlight_style};
pub use themes::{DEFAULT_THEME, HeadingDecoration, THEMES, Theme, find_theme};

use async_trait::async_trait;
use tracing::{debug, instrument};
use wxpress_core::{ContentFormatter, FormatOptions, FormattedArticle, ThemeSummary};
use wxpress_error::{WxpressError, WxpressErrorKind, WxpressResult};

/// Built-in [`ContentFormatter`].
#[derive(Debug, Clone, Copy, Default)]
pub struct MarkdownFormatter;

impl MarkdownFormatter {
    /// Creates a formatter.
    pub fn new() -> Self {
        Self
    }

    /// Renders a Markdown document.
    ///
    /// `theme_id` of `None` or blank selects the default theme.
    #[instrument(skip(self, markdown, options), fields(len = markdown.len(), highlight = %options.highlight_style()))]
    pub fn render(
        &self,
        markdown: &str,
        theme_id: Option<&str>,
        options: &FormatOptions,
    ) -> WxpressResult<FormattedArticle> {
        let theme = match theme_id.map(str::trim).filter(|id| !id.is_empty()) {
            None => find_theme(DEFAULT_THEME),
            Some(id) => find_theme(id),
        }
        .ok_or_else(|| {
            WxpressError::new(WxpressErrorKind::Format(format!(
                "unknown theme '{}'",
                theme_id.unwrap_or_default()
            )))
        })?;

        let highlight = find_highlight_style(options.highlight_style()).ok_or_else(|| {
            WxpressError::new(WxpressErrorKind::Format(format!(
                "unknown highlight style '{}'",
                options.highlight_style()
            )))
        })?;

        let (yaml, body) = frontmatter::split(markdown);
        let meta = match yaml {
            Some(yaml) if *options.preserve_frontmatter() => FrontMatter::parse(yaml)?,
            _ => FrontMatter::default(),
        };

        let rendered = render::render(body, theme, highlight);
        let cover = meta
            .cover
            .filter(|cover| !cover.is_empty())
            .or_else(|| {
                if *options.extract_cover() {
                    rendered.first_image.clone()
                } else {
                    None
                }
            });

        debug!(
            theme = theme.id,
            has_title = meta.title.is_some(),
            has_cover = cover.is_some(),
            "Rendered article"
        );

        Ok(FormattedArticle {
            title: meta.title.filter(|title| !title.is_empty()),
            cover,
            html: rendered.html,
        })
    }
}

#[async_trait]
impl ContentFormatter for MarkdownFormatter {
    async fn format(
        &self,
        markdown: &str,
        theme_id: Option<&str>,
        options: &FormatOptions,
    ) -> WxpressResult<FormattedArticle> {
        self.render(markdown, theme_id, options)
    }

    fn themes(&self) -> WxpressResult<Vec<ThemeSummary>> {
        Ok(THEMES.iter().map(Theme::summary).collect())
    }
}
