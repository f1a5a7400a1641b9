//! YAML front matter.

use serde::Deserialize;
use wxpress_error::{WxpressError, WxpressErrorKind, WxpressResult};

/// Metadata declared at the top of a Markdown document.
///
/// Unrecognised keys are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct FrontMatter {
    /// Article title
    pub title: Option<String>,
    /// Cover image reference
    pub cover: Option<String>,
    /// Author name
    pub author: Option<String>,
    /// Digest shown in share cards
    pub description: Option<String>,
}

impl FrontMatter {
    /// Parses a YAML block. A blank block yields empty metadata.
    pub fn parse(yaml: &str) -> WxpressResult<Self> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(yaml).map_err(|e| {
            WxpressError::new(WxpressErrorKind::Format(format!(
                "invalid front matter: {}",
                e
            )))
        })
    }
}

/// Splits a leading `---` delimited block from the document body.
///
/// Returns `(None, markdown)` when the document has no closed block.
pub(crate) fn split(markdown: &str) -> (Option<&str>, &str) {
    let Some(rest) = markdown
        .strip_prefix("---\n")
        .or_else(|| markdown.strip_prefix("---\r\n"))
    else {
        return (None, markdown);
    };

    let mut offset = 0;
    for line in rest.split_inclusive('\n') {
        if line.trim_end() == "---" {
            return (Some(&rest[..offset]), &rest[offset + line.len()..]);
        }
        offset += line.len();
    }
    (None, markdown)
}
