//! Code block colour schemes.
//!
//! Code is not tokenised; a style sets the block background and text colour.

/// A named code block colour scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HighlightStyle {
    /// Identifier accepted in [`FormatOptions`](wxpress_core::FormatOptions)
    pub id: &'static str,
    /// Block background colour
    pub background: &'static str,
    /// Block text colour
    pub foreground: &'static str,
}

/// All supported highlight styles.
pub const HIGHLIGHT_STYLES: &[HighlightStyle] = &[
    HighlightStyle { id: "solarized-light", background: "#fdf6e3", foreground: "#657b83" },
    HighlightStyle { id: "solarized-dark", background: "#002b36", foreground: "#839496" },
    HighlightStyle { id: "github", background: "#f6f8fa", foreground: "#24292e" },
    HighlightStyle { id: "github-dark", background: "#0d1117", foreground: "#c9d1d9" },
    HighlightStyle { id: "atom-one-light", background: "#fafafa", foreground: "#383a42" },
    HighlightStyle { id: "atom-one-dark", background: "#282c34", foreground: "#abb2bf" },
    HighlightStyle { id: "monokai", background: "#272822", foreground: "#f8f8f2" },
    HighlightStyle { id: "dracula", background: "#282a36", foreground: "#f8f8f2" },
    HighlightStyle { id: "xcode", background: "#ffffff", foreground: "#000000" },
];

/// Looks up a highlight style by id.
pub fn find_highlight_style(id: &str) -> Option<&'static HighlightStyle> {
    HIGHLIGHT_STYLES.iter().find(|style| style.id == id)
}

impl HighlightStyle {
    pub(crate) fn pre_style(&self) -> String {
        format!(
            "background: {}; color: {}; padding: 12px 16px; border-radius: 6px; overflow-x: auto; font-size: 13px; line-height: 1.6; margin: 16px 0",
            self.background, self.foreground
        )
    }
}
