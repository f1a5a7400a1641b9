//! Built-in article themes.
//!
//! A theme is a small palette; element styles are derived from it when an
//! article is rendered. CSS values must not contain double quotes since they
//! are written into `style="..."` attributes.

use wxpress_core::ThemeSummary;

/// Theme used when a caller does not choose one.
pub const DEFAULT_THEME: &str = "default";

/// How headings are decorated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeadingDecoration {
    /// Bottom border in the accent colour
    Underline,
    /// Left bar in the accent colour
    LeftBar,
    /// Accent-coloured background with light text
    Filled,
    /// Centered text, no border
    Centered,
}

/// A named article theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    /// Identifier accepted by `publish_article`
    pub id: &'static str,
    /// Display name
    pub name: &'static str,
    /// Short description
    pub description: &'static str,
    /// Accent colour for headings, links and markers
    pub accent: &'static str,
    /// Body text colour
    pub text: &'static str,
    /// Background for quotes and inline code
    pub tint: &'static str,
    /// Heading decoration
    pub headings: HeadingDecoration,
}

/// All built-in themes, default first.
pub const THEMES: &[Theme] = &[
    Theme {
        id: "default",
        name: "Default",
        description: "Clean black and green layout",
        accent: "#009874",
        text: "#333333",
        tint: "#f7f7f7",
        headings: HeadingDecoration::Underline,
    },
    Theme {
        id: "orangeheart",
        name: "Orange Heart",
        description: "Warm orange headings with filled title bars",
        accent: "#ef7060",
        text: "#2b2b2b",
        tint: "#fff5f3",
        headings: HeadingDecoration::Filled,
    },
    Theme {
        id: "rainbow",
        name: "Rainbow",
        description: "Bright multi-colour accents",
        accent: "#e6645c",
        text: "#444444",
        tint: "#fdf3e7",
        headings: HeadingDecoration::LeftBar,
    },
    Theme {
        id: "lapis",
        name: "Lapis",
        description: "Calm blue with left-barred headings",
        accent: "#3f51b5",
        text: "#40464f",
        tint: "#f3f5fc",
        headings: HeadingDecoration::LeftBar,
    },
    Theme {
        id: "pie",
        name: "Pie",
        description: "Minimal layout with centered headings",
        accent: "#da5a4d",
        text: "#3e3e3e",
        tint: "#f8f8f8",
        headings: HeadingDecoration::Centered,
    },
    Theme {
        id: "maize",
        name: "Maize",
        description: "Soft yellow tones",
        accent: "#d4a017",
        text: "#4a4a4a",
        tint: "#fffbea",
        headings: HeadingDecoration::Underline,
    },
    Theme {
        id: "purple",
        name: "Purple",
        description: "Elegant purple accents",
        accent: "#8e44ad",
        text: "#3c3c3c",
        tint: "#f6f0fa",
        headings: HeadingDecoration::Filled,
    },
    Theme {
        id: "phycat",
        name: "Phycat",
        description: "Mint green technical style",
        accent: "#00b894",
        text: "#2d3436",
        tint: "#effbf8",
        headings: HeadingDecoration::Centered,
    },
];

/// Looks up a theme by id.
pub fn find_theme(id: &str) -> Option<&'static Theme> {
    THEMES.iter().find(|theme| theme.id == id)
}

impl Theme {
    /// Catalog entry reported to callers.
    pub fn summary(&self) -> ThemeSummary {
        ThemeSummary {
            id: self.id.to_string(),
            name: self.name.to_string(),
            description: self.description.to_string(),
        }
    }

    pub(crate) fn container_style(&self) -> String {
        format!(
            "font-family: -apple-system, BlinkMacSystemFont, 'Helvetica Neue', 'PingFang SC', sans-serif; font-size: 15px; line-height: 1.75; color: {}; word-break: break-word; padding: 0 8px",
            self.text
        )
    }

    /// Style for a heading; `level` is 1 to 6.
    pub(crate) fn heading_style(&self, level: u8) -> String {
        let size = match level {
            1 => 22,
            2 => 19,
            3 => 17,
            _ => 15,
        };
        let base = format!("font-size: {}px; font-weight: bold; margin: 1.6em 0 0.8em", size);
        let decoration = match self.headings {
            HeadingDecoration::Underline => {
                format!("color: {}; padding-bottom: 4px; border-bottom: 2px solid {}", self.text, self.accent)
            }
            HeadingDecoration::LeftBar => {
                format!("color: {}; padding-left: 10px; border-left: 4px solid {}", self.text, self.accent)
            }
            HeadingDecoration::Filled if level <= 2 => {
                format!("color: #ffffff; background: {}; padding: 4px 12px; border-radius: 4px; display: inline-block", self.accent)
            }
            HeadingDecoration::Filled => format!("color: {}", self.accent),
            HeadingDecoration::Centered => format!("color: {}; text-align: center", self.accent),
        };
        format!("{}; {}", base, decoration)
    }

    pub(crate) fn paragraph_style(&self) -> String {
        format!("margin: 1em 0; color: {}; letter-spacing: 0.5px", self.text)
    }

    pub(crate) fn blockquote_style(&self) -> String {
        format!(
            "margin: 1em 0; padding: 8px 16px; background: {}; border-left: 4px solid {}; color: #666666",
            self.tint, self.accent
        )
    }

    pub(crate) fn list_style(&self) -> String {
        format!("margin: 1em 0; padding-left: 2em; color: {}", self.text)
    }

    pub(crate) fn list_item_style(&self) -> String {
        "margin: 0.3em 0".to_string()
    }

    pub(crate) fn inline_code_style(&self) -> String {
        format!(
            "font-family: Menlo, Consolas, monospace; font-size: 90%; padding: 2px 4px; border-radius: 3px; background: {}; color: {}",
            self.tint, self.accent
        )
    }

    pub(crate) fn link_style(&self) -> String {
        format!("color: {}; text-decoration: none; border-bottom: 1px solid {}", self.accent, self.accent)
    }

    pub(crate) fn rule_style(&self) -> String {
        format!("border: none; border-top: 1px solid {}; margin: 2em 0", self.accent)
    }

    pub(crate) fn image_style(&self) -> String {
        "display: block; max-width: 100%; margin: 1em auto; border-radius: 4px".to_string()
    }

    pub(crate) fn table_style(&self) -> String {
        "border-collapse: collapse; width: 100%; margin: 1em 0; font-size: 14px".to_string()
    }

    pub(crate) fn cell_style(&self) -> String {
        format!("border: 1px solid #dfe2e5; padding: 6px 12px; color: {}", self.text)
    }
}
