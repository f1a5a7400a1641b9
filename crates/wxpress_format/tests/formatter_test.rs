//! Tests for the Markdown formatter through the `ContentFormatter` interface.

use wxpress_core::{ContentFormatter, FormatOptions};
use wxpress_error::WxpressErrorKind;
use wxpress_format::{MarkdownFormatter, THEMES};

fn options() -> FormatOptions {
    FormatOptions::new("solarized-light", true, true)
}

#[tokio::test]
async fn test_front_matter_title_and_cover() {
    let markdown = "---\ntitle: Release notes\ncover: https://cdn.example.com/c.png\n---\n# v2\n\n![](body.png)\n";
    let article = MarkdownFormatter::new()
        .format(markdown, Some("orangeheart"), &options())
        .await
        .unwrap();

    assert_eq!(article.title.as_deref(), Some("Release notes"));
    assert_eq!(article.cover.as_deref(), Some("https://cdn.example.com/c.png"));
    assert!(!article.html.contains("Release notes"));
    assert!(!article.html.contains("title:"));
}

#[tokio::test]
async fn test_cover_falls_back_to_first_image() {
    let article = MarkdownFormatter::new()
        .format("Intro\n\n![x](./first.jpg)\n\n![y](./second.jpg)", None, &options())
        .await
        .unwrap();

    assert_eq!(article.title, None);
    assert_eq!(article.cover.as_deref(), Some("./first.jpg"));
}

#[tokio::test]
async fn test_cover_extraction_can_be_disabled() {
    let article = MarkdownFormatter::new()
        .format(
            "![x](./first.jpg)",
            None,
            &FormatOptions::new("solarized-light", true, false),
        )
        .await
        .unwrap();

    assert_eq!(article.cover, None);
}

#[tokio::test]
async fn test_front_matter_ignored_when_not_preserved() {
    let article = MarkdownFormatter::new()
        .format(
            "---\ntitle: Hidden\n---\nBody",
            None,
            &FormatOptions::new("solarized-light", false, true),
        )
        .await
        .unwrap();

    assert_eq!(article.title, None);
    assert!(!article.html.contains("Hidden"));
    assert!(article.html.contains("Body"));
}

#[tokio::test]
async fn test_blank_theme_uses_default() {
    let formatter = MarkdownFormatter::new();
    let blank = formatter.format("# A", Some("  "), &options()).await.unwrap();
    let none = formatter.format("# A", None, &options()).await.unwrap();
    let default = formatter.format("# A", Some("default"), &options()).await.unwrap();

    assert_eq!(blank, default);
    assert_eq!(none, default);
}

#[tokio::test]
async fn test_themes_render_differently() {
    let formatter = MarkdownFormatter::new();
    let lapis = formatter.format("# A", Some("lapis"), &options()).await.unwrap();
    let pie = formatter.format("# A", Some("pie"), &options()).await.unwrap();

    assert_ne!(lapis.html, pie.html);
}

#[tokio::test]
async fn test_unknown_theme_is_format_error() {
    let err = MarkdownFormatter::new()
        .format("# A", Some("neon"), &options())
        .await
        .unwrap_err();

    match err.kind() {
        WxpressErrorKind::Format(message) => assert!(message.contains("neon")),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_unknown_highlight_style_is_format_error() {
    let err = MarkdownFormatter::new()
        .format("# A", None, &FormatOptions::new("rainbow-sparkle", true, true))
        .await
        .unwrap_err();

    assert!(matches!(err.kind(), WxpressErrorKind::Format(_)));
}

#[test]
fn test_theme_catalog_matches_builtin_themes() {
    let summaries = MarkdownFormatter::new().themes().unwrap();
    assert_eq!(summaries.len(), THEMES.len());
    assert_eq!(summaries[0].id, "default");

    let ids: Vec<_> = summaries.iter().map(|s| s.id.as_str()).collect();
    for id in ["default", "orangeheart", "rainbow", "lapis", "pie", "maize", "purple", "phycat"] {
        assert!(ids.contains(&id), "missing theme {id}");
    }

    let json = serde_json::to_value(&summaries[0]).unwrap();
    assert!(json.get("name").is_some());
    assert!(json.get("description").is_some());
}
