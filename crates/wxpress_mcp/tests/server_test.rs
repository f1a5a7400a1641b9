//! Production wiring with the built-in Markdown formatter.

use async_trait::async_trait;
use serde_json::json;
use std::sync::{Arc, Mutex};
use wxpress_core::{ArticleDraft, DraftPublisher, EnvCredentials, ThemeSummary};
use wxpress_error::WxpressResult;
use wxpress_format::MarkdownFormatter;
use wxpress_mcp::{Router, ServerConfig, ToolRegistry, WxpressRouter, build_router};
use wxpress_wechat::WeChatClient;

#[derive(Default)]
struct RecordingPublisher {
    articles: Mutex<Vec<ArticleDraft>>,
}

#[async_trait]
impl DraftPublisher for RecordingPublisher {
    async fn publish_article(&self, article: &ArticleDraft) -> WxpressResult<String> {
        self.articles.lock().unwrap().push(article.clone());
        Ok("ARTICLE7".to_string())
    }
}

#[tokio::test]
async fn test_default_router_lists_builtin_themes() {
    let router = build_router(&ServerConfig::default()).unwrap();
    assert_eq!(router.name(), "wxpress");
    assert_eq!(router.list_tools().len(), 3);

    let output = router.dispatch("list_themes", json!({})).await.unwrap();
    let themes: Vec<ThemeSummary> = output
        .texts()
        .iter()
        .map(|text| serde_json::from_str(text).unwrap())
        .collect();
    assert_eq!(themes.len(), 8);
    assert_eq!(themes[0].id, "default");
}

#[tokio::test]
async fn test_configured_name_is_reported() {
    let config = ServerConfig::from_toml("[server]\nname = \"press\"\n").unwrap();
    let router = build_router(&config).unwrap();
    assert_eq!(router.name(), "press");
}

#[tokio::test]
async fn test_article_rendered_with_front_matter() {
    let publisher = Arc::new(RecordingPublisher::default());
    let tools = ToolRegistry::standard(
        Arc::new(MarkdownFormatter::new()),
        publisher.clone(),
        Arc::new(WeChatClient::new().unwrap()),
        Arc::new(EnvCredentials::with_lookup(|_| None)),
    );
    let router = WxpressRouter::builder().tools(tools).build();

    let output = router
        .dispatch(
            "publish_article",
            json!({
                "content": "---\ntitle: Weekly\n---\n# Notes\n\n![shot](https://cdn.example.com/s.png)\n",
                "theme_id": "purple"
            }),
        )
        .await
        .unwrap();
    assert!(output.texts()[0].contains("ARTICLE7"));

    let articles = publisher.articles.lock().unwrap().clone();
    assert_eq!(articles.len(), 1);
    assert_eq!(articles[0].title(), "Weekly");
    assert_eq!(articles[0].cover(), "https://cdn.example.com/s.png");
    assert!(articles[0].html().starts_with("<section"));
    assert!(articles[0].html().contains("Notes</h1>"));
}

#[tokio::test]
async fn test_unknown_theme_fails_article() {
    let router = build_router(&ServerConfig::default()).unwrap();

    let err = router
        .dispatch("publish_article", json!({"content": "# A", "theme_id": "neon"}))
        .await
        .unwrap_err();
    let message = err.to_string();
    assert!(message.contains("publishing article failed"));
    assert!(message.contains("unknown theme 'neon'"));
}
