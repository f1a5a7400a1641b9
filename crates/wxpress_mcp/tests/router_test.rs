//! Tool router behaviour against in-memory collaborators.

use async_trait::async_trait;
use mcp_spec::handler::ToolError;
use serde_json::{Value, json};
use std::sync::{Arc, Mutex};
use wxpress_core::{
    AccessToken, ArticleDraft, ContentFormatter, CredentialProvider, DraftPublisher,
    EnvCredentials, FormatOptions, FormattedArticle, ImageMessageDraft, MaterialKind, MediaSource,
    PublishingPlatform, ThemeSummary, UploadedMaterial, VideoDescription, WeChatCredentials,
};
use wxpress_error::{PlatformFailure, WxpressError, WxpressErrorKind, WxpressResult};
use wxpress_mcp::{Router, ToolRegistry, WxpressRouter};

#[derive(Debug, Clone, PartialEq, Eq)]
enum Call {
    Token(String),
    Upload(String),
    Draft(ImageMessageDraft),
}

/// Records every platform call; uploads answer `MID-<source>`.
#[derive(Default)]
struct RecordingPlatform {
    calls: Mutex<Vec<Call>>,
    token_failure: Option<PlatformFailure>,
    failing_upload: Option<(usize, PlatformFailure)>,
}

impl RecordingPlatform {
    fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: Call) -> usize {
        let mut calls = self.calls.lock().unwrap();
        calls.push(call);
        calls.iter().filter(|c| matches!(c, Call::Upload(_))).count()
    }
}

#[async_trait]
impl PublishingPlatform for RecordingPlatform {
    async fn access_token(&self, credentials: &WeChatCredentials) -> WxpressResult<AccessToken> {
        self.record(Call::Token(credentials.app_id().to_string()));
        match &self.token_failure {
            Some(failure) => Err(WxpressError::new(WxpressErrorKind::Credential(failure.clone()))),
            None => Ok(AccessToken::new("TOKEN", 7200)),
        }
    }

    async fn upload_material(
        &self,
        _token: &AccessToken,
        source: &MediaSource,
        kind: MaterialKind,
        _description: Option<&VideoDescription>,
    ) -> WxpressResult<UploadedMaterial> {
        let uploads = self.record(Call::Upload(source.display_ref()));
        match &self.failing_upload {
            Some((position, failure)) if *position == uploads => {
                Err(WxpressError::new(WxpressErrorKind::Upload(failure.clone())))
            }
            _ => Ok(UploadedMaterial::new(format!("MID-{}", source.display_ref()), kind)),
        }
    }

    async fn add_image_message_draft(
        &self,
        _token: &AccessToken,
        draft: &ImageMessageDraft,
    ) -> WxpressResult<String> {
        self.record(Call::Draft(draft.clone()));
        Ok("DRAFT1".to_string())
    }
}

/// Formatter answering a fixed article and theme list.
#[derive(Default)]
struct StubFormatter {
    article: FormattedArticle,
    themes: Vec<ThemeSummary>,
    requests: Mutex<Vec<(String, Option<String>, FormatOptions)>>,
}

#[async_trait]
impl ContentFormatter for StubFormatter {
    async fn format(
        &self,
        markdown: &str,
        theme_id: Option<&str>,
        options: &FormatOptions,
    ) -> WxpressResult<FormattedArticle> {
        self.requests.lock().unwrap().push((
            markdown.to_string(),
            theme_id.map(str::to_string),
            options.clone(),
        ));
        Ok(self.article.clone())
    }

    fn themes(&self) -> WxpressResult<Vec<ThemeSummary>> {
        Ok(self.themes.clone())
    }
}

#[derive(Default)]
struct RecordingPublisher {
    articles: Mutex<Vec<ArticleDraft>>,
}

#[async_trait]
impl DraftPublisher for RecordingPublisher {
    async fn publish_article(&self, article: &ArticleDraft) -> WxpressResult<String> {
        self.articles.lock().unwrap().push(article.clone());
        Ok("ARTICLE1".to_string())
    }
}

fn configured_env(name: &str) -> Option<String> {
    match name {
        "WECHAT_APP_ID" => Some("wx-app".to_string()),
        "WECHAT_APP_SECRET" => Some("s3cret".to_string()),
        _ => None,
    }
}

fn secret_only_env(name: &str) -> Option<String> {
    match name {
        "WECHAT_APP_SECRET" => Some("s3cret".to_string()),
        _ => None,
    }
}

struct Harness {
    router: WxpressRouter,
    platform: Arc<RecordingPlatform>,
    formatter: Arc<StubFormatter>,
    publisher: Arc<RecordingPublisher>,
}

fn harness_with(
    platform: RecordingPlatform,
    formatter: StubFormatter,
    credentials: Arc<dyn CredentialProvider>,
) -> Harness {
    let platform = Arc::new(platform);
    let formatter = Arc::new(formatter);
    let publisher = Arc::new(RecordingPublisher::default());
    let tools = ToolRegistry::standard(
        formatter.clone(),
        publisher.clone(),
        platform.clone(),
        credentials,
    );
    Harness {
        router: WxpressRouter::builder().name("wxpress-test").tools(tools).build(),
        platform,
        formatter,
        publisher,
    }
}

fn harness(platform: RecordingPlatform) -> Harness {
    harness_with(
        platform,
        StubFormatter::default(),
        Arc::new(EnvCredentials::with_lookup(configured_env)),
    )
}

fn error_message(err: &ToolError) -> String {
    err.to_string()
}

#[test]
fn test_lists_three_tools_with_required_arguments() {
    let h = harness(RecordingPlatform::default());

    let names: Vec<_> = h.router.list_tools().into_iter().map(|t| t.name).collect();
    assert_eq!(names, vec!["publish_article", "list_themes", "publish_image_message"]);

    let required: Vec<Value> = h
        .router
        .tools()
        .list()
        .iter()
        .map(|tool| tool.input_schema()["required"].clone())
        .collect();
    assert_eq!(required[0], json!(["content"]));
    assert_eq!(required[1], Value::Null);
    assert_eq!(required[2], json!(["title", "content", "images"]));

    assert!(h.router.instructions().contains("publish_image_message"));
    assert_eq!(h.router.name(), "wxpress-test");
}

#[tokio::test]
async fn test_remote_image_message_succeeds() {
    let h = harness(RecordingPlatform::default());

    let output = h
        .router
        .dispatch(
            "publish_image_message",
            json!({"title": "Trip", "content": "Photos", "images": ["https://x/y/pic.png"]}),
        )
        .await
        .unwrap();

    assert_eq!(output.texts().len(), 1);
    assert!(output.texts()[0].contains("DRAFT1"));
    assert!(!output.texts()[0].contains("TOKEN"));

    let calls = h.platform.calls();
    assert_eq!(calls[0], Call::Token("wx-app".to_string()));
    assert_eq!(calls[1], Call::Upload("https://x/y/pic.png".to_string()));
    match &calls[2] {
        Call::Draft(draft) => {
            assert_eq!(draft.title(), "Trip");
            assert_eq!(draft.content(), "Photos");
            assert_eq!(draft.image_media_ids(), &vec!["MID-https://x/y/pic.png".to_string()]);
        }
        other => panic!("expected draft, got {other:?}"),
    }
}

#[tokio::test]
async fn test_draft_keeps_request_order() {
    let h = harness(RecordingPlatform::default());
    let images = ["/p/3.jpg", "https://cdn/1.png", "/p/2.jpg", "/p/0.jpg"];

    h.router
        .dispatch(
            "publish_image_message",
            json!({"title": "t", "content": "c", "images": images}),
        )
        .await
        .unwrap();

    let calls = h.platform.calls();
    let uploads: Vec<_> = calls
        .iter()
        .filter_map(|c| match c {
            Call::Upload(source) => Some(source.as_str()),
            _ => None,
        })
        .collect();
    assert_eq!(uploads, images);

    let Some(Call::Draft(draft)) = calls.last() else {
        panic!("last call should be the draft");
    };
    let expected: Vec<String> = images.iter().map(|i| format!("MID-{i}")).collect();
    assert_eq!(draft.image_media_ids(), &expected);
}

#[tokio::test]
async fn test_failed_upload_stops_sequence() {
    let h = harness(RecordingPlatform {
        failing_upload: Some((
            2,
            PlatformFailure::Api {
                errcode: 45009,
                errmsg: "reach max api daily quota limit".to_string(),
            },
        )),
        ..Default::default()
    });

    let err = h
        .router
        .dispatch(
            "publish_image_message",
            json!({"title": "t", "content": "c", "images": ["/local/a.jpg", "/local/b.jpg", "/local/c.jpg"]}),
        )
        .await
        .unwrap_err();

    let ToolError::ExecutionError(message) = &err else {
        panic!("expected execution error, got {err:?}");
    };
    assert!(message.starts_with("publishing image message failed: uploading image 2 of 3 (/local/b.jpg) failed"));
    assert!(message.contains("45009"));

    assert_eq!(
        h.platform.calls(),
        vec![
            Call::Token("wx-app".to_string()),
            Call::Upload("/local/a.jpg".to_string()),
            Call::Upload("/local/b.jpg".to_string()),
        ]
    );
}

#[tokio::test]
async fn test_second_of_two_local_uploads_fails() {
    let h = harness(RecordingPlatform {
        failing_upload: Some((
            2,
            PlatformFailure::Api {
                errcode: 45009,
                errmsg: "reach max api daily quota limit".to_string(),
            },
        )),
        ..Default::default()
    });

    let err = h
        .router
        .dispatch(
            "publish_image_message",
            json!({"title": "t", "content": "c", "images": ["/local/a.jpg", "/local/b.jpg"]}),
        )
        .await
        .unwrap_err();

    let message = error_message(&err);
    assert!(message.contains("image 2 of 2"));
    assert!(message.contains("/local/b.jpg"));
    assert!(!message.contains("MID-/local/a.jpg"));
    assert!(!h.platform.calls().iter().any(|c| matches!(c, Call::Draft(_))));
}

#[tokio::test]
async fn test_invalid_arguments_make_no_calls() {
    let h = harness(RecordingPlatform::default());

    let cases = [
        json!({"title": "t", "content": "c", "images": []}),
        json!({"content": "c", "images": ["a.jpg"]}),
        json!({"title": "t", "images": ["a.jpg"]}),
        json!({"title": "t", "content": "c"}),
        json!({"title": "", "content": "c", "images": ["a.jpg"]}),
        json!({"title": "t", "content": "c", "images": [""]}),
        json!({"title": "t", "content": "c", "images": "a.jpg"}),
    ];

    for arguments in cases {
        let err = h
            .router
            .dispatch("publish_image_message", arguments.clone())
            .await
            .unwrap_err();
        assert!(
            matches!(err, ToolError::InvalidParameters(_)),
            "{arguments} gave {err:?}"
        );
    }
    assert!(h.platform.calls().is_empty());
}

#[tokio::test]
async fn test_missing_app_id_makes_no_calls() {
    let h = harness_with(
        RecordingPlatform::default(),
        StubFormatter::default(),
        Arc::new(EnvCredentials::with_lookup(secret_only_env)),
    );

    let err = h
        .router
        .dispatch(
            "publish_image_message",
            json!({"title": "t", "content": "c", "images": ["/a.jpg"]}),
        )
        .await
        .unwrap_err();

    let ToolError::ExecutionError(message) = &err else {
        panic!("expected execution error, got {err:?}");
    };
    assert!(message.contains("configuration error"));
    assert!(message.contains("WECHAT_APP_ID"));
    assert!(h.platform.calls().is_empty());
}

#[tokio::test]
async fn test_credential_error_surfaces_platform_message() {
    let h = harness(RecordingPlatform {
        token_failure: Some(PlatformFailure::Api {
            errcode: 40001,
            errmsg: "invalid credential".to_string(),
        }),
        ..Default::default()
    });

    let err = h
        .router
        .dispatch(
            "publish_image_message",
            json!({"title": "t", "content": "c", "images": ["/a.jpg"]}),
        )
        .await
        .unwrap_err();

    let message = error_message(&err);
    assert!(message.contains("40001"));
    assert!(message.contains("invalid credential"));
    assert!(!message.contains("s3cret"));
    assert_eq!(h.platform.calls(), vec![Call::Token("wx-app".to_string())]);
}

#[tokio::test]
async fn test_list_themes_returns_one_block_per_theme() {
    let formatter = StubFormatter {
        themes: vec![
            ThemeSummary {
                id: "default".to_string(),
                name: "Default".to_string(),
                description: "Plain".to_string(),
            },
            ThemeSummary {
                id: "lapis".to_string(),
                name: "Lapis".to_string(),
                description: "Blue".to_string(),
            },
        ],
        ..Default::default()
    };
    let h = harness_with(
        RecordingPlatform::default(),
        formatter,
        Arc::new(EnvCredentials::with_lookup(|_| None)),
    );

    let output = h.router.dispatch("list_themes", json!({})).await.unwrap();
    assert_eq!(output.texts().len(), 2);

    let parsed: Vec<ThemeSummary> = output
        .texts()
        .iter()
        .map(|text| serde_json::from_str(text).unwrap())
        .collect();
    assert_eq!(parsed[1].id, "lapis");
    assert_eq!(parsed[1].description, "Blue");

    let content = h.router.call_tool("list_themes", json!({})).await.unwrap();
    assert_eq!(content.len(), 2);
}

#[tokio::test]
async fn test_publish_article_defaults_title_and_cover() {
    let formatter = StubFormatter {
        article: FormattedArticle {
            title: None,
            cover: None,
            html: "<section>body</section>".to_string(),
        },
        ..Default::default()
    };
    let h = harness_with(
        RecordingPlatform::default(),
        formatter,
        Arc::new(EnvCredentials::with_lookup(configured_env)),
    );

    let output = h
        .router
        .dispatch("publish_article", json!({"content": "# Hi", "theme_id": "lapis"}))
        .await
        .unwrap();
    assert!(output.texts()[0].contains("ARTICLE1"));

    let requests = h.formatter.requests.lock().unwrap().clone();
    assert_eq!(requests.len(), 1);
    let (markdown, theme_id, options) = &requests[0];
    assert_eq!(markdown, "# Hi");
    assert_eq!(theme_id.as_deref(), Some("lapis"));
    assert_eq!(options, &FormatOptions::new("solarized-light", true, true));

    let articles = h.publisher.articles.lock().unwrap().clone();
    assert_eq!(
        articles,
        vec![ArticleDraft::new("this is title", "<section>body</section>", "")]
    );
    assert!(h.platform.calls().is_empty());
}

#[tokio::test]
async fn test_publish_article_passes_formatter_metadata() {
    let formatter = StubFormatter {
        article: FormattedArticle {
            title: Some("Release".to_string()),
            cover: Some("https://cdn/c.png".to_string()),
            html: "<p>x</p>".to_string(),
        },
        ..Default::default()
    };
    let h = harness_with(
        RecordingPlatform::default(),
        formatter,
        Arc::new(EnvCredentials::with_lookup(configured_env)),
    );

    h.router
        .dispatch("publish_article", json!({"content": "x"}))
        .await
        .unwrap();

    let requests = h.formatter.requests.lock().unwrap().clone();
    assert_eq!(requests[0].1, None);
    let articles = h.publisher.articles.lock().unwrap().clone();
    assert_eq!(articles, vec![ArticleDraft::new("Release", "<p>x</p>", "https://cdn/c.png")]);
}

#[tokio::test]
async fn test_publish_article_requires_content() {
    let h = harness(RecordingPlatform::default());

    let err = h
        .router
        .dispatch("publish_article", json!({"theme_id": "lapis"}))
        .await
        .unwrap_err();

    match err {
        ToolError::InvalidParameters(message) => {
            assert_eq!(message, "publishing article failed: invalid arguments: missing 'content'")
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert!(h.publisher.articles.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_unknown_tool_is_not_found() {
    let h = harness(RecordingPlatform::default());

    let err = h.router.dispatch("delete_everything", json!({})).await.unwrap_err();
    match err {
        ToolError::NotFound(message) => assert_eq!(message, "unknown tool: delete_everything"),
        other => panic!("unexpected error: {other:?}"),
    }
}
