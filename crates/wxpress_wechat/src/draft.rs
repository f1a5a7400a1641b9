//! Draft creation.

use crate::WeChatClient;
use crate::response::{read_platform_json, required_str};
use serde::Serialize;
use tracing::{debug, info, instrument};
use wxpress_core::{AccessToken, ImageMessageDraft};
use wxpress_error::{PlatformFailure, WxpressError, WxpressErrorKind, WxpressResult};

/// Draft creation request body.
#[derive(Debug, Serialize)]
pub(crate) struct DraftRequest<A> {
    pub(crate) articles: Vec<A>,
}

/// One "image and text" entry (`article_type = newspic`).
#[derive(Debug, Serialize)]
pub(crate) struct ImageMessageArticle<'a> {
    article_type: &'static str,
    title: &'a str,
    content: &'a str,
    image_info: ImageInfo<'a>,
    need_open_comment: u8,
    only_fans_can_comment: u8,
}

#[derive(Debug, Serialize)]
struct ImageInfo<'a> {
    image_list: Vec<ImageRef<'a>>,
}

#[derive(Debug, Serialize)]
struct ImageRef<'a> {
    image_media_id: &'a str,
}

impl<'a> ImageMessageArticle<'a> {
    /// Builds the entry; `image_list` keeps the draft's order.
    pub(crate) fn from_draft(draft: &'a ImageMessageDraft) -> Self {
        Self {
            article_type: "newspic",
            title: draft.title(),
            content: draft.content(),
            image_info: ImageInfo {
                image_list: draft
                    .image_media_ids()
                    .iter()
                    .map(|id| ImageRef { image_media_id: id })
                    .collect(),
            },
            need_open_comment: 0,
            only_fans_can_comment: 0,
        }
    }
}

/// One formatted article entry (`news`).
#[derive(Debug, Serialize)]
pub(crate) struct NewsArticle<'a> {
    pub(crate) title: &'a str,
    pub(crate) content: &'a str,
    pub(crate) thumb_media_id: &'a str,
    pub(crate) need_open_comment: u8,
    pub(crate) only_fans_can_comment: u8,
}

impl WeChatClient {
    /// Submits an image-message draft and returns the draft's media id.
    #[instrument(skip_all, fields(title = %draft.title(), images = draft.image_media_ids().len()))]
    pub async fn add_image_message_draft(
        &self,
        token: &AccessToken,
        draft: &ImageMessageDraft,
    ) -> WxpressResult<String> {
        let request = DraftRequest {
            articles: vec![ImageMessageArticle::from_draft(draft)],
        };
        self.add_draft(token, &request).await
    }

    pub(crate) async fn add_draft<A: Serialize>(
        &self,
        token: &AccessToken,
        request: &DraftRequest<A>,
    ) -> WxpressResult<String> {
        let draft_error = |failure: PlatformFailure| WxpressError::new(WxpressErrorKind::Draft(failure));

        debug!(articles = request.articles.len(), "Submitting draft");
        let response = self
            .http
            .post(self.endpoint("cgi-bin/draft/add"))
            .query(&[("access_token", token.secret())])
            .json(request)
            .send()
            .await
            .map_err(|e| draft_error(PlatformFailure::Transport(e.without_url().to_string())))?;

        let body = read_platform_json(response).await.map_err(draft_error)?;
        let media_id = required_str(&body, "media_id").map_err(draft_error)?;

        info!(media_id = %media_id, "Draft created");
        Ok(media_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_image_message_payload_shape() {
        let draft = ImageMessageDraft::new(
            "Weekend",
            "Photos from the trip",
            vec!["MID2".to_string(), "MID1".to_string()],
        )
        .unwrap();
        let request = DraftRequest {
            articles: vec![ImageMessageArticle::from_draft(&draft)],
        };

        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({
                "articles": [{
                    "article_type": "newspic",
                    "title": "Weekend",
                    "content": "Photos from the trip",
                    "image_info": {
                        "image_list": [
                            {"image_media_id": "MID2"},
                            {"image_media_id": "MID1"}
                        ]
                    },
                    "need_open_comment": 0,
                    "only_fans_can_comment": 0
                }]
            })
        );
    }
}
