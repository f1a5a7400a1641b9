//! Image-message draft payload.

use derive_getters::Getters;
use wxpress_error::{WxpressError, WxpressErrorKind, WxpressResult};

/// An "image and text" message awaiting submission as a draft.
///
/// The image ids are kept in the order given; that order is the on-platform
/// display order. A draft always references at least one image.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct ImageMessageDraft {
    /// Message title
    title: String,
    /// Message body
    content: String,
    /// Permanent image material ids, in display order
    image_media_ids: Vec<String>,
}

impl ImageMessageDraft {
    /// Creates a draft, rejecting an empty image list.
    pub fn new(
        title: impl Into<String>,
        content: impl Into<String>,
        image_media_ids: Vec<String>,
    ) -> WxpressResult<Self> {
        if image_media_ids.is_empty() {
            return Err(WxpressError::new(WxpressErrorKind::Validation(
                "an image message needs at least one image".to_string(),
            )));
        }

        Ok(Self {
            title: title.into(),
            content: content.into(),
            image_media_ids,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_empty_image_list() {
        let err = ImageMessageDraft::new("t", "c", vec![]).unwrap_err();
        assert!(matches!(err.kind(), WxpressErrorKind::Validation(_)));
    }

    #[test]
    fn test_keeps_order() {
        let ids = vec!["B".to_string(), "A".to_string(), "C".to_string()];
        let draft = ImageMessageDraft::new("t", "c", ids.clone()).unwrap();
        assert_eq!(draft.image_media_ids(), &ids);
    }
}
