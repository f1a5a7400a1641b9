//! Core data types for the wxpress publishing adapter.
//!
//! This crate provides the per-invocation values passed between the tool router
//! and the platform client, plus the traits at which external collaborators plug in:
//!
//! - [`PublishingPlatform`] - token issuance, permanent material upload, image-message drafts
//! - [`ContentFormatter`] - Markdown to styled HTML, theme catalog
//! - [`DraftPublisher`] - publishing a formatted article as a draft
//! - [`CredentialProvider`] - application id/secret lookup

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod article;
mod credentials;
mod draft;
mod interface;
mod media;
mod token;

pub use article::{ArticleDraft, FormatOptions, FormattedArticle, ThemeSummary};
pub use credentials::{CredentialProvider, EnvCredentials, WeChatCredentials, APP_ID_VAR, APP_SECRET_VAR};
pub use draft::ImageMessageDraft;
pub use interface::{ContentFormatter, DraftPublisher, PublishingPlatform};
pub use media::{MaterialKind, MediaSource, UploadedMaterial, VideoDescription};
pub use token::AccessToken;
