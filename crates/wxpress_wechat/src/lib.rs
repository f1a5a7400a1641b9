//! Official account API client for wxpress.
//!
//! Implements the three platform calls the adapter sequences when publishing:
//!
//! - access token issuance (`cgi-bin/token`)
//! - permanent material upload from a local path or a remote URL (`cgi-bin/material/add_material`)
//! - draft creation (`cgi-bin/draft/add`)
//!
//! [`WeChatClient`] implements [`PublishingPlatform`](wxpress_core::PublishingPlatform);
//! [`ArticlePublisher`] builds on it to publish formatted HTML articles.
//!
//! Every response body is checked for an `errcode`/`errmsg` pair in addition to
//! the HTTP status. Nothing is retried and no state outlives a call.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod article;
mod client;
mod draft;
mod material;
mod platform;
mod response;
mod token;

pub use article::{ArticlePublisher, PLATFORM_IMAGE_HOST};
pub use client::{DEFAULT_API_BASE, WeChatClient};
pub use material::remote_file_name;
