//! Server-rendered pages built as immutable node trees.

pub mod admin;
pub mod components;
pub mod layout;
pub mod login;
pub mod styles;

use axum::http::{header, HeaderMap};

pub use admin::{ApplicationReviewPage, EmailNotice, ProgramApplicationView};
pub use layout::{BaseHtmlLayout, HtmlBundle};
pub use login::{LoginForm, LoginSettings};

use crate::program::BlockId;

/// Per-request inputs shared by every view.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestContext {
    pub host: String,
    pub flash_success: Option<String>,
}

impl RequestContext {
    pub fn new(host: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            flash_success: None,
        }
    }

    pub fn with_flash_success(mut self, message: Option<String>) -> Self {
        self.flash_success = message.filter(|message| !message.trim().is_empty());
        self
    }

    /// Context from the `Host` header; a missing or non-UTF-8 header yields an empty host.
    pub fn from_headers(headers: &HeaderMap) -> Self {
        let host = headers
            .get(header::HOST)
            .and_then(|value| value.to_str().ok())
            .unwrap_or_default();
        Self::new(host)
    }
}

/// Invariant violations detected while rendering.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ViewError {
    #[error("answer references block `{block_id}` which is not part of the program")]
    UnknownBlock { block_id: BlockId },
}
