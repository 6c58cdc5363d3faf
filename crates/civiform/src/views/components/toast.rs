use crate::html::node::{div, p_text, Element};
use crate::views::styles::components;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Alert,
}

/// Dismissable banner shown above the page content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToastMessage {
    pub kind: ToastKind,
    pub text: String,
}

impl ToastMessage {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            kind: ToastKind::Success,
            text: text.into(),
        }
    }

    pub fn alert(text: impl Into<String>) -> Self {
        Self {
            kind: ToastKind::Alert,
            text: text.into(),
        }
    }

    pub fn render(&self) -> Element {
        let kind = match self.kind {
            ToastKind::Success => components::TOAST_SUCCESS,
            ToastKind::Alert => components::TOAST_ALERT,
        };
        div()
            .classes(&[components::TOAST, kind])
            .attr("role", "alert")
            .child(p_text(self.text.clone()))
    }
}
