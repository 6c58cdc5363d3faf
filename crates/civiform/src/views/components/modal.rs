use crate::html::node::{button, div, h1, Element};
use crate::views::styles::{components, reference, utility};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ModalWidth {
    #[default]
    Default,
    ThreeFourths,
}

/// Hidden dialog plus the button that opens it.
///
/// Modals are rendered outside the main content; the trigger is placed wherever the
/// caller puts [`Modal::trigger`].
#[derive(Debug, Clone)]
pub struct Modal {
    id: String,
    title: String,
    content: Element,
    trigger: Element,
    width: ModalWidth,
}

impl Modal {
    pub fn new(id: impl Into<String>, content: Element) -> Self {
        Self {
            id: id.into(),
            title: String::new(),
            content,
            trigger: button(""),
            width: ModalWidth::Default,
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Element that opens the modal; its id and opener markers are set on render.
    pub fn trigger_button(mut self, trigger: Element) -> Self {
        self.trigger = trigger;
        self
    }

    pub fn width(mut self, width: ModalWidth) -> Self {
        self.width = width;
        self
    }

    pub fn trigger_id(&self) -> String {
        format!("{}-button", self.id)
    }

    /// Button that opens this modal.
    pub fn trigger(&self) -> Element {
        self.trigger
            .clone()
            .id(self.trigger_id())
            .class(reference::MODAL_OPEN)
            .data("modal-target", self.id.clone())
    }

    pub fn render(&self) -> Element {
        let width = match self.width {
            ModalWidth::Default => "",
            ModalWidth::ThreeFourths => components::MODAL_THREE_FOURTHS,
        };
        div()
            .id(self.id.clone())
            .classes(&[components::MODAL, utility::HIDDEN, width])
            .attr("role", "dialog")
            .attr("aria-modal", "true")
            .child(
                div()
                    .class(components::MODAL_HEADER)
                    .child(h1().class(utility::TEXT_LG).text(self.title.clone()))
                    .child(
                        button("x")
                            .class(reference::MODAL_CLOSE)
                            .attr("aria-label", "Close"),
                    ),
            )
            .child(
                div()
                    .class(components::MODAL_CONTENT)
                    .child(self.content.clone()),
            )
    }
}
