use crate::html::node::{a, button, Element};
use crate::views::styles::components;

/// Button that navigates to `url` when clicked.
pub fn redirect_button(id: &str, text: impl Into<String>, url: &str) -> Element {
    button(text)
        .id(id)
        .attr("onclick", format!("window.location = '{url}';"))
}

/// Anchor styled as a button.
pub fn link_button(text: impl Into<String>, href: impl Into<String>) -> Element {
    a(text).attr("href", href).class(components::OUTLINE_BUTTON)
}
