use crate::html::node::{div, element, img, Element, Node};
use crate::html::Document;
use crate::routes;
use crate::views::components::{Modal, ToastMessage};
use crate::views::styles::components;

/// Pieces of a page collected by a view before the layout wraps them in a document.
#[derive(Debug, Clone, Default)]
pub struct HtmlBundle {
    title: String,
    main_content: Vec<Node>,
    main_styles: Vec<&'static str>,
    body_styles: Vec<&'static str>,
    modals: Vec<Modal>,
    toasts: Vec<ToastMessage>,
    footer_scripts: Vec<String>,
}

impl HtmlBundle {
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn main_content(mut self, content: impl Into<Node>) -> Self {
        self.main_content.push(content.into());
        self
    }

    pub fn main_styles(mut self, styles: &[&'static str]) -> Self {
        self.main_styles.extend_from_slice(styles);
        self
    }

    pub fn body_styles(mut self, styles: &[&'static str]) -> Self {
        self.body_styles.extend_from_slice(styles);
        self
    }

    pub fn modals(mut self, modals: impl IntoIterator<Item = Modal>) -> Self {
        self.modals.extend(modals);
        self
    }

    pub fn toast(mut self, toast: ToastMessage) -> Self {
        self.toasts.push(toast);
        self
    }

    pub fn footer_script(mut self, src: impl Into<String>) -> Self {
        self.footer_scripts.push(src.into());
        self
    }
}

/// Wraps bundles in the shared page chrome.
#[derive(Debug, Clone)]
pub struct BaseHtmlLayout {
    stylesheet: String,
}

impl Default for BaseHtmlLayout {
    fn default() -> Self {
        Self {
            stylesheet: "/assets/stylesheets/civiform.css".to_string(),
        }
    }
}

impl BaseHtmlLayout {
    pub fn new(stylesheet: impl Into<String>) -> Self {
        Self {
            stylesheet: stylesheet.into(),
        }
    }

    pub fn bundle(&self) -> HtmlBundle {
        HtmlBundle::default()
            .body_styles(&[components::BODY])
            .main_styles(&[components::MAIN])
    }

    /// Image served from the local asset directory.
    pub fn local_image(&self, name: &str) -> Element {
        img().attr("src", format!("{}/{name}.png", routes::LOCAL_IMAGE_ROOT))
    }

    pub fn render(&self, bundle: HtmlBundle) -> Document {
        let head = element("head")
            .child(element("meta").attr("charset", "utf-8"))
            .child(
                element("meta")
                    .attr("name", "viewport")
                    .attr("content", "width=device-width, initial-scale=1"),
            )
            .child(element("title").text(bundle.title))
            .child(
                element("link")
                    .attr("rel", "stylesheet")
                    .attr("href", self.stylesheet.clone()),
            );

        let toasts = (!bundle.toasts.is_empty()).then(|| {
            div()
                .id("toast-container")
                .children(bundle.toasts.iter().map(ToastMessage::render))
        });

        let body = element("body")
            .classes(&bundle.body_styles)
            .maybe_child(toasts)
            .child(
                element("main")
                    .classes(&bundle.main_styles)
                    .children(bundle.main_content),
            )
            .child(
                div()
                    .id("modal-container")
                    .children(bundle.modals.iter().map(Modal::render)),
            )
            .children(
                bundle
                    .footer_scripts
                    .into_iter()
                    .map(|src| element("script").attr("src", src).attr("type", "text/javascript")),
            );

        Document::new(element("html").attr("lang", "en").child(head).child(body))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::html::node::p_text;

    #[test]
    fn renders_title_modals_and_scripts() {
        let layout = BaseHtmlLayout::default();
        let bundle = layout
            .bundle()
            .title("Login")
            .main_content(p_text("hello"))
            .modals([Modal::new("m1", p_text("modal body"))])
            .toast(ToastMessage::success("Saved"))
            .footer_script("/assets/app.js");

        let document = layout.render(bundle);
        let root = document.root();
        assert_eq!(
            root.find(|element| element.tag == "title")
                .map(Element::text_content),
            Some("Login".to_string())
        );
        assert!(root.find_by_id("m1").is_some());
        assert!(root.find_by_id("toast-container").is_some());
        assert_eq!(
            root.find(|element| element.tag == "script")
                .and_then(|script| script.get_attr("src")),
            Some("/assets/app.js")
        );
        assert!(document.to_html().starts_with("<!DOCTYPE html><html lang=\"en\">"));
    }
}
