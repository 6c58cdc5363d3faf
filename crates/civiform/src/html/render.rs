use std::fmt::Write as _;

use super::node::{Element, Node};

const VOID_ELEMENTS: [&str; 6] = ["br", "hr", "img", "input", "link", "meta"];

/// Fully rendered page: the root `<html>` element plus its serialized form.
#[derive(Debug, Clone)]
pub struct Document {
    root: Element,
}

impl Document {
    pub fn new(root: Element) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &Element {
        &self.root
    }

    pub fn to_html(&self) -> String {
        let mut html = String::from("<!DOCTYPE html>");
        write_element(&mut html, &self.root);
        html
    }
}

pub fn render_node(node: &Node) -> String {
    let mut html = String::new();
    write_node(&mut html, node);
    html
}

fn write_node(html: &mut String, node: &Node) {
    match node {
        Node::Text(text) => html.push_str(&escape_html(text)),
        Node::Element(element) => write_element(html, element),
    }
}

fn write_element(html: &mut String, element: &Element) {
    html.push('<');
    html.push_str(element.tag);
    for attr in &element.attrs {
        match &attr.value {
            // Writing into a String never fails.
            Some(value) => {
                let _ = write!(html, " {}=\"{}\"", attr.name, escape_html(value));
            }
            None => {
                let _ = write!(html, " {}", attr.name);
            }
        }
    }
    html.push('>');

    if VOID_ELEMENTS.contains(&element.tag) {
        return;
    }

    if element.tag == "script" {
        // Script bodies are never user supplied; keep them verbatim.
        for child in &element.children {
            if let Node::Text(source) = child {
                html.push_str(source);
            }
        }
    } else {
        for child in &element.children {
            write_node(html, child);
        }
    }

    let _ = write!(html, "</{}>", element.tag);
}

pub fn escape_html(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    escaped
}
